use serde::{Deserialize, Serialize};

/// Top-level configuration, one struct per TOML table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FocusConfig {
    pub session: SessionSettings,
    pub watcher: WatcherSettings,
    pub notifications: NotificationSettings,
}

/// `[session]`: defaults for new sessions and their branches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    /// Timebox used when `focus start` gets no `--time`.
    pub default_timebox: String,
    /// Prefix for branches created by `focus start`.
    pub branch_prefix: String,
    /// Branch that completed sessions merge into. `master` is tried when
    /// this branch does not exist.
    pub base_branch: String,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            default_timebox: "3h".to_string(),
            branch_prefix: "focus/".to_string(),
            base_branch: "main".to_string(),
        }
    }
}

/// `[watcher]`: cadence of the background watcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatcherSettings {
    pub poll_interval_secs: u64,
    pub reminder_interval_mins: u64,
}

impl Default for WatcherSettings {
    fn default() -> Self {
        Self {
            poll_interval_secs: 30,
            reminder_interval_mins: 25,
        }
    }
}

impl WatcherSettings {
    pub fn poll_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.poll_interval_secs)
    }
}

/// `[notifications]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    pub enabled: bool,
    /// macOS sound played with urgent notifications.
    pub urgent_sound: String,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            urgent_sound: "Crystal".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FocusConfig::default();
        assert_eq!(config.session.default_timebox, "3h");
        assert_eq!(config.session.branch_prefix, "focus/");
        assert_eq!(config.watcher.poll_interval(), std::time::Duration::from_secs(30));
        assert_eq!(config.watcher.reminder_interval_mins, 25);
        assert!(config.notifications.enabled);
    }

    #[test]
    fn test_partial_table_keeps_other_defaults() {
        let config: FocusConfig = toml::from_str("[watcher]\npoll_interval_secs = 5\n").unwrap();
        assert_eq!(config.watcher.poll_interval_secs, 5);
        assert_eq!(config.watcher.reminder_interval_mins, 25);
        assert_eq!(config.session, SessionSettings::default());
    }
}
