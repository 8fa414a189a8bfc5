use focus_config::WatcherSettings;

/// Watcher cadence, fixed when the watcher starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatcherConfig {
    /// How often the active session is re-read.
    pub poll_interval: std::time::Duration,
    /// Gap between routine "still on track?" reminders.
    pub reminder_interval: chrono::Duration,
}

impl WatcherConfig {
    pub fn from_settings(settings: &WatcherSettings) -> Self {
        Self {
            poll_interval: settings.poll_interval(),
            reminder_interval: chrono::Duration::minutes(settings.reminder_interval_mins as i64),
        }
    }
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self::from_settings(&WatcherSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WatcherConfig::default();
        assert_eq!(config.poll_interval, std::time::Duration::from_secs(30));
        assert_eq!(config.reminder_interval, chrono::Duration::minutes(25));
    }

    #[test]
    fn test_from_settings() {
        let settings = WatcherSettings {
            poll_interval_secs: 5,
            reminder_interval_mins: 50,
        };
        let config = WatcherConfig::from_settings(&settings);
        assert_eq!(config.poll_interval, std::time::Duration::from_secs(5));
        assert_eq!(config.reminder_interval, chrono::Duration::minutes(50));
    }
}
