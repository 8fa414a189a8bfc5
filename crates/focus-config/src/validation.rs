use crate::errors::ConfigError;
use crate::types::FocusConfig;

/// Reject values the watcher or session flows cannot work with.
///
/// The default timebox is only checked for being non-empty here; its
/// duration syntax is owned by `focus-core` and checked when a session
/// starts.
pub fn validate_config(config: &FocusConfig) -> Result<(), ConfigError> {
    if config.watcher.poll_interval_secs == 0 {
        return Err(invalid("watcher.poll_interval_secs must be greater than 0"));
    }
    if config.watcher.reminder_interval_mins == 0 {
        return Err(invalid(
            "watcher.reminder_interval_mins must be greater than 0",
        ));
    }
    if config.session.branch_prefix.trim().is_empty() {
        return Err(invalid("session.branch_prefix must not be empty"));
    }
    if config.session.base_branch.trim().is_empty() {
        return Err(invalid("session.base_branch must not be empty"));
    }
    if config.session.default_timebox.trim().is_empty() {
        return Err(invalid("session.default_timebox must not be empty"));
    }
    Ok(())
}

fn invalid(message: &str) -> ConfigError {
    ConfigError::InvalidConfiguration {
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&FocusConfig::default()).is_ok());
    }

    #[test]
    fn test_zero_reminder_interval_rejected() {
        let mut config = FocusConfig::default();
        config.watcher.reminder_interval_mins = 0;
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("reminder_interval_mins"));
    }

    #[test]
    fn test_blank_prefix_rejected() {
        let mut config = FocusConfig::default();
        config.session.branch_prefix = "  ".to_string();
        assert!(validate_config(&config).is_err());
    }
}
