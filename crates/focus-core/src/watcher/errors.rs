use crate::daemon::DaemonError;
use crate::errors::FocusError;

#[derive(Debug, thiserror::Error)]
pub enum WatcherError {
    #[error("Failed to register watcher: {source}")]
    Registration {
        #[from]
        source: DaemonError,
    },

    #[error("Failed to install signal handlers: {source}")]
    SignalSetup {
        #[from]
        source: std::io::Error,
    },
}

impl FocusError for WatcherError {
    fn error_code(&self) -> &'static str {
        match self {
            WatcherError::Registration { .. } => "WATCHER_REGISTRATION_FAILED",
            WatcherError::SignalSetup { .. } => "WATCHER_SIGNAL_SETUP_FAILED",
        }
    }
}
