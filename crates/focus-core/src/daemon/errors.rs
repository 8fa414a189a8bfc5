use std::path::PathBuf;

use crate::errors::FocusError;

#[derive(Debug, thiserror::Error)]
pub enum DaemonError {
    #[error("Watcher daemon is not running")]
    NotRunning,

    #[error("Watcher already running (PID: {pid})")]
    AlreadyRunning { pid: i32 },

    #[error("Failed to write PID file '{}': {source}", path.display())]
    PidFileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to signal watcher (PID: {pid}): {message}")]
    SignalFailed { pid: i32, message: String },

    #[error("Failed to launch watcher: {source}")]
    SpawnFailed {
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl FocusError for DaemonError {
    fn error_code(&self) -> &'static str {
        match self {
            DaemonError::NotRunning => "DAEMON_NOT_RUNNING",
            DaemonError::AlreadyRunning { .. } => "DAEMON_ALREADY_RUNNING",
            DaemonError::PidFileWrite { .. } => "DAEMON_PID_FILE_WRITE_FAILED",
            DaemonError::SignalFailed { .. } => "DAEMON_SIGNAL_FAILED",
            DaemonError::SpawnFailed { .. } => "DAEMON_SPAWN_FAILED",
            DaemonError::IoError { .. } => "DAEMON_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            DaemonError::NotRunning | DaemonError::AlreadyRunning { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_running_is_user_error() {
        let error = DaemonError::NotRunning;
        assert_eq!(error.to_string(), "Watcher daemon is not running");
        assert_eq!(error.error_code(), "DAEMON_NOT_RUNNING");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_pid_file_write_display() {
        let error = DaemonError::PidFileWrite {
            path: PathBuf::from("/ro/.focus/daemon.pid"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(error.to_string().contains("/ro/.focus/daemon.pid"));
        assert!(!error.is_user_error());
    }
}
