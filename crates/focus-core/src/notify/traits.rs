//! Notification backend trait definition.

use crate::notify::errors::NotifyError;

/// How insistently a notification should grab attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Normal,
    /// Timebox expiry. Backends add a sound or raise the urgency level.
    Critical,
}

/// Interface for platform notification backends.
///
/// Each supported platform (macOS, Linux) implements this trait
/// to provide platform-specific desktop notification delivery.
pub trait NotificationBackend: Send + Sync {
    /// The canonical name of this backend (e.g., "macos", "linux").
    fn name(&self) -> &'static str;

    /// Check if this notification backend is available on the system.
    fn is_available(&self) -> bool;

    fn send(&self, title: &str, message: &str, urgency: Urgency) -> Result<(), NotifyError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct RecordingBackend {
        available: bool,
        sent: Mutex<Vec<(String, Urgency)>>,
    }

    impl NotificationBackend for RecordingBackend {
        fn name(&self) -> &'static str {
            "recording"
        }

        fn is_available(&self) -> bool {
            self.available
        }

        fn send(&self, title: &str, _message: &str, urgency: Urgency) -> Result<(), NotifyError> {
            if !self.available {
                return Err(NotifyError::ToolNotFound {
                    tool: "recording".to_string(),
                });
            }
            self.sent
                .lock()
                .unwrap()
                .push((title.to_string(), urgency));
            Ok(())
        }
    }

    #[test]
    fn recording_backend_keeps_urgency() {
        let backend = RecordingBackend {
            available: true,
            sent: Mutex::new(Vec::new()),
        };
        backend.send("Focus Check", "msg", Urgency::Normal).unwrap();
        backend
            .send("Focus Timebox Expired!", "msg", Urgency::Critical)
            .unwrap();

        let sent = backend.sent.lock().unwrap();
        assert_eq!(sent[0], ("Focus Check".to_string(), Urgency::Normal));
        assert_eq!(
            sent[1],
            ("Focus Timebox Expired!".to_string(), Urgency::Critical)
        );
    }

    #[test]
    fn unavailable_backend_errors() {
        let backend = RecordingBackend {
            available: false,
            sent: Mutex::new(Vec::new()),
        };
        assert!(!backend.is_available());
        assert!(backend.send("Test", "Hello", Urgency::Normal).is_err());
    }
}
