//! Backend registry.

use super::backends::{LinuxNotificationBackend, MacOsNotificationBackend};
use super::traits::NotificationBackend;

/// All supported backends, in detection order.
pub struct NotificationRegistry {
    backends: Vec<Box<dyn NotificationBackend>>,
}

impl NotificationRegistry {
    /// `urgent_sound` is the macOS sound played for critical notifications.
    pub fn new(urgent_sound: &str) -> Self {
        Self {
            backends: vec![
                Box::new(MacOsNotificationBackend::new(urgent_sound)),
                Box::new(LinuxNotificationBackend),
            ],
        }
    }

    /// A registry over an explicit backend list, checked in order.
    pub fn with_backends(backends: Vec<Box<dyn NotificationBackend>>) -> Self {
        Self { backends }
    }

    /// First backend available on this system, if any.
    pub fn detect(&self) -> Option<&dyn NotificationBackend> {
        self.backends
            .iter()
            .find(|b| b.is_available())
            .map(|b| b.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::errors::NotifyError;
    use crate::notify::traits::Urgency;

    #[test]
    fn registry_contains_expected_backends() {
        let registry = NotificationRegistry::new("Crystal");
        let names: Vec<&str> = registry.backends.iter().map(|b| b.name()).collect();
        assert_eq!(names, vec!["macos", "linux"]);
    }

    struct Stub(&'static str, bool);

    impl NotificationBackend for Stub {
        fn name(&self) -> &'static str {
            self.0
        }

        fn is_available(&self) -> bool {
            self.1
        }

        fn send(
            &self,
            _title: &str,
            _message: &str,
            _urgency: Urgency,
        ) -> Result<(), NotifyError> {
            Ok(())
        }
    }

    #[test]
    fn detect_skips_unavailable_backends() {
        let registry = NotificationRegistry::with_backends(vec![
            Box::new(Stub("first", false)),
            Box::new(Stub("second", true)),
            Box::new(Stub("third", true)),
        ]);
        assert_eq!(registry.detect().map(|b| b.name()), Some("second"));

        let empty = NotificationRegistry::with_backends(Vec::new());
        assert!(empty.detect().is_none());
    }

    #[test]
    fn detect_matches_platform() {
        let registry = NotificationRegistry::new("Crystal");
        if let Some(backend) = registry.detect() {
            assert!(backend.is_available());
        }
        if cfg!(target_os = "macos") {
            assert_eq!(registry.detect().map(|b| b.name()), Some("macos"));
        }
    }
}
