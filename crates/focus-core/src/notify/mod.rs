//! Platform-native desktop notification dispatch.
//!
//! Best-effort: the watcher hands alerts to a [`Notifier`], and
//! [`DesktopNotifier`] logs delivery failures instead of returning them.

pub mod backends;
pub mod errors;
pub mod registry;
pub mod traits;

pub use errors::NotifyError;
pub use registry::NotificationRegistry;
pub use traits::{NotificationBackend, Urgency};

use focus_config::NotificationSettings;
use tracing::{debug, info, warn};

/// Notification sink used by the watcher.
pub trait Notifier: Send + Sync {
    fn notify(&self, title: &str, message: &str);

    fn notify_urgent(&self, title: &str, message: &str);
}

/// Sends through the first available platform backend.
pub struct DesktopNotifier {
    enabled: bool,
    registry: NotificationRegistry,
}

impl DesktopNotifier {
    pub fn new(settings: &NotificationSettings) -> Self {
        Self::with_registry(
            settings.enabled,
            NotificationRegistry::new(&settings.urgent_sound),
        )
    }

    pub fn with_registry(enabled: bool, registry: NotificationRegistry) -> Self {
        Self { enabled, registry }
    }

    fn dispatch(&self, title: &str, message: &str, urgency: Urgency) {
        if !self.enabled {
            debug!(
                event = "core.notify.send_skipped",
                reason = "notifications disabled",
            );
            return;
        }

        let Some(backend) = self.registry.detect() else {
            debug!(
                event = "core.notify.send_skipped",
                reason = "no backend available",
            );
            return;
        };

        info!(
            event = "core.notify.send_started",
            backend = backend.name(),
            title = title,
            urgency = ?urgency,
        );

        match backend.send(title, message, urgency) {
            Ok(()) => info!(event = "core.notify.send_completed", title = title),
            Err(e) => warn!(
                event = "core.notify.send_failed",
                backend = backend.name(),
                title = title,
                error = %e,
            ),
        }
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, title: &str, message: &str) {
        self.dispatch(title, message, Urgency::Normal);
    }

    fn notify_urgent(&self, title: &str, message: &str) {
        self.dispatch(title, message, Urgency::Critical);
    }
}
