//! macOS notification backend using osascript (Notification Center).

use super::run_tool;
use crate::escape::applescript_escape;
use crate::notify::errors::NotifyError;
use crate::notify::traits::{NotificationBackend, Urgency};

pub struct MacOsNotificationBackend {
    urgent_sound: String,
}

impl MacOsNotificationBackend {
    pub fn new(urgent_sound: &str) -> Self {
        Self {
            urgent_sound: urgent_sound.to_string(),
        }
    }

    fn script(&self, title: &str, message: &str, urgency: Urgency) -> String {
        let mut script = format!(
            r#"display notification "{}" with title "{}""#,
            applescript_escape(message),
            applescript_escape(title)
        );
        if urgency == Urgency::Critical && !self.urgent_sound.is_empty() {
            script.push_str(&format!(
                r#" sound name "{}""#,
                applescript_escape(&self.urgent_sound)
            ));
        }
        script
    }
}

impl NotificationBackend for MacOsNotificationBackend {
    fn name(&self) -> &'static str {
        "macos"
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "macos")
    }

    fn send(&self, title: &str, message: &str, urgency: Urgency) -> Result<(), NotifyError> {
        let mut command = std::process::Command::new("osascript");
        command.arg("-e").arg(self.script(title, message, urgency));
        run_tool(command, "osascript")
    }
}
