//! Linux notification backend using notify-send (libnotify).

use super::run_tool;
use crate::notify::errors::NotifyError;
use crate::notify::traits::{NotificationBackend, Urgency};

pub struct LinuxNotificationBackend;

impl LinuxNotificationBackend {
    fn args(title: &str, message: &str, urgency: Urgency) -> Vec<String> {
        let mut args = Vec::new();
        if urgency == Urgency::Critical {
            args.push("-u".to_string());
            args.push("critical".to_string());
        }
        args.push(title.to_string());
        args.push(message.to_string());
        args
    }
}

impl NotificationBackend for LinuxNotificationBackend {
    fn name(&self) -> &'static str {
        "linux"
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux") && which::which("notify-send").is_ok()
    }

    fn send(&self, title: &str, message: &str, urgency: Urgency) -> Result<(), NotifyError> {
        if which::which("notify-send").is_err() {
            return Err(NotifyError::ToolNotFound {
                tool: "notify-send".to_string(),
            });
        }
        let mut command = std::process::Command::new("notify-send");
        command.args(Self::args(title, message, urgency));
        run_tool(command, "notify-send")
    }
}
