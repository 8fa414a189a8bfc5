//! Notification backend implementations.

mod linux;
mod macos;

pub use linux::LinuxNotificationBackend;
pub use macos::MacOsNotificationBackend;

use super::errors::NotifyError;

fn run_tool(mut command: std::process::Command, tool: &str) -> Result<(), NotifyError> {
    let output = command.output().map_err(|e| NotifyError::SendFailed {
        message: format!("{} exec failed: {}", tool, e),
    })?;

    if output.status.success() {
        Ok(())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(NotifyError::SendFailed {
            message: format!("{} exit {}: {}", tool, output.status, stderr.trim()),
        })
    }
}
