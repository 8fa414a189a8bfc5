//! PID file helpers.

use std::path::Path;

use tracing::debug;

use crate::atomic::write_atomic;

/// Read a recorded pid. Missing, unreadable or non-positive values yield
/// `None`; `kill(0)` or a negative pid would address a process group.
pub(super) fn read_pid(path: &Path) -> Option<i32> {
    let content = std::fs::read_to_string(path).ok()?;
    match content.trim().parse::<i32>() {
        Ok(pid) if pid > 0 => Some(pid),
        Ok(pid) => {
            debug!(event = "core.daemon.pid_invalid", pid = pid);
            None
        }
        Err(e) => {
            debug!(
                event = "core.daemon.pid_parse_failed",
                path = %path.display(),
                error = %e
            );
            None
        }
    }
}

pub(super) fn write_pid(path: &Path, pid: u32) -> std::io::Result<()> {
    write_atomic(path, pid.to_string().as_bytes())
}

/// Remove the pid file. A missing file is not an error.
pub(super) fn remove_pid(path: &Path) -> std::io::Result<()> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}
