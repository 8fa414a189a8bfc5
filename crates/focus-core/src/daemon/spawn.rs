//! Detached watcher launch.

use std::process::{Command, Stdio};

use tracing::info;

use super::errors::DaemonError;
use crate::paths::{FOCUS_DIR_ENV, FocusPaths};

/// Hidden CLI subcommand that runs the watcher loop in the foreground.
pub const WATCH_SUBCOMMAND: &str = "watch";

/// Re-exec the current binary as a detached watcher.
///
/// The child gets null stdio and its own process group so it outlives the
/// terminal that started it. `$FOCUS_DIR` pins it to the same data
/// directory regardless of working directory. Returns the child pid.
pub fn spawn_watcher(paths: &FocusPaths) -> Result<u32, DaemonError> {
    let exe = std::env::current_exe().map_err(|source| DaemonError::SpawnFailed { source })?;

    let mut command = Command::new(&exe);
    command
        .arg(WATCH_SUBCOMMAND)
        .env(FOCUS_DIR_ENV, paths.root())
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        command.process_group(0);
    }

    let child = command
        .spawn()
        .map_err(|source| DaemonError::SpawnFailed { source })?;

    info!(
        event = "core.daemon.spawn_completed",
        pid = child.id(),
        exe = %exe.display()
    );
    Ok(child.id())
}
