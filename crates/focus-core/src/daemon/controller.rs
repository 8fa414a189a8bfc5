use nix::errno::Errno;
use nix::sys::signal::{Signal, kill};
use nix::unistd::Pid;
use tracing::{debug, info, warn};

use super::errors::DaemonError;
use super::pid::{read_pid, remove_pid, write_pid};
use crate::paths::FocusPaths;

/// Discovers and stops the watcher through its pid file.
#[derive(Debug, Clone)]
pub struct DaemonController {
    paths: FocusPaths,
}

impl DaemonController {
    pub fn new(paths: FocusPaths) -> Self {
        Self { paths }
    }

    /// Record the current process as the watcher.
    ///
    /// The returned guard deregisters on drop, so every exit path of the
    /// watcher loop cleans up.
    pub fn register_self(&self) -> Result<PidGuard, DaemonError> {
        let path = self.paths.pid_file();
        let pid = std::process::id();
        write_pid(&path, pid).map_err(|source| DaemonError::PidFileWrite {
            path: path.clone(),
            source,
        })?;

        info!(event = "core.daemon.registered", pid = pid);
        Ok(PidGuard {
            controller: self.clone(),
            pid,
        })
    }

    /// Remove the recorded pid.
    pub fn deregister(&self) -> Result<(), DaemonError> {
        remove_pid(&self.paths.pid_file())?;
        info!(event = "core.daemon.deregistered");
        Ok(())
    }

    pub fn recorded_pid(&self) -> Option<i32> {
        read_pid(&self.paths.pid_file())
    }

    /// Whether the recorded process is alive. Any failure reads as `false`.
    pub fn is_running(&self) -> bool {
        let Some(pid) = self.recorded_pid() else {
            return false;
        };
        match kill(Pid::from_raw(pid), None) {
            Ok(()) => true,
            // Alive but owned by someone else.
            Err(Errno::EPERM) => true,
            Err(e) => {
                debug!(event = "core.daemon.probe_dead", pid = pid, error = %e);
                false
            }
        }
    }

    /// Send SIGTERM to the recorded watcher and remove the record.
    ///
    /// Returns once the signal is sent; the watcher may still be exiting.
    /// A record naming a dead process is cleaned up and reported as
    /// `NotRunning`.
    pub fn stop(&self) -> Result<i32, DaemonError> {
        let pid = self.recorded_pid().ok_or(DaemonError::NotRunning)?;
        info!(event = "core.daemon.stop_started", pid = pid);

        match kill(Pid::from_raw(pid), Signal::SIGTERM) {
            Ok(()) => {}
            Err(Errno::ESRCH) => {
                warn!(event = "core.daemon.stale_pid_removed", pid = pid);
                self.deregister()?;
                return Err(DaemonError::NotRunning);
            }
            Err(e) => {
                return Err(DaemonError::SignalFailed {
                    pid,
                    message: e.to_string(),
                });
            }
        }

        self.deregister()?;
        info!(event = "core.daemon.stop_completed", pid = pid);
        Ok(pid)
    }
}

/// Deregisters the watcher when dropped.
///
/// Only removes the pid file while it still names this process, so a
/// newer watcher's record survives.
#[derive(Debug)]
pub struct PidGuard {
    controller: DaemonController,
    pid: u32,
}

impl Drop for PidGuard {
    fn drop(&mut self) {
        let recorded = self.controller.recorded_pid();
        if recorded.map(|p| p as u32) != Some(self.pid) {
            debug!(
                event = "core.daemon.deregister_skipped",
                pid = self.pid,
                recorded = ?recorded
            );
            return;
        }
        if let Err(e) = self.controller.deregister() {
            warn!(event = "core.daemon.deregister_failed", error = %e);
        }
    }
}
