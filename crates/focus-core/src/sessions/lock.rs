use std::fs::{File, OpenOptions};
use std::path::Path;

use nix::fcntl::{Flock, FlockArg};
use tracing::debug;

use super::errors::SessionError;

/// Exclusive advisory lock over the active-session pointer.
///
/// Held for the read-then-write of `activate` and for pointer-updating
/// saves, across every focus process touching the same `.focus/` dir.
/// Released on drop.
pub(super) struct StoreLock {
    _flock: Flock<File>,
}

impl StoreLock {
    pub(super) fn acquire(path: &Path) -> Result<Self, SessionError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(path)?;

        let flock = Flock::lock(file, FlockArg::LockExclusive).map_err(|(_, errno)| {
            SessionError::LockFailed {
                message: format!("{}: {}", path.display(), errno),
            }
        })?;

        debug!(event = "core.session.store_lock_acquired", path = %path.display());
        Ok(Self { _flock: flock })
    }
}
