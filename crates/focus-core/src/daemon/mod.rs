//! Watcher process lifecycle.
//!
//! The watcher records its pid in `.focus/daemon.pid`. Foreground commands
//! use [`DaemonController`] to probe liveness and send SIGTERM. Liveness is
//! advisory: a stale or unreadable record reads as "not running".

pub mod controller;
pub mod errors;
mod pid;
pub mod spawn;

pub use controller::{DaemonController, PidGuard};
pub use errors::DaemonError;
pub use spawn::{WATCH_SUBCOMMAND, spawn_watcher};
