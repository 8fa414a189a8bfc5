//! Background watcher.
//!
//! A single cooperative loop: every poll tick it re-reads the active
//! session, asks [`AlertTracker`] whether an alert is due and hands it to a
//! [`Notifier`](crate::notify::Notifier). The loop ends on SIGTERM/SIGINT
//! or when no active session remains.

pub mod alerts;
pub mod config;
pub mod errors;
pub mod runner;
pub mod shutdown;

pub use alerts::{Alert, AlertTracker};
pub use config::WatcherConfig;
pub use errors::WatcherError;
pub use runner::{PollOutcome, StopReason, poll_once, run_watcher};
pub use shutdown::ShutdownSignals;
