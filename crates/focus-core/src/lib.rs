//! Core library for `focus`.
//!
//! A session binds a goal to a git branch and a timebox. The session store
//! persists sessions under `.focus/`, the state machine keeps at most one of
//! them active, and a detached watcher process polls the active session and
//! raises desktop notifications when the timebox expires or a check-in is due.

mod atomic;
pub mod daemon;
pub mod errors;
pub mod escape;
pub mod events;
pub mod git;
pub mod logging;
pub mod notify;
pub mod paths;
pub mod sessions;
pub mod timebox;
pub mod watcher;

pub use errors::{FocusError, FocusResult};
pub use logging::{init_file_logging, init_logging};
pub use paths::FocusPaths;
pub use timebox::{Timebox, TimeboxError, format_elapsed};

pub use daemon::{DaemonController, DaemonError};
pub use sessions::{
    Drift, Session, SessionError, SessionId, SessionListing, SessionStatus, SessionStore,
    SessionSummary, lifecycle as session_ops,
};
pub use watcher::{AlertTracker, WatcherConfig, run_watcher};

pub use focus_config::{ConfigError, FocusConfig};
