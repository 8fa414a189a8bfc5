//! Session state machine.
//!
//! ```text
//! (none) --start--> active --pause--> paused --resume--> active
//! active/paused --complete (merge)--> deleted
//! active/paused --abandon (delete branch)--> deleted
//! active --drift--> active (drift appended)
//! ```
//!
//! Branch operations run first; a failing branch step leaves the stored
//! session untouched.

use chrono::{DateTime, Duration, Utc};
use tracing::{error, info, warn};

use super::errors::SessionError;
use super::store::SessionStore;
use super::types::{Session, SessionStatus};
use crate::git::VersionControl;
use crate::timebox::Timebox;

/// Create a session for `task` on a fresh branch and make it active.
pub fn start_session(
    store: &SessionStore,
    vcs: &dyn VersionControl,
    task: &str,
    timebox: &str,
) -> Result<Session, SessionError> {
    let task = task.trim();
    info!(event = "core.session.create_started", task = task, timebox = timebox);

    if task.is_empty() {
        return Err(SessionError::EmptyTask);
    }
    if let Some(active) = store.active_session() {
        return Err(SessionError::AlreadyActive { id: active.id });
    }
    let timebox = Timebox::parse(timebox)?;
    if !vcs.is_repository() {
        return Err(SessionError::NotInRepository);
    }

    let branch = vcs.create_branch(task)?;
    let mut session = Session::new(task, timebox.as_str(), branch, Utc::now());
    store.activate(&mut session)?;

    info!(
        event = "core.session.create_completed",
        session_id = %session.id,
        branch = %session.branch
    );
    Ok(session)
}

/// Log a drift on the active session.
pub fn record_drift(
    store: &SessionStore,
    session: &mut Session,
    description: &str,
    reason: Option<String>,
) -> Result<(), SessionError> {
    if session.status != SessionStatus::Active {
        return Err(SessionError::NotActive {
            id: session.id.clone(),
        });
    }
    let description = description.trim();
    if description.is_empty() {
        return Err(SessionError::EmptyDrift);
    }

    session.add_drift(description, reason, Utc::now());
    store.save(session)?;

    info!(
        event = "core.session.drift_recorded",
        session_id = %session.id,
        drift_count = session.drifts().len()
    );
    Ok(())
}

/// Pause the session so it can be resumed later.
pub fn pause_session(store: &SessionStore, session: &mut Session) -> Result<(), SessionError> {
    store.pause(session)?;
    info!(event = "core.session.pause_completed", session_id = %session.id);
    Ok(())
}

/// Switch to the session's branch and make it the active session,
/// demoting whichever session was active before.
pub fn resume_session(
    store: &SessionStore,
    vcs: &dyn VersionControl,
    session: &mut Session,
) -> Result<(), SessionError> {
    info!(event = "core.session.resume_started", session_id = %session.id);

    let current = vcs.current_branch()?;
    if current != session.branch {
        vcs.switch_branch(&session.branch)?;
    }
    store.activate(session)?;

    info!(
        event = "core.session.resume_completed",
        session_id = %session.id,
        branch = %session.branch
    );
    Ok(())
}

/// Merge the session branch into the base branch, then delete the session.
pub fn complete_session(
    store: &SessionStore,
    vcs: &dyn VersionControl,
    session: &Session,
) -> Result<(), SessionError> {
    info!(event = "core.session.complete_started", session_id = %session.id);

    if let Err(e) = vcs.merge_to_main(&session.branch, &session.task) {
        error!(
            event = "core.session.complete_failed",
            session_id = %session.id,
            error = %e
        );
        return Err(e.into());
    }
    finish(store, session)?;

    info!(event = "core.session.complete_completed", session_id = %session.id);
    Ok(())
}

/// Throw away the session branch, then delete the session.
pub fn abandon_session(
    store: &SessionStore,
    vcs: &dyn VersionControl,
    session: &Session,
) -> Result<(), SessionError> {
    info!(event = "core.session.abandon_started", session_id = %session.id);

    if let Err(e) = vcs.delete_branch(&session.branch) {
        error!(
            event = "core.session.abandon_failed",
            session_id = %session.id,
            error = %e
        );
        return Err(e.into());
    }
    finish(store, session)?;

    info!(event = "core.session.abandon_completed", session_id = %session.id);
    Ok(())
}

fn finish(store: &SessionStore, session: &Session) -> Result<(), SessionError> {
    store.clear_active_if(&session.id)?;
    store.delete(session)
}

/// Progress snapshot for `focus status`.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub elapsed: Duration,
    /// `None` when the stored timebox does not parse.
    pub timebox: Option<Duration>,
    pub commits: usize,
    pub drift_count: usize,
}

impl SessionSummary {
    /// Time left in the timebox; negative once it is overrun.
    pub fn remaining(&self) -> Option<Duration> {
        self.timebox.map(|t| t - self.elapsed)
    }

    pub fn is_expired(&self) -> bool {
        self.remaining().is_some_and(|r| r <= Duration::zero())
    }
}

/// Summarize a session. A failing commit count is reported as zero.
pub fn summarize(
    session: &Session,
    vcs: &dyn VersionControl,
    now: DateTime<Utc>,
) -> SessionSummary {
    let commits = vcs.commits_since(session.start_time).unwrap_or_else(|e| {
        warn!(
            event = "core.session.commit_count_failed",
            session_id = %session.id,
            error = %e
        );
        0
    });

    SessionSummary {
        elapsed: session.elapsed(now),
        timebox: session.parsed_timebox().ok().map(|t| t.duration()),
        commits,
        drift_count: session.drifts().len(),
    }
}
