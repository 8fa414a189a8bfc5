//! Alert timing, independent of clocks and I/O.

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::sessions::{Session, SessionId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alert {
    /// Elapsed time reached the timebox. Fires once per session.
    Expired { task: String, timebox: String },
    /// Routine check-in.
    Reminder { task: String },
}

impl Alert {
    pub fn title(&self) -> &'static str {
        match self {
            Alert::Expired { .. } => "Focus Timebox Expired!",
            Alert::Reminder { .. } => "Focus Check",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Alert::Expired { task, timebox } => format!(
                "Your {} timebox for '{}' has ended. Run 'focus check' or 'focus end'",
                timebox, task
            ),
            Alert::Reminder { task } => {
                format!("Still working on: {}? Run 'focus check'", task)
            }
        }
    }

    pub fn is_urgent(&self) -> bool {
        matches!(self, Alert::Expired { .. })
    }
}

/// Decides which alert, if any, a poll cycle should raise.
///
/// State is in memory only: a restarted watcher re-arms the expiry alert
/// and restarts the reminder clock. Switching to a different session id
/// does the same.
#[derive(Debug)]
pub struct AlertTracker {
    reminder_interval: Duration,
    last_reminder: DateTime<Utc>,
    expiry_fired: bool,
    session_id: Option<SessionId>,
}

impl AlertTracker {
    /// `started_at` is the origin of the reminder clock.
    pub fn new(reminder_interval: Duration, started_at: DateTime<Utc>) -> Self {
        Self {
            reminder_interval,
            last_reminder: started_at,
            expiry_fired: false,
            session_id: None,
        }
    }

    pub fn expiry_fired(&self) -> bool {
        self.expiry_fired
    }

    /// Evaluate one poll cycle at `now`.
    ///
    /// Expiry wins over a reminder in the same cycle; once expiry has
    /// fired no further reminders are raised. An unparseable timebox skips
    /// the cycle.
    pub fn evaluate(&mut self, session: &Session, now: DateTime<Utc>) -> Option<Alert> {
        if self.session_id.as_ref() != Some(&session.id) {
            if self.session_id.is_some() {
                debug!(event = "core.watcher.session_changed", session_id = %session.id);
                self.expiry_fired = false;
                self.last_reminder = now;
            }
            self.session_id = Some(session.id.clone());
        }

        let timebox = match session.parsed_timebox() {
            Ok(timebox) => timebox.duration(),
            Err(e) => {
                debug!(
                    event = "core.watcher.cycle_skipped",
                    session_id = %session.id,
                    error = %e
                );
                return None;
            }
        };

        if self.expiry_fired {
            return None;
        }

        if session.elapsed(now) >= timebox {
            self.expiry_fired = true;
            return Some(Alert::Expired {
                task: session.task.clone(),
                timebox: session.timebox.clone(),
            });
        }

        if now - self.last_reminder >= self.reminder_interval {
            self.last_reminder = now;
            return Some(Alert::Reminder {
                task: session.task.clone(),
            });
        }

        None
    }
}
