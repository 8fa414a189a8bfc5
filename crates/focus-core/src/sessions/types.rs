use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::timebox::{Timebox, TimeboxError};

/// Stable identifier of a session, also its storage key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Build an id from the creation time and the first 8 characters of
    /// the task: `"1718000000-Fix-non"`.
    pub fn generate(task: &str, now: DateTime<Utc>) -> Self {
        let slug: String = task
            .chars()
            .take(8)
            .filter_map(|c| match c {
                c if c.is_ascii_alphanumeric() => Some(c),
                ' ' => Some('-'),
                _ => None,
            })
            .collect();
        Self(format!("{}-{}", now.timestamp(), slug))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for SessionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Stored status. Completed and abandoned sessions are deleted, not stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Active,
    Paused,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Active => "active",
            SessionStatus::Paused => "paused",
        }
    }
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A logged departure from the session goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drift {
    pub timestamp: DateTime<Utc>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    pub task: String,
    pub start_time: DateTime<Utc>,
    /// Timebox as typed by the user; parsed on demand.
    pub timebox: String,
    pub branch: String,
    pub status: SessionStatus,
    /// Append-only; only reachable mutably through `add_drift`.
    #[serde(default)]
    drifts: Vec<Drift>,
}

impl Session {
    /// Create a new active session with no drifts.
    pub fn new(
        task: impl Into<String>,
        timebox: impl Into<String>,
        branch: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        let task = task.into();
        Self {
            id: SessionId::generate(&task, now),
            task,
            start_time: now,
            timebox: timebox.into(),
            branch: branch.into(),
            status: SessionStatus::Active,
            drifts: Vec::new(),
        }
    }

    pub fn drifts(&self) -> &[Drift] {
        &self.drifts
    }

    /// Append a drift. A blank reason is stored as "no reason given".
    pub fn add_drift(
        &mut self,
        description: impl Into<String>,
        reason: Option<String>,
        at: DateTime<Utc>,
    ) {
        let reason = reason
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty());
        self.drifts.push(Drift {
            timestamp: at,
            description: description.into(),
            reason,
        });
    }

    pub fn is_active(&self) -> bool {
        self.status == SessionStatus::Active
    }

    pub fn elapsed(&self, now: DateTime<Utc>) -> Duration {
        now - self.start_time
    }

    pub fn parsed_timebox(&self) -> Result<Timebox, TimeboxError> {
        Timebox::parse(&self.timebox)
    }
}
