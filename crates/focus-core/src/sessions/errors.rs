use crate::errors::FocusError;
use crate::git::GitError;
use crate::sessions::types::SessionId;
use crate::timebox::TimeboxError;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("No active focus session. Run 'focus start' to begin")]
    NoActiveSession,

    #[error("Session '{id}' not found")]
    NotFound { id: String },

    #[error("Invalid session id '{id}'")]
    InvalidId { id: String },

    #[error("Already in a focus session ('{id}'). Run 'focus end' first or 'focus status' to see it")]
    AlreadyActive { id: SessionId },

    #[error("Session '{id}' is not active. Run 'focus resume' to continue it")]
    NotActive { id: SessionId },

    #[error("No paused sessions found")]
    NoPausedSessions,

    #[error("Task description cannot be empty")]
    EmptyTask,

    #[error("Drift description cannot be empty")]
    EmptyDrift,

    #[error("Not in a git repository. Focus requires git for branch tracking")]
    NotInRepository,

    #[error(transparent)]
    InvalidTimebox(#[from] TimeboxError),

    #[error("Git operation failed: {source}")]
    Git {
        #[from]
        source: GitError,
    },

    #[error("Failed to serialize session: {message}")]
    SerializeFailed { message: String },

    #[error("Failed to lock session store: {message}")]
    LockFailed { message: String },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl FocusError for SessionError {
    fn error_code(&self) -> &'static str {
        match self {
            SessionError::NoActiveSession => "SESSION_NO_ACTIVE",
            SessionError::NotFound { .. } => "SESSION_NOT_FOUND",
            SessionError::InvalidId { .. } => "SESSION_INVALID_ID",
            SessionError::AlreadyActive { .. } => "SESSION_ALREADY_ACTIVE",
            SessionError::NotActive { .. } => "SESSION_NOT_ACTIVE",
            SessionError::NoPausedSessions => "SESSION_NO_PAUSED",
            SessionError::EmptyTask => "SESSION_EMPTY_TASK",
            SessionError::EmptyDrift => "SESSION_EMPTY_DRIFT",
            SessionError::NotInRepository => "SESSION_NOT_IN_REPOSITORY",
            SessionError::InvalidTimebox(e) => e.error_code(),
            SessionError::Git { .. } => "SESSION_GIT_FAILED",
            SessionError::SerializeFailed { .. } => "SESSION_SERIALIZE_FAILED",
            SessionError::LockFailed { .. } => "SESSION_LOCK_FAILED",
            SessionError::IoError { .. } => "SESSION_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            SessionError::NoActiveSession
                | SessionError::NotFound { .. }
                | SessionError::InvalidId { .. }
                | SessionError::AlreadyActive { .. }
                | SessionError::NotActive { .. }
                | SessionError::NoPausedSessions
                | SessionError::EmptyTask
                | SessionError::EmptyDrift
                | SessionError::NotInRepository
                | SessionError::InvalidTimebox(_)
        )
    }
}
