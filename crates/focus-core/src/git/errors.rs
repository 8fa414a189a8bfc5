use crate::errors::FocusError;

#[derive(Debug, thiserror::Error)]
pub enum GitError {
    #[error("Not in a git repository")]
    NotARepository,

    #[error("Git repository error: {message}")]
    Repository { message: String },

    #[error("'{command}' failed: {stderr}")]
    CommandFailed { command: String, stderr: String },

    #[error("Failed to run '{command}': {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("None of the base branches exist: {tried}")]
    BaseBranchMissing { tried: String },
}

impl From<git2::Error> for GitError {
    fn from(e: git2::Error) -> Self {
        GitError::Repository {
            message: e.message().to_string(),
        }
    }
}

impl FocusError for GitError {
    fn error_code(&self) -> &'static str {
        match self {
            GitError::NotARepository => "GIT_NOT_A_REPOSITORY",
            GitError::Repository { .. } => "GIT_REPOSITORY_ERROR",
            GitError::CommandFailed { .. } => "GIT_COMMAND_FAILED",
            GitError::CommandSpawn { .. } => "GIT_COMMAND_SPAWN_FAILED",
            GitError::BaseBranchMissing { .. } => "GIT_BASE_BRANCH_MISSING",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            GitError::NotARepository | GitError::BaseBranchMissing { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_failed_display() {
        let error = GitError::CommandFailed {
            command: "git checkout -b focus/x".to_string(),
            stderr: "already exists".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "'git checkout -b focus/x' failed: already exists"
        );
        assert_eq!(error.error_code(), "GIT_COMMAND_FAILED");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_from_git2_error() {
        let error = GitError::from(git2::Error::from_str("bad ref"));
        assert!(matches!(error, GitError::Repository { .. }));
        assert!(error.to_string().contains("bad ref"));
    }
}
