use chrono::{DateTime, Utc};

use super::errors::GitError;

/// Branch operations the session lifecycle depends on.
pub trait VersionControl {
    /// Whether the working directory is inside a repository.
    fn is_repository(&self) -> bool;

    /// Create and check out a branch for `task`, returning its name.
    fn create_branch(&self, task: &str) -> Result<String, GitError>;

    /// Number of commits on HEAD made at or after `since`.
    fn commits_since(&self, since: DateTime<Utc>) -> Result<usize, GitError>;

    fn current_branch(&self) -> Result<String, GitError>;

    fn switch_branch(&self, branch: &str) -> Result<(), GitError>;

    /// Merge `branch` into the base branch and delete it.
    fn merge_to_main(&self, branch: &str, task: &str) -> Result<(), GitError>;

    /// Check out the base branch and force-delete `branch`.
    fn delete_branch(&self, branch: &str) -> Result<(), GitError>;
}
