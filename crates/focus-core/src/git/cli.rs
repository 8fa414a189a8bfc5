use std::path::{Path, PathBuf};
use std::process::Command;

use chrono::{DateTime, Utc};
use git2::Repository;
use tracing::{debug, info, warn};

use super::errors::GitError;
use super::naming::branch_name;
use super::traits::VersionControl;

const FALLBACK_BASE_BRANCH: &str = "master";

/// `VersionControl` over a local repository.
///
/// Queries go through `git2`; branch mutations shell out to `git` so they
/// run the user's hooks and respect their identity config.
#[derive(Debug, Clone)]
pub struct GitCli {
    repo_path: PathBuf,
    branch_prefix: String,
    base_branch: String,
}

impl GitCli {
    pub fn new(
        repo_path: impl Into<PathBuf>,
        branch_prefix: impl Into<String>,
        base_branch: impl Into<String>,
    ) -> Self {
        Self {
            repo_path: repo_path.into(),
            branch_prefix: branch_prefix.into(),
            base_branch: base_branch.into(),
        }
    }

    pub fn repo_path(&self) -> &Path {
        &self.repo_path
    }

    fn open(&self) -> Result<Repository, GitError> {
        Repository::discover(&self.repo_path).map_err(|_| GitError::NotARepository)
    }

    fn run_git(&self, args: &[&str]) -> Result<String, GitError> {
        let command = format!("git {}", args.join(" "));
        debug!(event = "core.git.command_started", command = %command);

        let output = Command::new("git")
            .current_dir(&self.repo_path)
            .args(args)
            .output()
            .map_err(|source| GitError::CommandSpawn {
                command: command.clone(),
                source,
            })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!(
                event = "core.git.command_failed",
                command = %command,
                stderr = %stderr
            );
            Err(GitError::CommandFailed { command, stderr })
        }
    }

    /// Check out the configured base branch, falling back to `master`.
    fn checkout_base(&self) -> Result<String, GitError> {
        let mut candidates = vec![self.base_branch.as_str()];
        if self.base_branch != FALLBACK_BASE_BRANCH {
            candidates.push(FALLBACK_BASE_BRANCH);
        }

        for candidate in &candidates {
            if self.run_git(&["checkout", candidate]).is_ok() {
                return Ok(candidate.to_string());
            }
        }

        Err(GitError::BaseBranchMissing {
            tried: candidates.join(", "),
        })
    }
}

impl VersionControl for GitCli {
    fn is_repository(&self) -> bool {
        self.open().is_ok()
    }

    fn create_branch(&self, task: &str) -> Result<String, GitError> {
        let branch = branch_name(&self.branch_prefix, task);

        self.run_git(&["checkout", "-b", &branch])?;
        let message = format!("🎯 START: {}", task);
        self.run_git(&["commit", "--allow-empty", "-m", &message])?;

        info!(event = "core.git.branch_created", branch = %branch);
        Ok(branch)
    }

    fn commits_since(&self, since: DateTime<Utc>) -> Result<usize, GitError> {
        let repo = self.open()?;
        let mut revwalk = repo.revwalk()?;
        revwalk.push_head()?;

        let cutoff = since.timestamp();
        let mut count = 0;
        for oid in revwalk {
            let commit = repo.find_commit(oid?)?;
            if commit.time().seconds() >= cutoff {
                count += 1;
            }
        }
        Ok(count)
    }

    fn current_branch(&self) -> Result<String, GitError> {
        let repo = self.open()?;
        let head = repo.head()?;
        head.shorthand()
            .map(str::to_string)
            .ok_or_else(|| GitError::Repository {
                message: "HEAD is not a valid UTF-8 branch name".to_string(),
            })
    }

    fn switch_branch(&self, branch: &str) -> Result<(), GitError> {
        self.run_git(&["switch", branch])?;
        info!(event = "core.git.branch_switched", branch = branch);
        Ok(())
    }

    fn merge_to_main(&self, branch: &str, task: &str) -> Result<(), GitError> {
        let base = self.checkout_base()?;

        let message = format!("✅ Completed: {}", task);
        self.run_git(&["merge", "--no-ff", branch, "-m", &message])?;
        self.run_git(&["branch", "-d", branch])?;

        info!(event = "core.git.branch_merged", branch = branch, base = %base);
        Ok(())
    }

    fn delete_branch(&self, branch: &str) -> Result<(), GitError> {
        let base = self.checkout_base()?;
        self.run_git(&["branch", "-D", branch])?;

        info!(event = "core.git.branch_deleted", branch = branch, base = %base);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::{Signature, Time};
    use tempfile::TempDir;

    fn repo_with_commits(times: &[i64]) -> TempDir {
        let dir = TempDir::new().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        let tree_id = repo.index().unwrap().write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();

        let mut parent: Option<git2::Oid> = None;
        for (i, secs) in times.iter().enumerate() {
            let sig = Signature::new("Test", "test@example.com", &Time::new(*secs, 0)).unwrap();
            let parents: Vec<git2::Commit> = parent
                .map(|oid| vec![repo.find_commit(oid).unwrap()])
                .unwrap_or_default();
            let parent_refs: Vec<&git2::Commit> = parents.iter().collect();
            let oid = repo
                .commit(
                    Some("HEAD"),
                    &sig,
                    &sig,
                    &format!("commit {}", i),
                    &tree,
                    &parent_refs,
                )
                .unwrap();
            parent = Some(oid);
        }
        dir
    }

    #[test]
    fn test_is_repository() {
        let repo_dir = repo_with_commits(&[1_000]);
        assert!(GitCli::new(repo_dir.path(), "focus/", "main").is_repository());
    }

    #[test]
    fn test_commits_since_counts_recent_commits() {
        let repo_dir = repo_with_commits(&[1_000, 2_000, 3_000]);
        let git = GitCli::new(repo_dir.path(), "focus/", "main");

        let since = DateTime::<Utc>::from_timestamp(2_000, 0).unwrap();
        assert_eq!(git.commits_since(since).unwrap(), 2);
    }

    #[test]
    fn test_current_branch_reads_head() {
        let repo_dir = repo_with_commits(&[1_000]);
        let git = GitCli::new(repo_dir.path(), "focus/", "main");

        let repo = Repository::open(repo_dir.path()).unwrap();
        let expected = repo.head().unwrap().shorthand().unwrap().to_string();
        assert_eq!(git.current_branch().unwrap(), expected);
    }
}
