use std::path::{Path, PathBuf};

/// Environment variable overriding the data directory.
pub const FOCUS_DIR_ENV: &str = "FOCUS_DIR";

const DEFAULT_DIR_NAME: &str = ".focus";

/// Layout of the `.focus/` data directory.
///
/// ```text
/// .focus/
/// ├── sessions/<id>.json   one record per session
/// ├── active               id of the active session
/// ├── daemon.pid           pid of the running watcher
/// ├── store.lock           advisory lock for pointer updates
/// ├── config.toml
/// └── watcher.log
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusPaths {
    root: PathBuf,
}

impl FocusPaths {
    /// Resolve the data directory: `$FOCUS_DIR` when set and non-empty,
    /// otherwise `.focus` in the current directory.
    pub fn resolve() -> Result<Self, std::io::Error> {
        if let Ok(dir) = std::env::var(FOCUS_DIR_ENV)
            && !dir.is_empty()
        {
            return Ok(Self::at(dir));
        }

        let cwd = std::env::current_dir()?;
        Ok(Self::at(cwd.join(DEFAULT_DIR_NAME)))
    }

    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn sessions_dir(&self) -> PathBuf {
        self.root.join("sessions")
    }

    pub fn session_file(&self, id: &str) -> PathBuf {
        self.sessions_dir().join(format!("{}.json", id))
    }

    pub fn active_file(&self) -> PathBuf {
        self.root.join("active")
    }

    pub fn pid_file(&self) -> PathBuf {
        self.root.join("daemon.pid")
    }

    pub fn lock_file(&self) -> PathBuf {
        self.root.join("store.lock")
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join(focus_config::CONFIG_FILE_NAME)
    }

    pub fn watcher_log_file(&self) -> PathBuf {
        self.root.join("watcher.log")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        let paths = FocusPaths::at("/tmp/repo/.focus");
        assert_eq!(
            paths.session_file("1700000000-fix-ocr"),
            PathBuf::from("/tmp/repo/.focus/sessions/1700000000-fix-ocr.json")
        );
        assert_eq!(paths.active_file(), PathBuf::from("/tmp/repo/.focus/active"));
        assert_eq!(paths.pid_file(), PathBuf::from("/tmp/repo/.focus/daemon.pid"));
        assert_eq!(
            paths.config_file(),
            PathBuf::from("/tmp/repo/.focus/config.toml")
        );
    }

    #[test]
    fn test_resolve_uses_env_override() {
        temp_env::with_var(FOCUS_DIR_ENV, Some("/tmp/custom-focus"), || {
            let paths = FocusPaths::resolve().unwrap();
            assert_eq!(paths.root(), Path::new("/tmp/custom-focus"));
        });
    }

    #[test]
    fn test_resolve_ignores_empty_env() {
        temp_env::with_var(FOCUS_DIR_ENV, Some(""), || {
            let paths = FocusPaths::resolve().unwrap();
            assert!(paths.root().ends_with(".focus"));
        });
    }
}
