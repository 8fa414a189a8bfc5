use focus_config::FocusConfig;
use focus_core::daemon::{DaemonController, spawn_watcher};
use focus_core::git::GitCli;
use focus_core::{FocusPaths, Session, SessionError, SessionStore, events};
use tracing::{error, info, warn};

use crate::color;

/// Everything a foreground command needs, resolved once.
pub(crate) struct Context {
    pub paths: FocusPaths,
    pub config: FocusConfig,
    pub store: SessionStore,
    pub daemon: DaemonController,
}

impl Context {
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let paths = FocusPaths::resolve()?;
        let config = load_config_with_warning(&paths);
        Ok(Self {
            store: SessionStore::new(paths.clone()),
            daemon: DaemonController::new(paths.clone()),
            paths,
            config,
        })
    }

    /// Git collaborator rooted at the current directory.
    pub fn git(&self) -> Result<GitCli, Box<dyn std::error::Error>> {
        let cwd = std::env::current_dir()?;
        Ok(GitCli::new(
            cwd,
            self.config.session.branch_prefix.clone(),
            self.config.session.base_branch.clone(),
        ))
    }
}

/// Load config, falling back to defaults with a warning when the file is
/// broken.
pub(crate) fn load_config_with_warning(paths: &FocusPaths) -> FocusConfig {
    match focus_config::load_config(&paths.config_file()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "{}",
                color::warning(&format!(
                    "Warning: could not load config ({}). Using defaults.",
                    e
                ))
            );
            warn!(event = "cli.config_load_failed", error = %e);
            FocusConfig::default()
        }
    }
}

/// Load the active session or print guidance and fail.
pub(crate) fn require_active_session(
    store: &SessionStore,
    failed_event: &'static str,
) -> Result<Session, Box<dyn std::error::Error>> {
    match store.active_session() {
        Some(session) => Ok(session),
        None => {
            let e = SessionError::NoActiveSession;
            eprintln!("{}", color::error(&format!("❌ {}", e)));
            error!(event = failed_event, error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

/// Print a failure for `e`, log it and hand it back boxed.
pub(crate) fn report_failure<E: focus_core::FocusError>(
    e: E,
    failed_event: &'static str,
    prefix: &str,
) -> Box<dyn std::error::Error> {
    eprintln!("{}", color::error(&format!("❌ {}: {}", prefix, e)));
    error!(event = failed_event, error = %e);
    events::log_app_error(&e);
    Box::new(e)
}

/// Launch the watcher unless one is already alive. Failures are reported
/// but do not fail the calling command.
pub(crate) fn ensure_watcher(ctx: &Context) {
    if ctx.daemon.is_running() {
        info!(event = "cli.watcher_already_running", pid = ?ctx.daemon.recorded_pid());
        return;
    }
    match spawn_watcher(&ctx.paths) {
        Ok(pid) => {
            println!("{} Background watcher started (PID: {})", color::aurora("✓"), pid);
        }
        Err(e) => {
            eprintln!(
                "{}",
                color::warning(&format!("⚠️  Could not start background watcher: {}", e))
            );
            warn!(event = "cli.watcher_spawn_failed", error = %e);
        }
    }
}

/// Stop the watcher if one is alive. Failures only warn.
pub(crate) fn stop_watcher(ctx: &Context) {
    if !ctx.daemon.is_running() {
        return;
    }
    match ctx.daemon.stop() {
        Ok(_) => println!("{} Background watcher stopped", color::aurora("✓")),
        Err(e) => {
            eprintln!(
                "{}",
                color::warning(&format!("⚠️  Could not stop watcher: {}", e))
            );
            warn!(event = "cli.watcher_stop_failed", error = %e);
        }
    }
}

/// Render a drift log, one numbered line per entry.
pub(crate) fn print_drift_log(session: &Session) {
    if session.drifts().is_empty() {
        return;
    }
    println!();
    println!("{}", color::copper("Drift log:"));
    for (i, drift) in session.drifts().iter().enumerate() {
        let time = drift.timestamp.with_timezone(&chrono::Local).format("%H:%M");
        match &drift.reason {
            Some(reason) => println!(
                "  {}. [{}] {} {}",
                i + 1,
                time,
                drift.description,
                color::muted(&format!("(reason: {})", reason))
            ),
            None => println!("  {}. [{}] {}", i + 1, time, drift.description),
        }
    }
}
