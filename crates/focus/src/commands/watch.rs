use focus_core::notify::DesktopNotifier;
use focus_core::watcher::{ShutdownSignals, WatcherConfig, run_watcher};
use focus_core::{DaemonError, init_file_logging};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use super::helpers::{self, Context};

/// Run the watcher loop in this process. Normally reached through the
/// detached re-exec done by `focus start`.
pub(crate) fn handle_watch_command() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = Context::load()?;
    init_file_logging(&ctx.paths.watcher_log_file())?;
    focus_core::events::log_app_startup();

    if ctx.daemon.is_running() {
        let pid = ctx.daemon.recorded_pid().unwrap_or_default();
        return Err(helpers::report_failure(
            DaemonError::AlreadyRunning { pid },
            "cli.watch_failed",
            "Cannot start watcher",
        ));
    }

    let config = WatcherConfig::from_settings(&ctx.config.watcher);
    let notifier = DesktopNotifier::new(&ctx.config.notifications);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let reason = runtime.block_on(async {
        let token = CancellationToken::new();
        let signals = ShutdownSignals::install()?;
        let signal_token = token.clone();
        tokio::spawn(async move {
            if let Err(e) = signals.wait(signal_token).await {
                error!(event = "cli.watch_signal_handler_failed", error = %e);
            }
        });

        run_watcher(&ctx.store, &ctx.daemon, &notifier, config, token).await
    });

    match reason {
        Ok(reason) => {
            info!(event = "cli.watch_completed", reason = ?reason);
            Ok(())
        }
        Err(e) => Err(helpers::report_failure(e, "cli.watch_failed", "Watcher failed")),
    }
}
