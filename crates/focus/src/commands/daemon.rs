use clap::ArgMatches;
use tracing::info;

use focus_core::DaemonError;

use super::helpers::{self, Context};
use crate::color;

pub(crate) fn handle_daemon_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = Context::load()?;
    match matches.subcommand() {
        Some(("status", _)) => {
            if ctx.daemon.is_running() {
                let pid = ctx.daemon.recorded_pid().unwrap_or_default();
                println!("{} Watcher daemon is running (PID: {})", color::aurora("✓"), pid);
            } else {
                println!("{} Watcher daemon is not running", color::muted("✗"));
            }
            info!(event = "cli.daemon_status_completed", running = ctx.daemon.is_running());
            Ok(())
        }
        Some(("stop", _)) => {
            info!(event = "cli.daemon_stop_started");
            match ctx.daemon.stop() {
                Ok(pid) => {
                    println!("{} Watcher daemon stopped (PID: {})", color::aurora("✓"), pid);
                    info!(event = "cli.daemon_stop_completed", pid = pid);
                    Ok(())
                }
                Err(DaemonError::NotRunning) => {
                    println!("{} Watcher daemon is not running", color::muted("✗"));
                    Ok(())
                }
                Err(e) => Err(helpers::report_failure(
                    e,
                    "cli.daemon_stop_failed",
                    "Failed to stop daemon",
                )),
            }
        }
        _ => Err("Unknown daemon subcommand".into()),
    }
}
