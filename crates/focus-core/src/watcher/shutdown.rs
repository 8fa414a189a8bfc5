use tokio_util::sync::CancellationToken;
use tracing::info;

#[cfg(unix)]
use tokio::signal::unix::{Signal, SignalKind, signal};

/// SIGTERM/SIGINT handlers, installed when this value is created.
///
/// Create it before the watcher registers its pid: once a pid is on disk a
/// `focus daemon stop` may arrive, and it must reach a handler rather than
/// the default action, which would skip the pid cleanup.
pub struct ShutdownSignals {
    #[cfg(unix)]
    terminate: Signal,
    #[cfg(unix)]
    interrupt: Signal,
}

impl ShutdownSignals {
    /// Must be called from within a tokio runtime.
    pub fn install() -> Result<Self, std::io::Error> {
        #[cfg(unix)]
        {
            Ok(Self {
                terminate: signal(SignalKind::terminate())?,
                interrupt: signal(SignalKind::interrupt())?,
            })
        }

        #[cfg(not(unix))]
        {
            Ok(Self {})
        }
    }

    /// Wait for the first signal, then cancel `token` so the watcher loop
    /// drains and deregisters.
    pub async fn wait(mut self, token: CancellationToken) -> Result<(), std::io::Error> {
        #[cfg(unix)]
        {
            let name = tokio::select! {
                _ = self.terminate.recv() => "SIGTERM",
                _ = self.interrupt.recv() => "SIGINT",
            };
            info!(event = "core.watcher.signal_received", signal = name);
        }

        #[cfg(not(unix))]
        {
            tokio::signal::ctrl_c().await?;
            info!(event = "core.watcher.signal_received", signal = "SIGINT");
        }

        token.cancel();
        Ok(())
    }
}
