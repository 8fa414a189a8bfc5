use chrono::{DateTime, Utc};
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::alerts::AlertTracker;
use super::config::WatcherConfig;
use super::errors::WatcherError;
use crate::daemon::DaemonController;
use crate::notify::Notifier;
use crate::sessions::SessionStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    Continue,
    /// No active session is left to watch.
    SessionEnded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Signal,
    SessionEnded,
}

/// One read-compute-notify step.
///
/// A missing, paused or unreadable session all end the watch.
pub fn poll_once(
    store: &SessionStore,
    tracker: &mut AlertTracker,
    notifier: &dyn Notifier,
    now: DateTime<Utc>,
) -> PollOutcome {
    let Some(session) = store.active_session() else {
        return PollOutcome::SessionEnded;
    };

    if let Some(alert) = tracker.evaluate(&session, now) {
        info!(
            event = "core.watcher.alert_fired",
            session_id = %session.id,
            alert = alert.title(),
            urgent = alert.is_urgent()
        );
        let message = alert.message();
        if alert.is_urgent() {
            notifier.notify_urgent(alert.title(), &message);
        } else {
            notifier.notify(alert.title(), &message);
        }
    }

    PollOutcome::Continue
}

/// Run the watcher until `token` is cancelled or the session goes away.
///
/// Registers this process with `controller` first; failing to do so is
/// fatal. The registration is dropped on every exit path.
pub async fn run_watcher(
    store: &SessionStore,
    controller: &DaemonController,
    notifier: &dyn Notifier,
    config: WatcherConfig,
    token: CancellationToken,
) -> Result<StopReason, WatcherError> {
    let _guard = controller.register_self()?;

    info!(
        event = "core.watcher.started",
        poll_interval_secs = config.poll_interval.as_secs(),
        reminder_interval_mins = config.reminder_interval.num_minutes()
    );

    let mut tracker = AlertTracker::new(config.reminder_interval, Utc::now());
    let mut ticker = tokio::time::interval(config.poll_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately; polling starts one interval in.
    ticker.tick().await;

    let reason = loop {
        tokio::select! {
            biased;
            _ = token.cancelled() => break StopReason::Signal,
            _ = ticker.tick() => {
                if poll_once(store, &mut tracker, notifier, Utc::now()) == PollOutcome::SessionEnded {
                    break StopReason::SessionEnded;
                }
            }
        }
    };

    info!(event = "core.watcher.stopped", reason = ?reason);
    Ok(reason)
}
