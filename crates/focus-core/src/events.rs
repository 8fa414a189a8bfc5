use tracing::{error, info, warn};

use crate::errors::FocusError;

pub fn log_app_startup() {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION")
    );
}

/// Log an application error at a level matching its kind.
///
/// User errors (no session, bad timebox, ...) are expected outcomes and go
/// to warn; everything else goes to error.
pub fn log_app_error<E: FocusError>(err: &E) {
    if err.is_user_error() {
        warn!(
            event = "core.app.user_error",
            error_code = err.error_code(),
            error = %err
        );
    } else {
        error!(
            event = "core.app.error_occurred",
            error_code = err.error_code(),
            error = %err
        );
    }
}
