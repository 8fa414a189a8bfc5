use tracing::{info, warn};

use super::helpers::Context;
use crate::color;

pub(crate) fn handle_list_command() -> Result<(), Box<dyn std::error::Error>> {
    info!(event = "cli.list_started");

    let ctx = Context::load()?;
    let listing = ctx.store.list_sessions()?;

    if listing.skipped > 0 {
        eprintln!(
            "{}",
            color::warning(&format!(
                "⚠️  Skipped {} unreadable session record(s)",
                listing.skipped
            ))
        );
        warn!(event = "cli.list_records_skipped", skipped = listing.skipped);
    }

    if listing.is_empty() {
        println!("No focus sessions. Run 'focus start' to begin.");
        info!(event = "cli.list_completed", count = 0);
        return Ok(());
    }

    for session in &listing.sessions {
        println!(
            "{:<8} {}  {}  {}",
            color::status(session.status.as_str()),
            session.task,
            color::ice(&session.branch),
            color::muted(session.id.as_str())
        );
    }

    info!(event = "cli.list_completed", count = listing.len());
    Ok(())
}
