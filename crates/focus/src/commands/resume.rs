use clap::ArgMatches;
use tracing::{info, warn};

use focus_core::{SessionError, session_ops};

use super::helpers::{self, Context};
use crate::{color, prompt};

pub(crate) fn handle_resume_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let requested = matches.get_one::<String>("id");
    info!(event = "cli.resume_started", id = ?requested);

    let ctx = Context::load()?;

    let mut session = match requested {
        Some(id) => {
            let session = ctx
                .store
                .load_by_id(id)
                .map_err(|e| helpers::report_failure(e, "cli.resume_failed", "Cannot resume"))?;
            if session.is_active() {
                println!("Session {} is already active.", color::ice(id));
                return Ok(());
            }
            session
        }
        None => {
            let listing = ctx.store.list_paused()?;
            if listing.skipped > 0 {
                eprintln!(
                    "{}",
                    color::warning(&format!(
                        "⚠️  Skipped {} unreadable session record(s)",
                        listing.skipped
                    ))
                );
                warn!(event = "cli.resume_records_skipped", skipped = listing.skipped);
            }

            let mut sessions = listing.sessions;
            match sessions.len() {
                0 => {
                    let e = SessionError::NoPausedSessions;
                    println!("{}", e);
                    info!(event = "cli.resume_completed", resumed = false);
                    return Ok(());
                }
                1 => sessions.remove(0),
                count => {
                    for (i, s) in sessions.iter().enumerate() {
                        println!(
                            "  {}. {}  {}  {}",
                            i + 1,
                            s.task,
                            color::ice(&s.branch),
                            color::muted(&s.start_time.format("%Y-%m-%d %H:%M").to_string())
                        );
                    }
                    match prompt::stdin_pick_index("Resume which session? (empty to cancel)", count)? {
                        Some(index) => sessions.remove(index),
                        None => {
                            println!("Resume cancelled");
                            return Ok(());
                        }
                    }
                }
            }
        }
    };

    let git = ctx.git()?;
    session_ops::resume_session(&ctx.store, &git, &mut session)
        .map_err(|e| helpers::report_failure(e, "cli.resume_failed", "Could not resume"))?;

    println!("{} Session resumed", color::aurora("✓"));
    println!("   Goal:   {}", session.task);
    println!("   Branch: {}", color::ice(&session.branch));
    helpers::ensure_watcher(&ctx);

    info!(event = "cli.resume_completed", resumed = true, session_id = %session.id);
    Ok(())
}
