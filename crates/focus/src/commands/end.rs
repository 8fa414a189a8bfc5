use chrono::Utc;
use clap::ArgMatches;
use tracing::info;

use focus_core::{format_elapsed, session_ops};

use super::helpers::{self, Context};
use crate::{color, prompt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Merge,
    Continue,
    Abandon,
}

pub(crate) fn handle_end_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    info!(event = "cli.end_started");

    let ctx = Context::load()?;
    let mut session = helpers::require_active_session(&ctx.store, "cli.end_failed")?;
    let git = ctx.git()?;

    let summary = session_ops::summarize(&session, &git, Utc::now());
    println!("{} {}", color::bold("🎯"), session.task);
    println!(
        "   Time: {} (planned: {})",
        format_elapsed(summary.elapsed),
        session.timebox
    );
    println!("   Commits: {}", summary.commits);
    println!("   Drifts: {}", summary.drift_count);
    helpers::print_drift_log(&session);
    println!();

    let outcome = if matches.get_flag("merge") {
        Outcome::Merge
    } else if matches.get_flag("continue") {
        Outcome::Continue
    } else if matches.get_flag("abandon") {
        Outcome::Abandon
    } else {
        match prompt::stdin_choose(
            "[m]erge into base branch / [c]ontinue later / [a]bandon branch:",
            &['m', 'c', 'a'],
        )? {
            Some('m') => Outcome::Merge,
            Some('c') => Outcome::Continue,
            Some(_) => Outcome::Abandon,
            None => {
                println!("No choice made. Session left as is.");
                return Ok(());
            }
        }
    };

    match outcome {
        Outcome::Merge => {
            session_ops::complete_session(&ctx.store, &git, &session)
                .map_err(|e| helpers::report_failure(e, "cli.end_failed", "Merge failed"))?;
            println!(
                "{} Session complete. {} merged.",
                color::aurora("✅"),
                color::ice(&session.branch)
            );
        }
        Outcome::Continue => {
            session_ops::pause_session(&ctx.store, &mut session)
                .map_err(|e| helpers::report_failure(e, "cli.end_failed", "Could not pause"))?;
            println!(
                "{} Session paused. Run 'focus resume' to continue later.",
                color::copper("⏸")
            );
        }
        Outcome::Abandon => {
            session_ops::abandon_session(&ctx.store, &git, &session).map_err(|e| {
                helpers::report_failure(e, "cli.end_failed", "Could not abandon branch")
            })?;
            println!(
                "{} Branch discarded. Commits remain in the reflog.",
                color::muted("🗑")
            );
        }
    }

    // A paused session ends the watcher on its next poll; merge and
    // abandon stop it right away.
    if outcome != Outcome::Continue {
        helpers::stop_watcher(&ctx);
    }

    info!(
        event = "cli.end_completed",
        session_id = %session.id,
        outcome = ?outcome
    );
    Ok(())
}
