use clap::ArgMatches;
use tracing::info;

use focus_core::session_ops;

use super::helpers::{self, Context};
use crate::{color, prompt};

enum Answer {
    OnTrack,
    Drift {
        description: String,
        reason: Option<String>,
    },
    Defer,
}

pub(crate) fn handle_check_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    info!(event = "cli.check_started");

    let ctx = Context::load()?;
    let mut session = helpers::require_active_session(&ctx.store, "cli.check_failed")?;

    println!("{} {}", color::bold("🎯 Current goal:"), session.task);

    let answer = match answer_from_flags(matches) {
        Some(answer) => answer,
        None => match ask_answer()? {
            Some(answer) => answer,
            None => {
                println!("No answer given.");
                return Ok(());
            }
        },
    };

    match answer {
        Answer::OnTrack => {
            println!("{} Great! Keep going.", color::aurora("✓"));
            info!(event = "cli.check_completed", outcome = "on_track", session_id = %session.id);
        }
        Answer::Defer => {
            println!("{}", color::muted("Okay, checking back later."));
            info!(event = "cli.check_completed", outcome = "deferred", session_id = %session.id);
        }
        Answer::Drift {
            description,
            reason,
        } => {
            session_ops::record_drift(&ctx.store, &mut session, &description, reason).map_err(
                |e| helpers::report_failure(e, "cli.check_failed", "Could not log drift"),
            )?;
            println!(
                "{} Drift logged ({} so far). Get back to: {}",
                color::copper("🐰"),
                session.drifts().len(),
                session.task
            );
            info!(
                event = "cli.check_completed",
                outcome = "drift",
                session_id = %session.id,
                drift_count = session.drifts().len()
            );
        }
    }
    Ok(())
}

fn answer_from_flags(matches: &ArgMatches) -> Option<Answer> {
    if matches.get_flag("on-track") {
        return Some(Answer::OnTrack);
    }
    if matches.get_flag("defer") {
        return Some(Answer::Defer);
    }
    matches
        .get_one::<String>("drift")
        .map(|description| Answer::Drift {
            description: description.clone(),
            reason: matches.get_one::<String>("reason").cloned(),
        })
}

fn ask_answer() -> Result<Option<Answer>, Box<dyn std::error::Error>> {
    let Some(key) = prompt::stdin_choose(
        "Still working on this? [y]es / [n]o, drifted / [d]efer:",
        &['y', 'n', 'd'],
    )?
    else {
        return Ok(None);
    };

    let answer = match key {
        'y' => Answer::OnTrack,
        'd' => Answer::Defer,
        _ => {
            let Some(description) = prompt::stdin_ask("What are you actually working on?")? else {
                return Ok(None);
            };
            let reason = prompt::stdin_ask("Why is this necessary? (optional)")?;
            Answer::Drift {
                description,
                reason,
            }
        }
    };
    Ok(Some(answer))
}
