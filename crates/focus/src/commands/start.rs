use clap::ArgMatches;
use tracing::info;

use focus_core::session_ops;

use super::helpers::{self, Context};
use crate::color;

pub(crate) fn handle_start_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let task = matches
        .get_many::<String>("task")
        .ok_or("Task argument is required")?
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");
    let ctx = Context::load()?;
    let timebox = matches
        .get_one::<String>("time")
        .cloned()
        .unwrap_or_else(|| ctx.config.session.default_timebox.clone());
    let no_watch = matches.get_flag("no-watch");

    info!(event = "cli.start_started", task = %task, timebox = %timebox);

    let git = ctx.git()?;
    let session = session_ops::start_session(&ctx.store, &git, &task, &timebox)
        .map_err(|e| helpers::report_failure(e, "cli.start_failed", "Could not start session"))?;

    println!("{} Created branch: {}", color::aurora("✓"), color::ice(&session.branch));
    println!();
    println!("{}", color::bold("🎯 Focus session active"));
    println!("   Goal: {}", session.task);
    println!("   Time: {}", session.timebox);
    println!("   Id:   {}", color::muted(session.id.as_str()));

    if !no_watch {
        helpers::ensure_watcher(&ctx);
    }

    println!();
    println!("{}", color::muted("  focus check   - check you're still on track"));
    println!("{}", color::muted("  focus status  - see session progress"));
    println!("{}", color::muted("  focus end     - finish the session"));

    info!(
        event = "cli.start_completed",
        session_id = %session.id,
        branch = %session.branch
    );
    Ok(())
}
