use chrono::Utc;
use clap::ArgMatches;
use serde::Serialize;
use tracing::info;

use focus_core::session_ops::{self, SessionSummary};
use focus_core::{Drift, Session, format_elapsed};

use super::helpers::{self, Context};
use crate::color;

#[derive(Serialize)]
struct StatusOutput<'a> {
    id: &'a str,
    task: &'a str,
    branch: &'a str,
    start_time: String,
    timebox: &'a str,
    elapsed_secs: i64,
    remaining_secs: Option<i64>,
    expired: bool,
    commits: usize,
    drifts: &'a [Drift],
    watcher_running: bool,
    watcher_pid: Option<i32>,
}

pub(crate) fn handle_status_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    info!(event = "cli.status_started", json_output = json_output);

    let ctx = Context::load()?;
    let session = helpers::require_active_session(&ctx.store, "cli.status_failed")?;
    let git = ctx.git()?;
    let summary = session_ops::summarize(&session, &git, Utc::now());
    let watcher_running = ctx.daemon.is_running();

    if json_output {
        let output = StatusOutput {
            id: session.id.as_str(),
            task: &session.task,
            branch: &session.branch,
            start_time: session.start_time.to_rfc3339(),
            timebox: &session.timebox,
            elapsed_secs: summary.elapsed.num_seconds(),
            remaining_secs: summary.remaining().map(|r| r.num_seconds()),
            expired: summary.is_expired(),
            commits: summary.commits,
            drifts: session.drifts(),
            watcher_running,
            watcher_pid: ctx.daemon.recorded_pid().filter(|_| watcher_running),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_status(&session, &summary, watcher_running);
    }

    info!(
        event = "cli.status_completed",
        session_id = %session.id,
        commits = summary.commits
    );
    Ok(())
}

fn print_status(session: &Session, summary: &SessionSummary, watcher_running: bool) {
    let started = session
        .start_time
        .with_timezone(&chrono::Local)
        .format("%H:%M");

    println!("{}", color::bold("🎯 Focus session"));
    println!("Goal:     {}", session.task);
    println!("Started:  {}", started);
    println!("Elapsed:  {}", format_elapsed(summary.elapsed));
    println!("Timebox:  {}", session.timebox);
    match summary.remaining() {
        Some(remaining) if summary.is_expired() => println!(
            "Remaining: {}",
            color::copper(&format!("overrun by {}", format_elapsed(-remaining)))
        ),
        Some(remaining) => println!("Remaining: {}", format_elapsed(remaining)),
        None => println!("Remaining: {}", color::muted("unknown (unparseable timebox)")),
    }
    println!("Branch:   {}", color::ice(&session.branch));
    println!("Commits:  {}", summary.commits);
    println!("Drifts:   {}", summary.drift_count);
    println!(
        "Watcher:  {}",
        if watcher_running {
            color::aurora("running")
        } else {
            color::muted("not running")
        }
    );

    helpers::print_drift_log(session);
}
