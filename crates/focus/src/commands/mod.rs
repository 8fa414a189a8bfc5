use clap::ArgMatches;
use tracing::error;

mod check;
mod daemon;
mod end;
mod helpers;
mod list;
mod resume;
mod start;
mod status;
mod watch;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    match matches.subcommand() {
        Some(("start", sub_matches)) => start::handle_start_command(sub_matches),
        Some(("check", sub_matches)) => check::handle_check_command(sub_matches),
        Some(("status", sub_matches)) => status::handle_status_command(sub_matches),
        Some(("end", sub_matches)) => end::handle_end_command(sub_matches),
        Some(("resume", sub_matches)) => resume::handle_resume_command(sub_matches),
        Some(("list", _)) => list::handle_list_command(),
        Some(("daemon", sub_matches)) => daemon::handle_daemon_command(sub_matches),
        Some((focus_core::daemon::WATCH_SUBCOMMAND, _)) => watch::handle_watch_command(),
        Some((name, _)) => {
            error!(event = "cli.command_unknown", command = name);
            Err(format!("Unknown command: {}", name).into())
        }
        None => Err("No command given. Run 'focus --help'".into()),
    }
}
