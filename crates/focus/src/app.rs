use clap::{Arg, ArgAction, ArgGroup, Command};

pub fn build_cli() -> Command {
    Command::new("focus")
        .about("Timeboxed, goal-scoped work sessions bound to git branches")
        .version(env!("CARGO_PKG_VERSION"))
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable colored output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("start")
                .about("Start a focus session on a new branch")
                .arg(
                    Arg::new("task")
                        .help("What you are going to work on")
                        .required(true)
                        .num_args(1..),
                )
                .arg(
                    Arg::new("time")
                        .short('t')
                        .long("time")
                        .help("Timebox, e.g. 90m, 2h30m (default from config)"),
                )
                .arg(
                    Arg::new("no-watch")
                        .long("no-watch")
                        .help("Do not launch the background watcher")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Check in: still on track, or drifting?")
                .arg(
                    Arg::new("on-track")
                        .long("on-track")
                        .help("Still working on the goal")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("drift")
                        .long("drift")
                        .help("Log what you are doing instead")
                        .value_name("DESCRIPTION"),
                )
                .arg(
                    Arg::new("reason")
                        .long("reason")
                        .help("Why you drifted")
                        .requires("drift"),
                )
                .arg(
                    Arg::new("defer")
                        .long("defer")
                        .help("Ask again later")
                        .action(ArgAction::SetTrue),
                )
                .group(ArgGroup::new("answer").args(["on-track", "drift", "defer"])),
        )
        .subcommand(
            Command::new("status")
                .about("Show the active session")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("end")
                .about("End the active session")
                .arg(
                    Arg::new("merge")
                        .long("merge")
                        .help("Merge the branch into the base branch")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("continue")
                        .long("continue")
                        .help("Pause the session to resume later")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("abandon")
                        .long("abandon")
                        .help("Delete the branch and discard the session")
                        .action(ArgAction::SetTrue),
                )
                .group(ArgGroup::new("outcome").args(["merge", "continue", "abandon"])),
        )
        .subcommand(
            Command::new("resume")
                .about("Resume a paused session")
                .arg(Arg::new("id").help("Session id (prompts when several are paused)")),
        )
        .subcommand(Command::new("list").about("List active and paused sessions"))
        .subcommand(
            Command::new("daemon")
                .about("Manage the background watcher")
                .subcommand_required(true)
                .subcommand(Command::new("status").about("Check whether the watcher is running"))
                .subcommand(Command::new("stop").about("Stop the watcher")),
        )
        .subcommand(
            Command::new(focus_core::daemon::WATCH_SUBCOMMAND)
                .about("Run the watcher in the foreground (started by 'focus start')")
                .hide(true),
        )
}
