use focus_core::init_logging;

mod app;
mod color;
mod commands;
mod prompt;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let app = app::build_cli();
    let matches = app.get_matches();

    if matches.get_flag("no-color") {
        color::set_no_color();
    }

    // The watcher logs to a file instead; see commands::watch.
    if matches.subcommand_name() != Some(focus_core::daemon::WATCH_SUBCOMMAND) {
        let verbose = matches.get_flag("verbose");
        init_logging(!verbose);
    }

    commands::run_command(&matches)?;

    Ok(())
}
