use anyhow::Result;
use crossterm::tty::IsTty;
use simplelog::{ColorChoice, Config, TerminalMode, TermLogger};
use std::io;
use tareas::{Session, SessionConfig};

fn main() -> Result<()> {
    let stdout = io::stdout();
    let config = SessionConfig::for_output(stdout.is_tty());

    // Diagnostics go to stderr so they never mix with the menu.
    TermLogger::init(
        config.log_level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), stdout, config);
    session.run()?;
    Ok(())
}
