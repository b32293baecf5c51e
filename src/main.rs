//! Terminal runner (default binary).
//!
//! Wires the terminal collaborators (crossterm input, stdout renderer) around
//! a `Session` and the fixed-rate `Driver`.

use anyhow::Result;

use term_runner::cli::{parse_args, CliCommand, USAGE};
use term_runner::core::Session;
use term_runner::engine::{Driver, ExitReason};
use term_runner::input::TerminalEvents;
use term_runner::logging;
use term_runner::term::{terminal_width, TerminalRenderer};
use term_runner::types::SessionConfig;

fn main() -> Result<()> {
    logging::init(logging::log_path_from_env().as_deref())?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match parse_args(&args, SessionConfig::from_env())? {
        CliCommand::Play(config) => config,
        CliCommand::Help => {
            println!("{USAGE}");
            return Ok(());
        }
    };

    let width = terminal_width();
    let mut session = Session::new(config, width as usize)?;
    log::info!(
        "session started: level {}, width {}, track {} cells, seed {}",
        session.config().level,
        width,
        session.track().len(),
        session.config().seed
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut session, &mut term);

    // Always try to restore terminal state.
    let _ = term.exit();

    let reason = result?;
    log::info!("session ended: {:?}", reason);
    Ok(())
}

fn run(session: &mut Session, term: &mut TerminalRenderer) -> Result<ExitReason> {
    let driver = Driver::for_session(session);
    let mut events = TerminalEvents::new();
    driver.run(session, &mut events, term)
}
