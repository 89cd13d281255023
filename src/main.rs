//! icosa runner (default binary).
//!
//! Renders a bouncing, spinning tetrakis hexahedron over a checkerboard floor
//! until any key is pressed. Uses crossterm for terminal control and input and
//! a custom braille framebuffer for output.

use std::process::ExitCode;

use anyhow::{Context, Result};

use icosa::animation::Animation;
use icosa::cli::{parse_args, CliOutcome, BIN_NAME};
use icosa::config::{init_logging, RuntimeConfig};
use icosa::input::{FramePacer, TerminalInput};
use icosa::term::{query_dims, restore_terminal, TerminalSession};

fn main() -> ExitCode {
    match parse_args(std::env::args_os()) {
        CliOutcome::Run => {}
        CliOutcome::Help(text) => {
            print!("{text}");
            return ExitCode::SUCCESS;
        }
        CliOutcome::Invalid(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("{BIN_NAME}: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    init_logging(&RuntimeConfig::from_env())?;

    let dims = query_dims()?;
    let mut animation = Animation::new(dims)?;

    // SIGINT/SIGTERM/SIGHUP: put the terminal back, then stop like a keypress would.
    ctrlc::set_handler(|| {
        let _ = restore_terminal();
        std::process::exit(0);
    })
    .context("unable to install signal handler")?;

    let mut session = TerminalSession::enter()?;
    let mut pacer = FramePacer::default();
    animation.run(&mut TerminalInput, &mut pacer, |frame| session.draw(frame))?;

    // Always restore terminal state before returning.
    drop(session);
    Ok(())
}
