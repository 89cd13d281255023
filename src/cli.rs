//! Command-line surface: `-h`/`--help` and nothing else.

use std::ffi::OsString;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::Parser;

pub const BIN_NAME: &str = "icosa";

const AFTER_HELP: &str = "\
Controls:
  Any key        Quit

Designed for use as a terminal greeting effect.
Can also be run standalone or with timeout(1):
  timeout 5 icosa";

#[derive(Parser, Debug)]
#[command(
    name = BIN_NAME,
    about = "icosa - bouncing glenz vector over a checkerboard floor",
    long_about = "icosa - bouncing glenz vector over a checkerboard floor\n\n\
                  Inspired by the 2nd Reality demo (Future Crew, 1993).\n\
                  Renders a spinning tetrakis hexahedron with braille-dot wireframe,\n\
                  physics-based bouncing, and squash-and-stretch deformation.",
    after_help = AFTER_HELP,
    disable_version_flag = true
)]
pub struct Cli {}

/// What the process should do after looking at its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliOutcome {
    Run,
    /// Print this text to stdout and exit successfully.
    Help(String),
    /// Print this line to stderr and exit with status 1.
    Invalid(String),
}

pub fn parse_args<I, T>(args: I) -> CliOutcome
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    // clap reads `--` as end of options. Only the first argument decides the
    // outcome, so a leading `--` is reported like any other unknown option.
    if args.get(1).is_some_and(|arg| arg == "--") {
        return CliOutcome::Invalid(format!("{BIN_NAME}: unknown option '--'"));
    }

    match Cli::try_parse_from(args) {
        Ok(_) => CliOutcome::Run,
        Err(e) if e.kind() == ErrorKind::DisplayHelp => CliOutcome::Help(e.render().to_string()),
        Err(e) => CliOutcome::Invalid(match e.get(ContextKind::InvalidArg) {
            Some(ContextValue::String(arg)) => format!("{BIN_NAME}: unknown option '{arg}'"),
            _ => format!("{BIN_NAME}: invalid arguments"),
        }),
    }
}
