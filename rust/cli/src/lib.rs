//! # Gavel CLI Library
//!
//! Command-line front end for the gavel sealed-bid auction engine: deal
//! games, play them from a scripted bid source, and replay or audit the
//! recorded results.
//!
//! ## Main Entry Point
//!
//! [`run`] parses command-line arguments and executes the subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["gavel", "play", "--seed", "7", "--output", "games.jsonl"];
//! let code = gavel_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `deal`: Deal a game and show both hands and the prize order
//! - `play`: Play one game with bids read from stdin
//! - `replay`: Print recorded games round by round
//! - `verify`: Re-run recorded games and audit them
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
mod macros;
pub mod ui;
pub mod validation;

use cli::{Commands, GavelCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_play_command, handle_replay_command,
    handle_verify_command,
};

pub use error::{BatchValidationError, CliError};

const COMMANDS: &[&str] = &["deal", "play", "replay", "verify", "cfg"];

/// Main entry point for the CLI application.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: [`exit_code::SUCCESS`] or [`exit_code::ERROR`]
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["gavel", "deal", "--seed", "42"];
/// let code = gavel_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match GavelCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_parse_error(e, out, err),
    };

    if let Commands::Cfg = cli.cmd {
        return exit_with(handle_cfg_command(out, err), err);
    }

    let cfg = match config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            let _ = ui::write_error(err, &format!("Invalid configuration: {}", e));
            return exit_code::ERROR;
        }
    };
    logging::init_logging(&cfg.log_filter);

    match cli.cmd {
        Commands::Deal {
            seed,
            shuffle_suits,
        } => exit_with(
            handle_deal_command(seed.or(cfg.seed), shuffle_suits || cfg.shuffle_suits, out),
            err,
        ),
        Commands::Play {
            seed,
            output,
            shuffle_suits,
        } => {
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            exit_with(
                handle_play_command(
                    seed.or(cfg.seed),
                    output,
                    shuffle_suits || cfg.shuffle_suits,
                    out,
                    err,
                    &mut stdin_lock,
                ),
                err,
            )
        }
        // the handler reports read failures itself
        Commands::Replay { input } => match handle_replay_command(input, out, err) {
            Ok(()) => exit_code::SUCCESS,
            Err(_) => exit_code::ERROR,
        },
        Commands::Verify { input } => exit_with(handle_verify_command(input, out, err), err),
        Commands::Cfg => exit_with(handle_cfg_command(out, err), err),
    }
}

fn exit_with(result: Result<(), CliError>, err: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Config(_)) => exit_code::ERROR, // already reported
        Err(e) => {
            let _ = writeln!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

fn report_parse_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version should print to stdout and exit 0
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            if write!(out, "{}", e).is_err() {
                return exit_code::ERROR;
            }
            exit_code::SUCCESS
        }
        _ => {
            if writeln!(err, "{}", e).is_err()
                || writeln!(err).is_err()
                || writeln!(err, "Gavel Auction CLI").is_err()
                || writeln!(err, "Usage: gavel <command> [options]\n").is_err()
                || writeln!(err, "Commands:").is_err()
            {
                return exit_code::ERROR;
            }
            for c in COMMANDS {
                if writeln!(err, "  {}", c).is_err() {
                    return exit_code::ERROR;
                }
            }
            let _ = writeln!(err, "\nFor full help, run: gavel --help");
            exit_code::ERROR
        }
    }
}
