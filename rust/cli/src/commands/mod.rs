//! Command handler modules for the gavel CLI.
//!
//! Each subcommand lives in its own module with the same shape:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers specific to that command
//! - Output streams (`&mut dyn Write`) and the bid source (`&mut dyn BufRead`)
//!   passed in, so handlers are testable without a terminal
//!
//! # Example
//!
//! ```rust
//! use gavel_cli::commands::handle_deal_command;
//!
//! let mut out = Vec::new();
//! handle_deal_command(Some(7), false, &mut out).unwrap();
//! ```

mod cfg;
mod deal;
mod play;
mod replay;
mod verify;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::handle_play_command;
pub use replay::handle_replay_command;
pub use verify::handle_verify_command;
