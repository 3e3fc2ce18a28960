//! Command-line definitions parsed by clap.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "gavel",
    version,
    about = "Sealed-bid auction card game: deal, play, replay and audit games"
)]
pub struct GavelCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deal a game and show hands and prize order
    Deal {
        /// RNG seed; overrides GAVEL_SEED
        #[arg(long)]
        seed: Option<u64>,
        /// Randomly assign Hearts and Clubs to the players
        #[arg(long)]
        shuffle_suits: bool,
    },
    /// Play one game with bids read from stdin, one '<p1> <p2>' line per round
    Play {
        /// RNG seed; overrides GAVEL_SEED
        #[arg(long)]
        seed: Option<u64>,
        /// Append the finished game to this JSONL file
        #[arg(long)]
        output: Option<String>,
        /// Randomly assign Hearts and Clubs to the players
        #[arg(long)]
        shuffle_suits: bool,
    },
    /// Print recorded games round by round
    Replay {
        /// JSONL record file (.jsonl or .jsonl.zst)
        #[arg(long)]
        input: String,
    },
    /// Re-run recorded games and check them against their records
    Verify {
        /// JSONL record file (.jsonl or .jsonl.zst)
        #[arg(long)]
        input: String,
    },
    /// Show resolved configuration and where each value came from
    Cfg,
}
