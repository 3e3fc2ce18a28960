//! Deal command handler.
//!
//! Deals one game's starting position and prints it: which suit each player
//! bids with, both hands and the order the Diamonds will be auctioned in.
//! A seed makes the deal reproducible; without one a random seed is drawn
//! and printed so the deal can be repeated.

use crate::error::CliError;
use crate::formatters::{format_cards, suit_name};
use gavel_engine::deck::Deck;
use std::io::Write;

/// Handle the deal command.
///
/// # Arguments
///
/// * `seed` - Optional RNG seed for deterministic dealing
/// * `shuffle_suits` - Randomly assign Hearts and Clubs to the players
/// * `out` - Output stream for command results
///
/// # Examples
///
/// ```rust
/// use gavel_cli::commands::handle_deal_command;
///
/// let mut out = Vec::new();
/// handle_deal_command(Some(42), false, &mut out).unwrap();
/// assert!(String::from_utf8(out).unwrap().starts_with("Seed: 42"));
/// ```
pub fn handle_deal_command(
    seed: Option<u64>,
    shuffle_suits: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let base_seed = seed.unwrap_or_else(rand::random);
    let deal = Deck::new_with_seed(base_seed)
        .with_suit_shuffle(shuffle_suits)
        .deal();
    tracing::debug!(seed = base_seed, shuffle_suits, "dealt game");

    writeln!(out, "Seed: {}", base_seed)?;
    writeln!(
        out,
        "P1 ({}): {}",
        suit_name(&deal.suit_p1),
        format_cards(&deal.hand_p1)
    )?;
    writeln!(
        out,
        "P2 ({}): {}",
        suit_name(&deal.suit_p2),
        format_cards(&deal.hand_p2)
    )?;
    writeln!(out, "Prizes: {}", format_cards(&deal.prizes))?;
    Ok(())
}
