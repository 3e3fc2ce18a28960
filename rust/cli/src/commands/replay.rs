//! Replay command handler.
//!
//! Prints every game in a JSONL record file round by round, as stored.
//! Plain and Zstandard-compressed (`.zst`) files are both accepted. Lines
//! that fail to parse are reported and skipped.

use crate::error::CliError;
use crate::formatters::{format_cards, format_result, format_round, suit_name};
use crate::io_utils::read_text_auto;
use crate::parse_json_or_continue;
use crate::ui;
use gavel_engine::engine::ROUNDS;
use gavel_engine::logger::GameRecord;
use std::io::Write;

/// Handle the replay command.
///
/// # Arguments
///
/// * `input` - Path to a JSONL file of game records
/// * `out` - Output stream for the replay
/// * `err` - Error stream for unreadable lines
///
/// # Returns
///
/// `Ok(())` once the file has been read, even if some lines were skipped;
/// `Err(CliError)` if the file itself can't be read.
pub fn handle_replay_command(
    input: String,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let content = read_text_auto(&input).map_err(|e| {
        let msg = format!("Failed to read {}: {}", input, e);
        let _ = ui::write_error(err, &msg);
        CliError::InvalidInput(msg)
    })?;

    let lines: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();
    if lines.is_empty() {
        writeln!(out, "No games found in file.")?;
        return Ok(());
    }

    let mut games_shown = 0usize;
    for (idx, line) in lines.iter().enumerate() {
        let game_num = idx + 1;
        let record: GameRecord = parse_json_or_continue!(line, err, format!("game {}", game_num));
        games_shown += 1;
        write_game(out, game_num, &record)?;
    }

    writeln!(out, "Replayed {} of {} game(s)", games_shown, lines.len())?;
    Ok(())
}

fn write_game(out: &mut dyn Write, game_num: usize, record: &GameRecord) -> std::io::Result<()> {
    let seed = record
        .seed
        .map(|s| s.to_string())
        .unwrap_or_else(|| "N/A".to_string());
    writeln!(
        out,
        "Game #{} {} (Seed: {})",
        game_num, record.game_id, seed
    )?;
    writeln!(out, "═══════════════════════════════════════")?;
    writeln!(
        out,
        "P1: {}, P2: {}",
        suit_name(&record.deal.suit_p1),
        suit_name(&record.deal.suit_p2)
    )?;
    writeln!(out, "Prizes: {}", format_cards(&record.deal.prizes))?;
    for round in &record.rounds {
        writeln!(out, "{}", format_round(round))?;
    }
    match &record.result {
        Some(result) => writeln!(out, "{}", format_result(result))?,
        None => writeln!(
            out,
            "Incomplete: {} of {} rounds recorded",
            record.rounds.len(),
            ROUNDS
        )?,
    }
    writeln!(out)?;
    Ok(())
}
