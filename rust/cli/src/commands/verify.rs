//! Verify command handler module.
//!
//! Audits a JSONL file of game records. Every game is re-run through a fresh
//! engine from its recorded deal and bids, then checked for:
//!
//! - Valid and unique game ids (format: YYYYMMDD-NNNNNN)
//! - A deal that matches its seed, when one is recorded
//! - Bids the engine accepts, in a game of exactly 13 rounds
//! - Recorded rounds and result identical to the recomputed ones
//! - Prize conservation (`score_p1 + score_p2 + unclaimed == 104`)
//!
//! Errors are collected using the shared `BatchValidationError` pattern for structured reporting.

use crate::error::{BatchValidationError, CliError};
use crate::io_utils::read_text_auto;
use gavel_engine::deck::{Deal, Deck};
use gavel_engine::engine::ROUNDS;
use gavel_engine::logger::GameRecord;
use gavel_engine::rules::PRIZE_TOTAL;
use std::collections::HashSet;
use std::io::Write;

/// Type alias for verify-specific batch validation errors.
/// The `usize` context is the 1-based game index in the file.
type VerifyError = BatchValidationError<usize>;

/// Handle the verify command.
///
/// # Arguments
///
/// * `input` - Path to the JSONL file to verify (plain or `.zst`)
/// * `out` - Output stream for the verdict line
/// * `err` - Output stream for per-game errors and the summary
///
/// # Returns
///
/// `Ok(())` if every game passes; otherwise an `Err` that maps to exit code `2`.
///
/// # Example
///
/// ```no_run
/// # use std::io;
/// # use gavel_cli::commands::handle_verify_command;
/// let input = "data/games.jsonl".to_string();
/// let result = handle_verify_command(input, &mut io::stdout(), &mut io::stderr());
/// ```
pub fn handle_verify_command(
    input: String,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let mut errors: Vec<VerifyError> = Vec::new();
    let mut seen_ids: HashSet<String> = HashSet::new();
    let mut games = 0usize;

    let content = read_text_auto(&input)?;

    for line in content.lines().filter(|l| !l.trim().is_empty()) {
        games += 1;
        let record: GameRecord = match serde_json::from_str(line) {
            Ok(r) => r,
            Err(e) => {
                errors.push(VerifyError {
                    item_context: games,
                    message: format!("Invalid record structure: {}", e),
                });
                continue;
            }
        };

        if !valid_id(&record.game_id) {
            errors.push(VerifyError {
                item_context: games,
                message: format!("Invalid game_id format: {}", record.game_id),
            });
        }
        if !seen_ids.insert(record.game_id.clone()) {
            errors.push(VerifyError {
                item_context: games,
                message: format!("Duplicate game_id: {}", record.game_id),
            });
        }

        for message in check_record(&record) {
            errors.push(VerifyError {
                item_context: games,
                message,
            });
        }
    }

    tracing::debug!(games, errors = errors.len(), "verify finished");

    if errors.is_empty() {
        writeln!(out, "Verify: OK (games={})", games)?;
        return Ok(());
    }

    writeln!(out, "Verify: FAIL (games={})", games)?;
    writeln!(err)?;
    writeln!(err, "Errors found:")?;
    for error in &errors {
        writeln!(err, "  Game {}", error)?;
    }
    writeln!(err)?;
    let invalid_games: HashSet<usize> = errors.iter().map(|e| e.item_context).collect();
    writeln!(
        err,
        "Summary: {} error(s) in {} games ({} invalid)",
        errors.len(),
        games,
        invalid_games.len()
    )?;
    Err(CliError::InvalidInput(format!(
        "{} validation errors found",
        errors.len()
    )))
}

fn valid_id(s: &str) -> bool {
    s.len() == 15
        && s.is_ascii()
        && s[0..8].chars().all(|c| c.is_ascii_digit())
        && &s[8..9] == "-"
        && s[9..].chars().all(|c| c.is_ascii_digit())
}

/// Replays one record and returns every problem found with it.
fn check_record(record: &GameRecord) -> Vec<String> {
    let mut problems = Vec::new();

    if let Some(seed) = record.seed {
        if !deal_matches_seed(&record.deal, seed) {
            problems.push(format!("Deal does not match seed {}", seed));
        }
    }

    if record.rounds.len() != ROUNDS {
        problems.push(format!(
            "Incomplete game: {} of {} rounds recorded",
            record.rounds.len(),
            ROUNDS
        ));
    }

    match &record.result {
        Some(result) if !result.is_conserved() => problems.push(format!(
            "Prize conservation violated: {} + {} + {} != {}",
            result.score_p1, result.score_p2, result.unclaimed_value, PRIZE_TOTAL
        )),
        Some(_) => {}
        None => problems.push("Missing result".to_string()),
    }

    let engine = match record.replay() {
        Ok(engine) => engine,
        Err(e) => {
            problems.push(format!("Replay failed: {}", e));
            return problems;
        }
    };

    if let Some(pos) = engine
        .history()
        .iter()
        .zip(&record.rounds)
        .position(|(replayed, recorded)| replayed != recorded)
    {
        problems.push(format!(
            "Recorded round {} differs from replay",
            record.rounds[pos].round
        ));
    }

    if let (Some(recorded), Ok(replayed)) = (&record.result, engine.final_result()) {
        if *recorded != replayed {
            problems.push(format!(
                "Recorded result P1 {} - P2 {} differs from replay P1 {} - P2 {}",
                recorded.score_p1, recorded.score_p2, replayed.score_p1, replayed.score_p2
            ));
        }
    }

    problems
}

/// A recorded seed must reproduce the recorded deal, with or without the
/// suit shuffle.
fn deal_matches_seed(deal: &Deal, seed: u64) -> bool {
    [false, true].iter().any(|&shuffle_suits| {
        Deck::new_with_seed(seed)
            .with_suit_shuffle(shuffle_suits)
            .deal()
            == *deal
    })
}
