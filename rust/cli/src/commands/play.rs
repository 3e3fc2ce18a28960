//! # Play Command
//!
//! Runs one game with bids read from a line-oriented source, normally stdin.
//!
//! Each round expects `<bid_p1> <bid_p2>`; a bid is a card such as `AH` or a
//! bare rank in that player's suit. Lines that don't parse and bids the
//! engine rejects are reported on the error stream and the same round is
//! asked for again. `q` or end of input abandons the game.
//!
//! With `--output`, a completed game is appended to a JSONL file as a
//! `GameRecord`.

use crate::error::CliError;
use crate::formatters::{format_card, format_cards, format_result, format_round, suit_name};
use crate::io_utils::{ensure_parent_dir, read_stdin_line};
use crate::ui;
use crate::validation::{ParseResult, parse_bid_line};
use gavel_engine::deck::{Deal, Deck};
use gavel_engine::engine::{AuctionEngine, ROUNDS};
use gavel_engine::logger::{GameLogger, GameRecord};
use gavel_engine::player::PlayerId;
use std::io::{BufRead, Write};
use std::path::Path;

/// Handle the play command.
///
/// # Arguments
///
/// * `seed` - RNG seed for the deal (default: random)
/// * `output` - JSONL file the finished game is appended to
/// * `shuffle_suits` - Randomly assign Hearts and Clubs to the players
/// * `out` - Output stream for game display
/// * `err` - Error stream for rejected input and warnings
/// * `stdin` - Source of bid lines
///
/// # Returns
///
/// `Ok(())` both when the game completes and when it is abandoned.
/// `Err(CliError)` only for I/O failures writing output or the record.
///
/// # Examples
///
/// ```rust
/// use gavel_cli::commands::handle_play_command;
/// use std::io::Cursor;
///
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let mut bids = Cursor::new("q\n");
/// handle_play_command(Some(1), None, false, &mut out, &mut err, &mut bids).unwrap();
/// assert!(String::from_utf8(out).unwrap().contains("abandoned"));
/// ```
pub fn handle_play_command(
    seed: Option<u64>,
    output: Option<String>,
    shuffle_suits: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let base_seed = seed.unwrap_or_else(rand::random);
    let deal = Deck::new_with_seed(base_seed)
        .with_suit_shuffle(shuffle_suits)
        .deal();
    let mut engine = AuctionEngine::from_deal(&deal)?;

    writeln!(out, "Seed: {}", base_seed)?;
    writeln!(
        out,
        "P1 bids with {}, P2 bids with {}",
        suit_name(&deal.suit_p1),
        suit_name(&deal.suit_p2)
    )?;

    let completed = play_rounds(&mut engine, &deal, out, err, stdin)?;

    if !completed {
        writeln!(
            out,
            "Game abandoned after {} of {} rounds",
            engine.rounds_played(),
            ROUNDS
        )?;
        if output.is_some() {
            ui::display_warning(err, "abandoned game was not recorded")?;
        }
        return Ok(());
    }

    let result = engine.final_result()?;
    writeln!(out, "{}", format_result(&result))?;

    if let Some(path) = output {
        ensure_parent_dir(Path::new(&path))?;
        let mut logger = GameLogger::append(&path)?;
        let record = GameRecord::from_engine(logger.next_id(), Some(base_seed), deal, &engine);
        logger.write(&record)?;
        tracing::info!(game_id = %record.game_id, path = %path, "game recorded");
        writeln!(out, "Saved game {} to {}", record.game_id, path)?;
    }
    Ok(())
}

/// Drives the engine until it is terminal. Returns `false` if the bid
/// source quit or ran dry first.
fn play_rounds(
    engine: &mut AuctionEngine,
    deal: &Deal,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<bool, CliError> {
    while !engine.is_terminal() {
        let Some(prize) = engine.active_prize() else {
            break;
        };
        let carry = if engine.snapshot().carry_forward {
            " (carried forward)"
        } else {
            ""
        };
        writeln!(
            out,
            "Round {}/{}: prize {}{}",
            engine.round(),
            ROUNDS,
            format_card(&prize),
            carry
        )?;
        writeln!(
            out,
            "  P1 hand: {}",
            format_cards(&engine.hand(PlayerId::P1).to_vec())
        )?;
        writeln!(
            out,
            "  P2 hand: {}",
            format_cards(&engine.hand(PlayerId::P2).to_vec())
        )?;
        writeln!(out, "Enter bids '<p1> <p2>' (q to quit):")?;

        let Some(line) = read_stdin_line(stdin) else {
            return Ok(false);
        };

        match parse_bid_line(&line, deal.suit_p1, deal.suit_p2) {
            ParseResult::Bids(bid_p1, bid_p2) => match engine.resolve_round(bid_p1, bid_p2) {
                Ok(record) => writeln!(out, "{}", format_round(&record))?,
                Err(e) => ui::write_error(err, &e.to_string())?,
            },
            ParseResult::Quit => return Ok(false),
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
        }
    }
    Ok(engine.is_terminal())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gavel_engine::cards::all_ranks;
    use std::io::Cursor;

    /// Thirteen lines spending both hands lowest first.
    fn ascending_bids() -> String {
        all_ranks()
            .iter()
            .map(|r| format!("{} {}\n", r.token(), r.token()))
            .collect()
    }

    #[test]
    fn test_full_game_all_ties() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(ascending_bids());

        handle_play_command(Some(5), None, false, &mut out, &mut err, &mut stdin).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Round 13/13"));
        assert!(output.contains("Final: P1 0 - P2 0 (unclaimed 104)"));
        assert!(output.contains("Result: Draw"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_invalid_line_reprompts_same_round() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let input = format!("nonsense\nA\n{}", ascending_bids());
        let mut stdin = Cursor::new(input);

        handle_play_command(Some(5), None, false, &mut out, &mut err, &mut stdin).unwrap();

        let errors = String::from_utf8(err).unwrap();
        assert_eq!(errors.lines().count(), 2, "{}", errors);
        assert!(errors.lines().all(|l| l.starts_with("Error: ")));

        let output = String::from_utf8(out).unwrap();
        assert_eq!(output.matches("Round 1/13").count(), 3);
        assert!(output.contains("Result: Draw"));
    }

    #[test]
    fn test_reused_card_is_rejected_by_engine() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new("A A\nA K\nq\n");

        handle_play_command(Some(5), None, false, &mut out, &mut err, &mut stdin).unwrap();

        let errors = String::from_utf8(err).unwrap();
        assert!(errors.contains("AH"), "{}", errors);
        assert!(errors.contains("P1"), "{}", errors);
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Game abandoned after 1 of 13 rounds"));
    }

    #[test]
    fn test_queen_opening_bid_finishes_game() {
        use gavel_engine::cards::Rank;

        // Q vs 5 first, then the remaining cards lowest first
        let rest_p1: Vec<Rank> = all_ranks().into_iter().filter(|r| *r != Rank::Queen).collect();
        let rest_p2: Vec<Rank> = all_ranks().into_iter().filter(|r| *r != Rank::Five).collect();
        let mut input = String::from("Q 5\n");
        for (a, b) in rest_p1.iter().zip(&rest_p2) {
            input.push_str(&format!("{} {}\n", a.token(), b.token()));
        }

        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(input);
        handle_play_command(Some(5), None, false, &mut out, &mut err, &mut stdin).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(!output.contains("abandoned"), "{}", output);
        assert!(output.contains("Round 1: prize"));
        assert!(output.contains("P1 takes the prize"));
        assert!(output.contains("Result: "));
        assert!(err.is_empty(), "{}", String::from_utf8_lossy(&err));
    }

    #[test]
    fn test_eof_abandons_game() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new("");

        let result = handle_play_command(Some(5), None, false, &mut out, &mut err, &mut stdin);
        assert!(result.is_ok());
        assert!(String::from_utf8(out).unwrap().contains("after 0 of 13"));
    }

    #[test]
    fn test_output_appends_completed_game() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("games.jsonl");
        let path_str = path.to_str().unwrap().to_string();

        for _ in 0..2 {
            let mut out = Vec::new();
            let mut err = Vec::new();
            let mut stdin = Cursor::new(ascending_bids());
            handle_play_command(
                Some(8),
                Some(path_str.clone()),
                true,
                &mut out,
                &mut err,
                &mut stdin,
            )
            .unwrap();
        }

        let content = std::fs::read_to_string(&path).unwrap();
        let records: Vec<GameRecord> = content
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(records.len(), 2);
        assert!(records[0].game_id.ends_with("-000001"));
        assert!(records[1].game_id.ends_with("-000002"));
        assert_eq!(records[0].seed, Some(8));
        assert_eq!(records[0].rounds.len(), 13);
        assert!(records[0].result.is_some());
    }

    #[test]
    fn test_unwritable_output_directory_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let path = blocker.join("games.jsonl");

        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(ascending_bids());
        let result = handle_play_command(
            Some(8),
            Some(path.to_str().unwrap().to_string()),
            false,
            &mut out,
            &mut err,
            &mut stdin,
        );

        match result {
            Err(CliError::InvalidInput(msg)) => {
                assert!(msg.starts_with("Failed to create directory"), "{}", msg)
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_abandoned_game_is_not_recorded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("games.jsonl");

        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new("2 3\nq\n");
        handle_play_command(
            Some(8),
            Some(path.to_str().unwrap().to_string()),
            false,
            &mut out,
            &mut err,
            &mut stdin,
        )
        .unwrap();

        assert!(!path.exists());
        assert!(String::from_utf8(err).unwrap().contains("WARNING:"));
    }
}
