//! Card, hand and round formatters for terminal display.
//!
//! Pure functions turning engine values into the text the commands print.
//! Suits render as Unicode symbols with an ASCII letter fallback for
//! terminals that can't show them.
//!
//! - **Unicode mode**: ♥ ♦ ♣
//! - **ASCII mode**: h d c
//!
//! ## Example
//!
//! ```rust
//! use gavel_engine::cards::{Card, Rank, Suit};
//! use gavel_cli::formatters::{format_card, format_cards};
//!
//! let ace = Card::new(Rank::Ace, Suit::Hearts);
//! assert!(format_card(&ace) == "A♥" || format_card(&ace) == "Ah");
//! assert!(format_cards(&[ace]).starts_with("[A"));
//! ```

use gavel_engine::cards::{Card, Rank, Suit};
use gavel_engine::rules::{FinalResult, GameOutcome, RoundOutcome, RoundRecord};

/// Check if the terminal supports Unicode card symbols.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals
/// (TERM_PROGRAM) or VS Code (VSCODE_INJECTION). Unix-like systems are
/// assumed to support Unicode.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

/// Format a Suit using Unicode symbols with ASCII fallback.
pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
        }
        .to_string()
    } else {
        suit.letter().to_ascii_lowercase().to_string()
    }
}

/// Suit name as shown in headers ("Hearts", "Clubs", "Diamonds").
pub fn suit_name(suit: &Suit) -> &'static str {
    match suit {
        Suit::Hearts => "Hearts",
        Suit::Diamonds => "Diamonds",
        Suit::Clubs => "Clubs",
    }
}

/// Format a Rank (2-10, J, Q, K, A).
pub fn format_rank(rank: &Rank) -> String {
    rank.token().to_string()
}

/// Format a Card as rank followed by suit symbol.
///
/// # Example
///
/// ```rust
/// use gavel_engine::cards::{Card, Rank, Suit};
/// # use gavel_cli::formatters::format_card;
///
/// let ten = Card::new(Rank::Ten, Suit::Diamonds);
/// let formatted = format_card(&ten);
/// assert!(formatted == "10♦" || formatted == "10d");
/// ```
pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit))
}

/// Format a list of cards in bracket notation, `[]` when empty.
pub fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        "[]".to_string()
    } else {
        let formatted_cards: Vec<String> = cards.iter().map(format_card).collect();
        format!("[{}]", formatted_cards.join(" "))
    }
}

/// One line describing a resolved round.
///
/// # Example
///
/// ```rust
/// use gavel_engine::cards::{Card, Rank, Suit};
/// use gavel_engine::rules::{RoundOutcome, RoundRecord};
/// # use gavel_cli::formatters::format_round;
///
/// let record = RoundRecord {
///     round: 1,
///     prize: Card::new(Rank::King, Suit::Diamonds),
///     bid_p1: Card::new(Rank::Ace, Suit::Hearts),
///     bid_p2: Card::new(Rank::King, Suit::Clubs),
///     outcome: RoundOutcome::P1Wins,
/// };
/// let line = format_round(&record);
/// assert!(line.starts_with("Round 1:"));
/// assert!(line.ends_with("P1 takes the prize"));
/// ```
pub fn format_round(record: &RoundRecord) -> String {
    let verdict = match record.outcome {
        RoundOutcome::P1Wins => "P1 takes the prize".to_string(),
        RoundOutcome::P2Wins => "P2 takes the prize".to_string(),
        RoundOutcome::Tie => "tie, prize carries forward".to_string(),
    };
    format!(
        "Round {}: prize {} | P1 {} vs P2 {} -> {}",
        record.round,
        format_card(&record.prize),
        format_card(&record.bid_p1),
        format_card(&record.bid_p2),
        verdict
    )
}

/// Multi-line final summary: both scores, unclaimed value and the verdict.
pub fn format_result(result: &FinalResult) -> String {
    let verdict = match result.outcome {
        GameOutcome::P1Win => "P1 wins",
        GameOutcome::P2Win => "P2 wins",
        GameOutcome::Draw => "Draw",
    };
    format!(
        "Final: P1 {} - P2 {} (unclaimed {})\nResult: {}",
        result.score_p1, result.score_p2, result.unclaimed_value, verdict
    )
}
