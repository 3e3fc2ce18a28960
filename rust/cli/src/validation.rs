//! Input parsing for the `play` command.
//!
//! Each round the bid source supplies one line holding both bids,
//! `<bid_p1> <bid_p2>`. A bid is either a full card (`AH`, `10c`) or a bare
//! rank (`A`, `10`, `T`) read as that player's own suit. Whether the card is
//! still in the player's hand is the engine's call, not the parser's.

use gavel_engine::cards::{Card, Rank, Suit};

/// Outcome of parsing one bid line.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Both bids, player 1 first
    Bids(Card, Card),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parses a bid line given the suits each player bids with.
///
/// # Example
///
/// ```rust
/// # use gavel_cli::validation::{parse_bid_line, ParseResult};
/// use gavel_engine::cards::{Card, Rank, Suit};
///
/// assert_eq!(
///     parse_bid_line("A 10", Suit::Hearts, Suit::Clubs),
///     ParseResult::Bids(
///         Card::new(Rank::Ace, Suit::Hearts),
///         Card::new(Rank::Ten, Suit::Clubs),
///     )
/// );
///
/// assert_eq!(parse_bid_line("q", Suit::Hearts, Suit::Clubs), ParseResult::Quit);
///
/// match parse_bid_line("AH", Suit::Hearts, Suit::Clubs) {
///     ParseResult::Invalid(msg) => assert!(msg.contains("two bids")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_bid_line(input: &str, suit_p1: Suit, suit_p2: Suit) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }

    // a bare `q` in a two-token line is a Queen bid
    if parts.len() == 1 && (parts[0] == "q" || parts[0] == "quit") {
        return ParseResult::Quit;
    }

    if parts.len() != 2 {
        return ParseResult::Invalid(format!(
            "Expected two bids '<p1> <p2>' (e.g. 'AH 10C' or 'A 10'), got {} token(s)",
            parts.len()
        ));
    }

    let bid_p1 = match parse_bid(parts[0], suit_p1) {
        Ok(card) => card,
        Err(msg) => return ParseResult::Invalid(format!("P1: {}", msg)),
    };
    let bid_p2 = match parse_bid(parts[1], suit_p2) {
        Ok(card) => card,
        Err(msg) => return ParseResult::Invalid(format!("P2: {}", msg)),
    };
    ParseResult::Bids(bid_p1, bid_p2)
}

/// A single bid token: a card, or a bare rank in `own_suit`.
pub fn parse_bid(token: &str, own_suit: Suit) -> Result<Card, String> {
    if let Ok(card) = token.parse::<Card>() {
        return Ok(card);
    }
    Rank::from_token(token)
        .map(|rank| Card::new(rank, own_suit))
        .ok_or_else(|| format!("Unrecognized bid '{}'", token))
}
