use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::player::PlayerId;

/// Combined value of the 13 Diamond prizes (2 + 3 + ... + 14).
pub const PRIZE_TOTAL: u32 = 104;

/// Result of a single sealed-bid round.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Player 1 bid higher and takes the prize
    P1Wins,
    /// Player 2 bid higher and takes the prize
    P2Wins,
    /// Equal bids; the prize carries forward to the next round
    Tie,
}

impl RoundOutcome {
    pub fn winner(self) -> Option<PlayerId> {
        match self {
            RoundOutcome::P1Wins => Some(PlayerId::P1),
            RoundOutcome::P2Wins => Some(PlayerId::P2),
            RoundOutcome::Tie => None,
        }
    }

    pub fn is_tie(self) -> bool {
        self == RoundOutcome::Tie
    }
}

/// Compares two sealed bids by rank value alone.
///
/// Suits never break ties: a bid of `QH` against `QC` is a [`RoundOutcome::Tie`].
///
/// # Examples
///
/// ```
/// use gavel_engine::cards::{Card, Rank, Suit};
/// use gavel_engine::rules::{compare_bids, RoundOutcome};
///
/// let ace = Card::new(Rank::Ace, Suit::Hearts);
/// let king = Card::new(Rank::King, Suit::Clubs);
/// assert_eq!(compare_bids(ace, king), RoundOutcome::P1Wins);
/// assert_eq!(compare_bids(king, ace), RoundOutcome::P2Wins);
///
/// let two_h = Card::new(Rank::Two, Suit::Hearts);
/// let two_c = Card::new(Rank::Two, Suit::Clubs);
/// assert_eq!(compare_bids(two_h, two_c), RoundOutcome::Tie);
/// ```
pub fn compare_bids(bid_p1: Card, bid_p2: Card) -> RoundOutcome {
    match bid_p1.value().cmp(&bid_p2.value()) {
        std::cmp::Ordering::Greater => RoundOutcome::P1Wins,
        std::cmp::Ordering::Less => RoundOutcome::P2Wins,
        std::cmp::Ordering::Equal => RoundOutcome::Tie,
    }
}

/// Immutable audit entry for one resolved round.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Round index, 1 through 13
    pub round: usize,
    /// The prize that was active when the bids were revealed
    pub prize: Card,
    /// Player 1's bid
    pub bid_p1: Card,
    /// Player 2's bid
    pub bid_p2: Card,
    /// Who took the prize, or a tie
    pub outcome: RoundOutcome,
}

impl RoundRecord {
    /// The bid a given player committed this round.
    pub fn bid(&self, player: PlayerId) -> Card {
        match player {
            PlayerId::P1 => self.bid_p1,
            PlayerId::P2 => self.bid_p2,
        }
    }
}

/// Overall winner of a finished game.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    P1Win,
    P2Win,
    Draw,
}

/// Final tally once all 13 rounds are resolved.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct FinalResult {
    /// Sum of prize values won by player 1
    pub score_p1: u32,
    /// Sum of prize values won by player 2
    pub score_p2: u32,
    /// Higher total wins; equal totals draw
    pub outcome: GameOutcome,
    /// Value of any prize left in the queue by a tie on the last round
    pub unclaimed_value: u32,
}

impl FinalResult {
    pub fn from_scores(score_p1: u32, score_p2: u32, unclaimed_value: u32) -> Self {
        let outcome = match score_p1.cmp(&score_p2) {
            std::cmp::Ordering::Greater => GameOutcome::P1Win,
            std::cmp::Ordering::Less => GameOutcome::P2Win,
            std::cmp::Ordering::Equal => GameOutcome::Draw,
        };
        Self {
            score_p1,
            score_p2,
            outcome,
            unclaimed_value,
        }
    }

    pub fn score(&self, player: PlayerId) -> u32 {
        match player {
            PlayerId::P1 => self.score_p1,
            PlayerId::P2 => self.score_p2,
        }
    }

    /// Every prize point is either scored or left unclaimed.
    pub fn is_conserved(&self) -> bool {
        self.score_p1 + self.score_p2 + self.unclaimed_value == PRIZE_TOTAL
    }
}
