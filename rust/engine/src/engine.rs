use std::collections::{BTreeSet, VecDeque};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cards::{Card, Suit};
use crate::deck::Deal;
use crate::errors::GameError;
use crate::player::{Hand, PlayerId, ScorePile, SUIT_SIZE};
use crate::rules::{compare_bids, FinalResult, RoundOutcome, RoundRecord};

/// Number of rounds in a game; one per card in each hand.
pub const ROUNDS: usize = SUIT_SIZE;

/// Sealed-bid auction state machine for one two-player game.
/// Owns both hands, the prize queue, both score piles and the round history.
///
/// Every call to [`AuctionEngine::resolve_round`] either applies a whole
/// round or leaves the engine untouched.
///
/// # Examples
///
/// ```
/// use gavel_engine::cards::{Card, Rank, Suit};
/// use gavel_engine::deck::Deck;
/// use gavel_engine::engine::AuctionEngine;
/// use gavel_engine::rules::RoundOutcome;
///
/// let deal = Deck::new_with_seed(7).deal();
/// let mut engine = AuctionEngine::from_deal(&deal).unwrap();
///
/// let record = engine
///     .resolve_round(
///         Card::new(Rank::Ace, Suit::Hearts),
///         Card::new(Rank::King, Suit::Clubs),
///     )
///     .unwrap();
/// assert_eq!(record.outcome, RoundOutcome::P1Wins);
/// assert_eq!(engine.hand(gavel_engine::player::PlayerId::P1).len(), 12);
///
/// // final_result is only available once all 13 rounds are resolved
/// assert!(engine.final_result().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct AuctionEngine {
    /// Next round to resolve, 1-based; `ROUNDS + 1` once terminal
    round: usize,
    /// Remaining bidding cards, indexed by [`PlayerId::index`]
    hands: [Hand; 2],
    /// Unawarded prizes; the front is the active prize
    prizes: VecDeque<Card>,
    /// Won prizes, indexed by [`PlayerId::index`]
    piles: [ScorePile; 2],
    /// One record per resolved round
    history: Vec<RoundRecord>,
}

impl AuctionEngine {
    /// Creates an engine for a fresh game.
    ///
    /// Hands may be in any order; `prizes` is the reveal order.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidDeal`] if either hand is not a full bidding suit,
    /// both players hold the same suit, or `prizes` is not the 13 Diamonds.
    pub fn new(hand_p1: &[Card], hand_p2: &[Card], prizes: &[Card]) -> Result<Self, GameError> {
        let hand_p1 = Hand::from_cards(hand_p1)?;
        let hand_p2 = Hand::from_cards(hand_p2)?;
        if hand_p1.suit() == hand_p2.suit() {
            return Err(GameError::InvalidDeal(format!(
                "both players hold {:?}",
                hand_p1.suit()
            )));
        }
        validate_prizes(prizes)?;
        Ok(Self {
            round: 1,
            hands: [hand_p1, hand_p2],
            prizes: prizes.iter().copied().collect(),
            piles: [ScorePile::new(), ScorePile::new()],
            history: Vec::with_capacity(ROUNDS),
        })
    }

    pub fn from_deal(deal: &Deal) -> Result<Self, GameError> {
        Self::new(&deal.hand_p1, &deal.hand_p2, &deal.prizes)
    }

    /// Resolves one round from both players' simultaneously revealed bids.
    ///
    /// Both bids leave their hands whatever the outcome. The higher value
    /// takes the active prize; equal values leave it active for the next
    /// round.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameAlreadyComplete`] after the 13th round
    /// - [`GameError::InvalidBid`] if a bid is not in that player's hand
    ///   (player 1 is checked first)
    pub fn resolve_round(&mut self, bid_p1: Card, bid_p2: Card) -> Result<RoundRecord, GameError> {
        if self.is_terminal() {
            return Err(GameError::GameAlreadyComplete);
        }
        for (player, bid) in [(PlayerId::P1, bid_p1), (PlayerId::P2, bid_p2)] {
            if !self.hands[player.index()].contains(&bid) {
                return Err(GameError::InvalidBid { player, card: bid });
            }
        }
        let prize = *self.prizes.front().ok_or(GameError::GameAlreadyComplete)?;

        // validated above; nothing below can fail
        self.hands[PlayerId::P1.index()].remove(&bid_p1);
        self.hands[PlayerId::P2.index()].remove(&bid_p2);

        let outcome = compare_bids(bid_p1, bid_p2);
        if let Some(winner) = outcome.winner() {
            self.prizes.pop_front();
            self.piles[winner.index()].push(prize);
        }

        let record = RoundRecord {
            round: self.round,
            prize,
            bid_p1,
            bid_p2,
            outcome,
        };
        self.history.push(record);
        self.round += 1;

        debug!(
            round = record.round,
            prize = %prize,
            bid_p1 = %bid_p1,
            bid_p2 = %bid_p2,
            outcome = ?outcome,
            "round resolved"
        );
        if self.is_terminal() {
            info!(
                score_p1 = self.score(PlayerId::P1),
                score_p2 = self.score(PlayerId::P2),
                unclaimed = self.unclaimed_value(),
                "game complete"
            );
        }
        Ok(record)
    }

    /// Final scores and winner.
    ///
    /// # Errors
    ///
    /// [`GameError::GameNotComplete`] until all 13 rounds are resolved.
    pub fn final_result(&self) -> Result<FinalResult, GameError> {
        if !self.is_terminal() {
            return Err(GameError::GameNotComplete {
                rounds_played: self.rounds_played(),
            });
        }
        Ok(FinalResult::from_scores(
            self.score(PlayerId::P1),
            self.score(PlayerId::P2),
            self.unclaimed_value(),
        ))
    }

    /// The round about to be played (1..=13), or 14 once terminal.
    pub fn round(&self) -> usize {
        self.round
    }

    pub fn rounds_played(&self) -> usize {
        self.history.len()
    }

    pub fn is_terminal(&self) -> bool {
        self.round > ROUNDS
    }

    /// Prize up for auction in the next round, or `None` once terminal.
    pub fn active_prize(&self) -> Option<Card> {
        if self.is_terminal() {
            None
        } else {
            self.prizes.front().copied()
        }
    }

    /// Prizes not yet awarded, active prize first.
    pub fn prizes_remaining(&self) -> impl Iterator<Item = &Card> + '_ {
        self.prizes.iter()
    }

    pub fn hand(&self, player: PlayerId) -> &Hand {
        &self.hands[player.index()]
    }

    /// Whether `card` is still available for `player` to bid.
    pub fn can_bid(&self, player: PlayerId, card: &Card) -> bool {
        !self.is_terminal() && self.hands[player.index()].contains(card)
    }

    pub fn score_pile(&self, player: PlayerId) -> &ScorePile {
        &self.piles[player.index()]
    }

    pub fn score(&self, player: PlayerId) -> u32 {
        self.piles[player.index()].total()
    }

    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    fn unclaimed_value(&self) -> u32 {
        self.prizes.iter().map(Card::value).sum()
    }

    /// Serializable view of the current state for presentation layers.
    pub fn snapshot(&self) -> GameSnapshot {
        let players = PlayerId::all().map(|player| PlayerSnapshot {
            player,
            suit: self.hand(player).suit(),
            cards_left: self.hand(player).len(),
            score: self.score(player),
            won: self.score_pile(player).cards().to_vec(),
        });
        GameSnapshot {
            round: self.round,
            terminal: self.is_terminal(),
            players,
            prizes_remaining: self.prizes.len(),
            active_prize: self.active_prize(),
            carry_forward: self
                .history
                .last()
                .map(|r| r.outcome == RoundOutcome::Tie)
                .unwrap_or(false),
        }
    }
}

fn validate_prizes(prizes: &[Card]) -> Result<(), GameError> {
    if let Some(stray) = prizes.iter().find(|c| c.suit != Suit::Diamonds) {
        return Err(GameError::InvalidDeal(format!(
            "prize {} is not a Diamond",
            stray
        )));
    }
    let distinct: BTreeSet<&Card> = prizes.iter().collect();
    if distinct.len() != prizes.len() || prizes.len() != ROUNDS {
        return Err(GameError::InvalidDeal(format!(
            "prize queue must hold the {} distinct Diamonds, got {} cards ({} distinct)",
            ROUNDS,
            prizes.len(),
            distinct.len()
        )));
    }
    Ok(())
}

/// Point-in-time summary of one player.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub player: PlayerId,
    pub suit: Suit,
    pub cards_left: usize,
    pub score: u32,
    pub won: Vec<Card>,
}

/// Point-in-time summary of a game, suitable for display or JSON output.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Next round to be played (14 once terminal)
    pub round: usize,
    pub terminal: bool,
    pub players: [PlayerSnapshot; 2],
    pub prizes_remaining: usize,
    pub active_prize: Option<Card>,
    /// The last round tied, so the active prize is being re-offered
    pub carry_forward: bool,
}
