use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{suit_cards, Card, Suit};
use crate::errors::GameError;

/// Number of cards in a full suit, and therefore rounds in a game.
pub const SUIT_SIZE: usize = 13;

/// Identifies one of the two bidders.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum PlayerId {
    /// Player 1
    P1,
    /// Player 2
    P2,
}

impl PlayerId {
    pub fn all() -> [PlayerId; 2] {
        [PlayerId::P1, PlayerId::P2]
    }

    /// Index into per-player arrays (0 or 1).
    pub fn index(self) -> usize {
        match self {
            PlayerId::P1 => 0,
            PlayerId::P2 => 1,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerId::P1 => write!(f, "P1"),
            PlayerId::P2 => write!(f, "P2"),
        }
    }
}

/// The cards a player may still bid with.
/// Starts as one complete non-Diamond suit and loses exactly one card per round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// The suit every card in this hand belongs to
    suit: Suit,
    /// Remaining cards; ordered so listings are deterministic
    cards: BTreeSet<Card>,
}

impl Hand {
    /// A complete 13-card hand of the given suit.
    pub fn full(suit: Suit) -> Self {
        Self {
            suit,
            cards: suit_cards(suit).into_iter().collect(),
        }
    }

    /// Builds a hand from dealt cards, in any order.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidDeal`] unless the cards are exactly the 13 distinct
    /// cards of one bidding suit.
    pub fn from_cards(cards: &[Card]) -> Result<Self, GameError> {
        let Some(first) = cards.first() else {
            return Err(GameError::InvalidDeal("hand is empty".into()));
        };
        let suit = first.suit;
        if suit == Suit::Diamonds {
            return Err(GameError::InvalidDeal(
                "Diamonds are prizes and cannot be dealt as a hand".into(),
            ));
        }
        if let Some(stray) = cards.iter().find(|c| c.suit != suit) {
            return Err(GameError::InvalidDeal(format!(
                "hand mixes suits: {} in a {:?} hand",
                stray, suit
            )));
        }
        let set: BTreeSet<Card> = cards.iter().copied().collect();
        if set.len() != cards.len() {
            return Err(GameError::InvalidDeal("hand contains duplicate cards".into()));
        }
        if set.len() != SUIT_SIZE {
            return Err(GameError::InvalidDeal(format!(
                "hand has {} cards, expected {}",
                set.len(),
                SUIT_SIZE
            )));
        }
        Ok(Self { suit, cards: set })
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Removes a card, returning whether it was held.
    pub fn remove(&mut self, card: &Card) -> bool {
        self.cards.remove(card)
    }

    /// Remaining cards, lowest first.
    pub fn cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter()
    }

    pub fn to_vec(&self) -> Vec<Card> {
        self.cards.iter().copied().collect()
    }
}

/// Prize cards won by one player.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScorePile {
    cards: Vec<Card>,
}

impl ScorePile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, prize: Card) {
        self.cards.push(prize);
    }

    /// Sum of the won prize values.
    pub fn total(&self) -> u32 {
        self.cards.iter().map(Card::value).sum()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Won prizes in the order they were awarded.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
