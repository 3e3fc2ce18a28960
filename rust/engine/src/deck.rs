use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::cards::{bidding_suits, suit_cards, Card, Suit};

/// Starting position for one game: both bidding hands and the prize order.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    /// Suit held by player 1
    pub suit_p1: Suit,
    /// Suit held by player 2
    pub suit_p2: Suit,
    /// Player 1's bidding cards
    pub hand_p1: Vec<Card>,
    /// Player 2's bidding cards
    pub hand_p2: Vec<Card>,
    /// The 13 Diamonds in reveal order; index 0 is the first prize
    pub prizes: Vec<Card>,
}

impl Deal {
    /// Hearts to player 1, Clubs to player 2, with the given prize order.
    pub fn with_prizes(prizes: Vec<Card>) -> Self {
        Self::with_suits(Suit::Hearts, Suit::Clubs, prizes)
    }

    pub fn with_suits(suit_p1: Suit, suit_p2: Suit, prizes: Vec<Card>) -> Self {
        Self {
            suit_p1,
            suit_p2,
            hand_p1: suit_cards(suit_p1),
            hand_p2: suit_cards(suit_p2),
            prizes,
        }
    }
}

/// Seeded dealer for the prize suit and bidding suit assignment.
///
/// The same seed always yields the same sequence of deals.
///
/// # Examples
///
/// ```
/// use gavel_engine::deck::Deck;
///
/// let a = Deck::new_with_seed(42).deal();
/// let b = Deck::new_with_seed(42).deal();
/// assert_eq!(a, b);
/// assert_eq!(a.prizes.len(), 13);
/// ```
#[derive(Debug)]
pub struct Deck {
    rng: ChaCha20Rng,
    /// Randomly assign Hearts/Clubs to the players instead of Hearts to P1
    shuffle_suits: bool,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
            shuffle_suits: false,
        }
    }

    pub fn with_suit_shuffle(mut self, shuffle_suits: bool) -> Self {
        self.shuffle_suits = shuffle_suits;
        self
    }

    /// A freshly shuffled prize order.
    pub fn shuffle_prizes(&mut self) -> Vec<Card> {
        let mut prizes = suit_cards(Suit::Diamonds);
        prizes.shuffle(&mut self.rng);
        prizes
    }

    pub fn deal(&mut self) -> Deal {
        let mut suits = bidding_suits();
        if self.shuffle_suits {
            suits.shuffle(&mut self.rng);
        }
        let prizes = self.shuffle_prizes();
        Deal::with_suits(suits[0], suits[1], prizes)
    }
}
