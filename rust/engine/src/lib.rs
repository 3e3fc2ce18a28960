//! # gavel-engine: Sealed-Bid Auction Card Game Core
//!
//! A deterministic two-player auction game. Each player holds one full
//! bidding suit (Hearts or Clubs); the thirteen Diamonds are shuffled into a
//! prize queue. Every round both players reveal one card at once, the higher
//! rank takes the active prize, and a tie leaves the prize in play for the
//! next round. After 13 rounds the higher prize total wins.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and short notation parsing
//! - [`deck`] - Deterministic dealing with ChaCha20 RNG
//! - [`engine`] - The round resolution state machine
//! - [`player`] - Player ids, hands and score piles
//! - [`rules`] - Bid comparison, round records and final scoring
//! - [`logger`] - GameRecord JSONL serialization and replay
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use gavel_engine::cards::{all_ranks, suit_cards, Card, Suit};
//! use gavel_engine::deck::Deal;
//! use gavel_engine::engine::AuctionEngine;
//!
//! let deal = Deal::with_prizes(suit_cards(Suit::Diamonds));
//! let mut engine = AuctionEngine::from_deal(&deal).unwrap();
//!
//! // both players spend their cards lowest first
//! for rank in all_ranks() {
//!     let bid_p1 = Card::new(rank, Suit::Hearts);
//!     let bid_p2 = Card::new(rank, Suit::Clubs);
//!     engine.resolve_round(bid_p1, bid_p2).unwrap();
//! }
//!
//! let result = engine.final_result().unwrap();
//! // every round tied, so no prize was ever awarded
//! assert_eq!(result.unclaimed_value, 104);
//! ```
//!
//! ## Deterministic Dealing
//!
//! ```rust
//! use gavel_engine::deck::Deck;
//!
//! // Same seed produces same prize order
//! let a = Deck::new_with_seed(42).deal();
//! let b = Deck::new_with_seed(42).deal();
//! assert_eq!(a.prizes, b.prizes);
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod logger;
pub mod player;
pub mod rules;
