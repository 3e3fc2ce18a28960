use thiserror::Error;

use crate::cards::Card;
use crate::player::PlayerId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid bid: {card} is not in {player}'s hand")]
    InvalidBid { player: PlayerId, card: Card },
    #[error("Game not complete: {rounds_played} of 13 rounds played")]
    GameNotComplete { rounds_played: usize },
    #[error("Game already complete")]
    GameAlreadyComplete,
    #[error("Invalid deal: {0}")]
    InvalidDeal(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseCardError {
    #[error("empty card")]
    Empty,
    #[error("unknown suit in {0:?} (expected H, C or D)")]
    UnknownSuit(String),
    #[error("unknown rank in {0:?} (expected 2-10, J, Q, K or A)")]
    UnknownRank(String),
}
