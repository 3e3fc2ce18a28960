use std::collections::HashSet;

use gavel_engine::cards::{all_ranks, suit_cards, Card, Rank as R, Suit as S};
use gavel_engine::deck::{Deal, Deck};
use gavel_engine::engine::AuctionEngine;
use gavel_engine::errors::GameError;
use gavel_engine::player::PlayerId;
use gavel_engine::rules::{GameOutcome, PRIZE_TOTAL};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn c(s: S, r: R) -> Card {
    Card { suit: s, rank: r }
}

fn ascending_prizes() -> AuctionEngine {
    AuctionEngine::from_deal(&Deal::with_prizes(suit_cards(S::Diamonds))).unwrap()
}

#[test]
fn final_result_before_round_13_is_rejected() {
    let mut eng = ascending_prizes();
    assert_eq!(
        eng.final_result(),
        Err(GameError::GameNotComplete { rounds_played: 0 })
    );
    for rank in &all_ranks()[..12] {
        eng.resolve_round(c(S::Hearts, *rank), c(S::Clubs, *rank))
            .unwrap();
    }
    assert_eq!(
        eng.final_result(),
        Err(GameError::GameNotComplete { rounds_played: 12 })
    );
}

#[test]
fn tie_on_last_round_leaves_prize_unclaimed() {
    let mut eng = ascending_prizes();
    let ranks = all_ranks();
    // P1 edges out P2 for eleven rounds, P2 takes the twelfth, Aces tie last
    for i in 0..11 {
        let rec = eng
            .resolve_round(c(S::Hearts, ranks[i + 1]), c(S::Clubs, ranks[i]))
            .unwrap();
        assert_eq!(rec.outcome.winner(), Some(PlayerId::P1));
    }
    let rec = eng
        .resolve_round(c(S::Hearts, R::Two), c(S::Clubs, R::King))
        .unwrap();
    assert_eq!(rec.outcome.winner(), Some(PlayerId::P2));
    let last = eng
        .resolve_round(c(S::Hearts, R::Ace), c(S::Clubs, R::Ace))
        .unwrap();
    assert_eq!(last.round, 13);
    assert_eq!(last.prize, c(S::Diamonds, R::Ace));
    assert!(last.outcome.is_tie());
    assert!(eng.is_terminal());

    let result = eng.final_result().unwrap();
    assert_eq!(result.score_p1, 77);
    assert_eq!(result.score_p2, 13);
    assert_eq!(result.unclaimed_value, 14);
    assert_eq!(result.outcome, GameOutcome::P1Win);
    assert_eq!(
        result.score_p1 + result.score_p2 + result.unclaimed_value,
        PRIZE_TOTAL
    );

    let err = eng
        .resolve_round(c(S::Hearts, R::Ace), c(S::Clubs, R::Ace))
        .unwrap_err();
    assert_eq!(err, GameError::GameAlreadyComplete);
    assert_eq!(eng.history().len(), 13);
}

#[test]
fn all_ties_is_a_scoreless_draw() {
    let mut eng = ascending_prizes();
    for rank in all_ranks() {
        eng.resolve_round(c(S::Hearts, rank), c(S::Clubs, rank))
            .unwrap();
    }
    let result = eng.final_result().unwrap();
    assert_eq!(result.score_p1, 0);
    assert_eq!(result.score_p2, 0);
    assert_eq!(result.unclaimed_value, PRIZE_TOTAL);
    assert_eq!(result.outcome, GameOutcome::Draw);
    // carry-forward never moved past the first prize
    assert!(eng
        .history()
        .iter()
        .all(|r| r.prize == c(S::Diamonds, R::Two)));
}

#[test]
fn prizes_are_conserved_across_random_games() {
    for seed in 0..200u64 {
        let deal = Deck::new_with_seed(seed).with_suit_shuffle(true).deal();
        let mut eng = AuctionEngine::from_deal(&deal).unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(seed ^ 0x5eed);
        let mut bids_p1 = deal.hand_p1.clone();
        let mut bids_p2 = deal.hand_p2.clone();
        bids_p1.shuffle(&mut rng);
        bids_p2.shuffle(&mut rng);

        for (b1, b2) in bids_p1.into_iter().zip(bids_p2) {
            eng.resolve_round(b1, b2).unwrap();

            // every Diamond is in exactly one place
            let mut seen = HashSet::new();
            let queued = eng.prizes_remaining().copied();
            let won_p1 = eng.score_pile(PlayerId::P1).cards().iter().copied();
            let won_p2 = eng.score_pile(PlayerId::P2).cards().iter().copied();
            for prize in queued.chain(won_p1).chain(won_p2) {
                assert!(seen.insert(prize), "seed {}: {} duplicated", seed, prize);
            }
            assert_eq!(seen.len(), 13, "seed {}: prize lost", seed);
        }

        let result = eng.final_result().unwrap();
        assert!(result.is_conserved(), "seed {}: {:?}", seed, result);
        assert_eq!(
            result.score_p1 + result.score_p2 + result.unclaimed_value,
            104
        );
        let expected = match result.score_p1.cmp(&result.score_p2) {
            std::cmp::Ordering::Greater => GameOutcome::P1Win,
            std::cmp::Ordering::Less => GameOutcome::P2Win,
            std::cmp::Ordering::Equal => GameOutcome::Draw,
        };
        assert_eq!(result.outcome, expected);
    }
}
