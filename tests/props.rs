//! Property tests for rank validation and setter atomicity.

use cardstock::{Card, CardError, Rank, Suit};
use proptest::prelude::*;

fn any_suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Hearts),
        Just(Suit::Diamonds),
        Just(Suit::Clubs),
        Just(Suit::Spades),
    ]
}

proptest! {
    #[test]
    fn rank_construction_matches_the_valid_range(value in any::<u8>()) {
        match Rank::new(value) {
            Ok(rank) => {
                prop_assert!((1..=13).contains(&value));
                prop_assert_eq!(rank.get(), value);
            }
            Err(err) => {
                prop_assert!(!(1..=13).contains(&value));
                prop_assert_eq!(err, CardError::RankOutOfRange(value));
            }
        }
    }

    #[test]
    fn failed_set_rank_never_mutates(
        start in 1u8..=13,
        suit in any_suit(),
        value in any::<u8>(),
    ) {
        let mut card = Card::from_values(start, suit).unwrap();
        let before = card;

        if card.set_rank(value) {
            prop_assert_eq!(card.rank().get(), value);
            prop_assert_eq!(card.suit(), suit);
        } else {
            prop_assert_eq!(card, before);
        }
    }

    #[test]
    fn set_all_applies_both_fields_or_neither(
        start_rank in 1u8..=13,
        start_suit in any_suit(),
        rank in any::<u8>(),
        suit in any_suit(),
    ) {
        let mut card = Card::from_values(start_rank, start_suit).unwrap();
        let before = card;

        if card.set_all(rank, suit) {
            prop_assert_eq!(card.rank().get(), rank);
            prop_assert_eq!(card.suit(), suit);
        } else {
            prop_assert_eq!(card, before);
            prop_assert!(!(1..=13).contains(&rank));
        }
    }
}
