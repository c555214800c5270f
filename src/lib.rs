//! A single playing card as a validated value type, with optional `no_std`
//! support.
//!
//! The crate provides a [`Card`] type that pairs a range-checked [`Rank`]
//! (1 = ace through 13 = king) with a closed [`Suit`] enum, so every
//! constructed value is a legal card. The [`deck`] module renders all 52
//! rank/suit combinations as a four-row text grid.
//!
//! # Example
//!
//! ```
//! use cardstock::{Card, Rank, Suit};
//!
//! let card = Card::new(Rank::ACE, Suit::Hearts);
//! assert_eq!(card.to_string(), "A ♥");
//! assert_eq!(card, Card::default());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod rank;
pub mod suit;

// Re-export main types
pub use card::Card;
pub use deck::DECK_SIZE;
pub use error::CardError;
pub use rank::Rank;
pub use suit::Suit;
