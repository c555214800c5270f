//! A single playing card.

use core::fmt;

use crate::error::CardError;
use crate::rank::Rank;
use crate::suit::Suit;

/// A playing card from a standard 52-card deck.
///
/// Pairs a validated [`Rank`] with a [`Suit`], so every value of this type
/// is a legal card. The default card is the ace of hearts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    rank: Rank,
    /// The suit of the card.
    suit: Suit,
}

impl Card {
    /// Creates a card from an already-validated rank and suit.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Creates a card from a raw rank value and a suit.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::RankOutOfRange`] when `rank` is outside
    /// `1..=13`; no card is constructed.
    ///
    /// # Example
    ///
    /// ```
    /// use cardstock::{Card, Suit};
    ///
    /// let card = Card::from_values(12, Suit::Clubs)?;
    /// assert_eq!(card.to_string(), "Q ♣");
    /// assert!(Card::from_values(0, Suit::Clubs).is_err());
    /// # Ok::<(), cardstock::CardError>(())
    /// ```
    pub const fn from_values(rank: u8, suit: Suit) -> Result<Self, CardError> {
        match Rank::new(rank) {
            Ok(rank) => Ok(Self { rank, suit }),
            Err(err) => Err(err),
        }
    }

    /// Returns the rank.
    #[must_use]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    /// Returns the suit.
    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Sets the rank if `rank` is within `1..=13`.
    ///
    /// Returns whether the update was applied; on `false` the card is
    /// unchanged.
    #[must_use = "the update is skipped when the rank is invalid"]
    pub const fn set_rank(&mut self, rank: u8) -> bool {
        match Rank::new(rank) {
            Ok(rank) => {
                self.rank = rank;
                true
            }
            Err(_) => false,
        }
    }

    /// Sets the suit.
    ///
    /// Suit values carry their own validity, so this cannot fail.
    pub const fn set_suit(&mut self, suit: Suit) {
        self.suit = suit;
    }

    /// Sets rank and suit together.
    ///
    /// The update is atomic: if `rank` is invalid, neither field changes.
    /// Returns whether the update was applied.
    #[must_use = "the update is skipped when the rank is invalid"]
    pub const fn set_all(&mut self, rank: u8, suit: Suit) -> bool {
        match Rank::new(rank) {
            Ok(rank) => {
                self.rank = rank;
                self.suit = suit;
                true
            }
            Err(_) => false,
        }
    }
}

impl Default for Card {
    fn default() -> Self {
        Self::new(Rank::ACE, Suit::Hearts)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.rank, self.suit)
    }
}
