//! Error types for card operations.

use thiserror::Error;

/// Errors that can occur when building or mutating a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank value outside the valid `1..=13` range.
    #[error("rank {0} is out of range (valid ranks are 1-13)")]
    RankOutOfRange(u8),
    /// Character that does not name one of the four suits.
    #[error("character {0:?} does not name a suit")]
    UnknownSuitSymbol(char),
}
