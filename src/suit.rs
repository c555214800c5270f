//! Card suits.

use core::fmt;

use crate::error::CardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts (`♥`).
    Hearts,
    /// Diamonds (`♦`).
    Diamonds,
    /// Clubs (`♣`).
    Clubs,
    /// Spades (`♠`).
    Spades,
}

impl Suit {
    /// All four suits in deck-rendering order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the Unicode glyph printed for this suit.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
            Self::Spades => '♠',
        }
    }

    /// Looks up the suit named by a Unicode glyph.
    ///
    /// This is the validation path for raw symbol input; suit values
    /// themselves are always valid.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::UnknownSuitSymbol`] when `symbol` is not one of
    /// `♥`, `♦`, `♣`, or `♠`.
    ///
    /// # Example
    ///
    /// ```
    /// use cardstock::Suit;
    ///
    /// assert_eq!(Suit::from_symbol('♠'), Ok(Suit::Spades));
    /// assert!(Suit::from_symbol('x').is_err());
    /// ```
    pub const fn from_symbol(symbol: char) -> Result<Self, CardError> {
        match symbol {
            '♥' => Ok(Self::Hearts),
            '♦' => Ok(Self::Diamonds),
            '♣' => Ok(Self::Clubs),
            '♠' => Ok(Self::Spades),
            _ => Err(CardError::UnknownSuitSymbol(symbol)),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Suit {
    type Error = CardError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Self::from_symbol(symbol)
    }
}
