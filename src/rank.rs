//! Validated card ranks.

use core::fmt;

use crate::error::CardError;

/// A validated card rank.
///
/// Wraps an integer in `1..=13`, where 1 is the ace and 11 through 13 are
/// the jack, queen, and king. The range is checked once at construction and
/// holds for the lifetime of the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rank(u8);

impl Rank {
    /// Lowest valid rank value (the ace).
    pub const MIN: u8 = 1;
    /// Highest valid rank value (the king).
    pub const MAX: u8 = 13;

    /// The ace.
    pub const ACE: Self = Self(1);
    /// The jack.
    pub const JACK: Self = Self(11);
    /// The queen.
    pub const QUEEN: Self = Self(12);
    /// The king.
    pub const KING: Self = Self(13);

    /// All thirteen ranks in ascending order.
    pub const ALL: [Self; 13] = [
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
        Self(10),
        Self(11),
        Self(12),
        Self(13),
    ];

    /// Creates a rank from its numeric value.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::RankOutOfRange`] when `value` is outside
    /// `1..=13`.
    ///
    /// # Example
    ///
    /// ```
    /// use cardstock::Rank;
    ///
    /// assert_eq!(Rank::new(13), Ok(Rank::KING));
    /// assert!(Rank::new(14).is_err());
    /// ```
    pub const fn new(value: u8) -> Result<Self, CardError> {
        match value {
            Self::MIN..=Self::MAX => Ok(Self(value)),
            _ => Err(CardError::RankOutOfRange(value)),
        }
    }

    /// Returns the raw numeric value (1-13).
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns the label printed on the card.
    ///
    /// 1 maps to `"A"`, 2 through 10 to their digits, and 11 through 13 to
    /// `"J"`, `"Q"`, and `"K"`.
    ///
    /// # Example
    ///
    /// ```
    /// use cardstock::Rank;
    ///
    /// assert_eq!(Rank::ACE.label(), "A");
    /// assert_eq!(Rank::new(10)?.label(), "10");
    /// # Ok::<(), cardstock::CardError>(())
    /// ```
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self.0 {
            1 => "A",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "J",
            12 => "Q",
            _ => "K",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.get()
    }
}
