//! Whole-deck enumeration and grid rendering.

extern crate alloc;

use alloc::string::{String, ToString};

use crate::card::Card;
use crate::rank::Rank;
use crate::suit::Suit;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Iterates every card of a standard deck in fixed order.
///
/// Suits follow [`Suit::ALL`] and ranks run ace through king within each
/// suit, matching the layout of [`render`].
#[must_use]
pub fn cards() -> impl Iterator<Item = Card> {
    Suit::ALL
        .into_iter()
        .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(rank, suit)))
}

/// Renders the full deck as a four-row text grid.
///
/// Each row holds the thirteen cards of one suit in ascending rank order,
/// every card in compact form followed by a single space, and ends with a
/// newline, including the last row.
///
/// # Example
///
/// ```
/// let grid = cardstock::deck::render();
///
/// assert!(grid.starts_with("A ♥ 2 ♥"));
/// assert_eq!(grid.lines().count(), 4);
/// ```
#[must_use]
pub fn render() -> String {
    let mut grid = String::new();

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            grid.push_str(&Card::new(rank, suit).to_string());
            grid.push(' ');
        }
        grid.push('\n');
    }

    grid
}

/// Prints the rendered deck grid to standard output, followed by a final
/// newline.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub fn print() {
    println!("{}", render());
}
