//! Driver that prints a single card and the full 52-card deck grid.

use cardstock::{Card, deck};

fn main() {
    let card = Card::default();
    println!("Default card: {card}");
    println!();

    println!("Full deck:");
    deck::print();
}
