//! Entry point: build the Palmer Penguins Part 1 deck.
//!
//! Takes no arguments and reads no environment; the deck definition, asset
//! directory, and output path are fixed configuration.

use penguin_deck::Result;
use penguin_deck::deck::{DeckBuilder, DeckConfig};

fn main() -> Result<()> {
    let builder = DeckBuilder::new(DeckConfig::palmer_penguins_part1());
    let path = builder.save()?;

    println!("Created: {}", path.display());
    println!("Open with: soffice --impress '{}'", path.display());

    Ok(())
}
