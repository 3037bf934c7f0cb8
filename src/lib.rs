//! penguin-deck - Programmatic generation of the Palmer Penguins Part 1 slide deck
//!
//! This crate assembles a fixed 8-slide presentation from a static list of
//! slide records and writes it as an OpenDocument Presentation (.odp) file:
//! a ZIP package holding `content.xml`, `styles.xml`, `meta.xml`, a manifest,
//! and embedded copies of the referenced images.
//!
//! # Example
//!
//! ```no_run
//! use penguin_deck::deck::{DeckBuilder, DeckConfig};
//!
//! # fn main() -> penguin_deck::Result<()> {
//! let builder = DeckBuilder::new(DeckConfig::palmer_penguins_part1());
//! let path = builder.save()?;
//! println!("Created: {}", path.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Structure
//!
//! - [`deck`] - slide records, styles, page assembly, and the deck builder
//! - [`odf`] - ODF package (ZIP) writing
//! - [`common`] - shared error and XML utilities

/// Shared utilities: error types and XML escaping
pub mod common;

/// Slide deck model and builder
pub mod deck;

/// ODF package writing
pub mod odf;

// Re-export commonly used types for convenience
pub use common::{Error, Result};
pub use deck::{DeckBuilder, DeckConfig, SlideRecord};
