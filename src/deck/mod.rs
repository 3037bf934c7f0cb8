//! Slide deck model and builder.
//!
//! The deck is a fixed, ordered list of [`SlideRecord`]s plus a fixed style
//! set; the builder turns them into an ODP package in one sequential pass.

mod builder;
mod config;
mod page;
mod styles;

pub use builder::DeckBuilder;
pub use config::{DeckConfig, Palette, SlideRecord};
pub use styles::StyleSet;
