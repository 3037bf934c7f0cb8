//! Deck configuration: slide dimensions, color palette, asset paths, and the
//! static slide list.
//!
//! Everything here is fixed at construction time; the builder never mutates
//! its configuration.

use std::path::PathBuf;

/// Directory holding the PNG assets referenced by the slides
pub const BASE_DIR: &str = "assets";

/// Output path; the parent directory must already exist
pub const OUTPUT_FILE: &str = "slides/Palmer_Penguins_Part1_3min.odp";

/// Slide dimensions (16:9 in cm, as used by LibreOffice Impress)
pub const SLIDE_WIDTH: &str = "28cm";
pub const SLIDE_HEIGHT: &str = "15.75cm";

/// High-contrast color palette, labeled by semantic role.
///
/// Only `text_dark` and `accent` are consumed by the style set; the three
/// species colors and `white` are carried as configuration but currently
/// unused by style construction.
#[derive(Debug, Clone)]
pub struct Palette {
    /// Coral red
    pub adelie: &'static str,
    /// Purple
    pub chinstrap: &'static str,
    /// Deep ocean blue
    pub gentoo: &'static str,
    pub text_dark: &'static str,
    pub white: &'static str,
    /// Green, used for key text
    pub accent: &'static str,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            adelie: "#FF6B6B",
            chinstrap: "#9B59B6",
            gentoo: "#2E86AB",
            text_dark: "#2C3E50",
            white: "#FFFFFF",
            accent: "#27AE60",
        }
    }
}

/// One slide of the deck, in display order.
///
/// Optional regions are `None` when absent; an omitted subtitle, image, or
/// key text simply produces a slide without that region.
#[derive(Debug, Clone)]
pub struct SlideRecord {
    /// Slide title, always rendered
    pub title: String,
    /// Subtitle below the title, if any
    pub subtitle: Option<String>,
    /// Image filename resolved relative to the base directory
    pub image: Option<String>,
    /// Highlighted text at the bottom of the slide, if any
    pub key_text: Option<String>,
}

impl SlideRecord {
    pub fn new(
        title: &str,
        subtitle: Option<&str>,
        image: Option<&str>,
        key_text: Option<&str>,
    ) -> Self {
        Self {
            title: title.to_string(),
            subtitle: subtitle.map(str::to_string),
            image: image.map(str::to_string),
            key_text: key_text.map(str::to_string),
        }
    }
}

/// Immutable configuration driving one deck build.
#[derive(Debug, Clone)]
pub struct DeckConfig {
    /// Directory containing the image assets
    pub base_dir: PathBuf,
    /// Path of the generated .odp file
    pub output_file: PathBuf,
    pub slide_width: String,
    pub slide_height: String,
    pub palette: Palette,
    /// Slide records in display order; list order is page order
    pub slides: Vec<SlideRecord>,
}

impl DeckConfig {
    /// The fixed Palmer Penguins Part 1 deck: 8 slides covering exploratory
    /// analysis and simple regression.
    pub fn palmer_penguins_part1() -> Self {
        Self {
            base_dir: PathBuf::from(BASE_DIR),
            output_file: PathBuf::from(OUTPUT_FILE),
            slide_width: SLIDE_WIDTH.to_string(),
            slide_height: SLIDE_HEIGHT.to_string(),
            palette: Palette::default(),
            slides: vec![
                SlideRecord::new(
                    "Palmer Penguins Part 1",
                    Some("Exploratory Data Analysis & Simple Regression"),
                    Some("penguin-hero-part1.png"),
                    Some("Can flipper length predict body mass?"),
                ),
                SlideRecord::new(
                    "The Data: 333 Penguins, 3 Species",
                    None,
                    Some("eda-overview.png"),
                    Some("Adelie | Chinstrap | Gentoo"),
                ),
                SlideRecord::new(
                    "Correlation: r = 0.87",
                    Some("Strong relationship between flipper length and body mass"),
                    Some("correlation-matrix.png"),
                    None,
                ),
                SlideRecord::new(
                    "Simple Linear Regression",
                    Some("Body Mass = -5,781 + 49.7 × Flipper Length"),
                    Some("simple-regression-model.png"),
                    Some("R² = 0.762"),
                ),
                SlideRecord::new(
                    "Making Predictions",
                    Some("200mm flipper → ~4,100g body mass"),
                    Some("simple-regression-model.png"),
                    Some("Every 1mm of flipper ≈ 50g of body mass"),
                ),
                SlideRecord::new(
                    "The Problem: Species Clustering",
                    Some("Residuals reveal what the model misses"),
                    Some("model-diagnostics.png"),
                    Some("Species matters!"),
                ),
                SlideRecord::new(
                    "Key Takeaways",
                    None,
                    Some("species-comparison.png"),
                    Some("76% variance explained, but species differences remain"),
                ),
                SlideRecord::new(
                    "Next: Part 2",
                    Some("Adding species to the model"),
                    Some("penguin-hero-part1.png"),
                    Some("R² jumps from 0.76 → 0.86+"),
                ),
            ],
        }
    }
}
