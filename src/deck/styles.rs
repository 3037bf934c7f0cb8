//! The fixed style set shared by every slide.
//!
//! Styles are built once from the deck configuration and registered by name;
//! page elements reference them only through the name constants on
//! [`StyleSet`], so every reference resolves to a registered style.

use crate::deck::config::DeckConfig;

const FONT_FAMILY: &str = "Inter, Source Sans Pro, sans-serif";

/// The deck's style set: page layout, master page, drawing-page background,
/// the three paragraph styles, and the shared borderless frame style.
pub struct StyleSet {
    names: Vec<&'static str>,
    content_automatic: String,
    page_layout: String,
    master_page: String,
}

impl StyleSet {
    /// Page layout name (landscape, fixed dimensions)
    pub const PAGE_LAYOUT: &'static str = "PL1";
    /// Master page name referenced by every page
    pub const MASTER_PAGE: &'static str = "Default";
    /// Drawing-page style (solid white fill)
    pub const DRAWING_PAGE: &'static str = "dp1";
    /// Title paragraph style
    pub const TITLE: &'static str = "title";
    /// Subtitle paragraph style
    pub const SUBTITLE: &'static str = "subtitle";
    /// Key-text paragraph style
    pub const KEY_TEXT: &'static str = "keytext";
    /// Borderless, fill-less graphic style shared by all content frames
    pub const FRAME: &'static str = "fr1";

    /// Build the style set. Pure construction from fixed configuration;
    /// cannot fail.
    pub fn new(config: &DeckConfig) -> Self {
        let palette = &config.palette;

        let mut content_automatic = String::new();
        content_automatic.push_str(&format!(
            r##"<style:style style:name="{}" style:family="drawing-page"><style:drawing-page-properties draw:fill="solid" draw:fill-color="#ffffff"/></style:style>"##,
            Self::DRAWING_PAGE
        ));
        content_automatic.push_str(&paragraph_style(
            Self::TITLE,
            "48pt",
            true,
            palette.text_dark,
            "left",
        ));
        content_automatic.push_str(&paragraph_style(
            Self::SUBTITLE,
            "28pt",
            false,
            palette.text_dark,
            "left",
        ));
        content_automatic.push_str(&paragraph_style(
            Self::KEY_TEXT,
            "36pt",
            true,
            palette.accent,
            "center",
        ));
        content_automatic.push_str(&format!(
            r#"<style:style style:name="{}" style:family="graphic"><style:graphic-properties draw:stroke="none" draw:fill="none"/></style:style>"#,
            Self::FRAME
        ));

        let page_layout = format!(
            r#"<style:page-layout style:name="{}"><style:page-layout-properties fo:page-width="{}" fo:page-height="{}" style:print-orientation="landscape"/></style:page-layout>"#,
            Self::PAGE_LAYOUT,
            config.slide_width,
            config.slide_height
        );

        let master_page = format!(
            r#"<style:master-page style:name="{}" style:page-layout-name="{}"/>"#,
            Self::MASTER_PAGE,
            Self::PAGE_LAYOUT
        );

        Self {
            names: vec![
                Self::PAGE_LAYOUT,
                Self::MASTER_PAGE,
                Self::DRAWING_PAGE,
                Self::TITLE,
                Self::SUBTITLE,
                Self::KEY_TEXT,
                Self::FRAME,
            ],
            content_automatic,
            page_layout,
            master_page,
        }
    }

    /// Automatic styles for content.xml (drawing page, paragraphs, frame)
    pub fn content_automatic_styles(&self) -> &str {
        &self.content_automatic
    }

    /// Automatic styles for styles.xml (the page layout)
    pub fn page_layout_style(&self) -> &str {
        &self.page_layout
    }

    /// Master styles for styles.xml (the master page)
    pub fn master_page_style(&self) -> &str {
        &self.master_page
    }

    /// Whether `name` is registered in this style set
    pub fn is_registered(&self, name: &str) -> bool {
        self.names.contains(&name)
    }
}

fn paragraph_style(name: &str, size: &str, bold: bool, color: &str, align: &str) -> String {
    let weight = if bold { r#" fo:font-weight="bold""# } else { "" };
    format!(
        r#"<style:style style:name="{name}" style:family="paragraph"><style:paragraph-properties fo:text-align="{align}"/><style:text-properties fo:font-size="{size}"{weight} fo:color="{color}" fo:font-family="{FONT_FAMILY}"/></style:style>"#
    )
}
