//! Deck builder: drives style construction, page assembly, and packaging.
//!
//! The build is strictly sequential; pages are appended in list order to a
//! single document and the package is written exactly once. Failures
//! propagate unchanged, with no retries and no partial-output cleanup.

use crate::common::{Result, xml::escape_xml};
use crate::deck::config::DeckConfig;
use crate::deck::page::assemble_page;
use crate::deck::styles::StyleSet;
use crate::odf::{ODP_MIME_TYPE, PackageWriter};
use std::path::{Path, PathBuf};

/// An image registered for embedding in the package.
#[derive(Debug, Clone)]
pub(crate) struct PictureEntry {
    /// Path of the entry within the package (`Pictures/<filename>`)
    pub href: String,
    /// Source path on disk, read at save time
    pub source: PathBuf,
}

/// The document's asset store: images referenced by content regions, embedded
/// into the package at save time. Registering the same filename twice maps to
/// a single package entry.
pub(crate) struct PictureStore {
    entries: Vec<PictureEntry>,
}

impl PictureStore {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Register an image and return its package href.
    pub fn register(&mut self, filename: &str, source: &Path) -> String {
        let href = format!("Pictures/{filename}");
        if !self.entries.iter().any(|e| e.href == href) {
            self.entries.push(PictureEntry {
                href: href.clone(),
                source: source.to_path_buf(),
            });
        }
        href
    }

    pub fn entries(&self) -> &[PictureEntry] {
        &self.entries
    }
}

/// Builds the configured slide deck and writes it as an ODP package.
///
/// # Examples
///
/// ```no_run
/// use penguin_deck::deck::{DeckBuilder, DeckConfig};
///
/// # fn main() -> penguin_deck::Result<()> {
/// let builder = DeckBuilder::new(DeckConfig::palmer_penguins_part1());
/// let path = builder.save()?;
/// # Ok(())
/// # }
/// ```
pub struct DeckBuilder {
    config: DeckConfig,
}

impl DeckBuilder {
    pub fn new(config: DeckConfig) -> Self {
        Self { config }
    }

    /// Build the presentation and return the package bytes.
    ///
    /// Styles are constructed once, then one page is assembled per slide
    /// record in list order. Images registered during page assembly are read
    /// from disk and embedded here.
    pub fn build(&self) -> Result<Vec<u8>> {
        let styles = StyleSet::new(&self.config);
        let mut pictures = PictureStore::new();

        let mut body = String::new();
        for (index, record) in self.config.slides.iter().enumerate() {
            body.push_str(&assemble_page(index, record, &self.config.base_dir, &mut pictures));
        }

        let mut writer = PackageWriter::new();
        writer.set_mimetype(ODP_MIME_TYPE)?;
        writer.add_file("content.xml", self.generate_content_xml(&styles, &body).as_bytes())?;
        writer.add_file("styles.xml", self.generate_styles_xml(&styles).as_bytes())?;
        writer.add_file("meta.xml", self.generate_meta_xml().as_bytes())?;

        for picture in pictures.entries() {
            let bytes = std::fs::read(&picture.source)?;
            writer.add_file(&picture.href, &bytes)?;
        }

        writer.finish_to_bytes()
    }

    /// Build the presentation and write it to the configured output path,
    /// overwriting any existing file. The parent directory must exist.
    pub fn save(&self) -> Result<PathBuf> {
        let bytes = self.build()?;
        std::fs::write(&self.config.output_file, bytes)?;
        Ok(self.config.output_file.clone())
    }

    /// Generate the complete content.xml for the presentation
    fn generate_content_xml(&self, styles: &StyleSet, body: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?><office:document-content xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0" xmlns:style="urn:oasis:names:tc:opendocument:xmlns:style:1.0" xmlns:text="urn:oasis:names:tc:opendocument:xmlns:text:1.0" xmlns:draw="urn:oasis:names:tc:opendocument:xmlns:drawing:1.0" xmlns:fo="urn:oasis:names:tc:opendocument:xmlns:xsl-fo-compatible:1.0" xmlns:xlink="http://www.w3.org/1999/xlink" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:meta="urn:oasis:names:tc:opendocument:xmlns:meta:1.0" xmlns:presentation="urn:oasis:names:tc:opendocument:xmlns:presentation:1.0" xmlns:svg="urn:oasis:names:tc:opendocument:xmlns:svg-compatible:1.0" office:version="1.3"><office:scripts/><office:font-face-decls/><office:automatic-styles>{}</office:automatic-styles><office:body><office:presentation>{}</office:presentation></office:body></office:document-content>"#,
            styles.content_automatic_styles(),
            body
        )
    }

    /// Generate styles.xml: the page layout and the master page
    fn generate_styles_xml(&self, styles: &StyleSet) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?><office:document-styles xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0" xmlns:style="urn:oasis:names:tc:opendocument:xmlns:style:1.0" xmlns:draw="urn:oasis:names:tc:opendocument:xmlns:drawing:1.0" xmlns:fo="urn:oasis:names:tc:opendocument:xmlns:xsl-fo-compatible:1.0" xmlns:svg="urn:oasis:names:tc:opendocument:xmlns:svg-compatible:1.0" office:version="1.3"><office:font-face-decls/><office:styles/><office:automatic-styles>{}</office:automatic-styles><office:master-styles>{}</office:master-styles></office:document-styles>"#,
            styles.page_layout_style(),
            styles.master_page_style()
        )
    }

    /// Generate meta.xml with the generator tag and creation dates
    fn generate_meta_xml(&self) -> String {
        let now = chrono::Utc::now().to_rfc3339();

        let mut meta = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?><office:document-meta xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0" xmlns:xlink="http://www.w3.org/1999/xlink" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:meta="urn:oasis:names:tc:opendocument:xmlns:meta:1.0" office:version="1.3"><office:meta><meta:generator>penguin-deck/{}</meta:generator><meta:creation-date>{}</meta:creation-date><dc:date>{}</dc:date>"#,
            env!("CARGO_PKG_VERSION"),
            now,
            now
        );

        // Document title follows the opening slide
        if let Some(first) = self.config.slides.first() {
            meta.push_str(&format!("<dc:title>{}</dc:title>", escape_xml(&first.title)));
        }

        meta.push_str("</office:meta></office:document-meta>");
        meta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::config::{Palette, SlideRecord};
    use std::io::{Cursor, Read};

    fn read_entry(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
        let mut entry = archive.by_name(name).expect("entry missing");
        let mut out = String::new();
        entry.read_to_string(&mut out).unwrap();
        out
    }

    fn entry_names(bytes: &[u8]) -> Vec<String> {
        let archive = zip::ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
        archive.file_names().map(str::to_string).collect()
    }

    fn config_in(dir: &Path, slides: Vec<SlideRecord>) -> DeckConfig {
        DeckConfig {
            base_dir: dir.join("assets"),
            output_file: dir.join("deck.odp"),
            slide_width: "28cm".to_string(),
            slide_height: "15.75cm".to_string(),
            palette: Palette::default(),
            slides,
        }
    }

    #[test]
    fn test_one_page_per_record_in_input_order() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), DeckConfig::palmer_penguins_part1().slides);
        let bytes = DeckBuilder::new(config).build().unwrap();

        let content = read_entry(&bytes, "content.xml");
        assert_eq!(content.matches("<draw:page ").count(), 8);

        let first = content.find("Palmer Penguins Part 1").unwrap();
        let second = content.find("The Data: 333 Penguins, 3 Species").unwrap();
        let last = content.find("Next: Part 2").unwrap();
        assert!(first < second && second < last);
    }

    #[test]
    fn test_missing_images_skip_regions_without_error() {
        // No assets directory at all: all 8 pages, zero embedded pictures
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), DeckConfig::palmer_penguins_part1().slides);
        let bytes = DeckBuilder::new(config).build().unwrap();

        let content = read_entry(&bytes, "content.xml");
        assert_eq!(content.matches("<draw:page ").count(), 8);
        assert!(!content.contains("<draw:image"));
        assert!(!entry_names(&bytes).iter().any(|n| n.starts_with("Pictures/")));
    }

    #[test]
    fn test_repeated_image_filename_embeds_once() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("assets")).unwrap();
        std::fs::write(dir.path().join("assets/shared.png"), b"fake png").unwrap();

        let slides = vec![
            SlideRecord::new("One", None, Some("shared.png"), None),
            SlideRecord::new("Two", None, Some("shared.png"), None),
        ];
        let bytes = DeckBuilder::new(config_in(dir.path(), slides)).build().unwrap();

        let content = read_entry(&bytes, "content.xml");
        assert_eq!(content.matches(r#"xlink:href="Pictures/shared.png""#).count(), 2);

        let names = entry_names(&bytes);
        assert_eq!(names.iter().filter(|n| *n == "Pictures/shared.png").count(), 1);

        let manifest = read_entry(&bytes, "META-INF/manifest.xml");
        assert_eq!(manifest.matches("Pictures/shared.png").count(), 1);
    }

    #[test]
    fn test_embedded_picture_matches_source_bytes() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("assets")).unwrap();
        let payload = b"\x89PNG\r\n\x1a\nnot really a png".to_vec();
        std::fs::write(dir.path().join("assets/chart.png"), &payload).unwrap();

        let slides = vec![SlideRecord::new("One", None, Some("chart.png"), None)];
        let bytes = DeckBuilder::new(config_in(dir.path(), slides)).build().unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut entry = archive.by_name("Pictures/chart.png").unwrap();
        let mut out = Vec::new();
        entry.read_to_end(&mut out).unwrap();
        assert_eq!(out, payload);
    }

    #[test]
    fn test_every_style_reference_resolves() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), DeckConfig::palmer_penguins_part1().slides);
        let styles = StyleSet::new(&config);
        let bytes = DeckBuilder::new(config).build().unwrap();
        let content = read_entry(&bytes, "content.xml");

        let mut referenced = Vec::new();
        for pattern in ["style-name=\"", "master-page-name=\""] {
            let mut rest = content.as_str();
            while let Some(pos) = rest.find(pattern) {
                rest = &rest[pos + pattern.len()..];
                let end = rest.find('"').unwrap();
                referenced.push(&rest[..end]);
            }
        }

        assert!(!referenced.is_empty());
        for name in referenced {
            assert!(styles.is_registered(name), "dangling style reference: {name}");
        }
    }

    #[test]
    fn test_save_overwrites_deterministically() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), DeckConfig::palmer_penguins_part1().slides);
        let builder = DeckBuilder::new(config.clone());

        let first_path = builder.save().unwrap();
        let first_content = read_entry(&std::fs::read(&first_path).unwrap(), "content.xml");

        let second_path = DeckBuilder::new(config).save().unwrap();
        assert_eq!(first_path, second_path);
        let second_content = read_entry(&std::fs::read(&second_path).unwrap(), "content.xml");
        assert_eq!(first_content, second_content);
    }

    #[test]
    fn test_missing_output_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_in(dir.path(), vec![SlideRecord::new("One", None, None, None)]);
        config.output_file = dir.path().join("no-such-dir/deck.odp");
        assert!(matches!(
            DeckBuilder::new(config).save(),
            Err(crate::Error::Io(_))
        ));
    }

    #[test]
    fn test_meta_carries_generator_and_title() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), DeckConfig::palmer_penguins_part1().slides);
        let bytes = DeckBuilder::new(config).build().unwrap();
        let meta = read_entry(&bytes, "meta.xml");
        assert!(meta.contains("<meta:generator>penguin-deck/"));
        assert!(meta.contains("<dc:title>Palmer Penguins Part 1</dc:title>"));
    }
}
