//! ODF package writing functionality.
//!
//! This module writes ODF files as ZIP archives, managing the uncompressed
//! `mimetype` entry, per-part compression, and the generated manifest.

use crate::common::{Error, Result, xml::escape_xml};
use std::io::Write;
use zip::write::{SimpleFileOptions, ZipWriter};

/// Builder for creating ODF packages (ZIP archives)
///
/// Parts are added in order; `finish` writes the `mimetype` entry and the
/// manifest and finalizes the archive.
///
/// # Examples
///
/// ```no_run
/// # use penguin_deck::odf::PackageWriter;
/// # use penguin_deck::Result;
/// # fn example() -> Result<()> {
/// let mut writer = PackageWriter::new();
/// writer.set_mimetype("application/vnd.oasis.opendocument.presentation")?;
/// writer.add_file("content.xml", b"<office:document-content>...</office:document-content>")?;
/// writer.add_file("styles.xml", b"<office:document-styles>...</office:document-styles>")?;
///
/// let bytes = writer.finish_to_bytes()?;
/// std::fs::write("deck.odp", bytes)?;
/// # Ok(())
/// # }
/// ```
pub struct PackageWriter<W: Write + std::io::Seek> {
    zip_writer: ZipWriter<W>,
    mimetype: Option<String>,
    manifest_entries: Vec<ManifestEntry>,
}

/// Entry in the ODF manifest
#[derive(Debug, Clone)]
struct ManifestEntry {
    full_path: String,
    media_type: String,
}

impl PackageWriter<std::io::Cursor<Vec<u8>>> {
    /// Create a new package writer that writes to memory
    pub fn new() -> Self {
        Self {
            zip_writer: ZipWriter::new(std::io::Cursor::new(Vec::new())),
            mimetype: None,
            manifest_entries: Vec::new(),
        }
    }

    /// Finish writing and return the bytes
    pub fn finish_to_bytes(self) -> Result<Vec<u8>> {
        let cursor = self.finish()?;
        Ok(cursor.into_inner())
    }
}

impl Default for PackageWriter<std::io::Cursor<Vec<u8>>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write + std::io::Seek> PackageWriter<W> {
    /// Create a new package writer with a custom writer
    pub fn with_writer(writer: W) -> Self {
        Self {
            zip_writer: ZipWriter::new(writer),
            mimetype: None,
            manifest_entries: Vec::new(),
        }
    }

    /// Set the MIME type for the document
    ///
    /// This writes the `mimetype` entry and records the root manifest entry.
    /// Must be called before any `add_file` call: the ODF packaging rules
    /// require `mimetype` to be the first entry in the archive, stored
    /// without compression.
    pub fn set_mimetype(&mut self, mimetype: &str) -> Result<()> {
        self.mimetype = Some(mimetype.to_string());

        // Root manifest entry carries the package media type
        self.manifest_entries.push(ManifestEntry {
            full_path: "/".to_string(),
            media_type: mimetype.to_string(),
        });

        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
        self.zip_writer.start_file("mimetype", options)?;
        self.zip_writer.write_all(mimetype.as_bytes())?;

        Ok(())
    }

    /// Add a file to the package
    ///
    /// # Arguments
    ///
    /// * `path` - Path within the ZIP archive (e.g., "content.xml", "Pictures/image1.png")
    /// * `content` - File content as bytes
    ///
    /// The file is recorded in the manifest with a media type guessed from
    /// its extension.
    pub fn add_file(&mut self, path: &str, content: &[u8]) -> Result<()> {
        let media_type = Self::guess_media_type(path);

        self.manifest_entries.push(ManifestEntry {
            full_path: path.to_string(),
            media_type: media_type.to_string(),
        });

        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
        self.zip_writer.start_file(path, options)?;
        self.zip_writer.write_all(content)?;

        Ok(())
    }

    /// Generate the manifest.xml content
    fn generate_manifest(&self) -> String {
        let mut manifest = String::from(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<manifest:manifest xmlns:manifest="urn:oasis:names:tc:opendocument:xmlns:manifest:1.0" manifest:version="1.3">
"#,
        );

        for entry in &self.manifest_entries {
            manifest.push_str(&format!(
                r#"  <manifest:file-entry manifest:full-path="{}" manifest:media-type="{}"/>
"#,
                escape_xml(&entry.full_path),
                escape_xml(&entry.media_type)
            ));
        }

        manifest.push_str("</manifest:manifest>\n");
        manifest
    }

    /// Guess media type from file path
    fn guess_media_type(path: &str) -> &'static str {
        if path.ends_with(".xml") {
            "text/xml"
        } else if path.ends_with(".png") {
            "image/png"
        } else if path.ends_with(".jpg") || path.ends_with(".jpeg") {
            "image/jpeg"
        } else if path.ends_with(".gif") {
            "image/gif"
        } else if path.ends_with(".svg") {
            "image/svg+xml"
        } else {
            "application/octet-stream"
        }
    }

    /// Finish writing the package and return the underlying writer
    ///
    /// Generates `META-INF/manifest.xml` from the recorded entries and
    /// finalizes the ZIP archive.
    ///
    /// # Errors
    ///
    /// Returns an error if no MIME type has been set or if writing to the
    /// ZIP archive fails.
    pub fn finish(mut self) -> Result<W> {
        if self.mimetype.is_none() {
            return Err(Error::InvalidFormat("MIME type not set".to_string()));
        }

        let manifest_content = self.generate_manifest();
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
        self.zip_writer
            .start_file("META-INF/manifest.xml", options)?;
        self.zip_writer.write_all(manifest_content.as_bytes())?;

        let writer = self.zip_writer.finish()?;
        Ok(writer)
    }
}
