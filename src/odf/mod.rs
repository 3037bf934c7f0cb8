//! OpenDocument package handling.
//!
//! An ODF file is a ZIP archive with a fixed layout: an uncompressed
//! `mimetype` entry first, the XML parts (`content.xml`, `styles.xml`,
//! `meta.xml`), embedded media under `Pictures/`, and a
//! `META-INF/manifest.xml` listing every part with its media type.

mod writer;

pub use writer::PackageWriter;

/// MIME type of an OpenDocument presentation (.odp)
pub const ODP_MIME_TYPE: &str = "application/vnd.oasis.opendocument.presentation";
