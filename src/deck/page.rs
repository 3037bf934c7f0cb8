//! Page assembly: one `<draw:page>` per slide record.
//!
//! Every region type has a fixed offset and size in the slide's coordinate
//! system; there is no per-slide layout variation. Regions are attached in a
//! fixed order: title, subtitle, image, key text. The optional regions are
//! skipped when absent, and a missing image file silently produces a slide
//! without an image region.

use crate::common::xml::escape_xml;
use crate::deck::builder::PictureStore;
use crate::deck::config::SlideRecord;
use crate::deck::styles::StyleSet;
use std::path::Path;

/// Fixed placement of one region type on the slide
struct FrameGeometry {
    width: &'static str,
    height: &'static str,
    x: &'static str,
    y: &'static str,
}

/// Title strip, top left
const TITLE_FRAME: FrameGeometry = FrameGeometry { width: "18cm", height: "2cm", x: "1cm", y: "0.5cm" };
/// Subtitle, just below the title
const SUBTITLE_FRAME: FrameGeometry = FrameGeometry { width: "18cm", height: "1.5cm", x: "1cm", y: "2.3cm" };
/// Image, centered, roughly two thirds of the slide
const IMAGE_FRAME: FrameGeometry = FrameGeometry { width: "20cm", height: "10cm", x: "4cm", y: "4cm" };
/// Key text spanning the bottom strip
const KEY_TEXT_FRAME: FrameGeometry = FrameGeometry { width: "26cm", height: "1.5cm", x: "1cm", y: "14cm" };

/// Assemble the `<draw:page>` element for one slide record.
///
/// `index` is the 0-based position in the deck; it only feeds the page name.
/// Attaching an image registers it with `pictures` so the builder embeds the
/// bytes at save time; this function never reads the image itself.
pub(crate) fn assemble_page(
    index: usize,
    record: &SlideRecord,
    base_dir: &Path,
    pictures: &mut PictureStore,
) -> String {
    let mut page = format!(
        r#"<draw:page draw:name="page{}" draw:style-name="{}" draw:master-page-name="{}">"#,
        index + 1,
        StyleSet::DRAWING_PAGE,
        StyleSet::MASTER_PAGE
    );

    page.push_str(&text_frame(&TITLE_FRAME, StyleSet::TITLE, &record.title));

    if let Some(subtitle) = &record.subtitle {
        page.push_str(&text_frame(&SUBTITLE_FRAME, StyleSet::SUBTITLE, subtitle));
    }

    if let Some(image) = &record.image {
        let path = base_dir.join(image);
        if path.exists() {
            let href = pictures.register(image, &path);
            page.push_str(&image_frame(&IMAGE_FRAME, &href));
        }
    }

    if let Some(key_text) = &record.key_text {
        page.push_str(&text_frame(&KEY_TEXT_FRAME, StyleSet::KEY_TEXT, key_text));
    }

    page.push_str("</draw:page>");
    page
}

fn text_frame(geometry: &FrameGeometry, paragraph_style: &str, text: &str) -> String {
    format!(
        r#"<draw:frame draw:style-name="{}" draw:layer="layout" svg:width="{}" svg:height="{}" svg:x="{}" svg:y="{}"><draw:text-box><text:p text:style-name="{}">{}</text:p></draw:text-box></draw:frame>"#,
        StyleSet::FRAME,
        geometry.width,
        geometry.height,
        geometry.x,
        geometry.y,
        paragraph_style,
        escape_xml(text)
    )
}

fn image_frame(geometry: &FrameGeometry, href: &str) -> String {
    format!(
        r#"<draw:frame draw:style-name="{}" draw:layer="layout" svg:width="{}" svg:height="{}" svg:x="{}" svg:y="{}"><draw:image xlink:href="{}" xlink:type="simple" xlink:show="embed" xlink:actuate="onLoad"/></draw:frame>"#,
        StyleSet::FRAME,
        geometry.width,
        geometry.height,
        geometry.x,
        geometry.y,
        escape_xml(href)
    )
}
