//! Section-scoped collection of alter-ego images.
//!
//! Sections on the alter-egos page are delimited only by heading tags or
//! named anchors, never by explicit containers. Collection locates the
//! section start from a fragment identifier, walks forward through document
//! siblings, and stops at the first heading that opens the next section.
//! When the fragment cannot be located the collector degrades to a
//! name-filtered whole-page scan; with no fragment at all it takes every
//! image on the page.

use dom_query::{Document, Selection};
use tracing::{debug, warn};
use url::Url;

use crate::record::ImageReference;
use crate::{dom, text, url_utils};

/// Collect image references for one character's section.
///
/// `fragment` of `None` means "no section scoping": every image on the page
/// is collected. A fragment that cannot be located falls back to scanning
/// the whole page for images related to `character_key`. An empty result is
/// not an error.
#[must_use]
pub fn collect_images(
    doc: &Document,
    fragment: Option<&str>,
    character_key: &str,
    base: &Url,
) -> Vec<ImageReference> {
    match fragment {
        Some(fragment) => {
            if let Some(start) = find_section_start(doc, fragment) {
                debug!(fragment, "collecting images from section");
                collect_section(&start, base)
            } else {
                warn!(fragment, character_key, "section not found, scanning whole page by name");
                collect_by_name(doc, character_key, base)
            }
        }
        None => {
            debug!("no fragment given, collecting all images");
            collect_all(doc, base)
        }
    }
}

/// Locate the section start node: by element id first, then by named
/// anchor. An anchor alone rarely contains the following content, so its
/// parent is preferred unless that parent is the body.
fn find_section_start<'a>(doc: &'a Document, fragment: &str) -> Option<Selection<'a>> {
    // Fragments come from href attributes; anything beyond plain anchor
    // characters would break the attribute selector, and no such fragment
    // exists on the site.
    if fragment.is_empty()
        || !fragment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
    {
        return None;
    }

    let by_id = doc.select(&format!(r#"[id="{fragment}"]"#));
    if by_id.exists() {
        return Some(by_id);
    }

    let anchor = doc.select(&format!(r#"a[name="{fragment}"]"#));
    if !anchor.exists() {
        return None;
    }

    let parent = anchor.parent();
    if parent.exists() && dom::tag_name(&parent).as_deref() != Some("body") {
        Some(parent)
    } else {
        Some(anchor)
    }
}

/// Walk forward from the start node through document siblings, collecting
/// contained images, until a heading other than the start node ends the
/// section.
fn collect_section(start: &Selection, base: &Url) -> Vec<ImageReference> {
    let mut images = Vec::new();
    let Some(start_node) = start.nodes().first().copied() else {
        return images;
    };

    let mut current = Some(start_node);
    while let Some(node) = current {
        if node.id != start_node.id && dom::is_section_heading(&node) {
            break;
        }
        if node.is_element() {
            let sel = Selection::from(node);
            for img in sel.select("img").nodes() {
                if let Some(image) = image_reference(&Selection::from(*img), base) {
                    images.push(image);
                }
            }
        }
        current = node.next_sibling();
    }

    images
}

/// Degraded fallback: whole-page scan for images whose src, alt text, or
/// enclosing-parent text contains the character key, case-insensitively.
///
/// Substring matching is deliberate even though it under- and over-matches
/// prefix names ("Jane" also matches "Janet"); the site's filenames leave
/// nothing better to key on.
fn collect_by_name(doc: &Document, character_key: &str, base: &Url) -> Vec<ImageReference> {
    let mut images = Vec::new();
    if character_key.is_empty() {
        return images;
    }

    for node in doc.select("img").nodes() {
        let img = Selection::from(*node);
        let src = dom::get_attribute(&img, "src").unwrap_or_default();
        let alt = dom::get_attribute(&img, "alt").unwrap_or_default();

        let mut related = text::contains_ci(&src, character_key)
            || text::contains_ci(&alt, character_key);
        if !related {
            let parent = img.parent();
            related = parent.exists()
                && text::contains_ci(&text::clean_text(&parent), character_key);
        }

        if related {
            if let Some(image) = image_reference(&img, base) {
                images.push(image);
            }
        }
    }

    images
}

/// No scoping at all: every image on the page, in document order.
fn collect_all(doc: &Document, base: &Url) -> Vec<ImageReference> {
    doc.select("img")
        .nodes()
        .iter()
        .filter_map(|node| image_reference(&Selection::from(*node), base))
        .collect()
}

/// Build an image reference from an `<img>` element.
///
/// The link is the enclosing hyperlink's target when the image sits inside
/// one, else the image's own source; both resolved to absolute form.
/// Images without a src are skipped.
fn image_reference(img: &Selection, base: &Url) -> Option<ImageReference> {
    let src = dom::get_attribute(img, "src")?;
    if src.trim().is_empty() {
        return None;
    }

    let link = dom::enclosing_element(img, "a")
        .and_then(|anchor| dom::get_attribute(&anchor, "href"))
        .filter(|href| !href.trim().is_empty())
        .unwrap_or(src);

    Some(ImageReference {
        link: url_utils::resolve(base, &link),
        width: dom::get_attribute(img, "width").unwrap_or_default(),
        height: dom::get_attribute(img, "height").unwrap_or_default(),
    })
}
