//! Link resolution on listing and detail pages.
//!
//! Character detail links are recognized by their href slug first
//! (`ch_<name>.html`) and by exact visible link text second. The alter-egos
//! page is recognized by a fixed marker in the href; its `#fragment` suffix
//! names the character's section on that page.

use dom_query::{Document, Selection};
use tracing::debug;
use url::Url;

use crate::config::SiteConfig;
use crate::{dom, text, url_utils};

/// A resolved alter-egos page link.
///
/// A missing fragment is a valid outcome, distinct from "link not found":
/// it means image collection operates on the whole page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlterEgosLink {
    pub url: Url,
    pub fragment: Option<String>,
}

/// Find a character's detail page URL on the listing page.
///
/// First anchor in document order wins per strategy; `None` when neither
/// strategy matches.
#[must_use]
pub fn find_character_link(doc: &Document, cfg: &SiteConfig, name: &str) -> Option<Url> {
    let slug = cfg.character_slug(name);

    for node in doc.select("a").nodes() {
        let link = Selection::from(*node);
        let Some(href) = dom::get_attribute(&link, "href") else {
            continue;
        };
        if href.contains(&slug) {
            if let Some(url) = url_utils::resolve_parsed(&cfg.base_url, &href) {
                debug!(name, href = %href, "matched character link by slug");
                return Some(url);
            }
        }
    }

    let wanted = name.trim().to_lowercase();
    for node in doc.select("a").nodes() {
        let link = Selection::from(*node);
        if text::clean_text(&link).to_lowercase() != wanted {
            continue;
        }
        let Some(href) = dom::get_attribute(&link, "href") else {
            continue;
        };
        if let Some(url) = url_utils::resolve_parsed(&cfg.base_url, &href) {
            debug!(name, href = %href, "matched character link by text");
            return Some(url);
        }
    }

    None
}

/// Find the alter-egos page link on a character detail page, splitting off
/// the fragment identifier when present.
#[must_use]
pub fn find_alter_egos_link(doc: &Document, cfg: &SiteConfig) -> Option<AlterEgosLink> {
    for node in doc.select("a").nodes() {
        let link = Selection::from(*node);
        let Some(href) = dom::get_attribute(&link, "href") else {
            continue;
        };
        if !href.contains(&cfg.alter_egos_marker) {
            continue;
        }

        let (base_href, fragment) = match href.split_once('#') {
            Some((page, frag)) if !frag.is_empty() => (page, Some(frag.to_string())),
            Some((page, _)) => (page, None),
            None => (href.as_str(), None),
        };

        if let Some(url) = url_utils::resolve_parsed(&cfg.base_url, base_href) {
            debug!(href = %href, fragment = ?fragment, "matched alter-egos link");
            return Some(AlterEgosLink { url, fragment });
        }
    }

    None
}
