//! Thin adapter over `dom_query`.
//!
//! Keeps the rest of the crate working against a small set of named
//! operations (attribute access, tag names, text, ancestor walks) instead
//! of scattering `dom_query` calls everywhere.

pub use dom_query::{Document, NodeRef, Selection};
pub use tendril::StrTendril;

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Get an attribute value as an owned string.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get the lowercase tag name of the first node in the selection.
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

/// Get the full text content of a node and its descendants.
///
/// Returns `StrTendril`; cloning is O(1).
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Get the parent element.
#[inline]
#[must_use]
pub fn parent<'a>(sel: &Selection<'a>) -> Selection<'a> {
    sel.parent()
}

/// Get direct element children.
#[inline]
#[must_use]
pub fn children<'a>(sel: &Selection<'a>) -> Selection<'a> {
    sel.children()
}

/// Walk ancestors looking for the nearest enclosing element with the given
/// tag. Returns `None` when no such ancestor exists.
#[must_use]
pub fn enclosing_element<'a>(sel: &Selection<'a>, tag: &str) -> Option<Selection<'a>> {
    let mut current = sel.parent();
    while current.exists() {
        if tag_name(&current).as_deref() == Some(tag) {
            return Some(current);
        }
        current = current.parent();
    }
    None
}

/// Whether a node is a section heading (h1 through h4) with non-empty text.
#[must_use]
pub fn is_section_heading(node: &NodeRef) -> bool {
    if !node.is_element() {
        return false;
    }
    let sel = Selection::from(*node);
    match tag_name(&sel).as_deref() {
        Some("h1" | "h2" | "h3" | "h4") => !text_content(&sel).trim().is_empty(),
        _ => false,
    }
}
