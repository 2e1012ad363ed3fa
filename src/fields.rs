//! Multi-strategy extraction of labeled fields and description paragraphs.
//!
//! Character pages carry no stable schema: "Label: value" pairs appear as
//! bold-anchored inline text, as loose text nodes, or inside plain
//! paragraphs. Three strategies run in priority order, each filling only
//! the labels still unresolved, first match in document order.

use dom_query::{Document, Selection};
use tracing::debug;

use crate::record::{CharacterRecord, FieldLabel};
use crate::text;

/// Populate the record's labeled fields from a character detail page.
///
/// Never fails; labels with no match in any strategy stay empty.
pub fn extract_fields(doc: &Document, record: &mut CharacterRecord) {
    emphasis_anchored(doc, record);
    text_node_fallback(doc, record);
    paragraph_fallback(doc, record);

    for field in FieldLabel::ALL {
        if !record.is_resolved(field) {
            debug!(label = field.label(), "field not found on page");
        }
    }
}

/// Strategy 1: bold/strong elements whose text names a label. The value is
/// the remainder of the *enclosing* element's text after the label, which
/// handles the common `<b>Label:</b> value` inline pattern.
fn emphasis_anchored(doc: &Document, record: &mut CharacterRecord) {
    let labels = FieldLabel::all_labels();

    for node in doc.select("b, strong").nodes() {
        let bold = Selection::from(*node);
        let bold_text = text::clean_text(&bold);
        if bold_text.is_empty() {
            continue;
        }

        for field in FieldLabel::ALL {
            if record.is_resolved(field) || !text::contains_ci(&bold_text, field.label()) {
                continue;
            }
            let parent = bold.parent();
            if !parent.exists() {
                continue;
            }
            let parent_text = text::clean_text(&parent);
            if let Some(value) = text::label_value(&parent_text, field.label(), &labels) {
                record.fill(field, value);
            }
        }
    }
}

/// Strategy 2: the deepest element whose text contains the label
/// (case-insensitive). Deepest means no element child contains the label
/// too, which mirrors "the text node's parent" without walking raw text
/// nodes.
fn text_node_fallback(doc: &Document, record: &mut CharacterRecord) {
    let labels = FieldLabel::all_labels();

    for field in FieldLabel::ALL {
        if record.is_resolved(field) {
            continue;
        }
        let label = field.label();

        for node in doc.select("body *").nodes() {
            let sel = Selection::from(*node);
            let full_text = text::clean_text(&sel);
            if !text::contains_ci(&full_text, label) {
                continue;
            }

            let child_contains = sel.children().nodes().iter().any(|child| {
                text::contains_ci(&text::clean_text(&Selection::from(*child)), label)
            });
            if child_contains {
                continue;
            }

            if let Some(value) = text::label_value(&full_text, label, &labels) {
                if record.fill(field, value) {
                    break;
                }
            }
        }
    }
}

/// Strategy 3: any paragraph containing the label literally.
fn paragraph_fallback(doc: &Document, record: &mut CharacterRecord) {
    let labels = FieldLabel::all_labels();

    for node in doc.select("p").nodes() {
        let para_text = text::clean_text(&Selection::from(*node));
        if para_text.is_empty() {
            continue;
        }

        for field in FieldLabel::ALL {
            if record.is_resolved(field) || !para_text.contains(field.label()) {
                continue;
            }
            if let Some(value) = text::label_value(&para_text, field.label(), &labels) {
                record.fill(field, value);
            }
        }
    }
}

/// Collect description paragraphs: trimmed text longer than `min_len`
/// characters containing none of the known labels, in document order.
/// Paragraphs are not deduplicated.
#[must_use]
pub fn extract_description(doc: &Document, min_len: usize) -> Vec<String> {
    let labels = FieldLabel::all_labels();
    let mut paragraphs = Vec::new();

    for node in doc.select("p").nodes() {
        let para_text = text::clean_text(&Selection::from(*node));
        if para_text.chars().count() <= min_len {
            continue;
        }
        if labels.iter().any(|label| para_text.contains(label)) {
            continue;
        }
        paragraphs.push(para_text);
    }

    paragraphs
}
