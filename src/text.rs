//! Text utilities: null-safe extraction and label/value splitting.

use dom_query::Selection;

use crate::dom;

/// Extract whitespace-normalized text from a selection.
///
/// Empty selections yield an empty string. Runs of whitespace (including
/// newlines introduced by markup) collapse to single spaces.
#[must_use]
pub fn clean_text(sel: &Selection) -> String {
    dom::text_content(sel)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Case-insensitive substring check.
#[must_use]
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Split `text` on the first literal occurrence of `label` and return the
/// trimmed remainder as the value.
///
/// The remainder is truncated at the earliest occurrence of any label in
/// `other_labels`: on these pages several "Label: value" pairs often share
/// one parent element, so the raw remainder would swallow the next pair.
/// An empty remainder after trimming counts as not found.
#[must_use]
pub fn label_value(text: &str, label: &str, other_labels: &[&str]) -> Option<String> {
    let start = text.find(label)? + label.len();
    let mut remainder = &text[start..];

    let cutoff = other_labels
        .iter()
        .filter(|other| **other != label)
        .filter_map(|other| remainder.find(*other))
        .min();
    if let Some(end) = cutoff {
        remainder = &remainder[..end];
    }

    let value = remainder.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse;

    #[test]
    fn clean_text_normalizes_whitespace() {
        let doc = parse("<p>Full Name:\n    Jane\t Lane  </p>");
        assert_eq!(clean_text(&doc.select("p")), "Full Name: Jane Lane");
    }

    #[test]
    fn clean_text_empty_selection_is_empty() {
        let doc = parse("<p>text</p>");
        assert_eq!(clean_text(&doc.select("article")), "");
    }

    #[test]
    fn label_value_splits_on_first_occurrence() {
        let value = label_value("Siblings: Erin, Penny", "Siblings:", &[]);
        assert_eq!(value.as_deref(), Some("Erin, Penny"));
    }

    #[test]
    fn label_value_truncates_at_next_label() {
        let labels = ["Full Name:", "Current Age:"];
        let value = label_value("Full Name: Jane Lane Current Age: 17", "Full Name:", &labels);
        assert_eq!(value.as_deref(), Some("Jane Lane"));
    }

    #[test]
    fn label_value_same_label_in_value_is_not_a_cutoff() {
        // Only the first occurrence of the label itself splits; a repeat of
        // the same label inside the value stays part of the value.
        let value = label_value("Status: unknown Status: dead", "Status:", &["Status:"]);
        assert_eq!(value.as_deref(), Some("unknown Status: dead"));
    }

    #[test]
    fn label_value_empty_remainder_is_none() {
        assert_eq!(label_value("Parents:   ", "Parents:", &[]), None);
        assert_eq!(label_value("no label here", "Parents:", &[]), None);
    }
}
