//! The character record assembled by the extraction components.

use serde::{Deserialize, Serialize};

/// The fixed, ordered set of labeled fields recognized on character pages.
///
/// The label text is the site's literal markup ("Full Name:", ...); the
/// mapping from label to record field is this static table rather than a
/// runtime dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldLabel {
    FullName,
    CurrentAge,
    CurrentVocation,
    SeasonOneAge,
    SeasonOneVocation,
    Parents,
    Siblings,
    FirstAppearance,
    StatusEndOfSeries,
    SelfAssessment,
}

impl FieldLabel {
    /// All labels in the order they are tried and appear on the page.
    pub const ALL: [FieldLabel; 10] = [
        FieldLabel::FullName,
        FieldLabel::CurrentAge,
        FieldLabel::CurrentVocation,
        FieldLabel::SeasonOneAge,
        FieldLabel::SeasonOneVocation,
        FieldLabel::Parents,
        FieldLabel::Siblings,
        FieldLabel::FirstAppearance,
        FieldLabel::StatusEndOfSeries,
        FieldLabel::SelfAssessment,
    ];

    /// The literal label text as it appears in the page markup.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            FieldLabel::FullName => "Full Name:",
            FieldLabel::CurrentAge => "Current Age:",
            FieldLabel::CurrentVocation => "Current Vocation:",
            FieldLabel::SeasonOneAge => "Season One Age:",
            FieldLabel::SeasonOneVocation => "Season One Vocation:",
            FieldLabel::Parents => "Parents:",
            FieldLabel::Siblings => "Siblings:",
            FieldLabel::FirstAppearance => "First Appearance:",
            FieldLabel::StatusEndOfSeries => "Status at end of series:",
            FieldLabel::SelfAssessment => "Daria on herself:",
        }
    }

    /// The label texts of the whole table, in order.
    #[must_use]
    pub fn all_labels() -> [&'static str; 10] {
        let mut out = [""; 10];
        for (slot, field) in out.iter_mut().zip(FieldLabel::ALL) {
            *slot = field.label();
        }
        out
    }
}

/// A single alter-ego image found on the site.
///
/// `link` is the enclosing hyperlink's target when the image sits inside a
/// link, else the image's own source; always absolute. Dimensions are kept
/// as opaque strings because the source markup mixes units and empty values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageReference {
    pub link: String,
    pub width: String,
    pub height: String,
}

/// Structured data for one character, assembled from the detail page and
/// the alter-egos page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CharacterRecord {
    /// URL of the detail page; set once at creation.
    pub source_url: String,

    pub full_name: String,
    pub current_age: String,
    pub current_vocation: String,
    pub season_one_age: String,
    pub season_one_vocation: String,
    pub parents: String,
    pub siblings: String,
    pub first_appearance: String,
    pub status_end_of_series: String,
    pub self_assessment: String,

    /// Free-text paragraphs in document order.
    pub description: Vec<String>,

    /// Alter-ego images in document order; duplicates kept.
    pub alter_ego_images: Vec<ImageReference>,
}

impl CharacterRecord {
    /// Create an empty record for the given detail page URL.
    #[must_use]
    pub fn new(source_url: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            ..Self::default()
        }
    }

    /// Read access to a labeled field.
    #[must_use]
    pub fn field(&self, label: FieldLabel) -> &str {
        match label {
            FieldLabel::FullName => &self.full_name,
            FieldLabel::CurrentAge => &self.current_age,
            FieldLabel::CurrentVocation => &self.current_vocation,
            FieldLabel::SeasonOneAge => &self.season_one_age,
            FieldLabel::SeasonOneVocation => &self.season_one_vocation,
            FieldLabel::Parents => &self.parents,
            FieldLabel::Siblings => &self.siblings,
            FieldLabel::FirstAppearance => &self.first_appearance,
            FieldLabel::StatusEndOfSeries => &self.status_end_of_series,
            FieldLabel::SelfAssessment => &self.self_assessment,
        }
    }

    /// Whether a labeled field already holds a value.
    #[must_use]
    pub fn is_resolved(&self, label: FieldLabel) -> bool {
        !self.field(label).is_empty()
    }

    /// Fill a labeled field only if it is still empty. Returns whether the
    /// value was written; extraction strategies never overwrite.
    pub fn fill(&mut self, label: FieldLabel, value: String) -> bool {
        let slot = match label {
            FieldLabel::FullName => &mut self.full_name,
            FieldLabel::CurrentAge => &mut self.current_age,
            FieldLabel::CurrentVocation => &mut self.current_vocation,
            FieldLabel::SeasonOneAge => &mut self.season_one_age,
            FieldLabel::SeasonOneVocation => &mut self.season_one_vocation,
            FieldLabel::Parents => &mut self.parents,
            FieldLabel::Siblings => &mut self.siblings,
            FieldLabel::FirstAppearance => &mut self.first_appearance,
            FieldLabel::StatusEndOfSeries => &mut self.status_end_of_series,
            FieldLabel::SelfAssessment => &mut self.self_assessment,
        };
        if slot.is_empty() && !value.is_empty() {
            *slot = value;
            true
        } else {
            false
        }
    }

    /// Key used to match alter-ego images by name: the first word of the
    /// extracted full name, lower-cased, falling back to the requested name
    /// when no full name was found.
    #[must_use]
    pub fn character_key(&self, requested_name: &str) -> String {
        self.full_name
            .split_whitespace()
            .next()
            .unwrap_or(requested_name)
            .to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_only_writes_empty_fields() {
        let mut record = CharacterRecord::new("https://example.org/ch_daria.html");

        assert!(record.fill(FieldLabel::FullName, "Daria Morgendorffer".to_string()));
        assert!(!record.fill(FieldLabel::FullName, "Someone Else".to_string()));
        assert_eq!(record.full_name, "Daria Morgendorffer");
    }

    #[test]
    fn fill_rejects_empty_values() {
        let mut record = CharacterRecord::default();
        assert!(!record.fill(FieldLabel::Parents, String::new()));
        assert!(!record.is_resolved(FieldLabel::Parents));
    }

    #[test]
    fn character_key_prefers_full_name_first_word() {
        let mut record = CharacterRecord::default();
        record.full_name = "Daria Morgendorffer".to_string();
        assert_eq!(record.character_key("someone"), "daria");
    }

    #[test]
    fn character_key_falls_back_to_requested_name() {
        let record = CharacterRecord::default();
        assert_eq!(record.character_key("Jane"), "jane");
    }

    #[test]
    fn label_table_is_stable() {
        let labels = FieldLabel::all_labels();
        assert_eq!(labels[0], "Full Name:");
        assert_eq!(labels[9], "Daria on herself:");
        assert_eq!(labels.len(), FieldLabel::ALL.len());
    }

    #[test]
    fn record_serializes_to_json() {
        let mut record = CharacterRecord::new("https://example.org/ch_jane.html");
        record.full_name = "Jane Lane".to_string();
        record.alter_ego_images.push(ImageReference {
            link: "https://example.org/jane_1.jpg".to_string(),
            width: "200".to_string(),
            height: String::new(),
        });

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"full_name\":\"Jane Lane\""));
        assert!(json.contains("jane_1.jpg"));
    }
}
