//! Canonical tour view model types.

use serde::Serialize;

/// One itinerary entry, normalized to a time/text pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleRow {
    /// Start time label ("09:00"); empty when the source gave none.
    pub time: String,
    /// Activity text.
    pub text: String,
}

/// One gallery entry, classified at normalization time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum GalleryEntry {
    /// An image path or URL.
    Image(String),
    /// Free text to display in place of an image.
    Placeholder(String),
}

/// What a tour includes: either running text or a bulleted list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Includes {
    /// Paragraph form. Empty string when the source had nothing.
    Text(String),
    /// List form.
    List(Vec<String>),
}

impl Default for Includes {
    fn default() -> Self {
        Includes::Text(String::new())
    }
}

impl Includes {
    /// Check whether there is anything to render.
    pub fn is_empty(&self) -> bool {
        match self {
            Includes::Text(text) => text.is_empty(),
            Includes::List(items) => items.is_empty(),
        }
    }
}

/// One purchasable variant of a tour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionEntry {
    /// Option label.
    pub label: String,
    /// Price string, as given by the source.
    pub price: String,
    /// Premium combos get visual emphasis.
    pub emphasized: bool,
}

/// Normalized, fully-defaulted representation of one tour.
///
/// Every renderer consumes this shape and nothing else.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TourViewModel {
    /// Numeric identity for detail lookup; `None` never matches.
    pub id: Option<f64>,
    pub name: String,
    pub image: String,
    pub description: String,
    pub long_description: String,
    pub duration: String,
    pub price: String,
    pub difficulty: String,
    pub group_size: String,
    pub badge: String,
    pub highlights: Vec<String>,
    pub what_to_bring: Vec<String>,
    pub photos: Vec<GalleryEntry>,
    pub schedule: Vec<ScheduleRow>,
    pub includes: Includes,
    pub options: Vec<OptionEntry>,
}

impl TourViewModel {
    /// Title for catalog cards.
    pub fn card_title(&self) -> &str {
        if self.name.is_empty() {
            "Untitled tour"
        } else {
            &self.name
        }
    }

    /// Name for the detail hero and page title.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "Tour"
        } else {
            &self.name
        }
    }

    /// Meta summary line: duration, group size, difficulty, each
    /// included only when non-empty.
    pub fn meta_line(&self) -> String {
        [&self.duration, &self.group_size, &self.difficulty]
            .iter()
            .filter(|part| !part.is_empty())
            .map(|part| part.as_str())
            .collect::<Vec<_>>()
            .join(" • ")
    }

    /// Long-form description, falling back to the short one.
    pub fn long_text(&self) -> &str {
        if self.long_description.is_empty() {
            &self.description
        } else {
            &self.long_description
        }
    }

    /// Whether the options panel has anything to show.
    pub fn has_options(&self) -> bool {
        !self.options.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize;
    use serde_json::json;

    #[test]
    fn test_name_fallbacks() {
        let vm = normalize(&json!({}));
        assert_eq!(vm.card_title(), "Untitled tour");
        assert_eq!(vm.display_name(), "Tour");

        let vm = normalize(&json!({"name": "Rio Celeste Hike"}));
        assert_eq!(vm.card_title(), "Rio Celeste Hike");
        assert_eq!(vm.display_name(), "Rio Celeste Hike");
    }

    #[test]
    fn test_meta_line_skips_empty_parts() {
        let vm = normalize(&json!({
            "duration": "Full day",
            "difficulty": "Moderate"
        }));
        assert_eq!(vm.meta_line(), "Full day • Moderate");

        let vm = normalize(&json!({}));
        assert_eq!(vm.meta_line(), "");
    }

    #[test]
    fn test_long_text_falls_back_to_description() {
        let vm = normalize(&json!({"description": "Short blurb"}));
        assert_eq!(vm.long_text(), "Short blurb");

        let vm = normalize(&json!({
            "description": "Short blurb",
            "longDescription": "The full story"
        }));
        assert_eq!(vm.long_text(), "The full story");
    }

    #[test]
    fn test_includes_emptiness() {
        assert!(Includes::Text(String::new()).is_empty());
        assert!(Includes::List(Vec::new()).is_empty());
        assert!(!Includes::Text("Lunch".to_string()).is_empty());
        assert!(!Includes::List(vec!["Lunch".to_string()]).is_empty());
    }
}
