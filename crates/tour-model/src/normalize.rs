//! Raw record to view model normalization.

use serde_json::Value;

use crate::view::{GalleryEntry, Includes, OptionEntry, ScheduleRow, TourViewModel};

/// Separator between time and text in string-form schedule entries.
const SCHEDULE_SEPARATOR: &str = " - ";

/// Suffixes that mark a photo entry as an actual image.
const IMAGE_SUFFIXES: [&str; 6] = [".jpg", ".jpeg", ".png", ".webp", ".avif", ".gif"];

/// Option labels containing one of these (case-insensitive) are
/// premium combos and get visual emphasis.
const COMBO_KEYWORDS: [&str; 3] = ["3 in 1", "4 in 1", "hot springs"];

/// Convert one raw tour record into its canonical view model.
///
/// Total over any JSON value: unexpected shapes degrade to defaults,
/// never to an error.
pub fn normalize(raw: &Value) -> TourViewModel {
    TourViewModel {
        id: raw.get("id").and_then(coerce_id),
        name: field_text(raw, "name"),
        image: field_text(raw, "image"),
        description: field_text(raw, "description"),
        long_description: field_text(raw, "longDescription"),
        duration: field_text(raw, "duration"),
        price: field_text(raw, "price"),
        difficulty: field_text(raw, "difficulty"),
        group_size: field_text(raw, "groupSize"),
        badge: field_text(raw, "badge"),
        highlights: string_items(raw.get("highlights")),
        what_to_bring: string_items(raw.get("whatToBring")),
        photos: gallery_entries(raw.get("photos")),
        schedule: schedule_rows(raw.get("schedule")),
        includes: includes_of(raw.get("includes")),
        options: option_entries(raw.get("options")),
    }
}

/// Coerce a raw `id` value to its numeric form.
///
/// Numbers pass through; strings are trimmed and parsed. Anything else
/// (and non-numeric strings) is unmatchable.
pub fn coerce_id(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                trimmed.parse::<f64>().ok()
            }
        }
        _ => None,
    }
}

/// The string form of a value, or the default for anything non-string.
pub fn text_or(value: Option<&Value>, default: &str) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        _ => default.to_string(),
    }
}

fn field_text(raw: &Value, key: &str) -> String {
    text_or(raw.get(key), "")
}

/// Collect the string items of an array value; everything else is empty.
pub fn string_items(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

/// Normalize schedule entries to uniform time/text rows.
///
/// Object entries contribute `time`/`text` directly (missing pieces
/// become empty strings). String entries split on the first `" - "`:
/// the left segment is the time, the rest (re-joined with `" - "`) is
/// the text; with no separator the whole string is text. Scalar
/// leftovers stringify into the text column.
pub fn schedule_rows(value: Option<&Value>) -> Vec<ScheduleRow> {
    let items = match value {
        Some(Value::Array(items)) => items,
        _ => return Vec::new(),
    };

    items
        .iter()
        .filter_map(|item| match item {
            Value::Object(entry) => Some(ScheduleRow {
                time: text_or(entry.get("time"), ""),
                text: text_or(entry.get("text"), ""),
            }),
            Value::String(s) => {
                let (time, text) = match s.split_once(SCHEDULE_SEPARATOR) {
                    Some((time, rest)) => (time.to_string(), rest.to_string()),
                    None => (String::new(), s.clone()),
                };
                Some(ScheduleRow { time, text })
            }
            Value::Number(n) => Some(ScheduleRow {
                time: String::new(),
                text: n.to_string(),
            }),
            Value::Bool(b) => Some(ScheduleRow {
                time: String::new(),
                text: b.to_string(),
            }),
            _ => None,
        })
        .collect()
}

/// Normalize the `includes` field to its tagged variant.
///
/// Arrays become the list variant; any other non-empty value becomes
/// the text variant holding its string form; empty and absent values
/// become an empty text variant.
pub fn includes_of(value: Option<&Value>) -> Includes {
    match value {
        Some(Value::Array(_)) => Includes::List(string_items(value)),
        Some(Value::String(s)) => Includes::Text(s.clone()),
        Some(Value::Number(n)) => {
            if n.as_f64() == Some(0.0) {
                Includes::default()
            } else {
                Includes::Text(n.to_string())
            }
        }
        Some(Value::Bool(true)) => Includes::Text("true".to_string()),
        _ => Includes::default(),
    }
}

/// Classify photo entries into images and literal placeholders.
pub fn gallery_entries(value: Option<&Value>) -> Vec<GalleryEntry> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str())
            .map(|photo| {
                if is_image_like(photo) {
                    GalleryEntry::Image(photo.to_string())
                } else {
                    GalleryEntry::Placeholder(photo.to_string())
                }
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Whether a photo entry points at an actual image: a known image
/// extension or a network URL.
pub fn is_image_like(entry: &str) -> bool {
    let lower = entry.to_ascii_lowercase();
    IMAGE_SUFFIXES.iter().any(|suffix| lower.ends_with(suffix))
        || lower.starts_with("http://")
        || lower.starts_with("https://")
}

/// Normalize the `options` mapping into ordered entries.
///
/// Source insertion order is preserved. Entries with an empty label or
/// price are dropped; premium-combo labels are flagged for emphasis.
pub fn option_entries(value: Option<&Value>) -> Vec<OptionEntry> {
    let map = match value {
        Some(Value::Object(map)) => map,
        _ => return Vec::new(),
    };

    map.iter()
        .filter_map(|(label, price)| {
            let price = match price {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                _ => String::new(),
            };
            if label.trim().is_empty() || price.is_empty() {
                return None;
            }
            Some(OptionEntry {
                emphasized: is_premium_combo(label),
                label: label.clone(),
                price,
            })
        })
        .collect()
}

fn is_premium_combo(label: &str) -> bool {
    let lower = label.to_lowercase();
    COMBO_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_is_deterministic() {
        let raw = json!({
            "id": "4",
            "name": "Arenal Volcano Combo",
            "schedule": ["07:30 - Pickup", {"time": "12:00", "text": "Lunch"}],
            "includes": ["Lunch", "Transport"],
            "options": {"Basic": "$50", "3 in 1 Combo": "$120"}
        });
        assert_eq!(normalize(&raw), normalize(&raw));
    }

    #[test]
    fn test_normalize_is_total_on_hostile_shapes() {
        // Every field the wrong type: nothing throws, everything defaults.
        let raw = json!({
            "id": {"nested": true},
            "name": 42,
            "description": null,
            "highlights": "not an array",
            "photos": 9,
            "schedule": {"time": "map, not array"},
            "includes": {"deep": []},
            "options": ["not", "a", "map"]
        });
        let vm = normalize(&raw);
        assert_eq!(vm.id, None);
        assert_eq!(vm.name, "");
        assert_eq!(vm.description, "");
        assert!(vm.highlights.is_empty());
        assert!(vm.photos.is_empty());
        assert!(vm.schedule.is_empty());
        assert_eq!(vm.includes, Includes::Text(String::new()));
        assert!(vm.options.is_empty());
    }

    #[test]
    fn test_id_coercion() {
        assert_eq!(coerce_id(&json!(3)), Some(3.0));
        assert_eq!(coerce_id(&json!("2")), Some(2.0));
        assert_eq!(coerce_id(&json!(" 7 ")), Some(7.0));
        assert_eq!(coerce_id(&json!("volcano")), None);
        assert_eq!(coerce_id(&json!("")), None);
        assert_eq!(coerce_id(&json!(null)), None);
        assert_eq!(coerce_id(&json!([1])), None);
    }

    #[test]
    fn test_schedule_string_with_separator() {
        let rows = schedule_rows(Some(&json!(["09:00 - Breakfast at camp"])));
        assert_eq!(
            rows,
            vec![ScheduleRow {
                time: "09:00".to_string(),
                text: "Breakfast at camp".to_string()
            }]
        );
    }

    #[test]
    fn test_schedule_object_passes_through() {
        let rows = schedule_rows(Some(&json!([{"time": "14:00", "text": "Departure"}])));
        assert_eq!(
            rows,
            vec![ScheduleRow {
                time: "14:00".to_string(),
                text: "Departure".to_string()
            }]
        );
    }

    #[test]
    fn test_schedule_without_separator_is_all_text() {
        let rows = schedule_rows(Some(&json!(["No separator here"])));
        assert_eq!(
            rows,
            vec![ScheduleRow {
                time: String::new(),
                text: "No separator here".to_string()
            }]
        );
    }

    #[test]
    fn test_schedule_keeps_later_separators_in_text() {
        let rows = schedule_rows(Some(&json!(["10:00 - Hike - viewpoint loop"])));
        assert_eq!(rows[0].time, "10:00");
        assert_eq!(rows[0].text, "Hike - viewpoint loop");
    }

    #[test]
    fn test_schedule_object_with_missing_pieces() {
        let rows = schedule_rows(Some(&json!([{"time": "08:00"}, {"text": "Snack"}])));
        assert_eq!(rows[0].time, "08:00");
        assert_eq!(rows[0].text, "");
        assert_eq!(rows[1].time, "");
        assert_eq!(rows[1].text, "Snack");
    }

    #[test]
    fn test_includes_variants() {
        assert_eq!(
            includes_of(Some(&json!(["Lunch", "Guide"]))),
            Includes::List(vec!["Lunch".to_string(), "Guide".to_string()])
        );
        assert_eq!(
            includes_of(Some(&json!("Lunch and transport"))),
            Includes::Text("Lunch and transport".to_string())
        );
        assert_eq!(includes_of(None), Includes::Text(String::new()));
        assert_eq!(includes_of(Some(&json!(null))), Includes::Text(String::new()));
    }

    #[test]
    fn test_gallery_classification() {
        let entries = gallery_entries(Some(&json!([
            "/assets/img/tours/arenal-1.jpg",
            "HTTPS://cdn.example.com/photo",
            "More photos coming soon",
            "shot.PNG"
        ])));
        assert_eq!(
            entries,
            vec![
                GalleryEntry::Image("/assets/img/tours/arenal-1.jpg".to_string()),
                GalleryEntry::Image("HTTPS://cdn.example.com/photo".to_string()),
                GalleryEntry::Placeholder("More photos coming soon".to_string()),
                GalleryEntry::Image("shot.PNG".to_string()),
            ]
        );
    }

    #[test]
    fn test_options_filtering_and_emphasis() {
        let entries = option_entries(Some(&json!({
            "Basic": "$50",
            "3 in 1 Combo": "$120",
            "Hidden": ""
        })));
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].label, "Basic");
        assert!(!entries[0].emphasized);
        assert_eq!(entries[1].label, "3 in 1 Combo");
        assert_eq!(entries[1].price, "$120");
        assert!(entries[1].emphasized);
    }

    #[test]
    fn test_options_preserve_source_order() {
        let entries = option_entries(Some(&json!({
            "Zipline only": "$45",
            "Hot Springs Pass": "$80",
            "Aerial tram": "$60"
        })));
        let labels: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, ["Zipline only", "Hot Springs Pass", "Aerial tram"]);
        assert!(entries[1].emphasized);
    }

    #[test]
    fn test_options_numeric_price_is_stringified() {
        let entries = option_entries(Some(&json!({"Basic": 50})));
        assert_eq!(entries[0].price, "50");
    }

    #[test]
    fn test_absent_fields_stay_isolated() {
        // Dropping one optional field must not disturb the others.
        let full = normalize(&json!({
            "name": "Sloth Sanctuary",
            "duration": "Half day",
            "price": "$65"
        }));
        let without_price = normalize(&json!({
            "name": "Sloth Sanctuary",
            "duration": "Half day"
        }));
        assert_eq!(without_price.price, "");
        assert_eq!(without_price.name, full.name);
        assert_eq!(without_price.duration, full.duration);
    }
}
