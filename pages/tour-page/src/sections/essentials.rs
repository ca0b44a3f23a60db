//! Highlights, what-to-bring and includes sections.

use tour_model::{Includes, TourViewModel};

use super::escape_html;

/// Render the full highlights list. Unlike catalog cards, the detail
/// page never truncates.
pub fn render_highlights(tour: &TourViewModel) -> String {
    let items: String = tour
        .highlights
        .iter()
        .map(|h| format!("<li>{}</li>", escape_html(h)))
        .collect();

    format!(
        r#"<section class="tour-highlights" data-section="highlights">
    <h2>Highlights</h2>
    <ul class="list">{}</ul>
</section>"#,
        items
    )
}

/// Render the what-to-bring checklist.
pub fn render_bring(tour: &TourViewModel) -> String {
    let items: String = tour
        .what_to_bring
        .iter()
        .map(|item| format!("<li>{}</li>", escape_html(item)))
        .collect();

    format!(
        r#"<section class="tour-bring" data-section="bring">
    <h2>What to bring</h2>
    <ul class="checklist">{}</ul>
</section>"#,
        items
    )
}

/// Render the includes block: a bulleted list for the list variant, a
/// single paragraph for the text variant. The empty text variant still
/// renders the (empty) block.
pub fn render_includes(tour: &TourViewModel) -> String {
    let body = match &tour.includes {
        Includes::List(items) => {
            let items: String = items
                .iter()
                .map(|item| format!("<li>{}</li>", escape_html(item)))
                .collect();
            format!(r#"<ul class="list">{}</ul>"#, items)
        }
        Includes::Text(text) => format!("<p>{}</p>", escape_html(text)),
    };

    format!(
        r#"<section class="tour-includes" data-section="includes">
    <h2>What&#8217;s included</h2>
    {}
</section>"#,
        body
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tour_model::normalize;

    #[test]
    fn test_detail_renders_all_highlights() {
        let vm = normalize(&json!({
            "highlights": ["a", "b", "c", "d", "e", "f", "g"]
        }));
        assert_eq!(render_highlights(&vm).matches("<li>").count(), 7);
    }

    #[test]
    fn test_bring_checklist_lists_every_item() {
        let vm = normalize(&json!({"whatToBring": ["Water", "Sunscreen"]}));
        let html = render_bring(&vm);
        assert!(html.contains("<li>Water</li>"));
        assert!(html.contains("<li>Sunscreen</li>"));
    }

    #[test]
    fn test_includes_list_variant_is_a_list() {
        let vm = normalize(&json!({"includes": ["Lunch", "Guide"]}));
        let html = render_includes(&vm);
        assert!(html.contains("<ul"));
        assert!(html.contains("<li>Lunch</li>"));
    }

    #[test]
    fn test_includes_text_variant_is_a_paragraph() {
        let vm = normalize(&json!({"includes": "Lunch, guide and transport"}));
        let html = render_includes(&vm);
        assert!(html.contains("<p>Lunch, guide and transport</p>"));
        assert!(!html.contains("<ul"));
    }

    #[test]
    fn test_absent_includes_is_an_empty_block() {
        let vm = normalize(&json!({}));
        let html = render_includes(&vm);
        assert!(html.contains("<p></p>"));
    }
}
