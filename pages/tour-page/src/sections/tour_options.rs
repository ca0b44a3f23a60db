//! Pricing options panel.

use tour_model::TourViewModel;

use super::escape_html;

/// Render the options panel, or `None` when the tour has no valid
/// entries - the section is then left out of the page entirely.
pub fn render_options(tour: &TourViewModel) -> Option<String> {
    if !tour.has_options() {
        return None;
    }

    let entries: String = tour
        .options
        .iter()
        .map(|option| {
            let emphasis = if option.emphasized {
                " tour-option--highlight"
            } else {
                ""
            };
            format!(
                r#"<article class="tour-option{emphasis}">
        <h3 class="tour-option__title">{label}</h3>
        <div class="tour-option__price">{price}</div>
    </article>"#,
                emphasis = emphasis,
                label = escape_html(&option.label),
                price = escape_html(&option.price),
            )
        })
        .collect();

    Some(format!(
        r#"<section class="tour-options" data-section="options">
    <h2>Choose your option</h2>
    {}
</section>"#,
        entries
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tour_model::normalize;

    #[test]
    fn test_panel_hidden_without_valid_entries() {
        assert!(render_options(&normalize(&json!({}))).is_none());
        // All entries filtered out is the same as none at all.
        let vm = normalize(&json!({"options": {"Hidden": "", "": "$10"}}));
        assert!(render_options(&vm).is_none());
    }

    #[test]
    fn test_combo_entries_are_emphasized() {
        let vm = normalize(&json!({
            "options": {"Basic": "$50", "3 in 1 Combo": "$120", "Hidden": ""}
        }));
        let html = render_options(&vm).unwrap();
        assert_eq!(html.matches("tour-option__title").count(), 2);
        assert_eq!(html.matches("tour-option--highlight").count(), 1);
        assert!(html.find("Basic").unwrap() < html.find("3 in 1 Combo").unwrap());
        assert!(!html.contains("Hidden"));
    }
}
