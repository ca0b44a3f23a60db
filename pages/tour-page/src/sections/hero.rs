//! Detail hero section.

use tour_model::TourViewModel;

use super::escape_html;

/// Render the hero: name, meta summary, price, long-form description.
///
/// The meta line (duration, group size, difficulty) skips empty parts;
/// the description falls back from long to short form.
pub fn render_hero(tour: &TourViewModel) -> String {
    let meta = tour.meta_line();
    let meta_html = if meta.is_empty() {
        String::new()
    } else {
        format!(r#"<p class="tour-meta">{}</p>"#, escape_html(&meta))
    };

    let price_html = if tour.price.is_empty() {
        String::new()
    } else {
        format!(
            r#"<p class="tour-price">{}</p>"#,
            escape_html(&tour.price)
        )
    };

    format!(
        r#"<section class="tour-hero" data-section="hero">
    <h1 class="tour-name">{name}</h1>
    {meta}
    {price}
    <p class="tour-long">{long}</p>
</section>"#,
        name = escape_html(tour.display_name()),
        meta = meta_html,
        price = price_html,
        long = escape_html(tour.long_text()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tour_model::normalize;

    #[test]
    fn test_hero_joins_meta_with_separator() {
        let vm = normalize(&json!({
            "name": "Arenal Combo",
            "duration": "Full day",
            "groupSize": "2-10",
            "difficulty": "Moderate"
        }));
        let html = render_hero(&vm);
        assert!(html.contains("Full day • 2-10 • Moderate"));
    }

    #[test]
    fn test_hero_omits_empty_meta_and_price() {
        let vm = normalize(&json!({"name": "Arenal Combo"}));
        let html = render_hero(&vm);
        assert!(!html.contains("tour-meta"));
        assert!(!html.contains("tour-price"));
    }

    #[test]
    fn test_hero_falls_back_to_short_description() {
        let vm = normalize(&json!({"name": "A", "description": "Short one"}));
        assert!(render_hero(&vm).contains("Short one"));
    }

    #[test]
    fn test_nameless_hero_says_tour() {
        let vm = normalize(&json!({}));
        assert!(render_hero(&vm).contains("<h1 class=\"tour-name\">Tour</h1>"));
    }
}
