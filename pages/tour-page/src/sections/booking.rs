//! Booking call-to-action.

use tour_model::TourViewModel;

use super::{escape_html, url_encode};

/// Build the contact page deep link carrying the tour name, so the
/// receiving form can pre-select the tour of interest.
pub fn contact_url(tour_name: &str) -> String {
    let query = if tour_name.is_empty() {
        String::new()
    } else {
        format!("?tour={}", url_encode(tour_name))
    };
    format!("/contact{}#contact-form", query)
}

/// Render the booking CTA section.
pub fn render_booking(tour: &TourViewModel) -> String {
    format!(
        r#"<section class="tour-booking" data-section="booking">
    <a class="btn btn--primary" href="{href}" aria-label="Open contact form to ask about {name}">Book this tour</a>
</section>"#,
        href = contact_url(&tour.name),
        name = escape_html(tour.display_name()),
    )
}
