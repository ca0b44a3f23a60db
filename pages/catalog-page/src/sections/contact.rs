//! Contact section with the tour-interest select.
//!
//! Form submission itself is handled elsewhere; this page only renders
//! the markup and keeps the select's options in step with the catalog.

use tour_model::TourViewModel;

use super::escape_html;

/// Render the contact section. Every rendered card contributes one
/// select option, keyed by tour name; unnamed tours are skipped.
pub fn render_contact(tours: &[TourViewModel]) -> String {
    format!(
        r#"<section class="contact" id="contact-form" data-section="contact">
    <h2 class="section-title">Plan your trip</h2>
    <form class="contact__form" method="POST" action="/api/contact">
        <label for="name">Name</label>
        <input id="name" name="name" type="text" required>
        <label for="email">Email</label>
        <input id="email" name="email" type="email" required>
        <label for="tour-interest">Tour of interest</label>
        <select id="tour-interest" name="tour-interest">
            {options}
        </select>
        <label for="message">Message</label>
        <textarea id="message" name="message" rows="4"></textarea>
        <button class="btn btn--primary" type="submit">Send inquiry</button>
    </form>
</section>"#,
        options = render_tour_options(tours),
    )
}

/// The `<option>` list for the tour-interest select.
pub fn render_tour_options(tours: &[TourViewModel]) -> String {
    let mut options = String::from(r#"<option value="">Select a tour&#8230;</option>"#);
    for tour in tours {
        if tour.name.is_empty() {
            continue;
        }
        let name = escape_html(&tour.name);
        options.push_str(&format!(
            r#"<option value="{name}">{name}</option>"#,
            name = name
        ));
    }
    options
}
