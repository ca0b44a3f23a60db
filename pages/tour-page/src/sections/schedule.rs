//! Daily schedule section.

use tour_model::TourViewModel;

use super::escape_html;

/// Render the itinerary rows: a time badge and the activity text.
/// Rows with no time keep their badge slot so the column stays aligned.
pub fn render_schedule(tour: &TourViewModel) -> String {
    let rows: String = tour
        .schedule
        .iter()
        .map(|row| {
            format!(
                r#"<div class="tour-sched-row">
        <span class="badge">{time}</span>
        <span class="tour-sched-text">{text}</span>
    </div>"#,
                time = escape_html(&row.time),
                text = escape_html(&row.text),
            )
        })
        .collect();

    format!(
        r#"<section class="tour-schedule" data-section="schedule">
    <h2>Daily schedule</h2>
    {}
</section>"#,
        rows
    )
}
