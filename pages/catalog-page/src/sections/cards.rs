//! Tour card grid section.

use tour_model::TourViewModel;

use super::escape_html;

/// Fallback asset when a tour has no image of its own.
const DEFAULT_TOUR_IMG: &str = "/assets/img/tours/_placeholder.jpg";

/// How many highlight bullets fit on a card.
const CARD_HIGHLIGHTS: usize = 3;

/// Render the full catalog section: heading plus card grid, cards in
/// source order.
pub fn render_catalog(tours: &[TourViewModel]) -> String {
    let cards: String = tours.iter().map(render_card).collect();

    format!(
        r#"<section class="tours" data-section="cards">
    <h2 class="section-title">Our Tours</h2>
    <div class="card-grid">
        {}
    </div>
</section>"#,
        cards
    )
}

/// Render one catalog card.
pub fn render_card(tour: &TourViewModel) -> String {
    let image = if tour.image.is_empty() {
        DEFAULT_TOUR_IMG
    } else {
        &tour.image
    };
    let alt = if tour.name.is_empty() {
        "Tour photo".to_string()
    } else {
        escape_html(&tour.name)
    };

    let badge = if tour.badge.is_empty() {
        String::new()
    } else {
        format!(
            r#"<span class="card__badge">{}</span>"#,
            escape_html(&tour.badge)
        )
    };

    let mut chips = String::new();
    if !tour.difficulty.is_empty() {
        chips.push_str(&format!(
            r#"<span class="badge badge--soft">{}</span>"#,
            escape_html(&tour.difficulty)
        ));
    }
    if !tour.duration.is_empty() {
        chips.push_str(&format!(
            r#"<span class="badge">&#9201; {}</span>"#,
            escape_html(&tour.duration)
        ));
    }

    let highlights = if tour.highlights.is_empty() {
        String::new()
    } else {
        let items: String = tour
            .highlights
            .iter()
            .take(CARD_HIGHLIGHTS)
            .map(|h| format!("<li>{}</li>", escape_html(h)))
            .collect();
        format!(r#"<ul class="list">{}</ul>"#, items)
    };

    let mut info_rows = String::new();
    if !tour.duration.is_empty() {
        info_rows.push_str(&info_row("Duration:", &escape_html(&tour.duration)));
    }
    if !tour.price.is_empty() {
        info_rows.push_str(&info_row(
            "Price:",
            &format!(r#"<span class="price">{}</span>"#, escape_html(&tour.price)),
        ));
    }
    let info = if info_rows.is_empty() {
        String::new()
    } else {
        format!(r#"<dl class="info">{}</dl>"#, info_rows)
    };

    format!(
        r#"<article class="card">
    <figure class="card__media">
        <img src="{image}" alt="{alt}" loading="lazy" decoding="async">
        {badge}
    </figure>
    <div class="card__pad">
        <h3 class="card__title">{title}</h3>
        <p class="card__text clamp-3">{description}</p>
        <div class="card__meta">{chips}</div>
        {highlights}
        {info}
        <div class="card__cta">{cta}</div>
    </div>
</article>"#,
        image = escape_html(image),
        alt = alt,
        badge = badge,
        title = escape_html(tour.card_title()),
        description = escape_html(&tour.description),
        chips = chips,
        highlights = highlights,
        info = info,
        cta = render_cta(tour),
    )
}

/// The card call-to-action. Records without a usable id get an inert
/// notice instead of a link to nowhere.
fn render_cta(tour: &TourViewModel) -> String {
    match tour.id {
        Some(id) => format!(
            r#"<a class="btn btn--primary btn--full-width" href="/tour?id={id}" aria-label="Open {name} details and booking">View Details</a>"#,
            id = id,
            name = escape_html(tour.card_title()),
        ),
        None => r#"<span class="btn btn--disabled btn--full-width">Details unavailable</span>"#
            .to_string(),
    }
}

fn info_row(term: &str, data_html: &str) -> String {
    format!(
        r#"<div class="info__row"><dt class="info__term">{}</dt><dd class="info__data">{}</dd></div>"#,
        term, data_html
    )
}

/// Render the catalog failure section: the same grid with a single
/// explanatory card, used only when no cards could be rendered.
pub fn render_catalog_failure() -> String {
    r#"<section class="tours" data-section="cards">
    <h2 class="section-title">Our Tours</h2>
    <div class="card-grid">
        <div class="card">
            <div class="card__pad">
                <h3 class="card__title">We couldn&#8217;t load tours</h3>
                <p class="card__text">Please try again later or contact us on WhatsApp.</p>
            </div>
        </div>
    </div>
</section>"#
        .to_string()
}
