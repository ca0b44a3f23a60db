//! Photo gallery section.

use tour_model::{GalleryEntry, TourViewModel};

use super::escape_html;

/// Render the gallery grid. The first entry spans two columns; image
/// entries become `<img>` figures, placeholder entries become text
/// tiles shown in place of an image.
pub fn render_gallery(tour: &TourViewModel) -> String {
    let tiles: String = tour
        .photos
        .iter()
        .enumerate()
        .map(|(i, photo)| {
            let span = if i == 0 { " span-2" } else { "" };
            match photo {
                GalleryEntry::Image(src) => {
                    let alt = format!("{} photo {}", tour.display_name(), i + 1);
                    format!(
                        r#"<figure class="tour-photo{span}">
        <img src="{src}" alt="{alt}" loading="lazy" decoding="async">
    </figure>"#,
                        span = span,
                        src = escape_html(src),
                        alt = escape_html(&alt),
                    )
                }
                GalleryEntry::Placeholder(text) => format!(
                    r#"<div class="tour-photo{span}" aria-label="Photo placeholder">{text}</div>"#,
                    span = span,
                    text = escape_html(text),
                ),
            }
        })
        .collect();

    format!(
        r#"<section class="tour-gallery" data-section="gallery">
    {}
</section>"#,
        tiles
    )
}
