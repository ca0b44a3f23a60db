//! Catalog page section renderers.
//!
//! Pure `&TourViewModel -> String` functions; the handler owns all I/O.

mod cards;
mod contact;

pub use cards::*;
pub use contact::*;

pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
