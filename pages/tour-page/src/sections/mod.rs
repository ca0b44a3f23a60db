//! Detail page section renderers.
//!
//! Each renderer is a pure `&TourViewModel -> String`; the handler
//! decides which sections stream and in what order.

mod booking;
mod essentials;
mod gallery;
mod hero;
mod not_found;
mod schedule;
mod tour_options;

pub use booking::*;
pub use essentials::*;
pub use gallery::*;
pub use hero::*;
pub use not_found::*;
pub use schedule::*;
pub use tour_options::*;

pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Percent-encode a query component (space becomes `%20`).
pub(crate) fn url_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 3);
    for c in s.chars() {
        match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' | '~' => out.push(c),
            _ => {
                for byte in c.to_string().as_bytes() {
                    out.push_str(&format!("%{:02X}", byte));
                }
            }
        }
    }
    out
}
