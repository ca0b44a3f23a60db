//! Not-found fallback page.

/// Render the complete not-found document. It replaces the page body
/// entirely; no detail content ever accompanies it.
pub fn render_not_found_page() -> String {
    r#"<!DOCTYPE html>
<html lang="en">
<head>
<title>Tour not found | Cascada Tours</title>
<meta name="viewport" content="width=device-width, initial-scale=1">
<style>
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; min-height: 100vh; display: flex; align-items: center; justify-content: center; background: #f3f4f6; }
.panel { text-align: center; max-width: 520px; padding: 1rem; }
.panel h1 { font-size: 28px; margin: 0 0 8px; color: #1a1a1a; }
.panel p { color: #4b5563; margin: 0 0 18px; }
.btn { display: inline-block; background: #1c4a3c; color: white; text-decoration: none; border-radius: 8px; padding: .7rem 1.2rem; }
</style>
</head>
<body>
<div class="panel">
    <h1>Tour not found</h1>
    <p>We couldn&#8217;t find the tour you&#8217;re looking for.</p>
    <a href="/tours" class="btn">Back to tours</a>
</div>
</body>
</html>"#
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_is_a_complete_document() {
        let html = render_not_found_page();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Tour not found"));
        assert!(html.contains(r#"href="/tours""#));
        // No detail sections alongside the fallback
        assert!(!html.contains("data-section"));
    }
}
