//! Tour catalog page - streaming workload.
//!
//! Streams the page shell first, then fetches the catalog once
//! (cache bypassed, single attempt) and fills in the card grid and the
//! contact section. A load failure turns into one inline fallback card;
//! the rest of the page stays usable.

mod data;
mod sections;

use spin_sdk::http::{Fields, IncomingRequest, Method, OutgoingResponse, ResponseOutparam};
use spin_sdk::http_component;

use trail_sdk::trail_core::RequestContext;
use trail_sdk::trail_data::FetchClient;
use trail_sdk::trail_observability::{LogFormat, LogLevel, StructuredLogger};
use trail_sdk::trail_streaming::{HeadContent, Shell, StreamingSink};

use tour_model::{normalize, TourViewModel};

use data::fetch_catalog;
use sections::{render_catalog, render_catalog_failure, render_contact};

/// Catalog page handler.
#[http_component]
async fn handle_catalog(req: IncomingRequest, response_out: ResponseOutparam) {
    if req.method() != Method::Get {
        let headers = Fields::from_list(&[]).unwrap();
        let response = OutgoingResponse::new(headers);
        response.set_status_code(405).unwrap();
        response_out.set(response);
        return;
    }

    let path_with_query = req.path_with_query().unwrap_or_default();
    let ctx = RequestContext::new(
        trail_sdk::trail_core::Method::Get,
        path_with_query,
    );
    let request_id = ctx.request_id.clone();

    let logger = StructuredLogger::new(request_id.clone())
        .with_page("catalog-page")
        .with_route(&ctx.path)
        .with_min_level(LogLevel::Debug)
        .with_format(LogFormat::Human);

    let header_list: Vec<(String, Vec<u8>)> = vec![
        ("content-type".to_owned(), "text/html; charset=utf-8".into()),
        ("x-request-id".to_owned(), request_id.to_string().into()),
        ("cache-control".to_owned(), "no-store".into()),
    ];
    let headers = Fields::from_list(&header_list).unwrap();
    let response = OutgoingResponse::new(headers);
    response.set_status_code(200).unwrap();

    let body = response.take_body();
    response_out.set(response);
    let mut sink = StreamingSink::new(body, ctx.timing.clone());

    let shell = create_shell();

    // Shell first: the chrome is visible while the catalog loads.
    if let Err(e) = sink.send_shell(&shell.render_opening()).await {
        logger.error_builder("Failed to send shell")
            .field("error", e.to_string())
            .emit();
        return;
    }
    logger.debug("Shell sent");

    let client = FetchClient::new(request_id.clone(), ctx.timing.clone());

    match fetch_catalog(&client).await {
        Ok(records) => {
            let tours: Vec<TourViewModel> = records.iter().map(normalize).collect();
            logger.info_builder("Catalog loaded")
                .field_i64("tours", tours.len() as i64)
                .emit();

            let _ = sink.send_section("cards", &render_catalog(&tours)).await;
            let _ = sink.send_section("contact", &render_contact(&tours)).await;
        }
        Err(e) => {
            logger.error_builder("Failed to load tours")
                .field("error", e.to_string())
                .emit();

            let _ = sink.send_section("cards", &render_catalog_failure()).await;
            let _ = sink.send_section("contact", &render_contact(&[])).await;
        }
    }

    let _ = sink.send_raw(shell.render_closing().into_bytes()).await;
    sink.complete();
    logger.debug("Catalog page complete");
}

/// Create the catalog page shell.
fn create_shell() -> Shell {
    let head = HeadContent::new("Tours | Cascada Tours")
        .with_meta("viewport", "width=device-width, initial-scale=1")
        .with_meta(
            "description",
            "Guided volcano, rainforest and wildlife tours",
        )
        .with_style(CATALOG_STYLES);

    Shell::new(head)
        .with_body_start(
            r#"<body>
<header class="site-header">
    <a href="/" class="logo">Cascada Tours</a>
    <nav class="header-nav">
        <a href="/tours">Tours</a>
        <a href="/contact">Contact</a>
    </nav>
</header>
<section class="hero">
    <h1>Find your next adventure</h1>
    <p>Small groups, local guides, no shortcuts.</p>
</section>
<main class="catalog-container">
"#,
        )
        .with_body_end(
            r#"
</main>
<footer class="site-footer">
    <p>Cascada Tours &middot; family-run since 2012</p>
</footer>
</body>
</html>"#,
        )
}

/// CSS styles for the catalog page.
const CATALOG_STYLES: &str = r#"
* { box-sizing: border-box; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; background: #f7f6f2; }
.site-header { display: flex; justify-content: space-between; align-items: center; background: #12352b; color: white; padding: 1rem 2rem; }
.site-header a { color: #eafff5; text-decoration: none; }
.logo { font-weight: 700; font-size: 1.1rem; }
.header-nav a { margin-left: 1.25rem; }
.hero { background: #1c4a3c; color: white; text-align: center; padding: 3rem 1rem; }
.hero p { color: #bfe6d4; }
.site-footer { background: #12352b; color: #bfe6d4; text-align: center; padding: 2rem; margin-top: 2rem; }
.catalog-container { max-width: 1100px; margin: 0 auto; padding: 2rem 1rem; }
.section-title { font-size: 1.6rem; margin: 0 0 1rem; }
.card-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 1.25rem; }
.card { background: white; border-radius: 10px; overflow: hidden; box-shadow: 0 1px 4px rgba(0,0,0,.08); }
.card__media { margin: 0; position: relative; }
.card__media img { width: 100%; aspect-ratio: 4/3; object-fit: cover; display: block; }
.card__badge { position: absolute; top: .75rem; left: .75rem; background: #e8a13c; color: #222; font-size: .75rem; font-weight: 700; padding: .25rem .5rem; border-radius: 4px; }
.card__pad { padding: 1rem; }
.card__title { margin: 0 0 .5rem; font-size: 1.15rem; }
.card__text { color: #555; margin: 0 0 .75rem; }
.clamp-3 { display: -webkit-box; -webkit-line-clamp: 3; -webkit-box-orient: vertical; overflow: hidden; }
.card__meta { display: flex; gap: .4rem; flex-wrap: wrap; margin-bottom: .5rem; }
.badge { background: #eef3f0; border-radius: 4px; font-size: .75rem; padding: .2rem .5rem; }
.badge--soft { background: #fdf2e3; }
.list { padding-left: 1.1rem; margin: 0 0 .75rem; color: #444; }
.info { margin: 0 0 1rem; }
.info__row { display: flex; justify-content: space-between; padding: .25rem 0; border-bottom: 1px dashed #e4e4e0; }
.info__term { color: #777; }
.info__data { margin: 0; }
.price { color: #b3541e; font-weight: 700; }
.btn { display: inline-block; border: none; border-radius: 8px; padding: .7rem 1.2rem; font-size: .95rem; cursor: pointer; text-decoration: none; text-align: center; }
.btn--primary { background: #1c4a3c; color: white; }
.btn--full-width { width: 100%; }
.btn--disabled { background: #d8d8d2; color: #777; cursor: default; }
.contact { max-width: 640px; margin: 3rem auto 0; background: white; border-radius: 10px; padding: 1.5rem; }
.contact__form { display: grid; gap: .5rem; }
.contact__form input, .contact__form select, .contact__form textarea { padding: .55rem; border: 1px solid #d5d5cf; border-radius: 6px; font: inherit; }
"#;
