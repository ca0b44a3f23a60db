//! Tour detail page - streaming workload.
//!
//! Reads the `id` query parameter, fetches the catalog once and
//! resolves the record before anything is streamed: either the full
//! detail document goes out, or the not-found document does - never a
//! mix of the two.

mod data;
mod sections;

use spin_sdk::http::{Fields, IncomingRequest, Method, OutgoingResponse, ResponseOutparam};
use spin_sdk::http_component;

use trail_sdk::trail_core::{RequestContext, RequestId, TimingContext};
use trail_sdk::trail_data::FetchClient;
use trail_sdk::trail_observability::{LogFormat, LogLevel, RenderMetrics, StructuredLogger};
use trail_sdk::trail_streaming::{HeadContent, Shell, StreamingSink};

use tour_model::{normalize, resolve, TourViewModel};

use data::fetch_catalog;
use sections::{
    render_booking, render_bring, render_gallery, render_hero, render_highlights,
    render_includes, render_not_found_page, render_options, render_schedule,
};

/// Tour detail page handler.
#[http_component]
async fn handle_tour(req: IncomingRequest, response_out: ResponseOutparam) {
    if req.method() != Method::Get {
        let headers = Fields::from_list(&[]).unwrap();
        let response = OutgoingResponse::new(headers);
        response.set_status_code(405).unwrap();
        response_out.set(response);
        return;
    }

    let path_with_query = req.path_with_query().unwrap_or_default();
    let ctx = RequestContext::new(trail_sdk::trail_core::Method::Get, path_with_query);
    let request_id = ctx.request_id.clone();

    let logger = StructuredLogger::new(request_id.clone())
        .with_page("tour-page")
        .with_route(&ctx.path)
        .with_min_level(LogLevel::Debug)
        .with_format(LogFormat::Human);

    let mut metrics = RenderMetrics::new(request_id.clone());
    metrics.set_page("tour-page");
    metrics.set_route(&ctx.path);

    let raw_id = ctx.query_param("id");
    logger.info_builder("Detail request started")
        .field("id_param", raw_id.unwrap_or("<missing>"))
        .emit();

    // Resolve before streaming: a fallback page must never trail
    // partial detail content.
    let client = FetchClient::new(request_id.clone(), TimingContext::new());
    let tour = match fetch_catalog(&client).await {
        Ok(records) => match resolve(&records, raw_id) {
            Ok(record) => Some(normalize(record)),
            Err(e) => {
                logger.warn_builder("Lookup failed")
                    .field("reason", e.to_string())
                    .emit();
                None
            }
        },
        Err(e) => {
            logger.error_builder("Failed to load tours")
                .field("error", e.to_string())
                .emit();
            None
        }
    };

    match tour {
        Some(tour) => render_detail(&tour, response_out, &request_id, &logger, metrics).await,
        None => render_fallback(response_out, &request_id, &logger, metrics).await,
    }
}

/// Stream the full detail document.
async fn render_detail(
    tour: &TourViewModel,
    response_out: ResponseOutparam,
    request_id: &RequestId,
    logger: &StructuredLogger,
    mut metrics: RenderMetrics,
) {
    let response = html_response(200, request_id);
    let body = response.take_body();
    response_out.set(response);
    let mut sink = StreamingSink::new(body, TimingContext::new());

    let shell = create_shell(tour);
    if let Err(e) = sink.send_shell(&shell.render_opening()).await {
        logger.error_builder("Failed to send shell")
            .field("error", e.to_string())
            .emit();
        return;
    }
    metrics.record_shell_sent();

    stream_section(&mut sink, &mut metrics, "hero", &render_hero(tour)).await;
    if !tour.photos.is_empty() {
        stream_section(&mut sink, &mut metrics, "gallery", &render_gallery(tour)).await;
    }
    if !tour.highlights.is_empty() {
        stream_section(&mut sink, &mut metrics, "highlights", &render_highlights(tour)).await;
    }
    if !tour.what_to_bring.is_empty() {
        stream_section(&mut sink, &mut metrics, "bring", &render_bring(tour)).await;
    }
    if !tour.schedule.is_empty() {
        stream_section(&mut sink, &mut metrics, "schedule", &render_schedule(tour)).await;
    }
    stream_section(&mut sink, &mut metrics, "includes", &render_includes(tour)).await;
    if let Some(options) = render_options(tour) {
        stream_section(&mut sink, &mut metrics, "options", &options).await;
    }
    stream_section(&mut sink, &mut metrics, "booking", &render_booking(tour)).await;

    let _ = sink.send_raw(shell.render_closing().into_bytes()).await;
    sink.complete();

    let report = metrics.finalize(Some(200));
    logger.debug("Detail page complete");
    eprintln!("\n{}", report.to_summary());
}

/// Send the not-found document. Replaces the whole page, status 404.
async fn render_fallback(
    response_out: ResponseOutparam,
    request_id: &RequestId,
    logger: &StructuredLogger,
    metrics: RenderMetrics,
) {
    let response = html_response(404, request_id);
    let body = response.take_body();
    response_out.set(response);
    let mut sink = StreamingSink::new(body, TimingContext::new());

    let _ = sink.send_shell(&render_not_found_page()).await;
    sink.complete();

    let report = metrics.finalize(Some(404));
    logger.debug("Not-found page sent");
    eprintln!("\n{}", report.to_summary());
}

/// Send one section and record its metrics.
async fn stream_section<S, E>(
    sink: &mut StreamingSink<S, E>,
    metrics: &mut RenderMetrics,
    name: &str,
    html: &str,
) where
    S: futures::Sink<Vec<u8>, Error = E> + Unpin,
    E: std::fmt::Display,
{
    metrics.record_section_start(name);
    let _ = sink.send_section(name, html).await;
    metrics.record_section_sent(name, Some(html.len()), false);
}

fn html_response(status: u16, request_id: &RequestId) -> OutgoingResponse {
    let header_list: Vec<(String, Vec<u8>)> = vec![
        ("content-type".to_owned(), "text/html; charset=utf-8".into()),
        ("x-request-id".to_owned(), request_id.to_string().into()),
        ("cache-control".to_owned(), "no-store".into()),
    ];
    let headers = Fields::from_list(&header_list).unwrap();
    let response = OutgoingResponse::new(headers);
    response.set_status_code(status).unwrap();
    response
}

/// Create the detail page shell for a resolved tour.
fn create_shell(tour: &TourViewModel) -> Shell {
    let head = HeadContent::new(format!("Cascada Tours — {}", tour.display_name()))
        .with_meta("viewport", "width=device-width, initial-scale=1")
        .with_style(DETAIL_STYLES);

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
<main class="tour-container">
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

/// CSS styles for the detail page.
const DETAIL_STYLES: &str = r#"
* { box-sizing: border-box; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; background: #f7f6f2; }
.site-header { display: flex; justify-content: space-between; align-items: center; background: #12352b; color: white; padding: 1rem 2rem; }
.site-header a { color: #eafff5; text-decoration: none; }
.logo { font-weight: 700; font-size: 1.1rem; }
.header-nav a { margin-left: 1.25rem; }
.site-footer { background: #12352b; color: #bfe6d4; text-align: center; padding: 2rem; margin-top: 2rem; }
.tour-container { max-width: 900px; margin: 0 auto; padding: 2rem 1rem; }
.tour-container section { background: white; border-radius: 10px; padding: 1.5rem; margin-bottom: 1rem; }
.tour-name { margin: 0 0 .5rem; font-size: 2rem; }
.tour-meta { color: #666; margin: 0 0 .5rem; }
.tour-price { color: #b3541e; font-size: 1.4rem; font-weight: 700; margin: 0 0 1rem; }
.tour-long { line-height: 1.6; color: #333; margin: 0; }
.tour-gallery { display: grid; grid-template-columns: repeat(3, 1fr); gap: .75rem; }
.tour-photo { margin: 0; border-radius: 8px; overflow: hidden; background: #e8ece9; display: flex; align-items: center; justify-content: center; color: #556; font-size: .9rem; min-height: 140px; }
.tour-photo img { width: 100%; height: 100%; object-fit: cover; display: block; }
.span-2 { grid-column: span 2; }
.list { padding-left: 1.1rem; margin: 0; color: #444; }
.checklist { list-style: none; padding: 0; margin: 0; }
.checklist li { position: relative; padding-left: 1.5rem; margin-bottom: .35rem; color: #444; line-height: 1.45; }
.checklist li::before { content: "\2714"; position: absolute; left: 0; top: 0; line-height: 1; color: #1c4a3c; font-weight: 800; }
.tour-sched-row { display: flex; gap: .75rem; align-items: baseline; padding: .35rem 0; }
.badge { background: #eef3f0; border-radius: 4px; font-size: .8rem; padding: .2rem .5rem; min-width: 3.2rem; text-align: center; }
.tour-sched-text { color: #444; }
.tour-options { display: grid; grid-template-columns: repeat(auto-fill, minmax(200px, 1fr)); gap: .75rem; }
.tour-option { border: 1px solid #e0e4e1; border-radius: 8px; padding: 1rem; }
.tour-option--highlight { border-color: #e8a13c; box-shadow: 0 0 0 2px #f6dfbd; }
.tour-option__title { margin: 0 0 .5rem; font-size: 1rem; }
.tour-option__price { color: #b3541e; font-weight: 700; }
.btn { display: inline-block; border: none; border-radius: 8px; padding: .7rem 1.2rem; font-size: .95rem; text-decoration: none; }
.btn--primary { background: #1c4a3c; color: white; }
"#;
