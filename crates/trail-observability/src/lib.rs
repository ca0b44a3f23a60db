//! Observability for page workloads.
//!
//! Diagnostics are operator-only: everything here writes to stderr,
//! nothing is ever rendered into a page.
//!
//! - `StructuredLogger` - request-correlated structured logging
//! - `RenderMetrics` - per-section render timing and byte counts

mod logging;
mod metrics;

pub use logging::*;
pub use metrics::*;
