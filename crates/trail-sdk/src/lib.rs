//! Public SDK for the tour site streaming platform.
//!
//! Re-exports the platform crates page workloads build against:
//!
//! ```ignore
//! use trail_sdk::trail_core::{Method, RequestContext};
//! use trail_sdk::trail_data::{FetchClient, SourceTag};
//! use trail_sdk::trail_streaming::{HeadContent, Shell, StreamingSink};
//! ```

pub use trail_core;
pub use trail_data;
pub use trail_observability;
pub use trail_streaming;

/// Prelude for convenient imports.
pub mod prelude {
    pub use trail_core::*;
    pub use trail_data::*;
    pub use trail_observability::*;
    pub use trail_streaming::*;
}
