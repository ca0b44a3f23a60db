//! Data access layer for page workloads.
//!
//! This crate provides:
//! - `FetchClient` - Host fetch with cache bypass, one attempt per call
//! - `Fetcher` - Seam trait so data modules can be tested without a host
//! - `SourceTag` - Semantic labels for upstream sources

mod client;
mod source;

pub use client::*;
pub use source::*;
