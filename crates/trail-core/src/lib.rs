//! Core abstractions for the tour site streaming platform.
//!
//! This crate provides the fundamental types shared by every page
//! workload:
//! - `RequestContext` - Typed request parameters
//! - `LifecyclePhase` / `TimingContext` - Request lifecycle tracking
//! - `PageError` - Page rendering error taxonomy

mod context;
mod lifecycle;
mod page;

pub use context::*;
pub use lifecycle::*;
pub use page::*;
