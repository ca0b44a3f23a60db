//! Catalog data access.

mod catalog;

pub use catalog::*;
