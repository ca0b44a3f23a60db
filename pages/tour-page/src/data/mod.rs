//! Detail page data access.

mod catalog;

pub use catalog::*;
