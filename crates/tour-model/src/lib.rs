//! Canonical tour view models and normalization.
//!
//! The catalog document arrives as loosely-shaped JSON: most fields are
//! optional, several appear in more than one shape (schedule entries as
//! strings or objects, includes as a string or a list, photos as image
//! URLs or free text). This crate resolves all of that exactly once:
//! `normalize` turns one raw record into a [`TourViewModel`] with every
//! field typed, defaulted, and tagged, so renderers never branch on
//! shape again.
//!
//! Normalization is pure and total: any JSON value in, a view model
//! out, never a panic.

mod catalog;
mod lookup;
mod normalize;
mod view;

pub use catalog::*;
pub use lookup::*;
pub use normalize::*;
pub use view::*;
