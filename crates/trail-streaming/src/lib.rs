//! Streaming primitives for shell-first page rendering.
//!
//! A page response is one shell (doctype, head, opening body chrome)
//! followed by any number of named sections, then the closing chrome.
//! `StreamingSink` enforces that order over any byte sink.

mod shell;
mod sink;

pub use shell::*;
pub use sink::*;
