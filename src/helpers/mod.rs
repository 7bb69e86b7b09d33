//! Helper functions for presenting documents

mod date;

pub use date::*;
