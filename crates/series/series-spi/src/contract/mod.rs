//! Contract definitions for series samples.

mod chronological;

pub use chronological::Chronological;
