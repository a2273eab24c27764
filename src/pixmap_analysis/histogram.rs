//! Color histogram module
//!
//! Single-pass aggregation of exact pixel colors into frequency counts,
//! with an optional excluded color and deterministic top-K ranking.

mod color_counts;
mod tests;

pub use color_counts::{ColorHistogram, build_histogram};
