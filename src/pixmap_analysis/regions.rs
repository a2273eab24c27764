//! Region classification module
//!
//! Partitions pixels by placement (named row bands) or by per-channel
//! range predicates, producing per-region histograms, match records, and
//! bounding boxes.

mod classifier;
pub mod types;

pub use classifier::{classify_bands, find_matches, find_matches_with};
pub use types::{BoundingBox, ChannelBounds, ChannelFilter, MatchSet, RegionReport, RowBand};
