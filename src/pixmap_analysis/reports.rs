//! Report orchestration module
//!
//! Ties the decoder and the analyses together: decode a frame once, run
//! the configured histogram, region, and rasterizer passes over the shared
//! image, and package the results for the reporting layer.

mod frame;
pub mod types;

pub use frame::{FrameAnalyzer, FrameReport};
pub use types::{AnalysisConfig, AnalysisConfigBuilder, BandLayout};
