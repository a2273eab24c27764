//! Pixmap analysis module
//!
//! This module provides a structured approach to binary P6 pixmap inspection,
//! with separate modules for decoding, pixel scanning, color aggregation,
//! region classification, ASCII rendering, and report orchestration.

pub mod common;
pub mod decoder;
pub mod histogram;
pub mod rasterizer;
pub mod regions;
pub mod reports;
pub mod scan;

pub use common::{AnalysisError, Result};

pub use decoder::{P6Reader, PixmapImage, PixmapReader, Rgb};

pub use scan::{PixelRecord, PixelScan};

pub use histogram::{ColorHistogram, build_histogram};

pub use regions::{
    BoundingBox, ChannelBounds, ChannelFilter, MatchSet, RegionReport, RowBand, classify_bands,
    find_matches, find_matches_with,
};

pub use rasterizer::{
    AsciiGrid, AsciiRow, BrightRange, ColorMatcher, RasterizerConfig, RasterizerConfigBuilder,
    SymbolRule, default_rules, rasterize,
};

pub use reports::{AnalysisConfig, AnalysisConfigBuilder, BandLayout, FrameAnalyzer, FrameReport};
