//! ASCII rasterization module
//!
//! Downsamples an image on a fixed stride and maps each sampled pixel to a
//! single display symbol through an ordered rule list.

mod render;
mod rules;

pub use render::{AsciiGrid, AsciiRow, rasterize};
pub use rules::{
    BrightRange, ColorMatcher, DEFAULT_BACKGROUND, DEFAULT_FALLBACK, DEFAULT_STRIDE,
    RasterizerConfig, RasterizerConfigBuilder, SymbolRule, default_rules,
};
