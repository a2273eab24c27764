//! Symbol classification rules and rasterizer configuration.
//!
//! Rules are evaluated top to bottom and the first match wins, so order is
//! significant: the exact-background rule must precede the looser bright
//! range or background pixels inside that range would be misclassified.

use crate::pixmap_analysis::decoder::types::Rgb;

/// The renderer clear color used as the default background.
pub const DEFAULT_BACKGROUND: Rgb = Rgb::new(64, 64, 128);

/// Default sampling interval for the grid.
pub const DEFAULT_STRIDE: u32 = 20;

/// Default symbol when no rule matches.
pub const DEFAULT_FALLBACK: char = '#';

/// Thresholds for the bright/light rule. These are scene tuning values,
/// not format constants, so they live in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrightRange {
    /// Red and green must exceed this.
    pub channel_min: u8,
    /// Blue must lie strictly inside `(blue_min, blue_max)`.
    pub blue_min: u8,
    pub blue_max: u8,
}

impl Default for BrightRange {
    fn default() -> Self {
        Self {
            channel_min: 180,
            blue_min: 160,
            blue_max: 190,
        }
    }
}

/// A color predicate a rule can apply to a sampled pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMatcher {
    /// Exact byte-wise match.
    Exact(Rgb),
    /// Light colors: red and green above a threshold, blue inside a
    /// sub-range.
    Bright(BrightRange),
    /// Cyan-like colors: zero red, positive green.
    ZeroRedPositiveGreen,
}

impl ColorMatcher {
    pub fn matches(&self, color: Rgb) -> bool {
        match self {
            ColorMatcher::Exact(exact) => color == *exact,
            ColorMatcher::Bright(range) => {
                color.r > range.channel_min
                    && color.g > range.channel_min
                    && color.b > range.blue_min
                    && color.b < range.blue_max
            }
            ColorMatcher::ZeroRedPositiveGreen => color.r == 0 && color.g > 0,
        }
    }
}

/// One entry of the ordered rule list: the symbol to emit when the
/// matcher fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolRule {
    pub symbol: char,
    pub matcher: ColorMatcher,
}

impl SymbolRule {
    pub const fn new(symbol: char, matcher: ColorMatcher) -> Self {
        Self { symbol, matcher }
    }
}

/// The default rule set: background, texture, primary colors, cyan-like,
/// in that priority order.
pub fn default_rules(background: Rgb, bright: BrightRange) -> Vec<SymbolRule> {
    vec![
        SymbolRule::new('.', ColorMatcher::Exact(background)),
        SymbolRule::new('T', ColorMatcher::Bright(bright)),
        SymbolRule::new('B', ColorMatcher::Exact(Rgb::new(0, 0, 255))),
        SymbolRule::new('G', ColorMatcher::Exact(Rgb::new(0, 255, 0))),
        SymbolRule::new('R', ColorMatcher::Exact(Rgb::new(255, 0, 0))),
        SymbolRule::new('Y', ColorMatcher::Exact(Rgb::new(255, 255, 0))),
        SymbolRule::new('C', ColorMatcher::ZeroRedPositiveGreen),
    ]
}

#[derive(Debug, Clone)]
pub struct RasterizerConfig {
    pub stride: u32,
    pub rules: Vec<SymbolRule>,
    pub fallback: char,
}

impl Default for RasterizerConfig {
    fn default() -> Self {
        Self {
            stride: DEFAULT_STRIDE,
            rules: default_rules(DEFAULT_BACKGROUND, BrightRange::default()),
            fallback: DEFAULT_FALLBACK,
        }
    }
}

impl RasterizerConfig {
    pub fn builder() -> RasterizerConfigBuilder {
        RasterizerConfigBuilder::default()
    }

    /// The symbol for one sampled color: first matching rule, fallback
    /// otherwise.
    pub fn classify(&self, color: Rgb) -> char {
        self.rules
            .iter()
            .find(|rule| rule.matcher.matches(color))
            .map(|rule| rule.symbol)
            .unwrap_or(self.fallback)
    }
}

#[derive(Default)]
pub struct RasterizerConfigBuilder {
    stride: Option<u32>,
    background: Option<Rgb>,
    bright: Option<BrightRange>,
    rules: Option<Vec<SymbolRule>>,
    fallback: Option<char>,
}

impl RasterizerConfigBuilder {
    pub fn stride(mut self, stride: u32) -> Self {
        self.stride = Some(stride);
        self
    }

    pub fn background(mut self, background: Rgb) -> Self {
        self.background = Some(background);
        self
    }

    pub fn bright(mut self, bright: BrightRange) -> Self {
        self.bright = Some(bright);
        self
    }

    /// Replaces the whole rule list; `background` and `bright` are
    /// ignored when this is set.
    pub fn rules(mut self, rules: Vec<SymbolRule>) -> Self {
        self.rules = Some(rules);
        self
    }

    pub fn fallback(mut self, fallback: char) -> Self {
        self.fallback = Some(fallback);
        self
    }

    pub fn build(self) -> RasterizerConfig {
        let background = self.background.unwrap_or(DEFAULT_BACKGROUND);
        let bright = self.bright.unwrap_or_default();
        RasterizerConfig {
            stride: self.stride.unwrap_or(DEFAULT_STRIDE).max(1),
            rules: self
                .rules
                .unwrap_or_else(|| default_rules(background, bright)),
            fallback: self.fallback.unwrap_or(DEFAULT_FALLBACK),
        }
    }
}
