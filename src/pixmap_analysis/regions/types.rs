//! Region configuration and result types

use std::fmt;

use crate::pixmap_analysis::decoder::types::Rgb;
use crate::pixmap_analysis::histogram::ColorHistogram;
use crate::pixmap_analysis::scan::PixelRecord;

/// A named half-open row interval `[y_start, y_end)`. Bands may overlap;
/// the classifier evaluates every band for every pixel and routes a pixel
/// into each band that contains it.
#[derive(Debug, Clone)]
pub struct RowBand {
    pub name: String,
    pub y_start: u32,
    pub y_end: u32,
}

impl RowBand {
    pub fn new(name: impl Into<String>, y_start: u32, y_end: u32) -> Self {
        Self {
            name: name.into(),
            y_start,
            y_end,
        }
    }

    pub fn contains(&self, y: u32) -> bool {
        y >= self.y_start && y < self.y_end
    }
}

/// Axis-aligned bounding box over matched pixel coordinates, inclusive on
/// all four edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl BoundingBox {
    pub(crate) fn at(x: u32, y: u32) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
        }
    }

    pub(crate) fn include(&mut self, x: u32, y: u32) {
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);
    }

    /// Center of the box using integer (floor) division.
    pub fn center(&self) -> (u32, u32) {
        ((self.min_x + self.max_x) / 2, (self.min_y + self.max_y) / 2)
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{}) to ({},{})",
            self.min_x, self.min_y, self.max_x, self.max_y
        )
    }
}

/// Exclusive bounds on one channel: the value must satisfy
/// `min < value < max` for whichever sides are set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChannelBounds {
    pub min: Option<u8>,
    pub max: Option<u8>,
}

impl ChannelBounds {
    pub const fn any() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    pub const fn above(min: u8) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    pub const fn below(max: u8) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    pub const fn between(min: u8, max: u8) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    pub fn matches(&self, value: u8) -> bool {
        let above_min = self.min.is_none_or(|min| value > min);
        let below_max = self.max.is_none_or(|max| value < max);
        above_min && below_max
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>, channel: &str) -> fmt::Result {
        match (self.min, self.max) {
            (Some(min), Some(max)) => write!(f, "{min} < {channel} < {max}"),
            (Some(min), None) => write!(f, "{channel} > {min}"),
            (None, Some(max)) => write!(f, "{channel} < {max}"),
            (None, None) => write!(f, "any {channel}"),
        }
    }
}

/// Per-channel range predicate, e.g. "r > 180 and g > 180 and
/// 160 < b < 190" for light wall-texture colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChannelFilter {
    pub r: ChannelBounds,
    pub g: ChannelBounds,
    pub b: ChannelBounds,
}

impl ChannelFilter {
    pub const fn new(r: ChannelBounds, g: ChannelBounds, b: ChannelBounds) -> Self {
        Self { r, g, b }
    }

    pub fn matches(&self, color: Rgb) -> bool {
        self.r.matches(color.r) && self.g.matches(color.g) && self.b.matches(color.b)
    }
}

impl fmt::Display for ChannelFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.r.describe(f, "r")?;
        write!(f, " and ")?;
        self.g.describe(f, "g")?;
        write!(f, " and ")?;
        self.b.describe(f, "b")
    }
}

/// Result of classifying one row band: its own histogram plus the
/// bounding box of every counted pixel, `None` when nothing matched.
#[derive(Debug, Clone)]
pub struct RegionReport {
    pub name: String,
    pub histogram: ColorHistogram,
    pub bounds: Option<BoundingBox>,
}

impl RegionReport {
    pub(crate) fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            histogram: ColorHistogram::new(),
            bounds: None,
        }
    }

    pub fn matched_pixels(&self) -> u64 {
        self.histogram.total_pixels()
    }
}

/// Every pixel satisfying a predicate, in row-major scan order, with the
/// bounding box of the matched set. The order is an observable contract:
/// callers sample "the first N matches".
#[derive(Debug, Clone, Default)]
pub struct MatchSet {
    pub records: Vec<PixelRecord>,
    pub bounds: Option<BoundingBox>,
}

impl MatchSet {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The first `n` matches in scan order, or all of them when fewer
    /// exist.
    pub fn first(&self, n: usize) -> &[PixelRecord] {
        &self.records[..self.records.len().min(n)]
    }
}
