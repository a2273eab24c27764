use crate::pixmap_analysis::decoder::types::Rgb;
use crate::pixmap_analysis::rasterizer::{DEFAULT_BACKGROUND, RasterizerConfig};
use crate::pixmap_analysis::regions::{ChannelBounds, ChannelFilter, RowBand};

/// How the default row bands are derived from an image's height: a floor
/// band below `floor_fraction * height` and an object band of
/// `object_radius` rows either side of `object_fraction * height`.
#[derive(Debug, Clone, Copy)]
pub struct BandLayout {
    pub floor_fraction: f64,
    pub object_fraction: f64,
    pub object_radius: u32,
}

impl Default for BandLayout {
    fn default() -> Self {
        Self {
            floor_fraction: 0.7,
            object_fraction: 0.4,
            object_radius: 50,
        }
    }
}

impl BandLayout {
    /// Concrete bands for an image of the given height. Intervals are
    /// half-open and clamped to the image extent.
    pub fn bands(&self, height: u32) -> Vec<RowBand> {
        let floor_start = (height as f64 * self.floor_fraction) as u32 + 1;
        let object_center = (height as f64 * self.object_fraction) as u32;
        // |y - center| < radius, as a half-open interval.
        let object_start = if object_center >= self.object_radius {
            object_center - self.object_radius + 1
        } else {
            0
        };
        let object_end = (object_center + self.object_radius).min(height);
        vec![
            RowBand::new("floor", floor_start.min(height), height),
            RowBand::new("object", object_start.min(height), object_end),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Color skipped by the histogram and band passes; `None` counts
    /// every pixel.
    pub background: Option<Rgb>,
    /// How many ranked colors a report carries.
    pub top_k: usize,
    /// How many leading match records a report carries.
    pub sample_records: usize,
    pub bands: BandLayout,
    pub texture_filter: ChannelFilter,
    pub rasterizer: RasterizerConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            background: Some(DEFAULT_BACKGROUND),
            top_k: 10,
            sample_records: 10,
            bands: BandLayout::default(),
            texture_filter: ChannelFilter::new(
                ChannelBounds::above(180),
                ChannelBounds::above(180),
                ChannelBounds::between(160, 190),
            ),
            rasterizer: RasterizerConfig::default(),
        }
    }
}

impl AnalysisConfig {
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::default()
    }
}

#[derive(Default)]
pub struct AnalysisConfigBuilder {
    background: Option<Option<Rgb>>,
    top_k: Option<usize>,
    sample_records: Option<usize>,
    bands: Option<BandLayout>,
    texture_filter: Option<ChannelFilter>,
    rasterizer: Option<RasterizerConfig>,
}

impl AnalysisConfigBuilder {
    pub fn background(mut self, background: Option<Rgb>) -> Self {
        self.background = Some(background);
        self
    }

    pub fn top_k(mut self, top_k: usize) -> Self {
        self.top_k = Some(top_k);
        self
    }

    pub fn sample_records(mut self, sample_records: usize) -> Self {
        self.sample_records = Some(sample_records);
        self
    }

    pub fn bands(mut self, bands: BandLayout) -> Self {
        self.bands = Some(bands);
        self
    }

    pub fn texture_filter(mut self, filter: ChannelFilter) -> Self {
        self.texture_filter = Some(filter);
        self
    }

    pub fn rasterizer(mut self, rasterizer: RasterizerConfig) -> Self {
        self.rasterizer = Some(rasterizer);
        self
    }

    pub fn build(self) -> AnalysisConfig {
        let default = AnalysisConfig::default();
        AnalysisConfig {
            background: self.background.unwrap_or(default.background),
            top_k: self.top_k.unwrap_or(default.top_k),
            sample_records: self.sample_records.unwrap_or(default.sample_records),
            bands: self.bands.unwrap_or(default.bands),
            texture_filter: self.texture_filter.unwrap_or(default.texture_filter),
            rasterizer: self.rasterizer.unwrap_or(default.rasterizer),
        }
    }
}
