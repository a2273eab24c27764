use std::path::Path;

use tracing::info;

use crate::pixmap_analysis::common::error::{AnalysisError, Result};
use crate::pixmap_analysis::decoder::{P6Reader, PixmapReader, Rgb};
use crate::pixmap_analysis::histogram::{ColorHistogram, build_histogram};
use crate::pixmap_analysis::rasterizer::{AsciiGrid, rasterize};
use crate::pixmap_analysis::regions::{
    ChannelFilter, MatchSet, RegionReport, classify_bands, find_matches,
};
use crate::pixmap_analysis::reports::types::AnalysisConfig;

/// Decodes a frame once and runs every configured analysis over the
/// shared image.
pub struct FrameAnalyzer<R: PixmapReader> {
    reader: R,
    config: AnalysisConfig,
}

impl FrameAnalyzer<P6Reader> {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            reader: P6Reader,
            config,
        }
    }
}

impl<R: PixmapReader> FrameAnalyzer<R> {
    pub fn with_custom(reader: R, config: AnalysisConfig) -> Self {
        Self { reader, config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Decodes the buffer and produces the full frame report.
    pub fn analyze(&self, data: &[u8]) -> Result<FrameReport> {
        let image = self.reader.read_pixmap(data)?;
        info!("Image size: {}x{}", image.width(), image.height());

        let histogram = build_histogram(&image, self.config.background);
        let top_colors = histogram.top_k(self.config.top_k);

        let bands = self.config.bands.bands(image.height());
        let regions = classify_bands(&image, &bands, self.config.background);

        let texture = find_matches(&image, &self.config.texture_filter);
        let ascii = rasterize(&image, &self.config.rasterizer);

        info!(
            "Analysis complete: {} distinct colors, {} texture-like pixels",
            histogram.distinct_colors(),
            texture.len()
        );

        Ok(FrameReport {
            width: image.width(),
            height: image.height(),
            histogram,
            top_colors,
            regions,
            texture_filter: self.config.texture_filter,
            texture,
            sample_records: self.config.sample_records,
            ascii,
        })
    }

    /// Reads a pixmap file and analyzes it.
    pub fn analyze_file<P: AsRef<Path>>(&self, path: P) -> Result<FrameReport> {
        let path = path.as_ref();
        info!("Analyzing frame: {}", path.display());

        let data = std::fs::read(path).map_err(|e| {
            AnalysisError::InputReadError(format!("{}: {}", path.display(), e))
        })?;
        self.analyze(&data)
    }
}

/// Everything the reporting layer needs for one frame.
#[derive(Debug, Clone)]
pub struct FrameReport {
    pub width: u32,
    pub height: u32,
    /// Histogram over every non-excluded pixel.
    pub histogram: ColorHistogram,
    /// Ranked `(color, count)` pairs, count descending, ties by color.
    pub top_colors: Vec<(Rgb, u64)>,
    pub regions: Vec<RegionReport>,
    pub texture_filter: ChannelFilter,
    pub texture: MatchSet,
    sample_records: usize,
    pub ascii: AsciiGrid,
}

impl FrameReport {
    /// Renders the report as plain text: `RGB(r, g, b): count pixels`
    /// entries, region summaries with bounding boxes, sampled match
    /// records, and the symbol grid.
    pub fn print_summary(&self) {
        println!("Image size: {}x{}", self.width, self.height);
        println!(
            "Unique colors: {} over {} counted pixels",
            self.histogram.distinct_colors(),
            self.histogram.total_pixels()
        );

        println!("\nTop {} most common colors:", self.top_colors.len());
        for (color, count) in &self.top_colors {
            println!("  {color}: {count:5} pixels");
        }

        for region in &self.regions {
            println!(
                "\nRegion '{}': {} pixels",
                region.name,
                region.matched_pixels()
            );
            match region.bounds {
                Some(bounds) => println!("  Bounding box: {bounds}"),
                None => println!("  No matches"),
            }
            for (color, count) in region.histogram.top_k(5) {
                println!("  {color}: {count:5} pixels");
            }
        }

        println!(
            "\nTexture filter ({}): {} matching pixels",
            self.texture_filter,
            self.texture.len()
        );
        match self.texture.bounds {
            Some(bounds) => {
                let (cx, cy) = bounds.center();
                println!("  Bounding box: {bounds}");
                println!("  Center: ({cx}, {cy})");
            }
            None => println!("  No matches"),
        }
        for record in self.texture.first(self.sample_records) {
            println!("  ({:3},{:3}): {}", record.x, record.y, record.color);
        }

        println!("\nRough visualization:");
        print!("{}", self.ascii);
    }
}
