use std::fmt;

use tracing::debug;

use crate::pixmap_analysis::decoder::types::PixmapImage;
use crate::pixmap_analysis::rasterizer::rules::RasterizerConfig;

/// One rendered grid row: the original y-coordinate it was sampled from
/// and its symbols left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiRow {
    pub y: u32,
    pub symbols: String,
}

/// The downsampled symbol grid, one row per sampled image row.
#[derive(Debug, Clone, Default)]
pub struct AsciiGrid {
    rows: Vec<AsciiRow>,
}

impl AsciiGrid {
    pub fn rows(&self) -> &[AsciiRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for AsciiGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "Y{:03}: {}", row.y, row.symbols)?;
        }
        Ok(())
    }
}

/// Samples the image at stride-multiple coordinates and classifies each
/// sampled pixel through the config's ordered rule list. One full pass
/// per call.
pub fn rasterize(image: &PixmapImage, config: &RasterizerConfig) -> AsciiGrid {
    let mut rows: Vec<AsciiRow> = Vec::new();
    for record in image.scan_strided(config.stride) {
        if rows.last().map(|row| row.y) != Some(record.y) {
            rows.push(AsciiRow {
                y: record.y,
                symbols: String::new(),
            });
        }
        if let Some(row) = rows.last_mut() {
            row.symbols.push(config.classify(record.color));
        }
    }
    debug!(
        "Rasterized {}x{} image at stride {} into {} rows",
        image.width(),
        image.height(),
        config.stride,
        rows.len()
    );
    AsciiGrid { rows }
}
