use std::collections::HashMap;

use tracing::debug;

use crate::pixmap_analysis::decoder::types::{PixmapImage, Rgb};

/// Frequency counts of exact colors. Built by one full scan, then only
/// read.
#[derive(Debug, Clone, Default)]
pub struct ColorHistogram {
    counts: HashMap<Rgb, u64>,
}

impl ColorHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, color: Rgb) {
        *self.counts.entry(color).or_insert(0) += 1;
    }

    /// Count for one exact color; zero when the color never occurred.
    pub fn count(&self, color: Rgb) -> u64 {
        self.counts.get(&color).copied().unwrap_or(0)
    }

    /// Number of distinct colors recorded.
    pub fn distinct_colors(&self) -> usize {
        self.counts.len()
    }

    /// Sum of all counts.
    pub fn total_pixels(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The `k` most frequent colors, count descending. Ties are broken by
    /// the natural (R, G, B) ascending order of the color itself, so the
    /// ranking is deterministic across runs. A `k` larger than the number
    /// of distinct colors returns every entry.
    pub fn top_k(&self, k: usize) -> Vec<(Rgb, u64)> {
        let mut entries: Vec<(Rgb, u64)> =
            self.counts.iter().map(|(&c, &n)| (c, n)).collect();
        entries.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        entries.truncate(k);
        entries
    }
}

/// Builds a histogram of every pixel color in one row-major scan. Pixels
/// exactly matching `exclude` are skipped entirely and contribute to no
/// count.
pub fn build_histogram(image: &PixmapImage, exclude: Option<Rgb>) -> ColorHistogram {
    let mut histogram = ColorHistogram::new();
    for record in image.scan() {
        if Some(record.color) == exclude {
            continue;
        }
        histogram.record(record.color);
    }
    debug!(
        "Histogram built: {} distinct colors over {} counted pixels",
        histogram.distinct_colors(),
        histogram.total_pixels()
    );
    histogram
}
