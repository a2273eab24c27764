//! Shared pixel scanning module
//!
//! Every analysis walks the image the same way: row-major, y outer and x
//! inner, optionally on a stride. `PixelScan` is that walk as a lazy
//! iterator so the histogram engine, region classifier, and rasterizer
//! never re-derive the indexing arithmetic. Predicate filtering is plain
//! iterator `filter` on top.

use crate::pixmap_analysis::decoder::types::{PixmapImage, Rgb};

/// One sampled pixel: its coordinates and exact color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRecord {
    pub x: u32,
    pub y: u32,
    pub color: Rgb,
}

/// Row-major iterator over the pixels of an image, visiting only
/// coordinates where both `x` and `y` are multiples of the stride. The
/// trailing partial band at the right and bottom edges is not sampled.
pub struct PixelScan<'a> {
    image: &'a PixmapImage,
    stride: u32,
    x: u32,
    y: u32,
}

impl<'a> PixelScan<'a> {
    pub(crate) fn new(image: &'a PixmapImage, stride: u32) -> Self {
        assert!(stride > 0, "scan stride must be positive");
        Self {
            image,
            stride,
            x: 0,
            y: 0,
        }
    }
}

impl Iterator for PixelScan<'_> {
    type Item = PixelRecord;

    fn next(&mut self) -> Option<PixelRecord> {
        if self.y >= self.image.height() {
            return None;
        }
        let record = PixelRecord {
            x: self.x,
            y: self.y,
            color: self.image.pixel_at(self.x, self.y),
        };
        self.x += self.stride;
        if self.x >= self.image.width() {
            self.x = 0;
            self.y += self.stride;
        }
        Some(record)
    }
}

impl PixmapImage {
    /// Iterates over every pixel in row-major order.
    pub fn scan(&self) -> PixelScan<'_> {
        PixelScan::new(self, 1)
    }

    /// Iterates over pixels at stride-multiple coordinates in row-major
    /// order.
    pub fn scan_strided(&self, stride: u32) -> PixelScan<'_> {
        PixelScan::new(self, stride)
    }
}
