//! Decoded pixmap types

use std::fmt;

use crate::pixmap_analysis::common::error::{AnalysisError, Result};

/// An exact RGB color. Equality is byte-wise, and the derived ordering
/// compares R, then G, then B, which is the tie order used when ranking
/// histogram entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RGB({:3}, {:3}, {:3})", self.r, self.g, self.b)
    }
}

/// A decoded P6 pixmap.
///
/// The pixel buffer is row-major, three bytes per pixel (R, G, B), no
/// padding, `width * height * 3` bytes long. Fields are private and there
/// are no mutating methods: once decoded, an image never changes, so any
/// number of analyses can share a reference to it.
#[derive(Debug, Clone)]
pub struct PixmapImage {
    width: u32,
    height: u32,
    max_value: u16,
    pixels: Vec<u8>,
}

impl PixmapImage {
    pub(crate) fn new(width: u32, height: u32, max_value: u16, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize * 3);
        Self {
            width,
            height,
            max_value,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn max_value(&self) -> u16 {
        self.max_value
    }

    /// Total number of pixels in the image.
    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Reads the pixel at `(x, y)`.
    ///
    /// Out-of-range coordinates are a caller bug and fail with
    /// `IndexOutOfBounds`; coordinates are never clamped or wrapped.
    pub fn get_pixel(&self, x: u32, y: u32) -> Result<Rgb> {
        if x >= self.width || y >= self.height {
            return Err(AnalysisError::IndexOutOfBounds(x, y));
        }
        Ok(self.pixel_at(x, y))
    }

    /// Unchecked read for callers that already stay inside the extent,
    /// such as the scan iterator.
    pub(crate) fn pixel_at(&self, x: u32, y: u32) -> Rgb {
        let offset = (y as usize * self.width as usize + x as usize) * 3;
        Rgb::new(
            self.pixels[offset],
            self.pixels[offset + 1],
            self.pixels[offset + 2],
        )
    }
}
