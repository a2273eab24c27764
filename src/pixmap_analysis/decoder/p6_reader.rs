//! Binary P6 pixmap reader.
//!
//! The header is parsed as a single forward pass over whitespace-delimited
//! tokens, skipping `#` comment lines between any two tokens: the original
//! format allows comments interleaved anywhere in the header, not only
//! before the dimensions line.

use tracing::debug;

use crate::pixmap_analysis::common::error::{AnalysisError, Result};
use crate::pixmap_analysis::decoder::reader::PixmapReader;
use crate::pixmap_analysis::decoder::types::PixmapImage;

/// The only supported magic token; `P3` (plain text) and every other
/// Netpbm variant are rejected.
const P6_MAGIC: &str = "P6";

/// The only supported sample depth. A max value above 255 would mean
/// 16-bit samples, which this decoder does not handle.
const SUPPORTED_MAX_VALUE: u32 = 255;

/// Reader for the binary (raw RGB) Portable Pixmap format.
pub struct P6Reader;

impl PixmapReader for P6Reader {
    /// Decodes a P6 pixmap from a byte buffer.
    ///
    /// Parsing is strictly sequential: magic token, dimensions, max value
    /// (each preceded by optional comment lines), one whitespace byte, then
    /// exactly `width * height * 3` raw pixel bytes. Trailing bytes after
    /// the pixel data are ignored.
    fn read_pixmap(&self, data: &[u8]) -> Result<PixmapImage> {
        debug!("Decoding P6 pixmap, {} bytes", data.len());

        let mut cursor = HeaderCursor::new(data);

        let magic = cursor
            .next_token()?
            .ok_or_else(|| AnalysisError::UnsupportedFormat("empty input".to_string()))?;
        if magic != P6_MAGIC {
            return Err(AnalysisError::UnsupportedFormat(magic.to_string()));
        }

        let width = cursor.next_dimension("width")?;
        let height = cursor.next_dimension("height")?;
        let max_value = cursor.next_integer("max value")?;
        if max_value != SUPPORTED_MAX_VALUE {
            return Err(AnalysisError::UnsupportedMaxValue(max_value));
        }

        debug!("Header parsed: {}x{}, max value {}", width, height, max_value);

        let expected = width as usize * height as usize * 3;

        // Exactly one whitespace byte separates the header from the pixel
        // data. Everything after it is raw bytes, including values that
        // happen to look like whitespace or comments.
        let pixel_start = cursor.consume_separator(expected)?;
        let remaining = data.len() - pixel_start;
        if remaining < expected {
            return Err(AnalysisError::TruncatedData(expected, remaining));
        }

        let pixels = data[pixel_start..pixel_start + expected].to_vec();
        Ok(PixmapImage::new(width, height, max_value as u16, pixels))
    }
}

/// Forward-only cursor over the header bytes.
struct HeaderCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> HeaderCursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Skips whitespace and comment lines. A comment runs from a `#` at a
    /// token boundary through the end of its line.
    fn skip_filler(&mut self) {
        loop {
            while self.pos < self.data.len() && self.data[self.pos].is_ascii_whitespace() {
                self.pos += 1;
            }
            if self.pos < self.data.len() && self.data[self.pos] == b'#' {
                while self.pos < self.data.len() && self.data[self.pos] != b'\n' {
                    self.pos += 1;
                }
            } else {
                return;
            }
        }
    }

    /// Reads the next whitespace-delimited token, leaving the delimiter
    /// unconsumed. Returns `None` at end of input.
    fn next_token(&mut self) -> Result<Option<&'a str>> {
        self.skip_filler();
        if self.pos >= self.data.len() {
            return Ok(None);
        }
        let start = self.pos;
        while self.pos < self.data.len() && !self.data[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
        let token = std::str::from_utf8(&self.data[start..self.pos]).map_err(|_| {
            AnalysisError::MalformedHeader("non-ASCII bytes in header token".to_string())
        })?;
        Ok(Some(token))
    }

    fn next_integer(&mut self, what: &str) -> Result<u32> {
        let token = self.next_token()?.ok_or_else(|| {
            AnalysisError::MalformedHeader(format!("unexpected end of header reading {what}"))
        })?;
        token.parse::<u32>().map_err(|_| {
            AnalysisError::MalformedHeader(format!("invalid {what} token '{token}'"))
        })
    }

    fn next_dimension(&mut self, what: &str) -> Result<u32> {
        let value = self.next_integer(what)?;
        if value == 0 {
            return Err(AnalysisError::MalformedHeader(format!(
                "non-positive {what}"
            )));
        }
        Ok(value)
    }

    /// Consumes the single whitespace byte that terminates the header and
    /// returns the offset of the first pixel byte.
    fn consume_separator(&mut self, expected: usize) -> Result<usize> {
        if self.pos >= self.data.len() {
            return Err(AnalysisError::TruncatedData(expected, 0));
        }
        if !self.data[self.pos].is_ascii_whitespace() {
            return Err(AnalysisError::MalformedHeader(
                "missing whitespace after max value".to_string(),
            ));
        }
        self.pos += 1;
        Ok(self.pos)
    }
}
