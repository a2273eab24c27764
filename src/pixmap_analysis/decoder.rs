//! P6 pixmap decoding module
//!
//! This module provides the binary Portable Pixmap (P6) decoder and the
//! decoded image type shared by every analysis.

mod p6_reader;
mod reader;
pub mod types;

mod tests;

pub use p6_reader::P6Reader;
pub use reader::PixmapReader;
pub use types::{PixmapImage, Rgb};
