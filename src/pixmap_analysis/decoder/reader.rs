use crate::pixmap_analysis::common::error::Result;
use crate::pixmap_analysis::decoder::types::PixmapImage;

pub trait PixmapReader {
    fn read_pixmap(&self, data: &[u8]) -> Result<PixmapImage>;
}
