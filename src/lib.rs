pub mod logger;
pub mod pixmap_analysis;
