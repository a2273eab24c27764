use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Unsupported pixmap format: {0}")]
    UnsupportedFormat(String),

    #[error("Malformed pixmap header: {0}")]
    MalformedHeader(String),

    #[error("Unsupported max value: {0} (only 8-bit samples are supported)")]
    UnsupportedMaxValue(u32),

    #[error("Truncated pixel data: expected {0} bytes, found {1}")]
    TruncatedData(usize, usize),

    #[error("Pixel access out of bounds: ({0}, {1})")]
    IndexOutOfBounds(u32, u32),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
