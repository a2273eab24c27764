//! Common utilities module
//!
//! This module contains shared utilities used across the pixmap analyses.

pub mod error;

pub use error::{AnalysisError, Result};
