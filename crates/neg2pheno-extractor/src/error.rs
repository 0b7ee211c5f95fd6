//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur during extraction
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Reading notes or writing bundles failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Document exceeds the pipeline's maximum length
    #[error("Text too long: {0} chars (max: {1})")]
    TextTooLong(usize, usize),

    /// Pipeline assembly error (duplicate or missing stage)
    #[error("Pipeline error: {0}")]
    Pipeline(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
