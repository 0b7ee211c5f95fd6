//! Error types for the CLI application.

use std::process::ExitStatus;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A pipeline stage exited unsuccessfully
    #[error("Stage '{stage}' failed: {status}")]
    StageFailed {
        /// Stage name
        stage: String,
        /// Exit status of the child process
        status: ExitStatus,
    },

    /// A pipeline stage could not be started
    #[error("Stage '{stage}' could not be started: {source}")]
    Spawn {
        /// Stage name
        stage: String,
        /// Underlying error
        source: std::io::Error,
    },

    /// Vocabulary loading error
    #[error(transparent)]
    Vocab(#[from] neg2pheno_vocab::VocabError),

    /// Extraction error
    #[error(transparent)]
    Extractor(#[from] neg2pheno_extractor::ExtractorError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    /// Exit code the binary should terminate with
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::StageFailed { status, .. } => status.code().filter(|c| *c != 0).unwrap_or(1),
            _ => 1,
        }
    }
}
