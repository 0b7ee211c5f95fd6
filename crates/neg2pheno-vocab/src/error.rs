//! Error types for vocabulary loading

use thiserror::Error;

/// Errors that can occur while loading a vocabulary
#[derive(Error, Debug)]
pub enum VocabError {
    /// Vocabulary file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed TSV content
    #[error("TSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Required TSV header columns are absent
    #[error("TSV must have columns {required:?}; found {found:?}")]
    MissingColumns {
        /// Columns the loader needs
        required: Vec<String>,
        /// Columns present in the header
        found: Vec<String>,
    },

    /// Ontology parsing was not compiled in
    #[error("Ontology support not available: {0}")]
    OntologyUnavailable(String),

    /// Malformed OBO content, with the parser's position report
    #[error("OBO parse error: {0}")]
    Parse(String),
}

impl VocabError {
    /// Whether the error stems from configuration rather than file content
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            VocabError::MissingColumns { .. } | VocabError::OntologyUnavailable(_)
        )
    }
}
