//! Mention module - matched phenotype text with its negation status

/// A phenotype mention found in a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mention {
    /// Filename of the document the mention came from
    pub document_filename: String,

    /// Exact matched surface text
    pub span_text: String,

    /// Whether the mention is negated in context
    pub is_negated: bool,
}

impl Mention {
    /// Create a new mention
    pub fn new(
        document_filename: impl Into<String>,
        span_text: impl Into<String>,
        is_negated: bool,
    ) -> Self {
        Self {
            document_filename: document_filename.into(),
            span_text: span_text.into(),
            is_negated,
        }
    }

    /// Inverse of `is_negated`
    pub fn is_affirmed(&self) -> bool {
        !self.is_negated
    }
}
