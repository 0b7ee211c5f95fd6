//! Result types for extraction runs

use crate::negex::Termset;
use neg2pheno_domain::AffirmationMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Per-document mention counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentReport {
    /// Source filename
    pub filename: String,

    /// Spans kept as affirmed
    pub affirmed: usize,

    /// Spans dropped as negated
    pub negated: usize,
}

/// Metadata about an extraction pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionMetadata {
    /// Number of documents processed
    pub documents: usize,

    /// Affirmed spans across all documents
    pub affirmed_total: usize,

    /// Negated spans across all documents
    pub negated_total: usize,

    /// Termset used for negation
    pub termset: Termset,

    /// Wall-clock time of the pass (milliseconds)
    pub processing_time_ms: u64,
}

/// Result of an extraction pass over a directory
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Affirmed mention texts per document
    pub affirmed: AffirmationMap,

    /// Counts per document, in processing order
    pub reports: Vec<DocumentReport>,

    /// Metadata about the pass
    pub metadata: ExtractionMetadata,
}

/// Paths written by a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BundleOutput {
    /// Directory holding the TXT files, when written
    pub txt_dir: Option<PathBuf>,

    /// JSON bundle, when written
    pub json_path: Option<PathBuf>,
}
