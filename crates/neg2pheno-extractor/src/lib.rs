//! neg2pheno Extractor
//!
//! Finds phenotype mentions in clinical notes, decides whether each one is
//! affirmed or negated, and writes the affirmed ones per note in the layout
//! PhenoBERT reads.
//!
//! # Architecture
//!
//! ```text
//! note → Tokenizer → hpo_spans (phrase matcher) → negex → affirmed mentions → TXT / JSON
//! ```
//!
//! # Key Features
//!
//! - **Token-aligned matching**: every vocabulary synonym is matched
//!   case-insensitively on word boundaries; overlapping matches collapse to
//!   the longest one
//! - **NegEx**: clinical trigger termsets scoped by sentence and termination
//!   phrases
//! - **Pluggable stages**: matching and negation sit behind the
//!   `neg2pheno_domain` traits, so either can be swapped
//! - **Bundles**: one TXT file per note (lines or semicolons) plus an optional
//!   JSON array of `{id, text}` records
//!
//! # Example Usage
//!
//! ```no_run
//! use neg2pheno_extractor::{Extractor, ExtractorConfig, TxtMode};
//! use neg2pheno_vocab::{load_vocabulary, VocabularySource};
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let vocabulary = load_vocabulary(&VocabularySource::Tsv("hpo_terms.tsv".into()))?;
//!
//! let mut config = ExtractorConfig::default();
//! config.txt_mode = TxtMode::Semicolons;
//! config.emit_json = true;
//!
//! let extractor = Extractor::new(config, &vocabulary)?;
//! let (result, output) = extractor.run(Path::new("notes"), Path::new("out"))?;
//!
//! println!("Notes: {}", result.metadata.documents);
//! println!("TXT dir: {:?}", output.txt_dir);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod bundle;
mod config;
mod error;
mod extractor;
mod matcher;
mod negex;
mod phrase;
mod pipeline;
mod tokenizer;
mod types;


pub use bundle::{render_txt, sanitize_filename, write_json_bundle, write_txt_bundle};
pub use config::{ExtractorConfig, TxtMode};
pub use error::ExtractorError;
pub use extractor::Extractor;
pub use matcher::{
    filter_spans, install_phenotype_matcher, PhenotypeSpanStage, TermMatcher, MATCHER_STAGE,
    REGISTRATION_BATCH_SIZE,
};
pub use negex::{NegationStage, NegexClassifier, Termset, TermsetPatterns, NEGEX_STAGE};
pub use pipeline::{Pipeline, DEFAULT_MAX_LENGTH};
pub use tokenizer::Tokenizer;
pub use types::{BundleOutput, DocumentReport, ExtractionMetadata, ExtractionResult};
