//! neg2pheno Vocabulary Loader
//!
//! Reads a controlled phenotype vocabulary into a uniform
//! [`Vocabulary`](neg2pheno_domain::Vocabulary) of
//! (identifier, canonical name, synonym) rows.
//!
//! # Sources
//!
//! - **TSV**: a tab-separated table with the case-sensitive header columns
//!   `HPO_ID`, `name` and `synonym`. Extra columns are ignored; missing cells
//!   read as empty strings.
//! - **OBO**: an ontology in OBO flat-file format. Only `HP:` terms are kept;
//!   the primary name and every synonym become one row each. Requires the
//!   `obo` cargo feature (enabled by default), which parses with `fastobo`.
//!
//! # Example Usage
//!
//! ```no_run
//! use neg2pheno_vocab::{load_vocabulary, VocabularySource};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let source = VocabularySource::Tsv("hpo_terms.tsv".into());
//! let vocabulary = load_vocabulary(&source)?;
//!
//! println!("{} synonym rows", vocabulary.len());
//! println!("{} distinct synonyms", vocabulary.distinct_synonyms().len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod error;
mod obo;
mod source;
mod tsv;

pub use error::VocabError;
pub use obo::load_obo;
pub use source::{load_vocabulary, VocabularySource};
pub use tsv::{load_tsv, read_tsv, REQUIRED_COLUMNS};
