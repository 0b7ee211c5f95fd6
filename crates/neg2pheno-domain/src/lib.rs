//! neg2pheno Domain Layer
//!
//! This crate contains the data model shared by every stage of the
//! negation-aware phenotype extraction pipeline. It has no external
//! dependencies and defines the value types and trait seams that the
//! vocabulary loader, the annotation pipeline and the CLI build upon.
//!
//! ## Key Concepts
//!
//! - **VocabularyEntry**: one (identifier, canonical name, synonym) row of a
//!   phenotype vocabulary such as HPO
//! - **AnnotatedDocument**: a tokenized note plus the entity spans found in it
//! - **Mention**: the surface text of one matched span and its negation flag
//! - **AffirmationMap**: affirmed mention texts per source document
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Matching and negation are injected through [`traits::PhraseMatcher`] and
//!   [`traits::NegationClassifier`]; concrete implementations live in
//!   `neg2pheno-extractor`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod affirmation;
pub mod document;
pub mod mention;
pub mod traits;
pub mod vocabulary;

// Re-exports for convenience
pub use affirmation::AffirmationMap;
pub use document::{AnnotatedDocument, Document, EntitySpan, Token};
pub use mention::Mention;
pub use vocabulary::{Vocabulary, VocabularyEntry, HPO_LABEL, HPO_PREFIX};
