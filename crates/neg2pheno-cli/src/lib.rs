//! neg2pheno CLI library.
//!
//! Shared pieces of the three binaries: argument definitions, configuration
//! loading, the child-process handoff to PhenoBERT and output formatting.
//!
//! - `neg2pheno-extract` runs vocabulary matching and NegEx over a folder of
//!   notes and writes the affirmed mentions per note
//! - `phenobert-annotate` runs PhenoBERT's annotate.py over such a folder
//! - `neg2pheno` runs the two one after the other as separate processes

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod handoff;
pub mod logging;
pub mod output;

pub use cli::{AnnotateArgs, ExtractArgs, PipelineArgs};
pub use error::{CliError, Result};
pub use handoff::HandoffConfig;
pub use output::Formatter;
