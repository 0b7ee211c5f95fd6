//! PhenoBERT annotation command implementation.

use crate::cli::AnnotateArgs;
use crate::error::Result;
use crate::handoff::{annotate_command, run_stage, HandoffConfig, DEFAULT_OUTPUT_SUBDIR};

/// Stage name used in errors and logs.
pub const STAGE: &str = "phenobert-annotate";

impl From<&AnnotateArgs> for HandoffConfig {
    fn from(args: &AnnotateArgs) -> Self {
        Self {
            phenobert_root: args.phenobert_root.clone(),
            threads: args.threads,
            python: args.python.clone(),
            output_subdir: DEFAULT_OUTPUT_SUBDIR.to_string(),
            passthrough: args.passthrough.clone(),
        }
    }
}

/// Execute annotate.py; a non-zero exit surfaces as a stage failure.
pub fn execute_annotate(args: AnnotateArgs) -> Result<()> {
    let config = HandoffConfig::from(&args);
    let mut cmd = annotate_command(&config, &args.in_dir, &args.out_dir)?;
    run_stage(STAGE, &mut cmd)
}
