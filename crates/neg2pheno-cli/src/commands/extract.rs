//! Extraction command implementation.

use crate::cli::ExtractArgs;
use crate::config::load_extractor_config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use neg2pheno_extractor::Extractor;
use neg2pheno_vocab::load_vocabulary;
use tracing::info;

/// Execute the extraction command.
///
/// Configuration and vocabulary are validated before any note is read.
pub fn execute_extract(args: ExtractArgs, formatter: &Formatter) -> Result<()> {
    let mut config = load_extractor_config(args.config.as_deref())?;
    args.apply_to(&mut config);
    config.validate().map_err(CliError::Config)?;

    let source = args.vocabulary_source().ok_or_else(|| {
        CliError::InvalidInput("one of --hpo_tsv or --hp_obo is required".to_string())
    })?;
    info!("Loading vocabulary from {}", source);
    let vocabulary = load_vocabulary(&source)?;

    let extractor = Extractor::new(config, &vocabulary)?;
    let (result, output) = extractor.run(&args.in_dir, &args.out_dir)?;

    if !args.quiet {
        println!("{}", formatter.extraction_summary(&result));
    }
    for line in formatter.bundles_written(&output) {
        println!("{}", line);
    }
    println!(
        "{}",
        formatter.info(&format!("Done. Results written to: {}", args.out_dir.display()))
    );

    Ok(())
}
