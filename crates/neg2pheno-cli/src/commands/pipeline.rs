//! One-shot pipeline command implementation.

use crate::cli::PipelineArgs;
use crate::error::Result;
use crate::handoff::{
    run_stage, sibling_executable, HandoffConfig, ANNOTATE_BIN, DEFAULT_OUTPUT_SUBDIR, EXTRACT_BIN,
};
use crate::output::Formatter;
use neg2pheno_extractor::{Termset, TxtMode};
use std::path::Path;
use std::process::Command;

impl From<&PipelineArgs> for HandoffConfig {
    fn from(args: &PipelineArgs) -> Self {
        Self {
            phenobert_root: args.phenobert_root.clone(),
            threads: args.threads,
            output_subdir: DEFAULT_OUTPUT_SUBDIR.to_string(),
            passthrough: args.passthrough.clone(),
            ..HandoffConfig::default()
        }
    }
}

/// Command line of the extraction stage.
pub fn extract_command(exe: &Path, args: &PipelineArgs) -> Command {
    let termset: Termset = args.termset.into();
    let txt_mode: TxtMode = args.txt_mode.into();

    let mut cmd = Command::new(exe);
    cmd.arg("--in_dir")
        .arg(&args.in_dir)
        .arg("--out_dir")
        .arg(&args.out_dir)
        .args(["--termset", termset.as_str()])
        .args(["--emit_txt", "--txt_mode", txt_mode.as_str()])
        .arg("--txt_subdir")
        .arg(&args.txt_subdir);

    match (&args.hp_obo, &args.hpo_tsv) {
        (Some(obo), _) => cmd.arg("--hp_obo").arg(obo),
        (None, Some(tsv)) => cmd.arg("--hpo_tsv").arg(tsv),
        (None, None) => &mut cmd,
    };
    if args.no_color {
        cmd.arg("--no-color");
    }
    cmd
}

/// Command line of the annotation stage, reading the extractor's TXT folder.
pub fn annotate_stage_command(
    exe: &Path,
    args: &PipelineArgs,
    config: &HandoffConfig,
) -> Result<Command> {
    let root = config.root()?;

    let mut cmd = Command::new(exe);
    cmd.arg("--phenobert_root")
        .arg(root)
        .arg("-i")
        .arg(args.out_dir.join(&args.txt_subdir))
        .arg("-o")
        .arg(config.output_dir(&args.out_dir))
        .arg("-t")
        .arg(config.threads.to_string())
        .args(&config.passthrough);
    Ok(cmd)
}

/// Execute extraction, then annotation, stopping at the first failure.
pub fn execute_pipeline(args: PipelineArgs, formatter: &Formatter) -> Result<()> {
    let config = HandoffConfig::from(&args);
    config.annotate_script()?;

    let mut extract = extract_command(&sibling_executable(EXTRACT_BIN), &args);
    let mut annotate = annotate_stage_command(&sibling_executable(ANNOTATE_BIN), &args, &config)?;

    run_stage(EXTRACT_BIN, &mut extract)?;
    run_stage(ANNOTATE_BIN, &mut annotate)?;

    println!("{}", formatter.success("All done."));
    Ok(())
}
