//! Child-process handoff between the extraction and annotation stages.
//!
//! The stages share nothing but the filesystem: the extractor writes
//! `<out_dir>/<txt_subdir>/*.txt` and PhenoBERT reads that folder and writes
//! `<out_dir>/phenobert_out`.

use crate::error::{CliError, Result};
use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

/// Environment variable naming the PhenoBERT utils directory
pub const PHENOBERT_ROOT_ENV: &str = "PHENOBERT_ROOT";

/// Environment variable read by NLTK for its data directory
pub const NLTK_DATA_ENV: &str = "NLTK_DATA";

/// PhenoBERT's entry script inside the root
pub const ANNOTATE_SCRIPT: &str = "annotate.py";

/// Extraction stage executable
pub const EXTRACT_BIN: &str = "neg2pheno-extract";

/// Annotation stage executable
pub const ANNOTATE_BIN: &str = "phenobert-annotate";

/// Output subdirectory for PhenoBERT results
pub const DEFAULT_OUTPUT_SUBDIR: &str = "phenobert_out";

/// Default PhenoBERT worker threads
pub const DEFAULT_THREADS: usize = 8;

/// Settings for running PhenoBERT.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandoffConfig {
    /// PhenoBERT/phenobert/utils, where annotate.py lives
    pub phenobert_root: Option<PathBuf>,

    /// Worker threads passed as `-t`
    pub threads: usize,

    /// Python interpreter running annotate.py
    pub python: String,

    /// Subdirectory of the output directory receiving PhenoBERT results
    pub output_subdir: String,

    /// Extra arguments appended verbatim
    pub passthrough: Vec<String>,
}

impl Default for HandoffConfig {
    fn default() -> Self {
        Self {
            phenobert_root: None,
            threads: DEFAULT_THREADS,
            python: "python3".to_string(),
            output_subdir: DEFAULT_OUTPUT_SUBDIR.to_string(),
            passthrough: Vec::new(),
        }
    }
}

impl HandoffConfig {
    /// The configured root, which must be set and non-empty.
    pub fn root(&self) -> Result<&Path> {
        match &self.phenobert_root {
            Some(root) if !root.as_os_str().is_empty() => Ok(root),
            _ => Err(CliError::Config(format!(
                "Set --phenobert_root or {} to PhenoBERT/phenobert/utils",
                PHENOBERT_ROOT_ENV
            ))),
        }
    }

    /// Path of annotate.py, which must exist.
    pub fn annotate_script(&self) -> Result<PathBuf> {
        let script = self.root()?.join(ANNOTATE_SCRIPT);
        if !script.is_file() {
            return Err(CliError::Config(format!(
                "{} not found at {}",
                ANNOTATE_SCRIPT,
                script.display()
            )));
        }
        Ok(script)
    }

    /// Where PhenoBERT writes its results for a given output directory.
    pub fn output_dir(&self, out_dir: &Path) -> PathBuf {
        out_dir.join(&self.output_subdir)
    }
}

/// Command running annotate.py over `in_dir`.
///
/// `NLTK_DATA` defaults to `~/nltk_data` unless already set.
pub fn annotate_command(config: &HandoffConfig, in_dir: &Path, out_dir: &Path) -> Result<Command> {
    let script = config.annotate_script()?;

    let mut cmd = Command::new(&config.python);
    cmd.arg(script)
        .arg("-i")
        .arg(in_dir)
        .arg("-o")
        .arg(out_dir)
        .arg("-t")
        .arg(config.threads.to_string())
        .args(&config.passthrough);

    if env::var_os(NLTK_DATA_ENV).is_none() {
        if let Some(home) = dirs::home_dir() {
            cmd.env(NLTK_DATA_ENV, home.join("nltk_data"));
        }
    }

    Ok(cmd)
}

/// Locate a sibling executable of the running binary, else rely on `PATH`.
pub fn sibling_executable(name: &str) -> PathBuf {
    let file_name = format!("{}{}", name, env::consts::EXE_SUFFIX);
    let sibling = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(&file_name)));

    match sibling {
        Some(path) if path.is_file() => path,
        _ => {
            debug!("{} not found next to current executable; using PATH", name);
            PathBuf::from(file_name)
        }
    }
}

/// Render a command line for logging.
pub fn describe(cmd: &Command) -> String {
    std::iter::once(cmd.get_program())
        .chain(cmd.get_args())
        .map(OsStr::to_string_lossy)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Run a stage to completion; any failure aborts with that stage's error.
pub fn run_stage(stage: &str, cmd: &mut Command) -> Result<()> {
    info!(">> Running: {}", describe(cmd));
    let status = cmd.status().map_err(|source| CliError::Spawn {
        stage: stage.to_string(),
        source,
    })?;

    if !status.success() {
        return Err(CliError::StageFailed {
            stage: stage.to_string(),
            status,
        });
    }
    debug!("Stage '{}' finished", stage);
    Ok(())
}
