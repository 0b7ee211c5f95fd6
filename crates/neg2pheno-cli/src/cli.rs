//! Command-line definitions for the three binaries.

use clap::{ArgGroup, Parser, ValueEnum};
use neg2pheno_extractor::{ExtractorConfig, Termset, TxtMode};
use neg2pheno_vocab::VocabularySource;
use std::path::PathBuf;

/// Extract affirmed HPO mentions from clinical notes and write them per note.
#[derive(Debug, Parser)]
#[command(name = "neg2pheno-extract")]
#[command(version, about, long_about = None)]
#[command(group(ArgGroup::new("vocabulary").required(true).args(["hpo_tsv", "hp_obo"])))]
pub struct ExtractArgs {
    /// Directory of input .txt notes
    #[arg(long = "in_dir")]
    pub in_dir: PathBuf,

    /// Output directory
    #[arg(long = "out_dir")]
    pub out_dir: PathBuf,

    /// TSV with columns HPO_ID, name, synonym
    #[arg(long = "hpo_tsv")]
    pub hpo_tsv: Option<PathBuf>,

    /// HPO ontology in OBO format (hp.obo)
    #[arg(long = "hp_obo")]
    pub hp_obo: Option<PathBuf>,

    /// NegEx termset
    #[arg(long, value_enum)]
    pub termset: Option<TermsetArg>,

    /// Maximum note length in characters
    #[arg(long = "max_length")]
    pub max_length: Option<usize>,

    /// Write per-note TXT files (default: on)
    #[arg(long = "emit_txt", conflicts_with = "no_txt")]
    pub emit_txt: bool,

    /// Skip the per-note TXT files
    #[arg(long = "no_txt")]
    pub no_txt: bool,

    /// TXT layout
    #[arg(long = "txt_mode", value_enum)]
    pub txt_mode: Option<TxtModeArg>,

    /// Subdirectory of out_dir for the TXT files
    #[arg(long = "txt_subdir")]
    pub txt_subdir: Option<String>,

    /// Also write a JSON array of {id, text} records
    #[arg(long = "emit_json")]
    pub emit_json: bool,

    /// JSON file name inside out_dir
    #[arg(long = "json_filename")]
    pub json_filename: Option<String>,

    /// Configuration file (default: ~/.neg2pheno/config.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Do not print the per-note summary table
    #[arg(short, long)]
    pub quiet: bool,
}

impl ExtractArgs {
    /// The vocabulary file to load
    pub fn vocabulary_source(&self) -> Option<VocabularySource> {
        match (&self.hpo_tsv, &self.hp_obo) {
            (Some(tsv), _) => Some(VocabularySource::Tsv(tsv.clone())),
            (None, Some(obo)) => Some(VocabularySource::Obo(obo.clone())),
            (None, None) => None,
        }
    }

    /// Override configuration values with the flags given on the command line
    pub fn apply_to(&self, config: &mut ExtractorConfig) {
        if let Some(termset) = self.termset {
            config.termset = termset.into();
        }
        if let Some(max_length) = self.max_length {
            config.max_length = max_length;
        }
        if self.emit_txt {
            config.emit_txt = true;
        }
        if self.no_txt {
            config.emit_txt = false;
        }
        if let Some(mode) = self.txt_mode {
            config.txt_mode = mode.into();
        }
        if let Some(subdir) = &self.txt_subdir {
            config.txt_subdir = subdir.clone();
        }
        if self.emit_json {
            config.emit_json = true;
        }
        if let Some(filename) = &self.json_filename {
            config.json_filename = filename.clone();
        }
    }
}

/// Run PhenoBERT's annotate.py over a folder of notes.
///
/// Arguments after the known flags are handed to annotate.py unchanged.
#[derive(Debug, Parser)]
#[command(name = "phenobert-annotate")]
#[command(version, about, long_about = None)]
pub struct AnnotateArgs {
    /// Folder of .txt notes (one per patient)
    #[arg(short = 'i', long = "in_dir")]
    pub in_dir: PathBuf,

    /// Output folder
    #[arg(short = 'o', long = "out_dir")]
    pub out_dir: PathBuf,

    /// Worker threads for annotate.py
    #[arg(short = 't', long, default_value_t = 8)]
    pub threads: usize,

    /// Path to PhenoBERT/phenobert/utils (where annotate.py lives)
    #[arg(long = "phenobert_root", env = "PHENOBERT_ROOT")]
    pub phenobert_root: Option<PathBuf>,

    /// Python interpreter used to run annotate.py
    #[arg(long, default_value = "python3")]
    pub python: String,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Extra arguments for annotate.py
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub passthrough: Vec<String>,
}

/// NegEx extraction followed by PhenoBERT annotation, in one go.
///
/// Arguments after the known flags are handed to phenobert-annotate.
#[derive(Debug, Parser)]
#[command(name = "neg2pheno")]
#[command(version, about, long_about = None)]
#[command(group(ArgGroup::new("vocabulary").required(true).args(["hpo_tsv", "hp_obo"])))]
pub struct PipelineArgs {
    /// Directory of input .txt notes
    #[arg(long = "in_dir")]
    pub in_dir: PathBuf,

    /// Output directory
    #[arg(long = "out_dir")]
    pub out_dir: PathBuf,

    /// TSV with columns HPO_ID, name, synonym
    #[arg(long = "hpo_tsv")]
    pub hpo_tsv: Option<PathBuf>,

    /// HPO ontology in OBO format (hp.obo)
    #[arg(long = "hp_obo")]
    pub hp_obo: Option<PathBuf>,

    /// NegEx termset
    #[arg(long, value_enum, default_value_t = TermsetArg::EnClinical)]
    pub termset: TermsetArg,

    /// TXT layout
    #[arg(long = "txt_mode", value_enum, default_value_t = TxtModeArg::Lines)]
    pub txt_mode: TxtModeArg,

    /// Subdirectory of out_dir for the TXT files
    #[arg(long = "txt_subdir", default_value = "in")]
    pub txt_subdir: String,

    /// Path to PhenoBERT/phenobert/utils (where annotate.py lives)
    #[arg(long = "phenobert_root", env = "PHENOBERT_ROOT")]
    pub phenobert_root: Option<PathBuf>,

    /// Worker threads for annotate.py
    #[arg(short = 't', long, default_value_t = 8)]
    pub threads: usize,

    /// Disable colored output (also passed to the extraction stage)
    #[arg(long)]
    pub no_color: bool,

    /// Extra arguments for phenobert-annotate
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub passthrough: Vec<String>,
}

/// Termset options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TermsetArg {
    /// Standard clinical triggers
    #[value(name = "en_clinical")]
    EnClinical,
    /// Clinical triggers plus history and concern phrases
    #[value(name = "en_clinical_sensitive")]
    EnClinicalSensitive,
}

/// TXT layout options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TxtModeArg {
    /// One mention per line
    Lines,
    /// Mentions separated by "; "
    Semicolons,
}

impl From<TermsetArg> for Termset {
    fn from(termset: TermsetArg) -> Self {
        match termset {
            TermsetArg::EnClinical => Termset::EnClinical,
            TermsetArg::EnClinicalSensitive => Termset::EnClinicalSensitive,
        }
    }
}

impl From<TxtModeArg> for TxtMode {
    fn from(mode: TxtModeArg) -> Self {
        match mode {
            TxtModeArg::Lines => TxtMode::Lines,
            TxtModeArg::Semicolons => TxtMode::Semicolons,
        }
    }
}
