//! Configuration for the Extractor

use crate::negex::Termset;
use crate::pipeline::DEFAULT_MAX_LENGTH;
use neg2pheno_domain::HPO_LABEL;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Component, Path};

/// Layout of the per-document TXT files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TxtMode {
    /// One mention per line
    #[default]
    Lines,
    /// Mentions on a single line separated by "; "
    Semicolons,
}

impl TxtMode {
    /// Get the mode name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            TxtMode::Lines => "lines",
            TxtMode::Semicolons => "semicolons",
        }
    }

    /// Separator placed between mentions
    pub fn separator(&self) -> &'static str {
        match self {
            TxtMode::Lines => "\n",
            TxtMode::Semicolons => "; ",
        }
    }
}

impl fmt::Display for TxtMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Negation trigger termset
    pub termset: Termset,

    /// Maximum document length (characters)
    pub max_length: usize,

    /// Write one TXT file per document
    pub emit_txt: bool,

    /// Layout of the TXT files
    pub txt_mode: TxtMode,

    /// Subdirectory of the output directory receiving the TXT files
    pub txt_subdir: String,

    /// Also write a single JSON array of all documents
    pub emit_json: bool,

    /// File name of the JSON bundle inside the output directory
    pub json_filename: String,

    /// Label given to vocabulary matches and classified for negation
    pub entity_label: String,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_length == 0 {
            return Err("max_length must be greater than 0".to_string());
        }
        if !is_relative_subpath(&self.txt_subdir) {
            return Err(format!(
                "txt_subdir must be a relative path inside the output directory, got {:?}",
                self.txt_subdir
            ));
        }
        if !is_plain_name(&self.json_filename) {
            return Err(format!(
                "json_filename must be a single file name, got {:?}",
                self.json_filename
            ));
        }
        if self.entity_label.trim().is_empty() {
            return Err("entity_label cannot be empty".to_string());
        }
        Ok(())
    }

    /// Sensitive preset: the wider termset negates history and concern phrases too
    pub fn sensitive() -> Self {
        Self {
            termset: Termset::EnClinicalSensitive,
            ..Self::default()
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            termset: Termset::EnClinical,
            max_length: DEFAULT_MAX_LENGTH,
            emit_txt: true,
            txt_mode: TxtMode::Lines,
            txt_subdir: "in".to_string(),
            emit_json: false,
            json_filename: "text_examples.json".to_string(),
            entity_label: HPO_LABEL.to_string(),
        }
    }
}

/// A relative path made of normal components only, so joining it stays inside the parent
fn is_relative_subpath(name: &str) -> bool {
    !name.is_empty()
        && !has_drive_prefix(name)
        && name.split(['/', '\\']).all(|segment| segment != "..")
        && Path::new(name)
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
}

fn has_drive_prefix(name: &str) -> bool {
    let bytes = name.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// A single normal path component
fn is_plain_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !name.contains(['/', '\\'])
}
