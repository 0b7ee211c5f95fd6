//! Configuration file handling for the CLI.

use crate::error::{CliError, Result};
use neg2pheno_extractor::ExtractorConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default configuration file path (`~/.neg2pheno/config.toml`).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".neg2pheno").join("config.toml"))
}

/// Load the extractor configuration.
///
/// An explicit path must exist. Without one, the default path is read when
/// present and built-in defaults are used otherwise.
pub fn load_extractor_config(path: Option<&Path>) -> Result<ExtractorConfig> {
    match path {
        Some(path) => read_config(path),
        None => match default_config_path() {
            Some(path) if path.is_file() => read_config(&path),
            _ => Ok(ExtractorConfig::default()),
        },
    }
}

fn read_config(path: &Path) -> Result<ExtractorConfig> {
    debug!("Reading configuration from {}", path.display());
    let contents = fs::read_to_string(path).map_err(|e| {
        CliError::Config(format!("Cannot read config file {}: {}", path.display(), e))
    })?;
    ExtractorConfig::from_toml(&contents)
        .map_err(|e| CliError::Config(format!("{}: {}", path.display(), e)))
}
