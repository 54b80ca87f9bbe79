use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".trichrc.json";

/// Name of the generated translation lookup function.
pub const TRANSLATION_FN: &str = "t";

/// Module name of the generated runtime scaffold (imported by rewritten files).
pub const RUNTIME_MODULE: &str = "i18n";

/// File name of the aggregate catalog written under the output root.
pub const CATALOG_FILE_NAME: &str = "translation.json";

/// Path fragments that disqualify a file from extraction.
pub const EXCLUDED_PATH_MARKERS: &[&str] = &[".test.", ".stories.", "__mocks__"];

/// Extensions of files considered for extraction.
pub const SOURCE_EXTENSIONS: &[&str] = &[".tsx", ".ts"];

/// Normalized texts with more than this many words get a synthetic
/// positional key instead of keying by their own content.
pub const SELF_KEY_WORD_LIMIT: usize = 10;

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// File name suffixes to extract from (must start with a dot).
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Substrings that exclude a path from the walk entirely.
    #[serde(default = "default_excludes")]
    pub excludes: Vec<String>,
}

fn default_extensions() -> Vec<String> {
    SOURCE_EXTENSIONS.iter().map(|s| s.to_string()).collect()
}

fn default_excludes() -> Vec<String> {
    EXCLUDED_PATH_MARKERS.iter().map(|s| s.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            excludes: default_excludes(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any configured extension does not start with a dot
    /// (a bare `tsx` would match unrelated file names by suffix).
    pub fn validate(&self) -> Result<()> {
        for extension in &self.extensions {
            if !extension.starts_with('.') {
                anyhow::bail!(
                    "Invalid entry in 'extensions': \"{}\" (must start with '.')",
                    extension
                );
            }
        }
        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
