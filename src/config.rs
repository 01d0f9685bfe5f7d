//! Generator configuration.
//!
//! All knobs of the generator live in [`GeneratorConfig`]: the toolchain name,
//! the language-standard flag, preprocessor defines, the include and source
//! directory names, the source-file extension filter, and the output filename.
//! The defaults reproduce the firmware setup this tool was originally written
//! for (gcc, C11, an STM32F103xB target), so running without a config file
//! needs no input at all.

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for a compilation database run.
///
/// Every field has a default, so a config file only needs to name the fields
/// it overrides. Directory fields are interpreted relative to the project
/// root at generation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Toolchain executable name used in the command template
    pub compiler: String,
    /// Language-standard flag value (rendered as `-std=<std>`)
    pub std: String,
    /// Preprocessor define tokens (each rendered as `-D<define>`)
    pub defines: Vec<String>,
    /// Include directory name under the project root (rendered as `-I<abs path>`)
    pub include_dir: String,
    /// Source directory name under the project root to scan recursively
    pub source_dir: String,
    /// Source-file extension to match (without the leading dot)
    pub extension: String,
    /// Output filename, written into the project root
    pub output_file: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            compiler: "gcc".to_string(),
            std: "c11".to_string(),
            defines: vec!["STM32F103xB".to_string()],
            include_dir: "include".to_string(),
            source_dir: "kernel".to_string(),
            extension: "c".to_string(),
            output_file: "compile_commands.json".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Loads a configuration from a YAML or JSON file.
    ///
    /// The format is chosen by file extension: `.yaml`/`.yml` for YAML,
    /// `.json` for JSON. Fields not present in the file keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, has an unrecognized
    /// extension, or does not deserialize into a valid configuration.
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading generator config from {}", path.display());

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("");
        let config = match ext {
            "yaml" | "yml" => serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse YAML config: {}", path.display()))?,
            "json" => serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))?,
            other => anyhow::bail!(
                "Unsupported config format '{}' (expected .yaml, .yml or .json): {}",
                other,
                path.display()
            ),
        };

        debug!("Loaded config: {:?}", config);
        Ok(config)
    }
}
