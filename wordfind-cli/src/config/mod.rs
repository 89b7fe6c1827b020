//! Configuration file support

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use wordfind_core::Config;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Matching configuration, passed to the core finder
    #[serde(default)]
    pub matching: Config,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

impl CliConfig {
    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: CliConfig =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.message().to_string()))?;
        config
            .matching
            .validate()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(config)
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Start CSV files with a UTF-8 byte order mark
    pub csv_bom: bool,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "csv".to_string(),
            csv_bom: true,
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Match sentences on a thread pool
    pub parallel: bool,

    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            worker_threads: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordfind_core::{PhraseMode, Scorer};

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.matching.threshold(), 75);
        assert_eq!(config.output.default_format, "csv");
        assert!(config.output.csv_bom);
        assert_eq!(config.performance.worker_threads, 0);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = CliConfig::from_toml(
            r#"
[matching]
threshold = 85
scorer = "jaro-winkler"

[output]
default_format = "json"
"#,
        )
        .unwrap();

        assert_eq!(config.matching.threshold(), 85);
        assert_eq!(config.matching.scorer(), Scorer::JaroWinkler);
        assert_eq!(config.matching.phrase_mode(), PhraseMode::Fuzzy);
        assert_eq!(config.matching.min_sentence_tokens(), 5);
        assert_eq!(config.output.default_format, "json");
        assert!(config.output.pretty_json);
        assert!(!config.performance.parallel);
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let err = CliConfig::from_toml("[matching]\nthreshold = 150\n").unwrap_err();
        assert!(err.to_string().contains("threshold"));
    }

    #[test]
    fn test_unknown_scorer_rejected() {
        let err = CliConfig::from_toml("[matching]\nscorer = \"soundex\"\n").unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
    }
}
