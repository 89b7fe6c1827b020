//! Search configuration

use crate::error::Error;
use crate::similarity::Scorer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default configuration constants
pub mod defaults {
    /// Similarity threshold on the 0-100 scale
    pub const THRESHOLD: u8 = 75;

    /// Sentence candidates with fewer whitespace tokens merge into the pending sentence
    pub const MIN_SENTENCE_TOKENS: usize = 5;
}

/// How multi-word phrases are resolved against a sentence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PhraseMode {
    /// Each phrase token needs a sentence token scoring above the threshold against it
    #[default]
    Fuzzy,
    /// Each phrase token must equal a qualifying sentence token
    Literal,
}

impl PhraseMode {
    /// Configuration name of the mode
    pub fn as_str(&self) -> &'static str {
        match self {
            PhraseMode::Fuzzy => "fuzzy",
            PhraseMode::Literal => "literal",
        }
    }
}

impl fmt::Display for PhraseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PhraseMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fuzzy" => Ok(PhraseMode::Fuzzy),
            "literal" | "exact" => Ok(PhraseMode::Literal),
            other => Err(Error::Configuration(format!("unknown phrase mode: {other}"))),
        }
    }
}

/// Execution strategy for the fuzzy matcher
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExecutionMode {
    /// Score sentences one after another on the calling thread
    #[default]
    Sequential,
    /// Shard sentences across a rayon thread pool
    Parallel,
}

/// Search configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub(crate) threshold: u8,
    pub(crate) scorer: Scorer,
    pub(crate) phrase_mode: PhraseMode,
    pub(crate) min_sentence_tokens: usize,
    pub(crate) execution_mode: ExecutionMode,
    pub(crate) threads: Option<usize>, // None = all available threads
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold: defaults::THRESHOLD,
            scorer: Scorer::default(),
            phrase_mode: PhraseMode::default(),
            min_sentence_tokens: defaults::MIN_SENTENCE_TOKENS,
            execution_mode: ExecutionMode::default(),
            threads: None,
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Similarity threshold (0-100)
    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Token similarity scorer
    pub fn scorer(&self) -> Scorer {
        self.scorer
    }

    /// Multi-word phrase resolution mode
    pub fn phrase_mode(&self) -> PhraseMode {
        self.phrase_mode
    }

    /// Minimum token count for a standalone sentence
    pub fn min_sentence_tokens(&self) -> usize {
        self.min_sentence_tokens
    }

    /// Matcher execution mode
    pub fn execution_mode(&self) -> ExecutionMode {
        self.execution_mode
    }

    /// Worker thread count for parallel execution
    pub fn threads(&self) -> Option<usize> {
        self.threads
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), Error> {
        if self.threshold > 100 {
            return Err(Error::Configuration(format!(
                "threshold must be between 0 and 100, got {}",
                self.threshold
            )));
        }

        if self.min_sentence_tokens == 0 {
            return Err(Error::Configuration(
                "min_sentence_tokens must be greater than 0".into(),
            ));
        }

        if let Some(threads) = self.threads {
            if threads == 0 {
                return Err(Error::Configuration(
                    "threads must be greater than 0".into(),
                ));
            }
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    threshold: Option<u8>,
    scorer: Option<Scorer>,
    phrase_mode: Option<PhraseMode>,
    min_sentence_tokens: Option<usize>,
    execution_mode: Option<ExecutionMode>,
    threads: Option<usize>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn from_config(config: &Config) -> Self {
        Self {
            threshold: Some(config.threshold),
            scorer: Some(config.scorer),
            phrase_mode: Some(config.phrase_mode),
            min_sentence_tokens: Some(config.min_sentence_tokens),
            execution_mode: Some(config.execution_mode),
            threads: config.threads,
        }
    }

    /// Set the similarity threshold
    pub fn threshold(mut self, threshold: u8) -> Self {
        self.threshold = Some(threshold);
        self
    }

    /// Set the scorer by name
    pub fn scorer_name(mut self, name: &str) -> Result<Self, Error> {
        self.scorer = Some(Scorer::from_str(name)?);
        Ok(self)
    }

    /// Set the scorer
    pub fn scorer(mut self, scorer: Scorer) -> Self {
        self.scorer = Some(scorer);
        self
    }

    /// Set the phrase resolution mode
    pub fn phrase_mode(mut self, mode: PhraseMode) -> Self {
        self.phrase_mode = Some(mode);
        self
    }

    /// Set the minimum standalone sentence token count
    pub fn min_sentence_tokens(mut self, count: usize) -> Self {
        self.min_sentence_tokens = Some(count);
        self
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.execution_mode = Some(mode);
        self
    }

    /// Set the number of threads (None = all available)
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.threads = count;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config, Error> {
        let mut config = Config::default();

        if let Some(threshold) = self.threshold {
            config.threshold = threshold;
        }
        if let Some(scorer) = self.scorer {
            config.scorer = scorer;
        }
        if let Some(mode) = self.phrase_mode {
            config.phrase_mode = mode;
        }
        if let Some(count) = self.min_sentence_tokens {
            config.min_sentence_tokens = count;
        }
        if let Some(mode) = self.execution_mode {
            config.execution_mode = mode;
        }
        if self.threads.is_some() {
            config.threads = self.threads;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.threshold(), 75);
        assert_eq!(config.min_sentence_tokens(), 5);
        assert_eq!(config.scorer(), Scorer::Ratio);
        assert_eq!(config.phrase_mode(), PhraseMode::Fuzzy);
        assert_eq!(config.execution_mode(), ExecutionMode::Sequential);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let config = Config::builder()
            .threshold(90)
            .phrase_mode(PhraseMode::Literal)
            .min_sentence_tokens(3)
            .threads(Some(2))
            .build()
            .unwrap();

        assert_eq!(config.threshold(), 90);
        assert_eq!(config.phrase_mode(), PhraseMode::Literal);
        assert_eq!(config.min_sentence_tokens(), 3);
        assert_eq!(config.threads(), Some(2));
    }

    #[test]
    fn test_invalid_threshold() {
        let result = Config::builder().threshold(101).build();
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_zero_threads_rejected() {
        let result = Config::builder().threads(Some(0)).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_min_tokens_rejected() {
        let result = Config::builder().min_sentence_tokens(0).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_scorer_by_name() {
        let config = Config::builder()
            .scorer_name("jaro-winkler")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.scorer(), Scorer::JaroWinkler);

        assert!(Config::builder().scorer_name("soundex").is_err());
    }

    #[test]
    fn test_phrase_mode_from_str() {
        assert_eq!("Fuzzy".parse::<PhraseMode>().unwrap(), PhraseMode::Fuzzy);
        assert_eq!("literal".parse::<PhraseMode>().unwrap(), PhraseMode::Literal);
        assert!("loose".parse::<PhraseMode>().is_err());
    }

    #[test]
    fn test_from_config_round_trip() {
        let original = Config::builder().threshold(60).build().unwrap();
        let rebuilt = ConfigBuilder::from_config(&original).build().unwrap();
        assert_eq!(original, rebuilt);
    }
}
