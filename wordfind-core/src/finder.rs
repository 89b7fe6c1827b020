//! End-to-end document search

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::aggregate::{aggregate, SearchOutcome};
use crate::config::Config;
use crate::error::Result;
use crate::linearize::linearize;
use crate::markup::{extract_events, open_docx, read_document_xml};
use crate::matcher::{FuzzyMatcher, NoProgress, ProgressSink};
use crate::segment::{Segmenter, SentenceRecord};
use crate::wordlist::{ExclusionList, PhraseList};

/// Document source
pub enum Input {
    /// Path to a document package on disk
    DocxFile(PathBuf),
    /// Document package bytes
    DocxBytes(Vec<u8>),
    /// Document body XML, already extracted from its package
    Xml(String),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::DocxFile(path) => f.debug_struct("Input::DocxFile").field("path", path).finish(),
            Input::DocxBytes(bytes) => f
                .debug_struct("Input::DocxBytes")
                .field("length", &bytes.len())
                .finish(),
            Input::Xml(xml) => f
                .debug_struct("Input::Xml")
                .field("length", &xml.len())
                .finish(),
        }
    }
}

impl Input {
    /// Create input from a package path
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Input::DocxFile(path.as_ref().to_path_buf())
    }

    /// Create input from package bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::DocxBytes(bytes)
    }

    /// Create input from body XML
    pub fn from_xml(xml: impl Into<String>) -> Self {
        Input::Xml(xml.into())
    }

    /// Resolve to the document body XML
    pub fn into_document_xml(self) -> Result<String> {
        match self {
            Input::DocxFile(path) => open_docx(path),
            Input::DocxBytes(bytes) => read_document_xml(Cursor::new(bytes)),
            Input::Xml(xml) => Ok(xml),
        }
    }
}

/// Metadata about a search run
#[derive(Debug, Clone)]
pub struct SearchMetadata {
    /// Total duration
    pub duration: Duration,
    /// Matcher strategy used
    pub strategy_used: String,
    /// Number of sentences segmented
    pub sentence_count: usize,
    /// Number of page-break markers seen
    pub page_breaks: u32,
    /// Number of phrases searched for
    pub phrase_count: usize,
}

/// Result of searching one document
#[derive(Debug, Clone)]
pub struct Report {
    /// Collapsed rows or the no-match signal
    pub outcome: SearchOutcome,
    /// Every sentence with its raw matches
    pub sentences: Vec<SentenceRecord>,
    /// Run metadata
    pub metadata: SearchMetadata,
}

/// Runs the extraction, segmentation, matching and aggregation pipeline
#[derive(Debug, Clone, Default)]
pub struct WordFinder {
    config: Config,
}

impl WordFinder {
    /// Create a finder with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a finder with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Search a document
    pub fn search(
        &self,
        input: Input,
        phrases: &PhraseList,
        exclusions: &ExclusionList,
    ) -> Result<Report> {
        self.search_with_progress(input, phrases, exclusions, &NoProgress)
    }

    /// Search a document, reporting matcher progress
    pub fn search_with_progress(
        &self,
        input: Input,
        phrases: &PhraseList,
        exclusions: &ExclusionList,
        progress: &dyn ProgressSink,
    ) -> Result<Report> {
        let start = Instant::now();

        let xml = input.into_document_xml()?;
        let events = extract_events(&xml)?;
        let annotated = linearize(&events);
        let mut sentences = Segmenter::new(self.config.min_sentence_tokens()).segment(&annotated);

        let matcher = FuzzyMatcher::new(phrases, exclusions, &self.config);
        let strategy_used = matcher.match_all(
            &mut sentences,
            self.config.execution_mode(),
            self.config.threads(),
            progress,
        )?;

        let outcome = aggregate(&sentences);
        let metadata = SearchMetadata {
            duration: start.elapsed(),
            strategy_used,
            sentence_count: sentences.len(),
            page_breaks: annotated.page_breaks(),
            phrase_count: phrases.len(),
        };
        log::info!(
            "searched {} sentences for {} phrases in {:?}: {} matching sentence(s)",
            metadata.sentence_count,
            metadata.phrase_count,
            metadata.duration,
            outcome.rows().len()
        );

        Ok(Report {
            outcome,
            sentences,
            metadata,
        })
    }
}
