//! Sentence-level word-list screening for word-processing documents
//!
//! This crate rebuilds the running text of a document from its body markup,
//! cuts it into sentences while tracking an approximate page number, and
//! reports every sentence that contains an exact or fuzzy match for an entry
//! of a user-supplied word list.
//!
//! # Pipeline
//!
//! - [`markup`]: package reading and extraction of text, paragraph and
//!   page-break events
//! - [`linearize`]: events folded into annotated text
//! - [`segment`]: sentences with dense ids and page numbers
//! - [`wordlist`]: word list and exclusion list tokenization
//! - [`matcher`]: two-pass fuzzy matching
//! - [`aggregate`]: one result row per matching sentence
//!
//! # Example
//!
//! ```rust
//! use wordfind_core::{ExclusionList, Input, PhraseList, WordFinder, WordList};
//!
//! let xml = r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
//!   <w:body><w:p><w:r><w:t>Red rods are better than blue ones.</w:t></w:r></w:p></w:body>
//! </w:document>"#;
//!
//! let phrases = PhraseList::from_word_list(&WordList::parse("red\nblue"));
//! let report = WordFinder::new()
//!     .search(Input::from_xml(xml), &phrases, &ExclusionList::empty())
//!     .unwrap();
//!
//! let rows = report.outcome.rows();
//! assert_eq!(rows.len(), 1);
//! assert_eq!(rows[0].match_certainty, Some(100));
//! ```
//!
//! Page numbers come from renderer page-break markers, which are missing
//! inside tables and floating text. A reported page is the page the sentence
//! is on or a page before it.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod finder;
pub mod linearize;
pub mod markup;
pub mod matcher;
pub mod segment;
pub mod similarity;
pub mod wordlist;

pub use aggregate::{aggregate, ResultRow, SearchOutcome, RESULT_COLUMNS};
pub use config::{Config, ConfigBuilder, ExecutionMode, PhraseMode};
pub use error::{Error, Result};
pub use finder::{Input, Report, SearchMetadata, WordFinder};
pub use linearize::{linearize, render_markup_log, AnnotatedText};
pub use markup::{extract_events, MarkupEvent};
pub use matcher::{FoundTokens, FuzzyMatcher, MatchPhase, MatchRecord, NoProgress, ProgressSink};
pub use segment::{Segmenter, SentenceRecord};
pub use similarity::Scorer;
pub use wordlist::{ExclusionList, PhraseKind, PhraseList, PhraseTokenRecord, WordList};
