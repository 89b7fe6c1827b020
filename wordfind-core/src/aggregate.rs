//! Collapse per-sentence matches into result rows

use crate::segment::SentenceRecord;
use serde::Serialize;
use std::collections::BTreeSet;

/// Column names of the result table, in order
pub const RESULT_COLUMNS: [&str; 6] = [
    "sent_id",
    "list_matchs",
    "found_words",
    "match_certainty",
    "sentence",
    "page_at_or_below",
];

/// Separator for multi-valued cells
pub const CELL_SEPARATOR: &str = ", ";

/// One row per sentence that has at least one match
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRow {
    /// Sentence id
    pub sent_id: usize,
    /// Distinct matched list entries, sorted and comma-joined
    #[serde(rename = "list_matchs")]
    pub list_matches: String,
    /// Distinct found sentence tokens, sorted and comma-joined
    pub found_words: String,
    /// Highest single-word score; empty when only phrases matched
    pub match_certainty: Option<u8>,
    /// Sentence text
    pub sentence: String,
    /// Page the sentence is on or after
    pub page_at_or_below: u32,
}

impl ResultRow {
    /// Collapse one sentence; `None` when it has no matches
    pub fn from_sentence(sentence: &SentenceRecord) -> Option<Self> {
        if !sentence.has_matches() {
            return None;
        }

        let list_matches: BTreeSet<&str> = sentence
            .matches
            .iter()
            .map(|m| m.list_entry.as_str())
            .collect();
        let found_words: BTreeSet<&str> =
            sentence.matches.iter().flat_map(|m| m.found.iter()).collect();
        let match_certainty = sentence.matches.iter().filter_map(|m| m.score).max();

        Some(Self {
            sent_id: sentence.id,
            list_matches: join(list_matches),
            found_words: join(found_words),
            match_certainty,
            sentence: sentence.text.clone(),
            page_at_or_below: sentence.page,
        })
    }

    /// Matched list entries as a set
    pub fn list_match_set(&self) -> BTreeSet<&str> {
        split(&self.list_matches)
    }

    /// Found words as a set
    pub fn found_word_set(&self) -> BTreeSet<&str> {
        split(&self.found_words)
    }
}

fn join(values: BTreeSet<&str>) -> String {
    values.into_iter().collect::<Vec<_>>().join(CELL_SEPARATOR)
}

fn split(cell: &str) -> BTreeSet<&str> {
    cell.split(CELL_SEPARATOR).filter(|v| !v.is_empty()).collect()
}

/// Result of a search over one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "rows", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// No sentence matched anything
    NoMatches,
    /// Rows in ascending sentence id
    Matches(Vec<ResultRow>),
}

impl SearchOutcome {
    /// Rows, empty for [`SearchOutcome::NoMatches`]
    pub fn rows(&self) -> &[ResultRow] {
        match self {
            SearchOutcome::NoMatches => &[],
            SearchOutcome::Matches(rows) => rows,
        }
    }

    /// Whether any sentence matched
    pub fn has_matches(&self) -> bool {
        matches!(self, SearchOutcome::Matches(_))
    }
}

/// Group matches by sentence; sentences without matches are dropped
pub fn aggregate(sentences: &[SentenceRecord]) -> SearchOutcome {
    let mut rows: Vec<ResultRow> = sentences.iter().filter_map(ResultRow::from_sentence).collect();

    if rows.is_empty() {
        log::debug!("no sentence matched the word list");
        return SearchOutcome::NoMatches;
    }

    rows.sort_by_key(|row| row.sent_id);
    SearchOutcome::Matches(rows)
}
