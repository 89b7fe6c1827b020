//! Per-sentence similarity table

use std::collections::HashMap;

/// Scores of every distinct sentence token against every list token
///
/// Built for one sentence and dropped once its phrases are resolved. Rows
/// follow first appearance in the sentence; columns follow
/// [`PhraseList::list_tokens`](crate::wordlist::PhraseList::list_tokens).
#[derive(Debug, Clone, Default)]
pub struct SimilarityTable {
    columns: usize,
    tokens: Vec<String>,
    index: HashMap<String, usize>,
    scores: Vec<u8>,
}

impl SimilarityTable {
    /// Empty table for `columns` list tokens
    pub fn new(columns: usize) -> Self {
        Self {
            columns,
            ..Self::default()
        }
    }

    /// Whether `token` already has a row
    pub fn contains(&self, token: &str) -> bool {
        self.index.contains_key(token)
    }

    /// Add a row of scores for a sentence token; a repeated token keeps its first row
    pub fn insert(&mut self, token: String, row: &[u8]) {
        debug_assert_eq!(row.len(), self.columns);
        if self.contains(&token) {
            return;
        }
        self.index.insert(token.clone(), self.tokens.len());
        self.tokens.push(token);
        self.scores.extend_from_slice(row);
    }

    /// Score of a sentence token against the list token at `column`
    pub fn score(&self, token: &str, column: usize) -> Option<u8> {
        let row = *self.index.get(token)?;
        self.row(row).get(column).copied()
    }

    /// Sentence tokens with at least one score strictly above `threshold`
    pub fn qualifying(&self, threshold: u8) -> impl Iterator<Item = &str> + '_ {
        self.tokens
            .iter()
            .enumerate()
            .filter(move |&(row, _)| self.row(row).iter().any(|&score| score > threshold))
            .map(|(_, token)| token.as_str())
    }

    /// Sentence tokens scoring strictly above `threshold` against the list token at `column`
    pub fn covering(&self, column: usize, threshold: u8) -> impl Iterator<Item = &str> + '_ {
        self.tokens
            .iter()
            .enumerate()
            .filter(move |&(row, _)| self.row(row).get(column).is_some_and(|&s| s > threshold))
            .map(|(_, token)| token.as_str())
    }

    /// Number of sentence-token rows
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    fn row(&self, row: usize) -> &[u8] {
        let start = row * self.columns;
        &self.scores[start..start + self.columns]
    }
}
