//! Two-pass fuzzy matching of sentences against a phrase list
//!
//! Pass 1 scores every sentence token against every distinct list token and
//! records single-word matches at or above the threshold. Pass 2 resolves
//! multi-word phrases from the same scores, using tokens strictly above the
//! threshold. Both passes run per sentence, so the similarity table never
//! outlives the sentence it was built for.

mod progress;
mod table;

pub use progress::{MatchPhase, NoProgress, ProgressSink};
pub use table::SimilarityTable;

#[cfg(test)]
pub(crate) use progress::testing;

use crate::config::{Config, ExecutionMode, PhraseMode};
use crate::error::Result;
use crate::segment::SentenceRecord;
use crate::similarity::Scorer;
use crate::wordlist::{sentence_tokens, ExclusionList, PhraseList, PhraseTokenRecord};
use serde::Serialize;
use smallvec::SmallVec;
use std::collections::{BTreeSet, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

#[cfg(feature = "parallel")]
use crate::error::Error;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Sentence token(s) behind a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FoundTokens {
    /// The sentence token of a single-word match
    Token(String),
    /// The sentence tokens that satisfied a multi-word phrase
    Tokens(BTreeSet<String>),
}

impl FoundTokens {
    /// Iterate the found tokens
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let (single, many) = match self {
            FoundTokens::Token(token) => (Some(token.as_str()), None),
            FoundTokens::Tokens(tokens) => (None, Some(tokens.iter().map(String::as_str))),
        };
        single.into_iter().chain(many.into_iter().flatten())
    }
}

/// One match recorded on a sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    /// List token (single-word) or full phrase (multi-word)
    pub list_entry: String,
    /// Similarity score; phrases carry none
    pub score: Option<u8>,
    /// Sentence token(s) that matched
    pub found: FoundTokens,
}

impl MatchRecord {
    fn single(list_entry: &str, score: u8, found: &str) -> Self {
        Self {
            list_entry: list_entry.to_string(),
            score: Some(score),
            found: FoundTokens::Token(found.to_string()),
        }
    }

    fn phrase(phrase: &str, found: BTreeSet<String>) -> Self {
        Self {
            list_entry: phrase.to_string(),
            score: None,
            found: FoundTokens::Tokens(found),
        }
    }
}

#[derive(Debug, Default)]
struct PhaseCounters {
    single_word: AtomicUsize,
    phrase: AtomicUsize,
}

impl PhaseCounters {
    fn advance(&self, phase: MatchPhase) -> usize {
        let counter = match phase {
            MatchPhase::SingleWord => &self.single_word,
            MatchPhase::Phrase => &self.phrase,
        };
        counter.fetch_add(1, Ordering::Relaxed) + 1
    }
}

/// Scores sentences against a phrase list
#[derive(Debug)]
pub struct FuzzyMatcher<'a> {
    phrases: &'a PhraseList,
    exclusions: &'a ExclusionList,
    // Multi-word phrases with their token columns in the similarity table
    multi_word: Vec<(&'a PhraseTokenRecord, SmallVec<[usize; 4]>)>,
    scorer: Scorer,
    threshold: u8,
    phrase_mode: PhraseMode,
}

impl<'a> FuzzyMatcher<'a> {
    /// Create a matcher for a phrase list and exclusion list
    pub fn new(phrases: &'a PhraseList, exclusions: &'a ExclusionList, config: &Config) -> Self {
        let multi_word = phrases
            .multi_word()
            .map(|record| {
                let columns = record
                    .tokens
                    .iter()
                    .filter_map(|token| phrases.token_index(token))
                    .collect();
                (record, columns)
            })
            .collect();

        Self {
            phrases,
            exclusions,
            multi_word,
            scorer: config.scorer(),
            threshold: config.threshold(),
            phrase_mode: config.phrase_mode(),
        }
    }

    /// Pass 1: build the similarity table and collect single-word matches
    pub fn score_sentence(&self, text: &str) -> (SimilarityTable, Vec<MatchRecord>) {
        let list_tokens = self.phrases.list_tokens();
        let mut table = SimilarityTable::new(list_tokens.len());
        let mut matches = Vec::new();
        let mut row = Vec::with_capacity(list_tokens.len());

        for token in sentence_tokens(text) {
            if table.contains(&token) {
                continue;
            }

            row.clear();
            row.extend(list_tokens.iter().map(|lt| self.scorer.score(&token, &lt.text)));

            if !self.exclusions.contains(&token) {
                for (list_token, &score) in list_tokens.iter().zip(&row) {
                    if list_token.single_word && score >= self.threshold {
                        matches.push(MatchRecord::single(&list_token.text, score, &token));
                    }
                }
            }

            table.insert(token, &row);
        }

        (table, matches)
    }

    /// Pass 2: resolve multi-word phrases from a sentence's similarity table
    pub fn resolve_phrases(&self, table: &SimilarityTable) -> Vec<MatchRecord> {
        let qualifying: HashSet<&str> = match self.phrase_mode {
            PhraseMode::Literal => table.qualifying(self.threshold).collect(),
            PhraseMode::Fuzzy => HashSet::new(),
        };

        self.multi_word
            .iter()
            .filter_map(|(record, columns)| {
                let found = match self.phrase_mode {
                    PhraseMode::Fuzzy => self.cover_fuzzy(table, columns),
                    PhraseMode::Literal => cover_literal(record, &qualifying),
                }?;
                Some(MatchRecord::phrase(&record.original, found))
            })
            .collect()
    }

    /// Every phrase column needs a sentence token strictly above the threshold
    fn cover_fuzzy(&self, table: &SimilarityTable, columns: &[usize]) -> Option<BTreeSet<String>> {
        let mut found = BTreeSet::new();
        for &column in columns {
            let mut covered = false;
            for token in table.covering(column, self.threshold) {
                covered = true;
                found.insert(token.to_string());
            }
            if !covered {
                return None;
            }
        }
        Some(found)
    }

    /// Run both passes on one sentence and append its matches
    fn match_sentence(
        &self,
        sentence: &mut SentenceRecord,
        total: usize,
        counters: &PhaseCounters,
        progress: &dyn ProgressSink,
    ) {
        let (table, single) = self.score_sentence(&sentence.text);
        sentence.matches.extend(single);
        progress.report(
            MatchPhase::SingleWord,
            counters.advance(MatchPhase::SingleWord),
            total,
        );

        let phrases = self.resolve_phrases(&table);
        sentence.matches.extend(phrases);
        progress.report(MatchPhase::Phrase, counters.advance(MatchPhase::Phrase), total);
    }

    /// Populate `matches` on every sentence; returns a description of the strategy used
    pub fn match_all(
        &self,
        sentences: &mut [SentenceRecord],
        mode: ExecutionMode,
        threads: Option<usize>,
        progress: &dyn ProgressSink,
    ) -> Result<String> {
        let total = sentences.len();
        let counters = PhaseCounters::default();
        progress.start(total);

        let strategy = match mode {
            ExecutionMode::Sequential => {
                for sentence in sentences.iter_mut() {
                    self.match_sentence(sentence, total, &counters, progress);
                }
                "sequential".to_string()
            }
            ExecutionMode::Parallel => {
                self.match_parallel(sentences, threads, &counters, progress)?
            }
        };

        progress.finish(MatchPhase::SingleWord);
        progress.finish(MatchPhase::Phrase);
        log::debug!(
            "matched {} sentences against {} list tokens ({strategy})",
            total,
            self.phrases.list_tokens().len()
        );
        Ok(strategy)
    }

    #[cfg(feature = "parallel")]
    fn match_parallel(
        &self,
        sentences: &mut [SentenceRecord],
        threads: Option<usize>,
        counters: &PhaseCounters,
        progress: &dyn ProgressSink,
    ) -> Result<String> {
        let total = sentences.len();
        let thread_count = threads.unwrap_or_else(num_cpus::get);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(thread_count)
            .build()
            .map_err(|e| Error::Parallel(e.to_string()))?;

        // Each sentence owns its table, so workers share nothing mutable
        pool.install(|| {
            sentences
                .par_iter_mut()
                .for_each(|sentence| self.match_sentence(sentence, total, counters, progress));
        });

        Ok(format!("parallel ({} threads)", pool.current_num_threads()))
    }

    #[cfg(not(feature = "parallel"))]
    fn match_parallel(
        &self,
        sentences: &mut [SentenceRecord],
        _threads: Option<usize>,
        counters: &PhaseCounters,
        progress: &dyn ProgressSink,
    ) -> Result<String> {
        // Fallback to sequential if parallel feature is disabled
        log::warn!("parallel feature disabled, matching sequentially");
        let total = sentences.len();
        for sentence in sentences.iter_mut() {
            self.match_sentence(sentence, total, counters, progress);
        }
        Ok("sequential".to_string())
    }
}

/// Every phrase token must itself be a qualifying sentence token
fn cover_literal(record: &PhraseTokenRecord, qualifying: &HashSet<&str>) -> Option<BTreeSet<String>> {
    record
        .tokens
        .iter()
        .all(|token| qualifying.contains(token.as_str()))
        .then(|| record.tokens.iter().cloned().collect())
}
