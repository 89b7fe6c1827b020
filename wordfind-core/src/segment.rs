//! Sentence segmentation with page tracking
//!
//! The annotated text is split on paragraph sentinels. Each paragraph segment
//! may move the running page forward, is stripped of sentinels, and is cut
//! into candidate sentences on periods that are not preceded by a digit and
//! are followed by whitespace or the end of the segment. Short candidates are
//! folded into the sentence still being built instead of standing alone.

use crate::config::defaults;
use crate::linearize::{AnnotatedText, PAGE_BREAK_PREFIX, PARAGRAPH_MARKER};
use crate::matcher::MatchRecord;
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

fn page_break_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(&format!(r"{}(\d+)\]", regex::escape(PAGE_BREAK_PREFIX)))
            .expect("page break pattern is a valid regex")
    })
}

/// A sentence unit of the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentenceRecord {
    /// Dense 1-based id in order of appearance
    pub id: usize,
    /// Trimmed sentence text
    pub text: String,
    /// Page in force when the sentence was closed
    pub page: u32,
    /// Matches appended by the matcher, never reordered
    pub matches: Vec<MatchRecord>,
}

impl SentenceRecord {
    fn new(id: usize, text: String, page: u32) -> Self {
        Self {
            id,
            text,
            page,
            matches: Vec::new(),
        }
    }

    /// Whether the matcher recorded anything for this sentence
    pub fn has_matches(&self) -> bool {
        !self.matches.is_empty()
    }
}

/// Running page number, advanced by page-break sentinels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTracker {
    current: u32,
}

impl Default for PageTracker {
    fn default() -> Self {
        Self { current: 1 }
    }
}

impl PageTracker {
    /// Current page
    pub fn current(&self) -> u32 {
        self.current
    }

    /// Advance past the first page-break sentinel in `segment`, if any
    ///
    /// Sentinel `n` moves the page to `n + 1`. The page never moves backwards.
    pub fn observe(&mut self, segment: &str) -> u32 {
        let marker = page_break_pattern()
            .captures(segment)
            .and_then(|caps| caps[1].parse::<u32>().ok());

        if let Some(n) = marker {
            self.current = self.current.max(n.saturating_add(1));
        }
        self.current
    }
}

/// Remove sentinels and line breaks from a paragraph segment
pub fn clean_segment(segment: &str) -> String {
    page_break_pattern()
        .replace_all(segment, "")
        .replace(PARAGRAPH_MARKER, "")
        .replace('\n', "")
}

/// Split prose on periods that end a sentence
///
/// A period splits when it is not preceded by a numeric character and is
/// followed by whitespace or the end of the text, so decimals and numbered
/// list markers stay intact. The period itself is dropped.
pub fn split_candidates(text: &str) -> Vec<&str> {
    let mut candidates = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if c == '.'
            && !prev.is_some_and(char::is_numeric)
            && chars.peek().map_or(true, |&(_, next)| next.is_whitespace())
        {
            candidates.push(&text[start..i]);
            start = i + c.len_utf8();
        }
        prev = Some(c);
    }
    candidates.push(&text[start..]);

    candidates
}

/// Accumulates candidates into sentence records
#[derive(Debug)]
struct SentenceBuilder {
    min_tokens: usize,
    records: Vec<SentenceRecord>,
    pending: String,
}

impl SentenceBuilder {
    fn new(min_tokens: usize) -> Self {
        Self {
            min_tokens,
            records: Vec::new(),
            pending: String::new(),
        }
    }

    fn push(&mut self, candidate: &str, page: u32) {
        let candidate = candidate.trim();
        if candidate.is_empty() {
            return;
        }

        if candidate.split_whitespace().count() < self.min_tokens && !self.pending.is_empty() {
            self.pending.push(' ');
            self.pending.push_str(candidate);
        } else {
            self.close(page);
            self.pending.push_str(candidate);
        }
    }

    fn close(&mut self, page: u32) {
        if self.pending.is_empty() {
            return;
        }
        let id = self.records.len() + 1;
        let text = std::mem::take(&mut self.pending);
        self.records.push(SentenceRecord::new(id, text, page));
    }

    fn finish(mut self, page: u32) -> Vec<SentenceRecord> {
        self.close(page);
        self.records
    }
}

/// Splits annotated text into sentence records
#[derive(Debug, Clone)]
pub struct Segmenter {
    min_tokens: usize,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new(defaults::MIN_SENTENCE_TOKENS)
    }
}

impl Segmenter {
    /// Create a segmenter; candidates below `min_tokens` merge into the pending sentence
    pub fn new(min_tokens: usize) -> Self {
        Self {
            min_tokens: min_tokens.max(1),
        }
    }

    /// Segment annotated text into ordered sentence records
    pub fn segment(&self, text: &AnnotatedText) -> Vec<SentenceRecord> {
        let mut pages = PageTracker::default();
        let mut builder = SentenceBuilder::new(self.min_tokens);

        for segment in text.as_str().split(PARAGRAPH_MARKER) {
            let page = pages.observe(segment);
            let prose = clean_segment(segment);
            if prose.trim().is_empty() {
                continue;
            }
            for candidate in split_candidates(&prose) {
                builder.push(candidate, page);
            }
        }

        let records = builder.finish(pages.current());
        log::debug!(
            "segmented {} sentences across {} page(s)",
            records.len(),
            pages.current()
        );
        records
    }
}
