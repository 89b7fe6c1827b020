//! Target word lists, exclusion lists and token normalization

use crate::error::Result;
use serde::Serialize;
use smallvec::SmallVec;
use std::collections::{HashMap, HashSet};

/// Punctuation stripped from both ends of every token
pub const STRIP_CHARS: &[char] = &['.', ',', ':', ';', '(', ')', '!', '?', '\'', '"', '\\'];

/// Strip surrounding punctuation from an already lower-cased token
pub fn normalize_token(raw: &str) -> &str {
    raw.trim_matches(STRIP_CHARS)
}

/// Lower-case a sentence and split it into normalized, non-empty tokens
pub fn sentence_tokens(sentence: &str) -> Vec<String> {
    sentence
        .to_lowercase()
        .split_whitespace()
        .map(normalize_token)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Raw phrases, one per line: trimmed, lower-cased, blank lines dropped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    phrases: Vec<String>,
}

impl WordList {
    /// Parse newline-separated phrases
    pub fn parse(text: &str) -> Self {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let phrases = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_lowercase)
            .collect();
        Self { phrases }
    }

    /// Parse raw bytes, which must be UTF-8
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Self::parse(std::str::from_utf8(bytes)?))
    }

    /// The normalized phrases in list order
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// Number of phrases
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Whether the list has no phrases
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let text = iter
            .into_iter()
            .map(Into::into)
            .collect::<Vec<String>>()
            .join("\n");
        Self::parse(&text)
    }
}

/// Whether a phrase is one token or several
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhraseKind {
    /// Exactly one token
    SingleWord,
    /// Two or more tokens
    MultiWord,
}

/// A phrase from the word list with its normalized tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhraseTokenRecord {
    /// The phrase as listed (trimmed, lower-cased)
    pub original: String,
    /// Normalized tokens in phrase order
    pub tokens: SmallVec<[String; 4]>,
    /// Single- or multi-word
    pub kind: PhraseKind,
}

impl PhraseTokenRecord {
    /// Tokenize a phrase; `None` if nothing is left after stripping punctuation
    pub fn from_phrase(phrase: &str) -> Option<Self> {
        let tokens: SmallVec<[String; 4]> = phrase
            .split_whitespace()
            .map(normalize_token)
            .filter(|token| !token.is_empty())
            .map(str::to_owned)
            .collect();

        let kind = match tokens.len() {
            0 => return None,
            1 => PhraseKind::SingleWord,
            _ => PhraseKind::MultiWord,
        };

        Some(Self {
            original: phrase.to_string(),
            tokens,
            kind,
        })
    }
}

/// A distinct token drawn from the phrase list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListToken {
    /// Normalized token text
    pub text: String,
    /// Whether some single-word phrase consists of this token
    pub single_word: bool,
}

/// Tokenized target phrases, immutable once built
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhraseList {
    records: Vec<PhraseTokenRecord>,
    tokens: Vec<ListToken>,
}

impl PhraseList {
    /// Tokenize every phrase of a word list
    pub fn from_word_list(list: &WordList) -> Self {
        let mut records = Vec::with_capacity(list.len());
        for phrase in list.phrases() {
            match PhraseTokenRecord::from_phrase(phrase) {
                Some(record) => records.push(record),
                None => log::warn!("skipping phrase with no word characters: {phrase:?}"),
            }
        }

        let mut tokens: Vec<ListToken> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        for record in &records {
            let single = record.kind == PhraseKind::SingleWord;
            for token in &record.tokens {
                match index.get(token) {
                    Some(&i) => tokens[i].single_word |= single,
                    None => {
                        index.insert(token.clone(), tokens.len());
                        tokens.push(ListToken {
                            text: token.clone(),
                            single_word: single,
                        });
                    }
                }
            }
        }

        Self { records, tokens }
    }

    /// Phrase records in list order
    pub fn records(&self) -> &[PhraseTokenRecord] {
        &self.records
    }

    /// Distinct tokens across all phrases, in first-seen order
    pub fn list_tokens(&self) -> &[ListToken] {
        &self.tokens
    }

    /// Position of a token in [`Self::list_tokens`]
    pub fn token_index(&self, token: &str) -> Option<usize> {
        self.tokens.iter().position(|t| t.text == token)
    }

    /// Multi-word phrase records
    pub fn multi_word(&self) -> impl Iterator<Item = &PhraseTokenRecord> {
        self.records
            .iter()
            .filter(|record| record.kind == PhraseKind::MultiWord)
    }

    /// Number of phrases
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether there are no phrases
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Sentence tokens that never produce a single-word match
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionList {
    tokens: HashSet<String>,
}

impl ExclusionList {
    /// An empty exclusion list
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from a word list; lines with more than one word are ignored
    pub fn from_word_list(list: &WordList) -> Self {
        let mut tokens = HashSet::new();
        for phrase in list.phrases() {
            match PhraseTokenRecord::from_phrase(phrase) {
                Some(record) if record.kind == PhraseKind::SingleWord => {
                    tokens.extend(record.tokens);
                }
                Some(_) => log::warn!("exclusion list entries are single words, ignoring {phrase:?}"),
                None => {}
            }
        }
        Self { tokens }
    }

    /// Whether a normalized sentence token is excluded
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    /// Number of excluded tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether nothing is excluded
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
