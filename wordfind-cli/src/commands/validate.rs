//! Validate command implementation

use crate::input::FileReader;
use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use wordfind_core::{ExclusionList, PhraseKind, PhraseList, PhraseTokenRecord};

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Target word list to check
    #[arg(short, long, value_name = "FILE")]
    pub word_list: PathBuf,

    /// Exclusion list to check
    #[arg(short = 'x', long, value_name = "FILE")]
    pub exclude: Option<PathBuf>,

    /// Print the tokenization as JSON
    #[arg(long)]
    pub json: bool,
}

/// How a word list and exclusion list tokenize
#[derive(Debug, Serialize)]
pub struct ListSummary<'a> {
    /// Every phrase with its tokens and kind
    pub phrases: &'a [PhraseTokenRecord],
    /// Single-word phrase count
    pub single_word: usize,
    /// Multi-word phrase count
    pub multi_word: usize,
    /// Distinct tokens scored against each sentence token
    pub list_tokens: Vec<&'a str>,
    /// Excluded word count
    pub excluded: usize,
}

impl<'a> ListSummary<'a> {
    /// Summarize tokenized lists
    pub fn new(phrases: &'a PhraseList, exclusions: &ExclusionList) -> Self {
        let multi_word = phrases.multi_word().count();
        Self {
            phrases: phrases.records(),
            single_word: phrases.len() - multi_word,
            multi_word,
            list_tokens: phrases
                .list_tokens()
                .iter()
                .map(|token| token.text.as_str())
                .collect(),
            excluded: exclusions.len(),
        }
    }

    /// Human-readable report
    pub fn render(&self) -> String {
        let mut report = String::new();
        for record in self.phrases {
            let kind = match record.kind {
                PhraseKind::SingleWord => "single",
                PhraseKind::MultiWord => "multi ",
            };
            report.push_str(&format!(
                "  [{kind}] {} -> {}\n",
                record.original,
                record.tokens.join(" + ")
            ));
        }
        report.push_str(&format!(
            "{} phrases ({} single-word, {} multi-word), {} distinct tokens, {} excluded words\n",
            self.phrases.len(),
            self.single_word,
            self.multi_word,
            self.list_tokens.len(),
            self.excluded
        ));
        report
    }
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        let phrases = FileReader::read_phrases(&self.word_list)?;
        let exclusions = FileReader::read_exclusions(self.exclude.as_deref())?;
        let summary = ListSummary::new(&phrases, &exclusions);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            println!("Word list: {}", self.word_list.display());
            print!("{}", summary.render());
            println!("✓ Word list is valid!");
        }
        Ok(())
    }
}
