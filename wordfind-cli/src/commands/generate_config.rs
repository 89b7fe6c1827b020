//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use wordfind_core::config::defaults;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, Self::template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Use it for searching:");
        println!(
            "   wordfind search -i report.docx -w words.txt -c {}",
            self.output.display()
        );

        Ok(())
    }

    /// Template configuration content
    fn template() -> String {
        format!(
            r#"# wordfind configuration

[matching]
# Similarity threshold (0-100). Single words match at or above it,
# phrase words must score strictly above it.
threshold = {threshold}

# Token similarity: "ratio", "levenshtein" or "jaro-winkler"
scorer = "ratio"

# Phrase resolution: "fuzzy" accepts close variants of each phrase word,
# "literal" needs every phrase word to appear as written
phrase_mode = "fuzzy"

# Sentences with fewer words are joined to the sentence before them
min_sentence_tokens = {min_tokens}

[output]
# Default format when -f is not given: "csv", "json", "markdown" or "text"
default_format = "csv"

# Start CSV files with a UTF-8 byte order mark (helps spreadsheet imports)
csv_bom = true

# Pretty print JSON output
pretty_json = true

[performance]
# Match sentences on a thread pool
parallel = false

# Number of worker threads (0 = one per CPU)
worker_threads = 0
"#,
            threshold = defaults::THRESHOLD,
            min_tokens = defaults::MIN_SENTENCE_TOKENS,
        )
    }
}
