//! wordfind command-line entry point

use clap::Parser;
use wordfind_cli::commands::Commands;

/// Find the sentences of a document that mention entries of a word list
#[derive(Debug, Parser)]
#[command(name = "wordfind", author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    Cli::parse().command.execute()
}
