//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use wordfind_core::Scorer;

pub mod generate_config;
pub mod search;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search documents for sentences matching a word list
    Search(search::SearchArgs),

    /// Check how a word list and exclusion list tokenize
    Validate(validate::ValidateArgs),

    /// Write a commented configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List available similarity scorers
    Scorers,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Search(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                print!("{}", subcommand.render());
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Listing text for the subcommand
    pub fn render(&self) -> String {
        let mut listing = String::new();
        match self {
            ListCommands::Formats => {
                listing.push_str("Available output formats:\n");
                for format in crate::output::OutputFormat::ALL {
                    listing.push_str(&format!(
                        "  {:<10} {}\n",
                        format.as_str(),
                        format.description()
                    ));
                }
            }
            ListCommands::Scorers => {
                listing.push_str("Available similarity scorers:\n");
                for scorer in Scorer::ALL {
                    listing.push_str(&format!(
                        "  {:<14} {}\n",
                        scorer.as_str(),
                        scorer.description()
                    ));
                }
            }
        }
        listing
    }
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init();
    }
}
