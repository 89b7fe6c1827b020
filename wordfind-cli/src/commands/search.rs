//! Search command implementation

use super::init_logging;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{create_formatter, DocumentResult, FormatOptions, OutputFormat, OutputWriter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::PathBuf;
use wordfind_core::{
    extract_events, render_markup_log, Config, ConfigBuilder, ExecutionMode, Input, PhraseMode,
    Scorer, WordFinder,
};

/// Arguments for the search command
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Documents or glob patterns to search
    #[arg(short, long, value_name = "DOCX/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Target word list, one word or phrase per line
    #[arg(short, long, value_name = "FILE")]
    pub word_list: PathBuf,

    /// Words that never count as single-word matches, one per line
    #[arg(short = 'x', long, value_name = "FILE")]
    pub exclude: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else csv)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Similarity threshold (0-100)
    #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u8).range(0..=100))]
    pub threshold: Option<u8>,

    /// Similarity scorer (see `wordfind list scorers`)
    #[arg(long, value_name = "NAME")]
    pub scorer: Option<Scorer>,

    /// Phrase resolution: fuzzy or literal
    #[arg(long, value_name = "MODE")]
    pub phrase_mode: Option<PhraseMode>,

    /// Match sentences on a thread pool
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads for parallel matching
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "WORDFIND_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write the text and page breaks seen in each document to FILE
    #[arg(long, value_name = "FILE")]
    pub dump_markup: Option<PathBuf>,

    /// Do not start CSV files with a byte order mark
    #[arg(long)]
    pub no_bom: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl SearchArgs {
    /// Execute the search command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting document search");
        log::debug!("Arguments: {:?}", self);

        let cli_config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };
        let config = self.build_config(&cli_config)?;
        let format = self.resolve_format(&cli_config)?;

        let phrases = FileReader::read_phrases(&self.word_list)?;
        let exclusions = FileReader::read_exclusions(self.exclude.as_deref())?;
        log::info!(
            "Loaded {} phrases ({} distinct tokens), {} excluded words",
            phrases.len(),
            phrases.list_tokens().len(),
            exclusions.len()
        );

        let files = resolve_patterns(&self.input)?;
        if config.execution_mode() == ExecutionMode::Parallel {
            log::info!(
                "Matching with {} worker threads",
                config.threads().unwrap_or_else(num_cpus::get)
            );
        }
        let finder =
            WordFinder::with_config(config).map_err(|e| CliError::ConfigError(e.to_string()))?;

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let mut results = Vec::with_capacity(files.len());
        let mut markup_log = String::new();

        for path in &files {
            let name = path.display().to_string();
            log::debug!("{}: {} bytes", name, FileReader::file_size(path)?);

            let xml = FileReader::read_document_xml(path)?;
            if self.dump_markup.is_some() {
                let events = extract_events(&xml)
                    .map_err(|e| CliError::SearchError(format!("{name}: {e}")))?;
                if files.len() > 1 {
                    markup_log.push_str(&format!("==> {name} <==\n"));
                }
                markup_log.push_str(&render_markup_log(&events));
                markup_log.push('\n');
            }

            let report = finder
                .search_with_progress(
                    Input::from_xml(xml),
                    &phrases,
                    &exclusions,
                    &progress.phases(),
                )
                .map_err(|e| CliError::SearchError(format!("{name}: {e}")))?;

            log::info!(
                "{}: {} sentences, {} page breaks, {} ({:?})",
                name,
                report.metadata.sentence_count,
                report.metadata.page_breaks,
                report.metadata.strategy_used,
                report.metadata.duration
            );
            if !report.outcome.has_matches() {
                progress.println(&format!("No matches found in {name}"));
            }

            progress.file_completed(&name);
            results.push(DocumentResult {
                document: name,
                outcome: report.outcome,
            });
        }
        progress.finish();

        if let Some(path) = &self.dump_markup {
            fs::write(path, markup_log)
                .with_context(|| format!("Failed to write markup log: {}", path.display()))?;
        }

        self.write_results(format, &cli_config, &results)
    }

    /// Merge the config file with command-line overrides
    fn build_config(&self, cli_config: &CliConfig) -> Result<Config> {
        let file = &cli_config.matching;
        let mut builder = ConfigBuilder::from_config(file);

        if let Some(threshold) = self.threshold {
            builder = builder.threshold(threshold);
        }
        if let Some(scorer) = self.scorer {
            builder = builder.scorer(scorer);
        }
        if let Some(mode) = self.phrase_mode {
            builder = builder.phrase_mode(mode);
        }
        if self.parallel || cli_config.performance.parallel {
            builder = builder.execution_mode(ExecutionMode::Parallel);
        }

        let configured_threads = match cli_config.performance.worker_threads {
            0 => file.threads(),
            n => Some(n),
        };
        builder = builder.threads(self.threads.or(configured_threads));

        let config = builder
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(config)
    }

    fn resolve_format(&self, cli_config: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }
        let name = &cli_config.output.default_format;
        OutputFormat::from_name(name)
            .ok_or_else(|| CliError::ConfigError(format!("unknown output format: {name}")).into())
    }

    fn write_results(
        &self,
        format: OutputFormat,
        cli_config: &CliConfig,
        results: &[DocumentResult],
    ) -> Result<()> {
        let any_matches = results.iter().any(|r| r.outcome.has_matches());
        if !any_matches && format == OutputFormat::Csv {
            if let Some(path) = &self.output {
                eprintln!("No matches found; {} was not written", path.display());
                return Ok(());
            }
        }

        let options = FormatOptions {
            include_document: results.len() > 1,
            bom: self.output.is_some() && cli_config.output.csv_bom && !self.no_bom,
            pretty: cli_config.output.pretty_json,
        };

        let writer: OutputWriter = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        let mut formatter = create_formatter(format, writer, options)?;
        for result in results {
            formatter.format_document(result)?;
        }
        formatter.finish()?;

        if let Some(path) = &self.output {
            log::info!("Results written to {}", path.display());
        }
        Ok(())
    }
}
