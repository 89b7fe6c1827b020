//! Progress reporting module

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::time::Duration;
use wordfind_core::{MatchPhase, ProgressSink};

const FILES_TEMPLATE: &str = "[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} files {msg}";
const PHASE_TEMPLATE: &str = "  {prefix:>20} {bar:40.green/white} {pos}/{len} sentences";

fn style(template: &str) -> ProgressStyle {
    ProgressStyle::default_bar()
        .template(template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("##-")
}

/// Progress reporter for document searches
pub struct ProgressReporter {
    multi: MultiProgress,
    files: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            multi: MultiProgress::new(),
            files: None,
            quiet,
        }
    }

    /// Initialize progress bar for document processing
    pub fn init_files(&mut self, total_files: u64) {
        if self.quiet {
            return;
        }

        let pb = self.multi.add(ProgressBar::new(total_files));
        pb.set_style(style(FILES_TEMPLATE));
        pb.enable_steady_tick(Duration::from_millis(100));

        self.files = Some(pb);
    }

    /// Bars for the two match phases of one document
    pub fn phases(&self) -> PhaseProgress {
        if self.quiet {
            return PhaseProgress::hidden();
        }

        let bar = |phase: MatchPhase| {
            let pb = self.multi.add(ProgressBar::new(0));
            pb.set_style(style(PHASE_TEMPLATE));
            pb.set_prefix(phase.label());
            pb
        };
        PhaseProgress {
            single_word: bar(MatchPhase::SingleWord),
            phrase: bar(MatchPhase::Phrase),
        }
    }

    /// Update progress for a completed document
    pub fn file_completed(&self, filename: &str) {
        if let Some(pb) = &self.files {
            pb.set_message(format!("Searched: {}", filename));
            pb.inc(1);
        }
    }

    /// Print a line to stderr without tearing the bars
    pub fn println(&self, line: &str) {
        self.multi.suspend(|| eprintln!("{line}"));
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.files {
            pb.finish_with_message("Complete");
        }
    }
}

/// Matcher progress for one document, one bar per phase
pub struct PhaseProgress {
    single_word: ProgressBar,
    phrase: ProgressBar,
}

impl PhaseProgress {
    /// Progress that draws nothing
    pub fn hidden() -> Self {
        Self {
            single_word: ProgressBar::hidden(),
            phrase: ProgressBar::hidden(),
        }
    }

    fn bar(&self, phase: MatchPhase) -> &ProgressBar {
        match phase {
            MatchPhase::SingleWord => &self.single_word,
            MatchPhase::Phrase => &self.phrase,
        }
    }
}

impl ProgressSink for PhaseProgress {
    fn start(&self, total: usize) {
        self.single_word.set_length(total as u64);
        self.phrase.set_length(total as u64);
    }

    fn report(&self, phase: MatchPhase, _completed: usize, _total: usize) {
        // Workers report out of order, so count rather than seek
        self.bar(phase).inc(1);
    }

    fn finish(&self, phase: MatchPhase) {
        self.bar(phase).finish_and_clear();
    }
}
