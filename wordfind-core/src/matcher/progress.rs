//! Progress notifications from the matcher

use std::fmt;

/// Matcher phase a notification refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchPhase {
    /// Pass 1: scoring sentence tokens against list tokens
    SingleWord,
    /// Pass 2: resolving multi-word phrases
    Phrase,
}

impl MatchPhase {
    /// Short label for display
    pub fn label(&self) -> &'static str {
        match self {
            MatchPhase::SingleWord => "single word matches",
            MatchPhase::Phrase => "phrase matches",
        }
    }
}

impl fmt::Display for MatchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Best-effort receiver of matcher progress
///
/// Calls may arrive from several worker threads and out of order; cadence is
/// not part of the result.
pub trait ProgressSink: Send + Sync {
    /// Called before any sentence is scored
    fn start(&self, _total: usize) {}

    /// `completed` of `total` sentences have finished `phase`
    fn report(&self, phase: MatchPhase, completed: usize, total: usize);

    /// Every sentence has finished `phase`
    fn finish(&self, _phase: MatchPhase) {}
}

/// Discards all notifications
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn report(&self, _phase: MatchPhase, _completed: usize, _total: usize) {}
}
