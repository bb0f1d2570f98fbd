//! Domain model types used throughout gitmirror.

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Repository pair
// ---------------------------------------------------------------------------

/// One source→target mirror entry from the repository list.
///
/// `source` and `target` are `host/path` locations without a scheme.
/// Identity is positional (list order = processing order); `id` is
/// informational and only used for logging.
#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryPair {
    pub id: i64,
    pub source: String,
    pub target: String,
}

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// Per-pair result of a successful sync attempt.
///
/// Failures are the `Err` arm of the engine's `Result`; `UpToDate` is the
/// recognized non-error outcome when source and target already match on
/// every branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// At least one branch on the target was rewritten.
    Synced,
    /// Every branch already matched; nothing was pushed.
    UpToDate,
}

impl std::fmt::Display for SyncOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Synced => write!(f, "synced"),
            Self::UpToDate => write!(f, "up_to_date"),
        }
    }
}

/// Aggregate counts for a full run over the repository list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub synced: usize,
    pub up_to_date: usize,
}

impl RunSummary {
    /// Total number of pairs processed.
    pub fn total(&self) -> usize {
        self.synced + self.up_to_date
    }

    pub(crate) fn record(&mut self, outcome: SyncOutcome) {
        match outcome {
            SyncOutcome::Synced => self.synced += 1,
            SyncOutcome::UpToDate => self.up_to_date += 1,
        }
    }
}
