//! Solve statistics.

use std::time::{Duration, Instant};

use mnemonic_core::EncodingStats;

/// Metrics of one solve run.
///
/// # Example
///
/// ```
/// use mnemonic_solver::stats::SolveStats;
///
/// let mut stats = SolveStats::default();
/// stats.start();
/// stats.entry_count = 2;
/// stats.candidate_count = 8;
///
/// assert_eq!(stats.formula_count(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SolveStats {
    start_time: Option<Instant>,
    /// Number of menu entries.
    pub entry_count: usize,
    /// Number of candidates (one variable each).
    pub candidate_count: usize,
    /// Number of characters shared by two or more entries.
    pub shared_character_count: usize,
    /// Formulas appended to the constraint store.
    pub encoding: EncodingStats,
    /// Time spent inside the satisfiability check.
    pub check_duration: Duration,
    /// Time from start to decoded result.
    pub total_duration: Duration,
}

impl SolveStats {
    /// Marks the start of the run.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Returns the elapsed time since the run started.
    pub fn elapsed(&self) -> Duration {
        self.start_time.map(|t| t.elapsed()).unwrap_or_default()
    }

    /// Freezes `total_duration` at the current elapsed time.
    pub fn finish(&mut self) {
        self.total_duration = self.elapsed();
    }

    pub fn formula_count(&self) -> usize {
        self.encoding.total()
    }
}
