//! Solve pipeline: encode, check once, decode.
//!
//! Logging levels:
//! - **INFO**: Solve start/end and the satisfiability answer
//! - **DEBUG**: Encoding totals, session open/release
//! - **TRACE**: Individual variables and formulas

use std::time::Instant;

use mnemonic_config::MnemonicConfig;
use mnemonic_core::{
    decode, ConstraintSession, Encoder, EntryCandidates, Formula, MnemonicError, RecordingSession,
    Result, SatStatus, SessionError, SolveOutcome,
};
use tracing::{debug, info};

use crate::session::BatsatSession;
use crate::stats::SolveStats;

/// Result of one solve run.
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub outcome: SolveOutcome,
    pub stats: SolveStats,
}

/// Runs the whole pipeline on `session`, consuming it.
///
/// The session is dropped before this function returns, on success and on
/// every error path alike. The check is issued exactly once and never retried.
///
/// # Errors
///
/// - [`MnemonicError::InvalidConfig`] if `config` fails validation, before
///   anything is declared
/// - [`MnemonicError::EmptyLabel`] before anything is declared
/// - [`MnemonicError::SolverUnknown`] if the backend cannot decide
/// - [`MnemonicError::EncodingInvariantViolation`] if the model is malformed
/// - [`MnemonicError::Session`] on backend failure
pub fn solve_with<S, L>(mut session: S, labels: &[L], config: &MnemonicConfig) -> Result<SolveResult>
where
    S: ConstraintSession,
    L: AsRef<str>,
{
    config
        .validate()
        .map_err(|e| MnemonicError::InvalidConfig(e.to_string()))?;

    let mut stats = SolveStats::default();
    stats.start();
    info!(
        event = "solve_start",
        entry_count = labels.len() as u64,
        cross_entry = config.enforce_cross_entry_uniqueness,
    );

    let encoder = Encoder::with_prefix(config.variable_prefix.as_str());
    let entries = encoder.parse_entries(&mut session, labels)?;
    stats.entry_count = entries.len();
    stats.candidate_count = entries.iter().map(EntryCandidates::len).sum();

    stats.encoding = encoder.add_coverage_and_uniqueness(&mut session, &entries)?;
    if config.enforce_cross_entry_uniqueness {
        stats.encoding += encoder.add_cross_entry_exclusion(&mut session, &entries)?;
    }
    stats.shared_character_count = stats.encoding.shared_characters;
    debug!(
        event = "encode_end",
        candidate_count = stats.candidate_count as u64,
        shared_count = stats.shared_character_count as u64,
        disjunctions = stats.encoding.disjunctions as u64,
        implications = stats.encoding.implications as u64,
    );

    let check_start = Instant::now();
    let status = session.check_sat()?;
    stats.check_duration = check_start.elapsed();
    info!(
        event = "check_end",
        status = status.as_str(),
        duration_ms = stats.check_duration.as_millis() as u64,
    );

    let outcome = match status {
        SatStatus::Sat => SolveOutcome::Assigned(decode(&entries, &session.model()?)?),
        SatStatus::Unsat => SolveOutcome::Unsatisfiable,
        SatStatus::Unknown => return Err(MnemonicError::SolverUnknown),
    };

    stats.finish();
    info!(
        event = "solve_end",
        status = if outcome.is_satisfiable() { "assigned" } else { "unsatisfiable" },
        entry_count = stats.entry_count as u64,
        duration_ms = stats.total_duration.as_millis() as u64,
    );
    Ok(SolveResult { outcome, stats })
}

/// Solves menus with the batsat backend under one configuration.
///
/// # Example
///
/// ```
/// use mnemonic_config::MnemonicConfig;
/// use mnemonic_solver::MnemonicSolver;
///
/// let solver = MnemonicSolver::new(MnemonicConfig::default());
/// let result = solver.solve(&["undo", "copy"]).unwrap();
/// let assignment = result.outcome.assignment().unwrap();
///
/// assert_ne!(assignment.get(0), assignment.get(1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MnemonicSolver {
    config: MnemonicConfig,
}

impl MnemonicSolver {
    pub fn new(config: MnemonicConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MnemonicConfig {
        &self.config
    }

    /// Solves `labels` in a fresh session.
    pub fn solve<L: AsRef<str>>(&self, labels: &[L]) -> Result<SolveResult> {
        solve_with(BatsatSession::new(), labels, &self.config)
    }

    /// Solves the entries listed in the configuration.
    pub fn solve_configured(&self) -> Result<SolveResult> {
        self.solve(self.config.entries.as_slice())
    }

    /// Solves `labels` and also returns every formula that was asserted.
    pub fn explain<L: AsRef<str>>(&self, labels: &[L]) -> Result<(SolveResult, Vec<Formula>)> {
        let mut session = RecordingSession::new(BatsatSession::new());
        let result = solve_with(&mut session, labels, &self.config)?;
        Ok((result, session.formulas().to_vec()))
    }

    /// Runs [`solve`](Self::solve) on tokio's blocking pool.
    ///
    /// Awaited once; there is no timeout and no cancellation.
    pub async fn solve_async(&self, labels: Vec<String>) -> Result<SolveResult> {
        let solver = self.clone();
        run_blocking(move || solver.solve(labels.as_slice())).await
    }

    /// Runs [`explain`](Self::explain) on tokio's blocking pool.
    pub async fn explain_async(&self, labels: Vec<String>) -> Result<(SolveResult, Vec<Formula>)> {
        let solver = self.clone();
        run_blocking(move || solver.explain(labels.as_slice())).await
    }
}

async fn run_blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    match tokio::task::spawn_blocking(f).await {
        Ok(result) => result,
        Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
        Err(e) => Err(SessionError::Backend(e.to_string()).into()),
    }
}
