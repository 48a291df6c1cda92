//! Mnemonic - keyboard mnemonic assignment as boolean satisfiability
//!
//! Every menu entry gets exactly one mnemonic character drawn from its own
//! label, and no character is shared by two entries.
//!
//! # Example
//!
//! ```rust
//! use mnemonic::prelude::*;
//!
//! let solver = MnemonicSolver::default();
//! let result = solver.solve(&["cut", "copy", "cost"]).unwrap();
//!
//! match result.outcome {
//!     SolveOutcome::Assigned(assignment) => assert_eq!(assignment.len(), 3),
//!     SolveOutcome::Unsatisfiable => unreachable!(),
//! }
//! ```

pub mod cli;
pub mod report;

// Core types
pub use mnemonic_core::{
    decode, distinct_characters, variable_name, Assignment, Candidate, ConstraintSession,
    Encoder, EncodingStats, EntryCandidates, Formula, Mnemonic, MnemonicError, Model,
    RecordingSession, SatStatus, SessionError, SolveOutcome,
};

// Configuration
pub use mnemonic_config::{ConfigError, MnemonicConfig, OutputFormat};

// Solver
pub use mnemonic_solver::{solve_with, BatsatSession, MnemonicSolver, SolveResult, SolveStats};

#[cfg(feature = "console")]
pub use mnemonic_console as console;

pub mod prelude {
    pub use super::{
        Assignment, MnemonicConfig, MnemonicError, MnemonicSolver, SolveOutcome, SolveResult,
    };
}
