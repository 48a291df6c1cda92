//! Mnemonic Solver - SAT-backed solve pipeline
//!
//! This crate provides:
//! - `BatsatSession`, a [`ConstraintSession`](mnemonic_core::ConstraintSession)
//!   on the batsat engine
//! - `solve_with`, the encode → check → decode pipeline for any session
//! - `MnemonicSolver`, the configured entry point (sync and async)
//! - Solve statistics

pub mod session;
pub mod solver;
pub mod stats;

#[cfg(test)]
mod test_utils;

pub use session::BatsatSession;
pub use solver::{solve_with, MnemonicSolver, SolveResult};
pub use stats::SolveStats;
