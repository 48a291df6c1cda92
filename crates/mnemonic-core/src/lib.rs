//! Mnemonic Core - Keyboard mnemonic assignment as boolean satisfiability
//!
//! This crate provides the solver-independent half of the mnemonic pipeline:
//! - Candidate types: one boolean decision per distinct label character
//! - The session trait every SAT/SMT backend implements
//! - The encoder emitting coverage, exclusivity and cross-entry constraints
//! - The decoder turning a satisfying model back into an assignment
//!
//! # Example
//!
//! ```
//! use mnemonic_core::{distinct_characters, variable_name};
//!
//! assert_eq!(distinct_characters("cocoa"), vec!['c', 'o', 'a']);
//! assert_eq!(variable_name("U", 'o', 1), "Uo1");
//! ```

pub mod assignment;
pub mod candidate;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod recording;
pub mod session;

#[cfg(test)]
mod encoder_tests;
#[cfg(test)]
mod test_utils;

pub use assignment::{Assignment, Mnemonic, SolveOutcome};
pub use candidate::{
    distinct_characters, variable_name, Candidate, EntryCandidates, DEFAULT_VARIABLE_PREFIX,
};
pub use decoder::decode;
pub use encoder::{repeated_characters, CharacterGroup, Encoder, EncodingStats};
pub use error::{MnemonicError, Result};
pub use recording::{Formula, RecordingSession};
pub use session::{ConstraintSession, Model, SatStatus, SessionError};
