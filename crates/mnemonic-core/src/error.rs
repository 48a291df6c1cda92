//! Error types for mnemonic assignment

use thiserror::Error;

use crate::session::SessionError;

/// Main error type for mnemonic encoding, solving and decoding.
///
/// An unsatisfiable menu is not an error; see [`crate::SolveOutcome`].
#[derive(Debug, Error)]
pub enum MnemonicError {
    /// A menu entry has no characters to choose a mnemonic from.
    #[error("menu entry {entry_index} has an empty label")]
    EmptyLabel { entry_index: usize },

    /// The model did not select exactly one candidate for an entry.
    ///
    /// This is a defect in constraint construction, never a property of the menu.
    #[error(
        "encoding invariant violated: entry {entry_index} ({label:?}) has {true_count} true candidates, expected exactly 1"
    )]
    EncodingInvariantViolation {
        entry_index: usize,
        label: String,
        true_count: usize,
    },

    /// The solve options were rejected before anything was declared.
    #[error("{0}")]
    InvalidConfig(String),

    /// The backend could not decide satisfiability.
    #[error("solver returned unknown for a finite propositional instance")]
    SolverUnknown,

    /// The backend failed while building or checking the instance.
    #[error("solver session error: {0}")]
    Session(#[from] SessionError),
}

/// Result type alias for mnemonic operations
pub type Result<T> = std::result::Result<T, MnemonicError>;
