//! Boundary to the external boolean constraint solver.
//!
//! The encoder and decoder only ever talk to a backend through
//! [`ConstraintSession`]. A session owns its constraint store; callers append
//! formulas, check once, and read a [`Model`] back after a `Sat` answer.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use thiserror::Error;

/// Answer of a satisfiability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SatStatus {
    Sat,
    Unsat,
    Unknown,
}

impl SatStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SatStatus::Sat => "sat",
            SatStatus::Unsat => "unsat",
            SatStatus::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for SatStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised by a backend session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The underlying engine reported a failure.
    #[error("solver backend error: {0}")]
    Backend(String),

    /// A model was requested without a preceding `Sat` answer.
    #[error("no model available: the last check was not satisfiable")]
    NoModel,

    /// A variable handle does not belong to this session.
    #[error("variable handle does not belong to this session")]
    UnknownVariable,
}

/// Truth values of every declared variable, as produced by one `Sat` check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model<V: Eq + Hash> {
    values: HashMap<V, bool>,
}

impl<V: Copy + Eq + Hash> Model<V> {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Records the value of `var`.
    pub fn set(&mut self, var: V, value: bool) {
        self.values.insert(var, value);
    }

    /// Returns the value of `var`, or `None` if the model does not cover it.
    pub fn value(&self, var: V) -> Option<bool> {
        self.values.get(&var).copied()
    }

    /// Returns true only if `var` is assigned true.
    pub fn is_true(&self, var: V) -> bool {
        self.value(var).unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<V: Copy + Eq + Hash> Default for Model<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Copy + Eq + Hash> FromIterator<(V, bool)> for Model<V> {
    fn from_iter<I: IntoIterator<Item = (V, bool)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// A solver session: one constraint store, checked once.
///
/// Implementations must make [`declare_bool`](Self::declare_bool) idempotent
/// per name within a session and must release every engine resource on drop.
pub trait ConstraintSession {
    /// Opaque handle of a boolean variable.
    type Var: Copy + Eq + Hash + Debug;

    /// Returns the variable named `name`, creating it on first use.
    fn declare_bool(&mut self, name: &str) -> Result<Self::Var, SessionError>;

    /// Asserts `vars[0] ∨ vars[1] ∨ …`.
    fn assert_or(&mut self, vars: &[Self::Var]) -> Result<(), SessionError>;

    /// Asserts `antecedent ⟹ ¬negated[0] ∧ ¬negated[1] ∧ …`.
    ///
    /// An empty `negated` slice asserts nothing.
    fn assert_implication(
        &mut self,
        antecedent: Self::Var,
        negated: &[Self::Var],
    ) -> Result<(), SessionError>;

    /// Decides satisfiability of everything asserted so far. Blocks until done.
    fn check_sat(&mut self) -> Result<SatStatus, SessionError>;

    /// Returns the model of the last check; only valid after [`SatStatus::Sat`].
    fn model(&self) -> Result<Model<Self::Var>, SessionError>;
}

impl<S: ConstraintSession + ?Sized> ConstraintSession for &mut S {
    type Var = S::Var;

    fn declare_bool(&mut self, name: &str) -> Result<Self::Var, SessionError> {
        (**self).declare_bool(name)
    }

    fn assert_or(&mut self, vars: &[Self::Var]) -> Result<(), SessionError> {
        (**self).assert_or(vars)
    }

    fn assert_implication(
        &mut self,
        antecedent: Self::Var,
        negated: &[Self::Var],
    ) -> Result<(), SessionError> {
        (**self).assert_implication(antecedent, negated)
    }

    fn check_sat(&mut self) -> Result<SatStatus, SessionError> {
        (**self).check_sat()
    }

    fn model(&self) -> Result<Model<Self::Var>, SessionError> {
        (**self).model()
    }
}
