//! Test utilities for mnemonic-core
//!
//! Provides an in-memory session that decides tiny instances by enumeration,
//! so encoder and decoder tests do not need a real SAT backend.

use std::collections::HashMap;

use crate::session::{ConstraintSession, Model, SatStatus, SessionError};

/// Largest instance `ExhaustiveSession` will enumerate.
const MAX_VARS: usize = 20;

// (variable, polarity)
type Lit = (u32, bool);

/// A session that stores clauses and checks them by trying every assignment.
#[derive(Debug, Default)]
pub struct ExhaustiveSession {
    names: HashMap<String, u32>,
    clauses: Vec<Vec<Lit>>,
    pub disjunctions: usize,
    pub implications: usize,
    model: Option<Vec<bool>>,
    /// When set, `check_sat` answers this instead of searching.
    pub forced_status: Option<SatStatus>,
}

impl ExhaustiveSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variable_count(&self) -> usize {
        self.names.len()
    }

    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// Returns the handle of a previously declared name.
    pub fn var(&self, name: &str) -> Option<u32> {
        self.names.get(name).copied()
    }

    /// Returns a model with exactly the named variables set true.
    pub fn model_with_true(&self, names: &[&str]) -> Model<u32> {
        self.names
            .iter()
            .map(|(name, &var)| (var, names.contains(&name.as_str())))
            .collect()
    }

    fn satisfies(&self, values: &[bool]) -> bool {
        self.clauses.iter().all(|clause| {
            clause
                .iter()
                .any(|&(var, polarity)| values[var as usize] == polarity)
        })
    }
}

impl ConstraintSession for ExhaustiveSession {
    type Var = u32;

    fn declare_bool(&mut self, name: &str) -> Result<u32, SessionError> {
        let next = self.names.len() as u32;
        Ok(*self.names.entry(name.to_string()).or_insert(next))
    }

    fn assert_or(&mut self, vars: &[u32]) -> Result<(), SessionError> {
        self.clauses.push(vars.iter().map(|&v| (v, true)).collect());
        self.disjunctions += 1;
        Ok(())
    }

    fn assert_implication(&mut self, antecedent: u32, negated: &[u32]) -> Result<(), SessionError> {
        for &t in negated {
            self.clauses.push(vec![(antecedent, false), (t, false)]);
        }
        self.implications += 1;
        Ok(())
    }

    fn check_sat(&mut self) -> Result<SatStatus, SessionError> {
        if let Some(status) = self.forced_status {
            return Ok(status);
        }
        let n = self.names.len();
        if n > MAX_VARS {
            return Err(SessionError::Backend(format!(
                "{n} variables is too many for exhaustive search"
            )));
        }
        for bits in 0u32..(1u32 << n) {
            let values: Vec<bool> = (0..n).map(|i| bits & (1 << i) != 0).collect();
            if self.satisfies(&values) {
                self.model = Some(values);
                return Ok(SatStatus::Sat);
            }
        }
        self.model = None;
        Ok(SatStatus::Unsat)
    }

    fn model(&self) -> Result<Model<u32>, SessionError> {
        let values = self.model.as_ref().ok_or(SessionError::NoModel)?;
        Ok(values
            .iter()
            .enumerate()
            .map(|(i, &v)| (i as u32, v))
            .collect())
    }
}
