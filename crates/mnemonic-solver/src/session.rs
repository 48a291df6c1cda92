//! SAT session backed by batsat through rustsat.

use std::collections::HashMap;

use mnemonic_core::{ConstraintSession, Model, SatStatus, SessionError};
use rustsat::solvers::{Solve, SolverResult};
use rustsat::types::{Clause, Lit, TernaryVal};
use rustsat_batsat::BasicSolver;
use tracing::{debug, trace};

/// A one-shot SAT session.
///
/// Owns the engine for its whole lifetime; dropping the session releases it,
/// whichever way the solve ended.
pub struct BatsatSession {
    solver: BasicSolver,
    names: HashMap<String, Lit>,
    clause_count: usize,
    last_status: Option<SatStatus>,
}

impl BatsatSession {
    pub fn new() -> Self {
        debug!(event = "session_open", backend = "batsat");
        Self {
            solver: BasicSolver::default(),
            names: HashMap::new(),
            clause_count: 0,
            last_status: None,
        }
    }

    /// Number of declared variables.
    pub fn variable_count(&self) -> usize {
        self.names.len()
    }

    /// Number of CNF clauses handed to the engine.
    pub fn clause_count(&self) -> usize {
        self.clause_count
    }

    fn add_clause(&mut self, clause: Clause) -> Result<(), SessionError> {
        self.solver
            .add_clause(clause)
            .map_err(|e| SessionError::Backend(e.to_string()))?;
        self.clause_count += 1;
        Ok(())
    }
}

impl Default for BatsatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BatsatSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatsatSession")
            .field("variables", &self.names.len())
            .field("clauses", &self.clause_count)
            .field("last_status", &self.last_status)
            .finish()
    }
}

impl ConstraintSession for BatsatSession {
    type Var = Lit;

    fn declare_bool(&mut self, name: &str) -> Result<Lit, SessionError> {
        if let Some(&lit) = self.names.get(name) {
            return Ok(lit);
        }
        let idx = u32::try_from(self.names.len())
            .map_err(|_| SessionError::Backend("variable index overflow".to_string()))?;
        let lit = Lit::positive(idx);
        self.names.insert(name.to_string(), lit);
        trace!(name, idx, "declared");
        Ok(lit)
    }

    fn assert_or(&mut self, vars: &[Lit]) -> Result<(), SessionError> {
        trace!(event = "formula", kind = "or", width = vars.len());
        self.add_clause(vars.iter().copied().collect())
    }

    fn assert_implication(&mut self, antecedent: Lit, negated: &[Lit]) -> Result<(), SessionError> {
        trace!(event = "formula", kind = "implies", width = negated.len());
        // a → ¬t  ≡  ¬a ∨ ¬t
        for &t in negated {
            self.add_clause([!antecedent, !t].into_iter().collect())?;
        }
        Ok(())
    }

    fn check_sat(&mut self) -> Result<SatStatus, SessionError> {
        let result = self
            .solver
            .solve()
            .map_err(|e| SessionError::Backend(e.to_string()))?;
        let status = match result {
            SolverResult::Sat => SatStatus::Sat,
            SolverResult::Unsat => SatStatus::Unsat,
            SolverResult::Interrupted => SatStatus::Unknown,
        };
        self.last_status = Some(status);
        Ok(status)
    }

    fn model(&self) -> Result<Model<Lit>, SessionError> {
        if self.last_status != Some(SatStatus::Sat) {
            return Err(SessionError::NoModel);
        }
        self.names
            .values()
            .map(|&lit| {
                let value = self
                    .solver
                    .lit_val(lit)
                    .map_err(|e| SessionError::Backend(e.to_string()))?;
                Ok((lit, value == TernaryVal::True))
            })
            .collect()
    }
}

impl Drop for BatsatSession {
    fn drop(&mut self) {
        debug!(
            event = "session_release",
            variables = self.names.len(),
            clauses = self.clause_count,
        );
    }
}
