//! Session decorator that records every asserted formula.

use std::collections::HashMap;
use std::fmt;

use crate::session::{ConstraintSession, Model, SatStatus, SessionError};

/// A formula as it was asserted, with variables referred to by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Formula {
    /// `a ∨ b ∨ …`
    Or(Vec<String>),
    /// `a → ¬b ∧ ¬c ∧ …`
    Implies {
        antecedent: String,
        negated: Vec<String>,
    },
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::Or(vars) => write!(f, "{}", vars.join(" ∨ ")),
            Formula::Implies {
                antecedent,
                negated,
            } => {
                if negated.is_empty() {
                    return write!(f, "{antecedent} → ⊤");
                }
                let rhs: Vec<String> = negated.iter().map(|v| format!("¬{v}")).collect();
                write!(f, "{antecedent} → {}", rhs.join(" ∧ "))
            }
        }
    }
}

/// Forwards to an inner session and keeps a log of asserted formulas.
///
/// ```
/// # use mnemonic_core::*;
/// # use std::collections::HashMap;
/// # struct Null(HashMap<String, u32>);
/// # impl ConstraintSession for Null {
/// #     type Var = u32;
/// #     fn declare_bool(&mut self, name: &str) -> std::result::Result<u32, SessionError> {
/// #         let next = self.0.len() as u32;
/// #         Ok(*self.0.entry(name.to_string()).or_insert(next))
/// #     }
/// #     fn assert_or(&mut self, _: &[u32]) -> std::result::Result<(), SessionError> { Ok(()) }
/// #     fn assert_implication(&mut self, _: u32, _: &[u32]) -> std::result::Result<(), SessionError> { Ok(()) }
/// #     fn check_sat(&mut self) -> std::result::Result<SatStatus, SessionError> { Ok(SatStatus::Unknown) }
/// #     fn model(&self) -> std::result::Result<Model<u32>, SessionError> { Err(SessionError::NoModel) }
/// # }
/// let mut session = RecordingSession::new(Null(HashMap::new()));
/// let encoder = Encoder::new();
/// let entries = encoder.parse_entries(&mut session, &["ok"]).unwrap();
/// encoder.add_coverage_and_uniqueness(&mut session, &entries).unwrap();
///
/// let lines: Vec<String> = session.formulas().iter().map(|f| f.to_string()).collect();
/// assert_eq!(lines, ["Uo0 ∨ Uk0", "Uo0 → ¬Uk0", "Uk0 → ¬Uo0"]);
/// ```
#[derive(Debug)]
pub struct RecordingSession<S: ConstraintSession> {
    inner: S,
    names: HashMap<S::Var, String>,
    formulas: Vec<Formula>,
}

impl<S: ConstraintSession> RecordingSession<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            names: HashMap::new(),
            formulas: Vec::new(),
        }
    }

    /// Returns the formulas asserted so far, in insertion order.
    pub fn formulas(&self) -> &[Formula] {
        &self.formulas
    }

    /// Returns the number of distinct variables declared.
    pub fn variable_count(&self) -> usize {
        self.names.len()
    }

    fn name_of(&self, var: S::Var) -> Result<String, SessionError> {
        self.names
            .get(&var)
            .cloned()
            .ok_or(SessionError::UnknownVariable)
    }

    fn names_of(&self, vars: &[S::Var]) -> Result<Vec<String>, SessionError> {
        vars.iter().map(|v| self.name_of(*v)).collect()
    }
}

impl<S: ConstraintSession> ConstraintSession for RecordingSession<S> {
    type Var = S::Var;

    fn declare_bool(&mut self, name: &str) -> Result<Self::Var, SessionError> {
        let var = self.inner.declare_bool(name)?;
        self.names.entry(var).or_insert_with(|| name.to_string());
        Ok(var)
    }

    fn assert_or(&mut self, vars: &[Self::Var]) -> Result<(), SessionError> {
        let formula = Formula::Or(self.names_of(vars)?);
        self.inner.assert_or(vars)?;
        self.formulas.push(formula);
        Ok(())
    }

    fn assert_implication(
        &mut self,
        antecedent: Self::Var,
        negated: &[Self::Var],
    ) -> Result<(), SessionError> {
        let formula = Formula::Implies {
            antecedent: self.name_of(antecedent)?,
            negated: self.names_of(negated)?,
        };
        self.inner.assert_implication(antecedent, negated)?;
        self.formulas.push(formula);
        Ok(())
    }

    fn check_sat(&mut self) -> Result<SatStatus, SessionError> {
        self.inner.check_sat()
    }

    fn model(&self) -> Result<Model<Self::Var>, SessionError> {
        self.inner.model()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formula_display() {
        let or = Formula::Or(vec!["Uu0".into(), "Un0".into()]);
        assert_eq!(or.to_string(), "Uu0 ∨ Un0");

        let implies = Formula::Implies {
            antecedent: "Uo1".into(),
            negated: vec!["Uo2".into(), "Uo3".into()],
        };
        assert_eq!(implies.to_string(), "Uo1 → ¬Uo2 ∧ ¬Uo3");

        let trivial = Formula::Implies {
            antecedent: "Ua0".into(),
            negated: vec![],
        };
        assert_eq!(trivial.to_string(), "Ua0 → ⊤");
    }
}
