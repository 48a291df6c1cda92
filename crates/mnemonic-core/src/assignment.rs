//! Decoded mnemonic assignments.

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// The mnemonic chosen for one menu entry.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Mnemonic {
    pub entry_index: usize,
    pub label: String,
    pub character: char,
}

/// One mnemonic per entry, in menu order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Assignment {
    mnemonics: Vec<Mnemonic>,
}

impl Assignment {
    pub(crate) fn from_mnemonics(mnemonics: Vec<Mnemonic>) -> Self {
        Self { mnemonics }
    }

    /// Returns the mnemonic character of `entry_index`.
    pub fn get(&self, entry_index: usize) -> Option<char> {
        self.mnemonics.get(entry_index).map(|m| m.character)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Mnemonic> {
        self.mnemonics.iter()
    }

    /// Returns `(label, character)` pairs in menu order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, char)> + '_ {
        self.mnemonics.iter().map(|m| (m.label.as_str(), m.character))
    }

    pub fn len(&self) -> usize {
        self.mnemonics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mnemonics.is_empty()
    }
}

impl<'a> IntoIterator for &'a Assignment {
    type Item = &'a Mnemonic;
    type IntoIter = std::slice::Iter<'a, Mnemonic>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for m in &self.mnemonics {
            writeln!(f, "{} [{}]", m.label, m.character)?;
        }
        Ok(())
    }
}

/// Terminal result of solving one menu.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "status", content = "mnemonics", rename_all = "snake_case"))]
pub enum SolveOutcome {
    /// Every entry received a distinct mnemonic.
    Assigned(Assignment),
    /// No assignment satisfies the constraints.
    Unsatisfiable,
}

impl SolveOutcome {
    pub fn is_satisfiable(&self) -> bool {
        matches!(self, SolveOutcome::Assigned(_))
    }

    pub fn assignment(&self) -> Option<&Assignment> {
        match self {
            SolveOutcome::Assigned(a) => Some(a),
            SolveOutcome::Unsatisfiable => None,
        }
    }

    pub fn into_assignment(self) -> Option<Assignment> {
        match self {
            SolveOutcome::Assigned(a) => Some(a),
            SolveOutcome::Unsatisfiable => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Assignment {
        Assignment::from_mnemonics(vec![
            Mnemonic {
                entry_index: 0,
                label: "undo".into(),
                character: 'u',
            },
            Mnemonic {
                entry_index: 1,
                label: "copy".into(),
                character: 'c',
            },
        ])
    }

    #[test]
    fn test_display_lists_label_and_mnemonic() {
        assert_eq!(sample().to_string(), "undo [u]\ncopy [c]\n");
    }

    #[test]
    fn test_lookup() {
        let a = sample();
        assert_eq!(a.get(1), Some('c'));
        assert_eq!(a.get(2), None);
        assert_eq!(a.pairs().collect::<Vec<_>>(), vec![("undo", 'u'), ("copy", 'c')]);
    }

    #[test]
    fn test_outcome_accessors() {
        let sat = SolveOutcome::Assigned(sample());
        assert!(sat.is_satisfiable());
        assert_eq!(sat.assignment().map(Assignment::len), Some(2));
        assert!(!SolveOutcome::Unsatisfiable.is_satisfiable());
        assert!(SolveOutcome::Unsatisfiable.into_assignment().is_none());
    }
}
