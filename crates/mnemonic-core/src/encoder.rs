//! Encoding of a menu into boolean constraints.
//!
//! Three constraint families are emitted:
//! 1. Coverage: every entry has at least one mnemonic.
//! 2. Exclusivity: no entry has more than one mnemonic.
//! 3. Cross-entry exclusion: no character is the mnemonic of two entries.
//!
//! Exclusivity and cross-entry exclusion are written as one implication per
//! candidate (`c_m ⟹ ⋀_{t≠m} ¬c_t`), not as a cardinality constraint.
//!
//! Logging levels:
//! - **DEBUG**: Per-call totals of emitted formulas
//! - **TRACE**: Individual entries and character groups

use std::collections::HashMap;
use std::ops::{Add, AddAssign};

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::candidate::{
    distinct_characters, variable_name, Candidate, EntryCandidates, DEFAULT_VARIABLE_PREFIX,
};
use crate::error::{MnemonicError, Result};
use crate::session::ConstraintSession;

/// Counts of formulas appended to a constraint store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodingStats {
    /// Asserted disjunctions (one per entry).
    pub disjunctions: usize,
    /// Asserted implications (one per candidate per family).
    pub implications: usize,
    /// Characters shared by two or more entries that received exclusion.
    pub shared_characters: usize,
}

impl EncodingStats {
    /// Total number of formulas. Shared characters are not formulas.
    pub fn total(&self) -> usize {
        self.disjunctions + self.implications
    }
}

impl Add for EncodingStats {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            disjunctions: self.disjunctions + rhs.disjunctions,
            implications: self.implications + rhs.implications,
            shared_characters: self.shared_characters + rhs.shared_characters,
        }
    }
}

impl AddAssign for EncodingStats {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Candidates of one character that occurs in two or more entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterGroup<V> {
    pub character: char,
    /// One candidate per sharing entry, in menu order.
    pub candidates: Vec<Candidate<V>>,
}

/// Builds candidates and emits constraint families into a session.
#[derive(Debug, Clone)]
pub struct Encoder {
    variable_prefix: String,
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder {
    /// Creates an encoder using [`DEFAULT_VARIABLE_PREFIX`].
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_VARIABLE_PREFIX)
    }

    /// Creates an encoder naming variables `{prefix}{character}{entry}`.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            variable_prefix: prefix.into(),
        }
    }

    /// Declares one variable per distinct character of each label.
    ///
    /// Every label is validated before the first variable is declared, so an
    /// empty label leaves the session untouched.
    ///
    /// # Errors
    ///
    /// Returns [`MnemonicError::EmptyLabel`] for the first empty label.
    pub fn parse_entries<S, L>(
        &self,
        session: &mut S,
        labels: &[L],
    ) -> Result<Vec<EntryCandidates<S::Var>>>
    where
        S: ConstraintSession,
        L: AsRef<str>,
    {
        let characters: Vec<Vec<char>> = labels
            .iter()
            .map(|label| distinct_characters(label.as_ref()))
            .collect();

        if let Some(entry_index) = characters.iter().position(|chars| chars.is_empty()) {
            return Err(MnemonicError::EmptyLabel { entry_index });
        }

        let mut entries = Vec::with_capacity(labels.len());
        for (entry_index, (label, chars)) in labels.iter().zip(characters).enumerate() {
            let mut candidates = Vec::with_capacity(chars.len());
            for character in chars {
                let name = variable_name(&self.variable_prefix, character, entry_index);
                let var = session.declare_bool(&name)?;
                candidates.push(Candidate {
                    character,
                    entry_index,
                    var,
                });
            }
            entries.push(EntryCandidates {
                entry_index,
                label: label.as_ref().to_string(),
                candidates,
            });
        }
        Ok(entries)
    }

    /// Emits coverage and exclusivity for every entry.
    ///
    /// Per entry with `k` candidates this appends one disjunction and `k`
    /// implications.
    pub fn add_coverage_and_uniqueness<S>(
        &self,
        session: &mut S,
        entries: &[EntryCandidates<S::Var>],
    ) -> Result<EncodingStats>
    where
        S: ConstraintSession,
    {
        let mut stats = EncodingStats::default();
        for entry in entries {
            let vars: SmallVec<[S::Var; 16]> = entry.vars().collect();

            session.assert_or(&vars)?;
            stats.disjunctions += 1;

            stats.implications += assert_pairwise_exclusion(session, &vars)?;
            trace!(
                entry = entry.entry_index,
                candidates = vars.len(),
                "coverage and exclusivity"
            );
        }
        debug!(
            event = "encode_coverage",
            disjunctions = stats.disjunctions,
            implications = stats.implications,
        );
        Ok(stats)
    }

    /// Forbids any character from being chosen by two different entries.
    ///
    /// Characters appearing in a single entry produce no formula.
    pub fn add_cross_entry_exclusion<S>(
        &self,
        session: &mut S,
        entries: &[EntryCandidates<S::Var>],
    ) -> Result<EncodingStats>
    where
        S: ConstraintSession,
    {
        let mut stats = EncodingStats::default();
        for group in repeated_characters(entries) {
            let vars: SmallVec<[S::Var; 16]> = group.candidates.iter().map(|c| c.var).collect();
            stats.implications += assert_pairwise_exclusion(session, &vars)?;
            stats.shared_characters += 1;
            trace!(
                character = %group.character,
                entries = vars.len(),
                "cross-entry exclusion"
            );
        }
        debug!(
            event = "encode_cross_entry",
            shared_characters = stats.shared_characters,
            implications = stats.implications,
        );
        Ok(stats)
    }
}

/// Groups candidates by character, keeping only characters shared by two or
/// more entries.
///
/// Built in a single pass over the flattened candidates. Each occurrence is
/// placed in exactly one group, once, so a character shared by three entries
/// yields one group of three. Groups are ordered by first occurrence.
pub fn repeated_characters<V: Copy>(entries: &[EntryCandidates<V>]) -> Vec<CharacterGroup<V>> {
    let mut index: HashMap<char, usize> = HashMap::new();
    let mut groups: Vec<CharacterGroup<V>> = Vec::new();

    for candidate in entries.iter().flat_map(|e| e.candidates.iter()) {
        match index.get(&candidate.character) {
            Some(&slot) => groups[slot].candidates.push(*candidate),
            None => {
                index.insert(candidate.character, groups.len());
                groups.push(CharacterGroup {
                    character: candidate.character,
                    candidates: vec![*candidate],
                });
            }
        }
    }

    groups.retain(|g| g.candidates.len() >= 2);
    groups
}

// Asserts `v_m ⟹ ⋀_{t≠m} ¬v_t` for each m and returns the number asserted.
fn assert_pairwise_exclusion<S: ConstraintSession>(
    session: &mut S,
    vars: &[S::Var],
) -> Result<usize> {
    let mut others: SmallVec<[S::Var; 16]> = SmallVec::with_capacity(vars.len());
    for (m, &antecedent) in vars.iter().enumerate() {
        others.clear();
        others.extend(
            vars.iter()
                .enumerate()
                .filter(|&(t, _)| t != m)
                .map(|(_, v)| *v),
        );
        session.assert_implication(antecedent, &others)?;
    }
    Ok(vars.len())
}
