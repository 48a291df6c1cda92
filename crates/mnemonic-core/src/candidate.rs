//! Mnemonic candidates.
//!
//! A candidate is the decision "character `c` is the mnemonic of entry `i`".
//! Each entry contributes one candidate per distinct character of its label.

use std::collections::HashSet;

/// Prefix used for candidate variable names unless configured otherwise.
pub const DEFAULT_VARIABLE_PREFIX: &str = "U";

/// A single mnemonic decision variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Candidate<V> {
    /// The character this candidate would assign.
    pub character: char,
    /// 0-based position of the owning entry in the menu.
    pub entry_index: usize,
    /// Backend handle of the boolean variable.
    pub var: V,
}

/// All candidates of one menu entry, in first-occurrence order of the label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryCandidates<V> {
    pub entry_index: usize,
    pub label: String,
    pub candidates: Vec<Candidate<V>>,
}

impl<V: Copy> EntryCandidates<V> {
    /// Returns the variable handles of this entry in candidate order.
    pub fn vars(&self) -> impl Iterator<Item = V> + '_ {
        self.candidates.iter().map(|c| c.var)
    }

    /// Returns the candidate characters in order.
    pub fn characters(&self) -> impl Iterator<Item = char> + '_ {
        self.candidates.iter().map(|c| c.character)
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Returns the distinct characters of `label`, keeping first-occurrence order.
///
/// ```
/// use mnemonic_core::distinct_characters;
///
/// assert_eq!(distinct_characters("undo"), vec!['u', 'n', 'd', 'o']);
/// assert_eq!(distinct_characters("paste"), vec!['p', 'a', 's', 't', 'e']);
/// assert_eq!(distinct_characters("noon"), vec!['n', 'o']);
/// assert!(distinct_characters("").is_empty());
/// ```
pub fn distinct_characters(label: &str) -> Vec<char> {
    let mut seen = HashSet::new();
    label.chars().filter(|c| seen.insert(*c)).collect()
}

/// Builds the variable name for a `(character, entry_index)` pair.
///
/// The character is a single scalar value, so for a fixed prefix the name is
/// injective over pairs: the prefix is stripped, the next scalar is the
/// character and the remaining digits are the index.
pub fn variable_name(prefix: &str, character: char, entry_index: usize) -> String {
    format!("{prefix}{character}{entry_index}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_names_are_distinct_for_ambiguous_digits() {
        let a = variable_name("U", '1', 23);
        let b = variable_name("U", '2', 13);
        let c = variable_name("U", '1', 2);
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_eq!(a, "U123");
        assert_eq!(b, "U213");
    }

    #[test]
    fn test_distinct_characters_keeps_case_and_spaces() {
        assert_eq!(distinct_characters("Save As"), vec!['S', 'a', 'v', 'e', ' ', 'A', 's']);
    }

    #[test]
    fn test_distinct_characters_unicode() {
        assert_eq!(distinct_characters("ñaña"), vec!['ñ', 'a']);
    }
}
