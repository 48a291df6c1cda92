//! Decoding of a satisfying model into an assignment.

use std::hash::Hash;

use crate::assignment::{Assignment, Mnemonic};
use crate::candidate::EntryCandidates;
use crate::error::{MnemonicError, Result};
use crate::session::Model;

/// Reads the chosen mnemonic of every entry from `model`.
///
/// Exactly one candidate per entry must be true. Anything else means the
/// constraints were built wrong and is reported as
/// [`MnemonicError::EncodingInvariantViolation`]; no tie-break is applied.
/// Variables missing from the model read as false.
pub fn decode<V>(entries: &[EntryCandidates<V>], model: &Model<V>) -> Result<Assignment>
where
    V: Copy + Eq + Hash,
{
    let mut mnemonics = Vec::with_capacity(entries.len());
    for entry in entries {
        let mut chosen = entry.candidates.iter().filter(|c| model.is_true(c.var));
        let first = chosen.next();
        let true_count = first.map_or(0, |_| 1 + chosen.count());

        match first {
            Some(candidate) if true_count == 1 => mnemonics.push(Mnemonic {
                entry_index: entry.entry_index,
                label: entry.label.clone(),
                character: candidate.character,
            }),
            _ => {
                return Err(MnemonicError::EncodingInvariantViolation {
                    entry_index: entry.entry_index,
                    label: entry.label.clone(),
                    true_count,
                })
            }
        }
    }
    Ok(Assignment::from_mnemonics(mnemonics))
}
