//! Tests for the constraint encoder

use super::*;
use crate::test_utils::ExhaustiveSession;

fn characters(entry: &EntryCandidates<u32>) -> String {
    entry.characters().collect()
}

fn solve(labels: &[&str], cross_entry: bool) -> Result<SolveOutcome> {
    let mut session = ExhaustiveSession::new();
    let encoder = Encoder::new();
    let entries = encoder.parse_entries(&mut session, labels)?;
    encoder.add_coverage_and_uniqueness(&mut session, &entries)?;
    if cross_entry {
        encoder.add_cross_entry_exclusion(&mut session, &entries)?;
    }
    match session.check_sat()? {
        SatStatus::Sat => Ok(SolveOutcome::Assigned(decode(&entries, &session.model()?)?)),
        SatStatus::Unsat => Ok(SolveOutcome::Unsatisfiable),
        SatStatus::Unknown => Err(MnemonicError::SolverUnknown),
    }
}

fn assert_valid(labels: &[&str], assignment: &Assignment) {
    assert_eq!(assignment.len(), labels.len());
    let mut used = Vec::new();
    for (i, label) in labels.iter().enumerate() {
        let c = assignment.get(i).unwrap();
        assert!(label.contains(c), "{c:?} not in {label:?}");
        assert!(!used.contains(&c), "{c:?} chosen twice");
        used.push(c);
    }
}

#[test]
fn test_parse_entries_builds_one_candidate_per_character() {
    let mut session = ExhaustiveSession::new();
    let entries = Encoder::new()
        .parse_entries(&mut session, &["undo", "copy"])
        .unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(characters(&entries[0]), "undo");
    assert_eq!(characters(&entries[1]), "copy");
    assert_eq!(entries[1].label, "copy");
    assert!(entries[1].candidates.iter().all(|c| c.entry_index == 1));
    assert_eq!(session.variable_count(), 8);
    assert_eq!(session.var("Uo0"), Some(entries[0].candidates[3].var));
    assert_eq!(session.var("Uy1"), Some(entries[1].candidates[3].var));
}

#[test]
fn test_parse_entries_deduplicates_within_label() {
    let mut session = ExhaustiveSession::new();
    let entries = Encoder::new()
        .parse_entries(&mut session, &["noon", "settings"])
        .unwrap();

    assert_eq!(characters(&entries[0]), "no");
    assert_eq!(characters(&entries[1]), "seting");
    assert_eq!(session.variable_count(), 8);
}

#[test]
fn test_parse_entries_is_deterministic() {
    let labels = ["cut", "copy", "cost"];
    let encoder = Encoder::new();

    let mut first = ExhaustiveSession::new();
    let mut second = ExhaustiveSession::new();
    let a = encoder.parse_entries(&mut first, &labels).unwrap();
    let b = encoder.parse_entries(&mut second, &labels).unwrap();

    let pairs = |entries: &[EntryCandidates<u32>]| -> Vec<(char, usize, String)> {
        entries
            .iter()
            .flat_map(|e| e.candidates.iter())
            .map(|c| (c.character, c.entry_index, variable_name("U", c.character, c.entry_index)))
            .collect()
    };
    assert_eq!(pairs(&a), pairs(&b));

    for (character, entry_index, name) in pairs(&a) {
        assert!(first.var(&name).is_some(), "{name} missing");
        assert!(second.var(&name).is_some(), "{name} missing");
        assert_eq!(name, format!("U{character}{entry_index}"));
    }
}

#[test]
fn test_parse_entries_twice_in_one_session_reuses_variables() {
    let mut session = ExhaustiveSession::new();
    let encoder = Encoder::new();
    let a = encoder.parse_entries(&mut session, &["undo"]).unwrap();
    let b = encoder.parse_entries(&mut session, &["undo"]).unwrap();

    assert_eq!(a, b);
    assert_eq!(session.variable_count(), 4);
}

#[test]
fn test_custom_prefix() {
    let mut session = ExhaustiveSession::new();
    Encoder::with_prefix("M_")
        .parse_entries(&mut session, &["ok"])
        .unwrap();
    assert!(session.var("M_o0").is_some());
    assert!(session.var("Uo0").is_none());
}

#[test]
fn test_empty_label_rejected_before_any_declaration() {
    let mut session = ExhaustiveSession::new();
    let err = Encoder::new()
        .parse_entries(&mut session, &["file", "", "edit"])
        .unwrap_err();

    assert!(matches!(err, MnemonicError::EmptyLabel { entry_index: 1 }));
    assert_eq!(session.variable_count(), 0);
}

#[test]
fn test_single_empty_label() {
    let err = solve(&[""], true).unwrap_err();
    assert!(matches!(err, MnemonicError::EmptyLabel { entry_index: 0 }));
}

#[test]
fn test_coverage_and_uniqueness_counts() {
    let mut session = ExhaustiveSession::new();
    let encoder = Encoder::new();
    let entries = encoder
        .parse_entries(&mut session, &["undo", "copy", "mod"])
        .unwrap();
    let stats = encoder
        .add_coverage_and_uniqueness(&mut session, &entries)
        .unwrap();

    assert_eq!(stats.disjunctions, 3);
    assert_eq!(stats.implications, 4 + 4 + 3);
    assert_eq!(stats.shared_characters, 0);
    assert_eq!(session.disjunctions, 3);
    assert_eq!(session.implications, 11);
    // k * (k - 1) binary clauses per entry plus one disjunction each.
    assert_eq!(session.clause_count(), 3 + 12 + 12 + 6);
}

#[test]
fn test_repeated_characters_groups_each_occurrence_once() {
    let mut session = ExhaustiveSession::new();
    let entries = Encoder::new()
        .parse_entries(&mut session, &["undo", "copy", "mod"])
        .unwrap();
    let groups = repeated_characters(&entries);

    let summary: Vec<(char, Vec<usize>)> = groups
        .iter()
        .map(|g| (g.character, g.candidates.iter().map(|c| c.entry_index).collect()))
        .collect();
    assert_eq!(summary, vec![('d', vec![0, 2]), ('o', vec![0, 1, 2])]);
}

#[test]
fn test_repeated_characters_ignores_unique_characters() {
    let mut session = ExhaustiveSession::new();
    let entries = Encoder::new()
        .parse_entries(&mut session, &["abc", "def"])
        .unwrap();
    assert!(repeated_characters(&entries).is_empty());
}

#[test]
fn test_cross_entry_exclusion_counts() {
    let mut session = ExhaustiveSession::new();
    let encoder = Encoder::new();
    let entries = encoder
        .parse_entries(&mut session, &["cut", "copy", "cost"])
        .unwrap();

    let groups = repeated_characters(&entries);
    let characters: Vec<char> = groups.iter().map(|g| g.character).collect();
    assert_eq!(characters, vec!['c', 't', 'o']);

    let stats = encoder
        .add_cross_entry_exclusion(&mut session, &entries)
        .unwrap();
    assert_eq!(stats.disjunctions, 0);
    assert_eq!(stats.implications, 3 + 2 + 2);
    assert_eq!(stats.shared_characters, groups.len());
}

#[test]
fn test_encoding_stats_add() {
    let a = EncodingStats {
        disjunctions: 2,
        implications: 7,
        shared_characters: 0,
    };
    let mut b = EncodingStats {
        disjunctions: 0,
        implications: 5,
        shared_characters: 2,
    };
    b += a;
    assert_eq!(b.total(), 14);
    assert_eq!(b.shared_characters, 2);
    assert_eq!(
        a + a,
        EncodingStats {
            disjunctions: 4,
            implications: 14,
            shared_characters: 0,
        }
    );
}

#[test]
fn test_recorded_formulas() {
    let mut session = RecordingSession::new(ExhaustiveSession::new());
    let encoder = Encoder::new();
    let entries = encoder.parse_entries(&mut session, &["ab", "b"]).unwrap();
    encoder
        .add_coverage_and_uniqueness(&mut session, &entries)
        .unwrap();
    encoder
        .add_cross_entry_exclusion(&mut session, &entries)
        .unwrap();

    let lines: Vec<String> = session.formulas().iter().map(|f| f.to_string()).collect();
    assert_eq!(
        lines,
        [
            "Ua0 ∨ Ub0",
            "Ua0 → ¬Ub0",
            "Ub0 → ¬Ua0",
            "Ub1",
            "Ub1 → ⊤",
            "Ub0 → ¬Ub1",
            "Ub1 → ¬Ub0",
        ]
    );
    assert_eq!(session.variable_count(), 3);

    assert_eq!(session.check_sat().unwrap(), SatStatus::Sat);
    let assignment = decode(&entries, &session.model().unwrap()).unwrap();
    assert_eq!(assignment.get(0), Some('a'));
    assert_eq!(assignment.get(1), Some('b'));
}

#[test]
fn test_undo_copy_is_satisfiable() {
    let labels = ["undo", "copy"];
    let outcome = solve(&labels, true).unwrap();
    assert_valid(&labels, outcome.assignment().unwrap());
}

#[test]
fn test_cut_copy_cost_is_satisfiable() {
    let labels = ["cut", "copy", "cost"];
    let outcome = solve(&labels, true).unwrap();
    assert_valid(&labels, outcome.assignment().unwrap());
}

#[test]
fn test_undo_copy_mod_is_satisfiable() {
    let labels = ["undo", "copy", "mod"];
    let outcome = solve(&labels, true).unwrap();
    assert_valid(&labels, outcome.assignment().unwrap());
}

#[test]
fn test_identical_single_character_entries_are_unsatisfiable() {
    assert_eq!(solve(&["a", "a"], true).unwrap(), SolveOutcome::Unsatisfiable);
}

#[test]
fn test_more_entries_than_shared_characters_is_unsatisfiable() {
    assert_eq!(
        solve(&["ab", "ba", "aab"], true).unwrap(),
        SolveOutcome::Unsatisfiable
    );
}

#[test]
fn test_without_cross_entry_exclusion_characters_may_repeat() {
    let outcome = solve(&["a", "a"], false).unwrap();
    let assignment = outcome.assignment().unwrap();
    assert_eq!(assignment.get(0), Some('a'));
    assert_eq!(assignment.get(1), Some('a'));
}

#[test]
fn test_empty_menu_is_trivially_assigned() {
    let outcome = solve(&[], true).unwrap();
    assert_eq!(outcome.assignment().map(Assignment::len), Some(0));
}
