//! Rendering of solve results for the command line.

use std::fmt::Write;

use mnemonic_core::{Assignment, Formula, SolveOutcome};
use mnemonic_solver::SolveResult;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    mnemonics: Option<&'a Assignment>,
    stats: JsonStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    formulas: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
struct JsonStats {
    entries: usize,
    candidates: usize,
    shared_characters: usize,
    disjunctions: usize,
    implications: usize,
    check_ms: u64,
}

/// Renders the result as `label [c]` lines, or a single line when no
/// assignment exists.
pub fn render_text(result: &SolveResult, formulas: Option<&[Formula]>) -> String {
    let mut out = String::new();
    if let Some(formulas) = formulas {
        out.push_str("---- Formulas ----\n");
        for formula in formulas {
            let _ = writeln!(out, "{formula}");
        }
    }
    match &result.outcome {
        SolveOutcome::Assigned(assignment) => {
            out.push_str("---- Result: option [mnemonic] ----\n");
            out.push_str(&assignment.to_string());
        }
        SolveOutcome::Unsatisfiable => out.push_str("No mnemonic assignment exists\n"),
    }
    out
}

/// Renders the result as a pretty-printed JSON document.
pub fn render_json(
    result: &SolveResult,
    formulas: Option<&[Formula]>,
) -> Result<String, serde_json::Error> {
    let stats = &result.stats;
    let status = match result.outcome {
        SolveOutcome::Assigned(_) => "assigned",
        SolveOutcome::Unsatisfiable => "unsatisfiable",
    };
    let report = JsonReport {
        status,
        mnemonics: result.outcome.assignment(),
        stats: JsonStats {
            entries: stats.entry_count,
            candidates: stats.candidate_count,
            shared_characters: stats.shared_character_count,
            disjunctions: stats.encoding.disjunctions,
            implications: stats.encoding.implications,
            check_ms: stats.check_duration.as_millis() as u64,
        },
        formulas: formulas.map(|fs| fs.iter().map(ToString::to_string).collect()),
    };
    serde_json::to_string_pretty(&report)
}
