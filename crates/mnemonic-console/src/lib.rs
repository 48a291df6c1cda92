//! Colorful console output for solve runs.
//!
//! Provides a custom `tracing` layer that formats pipeline events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (solve start/end, satisfiability answer)
//! - **DEBUG**: Encoding totals and session release
//! - **TRACE**: Individual variables and formulas (not rendered)

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static SOLVE_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_DIRECTIVE: &str = "mnemonic_solver=info";

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the banner and sets up tracing. `RUST_LOG` overrides the
/// default `mnemonic_solver=info` filter.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let mut filter = EnvFilter::from_default_env();
        if std::env::var_os("RUST_LOG").is_none() {
            if let Ok(directive) = DEFAULT_DIRECTIVE.parse::<Directive>() {
                filter = filter.add_directive(directive);
            }
        }

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(MnemonicConsoleLayer)
            .try_init();
    });
}

// Marks the start of solving for elapsed time tracking.
fn mark_solve_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    SOLVE_START_NANOS.store(nanos, Ordering::Relaxed);
}

// Returns elapsed time since solve start.
fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = SOLVE_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let banner = r#"
 __  __                                  _
|  \/  |_ __   ___ _ __ ___   ___  _ __ (_) ___
| |\/| | '_ \ / _ \ '_ ` _ \ / _ \| '_ \| |/ __|
| |  | | | | |  __/ | | | | | (_) | | | | | (__
|_|  |_|_| |_|\___|_| |_| |_|\___/|_| |_|_|\___|
"#;

    let version_line = format!("            v{} - SAT Mnemonic Assignment\n", VERSION);

    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr, "{}", banner.bright_cyan());
    let _ = writeln!(stderr, "{}", version_line.bright_white().bold());
    let _ = stderr.flush();
}

/// A tracing layer that formats pipeline events with colors.
///
/// Writes to stderr so stdout stays free for the assignment itself.
pub struct MnemonicConsoleLayer;

impl<S: Subscriber> Layer<S> for MnemonicConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let target = event.metadata().target();

        // Accept events from the pipeline and the CLI
        if !target.starts_with("mnemonic") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    status: Option<String>,
    entry_count: Option<u64>,
    candidate_count: Option<u64>,
    shared_count: Option<u64>,
    disjunctions: Option<u64>,
    implications: Option<u64>,
    duration_ms: Option<u64>,
    variables: Option<u64>,
    clauses: Option<u64>,
    cross_entry: Option<bool>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "status" => self.status = Some(s.trim_matches('"').to_string()),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "entry_count" => self.entry_count = Some(value),
            "candidate_count" => self.candidate_count = Some(value),
            "shared_count" => self.shared_count = Some(value),
            "disjunctions" => self.disjunctions = Some(value),
            "implications" => self.implications = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "variables" => self.variables = Some(value),
            "clauses" => self.clauses = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "cross_entry" {
            self.cross_entry = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "status" => self.status = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "solve_start" => format_solve_start(v),
        "encode_end" => format_encode_end(v),
        "check_end" => format_check_end(v),
        "solve_end" => format_solve_end(v),
        "session_release" => format_session_release(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_count(n: u64) -> String {
    n.to_formatted_string(&Locale::en)
        .bright_yellow()
        .to_string()
}

fn format_solve_start(v: &EventVisitor) -> String {
    mark_solve_start();
    let entries = v.entry_count.unwrap_or(0);

    let mut output = format!(
        "{} {} Solving │ {} entries",
        format_elapsed(),
        "▶".bright_green().bold(),
        format_count(entries),
    );

    if v.cross_entry == Some(false) {
        output.push_str(&format!(" │ {}", "cross-entry exclusion off".yellow()));
    }

    output
}

fn format_encode_end(v: &EventVisitor) -> String {
    let mut output = format!(
        "{} {} Encoded │ {} candidates │ {} disjunctions │ {} implications",
        format_elapsed(),
        "◆".bright_blue(),
        format_count(v.candidate_count.unwrap_or(0)),
        format_count(v.disjunctions.unwrap_or(0)),
        format_count(v.implications.unwrap_or(0)),
    );

    if let Some(shared) = v.shared_count.filter(|&n| n > 0) {
        output.push_str(&format!(" │ {} shared characters", format_count(shared)));
    }

    output
}

fn format_check_end(v: &EventVisitor) -> String {
    let status = v.status.as_deref().unwrap_or("unknown");
    format!(
        "{} {} Problem was determined to be {} in {}",
        format_elapsed(),
        "◀".bright_blue(),
        format_status(status),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    let status = v.status.as_deref().unwrap_or("unknown");
    format!(
        "{} {} Solving complete │ {} │ {} entries │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        format_status(status),
        format_count(v.entry_count.unwrap_or(0)),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
    )
}

fn format_session_release(v: &EventVisitor) -> String {
    format!(
        "{} {} Session released │ {} variables │ {} clauses",
        format_elapsed(),
        "○".bright_black(),
        format_count(v.variables.unwrap_or(0)),
        format_count(v.clauses.unwrap_or(0)),
    )
}

fn format_status(status: &str) -> String {
    match status {
        "sat" | "assigned" => status.to_uppercase().bright_green().bold().to_string(),
        "unsat" | "unsatisfiable" => status.to_uppercase().bright_red().bold().to_string(),
        _ => status.to_uppercase().yellow().bold().to_string(),
    }
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}
