//! Test utilities for mnemonic-solver
//!
//! Sessions that misbehave on purpose, wrapping the real batsat session,
//! and a tracing layer that records emitted events.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use mnemonic_core::{ConstraintSession, Model, SatStatus, SessionError};
use rustsat::types::Lit;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

use crate::session::BatsatSession;

/// How a `FaultySession` deviates from its inner session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// Behave normally.
    None,
    /// Answer `Unknown` without searching.
    Unknown,
    /// Report every variable as true in the model.
    AllTrue,
}

/// A batsat session with an injected fault and a release flag.
#[derive(Debug)]
pub struct FaultySession {
    inner: BatsatSession,
    fault: Fault,
    released: Arc<AtomicBool>,
    declared: Vec<Lit>,
    pub checks: usize,
}

impl FaultySession {
    /// Returns the session and a flag that flips to true once it is dropped.
    pub fn new(fault: Fault) -> (Self, Arc<AtomicBool>) {
        let released = Arc::new(AtomicBool::new(false));
        let session = Self {
            inner: BatsatSession::new(),
            fault,
            released: Arc::clone(&released),
            declared: Vec::new(),
            checks: 0,
        };
        (session, released)
    }

    pub fn variable_count(&self) -> usize {
        self.inner.variable_count()
    }
}

impl ConstraintSession for FaultySession {
    type Var = Lit;

    fn declare_bool(&mut self, name: &str) -> Result<Lit, SessionError> {
        let lit = self.inner.declare_bool(name)?;
        if !self.declared.contains(&lit) {
            self.declared.push(lit);
        }
        Ok(lit)
    }

    fn assert_or(&mut self, vars: &[Lit]) -> Result<(), SessionError> {
        self.inner.assert_or(vars)
    }

    fn assert_implication(&mut self, antecedent: Lit, negated: &[Lit]) -> Result<(), SessionError> {
        self.inner.assert_implication(antecedent, negated)
    }

    fn check_sat(&mut self) -> Result<SatStatus, SessionError> {
        self.checks += 1;
        match self.fault {
            Fault::Unknown => Ok(SatStatus::Unknown),
            Fault::AllTrue => Ok(SatStatus::Sat),
            Fault::None => self.inner.check_sat(),
        }
    }

    fn model(&self) -> Result<Model<Lit>, SessionError> {
        match self.fault {
            Fault::AllTrue => Ok(self.declared.iter().map(|&lit| (lit, true)).collect()),
            _ => self.inner.model(),
        }
    }
}

impl Drop for FaultySession {
    fn drop(&mut self) {
        self.released.store(true, Ordering::SeqCst);
    }
}

/// Collects the `event` field of every tracing event it sees.
#[derive(Debug, Clone, Default)]
pub struct EventCapture {
    events: Arc<Mutex<Vec<String>>>,
}

impl EventCapture {
    pub fn count(&self, name: &str) -> usize {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.as_str() == name)
            .count()
    }
}

impl<S: Subscriber> Layer<S> for EventCapture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = EventName(None);
        event.record(&mut visitor);
        if let Some(name) = visitor.0 {
            self.events.lock().unwrap().push(name);
        }
    }
}

struct EventName(Option<String>);

impl Visit for EventName {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "event" {
            self.0 = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, _field: &Field, _value: &dyn fmt::Debug) {}
}
