//! Diagnostic Sinks
//!
//! Receivers for (message, result code) reports raised by the vector
//! factory. Sinks are injected explicitly; there is no process-wide registry.

use chrono::{DateTime, Utc};
use hashbrown::HashMap;
use parking_lot::Mutex;
use std::collections::VecDeque;
use tracing::warn;

use crate::error::ResultCode;

/// Receiver for failure reports
pub trait DiagnosticSink: Send + Sync {
    fn log(&self, message: &str, code: ResultCode);
}

/// Sink that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn log(&self, _message: &str, _code: ResultCode) {}
}

/// Sink forwarding reports to `tracing` under an owner label
#[derive(Debug, Clone)]
pub struct TracingSink {
    owner: String,
}

impl TracingSink {
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }
}

impl DiagnosticSink for TracingSink {
    fn log(&self, message: &str, code: ResultCode) {
        warn!(owner = %self.owner, code = %code, "{}", message);
    }
}

/// A recorded diagnostic
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub message: String,
    pub code: ResultCode,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct Journal {
    entries: VecDeque<Diagnostic>,
    counts: HashMap<ResultCode, u64>,
}

/// Sink keeping the most recent reports in memory
///
/// Entries beyond `capacity` are dropped oldest-first; the per-code counters
/// keep counting regardless.
#[derive(Debug)]
pub struct RecordingSink {
    capacity: usize,
    journal: Mutex<Journal>,
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::with_capacity(64)
    }
}

impl RecordingSink {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            journal: Mutex::new(Journal::default()),
        }
    }

    /// Retained entries, oldest first
    pub fn entries(&self) -> Vec<Diagnostic> {
        self.journal.lock().entries.iter().cloned().collect()
    }

    pub fn last(&self) -> Option<Diagnostic> {
        self.journal.lock().entries.back().cloned()
    }

    /// Number of retained entries
    pub fn len(&self) -> usize {
        self.journal.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total reports seen for `code`, including dropped ones
    pub fn count(&self, code: ResultCode) -> u64 {
        self.journal.lock().counts.get(&code).copied().unwrap_or(0)
    }

    pub fn clear(&self) {
        let mut journal = self.journal.lock();
        journal.entries.clear();
        journal.counts.clear();
    }
}

impl DiagnosticSink for RecordingSink {
    fn log(&self, message: &str, code: ResultCode) {
        let mut journal = self.journal.lock();
        if journal.entries.len() == self.capacity {
            journal.entries.pop_front();
        }
        journal.entries.push_back(Diagnostic {
            message: message.to_string(),
            code,
            at: Utc::now(),
        });
        *journal.counts.entry(code).or_insert(0) += 1;
    }
}
