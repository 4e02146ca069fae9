// Pipeline-side review model.
// Every adapter normalizes its native findings into these types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical severity shared by all adapters in the pipeline.
/// Totally ordered by importance, `Error` highest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Ignore,
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Ignore => "ignore",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{label}")
    }
}

/// One normalized, analyzer-agnostic issue. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// File path exactly as the pipeline supplied it, not a canonical form.
    pub path: String,
    /// 1-based line, as reported by the analyzer.
    pub line: u32,
    pub message: String,
    pub severity: Severity,
}

impl Violation {
    pub fn new(
        path: impl Into<String>,
        line: u32,
        message: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            path: path.into(),
            line,
            message: message.into(),
            severity,
        }
    }
}

/// Violations accumulated by one adapter run. No ordering semantics; the
/// aggregator merges results from several adapters anyway.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewResult {
    pub violations: Vec<Violation>,
}

impl ReviewResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Candidate files for one review, as handed over by the pipeline. May
/// include files an adapter has no interest in.
#[derive(Debug, Clone, Default)]
pub struct Review {
    files: Vec<String>,
}

impl Review {
    pub fn new(files: Vec<String>) -> Self {
        Self { files }
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }
}
