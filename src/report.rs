// src/report.rs
use crate::error::FieldIssue;

/// Sink for per-field extraction problems. Passed into every extraction stage
/// so callers decide where warnings go (log, memory, nowhere).
pub trait Report {
    /// A field was present but unreadable; it has been left unset.
    fn warn(&mut self, _issue: &FieldIssue) {}
}

/// Default sink: forwards to `tracing::warn!`.
pub struct TracingReport;

impl Report for TracingReport {
    fn warn(&mut self, issue: &FieldIssue) {
        tracing::warn!(field = issue.field, "{}", issue.reason);
    }
}

/// A no-op sink.
pub struct NullReport;
impl Report for NullReport {}

/// Keeps every issue, in order. For tests and for callers that want to show them later.
#[derive(Debug, Default)]
pub struct MemoryReport {
    pub issues: Vec<FieldIssue>,
}

impl MemoryReport {
    pub fn fields(&self) -> Vec<&'static str> {
        self.issues.iter().map(|i| i.field).collect()
    }
}

impl Report for MemoryReport {
    fn warn(&mut self, issue: &FieldIssue) {
        self.issues.push(issue.clone());
    }
}
