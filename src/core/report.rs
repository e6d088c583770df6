//! Correctness reporting.
//!
//! Reports are handed to an injected [`Reporter`] instead of a global
//! logger, so hosts decide where they go and tests can capture them.

use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// One correctness report for the accumulated input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CorrectnessReport<'a> {
    /// Name of the state that produced the report
    pub state: &'a str,
    /// The accumulated string being reported on
    pub text: &'a str,
    /// Whether the state considers the text a correct name
    pub correct: bool,
}

impl fmt::Display for CorrectnessReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.correct {
            write!(f, "String '{}' is a correct name", self.text)
        } else {
            write!(f, "String '{}' is not a correct name", self.text)
        }
    }
}

type ReportFn = dyn for<'a> Fn(&CorrectnessReport<'a>) + Send + Sync;

/// Destination for correctness reports.
///
/// # Example
///
/// ```rust
/// use namestate::core::{CorrectnessReport, Reporter};
/// use std::sync::{Arc, Mutex};
///
/// let lines = Arc::new(Mutex::new(Vec::new()));
/// let captured = Arc::clone(&lines);
/// let reporter = Reporter::new(move |report| {
///     captured.lock().unwrap().push(report.to_string());
/// });
///
/// reporter.report(&CorrectnessReport {
///     state: "CorrectName",
///     text: "abc",
///     correct: true,
/// });
///
/// assert_eq!(lines.lock().unwrap()[0], "String 'abc' is a correct name");
/// ```
#[derive(Clone)]
pub struct Reporter {
    emit: Arc<ReportFn>,
}

impl Reporter {
    /// Create a reporter from a callback.
    pub fn new<F>(emit: F) -> Self
    where
        F: for<'a> Fn(&CorrectnessReport<'a>) + Send + Sync + 'static,
    {
        Reporter {
            emit: Arc::new(emit),
        }
    }

    /// Reporter that emits each report as a `tracing` info event.
    pub fn tracing() -> Self {
        Self::new(|report| {
            tracing::info!(
                state = report.state,
                correct = report.correct,
                "{}",
                report
            );
        })
    }

    /// Reporter that discards everything.
    pub fn silent() -> Self {
        Self::new(|_| {})
    }

    /// Hand `report` to the configured destination.
    pub fn report(&self, report: &CorrectnessReport<'_>) {
        (self.emit)(report)
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::tracing()
    }
}

impl fmt::Debug for Reporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reporter").finish_non_exhaustive()
    }
}
