//! Scheduler errors.
//!
//! Every entry point reports contract violations synchronously through
//! [`SchedulerError`]. A failing call never mutates scheduler state, and
//! nothing is retried: each operation is a pure in-memory transition.

use std::fmt;

/// Result alias used throughout the crate.
pub type SchedulerResult<T> = Result<T, SchedulerError>;

/// A scheduler error.
#[derive(Debug, Clone, PartialEq)]
pub struct SchedulerError {
    /// Error category.
    pub kind: SchedulerErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of scheduler errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerErrorKind {
    /// Invalid start-up parameters (zero cores, unknown scheme, missing quantum).
    Configuration,
    /// A job arrived with an identifier already seen in this run.
    DuplicateJob,
    /// A job arrived with a negative arrival or burst time.
    InvalidJob,
    /// A core index outside `0..num_cores`.
    InvalidCoreIndex,
    /// A waiting-list position outside `0..len`.
    IndexOutOfRange,
    /// The event names a job that is not running on the given core.
    JobNotRunning,
    /// The event does not apply to the active scheme (quantum expiry outside RR).
    UnsupportedEvent,
    /// Statistics were queried before any job completed.
    NoCompletedJobs,
    /// Statistics were queried while jobs are still running or waiting.
    PrematureQuery,
}

impl SchedulerError {
    pub(crate) fn new(kind: SchedulerErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Self::new(SchedulerErrorKind::Configuration, message)
    }

    pub(crate) fn invalid_core(core: usize, num_cores: usize) -> Self {
        Self::new(
            SchedulerErrorKind::InvalidCoreIndex,
            format!("Core index {core} out of range (num_cores = {num_cores})"),
        )
    }
}

impl fmt::Display for SchedulerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for SchedulerError {}
