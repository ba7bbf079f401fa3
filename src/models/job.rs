//! Job model.
//!
//! A job is a unit of CPU work submitted to the scheduler. It carries its
//! arrival time, requested service (burst) time, a static priority, and the
//! bookkeeping the dispatcher needs to account for service received across
//! preemptions.
//!
//! # Time Representation
//! All times are abstract integer time units supplied by the caller.

use serde::{Deserialize, Serialize};

/// Caller-assigned job identifier.
pub type JobId = u64;

/// Simulation time (abstract units).
pub type Time = i64;

/// A job known to the scheduler (running or waiting).
///
/// Two jobs are equal when their identifiers are equal; the dispatcher
/// guarantees identifiers are unique within a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// Unique job identifier.
    pub id: JobId,
    /// Time the job entered the system.
    pub arrival_time: Time,
    /// Total requested service time.
    pub burst_time: Time,
    /// Service time still owed. Decreases only while running.
    pub remaining_time: Time,
    /// Static priority (lower value = higher priority).
    pub priority: i32,
    /// Time the job was first given a core. Set once.
    pub first_dispatch: Option<Time>,
    /// Time the job last (re)acquired a core. `None` while waiting.
    pub last_resumed: Option<Time>,
}

impl Job {
    /// Creates a job with its full burst still owed.
    pub fn new(id: JobId, arrival_time: Time, burst_time: Time, priority: i32) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            remaining_time: burst_time,
            priority,
            first_dispatch: None,
            last_resumed: None,
        }
    }

    /// Marks the job as holding a core from `now` on.
    ///
    /// Sets the first-dispatch time if this is the job's first run.
    pub fn dispatch(&mut self, now: Time) {
        if self.first_dispatch.is_none() {
            self.first_dispatch = Some(now);
        }
        self.last_resumed = Some(now);
    }

    /// Charges the service received since the last resume instant and
    /// moves the resume instant to `now`.
    ///
    /// No-op for a job that is not running.
    pub fn account_until(&mut self, now: Time) {
        if let Some(resumed) = self.last_resumed {
            let elapsed = (now - resumed).max(0);
            self.remaining_time = (self.remaining_time - elapsed).max(0);
            self.last_resumed = Some(now);
        }
    }

    /// Charges service up to `now` and releases the core.
    pub fn suspend(&mut self, now: Time) {
        self.account_until(now);
        self.last_resumed = None;
    }

    /// Time at which the job finishes if it keeps its core.
    pub fn projected_completion(&self) -> Option<Time> {
        self.last_resumed.map(|resumed| resumed + self.remaining_time)
    }

    /// Whether the job currently holds a core.
    pub fn is_running(&self) -> bool {
        self.last_resumed.is_some()
    }

    /// Service received so far.
    pub fn service_received(&self) -> Time {
        self.burst_time - self.remaining_time
    }
}

impl PartialEq for Job {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Job {}

/// A job that has left the system.
///
/// Recorded by the dispatcher on every completion, in completion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedJob {
    /// Job identifier.
    pub id: JobId,
    /// Arrival time.
    pub arrival_time: Time,
    /// Requested service time.
    pub burst_time: Time,
    /// Static priority.
    pub priority: i32,
    /// First time the job held a core.
    pub first_dispatch: Time,
    /// Completion time.
    pub finish_time: Time,
}

impl CompletedJob {
    /// Time from arrival to completion.
    pub fn turnaround_time(&self) -> Time {
        self.finish_time - self.arrival_time
    }

    /// Turnaround time minus service time.
    pub fn waiting_time(&self) -> Time {
        self.turnaround_time() - self.burst_time
    }

    /// Time from arrival to first dispatch.
    pub fn response_time(&self) -> Time {
        self.first_dispatch - self.arrival_time
    }
}
