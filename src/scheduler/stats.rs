//! Running timing statistics.
//!
//! Accumulates per-completion sums and answers average queries.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | finish - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first dispatch - arrival |
//!
//! Waiting time does not depend on how often a job was preempted: its
//! service time is consumed exactly once, so everything else between
//! arrival and finish was spent waiting.

use serde::{Deserialize, Serialize};

use crate::error::{SchedulerError, SchedulerErrorKind, SchedulerResult};
use crate::models::{CompletedJob, Time};

/// Running sums over completed jobs.
///
/// Sums are exact integers; averages are computed on demand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    /// Number of completed jobs.
    pub completed: u64,
    /// Sum of turnaround times.
    pub turnaround_sum: Time,
    /// Sum of waiting times.
    pub waiting_sum: Time,
    /// Sum of response times.
    pub response_sum: Time,
    /// Sum of burst times.
    pub burst_sum: Time,
}

impl Statistics {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one completion.
    ///
    /// # Arguments
    /// * `arrival` - Arrival time.
    /// * `finish` - Completion time.
    /// * `burst` - Original requested service time.
    /// * `first_dispatch` - Time the job first held a core.
    pub fn record(&mut self, arrival: Time, finish: Time, burst: Time, first_dispatch: Time) {
        let turnaround = finish - arrival;
        self.turnaround_sum += turnaround;
        self.waiting_sum += turnaround - burst;
        self.response_sum += first_dispatch - arrival;
        self.burst_sum += burst;
        self.completed += 1;
    }

    /// Records a completed job.
    pub fn record_job(&mut self, job: &CompletedJob) {
        self.record(
            job.arrival_time,
            job.finish_time,
            job.burst_time,
            job.first_dispatch,
        );
    }

    /// Mean waiting time.
    pub fn average_waiting_time(&self) -> SchedulerResult<f64> {
        self.average(self.waiting_sum)
    }

    /// Mean turnaround time.
    pub fn average_turnaround_time(&self) -> SchedulerResult<f64> {
        self.average(self.turnaround_sum)
    }

    /// Mean response time.
    pub fn average_response_time(&self) -> SchedulerResult<f64> {
        self.average(self.response_sum)
    }

    fn average(&self, sum: Time) -> SchedulerResult<f64> {
        if self.completed == 0 {
            return Err(SchedulerError::new(
                SchedulerErrorKind::NoCompletedJobs,
                "No job has completed yet",
            ));
        }
        Ok(sum as f64 / self.completed as f64)
    }
}
