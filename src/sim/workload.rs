//! Job workloads for replay.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::models::{JobId, Time};

/// A job to submit at its arrival time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSpec {
    /// Unique job identifier.
    pub id: JobId,
    /// Arrival time.
    pub arrival_time: Time,
    /// Requested service time.
    pub burst_time: Time,
    /// Static priority (lower = more important).
    #[serde(default)]
    pub priority: i32,
}

impl JobSpec {
    /// Creates a job spec with priority 0.
    pub fn new(id: JobId, arrival_time: Time, burst_time: Time) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            priority: 0,
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

/// Jobs sorted by `(arrival_time, id)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workload {
    /// Jobs in submission order.
    pub jobs: Vec<JobSpec>,
}

impl Workload {
    /// Creates a workload, sorting jobs into submission order.
    pub fn new(mut jobs: Vec<JobSpec>) -> Self {
        jobs.sort_by(|a, b| {
            a.arrival_time
                .cmp(&b.arrival_time)
                .then_with(|| a.id.cmp(&b.id))
        });
        Self { jobs }
    }

    /// Number of jobs.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Whether the workload is empty.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Sum of all burst times.
    pub fn total_burst(&self) -> Time {
        self.jobs.iter().map(|job| job.burst_time).sum()
    }
}

/// Seeded Bernoulli-arrival workload generator.
///
/// At every tick a job arrives with `arrival_probability`. Each arrival is
/// short with `short_probability`, long otherwise, and gets a uniform
/// priority in `0..=max_priority`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkloadGenerator {
    /// Number of ticks during which jobs may arrive.
    pub ticks: Time,
    /// Per-tick arrival probability.
    pub arrival_probability: f64,
    /// Probability that an arrival is short.
    pub short_probability: f64,
    /// Burst of a short job.
    pub short_burst: Time,
    /// Burst of a long job.
    pub long_burst: Time,
    /// Largest priority value.
    pub max_priority: i32,
}

impl WorkloadGenerator {
    /// Creates a generator with moderate defaults.
    pub fn new() -> Self {
        Self {
            ticks: 100,
            arrival_probability: 0.3,
            short_probability: 0.3,
            short_burst: 2,
            long_burst: 6,
            max_priority: 4,
        }
    }

    /// Sets the arrival window.
    pub fn with_ticks(mut self, ticks: Time) -> Self {
        self.ticks = ticks;
        self
    }

    /// Sets the per-tick arrival probability.
    pub fn with_arrival_probability(mut self, p: f64) -> Self {
        self.arrival_probability = p;
        self
    }

    /// Sets the short-job probability.
    pub fn with_short_probability(mut self, p: f64) -> Self {
        self.short_probability = p;
        self
    }

    /// Sets short and long burst lengths.
    pub fn with_bursts(mut self, short_burst: Time, long_burst: Time) -> Self {
        self.short_burst = short_burst;
        self.long_burst = long_burst;
        self
    }

    /// Sets the largest priority value.
    pub fn with_max_priority(mut self, max_priority: i32) -> Self {
        self.max_priority = max_priority;
        self
    }

    /// Generates a workload. Identical seeds give identical workloads.
    pub fn generate(&self, seed: u64) -> Workload {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut jobs = Vec::new();

        for t in 0..self.ticks {
            if rng.random::<f64>() < self.arrival_probability {
                let burst_time = if rng.random::<f64>() < self.short_probability {
                    self.short_burst
                } else {
                    self.long_burst
                };
                let priority = rng.random_range(0..=self.max_priority.max(0));
                jobs.push(JobSpec::new(jobs.len() as JobId, t, burst_time).with_priority(priority));
            }
        }

        Workload::new(jobs)
    }
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self::new()
    }
}
