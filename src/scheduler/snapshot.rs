//! Point-in-time view of job placement.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{CoreRegistry, Job, JobId, Time};

/// One active job in a [`QueueSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    /// Job identifier.
    pub job_id: JobId,
    /// Core the job runs on. `None` = waiting.
    pub core: Option<usize>,
    /// Static priority.
    pub priority: i32,
    /// Remaining service time as last charged.
    pub remaining_time: Time,
}

impl SnapshotEntry {
    fn from_job(job: &Job, core: Option<usize>) -> Self {
        Self {
            job_id: job.id,
            core,
            priority: job.priority,
            remaining_time: job.remaining_time,
        }
    }
}

/// Running jobs (core order) and waiting jobs (queue order).
///
/// `Display` renders `id(core)` tokens, with `-1` for waiting jobs:
/// `4(0) 2(-1) 1(-1)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueSnapshot {
    /// Jobs holding a core, by core index.
    pub running: Vec<SnapshotEntry>,
    /// Waiting jobs, next to run first.
    pub waiting: Vec<SnapshotEntry>,
    /// Idle core indices.
    pub idle_cores: Vec<usize>,
}

impl QueueSnapshot {
    pub(crate) fn capture<'a>(
        cores: &CoreRegistry,
        waiting: impl Iterator<Item = &'a Job>,
    ) -> Self {
        Self {
            running: cores
                .running_jobs()
                .map(|(core, job)| SnapshotEntry::from_job(job, Some(core)))
                .collect(),
            waiting: waiting
                .map(|job| SnapshotEntry::from_job(job, None))
                .collect(),
            idle_cores: cores.idle_cores(),
        }
    }

    /// Number of active jobs.
    pub fn len(&self) -> usize {
        self.running.len() + self.waiting.len()
    }

    /// Whether no job is active.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for QueueSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens = self.running.iter().chain(&self.waiting).map(|entry| {
            let core = entry.core.map_or(-1, |core| core as i64);
            format!("{}({})", entry.job_id, core)
        });
        f.write_str(&tokens.collect::<Vec<_>>().join(" "))
    }
}
