//! Execution core model.
//!
//! Cores are the resources jobs run on. The registry is fixed-size: cores
//! are created once at start-up with identifiers `0..num_cores` and are
//! never added or removed afterwards.

use serde::{Deserialize, Serialize};

use super::{Job, JobId};

/// A single execution core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Core {
    /// Zero-based core identifier.
    pub id: usize,
    /// Job currently owned by this core. `None` = idle.
    pub running: Option<Job>,
}

impl Core {
    /// Creates an idle core.
    pub fn new(id: usize) -> Self {
        Self { id, running: None }
    }

    /// Whether the core has no job.
    pub fn is_idle(&self) -> bool {
        self.running.is_none()
    }

    /// Identifier of the running job, if any.
    pub fn running_id(&self) -> Option<JobId> {
        self.running.as_ref().map(|job| job.id)
    }
}

/// Fixed-size array of cores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreRegistry {
    cores: Vec<Core>,
}

impl CoreRegistry {
    /// Creates `num_cores` idle cores.
    pub fn new(num_cores: usize) -> Self {
        Self {
            cores: (0..num_cores).map(Core::new).collect(),
        }
    }

    /// Number of cores.
    pub fn len(&self) -> usize {
        self.cores.len()
    }

    /// Whether the registry holds no cores.
    pub fn is_empty(&self) -> bool {
        self.cores.is_empty()
    }

    /// Core by index.
    pub fn get(&self, index: usize) -> Option<&Core> {
        self.cores.get(index)
    }

    /// Mutable core by index.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Core> {
        self.cores.get_mut(index)
    }

    /// Lowest-indexed idle core.
    pub fn idle_core(&self) -> Option<usize> {
        self.cores.iter().find(|core| core.is_idle()).map(|core| core.id)
    }

    /// Indices of all idle cores, ascending.
    pub fn idle_cores(&self) -> Vec<usize> {
        self.cores
            .iter()
            .filter(|core| core.is_idle())
            .map(|core| core.id)
            .collect()
    }

    /// Number of busy cores.
    pub fn busy_count(&self) -> usize {
        self.cores.iter().filter(|core| !core.is_idle()).count()
    }

    /// Iterates cores in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Core> {
        self.cores.iter()
    }

    /// Iterates cores mutably in index order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Core> {
        self.cores.iter_mut()
    }

    /// Iterates running jobs as `(core index, job)`.
    pub fn running_jobs(&self) -> impl Iterator<Item = (usize, &Job)> {
        self.cores
            .iter()
            .filter_map(|core| core.running.as_ref().map(|job| (core.id, job)))
    }

    /// Whether any core runs the given job.
    pub fn is_running(&self, job_id: JobId) -> bool {
        self.running_jobs().any(|(_, job)| job.id == job_id)
    }
}
