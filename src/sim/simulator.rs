//! Discrete-event replay of a workload through the dispatcher.
//!
//! # Algorithm
//!
//! 1. Project the next event for every busy core: its completion at
//!    `last_resumed + remaining_time`, and under Round Robin its quantum
//!    expiry at `slice_start + quantum` when that comes first.
//! 2. Take the next arrival from the workload.
//! 3. Process the earliest event. Equal timestamps are ordered
//!    completions, then quantum expiries, then arrivals, cores in index
//!    order.
//! 4. Repeat until no event remains.
//!
//! # Complexity
//! O(E * (c + w)) where E = events, c = cores, w = waiting jobs.

use serde::{Deserialize, Serialize};

use crate::error::{SchedulerError, SchedulerErrorKind, SchedulerResult};
use crate::models::{CompletedJob, JobId, Time};
use crate::policy::Scheme;
use crate::scheduler::{SchedulerConfig, SchedulerState, Statistics};

use super::{JobSpec, Workload};

/// A job being given a core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchRecord {
    /// Dispatch time.
    pub time: Time,
    /// Core index.
    pub core: usize,
    /// Dispatched job.
    pub job_id: JobId,
}

/// Outcome of a replay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Scheme used.
    pub scheme: Scheme,
    /// Number of cores.
    pub num_cores: usize,
    /// Completed jobs in completion order.
    pub completed: Vec<CompletedJob>,
    /// Every core assignment, in event order.
    pub dispatches: Vec<DispatchRecord>,
    /// Final running sums.
    pub statistics: Statistics,
    /// Latest completion time (0 for an empty workload).
    pub makespan: Time,
}

impl SimulationReport {
    /// Mean waiting time.
    pub fn average_waiting_time(&self) -> SchedulerResult<f64> {
        self.statistics.average_waiting_time()
    }

    /// Mean turnaround time.
    pub fn average_turnaround_time(&self) -> SchedulerResult<f64> {
        self.statistics.average_turnaround_time()
    }

    /// Mean response time.
    pub fn average_response_time(&self) -> SchedulerResult<f64> {
        self.statistics.average_response_time()
    }

    /// Completion record of a job.
    pub fn job(&self, id: JobId) -> Option<&CompletedJob> {
        self.completed.iter().find(|job| job.id == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum EventKind {
    Completion,
    QuantumExpiry,
    Arrival,
}

// Field order is the processing order for simultaneous events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Pending {
    time: Time,
    kind: EventKind,
    core: usize,
}

/// Replays workloads against a fresh scheduler.
///
/// # Example
///
/// ```
/// use u_cpusched::policy::Scheme;
/// use u_cpusched::scheduler::SchedulerConfig;
/// use u_cpusched::sim::{JobSpec, Simulator, Workload};
///
/// let workload = Workload::new(vec![JobSpec::new(1, 0, 5), JobSpec::new(2, 2, 2)]);
/// let report = Simulator::new(SchedulerConfig::new(1, Scheme::Psjf))
///     .run(&workload)
///     .unwrap();
/// assert_eq!(report.makespan, 7);
/// assert!((report.average_turnaround_time().unwrap() - 4.5).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct Simulator {
    config: SchedulerConfig,
    quantum: Option<Time>,
}

impl Simulator {
    /// Creates a simulator for the given configuration.
    pub fn new(config: SchedulerConfig) -> Self {
        Self {
            config,
            quantum: None,
        }
    }

    /// Sets the Round Robin time slice. Ignored by other schemes.
    pub fn with_quantum(mut self, quantum: Time) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Replays `workload` to completion.
    pub fn run(&self, workload: &Workload) -> SchedulerResult<SimulationReport> {
        let scheme = self.config.scheme;
        let quantum = if scheme.uses_quantum() {
            match self.quantum {
                Some(q) if q > 0 => Some(q),
                _ => {
                    return Err(SchedulerError::configuration(format!(
                        "{scheme} requires a positive quantum"
                    )))
                }
            }
        } else {
            None
        };

        let mut sched = SchedulerState::with_config(self.config.clone())?;
        let mut slice_start: Vec<Option<Time>> = vec![None; sched.num_cores()];
        let mut dispatches = Vec::new();
        let mut arrivals = workload.jobs.iter().peekable();

        while let Some(event) = next_event(&sched, &slice_start, quantum, arrivals.peek().copied())?
        {
            let placed = match event.kind {
                EventKind::Completion => {
                    let job_id = running_id(&sched, event.core)?;
                    sched
                        .on_completion(event.core, job_id, event.time)?
                        .map(|next| (event.core, next))
                }
                EventKind::QuantumExpiry => sched
                    .on_quantum_expiry(event.core, event.time)?
                    .map(|next| (event.core, next)),
                EventKind::Arrival => match arrivals.next() {
                    Some(spec) => sched
                        .on_arrival(spec.id, spec.arrival_time, spec.burst_time, spec.priority)?
                        .map(|core| (core, spec.id)),
                    None => None,
                },
            };

            match placed {
                Some((core, job_id)) => {
                    slice_start[core] = Some(event.time);
                    dispatches.push(DispatchRecord {
                        time: event.time,
                        core,
                        job_id,
                    });
                }
                None if event.kind != EventKind::Arrival => slice_start[event.core] = None,
                None => {}
            }
        }

        let completed = sched.completed_jobs().to_vec();
        let makespan = completed.iter().map(|job| job.finish_time).max().unwrap_or(0);
        let num_cores = sched.num_cores();
        let statistics = sched.shutdown();
        log::info!(
            "Replayed {} jobs under {scheme} on {num_cores} cores (makespan {makespan})",
            completed.len()
        );

        Ok(SimulationReport {
            scheme,
            num_cores,
            completed,
            dispatches,
            statistics,
            makespan,
        })
    }
}

fn running_id(sched: &SchedulerState, core: usize) -> SchedulerResult<JobId> {
    sched
        .running_job(core)?
        .map(|job| job.id)
        .ok_or_else(|| {
            SchedulerError::new(
                SchedulerErrorKind::JobNotRunning,
                format!("Core {core} has no running job"),
            )
        })
}

fn next_event(
    sched: &SchedulerState,
    slice_start: &[Option<Time>],
    quantum: Option<Time>,
    arrival: Option<&JobSpec>,
) -> SchedulerResult<Option<Pending>> {
    let mut earliest = arrival.map(|spec| Pending {
        time: spec.arrival_time,
        kind: EventKind::Arrival,
        core: 0,
    });

    for core in 0..sched.num_cores() {
        let Some(done) = sched
            .running_job(core)?
            .and_then(|job| job.projected_completion())
        else {
            continue;
        };

        let mut candidate = Pending {
            time: done,
            kind: EventKind::Completion,
            core,
        };
        if let (Some(q), Some(start)) = (quantum, slice_start[core]) {
            if start + q < done {
                candidate = Pending {
                    time: start + q,
                    kind: EventKind::QuantumExpiry,
                    core,
                };
            }
        }

        earliest = Some(match earliest {
            Some(current) => current.min(candidate),
            None => candidate,
        });
    }

    Ok(earliest)
}
