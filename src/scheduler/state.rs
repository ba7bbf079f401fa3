//! Event-driven dispatcher.
//!
//! # Algorithm
//!
//! The scheduler reacts to three events, each processed to completion
//! before the next one is accepted:
//!
//! 1. **Arrival**: take the lowest-indexed idle core. If every core is
//!    busy and the scheme is preemptive, charge all running jobs up to
//!    the arrival instant, pick the least preferred running job, and
//!    displace it if the newcomer is strictly preferred. Otherwise the
//!    newcomer waits.
//! 2. **Completion**: record statistics, then hand the core to the front
//!    of the waiting list (or leave it idle).
//! 3. **Quantum expiry** (Round Robin only): charge the running job,
//!    append it to the waiting list, and hand the core to the front job.
//!
//! # Determinism
//! Idle cores are taken lowest index first. When several running jobs
//! rank equally last, the one on the highest core index is displaced.
//! Jobs the comparator cannot distinguish wait in arrival order.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::error::{SchedulerError, SchedulerErrorKind, SchedulerResult};
use crate::models::{CompletedJob, Core, CoreRegistry, Job, JobId, Time};
use crate::policy::Scheme;
use crate::queue::{Comparator, OrderedQueue};

use super::{QueueSnapshot, SchedulerConfig, Statistics};

/// Scheduler state owned by the caller and threaded through every event.
///
/// # Example
///
/// ```
/// use u_cpusched::policy::Scheme;
/// use u_cpusched::scheduler::SchedulerState;
///
/// let mut sched = SchedulerState::start(1, Scheme::Fcfs).unwrap();
/// assert_eq!(sched.on_arrival(1, 0, 5, 0).unwrap(), Some(0));
/// assert_eq!(sched.on_arrival(2, 2, 3, 0).unwrap(), None);
/// assert_eq!(sched.on_completion(0, 1, 5).unwrap(), Some(2));
/// assert_eq!(sched.on_completion(0, 2, 8).unwrap(), None);
/// assert!((sched.average_waiting_time().unwrap() - 1.5).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct SchedulerState {
    scheme: Scheme,
    cores: CoreRegistry,
    waiting: OrderedQueue<Job, Scheme>,
    stats: Statistics,
    seen: HashSet<JobId>,
    completed: Vec<CompletedJob>,
}

impl SchedulerState {
    /// Starts a scheduler with `num_cores` idle cores.
    pub fn start(num_cores: usize, scheme: Scheme) -> SchedulerResult<Self> {
        Self::with_config(SchedulerConfig::new(num_cores, scheme))
    }

    /// Starts a scheduler from a configuration.
    pub fn with_config(config: SchedulerConfig) -> SchedulerResult<Self> {
        config.validate()?;
        log::info!(
            "Starting {} scheduler on {} cores",
            config.scheme,
            config.num_cores
        );
        Ok(Self {
            scheme: config.scheme,
            cores: CoreRegistry::new(config.num_cores),
            waiting: OrderedQueue::new(config.scheme),
            stats: Statistics::new(),
            seen: HashSet::new(),
            completed: Vec::new(),
        })
    }

    // ======================== Events ========================

    /// Handles a job arrival.
    ///
    /// Returns the core the job was placed on, or `None` if it waits.
    /// A preempted job goes back to the waiting list.
    pub fn on_arrival(
        &mut self,
        job_id: JobId,
        arrival_time: Time,
        burst_time: Time,
        priority: i32,
    ) -> SchedulerResult<Option<usize>> {
        if self.seen.contains(&job_id) {
            return Err(SchedulerError::new(
                SchedulerErrorKind::DuplicateJob,
                format!("Job {job_id} was already submitted"),
            ));
        }
        if arrival_time < 0 || burst_time < 0 {
            return Err(SchedulerError::new(
                SchedulerErrorKind::InvalidJob,
                format!(
                    "Job {job_id} has negative timing (arrival {arrival_time}, burst {burst_time})"
                ),
            ));
        }
        self.seen.insert(job_id);

        let mut job = Job::new(job_id, arrival_time, burst_time, priority);

        if let Some(core) = self.cores.idle_core() {
            log::debug!("t={arrival_time} job {job_id} -> idle core {core}");
            job.dispatch(arrival_time);
            self.assign(core, job);
            return Ok(Some(core));
        }

        if self.scheme.is_preemptive() {
            if let Some(core) = self.preemption_target(&job, arrival_time) {
                if let Some(mut displaced) = self.take_job(core) {
                    log::debug!(
                        "t={arrival_time} job {job_id} preempts job {} on core {core} (remaining {})",
                        displaced.id,
                        displaced.remaining_time
                    );
                    displaced.suspend(arrival_time);
                    self.enqueue(displaced);
                    job.dispatch(arrival_time);
                    self.assign(core, job);
                    return Ok(Some(core));
                }
            }
        }

        self.enqueue(job);
        Ok(None)
    }

    /// Handles the completion of `job_id` on `core`.
    ///
    /// Returns the job now running on `core`, or `None` if it went idle.
    pub fn on_completion(
        &mut self,
        core: usize,
        job_id: JobId,
        finish_time: Time,
    ) -> SchedulerResult<Option<JobId>> {
        let slot = self.core_mut(core)?;
        let job = match slot.running.take() {
            Some(job) if job.id == job_id => job,
            other => {
                let found = other.as_ref().map(|job| job.id);
                slot.running = other;
                return Err(SchedulerError::new(
                    SchedulerErrorKind::JobNotRunning,
                    format!("Job {job_id} is not running on core {core} (found {found:?})"),
                ));
            }
        };

        let done = CompletedJob {
            id: job.id,
            arrival_time: job.arrival_time,
            burst_time: job.burst_time,
            priority: job.priority,
            first_dispatch: job.first_dispatch.unwrap_or(finish_time),
            finish_time,
        };
        log::debug!(
            "t={finish_time} job {job_id} finished on core {core} (turnaround {})",
            done.turnaround_time()
        );
        self.stats.record_job(&done);
        self.completed.push(done);

        Ok(self.dispatch_next(core, finish_time))
    }

    /// Handles a Round Robin quantum expiry on `core`.
    ///
    /// The running job goes to the back of the waiting list. Returns the
    /// job now running on `core` (possibly the same one), or `None`.
    pub fn on_quantum_expiry(
        &mut self,
        core: usize,
        expiry_time: Time,
    ) -> SchedulerResult<Option<JobId>> {
        if !self.scheme.uses_quantum() {
            return Err(SchedulerError::new(
                SchedulerErrorKind::UnsupportedEvent,
                format!("Quantum expiry is not defined for {}", self.scheme),
            ));
        }

        let mut job = self.core_mut(core)?.running.take().ok_or_else(|| {
            SchedulerError::new(
                SchedulerErrorKind::JobNotRunning,
                format!("Quantum expired on idle core {core}"),
            )
        })?;

        job.suspend(expiry_time);
        log::debug!(
            "t={expiry_time} quantum expired for job {} on core {core} (remaining {})",
            job.id,
            job.remaining_time
        );
        self.enqueue(job);

        Ok(self.dispatch_next(core, expiry_time))
    }

    // ======================== Statistics ========================

    /// Mean waiting time over all completed jobs.
    pub fn average_waiting_time(&self) -> SchedulerResult<f64> {
        self.ensure_drained()?;
        self.stats.average_waiting_time()
    }

    /// Mean turnaround time over all completed jobs.
    pub fn average_turnaround_time(&self) -> SchedulerResult<f64> {
        self.ensure_drained()?;
        self.stats.average_turnaround_time()
    }

    /// Mean response time over all completed jobs.
    pub fn average_response_time(&self) -> SchedulerResult<f64> {
        self.ensure_drained()?;
        self.stats.average_response_time()
    }

    /// Raw running sums (available at any time).
    pub fn statistics(&self) -> &Statistics {
        &self.stats
    }

    /// Completed jobs in completion order.
    pub fn completed_jobs(&self) -> &[CompletedJob] {
        &self.completed
    }

    // ======================== Inspection ========================

    /// Active scheme.
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Whether the active scheme is preemptive.
    pub fn is_preemptive(&self) -> bool {
        self.scheme.is_preemptive()
    }

    /// Number of cores.
    pub fn num_cores(&self) -> usize {
        self.cores.len()
    }

    /// The job running on `core`, if any.
    pub fn running_job(&self, core: usize) -> SchedulerResult<Option<&Job>> {
        self.cores
            .get(core)
            .map(|slot| slot.running.as_ref())
            .ok_or_else(|| SchedulerError::invalid_core(core, self.cores.len()))
    }

    /// Idle core indices, ascending.
    pub fn idle_cores(&self) -> Vec<usize> {
        self.cores.idle_cores()
    }

    /// Number of waiting jobs.
    pub fn waiting_len(&self) -> usize {
        self.waiting.len()
    }

    /// The waiting job at `index` (0 = next to run).
    pub fn waiting_at(&self, index: usize) -> SchedulerResult<&Job> {
        self.waiting.at(index).ok_or_else(|| {
            SchedulerError::new(
                SchedulerErrorKind::IndexOutOfRange,
                format!(
                    "Waiting index {index} out of range (len = {})",
                    self.waiting.len()
                ),
            )
        })
    }

    /// Waiting jobs, next to run first.
    pub fn waiting_jobs(&self) -> impl Iterator<Item = &Job> {
        self.waiting.iter()
    }

    /// Whether the waiting list is in comparator order.
    pub fn is_waiting_ordered(&self) -> bool {
        self.waiting.is_ordered()
    }

    /// Number of jobs running or waiting.
    pub fn active_jobs(&self) -> usize {
        self.cores.busy_count() + self.waiting.len()
    }

    /// Current placement of every active job.
    pub fn snapshot(&self) -> QueueSnapshot {
        QueueSnapshot::capture(&self.cores, self.waiting.iter())
    }

    // ======================== Teardown ========================

    /// Releases every job and returns the final statistics.
    ///
    /// Jobs still running or waiting are discarded without accounting.
    pub fn shutdown(mut self) -> Statistics {
        let abandoned = self.active_jobs();
        if abandoned > 0 {
            log::warn!("Shutting down with {abandoned} unfinished jobs");
        }
        for slot in self.cores.iter_mut() {
            slot.running = None;
        }
        self.waiting.drain().for_each(drop);
        log::info!(
            "{} scheduler shut down after {} completed jobs",
            self.scheme,
            self.stats.completed
        );
        self.stats
    }

    // ======================== Internals ========================

    /// Charges every running job up to `now` and returns the core whose
    /// job `candidate` should displace, if any.
    fn preemption_target(&mut self, candidate: &Job, now: Time) -> Option<usize> {
        for slot in self.cores.iter_mut() {
            if let Some(running) = slot.running.as_mut() {
                running.account_until(now);
            }
        }

        let scheme = self.scheme;
        let (core, least_preferred) = self.cores.running_jobs().reduce(|worst, next| {
            if scheme.compare(next.1, worst.1) == Ordering::Less {
                worst
            } else {
                next
            }
        })?;

        (scheme.compare(candidate, least_preferred) == Ordering::Less).then_some(core)
    }

    fn dispatch_next(&mut self, core: usize, now: Time) -> Option<JobId> {
        match self.waiting.pop_front() {
            Some(mut next) => {
                next.dispatch(now);
                let id = next.id;
                log::debug!("t={now} job {id} -> core {core}");
                self.assign(core, next);
                Some(id)
            }
            None => {
                log::debug!("t={now} core {core} idle");
                None
            }
        }
    }

    fn enqueue(&mut self, job: Job) {
        let id = job.id;
        let index = self.waiting.insert(job);
        log::trace!("job {id} waiting at position {index}");
        debug_assert!(self.waiting.is_ordered(), "waiting list out of order");
    }

    fn assign(&mut self, core: usize, job: Job) {
        if let Some(slot) = self.cores.get_mut(core) {
            debug_assert!(slot.is_idle(), "core {core} already running a job");
            slot.running = Some(job);
        }
    }

    fn take_job(&mut self, core: usize) -> Option<Job> {
        self.cores.get_mut(core).and_then(|slot| slot.running.take())
    }

    fn core_mut(&mut self, core: usize) -> SchedulerResult<&mut Core> {
        let num_cores = self.cores.len();
        self.cores
            .get_mut(core)
            .ok_or_else(|| SchedulerError::invalid_core(core, num_cores))
    }

    fn ensure_drained(&self) -> SchedulerResult<()> {
        let running = self.cores.busy_count();
        let waiting = self.waiting.len();
        if running + waiting > 0 {
            return Err(SchedulerError::new(
                SchedulerErrorKind::PrematureQuery,
                format!("{running} running and {waiting} waiting jobs have not completed"),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running_id(sched: &SchedulerState, core: usize) -> Option<JobId> {
        sched.running_job(core).unwrap().map(|job| job.id)
    }

    fn waiting_ids(sched: &SchedulerState) -> Vec<JobId> {
        sched.waiting_jobs().map(|job| job.id).collect()
    }

    fn completed(sched: &SchedulerState, id: JobId) -> CompletedJob {
        sched
            .completed_jobs()
            .iter()
            .find(|job| job.id == id)
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_start_validates_cores() {
        let err = SchedulerState::start(0, Scheme::Fcfs).unwrap_err();
        assert_eq!(err.kind, SchedulerErrorKind::Configuration);

        let sched = SchedulerState::start(3, Scheme::Sjf).unwrap();
        assert_eq!(sched.num_cores(), 3);
        assert_eq!(sched.idle_cores(), vec![0, 1, 2]);
        assert!(!sched.is_preemptive());
    }

    #[test]
    fn test_fcfs_scenario() {
        let mut sched = SchedulerState::start(1, Scheme::Fcfs).unwrap();
        assert_eq!(sched.on_arrival(1, 0, 5, 0).unwrap(), Some(0));
        assert_eq!(sched.on_arrival(2, 2, 3, 0).unwrap(), None);
        assert_eq!(sched.on_completion(0, 1, 5).unwrap(), Some(2));
        assert_eq!(sched.on_completion(0, 2, 8).unwrap(), None);

        let a = completed(&sched, 1);
        assert_eq!((a.waiting_time(), a.response_time(), a.turnaround_time()), (0, 0, 5));
        let b = completed(&sched, 2);
        assert_eq!((b.waiting_time(), b.response_time(), b.turnaround_time()), (3, 3, 6));

        assert!((sched.average_waiting_time().unwrap() - 1.5).abs() < 1e-10);
        assert!((sched.average_response_time().unwrap() - 1.5).abs() < 1e-10);
        assert!((sched.average_turnaround_time().unwrap() - 5.5).abs() < 1e-10);
    }

    #[test]
    fn test_psjf_preemption_scenario() {
        let mut sched = SchedulerState::start(1, Scheme::Psjf).unwrap();
        assert_eq!(sched.on_arrival(1, 0, 5, 0).unwrap(), Some(0));
        assert_eq!(sched.on_arrival(2, 2, 2, 0).unwrap(), Some(0));

        assert_eq!(running_id(&sched, 0), Some(2));
        let requeued = sched.waiting_at(0).unwrap();
        assert_eq!(requeued.id, 1);
        assert_eq!(requeued.remaining_time, 3);
        assert!(!requeued.is_running());

        assert_eq!(sched.on_completion(0, 2, 4).unwrap(), Some(1));
        assert_eq!(sched.on_completion(0, 1, 7).unwrap(), None);

        let b = completed(&sched, 2);
        assert_eq!((b.waiting_time(), b.response_time(), b.turnaround_time()), (0, 0, 2));
        let a = completed(&sched, 1);
        assert_eq!((a.waiting_time(), a.response_time(), a.turnaround_time()), (2, 0, 7));

        assert!((sched.average_waiting_time().unwrap() - 1.0).abs() < 1e-10);
        assert!((sched.average_response_time().unwrap() - 0.0).abs() < 1e-10);
        assert!((sched.average_turnaround_time().unwrap() - 4.5).abs() < 1e-10);
    }

    #[test]
    fn test_psjf_no_preemption_when_not_shorter() {
        let mut sched = SchedulerState::start(1, Scheme::Psjf).unwrap();
        sched.on_arrival(1, 0, 5, 0).unwrap();
        // Remaining 3 at t=2; a newcomer needing exactly 3 does not preempt.
        assert_eq!(sched.on_arrival(2, 2, 3, 0).unwrap(), None);
        assert_eq!(running_id(&sched, 0), Some(1));
        assert_eq!(sched.running_job(0).unwrap().unwrap().remaining_time, 3);
    }

    #[test]
    fn test_sjf_does_not_preempt() {
        let mut sched = SchedulerState::start(1, Scheme::Sjf).unwrap();
        sched.on_arrival(1, 0, 10, 0).unwrap();
        assert_eq!(sched.on_arrival(2, 1, 1, 0).unwrap(), None);
        assert_eq!(sched.on_arrival(3, 2, 4, 0).unwrap(), None);
        assert_eq!(sched.on_arrival(4, 3, 2, 0).unwrap(), None);
        assert_eq!(waiting_ids(&sched), vec![2, 4, 3]);
        // Non-preemptive arrivals leave the running job untouched.
        assert_eq!(sched.running_job(0).unwrap().unwrap().remaining_time, 10);
    }

    #[test]
    fn test_ppri_preempts_least_important() {
        let mut sched = SchedulerState::start(2, Scheme::Ppri).unwrap();
        assert_eq!(sched.on_arrival(1, 0, 10, 1).unwrap(), Some(0));
        assert_eq!(sched.on_arrival(2, 0, 10, 5).unwrap(), Some(1));
        assert_eq!(sched.on_arrival(3, 1, 10, 3).unwrap(), Some(1));

        assert_eq!(running_id(&sched, 0), Some(1));
        assert_eq!(running_id(&sched, 1), Some(3));
        assert_eq!(waiting_ids(&sched), vec![2]);
        assert_eq!(sched.waiting_at(0).unwrap().remaining_time, 9);
    }

    #[test]
    fn test_pri_waits_by_priority() {
        let mut sched = SchedulerState::start(1, Scheme::Pri).unwrap();
        sched.on_arrival(4, 0, 10, 2).unwrap();
        sched.on_arrival(2, 1, 10, 1).unwrap();
        sched.on_arrival(1, 2, 10, 3).unwrap();
        assert_eq!(waiting_ids(&sched), vec![2, 1]);
        assert_eq!(sched.snapshot().to_string(), "4(0) 2(-1) 1(-1)");
    }

    #[test]
    fn test_preemption_tie_displaces_highest_core() {
        let mut sched = SchedulerState::start(3, Scheme::Ppri).unwrap();
        sched.on_arrival(1, 0, 10, 4).unwrap();
        sched.on_arrival(2, 0, 10, 4).unwrap();
        sched.on_arrival(3, 0, 10, 2).unwrap();

        assert_eq!(sched.on_arrival(4, 1, 10, 1).unwrap(), Some(1));
        assert_eq!(running_id(&sched, 0), Some(1));
        assert_eq!(running_id(&sched, 1), Some(4));
        assert_eq!(waiting_ids(&sched), vec![2]);
    }

    #[test]
    fn test_preemptive_arrival_charges_running_jobs_once() {
        let mut sched = SchedulerState::start(1, Scheme::Psjf).unwrap();
        sched.on_arrival(1, 0, 10, 0).unwrap();
        sched.on_arrival(2, 3, 20, 0).unwrap();
        sched.on_arrival(3, 5, 30, 0).unwrap();
        // 5 units of service, charged across two arrivals.
        let running = sched.running_job(0).unwrap().unwrap();
        assert_eq!(running.remaining_time, 5);
        assert_eq!(running.projected_completion(), Some(10));
    }

    #[test]
    fn test_rr_quantum_rotation() {
        let mut sched = SchedulerState::start(1, Scheme::Rr).unwrap();
        assert_eq!(sched.on_arrival(1, 0, 5, 0).unwrap(), Some(0));
        // Round Robin never preempts on arrival.
        assert_eq!(sched.on_arrival(2, 1, 1, 0).unwrap(), None);
        assert_eq!(sched.on_arrival(3, 1, 3, 0).unwrap(), None);

        assert_eq!(sched.on_quantum_expiry(0, 2).unwrap(), Some(2));
        assert_eq!(waiting_ids(&sched), vec![3, 1]);
        assert_eq!(sched.waiting_at(1).unwrap().remaining_time, 3);

        assert_eq!(sched.on_completion(0, 2, 3).unwrap(), Some(3));
        assert_eq!(sched.on_quantum_expiry(0, 5).unwrap(), Some(1));
        assert_eq!(waiting_ids(&sched), vec![3]);
    }

    #[test]
    fn test_rr_expiry_with_empty_queue_resumes_same_job() {
        let mut sched = SchedulerState::start(1, Scheme::Rr).unwrap();
        sched.on_arrival(1, 0, 5, 0).unwrap();
        assert_eq!(sched.on_quantum_expiry(0, 2).unwrap(), Some(1));
        let job = sched.running_job(0).unwrap().unwrap();
        assert_eq!(job.remaining_time, 3);
        assert_eq!(job.last_resumed, Some(2));
        assert_eq!(job.first_dispatch, Some(0));
    }

    #[test]
    fn test_rr_requeue_goes_behind_waiting_jobs() {
        let mut sched = SchedulerState::start(2, Scheme::Rr).unwrap();
        for id in 1..=5 {
            sched.on_arrival(id, 0, 10, 0).unwrap();
        }
        assert_eq!(waiting_ids(&sched), vec![3, 4, 5]);
        assert_eq!(sched.on_quantum_expiry(1, 2).unwrap(), Some(3));
        assert_eq!(waiting_ids(&sched), vec![4, 5, 2]);
        assert_eq!(sched.on_quantum_expiry(0, 2).unwrap(), Some(4));
        assert_eq!(waiting_ids(&sched), vec![5, 2, 1]);
    }

    #[test]
    fn test_idle_core_reused_by_next_arrival() {
        let mut sched = SchedulerState::start(2, Scheme::Fcfs).unwrap();
        sched.on_arrival(1, 0, 3, 0).unwrap();
        sched.on_arrival(2, 0, 9, 0).unwrap();
        assert_eq!(sched.on_completion(0, 1, 3).unwrap(), None);
        assert_eq!(sched.idle_cores(), vec![0]);

        assert_eq!(sched.on_arrival(3, 4, 1, 0).unwrap(), Some(0));
        assert!(sched.idle_cores().is_empty());
        let job = sched.running_job(0).unwrap().unwrap();
        assert_eq!(job.first_dispatch, Some(4));
    }

    #[test]
    fn test_duplicate_job_rejected_without_state_change() {
        let mut sched = SchedulerState::start(1, Scheme::Fcfs).unwrap();
        sched.on_arrival(1, 0, 5, 0).unwrap();
        sched.on_arrival(2, 1, 5, 0).unwrap();

        let err = sched.on_arrival(2, 2, 1, 0).unwrap_err();
        assert_eq!(err.kind, SchedulerErrorKind::DuplicateJob);
        assert_eq!(sched.waiting_len(), 1);

        // Identifiers stay reserved after completion.
        sched.on_completion(0, 1, 5).unwrap();
        let err = sched.on_arrival(1, 6, 1, 0).unwrap_err();
        assert_eq!(err.kind, SchedulerErrorKind::DuplicateJob);
    }

    #[test]
    fn test_invalid_job_rejected() {
        let mut sched = SchedulerState::start(1, Scheme::Fcfs).unwrap();
        let err = sched.on_arrival(1, 0, -1, 0).unwrap_err();
        assert_eq!(err.kind, SchedulerErrorKind::InvalidJob);
        // Rejected ids are not reserved.
        assert_eq!(sched.on_arrival(1, 0, 1, 0).unwrap(), Some(0));
    }

    #[test]
    fn test_invalid_core_index() {
        let mut sched = SchedulerState::start(2, Scheme::Rr).unwrap();
        sched.on_arrival(1, 0, 5, 0).unwrap();
        assert_eq!(
            sched.on_completion(2, 1, 5).unwrap_err().kind,
            SchedulerErrorKind::InvalidCoreIndex
        );
        assert_eq!(
            sched.on_quantum_expiry(7, 5).unwrap_err().kind,
            SchedulerErrorKind::InvalidCoreIndex
        );
        assert_eq!(
            sched.running_job(2).unwrap_err().kind,
            SchedulerErrorKind::InvalidCoreIndex
        );
    }

    #[test]
    fn test_completion_of_wrong_job_keeps_state() {
        let mut sched = SchedulerState::start(2, Scheme::Fcfs).unwrap();
        sched.on_arrival(1, 0, 5, 0).unwrap();

        let err = sched.on_completion(0, 9, 5).unwrap_err();
        assert_eq!(err.kind, SchedulerErrorKind::JobNotRunning);
        assert_eq!(running_id(&sched, 0), Some(1));

        let err = sched.on_completion(1, 1, 5).unwrap_err();
        assert_eq!(err.kind, SchedulerErrorKind::JobNotRunning);
        assert_eq!(sched.statistics().completed, 0);
    }

    #[test]
    fn test_quantum_expiry_rules() {
        let mut sched = SchedulerState::start(1, Scheme::Fcfs).unwrap();
        sched.on_arrival(1, 0, 5, 0).unwrap();
        let err = sched.on_quantum_expiry(0, 2).unwrap_err();
        assert_eq!(err.kind, SchedulerErrorKind::UnsupportedEvent);
        assert_eq!(running_id(&sched, 0), Some(1));

        let mut rr = SchedulerState::start(2, Scheme::Rr).unwrap();
        rr.on_arrival(1, 0, 5, 0).unwrap();
        let err = rr.on_quantum_expiry(1, 2).unwrap_err();
        assert_eq!(err.kind, SchedulerErrorKind::JobNotRunning);
    }

    #[test]
    fn test_waiting_at_out_of_range() {
        let sched = SchedulerState::start(1, Scheme::Fcfs).unwrap();
        let err = sched.waiting_at(0).unwrap_err();
        assert_eq!(err.kind, SchedulerErrorKind::IndexOutOfRange);
    }

    #[test]
    fn test_premature_and_empty_queries() {
        let mut sched = SchedulerState::start(1, Scheme::Fcfs).unwrap();
        assert_eq!(
            sched.average_waiting_time().unwrap_err().kind,
            SchedulerErrorKind::NoCompletedJobs
        );

        sched.on_arrival(1, 0, 5, 0).unwrap();
        assert_eq!(
            sched.average_turnaround_time().unwrap_err().kind,
            SchedulerErrorKind::PrematureQuery
        );
        assert_eq!(sched.active_jobs(), 1);

        sched.on_completion(0, 1, 5).unwrap();
        assert!((sched.average_response_time().unwrap() - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_waiting_list_stays_ordered() {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        for scheme in Scheme::ALL {
            let mut rng = StdRng::seed_from_u64(3);
            let mut sched = SchedulerState::start(2, scheme).unwrap();
            for id in 0..40 {
                let burst = rng.random_range(1..20);
                let priority = rng.random_range(0..5);
                sched.on_arrival(id, id as Time, burst, priority).unwrap();
                assert!(sched.is_waiting_ordered(), "{scheme} after arrival {id}");
            }

            let mut now = 40;
            while sched.active_jobs() > 0 {
                for core in 0..sched.num_cores() {
                    if let Some(id) = running_id(&sched, core) {
                        sched.on_completion(core, id, now).unwrap();
                        assert!(sched.is_waiting_ordered(), "{scheme} after completion {id}");
                    }
                }
                now += 1;
            }
            assert_eq!(sched.completed_jobs().len(), 40);
        }
    }

    #[test]
    fn test_shutdown_returns_statistics() {
        let mut sched = SchedulerState::start(1, Scheme::Sjf).unwrap();
        sched.on_arrival(1, 0, 2, 0).unwrap();
        sched.on_arrival(2, 1, 2, 0).unwrap();
        sched.on_completion(0, 1, 2).unwrap();

        let stats = sched.shutdown();
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.turnaround_sum, 2);
    }
}
