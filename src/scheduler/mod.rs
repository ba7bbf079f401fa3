//! Dispatch engine and timing statistics.
//!
//! [`SchedulerState`] is the event-driven core: the caller feeds it job
//! arrivals, completions and quantum expiries in non-decreasing time
//! order, and it answers with core assignments. [`Statistics`] collects
//! waiting, response and turnaround sums as jobs finish.
//!
//! # Job Lifecycle
//!
//! ```text
//! Unscheduled --arrival--> Waiting <--preempt/expiry-- Running --completion--> Finished
//!                  \                 --dispatch-->       ^
//!                   `----------- idle core / preempt ---'
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 1.2

mod config;
mod snapshot;
mod state;
mod stats;

pub use config::SchedulerConfig;
pub use snapshot::{QueueSnapshot, SnapshotEntry};
pub use state::SchedulerState;
pub use stats::Statistics;
