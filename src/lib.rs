//! CPU scheduling simulation for the U-Engine ecosystem.
//!
//! Simulates job scheduling over a fixed number of cores under one of six
//! classic policies and reports waiting, response and turnaround times.
//! The crate is event-driven: a caller (or the bundled replay harness)
//! reports arrivals, completions and quantum expiries, and the scheduler
//! answers with core assignments.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Job`, `Core`, `CoreRegistry`, `CompletedJob`
//! - **`queue`**: Comparator-ordered waiting list (`OrderedQueue`)
//! - **`policy`**: Scheduling schemes: FCFS, RR, SJF, PSJF, PRI, PPRI
//! - **`scheduler`**: Dispatch engine (`SchedulerState`) and `Statistics`
//! - **`sim`**: Workload generation and discrete-event replay
//! - **`error`**: `SchedulerError` and its kinds
//!
//! # Logging
//!
//! Decisions are reported through the `log` facade (`debug` for dispatch
//! and preemption, `trace` for queue placement). Install any logger to see
//! them.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces", Ch. 7-9

pub mod error;
pub mod models;
pub mod policy;
pub mod queue;
pub mod scheduler;
pub mod sim;

pub use error::{SchedulerError, SchedulerErrorKind, SchedulerResult};
pub use policy::Scheme;
pub use scheduler::{SchedulerConfig, SchedulerState};
