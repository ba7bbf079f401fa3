//! Scheduling domain models.
//!
//! Provides the data types shared by the dispatcher and the replay
//! harness.
//!
//! # Domain Mappings
//!
//! | u-cpusched | Operating system | Batch cluster |
//! |------------|------------------|---------------|
//! | Job | Process / thread | Batch job |
//! | Core | CPU | Worker node |
//! | CompletedJob | Exited process accounting | Job record |

mod cpu;
mod job;

pub use cpu::{Core, CoreRegistry};
pub use job::{CompletedJob, Job, JobId, Time};
