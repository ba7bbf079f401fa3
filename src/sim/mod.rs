//! Workload replay harness.
//!
//! Drives a [`SchedulerState`](crate::scheduler::SchedulerState) from an
//! in-memory workload, feeding arrivals, completions and quantum expiries
//! in non-decreasing time order, the way an external event source would.
//! Useful for comparing schemes on the same job mix.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::policy::Scheme;
//! use u_cpusched::scheduler::SchedulerConfig;
//! use u_cpusched::sim::{Simulator, WorkloadGenerator};
//!
//! let workload = WorkloadGenerator::new().with_ticks(50).generate(1);
//! for scheme in Scheme::ALL {
//!     let report = Simulator::new(SchedulerConfig::new(2, scheme))
//!         .with_quantum(2)
//!         .run(&workload)
//!         .unwrap();
//!     assert_eq!(report.completed.len(), workload.len());
//! }
//! ```

mod simulator;
mod workload;

pub use simulator::{DispatchRecord, SimulationReport, Simulator};
pub use workload::{JobSpec, Workload, WorkloadGenerator};
