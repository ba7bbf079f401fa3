//! Scheduling policies.
//!
//! Each [`Scheme`] pairs a job comparator with a preemption flag. The
//! comparator drives placement in the waiting list and the preemption
//! check on arrival; it never mutates job state.
//!
//! | Scheme | Ranks by | Preemptive |
//! |--------|----------|------------|
//! | FCFS | arrival time | no |
//! | RR | nothing (FIFO) | yes, on quantum expiry |
//! | SJF | burst time | no |
//! | PSJF | remaining time | yes |
//! | PRI | priority | no |
//! | PPRI | priority | yes |
//!
//! # Score Convention
//! Smaller key = more preferred. For the priority schemes a lower
//! priority value means a more important job.
//!
//! # References
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces", Ch. 7-8

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SchedulerError;
use crate::models::Job;
use crate::queue::Comparator;

/// A named scheduling scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Scheme {
    /// First Come First Served.
    Fcfs,
    /// Round Robin (quantum-driven).
    Rr,
    /// Shortest Job First.
    Sjf,
    /// Preemptive Shortest Job First (shortest remaining time).
    Psjf,
    /// Static priority.
    Pri,
    /// Preemptive static priority.
    Ppri,
}

impl Scheme {
    /// Every scheme, in table order.
    pub const ALL: [Scheme; 6] = [
        Scheme::Fcfs,
        Scheme::Rr,
        Scheme::Sjf,
        Scheme::Psjf,
        Scheme::Pri,
        Scheme::Ppri,
    ];

    /// Short scheme name (e.g., "PSJF").
    pub fn name(&self) -> &'static str {
        match self {
            Scheme::Fcfs => "FCFS",
            Scheme::Rr => "RR",
            Scheme::Sjf => "SJF",
            Scheme::Psjf => "PSJF",
            Scheme::Pri => "PRI",
            Scheme::Ppri => "PPRI",
        }
    }

    /// Scheme description.
    pub fn description(&self) -> &'static str {
        match self {
            Scheme::Fcfs => "First Come First Served",
            Scheme::Rr => "Round Robin",
            Scheme::Sjf => "Shortest Job First",
            Scheme::Psjf => "Preemptive Shortest Job First",
            Scheme::Pri => "Priority",
            Scheme::Ppri => "Preemptive Priority",
        }
    }

    /// Whether a running job may lose its core before completing.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Scheme::Rr | Scheme::Psjf | Scheme::Ppri)
    }

    /// Whether the scheme is driven by quantum expiry events.
    pub fn uses_quantum(&self) -> bool {
        matches!(self, Scheme::Rr)
    }

    /// Compares two jobs under this scheme.
    ///
    /// `Less` = `a` preferred. Round Robin never expresses a preference.
    pub fn compare_jobs(&self, a: &Job, b: &Job) -> Ordering {
        match self {
            Scheme::Fcfs => a.arrival_time.cmp(&b.arrival_time),
            Scheme::Rr => Ordering::Equal,
            Scheme::Sjf => a.burst_time.cmp(&b.burst_time),
            Scheme::Psjf => a.remaining_time.cmp(&b.remaining_time),
            Scheme::Pri | Scheme::Ppri => a.priority.cmp(&b.priority),
        }
    }
}

impl Comparator<Job> for Scheme {
    fn compare(&self, a: &Job, b: &Job) -> Ordering {
        self.compare_jobs(a, b)
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scheme {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scheme::ALL
            .iter()
            .copied()
            .find(|scheme| scheme.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SchedulerError::configuration(format!("Unknown scheme: '{s}'")))
    }
}
