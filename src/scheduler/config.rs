//! Scheduler start-up configuration.

use serde::{Deserialize, Serialize};

use crate::error::{SchedulerError, SchedulerResult};
use crate::policy::Scheme;

/// Parameters fixed for the lifetime of a scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Number of cores (must be positive).
    pub num_cores: usize,
    /// Scheduling scheme.
    pub scheme: Scheme,
}

impl SchedulerConfig {
    /// Creates a configuration.
    pub fn new(num_cores: usize, scheme: Scheme) -> Self {
        Self { num_cores, scheme }
    }

    /// Sets the core count.
    pub fn with_num_cores(mut self, num_cores: usize) -> Self {
        self.num_cores = num_cores;
        self
    }

    /// Sets the scheme.
    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Parses a scheme name and builds a configuration.
    ///
    /// Accepts a signed core count so callers can pass raw input; zero or
    /// negative counts are rejected.
    pub fn parse(num_cores: i64, scheme: &str) -> SchedulerResult<Self> {
        let scheme: Scheme = scheme.parse()?;
        let num_cores = usize::try_from(num_cores).map_err(|_| {
            SchedulerError::configuration(format!("num_cores must be positive, got {num_cores}"))
        })?;
        let config = Self::new(num_cores, scheme);
        config.validate()?;
        Ok(config)
    }

    /// Checks the configuration.
    pub fn validate(&self) -> SchedulerResult<()> {
        if self.num_cores == 0 {
            return Err(SchedulerError::configuration(
                "num_cores must be positive, got 0",
            ));
        }
        Ok(())
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self::new(1, Scheme::Fcfs)
    }
}
