//! Solver configuration.

use crate::error::SolverError;

/// Configuration for a [`LieBasisSolver`](crate::LieBasisSolver) run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    /// Maximum number of queue items to process.
    pub max_iter: usize,
    /// Stop as soon as every d/dx_i has been found.
    ///
    /// When false the loop keeps completing the basis until the queue
    /// empties or the budget runs out.
    pub stop_on_success: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iter: 1000,
            stop_on_success: true,
        }
    }
}

impl SolverConfig {
    /// Default configuration with the given iteration budget.
    #[must_use]
    pub fn with_max_iter(max_iter: usize) -> Self {
        Self {
            max_iter,
            ..Self::default()
        }
    }

    pub(crate) fn validate(&self) -> Result<(), SolverError> {
        if self.max_iter == 0 {
            return Err(SolverError::ZeroBudget);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SolverConfig::default();
        assert_eq!(config.max_iter, 1000);
        assert!(config.stop_on_success);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_budget_rejected() {
        assert_eq!(SolverConfig::with_max_iter(0).validate(), Err(SolverError::ZeroBudget));
    }
}
