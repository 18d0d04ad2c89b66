//! Structured record of a solver run.
//!
//! The solver appends one event per observable transition. The list is
//! returned in the [`SolverReport`](crate::SolverReport), so a run can be
//! inspected without a tracing subscriber.

use std::fmt;

use liebasis_poly::Monomial;

use crate::solver::SolverState;

/// One observable transition of the solver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolverEvent {
    /// A generator was queued at construction.
    Seeded {
        /// Position in the generator list.
        index: usize,
        /// Its degree, `None` for the zero derivation.
        degree: Option<u32>,
    },
    /// A candidate reduced to zero and was discarded.
    Annihilated {
        /// Iteration that popped it.
        iteration: usize,
    },
    /// A candidate survived reduction and entered the basis.
    Accepted {
        /// Iteration that popped it.
        iteration: usize,
        /// Component of its leading term.
        component: usize,
        /// Monomial of its leading term.
        monomial: Monomial,
        /// True if it replaced an entry with the same key.
        replaced: bool,
    },
    /// A basis element c · d/dx_component was found for the first time.
    TargetFound {
        /// Iteration that found it.
        iteration: usize,
        /// Generator index.
        component: usize,
    },
    /// Every d/dx_i has been found.
    Succeeded {
        /// Iteration that found the last one.
        iteration: usize,
    },
    /// The run ended without finding every d/dx_i.
    Stopped {
        /// `Exhausted` or `BudgetExceeded`.
        state: SolverState,
        /// Iterations performed.
        iterations: usize,
        /// Number of distinct d/dx_i found.
        targets_found: usize,
    },
}

impl SolverEvent {
    /// Renders the event with the algebra's generator names.
    ///
    /// Generators without a name fall back to `x{i}`.
    #[must_use]
    pub fn display_with(&self, names: &[String]) -> String {
        let name = |i: usize| names.get(i).cloned().unwrap_or_else(|| format!("x{i}"));
        match self {
            SolverEvent::Seeded { index, degree } => match degree {
                Some(d) => format!("seeded generator {index} (degree {d})"),
                None => format!("seeded generator {index} (zero)"),
            },
            SolverEvent::Annihilated { iteration } => format!("iteration {iteration}: reduced to zero"),
            SolverEvent::Accepted {
                iteration,
                component,
                monomial,
                replaced,
            } => {
                let suffix = if *replaced { " (replaced)" } else { "" };
                format!(
                    "iteration {iteration}: accepted {} * d/d{}{suffix}",
                    monomial.display_with(names),
                    name(*component)
                )
            }
            SolverEvent::TargetFound { iteration, component } => {
                format!("iteration {iteration}: found d/d{}", name(*component))
            }
            SolverEvent::Succeeded { iteration } => {
                format!("iteration {iteration}: all partial derivatives found")
            }
            SolverEvent::Stopped {
                state,
                iterations,
                targets_found,
            } => format!(
                "stopped ({state}) after {iterations} iterations with {targets_found} partial derivatives"
            ),
        }
    }
}

impl fmt::Display for SolverEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_with(&[]))
    }
}
