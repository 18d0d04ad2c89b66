//! Error types for the basis-closure solver.

use thiserror::Error;

/// Errors raised while setting up a solver run.
///
/// All of them are detected before any solver state is built.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SolverError {
    /// No generator derivations were supplied.
    #[error("generator list must not be empty")]
    EmptyGenerators,

    /// A generator acts on a different algebra than the first one.
    #[error("generator {index} acts on a different algebra than generator 0")]
    MixedAlgebras {
        /// Position of the offending generator.
        index: usize,
    },

    /// The iteration budget was zero.
    #[error("iteration budget must be positive")]
    ZeroBudget,
}
