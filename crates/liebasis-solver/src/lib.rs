//! Basis-closure solver for Lie algebras of polynomial vector fields.
//!
//! This crate decides whether a finite set of derivations of a polynomial
//! algebra generates, under linear combination and the Lie bracket, every
//! partial derivative d/dx_i. It combines:
//! - A degree-ordered work queue with FIFO tie-break
//! - Reduction against a basis keyed by (component, leading monomial)
//! - Bracket generation against every earlier basis element
//!
//! The loop is a Buchberger-style completion; because closures need not be
//! finite it runs under an iteration budget and a negative answer is only
//! inconclusive.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod basis;
pub mod config;
pub mod error;
pub mod events;
pub mod queue;
pub mod solver;

#[cfg(test)]
mod proptests;

pub use basis::{BasisKey, BasisStore};
pub use config::SolverConfig;
pub use error::SolverError;
pub use events::SolverEvent;
pub use queue::WorkQueue;
pub use solver::{check, LieBasisSolver, SolverReport, SolverState};
