//! # liebasis
//!
//! Deciding generation of polynomial vector fields under the Lie bracket.
//!
//! Given derivations D_1, ..., D_m of K[x_1, ..., x_n] (or of a quotient
//! of it), liebasis checks whether every partial derivative d/dx_i lies in
//! the Lie algebra they generate, by completing a basis of normalized
//! derivations the way Buchberger's algorithm completes a Gröbner basis.
//!
//! ## Features
//!
//! - **Coefficients**: exact rationals and prime fields
//! - **Algebras**: polynomial rings with named generators, quotients by
//!   Gröbner bases
//! - **Derivations**: explicit, linear, Weitzenböck and Jacobian vector
//!   fields; the Beldiev and Andrist generating families
//! - **Solver**: degree-ordered closure with a structured event log
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use liebasis::prelude::*;
//!
//! let ring = Arc::new(PolyRing::<Q>::parse("x, y", MonomialOrder::Grevlex).unwrap());
//! let dx = Derivation::partial(Arc::clone(&ring), 0).unwrap();
//! let x_dy = Derivation::from_images(Arc::clone(&ring), vec![ring.zero(), ring.gen(0)]).unwrap();
//!
//! // [d/dx, x d/dy] = d/dy
//! assert!(check(vec![dx, x_dy], 100).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use liebasis_derivation as derivation;
pub use liebasis_linalg as linalg;
pub use liebasis_poly as poly;
pub use liebasis_rings as rings;
pub use liebasis_solver as solver;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use liebasis_derivation::{andrist, beldiev, Derivation, DerivationError, Element, LeadingTerm};
    pub use liebasis_linalg::DenseMatrix;
    pub use liebasis_poly::{Algebra, MonomialOrder, MonomialOrderPolicy, PolyRing, QuotientRing, SparsePoly};
    pub use liebasis_rings::{Field, Ring, GF101, Q};
    pub use liebasis_solver::{check, LieBasisSolver, SolverConfig, SolverReport, SolverState};
}
