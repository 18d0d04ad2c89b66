//! Derivations of polynomial algebras
//!
//! A derivation of K[x_1, ..., x_n] (or of a quotient K[x]/I) is a K-linear
//! map D satisfying the Leibniz rule D(fg) = f·D(g) + g·D(f). It is fixed by
//! the images of the generators, so it is the vector field
//!
//!   D = Σ D(x_i) · d/dx_i
//!
//! The derivations of an algebra form a Lie algebra under the commutator
//! bracket [A, B] = A∘B − B∘A, computed on generators as
//! [A, B](x_i) = A(B(x_i)) − B(A(x_i)).
//!
//! # Contents
//!
//! - [`Derivation`]: vector fields, their linear structure and bracket
//! - Leading terms and degrees used by the closure search
//! - Constructors from images, matrices and Jacobian minors
//! - [`beldiev`] and [`andrist`]: known generating families of K^n

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod constructors;
pub mod derivation;
pub mod element;
pub mod error;
pub mod theorems;

#[cfg(test)]
mod proptests;

pub use derivation::{Coeff, Derivation, LeadingTerm};
pub use element::Element;
pub use error::DerivationError;
pub use liebasis_poly::MonomialOrderPolicy;
pub use theorems::{andrist, beldiev};
