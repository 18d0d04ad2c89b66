//! # liebasis-poly
//!
//! Multivariate polynomial algebras for liebasis.
//!
//! This crate provides:
//! - Monomials with inline exponent vectors and the lex/grlex/grevlex orders
//! - Sparse multivariate polynomials over any coefficient ring
//! - Polynomial rings with named generators
//! - Quotients by ideals given as Gröbner bases
//! - The [`Algebra`] trait derivations are defined over
//!
//! ## Canonical forms
//!
//! Every element is represented by a polynomial of the covering ring in
//! canonical form: itself for [`PolyRing`], its normal form modulo the
//! ideal for [`QuotientRing`]. Leading terms are read off the lift, as
//! selected by the algebra's [`MonomialOrderPolicy`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algebra;
pub mod error;
pub mod monomial;
pub mod ordering;
pub mod quotient;
pub mod ring;
pub mod sparse;

#[cfg(test)]
mod proptests;

pub use algebra::{Algebra, MonomialOrderPolicy};
pub use error::AlgebraError;
pub use monomial::Monomial;
pub use ordering::MonomialOrder;
pub use quotient::QuotientRing;
pub use ring::PolyRing;
pub use sparse::SparsePoly;
