//! # liebasis-linalg
//!
//! Small dense matrices for liebasis.
//!
//! This crate provides:
//! - Dense row-major matrices over a ring
//! - Products, powers and a nilpotency predicate
//! - Determinants by cofactor expansion, for field or polynomial entries

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod dense_matrix;
pub mod error;

pub use dense_matrix::DenseMatrix;
pub use error::MatrixError;
