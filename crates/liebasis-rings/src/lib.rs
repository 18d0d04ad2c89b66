//! # liebasis-rings
//!
//! Coefficient fields for the liebasis workspace.
//!
//! This crate provides:
//! - Abstract traits: `Ring`, `CommutativeRing`, `Field`
//! - Exact rationals `Q` backed by `dashu`
//! - Prime fields `FiniteField<P>`
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring
//!  └── CommutativeRing
//!       └── Field
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod finite_field;
pub mod rationals;
pub mod traits;

pub use finite_field::{FiniteField, GF101};
pub use rationals::Q;
pub use traits::{CommutativeRing, Field, Ring};
