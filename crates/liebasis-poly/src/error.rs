//! Errors raised while constructing polynomial algebras.

use thiserror::Error;

/// Errors that can occur when building a polynomial ring or a quotient.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AlgebraError {
    /// A ring needs at least one generator.
    #[error("a polynomial ring needs at least one generator")]
    NoGenerators,

    #[error("generator name at position {0} is empty")]
    EmptyGeneratorName(usize),

    #[error("generator name `{0}` is used more than once")]
    DuplicateGenerator(String),

    /// A polynomial with a different variable count or monomial order.
    #[error("polynomial does not belong to the ring {ring}")]
    ForeignElement {
        /// Display form of the ring that rejected the element.
        ring: String,
    },

    #[error("the ideal contains a unit, the quotient would be the zero ring")]
    UnitIdeal,

    /// Buchberger's criterion failed for a pair of modulus generators.
    #[error("modulus is not a Gröbner basis: S({first}, {second}) does not reduce to zero")]
    NotGroebnerBasis {
        /// Index of the first generator of the failing pair.
        first: usize,
        /// Index of the second generator of the failing pair.
        second: usize,
    },
}
