//! Errors raised while building or evaluating derivations.

use liebasis_linalg::MatrixError;
use liebasis_poly::AlgebraError;
use thiserror::Error;

/// Errors that can occur when constructing or evaluating a derivation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DerivationError {
    #[error("generator index {index} out of range for {num_gens} generators")]
    UnknownGenerator {
        /// The rejected index.
        index: usize,
        /// Number of generators of the algebra.
        num_gens: usize,
    },

    #[error("no generator named `{0}`")]
    UnknownGeneratorName(String),

    /// The value is not an element of the derivation's algebra.
    #[error("element is not compatible with the algebra: {0}")]
    IncompatibleElement(String),

    #[error("expected {expected} generator images, got {found}")]
    ImageCountMismatch {
        /// Number of generators.
        expected: usize,
        /// Number of images supplied.
        found: usize,
    },

    #[error("expected a {expected}x{expected} matrix, got {rows}x{cols}")]
    MatrixDimension {
        /// Number of generators.
        expected: usize,
        /// Rows supplied.
        rows: usize,
        /// Columns supplied.
        cols: usize,
    },

    #[error("matrix is not nilpotent")]
    NotNilpotent,

    /// The Jacobian construction needs exactly n - 1 polynomials.
    #[error("expected {expected} polynomials, got {found}")]
    PolynomialCount {
        /// n - 1 for n generators.
        expected: usize,
        /// Number of polynomials supplied.
        found: usize,
    },

    #[error("construction needs at least {required} generators, the algebra has {found}")]
    DimensionTooSmall {
        /// Minimum number of generators.
        required: usize,
        /// Generators of the algebra.
        found: usize,
    },

    /// A generating-family exponent does not fit in a monomial exponent.
    #[error("exponent overflows for {dimension} generators")]
    ExponentOverflow {
        /// Generators of the algebra.
        dimension: usize,
    },

    #[error(transparent)]
    Matrix(#[from] MatrixError),

    #[error(transparent)]
    Algebra(#[from] AlgebraError),
}
