//! Values a derivation can be applied to.

use liebasis_poly::SparsePoly;
use liebasis_rings::traits::Field;

/// An input to [`Derivation::evaluate`](crate::Derivation::evaluate).
///
/// Field scalars are constants and always differentiate to zero;
/// polynomials must belong to the derivation's algebra.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Element<F: Field> {
    /// A field scalar.
    Scalar(F),
    /// A polynomial of the algebra.
    Poly(SparsePoly<F>),
}

impl<F: Field> Element<F> {
    /// Returns true if the element is a constant.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        match self {
            Element::Scalar(_) => true,
            Element::Poly(p) => p.is_constant(),
        }
    }
}

impl<F: Field> From<SparsePoly<F>> for Element<F> {
    fn from(p: SparsePoly<F>) -> Self {
        Element::Poly(p)
    }
}

impl<F: Field> From<&SparsePoly<F>> for Element<F> {
    fn from(p: &SparsePoly<F>) -> Self {
        Element::Poly(p.clone())
    }
}
