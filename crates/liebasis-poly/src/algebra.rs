//! The algebra interface consumed by derivations.
//!
//! A derivation only needs a handful of things from the algebra it acts on:
//! the generators, partial derivatives, a canonical form for elements, and a
//! way to obtain monomials that can be compared under the ring order. Both
//! [`PolyRing`] and [`QuotientRing`](crate::quotient::QuotientRing) provide
//! them.

use std::borrow::Cow;
use std::fmt::Debug;

use liebasis_rings::traits::Field;

use crate::ordering::MonomialOrder;
use crate::ring::PolyRing;
use crate::sparse::SparsePoly;

/// How leading terms are made comparable for an algebra.
///
/// In a polynomial ring the stored representative is compared directly.
/// In a quotient the representative is lifted to the covering ring first,
/// where the monomial order is well defined.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum MonomialOrderPolicy {
    /// Compare the stored polynomial as is.
    #[default]
    Direct,
    /// Lift to the covering ring, then compare.
    LiftToCover,
}

impl MonomialOrderPolicy {
    /// Returns the polynomial whose terms should be compared.
    pub fn comparable<'a, A: Algebra>(
        self,
        algebra: &A,
        p: &'a SparsePoly<A::Coeff>,
    ) -> Cow<'a, SparsePoly<A::Coeff>> {
        match self {
            MonomialOrderPolicy::Direct => Cow::Borrowed(p),
            MonomialOrderPolicy::LiftToCover => Cow::Owned(algebra.lift(p)),
        }
    }
}

/// A commutative polynomial algebra over a field, possibly a quotient.
///
/// Elements are represented by polynomials of the covering ring in
/// canonical form (see [`Algebra::reduce`]). Two elements are equal exactly
/// when their canonical representatives are equal.
pub trait Algebra: Debug + PartialEq + Send + Sync {
    /// The coefficient field.
    type Coeff: Field + Send + Sync;

    /// The covering polynomial ring.
    fn ring(&self) -> &PolyRing<Self::Coeff>;

    /// Brings a polynomial of the covering ring to canonical form.
    fn reduce(&self, p: SparsePoly<Self::Coeff>) -> SparsePoly<Self::Coeff>;

    /// Returns the covering-ring representative of an element.
    fn lift(&self, p: &SparsePoly<Self::Coeff>) -> SparsePoly<Self::Coeff> {
        p.clone()
    }

    /// Returns true for quotient algebras.
    fn is_quotient(&self) -> bool {
        false
    }

    /// Generators of the ideal factored out (empty for a polynomial ring).
    fn ideal_generators(&self) -> &[SparsePoly<Self::Coeff>] {
        &[]
    }

    /// The policy for comparing leading terms of elements.
    fn order_policy(&self) -> MonomialOrderPolicy {
        if self.is_quotient() {
            MonomialOrderPolicy::LiftToCover
        } else {
            MonomialOrderPolicy::Direct
        }
    }

    /// Number of generators.
    fn num_gens(&self) -> usize {
        self.ring().num_gens()
    }

    /// Generator names, in order.
    fn gen_names(&self) -> &[String] {
        self.ring().names()
    }

    /// The monomial order of the covering ring.
    fn order(&self) -> MonomialOrder {
        self.ring().order()
    }

    /// Generator i as an element.
    fn gen(&self, i: usize) -> SparsePoly<Self::Coeff> {
        self.reduce(self.ring().gen(i))
    }

    /// The zero element.
    fn zero(&self) -> SparsePoly<Self::Coeff> {
        self.ring().zero()
    }

    /// Embeds a field element.
    fn constant(&self, c: Self::Coeff) -> SparsePoly<Self::Coeff> {
        self.reduce(self.ring().constant(c))
    }

    /// Partial derivative of an element with respect to generator i.
    ///
    /// Taken on the lift and brought back to canonical form.
    fn partial(&self, p: &SparsePoly<Self::Coeff>, i: usize) -> SparsePoly<Self::Coeff> {
        self.reduce(self.lift(p).derivative(i))
    }

    /// Returns true if the element is a field constant.
    fn is_constant(&self, p: &SparsePoly<Self::Coeff>) -> bool {
        self.lift(p).is_constant()
    }

    /// Returns true if `p` is structurally a polynomial of the covering ring.
    fn contains(&self, p: &SparsePoly<Self::Coeff>) -> bool {
        self.ring().contains(p)
    }
}

impl<F: Field + Send + Sync> Algebra for PolyRing<F> {
    type Coeff = F;

    fn ring(&self) -> &PolyRing<F> {
        self
    }

    fn reduce(&self, p: SparsePoly<F>) -> SparsePoly<F> {
        p
    }

    fn partial(&self, p: &SparsePoly<F>, i: usize) -> SparsePoly<F> {
        p.derivative(i)
    }

    fn is_constant(&self, p: &SparsePoly<F>) -> bool {
        p.is_constant()
    }
}
