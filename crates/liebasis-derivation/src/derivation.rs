//! Derivations of polynomial algebras.
//!
//! A derivation D of A = F[x_0, ..., x_{n-1}] (or a quotient of it) is
//! determined by the images D(x_i), and extends to all of A by
//! - D(a + b) = D(a) + D(b)  (additivity)
//! - D(a · b) = D(a)·b + a·D(b)  (Leibniz rule)
//!
//! so that D(f) = Σ_i ∂f/∂x_i · D(x_i). Derivations form a Lie algebra
//! under the commutator [D1, D2] = D1∘D2 − D2∘D1.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use liebasis_poly::{Algebra, Monomial, MonomialOrderPolicy, SparsePoly};

use crate::element::Element;
use crate::error::DerivationError;

/// The coefficient field of an algebra.
pub type Coeff<A> = <A as Algebra>::Coeff;

/// The dominant term of a derivation: `coeff * monomial * d/dx_component`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeadingTerm<F> {
    /// Index of the generator whose image carries the term.
    pub component: usize,
    /// Leading monomial of that image.
    pub monomial: Monomial,
    /// Its coefficient.
    pub coeff: F,
}

impl<F> LeadingTerm<F> {
    /// The (component, monomial) pair used to index reduction bases.
    #[must_use]
    pub fn key(&self) -> (usize, Monomial) {
        (self.component, self.monomial.clone())
    }

    /// True if the monomial is 1, i.e. the term is a multiple of d/dx_component.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.monomial.is_one()
    }
}

/// A derivation of an algebra, stored as the images of its generators.
///
/// Images are kept in the algebra's canonical form. Derivations are
/// immutable: every operation returns a new value.
#[derive(Debug)]
pub struct Derivation<A: Algebra> {
    algebra: Arc<A>,
    /// D(x_i) for every generator, in canonical form.
    images: Vec<SparsePoly<Coeff<A>>>,
    /// How leading terms are read off the images.
    policy: MonomialOrderPolicy,
}

impl<A: Algebra> Clone for Derivation<A> {
    fn clone(&self) -> Self {
        Self {
            algebra: Arc::clone(&self.algebra),
            images: self.images.clone(),
            policy: self.policy,
        }
    }
}

impl<A: Algebra> Derivation<A> {
    /// Builds a derivation from one image per generator, reducing them.
    pub(crate) fn from_parts(algebra: Arc<A>, images: Vec<SparsePoly<Coeff<A>>>) -> Self {
        debug_assert_eq!(images.len(), algebra.num_gens());
        let images = images.into_iter().map(|p| algebra.reduce(p)).collect();
        let policy = algebra.order_policy();
        Self {
            algebra,
            images,
            policy,
        }
    }

    /// A derivation over the same algebra with already canonical images.
    fn with_images(&self, images: Vec<SparsePoly<Coeff<A>>>) -> Self {
        Self {
            algebra: Arc::clone(&self.algebra),
            images,
            policy: self.policy,
        }
    }

    /// Returns the algebra this derivation acts on.
    #[must_use]
    pub fn algebra(&self) -> &Arc<A> {
        &self.algebra
    }

    /// Returns the number of generators.
    #[must_use]
    pub fn num_gens(&self) -> usize {
        self.images.len()
    }

    /// Returns the generator images D(x_0), ..., D(x_{n-1}).
    #[must_use]
    pub fn images(&self) -> &[SparsePoly<Coeff<A>>] {
        &self.images
    }

    /// Returns D(x_i).
    ///
    /// # Panics
    ///
    /// Panics if `i` is not a generator index.
    #[must_use]
    pub fn image(&self, i: usize) -> &SparsePoly<Coeff<A>> {
        &self.images[i]
    }

    /// Returns the leading-term policy selected from the algebra.
    #[must_use]
    pub fn policy(&self) -> MonomialOrderPolicy {
        self.policy
    }

    /// Returns true if both derivations act on the same algebra.
    #[must_use]
    pub fn same_algebra(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.algebra, &other.algebra) || self.algebra == other.algebra
    }

    fn assert_same_algebra(&self, other: &Self) {
        assert!(
            self.same_algebra(other),
            "derivations act on different algebras"
        );
    }

    /// Returns true if every generator image is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.images.iter().all(SparsePoly::is_zero)
    }

    /// Applies the derivation to a scalar or an element of the algebra.
    ///
    /// # Errors
    ///
    /// Returns [`DerivationError::IncompatibleElement`] if a polynomial has
    /// a different number of variables or a different monomial order.
    pub fn evaluate(&self, element: &Element<Coeff<A>>) -> Result<SparsePoly<Coeff<A>>, DerivationError> {
        match element {
            Element::Scalar(_) => Ok(self.algebra.zero()),
            Element::Poly(p) => {
                if !self.algebra.contains(p) {
                    return Err(DerivationError::IncompatibleElement(format!(
                        "polynomial in {} variables under {}, algebra has {} generators under {}",
                        p.num_vars(),
                        p.order(),
                        self.num_gens(),
                        self.algebra.order()
                    )));
                }
                Ok(self.apply(p))
            }
        }
    }

    /// Applies the derivation to an element: D(f) = Σ_i ∂f/∂x_i · D(x_i).
    ///
    /// # Panics
    ///
    /// Panics if `p` is not a polynomial of the algebra.
    #[must_use]
    pub fn apply(&self, p: &SparsePoly<Coeff<A>>) -> SparsePoly<Coeff<A>> {
        assert!(self.algebra.contains(p), "element does not belong to the algebra");

        if self.algebra.is_constant(p) {
            return self.algebra.zero();
        }

        let mut acc = self.algebra.zero();
        for (i, image) in self.images.iter().enumerate() {
            if image.is_zero() {
                continue;
            }
            let partial = self.algebra.partial(p, i);
            if !partial.is_zero() {
                acc = acc + &partial * image;
            }
        }
        self.algebra.reduce(acc)
    }

    /// Pointwise sum.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        self.assert_same_algebra(other);
        self.with_images(
            self.images
                .iter()
                .zip(&other.images)
                .map(|(a, b)| a + b)
                .collect(),
        )
    }

    /// Pointwise difference.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.assert_same_algebra(other);
        self.with_images(
            self.images
                .iter()
                .zip(&other.images)
                .map(|(a, b)| a - b)
                .collect(),
        )
    }

    /// Pointwise negation.
    #[must_use]
    pub fn neg(&self) -> Self {
        self.with_images(self.images.iter().map(|p| -p).collect())
    }

    /// Multiplies every image by a scalar.
    #[must_use]
    pub fn scale(&self, c: &Coeff<A>) -> Self {
        self.with_images(self.images.iter().map(|p| p.scale(c)).collect())
    }

    /// Computes self − c · other.
    #[must_use]
    pub fn sub_scaled(&self, c: &Coeff<A>, other: &Self) -> Self {
        self.assert_same_algebra(other);
        self.with_images(
            self.images
                .iter()
                .zip(&other.images)
                .map(|(a, b)| a - &b.scale(c))
                .collect(),
        )
    }

    /// The Lie bracket [self, other](x_i) = self(other(x_i)) − other(self(x_i)).
    #[must_use]
    pub fn bracket(&self, other: &Self) -> Self {
        self.assert_same_algebra(other);
        self.with_images(
            self.images
                .iter()
                .zip(&other.images)
                .map(|(mine, theirs)| self.apply(theirs) - other.apply(mine))
                .collect(),
        )
    }

    /// Returns the leading term, or `None` for the zero derivation.
    ///
    /// The leading monomials of all images are compared under the algebra's
    /// order; on equal monomials the larger component index wins.
    #[must_use]
    pub fn leading_term(&self) -> Option<LeadingTerm<Coeff<A>>> {
        let order = self.algebra.order();
        let mut best: Option<LeadingTerm<Coeff<A>>> = None;

        for (i, image) in self.images.iter().enumerate() {
            let comparable = self.policy.comparable(&*self.algebra, image);
            let Some((m, c)) = comparable.leading_term() else {
                continue;
            };

            let replace = best
                .as_ref()
                .map_or(true, |b| order.compare(m, &b.monomial) != Ordering::Less);
            if replace {
                best = Some(LeadingTerm {
                    component: i,
                    monomial: m.clone(),
                    coeff: c.clone(),
                });
            }
        }

        best
    }

    /// Maximum total degree of the nonzero images, `None` if D = 0.
    #[must_use]
    pub fn degree(&self) -> Option<u32> {
        self.images
            .iter()
            .filter_map(|p| self.policy.comparable(&*self.algebra, p).degree())
            .max()
    }

    /// True if each D(x_i) only involves x_{i+1}, ..., x_{n-1}.
    ///
    /// In particular D(x_{n-1}) must be a constant.
    #[must_use]
    pub fn is_triangular(&self) -> bool {
        self.images.iter().enumerate().all(|(i, p)| {
            self.policy
                .comparable(&*self.algebra, p)
                .variables()
                .into_iter()
                .all(|v| v > i)
        })
    }

    /// True if D maps the ideal of a quotient algebra into itself.
    ///
    /// Only then does D descend to the quotient. Always true over a
    /// polynomial ring.
    #[must_use]
    pub fn is_well_defined(&self) -> bool {
        self.algebra
            .ideal_generators()
            .iter()
            .all(|f| self.apply(f).is_zero())
    }

    /// If the derivation is c · d/dx_i for a nonzero constant c, returns i.
    #[must_use]
    pub fn as_partial(&self) -> Option<usize> {
        let mut nonzero = self.images.iter().enumerate().filter(|(_, p)| !p.is_zero());
        match (nonzero.next(), nonzero.next()) {
            (Some((i, p)), None) if self.algebra.is_constant(p) => Some(i),
            _ => None,
        }
    }
}

impl<A: Algebra> PartialEq for Derivation<A> {
    fn eq(&self, other: &Self) -> bool {
        self.same_algebra(other) && self.images == other.images
    }
}

impl<A: Algebra> fmt::Display for Derivation<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = self.algebra.gen_names();
        let parts: Vec<String> = self
            .images
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.is_zero())
            .map(|(i, p)| {
                let image = p.display_with(names);
                let image = if p.len() > 1 { format!("({image})") } else { image };
                format!("{image} * d/d{}", names[i])
            })
            .collect();

        if parts.is_empty() {
            write!(f, "0")
        } else {
            write!(f, "{}", parts.join(" + "))
        }
    }
}
