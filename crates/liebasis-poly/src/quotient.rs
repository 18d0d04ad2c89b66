//! Quotients of polynomial rings by ideals given as Gröbner bases.
//!
//! Elements are stored as normal forms modulo the ideal, so structural
//! equality of representatives is equality in the quotient. Computing a
//! Gröbner basis is not this module's job: the modulus must already be one,
//! and construction verifies that with Buchberger's S-polynomial criterion.

use std::fmt;

use liebasis_rings::traits::Field;

use crate::algebra::Algebra;
use crate::error::AlgebraError;
use crate::ring::PolyRing;
use crate::sparse::SparsePoly;

/// The quotient F[x_0, ..., x_{n-1}] / I.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct QuotientRing<F: Field> {
    /// The covering ring.
    ring: PolyRing<F>,
    /// Monic Gröbner basis of I under the ring order.
    modulus: Vec<SparsePoly<F>>,
}

impl<F: Field> QuotientRing<F> {
    /// Creates the quotient of `ring` by the ideal generated by `modulus`.
    ///
    /// Zero generators are ignored.
    ///
    /// # Errors
    ///
    /// Fails if a generator lies outside `ring`, if the ideal contains a
    /// nonzero constant, or if the generators are not a Gröbner basis.
    pub fn new(ring: PolyRing<F>, modulus: Vec<SparsePoly<F>>) -> Result<Self, AlgebraError> {
        let mut indexed: Vec<(usize, SparsePoly<F>)> = Vec::with_capacity(modulus.len());
        for (i, p) in modulus.into_iter().enumerate() {
            ring.check(&p)?;
            if p.is_zero() {
                continue;
            }
            if p.is_constant() {
                return Err(AlgebraError::UnitIdeal);
            }
            indexed.push((i, monic(&p)));
        }

        let quotient = Self {
            ring,
            modulus: indexed.iter().map(|(_, p)| p.clone()).collect(),
        };

        for a in 0..indexed.len() {
            for b in (a + 1)..indexed.len() {
                let (f, g) = (&indexed[a].1, &indexed[b].1);
                if let Some(s) = s_polynomial(f, g) {
                    if !quotient.normal_form(&s).is_zero() {
                        return Err(AlgebraError::NotGroebnerBasis {
                            first: indexed[a].0,
                            second: indexed[b].0,
                        });
                    }
                }
            }
        }

        Ok(quotient)
    }

    /// Returns the monic Gröbner basis of the ideal.
    #[must_use]
    pub fn modulus(&self) -> &[SparsePoly<F>] {
        &self.modulus
    }

    /// Reduces a polynomial to its normal form modulo the ideal.
    ///
    /// Every term of the result is irreducible by the leading monomials of
    /// the modulus.
    #[must_use]
    pub fn normal_form(&self, p: &SparsePoly<F>) -> SparsePoly<F> {
        let order = p.order();
        let mut remainder = SparsePoly::zero(p.num_vars(), order);
        let mut current = p.clone();

        while let Some((lm, lc)) = current.leading_term().cloned() {
            let divisor = self.modulus.iter().find_map(|g| {
                g.leading_monomial()
                    .and_then(|glm| lm.div(glm))
                    .map(|q| (g, q))
            });

            match divisor {
                Some((g, q)) => {
                    // g is monic, so this cancels the leading term exactly.
                    current = &current - &g.mul_term(&q, &lc);
                }
                None => {
                    let lead = SparsePoly::monomial(lm, lc, order);
                    current = &current - &lead;
                    remainder = remainder + lead;
                }
            }
        }

        remainder
    }

    /// Returns true if `p` lies in the ideal.
    #[must_use]
    pub fn in_ideal(&self, p: &SparsePoly<F>) -> bool {
        self.normal_form(p).is_zero()
    }
}

impl<F: Field + Send + Sync> Algebra for QuotientRing<F> {
    type Coeff = F;

    fn ring(&self) -> &PolyRing<F> {
        &self.ring
    }

    fn reduce(&self, p: SparsePoly<F>) -> SparsePoly<F> {
        self.normal_form(&p)
    }

    fn is_quotient(&self) -> bool {
        true
    }

    fn ideal_generators(&self) -> &[SparsePoly<F>] {
        &self.modulus
    }
}

impl<F: Field> fmt::Display for QuotientRing<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let gens: Vec<String> = self
            .modulus
            .iter()
            .map(|p| p.display_with(self.ring.names()))
            .collect();
        write!(f, "{} / ({})", self.ring, gens.join(", "))
    }
}

/// Scales a nonzero polynomial to leading coefficient 1.
fn monic<F: Field>(p: &SparsePoly<F>) -> SparsePoly<F> {
    match p.leading_coeff() {
        Some(lc) if !lc.is_one() => p.scale(&F::one().field_div(lc)),
        _ => p.clone(),
    }
}

/// S-polynomial of two monic polynomials, or `None` when Buchberger's
/// first criterion (coprime leading monomials) already guarantees a zero
/// reduction.
fn s_polynomial<F: Field>(f: &SparsePoly<F>, g: &SparsePoly<F>) -> Option<SparsePoly<F>> {
    let (a, b) = (f.leading_monomial()?, g.leading_monomial()?);
    if a.is_coprime(b) {
        return None;
    }

    let l = a.lcm(b);
    let one = F::one();
    let left = f.mul_term(&l.div(a)?, &one);
    let right = g.mul_term(&l.div(b)?, &one);
    Some(left - right)
}
