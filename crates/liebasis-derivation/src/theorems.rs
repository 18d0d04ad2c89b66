//! Generating sets from published generation theorems.
//!
//! Each function returns a small family of vector fields on K^n that is
//! known to generate the Lie algebra of all polynomial vector fields, so in
//! particular every d/dz_i lies in the Lie algebra they span. Variables are
//! written z_1, ..., z_n here and map to generators 0, ..., n − 1.

use std::sync::Arc;

use liebasis_poly::{Algebra, Monomial, SparsePoly};
use liebasis_rings::traits::Ring;

use crate::derivation::{Coeff, Derivation};
use crate::error::DerivationError;

fn require_dimension<A: Algebra>(algebra: &A, required: usize) -> Result<usize, DerivationError> {
    let n = algebra.num_gens();
    if n < required {
        return Err(DerivationError::DimensionTooSmall { required, found: n });
    }
    Ok(n)
}

/// The monomial with the given exponents, coefficient 1.
fn monic_term<A: Algebra>(algebra: &A, exps: &[u32]) -> SparsePoly<Coeff<A>> {
    SparsePoly::monomial(Monomial::new(exps), <Coeff<A> as Ring>::one(), algebra.order())
}

/// The exponent 4(k + 2) of (z_{k+2} ⋯ z_n) in V(z_{k+1}), k zero-based.
fn beldiev_power(k: usize, dimension: usize) -> Result<u32, DerivationError> {
    k.checked_add(2)
        .and_then(|e| e.checked_mul(4))
        .and_then(|e| u32::try_from(e).ok())
        .ok_or(DerivationError::ExponentOverflow { dimension })
}

/// Beldiev's pair (U, V).
///
/// - U = d/dz_n
/// - V = Σ_{k=1}^{n-1} (z_{k+1} ⋯ z_n)^{4(k+1)} d/dz_k + (z_1 ⋯ z_n)^4 d/dz_n
///
/// # Errors
///
/// Requires n ≥ 2.
pub fn beldiev<A: Algebra>(algebra: Arc<A>) -> Result<(Derivation<A>, Derivation<A>), DerivationError> {
    let n = require_dimension(&*algebra, 2)?;

    let u = Derivation::partial(Arc::clone(&algebra), n - 1)?;

    let mut images = Vec::with_capacity(n);
    for k in 0..n - 1 {
        let power = beldiev_power(k, n)?;
        let exps: Vec<u32> = (0..n).map(|j| if j > k { power } else { 0 }).collect();
        images.push(monic_term(&*algebra, &exps));
    }
    images.push(monic_term(&*algebra, &vec![4; n]));

    let v = Derivation::from_images(algebra, images)?;
    Ok((u, v))
}

/// Andrist's triple (U, V, W).
///
/// - U = d/dz_n
/// - V = d/dz_n + Σ_{k=1}^{n-1} z_{k+1}^3 · z_{k+2} ⋯ z_n d/dz_k
/// - W = (z_1 ⋯ z_{n-1})^2 · z_n d/dz_n
///
/// # Errors
///
/// Requires n ≥ 2.
#[allow(clippy::type_complexity)]
pub fn andrist<A: Algebra>(
    algebra: Arc<A>,
) -> Result<(Derivation<A>, Derivation<A>, Derivation<A>), DerivationError> {
    let n = require_dimension(&*algebra, 2)?;

    let u = Derivation::partial(Arc::clone(&algebra), n - 1)?;

    let mut images = Vec::with_capacity(n);
    for k in 0..n - 1 {
        let exps: Vec<u32> = (0..n)
            .map(|j| {
                if j == k + 1 {
                    3
                } else if j > k + 1 {
                    1
                } else {
                    0
                }
            })
            .collect();
        images.push(monic_term(&*algebra, &exps));
    }
    images.push(algebra.constant(<Coeff<A> as Ring>::one()));
    let v = Derivation::from_images(Arc::clone(&algebra), images)?;

    let mut w_exps = vec![2; n];
    w_exps[n - 1] = 1;
    let w = Derivation::from_mapping(Arc::clone(&algebra), [(n - 1, monic_term(&*algebra, &w_exps))])?;

    Ok((u, v, w))
}

#[cfg(test)]
mod tests {
    use super::*;
    use liebasis_poly::{MonomialOrder, PolyRing};
    use liebasis_rings::rationals::Q;

    fn ring(names: &str) -> Arc<PolyRing<Q>> {
        Arc::new(PolyRing::parse(names, MonomialOrder::Grevlex).unwrap())
    }

    #[test]
    fn test_beldiev_in_the_plane() {
        let alg = ring("z1, z2");
        let (u, v) = beldiev(Arc::clone(&alg)).unwrap();

        assert_eq!(u.as_partial(), Some(1));
        // V = z2^8 d/dz1 + z1^4 z2^4 d/dz2
        assert_eq!(v.image(0), &alg.term(Q::from_integer(1), &[0, 8]));
        assert_eq!(v.image(1), &alg.term(Q::from_integer(1), &[4, 4]));
        assert_eq!(v.degree(), Some(8));
    }

    #[test]
    fn test_beldiev_in_three_dimensions() {
        let alg = ring("z1, z2, z3");
        let (_, v) = beldiev(Arc::clone(&alg)).unwrap();

        // (z2 z3)^8 d/dz1 + z3^12 d/dz2 + (z1 z2 z3)^4 d/dz3
        assert_eq!(v.image(0), &alg.term(Q::from_integer(1), &[0, 8, 8]));
        assert_eq!(v.image(1), &alg.term(Q::from_integer(1), &[0, 0, 12]));
        assert_eq!(v.image(2), &alg.term(Q::from_integer(1), &[4, 4, 4]));
    }

    #[test]
    fn test_beldiev_power() {
        assert_eq!(beldiev_power(0, 2), Ok(8));
        assert_eq!(beldiev_power(1, 3), Ok(12));
        assert_eq!(
            beldiev_power(usize::MAX, 7),
            Err(DerivationError::ExponentOverflow { dimension: 7 })
        );
        assert_eq!(
            beldiev_power(1 << 31, 7),
            Err(DerivationError::ExponentOverflow { dimension: 7 })
        );
    }

    #[test]
    fn test_andrist_in_three_dimensions() {
        let alg = ring("z1, z2, z3");
        let (u, v, w) = andrist(Arc::clone(&alg)).unwrap();

        assert_eq!(u.as_partial(), Some(2));
        // V = z2^3 z3 d/dz1 + z3^3 d/dz2 + d/dz3
        assert_eq!(v.image(0), &alg.term(Q::from_integer(1), &[0, 3, 1]));
        assert_eq!(v.image(1), &alg.term(Q::from_integer(1), &[0, 0, 3]));
        assert_eq!(v.image(2), &alg.one());
        assert!(v.is_triangular());
        // W = z1^2 z2^2 z3 d/dz3
        assert_eq!(w.image(2), &alg.term(Q::from_integer(1), &[2, 2, 1]));
        assert!(w.image(0).is_zero() && w.image(1).is_zero());
    }

    #[test]
    fn test_dimension_check() {
        let line = ring("t");
        assert_eq!(
            beldiev(Arc::clone(&line)).unwrap_err(),
            DerivationError::DimensionTooSmall { required: 2, found: 1 }
        );
        assert!(andrist(line).is_err());
    }
}
