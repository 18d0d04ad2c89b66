//! Ways of building derivations.
//!
//! Besides explicit generator images, derivations come from matrices
//! (linear and Weitzenböck derivations) and from n − 1 polynomials via
//! signed Jacobian minors.

use std::sync::Arc;

use liebasis_linalg::DenseMatrix;
use liebasis_poly::{Algebra, SparsePoly};
use liebasis_rings::traits::Ring;
use rayon::prelude::*;

use crate::derivation::{Coeff, Derivation};
use crate::error::DerivationError;

impl<A: Algebra> Derivation<A> {
    /// Builds a derivation from the images D(x_0), ..., D(x_{n-1}).
    ///
    /// # Errors
    ///
    /// Fails if the number of images differs from the number of generators
    /// or an image does not belong to the algebra.
    pub fn from_images(algebra: Arc<A>, images: Vec<SparsePoly<Coeff<A>>>) -> Result<Self, DerivationError> {
        if images.len() != algebra.num_gens() {
            return Err(DerivationError::ImageCountMismatch {
                expected: algebra.num_gens(),
                found: images.len(),
            });
        }
        for p in &images {
            algebra.ring().check(p)?;
        }
        Ok(Self::from_parts(algebra, images))
    }

    /// Builds a derivation from (generator index, image) pairs.
    ///
    /// Generators without an entry map to zero; a repeated index keeps the
    /// last image.
    ///
    /// # Errors
    ///
    /// Fails on an index outside the generators or a foreign image.
    pub fn from_mapping<I>(algebra: Arc<A>, mapping: I) -> Result<Self, DerivationError>
    where
        I: IntoIterator<Item = (usize, SparsePoly<Coeff<A>>)>,
    {
        let n = algebra.num_gens();
        let mut images = vec![algebra.zero(); n];
        for (index, image) in mapping {
            if index >= n {
                return Err(DerivationError::UnknownGenerator { index, num_gens: n });
            }
            algebra.ring().check(&image)?;
            images[index] = image;
        }
        Ok(Self::from_parts(algebra, images))
    }

    /// Builds a derivation from (generator name, image) pairs.
    ///
    /// # Errors
    ///
    /// Fails on an unknown name or a foreign image.
    pub fn from_named<'a, I>(algebra: Arc<A>, mapping: I) -> Result<Self, DerivationError>
    where
        I: IntoIterator<Item = (&'a str, SparsePoly<Coeff<A>>)>,
    {
        let indexed = mapping
            .into_iter()
            .map(|(name, image)| {
                algebra
                    .ring()
                    .index_of(name)
                    .map(|i| (i, image))
                    .ok_or_else(|| DerivationError::UnknownGeneratorName(name.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_mapping(algebra, indexed)
    }

    /// The zero derivation.
    #[must_use]
    pub fn zero(algebra: Arc<A>) -> Self {
        let images = vec![algebra.zero(); algebra.num_gens()];
        Self::from_parts(algebra, images)
    }

    /// The partial derivative d/dx_i.
    ///
    /// # Errors
    ///
    /// Fails if `i` is not a generator index.
    pub fn partial(algebra: Arc<A>, i: usize) -> Result<Self, DerivationError> {
        let one = algebra.constant(<Coeff<A> as Ring>::one());
        Self::from_mapping(algebra, [(i, one)])
    }

    /// The linear derivation D(x_i) = Σ_j A[i, j] · x_j.
    ///
    /// # Errors
    ///
    /// Fails unless `matrix` is n x n for n generators.
    pub fn linear(algebra: Arc<A>, matrix: &DenseMatrix<Coeff<A>>) -> Result<Self, DerivationError> {
        let n = algebra.num_gens();
        if matrix.num_rows() != n || matrix.num_cols() != n {
            return Err(DerivationError::MatrixDimension {
                expected: n,
                rows: matrix.num_rows(),
                cols: matrix.num_cols(),
            });
        }

        let ring = algebra.ring();
        let images = (0..n)
            .map(|i| {
                matrix
                    .row(i)
                    .iter()
                    .enumerate()
                    .fold(ring.zero(), |acc, (j, a)| acc + ring.gen(j).scale(a))
            })
            .collect();
        Ok(Self::from_parts(algebra, images))
    }

    /// A Weitzenböck derivation: a linear derivation with nilpotent matrix.
    ///
    /// # Errors
    ///
    /// Fails on a wrongly sized or non-nilpotent matrix.
    pub fn weitzenbock(algebra: Arc<A>, matrix: &DenseMatrix<Coeff<A>>) -> Result<Self, DerivationError> {
        let derivation = Self::linear(algebra, matrix)?;
        if !matrix.is_nilpotent() {
            return Err(DerivationError::NotNilpotent);
        }
        Ok(derivation)
    }

    /// The Jacobian derivation of n − 1 polynomials f_1, ..., f_{n-1}.
    ///
    /// D(x_j) = (−1)^(n+j+1) · det(J_j), where J_j is the Jacobian matrix
    /// of the polynomials with column j removed. D(g) is then the Jacobian
    /// determinant of (f_1, ..., f_{n-1}, g), so D kills every f_k.
    ///
    /// # Errors
    ///
    /// Fails unless exactly n − 1 polynomials of the algebra are given.
    pub fn jacobian(algebra: Arc<A>, polys: &[SparsePoly<Coeff<A>>]) -> Result<Self, DerivationError> {
        let n = algebra.num_gens();
        if polys.len() + 1 != n {
            return Err(DerivationError::PolynomialCount {
                expected: n - 1,
                found: polys.len(),
            });
        }
        for p in polys {
            algebra.ring().check(p)?;
        }

        let one = algebra.constant(<Coeff<A> as Ring>::one());
        if polys.is_empty() {
            return Ok(Self::from_parts(algebra, vec![one]));
        }

        let rows = polys
            .iter()
            .map(|p| (0..n).map(|k| algebra.partial(p, k)).collect())
            .collect();
        let jac = DenseMatrix::try_from_rows(rows)?;

        let images = (0..n)
            .into_par_iter()
            .map(|j| -> Result<SparsePoly<Coeff<A>>, DerivationError> {
                let minor = jac.without_col(j).cofactor_det(&one)?;
                Ok(if (n + j + 1) % 2 == 0 { minor } else { -minor })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_parts(algebra, images))
    }
}
