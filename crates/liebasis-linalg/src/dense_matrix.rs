//! Dense matrix implementation for small matrices.
//!
//! Matrices in this workspace are tiny: coefficient matrices of linear
//! vector fields and Jacobians of a handful of polynomials. Entries are
//! either field elements or polynomials, so only the operations that need a
//! context-free zero or one require [`Ring`].

use std::ops::{Add, Index, IndexMut, Mul, Sub};

use liebasis_rings::traits::Ring;

use crate::error::MatrixError;

/// Dense matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseMatrix<R> {
    /// Matrix entries in row-major order.
    data: Vec<R>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
}

impl<R: Clone> DenseMatrix<R> {
    /// Creates a matrix from a list of rows.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Ragged`] if the rows differ in length.
    pub fn try_from_rows(rows: Vec<Vec<R>>) -> Result<Self, MatrixError> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);

        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != num_cols) {
            return Err(MatrixError::Ragged {
                row,
                expected: num_cols,
                found: r.len(),
            });
        }

        Ok(Self {
            data: rows.into_iter().flatten().collect(),
            num_rows,
            num_cols,
        })
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Checks if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.num_rows == self.num_cols
    }

    /// Fails unless the matrix is square.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotSquare`] for rectangular matrices.
    pub fn require_square(&self) -> Result<(), MatrixError> {
        if self.is_square() {
            Ok(())
        } else {
            Err(MatrixError::NotSquare {
                rows: self.num_rows,
                cols: self.num_cols,
            })
        }
    }

    /// Returns a reference to the entry at (row, col).
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&R> {
        if row < self.num_rows && col < self.num_cols {
            Some(&self.data[row * self.num_cols + col])
        } else {
            None
        }
    }

    /// Returns a slice of the specified row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[R] {
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// Returns the matrix with column `col` removed.
    #[must_use]
    pub fn without_col(&self, col: usize) -> Self {
        assert!(col < self.num_cols);
        let data = (0..self.num_rows)
            .flat_map(|r| {
                self.row(r)
                    .iter()
                    .enumerate()
                    .filter(move |&(c, _)| c != col)
                    .map(|(_, v)| v.clone())
            })
            .collect();

        Self {
            data,
            num_rows: self.num_rows,
            num_cols: self.num_cols - 1,
        }
    }

    /// Returns the minor obtained by deleting `row` and `col`.
    #[must_use]
    pub fn minor(&self, row: usize, col: usize) -> Self {
        assert!(row < self.num_rows);
        let reduced = self.without_col(col);
        let data = (0..reduced.num_rows)
            .filter(|&r| r != row)
            .flat_map(|r| reduced.row(r).to_vec())
            .collect();

        Self {
            data,
            num_rows: self.num_rows - 1,
            num_cols: reduced.num_cols,
        }
    }

}

impl<R> DenseMatrix<R>
where
    R: Clone + Add<Output = R> + Sub<Output = R> + Mul<Output = R>,
{
    /// Determinant by cofactor expansion along the first row.
    ///
    /// Works for any commutative entries, including polynomials, at
    /// factorial cost. `one` is returned for the empty matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotSquare`] for rectangular matrices.
    pub fn cofactor_det(&self, one: &R) -> Result<R, MatrixError> {
        self.require_square()?;
        Ok(self.expand(one))
    }

    fn expand(&self, one: &R) -> R {
        match self.num_rows {
            0 => one.clone(),
            1 => self[(0, 0)].clone(),
            2 => {
                self[(0, 0)].clone() * self[(1, 1)].clone()
                    - self[(0, 1)].clone() * self[(1, 0)].clone()
            }
            n => {
                let mut acc = self[(0, 0)].clone() * self.minor(0, 0).expand(one);
                for j in 1..n {
                    let term = self[(0, j)].clone() * self.minor(0, j).expand(one);
                    acc = if j % 2 == 0 { acc + term } else { acc - term };
                }
                acc
            }
        }
    }
}

impl<R: Ring> DenseMatrix<R> {
    /// Creates a new matrix filled with zeros.
    #[must_use]
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        Self {
            data: vec![R::zero(); num_rows * num_cols],
            num_rows,
            num_cols,
        }
    }

    /// Creates an identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = R::one();
        }
        m
    }

    /// Builds a matrix of integer entries embedded in `R`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Ragged`] if the rows differ in length.
    pub fn from_int_rows(rows: &[Vec<i64>]) -> Result<Self, MatrixError> {
        Self::try_from_rows(
            rows.iter()
                .map(|r| r.iter().map(|&v| R::from_int(v)).collect())
                .collect(),
        )
    }

    /// Checks if every entry is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(Ring::is_zero)
    }

    /// Matrix-matrix multiply: C = A * B.
    #[must_use]
    pub fn mm(&self, other: &Self) -> Self {
        assert_eq!(self.num_cols, other.num_rows);

        let mut result = Self::zeros(self.num_rows, other.num_cols);
        for i in 0..self.num_rows {
            for j in 0..other.num_cols {
                let mut sum = R::zero();
                for k in 0..self.num_cols {
                    sum = sum + self[(i, k)].clone() * other[(k, j)].clone();
                }
                result[(i, j)] = sum;
            }
        }
        result
    }

    /// Computes A^k by repeated squaring.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is not square.
    #[must_use]
    pub fn pow(&self, k: u32) -> Self {
        assert!(self.is_square());
        let mut result = Self::identity(self.num_rows);
        let mut base = self.clone();
        let mut exp = k;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mm(&base);
            }
            exp >>= 1;
            if exp > 0 {
                base = base.mm(&base);
            }
        }
        result
    }

    /// Checks nilpotency: A^n = 0 for an n x n matrix.
    ///
    /// A nilpotent n x n matrix always satisfies A^n = 0, so one power
    /// decides it. Rectangular matrices are never nilpotent.
    #[must_use]
    pub fn is_nilpotent(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        match u32::try_from(self.num_rows) {
            Ok(n) => self.pow(n).is_zero(),
            Err(_) => false,
        }
    }

}

impl<R> Index<(usize, usize)> for DenseMatrix<R> {
    type Output = R;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.num_cols + col]
    }
}

impl<R> IndexMut<(usize, usize)> for DenseMatrix<R> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row * self.num_cols + col]
    }
}
