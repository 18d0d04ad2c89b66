//! Monomials as fixed-length exponent vectors.
//!
//! Exponents are kept inline for small variable counts via `SmallVec`, and
//! the total degree is cached for graded comparisons.

use std::cmp::Ordering;
use std::fmt;

use smallvec::SmallVec;

/// Inline capacity of the exponent vector.
const INLINE_VARS: usize = 6;

/// A monomial x_0^e_0 * ... * x_{n-1}^e_{n-1}.
///
/// Two monomials are only comparable when they have the same number of
/// variables; mixing variable counts is a programming error and panics.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Monomial {
    /// Exponents for each variable (x_0, x_1, ..., x_{n-1}).
    exponents: SmallVec<[u32; INLINE_VARS]>,
    /// Cached total degree.
    total_degree: u32,
}

impl Monomial {
    /// Creates a new monomial with the given exponents.
    #[must_use]
    pub fn new(exps: &[u32]) -> Self {
        Self {
            exponents: SmallVec::from_slice(exps),
            total_degree: exps.iter().sum(),
        }
    }

    /// Creates the identity monomial (1).
    #[must_use]
    pub fn one(num_vars: usize) -> Self {
        Self {
            exponents: SmallVec::from_elem(0, num_vars),
            total_degree: 0,
        }
    }

    /// Creates a monomial for a single variable: x_i.
    ///
    /// # Panics
    ///
    /// Panics if `i >= num_vars`.
    #[must_use]
    pub fn var(i: usize, num_vars: usize) -> Self {
        assert!(i < num_vars, "variable index {i} out of range for {num_vars} variables");
        let mut m = Self::one(num_vars);
        m.exponents[i] = 1;
        m.total_degree = 1;
        m
    }

    /// Returns the exponent of variable i.
    #[must_use]
    pub fn exponent(&self, i: usize) -> u32 {
        self.exponents.get(i).copied().unwrap_or(0)
    }

    /// Returns the exponents as a slice.
    #[must_use]
    pub fn exponents(&self) -> &[u32] {
        &self.exponents
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.exponents.len()
    }

    /// Returns the total degree.
    #[must_use]
    pub fn total_degree(&self) -> u32 {
        self.total_degree
    }

    /// Checks if this is the identity monomial (1).
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.total_degree == 0
    }

    /// Multiplies two monomials.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        assert_eq!(self.num_vars(), other.num_vars());
        Self {
            exponents: self
                .exponents
                .iter()
                .zip(&other.exponents)
                .map(|(a, b)| a + b)
                .collect(),
            total_degree: self.total_degree + other.total_degree,
        }
    }

    /// Divides this monomial by another, if divisible.
    ///
    /// Returns `None` if `other` does not divide `self`.
    #[must_use]
    pub fn div(&self, other: &Self) -> Option<Self> {
        if !self.is_divisible_by(other) {
            return None;
        }

        Some(Self {
            exponents: self
                .exponents
                .iter()
                .zip(&other.exponents)
                .map(|(a, b)| a - b)
                .collect(),
            total_degree: self.total_degree - other.total_degree,
        })
    }

    /// Checks if `other` divides `self`.
    #[must_use]
    pub fn is_divisible_by(&self, other: &Self) -> bool {
        assert_eq!(self.num_vars(), other.num_vars());
        if other.total_degree > self.total_degree {
            return false;
        }
        self.exponents
            .iter()
            .zip(&other.exponents)
            .all(|(a, b)| a >= b)
    }

    /// Computes the least common multiple of two monomials.
    #[must_use]
    pub fn lcm(&self, other: &Self) -> Self {
        assert_eq!(self.num_vars(), other.num_vars());
        let exponents: SmallVec<[u32; INLINE_VARS]> = self
            .exponents
            .iter()
            .zip(&other.exponents)
            .map(|(a, b)| *a.max(b))
            .collect();
        let total_degree = exponents.iter().sum();
        Self {
            exponents,
            total_degree,
        }
    }

    /// Checks if two monomials are coprime (GCD = 1).
    #[must_use]
    pub fn is_coprime(&self, other: &Self) -> bool {
        self.exponents
            .iter()
            .zip(&other.exponents)
            .all(|(a, b)| *a == 0 || *b == 0)
    }

    /// Differentiates with respect to x_i.
    ///
    /// Returns the multiplier e_i and the monomial with e_i lowered by one,
    /// or `None` if x_i does not occur.
    #[must_use]
    pub fn derivative(&self, i: usize) -> Option<(u32, Self)> {
        let e = self.exponent(i);
        if e == 0 {
            return None;
        }
        let mut lowered = self.clone();
        lowered.exponents[i] -= 1;
        lowered.total_degree -= 1;
        Some((e, lowered))
    }

    /// Returns the indices of variables with a non-zero exponent.
    pub fn support(&self) -> impl Iterator<Item = usize> + '_ {
        self.exponents
            .iter()
            .enumerate()
            .filter(|&(_, &e)| e > 0)
            .map(|(i, _)| i)
    }

    /// Compares using graded reverse lexicographic (grevlex) ordering.
    #[must_use]
    pub fn cmp_grevlex(&self, other: &Self) -> Ordering {
        match self.total_degree.cmp(&other.total_degree) {
            Ordering::Equal => {}
            ord => return ord,
        }

        // Last variable first, comparison reversed
        for i in (0..self.num_vars().max(other.num_vars())).rev() {
            match other.exponent(i).cmp(&self.exponent(i)) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }

        Ordering::Equal
    }

    /// Compares using graded lexicographic ordering.
    #[must_use]
    pub fn cmp_grlex(&self, other: &Self) -> Ordering {
        match self.total_degree.cmp(&other.total_degree) {
            Ordering::Equal => self.cmp_lex(other),
            ord => ord,
        }
    }

    /// Compares using pure lexicographic ordering.
    #[must_use]
    pub fn cmp_lex(&self, other: &Self) -> Ordering {
        for i in 0..self.num_vars().max(other.num_vars()) {
            match self.exponent(i).cmp(&other.exponent(i)) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }

    /// Renders the monomial with the given generator names.
    ///
    /// Falls back to `x{i}` for indices without a name.
    #[must_use]
    pub fn display_with(&self, names: &[String]) -> String {
        let parts: Vec<String> = self
            .exponents
            .iter()
            .enumerate()
            .filter(|&(_, &e)| e > 0)
            .map(|(i, &e)| {
                let name = names.get(i).cloned().unwrap_or_else(|| format!("x{i}"));
                if e == 1 {
                    name
                } else {
                    format!("{name}^{e}")
                }
            })
            .collect();

        if parts.is_empty() {
            "1".to_string()
        } else {
            parts.join("*")
        }
    }
}

impl fmt::Debug for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mono({})", self.display_with(&[]))
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_with(&[]))
    }
}
