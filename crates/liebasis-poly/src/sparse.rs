//! Sparse multivariate polynomials.
//!
//! Images of derivations are sparse: a vector field on K^n usually has a
//! handful of terms per component, so terms are stored as a sorted list of
//! (monomial, coefficient) pairs.

use std::ops::{Add, Mul, Neg, Sub};

use liebasis_rings::traits::Ring;

use crate::monomial::Monomial;
use crate::ordering::MonomialOrder;

/// A sparse multivariate polynomial.
///
/// Terms are stored in descending order under `order`, with like terms
/// combined and zero coefficients removed, so structural equality is
/// polynomial equality.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SparsePoly<R: Ring> {
    /// Terms in descending order.
    terms: Vec<(Monomial, R)>,
    /// Number of variables.
    num_vars: usize,
    /// Monomial ordering used for sorting.
    order: MonomialOrder,
}

impl<R: Ring> SparsePoly<R> {
    /// Creates a new polynomial from terms.
    ///
    /// Terms are automatically sorted and combined.
    #[must_use]
    pub fn new(terms: Vec<(Monomial, R)>, num_vars: usize, order: MonomialOrder) -> Self {
        let mut poly = Self {
            terms,
            num_vars,
            order,
        };
        poly.normalize();
        poly
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero(num_vars: usize, order: MonomialOrder) -> Self {
        Self {
            terms: Vec::new(),
            num_vars,
            order,
        }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one(num_vars: usize, order: MonomialOrder) -> Self {
        Self::constant(R::one(), num_vars, order)
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: R, num_vars: usize, order: MonomialOrder) -> Self {
        Self::monomial(Monomial::one(num_vars), c, order)
    }

    /// Creates a single variable x_i.
    #[must_use]
    pub fn var(i: usize, num_vars: usize, order: MonomialOrder) -> Self {
        Self::monomial(Monomial::var(i, num_vars), R::one(), order)
    }

    /// Creates the single term c * m.
    #[must_use]
    pub fn monomial(m: Monomial, c: R, order: MonomialOrder) -> Self {
        let num_vars = m.num_vars();
        if c.is_zero() {
            return Self::zero(num_vars, order);
        }
        Self {
            terms: vec![(m, c)],
            num_vars,
            order,
        }
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns true if the polynomial is a field constant (including zero).
    #[must_use]
    pub fn is_constant(&self) -> bool {
        match self.terms.as_slice() {
            [] => true,
            [(m, _)] => m.is_one(),
            _ => false,
        }
    }

    /// Returns the constant value if the polynomial is a field constant.
    #[must_use]
    pub fn as_constant(&self) -> Option<R> {
        match self.terms.as_slice() {
            [] => Some(R::zero()),
            [(m, c)] if m.is_one() => Some(c.clone()),
            _ => None,
        }
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// Returns the monomial ordering.
    #[must_use]
    pub fn order(&self) -> MonomialOrder {
        self.order
    }

    /// Returns the terms.
    #[must_use]
    pub fn terms(&self) -> &[(Monomial, R)] {
        &self.terms
    }

    /// Returns the coefficient of a monomial (zero if absent).
    #[must_use]
    pub fn coeff(&self, m: &Monomial) -> R {
        self.terms
            .iter()
            .find(|(tm, _)| tm == m)
            .map_or_else(R::zero, |(_, c)| c.clone())
    }

    /// Returns the leading monomial.
    #[must_use]
    pub fn leading_monomial(&self) -> Option<&Monomial> {
        self.terms.first().map(|(m, _)| m)
    }

    /// Returns the leading coefficient.
    #[must_use]
    pub fn leading_coeff(&self) -> Option<&R> {
        self.terms.first().map(|(_, c)| c)
    }

    /// Returns the leading term (monomial, coefficient).
    #[must_use]
    pub fn leading_term(&self) -> Option<&(Monomial, R)> {
        self.terms.first()
    }

    /// Returns true if both polynomials live in the same ring layout.
    #[must_use]
    pub fn is_compatible(&self, other: &Self) -> bool {
        self.num_vars == other.num_vars && self.order == other.order
    }

    /// Sorts terms and combines like terms.
    fn normalize(&mut self) {
        let order = self.order;
        self.terms.sort_by(|a, b| order.compare(&b.0, &a.0));

        let mut combined: Vec<(Monomial, R)> = Vec::with_capacity(self.terms.len());
        for (m, c) in self.terms.drain(..) {
            if let Some(last) = combined.last_mut() {
                if last.0 == m {
                    last.1 = last.1.clone() + c;
                    continue;
                }
            }
            combined.push((m, c));
        }
        combined.retain(|(_, c)| !c.is_zero());

        self.terms = combined;
    }

    /// Merges two sorted term lists: self + other, or self - other.
    fn merge(&self, other: &Self, negate: bool) -> Self {
        assert!(self.is_compatible(other), "operands come from different rings");

        let sign = |c: &R| if negate { -c.clone() } else { c.clone() };
        let (a, b) = (&self.terms, &other.terms);
        let mut terms = Vec::with_capacity(a.len() + b.len());
        let (mut i, mut j) = (0, 0);

        while i < a.len() && j < b.len() {
            match self.order.compare(&a[i].0, &b[j].0) {
                std::cmp::Ordering::Greater => {
                    terms.push(a[i].clone());
                    i += 1;
                }
                std::cmp::Ordering::Less => {
                    terms.push((b[j].0.clone(), sign(&b[j].1)));
                    j += 1;
                }
                std::cmp::Ordering::Equal => {
                    let c = a[i].1.clone() + sign(&b[j].1);
                    if !c.is_zero() {
                        terms.push((a[i].0.clone(), c));
                    }
                    i += 1;
                    j += 1;
                }
            }
        }
        terms.extend(a[i..].iter().cloned());
        terms.extend(b[j..].iter().map(|(m, c)| (m.clone(), sign(c))));

        Self {
            terms,
            num_vars: self.num_vars,
            order: self.order,
        }
    }

    /// Multiplies two polynomials (schoolbook algorithm).
    fn product(&self, other: &Self) -> Self {
        assert!(self.is_compatible(other), "operands come from different rings");

        if self.is_zero() || other.is_zero() {
            return Self::zero(self.num_vars, self.order);
        }

        let mut terms = Vec::with_capacity(self.len() * other.len());
        for (m1, c1) in &self.terms {
            for (m2, c2) in &other.terms {
                terms.push((m1.mul(m2), c1.clone() * c2.clone()));
            }
        }

        Self::new(terms, self.num_vars, self.order)
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: &R) -> Self {
        if c.is_zero() {
            return Self::zero(self.num_vars, self.order);
        }

        // zero divisors in non-fields
        let terms = self
            .terms
            .iter()
            .map(|(m, x)| (m.clone(), x.clone() * c.clone()))
            .filter(|(_, x)| !x.is_zero())
            .collect();

        Self {
            terms,
            num_vars: self.num_vars,
            order: self.order,
        }
    }

    /// Multiplies by the term c * m.
    #[must_use]
    pub fn mul_term(&self, m: &Monomial, c: &R) -> Self {
        if c.is_zero() {
            return Self::zero(self.num_vars, self.order);
        }

        // Monomial orders are multiplicative, so the term order is preserved.
        let terms = self
            .terms
            .iter()
            .map(|(m2, c2)| (m.mul(m2), c2.clone() * c.clone()))
            .filter(|(_, x)| !x.is_zero())
            .collect();

        Self {
            terms,
            num_vars: self.num_vars,
            order: self.order,
        }
    }

    /// Computes self^n.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        let mut result = Self::one(self.num_vars, self.order);
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = &result * &base;
            }
            exp >>= 1;
            if exp > 0 {
                base = &base * &base;
            }
        }

        result
    }

    /// Partial derivative with respect to x_i.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not a variable index of this polynomial.
    #[must_use]
    pub fn derivative(&self, i: usize) -> Self {
        assert!(i < self.num_vars, "variable index {i} out of range");

        let terms = self
            .terms
            .iter()
            .filter_map(|(m, c)| {
                m.derivative(i)
                    .map(|(e, lowered)| (lowered, c.mul_by_scalar(i64::from(e))))
            })
            .collect();

        Self::new(terms, self.num_vars, self.order)
    }

    /// Computes the total degree, or `None` for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<u32> {
        self.terms.iter().map(|(m, _)| m.total_degree()).max()
    }

    /// Computes the total degree (0 for the zero polynomial).
    #[must_use]
    pub fn total_degree(&self) -> u32 {
        self.degree().unwrap_or(0)
    }

    /// Returns the sorted indices of the variables that occur.
    #[must_use]
    pub fn variables(&self) -> Vec<usize> {
        let mut vars: Vec<usize> = self.terms.iter().flat_map(|(m, _)| m.support()).collect();
        vars.sort_unstable();
        vars.dedup();
        vars
    }

    /// Renders the polynomial with the given generator names.
    #[must_use]
    pub fn display_with(&self, names: &[String]) -> String {
        if self.is_zero() {
            return "0".to_string();
        }

        let mut out = String::new();
        for (k, (m, c)) in self.terms.iter().enumerate() {
            let mon = m.display_with(names);
            let coeff = c.to_string();
            let (negative, magnitude) = match coeff.strip_prefix('-') {
                Some(rest) => (true, rest.to_string()),
                None => (false, coeff),
            };

            if k == 0 {
                if negative {
                    out.push('-');
                }
            } else {
                out.push_str(if negative { " - " } else { " + " });
            }

            if mon == "1" {
                out.push_str(&magnitude);
            } else if magnitude == "1" {
                out.push_str(&mon);
            } else {
                out.push_str(&format!("{magnitude}*{mon}"));
            }
        }
        out
    }
}

impl<R: Ring> std::fmt::Display for SparsePoly<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_with(&[]))
    }
}

macro_rules! forward_binop {
    ($trait:ident, $method:ident, |$a:ident, $b:ident| $body:expr) => {
        impl<R: Ring> $trait<&SparsePoly<R>> for &SparsePoly<R> {
            type Output = SparsePoly<R>;

            fn $method(self, rhs: &SparsePoly<R>) -> SparsePoly<R> {
                let ($a, $b) = (self, rhs);
                $body
            }
        }

        impl<R: Ring> $trait<SparsePoly<R>> for SparsePoly<R> {
            type Output = SparsePoly<R>;

            fn $method(self, rhs: SparsePoly<R>) -> SparsePoly<R> {
                (&self).$method(&rhs)
            }
        }

        impl<R: Ring> $trait<&SparsePoly<R>> for SparsePoly<R> {
            type Output = SparsePoly<R>;

            fn $method(self, rhs: &SparsePoly<R>) -> SparsePoly<R> {
                (&self).$method(rhs)
            }
        }

        impl<R: Ring> $trait<SparsePoly<R>> for &SparsePoly<R> {
            type Output = SparsePoly<R>;

            fn $method(self, rhs: SparsePoly<R>) -> SparsePoly<R> {
                self.$method(&rhs)
            }
        }
    };
}

forward_binop!(Add, add, |a, b| a.merge(b, false));
forward_binop!(Sub, sub, |a, b| a.merge(b, true));
forward_binop!(Mul, mul, |a, b| a.product(b));

impl<R: Ring> Neg for &SparsePoly<R> {
    type Output = SparsePoly<R>;

    fn neg(self) -> SparsePoly<R> {
        SparsePoly {
            terms: self.terms.iter().map(|(m, c)| (m.clone(), -c.clone())).collect(),
            num_vars: self.num_vars,
            order: self.order,
        }
    }
}

impl<R: Ring> Neg for SparsePoly<R> {
    type Output = SparsePoly<R>;

    fn neg(self) -> SparsePoly<R> {
        -&self
    }
}
