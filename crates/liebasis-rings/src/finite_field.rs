//! Prime fields Z_p.
//!
//! Used as a coefficient field when a computation over Q suffers from
//! coefficient growth, or to probe generation in positive characteristic.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::traits::{CommutativeRing, Field, Ring};

/// The prime field Z_p.
///
/// `P` must be prime; the canonical representative is kept in `0..P`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct FiniteField<const P: u64>(u64);

impl<const P: u64> FiniteField<P> {
    /// Creates a new field element.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value % P)
    }

    /// Creates a field element from a signed value.
    #[must_use]
    pub fn from_signed(value: i64) -> Self {
        let r = value.rem_euclid(P as i64);
        Self(r as u64)
    }

    /// Returns the canonical representative in `0..P`.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    fn pow_mod(self, mut exp: u64) -> Self {
        let mut base = u128::from(self.0);
        let mut acc: u128 = 1;
        let p = u128::from(P);
        while exp > 0 {
            if exp & 1 == 1 {
                acc = acc * base % p;
            }
            base = base * base % p;
            exp >>= 1;
        }
        Self(acc as u64)
    }
}

impl<const P: u64> Ring for FiniteField<P> {
    fn zero() -> Self {
        Self(0)
    }

    fn one() -> Self {
        Self(1 % P)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }

    fn is_one(&self) -> bool {
        self.0 == 1
    }

    fn from_int(n: i64) -> Self {
        Self::from_signed(n)
    }
}

impl<const P: u64> CommutativeRing for FiniteField<P> {}

impl<const P: u64> Field for FiniteField<P> {
    fn inv(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            // Fermat: a^(p-2) = a^-1
            Some(self.pow_mod(P - 2))
        }
    }

    fn characteristic() -> u64 {
        P
    }
}

impl<const P: u64> num_traits::Zero for FiniteField<P> {
    fn zero() -> Self {
        Self(0)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl<const P: u64> num_traits::One for FiniteField<P> {
    fn one() -> Self {
        <Self as Ring>::one()
    }
}

impl<const P: u64> Add for FiniteField<P> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(((u128::from(self.0) + u128::from(rhs.0)) % u128::from(P)) as u64)
    }
}

impl<const P: u64> Sub for FiniteField<P> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl<const P: u64> Mul for FiniteField<P> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self((u128::from(self.0) * u128::from(rhs.0) % u128::from(P)) as u64)
    }
}

impl<const P: u64> Neg for FiniteField<P> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        if self.0 == 0 {
            self
        } else {
            Self(P - self.0)
        }
    }
}

impl<const P: u64> From<u64> for FiniteField<P> {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl<const P: u64> From<i64> for FiniteField<P> {
    fn from(value: i64) -> Self {
        Self::from_signed(value)
    }
}

impl<const P: u64> fmt::Display for FiniteField<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// GF(101), a small prime convenient in tests.
pub type GF101 = FiniteField<101>;
