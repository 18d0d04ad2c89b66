//! Algebraic structure traits.
//!
//! Coefficients of every polynomial algebra in this workspace live in a
//! [`Field`]; derivations need ring arithmetic plus inversion of leading
//! coefficients.

use std::fmt::{Debug, Display};
use std::ops::{Add, Mul, Neg, Sub};

/// A ring is a set with addition and multiplication operations.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative with identity `one()`
/// - Multiplication distributes over addition
/// - Every element has an additive inverse (`neg`)
pub trait Ring:
    Clone
    + Eq
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// Computes self + self + ... (n times) by doubling.
    fn mul_by_scalar(&self, n: i64) -> Self {
        let mut result = Self::zero();
        let mut base = self.clone();
        let mut k = n.unsigned_abs();

        while k > 0 {
            if k & 1 == 1 {
                result = result + base.clone();
            }
            base = base.clone() + base;
            k >>= 1;
        }

        if n < 0 {
            -result
        } else {
            result
        }
    }

    /// Embeds an integer: the image of `n` under the unique map Z → R.
    fn from_int(n: i64) -> Self {
        Self::one().mul_by_scalar(n)
    }

    /// Computes self^n for non-negative n.
    fn pow(&self, n: u32) -> Self {
        if n == 0 {
            return Self::one();
        }

        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            base = base.clone() * base;
            exp >>= 1;
        }

        result
    }
}

/// A commutative ring where multiplication is commutative.
pub trait CommutativeRing: Ring {}

/// A field is a commutative ring where every non-zero element has a
/// multiplicative inverse.
pub trait Field: CommutativeRing {
    /// Computes the multiplicative inverse.
    ///
    /// Returns `None` if the element is zero.
    fn inv(&self) -> Option<Self>;

    /// Divides by another element.
    ///
    /// # Panics
    ///
    /// Panics if `other` is zero.
    fn field_div(&self, other: &Self) -> Self {
        self.clone() * other.inv().expect("division by zero")
    }

    /// The characteristic of the field (0 for characteristic zero).
    fn characteristic() -> u64;
}
