//! Monomial orderings.
//!
//! Every algebra fixes one ordering for its whole lifetime; leading terms of
//! polynomials and of derivations are taken with respect to it.

use std::cmp::Ordering;

use crate::monomial::Monomial;

/// A monomial ordering.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum MonomialOrder {
    /// Lexicographic order.
    ///
    /// x > y > z means x^a y^b z^c > x^d y^e z^f iff
    /// the first nonzero difference (a-d, b-e, c-f) is positive.
    Lex,

    /// Graded lexicographic order.
    ///
    /// First compares total degree, then uses lex as tiebreaker.
    Grlex,

    /// Graded reverse lexicographic order.
    ///
    /// First compares total degree, then uses reverse lex (last variable first)
    /// with the comparison reversed.
    #[default]
    Grevlex,
}

impl MonomialOrder {
    /// Compares two monomials according to this ordering.
    #[must_use]
    pub fn compare(&self, a: &Monomial, b: &Monomial) -> Ordering {
        match self {
            MonomialOrder::Lex => a.cmp_lex(b),
            MonomialOrder::Grlex => a.cmp_grlex(b),
            MonomialOrder::Grevlex => a.cmp_grevlex(b),
        }
    }

    /// Returns a short name for the ordering.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            MonomialOrder::Lex => "lex",
            MonomialOrder::Grlex => "grlex",
            MonomialOrder::Grevlex => "grevlex",
        }
    }
}

impl std::fmt::Display for MonomialOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lex_order() {
        let order = MonomialOrder::Lex;

        let x = Monomial::var(0, 2);
        let y = Monomial::var(1, 2);
        let y2 = y.mul(&y);

        // x > y in lex
        assert_eq!(order.compare(&x, &y), Ordering::Greater);

        // x > y^2 in lex (first variable dominates)
        assert_eq!(order.compare(&x, &y2), Ordering::Greater);
    }

    #[test]
    fn test_grevlex_order() {
        let order = MonomialOrder::Grevlex;

        let xy = Monomial::new(&[1, 1]);
        let x = Monomial::var(0, 2);
        let y2 = Monomial::new(&[0, 2]);

        // Higher degree wins: xy > x, y^2 > x
        assert_eq!(order.compare(&xy, &x), Ordering::Greater);
        assert_eq!(order.compare(&y2, &x), Ordering::Greater);

        // Every monomial dominates 1
        assert_eq!(order.compare(&x, &Monomial::one(2)), Ordering::Greater);
    }

    #[test]
    fn test_default_and_names() {
        assert_eq!(MonomialOrder::default(), MonomialOrder::Grevlex);
        assert_eq!(MonomialOrder::Grlex.to_string(), "grlex");
    }
}
