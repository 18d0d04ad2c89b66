//! Polynomial rings with named generators.

use std::fmt;
use std::marker::PhantomData;

use liebasis_rings::traits::Field;

use crate::error::AlgebraError;
use crate::monomial::Monomial;
use crate::ordering::MonomialOrder;
use crate::sparse::SparsePoly;

/// The polynomial ring F[x_0, ..., x_{n-1}] with a fixed monomial order.
///
/// Generators carry names for display and lookup; arithmetic itself only
/// sees variable indices.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PolyRing<F: Field> {
    names: Vec<String>,
    order: MonomialOrder,
    _field: PhantomData<F>,
}

impl<F: Field> PolyRing<F> {
    /// Creates a ring from generator names.
    ///
    /// # Errors
    ///
    /// Fails if there are no names, a name is empty, or a name repeats.
    pub fn new<S: AsRef<str>>(names: &[S], order: MonomialOrder) -> Result<Self, AlgebraError> {
        if names.is_empty() {
            return Err(AlgebraError::NoGenerators);
        }

        let mut owned: Vec<String> = Vec::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            let name = name.as_ref().trim();
            if name.is_empty() {
                return Err(AlgebraError::EmptyGeneratorName(i));
            }
            if owned.iter().any(|n| n == name) {
                return Err(AlgebraError::DuplicateGenerator(name.to_string()));
            }
            owned.push(name.to_string());
        }

        Ok(Self {
            names: owned,
            order,
            _field: PhantomData,
        })
    }

    /// Parses a generator list such as `"x, y, z"` or `"x y z"`.
    ///
    /// # Errors
    ///
    /// Same as [`PolyRing::new`].
    pub fn parse(list: &str, order: MonomialOrder) -> Result<Self, AlgebraError> {
        let names: Vec<&str> = if list.contains(',') {
            list.split(',').collect()
        } else {
            list.split_whitespace().collect()
        };
        Self::new(&names, order)
    }

    /// Returns the number of generators.
    #[must_use]
    pub fn num_gens(&self) -> usize {
        self.names.len()
    }

    /// Returns the generator names.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Looks up a generator by name.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Returns the monomial order.
    #[must_use]
    pub fn order(&self) -> MonomialOrder {
        self.order
    }

    /// Returns generator i as a polynomial.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    #[must_use]
    pub fn gen(&self, i: usize) -> SparsePoly<F> {
        SparsePoly::var(i, self.num_gens(), self.order)
    }

    /// The zero polynomial.
    #[must_use]
    pub fn zero(&self) -> SparsePoly<F> {
        SparsePoly::zero(self.num_gens(), self.order)
    }

    /// The constant polynomial 1.
    #[must_use]
    pub fn one(&self) -> SparsePoly<F> {
        SparsePoly::one(self.num_gens(), self.order)
    }

    /// Embeds a field element as a constant polynomial.
    #[must_use]
    pub fn constant(&self, c: F) -> SparsePoly<F> {
        SparsePoly::constant(c, self.num_gens(), self.order)
    }

    /// Builds the term c * x^exps.
    ///
    /// # Panics
    ///
    /// Panics if `exps` does not have one entry per generator.
    #[must_use]
    pub fn term(&self, c: F, exps: &[u32]) -> SparsePoly<F> {
        assert_eq!(exps.len(), self.num_gens(), "exponent vector has wrong length");
        SparsePoly::monomial(Monomial::new(exps), c, self.order)
    }

    /// Returns true if `p` has this ring's variable count and order.
    #[must_use]
    pub fn contains(&self, p: &SparsePoly<F>) -> bool {
        p.num_vars() == self.num_gens() && p.order() == self.order
    }

    /// Checks membership, reporting the ring in the error.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::ForeignElement`] if `p` is not in this ring.
    pub fn check(&self, p: &SparsePoly<F>) -> Result<(), AlgebraError> {
        if self.contains(p) {
            Ok(())
        } else {
            Err(AlgebraError::ForeignElement {
                ring: self.to_string(),
            })
        }
    }
}

impl<F: Field> fmt::Display for PolyRing<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F[{}] ({})", self.names.join(", "), self.order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use liebasis_rings::rationals::Q;

    #[test]
    fn test_parse_generators() {
        let ring = PolyRing::<Q>::parse("x, y, z", MonomialOrder::Grevlex).unwrap();
        assert_eq!(ring.num_gens(), 3);
        assert_eq!(ring.names(), &["x", "y", "z"]);
        assert_eq!(ring.index_of("y"), Some(1));
        assert_eq!(ring.index_of("w"), None);

        let spaced = PolyRing::<Q>::parse("a b", MonomialOrder::Lex).unwrap();
        assert_eq!(spaced.names(), &["a", "b"]);
    }

    #[test]
    fn test_invalid_generators() {
        assert_eq!(
            PolyRing::<Q>::parse("", MonomialOrder::Grevlex),
            Err(AlgebraError::NoGenerators)
        );
        assert_eq!(
            PolyRing::<Q>::parse("x, , y", MonomialOrder::Grevlex),
            Err(AlgebraError::EmptyGeneratorName(1))
        );
        assert_eq!(
            PolyRing::<Q>::parse("x, y, x", MonomialOrder::Grevlex),
            Err(AlgebraError::DuplicateGenerator("x".to_string()))
        );
        assert_eq!(
            PolyRing::<Q>::new::<&str>(&[], MonomialOrder::Grevlex),
            Err(AlgebraError::NoGenerators)
        );
    }

    #[test]
    fn test_gens_and_terms() {
        let ring = PolyRing::<Q>::parse("x, y", MonomialOrder::Grevlex).unwrap();
        let xy = &ring.gen(0) * &ring.gen(1);
        assert_eq!(xy, ring.term(Q::from_integer(1), &[1, 1]));

        let p = &ring.term(Q::from_integer(2), &[2, 0]) - &ring.one();
        assert_eq!(p.display_with(ring.names()), "2*x^2 - 1");
        assert_eq!(&p + &ring.constant(Q::from_integer(1)), ring.term(Q::from_integer(2), &[2, 0]));
    }

    #[test]
    fn test_membership() {
        let ring = PolyRing::<Q>::parse("x, y", MonomialOrder::Grevlex).unwrap();
        let other = PolyRing::<Q>::parse("x, y, z", MonomialOrder::Grevlex).unwrap();
        let lex = PolyRing::<Q>::parse("x, y", MonomialOrder::Lex).unwrap();

        assert!(ring.contains(&ring.gen(0)));
        assert!(!ring.contains(&other.gen(0)));
        assert!(!ring.contains(&lex.gen(0)));
        assert!(matches!(
            ring.check(&other.gen(2)),
            Err(AlgebraError::ForeignElement { .. })
        ));
    }
}
