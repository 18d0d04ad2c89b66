//! The growing basis of normalized derivations.
//!
//! Entries are indexed by the (component, monomial) key of their leading
//! term and always have leading coefficient 1, so reducing a candidate at
//! a matching key cancels its leading term exactly.

use liebasis_derivation::{Coeff, Derivation, LeadingTerm};
use liebasis_poly::{Algebra, Monomial};
use liebasis_rings::traits::{Field, Ring};
use rustc_hash::FxHashMap;

/// Index of a basis entry: generator component and leading monomial.
pub type BasisKey = (usize, Monomial);

/// Scales a derivation to leading coefficient 1.
///
/// Returns the leading term of the result together with it, or `None`
/// for the zero derivation.
#[must_use]
pub fn monic<A: Algebra>(d: &Derivation<A>) -> Option<(LeadingTerm<Coeff<A>>, Derivation<A>)> {
    let lt = d.leading_term()?;
    let inv = lt.coeff.inv()?;
    let normalized = d.scale(&inv);
    let lt = LeadingTerm {
        coeff: <Coeff<A> as Ring>::one(),
        ..lt
    };
    Some((lt, normalized))
}

/// Normalized derivations keyed by leading term.
///
/// At most one entry per key; inserting at an occupied key replaces the
/// previous entry.
#[derive(Debug)]
pub struct BasisStore<A: Algebra> {
    entries: FxHashMap<BasisKey, Derivation<A>>,
    num_gens: usize,
}

impl<A: Algebra> BasisStore<A> {
    /// Creates an empty store for derivations in `num_gens` components.
    #[must_use]
    pub fn new(num_gens: usize) -> Self {
        Self {
            entries: FxHashMap::default(),
            num_gens,
        }
    }

    /// Inserts a normalized derivation, returning the entry it replaced.
    pub fn insert(&mut self, key: BasisKey, d: Derivation<A>) -> Option<Derivation<A>> {
        debug_assert!(d
            .leading_term()
            .is_some_and(|lt| lt.key() == key && lt.coeff.is_one()));
        self.entries.insert(key, d)
    }

    /// Looks up the entry at a key.
    #[must_use]
    pub fn get(&self, key: &BasisKey) -> Option<&Derivation<A>> {
        self.entries.get(key)
    }

    /// Returns true if an entry exists at the key.
    #[must_use]
    pub fn contains_key(&self, key: &BasisKey) -> bool {
        self.entries.contains_key(key)
    }

    /// The entry whose leading term is 1 · d/dx_component, if any.
    #[must_use]
    pub fn constant_entry(&self, component: usize) -> Option<&Derivation<A>> {
        self.entries.get(&(component, Monomial::one(self.num_gens)))
    }

    /// Reduces a candidate against the store.
    ///
    /// While the leading term's key has an entry, subtracts coefficient
    /// times that entry. Each subtraction strictly lowers the leading term,
    /// so the loop terminates with either the zero derivation or one whose
    /// leading key is not in the store.
    #[must_use]
    pub fn reduce(&self, mut d: Derivation<A>) -> Derivation<A> {
        while let Some(lt) = d.leading_term() {
            match self.entries.get(&lt.key()) {
                Some(reducer) => d = d.sub_scaled(&lt.coeff, reducer),
                None => break,
            }
        }
        d
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&BasisKey, &Derivation<A>)> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use liebasis_poly::{MonomialOrder, PolyRing};
    use liebasis_rings::rationals::Q;
    use std::sync::Arc;

    fn q(n: i64) -> Q {
        Q::from_integer(n)
    }

    fn plane() -> Arc<PolyRing<Q>> {
        Arc::new(PolyRing::parse("x, y", MonomialOrder::Grevlex).unwrap())
    }

    fn insert_monic(store: &mut BasisStore<PolyRing<Q>>, d: &Derivation<PolyRing<Q>>) -> BasisKey {
        let (lt, normalized) = monic(d).unwrap();
        store.insert(lt.key(), normalized);
        lt.key()
    }

    #[test]
    fn test_monic() {
        let ring = plane();
        let d = Derivation::from_images(Arc::clone(&ring), vec![ring.gen(1).scale(&q(3)), ring.constant(q(6))]).unwrap();
        let (lt, normalized) = monic(&d).unwrap();

        assert_eq!(lt.key(), (0, Monomial::var(1, 2)));
        assert_eq!(lt.coeff, q(1));
        assert_eq!(normalized.image(0), &ring.gen(1));
        assert_eq!(normalized.image(1), &ring.constant(q(2)));

        assert!(monic(&Derivation::zero(ring)).is_none());
    }

    #[test]
    fn test_reduce_to_zero() {
        let ring = plane();
        let mut store = BasisStore::new(2);
        let dx = Derivation::partial(Arc::clone(&ring), 0).unwrap();
        insert_monic(&mut store, &dx);

        let reduced = store.reduce(dx.scale(&q(-7)));
        assert!(reduced.is_zero());
    }

    #[test]
    fn test_reduce_stops_at_unknown_key() {
        let ring = plane();
        let (x, y) = (ring.gen(0), ring.gen(1));
        let mut store = BasisStore::new(2);

        // y d/dx + d/dy, leading term y d/dx
        let basis = Derivation::from_images(Arc::clone(&ring), vec![y.clone(), ring.one()]).unwrap();
        insert_monic(&mut store, &basis);

        // 2y d/dx + 3 d/dy reduces to d/dy, whose key (1, 1) is new
        let candidate = Derivation::from_images(Arc::clone(&ring), vec![y.scale(&q(2)), ring.constant(q(3))]).unwrap();
        let reduced = store.reduce(candidate);
        assert!(reduced.image(0).is_zero());
        assert_eq!(reduced.image(1), &ring.one());
        assert!(!store.contains_key(&reduced.leading_term().unwrap().key()));

        // x d/dy leads at (1, x), which is not stored, so nothing happens
        let untouched = Derivation::from_images(Arc::clone(&ring), vec![y, x]).unwrap();
        assert_eq!(store.reduce(untouched.clone()), untouched);
    }

    #[test]
    fn test_insert_replaces() {
        let ring = plane();
        let mut store = BasisStore::new(2);
        let dy = Derivation::partial(Arc::clone(&ring), 1).unwrap();
        let key = insert_monic(&mut store, &dy);

        let other = Derivation::from_images(Arc::clone(&ring), vec![ring.one(), ring.one()]).unwrap();
        let (lt, normalized) = monic(&other).unwrap();
        assert_eq!(lt.key(), key);

        let previous = store.insert(key.clone(), normalized.clone());
        assert_eq!(previous, Some(dy));
        assert_eq!(store.len(), 1);
        assert_eq!(store.constant_entry(1), Some(&normalized));
        assert!(store.constant_entry(0).is_none());
    }
}
