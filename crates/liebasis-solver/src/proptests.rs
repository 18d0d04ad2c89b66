//! Property-based tests for the closure loop.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use proptest::prelude::*;

    use crate::{LieBasisSolver, SolverConfig, SolverEvent, SolverReport};
    use liebasis_derivation::Derivation;
    use liebasis_poly::{Monomial, MonomialOrder, PolyRing, SparsePoly};
    use liebasis_rings::rationals::Q;

    type Plane = PolyRing<Q>;

    fn plane() -> Arc<Plane> {
        Arc::new(PolyRing::parse("x, y", MonomialOrder::Grevlex).unwrap())
    }

    // Polynomials in K[x, y] with at most three terms of degree <= 2
    fn small_poly() -> impl Strategy<Value = SparsePoly<Q>> {
        proptest::collection::vec((-3i64..4i64, 0u32..2, 0u32..2), 0..3).prop_map(|terms| {
            let terms = terms
                .into_iter()
                .map(|(c, a, b)| (Monomial::new(&[a, b]), Q::from_integer(c)))
                .collect();
            SparsePoly::new(terms, 2, MonomialOrder::Grevlex)
        })
    }

    fn small_fields() -> impl Strategy<Value = Vec<Derivation<Plane>>> {
        let alg = plane();
        proptest::collection::vec((small_poly(), small_poly()), 1..4).prop_map(move |pairs| {
            pairs
                .into_iter()
                .map(|(a, b)| Derivation::from_images(Arc::clone(&alg), vec![a, b]).unwrap())
                .collect()
        })
    }

    fn solve(generators: Vec<Derivation<Plane>>, max_iter: usize) -> SolverReport<Plane> {
        LieBasisSolver::new(generators, SolverConfig::with_max_iter(max_iter))
            .unwrap()
            .run()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn success_recovers_exact_partials(generators in small_fields()) {
            let alg = Arc::clone(generators[0].algebra());
            let report = solve(generators, 30);
            if let Some(partials) = &report.partials {
                prop_assert!(report.is_success());
                for (i, p) in partials.iter().enumerate() {
                    prop_assert_eq!(p, &Derivation::partial(Arc::clone(&alg), i).unwrap());
                }
            } else {
                prop_assert!(!report.is_success());
            }
        }

        #[test]
        fn runs_are_reproducible(generators in small_fields()) {
            let first = solve(generators.clone(), 30);
            let second = solve(generators, 30);
            prop_assert_eq!(first.state, second.state);
            prop_assert_eq!(first.events, second.events);
        }

        #[test]
        fn partials_in_front_always_succeed(extra in small_fields()) {
            let alg = Arc::clone(extra[0].algebra());
            let mut generators = vec![
                Derivation::partial(Arc::clone(&alg), 0).unwrap(),
                Derivation::partial(Arc::clone(&alg), 1).unwrap(),
            ];
            generators.extend(extra);

            let report = solve(generators, 30);
            prop_assert!(report.is_success());
            prop_assert!(report.iterations <= 2 + 3);
        }

        #[test]
        fn accepted_keys_are_never_reduced_again(generators in small_fields()) {
            // an accepted element is reduced, so its key was absent at the time
            let report = solve(generators, 30);
            let mut seen = std::collections::HashSet::new();
            for event in &report.events {
                if let SolverEvent::Accepted { component, monomial, replaced, .. } = event {
                    let fresh = seen.insert((*component, monomial.clone()));
                    prop_assert!(fresh && !replaced);
                }
            }
        }
    }
}
