//! Property-based tests for derivations and the Lie bracket.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use proptest::prelude::*;

    use crate::derivation::Derivation;
    use crate::element::Element;
    use liebasis_poly::{Monomial, MonomialOrder, PolyRing, SparsePoly};
    use liebasis_rings::rationals::Q;

    fn plane() -> Arc<PolyRing<Q>> {
        Arc::new(PolyRing::parse("x, y", MonomialOrder::Grevlex).unwrap())
    }

    // Strategy for generating small rational coefficients
    fn small_coeff() -> impl Strategy<Value = Q> {
        (-5i64..5i64).prop_map(Q::from_integer)
    }

    // Strategy for polynomials in K[x, y] of degree <= 2 per variable
    fn small_poly() -> impl Strategy<Value = SparsePoly<Q>> {
        proptest::collection::vec((small_coeff(), 0u32..3, 0u32..3), 0..4).prop_map(|terms| {
            let terms = terms
                .into_iter()
                .map(|(c, a, b)| (Monomial::new(&[a, b]), c))
                .collect();
            SparsePoly::new(terms, 2, MonomialOrder::Grevlex)
        })
    }

    fn small_field() -> impl Strategy<Value = Derivation<PolyRing<Q>>> {
        (small_poly(), small_poly())
            .prop_map(|(a, b)| Derivation::from_images(plane(), vec![a, b]).unwrap())
    }

    proptest! {
        // Lie algebra axioms

        #[test]
        fn bracket_antisymmetric(a in small_field(), b in small_field()) {
            prop_assert_eq!(a.bracket(&b), b.bracket(&a).neg());
        }

        #[test]
        fn self_bracket_vanishes(a in small_field()) {
            prop_assert!(a.bracket(&a).is_zero());
        }

        #[test]
        fn jacobi_identity(a in small_field(), b in small_field(), c in small_field()) {
            let sum = a.bracket(&b.bracket(&c))
                .add(&b.bracket(&c.bracket(&a)))
                .add(&c.bracket(&a.bracket(&b)));
            prop_assert!(sum.is_zero());
        }

        #[test]
        fn bracket_is_bilinear(a in small_field(), b in small_field(), c in small_field(), k in small_coeff()) {
            let lhs = a.add(&b.scale(&k)).bracket(&c);
            let rhs = a.bracket(&c).add(&b.bracket(&c).scale(&k));
            prop_assert_eq!(lhs, rhs);
        }

        // Derivation axioms

        #[test]
        fn leibniz_rule(d in small_field(), f in small_poly(), g in small_poly()) {
            // D(fg) = f D(g) + g D(f)
            let lhs = d.apply(&(&f * &g));
            let rhs = &(&f * &d.apply(&g)) + &(&g * &d.apply(&f));
            prop_assert_eq!(lhs, rhs);
        }

        #[test]
        fn linearity(d in small_field(), f in small_poly(), g in small_poly(), k in small_coeff()) {
            prop_assert_eq!(d.apply(&(&f + &g)), &d.apply(&f) + &d.apply(&g));
            prop_assert_eq!(d.apply(&f.scale(&k)), d.apply(&f).scale(&k));
        }

        #[test]
        fn constants_are_killed(d in small_field(), k in small_coeff()) {
            let ring = d.algebra().clone();
            prop_assert!(d.apply(&ring.constant(k.clone())).is_zero());
            prop_assert!(d.evaluate(&Element::Scalar(k)).unwrap().is_zero());
        }

        // Bracket agrees with the commutator of operators

        #[test]
        fn bracket_is_commutator(a in small_field(), b in small_field(), f in small_poly()) {
            let lhs = a.bracket(&b).apply(&f);
            let rhs = &a.apply(&b.apply(&f)) - &b.apply(&a.apply(&f));
            prop_assert_eq!(lhs, rhs);
        }

        // Leading terms

        #[test]
        fn leading_term_scales_away(a in small_field(), k in small_coeff()) {
            prop_assume!(k != Q::from_integer(0));
            match a.leading_term() {
                None => prop_assert!(a.is_zero()),
                Some(lt) => {
                    let scaled = a.scale(&k).leading_term().unwrap();
                    prop_assert_eq!(scaled.key(), lt.key());
                    prop_assert_eq!(scaled.coeff, lt.coeff * k);
                }
            }
        }
    }
}
