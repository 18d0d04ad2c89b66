//! Property-based tests for sparse polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::monomial::Monomial;
    use crate::ordering::MonomialOrder;
    use crate::quotient::QuotientRing;
    use crate::ring::PolyRing;
    use crate::sparse::SparsePoly;
    use liebasis_rings::rationals::Q;

    // Strategy for generating small rational coefficients
    fn small_coeff() -> impl Strategy<Value = Q> {
        (-10i64..10i64).prop_map(Q::from_integer)
    }

    // Strategy for small polynomials in K[x, y] with degree <= 3 per variable
    fn small_poly() -> impl Strategy<Value = SparsePoly<Q>> {
        proptest::collection::vec((small_coeff(), 0u32..4, 0u32..4), 0..6).prop_map(|terms| {
            let terms = terms
                .into_iter()
                .map(|(c, a, b)| (Monomial::new(&[a, b]), c))
                .collect();
            SparsePoly::new(terms, 2, MonomialOrder::Grevlex)
        })
    }

    fn zero() -> SparsePoly<Q> {
        SparsePoly::zero(2, MonomialOrder::Grevlex)
    }

    fn one() -> SparsePoly<Q> {
        SparsePoly::one(2, MonomialOrder::Grevlex)
    }

    proptest! {
        // Polynomial ring axioms

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn poly_add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            let left = &a * &(&b + &c);
            let right = &(&a * &b) + &(&a * &c);
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_identities(a in small_poly()) {
            prop_assert_eq!(&a + &zero(), a.clone());
            prop_assert_eq!(&a * &one(), a.clone());
            prop_assert!((&a * &zero()).is_zero());
            prop_assert!((&a - &a).is_zero());
            prop_assert!((&a + &(-&a)).is_zero());
        }

        // Terms stay sorted, combined and nonzero

        #[test]
        fn poly_terms_are_canonical(a in small_poly(), b in small_poly()) {
            let p = &a * &b;
            let order = p.order();
            for pair in p.terms().windows(2) {
                prop_assert_eq!(
                    order.compare(&pair[0].0, &pair[1].0),
                    std::cmp::Ordering::Greater
                );
            }
        }

        // Differentiation

        #[test]
        fn derivative_is_linear(a in small_poly(), b in small_poly(), c in small_coeff()) {
            let lhs = (&a.scale(&c) + &b).derivative(0);
            let rhs = &a.derivative(0).scale(&c) + &b.derivative(0);
            prop_assert_eq!(lhs, rhs);
        }

        #[test]
        fn derivative_product_rule(a in small_poly(), b in small_poly()) {
            // (ab)' = a'b + ab'
            let lhs = (&a * &b).derivative(1);
            let rhs = &(&a.derivative(1) * &b) + &(&a * &b.derivative(1));
            prop_assert_eq!(lhs, rhs);
        }

        #[test]
        fn partials_commute(a in small_poly()) {
            prop_assert_eq!(a.derivative(0).derivative(1), a.derivative(1).derivative(0));
        }

        // Degree properties

        #[test]
        fn poly_mul_degree(a in small_poly(), b in small_poly()) {
            let product = &a * &b;
            if let (Some(da), Some(db)) = (a.degree(), b.degree()) {
                prop_assert_eq!(product.degree(), Some(da + db));
            } else {
                prop_assert!(product.is_zero());
            }
        }

        // Normal forms are canonical representatives

        #[test]
        fn normal_form_is_idempotent_and_additive(a in small_poly(), b in small_poly()) {
            let ring = PolyRing::<Q>::parse("x, y", MonomialOrder::Grevlex).unwrap();
            let (x, y) = (ring.gen(0), ring.gen(1));
            let circle = &(&(&x * &x) + &(&y * &y)) - &ring.one();
            let qr = QuotientRing::new(ring, vec![circle]).unwrap();

            let na = qr.normal_form(&a);
            prop_assert_eq!(qr.normal_form(&na), na.clone());
            prop_assert_eq!(
                qr.normal_form(&(&a + &b)),
                &na + &qr.normal_form(&b)
            );
        }
    }
}
