//! Property-based tests for polynomial arithmetic and elimination.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::algorithms::gcd::{exact_quotient, poly_div_rem, poly_extended_gcd, poly_gcd};
    use crate::algorithms::resultant::resultant;
    use crate::algorithms::roots::real_roots_in_field;
    use crate::algorithms::squarefree::squarefree_decomposition;
    use crate::algorithms::sturm::count_real_roots;
    use crate::algorithms::subresultant::subresultant_prs;
    use crate::dense::DensePoly;
    use primitiva_rings::rationals::Q;
    use primitiva_rings::traits::Ring;

    fn small_coeff() -> impl Strategy<Value = Q> {
        (-20i64..20i64).prop_map(Q::from_integer)
    }

    // Degree 0-4
    fn small_poly() -> impl Strategy<Value = DensePoly<Q>> {
        proptest::collection::vec(small_coeff(), 1..=5).prop_map(DensePoly::new)
    }

    fn nonconstant_poly() -> impl Strategy<Value = DensePoly<Q>> {
        small_poly().prop_filter("polynomial must have positive degree", |p| p.degree() > 0)
    }

    fn linear_factors() -> impl Strategy<Value = Vec<i64>> {
        proptest::collection::btree_set(-6i64..6i64, 1..=4).prop_map(|s| s.into_iter().collect())
    }

    fn from_roots(roots: &[i64]) -> DensePoly<Q> {
        roots.iter().fold(DensePoly::one(), |acc, &r| {
            acc.mul(&DensePoly::new(vec![Q::from_integer(-r), Q::one()]))
        })
    }

    proptest! {
        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.mul(&b.add(&c)), a.mul(&b).add(&a.mul(&c)));
        }

        #[test]
        fn poly_eval_mul(a in small_poly(), b in small_poly(), x in small_coeff()) {
            prop_assert_eq!(a.mul(&b).eval(&x), a.eval(&x) * b.eval(&x));
        }

        #[test]
        fn division_identity(a in small_poly(), b in nonconstant_poly()) {
            let (q, r) = poly_div_rem(&a, &b);
            prop_assert_eq!(q.mul(&b).add(&r), a);
            prop_assert!(r.is_zero() || r.degree() < b.degree());
        }

        #[test]
        fn bezout_identity(a in small_poly(), b in small_poly()) {
            let (g, s, t) = poly_extended_gcd(&a, &b);
            prop_assert_eq!(s.mul(&a).add(&t.mul(&b)), g.clone());
            prop_assert_eq!(g, poly_gcd(&a, &b));
        }

        #[test]
        fn exact_quotient_of_product(a in small_poly(), b in nonconstant_poly()) {
            prop_assert_eq!(exact_quotient(&a.mul(&b), &b), Some(a));
        }

        #[test]
        fn resultant_antisymmetry(a in nonconstant_poly(), b in nonconstant_poly()) {
            let sign = if (a.degree() * b.degree()) % 2 == 0 { Q::one() } else { -Q::one() };
            prop_assert_eq!(resultant(&a, &b), sign * resultant(&b, &a));
        }

        #[test]
        fn resultant_detects_common_factor(
            a in small_poly(),
            b in small_poly(),
            h in nonconstant_poly()
        ) {
            prop_assume!(!a.is_zero() && !b.is_zero());
            prop_assert!(resultant(&a.mul(&h), &b.mul(&h)).is_zero());
        }

        #[test]
        fn resultant_is_product_of_values(roots in linear_factors(), g in nonconstant_poly()) {
            let f = from_roots(&roots);
            let expected = roots
                .iter()
                .fold(Q::one(), |acc, &r| acc * g.eval(&Q::from_integer(r)));
            prop_assert_eq!(resultant(&f, &g), expected);
        }

        #[test]
        fn prs_last_member_is_gcd(a in nonconstant_poly(), b in nonconstant_poly(), h in small_poly()) {
            prop_assume!(!h.is_zero());
            let (a, b) = (a.mul(&h), b.mul(&h));
            let (a, b) = if a.degree() >= b.degree() { (a, b) } else { (b, a) };
            let prs = subresultant_prs(&a, &b);
            let last = &prs[prs.len() - 1];
            prop_assert_eq!(crate::algorithms::gcd::make_monic(last), poly_gcd(&a, &b));
        }

        #[test]
        fn squarefree_reconstructs(a in nonconstant_poly(), b in nonconstant_poly()) {
            let f = a.mul(&b).mul(&b);
            let decomp = squarefree_decomposition(&f);
            prop_assert_eq!(decomp.to_polynomial(), f);
        }

        #[test]
        fn sturm_counts_found_roots(roots in linear_factors()) {
            let p = from_roots(&roots).mul(&DensePoly::new(vec![Q::one(), Q::zero(), Q::one()]));
            prop_assert_eq!(count_real_roots(&p), Some(roots.len()));
            let found: Vec<Q> = roots.iter().map(|&r| Q::from_integer(r)).collect();
            prop_assert_eq!(real_roots_in_field(&p), found);
        }
    }
}
