//! Property-based tests for rational function arithmetic and Hermite reduction.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::hermite::hermite_reduce;
    use crate::RationalFunction;
    use primitiva_linalg::UnknownPool;
    use primitiva_poly::algorithms::gcd::poly_div_rem;
    use primitiva_poly::algorithms::squarefree::is_squarefree;
    use primitiva_poly::dense::DensePoly;
    use primitiva_rings::rationals::Q;
    use primitiva_rings::traits::Ring;

    fn small_coeff() -> impl Strategy<Value = Q> {
        (-9i64..9i64).prop_map(Q::from_integer)
    }

    fn small_poly(max_len: usize) -> impl Strategy<Value = DensePoly<Q>> {
        proptest::collection::vec(small_coeff(), 1..=max_len).prop_map(DensePoly::new)
    }

    // Product of (x - r)^k with small roots and multiplicities
    fn repeated_root_denominator() -> impl Strategy<Value = DensePoly<Q>> {
        proptest::collection::vec((-4i64..4i64, 1u32..=3u32), 1..=3).prop_map(|factors| {
            factors.iter().fold(DensePoly::one(), |acc, &(r, k)| {
                acc.mul(&DensePoly::new(vec![Q::from_integer(-r), Q::one()]).pow(k))
            })
        })
    }

    proptest! {
        #[test]
        fn derivative_is_additive(
            a in small_poly(4),
            b in small_poly(4),
            c in small_poly(3),
        ) {
            let f = RationalFunction::new(a, DensePoly::new(vec![Q::one(), Q::zero(), Q::one()]));
            let g = RationalFunction::new(b, c.mul(&c).add(&DensePoly::one()));
            prop_assert_eq!(
                f.add_ref(&g).derivative(),
                f.derivative().add_ref(&g.derivative())
            );
        }

        #[test]
        fn hermite_postcondition(f in small_poly(6), g in repeated_root_denominator()) {
            let (_, f) = poly_div_rem(&f, &g);
            let r = hermite_reduce(&f, &g, &mut UnknownPool::new()).unwrap();

            let lhs = r.rational_part.derivative().add_ref(&r.log_residual);
            prop_assert_eq!(lhs, RationalFunction::new(f, g));
            prop_assert!(is_squarefree(r.log_residual.denominator()));
        }

        #[test]
        fn hermite_rational_part_is_proper(f in small_poly(6), g in repeated_root_denominator()) {
            let (_, f) = poly_div_rem(&f, &g);
            let r = hermite_reduce(&f, &g, &mut UnknownPool::new()).unwrap();
            prop_assert!(r.rational_part.is_proper());
            prop_assert!(r.log_residual.is_proper());
        }
    }
}
