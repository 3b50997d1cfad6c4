//! Property-based tests for rational integration.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::log_to_atan::log_to_atan;
    use crate::options::RationalIntegrationOptions;
    use crate::rational::integrate_rational_function;
    use primitiva_poly::algorithms::gcd::poly_div_rem;
    use primitiva_poly::dense::DensePoly;
    use primitiva_rational_func::RationalFunction;
    use primitiva_rings::rationals::Q;
    use primitiva_rings::traits::Ring;

    fn small_coeff() -> impl Strategy<Value = Q> {
        (-9i64..9i64).prop_map(Q::from_integer)
    }

    fn small_poly(max_len: usize) -> impl Strategy<Value = DensePoly<Q>> {
        proptest::collection::vec(small_coeff(), 1..=max_len).prop_map(DensePoly::new)
    }

    // Product of (x - r)^k, optionally times x^2 + c
    fn denominator() -> impl Strategy<Value = DensePoly<Q>> {
        (
            proptest::collection::vec((-4i64..4i64, 1u32..=3u32), 1..=3),
            proptest::option::of(1i64..=4i64),
        )
            .prop_map(|(factors, quadratic)| {
                let linear = factors.iter().fold(DensePoly::<Q>::one(), |acc, &(r, k)| {
                    acc.mul(&DensePoly::new(vec![Q::from_integer(-r), Q::one()]).pow(k))
                });
                match quadratic {
                    Some(c) => linear.mul(&DensePoly::new(vec![
                        Q::from_integer(c),
                        Q::zero(),
                        Q::one(),
                    ])),
                    None => linear,
                }
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn antiderivative_differentiates_back(f in small_poly(7), g in denominator()) {
            let r = integrate_rational_function(&f, &g, &RationalIntegrationOptions::default());
            prop_assert!(r.is_ok());
            if let Some(d) = r.unwrap().derivative() {
                prop_assert_eq!(d, RationalFunction::new(f, g));
            }
        }

        #[test]
        fn proper_input_has_no_polynomial_part(f in small_poly(7), g in denominator()) {
            let (_, f) = poly_div_rem(&f, &g);
            let r = integrate_rational_function(&f, &g, &RationalIntegrationOptions::default()).unwrap();
            prop_assert!(r.polynomial_part.is_zero());
            prop_assert!(r.rational_part.is_proper());
        }

        #[test]
        fn integration_is_deterministic(f in small_poly(5), g in denominator()) {
            let options = RationalIntegrationOptions::default();
            let first = integrate_rational_function(&f, &g, &options).unwrap();
            let second = integrate_rational_function(&f, &g, &options).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn log_to_atan_derivative(a in small_poly(4), b in small_poly(3)) {
            prop_assume!(!b.is_zero());
            // d/dx Σ 2·atan(u_k) = d/dx i·log((a + ib)/(a - ib)) = 2(a'b - ab')/(a² + b²)
            let terms = log_to_atan(&a, &b).unwrap();
            let expected = RationalFunction::new(
                a.derivative().mul(&b).sub(&a.mul(&b.derivative())),
                a.mul(&a).add(&b.mul(&b)),
            );
            let actual = terms.iter().fold(RationalFunction::zero(), |acc: RationalFunction<Q>, u| {
                acc.add_ref(&RationalFunction::new(u.derivative(), DensePoly::<Q>::one().add(&u.mul(u))))
            });
            prop_assert_eq!(actual, expected);
        }
    }
}
