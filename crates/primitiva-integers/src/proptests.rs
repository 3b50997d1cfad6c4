//! Property-based tests for the integer and rational wrappers.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{Integer, Rational};

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    proptest! {
        #[test]
        fn gcd_divides_both(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let g = a.gcd(&b);

            prop_assert!(a.is_divisible_by(&g));
            prop_assert!(b.is_divisible_by(&g));
            prop_assert_eq!(g.signum(), 1);
        }

        #[test]
        fn gcd_times_lcm_is_product(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!(a.gcd(&b) * a.lcm(&b), (&a * &b).abs());
        }

        #[test]
        fn divisors_are_exactly_the_divisors(n in non_zero_int()) {
            let n = Integer::new(n);
            let ds = n.divisors(10_000).unwrap();
            for d in &ds {
                prop_assert!(n.is_divisible_by(d));
            }
            let count = (1..=n.abs().to_i64().unwrap())
                .filter(|&d| n.is_divisible_by(&Integer::new(d)))
                .count();
            prop_assert_eq!(ds.len(), count);
        }

        #[test]
        fn isqrt_is_floor(n in 0i64..1_000_000i64) {
            let n = Integer::new(n);
            let r = n.isqrt().unwrap();
            let next = &r + &Integer::one();
            prop_assert!(&r * &r <= n);
            prop_assert!(&next * &next > n);
        }

        #[test]
        fn square_split_reconstructs(n in 1i64..100_000i64) {
            let n = Integer::new(n);
            let (s, d) = n.square_split(1_000).unwrap();
            prop_assert_eq!(&s * &s * &d, n);
            for p in 2i64..=316 {
                prop_assert!(!d.is_divisible_by(&Integer::new(p * p)));
            }
        }

        #[test]
        fn rational_denominator_positive(num in small_int(), den in non_zero_int()) {
            let r = Rational::from_i64(num, den);
            prop_assert_eq!(r.denominator().signum(), 1);
            prop_assert_eq!(r.numerator().gcd(&r.denominator()).is_one() || r.is_zero(), true);
        }

        #[test]
        fn rational_distributive(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int(),
            num_c in small_int(),
            den_c in non_zero_int()
        ) {
            let a = Rational::from_i64(num_a, den_a);
            let b = Rational::from_i64(num_b, den_b);
            let c = Rational::from_i64(num_c, den_c);
            prop_assert_eq!(&a * &(&b + &c), &a * &b + &a * &c);
        }

        #[test]
        fn rational_multiplicative_inverse(num in non_zero_int(), den in non_zero_int()) {
            let a = Rational::from_i64(num, den);
            prop_assert!((&a * &a.recip()).is_one());
        }
    }
}
