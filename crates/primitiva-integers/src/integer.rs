//! Arbitrary precision integers.
//!
//! A thin wrapper around `dashu::IBig` carrying the handful of number
//! theoretic helpers the polynomial layer relies on: gcd for content
//! extraction and a bounded divisor search for rational roots.

use dashu::base::{Abs, Gcd, Signed as DashuSigned};
use dashu::integer::IBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

/// An arbitrary precision integer.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Integer(IBig);

impl Integer {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// Parses an integer written in the given base.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid integer.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Self, dashu::base::error::ParseError> {
        IBig::from_str_radix(s, radix).map(Self)
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.0.is_zero() {
            0
        } else if DashuSigned::is_positive(&self.0) {
            1
        } else {
            -1
        }
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Greatest common divisor, always non-negative.
    ///
    /// gcd(0, 0) is 0.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        if self.is_zero() {
            return other.abs();
        }
        if other.is_zero() {
            return self.abs();
        }
        Self(IBig::from(self.0.clone().gcd(other.0.clone())))
    }

    /// Least common multiple, always non-negative.
    #[must_use]
    pub fn lcm(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let g = self.gcd(other);
        Self(&self.0 / &g.0 * &other.0).abs()
    }

    /// Returns true if `divisor` divides `self` exactly.
    ///
    /// Zero divides only zero.
    #[must_use]
    pub fn is_divisible_by(&self, divisor: &Self) -> bool {
        if divisor.is_zero() {
            return self.is_zero();
        }
        (&self.0 % &divisor.0).is_zero()
    }

    /// The positive divisors of `|self|` in ascending order.
    ///
    /// Trial division stops after `max_trials` candidates; `None` means the
    /// search was abandoned (or `self` is zero, or does not fit in 64 bits),
    /// so callers must treat the answer as unknown rather than empty.
    #[must_use]
    pub fn divisors(&self, max_trials: u64) -> Option<Vec<Integer>> {
        let n: u64 = self.abs().0.try_into().ok()?;
        if n == 0 {
            return None;
        }

        let mut low = Vec::new();
        let mut high = Vec::new();
        let mut d: u64 = 1;
        let mut trials = 0;
        while d.checked_mul(d).is_some_and(|sq| sq <= n) {
            trials += 1;
            if trials > max_trials {
                return None;
            }
            if n % d == 0 {
                low.push(d);
                if d != n / d {
                    high.push(n / d);
                }
            }
            d += 1;
        }

        Some(
            low.into_iter()
                .chain(high.into_iter().rev())
                .map(Integer::from)
                .collect(),
        )
    }

    /// Returns the inner `dashu::IBig`.
    #[must_use]
    pub fn into_inner(self) -> IBig {
        self.0
    }

    /// The integer square root ⌊√self⌋, or `None` for negative values.
    #[must_use]
    pub fn isqrt(&self) -> Option<Self> {
        if self.is_negative() {
            return None;
        }
        if *self < Self::new(2) {
            return Some(self.clone());
        }
        // Newton from above: x ← (x + n/x)/2 decreases until it reaches ⌊√n⌋
        let two = Self::new(2);
        let mut x = self.clone();
        let mut y = (&x + &Self::one()) / &two;
        while y < x {
            x = y;
            y = (&x + &(self / &x)) / &two;
        }
        Some(x)
    }

    /// Returns true if this is the square of an integer.
    #[must_use]
    pub fn is_perfect_square(&self) -> bool {
        self.isqrt().is_some_and(|r| &r * &r == *self)
    }

    /// Splits a positive integer as s²·d with d squarefree.
    ///
    /// Trial division stops after `max_trials` candidates. The cofactor left
    /// over is still accepted when it is 1, a perfect square, or too small to
    /// hide a repeated prime above the trial bound; otherwise the split is
    /// unknown and `None` is returned. `None` is also returned for n ≤ 0.
    #[must_use]
    pub fn square_split(&self, max_trials: u64) -> Option<(Integer, Integer)> {
        if self.signum() <= 0 {
            return None;
        }

        let mut rest = self.clone();
        let mut square = Self::one();
        let mut free = Self::one();
        let mut p = Self::new(2);
        let mut trials = 0;
        while &p * &p <= rest {
            trials += 1;
            if trials > max_trials {
                break;
            }
            let mut exponent = 0u32;
            while rest.is_divisible_by(&p) {
                rest = &rest / &p;
                exponent += 1;
            }
            square = square * p.pow(exponent / 2);
            if exponent % 2 == 1 {
                free = free * &p;
            }
            p = p + Self::one();
        }

        if rest.is_one() {
            return Some((square, free));
        }
        if &p * &p > rest {
            // rest is prime
            return Some((square, free * rest));
        }
        let root = rest.isqrt()?;
        if &root * &root == rest {
            // a square of a prime above the trial bound
            return Some((square * root, free));
        }
        // no prime factor below p, so rest < p³ leaves room for at most two
        // distinct primes
        if rest < p.pow(3) {
            return Some((square, free * rest));
        }
        None
    }

    /// Converts to an i64 if the value fits.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.0.clone().try_into().ok()
    }

    /// Computes self^exp.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        Self(self.0.pow(exp as usize))
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self(IBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Integer {
    fn one() -> Self {
        Self(IBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == IBig::ONE
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({})", self.0)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

macro_rules! integer_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait for Integer {
            type Output = Integer;

            fn $method(self, rhs: Integer) -> Integer {
                Integer(self.0 $op rhs.0)
            }
        }

        impl $trait<&Integer> for Integer {
            type Output = Integer;

            fn $method(self, rhs: &Integer) -> Integer {
                Integer(self.0 $op &rhs.0)
            }
        }

        impl $trait for &Integer {
            type Output = Integer;

            fn $method(self, rhs: &Integer) -> Integer {
                Integer(&self.0 $op &rhs.0)
            }
        }
    };
}

integer_binop!(Add, add, +);
integer_binop!(Sub, sub, -);
integer_binop!(Mul, mul, *);
integer_binop!(Div, div, /);
integer_binop!(Rem, rem, %);

impl Neg for Integer {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Self::Output {
        Integer(-&self.0)
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for Integer {
    fn from(value: i32) -> Self {
        Self::new(i64::from(value))
    }
}

impl From<u64> for Integer {
    fn from(value: u64) -> Self {
        Self(IBig::from(value))
    }
}

impl From<IBig> for Integer {
    fn from(value: IBig) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(n: i64) -> Integer {
        Integer::new(n)
    }

    #[test]
    fn test_basic_ops() {
        let a = int(10);
        let b = int(3);

        assert_eq!(&a + &b, int(13));
        assert_eq!(&a - &b, int(7));
        assert_eq!(&a * &b, int(30));
        assert_eq!(&a / &b, int(3));
        assert_eq!(a % b, int(1));
    }

    #[test]
    fn test_gcd_lcm() {
        assert_eq!(int(48).gcd(&int(-18)), int(6));
        assert_eq!(int(4).lcm(&int(-6)), int(12));
        assert_eq!(int(0).lcm(&int(5)), int(0));
    }

    #[test]
    fn test_divisibility() {
        assert!(int(36).is_divisible_by(&int(-4)));
        assert!(!int(36).is_divisible_by(&int(5)));
        assert!(int(0).is_divisible_by(&int(0)));
        assert!(!int(3).is_divisible_by(&int(0)));
    }

    #[test]
    fn test_divisors() {
        let ds = int(-36).divisors(1000).unwrap();
        let expected: Vec<Integer> = [1, 2, 3, 4, 6, 9, 12, 18, 36].iter().map(|&d| int(d)).collect();
        assert_eq!(ds, expected);

        assert_eq!(int(1).divisors(10).unwrap(), vec![int(1)]);
        assert_eq!(int(0).divisors(10), None);
        // sqrt(10007) > 5, so the search gives up
        assert_eq!(int(10007).divisors(5), None);
    }

    #[test]
    fn test_gcd_with_zero() {
        assert_eq!(int(0).gcd(&int(0)), int(0));
        assert_eq!(int(0).gcd(&int(-12)), int(12));
        assert_eq!(int(-9).gcd(&int(0)), int(9));
    }

    #[test]
    fn test_isqrt() {
        assert_eq!(int(0).isqrt(), Some(int(0)));
        assert_eq!(int(15).isqrt(), Some(int(3)));
        assert_eq!(int(16).isqrt(), Some(int(4)));
        assert_eq!(int(-4).isqrt(), None);
        assert!(int(144).is_perfect_square());
        assert!(!int(2).is_perfect_square());
    }

    #[test]
    fn test_square_split() {
        assert_eq!(int(32).square_split(100), Some((int(4), int(2))));
        assert_eq!(int(12).square_split(100), Some((int(2), int(3))));
        assert_eq!(int(49).square_split(100), Some((int(7), int(1))));
        assert_eq!(int(30).square_split(100), Some((int(1), int(30))));
        assert_eq!(int(0).square_split(100), None);

        // 10007 is prime
        assert_eq!(int(10007).square_split(200), Some((int(1), int(10007))));
        assert_eq!(int(10007).square_split(1), None);
        // 10007² is recognised as a square past the trial bound
        let big = int(10007) * int(10007) * int(3);
        assert_eq!(big.square_split(10), Some((int(10007), int(3))));
    }

    #[test]
    fn test_large_numbers() {
        let a = Integer::from_str_radix("123456789012345678901234567890", 10).unwrap();
        let b = Integer::from_str_radix("987654321098765432109876543210", 10).unwrap();
        assert_eq!((a + b).to_string(), "1111111110111111111011111111100");
    }

    #[test]
    fn test_divisors_overflow_is_unknown() {
        let big = Integer::from_str_radix("123456789012345678901234567890", 10).unwrap();
        assert_eq!(big.divisors(u64::MAX), None);
    }
}
