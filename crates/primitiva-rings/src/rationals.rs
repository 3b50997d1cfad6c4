//! The field of rational numbers Q.

use std::cmp::Ordering;
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::{One, Zero};
use primitiva_integers::{Integer, Rational};

use crate::traits::{
    CommutativeRing, ConstantField, EuclideanDomain, Field, IntegralDomain, OrderedRing, Ring,
};

/// The field of rational numbers.
///
/// Wraps `primitiva_integers::Rational` and implements the algebraic traits.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Q(pub Rational);

impl Q {
    /// Creates a rational from numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if `den` is zero.
    #[must_use]
    pub fn new(num: i64, den: i64) -> Self {
        Self(Rational::from_i64(num, den))
    }

    /// Creates a rational from an integer.
    #[must_use]
    pub fn from_integer(n: i64) -> Self {
        Self(Rational::from(n))
    }

    /// The numerator in lowest terms.
    #[must_use]
    pub fn numerator(&self) -> Integer {
        self.0.numerator()
    }

    /// The positive denominator in lowest terms.
    #[must_use]
    pub fn denominator(&self) -> Integer {
        self.0.denominator()
    }
}

impl Ring for Q {
    fn zero() -> Self {
        Self(Rational::zero())
    }

    fn one() -> Self {
        Self(Rational::one())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    fn is_one(&self) -> bool {
        self.0.is_one()
    }

    fn mul_by_scalar(&self, n: i64) -> Self {
        Self(&self.0 * &Rational::from(n))
    }

    fn pow(&self, n: u32) -> Self {
        Self(self.0.pow(n))
    }
}

impl CommutativeRing for Q {}
impl IntegralDomain for Q {}

impl EuclideanDomain for Q {
    fn div_rem(&self, other: &Self) -> (Self, Self) {
        (Self(&self.0 / &other.0), Self::zero())
    }

    fn gcd(&self, other: &Self) -> Self {
        if self.is_zero() && other.is_zero() {
            Self::zero()
        } else {
            Self::one()
        }
    }

    fn extended_gcd(&self, other: &Self) -> (Self, Self, Self) {
        if !self.is_zero() {
            (Self::one(), Self(self.0.recip()), Self::zero())
        } else if !other.is_zero() {
            (Self::one(), Self::zero(), Self(other.0.recip()))
        } else {
            (Self::zero(), Self::zero(), Self::zero())
        }
    }
}

impl Field for Q {
    fn inv(&self) -> Option<Self> {
        (!self.is_zero()).then(|| Self(self.0.recip()))
    }
}

impl OrderedRing for Q {
    fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    fn signum(&self) -> i8 {
        self.0.signum()
    }
}

impl ConstantField for Q {
    fn from_rational(r: Rational) -> Self {
        Self(r)
    }

    fn real_part(&self) -> Self {
        self.clone()
    }

    fn imag_part(&self) -> Self {
        Self::zero()
    }

    fn real_sign(&self) -> Option<Ordering> {
        Some(self.0.signum().cmp(&0))
    }

    fn to_rational(&self) -> Option<Rational> {
        Some(self.0.clone())
    }
}

impl Add for Q {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Q {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Q {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Neg for Q {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Q {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<Rational> for Q {
    fn from(value: Rational) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Q {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_laws() {
        let a = Q::new(2, 3);
        let b = Q::new(3, 4);

        assert_eq!(a.clone() + b.clone(), Q::new(17, 12));
        assert_eq!(a * b, Q::new(1, 2));
    }

    #[test]
    fn test_inverse() {
        let a = Q::new(3, 5);
        let inv = a.inv().unwrap();
        assert!((a * inv).is_one());
        assert_eq!(Q::zero().inv(), None);
    }

    #[test]
    fn test_division() {
        assert_eq!(Q::new(1, 2).field_div(&Q::new(1, 3)), Q::new(3, 2));
    }

    #[test]
    fn test_constant_field() {
        let a = Q::new(-7, 2);
        assert_eq!(a.real_sign(), Some(Ordering::Less));
        assert_eq!(a.real_part(), a);
        assert!(a.imag_part().is_zero());
        assert_eq!(a.to_rational(), Some(Rational::from_i64(-7, 2)));
    }
}
