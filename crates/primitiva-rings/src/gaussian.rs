//! The Gaussian rationals Q(i).
//!
//! Elements are a + b·i with a, b rational. This is the field the integrator
//! falls back to when an input mentions the imaginary unit, and the field in
//! which complex-mode results are expressed.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::{One, Zero};
use primitiva_integers::Rational;

use crate::traits::{CommutativeRing, ConstantField, EuclideanDomain, Field, IntegralDomain, Ring};

/// An element a + b·i of Q(i).
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct GaussianRational {
    /// Real part.
    pub re: Rational,
    /// Imaginary part.
    pub im: Rational,
}

impl GaussianRational {
    /// Creates a + b·i.
    #[must_use]
    pub fn new(re: Rational, im: Rational) -> Self {
        Self { re, im }
    }

    /// Embeds a rational number.
    #[must_use]
    pub fn real(re: Rational) -> Self {
        Self::new(re, Rational::zero())
    }

    /// The imaginary unit i.
    #[must_use]
    pub fn i() -> Self {
        Self::new(Rational::zero(), Rational::one())
    }

    /// Creates (a/b) + (c/d)·i from machine integers.
    ///
    /// # Panics
    ///
    /// Panics if a denominator is zero.
    #[must_use]
    pub fn from_i64(re: (i64, i64), im: (i64, i64)) -> Self {
        Self::new(Rational::from_i64(re.0, re.1), Rational::from_i64(im.0, im.1))
    }

    /// The complex conjugate a - b·i.
    #[must_use]
    pub fn conj(&self) -> Self {
        Self::new(self.re.clone(), -&self.im)
    }

    /// The norm a² + b².
    #[must_use]
    pub fn norm(&self) -> Rational {
        &self.re * &self.re + &self.im * &self.im
    }
}

impl Ring for GaussianRational {
    fn zero() -> Self {
        Self::new(Rational::zero(), Rational::zero())
    }

    fn one() -> Self {
        Self::real(Rational::one())
    }

    fn is_zero(&self) -> bool {
        self.re.is_zero() && self.im.is_zero()
    }

    fn is_one(&self) -> bool {
        self.re.is_one() && self.im.is_zero()
    }

    fn mul_by_scalar(&self, n: i64) -> Self {
        let n = Rational::from(n);
        Self::new(&self.re * &n, &self.im * &n)
    }
}

impl CommutativeRing for GaussianRational {}
impl IntegralDomain for GaussianRational {}

impl EuclideanDomain for GaussianRational {
    fn div_rem(&self, other: &Self) -> (Self, Self) {
        (self.field_div(other), Self::zero())
    }

    fn gcd(&self, other: &Self) -> Self {
        if self.is_zero() && other.is_zero() {
            Self::zero()
        } else {
            Self::one()
        }
    }

    fn extended_gcd(&self, other: &Self) -> (Self, Self, Self) {
        match (self.inv(), other.inv()) {
            (Some(inv), _) => (Self::one(), inv, Self::zero()),
            (None, Some(inv)) => (Self::one(), Self::zero(), inv),
            (None, None) => (Self::zero(), Self::zero(), Self::zero()),
        }
    }
}

impl Field for GaussianRational {
    fn inv(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }
        let n = self.norm();
        Some(Self::new(&self.re / &n, -(&self.im / &n)))
    }
}

impl ConstantField for GaussianRational {
    fn from_rational(r: Rational) -> Self {
        Self::real(r)
    }

    fn real_part(&self) -> Self {
        Self::real(self.re.clone())
    }

    fn imag_part(&self) -> Self {
        Self::real(self.im.clone())
    }

    fn real_sign(&self) -> Option<Ordering> {
        self.im.is_zero().then(|| self.re.signum().cmp(&0))
    }

    fn to_rational(&self) -> Option<Rational> {
        self.im.is_zero().then(|| self.re.clone())
    }
}

impl Add for GaussianRational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for GaussianRational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for GaussianRational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let re = &self.re * &rhs.re - &self.im * &rhs.im;
        let im = &self.re * &rhs.im + &self.im * &rhs.re;
        Self::new(re, im)
    }
}

impl Neg for GaussianRational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.re, -self.im)
    }
}

impl From<Rational> for GaussianRational {
    fn from(value: Rational) -> Self {
        Self::real(value)
    }
}

impl fmt::Debug for GaussianRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GaussianRational({self})")
    }
}

impl fmt::Display for GaussianRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.re.is_zero(), self.im.is_zero()) {
            (_, true) => write!(f, "{}", self.re),
            (true, false) => write!(f, "{}*I", self.im),
            (false, false) if self.im.is_negative() => {
                write!(f, "({} - {}*I)", self.re, self.im.abs())
            }
            (false, false) => write!(f, "({} + {}*I)", self.re, self.im),
        }
    }
}
