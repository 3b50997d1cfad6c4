//! Algebraic trait impls for `DensePoly`.
//!
//! R[x] is a ring whenever R is, and a Euclidean domain over a field. These
//! impls are what let the algorithms treat F[t] as a coefficient ring.

use primitiva_rings::traits::{CommutativeRing, EuclideanDomain, Field, IntegralDomain, Ring};

use crate::algorithms::gcd::{poly_div_rem, poly_extended_gcd, poly_gcd};
use crate::dense::DensePoly;

impl<R: CommutativeRing> Ring for DensePoly<R> {
    fn zero() -> Self {
        DensePoly::zero()
    }

    fn one() -> Self {
        DensePoly::one()
    }

    fn is_zero(&self) -> bool {
        DensePoly::is_zero(self)
    }

    fn is_one(&self) -> bool {
        self.is_constant() && self.coeffs()[0].is_one()
    }

    fn mul_by_scalar(&self, n: i64) -> Self {
        self.map_coeffs(|c| c.mul_by_scalar(n))
    }

    fn pow(&self, n: u32) -> Self {
        DensePoly::pow(self, n)
    }
}

impl<R: CommutativeRing> CommutativeRing for DensePoly<R> {}
impl<R: IntegralDomain> IntegralDomain for DensePoly<R> {}

impl<F: Field> EuclideanDomain for DensePoly<F> {
    fn div_rem(&self, other: &Self) -> (Self, Self) {
        poly_div_rem(self, other)
    }

    fn gcd(&self, other: &Self) -> Self {
        poly_gcd(self, other)
    }

    fn extended_gcd(&self, other: &Self) -> (Self, Self, Self) {
        poly_extended_gcd(self, other)
    }
}

impl<R: Ring> std::ops::Add for DensePoly<R> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        DensePoly::add(&self, &rhs)
    }
}

impl<R: Ring> std::ops::Sub for DensePoly<R> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        DensePoly::sub(&self, &rhs)
    }
}

impl<R: Ring> std::ops::Mul for DensePoly<R> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        DensePoly::mul(&self, &rhs)
    }
}

impl<R: Ring> std::ops::Neg for DensePoly<R> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        DensePoly::neg(&self)
    }
}
