//! Arithmetic operations for rational functions.
//!
//! Implements field operations: addition, subtraction, multiplication, division.

use crate::RationalFunction;
use primitiva_rings::traits::Field;

impl<K: Field> RationalFunction<K> {
    /// Adds two rational functions by reference.
    pub fn add_ref(&self, other: &Self) -> Self {
        // a/b + c/d = (ad + bc) / bd
        let num = self
            .numerator()
            .mul(other.denominator())
            .add(&other.numerator().mul(self.denominator()));
        let den = self.denominator().mul(other.denominator());

        Self::new(num, den)
    }

    /// Subtracts another rational function from this one.
    pub fn sub_ref(&self, other: &Self) -> Self {
        self.add_ref(&other.neg())
    }

    /// Multiplies two rational functions.
    pub fn mul_ref(&self, other: &Self) -> Self {
        let num = self.numerator().mul(other.numerator());
        let den = self.denominator().mul(other.denominator());

        Self::new(num, den)
    }

    /// Multiplies by a constant.
    pub fn scale(&self, c: &K) -> Self {
        Self::new(self.numerator().scale(c), self.denominator().clone())
    }

    /// Divides this rational function by another.
    ///
    /// # Panics
    ///
    /// Panics if `other` is zero.
    pub fn div_ref(&self, other: &Self) -> Self {
        if other.is_zero() {
            panic!("division by zero");
        }

        let num = self.numerator().mul(other.denominator());
        let den = self.denominator().mul(other.numerator());

        Self::new(num, den)
    }

    /// Computes the multiplicative inverse.
    ///
    /// Returns `None` if this is zero.
    pub fn inv(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(Self::new(
                self.denominator().clone(),
                self.numerator().clone(),
            ))
        }
    }

    /// Raises to a non-negative integer power.
    pub fn pow(&self, n: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul_ref(&base);
            }
            exp >>= 1;
            if exp > 0 {
                base = base.mul_ref(&base);
            }
        }

        result
    }
}

impl<K: Field> std::ops::Add for RationalFunction<K> {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        self.add_ref(&other)
    }
}

impl<K: Field> std::ops::Add<&RationalFunction<K>> for RationalFunction<K> {
    type Output = Self;

    fn add(self, other: &Self) -> Self::Output {
        self.add_ref(other)
    }
}

impl<K: Field> std::ops::Sub for RationalFunction<K> {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        self.sub_ref(&other)
    }
}

impl<K: Field> std::ops::Sub<&RationalFunction<K>> for RationalFunction<K> {
    type Output = Self;

    fn sub(self, other: &Self) -> Self::Output {
        self.sub_ref(other)
    }
}

impl<K: Field> std::ops::Mul for RationalFunction<K> {
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output {
        self.mul_ref(&other)
    }
}

impl<K: Field> std::ops::Mul<&RationalFunction<K>> for RationalFunction<K> {
    type Output = Self;

    fn mul(self, other: &Self) -> Self::Output {
        self.mul_ref(other)
    }
}

impl<K: Field> std::ops::Div for RationalFunction<K> {
    type Output = Self;

    fn div(self, other: Self) -> Self::Output {
        self.div_ref(&other)
    }
}

impl<K: Field> std::ops::Div<&RationalFunction<K>> for RationalFunction<K> {
    type Output = Self;

    fn div(self, other: &Self) -> Self::Output {
        self.div_ref(other)
    }
}

impl<K: Field> std::ops::Neg for RationalFunction<K> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        RationalFunction::neg(&self)
    }
}
