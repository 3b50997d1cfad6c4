//! Rational functions as a coefficient field.
//!
//! K(a) is a field, so an integrand whose coefficients involve a symbolic
//! parameter a is just a polynomial over `RationalFunction<K>`. Nesting gives
//! K(a)(b) for two parameters.
//!
//! Signs are generic: f ∈ K(a) has a real sign when N·D has no real root of
//! odd multiplicity, so f keeps one sign for every real a away from its zeros
//! and poles.

use std::cmp::Ordering;

use primitiva_integers::Rational;
use primitiva_poly::algorithms::roots::FieldRoots;
use primitiva_poly::algorithms::squarefree::{squarefree_decomposition, squarefree_part};
use primitiva_poly::algorithms::sturm::count_real_roots;
use primitiva_poly::dense::DensePoly;
use primitiva_rings::traits::{
    CommutativeRing, ConstantField, EuclideanDomain, Field, IntegralDomain, Ring,
};

use crate::RationalFunction;

impl<K: Field> RationalFunction<K> {
    /// The constant c, as c/1.
    pub fn constant(c: K) -> Self {
        Self::from_poly(DensePoly::constant(c))
    }

    /// The constant value, if this does not depend on the variable.
    pub fn as_constant(&self) -> Option<&K> {
        if self.numerator().is_constant() && self.denominator().is_constant() {
            Some(self.numerator().leading_coeff())
        } else {
            None
        }
    }
}

impl<K: Field> Ring for RationalFunction<K> {
    fn zero() -> Self {
        RationalFunction::zero()
    }

    fn one() -> Self {
        RationalFunction::one()
    }

    fn is_zero(&self) -> bool {
        RationalFunction::is_zero(self)
    }

    fn is_one(&self) -> bool {
        self.as_constant().map_or(false, Ring::is_one)
    }

    fn pow(&self, n: u32) -> Self {
        RationalFunction::pow(self, n)
    }
}

impl<K: Field> CommutativeRing for RationalFunction<K> {}

impl<K: Field> IntegralDomain for RationalFunction<K> {}

impl<K: Field> EuclideanDomain for RationalFunction<K> {
    fn div_rem(&self, other: &Self) -> (Self, Self) {
        (self.div_ref(other), RationalFunction::zero())
    }

    fn gcd(&self, other: &Self) -> Self {
        if RationalFunction::is_zero(self) && RationalFunction::is_zero(other) {
            RationalFunction::zero()
        } else {
            RationalFunction::one()
        }
    }

    fn extended_gcd(&self, other: &Self) -> (Self, Self, Self) {
        if let Some(inv) = RationalFunction::inv(self) {
            (RationalFunction::one(), inv, RationalFunction::zero())
        } else if let Some(inv) = RationalFunction::inv(other) {
            (RationalFunction::one(), RationalFunction::zero(), inv)
        } else {
            (RationalFunction::zero(), RationalFunction::zero(), RationalFunction::zero())
        }
    }
}

impl<K: Field> Field for RationalFunction<K> {
    fn inv(&self) -> Option<Self> {
        RationalFunction::inv(self)
    }
}

fn is_real_poly<K: ConstantField>(p: &DensePoly<K>) -> bool {
    p.coeffs().iter().all(ConstantField::is_real)
}

fn real_poly<K: ConstantField>(p: &DensePoly<K>) -> DensePoly<K> {
    p.map_coeffs(ConstantField::real_part)
}

fn imag_poly<K: ConstantField>(p: &DensePoly<K>) -> DensePoly<K> {
    p.map_coeffs(ConstantField::imag_part)
}

impl<K: ConstantField> ConstantField for RationalFunction<K> {
    fn from_rational(r: Rational) -> Self {
        Self::constant(K::from_rational(r))
    }

    fn real_part(&self) -> Self {
        // (Nr + iNi)/(Dr + iDi) times the conjugate of the denominator
        let (nr, ni) = (real_poly(self.numerator()), imag_poly(self.numerator()));
        let (dr, di) = (real_poly(self.denominator()), imag_poly(self.denominator()));
        let norm = dr.mul(&dr).add(&di.mul(&di));
        Self::new(nr.mul(&dr).add(&ni.mul(&di)), norm)
    }

    fn imag_part(&self) -> Self {
        let (nr, ni) = (real_poly(self.numerator()), imag_poly(self.numerator()));
        let (dr, di) = (real_poly(self.denominator()), imag_poly(self.denominator()));
        let norm = dr.mul(&dr).add(&di.mul(&di));
        Self::new(ni.mul(&dr).sub(&nr.mul(&di)), norm)
    }

    fn real_sign(&self) -> Option<Ordering> {
        if !self.is_real() {
            return None;
        }
        if RationalFunction::is_zero(self) {
            return Some(Ordering::Equal);
        }
        let nd = self.numerator().mul(self.denominator());
        let decomposition = squarefree_decomposition(&nd);
        for factor in &decomposition.factors {
            if factor.multiplicity % 2 == 1 && count_real_roots(&factor.factor)? != 0 {
                return None;
            }
        }
        decomposition.unit.real_sign()
    }

    fn is_real(&self) -> bool {
        is_real_poly(self.numerator()) && is_real_poly(self.denominator())
    }

    fn to_rational(&self) -> Option<Rational> {
        self.as_constant()?.to_rational()
    }
}

impl<K: FieldRoots> FieldRoots for RationalFunction<K> {
    fn real_roots(p: &DensePoly<Self>) -> Vec<Self> {
        if p.is_constant() {
            return Vec::new();
        }
        if p.coeffs().iter().all(|c| c.as_constant().is_some()) {
            let lowered = p.map_coeffs(|c| c.as_constant().cloned().unwrap_or_else(K::zero));
            return K::real_roots(&lowered).into_iter().map(Self::constant).collect();
        }

        let mut sf = squarefree_part(p);
        let mut roots = Vec::new();
        if sf.coeff(0).is_zero() {
            roots.push(RationalFunction::zero());
            sf = DensePoly::new(sf.coeffs()[1..].to_vec());
        }

        match sf.degree() {
            1 => roots.push(RationalFunction::neg(&sf.coeff(0).div_ref(&sf.coeff(1)))),
            2 => {
                let (c0, c1, c2) = (sf.coeff(0), sf.coeff(1), sf.coeff(2));
                let disc = c1.mul_ref(&c1).sub_ref(&c0.mul_ref(&c2).scale(&K::from_i64(4)));
                if disc.real_sign() == Some(Ordering::Greater) {
                    if let Some(root) = FieldRoots::sqrt(&disc) {
                        let two_a = c2.scale(&K::from_i64(2));
                        let minus_b = RationalFunction::neg(&c1);
                        roots.push(minus_b.sub_ref(&root).div_ref(&two_a));
                        roots.push(minus_b.add_ref(&root).div_ref(&two_a));
                    }
                }
            }
            _ => {}
        }

        roots.retain(ConstantField::is_real);
        let comparable = roots.iter().enumerate().all(|(i, a)| {
            roots[i + 1..].iter().all(|b| b.sub_ref(a).real_sign().is_some())
        });
        if comparable {
            roots.sort_by(|a, b| a.sub_ref(b).real_sign().unwrap_or(Ordering::Equal));
        }
        roots
    }

    fn sqrt(&self) -> Option<Self> {
        if RationalFunction::is_zero(self) {
            return Some(RationalFunction::zero());
        }
        if let Some(c) = self.as_constant() {
            return FieldRoots::sqrt(c).map(Self::constant);
        }
        // N/D = N·D / D², so the root is sqrt(N·D)/D
        let nd = self.numerator().mul(self.denominator());
        let decomposition = squarefree_decomposition(&nd);
        let mut root = DensePoly::constant(FieldRoots::sqrt(&decomposition.unit)?);
        for factor in &decomposition.factors {
            if factor.multiplicity % 2 == 1 {
                return None;
            }
            root = root.mul(&factor.factor.pow(factor.multiplicity / 2));
        }
        Some(Self::new(root, self.denominator().clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use primitiva_rings::{GaussianRational, Q};

    fn q(n: i64) -> Q {
        Q::from_integer(n)
    }

    fn poly(coeffs: &[i64]) -> DensePoly<Q> {
        DensePoly::new(coeffs.iter().map(|&n| q(n)).collect())
    }

    fn rf(num: &[i64], den: &[i64]) -> RationalFunction<Q> {
        RationalFunction::new(poly(num), poly(den))
    }

    #[test]
    fn test_field_operations() {
        let a = rf(&[0, 1], &[1]);
        let inv = Field::inv(&a).unwrap();
        assert!(Ring::is_one(&(a.clone() * inv)));
        assert_eq!(EuclideanDomain::gcd(&a, &RationalFunction::zero()), RationalFunction::one());
        assert!(Ring::is_zero(&EuclideanDomain::rem(&a, &rf(&[1, 1], &[1]))));
        assert_eq!(<RationalFunction<Q> as Ring>::from_i64(3), RationalFunction::constant(q(3)));
    }

    #[test]
    fn test_generic_sign() {
        // a² + 1 and 1/(a² + 1) are positive, -a²/(a² + 2) is negative
        assert_eq!(rf(&[1, 0, 1], &[1]).real_sign(), Some(Ordering::Greater));
        assert_eq!(rf(&[1], &[1, 0, 1]).real_sign(), Some(Ordering::Greater));
        assert_eq!(rf(&[0, 0, -1], &[2, 0, 1]).real_sign(), Some(Ordering::Less));
        // a changes sign at 0, a - 1 at 1
        assert_eq!(rf(&[0, 1], &[1]).real_sign(), None);
        assert_eq!(rf(&[1], &[-1, 1]).real_sign(), None);
        assert_eq!(RationalFunction::<Q>::zero().real_sign(), Some(Ordering::Equal));
    }

    #[test]
    fn test_complex_parts() {
        // 1/(a + i) = (a - i)/(a² + 1)
        let g = |re: i64, im: i64| GaussianRational::from_i64((re, 1), (im, 1));
        let f = RationalFunction::new(
            DensePoly::constant(g(1, 0)),
            DensePoly::new(vec![g(0, 1), g(1, 0)]),
        );
        assert!(!f.is_real());
        assert_eq!(f.real_sign(), None);

        let norm = DensePoly::new(vec![g(1, 0), g(0, 0), g(1, 0)]);
        assert_eq!(
            f.real_part(),
            RationalFunction::new(DensePoly::new(vec![g(0, 0), g(1, 0)]), norm.clone())
        );
        assert_eq!(f.imag_part(), RationalFunction::new(DensePoly::constant(g(-1, 0)), norm));
    }

    #[test]
    fn test_sqrt() {
        // (a + 1)²/4 and 4/(a - 2)²
        assert_eq!(FieldRoots::sqrt(&rf(&[1, 2, 1], &[4])), Some(rf(&[1, 1], &[2])));
        assert_eq!(FieldRoots::sqrt(&rf(&[4], &[4, -4, 1])), Some(rf(&[2], &[-2, 1])));
        assert_eq!(FieldRoots::sqrt(&rf(&[0, 1], &[1])), None);
        assert_eq!(FieldRoots::sqrt(&rf(&[9], &[1])), Some(rf(&[3], &[1])));
    }

    #[test]
    fn test_real_roots_in_parameter_field() {
        // (x - a)(x - a - 1) has roots a < a + 1
        let c = |num: &[i64]| rf(num, &[1]);
        let p = DensePoly::new(vec![c(&[0, 1, 1]), c(&[-1, -2]), c(&[1])]);
        assert_eq!(FieldRoots::real_roots(&p), vec![c(&[0, 1]), c(&[1, 1])]);

        // x² + a² + 1 has no real roots
        let p = DensePoly::new(vec![c(&[1, 0, 1]), c(&[0]), c(&[1])]);
        assert!(FieldRoots::real_roots(&p).is_empty());

        // x³ - 4x over constants falls back to Q
        let p = DensePoly::new(vec![c(&[0]), c(&[-4]), c(&[0]), c(&[1])]);
        assert_eq!(FieldRoots::real_roots(&p), vec![c(&[-2]), c(&[0]), c(&[2])]);
    }

    #[test]
    fn test_to_rational() {
        assert_eq!(rf(&[3], &[2]).to_rational(), Some(Rational::from_i64(3, 2)));
        assert_eq!(rf(&[0, 1], &[1]).to_rational(), None);
    }
}
