//! Rational functions in lowest terms.
//!
//! Every value is kept canonical, so structural equality is equality of
//! functions: the numerator and denominator are coprime, the denominator is
//! monic, and zero is 0/1.

use primitiva_poly::algorithms::gcd::{cofactors, poly_div_rem};
use primitiva_poly::dense::DensePoly;
use primitiva_rings::traits::Field;

/// A quotient P(x)/Q(x) of polynomials over a field K, in lowest terms.
///
/// # Example
///
/// ```
/// use primitiva_rational_func::RationalFunction;
/// use primitiva_rings::rationals::Q;
/// use primitiva_poly::dense::DensePoly;
///
/// // (x + 1) / (x^2 - 1) = 1 / (x - 1)
/// let num = DensePoly::new(vec![Q::from_integer(1), Q::from_integer(1)]);
/// let den = DensePoly::new(vec![Q::from_integer(-1), Q::from_integer(0), Q::from_integer(1)]);
/// let f = RationalFunction::new(num, den);
/// assert_eq!(f.denominator().degree(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct RationalFunction<K: Field> {
    numerator: DensePoly<K>,
    denominator: DensePoly<K>,
}

impl<K: Field> RationalFunction<K> {
    /// Builds numerator/denominator and reduces it to lowest terms.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    pub fn new(numerator: DensePoly<K>, denominator: DensePoly<K>) -> Self {
        assert!(!denominator.is_zero(), "denominator cannot be zero");
        if numerator.is_zero() {
            return Self::zero();
        }

        let (_, num, den) = cofactors(&numerator, &denominator);
        // den is nonzero, so its leading coefficient is invertible
        match den.leading_coeff().inv() {
            Some(lc_inv) => Self {
                numerator: num.scale(&lc_inv),
                denominator: den.scale(&lc_inv),
            },
            None => Self {
                numerator: num,
                denominator: den,
            },
        }
    }

    /// The polynomial p, as p/1.
    pub fn from_poly(p: DensePoly<K>) -> Self {
        Self {
            numerator: p,
            denominator: DensePoly::one(),
        }
    }

    /// 0/1.
    pub fn zero() -> Self {
        Self::from_poly(DensePoly::zero())
    }

    /// 1/1.
    pub fn one() -> Self {
        Self::from_poly(DensePoly::one())
    }

    /// The numerator, coprime to the denominator.
    pub fn numerator(&self) -> &DensePoly<K> {
        &self.numerator
    }

    /// The monic denominator.
    pub fn denominator(&self) -> &DensePoly<K> {
        &self.denominator
    }

    /// True for 0/1.
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// True when the denominator is 1.
    pub fn is_polynomial(&self) -> bool {
        self.denominator.degree() == 0
    }

    /// True when deg P < deg Q, counting zero as proper.
    pub fn is_proper(&self) -> bool {
        self.is_zero() || self.numerator.degree() < self.denominator.degree()
    }

    /// f(x), or `None` at a pole.
    pub fn eval(&self, x: &K) -> Option<K> {
        let den = self.denominator.eval(x).inv()?;
        Some(self.numerator.eval(x) * den)
    }

    /// (P/Q)' = (P'Q - PQ')/Q², reduced.
    pub fn derivative(&self) -> Self {
        let (p, q) = (&self.numerator, &self.denominator);
        if self.is_polynomial() {
            return Self::from_poly(p.derivative());
        }
        Self::new(p.derivative().mul(q).sub(&p.mul(&q.derivative())), q.mul(q))
    }

    /// Splits off the polynomial part: f = poly + proper.
    ///
    /// The proper remainder keeps the denominator, since it stays coprime
    /// to it.
    pub fn decompose_proper(&self) -> (DensePoly<K>, Self) {
        if self.is_proper() {
            return (DensePoly::zero(), self.clone());
        }

        let (quotient, remainder) = poly_div_rem(&self.numerator, &self.denominator);
        let proper = if remainder.is_zero() {
            Self::zero()
        } else {
            Self {
                numerator: remainder,
                denominator: self.denominator.clone(),
            }
        };
        (quotient, proper)
    }

    /// -f.
    pub fn neg(&self) -> Self {
        Self {
            numerator: self.numerator.neg(),
            denominator: self.denominator.clone(),
        }
    }
}

impl<K: Field> PartialEq for RationalFunction<K> {
    fn eq(&self, other: &Self) -> bool {
        // Both sides are normalized
        self.numerator == other.numerator && self.denominator == other.denominator
    }
}

impl<K: Field> Eq for RationalFunction<K> {}

impl<K: Field + std::fmt::Display> std::fmt::Display for RationalFunction<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_polynomial() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "({}) / ({})", self.numerator, self.denominator)
        }
    }
}
