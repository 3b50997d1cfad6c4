//! Exact roots lying in the coefficient field.
//!
//! Only roots that are elements of the field itself are produced; a root such
//! as √2 of x² - 2 over Q is simply not found. Comparing the result with
//! [`count_real_roots`](crate::algorithms::sturm::count_real_roots) tells a
//! caller whether every real root was found. Over [`RealQuadratic`] the same
//! polynomial does have both roots.

use num_traits::{One, Zero};
use primitiva_integers::{Integer, Rational};
use primitiva_rings::traits::{ConstantField, Ring};
use primitiva_rings::{GaussianRational, RealQuadratic, Q};

use crate::algorithms::quadratic_roots::real_quadratic_roots;
use crate::algorithms::squarefree::squarefree_part;
use crate::dense::DensePoly;

/// Trial divisions allowed per coefficient in the rational-root search.
const DIVISOR_TRIALS: u64 = 100_000;

/// Candidate numerator/denominator pairs tested before giving up.
const MAX_CANDIDATES: usize = 50_000;

/// Fields in which real roots of a polynomial can be located exactly.
pub trait FieldRoots: ConstantField {
    /// Distinct real roots of `p` that are elements of this field.
    ///
    /// The result is in ascending order. It may be incomplete (when a search
    /// is abandoned, or when a real root lies outside the field) but never
    /// contains a non-root.
    fn real_roots(p: &DensePoly<Self>) -> Vec<Self>;

    /// A square root lying in this field, if there is one.
    fn sqrt(&self) -> Option<Self>;

    /// True if `self` and `other` lie in one common field, so that they can
    /// be combined.
    fn same_field(&self, _other: &Self) -> bool {
        true
    }
}

/// The real roots of `p` in its coefficient field, in ascending order.
pub fn real_roots_in_field<F: FieldRoots>(p: &DensePoly<F>) -> Vec<F> {
    F::real_roots(p)
}

impl FieldRoots for Q {
    fn real_roots(p: &DensePoly<Q>) -> Vec<Q> {
        if p.is_constant() {
            return Vec::new();
        }

        let sf = squarefree_part(p);
        let ints = integer_coefficients(&sf);

        let low = ints.iter().take_while(|c| c.is_zero()).count();
        let mut roots = Vec::new();
        if low > 0 {
            roots.push(Q(Rational::zero()));
        }

        let ints = &ints[low..];
        match ints.len() {
            0 | 1 => {}
            2 => roots.push(Q(Rational::new(-ints[0].clone(), ints[1].clone()))),
            _ => {
                let (Some(nums), Some(dens)) = (
                    ints[0].divisors(DIVISOR_TRIALS),
                    ints[ints.len() - 1].divisors(DIVISOR_TRIALS),
                ) else {
                    return roots;
                };
                if nums.len().saturating_mul(dens.len()) > MAX_CANDIDATES {
                    return roots;
                }

                for n in &nums {
                    for d in dens.iter().filter(|d| n.gcd(d) == Integer::new(1)) {
                        for candidate in [Rational::new(n.clone(), d.clone()), Rational::new(-n, d.clone())] {
                            let candidate = Q(candidate);
                            if sf.eval(&candidate).0.is_zero() {
                                roots.push(candidate);
                            }
                        }
                    }
                }
            }
        }

        roots.sort();
        roots
    }

    fn sqrt(&self) -> Option<Self> {
        if self.0.is_negative() {
            return None;
        }
        let n = self.numerator().isqrt()?;
        let d = self.denominator().isqrt()?;
        (&n * &n == self.numerator() && &d * &d == self.denominator())
            .then(|| Q(Rational::new(n, d)))
    }
}

impl FieldRoots for GaussianRational {
    /// Real roots of a polynomial with real coefficients; polynomials with a
    /// genuinely complex coefficient are not searched.
    fn real_roots(p: &DensePoly<GaussianRational>) -> Vec<GaussianRational> {
        if !p.coeffs().iter().all(|c| c.im.is_zero()) {
            return Vec::new();
        }
        let real = p.map_coeffs(|c| Q(c.re.clone()));
        Q::real_roots(&real)
            .into_iter()
            .map(|r| GaussianRational::real(r.0))
            .collect()
    }

    /// √(a + bi) = x + yi with x² = (a + |z|)/2 and y = b/(2x), when those
    /// are rational.
    fn sqrt(&self) -> Option<Self> {
        let modulus = Q(self.norm()).sqrt()?;
        let two = Rational::from(2);
        let x = Q((&self.re + &modulus.0) / &two).sqrt()?;
        if x.0.is_zero() {
            // a = -|z|, so b = 0 and the root is purely imaginary
            let y = Q(-&self.re).sqrt()?;
            return Some(GaussianRational::new(Rational::zero(), y.0));
        }
        let y = &self.im / &(&two * &x.0);
        Some(GaussianRational::new(x.0, y))
    }
}

impl FieldRoots for RealQuadratic {
    /// Roots in the quadratic field of the coefficients. A polynomial with
    /// rational coefficients gets every real root of degree at most two,
    /// across all radicands.
    fn real_roots(p: &DensePoly<RealQuadratic>) -> Vec<RealQuadratic> {
        if p.is_constant() {
            return Vec::new();
        }

        let mut radicand: Option<&Integer> = None;
        for c in p.coeffs() {
            match (radicand, c.radicand()) {
                (None, Some(d)) => radicand = Some(d),
                (Some(d), Some(e)) if d != e => return Vec::new(),
                _ => {}
            }
        }

        let Some(d) = radicand else {
            let rational = p.map_coeffs(|c| Q(c.rational_part().clone()));
            return real_quadratic_roots(&rational);
        };

        // every root of p is a root of the rational norm p·p̄
        let conj = p.map_coeffs(RealQuadratic::conj);
        let Some(norm) = p
            .mul(&conj)
            .coeffs()
            .iter()
            .map(|c| c.to_rational().map(Q))
            .collect::<Option<Vec<_>>>()
        else {
            return Vec::new();
        };
        let mut roots: Vec<RealQuadratic> = real_quadratic_roots(&DensePoly::new(norm))
            .into_iter()
            .filter(|r| r.radicand().map_or(true, |e| e == d))
            .filter(|r| p.eval(r).is_zero())
            .collect();
        roots.sort();
        roots
    }

    fn sqrt(&self) -> Option<Self> {
        RealQuadratic::sqrt(self)
    }

    fn same_field(&self, other: &Self) -> bool {
        match (self.radicand(), other.radicand()) {
            (Some(d), Some(e)) => d == e,
            _ => true,
        }
    }
}

/// Scales a rational polynomial to a primitive integer one with the same roots.
pub(crate) fn integer_coefficients(p: &DensePoly<Q>) -> Vec<Integer> {
    let lcm = p
        .coeffs()
        .iter()
        .fold(Integer::new(1), |acc, c| acc.lcm(&c.denominator()));
    let ints: Vec<Integer> = p
        .coeffs()
        .iter()
        .map(|c| c.numerator() * (&lcm / &c.denominator()))
        .collect();
    let Some(content) = ints
        .iter()
        .filter(|c| !c.is_zero())
        .cloned()
        .reduce(|acc, c| acc.gcd(&c))
    else {
        return ints;
    };
    if content.is_one() {
        return ints;
    }
    ints.into_iter().map(|c| c / &content).collect()
}
