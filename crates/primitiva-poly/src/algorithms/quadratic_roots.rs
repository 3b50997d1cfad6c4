//! Real roots of degree at most two over Q.
//!
//! Rational roots come from the rational-root search. The remaining real
//! roots are isolated with a Sturm chain; two of them are conjugate quadratic
//! irrationals exactly when u² - (r₁ + r₂)u + r₁r₂ divides the polynomial
//! over Q. For a primitive integer polynomial with leading coefficient L the
//! numbers L(r₁ + r₂) and L·r₁r₂ are integers, so once both isolating
//! intervals are narrow enough there is at most one candidate factor per
//! pair, and an exact division decides it.

use primitiva_integers::{Integer, Rational};
use primitiva_rings::traits::Ring;
use primitiva_rings::{RealQuadratic, Q};
use tracing::trace;

use crate::algorithms::gcd::{exact_quotient, poly_div_rem};
use crate::algorithms::roots::{integer_coefficients, FieldRoots};
use crate::algorithms::squarefree::squarefree_part;
use crate::algorithms::sturm::{RootInterval, SturmChain};
use crate::dense::DensePoly;

/// Bisections spent narrowing one pair of isolating intervals.
const MAX_REFINEMENTS: usize = 256;

/// Every real root of `p` that is rational or a real quadratic irrational,
/// in ascending order.
pub fn real_quadratic_roots(p: &DensePoly<Q>) -> Vec<RealQuadratic> {
    if p.is_constant() {
        return Vec::new();
    }

    let sf = squarefree_part(p);
    let rational = Q::real_roots(&sf);
    let mut rest = sf;
    for r in &rational {
        let linear = DensePoly::new(vec![-r.clone(), Q::one()]);
        if let Some(quotient) = exact_quotient(&rest, &linear) {
            rest = quotient;
        }
    }

    let mut roots: Vec<RealQuadratic> = rational.into_iter().map(|r| RealQuadratic::rational(r.0)).collect();
    if rest.degree() >= 2 {
        roots.extend(conjugate_pairs(&rest));
    }
    roots.sort();
    roots.dedup();
    roots
}

/// Quadratic irrational roots of a squarefree polynomial without rational
/// roots.
fn conjugate_pairs(p: &DensePoly<Q>) -> Vec<RealQuadratic> {
    let chain = SturmChain::new(p);
    let Some(mut intervals) = chain.isolate() else {
        return Vec::new();
    };
    let ints = integer_coefficients(p);
    let lead = Rational::from(ints[ints.len() - 1].abs());

    let mut found = Vec::new();
    let mut used = vec![false; intervals.len()];
    for i in 0..intervals.len() {
        for j in (i + 1)..intervals.len() {
            if used[i] || used[j] {
                continue;
            }
            let Some((sum, product)) = narrow_pair(&chain, &mut intervals, i, j, &lead) else {
                continue;
            };
            'search: for k in integers_in(&sum.0, &sum.1) {
                for m in integers_in(&product.0, &product.1) {
                    // u² - (r₁ + r₂)u + r₁r₂
                    let b = -(Rational::from(k.clone()) / &lead);
                    let c = Rational::from(m) / &lead;
                    if let Some(pair) = quadratic_factor_roots(p, &b, &c) {
                        trace!(linear = %b, constant = %c, "quadratic factor");
                        used[i] = true;
                        used[j] = true;
                        found.extend(pair);
                        break 'search;
                    }
                }
            }
        }
    }
    found
}

/// Refines intervals i and j until L·(r₁ + r₂) and L·r₁r₂ each lie in an
/// interval shorter than one, returning those two scaled intervals.
fn narrow_pair(
    chain: &SturmChain<Q>,
    intervals: &mut [RootInterval<Q>],
    i: usize,
    j: usize,
    lead: &Rational,
) -> Option<((Rational, Rational), (Rational, Rational))> {
    let one = Rational::from(1);
    for _ in 0..MAX_REFINEMENTS {
        let (a, b) = (&intervals[i], &intervals[j]);
        let sum = (lead * &(&a.lo.0 + &b.lo.0), lead * &(&a.hi.0 + &b.hi.0));
        let corners = [&a.lo.0 * &b.lo.0, &a.lo.0 * &b.hi.0, &a.hi.0 * &b.lo.0, &a.hi.0 * &b.hi.0];
        let low = corners.iter().min()?.clone();
        let high = corners.iter().max()?.clone();
        let product = (lead * &low, lead * &high);

        if &sum.1 - &sum.0 < one && &product.1 - &product.0 < one {
            return Some((sum, product));
        }
        intervals[i] = chain.refine(&intervals[i])?;
        intervals[j] = chain.refine(&intervals[j])?;
    }
    None
}

/// Roots of u² + bu + c when it divides `p` and has a positive discriminant.
fn quadratic_factor_roots(p: &DensePoly<Q>, b: &Rational, c: &Rational) -> Option<[RealQuadratic; 2]> {
    let factor = DensePoly::new(vec![Q(c.clone()), Q(b.clone()), Q::one()]);
    if !poly_div_rem(p, &factor).1.is_zero() {
        return None;
    }
    let disc = b * b - Rational::from(4) * c;
    if disc.signum() <= 0 {
        return None;
    }
    let root = RealQuadratic::sqrt_rational(&disc)?;
    root.radicand()?;
    let half = RealQuadratic::rational(Rational::from_i64(1, 2));
    let minus_b = RealQuadratic::rational(-b);
    Some([
        (minus_b.clone() - root.clone()) * half.clone(),
        (minus_b + root) * half,
    ])
}

/// The integers k with lo ≤ k ≤ hi.
fn integers_in(lo: &Rational, hi: &Rational) -> Vec<Integer> {
    let mut k = -floor(&-lo);
    let top = floor(hi);
    let mut out = Vec::new();
    while k <= top {
        out.push(k.clone());
        k = k + Integer::new(1);
    }
    out
}

fn floor(r: &Rational) -> Integer {
    let n = r.numerator();
    let d = r.denominator();
    let q = &n / &d;
    if n.is_negative() && &q * &d != n {
        q - Integer::new(1)
    } else {
        q
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(coeffs: &[i64]) -> DensePoly<Q> {
        DensePoly::new(coeffs.iter().map(|&n| Q::from_integer(n)).collect())
    }

    fn rq(a: (i64, i64), b: (i64, i64), d: i64) -> RealQuadratic {
        RealQuadratic::new(Rational::from_i64(a.0, a.1), Rational::from_i64(b.0, b.1), Integer::new(d))
    }

    #[test]
    fn test_sqrt_two() {
        assert_eq!(
            real_quadratic_roots(&poly(&[-2, 0, 1])),
            vec![rq((0, 1), (-1, 1), 2), rq((0, 1), (1, 1), 2)]
        );
    }

    #[test]
    fn test_non_monic_shifted() {
        // 2x^2 + 2x - 1 has roots (-1 ± √3)/2
        assert_eq!(
            real_quadratic_roots(&poly(&[-1, 2, 2])),
            vec![rq((-1, 2), (-1, 2), 3), rq((-1, 2), (1, 2), 3)]
        );
    }

    #[test]
    fn test_mixed_factors() {
        // (x^2 - 2)(x^2 - 3)(3x - 1)(x^2 + 1)
        let p = poly(&[-2, 0, 1])
            .mul(&poly(&[-3, 0, 1]))
            .mul(&poly(&[-1, 3]))
            .mul(&poly(&[1, 0, 1]));
        let roots = real_quadratic_roots(&p);
        assert_eq!(roots.len(), 5);
        assert_eq!(roots[2], RealQuadratic::rational(Rational::from_i64(1, 3)));
        for r in &roots {
            let value = p.map_coeffs(|c| RealQuadratic::rational(c.0.clone())).eval(r);
            assert!(value.is_zero());
        }
    }

    #[test]
    fn test_cubic_irrationals_not_found() {
        // x^3 - 2 has one real root of degree three
        assert!(real_quadratic_roots(&poly(&[-2, 0, 0, 1])).is_empty());
        // x^4 - 10x^2 + 1 has roots ±√2 ± √3, of degree four
        assert!(real_quadratic_roots(&poly(&[1, 0, -10, 0, 1])).is_empty());
    }

    #[test]
    fn test_rational_input_only() {
        let roots = real_quadratic_roots(&poly(&[-1, 0, 1]).pow(2));
        assert_eq!(roots, vec![RealQuadratic::rational((-1).into()), RealQuadratic::one()]);
        assert!(real_quadratic_roots(&poly(&[4])).is_empty());
    }

    #[test]
    fn test_integers_in() {
        let r = Rational::from_i64;
        assert_eq!(integers_in(&r(-3, 2), &r(1, 2)), vec![Integer::new(-1), Integer::new(0)]);
        assert_eq!(integers_in(&r(1, 3), &r(2, 3)), Vec::<Integer>::new());
        assert_eq!(floor(&r(-7, 2)), Integer::new(-4));
        assert_eq!(floor(&r(7, 2)), Integer::new(3));
    }
}
