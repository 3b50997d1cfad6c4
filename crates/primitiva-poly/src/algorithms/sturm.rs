//! Sturm sequences, real-root counting and isolation.
//!
//! The count is exact and independent of any root finding, which is what lets
//! callers certify that a list of roots they found is complete. Over an
//! ordered field the same chain isolates each real root in a half-open
//! interval (lo, hi] that bisection can shrink as far as needed.

use std::cmp::Ordering;

use primitiva_integers::Rational;
use primitiva_rings::traits::{ConstantField, OrderedRing, Ring};

use crate::algorithms::gcd::poly_div_rem;
use crate::algorithms::squarefree::squarefree_part;
use crate::dense::DensePoly;

/// The Sturm sequence p₀ = p, p₁ = p', p_{k+1} = -rem(p_{k-1}, p_k).
pub fn sturm_sequence<F: ConstantField>(p: &DensePoly<F>) -> Vec<DensePoly<F>> {
    let mut seq = vec![p.clone()];
    let dp = p.derivative();
    if dp.is_zero() {
        return seq;
    }
    seq.push(dp);

    loop {
        let n = seq.len();
        let r = poly_div_rem(&seq[n - 2], &seq[n - 1]).1;
        if r.is_zero() {
            break;
        }
        seq.push(r.neg());
    }

    seq
}

/// Number of distinct real roots of `p`.
///
/// Returns `None` for the zero polynomial, or when a coefficient is not
/// real so that signs cannot be decided.
pub fn count_real_roots<F: ConstantField>(p: &DensePoly<F>) -> Option<usize> {
    if p.is_zero() || !p.coeffs().iter().all(ConstantField::is_real) {
        return None;
    }
    let seq = sturm_sequence(&squarefree_part(p));

    let mut at_neg_inf = Vec::with_capacity(seq.len());
    let mut at_pos_inf = Vec::with_capacity(seq.len());
    for s in &seq {
        let sign = s.leading_coeff().real_sign()?;
        at_pos_inf.push(sign);
        at_neg_inf.push(if s.degree() % 2 == 0 { sign } else { sign.reverse() });
    }

    Some(sign_variations(&at_neg_inf) - sign_variations(&at_pos_inf))
}

/// Bisection steps allowed while isolating the roots of one polynomial.
const MAX_BISECTIONS: usize = 10_000;

/// A half-open interval (lo, hi] containing exactly one real root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RootInterval<F> {
    /// Exclusive lower end.
    pub lo: F,
    /// Inclusive upper end.
    pub hi: F,
}

impl<F: ConstantField> RootInterval<F> {
    /// hi - lo.
    pub fn width(&self) -> F {
        self.hi.clone() - self.lo.clone()
    }
}

/// The Sturm chain of a squarefree polynomial, kept for repeated evaluation.
#[derive(Clone, Debug)]
pub struct SturmChain<F: Ring> {
    seq: Vec<DensePoly<F>>,
}

impl<F: ConstantField> SturmChain<F> {
    /// Builds the chain of the squarefree part of `p`.
    pub fn new(p: &DensePoly<F>) -> Self {
        Self { seq: sturm_sequence(&squarefree_part(p)) }
    }

    /// The squarefree polynomial the chain was built from.
    pub fn polynomial(&self) -> &DensePoly<F> {
        &self.seq[0]
    }

    /// Sign variations of the chain at `x`; `None` if a value is not real.
    pub fn variations_at(&self, x: &F) -> Option<usize> {
        let signs = self
            .seq
            .iter()
            .map(|s| s.eval(x).real_sign())
            .collect::<Option<Vec<_>>>()?;
        Some(sign_variations(&signs))
    }

    /// Number of distinct real roots in (lo, hi].
    pub fn count_between(&self, lo: &F, hi: &F) -> Option<usize> {
        Some(self.variations_at(lo)?.saturating_sub(self.variations_at(hi)?))
    }
}

impl<F: ConstantField + OrderedRing> SturmChain<F> {
    /// Isolating intervals for every real root, in ascending order.
    ///
    /// Returns `None` for the zero polynomial or when the bisection budget
    /// runs out.
    pub fn isolate(&self) -> Option<Vec<RootInterval<F>>> {
        let p = self.polynomial();
        if p.is_zero() {
            return None;
        }
        if p.is_constant() {
            return Some(Vec::new());
        }

        // Cauchy: every root satisfies |x| < 1 + max |cᵢ/cₙ|
        let lead = p.leading_coeff().abs();
        let bound = p
            .coeffs()
            .iter()
            .map(|c| c.abs().field_div(&lead))
            .max()?
            + F::one();

        let mut pending = vec![(-bound.clone(), bound)];
        let mut found = Vec::new();
        let mut steps = 0;
        while let Some((lo, hi)) = pending.pop() {
            match self.count_between(&lo, &hi)? {
                0 => {}
                1 => found.push(RootInterval { lo, hi }),
                _ => {
                    steps += 1;
                    if steps > MAX_BISECTIONS {
                        return None;
                    }
                    let mid = midpoint(&lo, &hi);
                    pending.push((mid.clone(), hi));
                    pending.push((lo, mid));
                }
            }
        }

        found.sort_by(|a, b| a.lo.cmp(&b.lo));
        Some(found)
    }

    /// Halves an isolating interval, keeping the half that holds the root.
    pub fn refine(&self, interval: &RootInterval<F>) -> Option<RootInterval<F>> {
        let mid = midpoint(&interval.lo, &interval.hi);
        if self.count_between(&interval.lo, &mid)? == 1 {
            Some(RootInterval { lo: interval.lo.clone(), hi: mid })
        } else {
            Some(RootInterval { lo: mid, hi: interval.hi.clone() })
        }
    }
}

fn midpoint<F: ConstantField>(lo: &F, hi: &F) -> F {
    (lo.clone() + hi.clone()) * F::from_rational(Rational::from_i64(1, 2))
}

fn sign_variations(signs: &[Ordering]) -> usize {
    let nonzero: Vec<Ordering> = signs.iter().copied().filter(|s| *s != Ordering::Equal).collect();
    nonzero.windows(2).filter(|w| w[0] != w[1]).count()
}
