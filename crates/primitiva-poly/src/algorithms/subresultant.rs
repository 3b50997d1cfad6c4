//! Subresultant polynomial remainder sequences.
//!
//! Over a coefficient ring D with exact division (typically D = F[t]) the
//! subresultant PRS of A and B keeps coefficients in D while controlling
//! their growth. Its members are, up to units of D, the subresultants of A
//! and B, which is what the Lazard-Rioboo-Trager algorithm needs.

use primitiva_rings::traits::{EuclideanDomain, IntegralDomain, Ring};

use crate::dense::DensePoly;

/// Pseudo-remainder lc(b)^(deg a - deg b + 1) · a mod b, computed without
/// division in the coefficient ring.
///
/// If deg a < deg b, `a` is returned unchanged.
///
/// # Panics
///
/// Panics if `b` is the zero polynomial.
pub fn pseudo_remainder<R: IntegralDomain>(a: &DensePoly<R>, b: &DensePoly<R>) -> DensePoly<R> {
    assert!(!b.is_zero(), "pseudo-division by zero polynomial");
    if a.is_zero() || a.degree() < b.degree() {
        return a.clone();
    }

    let lb = b.leading_coeff().clone();
    let mut exponent = a.degree() - b.degree() + 1;
    let mut r = a.clone();

    while !r.is_zero() && r.degree() >= b.degree() {
        let shift = r.degree() - b.degree();
        let cancel = b.scale(r.leading_coeff()).shift(shift);
        r = r.scale(&lb).sub(&cancel);
        exponent -= 1;
    }

    r.scale(&Ring::pow(&lb, exponent as u32))
}

/// The subresultant PRS of `a` and `b`: `[a, b, R₂, …, R_k]`, stopping at the
/// last nonzero member. A zero `b` gives `[a]`.
///
/// Follows Bronstein's SubResultant: R_{i+1} = prem(R_{i-1}, R_i) / βᵢ with
/// γ₁ = -1, δ₁ = deg a - deg b, β₁ = (-1)^(δ₁+1) and
/// γᵢ = (-r_{i-1})^δ_{i-1} · γ_{i-1}^(1-δ_{i-1}), βᵢ = -r_{i-1} · γᵢ^δᵢ.
///
/// # Panics
///
/// Panics if deg a < deg b, or if `a` is zero while `b` is not.
pub fn subresultant_prs<R: EuclideanDomain>(a: &DensePoly<R>, b: &DensePoly<R>) -> Vec<DensePoly<R>> {
    if b.is_zero() {
        return vec![a.clone()];
    }
    assert!(
        !a.is_zero() && a.degree() >= b.degree(),
        "subresultant PRS needs deg a >= deg b"
    );

    let mut prs = vec![a.clone(), b.clone()];
    let mut gamma = -R::one();
    let mut delta = a.degree() - b.degree();
    let mut beta = if delta % 2 == 0 { -R::one() } else { R::one() };

    loop {
        let prev = &prs[prs.len() - 2];
        let cur = &prs[prs.len() - 1];
        let r = cur.leading_coeff().clone();

        let next = divide_coeffs(&pseudo_remainder(prev, cur), &beta);
        if next.is_zero() {
            break;
        }

        if delta > 0 {
            let num = Ring::pow(&-r.clone(), delta as u32);
            let den = Ring::pow(&gamma, (delta - 1) as u32);
            gamma = exact_div(&num, &den);
        }
        delta = cur.degree() - next.degree();
        beta = -r * Ring::pow(&gamma, delta as u32);

        prs.push(next);
    }

    prs
}

fn divide_coeffs<R: EuclideanDomain>(p: &DensePoly<R>, d: &R) -> DensePoly<R> {
    if d.is_one() {
        return p.clone();
    }
    p.map_coeffs(|c| exact_div(c, d))
}

fn exact_div<R: EuclideanDomain>(dividend: &R, divisor: &R) -> R {
    let (quotient, remainder) = dividend.div_rem(divisor);
    debug_assert!(remainder.is_zero(), "subresultant division must be exact");
    quotient
}
