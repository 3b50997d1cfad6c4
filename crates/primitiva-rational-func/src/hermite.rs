//! Hermite reduction for rational function integration.
//!
//! Hermite reduction transforms ∫(f/g) into A/u + ∫(B/v) where:
//! - A/u is a rational function (the "rational part")
//! - v is squarefree, so the remaining integral is purely logarithmic
//!
//! # Algorithm (Horowitz-Ostrogradsky)
//!
//! 1. Split g = u·v with u = gcd(g, g') and v = g/u.
//! 2. Take generic polynomials A (degree < deg u) and B (degree < deg v)
//!    whose coefficients are fresh unknowns.
//! 3. Differentiating f/g = (A/u)' + B/v and clearing denominators gives
//!    f = A'v - A·(u'v/u) + B·u, where u'v/u is a polynomial.
//! 4. Comparing coefficients in x yields a linear system with a unique
//!    solution for every proper f/g.
//!
//! No factorization is needed, only one gcd and one linear solve.

use primitiva_linalg::{solve_linear_system, LinearForm, Unknown, UnknownPool};
use primitiva_poly::algorithms::gcd::{cofactors, exact_quotient};
use primitiva_poly::dense::DensePoly;
use primitiva_rings::traits::Field;
use thiserror::Error;
use tracing::debug;

use crate::RationalFunction;

/// Errors that can occur during Hermite reduction.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ReductionError {
    /// g = 0.
    #[error("denominator is the zero polynomial")]
    ZeroDenominator,

    /// deg f >= deg g.
    #[error("integrand is not proper: deg numerator {numerator} >= deg denominator {denominator}")]
    NotProper {
        /// Degree of f.
        numerator: usize,
        /// Degree of g.
        denominator: usize,
    },

    /// The linear system for A and B is inconsistent.
    #[error("Horowitz-Ostrogradsky system has no solution")]
    Unsolvable,

    /// An exact polynomial quotient left a remainder.
    #[error("inexact division while computing {0}")]
    InexactDivision(&'static str),
}

/// Result of Hermite reduction.
///
/// The derivative of `rational_part` plus `log_residual` equals the input
/// fraction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HermiteReduction<K: Field> {
    /// A/u, already integrated.
    pub rational_part: RationalFunction<K>,
    /// B/v with square-free denominator, left to the logarithmic part.
    pub log_residual: RationalFunction<K>,
}

/// A polynomial in x whose coefficients are linear forms in the unknowns.
type FormPoly<K> = Vec<LinearForm<K>>;

/// Performs Hermite reduction of a proper fraction f/g.
///
/// The unknowns for A and B are drawn from `pool`, which belongs to the
/// calling integration and is never shared between calls.
///
/// # Errors
///
/// `ZeroDenominator` or `NotProper` for invalid input. `Unsolvable` and
/// `InexactDivision` indicate a broken arithmetic invariant and cannot
/// occur for a valid field.
pub fn hermite_reduce<K: Field>(
    f: &DensePoly<K>,
    g: &DensePoly<K>,
    pool: &mut UnknownPool,
) -> Result<HermiteReduction<K>, ReductionError> {
    if g.is_zero() {
        return Err(ReductionError::ZeroDenominator);
    }
    if f.is_zero() {
        return Ok(HermiteReduction {
            rational_part: RationalFunction::zero(),
            log_residual: RationalFunction::zero(),
        });
    }
    if f.degree() >= g.degree() {
        return Err(ReductionError::NotProper {
            numerator: f.degree(),
            denominator: g.degree(),
        });
    }

    let (u, v, _) = cofactors(g, &g.derivative());
    let w = exact_quotient(&u.derivative().mul(&v), &u)
        .ok_or(ReductionError::InexactDivision("u'v/u"))?;

    let n = if u.is_constant() { 0 } else { u.degree() };
    let m = v.degree();
    debug!(deg_u = n, deg_v = m, "solving Horowitz-Ostrogradsky system");

    let a_unknowns = pool.fresh_many(n);
    let b_unknowns = pool.fresh_many(m);
    let a = generic_poly::<K>(&a_unknowns);
    let b = generic_poly::<K>(&b_unknowns);

    // H = f - A'v + A·w - B·u must vanish identically
    let f_forms: FormPoly<K> = f.coeffs().iter().cloned().map(LinearForm::constant).collect();
    let residual = form_sub(
        &form_add(&form_sub(&f_forms, &form_mul(&form_derivative(&a), &v)), &form_mul(&a, &w)),
        &form_mul(&b, &u),
    );

    let unknowns: Vec<Unknown> = a_unknowns.iter().chain(&b_unknowns).copied().collect();
    let solution = solve_linear_system(&residual, &unknowns).ok_or(ReductionError::Unsolvable)?;

    let a_poly = DensePoly::new(a_unknowns.iter().map(|&c| solution.get(c)).collect());
    let b_poly = DensePoly::new(b_unknowns.iter().map(|&c| solution.get(c)).collect());

    Ok(HermiteReduction {
        rational_part: RationalFunction::new(a_poly, u),
        log_residual: RationalFunction::new(b_poly, v),
    })
}

fn generic_poly<K: Field>(unknowns: &[Unknown]) -> FormPoly<K> {
    unknowns.iter().map(|&c| LinearForm::unknown(c)).collect()
}

fn form_derivative<K: Field>(p: &FormPoly<K>) -> FormPoly<K> {
    p.iter()
        .enumerate()
        .skip(1)
        .map(|(i, c)| c.scale(&K::from_i64(i as i64)))
        .collect()
}

fn form_mul<K: Field>(p: &FormPoly<K>, q: &DensePoly<K>) -> FormPoly<K> {
    if p.is_empty() || q.is_zero() {
        return Vec::new();
    }
    let mut out = vec![LinearForm::zero(); p.len() + q.coeffs().len() - 1];
    for (i, form) in p.iter().enumerate() {
        for (j, k) in q.coeffs().iter().enumerate() {
            if !k.is_zero() {
                out[i + j] = out[i + j].add(&form.scale(k));
            }
        }
    }
    out
}

fn form_add<K: Field>(p: &FormPoly<K>, q: &FormPoly<K>) -> FormPoly<K> {
    (0..p.len().max(q.len()))
        .map(|i| match (p.get(i), q.get(i)) {
            (Some(a), Some(b)) => a.add(b),
            (Some(a), None) | (None, Some(a)) => a.clone(),
            (None, None) => LinearForm::zero(),
        })
        .collect()
}

fn form_sub<K: Field>(p: &FormPoly<K>, q: &FormPoly<K>) -> FormPoly<K> {
    let negated: FormPoly<K> = q.iter().map(|c| c.scale(&-K::one())).collect();
    form_add(p, &negated)
}
