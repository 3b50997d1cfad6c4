//! Division, gcd and related operations over a field.

use primitiva_rings::traits::Field;

use crate::dense::DensePoly;

/// Divides polynomial a by b, returning (quotient, remainder).
///
/// # Panics
///
/// Panics if `b` is the zero polynomial.
pub fn poly_div_rem<F: Field>(a: &DensePoly<F>, b: &DensePoly<F>) -> (DensePoly<F>, DensePoly<F>) {
    let Some(b_lead_inv) = b.leading_coeff().inv() else {
        panic!("division by zero polynomial");
    };

    if a.is_zero() || a.degree() < b.degree() {
        return (DensePoly::zero(), a.clone());
    }

    let db = b.degree();
    let mut quotient = vec![F::zero(); a.degree() - db + 1];
    let mut remainder = a.coeffs().to_vec();

    for k in (db..remainder.len()).rev() {
        let c = remainder[k].clone() * b_lead_inv.clone();
        if c.is_zero() {
            continue;
        }
        let shift = k - db;
        for (i, bc) in b.coeffs().iter().enumerate() {
            remainder[shift + i] = remainder[shift + i].clone() - c.clone() * bc.clone();
        }
        quotient[shift] = c;
    }

    remainder.truncate(db.max(1));
    (DensePoly::new(quotient), DensePoly::new(remainder))
}

/// Makes a polynomial monic; the zero polynomial is returned unchanged.
pub fn make_monic<F: Field>(p: &DensePoly<F>) -> DensePoly<F> {
    match p.leading_coeff().inv() {
        Some(inv) if !inv.is_one() => p.scale(&inv),
        _ => p.clone(),
    }
}

/// Computes the monic GCD of two polynomials with the Euclidean algorithm.
pub fn poly_gcd<F: Field>(a: &DensePoly<F>, b: &DensePoly<F>) -> DensePoly<F> {
    let mut p = a.clone();
    let mut q = b.clone();

    while !q.is_zero() {
        let (_, r) = poly_div_rem(&p, &q);
        p = q;
        q = r;
    }

    make_monic(&p)
}

/// Extended polynomial GCD.
///
/// Computes (gcd, s, t) such that gcd = s*a + t*b with gcd monic. If both
/// inputs are zero the result is (0, 1, 0).
pub fn poly_extended_gcd<F: Field>(
    a: &DensePoly<F>,
    b: &DensePoly<F>,
) -> (DensePoly<F>, DensePoly<F>, DensePoly<F>) {
    let mut old_r = a.clone();
    let mut r = b.clone();
    let mut old_s = DensePoly::one();
    let mut s = DensePoly::zero();
    let mut old_t = DensePoly::zero();
    let mut t = DensePoly::one();

    while !r.is_zero() {
        let (q, rem) = poly_div_rem(&old_r, &r);

        let new_s = old_s.sub(&q.mul(&s));
        let new_t = old_t.sub(&q.mul(&t));

        old_r = std::mem::replace(&mut r, rem);
        old_s = std::mem::replace(&mut s, new_s);
        old_t = std::mem::replace(&mut t, new_t);
    }

    match old_r.leading_coeff().inv() {
        Some(inv) => (old_r.scale(&inv), old_s.scale(&inv), old_t.scale(&inv)),
        None => (DensePoly::zero(), DensePoly::one(), DensePoly::zero()),
    }
}

/// Returns `a / b` if `b` divides `a` exactly, `None` otherwise.
///
/// Division by the zero polynomial is never exact.
pub fn exact_quotient<F: Field>(a: &DensePoly<F>, b: &DensePoly<F>) -> Option<DensePoly<F>> {
    if b.is_zero() {
        return None;
    }
    let (q, r) = poly_div_rem(a, b);
    r.is_zero().then_some(q)
}

/// Cofactor split: returns (g, a/g, b/g) with g = gcd(a, b) monic.
///
/// When both inputs are zero, g is zero and the cofactors are zero too.
pub fn cofactors<F: Field>(
    a: &DensePoly<F>,
    b: &DensePoly<F>,
) -> (DensePoly<F>, DensePoly<F>, DensePoly<F>) {
    let g = poly_gcd(a, b);
    if g.is_zero() {
        return (g, DensePoly::zero(), DensePoly::zero());
    }
    let (ca, _) = poly_div_rem(a, &g);
    let (cb, _) = poly_div_rem(b, &g);
    (g, ca, cb)
}

/// Inverse of `a` modulo `m`, reduced below deg m.
///
/// Returns `None` when gcd(a, m) is not constant, or when `m` is constant.
pub fn invert_mod<F: Field>(a: &DensePoly<F>, m: &DensePoly<F>) -> Option<DensePoly<F>> {
    if m.is_constant() {
        return None;
    }
    let (g, s, _) = poly_extended_gcd(a, m);
    if g.is_zero() || !g.is_constant() {
        return None;
    }
    Some(poly_div_rem(&s, m).1)
}
