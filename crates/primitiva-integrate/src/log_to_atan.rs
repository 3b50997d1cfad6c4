//! Complex logarithms to real arctangents.
//!
//! For real polynomials A and B with B ≠ 0,
//!
//! d/dx [i·log((A + iB)/(A - iB))] = d/dx [2·Σₖ atan(uₖ)]
//!
//! where the uₖ are polynomials found by an extended Euclidean recursion
//! (Rioboo). Using polynomial arguments avoids the spurious jumps of
//! atan(A/B) at the real roots of B.

use primitiva_poly::algorithms::gcd::{exact_quotient, poly_div_rem, poly_extended_gcd};
use primitiva_poly::dense::DensePoly;
use primitiva_rings::traits::Field;
use tracing::trace;

/// Rewrites i·log((a + ib)/(a - ib)) as Σₖ 2·atan(uₖ), returning the uₖ.
///
/// Each step either ends with a = p·b, giving 2·atan(p), or replaces (a, b)
/// by the Bézout cofactors of b and -a, which lowers deg a + deg b. The loop
/// runs at most deg a + deg b + 1 times.
///
/// Returns `None` if `b` is zero, or if an exact division fails or the
/// step budget runs out, neither of which happens for valid input.
pub fn log_to_atan<F: Field>(a: &DensePoly<F>, b: &DensePoly<F>) -> Option<Vec<DensePoly<F>>> {
    let mut f = a.clone();
    let mut g = b.clone();
    let mut args = Vec::new();
    let budget = a.degree() + b.degree() + 1;

    for _ in 0..budget {
        if g.is_zero() {
            return None;
        }
        if f.degree() < g.degree() {
            let swapped = g.neg();
            g = f;
            f = swapped;
        }
        if g.is_zero() {
            // a = 0, so the logarithm is constant
            return Some(args);
        }

        let (p, r) = poly_div_rem(&f, &g);
        if r.is_zero() {
            args.push(p);
            return Some(args);
        }

        let (h, s, t) = poly_extended_gcd(&g, &f.neg());
        let u = exact_quotient(&f.mul(&s).add(&g.mul(&t)), &h)?;
        trace!(deg_u = u.degree(), deg_s = s.degree(), deg_t = t.degree(), "arctangent step");
        args.push(u);
        f = s;
        g = t;
    }

    None
}
