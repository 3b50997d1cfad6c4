//! The power rule.
//!
//! ∫ Σ aₖxᵏ dx = Σ aₖ/(k+1)·xᵏ⁺¹, with integration constant zero.

use primitiva_poly::dense::DensePoly;
use primitiva_rings::traits::Field;

/// Integrates a polynomial term by term.
pub fn integrate_polynomial<F: Field>(p: &DensePoly<F>) -> DensePoly<F> {
    if p.is_zero() {
        return DensePoly::zero();
    }

    let shifted = p
        .coeffs()
        .iter()
        .zip(1i64..)
        .map(|(c, k)| c.field_div(&F::from_i64(k)));
    DensePoly::new(std::iter::once(F::zero()).chain(shifted).collect())
}
