//! Resultants via the Sylvester matrix.
//!
//! The resultant of f and g vanishes iff they share a root. It is computed as
//! the determinant of the Sylvester matrix by fraction-free (Bareiss)
//! elimination, so it works over any coefficient ring with exact division,
//! in particular over F[t] when eliminating x from two elements of F[t][x].

use primitiva_rings::traits::{EuclideanDomain, Ring};

use crate::dense::DensePoly;

/// Computes res(f, g) with the standard sign convention.
///
/// For f = a·∏(x - αᵢ) of degree m and g of degree n this is
/// a^n · ∏ g(αᵢ). A zero operand gives zero; a constant c against a
/// polynomial of degree n gives c^n.
pub fn resultant<R: EuclideanDomain>(f: &DensePoly<R>, g: &DensePoly<R>) -> R {
    if f.is_zero() || g.is_zero() {
        return R::zero();
    }

    let (m, n) = (f.degree(), g.degree());
    if m == 0 {
        return Ring::pow(f.leading_coeff(), n as u32);
    }
    if n == 0 {
        return Ring::pow(g.leading_coeff(), m as u32);
    }

    determinant(sylvester_matrix(f, g))
}

/// Builds the (m+n)×(m+n) Sylvester matrix with coefficients in descending
/// order: n shifted rows of f followed by m shifted rows of g.
fn sylvester_matrix<R: Ring>(f: &DensePoly<R>, g: &DensePoly<R>) -> Vec<Vec<R>> {
    let (m, n) = (f.degree(), g.degree());
    let size = m + n;
    let mut matrix = vec![vec![R::zero(); size]; size];

    for row in 0..n {
        for (j, c) in f.coeffs().iter().rev().enumerate() {
            matrix[row][row + j] = c.clone();
        }
    }
    for row in 0..m {
        for (j, c) in g.coeffs().iter().rev().enumerate() {
            matrix[n + row][row + j] = c.clone();
        }
    }

    matrix
}

/// Determinant by Bareiss elimination with row pivoting.
///
/// Every intermediate division is exact in an integral domain.
fn determinant<R: EuclideanDomain>(mut m: Vec<Vec<R>>) -> R {
    let n = m.len();
    if n == 0 {
        return R::one();
    }

    let mut negate = false;
    let mut prev_pivot = R::one();

    for k in 0..n - 1 {
        let Some(pivot_row) = (k..n).find(|&i| !m[i][k].is_zero()) else {
            return R::zero();
        };
        if pivot_row != k {
            m.swap(k, pivot_row);
            negate = !negate;
        }

        let pivot = m[k][k].clone();
        for i in k + 1..n {
            for j in k + 1..n {
                let numerator = m[i][j].clone() * pivot.clone() - m[i][k].clone() * m[k][j].clone();
                m[i][j] = exact_div(&numerator, &prev_pivot);
            }
            m[i][k] = R::zero();
        }
        prev_pivot = pivot;
    }

    let det = m[n - 1][n - 1].clone();
    if negate {
        -det
    } else {
        det
    }
}

fn exact_div<R: EuclideanDomain>(dividend: &R, divisor: &R) -> R {
    if divisor.is_one() {
        return dividend.clone();
    }
    let (quotient, remainder) = dividend.div_rem(divisor);
    debug_assert!(remainder.is_zero(), "Bareiss division must be exact");
    quotient
}
