//! Square-free decomposition of polynomials.
//!
//! Writes f = c · f₁ · f₂² · f₃³ · … with every fᵢ square-free, monic and
//! pairwise coprime, using Yun's algorithm (characteristic 0).

use primitiva_rings::traits::Field;

use crate::algorithms::gcd::{make_monic, poly_div_rem, poly_gcd};
use crate::dense::DensePoly;

/// A factor with its multiplicity in the square-free decomposition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SquarefreeFactor<F: Field> {
    /// The monic square-free factor.
    pub factor: DensePoly<F>,
    /// The power it appears with.
    pub multiplicity: u32,
}

/// Result of square-free decomposition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SquarefreeDecomposition<F: Field> {
    /// The leading coefficient of the input.
    pub unit: F,
    /// Non-constant factors in increasing multiplicity.
    pub factors: Vec<SquarefreeFactor<F>>,
}

impl<F: Field> SquarefreeDecomposition<F> {
    /// Multiplies the decomposition back out.
    #[must_use]
    pub fn to_polynomial(&self) -> DensePoly<F> {
        self.factors
            .iter()
            .fold(DensePoly::constant(self.unit.clone()), |acc, sf| {
                acc.mul(&sf.factor.pow(sf.multiplicity))
            })
    }

    /// Returns true if every multiplicity is 1.
    #[must_use]
    pub fn is_squarefree(&self) -> bool {
        self.factors.iter().all(|f| f.multiplicity == 1)
    }
}

/// Yun's algorithm.
///
/// With g = gcd(f, f'), a₀ = f/g, b₀ = f'/g, repeat: c = b - a', d = gcd(a, c),
/// emit d, a ← a/d, b ← c/d, until a is constant.
pub fn squarefree_decomposition<F: Field>(f: &DensePoly<F>) -> SquarefreeDecomposition<F> {
    let unit = f.leading_coeff().clone();
    let mut factors = Vec::new();
    if f.is_constant() {
        return SquarefreeDecomposition { unit, factors };
    }

    let f = make_monic(f);
    let df = f.derivative();
    let g = poly_gcd(&f, &df);
    let mut a = poly_div_rem(&f, &g).0;
    let mut b = poly_div_rem(&df, &g).0;
    let mut multiplicity = 1u32;

    while !a.is_constant() {
        let c = b.sub(&a.derivative());
        let d = poly_gcd(&a, &c);
        if !d.is_constant() {
            factors.push(SquarefreeFactor {
                factor: d.clone(),
                multiplicity,
            });
        }
        a = poly_div_rem(&a, &d).0;
        b = poly_div_rem(&c, &d).0;
        multiplicity += 1;
    }

    SquarefreeDecomposition { unit, factors }
}

/// Returns true if gcd(f, f') is constant.
pub fn is_squarefree<F: Field>(f: &DensePoly<F>) -> bool {
    f.is_constant() || poly_gcd(f, &f.derivative()).is_constant()
}

/// The square-free part f / gcd(f, f').
pub fn squarefree_part<F: Field>(f: &DensePoly<F>) -> DensePoly<F> {
    if f.is_constant() {
        return f.clone();
    }
    poly_div_rem(f, &poly_gcd(f, &f.derivative())).0
}
