//! Lazard-Rioboo-Trager algorithm for the logarithmic part.
//!
//! Given a proper A/D with D squarefree, the logarithmic part is
//!
//! ∫ A/D dx = Σᵢ Σ_{a: Qᵢ(a)=0} a·log(Sᵢ(a, x))
//!
//! # Algorithm
//!
//! 1. Form B = A - t·D' in F[t][x] and R(t) = Res_x(D, B)
//! 2. Squarefree-factor R = ∏ Qᵢ^i
//! 3. For each nontrivial Qᵢ take the subresultant Sᵢ of D and B of
//!    degree i in x (Sᵢ = D when i = deg D)
//! 4. Remove the content of lc_x(Sᵢ) shared with Qᵢ and make Sᵢ monic
//!    modulo Qᵢ
//!
//! Unlike Rothstein-Trager no gcd over an algebraic extension is needed,
//! and no polynomial in t is ever factored beyond its squarefree
//! decomposition.

use primitiva_poly::algorithms::gcd::{exact_quotient, invert_mod, poly_div_rem, poly_gcd};
use primitiva_poly::algorithms::resultant::resultant;
use primitiva_poly::algorithms::squarefree::{squarefree_decomposition, SquarefreeFactor};
use primitiva_poly::algorithms::subresultant::subresultant_prs;
use primitiva_poly::dense::DensePoly;
use primitiva_rings::traits::Field;
use tracing::{debug, trace};

use crate::error::IntegrationError;

/// A polynomial in x whose coefficients are polynomials in t.
pub type Bivariate<F> = DensePoly<DensePoly<F>>;

/// One logarithmic term: Σ_{a: annihilator(a)=0} a·log(argument(a, x)).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogPartTerm<F: Field> {
    /// Polynomial in x with coefficients in F[t], monic in x.
    pub argument: Bivariate<F>,
    /// Monic squarefree polynomial in t.
    pub annihilator: DensePoly<F>,
}

impl<F: Field> LogPartTerm<F> {
    /// The argument at a particular root t = a.
    #[must_use]
    pub fn argument_at(&self, a: &F) -> DensePoly<F> {
        self.argument.map_coeffs(|c| c.eval(a))
    }
}

/// The logarithmic part, in the order the factors of R(t) were found.
pub type LogPart<F> = Vec<LogPartTerm<F>>;

/// Embeds a polynomial in x as an element of F[t][x].
pub(crate) fn lift<F: Field>(p: &DensePoly<F>) -> Bivariate<F> {
    p.map_coeffs(|c| DensePoly::constant(c.clone()))
}

/// Computes the logarithmic part of ∫ a/d.
///
/// Requires deg a < deg d, gcd(a, d) = 1 and d squarefree.
///
/// # Errors
///
/// `InvariantViolation` if a subresultant of the required degree is missing
/// or an exact division leaves a remainder; both indicate the preconditions
/// were not met.
pub fn logarithmic_part<F: Field>(
    a: &DensePoly<F>,
    d: &DensePoly<F>,
) -> Result<LogPart<F>, IntegrationError> {
    if a.is_zero() {
        return Ok(Vec::new());
    }

    let d_x = lift(d);
    let t = DensePoly::<F>::x();
    let b = lift(a).sub(&lift(&d.derivative()).scale(&t));

    let r = resultant(&d_x, &b);
    if r.is_zero() {
        return Err(IntegrationError::InvariantViolation(
            "resultant vanishes identically; numerator and denominator share a factor".into(),
        ));
    }
    let prs = subresultant_prs(&d_x, &b);
    let decomposition = squarefree_decomposition(&r);
    debug!(
        deg_d = d.degree(),
        deg_resultant = r.degree(),
        prs_len = prs.len(),
        factors = decomposition.factors.len(),
        "lazard-rioboo-trager resultant"
    );

    let mut terms = Vec::with_capacity(decomposition.factors.len());
    for SquarefreeFactor {
        factor: q,
        multiplicity,
    } in decomposition.factors
    {
        if q.is_constant() {
            continue;
        }
        let i = multiplicity as usize;
        let s = if i == d.degree() {
            d_x.clone()
        } else {
            prs.iter()
                .skip(1)
                .find(|s| s.degree() == i)
                .cloned()
                .ok_or_else(|| {
                    IntegrationError::InvariantViolation(format!("no subresultant of degree {i}"))
                })?
        };
        trace!(multiplicity, deg_q = q.degree(), "normalizing subresultant");

        let argument = normalize(&s, &q)?;
        terms.push(LogPartTerm {
            argument,
            annihilator: q,
        });
    }

    Ok(terms)
}

/// Strips the part of lc_x(s) sharing roots with q, then makes s monic in x
/// with every coefficient reduced modulo q.
fn normalize<F: Field>(
    s: &Bivariate<F>,
    q: &DensePoly<F>,
) -> Result<Bivariate<F>, IntegrationError> {
    let mut coeffs = s.coeffs().to_vec();
    for SquarefreeFactor {
        factor,
        multiplicity,
    } in squarefree_decomposition(s.leading_coeff()).factors
    {
        let content = poly_gcd(&factor, q).pow(multiplicity);
        if content.is_constant() {
            continue;
        }
        for c in &mut coeffs {
            *c = exact_quotient(c, &content).ok_or_else(|| {
                IntegrationError::InvariantViolation("subresultant content does not divide".into())
            })?;
        }
    }

    let stripped = DensePoly::new(coeffs);
    let inv = invert_mod(stripped.leading_coeff(), q).ok_or_else(|| {
        IntegrationError::InvariantViolation("leading coefficient not invertible modulo factor".into())
    })?;

    Ok(stripped.map_coeffs(|c| poly_div_rem(&c.mul(&inv), q).1))
}
