//! Complete rational function integration.
//!
//! Integrates rational functions P(x)/Q(x) using:
//! 1. **Polynomial division**: Extract polynomial part, integrate with power rule
//! 2. **Hermite reduction**: Reduce to simple poles, extract rational part
//! 3. **Lazard-Rioboo-Trager**: Compute logarithmic part for simple poles
//! 4. **Real conversion**: Rewrite conjugate logarithms as real logarithms
//!    and arctangents when the roots can be certified, over Q(√d) if the
//!    roots need a square root
//!
//! # Algorithm
//!
//! Given ∫(P/Q)dx:
//! 1. Cancel gcd(P, Q) and divide: P = Q·poly + R with deg(R) < deg(Q)
//! 2. Apply Hermite reduction to R/Q: ∫(R/Q) = g + ∫(A/D) with D squarefree
//! 3. Apply Lazard-Rioboo-Trager to A/D to get terms Σ_{q(a)=0} a·log(h(a, x))
//! 4. Express each term as real logs and arctangents, or keep it as a
//!    formal root sum
//! 5. Result: ∫poly + g + transcendental terms

use primitiva_core::{ExprArena, ExprHandle, FreshSymbols};
use primitiva_integers::Integer;
use primitiva_poly::algorithms::roots::FieldRoots;
use primitiva_poly::dense::DensePoly;
use primitiva_rational_func::{hermite_reduce, RationalFunction};
use primitiva_rings::traits::{ConstantField, Field};
use primitiva_rings::RealQuadratic;
use tracing::{debug, instrument};

use crate::context::{IntegrationContext, Mode};
use crate::convert::{ExprConstant, ExprConverter};
use crate::error::IntegrationError;
use crate::log_to_real::log_to_real;
use crate::logpart::{logarithmic_part, Bivariate, LogPartTerm};
use crate::options::RationalIntegrationOptions;
use crate::polynomial::integrate_polynomial;

/// A transcendental term of an antiderivative.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TranscendentalTerm<F: Field> {
    /// coeff · log(argument)
    Log {
        /// Constant factor.
        coeff: F,
        /// Polynomial in x.
        argument: DensePoly<F>,
    },
    /// coeff · atan(argument)
    Atan {
        /// Constant factor.
        coeff: F,
        /// Polynomial in x.
        argument: DensePoly<F>,
    },
    /// coeff · log(argument) over a real quadratic field Q(√d).
    RadicalLog {
        /// Constant factor.
        coeff: RealQuadratic,
        /// Polynomial in x.
        argument: DensePoly<RealQuadratic>,
    },
    /// coeff · atan(argument) over a real quadratic field Q(√d).
    RadicalAtan {
        /// Constant factor.
        coeff: RealQuadratic,
        /// Polynomial in x.
        argument: DensePoly<RealQuadratic>,
    },
    /// Σ_{t: annihilator(t)=0} t · log(argument(t, x))
    RootSum {
        /// Monic squarefree polynomial in t.
        annihilator: DensePoly<F>,
        /// Polynomial in x with coefficients in F[t].
        argument: Bivariate<F>,
    },
}

/// An antiderivative of a rational function, kept in structured form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RationalAntiderivative<F: Field> {
    /// Integral of the polynomial part.
    pub polynomial_part: DensePoly<F>,
    /// The rational part from Hermite reduction.
    pub rational_part: RationalFunction<F>,
    /// Logarithms, arctangents and root sums, in the order produced.
    pub terms: Vec<TranscendentalTerm<F>>,
}

impl<F: Field> RationalAntiderivative<F> {
    fn zero() -> Self {
        Self {
            polynomial_part: DensePoly::zero(),
            rational_part: RationalFunction::zero(),
            terms: Vec::new(),
        }
    }

    /// Returns true if this is a zero integral.
    pub fn is_zero(&self) -> bool {
        self.polynomial_part.is_zero() && self.rational_part.is_zero() && self.terms.is_empty()
    }

    /// Returns true if no root sum remains.
    pub fn is_elementary(&self) -> bool {
        !self
            .terms
            .iter()
            .any(|t| matches!(t, TranscendentalTerm::RootSum { .. }))
    }

    /// The derivative, as a rational function in lowest terms.
    ///
    /// `None` if a root sum remains, since its derivative lives in an
    /// extension of F. Radical terms are summed per radicand, where the
    /// conjugates cancel back to coefficients in F.
    pub fn derivative(&self) -> Option<RationalFunction<F>>
    where
        F: ConstantField,
    {
        let mut total = RationalFunction::from_poly(self.polynomial_part.derivative())
            .add_ref(&self.rational_part.derivative());
        let mut radical: Vec<(Option<Integer>, RationalFunction<RealQuadratic>)> = Vec::new();

        for term in &self.terms {
            let d = match term {
                TranscendentalTerm::Log { coeff, argument } => log_derivative(coeff, argument),
                TranscendentalTerm::Atan { coeff, argument } => atan_derivative(coeff, argument),
                TranscendentalTerm::RadicalLog { coeff, argument } => {
                    add_to_group(&mut radical, coeff, argument, log_derivative(coeff, argument));
                    continue;
                }
                TranscendentalTerm::RadicalAtan { coeff, argument } => {
                    add_to_group(&mut radical, coeff, argument, atan_derivative(coeff, argument));
                    continue;
                }
                TranscendentalTerm::RootSum { .. } => return None,
            };
            total = total.add_ref(&d);
        }

        for (_, group) in &radical {
            total = total.add_ref(&lower(group)?);
        }
        Some(total)
    }
}

fn log_derivative<K: Field>(coeff: &K, argument: &DensePoly<K>) -> RationalFunction<K> {
    RationalFunction::new(argument.derivative(), argument.clone()).scale(coeff)
}

fn atan_derivative<K: Field>(coeff: &K, argument: &DensePoly<K>) -> RationalFunction<K> {
    RationalFunction::new(
        argument.derivative(),
        DensePoly::<K>::one().add(&argument.mul(argument)),
    )
    .scale(coeff)
}

/// The radicand a radical term lives over; `None` when every coefficient
/// is rational.
fn radicand_of(coeff: &RealQuadratic, argument: &DensePoly<RealQuadratic>) -> Option<Integer> {
    std::iter::once(coeff)
        .chain(argument.coeffs())
        .find_map(RealQuadratic::radicand)
        .cloned()
}

fn add_to_group(
    groups: &mut Vec<(Option<Integer>, RationalFunction<RealQuadratic>)>,
    coeff: &RealQuadratic,
    argument: &DensePoly<RealQuadratic>,
    d: RationalFunction<RealQuadratic>,
) {
    let key = radicand_of(coeff, argument);
    match groups.iter_mut().find(|(k, _)| *k == key) {
        Some((_, sum)) => *sum = sum.add_ref(&d),
        None => groups.push((key, d)),
    }
}

/// Moves a rational function with rational coefficients from Q(√d) to F.
fn lower<F: ConstantField>(f: &RationalFunction<RealQuadratic>) -> Option<RationalFunction<F>> {
    let down = |p: &DensePoly<RealQuadratic>| -> Option<DensePoly<F>> {
        let coeffs = p
            .coeffs()
            .iter()
            .map(|c| c.to_rational().map(F::from_rational))
            .collect::<Option<Vec<F>>>()?;
        Some(DensePoly::new(coeffs))
    };
    Some(RationalFunction::new(down(f.numerator())?, down(f.denominator())?))
}

impl<F: ExprConstant> RationalAntiderivative<F> {
    /// Builds the expression for this antiderivative.
    ///
    /// `parameters` are the symbols standing for the parameters of F. Root
    /// sums bind a fresh dummy named `symbol_name` drawn from `fresh`.
    ///
    /// # Errors
    ///
    /// `NotASymbol` if `x` or a parameter is not a symbol.
    pub fn to_expr(
        &self,
        arena: &mut ExprArena,
        x: ExprHandle,
        parameters: &[ExprHandle],
        fresh: &mut FreshSymbols,
        symbol_name: &str,
    ) -> Result<ExprHandle, IntegrationError> {
        let mut conv = ExprConverter::new(arena, x)?.with_parameters(parameters)?;
        let mut summands = conv.polynomial_terms(&self.polynomial_part);

        if !self.rational_part.is_zero() {
            summands.push(conv.from_rational_function(&self.rational_part));
        }

        for term in &self.terms {
            let expr = match term {
                TranscendentalTerm::Log { coeff, argument } => {
                    let arg = conv.from_polynomial(argument);
                    let call = conv.arena().log(arg);
                    conv.scaled_call(coeff, call)
                }
                TranscendentalTerm::Atan { coeff, argument } => {
                    let arg = conv.from_polynomial(argument);
                    let call = conv.arena().atan(arg);
                    conv.scaled_call(coeff, call)
                }
                TranscendentalTerm::RadicalLog { coeff, argument } => {
                    let arg = conv.from_polynomial(argument);
                    let call = conv.arena().log(arg);
                    conv.scaled_call(coeff, call)
                }
                TranscendentalTerm::RadicalAtan { coeff, argument } => {
                    let arg = conv.from_polynomial(argument);
                    let call = conv.arena().atan(arg);
                    conv.scaled_call(coeff, call)
                }
                TranscendentalTerm::RootSum {
                    annihilator,
                    argument,
                } => {
                    let t = fresh.fresh(conv.arena(), symbol_name);
                    let poly = conv.poly_to_expr(annihilator, t);
                    let arg = conv.bivariate_to_expr(argument, t);
                    let arena = conv.arena();
                    let log = arena.log(arg);
                    let body = arena.mul([t, log].as_slice());
                    arena.root_sum(poly, t, body)
                }
            };
            summands.push(expr);
        }

        Ok(conv.arena().add(summands))
    }
}

/// Integrates p/q.
///
/// The integration constant is zero. Every unknown and the real/complex
/// mode belong to this call alone.
///
/// # Errors
///
/// `ZeroDenominator` if q = 0. `InvariantViolation` signals a bug in one
/// of the exact steps.
#[instrument(skip_all, fields(deg_p = p.degree(), deg_q = q.degree()))]
pub fn integrate_rational_function<F: FieldRoots>(
    p: &DensePoly<F>,
    q: &DensePoly<F>,
    options: &RationalIntegrationOptions,
) -> Result<RationalAntiderivative<F>, IntegrationError> {
    if q.is_zero() {
        return Err(IntegrationError::ZeroDenominator);
    }

    let mut ctx = IntegrationContext::new(Mode::decide(options, p, q));
    let mut result = RationalAntiderivative::zero();

    let (poly, proper) = RationalFunction::new(p.clone(), q.clone()).decompose_proper();
    debug!(
        deg_poly = poly.degree(),
        deg_den = proper.denominator().degree(),
        mode = ?ctx.mode(),
        "cancelled and divided"
    );
    result.polynomial_part = integrate_polynomial(&poly);
    if proper.is_zero() {
        return Ok(result);
    }

    let reduction = hermite_reduce(proper.numerator(), proper.denominator(), ctx.unknowns())?;
    debug!(
        unknowns = ctx.unknowns().issued(),
        deg_residual_den = reduction.log_residual.denominator().degree(),
        "hermite reduction"
    );
    result.rational_part = reduction.rational_part;

    let (extra, residual) = reduction.log_residual.decompose_proper();
    result.polynomial_part = result.polynomial_part.add(&integrate_polynomial(&extra));
    if residual.is_zero() {
        return Ok(result);
    }

    for term in logarithmic_part(residual.numerator(), residual.denominator())? {
        result.terms.extend(transcendental_terms(term, ctx.mode()));
    }

    Ok(result)
}

/// Expresses one logarithmic term in the requested mode.
fn transcendental_terms<F: FieldRoots>(term: LogPartTerm<F>, mode: Mode) -> Vec<TranscendentalTerm<F>> {
    if term.annihilator.degree() == 1 {
        let root = -term.annihilator.coeff(0);
        debug!(%root, "single residue");
        let argument = term.argument_at(&root);
        return vec![TranscendentalTerm::Log {
            coeff: root,
            argument,
        }];
    }

    if mode == Mode::Real {
        match log_to_real(&term) {
            Ok(real) => {
                debug!(logs = real.logs.len(), atans = real.atans.len(), "real form");
                let logs = real
                    .logs
                    .into_iter()
                    .map(|(coeff, argument)| TranscendentalTerm::Log { coeff, argument });
                let atans = real
                    .atans
                    .into_iter()
                    .map(|(coeff, argument)| TranscendentalTerm::Atan { coeff, argument });
                return logs.chain(atans).collect();
            }
            Err(err) => debug!(%err, deg = term.annihilator.degree(), "no real form over the field"),
        }
        if let Some(radical) = radical_terms(&term) {
            return radical;
        }
        debug!(deg = term.annihilator.degree(), "keeping root sum");
    }

    vec![TranscendentalTerm::RootSum {
        annihilator: term.annihilator,
        argument: term.argument,
    }]
}

/// Retries the real conversion over Q(√d) for a term with rational
/// coefficients.
fn radical_terms<F: FieldRoots>(term: &LogPartTerm<F>) -> Option<Vec<TranscendentalTerm<F>>> {
    let lift = |p: &DensePoly<F>| -> Option<DensePoly<RealQuadratic>> {
        let coeffs = p
            .coeffs()
            .iter()
            .map(|c| c.to_rational().map(RealQuadratic::rational))
            .collect::<Option<Vec<_>>>()?;
        Some(DensePoly::new(coeffs))
    };
    let argument = term
        .argument
        .coeffs()
        .iter()
        .map(lift)
        .collect::<Option<Vec<_>>>()?;
    let lifted = LogPartTerm {
        argument: DensePoly::new(argument),
        annihilator: lift(&term.annihilator)?,
    };

    let real = log_to_real(&lifted).ok()?;
    debug!(logs = real.logs.len(), atans = real.atans.len(), "real form over a quadratic field");
    let logs = real
        .logs
        .into_iter()
        .map(|(coeff, argument)| TranscendentalTerm::RadicalLog { coeff, argument });
    let atans = real
        .atans
        .into_iter()
        .map(|(coeff, argument)| TranscendentalTerm::RadicalAtan { coeff, argument });
    Some(logs.chain(atans).collect())
}
