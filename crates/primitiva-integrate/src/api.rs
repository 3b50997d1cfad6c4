//! Expression-level entry points.
//!
//! These read the integrand out of an [`ExprArena`], pick the coefficient
//! field, integrate, and write the antiderivative back into the same arena.
//!
//! The field is Q, or Q(i) when the imaginary unit occurs, extended by up to
//! [`MAX_PARAMETERS`] symbolic parameters: every symbol other than the
//! variable, in name order. The result is real only if every parameter was
//! declared real with [`ExprArena::real_symbol`] or
//! [`ExprArena::assume_real`].

use primitiva_core::{ExprArena, ExprHandle, ExprNode, FreshSymbols, SymbolId};
use primitiva_poly::dense::DensePoly;
use primitiva_rational_func::RationalFunction;
use primitiva_rings::{GaussianRational, Q};
use tracing::{debug, instrument};

use crate::convert::{ExprConstant, ExprConverter};
use crate::error::IntegrationError;
use crate::options::RationalIntegrationOptions;
use crate::rational::integrate_rational_function;

/// Most symbolic parameters an integrand may contain.
pub const MAX_PARAMETERS: usize = 2;

/// The integrand as handed in by the caller.
#[derive(Clone, Copy)]
enum Integrand {
    Pair(ExprHandle, ExprHandle),
    Single(ExprHandle),
}

impl Integrand {
    fn exprs(self) -> Vec<ExprHandle> {
        match self {
            Integrand::Pair(p, q) => vec![p, q],
            Integrand::Single(e) => vec![e],
        }
    }
}

/// Integrates numerator/denominator with respect to `variable`.
///
/// Both sides must be polynomials in `variable` whose coefficients are
/// rational (or Gaussian rational) functions of the other symbols. Root
/// sums bind a dummy named `options.symbol_name`; dummies are numbered from
/// zero on every call, so equal inputs give identical handles.
///
/// # Errors
///
/// `NotASymbol`, `NonPolynomial`, `ZeroDenominator` or `TooManyParameters`
/// for invalid input.
///
/// # Example
///
/// ```ignore
/// let mut arena = ExprArena::new();
/// let x = arena.symbol("x");
/// let one = arena.integer(1);
/// let two = arena.integer(2);
/// let x2 = arena.pow(x, two);
/// let den = arena.add([x2, one].as_slice());
///
/// let result = integrate_rational(&mut arena, one, den, x, &Default::default())?;
/// assert_eq!(arena.display(result).to_string(), "atan(x)");
/// ```
#[instrument(skip_all)]
pub fn integrate_rational(
    arena: &mut ExprArena,
    numerator: ExprHandle,
    denominator: ExprHandle,
    variable: ExprHandle,
    options: &RationalIntegrationOptions,
) -> Result<ExprHandle, IntegrationError> {
    dispatch(arena, Integrand::Pair(numerator, denominator), variable, options)
}

/// Integrates a single expression that is a fraction of polynomials.
///
/// Sums, products, quotients and integer powers (negative ones included)
/// of polynomials are accepted; common factors need not be cancelled.
///
/// # Errors
///
/// As for [`integrate_rational`].
#[instrument(skip_all)]
pub fn integrate_rational_expr(
    arena: &mut ExprArena,
    expr: ExprHandle,
    variable: ExprHandle,
    options: &RationalIntegrationOptions,
) -> Result<ExprHandle, IntegrationError> {
    dispatch(arena, Integrand::Single(expr), variable, options)
}

fn dispatch(
    arena: &mut ExprArena,
    integrand: Integrand,
    variable: ExprHandle,
    options: &RationalIntegrationOptions,
) -> Result<ExprHandle, IntegrationError> {
    let ExprNode::Symbol(var_id) = *arena.get(variable) else {
        return Err(IntegrationError::NotASymbol);
    };
    let exprs = integrand.exprs();
    let imaginary = exprs
        .iter()
        .any(|&e| arena.contains(e, &ExprNode::ImaginaryUnit));
    let parameters = parameters_of(arena, &exprs, var_id);
    if parameters.len() > MAX_PARAMETERS {
        return Err(IntegrationError::TooManyParameters(parameters.len()));
    }

    let mut options = options.clone();
    if parameters.iter().any(|&(id, _)| !arena.is_real_symbol(id)) {
        options.real.get_or_insert(false);
    }
    debug!(imaginary, parameters = parameters.len(), real = ?options.real, "coefficient field");

    let handles: Vec<ExprHandle> = parameters.iter().map(|&(_, h)| h).collect();
    match (imaginary, handles.len()) {
        (false, 0) => in_field::<Q>(arena, integrand, variable, &handles, &options),
        (true, 0) => in_field::<GaussianRational>(arena, integrand, variable, &handles, &options),
        (false, 1) => in_field::<RationalFunction<Q>>(arena, integrand, variable, &handles, &options),
        (true, 1) => {
            in_field::<RationalFunction<GaussianRational>>(arena, integrand, variable, &handles, &options)
        }
        (false, _) => in_field::<RationalFunction<RationalFunction<Q>>>(
            arena, integrand, variable, &handles, &options,
        ),
        (true, _) => in_field::<RationalFunction<RationalFunction<GaussianRational>>>(
            arena, integrand, variable, &handles, &options,
        ),
    }
}

/// Symbols other than the variable, sorted by name, with their handles.
fn parameters_of(arena: &mut ExprArena, exprs: &[ExprHandle], variable: SymbolId) -> Vec<(SymbolId, ExprHandle)> {
    let mut ids: Vec<SymbolId> = Vec::new();
    for &e in exprs {
        for id in arena.free_symbols(e) {
            if id != variable && !ids.contains(&id) {
                ids.push(id);
            }
        }
    }
    let mut named: Vec<(String, SymbolId)> = ids
        .into_iter()
        .map(|id| (arena.symbol_name(id).unwrap_or_default().to_string(), id))
        .collect();
    named.sort();
    named
        .into_iter()
        .map(|(name, id)| (id, arena.symbol(&name)))
        .collect()
}

fn in_field<F: ExprConstant>(
    arena: &mut ExprArena,
    integrand: Integrand,
    variable: ExprHandle,
    parameters: &[ExprHandle],
    options: &RationalIntegrationOptions,
) -> Result<ExprHandle, IntegrationError> {
    let conv = ExprConverter::new(arena, variable)?.with_parameters(parameters)?;
    let (p, q) = match integrand {
        Integrand::Pair(numerator, denominator) => (
            conv.to_polynomial::<F>(numerator)?,
            conv.to_polynomial::<F>(denominator)?,
        ),
        Integrand::Single(expr) => conv.to_fraction::<F>(expr)?,
    };
    integrate_and_build(arena, &p, &q, variable, parameters, options)
}

fn integrate_and_build<F: ExprConstant>(
    arena: &mut ExprArena,
    p: &DensePoly<F>,
    q: &DensePoly<F>,
    variable: ExprHandle,
    parameters: &[ExprHandle],
    options: &RationalIntegrationOptions,
) -> Result<ExprHandle, IntegrationError> {
    let antiderivative = integrate_rational_function(p, q, options)?;
    let mut fresh = FreshSymbols::new();
    antiderivative.to_expr(arena, variable, parameters, &mut fresh, &options.symbol_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// x^n + c
    fn power_plus(arena: &mut ExprArena, x: ExprHandle, n: i64, c: i64) -> ExprHandle {
        let n = arena.integer(n);
        let xn = arena.pow(x, n);
        let c = arena.integer(c);
        arena.add([xn, c].as_slice())
    }

    #[test]
    fn test_arctangent() {
        let mut arena = ExprArena::new();
        let x = arena.symbol("x");
        let one = arena.integer(1);
        let den = power_plus(&mut arena, x, 2, 1);

        let result =
            integrate_rational(&mut arena, one, den, x, &RationalIntegrationOptions::default()).unwrap();
        assert_eq!(arena.display(result).to_string(), "atan(x)");
    }

    #[test]
    fn test_symbol_name_option() {
        let mut arena = ExprArena::new();
        let x = arena.symbol("x");
        let one = arena.integer(1);
        let den = power_plus(&mut arena, x, 3, -2);

        let options = RationalIntegrationOptions::default().with_symbol_name("z");
        let result = integrate_rational(&mut arena, one, den, x, &options).unwrap();
        assert_eq!(
            arena.display(result).to_string(),
            "RootSum(z^3 - 1/108, Lambda(z, z*log(x - 6*z)))"
        );
    }

    #[test]
    fn test_repeated_calls_share_handles() {
        let mut arena = ExprArena::new();
        let x = arena.symbol("x");
        let one = arena.integer(1);
        let den = power_plus(&mut arena, x, 3, -2);
        let options = RationalIntegrationOptions::default();

        let first = integrate_rational(&mut arena, one, den, x, &options).unwrap();
        let second = integrate_rational(&mut arena, one, den, x, &options).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_root_sum_dummy_differs_from_user_symbol() {
        let mut arena = ExprArena::new();
        let x = arena.symbol("x");
        let t = arena.symbol("t");
        let one = arena.integer(1);
        let den = power_plus(&mut arena, x, 3, -2);

        let result =
            integrate_rational(&mut arena, one, den, x, &RationalIntegrationOptions::default()).unwrap();
        match arena.get(result) {
            ExprNode::RootSum { var, .. } => {
                assert_ne!(*var, t);
                assert!(matches!(arena.get(*var), ExprNode::Dummy { .. }));
            }
            other => panic!("expected a root sum, got {other:?}"),
        }
    }

    #[test]
    fn test_square_roots_in_result() {
        let mut arena = ExprArena::new();
        let x = arena.symbol("x");
        let one = arena.integer(1);
        let den = power_plus(&mut arena, x, 2, -2);

        let result =
            integrate_rational(&mut arena, one, den, x, &RationalIntegrationOptions::default()).unwrap();
        assert_eq!(
            arena.display(result).to_string(),
            "-1/4*sqrt(2)*log(x + sqrt(2)) + 1/4*sqrt(2)*log(x - sqrt(2))"
        );
    }

    #[test]
    fn test_gaussian_input() {
        // ∫ 1/(x - I) = log(x - I)
        let mut arena = ExprArena::new();
        let x = arena.symbol("x");
        let one = arena.integer(1);
        let i = arena.imaginary_unit();
        let minus_i = arena.neg(i);
        let den = arena.add([x, minus_i].as_slice());

        let result =
            integrate_rational(&mut arena, one, den, x, &RationalIntegrationOptions::default()).unwrap();
        assert_eq!(arena.display(result).to_string(), "log(x - I)");
    }

    #[test]
    fn test_single_fraction() {
        // 2x/(x^2 + 1) = log(x^2 + 1)
        let mut arena = ExprArena::new();
        let x = arena.symbol("x");
        let two = arena.integer(2);
        let num = arena.mul([two, x].as_slice());
        let den = power_plus(&mut arena, x, 2, 1);
        let f = arena.div(num, den);

        let result =
            integrate_rational_expr(&mut arena, f, x, &RationalIntegrationOptions::default()).unwrap();
        assert_eq!(arena.display(result).to_string(), "log(x^2 + 1)");
    }

    #[test]
    fn test_parameter_without_sign_stays_complex() {
        // the sign of a decides between logarithms and an arctangent
        let mut arena = ExprArena::new();
        let x = arena.symbol("x");
        let a = arena.symbol("a");
        let one = arena.integer(1);
        let two = arena.integer(2);
        let x2 = arena.pow(x, two);
        let den = arena.add([x2, a].as_slice());

        let result =
            integrate_rational(&mut arena, one, den, x, &RationalIntegrationOptions::default()).unwrap();
        assert_eq!(
            arena.display(result).to_string(),
            "RootSum(t^2 + 1/(4*a), Lambda(t, t*log(x + 2*a*t)))"
        );
    }

    #[test]
    fn test_real_parameter() {
        // ∫ 1/(x - a) = log(x - a)
        let mut arena = ExprArena::new();
        let x = arena.symbol("x");
        let a = arena.real_symbol("a");
        let one = arena.integer(1);
        let minus_a = arena.neg(a);
        let den = arena.add([x, minus_a].as_slice());

        let result =
            integrate_rational(&mut arena, one, den, x, &RationalIntegrationOptions::default()).unwrap();
        assert_eq!(arena.display(result).to_string(), "log(x - a)");
    }

    #[test]
    fn test_invalid_inputs() {
        let mut arena = ExprArena::new();
        let x = arena.symbol("x");
        let one = arena.integer(1);
        let zero = arena.integer(0);
        let log_x = arena.log(x);
        let options = RationalIntegrationOptions::default();

        assert_eq!(
            integrate_rational(&mut arena, one, zero, x, &options),
            Err(IntegrationError::ZeroDenominator)
        );
        assert_eq!(
            integrate_rational(&mut arena, one, x, one, &options),
            Err(IntegrationError::NotASymbol)
        );
        assert_eq!(
            integrate_rational(&mut arena, log_x, x, x, &options),
            Err(IntegrationError::NonPolynomial("log(x)".into()))
        );

        let a = arena.symbol("a");
        let b = arena.symbol("b");
        let c = arena.symbol("c");
        let num = arena.mul([a, b, c].as_slice());
        assert_eq!(
            integrate_rational(&mut arena, num, x, x, &options),
            Err(IntegrationError::TooManyParameters(3))
        );
    }
}
