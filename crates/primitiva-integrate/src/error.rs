//! Errors reported by the rational integrator.

use primitiva_rational_func::ReductionError;
use thiserror::Error;

/// Errors that can occur during rational function integration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IntegrationError {
    /// The denominator is identically zero.
    #[error("denominator is zero")]
    ZeroDenominator,

    /// The input is not a polynomial (or fraction of polynomials) in the
    /// integration variable over an exact field.
    #[error("not a rational function of the integration variable: {0}")]
    NonPolynomial(String),

    /// The integration variable is not a symbol.
    #[error("integration variable must be a symbol")]
    NotASymbol,

    /// The integrand has more symbolic parameters than the coefficient
    /// fields support.
    #[error("at most 2 symbolic parameters are supported, found {0}")]
    TooManyParameters(usize),

    /// An exact-arithmetic invariant failed. Indicates a bug.
    #[error("internal invariant violated: {0}")]
    InvariantViolation(String),
}

impl From<ReductionError> for IntegrationError {
    fn from(err: ReductionError) -> Self {
        match err {
            ReductionError::ZeroDenominator => IntegrationError::ZeroDenominator,
            other => IntegrationError::InvariantViolation(other.to_string()),
        }
    }
}

/// Roots of a split polynomial could not all be found in the field.
///
/// Only used between the real-conversion step and the integrator, which
/// answers it with a formal root sum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("real and complex roots could not be certified")]
pub(crate) struct UncertifiedRootSplit;
