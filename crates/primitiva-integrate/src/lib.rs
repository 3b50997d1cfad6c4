//! Exact integration of rational functions for primitiva.
//!
//! Given polynomials P and Q over Q (or Q(i)), possibly extended by up to
//! two symbolic parameters, this crate finds
//! ∫ P(x)/Q(x) dx as
//!
//! ```text
//! polynomial part + rational part + Σ c·log(v) + Σ c·atan(u) + RootSum(...)
//! ```
//!
//! The pipeline is:
//! - Horowitz-Ostrogradsky reduction (from `primitiva-rational-func`)
//!   peels off the rational part, leaving a square-free denominator
//! - [`logarithmic_part`] runs Lazard-Rioboo-Trager on the residual
//! - [`log_to_atan`] and the real splitting of complex logarithm pairs
//!   turn the result into real logarithms and arctangents when the input
//!   is real and every root involved is rational
//! - over Q, roots that are real quadratic irrationals are retried over
//!   Q(√d) and printed with `sqrt`
//! - anything else stays a formal root sum
//!
//! # Quick Start
//!
//! ```ignore
//! use primitiva_core::ExprArena;
//! use primitiva_integrate::{integrate_rational, RationalIntegrationOptions};
//!
//! let mut arena = ExprArena::new();
//! let x = arena.symbol("x");
//! let one = arena.integer(1);
//! let two = arena.integer(2);
//! let x2 = arena.pow(x, two);
//! let den = arena.add([x2, one].as_slice());
//!
//! let f = integrate_rational(&mut arena, one, den, x, &RationalIntegrationOptions::default())?;
//! assert_eq!(arena.display(f).to_string(), "atan(x)");
//! ```

#![warn(missing_docs, clippy::all)]

pub mod api;
mod context;
pub mod convert;
pub mod error;
pub mod log_to_atan;
mod log_to_real;
pub mod logpart;
pub mod options;
pub mod polynomial;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use api::{integrate_rational, integrate_rational_expr, MAX_PARAMETERS};
pub use context::Mode;
pub use convert::{ExprConstant, ExprConverter, MAX_EXPONENT};
pub use error::IntegrationError;
pub use log_to_atan::log_to_atan;
pub use log_to_real::RealLogPart;
pub use logpart::{logarithmic_part, Bivariate, LogPart, LogPartTerm};
pub use options::RationalIntegrationOptions;
pub use polynomial::integrate_polynomial;
pub use rational::{integrate_rational_function, RationalAntiderivative, TranscendentalTerm};
