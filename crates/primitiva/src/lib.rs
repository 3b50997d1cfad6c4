//! # primitiva
//!
//! Exact antiderivatives of rational functions.
//!
//! For P(x)/Q(x) over Q (or Q(i)), with up to two symbolic parameters, the
//! result is a closed form built from a polynomial, a rational function,
//! logarithms and arctangents. Quadratic irrational residues are written
//! with square roots; other residues outside the coefficient field give
//! formal root sums.
//!
//! ## Crates
//!
//! - [`integers`]: big integers and rationals
//! - [`rings`]: the algebraic traits, `Q`, `GaussianRational` and `RealQuadratic`
//! - [`poly`]: dense univariate polynomials, gcds, resultants, Sturm counts
//! - [`linalg`]: the linear solver behind Horowitz-Ostrogradsky reduction
//! - [`rational_func`]: rational functions, the reduction itself, and the
//!   parameter fields K(a)
//! - [`core`]: the expression arena and printer
//! - [`integrate`]: the integrator
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use primitiva::prelude::*;
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

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use primitiva_core as core;
pub use primitiva_integers as integers;
pub use primitiva_integrate as integrate;
pub use primitiva_linalg as linalg;
pub use primitiva_poly as poly;
pub use primitiva_rational_func as rational_func;
pub use primitiva_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use primitiva_core::{ExprArena, ExprHandle, ExprNode, FreshSymbols};
    pub use primitiva_integers::{Integer, Rational};
    pub use primitiva_integrate::{
        integrate_rational, integrate_rational_expr, integrate_rational_function, IntegrationError,
        RationalAntiderivative, RationalIntegrationOptions, TranscendentalTerm,
    };
    pub use primitiva_poly::DensePoly;
    pub use primitiva_rational_func::RationalFunction;
    pub use primitiva_rings::{ConstantField, Field, GaussianRational, RealQuadratic, Ring, Q};
}
