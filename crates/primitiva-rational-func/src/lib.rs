//! Rational functions P(x)/Q(x) for primitiva.
//!
//! This crate provides:
//! - [`RationalFunction`] type for representing P(x)/Q(x) in lowest terms
//! - Arithmetic operations (add, sub, mul, div) and the derivative
//! - Horowitz-Ostrogradsky reduction, splitting a proper fraction into an
//!   already-integrated rational part and a residual with square-free
//!   denominator
//! - Field and sign structure on K(a), so a rational function in a symbolic
//!   parameter can itself serve as a coefficient
//!
//! The reduction is the first stage of rational function integration; the
//! logarithmic part is handled by `primitiva-integrate`.

#![warn(missing_docs, clippy::all)]

mod arithmetic;
mod field;
pub mod hermite;
mod rational_func;

#[cfg(test)]
mod proptests;

pub use hermite::{hermite_reduce, HermiteReduction, ReductionError};
pub use rational_func::RationalFunction;
