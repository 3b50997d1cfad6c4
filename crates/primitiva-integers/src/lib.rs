//! # primitiva-integers
//!
//! Arbitrary precision integer and rational arithmetic for primitiva.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`), with the divisor search used by
//!   rational-root finding
//! - Arbitrary precision rationals (`Rational`), always in lowest terms
//!
//! Both types implement `num_traits::{Zero, One}` and the usual operator
//! traits for owned and borrowed operands.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
pub use rational::Rational;
