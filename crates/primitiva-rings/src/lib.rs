//! # primitiva-rings
//!
//! Algebraic structures for primitiva.
//!
//! This crate provides:
//! - Abstract traits: `Ring`, `EuclideanDomain`, `Field`, `ConstantField`
//! - The rational field `Q`
//! - The Gaussian rationals `GaussianRational` = Q(i)
//! - Real quadratic numbers `RealQuadratic` = a + b·√d
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring
//!  └── CommutativeRing
//!       └── IntegralDomain
//!            └── EuclideanDomain
//!                 └── Field
//!                      └── ConstantField
//! ```
//!
//! `ConstantField` is what the integrator is generic over: a field that can
//! say whether an element is real and split it into real and imaginary parts.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod gaussian;
pub mod quadratic;
pub mod rationals;
pub mod traits;

pub use gaussian::GaussianRational;
pub use quadratic::RealQuadratic;
pub use rationals::Q;
pub use traits::{CommutativeRing, ConstantField, EuclideanDomain, Field, IntegralDomain, OrderedRing, Ring};
