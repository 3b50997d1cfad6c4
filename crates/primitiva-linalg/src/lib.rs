//! # primitiva-linalg
//!
//! Exact linear algebra for primitiva.
//!
//! This crate provides:
//! - Dense matrices over a field with Gauss-Jordan elimination
//! - Unknowns drawn from a call-scoped pool, linear forms in them, and a
//!   solver turning "form = 0" equations into a substitution
//!
//! The method of undetermined coefficients in Hermite reduction is the main
//! client: it builds polynomials whose coefficients are linear forms, equates
//! them to zero and solves.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod dense_matrix;
pub mod linear;

pub use dense_matrix::DenseMatrix;
pub use linear::{solve_linear_system, LinearForm, Substitution, Unknown, UnknownPool};
