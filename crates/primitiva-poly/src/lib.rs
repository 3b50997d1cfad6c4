//! # primitiva-poly
//!
//! Exact polynomial arithmetic for primitiva.
//!
//! This crate provides:
//! - Dense univariate polynomials over any `Ring`, which are themselves a ring,
//!   so `DensePoly<DensePoly<F>>` models F[t][x]
//! - Division, gcd, extended gcd, exact quotients and modular inverses
//! - Resultants (Bareiss on the Sylvester matrix) and subresultant sequences
//! - Square-free decomposition (Yun)
//! - Sturm real-root counting and exact roots lying in the coefficient field

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod dense;
mod ring;

#[cfg(test)]
mod proptests;

pub use algorithms::gcd::{
    cofactors, exact_quotient, invert_mod, make_monic, poly_div_rem, poly_extended_gcd, poly_gcd,
};
pub use algorithms::resultant::resultant;
pub use algorithms::roots::{real_roots_in_field, FieldRoots};
pub use algorithms::squarefree::{
    is_squarefree, squarefree_decomposition, squarefree_part, SquarefreeDecomposition,
    SquarefreeFactor,
};
pub use algorithms::quadratic_roots::real_quadratic_roots;
pub use algorithms::sturm::{count_real_roots, RootInterval, SturmChain};
pub use algorithms::subresultant::{pseudo_remainder, subresultant_prs};
pub use dense::DensePoly;
