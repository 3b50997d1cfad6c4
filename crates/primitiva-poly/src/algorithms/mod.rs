//! Polynomial algorithms.
//!
//! - Division, gcd and Bézout coefficients over a field
//! - Resultants by fraction-free elimination
//! - Subresultant polynomial remainder sequences
//! - Square-free decomposition
//! - Sturm sequences, root isolation and exact roots in the coefficient field
//! - Real roots of degree at most two over Q

pub mod gcd;
pub mod quadratic_roots;
pub mod resultant;
pub mod roots;
pub mod squarefree;
pub mod sturm;
pub mod subresultant;
