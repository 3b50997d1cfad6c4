//! # primitiva-core
//!
//! Expression layer for the primitiva integrator.
//!
//! This crate provides:
//! - Arena-allocated expression storage with hash-consing
//! - Type-safe expression handles
//! - O(1) structural equality via interning
//! - A printer for rendering results
//! - Call-scoped dummy symbols for bound variables
//!
//! Expressions are immutable once interned. Constructors perform only the
//! trivial folds (dropping zero summands and unit factors, collapsing a lone
//! argument); there is no general simplifier.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arena;
pub mod display;
pub mod expr;
pub mod fresh;
pub mod handle;
pub mod intern;

pub use arena::ExprArena;
pub use display::ExprDisplay;
pub use expr::{functions, ExprNode, FunctionId, SymbolId};
pub use fresh::FreshSymbols;
pub use handle::ExprHandle;
