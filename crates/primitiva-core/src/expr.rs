//! Expression node types.
//!
//! This module defines the core expression types stored in the arena.

use num_traits::{One, Zero};
use primitiva_integers::Rational;
use smallvec::SmallVec;

use crate::handle::ExprHandle;

/// Unique identifier for a symbol.
pub type SymbolId = u32;

/// Unique identifier for a function.
pub type FunctionId = u32;

/// An expression node stored in the arena.
///
/// This enum represents all possible expression types. Each variant is
/// designed to be cache-friendly, using `SmallVec` for inline storage
/// of small argument lists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExprNode {
    // === Atoms ===
    /// An exact rational number.
    Number(Rational),

    /// A symbolic variable.
    Symbol(SymbolId),

    /// A bound variable issued by [`FreshSymbols`](crate::FreshSymbols).
    ///
    /// Never equal to a `Symbol` of the same name, nor to a dummy with a
    /// different index.
    Dummy {
        /// Display name.
        name: SymbolId,
        /// Per-call counter value.
        index: u32,
    },

    /// The imaginary unit I.
    ImaginaryUnit,

    // === Compound Expressions ===
    /// Sum of expressions: a + b + c + ...
    ///
    /// Invariant: at least 2 arguments.
    Add(SmallVec<[ExprHandle; 4]>),

    /// Product of expressions: a * b * c * ...
    ///
    /// Invariant: at least 2 arguments.
    Mul(SmallVec<[ExprHandle; 4]>),

    /// Power expression: base^exp.
    Pow {
        /// The base of the power.
        base: ExprHandle,
        /// The exponent.
        exp: ExprHandle,
    },

    /// Negation: -expr.
    Neg(ExprHandle),

    /// Division: numerator / denominator.
    Div {
        /// The numerator.
        num: ExprHandle,
        /// The denominator.
        den: ExprHandle,
    },

    // === Functions ===
    /// A function application: f(arg1, arg2, ...).
    Function {
        /// The function identifier.
        id: FunctionId,
        /// The arguments.
        args: SmallVec<[ExprHandle; 2]>,
    },

    /// Sum of `body` over every root `var` of the univariate polynomial `poly`.
    RootSum {
        /// Polynomial in `var`.
        poly: ExprHandle,
        /// The bound variable, normally a `Dummy`.
        var: ExprHandle,
        /// Summand, depending on `var`.
        body: ExprHandle,
    },
}

impl ExprNode {
    /// Returns true if this node is an atom (no children).
    #[must_use]
    pub fn is_atom(&self) -> bool {
        matches!(
            self,
            ExprNode::Number(_) | ExprNode::Symbol(_) | ExprNode::Dummy { .. } | ExprNode::ImaginaryUnit
        )
    }

    /// Returns the value if this node is a numeric literal.
    #[must_use]
    pub fn as_number(&self) -> Option<&Rational> {
        match self {
            ExprNode::Number(r) => Some(r),
            _ => None,
        }
    }

    /// Returns true if this is the number zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.as_number().is_some_and(Zero::is_zero)
    }

    /// Returns true if this is the number one.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.as_number().is_some_and(One::is_one)
    }

    /// Returns the children of this node.
    #[must_use]
    pub fn children(&self) -> SmallVec<[ExprHandle; 4]> {
        match self {
            ExprNode::Number(_)
            | ExprNode::Symbol(_)
            | ExprNode::Dummy { .. }
            | ExprNode::ImaginaryUnit => SmallVec::new(),
            ExprNode::Add(args) | ExprNode::Mul(args) => args.clone(),
            ExprNode::Pow { base, exp } => smallvec::smallvec![*base, *exp],
            ExprNode::Neg(arg) => smallvec::smallvec![*arg],
            ExprNode::Div { num, den } => smallvec::smallvec![*num, *den],
            ExprNode::Function { args, .. } => args.iter().copied().collect(),
            ExprNode::RootSum { poly, var, body } => smallvec::smallvec![*poly, *var, *body],
        }
    }
}

/// Standard function identifiers.
pub mod functions {
    use super::FunctionId;

    /// Natural logarithm.
    pub const LOG: FunctionId = 0;
    /// Inverse tangent.
    pub const ATAN: FunctionId = 1;
    /// Principal square root.
    pub const SQRT: FunctionId = 2;

    /// Printed name of a function.
    #[must_use]
    pub fn name(id: FunctionId) -> &'static str {
        match id {
            LOG => "log",
            ATAN => "atan",
            SQRT => "sqrt",
            _ => "f",
        }
    }
}
