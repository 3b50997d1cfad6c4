//! Rendering expressions as text.
//!
//! The output is meant for people and for tests: `x^2 - 1`,
//! `-4*log(x + 1)`, `RootSum(t^2 - 2, Lambda(t, t*log(x + t)))`.

use std::fmt;

use num_traits::One;
use primitiva_integers::Rational;

use crate::arena::ExprArena;
use crate::expr::{functions, ExprNode};
use crate::handle::ExprHandle;

const PREC_ADD: u8 = 1;
const PREC_MUL: u8 = 2;
const PREC_POW: u8 = 3;
const PREC_ATOM: u8 = 4;

/// Displays an expression stored in an arena.
///
/// Created by [`ExprArena::display`].
#[derive(Clone, Copy)]
pub struct ExprDisplay<'a> {
    arena: &'a ExprArena,
    handle: ExprHandle,
}

impl<'a> ExprDisplay<'a> {
    pub(crate) fn new(arena: &'a ExprArena, handle: ExprHandle) -> Self {
        Self { arena, handle }
    }

    fn precedence(&self, h: ExprHandle) -> u8 {
        match self.arena.get(h) {
            ExprNode::Number(r) if r.is_negative() => PREC_ADD,
            ExprNode::Number(r) if !r.is_integer() => PREC_MUL,
            ExprNode::Add(_) | ExprNode::Neg(_) => PREC_ADD,
            ExprNode::Mul(args) if self.leading_negative(args).is_some() => PREC_ADD,
            ExprNode::Mul(_) | ExprNode::Div { .. } => PREC_MUL,
            ExprNode::Pow { .. } => PREC_POW,
            _ => PREC_ATOM,
        }
    }

    /// The leading coefficient of a product, if it is a negative number.
    fn leading_negative(&self, factors: &[ExprHandle]) -> Option<Rational> {
        let first = factors.first()?;
        match self.arena.get(*first).as_number() {
            Some(c) if c.is_negative() => Some(-c),
            _ => None,
        }
    }

    fn write(&self, f: &mut fmt::Formatter<'_>, h: ExprHandle, parent: u8) -> fmt::Result {
        if self.precedence(h) < parent {
            f.write_str("(")?;
            self.write_node(f, h)?;
            f.write_str(")")
        } else {
            self.write_node(f, h)
        }
    }

    fn write_name(&self, f: &mut fmt::Formatter<'_>, id: u32) -> fmt::Result {
        f.write_str(self.arena.symbol_name(id).unwrap_or("?"))
    }

    fn write_node(&self, f: &mut fmt::Formatter<'_>, h: ExprHandle) -> fmt::Result {
        match self.arena.get(h) {
            ExprNode::Number(r) => write!(f, "{r}"),
            ExprNode::Symbol(id) | ExprNode::Dummy { name: id, .. } => self.write_name(f, *id),
            ExprNode::ImaginaryUnit => f.write_str("I"),
            ExprNode::Add(args) => {
                for (i, &arg) in args.iter().enumerate() {
                    if i == 0 {
                        self.write(f, arg, PREC_ADD)?;
                    } else {
                        self.write_summand(f, arg)?;
                    }
                }
                Ok(())
            }
            ExprNode::Mul(args) => match self.leading_negative(args) {
                Some(c) => {
                    f.write_str("-")?;
                    self.write_product(f, Some(c), &args[1..])
                }
                None => self.write_product(f, None, args),
            },
            ExprNode::Pow { base, exp } => {
                self.write(f, *base, PREC_ATOM)?;
                f.write_str("^")?;
                self.write(f, *exp, PREC_ATOM)
            }
            ExprNode::Neg(arg) => {
                f.write_str("-")?;
                self.write(f, *arg, PREC_POW)
            }
            ExprNode::Div { num, den } => {
                self.write(f, *num, PREC_MUL)?;
                f.write_str("/")?;
                self.write(f, *den, PREC_POW)
            }
            ExprNode::Function { id, args } => {
                write!(f, "{}(", functions::name(*id))?;
                for (i, &arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    self.write(f, arg, 0)?;
                }
                f.write_str(")")
            }
            ExprNode::RootSum { poly, var, body } => {
                f.write_str("RootSum(")?;
                self.write(f, *poly, 0)?;
                f.write_str(", Lambda(")?;
                self.write(f, *var, 0)?;
                f.write_str(", ")?;
                self.write(f, *body, 0)?;
                f.write_str("))")
            }
        }
    }

    /// Writes a non-leading summand with its sign as the operator.
    fn write_summand(&self, f: &mut fmt::Formatter<'_>, h: ExprHandle) -> fmt::Result {
        match self.arena.get(h) {
            ExprNode::Number(r) if r.is_negative() => write!(f, " - {}", r.abs()),
            ExprNode::Neg(arg) => {
                f.write_str(" - ")?;
                self.write(f, *arg, PREC_MUL)
            }
            ExprNode::Mul(args) => match self.leading_negative(args) {
                Some(c) => {
                    f.write_str(" - ")?;
                    self.write_product(f, Some(c), &args[1..])
                }
                None => {
                    f.write_str(" + ")?;
                    self.write_product(f, None, args)
                }
            },
            _ => {
                f.write_str(" + ")?;
                self.write(f, h, PREC_ADD)
            }
        }
    }

    fn write_product(
        &self,
        f: &mut fmt::Formatter<'_>,
        coeff: Option<Rational>,
        factors: &[ExprHandle],
    ) -> fmt::Result {
        let mut first = true;
        if let Some(c) = coeff.filter(|c| !c.is_one()) {
            write!(f, "{c}")?;
            first = false;
        }
        for &factor in factors {
            if !first {
                f.write_str("*")?;
            }
            self.write(f, factor, PREC_MUL)?;
            first = false;
        }
        Ok(())
    }
}

impl fmt::Display for ExprDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_node(f, self.handle)
    }
}

impl fmt::Debug for ExprDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}
