//! Expression handles.
//!
//! A handle is a 32-bit index into an [`ExprArena`](crate::ExprArena). Because
//! the arena hash-conses nodes, two handles from the same arena are equal
//! exactly when the expressions are structurally equal.

use std::fmt;

/// A handle to an expression in the arena.
///
/// Handles are only meaningful for the arena that issued them.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExprHandle(u32);

impl ExprHandle {
    /// Wraps an arena index.
    #[must_use]
    pub(crate) const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw index of this handle.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for ExprHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Expr({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_is_four_bytes() {
        assert_eq!(std::mem::size_of::<ExprHandle>(), 4);
        assert_eq!(std::mem::size_of::<Option<ExprHandle>>(), 8);
    }

    #[test]
    fn test_handle_debug() {
        assert_eq!(format!("{:?}", ExprHandle::new(7)), "Expr(7)");
        assert_eq!(ExprHandle::new(7).index(), 7);
    }
}
