//! Call-scoped bound variables.

use crate::arena::ExprArena;
use crate::handle::ExprHandle;

/// Issues `Dummy` variables for one top-level computation.
///
/// Each computation owns its own counter starting at zero, so repeating a
/// computation on the same arena reproduces the same handles, while nested or
/// interleaved computations cannot capture each other's variables as long as
/// each uses its own `FreshSymbols`.
#[derive(Debug, Default)]
pub struct FreshSymbols {
    next: u32,
}

impl FreshSymbols {
    /// Creates a counter starting at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new bound variable displayed as `name`.
    pub fn fresh(&mut self, arena: &mut ExprArena, name: &str) -> ExprHandle {
        let index = self.next;
        self.next += 1;
        arena.dummy(name, index)
    }

    /// Number of variables issued so far.
    #[must_use]
    pub fn issued(&self) -> u32 {
        self.next
    }
}
