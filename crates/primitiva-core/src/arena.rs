//! Arena allocator for expression storage.
//!
//! This module provides a contiguous memory arena for storing expression nodes,
//! enabling cache-friendly traversal and constant-time deallocation.

use hashbrown::{HashMap, HashSet};
use primitiva_integers::Rational;
use smallvec::SmallVec;

use crate::display::ExprDisplay;
use crate::expr::{functions, ExprNode, FunctionId, SymbolId};
use crate::handle::ExprHandle;
use crate::intern::InternTable;

/// The main arena for storing expressions.
///
/// All expressions are stored contiguously in a `Vec`, with hash-consing
/// ensuring each unique expression is stored exactly once.
#[derive(Debug, Default)]
pub struct ExprArena {
    /// Storage for all expression nodes.
    nodes: Vec<ExprNode>,
    /// Interning table: maps node content to its handle.
    intern_map: HashMap<ExprNode, ExprHandle>,
    /// Symbol and dummy names.
    symbols: InternTable<String>,
    /// Symbols declared to take only real values.
    real_symbols: HashSet<SymbolId>,
}

impl ExprArena {
    /// Creates a new empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an arena with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            intern_map: HashMap::with_capacity(capacity),
            symbols: InternTable::new(),
            real_symbols: HashSet::new(),
        }
    }

    /// Interns an expression node, returning its handle.
    ///
    /// If an identical node already exists, returns the existing handle.
    /// Otherwise, allocates a new node and returns its handle.
    pub fn intern(&mut self, node: ExprNode) -> ExprHandle {
        if let Some(&handle) = self.intern_map.get(&node) {
            return handle;
        }

        let index = self.nodes.len();
        assert!(index < u32::MAX as usize, "Arena capacity exceeded");

        let handle = ExprHandle::new(index as u32);
        self.nodes.push(node.clone());
        self.intern_map.insert(node, handle);
        handle
    }

    /// Gets the node at the given handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle is invalid.
    #[must_use]
    pub fn get(&self, handle: ExprHandle) -> &ExprNode {
        &self.nodes[handle.index() as usize]
    }

    /// Interns a symbol name, returning its unique ID.
    pub fn intern_symbol(&mut self, name: &str) -> SymbolId {
        self.symbols.intern(name)
    }

    /// Gets the name of a symbol by its ID.
    #[must_use]
    pub fn symbol_name(&self, id: SymbolId) -> Option<&str> {
        self.symbols.get(id).map(String::as_str)
    }

    /// Declares that the symbol `id` only takes real values.
    pub fn assume_real(&mut self, id: SymbolId) {
        self.real_symbols.insert(id);
    }

    /// True if `id` was declared real.
    #[must_use]
    pub fn is_real_symbol(&self, id: SymbolId) -> bool {
        self.real_symbols.contains(&id)
    }

    /// Returns the number of nodes in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the arena is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns a value that renders `handle` with [`std::fmt::Display`].
    #[must_use]
    pub fn display(&self, handle: ExprHandle) -> ExprDisplay<'_> {
        ExprDisplay::new(self, handle)
    }

    /// Returns true if `target` occurs anywhere inside `handle`.
    #[must_use]
    pub fn contains(&self, handle: ExprHandle, target: &ExprNode) -> bool {
        let mut stack = vec![handle];
        while let Some(h) = stack.pop() {
            let node = self.get(h);
            if node == target {
                return true;
            }
            stack.extend(node.children());
        }
        false
    }

    /// The distinct symbols occurring in `handle`, in order of first
    /// appearance. Bound dummies are not symbols.
    #[must_use]
    pub fn free_symbols(&self, handle: ExprHandle) -> Vec<SymbolId> {
        let mut seen = HashSet::new();
        let mut found = Vec::new();
        let mut stack = vec![handle];
        while let Some(h) = stack.pop() {
            let node = self.get(h);
            if let ExprNode::Symbol(id) = node {
                if seen.insert(*id) {
                    found.push(*id);
                }
            }
            // children() is in argument order; reverse so the leftmost pops first
            stack.extend(node.children().into_iter().rev());
        }
        found
    }

    // === Convenience constructors ===

    /// Creates a rational number expression.
    pub fn number(&mut self, value: Rational) -> ExprHandle {
        self.intern(ExprNode::Number(value))
    }

    /// Creates an integer expression.
    pub fn integer(&mut self, value: i64) -> ExprHandle {
        self.number(Rational::from(value))
    }

    /// Creates the number num/den.
    ///
    /// # Panics
    ///
    /// Panics if `den` is zero.
    pub fn rational(&mut self, num: i64, den: i64) -> ExprHandle {
        self.number(Rational::from_i64(num, den))
    }

    /// Creates a symbol expression.
    pub fn symbol(&mut self, name: &str) -> ExprHandle {
        let id = self.intern_symbol(name);
        self.intern(ExprNode::Symbol(id))
    }

    /// Creates a symbol that only takes real values.
    pub fn real_symbol(&mut self, name: &str) -> ExprHandle {
        let id = self.intern_symbol(name);
        self.assume_real(id);
        self.intern(ExprNode::Symbol(id))
    }

    /// Creates a bound variable; see [`FreshSymbols`](crate::FreshSymbols).
    pub fn dummy(&mut self, name: &str, index: u32) -> ExprHandle {
        let name = self.intern_symbol(name);
        self.intern(ExprNode::Dummy { name, index })
    }

    /// Creates the imaginary unit.
    pub fn imaginary_unit(&mut self) -> ExprHandle {
        self.intern(ExprNode::ImaginaryUnit)
    }

    /// Creates an addition expression.
    ///
    /// Zero summands are dropped; an empty sum is 0.
    pub fn add(&mut self, args: impl Into<SmallVec<[ExprHandle; 4]>>) -> ExprHandle {
        let mut args = args.into();
        args.retain(|h| !self.get(*h).is_zero());
        match args.len() {
            0 => self.integer(0),
            1 => args[0],
            _ => self.intern(ExprNode::Add(args)),
        }
    }

    /// Creates a multiplication expression.
    ///
    /// Unit factors are dropped; an empty product is 1.
    pub fn mul(&mut self, args: impl Into<SmallVec<[ExprHandle; 4]>>) -> ExprHandle {
        let mut args = args.into();
        args.retain(|h| !self.get(*h).is_one());
        match args.len() {
            0 => self.integer(1),
            1 => args[0],
            _ => self.intern(ExprNode::Mul(args)),
        }
    }

    /// Creates a power expression; x^1 is x.
    pub fn pow(&mut self, base: ExprHandle, exp: ExprHandle) -> ExprHandle {
        if self.get(exp).is_one() {
            return base;
        }
        self.intern(ExprNode::Pow { base, exp })
    }

    /// Creates a negation expression. Numbers are negated in place.
    pub fn neg(&mut self, arg: ExprHandle) -> ExprHandle {
        if let Some(r) = self.get(arg).as_number() {
            let negated = -r;
            return self.number(negated);
        }
        self.intern(ExprNode::Neg(arg))
    }

    /// Creates a division expression; a/1 is a.
    pub fn div(&mut self, num: ExprHandle, den: ExprHandle) -> ExprHandle {
        if self.get(den).is_one() {
            return num;
        }
        self.intern(ExprNode::Div { num, den })
    }

    /// Creates a function application.
    pub fn function(&mut self, id: FunctionId, args: impl Into<SmallVec<[ExprHandle; 2]>>) -> ExprHandle {
        self.intern(ExprNode::Function {
            id,
            args: args.into(),
        })
    }

    /// Creates log(arg).
    pub fn log(&mut self, arg: ExprHandle) -> ExprHandle {
        let args: SmallVec<[ExprHandle; 2]> = smallvec::smallvec![arg];
        self.function(functions::LOG, args)
    }

    /// Creates atan(arg).
    pub fn atan(&mut self, arg: ExprHandle) -> ExprHandle {
        let args: SmallVec<[ExprHandle; 2]> = smallvec::smallvec![arg];
        self.function(functions::ATAN, args)
    }

    /// Creates sqrt(arg).
    pub fn sqrt(&mut self, arg: ExprHandle) -> ExprHandle {
        let args: SmallVec<[ExprHandle; 2]> = smallvec::smallvec![arg];
        self.function(functions::SQRT, args)
    }

    /// Creates the formal sum of `body` over the roots `var` of `poly`.
    pub fn root_sum(&mut self, poly: ExprHandle, var: ExprHandle, body: ExprHandle) -> ExprHandle {
        self.intern(ExprNode::RootSum { poly, var, body })
    }

    /// Returns true if the handle is the number zero.
    #[must_use]
    pub fn is_zero(&self, handle: ExprHandle) -> bool {
        self.get(handle).is_zero()
    }

    /// Returns true if the handle is the number one.
    #[must_use]
    pub fn is_one(&self, handle: ExprHandle) -> bool {
        self.get(handle).is_one()
    }
}
