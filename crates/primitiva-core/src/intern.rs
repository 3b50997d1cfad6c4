//! Interning of names.
//!
//! Symbols and dummies refer to their names by a dense `u32` id, so nodes
//! stay small and hash cheaply.

use std::borrow::Borrow;
use std::hash::Hash;

use hashbrown::HashMap;

/// A generic interning table.
///
/// This maps values to unique IDs, ensuring each unique value
/// is stored exactly once. IDs are assigned densely from zero.
#[derive(Debug)]
pub struct InternTable<T> {
    /// Maps values to their IDs.
    map: HashMap<T, u32>,
    /// Stores values by ID for reverse lookup.
    values: Vec<T>,
}

impl<T: Clone + Eq + Hash> Default for InternTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Eq + Hash> InternTable<T> {
    /// Creates a new empty interning table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
            values: Vec::new(),
        }
    }

    /// Interns a borrowed value, cloning it only when it is new.
    ///
    /// # Panics
    ///
    /// Panics if more than `u32::MAX` values are interned.
    pub fn intern<Q>(&mut self, value: &Q) -> u32
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq + ToOwned<Owned = T>,
    {
        if let Some(&id) = self.map.get(value) {
            return id;
        }

        let id = u32::try_from(self.values.len()).unwrap_or_else(|_| panic!("intern table full"));
        let owned = value.to_owned();
        self.map.insert(owned.clone(), id);
        self.values.push(owned);
        id
    }

    /// Gets a value by its ID.
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&T> {
        self.values.get(id as usize)
    }

    /// Gets the ID of a value, if it has been interned.
    #[must_use]
    pub fn get_id<Q>(&self, value: &Q) -> Option<u32>
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.get(value).copied()
    }

    /// Returns the number of interned values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no values have been interned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
