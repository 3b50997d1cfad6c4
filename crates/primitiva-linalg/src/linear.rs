//! Linear forms over call-scoped unknowns.
//!
//! An [`UnknownPool`] belongs to one computation; unknowns from different
//! pools are never mixed, so nested or repeated computations cannot collide.

use rustc_hash::FxHashMap;

use primitiva_rings::traits::Field;

use crate::dense_matrix::DenseMatrix;

/// An undetermined coefficient.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Unknown(u32);

impl Unknown {
    /// The index of this unknown within its pool.
    #[must_use]
    pub fn index(self) -> u32 {
        self.0
    }
}

/// Hands out fresh unknowns from a counter owned by one computation.
#[derive(Debug, Default)]
pub struct UnknownPool {
    next: u32,
}

impl UnknownPool {
    /// Creates an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new unknown, distinct from every other one in this pool.
    pub fn fresh(&mut self) -> Unknown {
        let u = Unknown(self.next);
        self.next += 1;
        u
    }

    /// Returns `n` new unknowns.
    pub fn fresh_many(&mut self, n: usize) -> Vec<Unknown> {
        (0..n).map(|_| self.fresh()).collect()
    }

    /// Number of unknowns issued so far.
    #[must_use]
    pub fn issued(&self) -> usize {
        self.next as usize
    }
}

/// c₀ + Σ cᵢ·uᵢ with coefficients in a field.
///
/// Zero coefficients are never stored, so equality is structural.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct LinearForm<K: Field> {
    constant: K,
    terms: FxHashMap<Unknown, K>,
}

impl<K: Field> LinearForm<K> {
    /// The zero form.
    #[must_use]
    pub fn zero() -> Self {
        Self::constant(K::zero())
    }

    /// A constant form.
    #[must_use]
    pub fn constant(c: K) -> Self {
        Self {
            constant: c,
            terms: FxHashMap::default(),
        }
    }

    /// The form 1·u.
    #[must_use]
    pub fn unknown(u: Unknown) -> Self {
        let mut terms = FxHashMap::default();
        terms.insert(u, K::one());
        Self {
            constant: K::zero(),
            terms,
        }
    }

    /// The constant term.
    #[must_use]
    pub fn constant_term(&self) -> &K {
        &self.constant
    }

    /// The coefficient of `u`.
    #[must_use]
    pub fn coeff(&self, u: Unknown) -> K {
        self.terms.get(&u).cloned().unwrap_or_else(K::zero)
    }

    /// Returns true if the form is identically zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.constant.is_zero() && self.terms.is_empty()
    }

    /// Sum of two forms.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.constant = result.constant + other.constant.clone();
        for (&u, c) in &other.terms {
            result.add_term(u, c.clone());
        }
        result
    }

    /// Difference of two forms.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.scale(&-K::one()))
    }

    /// Multiplies every coefficient by `c`.
    #[must_use]
    pub fn scale(&self, c: &K) -> Self {
        if c.is_zero() {
            return Self::zero();
        }
        Self {
            constant: self.constant.clone() * c.clone(),
            terms: self
                .terms
                .iter()
                .map(|(&u, k)| (u, k.clone() * c.clone()))
                .collect(),
        }
    }

    /// Substitutes values for the unknowns; missing unknowns count as zero.
    #[must_use]
    pub fn evaluate(&self, values: &Substitution<K>) -> K {
        self.terms
            .iter()
            .fold(self.constant.clone(), |acc, (&u, c)| acc + c.clone() * values.get(u))
    }

    fn add_term(&mut self, u: Unknown, c: K) {
        let sum = self.coeff(u) + c;
        if sum.is_zero() {
            self.terms.remove(&u);
        } else {
            self.terms.insert(u, sum);
        }
    }
}

/// Values assigned to unknowns by [`solve_linear_system`].
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Substitution<K: Field> {
    values: FxHashMap<Unknown, K>,
}

impl<K: Field> Substitution<K> {
    /// The value of `u` (zero if unassigned).
    #[must_use]
    pub fn get(&self, u: Unknown) -> K {
        self.values.get(&u).cloned().unwrap_or_else(K::zero)
    }

    /// Number of assigned unknowns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if nothing is assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Solves the equations `form = 0` for the given unknowns.
///
/// Returns `None` if the system is inconsistent. Unknowns left free by an
/// underdetermined system are set to zero.
#[must_use]
pub fn solve_linear_system<K: Field>(
    equations: &[LinearForm<K>],
    unknowns: &[Unknown],
) -> Option<Substitution<K>> {
    let rows: Vec<Vec<K>> = equations
        .iter()
        .map(|eq| unknowns.iter().map(|&u| eq.coeff(u)).collect())
        .collect();
    let rhs: Vec<K> = equations.iter().map(|eq| -eq.constant.clone()).collect();

    let solution = if equations.is_empty() {
        vec![K::zero(); unknowns.len()]
    } else {
        DenseMatrix::from_rows(rows).solve(&rhs)?
    };

    Some(Substitution {
        values: unknowns.iter().copied().zip(solution).collect(),
    })
}
