//! Dense matrices over a field.
//!
//! The systems solved here are small (one unknown per coefficient of the
//! Hermite numerators), so a row-major `Vec` with Gauss-Jordan elimination
//! is all that is needed.

use std::ops::{Index, IndexMut};

use primitiva_rings::traits::{Field, Ring};

/// Dense matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseMatrix<R> {
    data: Vec<R>,
    num_rows: usize,
    num_cols: usize,
}

impl<R: Ring> DenseMatrix<R> {
    /// Creates a new matrix filled with zeros.
    #[must_use]
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        Self {
            data: vec![R::zero(); num_rows * num_cols],
            num_rows,
            num_cols,
        }
    }

    /// Creates a matrix from its rows.
    ///
    /// # Panics
    ///
    /// Panics if the rows have different lengths.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<R>>) -> Self {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        let data: Vec<R> = rows.into_iter().flatten().collect();
        assert_eq!(data.len(), num_rows * num_cols, "ragged rows");
        Self {
            data,
            num_rows,
            num_cols,
        }
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Returns a slice of the specified row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[R] {
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// Matrix-vector multiply: y = A * x.
    ///
    /// # Panics
    ///
    /// Panics if `x` has the wrong length.
    #[must_use]
    pub fn mv(&self, x: &[R]) -> Vec<R> {
        assert_eq!(x.len(), self.num_cols);
        (0..self.num_rows)
            .map(|row| {
                self.row(row)
                    .iter()
                    .zip(x)
                    .fold(R::zero(), |acc, (a, b)| acc + a.clone() * b.clone())
            })
            .collect()
    }

    /// Swaps two rows in-place.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        for k in 0..self.num_cols {
            self.data.swap(i * self.num_cols + k, j * self.num_cols + k);
        }
    }

    /// row[target] += scale * row[source].
    pub fn add_scaled_row(&mut self, target: usize, source: usize, scale: &R) {
        for k in 0..self.num_cols {
            let val = self[(source, k)].clone() * scale.clone();
            self[(target, k)] = self[(target, k)].clone() + val;
        }
    }

    /// Scales a row by a scalar.
    pub fn scale_row(&mut self, row: usize, scale: &R) {
        for k in 0..self.num_cols {
            self[(row, k)] = self[(row, k)].clone() * scale.clone();
        }
    }
}

impl<R: Field> DenseMatrix<R> {
    /// Reduced row echelon form by Gauss-Jordan elimination.
    ///
    /// Returns the reduced matrix and its pivot columns, one per nonzero row.
    #[must_use]
    pub fn rref(&self) -> (Self, Vec<usize>) {
        let mut m = self.clone();
        let mut pivots = Vec::new();
        let mut pivot_row = 0;

        for col in 0..m.num_cols {
            if pivot_row == m.num_rows {
                break;
            }
            let Some(found) = (pivot_row..m.num_rows).find(|&r| !m[(r, col)].is_zero()) else {
                continue;
            };
            m.swap_rows(pivot_row, found);

            if let Some(inv) = m[(pivot_row, col)].inv() {
                m.scale_row(pivot_row, &inv);
            }
            for row in 0..m.num_rows {
                if row != pivot_row && !m[(row, col)].is_zero() {
                    let factor = -m[(row, col)].clone();
                    m.add_scaled_row(row, pivot_row, &factor);
                }
            }

            pivots.push(col);
            pivot_row += 1;
        }

        (m, pivots)
    }

    /// Solves A x = b, setting free variables to zero.
    ///
    /// Returns `None` if the system is inconsistent.
    ///
    /// # Panics
    ///
    /// Panics if `b` has the wrong length.
    #[must_use]
    pub fn solve(&self, b: &[R]) -> Option<Vec<R>> {
        assert_eq!(b.len(), self.num_rows);
        let n = self.num_cols;

        let mut aug = Self::zeros(self.num_rows, n + 1);
        for i in 0..self.num_rows {
            for j in 0..n {
                aug[(i, j)] = self[(i, j)].clone();
            }
            aug[(i, n)] = b[i].clone();
        }

        let (rref, pivots) = aug.rref();
        if pivots.last() == Some(&n) {
            return None;
        }

        let mut x = vec![R::zero(); n];
        for (row, &col) in pivots.iter().enumerate() {
            x[col] = rref[(row, n)].clone();
        }
        Some(x)
    }
}

impl<R> Index<(usize, usize)> for DenseMatrix<R> {
    type Output = R;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.num_cols + col]
    }
}

impl<R> IndexMut<(usize, usize)> for DenseMatrix<R> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row * self.num_cols + col]
    }
}
