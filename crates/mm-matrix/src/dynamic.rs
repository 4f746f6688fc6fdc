use std::ops::{Index, IndexMut};

use mm_gemm::{Matrix, MatrixMut};
use num_traits::Zero;

use crate::error::{MatrixError, Result};

/// A dense row-major matrix whose dimensions are determined at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynMatrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> DynMatrix<T> {
    /// Create a matrix from row-major data.
    ///
    /// # Errors
    /// Returns an error if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(MatrixError::DataLength {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(DynMatrix { rows, cols, data })
    }

    /// Create a matrix from nested rows.
    ///
    /// The column count is taken from the first row; an empty outer vector
    /// yields a 0x0 matrix.
    ///
    /// # Errors
    /// Returns an error if any row's length differs from the first row's.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(n_rows * n_cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n_cols {
                return Err(MatrixError::RaggedRow {
                    row: i,
                    len: row.len(),
                    expected: n_cols,
                });
            }
            data.extend(row);
        }
        Ok(DynMatrix {
            rows: n_rows,
            cols: n_cols,
            data,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the underlying row-major data.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    // A bad `j` with a small enough `i` would otherwise alias a neighboring
    // row through `i * cols + j`, so both indices are checked explicitly.
    fn offset(&self, i: usize, j: usize) -> usize {
        assert!(
            i < self.rows && j < self.cols,
            "index ({}, {}) out of range for {}x{} matrix",
            i,
            j,
            self.rows,
            self.cols
        );
        i * self.cols + j
    }
}

impl<T: Zero + Clone> DynMatrix<T> {
    /// Create a zero-filled matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        DynMatrix {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        }
    }
}

impl<T: Copy> Matrix for DynMatrix<T> {
    type Elem = T;

    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn get(&self, i: usize, j: usize) -> T {
        self.data[self.offset(i, j)]
    }
}

impl<T: Copy> MatrixMut for DynMatrix<T> {
    fn set(&mut self, i: usize, j: usize, value: T) {
        let off = self.offset(i, j);
        self.data[off] = value;
    }
}

impl<T> Index<(usize, usize)> for DynMatrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.data[self.offset(i, j)]
    }
}

impl<T> IndexMut<(usize, usize)> for DynMatrix<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        let off = self.offset(i, j);
        &mut self.data[off]
    }
}
