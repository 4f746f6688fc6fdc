use std::ops::{Index, IndexMut};

use mm_gemm::{Matrix, MatrixMut};
use num_traits::{One, Zero};

/// A dense row-major matrix whose dimensions are compile-time constants.
///
/// The dimensions are surfaced to the GEMM core through the runtime
/// `rows`/`cols` queries of the `Matrix` trait, so fixed and runtime-sized
/// operands can mix freely in one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedMatrix<T, const M: usize, const N: usize> {
    data: [[T; N]; M],
}

impl<T, const M: usize, const N: usize> FixedMatrix<T, M, N> {
    /// Create a matrix from a nested row-major array.
    pub fn new(data: [[T; N]; M]) -> Self {
        FixedMatrix { data }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        M
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        N
    }
}

impl<T: Zero + Copy, const M: usize, const N: usize> FixedMatrix<T, M, N> {
    /// Create a zero-filled matrix.
    pub fn zeros() -> Self {
        FixedMatrix {
            data: [[T::zero(); N]; M],
        }
    }
}

impl<T: Zero + One + Copy, const M: usize> FixedMatrix<T, M, M> {
    /// Create an identity matrix (square dimensions only).
    pub fn identity() -> Self {
        let mut data = [[T::zero(); M]; M];
        for (i, row) in data.iter_mut().enumerate() {
            row[i] = T::one();
        }
        FixedMatrix { data }
    }
}

impl<T: Copy, const M: usize, const N: usize> Matrix for FixedMatrix<T, M, N> {
    type Elem = T;

    fn rows(&self) -> usize {
        M
    }

    fn cols(&self) -> usize {
        N
    }

    fn get(&self, i: usize, j: usize) -> T {
        self.data[i][j]
    }
}

impl<T: Copy, const M: usize, const N: usize> MatrixMut for FixedMatrix<T, M, N> {
    fn set(&mut self, i: usize, j: usize, value: T) {
        self.data[i][j] = value;
    }
}

impl<T, const M: usize, const N: usize> Index<(usize, usize)> for FixedMatrix<T, M, N> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.data[i][j]
    }
}

impl<T, const M: usize, const N: usize> IndexMut<(usize, usize)> for FixedMatrix<T, M, N> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        &mut self.data[i][j]
    }
}
