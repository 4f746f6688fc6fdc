/// Read-only capability interface for a dense, row-major-addressable matrix.
///
/// Implementors with compile-time dimensions return their const parameters
/// from `rows`/`cols`; runtime-sized implementors return stored fields. The
/// GEMM core never distinguishes the two.
///
/// `get` must be O(1) with no side effects. Out-of-range indices are a
/// programmer error and should panic.
pub trait Matrix {
    /// Scalar element type.
    type Elem: Copy;

    /// Number of rows.
    fn rows(&self) -> usize;

    /// Number of columns.
    fn cols(&self) -> usize;

    /// Element at row `i`, column `j`.
    fn get(&self, i: usize, j: usize) -> Self::Elem;
}

/// Write capability for the output matrix of a GEMM call.
pub trait MatrixMut: Matrix {
    /// Overwrite the element at row `i`, column `j`.
    fn set(&mut self, i: usize, j: usize, value: Self::Elem);
}
