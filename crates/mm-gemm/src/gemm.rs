use std::ops::{Add, Mul};

use num_traits::Zero;

use crate::matrix::{Matrix, MatrixMut};
use crate::transpose::{transposed_get, Transpose};

/// General matrix multiply-and-accumulate: `C = alpha * op(A) * op(B) + beta * C`.
///
/// Works against any `Matrix` implementors, so one instantiation path covers
/// fixed-size operands (dimensions as const parameters) and another covers
/// runtime-sized operands, with the same accumulation loop. Alpha and beta
/// may be of different types than the matrix elements; per-step products are
/// formed in the A-element x B-element domain and added into an accumulator
/// of C's element type. The accumulator is deliberately not widened beyond
/// C's element type, so accumulation precision matches C exactly.
///
/// Iteration is row-major over (i, j, k), so repeated calls with identical
/// inputs produce bit-identical results even for non-associative element
/// types such as floats.
///
/// Only `c` is written; `a` and `b` are read-only. The caller must ensure
/// exclusive access to `c` for the duration of the call (within one process
/// the `&mut` borrow already enforces this). Runs to completion in
/// O(M*N*P) multiply-adds with no allocation.
///
/// # Panics
/// All checks run before the first write to `c`:
/// - either transpose mode is `Transpose::ConjTrans` (not implemented)
/// - op(A)'s row count differs from C's
/// - op(A)'s column count differs from op(B)'s row count
/// - op(B)'s column count differs from C's
pub fn gemm<Alpha, Beta, A, B, C>(
    trans_a: Transpose,
    trans_b: Transpose,
    alpha: Alpha,
    a: &A,
    b: &B,
    beta: Beta,
    c: &mut C,
) where
    A: Matrix,
    B: Matrix,
    C: MatrixMut,
    A::Elem: Mul<B::Elem>,
    C::Elem: Zero + Add<<A::Elem as Mul<B::Elem>>::Output, Output = C::Elem>,
    Alpha: Mul<C::Elem, Output = C::Elem> + Copy,
    Beta: Mul<C::Elem, Output = C::Elem> + Copy,
{
    // op_dims rejects ConjTrans before C is touched.
    let (a_rows, n) = trans_a.op_dims(a);
    let (b_rows, b_cols) = trans_b.op_dims(b);

    let m = c.rows();
    let p = c.cols();
    assert_eq!(
        a_rows, m,
        "gemm: op(A) has {} rows but C has {}",
        a_rows, m
    );
    assert_eq!(
        n, b_rows,
        "gemm: op(A) is {}x{} but op(B) has {} rows",
        m, n, b_rows
    );
    assert_eq!(
        b_cols, p,
        "gemm: op(B) has {} columns but C has {}",
        b_cols, p
    );

    for i in 0..m {
        for j in 0..p {
            let mut acc = C::Elem::zero();
            for k in 0..n {
                let aik = transposed_get(trans_a, a, i, k);
                let bkj = transposed_get(trans_b, b, k, j);
                acc = acc + aik * bkj;
            }
            c.set(i, j, alpha * acc + beta * c.get(i, j));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal runtime-sized matrix for exercising the core without pulling
    /// in a container crate.
    #[derive(Debug, Clone, PartialEq)]
    struct Mat {
        rows: usize,
        cols: usize,
        data: Vec<f64>,
    }

    impl Mat {
        fn new(rows: usize, cols: usize, data: Vec<f64>) -> Self {
            assert_eq!(data.len(), rows * cols);
            Mat { rows, cols, data }
        }
    }

    impl Matrix for Mat {
        type Elem = f64;

        fn rows(&self) -> usize {
            self.rows
        }

        fn cols(&self) -> usize {
            self.cols
        }

        fn get(&self, i: usize, j: usize) -> f64 {
            assert!(i < self.rows && j < self.cols);
            self.data[i * self.cols + j]
        }
    }

    impl MatrixMut for Mat {
        fn set(&mut self, i: usize, j: usize, value: f64) {
            assert!(i < self.rows && j < self.cols);
            self.data[i * self.cols + j] = value;
        }
    }

    #[test]
    fn test_plain_product() {
        let a = Mat::new(2, 2, vec![1.0, 2.0, 3.0, 4.0]);
        let b = Mat::new(2, 2, vec![5.0, 6.0, 7.0, 8.0]);
        let mut c = Mat::new(2, 2, vec![0.0; 4]);
        gemm(Transpose::NoTrans, Transpose::NoTrans, 1.0, &a, &b, 0.0, &mut c);
        assert_eq!(c.data, vec![19.0, 22.0, 43.0, 50.0]);
    }

    #[test]
    fn test_rectangular_product() {
        // [2x3] * [3x2] = [2x2]
        let a = Mat::new(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let b = Mat::new(3, 2, vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0]);
        let mut c = Mat::new(2, 2, vec![0.0; 4]);
        gemm(Transpose::NoTrans, Transpose::NoTrans, 1.0, &a, &b, 0.0, &mut c);
        assert_eq!(c.data, vec![58.0, 64.0, 139.0, 154.0]);
    }

    #[test]
    fn test_trans_a_matches_explicit_transpose() {
        // A stored as [[1,3],[2,4]] read transposed is [[1,2],[3,4]].
        let a = Mat::new(2, 2, vec![1.0, 3.0, 2.0, 4.0]);
        let b = Mat::new(2, 2, vec![5.0, 6.0, 7.0, 8.0]);
        let mut c = Mat::new(2, 2, vec![0.0; 4]);
        gemm(Transpose::Trans, Transpose::NoTrans, 1.0, &a, &b, 0.0, &mut c);
        assert_eq!(c.data, vec![19.0, 22.0, 43.0, 50.0]);
    }

    #[test]
    fn test_trans_b() {
        // B stored as [[5,7],[6,8]] read transposed is [[5,6],[7,8]].
        let a = Mat::new(2, 2, vec![1.0, 2.0, 3.0, 4.0]);
        let b = Mat::new(2, 2, vec![5.0, 7.0, 6.0, 8.0]);
        let mut c = Mat::new(2, 2, vec![0.0; 4]);
        gemm(Transpose::NoTrans, Transpose::Trans, 1.0, &a, &b, 0.0, &mut c);
        assert_eq!(c.data, vec![19.0, 22.0, 43.0, 50.0]);
    }

    #[test]
    fn test_alpha_zero_beta_one_is_identity_on_c() {
        let a = Mat::new(2, 2, vec![9.0, 9.0, 9.0, 9.0]);
        let b = Mat::new(2, 2, vec![9.0, 9.0, 9.0, 9.0]);
        let mut c = Mat::new(2, 2, vec![1.0, 2.0, 3.0, 4.0]);
        gemm(Transpose::NoTrans, Transpose::NoTrans, 0.0, &a, &b, 1.0, &mut c);
        assert_eq!(c.data, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_accumulate_into_c() {
        // C = 2 * I * B + 3 * C
        let a = Mat::new(2, 2, vec![1.0, 0.0, 0.0, 1.0]);
        let b = Mat::new(2, 2, vec![1.0, 2.0, 3.0, 4.0]);
        let mut c = Mat::new(2, 2, vec![1.0, 1.0, 1.0, 1.0]);
        gemm(Transpose::NoTrans, Transpose::NoTrans, 2.0, &a, &b, 3.0, &mut c);
        assert_eq!(c.data, vec![5.0, 7.0, 9.0, 11.0]);
    }

    #[test]
    fn test_fractional_scaling() {
        use approx::assert_relative_eq;

        let a = Mat::new(1, 2, vec![0.3, 0.7]);
        let b = Mat::new(2, 1, vec![0.11, 0.19]);
        let mut c = Mat::new(1, 1, vec![10.0]);
        gemm(Transpose::NoTrans, Transpose::NoTrans, 0.5, &a, &b, 0.25, &mut c);
        // 0.5 * (0.3*0.11 + 0.7*0.19) + 0.25 * 10.0
        assert_relative_eq!(c.get(0, 0), 0.5 * 0.166 + 2.5, max_relative = 1e-12);
    }

    #[test]
    fn test_deterministic_across_calls() {
        let a = Mat::new(2, 3, vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6]);
        let b = Mat::new(3, 2, vec![0.7, 0.8, 0.9, 1.0, 1.1, 1.2]);
        let mut c1 = Mat::new(2, 2, vec![0.0; 4]);
        let mut c2 = Mat::new(2, 2, vec![0.0; 4]);
        gemm(Transpose::NoTrans, Transpose::NoTrans, 1.0, &a, &b, 0.0, &mut c1);
        gemm(Transpose::NoTrans, Transpose::NoTrans, 1.0, &a, &b, 0.0, &mut c2);
        // Bit-identical, not merely approximately equal.
        assert_eq!(c1, c2);
    }

    #[test]
    #[should_panic(expected = "op(B) has 2 rows")]
    fn test_inner_dimension_mismatch_panics() {
        // A is 2x3, B is 2x2: inner dimensions 3 vs 2.
        let a = Mat::new(2, 3, vec![0.0; 6]);
        let b = Mat::new(2, 2, vec![0.0; 4]);
        let mut c = Mat::new(2, 2, vec![0.0; 4]);
        gemm(Transpose::NoTrans, Transpose::NoTrans, 1.0, &a, &b, 0.0, &mut c);
    }

    #[test]
    fn test_mismatch_leaves_c_untouched() {
        let a = Mat::new(2, 3, vec![0.0; 6]);
        let b = Mat::new(2, 2, vec![0.0; 4]);
        let mut c = Mat::new(2, 2, vec![1.0, 2.0, 3.0, 4.0]);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            gemm(Transpose::NoTrans, Transpose::NoTrans, 1.0, &a, &b, 0.0, &mut c);
        }));
        assert!(result.is_err());
        assert_eq!(c.data, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    #[should_panic(expected = "op(A) has")]
    fn test_output_row_mismatch_panics() {
        let a = Mat::new(3, 2, vec![0.0; 6]);
        let b = Mat::new(2, 2, vec![0.0; 4]);
        let mut c = Mat::new(2, 2, vec![0.0; 4]);
        gemm(Transpose::NoTrans, Transpose::NoTrans, 1.0, &a, &b, 0.0, &mut c);
    }

    #[test]
    #[should_panic(expected = "not supported")]
    fn test_conj_trans_rejected() {
        let a = Mat::new(2, 2, vec![0.0; 4]);
        let b = Mat::new(2, 2, vec![0.0; 4]);
        let mut c = Mat::new(2, 2, vec![0.0; 4]);
        gemm(Transpose::ConjTrans, Transpose::NoTrans, 1.0, &a, &b, 0.0, &mut c);
    }
}
