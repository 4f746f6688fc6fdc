use crate::matrix::Matrix;

/// How an operand is read during a GEMM call.
///
/// `ConjTrans` is carried for interface completeness but is not
/// implemented: requesting it aborts rather than silently degrading to a
/// plain transpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transpose {
    /// Read the operand as stored.
    NoTrans,
    /// Read the operand with rows and columns swapped.
    Trans,
    /// Conjugate transpose; unsupported, always panics when applied.
    ConjTrans,
}

impl Transpose {
    /// Dimensions of `op(m)`: `(rows, cols)` as stored for `NoTrans`,
    /// swapped for `Trans`.
    ///
    /// # Panics
    /// Panics for `ConjTrans`.
    pub fn op_dims<M: Matrix>(self, m: &M) -> (usize, usize) {
        match self {
            Transpose::NoTrans => (m.rows(), m.cols()),
            Transpose::Trans => (m.cols(), m.rows()),
            Transpose::ConjTrans => unimplemented!("conjugate transpose is not supported"),
        }
    }
}

/// Element `(i, j)` of `op(m)` under the given transpose mode.
///
/// A pure indirection over the operand's storage: `m.get(i, j)` for
/// `NoTrans`, `m.get(j, i)` for `Trans`. Nothing is copied or rearranged.
///
/// # Panics
/// Panics for `Transpose::ConjTrans`.
pub fn transposed_get<M: Matrix>(trans: Transpose, m: &M, i: usize, j: usize) -> M::Elem {
    match trans {
        Transpose::NoTrans => m.get(i, j),
        Transpose::Trans => m.get(j, i),
        Transpose::ConjTrans => unimplemented!("conjugate transpose is not supported"),
    }
}
