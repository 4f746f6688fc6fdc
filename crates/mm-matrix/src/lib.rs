//! `mm-matrix` - Fixed-size and runtime-sized dense matrices for minimat.
//!
//! This crate provides:
//! - `FixedMatrix<T, M, N>`, a row-major matrix with const-generic dimensions
//! - `DynMatrix<T>`, a row-major matrix with runtime dimensions
//! - `MatrixError` for construction-time validation
//!
//! Both containers implement the `mm_gemm` capability traits, so either can
//! appear in any operand position of `mm_gemm::gemm`.

pub mod dynamic;
pub mod error;
pub mod fixed;

// Re-export primary types at the crate root for convenience.
pub use dynamic::DynMatrix;
pub use error::{MatrixError, Result};
pub use fixed::FixedMatrix;
