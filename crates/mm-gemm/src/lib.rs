//! `mm-gemm` - Generic matrix-multiply-and-accumulate core for minimat.
//!
//! This crate provides:
//! - The `Matrix` / `MatrixMut` capability traits the core computes against
//! - A `Transpose` mode and a transposed element accessor
//! - A generic `gemm` implementing `C = alpha * op(A) * op(B) + beta * C`
//!
//! The core is storage-agnostic: any type exposing indexed element access
//! and dimension queries can be multiplied, whether its dimensions are
//! compile-time constants or runtime fields.

pub mod gemm;
pub mod matrix;
pub mod transpose;

// Re-export primary items at the crate root for convenience.
pub use gemm::gemm;
pub use matrix::{Matrix, MatrixMut};
pub use transpose::{transposed_get, Transpose};
