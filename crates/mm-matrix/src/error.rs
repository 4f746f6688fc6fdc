use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("data length {len} does not match a {rows}x{cols} matrix")]
    DataLength {
        rows: usize,
        cols: usize,
        len: usize,
    },
    #[error("row {row} has {len} elements, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
}

pub type Result<T> = std::result::Result<T, MatrixError>;
