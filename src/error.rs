use thiserror::Error;

/// Errors raised by factorization and the operations on it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Elimination met an exactly zero pivot. `column` is the first
    /// column, in elimination order, where that happened.
    #[error("matrix is singular: zero pivot in column {column}")]
    Singular { column: usize },

    /// An elimination, substitution or determinant step produced a value
    /// the element type cannot hold: an inexact integer quotient or an
    /// integer overflow.
    #[error("value at ({row}, {column}) is not representable in the element type")]
    NonRepresentable { row: usize, column: usize },

    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
