use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("division by zero")]
    DivisionByZero,
    #[error("cannot parse {input:?}: {reason}")]
    Parse { input: String, reason: String },
    #[error(transparent)]
    Dimension(#[from] DimensionError),
}

/// Shape violations of a matrix or its accessors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DimensionError {
    #[error("row {row} has {found} entries, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("row index {index} out of bounds for {rows} rows")]
    RowOutOfBounds { index: usize, rows: usize },
    #[error("column index {index} out of bounds for {columns} columns")]
    ColumnOutOfBounds { index: usize, columns: usize },
    #[error("expected {expected} values, found {found}")]
    LengthMismatch { expected: usize, found: usize },
    #[error("expected a {}x{} matrix, found {}x{}", expected.0, expected.1, found.0, found.1)]
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
}
