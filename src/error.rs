use std::fmt;

use thiserror::Error;

/// Row/column dimensions of a matrix (vectors are `len x 1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    #[inline]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Shape of a column vector of length `len`.
    #[inline]
    pub const fn column(len: usize) -> Self {
        Self { rows: len, cols: 1 }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    /// Two operands (or a vector and a layer) disagree on a dimension.
    ///
    /// For network calls `left` is the shape the layer expects and `right` is what was passed.
    #[error("dimension mismatch in {op}: {left} vs {right}")]
    DimensionMismatch {
        op: &'static str,
        left: Shape,
        right: Shape,
    },
    #[error("invalid shape: {0}")]
    InvalidShape(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("invalid data: {0}")]
    InvalidData(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    #[inline]
    pub(crate) fn mismatch(op: &'static str, left: Shape, right: Shape) -> Self {
        Error::DimensionMismatch { op, left, right }
    }
}
