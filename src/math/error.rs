use thiserror::Error;

pub type MathResult<T> = Result<T, MathError>;

/// Errors reported by the checked accessors of the vector and matrix types.
///
/// Numeric degeneracy (division by zero, zero-length normalize, singular
/// projections) is never reported here; those produce IEEE inf/NaN or leave
/// the value unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    #[error("component index {index} out of range for a vector of size {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("cell ({col}, {row}) out of range for a {dim}x{dim} matrix")]
    CellOutOfRange { col: usize, row: usize, dim: usize },

    #[error("expected {expected} components, found {found}")]
    LengthMismatch { expected: usize, found: usize },
}

impl MathError {
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    pub fn cell_out_of_range(col: usize, row: usize, dim: usize) -> Self {
        Self::CellOutOfRange { col, row, dim }
    }
}
