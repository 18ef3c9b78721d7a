use thiserror::Error;

/// Rejected range arguments of the checked entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SortError {
    #[error("range start {left} is past range end {right}")]
    InvertedRange { left: usize, right: usize },
    #[error("index {index} is out of bounds for a sequence of length {len}")]
    OutOfBounds { index: usize, len: usize },
}

/// Checks that the inclusive range `[left, right]` lies within a sequence of length `len`.
pub(crate) fn check_range(len: usize, left: usize, right: usize) -> Result<(), SortError> {
    if left > right {
        return Err(SortError::InvertedRange { left, right });
    }

    if right >= len {
        return Err(SortError::OutOfBounds { index: right, len });
    }

    Ok(())
}
