use thiserror::Error;

/// Failures reported by container operations.
///
/// Precondition violations (full, empty, bad position, unpositioned cursor) are
/// reported here instead of corrupting state.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("position {position} is out of range for length {len}")]
    OutOfRange { position: usize, len: usize },
    #[error("container is full (capacity {capacity})")]
    Full { capacity: usize },
    #[error("container is empty")]
    Empty,
    #[error("cursor is not positioned on this tree")]
    InvalidCursorState,
    #[error("allocation failed")]
    AllocationFailed,
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<std::collections::TryReserveError> for Error {
    fn from(_: std::collections::TryReserveError) -> Self {
        Error::AllocationFailed
    }
}
