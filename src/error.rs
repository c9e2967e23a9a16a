//! Error type shared by [`CircularDeque`](crate::CircularDeque) and its cursor.

use core::fmt;

/// Failures reported by deque and cursor operations.
///
/// Every operation validates before mutating, so an `Err` always leaves the
/// deque exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DequeError {
    /// A positional index did not address a live element.
    InvalidArgument { index: usize },
    /// The deque holds no elements.
    EmptyCollection,
    /// The cursor has already yielded every element.
    NoMoreElements,
    /// `remove` was called on a cursor with no element pending removal.
    InvalidState,
}

impl fmt::Display for DequeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DequeError::InvalidArgument { index } => {
                write!(f, "slot {index} does not hold a live element")
            }
            DequeError::EmptyCollection => f.write_str("deque is empty"),
            DequeError::NoMoreElements => f.write_str("cursor has no more elements"),
            DequeError::InvalidState => {
                f.write_str("no element to remove: call next() before remove()")
            }
        }
    }
}

impl std::error::Error for DequeError {}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, DequeError>;
