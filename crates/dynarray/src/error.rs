//! Array-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during dynamic array operations.
///
/// Every fallible operation validates its input before touching the
/// buffer, so an `Err` always leaves the array exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// A constructor was given an argument it cannot honour
    /// (e.g. a negative capacity).
    InvalidArgument {
        /// Description of the rejected argument.
        reason: String,
    },
    /// An index outside the logical range `[0, len)`.
    IndexOutOfRange {
        /// The index that was requested.
        index: usize,
        /// The logical length at the time of the request.
        len: usize,
    },
    /// Growing the buffer would exceed [`ArrayConfig::MAX_CAPACITY`].
    ///
    /// [`ArrayConfig::MAX_CAPACITY`]: crate::config::ArrayConfig::MAX_CAPACITY
    CapacityOverflow {
        /// Capacity of the buffer that could not grow.
        capacity: usize,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { reason } => {
                write!(f, "invalid argument: {reason}")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index out of range: index {index}, length {len}")
            }
            Self::CapacityOverflow { capacity } => {
                write!(f, "capacity overflow: cannot grow beyond {capacity} elements")
            }
        }
    }
}

impl Error for ArrayError {}
