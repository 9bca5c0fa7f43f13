//! Array configuration parameters.

use crate::error::ArrayError;

/// Configuration for a [`DynamicArray`](crate::DynamicArray).
///
/// Controls the size of the initial backing buffer. [`ArrayConfig::new`]
/// validates the request and `DynamicArray::from_config` checks it again,
/// so a hand-built config cannot bypass the limit. The growth policy itself
/// is fixed (see [`crate::growth`]).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Number of `i32` slots allocated up front.
    ///
    /// Default: 8. Must not exceed [`ArrayConfig::MAX_CAPACITY`].
    pub initial_capacity: usize,
}

impl ArrayConfig {
    /// Default initial capacity.
    pub const DEFAULT_CAPACITY: usize = 8;

    /// Capacity a zero-sized buffer grows to on its first append.
    pub const MIN_GROWTH_CAPACITY: usize = 1;

    /// Largest element count whose byte size still fits in `isize`.
    pub const MAX_CAPACITY: usize = isize::MAX as usize / std::mem::size_of::<i32>();

    /// Create a config for the requested capacity.
    ///
    /// The capacity is taken as a signed value so that callers passing
    /// through untrusted sizes get an error instead of a wrapped `usize`.
    pub fn new(capacity: i64) -> Result<Self, ArrayError> {
        if capacity < 0 {
            return Err(ArrayError::InvalidArgument {
                reason: format!("illegal capacity: {capacity}"),
            });
        }
        let initial_capacity = usize::try_from(capacity)
            .ok()
            .filter(|&c| c <= Self::MAX_CAPACITY)
            .ok_or_else(|| ArrayError::InvalidArgument {
                reason: format!(
                    "capacity {capacity} exceeds maximum of {}",
                    Self::MAX_CAPACITY
                ),
            })?;
        Ok(Self { initial_capacity })
    }

    /// Size of the configured buffer in bytes.
    pub fn buffer_bytes(&self) -> usize {
        self.initial_capacity * std::mem::size_of::<i32>()
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self {
            initial_capacity: Self::DEFAULT_CAPACITY,
        }
    }
}
