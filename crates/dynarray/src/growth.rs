//! Buffer growth policy.
//!
//! Capacity doubles on exhaustion, with a floor of
//! [`ArrayConfig::MIN_GROWTH_CAPACITY`] so that a zero-capacity array can
//! still accept its first element. Doubling keeps the amortised cost of an
//! append constant. Capacity never shrinks.

use std::collections::TryReserveError;

use crate::config::ArrayConfig;
use crate::error::ArrayError;

/// Capacity to grow to from `current`.
///
/// Returns `max(1, current * 2)`, clamped to [`ArrayConfig::MAX_CAPACITY`].
/// Fails with [`ArrayError::CapacityOverflow`] if `current` is already at
/// the maximum.
pub fn next_capacity(current: usize) -> Result<usize, ArrayError> {
    if current >= ArrayConfig::MAX_CAPACITY {
        return Err(ArrayError::CapacityOverflow { capacity: current });
    }
    let doubled = current
        .checked_mul(2)
        .unwrap_or(ArrayConfig::MAX_CAPACITY)
        .min(ArrayConfig::MAX_CAPACITY);
    Ok(doubled.max(ArrayConfig::MIN_GROWTH_CAPACITY))
}

/// Allocate a zero-filled buffer of exactly `capacity` slots.
///
/// Allocator failure is reported instead of aborting the process.
pub(crate) fn zeroed(capacity: usize) -> Result<Vec<i32>, TryReserveError> {
    let mut data = Vec::new();
    data.try_reserve_exact(capacity)?;
    data.resize(capacity, 0);
    Ok(data)
}

/// Allocate a zero-filled buffer of `capacity` slots holding a copy of `live`.
///
/// `live.len()` must not exceed `capacity`. Fails with
/// [`ArrayError::CapacityOverflow`] if the allocation cannot be satisfied.
pub(crate) fn reallocate(live: &[i32], capacity: usize) -> Result<Vec<i32>, ArrayError> {
    debug_assert!(live.len() <= capacity);
    let mut data = zeroed(capacity).map_err(|_| ArrayError::CapacityOverflow {
        capacity: live.len(),
    })?;
    data[..live.len()].copy_from_slice(live);
    Ok(data)
}
