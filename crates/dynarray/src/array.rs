//! The resizable `i32` array.
//!
//! A [`DynamicArray`] owns one zero-initialised `Vec<i32>` whose length is
//! the array's *capacity*, plus a separate logical length. Slots in
//! `[0, len)` hold user data; slots in `[len, capacity)` are spare and
//! never observable through the public API.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::config::ArrayConfig;
use crate::error::ArrayError;
use crate::growth;
use crate::iter::Iter;
use crate::metrics::ArrayMetrics;

/// A growable, contiguous array of `i32` with an explicit capacity.
///
/// Appends double the buffer when it is full; removals shift the tail left
/// and never release storage. Invariant: `len <= capacity` in every
/// reachable state.
///
/// Equality compares logical contents only. Capacity and metrics are
/// ignored, so `[1, 2]` with capacity 2 equals `[1, 2]` with capacity 8.
#[derive(Clone)]
pub struct DynamicArray {
    /// Backing storage. `data.len()` is the capacity.
    data: Vec<i32>,
    /// Number of logically valid elements at the front of `data`.
    len: usize,
    metrics: ArrayMetrics,
}

impl DynamicArray {
    /// Create an empty array with [`ArrayConfig::DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::from_buffer(vec![0; ArrayConfig::DEFAULT_CAPACITY], 0)
    }

    /// Create an empty array with room for `capacity` elements.
    ///
    /// Fails with [`ArrayError::InvalidArgument`] if `capacity` is negative,
    /// larger than [`ArrayConfig::MAX_CAPACITY`], or cannot be allocated.
    pub fn with_capacity(capacity: i64) -> Result<Self, ArrayError> {
        Self::from_config(&ArrayConfig::new(capacity)?)
    }

    /// Create an empty array sized by `config`.
    ///
    /// The config is re-checked here since its fields are public. Fails with
    /// [`ArrayError::InvalidArgument`] if `initial_capacity` exceeds
    /// [`ArrayConfig::MAX_CAPACITY`] or the allocator cannot provide it.
    pub fn from_config(config: &ArrayConfig) -> Result<Self, ArrayError> {
        let capacity = config.initial_capacity;
        if capacity > ArrayConfig::MAX_CAPACITY {
            return Err(ArrayError::InvalidArgument {
                reason: format!(
                    "capacity {capacity} exceeds maximum of {}",
                    ArrayConfig::MAX_CAPACITY
                ),
            });
        }
        let data = growth::zeroed(capacity).map_err(|err| ArrayError::InvalidArgument {
            reason: format!("cannot allocate capacity {capacity}: {err}"),
        })?;
        Ok(Self::from_buffer(data, 0))
    }

    /// Create an array holding a copy of `values`, with
    /// `capacity == len == values.len()`.
    pub fn from_slice(values: &[i32]) -> Self {
        Self::from(values.to_vec())
    }

    /// Number of elements in the array.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots in the backing buffer.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Memory usage of the backing buffer in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.data.len() * std::mem::size_of::<i32>()
    }

    /// Reallocation counters accumulated since construction.
    pub fn metrics(&self) -> ArrayMetrics {
        self.metrics
    }

    /// The logical contents as a slice.
    pub fn as_slice(&self) -> &[i32] {
        &self.data[..self.len]
    }

    /// The logical contents as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        &mut self.data[..self.len]
    }

    /// Read the element at `index`.
    pub fn get(&self, index: usize) -> Result<i32, ArrayError> {
        self.check_index(index)?;
        Ok(self.data[index])
    }

    /// Overwrite the element at `index` with `value`.
    pub fn set(&mut self, index: usize, value: i32) -> Result<(), ArrayError> {
        self.check_index(index)?;
        self.data[index] = value;
        Ok(())
    }

    /// Append `value`, growing the buffer first if it is full.
    ///
    /// Fails only if the buffer is already at [`ArrayConfig::MAX_CAPACITY`];
    /// the array is unchanged in that case.
    pub fn try_add_element(&mut self, value: i32) -> Result<(), ArrayError> {
        if self.len == self.data.len() {
            self.grow()?;
        }
        self.data[self.len] = value;
        self.len += 1;
        Ok(())
    }

    /// Append `value`, growing the buffer first if it is full.
    ///
    /// # Panics
    ///
    /// Panics if the buffer cannot grow past [`ArrayConfig::MAX_CAPACITY`].
    /// Use [`try_add_element`](Self::try_add_element) to handle that case.
    pub fn add_element(&mut self, value: i32) {
        if let Err(err) = self.try_add_element(value) {
            panic!("{err}");
        }
    }

    /// Remove the element at `index`, shifting later elements left by one.
    ///
    /// Returns the removed value. Capacity is unchanged.
    pub fn remove_index(&mut self, index: usize) -> Result<i32, ArrayError> {
        self.check_index(index)?;
        let removed = self.data[index];
        self.data.copy_within(index + 1..self.len, index);
        self.len -= 1;
        // Vacated slot goes back to the zero state of fresh capacity.
        self.data[self.len] = 0;
        Ok(removed)
    }

    /// Remove the first element equal to `value`.
    ///
    /// Returns `false` (and leaves the array untouched) if no element matches.
    pub fn remove_element(&mut self, value: i32) -> bool {
        match self.index_of(value) {
            Some(index) => self.remove_index(index).is_ok(),
            None => false,
        }
    }

    /// Index of the first element equal to `value`, by linear scan.
    pub fn index_of(&self, value: i32) -> Option<usize> {
        self.as_slice().iter().position(|&v| v == value)
    }

    /// Whether any element equals `value`.
    pub fn contains(&self, value: i32) -> bool {
        self.index_of(value).is_some()
    }

    /// Reverse the logical contents in place.
    pub fn reverse(&mut self) {
        self.as_mut_slice().reverse();
    }

    /// Search for `key` in an array sorted in ascending order.
    ///
    /// Returns the index of a matching element, or `None` if there is none.
    /// Sortedness is the caller's responsibility and is not checked; on an
    /// unsorted array the result is meaningless but the call is still safe.
    ///
    /// With duplicate keys the returned index is whichever match the
    /// midpoint probe reaches first, not necessarily the first or last
    /// occurrence.
    pub fn binary_search(&self, key: i32) -> Option<usize> {
        let live = self.as_slice();
        let (mut lo, mut hi) = (0, live.len());
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            match live[mid].cmp(&key) {
                std::cmp::Ordering::Equal => return Some(mid),
                std::cmp::Ordering::Less => lo = mid + 1,
                std::cmp::Ordering::Greater => hi = mid,
            }
        }
        None
    }

    /// Sort the logical contents in ascending order.
    pub fn sort(&mut self) {
        self.as_mut_slice().sort_unstable();
    }

    /// Iterate over the logical contents in index order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.as_slice())
    }

    /// Consume the array, returning its logical contents.
    pub fn into_vec(mut self) -> Vec<i32> {
        self.data.truncate(self.len);
        self.data
    }

    fn from_buffer(data: Vec<i32>, len: usize) -> Self {
        debug_assert!(len <= data.len());
        Self {
            data,
            len,
            metrics: ArrayMetrics::default(),
        }
    }

    fn check_index(&self, index: usize) -> Result<(), ArrayError> {
        if index < self.len {
            Ok(())
        } else {
            Err(ArrayError::IndexOutOfRange {
                index,
                len: self.len,
            })
        }
    }

    fn grow(&mut self) -> Result<(), ArrayError> {
        let new_capacity = growth::next_capacity(self.data.len())?;
        self.data = growth::reallocate(self.as_slice(), new_capacity)?;
        self.metrics.record_growth(self.len);
        Ok(())
    }
}

impl Default for DynamicArray {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<i32>> for DynamicArray {
    fn from(values: Vec<i32>) -> Self {
        let len = values.len();
        Self::from_buffer(values, len)
    }
}

impl From<&[i32]> for DynamicArray {
    fn from(values: &[i32]) -> Self {
        Self::from_slice(values)
    }
}

impl<const N: usize> From<[i32; N]> for DynamicArray {
    fn from(values: [i32; N]) -> Self {
        Self::from(values.to_vec())
    }
}

impl FromIterator<i32> for DynamicArray {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl Extend<i32> for DynamicArray {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for value in iter {
            self.add_element(value);
        }
    }
}

impl AsRef<[i32]> for DynamicArray {
    fn as_ref(&self) -> &[i32] {
        self.as_slice()
    }
}

impl Index<usize> for DynamicArray {
    type Output = i32;

    /// # Panics
    ///
    /// Panics if `index >= len`, even when the slot exists in the buffer.
    fn index(&self, index: usize) -> &i32 {
        if let Err(err) = self.check_index(index) {
            panic!("{err}");
        }
        &self.data[index]
    }
}

impl IndexMut<usize> for DynamicArray {
    /// # Panics
    ///
    /// Panics if `index >= len`, even when the slot exists in the buffer.
    fn index_mut(&mut self, index: usize) -> &mut i32 {
        if let Err(err) = self.check_index(index) {
            panic!("{err}");
        }
        &mut self.data[index]
    }
}

impl PartialEq for DynamicArray {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for DynamicArray {}

impl PartialEq<[i32]> for DynamicArray {
    fn eq(&self, other: &[i32]) -> bool {
        self.as_slice() == other
    }
}

impl<const N: usize> PartialEq<[i32; N]> for DynamicArray {
    fn eq(&self, other: &[i32; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl PartialEq<Vec<i32>> for DynamicArray {
    fn eq(&self, other: &Vec<i32>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

/// Renders as `[1, 2, 3]`; an empty array renders as `[]`.
impl fmt::Display for DynamicArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

impl fmt::Debug for DynamicArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
