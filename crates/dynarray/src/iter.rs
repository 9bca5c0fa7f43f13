//! Iterators over the logical contents of a [`DynamicArray`].
//!
//! [`Iter`] borrows the array, so the compiler rejects any mutation while
//! an iteration is live. Calling [`DynamicArray::iter`] again starts a
//! fresh pass from index 0.

use std::iter::FusedIterator;
use std::slice;
use std::vec;

use crate::array::DynamicArray;

/// Borrowing iterator yielding elements `[0, len)` by value, in index order.
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    inner: slice::Iter<'a, i32>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(live: &'a [i32]) -> Self {
        Self { inner: live.iter() }
    }

    /// The elements not yet yielded.
    pub fn as_slice(&self) -> &'a [i32] {
        self.inner.as_slice()
    }
}

impl Iterator for Iter<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<i32> {
        self.inner.next_back().copied()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

/// Owning iterator returned by `DynamicArray::into_iter`.
///
/// Unused slots beyond the logical length are dropped before iteration
/// starts and are never yielded.
#[derive(Clone, Debug)]
pub struct IntoIter {
    inner: vec::IntoIter<i32>,
}

impl IntoIter {
    pub(crate) fn new(live: Vec<i32>) -> Self {
        Self {
            inner: live.into_iter(),
        }
    }
}

impl Iterator for IntoIter {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for IntoIter {
    fn next_back(&mut self) -> Option<i32> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for IntoIter {}

impl FusedIterator for IntoIter {}

impl<'a> IntoIterator for &'a DynamicArray {
    type Item = i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl IntoIterator for DynamicArray {
    type Item = i32;
    type IntoIter = IntoIter;

    fn into_iter(self) -> IntoIter {
        IntoIter::new(self.into_vec())
    }
}
