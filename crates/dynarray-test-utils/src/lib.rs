//! Test utilities for dynarray development.
//!
//! Provides a [`ModelArray`] reference model built directly on `Vec<i32>`
//! and proptest [`strategies`] for generating values and operation
//! scripts. The model is deliberately naive so that differential tests
//! compare the real array against something obviously correct.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod strategies;

pub use strategies::Op;

/// Reference model of the dynamic array.
///
/// Tracks capacity by replaying the doubling rule on a counter instead of
/// managing a buffer, so a divergence in either contents or growth shows
/// up in a differential test.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModelArray {
    values: Vec<i32>,
    capacity: usize,
}

impl ModelArray {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::new(),
            capacity,
        }
    }

    pub fn from_slice(values: &[i32]) -> Self {
        Self {
            values: values.to_vec(),
            capacity: values.len(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn values(&self) -> &[i32] {
        &self.values
    }

    pub fn get(&self, index: usize) -> Option<i32> {
        self.values.get(index).copied()
    }

    /// Returns `false` if `index` is out of range.
    pub fn set(&mut self, index: usize, value: i32) -> bool {
        match self.values.get_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    pub fn add_element(&mut self, value: i32) {
        if self.values.len() == self.capacity {
            self.capacity = (self.capacity * 2).max(1);
        }
        self.values.push(value);
    }

    pub fn remove_index(&mut self, index: usize) -> Option<i32> {
        (index < self.values.len()).then(|| self.values.remove(index))
    }

    pub fn remove_element(&mut self, value: i32) -> bool {
        match self.values.iter().position(|&v| v == value) {
            Some(index) => {
                self.values.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn reverse(&mut self) {
        self.values.reverse();
    }

    pub fn sort(&mut self) {
        self.values.sort();
    }

    /// Every index holding `key`. A binary search over sorted contents may
    /// legitimately return any of them.
    pub fn indices_of(&self, key: i32) -> Vec<usize> {
        self.values
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == key)
            .map(|(i, _)| i)
            .collect()
    }

    /// Render as `[a, b, c]`.
    pub fn render(&self) -> String {
        let parts: Vec<String> = self.values.iter().map(|v| v.to_string()).collect();
        format!("[{}]", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_growth_doubles() {
        let mut model = ModelArray::with_capacity(2);
        model.add_element(1);
        model.add_element(2);
        model.add_element(3);
        assert_eq!(model.capacity(), 4);
    }

    #[test]
    fn model_zero_capacity_grows_to_one() {
        let mut model = ModelArray::with_capacity(0);
        model.add_element(1);
        assert_eq!(model.capacity(), 1);
    }

    #[test]
    fn model_remove_keeps_capacity() {
        let mut model = ModelArray::from_slice(&[1, 2, 3]);
        assert_eq!(model.remove_index(1), Some(2));
        assert_eq!(model.remove_index(5), None);
        assert_eq!(model.capacity(), 3);
    }

    #[test]
    fn model_render() {
        assert_eq!(ModelArray::from_slice(&[1, 2, 3]).render(), "[1, 2, 3]");
        assert_eq!(ModelArray::default().render(), "[]");
    }

    #[test]
    fn model_indices_of_duplicates() {
        let model = ModelArray::from_slice(&[1, 2, 2, 3]);
        assert_eq!(model.indices_of(2), vec![1, 2]);
        assert!(model.indices_of(9).is_empty());
    }
}
