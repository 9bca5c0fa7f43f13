//! Proptest strategies for dynarray tests.
//!
//! - [`arb_value`] — element values biased towards a small range so that
//!   duplicate keys and successful removals by value are common.
//! - [`arb_values`] — element sequences for bulk construction.
//! - [`arb_op`] / [`arb_ops`] — mutation scripts applied to both the real
//!   array and [`ModelArray`](crate::ModelArray).

use proptest::prelude::*;

/// A single operation in a generated script.
///
/// Indices are generated independently of the array length, so scripts
/// exercise out-of-range paths as well as valid ones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Op {
    Add(i32),
    Get(usize),
    Set(usize, i32),
    RemoveIndex(usize),
    RemoveElement(i32),
    Reverse,
    Sort,
}

/// Mostly small values, occasionally extremes.
pub fn arb_value() -> impl Strategy<Value = i32> {
    prop_oneof![
        8 => -8i32..8,
        1 => Just(i32::MIN),
        1 => Just(i32::MAX),
        2 => any::<i32>(),
    ]
}

/// Sequences of up to `max_len` values.
pub fn arb_values(max_len: usize) -> impl Strategy<Value = Vec<i32>> {
    proptest::collection::vec(arb_value(), 0..=max_len)
}

/// Sequences of up to `max_len` values, sorted ascending.
pub fn arb_sorted_values(max_len: usize) -> impl Strategy<Value = Vec<i32>> {
    arb_values(max_len).prop_map(|mut v| {
        v.sort();
        v
    })
}

/// One operation. Appends dominate so arrays actually grow.
pub fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => arb_value().prop_map(Op::Add),
        2 => (0usize..24).prop_map(Op::Get),
        2 => (0usize..24, arb_value()).prop_map(|(i, v)| Op::Set(i, v)),
        2 => (0usize..24).prop_map(Op::RemoveIndex),
        2 => arb_value().prop_map(Op::RemoveElement),
        1 => Just(Op::Reverse),
        1 => Just(Op::Sort),
    ]
}

/// Scripts of up to `max_len` operations.
pub fn arb_ops(max_len: usize) -> impl Strategy<Value = Vec<Op>> {
    proptest::collection::vec(arb_op(), 0..=max_len)
}
