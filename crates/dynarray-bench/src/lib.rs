//! Benchmark workloads for the dynarray crate.
//!
//! Provides deterministic inputs for benchmarks and examples:
//!
//! - [`random_values`]: seeded pseudo-random `i32` sequence
//! - [`filled_array`]: array built by repeated appends from capacity 0
//! - [`sorted_array`]: pre-sorted array for binary search
//! - [`probe_keys`]: mix of present and absent search keys

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use dynarray::DynamicArray;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Reference workload size: 10K elements.
pub const REFERENCE_LEN: usize = 10_000;

/// Stress workload size: 1M elements.
pub const STRESS_LEN: usize = 1_000_000;

/// `len` pseudo-random values from a ChaCha8 stream seeded with `seed`.
pub fn random_values(len: usize, seed: u64) -> Vec<i32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.random::<i32>()).collect()
}

/// Array grown one append at a time, starting from zero capacity.
pub fn filled_array(len: usize, seed: u64) -> DynamicArray {
    let mut arr = DynamicArray::from_slice(&[]);
    arr.extend(random_values(len, seed));
    arr
}

/// Sorted array of `len` random values.
pub fn sorted_array(len: usize, seed: u64) -> DynamicArray {
    let mut arr = DynamicArray::from(random_values(len, seed));
    arr.sort();
    arr
}

/// `count` search keys for `arr`: roughly half taken from the array,
/// the rest drawn at random (and so almost always absent).
pub fn probe_keys(arr: &DynamicArray, count: usize, seed: u64) -> Vec<i32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            if !arr.is_empty() && rng.random::<bool>() {
                let index = rng.random_range(0..arr.len());
                arr.as_slice()[index]
            } else {
                rng.random::<i32>()
            }
        })
        .collect()
}
