//! dynarray demo: build, print, sort, print.
//!
//! Demonstrates:
//!   1. Creating an array with an explicit capacity
//!   2. Appending elements
//!   3. Reading elements back by index
//!   4. Sorting in place and rendering the result
//!
//! Run with:
//!   cargo run -p dynarray --example demo

use dynarray::{ArrayError, DynamicArray};

const CAPACITY: i64 = 50;

fn main() -> Result<(), ArrayError> {
    let mut arr = DynamicArray::with_capacity(CAPACITY)?;
    for value in [3, 99, 278, -14] {
        arr.add_element(value);
    }

    for i in 0..arr.len() {
        println!("{}", arr.get(i)?);
    }

    arr.sort();
    println!("{arr}");

    let metrics = arr.metrics();
    println!(
        "capacity {} ({} bytes), {} reallocations",
        arr.capacity(),
        arr.memory_bytes(),
        metrics.reallocations
    );
    Ok(())
}
