//! A resizable array of `i32` with explicit capacity management.
//!
//! [`DynamicArray`] owns a single contiguous, zero-initialised buffer and a
//! logical length that never exceeds it. Appends grow the buffer by doubling;
//! removals only shift elements and never give storage back.
//!
//! # Architecture
//!
//! ```text
//! DynamicArray
//! ├── Vec<i32> backing buffer (len == capacity, zero-filled)
//! ├── logical length (0 <= len <= capacity)
//! └── ArrayMetrics (reallocation counters)
//!
//! ArrayConfig ──validates──▶ initial capacity
//! growth::next_capacity ──▶ max(1, capacity * 2)
//! ```
//!
//! # Example
//!
//! ```rust
//! use dynarray::DynamicArray;
//!
//! let mut arr = DynamicArray::with_capacity(2).unwrap();
//! arr.add_element(3);
//! arr.add_element(1);
//! arr.add_element(2);
//! assert_eq!(arr.capacity(), 4);
//!
//! arr.sort();
//! assert_eq!(arr.to_string(), "[1, 2, 3]");
//! assert_eq!(arr.binary_search(2), Some(1));
//! ```
//!
//! # Concurrency
//!
//! The array has no internal synchronisation. Share it across threads by
//! wrapping the whole value in a `Mutex` or `RwLock`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod config;
pub mod error;
pub mod growth;
pub mod iter;
pub mod metrics;

// Public re-exports for the primary API surface.
pub use array::DynamicArray;
pub use config::ArrayConfig;
pub use error::ArrayError;
pub use iter::{IntoIter, Iter};
pub use metrics::ArrayMetrics;
