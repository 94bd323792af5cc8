#![no_std]

//! `AssociativeArray`: a minimal key/value container backed by a linear slot buffer.
//!
//! Keys only need equality, not hashing or ordering. Every keyed operation
//! scans the buffer front to back, which keeps the container small and
//! predictable for the handful-of-entries workloads it is meant for.
//!
//! This crate is `no_std` compatible; it needs `alloc` for the slot buffer.
//!
//! # Storage Model
//!
//! The buffer is a sequence of slots, each either occupied by a key/value
//! pair or vacant. It starts with [`DEFAULT_CAPACITY`] slots.
//!
//! - `set()` replaces the value in place if the key is present. Otherwise it
//!   fills the first vacant slot, doubling the buffer first when none is left.
//! - `remove()` vacates the slot without moving other entries. The next
//!   insertion reuses it.
//! - The capacity only grows.
//!
//! ## Time Complexity
//! - `set()`, `get()`, `has_key()`, `remove()`: O(n) linear scan
//! - `size()`: O(1)
//! - Growth: O(capacity), amortized over the insertions that filled the buffer
//!
//! # Basic Usage
//!
//! ```
//! # use assoc_array::{AssociativeArray, AssocArrayError};
//! let mut animals = AssociativeArray::new();
//!
//! animals.set("A", "Aligator");
//! animals.set("B", "Bear");
//! assert_eq!(animals.size(), 2);
//!
//! // Setting an existing key replaces its value
//! animals.set("A", "Ant");
//! assert_eq!(animals.get(&"A"), Ok(&"Ant"));
//! assert_eq!(animals.size(), 2);
//!
//! // Removing an absent key does nothing
//! animals.remove(&"Z");
//! assert_eq!(animals.size(), 2);
//!
//! animals.remove(&"A");
//! assert_eq!(animals.get(&"A"), Err(AssocArrayError::KeyNotFound));
//! assert!(!animals.has_key(&"A"));
//! ```
//!
//! # Absent Keys
//!
//! Stored keys are never absent. Callers holding a key that may be missing use
//! the `*_nullable` methods, which take `Option` keys:
//!
//! ```
//! # use assoc_array::{AssociativeArray, AssocArrayError};
//! let mut array: AssociativeArray<&str, i32> = AssociativeArray::new();
//!
//! assert_eq!(array.set_nullable(None, 1), Err(AssocArrayError::InvalidKey));
//! assert_eq!(array.size(), 0);
//!
//! assert_eq!(array.get_nullable(None), Err(AssocArrayError::KeyNotFound));
//! assert!(!array.has_key_nullable(None));
//! assert_eq!(array.remove_nullable(None), None);
//! ```
//!
//! # Iteration and Rendering
//!
//! Iterators visit occupied slots in slot order. `Display` renders the pairs
//! the same way:
//!
//! ```
//! # use assoc_array::AssociativeArray;
//! let array: AssociativeArray<_, _> = [("x", 1), ("y", 2)].into_iter().collect();
//!
//! for (key, value) in &array {
//!     println!("{key} = {value}");
//! }
//!
//! assert_eq!(array.to_string(), "{ x: 1, y: 2 }");
//! assert_eq!(AssociativeArray::<i32, i32>::new().to_string(), "{}");
//! ```
//!
//! # Concurrency
//!
//! The container has no internal locking. Share it across threads behind a
//! single lock that guards every operation.

extern crate alloc;

mod core;
mod error;
mod iter;

// Re-export public types and traits
pub use crate::core::{AssociativeArray, DEFAULT_CAPACITY};
pub use error::AssocArrayError;
pub use iter::{Iter, Keys, Values};
