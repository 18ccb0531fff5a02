//! int-key-hashmap: a single-threaded hash map keyed by `i32`, with
//! chained buckets and a selector-driven traversal that searches, removes
//! and stops early in one pass.
//!
//! Internal Design:
//!
//! Summary
//! - Storage: entries live in a `SlotMap` arena; each bucket holds the
//!   arena key of its chain head and each entry the key of its successor.
//!   Unlinking and rehashing only rewrite these links, so entries are
//!   never copied or reallocated after insertion.
//! - Hashing: `bucket = (key & i32::MAX) % capacity`. The key is its own
//!   hash; no `BuildHasher` is involved.
//! - Growth: after a new key is counted, `len >= threshold` grows the table
//!   with `capacity = capacity * 2 + 1` (odd capacities spread keys better
//!   under plain modulo than powers of two). `threshold` is
//!   `floor(capacity * load_factor)`.
//! - Selection: `select` offers each entry to a callback returning a
//!   `Selection`, which says whether to remove the entry and whether to
//!   stop. One pass covers "remove all matching", "remove first match" and
//!   "find first match".
//!
//! Traversal order
//! - `select`, `iter`, `keys`, `values`, `entries` and `values_into` all
//!   visit buckets from the highest index down and each chain from head to
//!   tail. New keys are appended at their chain's tail, and growth relinks
//!   in the same order, so the order is deterministic for a given history
//!   of operations. It is not sorted and changes when the table grows.
//!
//! Constraints
//! - Single-threaded; no locking or atomics.
//! - `select` takes `&mut self`, so the callback cannot reach the map
//!   except through the verdict it returns.
//! - Absence is `Option::None`; no default-value sentinel.
//! - Capacity never shrinks; `clear` keeps it.
//!
//! Logging
//! - Growth events are logged at `debug` through the `log` facade; `clear`
//!   and early `select` stops at `trace`.

pub mod config;
pub mod error;
pub mod int_key_hash_map;
mod int_key_hash_map_proptest;
pub mod selection;

// Public surface
pub use config::{MapConfig, DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR, MAX_CAPACITY};
pub use error::{ConfigError, SelectionCodeError};
pub use int_key_hash_map::{Entry, IntKeyHashMap, Iter};
pub use selection::Selection;
