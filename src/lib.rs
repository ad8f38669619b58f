//! A fixed-capacity, single-writer/single-reader open-addressing hash set
//! based on the Swiss Tables design (Abseil's `flat_hash_set`).
//!
//! The set stores fixed-width entries and supports two operations:
//! insert-if-absent ([`Table::put`]) and membership test ([`Table::find`]).
//! Capacity is chosen once at construction from `max_size` and a load
//! factor; there is no resize and no per-entry removal. The probe-and-match
//! loop that does the actual work lives in the `table` and `probe` modules.
//!
//! [`Table`] is generic over entry width (an opaque byte string compared
//! bytewise). [`LongSet`] layers the long-only specialization spec'd in
//! the external interface on top: 8-byte little-endian integers, hashed
//! internally with the bundled [`hash::xxhash64`] reference hash.

pub mod capacity;
pub mod control;
pub mod error;
pub mod hash;
mod long;
mod probe;
mod table;

pub use error::{Result, SwissTableError};
pub use long::LongSet;
pub use table::{Iter, Table};
