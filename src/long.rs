//! The long-only specialization (spec §6): `entry_size = 8`, entries are
//! little-endian `u64`s, and the hash is derived internally rather than
//! passed in by the caller.

use crate::error::Result;
use crate::hash::xxhash64;
use crate::table::Table;

/// A [`Table`] specialized to 8-byte little-endian integers, hashing keys
/// internally with xxHash64 (spec §6's reference hash).
pub struct LongSet {
    table: Table,
}

impl LongSet {
    /// Creates a set with the default load factor (`7/8`).
    pub fn new(max_size: usize) -> Result<Self> {
        Ok(LongSet {
            table: Table::new(8, max_size)?,
        })
    }

    /// Creates a set sized for `max_size` entries at the given `load_factor`.
    pub fn with_load_factor(max_size: usize, load_factor: f64) -> Result<Self> {
        Ok(LongSet {
            table: Table::with_load_factor(8, max_size, load_factor)?,
        })
    }

    /// Inserts `key` if absent; see [`Table::put`].
    pub fn put(&mut self, key: u64) -> Result<bool> {
        let bytes = key.to_le_bytes();
        self.table.put(Self::hash_key(key), &bytes)
    }

    /// Returns whether `key` is present; see [`Table::find`].
    pub fn find(&self, key: u64) -> Result<bool> {
        let bytes = key.to_le_bytes();
        self.table.find(Self::hash_key(key), &bytes)
    }

    /// Empties the set; see [`Table::clear`].
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the set holds no keys.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Total slot capacity.
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Iterates over the keys currently stored, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.table
            .iter()
            .map(|bytes| u64::from_le_bytes(bytes.try_into().expect("entry_size is 8")))
    }

    #[inline(always)]
    fn hash_key(key: u64) -> u64 {
        xxhash64::hash(&key.to_le_bytes())
    }
}

impl std::fmt::Debug for LongSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LongSet")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}
