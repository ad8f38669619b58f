//! The probe engine and the `Table` it drives (spec §4.4, §4.5, §4.6, §6).
//!
//! `Table` is the generic byte-array variant: entries are opaque `entry_size`-
//! byte strings compared bytewise. [`crate::LongSet`] layers the long-only
//! specialization (8-byte little-endian integers, internal hashing) on top.

use crate::capacity::{self, DEFAULT_LOAD_FACTOR};
use crate::control::{Group, Tag, TagSliceExt};
use crate::error::{Result, SwissTableError};
use crate::hash;
use crate::probe::ProbeSeq;

/// A fixed-capacity, single-writer/single-reader open-addressing hash set.
///
/// Entries are `entry_size`-byte strings. Capacity is chosen at
/// construction from `max_size` and `load_factor` and never changes: there
/// is no resize and no per-entry removal (spec §5, §9 non-goals).
pub struct Table {
    /// Control bytes, length `capacity + Group::WIDTH`; the last
    /// `Group::WIDTH` bytes mirror the first `Group::WIDTH` (spec
    /// invariant 4), so a group load at any `pos < capacity` never needs
    /// wraparound logic.
    ctrl: Box<[Tag]>,
    /// Entry storage, length `capacity * entry_size`; slot `i` occupies
    /// `vals[i*entry_size .. i*entry_size + entry_size]`.
    vals: Box<[u8]>,
    capacity: usize,
    mask: usize,
    size: usize,
    max_size: usize,
    entry_size: usize,
}

impl Table {
    /// Creates a table with the default load factor (`7/8`).
    pub fn new(entry_size: usize, max_size: usize) -> Result<Self> {
        Self::with_load_factor(entry_size, max_size, DEFAULT_LOAD_FACTOR)
    }

    /// Creates a table sized for `max_size` entries at the given
    /// `load_factor` (spec §6). Fails with [`SwissTableError::InvalidArgument`]
    /// if `entry_size == 0`, `max_size == 0`, `load_factor` is outside
    /// `(0, 1]`, or the computed capacity would reach `2^30`.
    pub fn with_load_factor(entry_size: usize, max_size: usize, load_factor: f64) -> Result<Self> {
        if entry_size == 0 {
            return Err(SwissTableError::InvalidArgument(
                "entry_size must be non-zero".into(),
            ));
        }
        let capacity = capacity::plan_capacity(max_size, load_factor, Group::WIDTH)?;
        let mask = capacity - 1;

        let mut ctrl = vec![Tag::EMPTY; capacity + Group::WIDTH].into_boxed_slice();
        ctrl.fill_empty();
        let vals = vec![0u8; capacity * entry_size].into_boxed_slice();

        log::debug!(
            "Table::with_load_factor: entry_size={entry_size} max_size={max_size} load_factor={load_factor} capacity={capacity}"
        );

        Ok(Table {
            ctrl,
            vals,
            capacity,
            mask,
            size: 0,
            max_size,
            entry_size,
        })
    }

    /// Number of entries currently stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the table holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Total slot capacity (a power of two, fixed at construction).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The `max_size` bound given at construction.
    #[inline]
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// The fixed width, in bytes, of every entry.
    #[inline]
    pub fn entry_size(&self) -> usize {
        self.entry_size
    }

    /// Inserts `entry` if absent. Returns `Ok(true)` if a new entry was
    /// inserted, `Ok(false)` if it was already present (spec §4.4, §9: the
    /// majority/standard Swiss contract, not the naive variant that
    /// inverts this).
    ///
    /// Fails with [`SwissTableError::InvalidArgument`] if
    /// `entry.len() != entry_size`, and with
    /// [`SwissTableError::CapacityExceeded`] if the key is absent and
    /// `size == max_size`. This is checked only once an empty slot is
    /// actually found, so re-inserting an existing key still succeeds at
    /// full capacity (spec §9).
    pub fn put(&mut self, hash: u64, entry: &[u8]) -> Result<bool> {
        self.check_entry_len(entry)?;
        let h1 = hash::h1(hash, self.mask);
        let h2 = hash::h2(hash);

        let mut seq = ProbeSeq::new(h1);
        loop {
            // SAFETY: `seq.pos < capacity` and `ctrl` has `capacity +
            // Group::WIDTH` bytes, so the load never runs past the end.
            let group = unsafe { Group::load(self.ctrl.as_ptr().add(seq.pos)) };

            for bit in group.match_tag(h2) {
                let slot = (seq.pos + bit) & self.mask;
                if self.entry_at(slot) == entry {
                    return Ok(false);
                }
            }

            if let Some(bit) = group.match_empty().lowest_set_bit() {
                if self.size == self.max_size {
                    return Err(SwissTableError::CapacityExceeded {
                        max_size: self.max_size,
                    });
                }
                let slot = (seq.pos + bit) & self.mask;
                self.insert_at(slot, h2, entry);
                self.size += 1;
                return Ok(true);
            }

            log::trace!("put: group at {} full, advancing probe", seq.pos);
            seq.move_next(self.mask, Group::WIDTH);
        }
    }

    /// Returns whether `entry` is present (spec §4.5). Never mutates state.
    ///
    /// Fails with [`SwissTableError::InvalidArgument`] if
    /// `entry.len() != entry_size`.
    pub fn find(&self, hash: u64, entry: &[u8]) -> Result<bool> {
        self.check_entry_len(entry)?;
        let h1 = hash::h1(hash, self.mask);
        let h2 = hash::h2(hash);

        let mut seq = ProbeSeq::new(h1);
        loop {
            // SAFETY: see `put`.
            let group = unsafe { Group::load(self.ctrl.as_ptr().add(seq.pos)) };

            for bit in group.match_tag(h2) {
                let slot = (seq.pos + bit) & self.mask;
                if self.entry_at(slot) == entry {
                    return Ok(true);
                }
            }

            if group.match_empty().any_bit_set() {
                return Ok(false);
            }

            seq.move_next(self.mask, Group::WIDTH);
        }
    }

    /// Empties the table: resets `len()` to 0 and marks every slot empty.
    /// Capacity is preserved. Entry storage is left as-is; it is never read
    /// except through an occupied control byte (spec §4.6).
    pub fn clear(&mut self) {
        log::debug!("Table::clear: dropping {} entries", self.size);
        self.ctrl.fill_empty();
        self.size = 0;
    }

    /// Iterates over the byte slices of every occupied entry, in slot
    /// order. Grounded on the control-byte-driven enumeration pattern used
    /// throughout the corpus (entries are yielded only for slots whose
    /// control byte is occupied; empty slots are skipped without reading
    /// entry storage).
    pub fn iter(&self) -> Iter<'_> {
        Iter { table: self, index: 0 }
    }

    #[inline]
    fn check_entry_len(&self, entry: &[u8]) -> Result<()> {
        if entry.len() != self.entry_size {
            return Err(SwissTableError::InvalidArgument(format!(
                "expected entry of {} bytes, got {}",
                self.entry_size,
                entry.len()
            )));
        }
        Ok(())
    }

    #[inline(always)]
    fn entry_at(&self, slot: usize) -> &[u8] {
        let start = slot * self.entry_size;
        &self.vals[start..start + self.entry_size]
    }

    #[inline(always)]
    fn insert_at(&mut self, slot: usize, tag: Tag, entry: &[u8]) {
        self.ctrl[slot] = tag;
        if slot < Group::WIDTH {
            self.ctrl[self.capacity + slot] = tag;
        }
        let start = slot * self.entry_size;
        self.vals[start..start + self.entry_size].copy_from_slice(entry);
    }
}

impl std::fmt::Debug for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Table")
            .field("capacity", &self.capacity)
            .field("len", &self.size)
            .field("max_size", &self.max_size)
            .field("entry_size", &self.entry_size)
            .finish()
    }
}

/// Iterator over the occupied entries of a [`Table`], returned by
/// [`Table::iter`].
pub struct Iter<'a> {
    table: &'a Table,
    index: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < self.table.capacity {
            let i = self.index;
            self.index += 1;
            if self.table.ctrl[i].is_occupied() {
                return Some(self.table.entry_at(i));
            }
        }
        None
    }
}
