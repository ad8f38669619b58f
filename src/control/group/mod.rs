//! The group-matcher capability (spec §4.3): scan `Group::WIDTH` control
//! bytes at once and report which positions match a tag, or the first empty
//! position. Exactly one backend is compiled in per build, chosen by
//! `cfg_if` the same way the teacher benchmark dispatches its SIMD variants.
//! This is "selected at construction" in the sense the spec's design
//! notes intend: one build, one Group capability, not N parallel table
//! implementations. Spec §4.3 permits exactly three backends; we keep all
//! three (hardware G=16, hardware G=8, software SWAR G=8) and drop the
//! teacher's AVX2 (G=32) and LoongArch variants, which the spec does not
//! recognize.
cfg_if::cfg_if! {
    if #[cfg(all(
        target_feature = "sse2",
        any(target_arch = "x86", target_arch = "x86_64"),
        not(miri),
    ))] {
        mod sse2;
        use sse2 as imp;
    } else if #[cfg(all(
        target_arch = "aarch64",
        target_feature = "neon",
        // NEON intrinsics are currently broken on big-endian targets.
        // See https://github.com/rust-lang/stdarch/issues/1484.
        target_endian = "little",
        not(miri),
    ))] {
        mod neon;
        use neon as imp;
    } else {
        mod generic;
        use generic as imp;
    }
}

pub(crate) use imp::Group;
use imp::{BitMaskWord, BITMASK_STRIDE};

/// A bitmask over a group's positions, one bit (possibly strided, per the
/// active backend) per position. Positions are consumed lowest-first, per
/// spec §4.4's tie-break rule.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct BitMask(pub(crate) BitMaskWord);

impl BitMask {
    /// Whether any position matched.
    #[inline(always)]
    pub fn any_bit_set(self) -> bool {
        self.0 != 0
    }

    /// The lowest-indexed matching position, if any.
    #[inline(always)]
    pub fn lowest_set_bit(self) -> Option<usize> {
        if self.0 == 0 {
            None
        } else {
            Some(self.trailing_zeros())
        }
    }

    #[inline(always)]
    fn trailing_zeros(self) -> usize {
        (self.0.trailing_zeros() as usize) / BITMASK_STRIDE
    }

    /// Clears the lowest set bit, regardless of the backend's bit stride:
    /// `x & (x - 1)` always clears exactly the lowest set bit of `x`.
    #[inline(always)]
    #[must_use]
    pub fn remove_lowest_bit(self) -> BitMask {
        BitMask(self.0 & self.0.wrapping_sub(1))
    }
}

impl IntoIterator for BitMask {
    type Item = usize;
    type IntoIter = BitMaskIter;

    #[inline(always)]
    fn into_iter(self) -> BitMaskIter {
        BitMaskIter(self)
    }
}

/// Iterates matching positions in ascending order (lowest bit first).
pub struct BitMaskIter(BitMask);

impl Iterator for BitMaskIter {
    type Item = usize;

    #[inline(always)]
    fn next(&mut self) -> Option<usize> {
        let bit = self.0.lowest_set_bit()?;
        self.0 = self.0.remove_lowest_bit();
        Some(bit)
    }
}
