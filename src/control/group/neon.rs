//! Hardware SIMD group matcher, `G = 8` (spec §4.3.2): a 64-bit NEON compare
//! against a broadcast tag. Mirrors hashbrown's own NEON backend, which the
//! teacher's `mod.rs` cfg_if dispatch (but not its body) was already set up
//! to select.

use crate::control::Tag;
use core::arch::aarch64 as arm;
use core::mem;

pub(crate) type BitMaskWord = u64;
// NEON's byte-compare result is 0x00 or 0xff per lane; transmuted to a u64
// that's the same "one set bit every 8 positions" shape the SWAR backend
// produces, so it reuses the generic stride and mask handling.
pub(crate) const BITMASK_STRIDE: usize = 8;

/// 64-bit group of control tags, scanned with one NEON compare.
#[derive(Copy, Clone)]
pub(crate) struct Group(arm::uint8x8_t);

impl Group {
    pub(crate) const WIDTH: usize = mem::size_of::<Self>();

    #[inline(always)]
    pub(crate) unsafe fn load(ptr: *const Tag) -> Self {
        unsafe { Group(arm::vld1_u8(ptr.cast())) }
    }

    #[inline(always)]
    pub(crate) fn match_tag(self, tag: Tag) -> super::BitMask {
        unsafe {
            let cmp = arm::vceq_u8(self.0, arm::vdup_n_u8(tag.to_byte()));
            // Each matching lane is 0xff; keep only bit 7 of each byte so
            // multi-match iteration (lowest-bit extraction, then clearing
            // it) behaves the same as the generic SWAR backend below.
            let word: u64 = mem::transmute(cmp);
            super::BitMask(word & 0x8080_8080_8080_8080)
        }
    }

    #[inline(always)]
    pub(crate) fn match_empty(self) -> super::BitMask {
        self.match_tag(Tag::EMPTY)
    }
}
