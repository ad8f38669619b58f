//! Hardware SIMD group matcher, `G = 16` (spec §4.3.1): a 128-bit SSE2
//! compare against a broadcast tag. SSE2 is part of the x86-64 baseline, so
//! this backend is always available on that target without runtime feature
//! detection, mirroring the teacher's AVX2 backend at one SIMD width down.

use crate::control::Tag;
use core::mem;

#[cfg(target_arch = "x86")]
use core::arch::x86;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64 as x86;

pub(crate) type BitMaskWord = u64;
pub(crate) const BITMASK_STRIDE: usize = 1;

/// 128-bit group of control tags, scanned with one SSE2 compare.
#[derive(Copy, Clone)]
pub(crate) struct Group(x86::__m128i);

impl Group {
    pub(crate) const WIDTH: usize = mem::size_of::<Self>();

    #[inline(always)]
    pub(crate) unsafe fn load(ptr: *const Tag) -> Self {
        unsafe { Group(x86::_mm_loadu_si128(ptr.cast())) }
    }

    #[inline(always)]
    pub(crate) fn match_tag(self, tag: Tag) -> super::BitMask {
        unsafe {
            let cmp = x86::_mm_cmpeq_epi8(self.0, x86::_mm_set1_epi8(tag.to_byte() as i8));
            super::BitMask((x86::_mm_movemask_epi8(cmp) as u16) as u64)
        }
    }

    #[inline(always)]
    pub(crate) fn match_empty(self) -> super::BitMask {
        self.match_tag(Tag::EMPTY)
    }
}
