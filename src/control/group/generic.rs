//! Software SWAR group matcher, `G = 8` (spec §4.3.3): a little-endian
//! 64-bit word, byte-parallel compare. This is the universal fallback when
//! no hardware backend applies, and doubles as the reference the hardware
//! backends are checked against (spec §8, "matcher equivalence").

use crate::control::Tag;
use core::mem;

pub(crate) type BitMaskWord = u64;
pub(crate) const BITMASK_STRIDE: usize = 8;

const LOW_BITS: u64 = 0x0101_0101_0101_0101;
const HIGH_BITS: u64 = 0x8080_8080_8080_8080;

/// 8-byte group of control tags, held as a little-endian word.
#[derive(Copy, Clone)]
pub(crate) struct Group(u64);

impl Group {
    pub(crate) const WIDTH: usize = mem::size_of::<Self>();

    #[inline(always)]
    pub(crate) unsafe fn load(ptr: *const Tag) -> Self {
        let mut bytes = [0u8; Self::WIDTH];
        unsafe {
            core::ptr::copy_nonoverlapping(ptr.cast::<u8>(), bytes.as_mut_ptr(), Self::WIDTH);
        }
        Group(u64::from_le_bytes(bytes))
    }

    #[inline(always)]
    pub(crate) fn match_tag(self, tag: Tag) -> super::BitMask {
        // Broadcast `tag` into every byte lane, XOR so matching bytes become
        // zero, then the classic "haszero" trick turns each zero byte into
        // 0x80 and every other byte into 0x00.
        let broadcast = (tag.to_byte() as u64).wrapping_mul(LOW_BITS);
        let c = self.0 ^ broadcast;
        super::BitMask(c.wrapping_sub(LOW_BITS) & !c & HIGH_BITS)
    }

    #[inline(always)]
    pub(crate) fn match_empty(self) -> super::BitMask {
        // Tag::EMPTY is 0x00, so XOR-ing against it is a no-op: the
        // "haszero" trick applies directly to `self.0`.
        super::BitMask(self.0.wrapping_sub(LOW_BITS) & !self.0 & HIGH_BITS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn haszero_trick_matches_naive_byte_scan() {
        // Exhaustively check the SWAR formula against a naive per-byte scan
        // for every possible single-byte group content (spec §8's "matcher
        // equivalence" property, specialized to this backend in isolation).
        for fill in 0u16..=0xff {
            let fill = fill as u8;
            let word = (fill as u64).wrapping_mul(LOW_BITS);
            let group = Group(word);
            for tag_byte in 0x80u16..=0xff {
                let tag = Tag::new(tag_byte as u8);
                let naive = if fill == tag_byte as u8 {
                    (0..Group::WIDTH).collect::<Vec<_>>()
                } else {
                    vec![]
                };
                let got: Vec<usize> = group.match_tag(tag).into_iter().collect();
                assert_eq!(got, naive, "fill={fill:#x} tag={tag_byte:#x}");
            }
        }
    }

    #[test]
    fn match_tag_on_mixed_group() {
        let bytes = [0x81u8, 0x82, 0x81, 0x00, 0x81, 0xff, 0x81, 0x90];
        let group = unsafe { Group::load(bytes.as_ptr().cast()) };
        let positions: Vec<usize> = group.match_tag(Tag::new(0x81)).into_iter().collect();
        assert_eq!(positions, vec![0, 2, 4, 6]);
    }

    #[test]
    fn match_empty_on_mixed_group() {
        let bytes = [0x00u8, 0x81, 0x00, 0x82, 0xff, 0x00, 0x80, 0x00];
        let group = unsafe { Group::load(bytes.as_ptr().cast()) };
        let positions: Vec<usize> = group.match_empty().into_iter().collect();
        assert_eq!(positions, vec![0, 2, 5, 7]);
    }
}
