//! Single-bit indexing, part selection, concatenation, and replication.

use crate::bitops::{bitcpy, mask_bit, num_words, set_bits, which_word};
use crate::logic::Logic;

use super::{Payload, SvInt};

impl SvInt {
    /// The 4-state bit at `index`. Out-of-range indexes (negative or past
    /// the width) read as X.
    pub fn bit(&self, index: i32) -> Logic {
        if index < 0 || index as u32 >= self.width {
            return Logic::X;
        }
        let bi = index as u32;
        let value = self.value_plane()[which_word(bi)] & mask_bit(bi) != 0;
        if !self.unknown {
            return Logic::from(value);
        }
        let unknown = self.unknown_plane()[which_word(bi)] & mask_bit(bi) != 0;
        Logic::from_planes(value, unknown)
    }

    /// Index by a dynamic value; an unknown or unrepresentable index reads
    /// as X.
    pub fn bit_select(&self, index: &SvInt) -> Logic {
        match index.as_integer::<i32>() {
            Some(i) => self.bit(i),
            None => Logic::X,
        }
    }

    /// Part select `[msb:lsb]`, inclusive on both ends. Positions outside
    /// `[0, width)` fill with X; a selection entirely out of range is all X.
    pub fn slice(&self, msb: i32, lsb: i32) -> SvInt {
        assert!(msb >= lsb, "slice requires msb >= lsb");
        let select_width = (msb as i64 - lsb as i64 + 1) as u32;

        if msb < 0 || lsb >= self.width as i32 {
            return SvInt::create_fill_x(select_width, false);
        }

        let front_oob = if lsb < 0 { (-lsb) as u32 } else { 0 };
        let back_oob = if msb as u32 >= self.width {
            msb as u32 - self.width + 1
        } else {
            0
        };
        let any_oob = front_oob > 0 || back_oob > 0;

        if let Payload::Inline(v) = &self.data {
            if !any_oob {
                let mask = if select_width == 64 {
                    u64::MAX
                } else {
                    (1u64 << select_width) - 1
                };
                return SvInt::new(select_width, (v >> lsb) & mask, false);
            }
        }

        let valid_width = (select_width - front_oob - back_oob) as usize;
        let src_offset = if front_oob > 0 { 0 } else { lsb as usize };

        let mut result = if select_width > 64 || self.unknown || any_oob {
            SvInt::alloc_zeroed(select_width, false, self.unknown || any_oob)
        } else {
            SvInt::new(select_width, 0, false)
        };

        if result.unknown {
            let (val, unk) = result.planes_mut();
            bitcpy(val, front_oob as usize, self.value_plane(), valid_width, src_offset);
            if self.unknown {
                bitcpy(
                    unk,
                    front_oob as usize,
                    self.unknown_plane(),
                    valid_width,
                    src_offset,
                );
            }
            if any_oob {
                set_bits(unk, 0, front_oob as usize);
                set_bits(unk, front_oob as usize + valid_width, back_oob as usize);
            }
        } else {
            let words = result.words_per_plane();
            bitcpy(
                &mut result.raw_mut()[..words],
                0,
                self.value_plane(),
                valid_width,
                src_offset,
            );
        }

        result.clear_unused_bits();
        result.check_unknown();
        result
    }

    /// Concatenate `times` copies of this value, this value occupying the
    /// most significant slot. A zero count produces a width-0 value that is
    /// only consumable inside a concatenation.
    pub fn replicate(&self, times: &SvInt) -> SvInt {
        let n: u32 = times
            .as_integer()
            .expect("replication count must be a known non-negative value");
        let copies = vec![self.clone(); n as usize];
        concatenate(&copies)
    }
}

/// Concatenate operands MSB first: the first operand lands in the most
/// significant bits. Width-0 operands are identity elements, and an empty
/// operand list produces the width-0 value.
pub fn concatenate(operands: &[SvInt]) -> SvInt {
    let mut bits = 0u32;
    let mut unknown = false;
    for op in operands {
        bits += op.width;
        unknown |= op.unknown;
    }
    if bits == 0 {
        return SvInt::new(0, 0, false);
    }

    let value_words = num_words(bits);
    if value_words == 1 && !unknown {
        let mut val = 0u64;
        let mut offset = 0usize;
        for op in operands.iter().rev() {
            bitcpy(
                std::slice::from_mut(&mut val),
                offset,
                op.raw(),
                op.width as usize,
                0,
            );
            offset += op.width as usize;
        }
        return SvInt::new(bits, val, false);
    }

    let mut result = SvInt::alloc_zeroed(bits, false, unknown);
    let mut offset = 0usize;
    for op in operands.iter().rev() {
        if op.width == 0 {
            continue;
        }
        if unknown {
            let (val, unk) = result.planes_mut();
            bitcpy(val, offset, op.value_plane(), op.width as usize, 0);
            if op.unknown {
                bitcpy(unk, offset, op.unknown_plane(), op.width as usize, 0);
            }
        } else {
            let words = value_words;
            bitcpy(
                &mut result.raw_mut()[..words],
                offset,
                op.value_plane(),
                op.width as usize,
                0,
            );
        }
        offset += op.width as usize;
    }
    result
}
