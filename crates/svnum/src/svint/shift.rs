//! Shift operators. A shift amount with unknown bits poisons the whole
//! result; shifting by the full width or more drains the value (or floods
//! it with the sign bit for arithmetic right shifts).

use crate::bitops::{self, set_bits, WORD_BITS};
use crate::logic::Logic;

use super::{Payload, SvInt};

impl SvInt {
    /// Left shift by a dynamic amount.
    pub fn shl(&self, amount: &SvInt) -> SvInt {
        if amount.has_unknown() {
            return SvInt::create_fill_x(self.width, self.signed);
        }
        match amount.as_integer::<u32>() {
            Some(amt) if amt < self.width => self.shl_by(amt),
            _ => SvInt::new(self.width, 0, self.signed),
        }
    }

    /// Left shift by a fixed amount.
    pub fn shl_by(&self, amount: u32) -> SvInt {
        if amount == 0 {
            return self.clone();
        }
        if amount >= self.width {
            return SvInt::new(self.width, 0, self.signed);
        }
        if let Payload::Inline(v) = &self.data {
            return SvInt::new(self.width, v << amount, self.signed);
        }

        let mut result = SvInt::alloc_zeroed(self.width, self.signed, self.unknown);
        let words = self.words_per_plane();
        let word_shift = amount % WORD_BITS;
        let offset = (amount / WORD_BITS) as usize;

        bitops::shl_far(
            &mut result.raw_mut()[..words],
            self.value_plane(),
            word_shift,
            offset,
        );
        if self.unknown {
            let (_, unknown) = result.planes_mut();
            bitops::shl_far(unknown, self.unknown_plane(), word_shift, offset);
        }

        result.clear_unused_bits();
        result.check_unknown();
        result
    }

    /// Logical right shift by a dynamic amount.
    pub fn lshr(&self, amount: &SvInt) -> SvInt {
        if amount.has_unknown() {
            return SvInt::create_fill_x(self.width, self.signed);
        }
        match amount.as_integer::<u32>() {
            Some(amt) if amt < self.width => self.lshr_by(amt),
            _ => SvInt::new(self.width, 0, self.signed),
        }
    }

    /// Logical right shift by a fixed amount.
    pub fn lshr_by(&self, amount: u32) -> SvInt {
        if amount == 0 {
            return self.clone();
        }
        if amount >= self.width {
            return SvInt::new(self.width, 0, self.signed);
        }
        if let Payload::Inline(v) = &self.data {
            return SvInt::new(self.width, v >> amount, self.signed);
        }

        let mut result = SvInt::alloc_zeroed(self.width, self.signed, self.unknown);
        let words = self.words_per_plane();
        if amount < WORD_BITS && !self.unknown {
            bitops::lshr_near(&mut result.raw_mut()[..words], self.value_plane(), amount);
        } else {
            let word_shift = amount % WORD_BITS;
            let offset = (amount / WORD_BITS) as usize;

            bitops::lshr_far(
                &mut result.raw_mut()[..words],
                self.value_plane(),
                word_shift,
                offset,
            );
            if self.unknown {
                let (_, unknown) = result.planes_mut();
                bitops::lshr_far(unknown, self.unknown_plane(), word_shift, offset);
            }
        }

        result.check_unknown();
        result
    }

    /// Arithmetic right shift by a dynamic amount. Equivalent to a logical
    /// shift for unsigned values.
    pub fn ashr(&self, amount: &SvInt) -> SvInt {
        if !self.signed {
            return self.lshr(amount);
        }
        if amount.has_unknown() {
            return SvInt::create_fill_x(self.width, self.signed);
        }
        match amount.as_integer::<u32>() {
            Some(amt) => self.ashr_by(amt),
            None => self.ashr_by(self.width),
        }
    }

    /// Arithmetic right shift by a fixed amount.
    pub fn ashr_by(&self, amount: u32) -> SvInt {
        if !self.signed {
            return self.lshr_by(amount);
        }
        if amount == 0 {
            return self.clone();
        }

        let sign = self.top_bit();
        if amount >= self.width {
            // the sign bit floods the whole value
            return match sign {
                Logic::Zero => SvInt::new(self.width, 0, self.signed),
                Logic::One => SvInt::new(self.width, u64::MAX, self.signed),
                Logic::X => SvInt::create_fill_x(self.width, self.signed),
                Logic::Z => SvInt::create_fill_z(self.width, self.signed),
            };
        }

        // Shift, then replicate the original sign bit across the vacated
        // high positions on whichever planes it occupies.
        let mut result = self.lshr_by(amount);
        let from = (self.width - amount) as usize;
        let count = amount as usize;
        match sign {
            Logic::Zero => {}
            Logic::One => {
                let words = result.words_per_plane();
                set_bits(&mut result.raw_mut()[..words], from, count);
            }
            Logic::X => {
                let (_, unknown) = result.planes_mut();
                set_bits(unknown, from, count);
            }
            Logic::Z => {
                let words = result.words_per_plane();
                set_bits(&mut result.raw_mut()[..words], from, count);
                let (_, unknown) = result.planes_mut();
                set_bits(unknown, from, count);
            }
        }
        result
    }

    fn top_bit(&self) -> Logic {
        debug_assert!(self.width > 0);
        self.bit(self.width as i32 - 1)
    }
}
