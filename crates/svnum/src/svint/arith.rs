//! Additive and multiplicative operators. Every operator first unifies
//! widths (sign extension only when both operands are signed), then applies
//! the all-X poisoning rule: any unknown bit in either operand makes the
//! whole result X.

use std::ops::{AddAssign, MulAssign, SubAssign};

use crate::bitops::{self, num_words, which_word};

use super::{extend, Payload, SvInt};

impl AddAssign<&SvInt> for SvInt {
    fn add_assign(&mut self, rhs: &SvInt) {
        if self.width != rhs.width {
            let both_signed = self.signed && rhs.signed;
            if self.width < rhs.width {
                *self = extend(self, rhs.width, both_signed);
            } else {
                *self += &extend(rhs, self.width, both_signed);
                return;
            }
        }

        if self.unknown || rhs.unknown {
            self.set_all_x();
            return;
        }

        match (&mut self.data, &rhs.data) {
            (Payload::Inline(a), Payload::Inline(b)) => *a = a.wrapping_add(*b),
            _ => {
                bitops::add_in_place(self.raw_mut(), rhs.raw());
            }
        }
        self.clear_unused_bits();
    }
}

impl SubAssign<&SvInt> for SvInt {
    fn sub_assign(&mut self, rhs: &SvInt) {
        if self.width != rhs.width {
            let both_signed = self.signed && rhs.signed;
            if self.width < rhs.width {
                *self = extend(self, rhs.width, both_signed);
            } else {
                *self -= &extend(rhs, self.width, both_signed);
                return;
            }
        }

        if self.unknown || rhs.unknown {
            self.set_all_x();
            return;
        }

        match (&mut self.data, &rhs.data) {
            (Payload::Inline(a), Payload::Inline(b)) => *a = a.wrapping_sub(*b),
            _ => {
                bitops::sub_in_place(self.raw_mut(), rhs.raw());
            }
        }
        self.clear_unused_bits();
    }
}

impl MulAssign<&SvInt> for SvInt {
    fn mul_assign(&mut self, rhs: &SvInt) {
        if self.width != rhs.width {
            let both_signed = self.signed && rhs.signed;
            if self.width < rhs.width {
                *self = extend(self, rhs.width, both_signed);
            } else {
                *self *= &extend(rhs, self.width, both_signed);
                return;
            }
        }

        if self.unknown || rhs.unknown {
            self.set_all_x();
            return;
        }

        if let (Payload::Inline(a), Payload::Inline(b)) = (&mut self.data, &rhs.data) {
            *a = a.wrapping_mul(*b);
            self.clear_unused_bits();
            return;
        }

        // Trim to active words; a zero factor short-circuits.
        let lhs_bits = self.active_bits();
        if lhs_bits == 0 {
            return;
        }
        let rhs_bits = rhs.active_bits();
        if rhs_bits == 0 {
            self.set_all_zeros();
            return;
        }
        let lhs_words = which_word(lhs_bits - 1) + 1;
        let rhs_words = which_word(rhs_bits - 1) + 1;

        let mut product = vec![0u64; lhs_words + rhs_words];
        bitops::mul(
            &mut product,
            &self.value_plane()[..lhs_words],
            &rhs.value_plane()[..rhs_words],
        );

        self.truncated_copy_words(&product);
    }
}

impl SvInt {
    /// Prefix increment.
    pub fn increment(&mut self) {
        if self.unknown {
            self.set_all_x();
            return;
        }
        match &mut self.data {
            Payload::Inline(v) => *v = v.wrapping_add(1),
            Payload::Heap(buf) => {
                bitops::add_one(buf, 1);
            }
        }
        self.clear_unused_bits();
    }

    /// Prefix decrement.
    pub fn decrement(&mut self) {
        if self.unknown {
            self.set_all_x();
            return;
        }
        match &mut self.data {
            Payload::Inline(v) => *v = v.wrapping_sub(1),
            Payload::Heap(buf) => {
                bitops::sub_one(buf, 1);
            }
        }
        self.clear_unused_bits();
    }

    /// Exponentiation. The result always has this value's width, which also
    /// acts as the modulus: all arithmetic is mod `2^width`.
    pub fn pow(&self, rhs: &SvInt) -> SvInt {
        let both_signed = self.signed && rhs.signed;
        if self.unknown || rhs.unknown {
            return SvInt::create_fill_x(self.width, both_signed);
        }

        let lhs_bits = self.active_bits();
        let rhs_bits = rhs.active_bits();
        if lhs_bits == 0 {
            if rhs_bits == 0 {
                // 0 ** 0 == 1
                return SvInt::new(self.width, 1, both_signed);
            }
            if rhs.signed && rhs.is_negative() {
                // 0 ** -y == x
                return SvInt::create_fill_x(self.width, both_signed);
            }
            // 0 ** y == 0
            return SvInt::new(self.width, 0, both_signed);
        }

        // x ** 0 == 1 and 1 ** y == 1
        if rhs_bits == 0 || lhs_bits == 1 {
            return SvInt::new(self.width, 1, both_signed);
        }

        if both_signed && self.is_negative() {
            let minus_one = SvInt::new(self.width, u64::MAX, both_signed);
            if self.equals(&minus_one).is_true() {
                // (-1) ** y: odd exponent gives -1, even gives 1
                return if rhs.is_odd() {
                    minus_one
                } else {
                    SvInt::new(self.width, 1, both_signed)
                };
            }
        }

        if both_signed && rhs.is_negative() {
            // x ** -y == 0 for |x| > 1
            return SvInt::new(self.width, 0, both_signed);
        }

        // rhs is positive from here on; take the magnitude of a negative
        // base and reapply the sign by exponent parity.
        if both_signed && self.is_negative() {
            let result = SvInt::mod_pow(&-self, rhs, both_signed);
            if rhs.is_odd() {
                -&result
            } else {
                result
            }
        } else {
            SvInt::mod_pow(self, rhs, both_signed)
        }
    }

    /// Replace the value words with `src`, truncating to this width and
    /// zeroing anything `src` doesn't cover. The receiver must be known.
    pub(crate) fn truncated_copy_words(&mut self, src: &[u64]) {
        let words = num_words(self.width);
        let copy = src.len().min(words);
        let dst = self.raw_mut();
        dst[..copy].copy_from_slice(&src[..copy]);
        for w in &mut dst[copy..words] {
            *w = 0;
        }
        self.clear_unused_bits();
    }
}
