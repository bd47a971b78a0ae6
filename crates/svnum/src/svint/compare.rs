//! Equality and ordering. The relational operators return [`Logic`] so
//! unknown operands can poison the answer; `exactly_equal` and
//! `wildcard_equal` are the 4-state equality variants.

use crate::bitops::which_word;
use crate::logic::Logic;

use super::{extend, sign_extend, Payload, SvInt};

impl SvInt {
    /// Logical equality. X if either side has unknown bits. Differing
    /// widths sign extend only when both sides are signed.
    pub fn equals(&self, rhs: &SvInt) -> Logic {
        if self.unknown || rhs.unknown {
            return Logic::X;
        }

        if self.width != rhs.width && self.signed && rhs.signed {
            if self.width < rhs.width {
                return sign_extend(self, rhs.width).equals(rhs);
            }
            return sign_extend(rhs, self.width).equals(self);
        }

        // identical or zero-extended comparison
        let a1 = self.active_bits();
        let a2 = rhs.active_bits();
        if a1 != a2 {
            return Logic::Zero;
        }
        if a1 == 0 {
            return Logic::One;
        }
        let limit = which_word(a1 - 1);
        for i in 0..=limit {
            if self.word(i) != rhs.word(i) {
                return Logic::Zero;
            }
        }
        Logic::One
    }

    pub fn not_equals(&self, rhs: &SvInt) -> Logic {
        !self.equals(rhs)
    }

    /// Less-than. X if either side has unknown bits; a signed negative
    /// value is below every non-negative one.
    pub fn lt(&self, rhs: &SvInt) -> Logic {
        if self.unknown || rhs.unknown {
            return Logic::X;
        }

        let both_signed = self.signed && rhs.signed;
        if self.width != rhs.width {
            if self.width < rhs.width {
                return extend(self, rhs.width, both_signed).lt(rhs);
            }
            return self.lt(&extend(rhs, self.width, both_signed));
        }

        if both_signed {
            if self.is_negative() != rhs.is_negative() {
                return Logic::from(self.is_negative());
            }
            // Same sign: two's complement order matches unsigned order.
        }

        Logic::from(self.ult(rhs))
    }

    /// Unsigned value-plane comparison of equal-width known values.
    pub(crate) fn ult(&self, rhs: &SvInt) -> bool {
        debug_assert_eq!(self.width, rhs.width);

        if let (Payload::Inline(a), Payload::Inline(b)) = (&self.data, &rhs.data) {
            return a < b;
        }

        let a1 = self.active_bits();
        let a2 = rhs.active_bits();
        if a1 != a2 {
            return a1 < a2;
        }
        if a1 == 0 {
            return false;
        }

        let top = which_word(a1 - 1);
        for i in (0..=top).rev() {
            if self.word(i) != rhs.word(i) {
                return self.word(i) < rhs.word(i);
            }
        }
        false
    }

    pub fn gt(&self, rhs: &SvInt) -> Logic {
        rhs.lt(self)
    }

    pub fn le(&self, rhs: &SvInt) -> Logic {
        self.lt(rhs) | self.equals(rhs)
    }

    pub fn ge(&self, rhs: &SvInt) -> Logic {
        rhs.lt(self) | self.equals(rhs)
    }

    /// The ternary operator. A known condition selects an operand; an
    /// unknown condition reconciles the two per bit: a result bit is known
    /// only where both operands agree on a known value.
    pub fn conditional(condition: &SvInt, lhs: &SvInt, rhs: &SvInt) -> SvInt {
        let both_signed = lhs.signed && rhs.signed;
        if lhs.width != rhs.width {
            if lhs.width < rhs.width {
                return SvInt::conditional(condition, &extend(lhs, rhs.width, both_signed), rhs);
            }
            return SvInt::conditional(condition, lhs, &extend(rhs, lhs.width, both_signed));
        }

        let c = condition.reduction_or();
        if !c.is_unknown() {
            return if c.is_true() { lhs.clone() } else { rhs.clone() };
        }

        if exactly_equal(lhs, rhs) {
            return rhs.clone();
        }

        let mut result = SvInt::alloc_zeroed(lhs.width, both_signed, true);
        let words = result.words_per_plane();
        let (val, unk) = result.planes_mut();
        for i in 0..words {
            // unknown wherever either side is unknown or the bits differ
            let ur = lhs.unknown_word_or_zero(i)
                | rhs.unknown_word_or_zero(i)
                | (lhs.word(i) ^ rhs.word(i));
            unk[i] = ur;
            val[i] = !ur & lhs.word(i) & rhs.word(i);
        }
        result.clear_unused_bits();
        result
    }
}

/// Bit-for-bit equality across all four states: X only equals X, Z only
/// equals Z. Differing widths extend first (sign extension when both are
/// signed), so `4'sd-1` exactly equals `8'sd-1`.
pub fn exactly_equal(lhs: &SvInt, rhs: &SvInt) -> bool {
    if !lhs.unknown && !rhs.unknown {
        return lhs.equals(rhs).is_true();
    }
    if lhs.unknown != rhs.unknown {
        return false;
    }

    if lhs.width != rhs.width {
        let both_signed = lhs.signed && rhs.signed;
        if lhs.width < rhs.width {
            return exactly_equal(&extend(lhs, rhs.width, both_signed), rhs);
        }
        return exactly_equal(lhs, &extend(rhs, lhs.width, both_signed));
    }

    lhs.raw() == rhs.raw()
}

/// Wildcard equality: X and Z bits in `rhs` match any bit of `lhs`. Any
/// unknown bit in `lhs` makes the whole answer X.
pub fn wildcard_equal(lhs: &SvInt, rhs: &SvInt) -> Logic {
    if !lhs.unknown && !rhs.unknown {
        return lhs.equals(rhs);
    }
    if lhs.unknown {
        return Logic::X;
    }

    if lhs.width != rhs.width {
        let both_signed = lhs.signed && rhs.signed;
        if lhs.width < rhs.width {
            return wildcard_equal(&extend(lhs, rhs.width, both_signed), rhs);
        }
        return wildcard_equal(lhs, &extend(rhs, lhs.width, both_signed));
    }

    let words = lhs.words_per_plane();
    for i in 0..words {
        let mask = !rhs.unknown_plane()[i];
        if lhs.word(i) & mask != rhs.word(i) & mask {
            return Logic::Zero;
        }
    }
    Logic::One
}
