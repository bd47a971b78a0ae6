//! Division, remainder, and modular exponentiation.
//!
//! The unsigned kernel peels off the easy cases (single word, short
//! dividend, single-limb divisor) and falls back to Knuth Algorithm D over
//! 32-bit half-words for the rest. Signed variants divide magnitudes and
//! restore the sign afterwards: the quotient is negative when operand signs
//! differ, the remainder takes the dividend's sign.

use std::ops::{Div, Rem};

use smallvec::{smallvec, SmallVec};

use crate::bitops::{self, num_words, split_words, which_word};

use super::{extend, Payload, SvInt};

type Scratch32 = SmallVec<[u32; 128]>;

impl Div<&SvInt> for &SvInt {
    type Output = SvInt;

    fn div(self, rhs: &SvInt) -> SvInt {
        let both_signed = self.signed && rhs.signed;
        if self.width != rhs.width {
            if self.width < rhs.width {
                return &extend(self, rhs.width, both_signed) / rhs;
            }
            return self / &extend(rhs, self.width, both_signed);
        }

        // Unknowns and division by zero both produce all X's.
        if self.unknown || rhs.unknown || rhs.is_zero_value() {
            return SvInt::create_fill_x(self.width, both_signed);
        }

        if both_signed {
            if self.is_negative() {
                if rhs.is_negative() {
                    return SvInt::udiv(&-self, &-rhs, true);
                }
                return -&SvInt::udiv(&-self, rhs, true);
            }
            if rhs.is_negative() {
                return -&SvInt::udiv(self, &-rhs, true);
            }
        }

        SvInt::udiv(self, rhs, both_signed)
    }
}

impl Rem<&SvInt> for &SvInt {
    type Output = SvInt;

    fn rem(self, rhs: &SvInt) -> SvInt {
        let both_signed = self.signed && rhs.signed;
        if self.width != rhs.width {
            if self.width < rhs.width {
                return &extend(self, rhs.width, both_signed) % rhs;
            }
            return self % &extend(rhs, self.width, both_signed);
        }

        if self.unknown || rhs.unknown || rhs.is_zero_value() {
            return SvInt::create_fill_x(self.width, both_signed);
        }

        if both_signed {
            if self.is_negative() {
                if rhs.is_negative() {
                    return -&SvInt::urem(&-self, &-rhs, true);
                }
                return -&SvInt::urem(&-self, rhs, true);
            }
            if rhs.is_negative() {
                return SvInt::urem(self, &-rhs, true);
            }
        }

        SvInt::urem(self, rhs, both_signed)
    }
}

impl SvInt {
    /// Unsigned quotient. Operands have equal widths, no unknowns, and a
    /// nonzero divisor; magnitudes only.
    fn udiv(lhs: &SvInt, rhs: &SvInt, both_signed: bool) -> SvInt {
        if let (Payload::Inline(a), Payload::Inline(b)) = (&lhs.data, &rhs.data) {
            return SvInt::new(lhs.width, a / b, both_signed);
        }

        let (lhs_words, rhs_words) = (lhs.active_words(), rhs.active_words());

        // 0 / y
        if lhs_words == 0 {
            return SvInt::new(lhs.width, 0, both_signed);
        }
        // x / y where x < y
        if lhs_words < rhs_words || lhs.ult(rhs) {
            return SvInt::new(lhs.width, 0, both_signed);
        }
        // both fit a single word after trimming
        if lhs_words == 1 && rhs_words == 1 {
            return unsigned_word_result(lhs.width, lhs.word(0) / rhs.word(0), both_signed);
        }

        let (quotient, _) = divide(lhs, lhs_words, rhs, rhs_words);
        quotient
    }

    /// Unsigned remainder under the same preconditions as [`Self::udiv`].
    fn urem(lhs: &SvInt, rhs: &SvInt, both_signed: bool) -> SvInt {
        if let (Payload::Inline(a), Payload::Inline(b)) = (&lhs.data, &rhs.data) {
            return SvInt::new(lhs.width, a % b, both_signed);
        }

        let (lhs_words, rhs_words) = (lhs.active_words(), rhs.active_words());

        // 0 % y
        if lhs_words == 0 {
            return SvInt::new(lhs.width, 0, both_signed);
        }
        // x % y where x < y
        if lhs_words < rhs_words || lhs.ult(rhs) {
            return lhs.clone();
        }
        if lhs_words == 1 {
            return unsigned_word_result(lhs.width, lhs.word(0) % rhs.word(0), both_signed);
        }

        let (_, remainder) = divide(lhs, lhs_words, rhs, rhs_words);
        remainder
    }

    /// Number of 64-bit words holding set value bits.
    fn active_words(&self) -> usize {
        let bits = self.active_bits();
        if bits == 0 {
            0
        } else {
            which_word(bits - 1) + 1
        }
    }

    /// Exponentiation by squaring with the result width as the modulus
    /// (everything is already mod `2^width`). Exponent is a known,
    /// non-negative value.
    pub(crate) fn mod_pow(base: &SvInt, exponent: &SvInt, both_signed: bool) -> SvInt {
        // Scratch sized for the worst intermediate product of two
        // width-sized factors.
        let mut scratch: SmallVec<[u64; 32]> = smallvec![0; 2 * num_words(base.width)];
        let mut base_copy = base.clone();
        let mut result = SvInt::new(base.width, 1, false);

        fn mul_reduce(scratch: &mut [u64], left: &SvInt, right: &SvInt, into: &mut SvInt) {
            let lhs_words = left.active_words();
            let rhs_words = right.active_words();
            if lhs_words == 0 || rhs_words == 0 {
                into.truncated_copy_words(&[]);
                return;
            }
            scratch.fill(0);
            let dest_words = lhs_words + rhs_words;
            bitops::mul(
                &mut scratch[..dest_words],
                &left.value_plane()[..lhs_words],
                &right.value_plane()[..rhs_words],
            );
            into.truncated_copy_words(&scratch[..dest_words]);
        }

        let exponent_words = exponent.words_per_plane();
        for i in 0..exponent_words - 1 {
            let mut word = exponent.word(i);
            for _ in 0..u64::BITS {
                if word & 1 != 0 {
                    let left = result.clone();
                    mul_reduce(&mut scratch, &left, &base_copy, &mut result);
                }
                let left = base_copy.clone();
                mul_reduce(&mut scratch, &left, &left, &mut base_copy);
                word >>= 1;
            }
        }

        // The last word quits early once the remaining exponent bits are
        // all zero, skipping the trailing squarings.
        let mut word = exponent.word(exponent_words - 1);
        while word != 0 {
            if word & 1 != 0 {
                let left = result.clone();
                mul_reduce(&mut scratch, &left, &base_copy, &mut result);
            }
            if word != 1 {
                let left = base_copy.clone();
                mul_reduce(&mut scratch, &left, &left, &mut base_copy);
            }
            word >>= 1;
        }

        result.set_signed(both_signed);
        result
    }
}

/// Long-division driver shared by the arithmetic operators and decimal
/// formatting. `lhs_words`/`rhs_words` count the 64-bit words actually in
/// use; `lhs_words >= rhs_words` is required. Returns `(quotient,
/// remainder)` with the quotient at the dividend's width and the remainder
/// at the divisor's.
pub(crate) fn divide(
    lhs: &SvInt,
    lhs_words: usize,
    rhs: &SvInt,
    rhs_words: usize,
) -> (SvInt, SvInt) {
    debug_assert!(lhs_words >= rhs_words && rhs_words > 0);

    // Knuth needs 32-bit limbs so 64-bit intermediates fit natively; split
    // the storage on the fly into scratch space.
    let divisor_limbs = rhs_words * 2;
    let dividend_limbs = lhs_words * 2;

    let mut u: Scratch32 = smallvec![0; dividend_limbs + 1];
    let mut v: Scratch32 = smallvec![0; divisor_limbs];
    let mut q: Scratch32 = smallvec![0; dividend_limbs];
    let mut r: Scratch32 = smallvec![0; divisor_limbs];

    split_words(&lhs.value_plane()[..lhs_words], &mut u[..dividend_limbs]);
    split_words(&rhs.value_plane()[..rhs_words], &mut v);

    // The Knuth kernel fails on leading zero limbs; trim them.
    let mut n = divisor_limbs;
    let mut m = dividend_limbs - divisor_limbs;
    while n > 0 && v[n - 1] == 0 {
        n -= 1;
        m += 1;
    }
    let mut used = dividend_limbs;
    while used > 0 && u[used - 1] == 0 {
        used -= 1;
        m -= 1;
    }

    if n == 1 {
        // Single-limb divisor: a run of native 64-by-32 divides.
        let divisor = v[0] as u64;
        let mut rem = 0u32;
        for i in (0..n + m).rev() {
            let partial = (rem as u64) << 32 | u[i] as u64;
            q[i] = (partial / divisor) as u32;
            rem = (partial % divisor) as u32;
        }
        r[0] = rem;
    } else {
        bitops::knuth_div(
            &mut u[..n + m + 1],
            &mut v[..n],
            &mut q[..n + m],
            Some(&mut r[..n]),
            m,
            n,
        );
    }

    let both_signed = lhs.signed && rhs.signed;
    let quotient = build_divide_result(&q, lhs.width, both_signed, lhs_words);
    let remainder = build_divide_result(&r, rhs.width, both_signed, rhs_words);
    (quotient, remainder)
}

fn build_divide_result(limbs: &[u32], width: u32, signed: bool, num_words: usize) -> SvInt {
    if num_words == 1 {
        return unsigned_word_result(width, limbs[0] as u64 | (limbs[1] as u64) << 32, signed);
    }
    let mut result = SvInt::new(width, 0, signed);
    let raw = result.raw_mut();
    for i in 0..num_words {
        raw[i] = limbs[i * 2] as u64 | (limbs[i * 2 + 1] as u64) << 32;
    }
    result
}

/// A division result is a magnitude: build it zero extended even when the
/// signed flag ends up set, so a set bit 63 doesn't smear through the upper
/// words of a wide value.
fn unsigned_word_result(width: u32, value: u64, signed: bool) -> SvInt {
    let mut result = SvInt::new(width, value, false);
    result.set_signed(signed);
    result
}
