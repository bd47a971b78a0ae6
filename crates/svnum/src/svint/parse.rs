//! Literal text parsing: `from_string` handles the sized-literal grammar
//! (`[+|-] [size] ' [s] <base> digits`), `from_digits` folds digit
//! sequences into storage.

use std::str::FromStr;

use crate::bitops::{mask_bit, num_words, set_bits, shl_near_in_place, which_word, WORD_BITS};
use crate::error::ParseError;
use crate::literal::{decimal_digit_value, hex_digit_value, is_decimal_digit, Digit, LiteralBase};

use super::{SvInt, MAX_BITS};

impl SvInt {
    /// Parse SystemVerilog literal text. A plain number with no size or
    /// base is a 32-bit signed decimal. Underscores separate digits
    /// anywhere digits appear; `x`, `z` and `?` are unknown digits.
    pub fn from_string(s: &str) -> Result<SvInt, ParseError> {
        let chars: Vec<char> = s.chars().collect();
        if chars.is_empty() {
            return Err(ParseError::EmptyLiteral);
        }

        let mut pos = 0;
        let negative = chars[0] == '-';
        if chars[0] == '-' || chars[0] == '+' {
            pos += 1;
            if pos == chars.len() {
                return Err(ParseError::SignOnly);
            }
        }

        // Look for an optional size before an apostrophe, accumulating its
        // decimal value along the way.
        let mut size_bad = false;
        let mut size_overflow = false;
        let mut possible_size = 0u64;
        let mut apostrophe = None;
        for (i, &d) in chars.iter().enumerate().skip(pos) {
            if d == '\'' {
                apostrophe = Some(i);
                break;
            } else if is_decimal_digit(d) {
                possible_size = possible_size
                    .saturating_mul(10)
                    .saturating_add(decimal_digit_value(d) as u64);
                if possible_size > MAX_BITS as u64 {
                    size_overflow = true;
                }
            } else if d != '_' {
                size_bad = true;
            }
        }

        // Unsized numbers are 32-bit signed decimals.
        let mut signed = true;
        let mut bits = 32u32;
        let mut base = LiteralBase::Decimal;

        if let Some(ap) = apostrophe {
            if size_bad {
                return Err(ParseError::InvalidSizeDigit);
            }
            if size_overflow {
                return Err(ParseError::SizeTooLarge);
            }
            if possible_size == 0 {
                return Err(ParseError::ZeroSize);
            }
            bits = possible_size as u32;

            pos = ap + 1;
            if pos == chars.len() {
                return Err(ParseError::MissingBase);
            }
            if chars[pos] == 's' || chars[pos] == 'S' {
                signed = true;
                pos += 1;
                if pos == chars.len() {
                    return Err(ParseError::MissingBase);
                }
            } else {
                signed = false;
            }

            base = LiteralBase::from_char(chars[pos]).ok_or(ParseError::UnknownBase(chars[pos]))?;
            pos += 1;
            if pos == chars.len() {
                return Err(ParseError::MissingDigits);
            }
        } else if size_bad {
            return Err(ParseError::NotALiteral);
        }

        let mut digits = Vec::with_capacity(chars.len() - pos);
        for &d in &chars[pos..] {
            match d {
                '_' => continue,
                'x' | 'X' => digits.push(Digit::X),
                'z' | 'Z' | '?' => digits.push(Digit::Z),
                c => digits.push(Digit::Value(
                    hex_digit_value(c).ok_or(ParseError::InvalidDigit(c))?,
                )),
            }
        }

        let result = SvInt::from_digits(bits, base, signed, &digits)?;
        Ok(if negative { -&result } else { result })
    }

    /// Fold a digit sequence into a value of the given width. Digits that
    /// overflow the width truncate from the left. If the topmost written
    /// digit of a power-of-two base is X or Z, that state extends across
    /// the unused high bits (so `4'bx` is `xxxx`).
    pub fn from_digits(
        bits: u32,
        base: LiteralBase,
        signed: bool,
        digits: &[Digit],
    ) -> Result<SvInt, ParseError> {
        if digits.is_empty() {
            return Err(ParseError::MissingDigits);
        }
        debug_assert!(bits >= 1 && bits <= MAX_BITS);

        let radix = base.radix();
        let shift = base.shift();
        let any_unknown = digits.iter().any(|d| !matches!(d, Digit::Value(_)));

        // Fast path: fold in a plain machine word.
        if bits <= WORD_BITS && !any_unknown {
            let mut val = 0u64;
            for &d in digits {
                let Digit::Value(v) = d else { unreachable!() };
                if v as u32 >= radix {
                    return Err(ParseError::DigitTooLarge { digit: v, radix });
                }
                if shift != 0 {
                    val <<= shift;
                } else {
                    val = val.wrapping_mul(radix as u64);
                }
                val = val.wrapping_add(v as u64);
            }
            return Ok(SvInt::new(bits, val, signed));
        }

        if base == LiteralBase::Decimal {
            // Decimal can't hold individual unknown bits; a single unknown
            // digit fills the whole value.
            if any_unknown {
                if digits.len() != 1 {
                    return Err(ParseError::DecimalNotSingleUnknown);
                }
                return Ok(match digits[0] {
                    Digit::Z => SvInt::create_fill_z(bits, signed),
                    _ => SvInt::create_fill_x(bits, signed),
                });
            }

            let mut result = SvInt::new(bits, 0, signed);
            let radix_sv = SvInt::new(bits, 10, false);
            let mut digit_sv = SvInt::new(bits, 0, false);
            for &d in digits {
                let Digit::Value(v) = d else { unreachable!() };
                if v as u32 >= radix {
                    return Err(ParseError::DigitTooLarge { digit: v, radix });
                }
                result *= &radix_sv;
                digit_sv.raw_mut()[0] = v as u64;
                result += &digit_sv;
            }
            return Ok(result);
        }

        // Power-of-two slow path: shift both planes per digit and OR in the
        // digit's bit patterns.
        let mut result = SvInt::alloc_zeroed(bits, signed, any_unknown);
        let words = num_words(bits);
        let ones = (1u64 << shift) - 1;
        for &d in digits {
            let (value, unknown) = match d {
                Digit::X => (0, ones),
                Digit::Z => (ones, ones),
                Digit::Value(v) => {
                    if v as u32 >= radix {
                        return Err(ParseError::DigitTooLarge { digit: v, radix });
                    }
                    (v as u64, 0)
                }
            };

            if shift >= bits {
                // fewer bits than one digit; only the last digit survives
                result.raw_mut()[0] = 0;
                if any_unknown {
                    result.raw_mut()[words] = 0;
                }
            } else {
                shl_near_in_place(&mut result.raw_mut()[..words], shift);
                if any_unknown {
                    shl_near_in_place(&mut result.raw_mut()[words..], shift);
                }
            }

            result.raw_mut()[0] |= value;
            if any_unknown {
                result.raw_mut()[words] |= unknown;
            }
        }

        result.clear_unused_bits();
        result.check_unknown();

        // Sign-extend a topmost unknown digit state across the unused high
        // bits.
        if result.has_unknown() {
            let given_bits = digits.len() as u64 * shift as u64;
            if given_bits < bits as u64 {
                let top = given_bits as u32 - 1;
                let (val, unk) = result.planes_mut();
                if unk[which_word(top)] & mask_bit(top) != 0 {
                    set_bits(unk, given_bits as usize, (bits as u64 - given_bits) as usize);
                    if val[which_word(top)] & mask_bit(top) != 0 {
                        set_bits(val, given_bits as usize, (bits as u64 - given_bits) as usize);
                    }
                }
            }
        }

        Ok(result)
    }
}

impl FromStr for SvInt {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<SvInt, ParseError> {
        SvInt::from_string(s)
    }
}
