use thiserror::Error;

use crate::svint::MAX_BITS;

/// Errors produced while turning literal text into a value.
///
/// These are recoverable: the caller (typically a lexer emitting a
/// diagnostic) decides what to do with the bad literal. Contract violations
/// such as out-of-range slices are debug assertions instead, not variants
/// here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("literal string is empty")]
    EmptyLiteral,

    #[error("literal has a sign but nothing after it")]
    SignOnly,

    #[error("size specifier contains a character that is not a digit")]
    InvalidSizeDigit,

    #[error("size specifier exceeds the maximum of {MAX_BITS} bits")]
    SizeTooLarge,

    #[error("size specifier must be greater than zero")]
    ZeroSize,

    #[error("expected a base specifier after the apostrophe")]
    MissingBase,

    #[error("'{0}' is not a valid base specifier")]
    UnknownBase(char),

    #[error("expected digits after the base specifier")]
    MissingDigits,

    #[error("'{0}' is not a valid digit")]
    InvalidDigit(char),

    #[error("digit {digit} is too large for radix {radix}")]
    DigitTooLarge { digit: u8, radix: u32 },

    #[error("a decimal literal with an unknown digit must have exactly one digit")]
    DecimalNotSingleUnknown,

    #[error("not an integer or sized literal")]
    NotALiteral,
}
