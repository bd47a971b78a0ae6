//! Four-state (`0`/`1`/`x`/`z`) fixed-width integers with SystemVerilog
//! semantics: width-modular arithmetic, sign-aware width unification, and
//! unknown-bit propagation through every operator.

mod bitops;
mod error;
mod literal;
mod logic;
mod svint;

pub use error::ParseError;
pub use literal::{Digit, LiteralBase};
pub use logic::Logic;
pub use svint::{
    concatenate, exactly_equal, extend, sign_extend, wildcard_equal, zero_extend, SvInt, MAX_BITS,
};
