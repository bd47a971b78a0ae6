//! Operator overloads. These are thin sugar over the compound-assign
//! primitives and named methods; no semantics live here.

use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div, DivAssign,
    Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, Shr, Sub, SubAssign,
};

use super::SvInt;

macro_rules! binop_from_assign {
    ($op:ident, $method:ident, $assign_op:ident, $assign_method:ident) => {
        impl $op<&SvInt> for &SvInt {
            type Output = SvInt;
            fn $method(self, rhs: &SvInt) -> SvInt {
                let mut result = self.clone();
                $assign_op::$assign_method(&mut result, rhs);
                result
            }
        }

        impl $op<&SvInt> for SvInt {
            type Output = SvInt;
            fn $method(mut self, rhs: &SvInt) -> SvInt {
                $assign_op::$assign_method(&mut self, rhs);
                self
            }
        }

        impl $op<SvInt> for SvInt {
            type Output = SvInt;
            fn $method(mut self, rhs: SvInt) -> SvInt {
                $assign_op::$assign_method(&mut self, &rhs);
                self
            }
        }

        impl $op<SvInt> for &SvInt {
            type Output = SvInt;
            fn $method(self, rhs: SvInt) -> SvInt {
                let mut result = self.clone();
                $assign_op::$assign_method(&mut result, &rhs);
                result
            }
        }

        impl $assign_op<SvInt> for SvInt {
            fn $assign_method(&mut self, rhs: SvInt) {
                $assign_op::$assign_method(self, &rhs);
            }
        }
    };
}

binop_from_assign!(Add, add, AddAssign, add_assign);
binop_from_assign!(Sub, sub, SubAssign, sub_assign);
binop_from_assign!(Mul, mul, MulAssign, mul_assign);
binop_from_assign!(BitAnd, bitand, BitAndAssign, bitand_assign);
binop_from_assign!(BitOr, bitor, BitOrAssign, bitor_assign);
binop_from_assign!(BitXor, bitxor, BitXorAssign, bitxor_assign);

macro_rules! binop_from_ref {
    ($op:ident, $method:ident) => {
        impl $op<&SvInt> for SvInt {
            type Output = SvInt;
            fn $method(self, rhs: &SvInt) -> SvInt {
                $op::$method(&self, rhs)
            }
        }

        impl $op<SvInt> for SvInt {
            type Output = SvInt;
            fn $method(self, rhs: SvInt) -> SvInt {
                $op::$method(&self, &rhs)
            }
        }

        impl $op<SvInt> for &SvInt {
            type Output = SvInt;
            fn $method(self, rhs: SvInt) -> SvInt {
                $op::$method(self, &rhs)
            }
        }
    };
}

// Div and Rem for &SvInt are implemented next to the division kernel.
binop_from_ref!(Div, div);
binop_from_ref!(Rem, rem);

impl DivAssign<&SvInt> for SvInt {
    fn div_assign(&mut self, rhs: &SvInt) {
        *self = &*self / rhs;
    }
}

impl RemAssign<&SvInt> for SvInt {
    fn rem_assign(&mut self, rhs: &SvInt) {
        *self = &*self % rhs;
    }
}

impl Neg for &SvInt {
    type Output = SvInt;

    fn neg(self) -> SvInt {
        if self.has_unknown() {
            return SvInt::create_fill_x(self.width(), self.is_signed());
        }
        SvInt::new(self.width(), 0, self.is_signed()) - self
    }
}

impl Neg for SvInt {
    type Output = SvInt;

    fn neg(self) -> SvInt {
        -&self
    }
}

impl Not for &SvInt {
    type Output = SvInt;

    fn not(self) -> SvInt {
        self.bitnot()
    }
}

impl Not for SvInt {
    type Output = SvInt;

    fn not(self) -> SvInt {
        self.bitnot()
    }
}

impl Shl<u32> for &SvInt {
    type Output = SvInt;

    fn shl(self, amount: u32) -> SvInt {
        self.shl_by(amount)
    }
}

impl Shl<u32> for SvInt {
    type Output = SvInt;

    fn shl(self, amount: u32) -> SvInt {
        self.shl_by(amount)
    }
}

impl Shl<&SvInt> for &SvInt {
    type Output = SvInt;

    fn shl(self, amount: &SvInt) -> SvInt {
        SvInt::shl(self, amount)
    }
}

impl Shl<&SvInt> for SvInt {
    type Output = SvInt;

    fn shl(self, amount: &SvInt) -> SvInt {
        SvInt::shl(&self, amount)
    }
}

/// `>>` is the logical right shift; use [`SvInt::ashr`] for the arithmetic
/// `>>>`.
impl Shr<u32> for &SvInt {
    type Output = SvInt;

    fn shr(self, amount: u32) -> SvInt {
        self.lshr_by(amount)
    }
}

impl Shr<u32> for SvInt {
    type Output = SvInt;

    fn shr(self, amount: u32) -> SvInt {
        self.lshr_by(amount)
    }
}

impl Shr<&SvInt> for &SvInt {
    type Output = SvInt;

    fn shr(self, amount: &SvInt) -> SvInt {
        self.lshr(amount)
    }
}

impl Shr<&SvInt> for SvInt {
    type Output = SvInt;

    fn shr(self, amount: &SvInt) -> SvInt {
        self.lshr(amount)
    }
}
