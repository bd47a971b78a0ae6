//! Bitwise operators with per-bit four-state propagation, and the unary
//! reductions. Each operator's plane formulas implement the 4-state truth
//! tables; `u` is the unknown plane and `v` the value plane.

use std::ops::{BitAndAssign, BitOrAssign, BitXorAssign};

use crate::logic::Logic;

use super::{extend, Payload, SvInt};

impl BitAndAssign<&SvInt> for SvInt {
    fn bitand_assign(&mut self, rhs: &SvInt) {
        if self.width != rhs.width {
            let both_signed = self.signed && rhs.signed;
            if self.width < rhs.width {
                *self = extend(self, rhs.width, both_signed);
            } else {
                *self &= &extend(rhs, self.width, both_signed);
                return;
            }
        }

        if !self.unknown && !rhs.unknown {
            match (&mut self.data, &rhs.data) {
                (Payload::Inline(a), Payload::Inline(b)) => *a &= *b,
                _ => {
                    for (a, b) in self.raw_mut().iter_mut().zip(rhs.raw()) {
                        *a &= *b;
                    }
                }
            }
            return;
        }

        self.make_unknown();
        let words = self.words_per_plane();
        let (val, unk) = self.planes_mut();
        for i in 0..words {
            let va = val[i];
            let ua = unk[i];
            let vb = rhs.word(i);
            let ub = rhs.unknown_word_or_zero(i);
            // 0 wins over anything; otherwise any unknown side poisons
            let ur = (ua | va) & (ub | vb) & (ua | ub);
            unk[i] = ur;
            val[i] = !ur & va & vb;
        }
        self.clear_unused_bits();
        self.check_unknown();
    }
}

impl BitOrAssign<&SvInt> for SvInt {
    fn bitor_assign(&mut self, rhs: &SvInt) {
        if self.width != rhs.width {
            let both_signed = self.signed && rhs.signed;
            if self.width < rhs.width {
                *self = extend(self, rhs.width, both_signed);
            } else {
                *self |= &extend(rhs, self.width, both_signed);
                return;
            }
        }

        if !self.unknown && !rhs.unknown {
            match (&mut self.data, &rhs.data) {
                (Payload::Inline(a), Payload::Inline(b)) => *a |= *b,
                _ => {
                    for (a, b) in self.raw_mut().iter_mut().zip(rhs.raw()) {
                        *a |= *b;
                    }
                }
            }
            return;
        }

        self.make_unknown();
        let words = self.words_per_plane();
        let (val, unk) = self.planes_mut();
        for i in 0..words {
            let va = val[i];
            let ua = unk[i];
            let vb = rhs.word(i);
            let ub = rhs.unknown_word_or_zero(i);
            // 1 wins over anything; otherwise any unknown side poisons
            let ur = (ua & (ub | !vb)) | (!va & ub);
            unk[i] = ur;
            val[i] = !ur & (va | vb);
        }
        self.clear_unused_bits();
        self.check_unknown();
    }
}

impl BitXorAssign<&SvInt> for SvInt {
    fn bitxor_assign(&mut self, rhs: &SvInt) {
        if self.width != rhs.width {
            let both_signed = self.signed && rhs.signed;
            if self.width < rhs.width {
                *self = extend(self, rhs.width, both_signed);
            } else {
                *self ^= &extend(rhs, self.width, both_signed);
                return;
            }
        }

        if !self.unknown && !rhs.unknown {
            match (&mut self.data, &rhs.data) {
                (Payload::Inline(a), Payload::Inline(b)) => *a ^= *b,
                _ => {
                    for (a, b) in self.raw_mut().iter_mut().zip(rhs.raw()) {
                        *a ^= *b;
                    }
                }
            }
            return;
        }

        self.make_unknown();
        let words = self.words_per_plane();
        let (val, unk) = self.planes_mut();
        for i in 0..words {
            let ua = unk[i];
            let ub = rhs.unknown_word_or_zero(i);
            let ur = ua | ub;
            unk[i] = ur;
            val[i] = !ur & (val[i] ^ rhs.word(i));
        }
        self.clear_unused_bits();
        self.check_unknown();
    }
}

impl SvInt {
    /// Bitwise exclusive-nor.
    pub fn xnor(&self, rhs: &SvInt) -> SvInt {
        if self.width != rhs.width {
            let both_signed = self.signed && rhs.signed;
            if self.width < rhs.width {
                return extend(self, rhs.width, both_signed).xnor(rhs);
            }
            return self.xnor(&extend(rhs, self.width, both_signed));
        }

        let mut result = self.clone();
        if !self.unknown && !rhs.unknown {
            match (&mut result.data, &rhs.data) {
                (Payload::Inline(a), Payload::Inline(b)) => *a = !(*a ^ *b),
                _ => {
                    for (a, b) in result.raw_mut().iter_mut().zip(rhs.raw()) {
                        *a = !(*a ^ *b);
                    }
                }
            }
        } else {
            result.make_unknown();
            let words = result.words_per_plane();
            let (val, unk) = result.planes_mut();
            for i in 0..words {
                let ur = unk[i] | rhs.unknown_word_or_zero(i);
                unk[i] = ur;
                val[i] = !ur & !(val[i] ^ rhs.word(i));
            }
        }
        result.clear_unused_bits();
        result.check_unknown();
        result
    }

    /// Bitwise complement. Unknown bits stay unknown, with Z collapsing
    /// to X.
    pub fn bitnot(&self) -> SvInt {
        let mut result = self.clone();
        let words = result.words_per_plane();
        match &mut result.data {
            Payload::Inline(v) => *v ^= u64::MAX,
            Payload::Heap(buf) => {
                for w in &mut buf[..words] {
                    *w ^= u64::MAX;
                }
            }
        }
        if result.unknown {
            let (val, unk) = result.planes_mut();
            for (v, &u) in val.iter_mut().zip(unk.iter()) {
                *v &= !u;
            }
        }
        result.clear_unused_bits();
        result
    }

    /// Unary AND reduction: 1 iff every bit is 1.
    pub fn reduction_and(&self) -> Logic {
        if self.unknown {
            return Logic::X;
        }
        let (_, mask) = self.top_word_mask();
        let plane = self.value_plane();
        for &w in &plane[..plane.len() - 1] {
            if w != u64::MAX {
                return Logic::Zero;
            }
        }
        Logic::from(plane[plane.len() - 1] == mask)
    }

    /// Unary OR reduction: 1 iff any bit is 1.
    pub fn reduction_or(&self) -> Logic {
        if self.unknown {
            return Logic::X;
        }
        Logic::from(!self.is_zero_value())
    }

    /// Unary XOR reduction: the parity of the set bits.
    pub fn reduction_xor(&self) -> Logic {
        if self.unknown {
            return Logic::X;
        }
        Logic::from(self.count_population() % 2 == 1)
    }
}
