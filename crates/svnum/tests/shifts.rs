use svnum::{exactly_equal, LiteralBase, Logic, SvInt};

fn sv(text: &str) -> SvInt {
    SvInt::from_string(text).unwrap()
}

#[test]
fn shift_left_basic() {
    let value = sv("8'b101") << 2;
    assert_eq!(value.as_integer::<u64>(), Some(0b10100));

    // identity and drain
    assert!(exactly_equal(&(&sv("8'ha5") << 0u32), &sv("8'ha5")));
    assert_eq!((sv("8'hff") << 8).active_bits(), 0);
    assert_eq!((sv("8'hff") << 200).active_bits(), 0);
}

#[test]
fn shift_left_crosses_word_boundaries() {
    let value = &sv("100'h1") << &sv("7'd99");
    assert_eq!(value.width(), 100);
    assert_eq!(value.bit(99), Logic::One);
    assert_eq!(value.active_bits(), 100);
    assert!(exactly_equal(&value, &sv("100'h8000000000000000000000000")));
}

#[test]
fn logical_shift_right() {
    let value = sv("8'b10100000") >> 5;
    assert_eq!(value.as_integer::<u64>(), Some(0b101));

    let wide = sv("128'h123456789abcdef0000000000000000") >> 100;
    assert_eq!(wide.as_integer::<u64>(), Some(0x123456));

    assert_eq!((sv("8'hff") >> 8).active_bits(), 0);
}

#[test]
fn shift_roundtrip_masks_high_bits() {
    // a << k >> k keeps only the low width-k bits
    let a = sv("16'hffff");
    for k in [0u32, 1, 7, 15, 16] {
        let roundtrip = (&a << k) >> k;
        let mask = if k >= 16 { sv("16'h0") } else { a.lshr_by(k) };
        assert!(exactly_equal(&roundtrip, &mask), "k = {k}");
    }
}

#[test]
fn shifts_move_the_unknown_plane() {
    let value = sv("8'bx1");
    // the topmost x extended across the high bits at parse time
    assert_eq!(value.to_string_base(LiteralBase::Binary), "8'bxxxxxxx1");

    let shifted = &value >> 1u32;
    assert_eq!(shifted.to_string_base(LiteralBase::Binary), "8'b0xxxxxxx");

    let left = &sv("8'b0z") << 4;
    assert_eq!(left.bit(4), Logic::Z);
    assert_eq!(left.bit(0), Logic::Zero);
}

#[test]
fn shifting_out_all_unknowns_downgrades() {
    let value = sv("8'bx0000000");
    let shifted = &value << 1u32;
    assert!(!shifted.has_unknown(), "the only x bit fell off the top");
    assert_eq!(shifted.active_bits(), 0);

    let value = sv("8'b0000000x");
    let shifted = &value >> 1u32;
    assert!(!shifted.has_unknown());
}

#[test]
fn shift_by_unknown_amount_is_all_x() {
    let all_x = &sv("8'd1") << &sv("4'bx");
    assert_eq!(all_x.to_string_base(LiteralBase::Binary), "8'bxxxxxxxx");

    let all_x = &sv("8'd1") >> &sv("4'bz");
    assert!(all_x.has_unknown());

    let all_x = sv("8'sd4").ashr(&sv("4'bx"));
    assert!(all_x.has_unknown());
}

#[test]
fn arithmetic_shift_replicates_sign() {
    let value = SvInt::from(-128i8).ashr_by(2);
    assert_eq!(value.as_integer::<i32>(), Some(-32));

    let value = SvInt::from(-1i8).ashr_by(7);
    assert_eq!(value.as_integer::<i32>(), Some(-1));

    // unsigned operands shift logically
    let value = SvInt::new(8, 0x80, false).ashr_by(2);
    assert_eq!(value.as_integer::<u64>(), Some(0x20));

    // non-negative signed operands fill with zeros
    let value = SvInt::from(64i8).ashr_by(2);
    assert_eq!(value.as_integer::<i32>(), Some(16));
}

#[test]
fn arithmetic_shift_saturates_at_width() {
    assert_eq!(SvInt::from(-5i8).ashr_by(100).as_integer::<i32>(), Some(-1));
    assert_eq!(SvInt::from(5i8).ashr_by(100).as_integer::<i32>(), Some(0));
}

#[test]
fn arithmetic_shift_replicates_unknown_sign() {
    let value = sv("8'sbx0000000").ashr_by(1);
    assert_eq!(value.to_string_base(LiteralBase::Binary), "8'sbxx000000");

    let value = sv("8'sbz0000000").ashr_by(2);
    assert_eq!(value.to_string_base(LiteralBase::Binary), "8'sbzzz00000");
}

#[test]
fn arithmetic_shift_wide() {
    let value = sv("128'h80000000000000000000000000000000");
    let mut signed = value.clone();
    signed.set_signed(true);
    let shifted = signed.ashr_by(64);
    assert!(exactly_equal(
        &shifted,
        &{
            let mut expect = sv("128'hffffffffffffffff8000000000000000");
            expect.set_signed(true);
            expect
        }
    ));
}
