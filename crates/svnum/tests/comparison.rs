use svnum::{exactly_equal, wildcard_equal, LiteralBase, Logic, SvInt};

fn sv(text: &str) -> SvInt {
    SvInt::from_string(text).unwrap()
}

#[test]
fn equality_of_known_values() {
    assert_eq!(sv("8'd5").equals(&sv("8'd5")), Logic::One);
    assert_eq!(sv("8'd5").equals(&sv("8'd6")), Logic::Zero);
    assert_eq!(sv("8'd5").not_equals(&sv("8'd6")), Logic::One);
}

#[test]
fn equality_with_unknowns_is_x() {
    let a = sv("4'bx");
    let b = sv("4'bx");
    assert_eq!(a.equals(&b), Logic::X, "x == x is x");
    assert!(exactly_equal(&a, &b), "but they are exactly equal");
}

#[test]
fn equality_unifies_widths() {
    // both signed: sign extension makes these the same value
    assert_eq!(sv("-4'sd1").equals(&sv("-8'sd1")), Logic::One);
    assert!(exactly_equal(&sv("-4'sd1"), &sv("-8'sd1")));

    // unsigned: zero extension, so 4'hf is 15, not -1
    assert_eq!(sv("4'hf").equals(&sv("8'hff")), Logic::Zero);
    assert_eq!(sv("4'hf").equals(&sv("8'h0f")), Logic::One);
}

#[test]
fn exactly_equal_distinguishes_x_and_z() {
    assert!(!exactly_equal(&sv("4'bx"), &sv("4'bz")));
    assert!(!exactly_equal(&sv("4'b10x0"), &sv("4'b10z0")));
    assert!(exactly_equal(&sv("4'b10z0"), &sv("4'b10z0")));
    assert!(!exactly_equal(&sv("4'b1000"), &sv("4'b10x0")));
}

#[test]
fn ordering_known_values() {
    assert_eq!(sv("8'd3").lt(&sv("8'd5")), Logic::One);
    assert_eq!(sv("8'd5").lt(&sv("8'd3")), Logic::Zero);
    assert_eq!(sv("8'd5").lt(&sv("8'd5")), Logic::Zero);
    assert_eq!(sv("8'd5").le(&sv("8'd5")), Logic::One);
    assert_eq!(sv("8'd5").ge(&sv("8'd5")), Logic::One);
    assert_eq!(sv("8'd6").gt(&sv("8'd5")), Logic::One);
}

#[test]
fn ordering_respects_signedness() {
    // signed: -1 < 1
    assert_eq!(SvInt::from(-1i8).lt(&SvInt::from(1i8)), Logic::One);
    // mixed flags compare unsigned: 0xff is 255
    assert_eq!(SvInt::from(-1i8).lt(&SvInt::from(1u8)), Logic::Zero);
    // both negative
    assert_eq!(SvInt::from(-2i8).lt(&SvInt::from(-1i8)), Logic::One);
    assert_eq!(SvInt::from(-1i8).lt(&SvInt::from(-2i8)), Logic::Zero);
    // most negative value compared against itself must terminate
    assert_eq!(SvInt::from(i8::MIN).lt(&SvInt::from(i8::MIN)), Logic::Zero);
    assert_eq!(SvInt::from(i8::MIN).le(&SvInt::from(i8::MIN)), Logic::One);
}

#[test]
fn ordering_wide_values() {
    let small = sv("128'hffffffffffffffff");
    let big = sv("128'h10000000000000000");
    assert_eq!(small.lt(&big), Logic::One);
    assert_eq!(big.lt(&small), Logic::Zero);
    assert_eq!(big.gt(&small), Logic::One);
}

#[test]
fn ordering_with_unknowns_is_x() {
    assert_eq!(sv("8'hx").lt(&sv("8'd5")), Logic::X);
    assert_eq!(sv("8'd5").ge(&sv("8'bz0")), Logic::X);
    assert_eq!(sv("8'd5").equals(&sv("8'bz0")), Logic::X);
}

#[test]
fn wildcard_equality_ignores_rhs_unknown_positions() {
    // z bits on the right are wildcards
    assert_eq!(
        wildcard_equal(&sv("8'b10101101"), &sv("8'b1010zzz1")),
        Logic::One
    );
    assert_eq!(
        wildcard_equal(&sv("8'b00101101"), &sv("8'b1010zzz1")),
        Logic::Zero,
        "bits outside the wildcard positions still have to match"
    );
    // but unknowns on the left poison the result
    assert_eq!(
        wildcard_equal(&sv("8'b1010110x"), &sv("8'b1010zzz1")),
        Logic::X
    );
    // fully known operands degenerate to plain equality
    assert_eq!(wildcard_equal(&sv("8'd9"), &sv("8'd9")), Logic::One);
}

#[test]
fn conditional_with_known_condition() {
    let a = sv("8'haa");
    let b = sv("8'hbb");
    let selected = SvInt::conditional(&sv("1'b1"), &a, &b);
    assert!(exactly_equal(&selected, &a));
    let selected = SvInt::conditional(&sv("1'b0"), &a, &b);
    assert!(exactly_equal(&selected, &b));

    // any nonzero condition selects the first operand
    let selected = SvInt::conditional(&sv("8'd2"), &a, &b);
    assert!(exactly_equal(&selected, &a));
}

#[test]
fn conditional_with_unknown_condition_reconciles() {
    let result = SvInt::conditional(&sv("1'bx"), &sv("8'b11001010"), &sv("8'b11000110"));
    assert_eq!(result.to_string_base(LiteralBase::Binary), "8'b1100xx10");

    // identical operands need no reconciliation
    let a = sv("8'hf0");
    let result = SvInt::conditional(&sv("1'bx"), &a, &a);
    assert!(!result.has_unknown());
    assert!(exactly_equal(&result, &a));

    // operand unknowns stay unknown
    let result = SvInt::conditional(&sv("1'bz"), &sv("4'b1x00"), &sv("4'b1100"));
    assert_eq!(result.to_string_base(LiteralBase::Binary), "4'b1x00");
}

#[test]
fn conditional_unifies_operand_widths() {
    let result = SvInt::conditional(&sv("1'b1"), &sv("4'hf"), &sv("8'h00"));
    assert_eq!(result.width(), 8);
    assert_eq!(result.as_integer::<u64>(), Some(0x0f));
}

#[test]
fn structural_equality_for_containers() {
    // PartialEq/Hash are structural: same width, flags, and bits
    assert_eq!(sv("8'd5"), sv("8'd5"));
    assert_ne!(sv("8'd5"), sv("16'd5"));
    assert_eq!(sv("4'bx"), sv("4'bx"));

    use std::collections::HashSet;
    let mut set = HashSet::new();
    set.insert(sv("8'd5"));
    assert!(set.contains(&sv("8'd5")));
    assert!(!set.contains(&sv("8'd6")));
}
