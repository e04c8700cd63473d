use big_integer::{BigInteger, Category, ErrorCode, Sign};

#[test]
fn integer() {
    assert_eq!(format!("{:?}", BigInteger::from(1)), "BigInteger(1)");
    assert_eq!(format!("{:?}", BigInteger::from(-1)), "BigInteger(-1)");
    assert_eq!(format!("{:?}", BigInteger::zero()), "BigInteger(0)");
    assert_eq!(
        format!("{:?}", BigInteger::from(u128::MAX)),
        "BigInteger(340282366920938463463374607431768211455)",
    );
}

#[test]
fn sign() {
    assert_eq!(format!("{:?}", Sign::Minus), "Minus");
    assert_eq!(format!("{:?}", BigInteger::from(-9).sign()), "Minus");
    assert_eq!(format!("{:?}", BigInteger::zero().sign()), "Plus");
}

#[test]
fn display_flags() {
    let n = BigInteger::from(-42);
    assert_eq!(format!("{}", n), "-42");
    assert_eq!(format!("{:6}", n), "   -42");
    assert_eq!(format!("{:<6}|", n), "-42   |");
    assert_eq!(format!("{:^7}", n), "  -42  ");
    assert_eq!(format!("{:06}", n), "-00042");
    assert_eq!(format!("{:+}", BigInteger::from(42)), "+42");
    assert_eq!(format!("{:+}", BigInteger::zero()), "+0");
    assert_eq!(format!("{:*>5}", BigInteger::from(7)), "****7");
}

#[test]
fn display_matches_primitive() {
    for &n in &[0i128, 1, -1, 999_999_999, 1_000_000_000, -1_000_000_001, i128::MIN, i128::MAX] {
        let big = BigInteger::from(n);
        assert_eq!(big.to_string(), n.to_string());
        assert_eq!(format!("{:>50}", big), format!("{:>50}", n));
        assert_eq!(format!("{:+050}", big), format!("{:+050}", n));
    }
}

#[test]
fn error() {
    let err = "12a".parse::<BigInteger>().unwrap_err();
    let expected = "Error(\"invalid digit found in string\", column: 3)";
    assert_eq!(format!("{:?}", err), expected);

    let err = BigInteger::one().div_rem(&BigInteger::zero()).unwrap_err();
    let expected = "Error(\"attempt to divide by zero\", column: 0)";
    assert_eq!(format!("{:?}", err), expected);
}

#[test]
fn error_display() {
    let err = "".parse::<BigInteger>().unwrap_err();
    assert_eq!(err.to_string(), "cannot parse integer from empty string");

    let err = "-".parse::<BigInteger>().unwrap_err();
    assert_eq!(err.to_string(), "expected at least one digit after the sign at column 2");

    let err = u32::try_from(BigInteger::from(-1)).unwrap_err();
    assert_eq!(err.to_string(), "integer out of range for the target type");
    assert_eq!(err.classify(), Category::Range);
    assert_eq!(format!("{:?}", err.code()), "OutOfRange");
    assert_eq!(ErrorCode::MissingDigits.to_string(), "expected at least one digit after the sign");
}
