use big_integer::BigInteger;

// The minimum of a signed type has no positive counterpart in that type.
#[test]
fn test() {
    let n = BigInteger::from(i64::MIN);
    assert_eq!(n.to_string(), "-9223372036854775808");
    assert_eq!(i64::try_from(&n).unwrap(), i64::MIN);
    assert_eq!((-&n).to_string(), "9223372036854775808");
    assert!(i64::try_from(-&n).is_err());

    let n = BigInteger::from(i128::MIN);
    assert_eq!(n, i128::MIN);
    assert_eq!(i128::try_from(&n).unwrap(), i128::MIN);
    assert_eq!(u128::try_from(-&n).unwrap(), 1u128 << 127);

    let n: BigInteger = "-170141183460469231731687303715884105729".parse().unwrap();
    assert!(i128::try_from(&n).is_err());
    assert_ne!(n, i128::MIN);
}
