use big_integer::BigInteger;

// Right shift floors while division truncates, so they only agree for
// non-negative values or exact divisions.
#[test]
fn test() {
    let two_to_the_70 = BigInteger::one() << 70;

    let n: BigInteger = "-1180591620717411303425".parse().unwrap();
    assert_eq!(&n >> 70, -2);
    assert_eq!(&n / &two_to_the_70, -1);

    let n = -&two_to_the_70;
    assert_eq!(&n >> 70, -1);
    assert_eq!(&n / &two_to_the_70, -1);

    let n = BigInteger::from(-1);
    assert_eq!(&n >> 1, -1);
    assert_eq!(&n / BigInteger::from(2), 0);

    let n: BigInteger = "1180591620717411303425".parse().unwrap();
    assert_eq!(&n >> 70, &n / &two_to_the_70);
}
