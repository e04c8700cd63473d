use big_integer::{BigInteger, Sign};

// Every path that can produce a zero magnitude must also reset the sign.
#[test]
fn test() {
    let five = BigInteger::from(5);
    let minus_five = BigInteger::from(-5);

    let results = [
        "-0".parse::<BigInteger>().unwrap(),
        "-000000000000000000000000000000".parse().unwrap(),
        &minus_five + &five,
        &minus_five - &minus_five,
        &minus_five * BigInteger::zero(),
        BigInteger::zero() * &minus_five,
        &minus_five % &five,
        BigInteger::from(-4) / BigInteger::from(5),
        -BigInteger::zero(),
        BigInteger::from(-6) & BigInteger::from(1),
        !BigInteger::from(-1),
        BigInteger::from(-1) << 0 >> 0 ^ BigInteger::from(-1),
    ];
    for n in &results {
        assert!(n.is_zero());
        assert_eq!(n.sign(), Sign::Plus);
        assert_eq!(n.to_string(), "0");
        assert_eq!(*n, BigInteger::zero());
    }

    let mut n = BigInteger::from(-1);
    n.increment();
    assert_eq!(n.sign(), Sign::Plus);
}
