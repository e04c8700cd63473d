#![no_main]

use big_integer::BigInteger;
use libfuzzer_sys::fuzz_target;

fn from_bytes(bytes: &[u8]) -> BigInteger {
    let (negative, digits) = match bytes.split_first() {
        Some((&sign, rest)) => (sign & 1 == 1, rest),
        None => (false, bytes),
    };
    let mut n = BigInteger::zero();
    for &byte in digits {
        n = (n << 8) | BigInteger::from(byte);
    }
    if negative {
        -n
    } else {
        n
    }
}

fuzz_target!(|data: &[u8]| {
    let (a, b) = data.split_at(data.len() / 2);
    let (a, b) = (from_bytes(a), from_bytes(b));
    match a.div_rem(&b) {
        Ok((q, r)) => {
            assert_eq!(&q * &b + &r, a);
            assert!(r.abs() < b.abs());
        }
        Err(_) => assert!(b.is_zero()),
    }
});
