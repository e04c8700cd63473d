#![no_main]
use big_integer::BigInteger;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(n) = s.parse::<BigInteger>() {
            let formatted = n.to_string();
            assert_eq!(formatted.parse::<BigInteger>().unwrap(), n);
        }
    }
});
