#![cfg(feature = "serde")]

use big_integer::BigInteger;
use serde_derive::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Account {
    id: u32,
    balance: BigInteger,
}

#[test]
fn test_serialize_as_string() {
    let n: BigInteger = "-123456789012345678901234567890".parse().unwrap();
    let json = serde_json::to_string(&n).unwrap();
    assert_eq!(json, "\"-123456789012345678901234567890\"");

    let json = serde_json::to_string(&BigInteger::zero()).unwrap();
    assert_eq!(json, "\"0\"");
}

#[test]
fn test_deserialize_string() {
    let n: BigInteger = serde_json::from_str("\"340282366920938463463374607431768211456\"").unwrap();
    assert_eq!(n, BigInteger::from(u128::MAX) + BigInteger::one());

    let n: BigInteger = serde_json::from_str("\"-0\"").unwrap();
    assert_eq!(n, BigInteger::zero());
}

#[test]
fn test_deserialize_native_integers() {
    let n: BigInteger = serde_json::from_str("-42").unwrap();
    assert_eq!(n, -42);

    let n: BigInteger = serde_json::from_str("18446744073709551615").unwrap();
    assert_eq!(n, u64::MAX);
}

#[test]
fn test_deserialize_errors() {
    let err = serde_json::from_str::<BigInteger>("\"12x\"").unwrap_err();
    assert!(err.to_string().contains("invalid digit found in string at column 3"), "{}", err);

    let err = serde_json::from_str::<BigInteger>("\"\"").unwrap_err();
    assert!(err.to_string().contains("an integer or a decimal string"), "{}", err);

    let err = serde_json::from_str::<BigInteger>("true").unwrap_err();
    assert!(err.to_string().contains("an integer or a decimal string"), "{}", err);

    assert!(serde_json::from_str::<BigInteger>("1.5").is_err());
}

#[test]
fn test_struct_field() {
    let account = Account {
        id: 7,
        balance: "-99999999999999999999999".parse().unwrap(),
    };
    let json = serde_json::to_string(&account).unwrap();
    assert_eq!(json, r#"{"id":7,"balance":"-99999999999999999999999"}"#);
    let back: Account = serde_json::from_str(&json).unwrap();
    assert_eq!(back, account);
}
