//! Deserialize a `BigInteger` from a decimal string or a native integer.

use crate::integer::BigInteger;
use crate::parse::parse_decimal;
use core::fmt;
use serde::de::{self, Deserialize, Deserializer, Unexpected, Visitor};

struct BigIntegerVisitor;

impl<'de> Visitor<'de> for BigIntegerVisitor {
    type Value = BigInteger;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an integer or a decimal string")
    }

    #[inline]
    fn visit_i64<E>(self, value: i64) -> Result<BigInteger, E> {
        Ok(BigInteger::from(value))
    }

    #[inline]
    fn visit_u64<E>(self, value: u64) -> Result<BigInteger, E> {
        Ok(BigInteger::from(value))
    }

    #[inline]
    fn visit_i128<E>(self, value: i128) -> Result<BigInteger, E> {
        Ok(BigInteger::from(value))
    }

    #[inline]
    fn visit_u128<E>(self, value: u128) -> Result<BigInteger, E> {
        Ok(BigInteger::from(value))
    }

    fn visit_str<E>(self, value: &str) -> Result<BigInteger, E>
    where
        E: de::Error,
    {
        parse_decimal(value.as_bytes()).map_err(|err| {
            if err.column() == 0 {
                E::invalid_value(Unexpected::Str(value), &self)
            } else {
                E::custom(err)
            }
        })
    }
}

impl<'de> Deserialize<'de> for BigInteger {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<BigInteger, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(BigIntegerVisitor)
    }
}
