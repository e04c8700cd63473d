//! Decimal string to integer conversion.
//!
//! Grammar: an optional leading `-`, followed by one or more ASCII digits.
//! Leading zeros and `-0` are accepted and produce canonical values.

use crate::error::{Error, ErrorCode, Result};
use crate::integer::{BigInteger, Sign};
use crate::math::{small, Limb, LimbVecType, LIMB_BITS};
use core::str::FromStr;

/// Number of decimal digits consumed per step.
///
/// `10^9` is the largest power of ten below `2^30`, so a chunk value and
/// its scale factor each fit in a single limb of either width.
pub(crate) const DIGITS_PER_CHUNK: usize = 9;

/// Scale factors for partial and full chunks, indexed by digit count.
const POW10: [Limb; DIGITS_PER_CHUNK + 1] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
];

// Convert u8 to digit.
#[inline]
fn to_digit(c: u8) -> Limb {
    (c - b'0') as Limb
}

/// Parse the digits of a chunk, which must all be ASCII digits.
#[inline]
fn parse_chunk(chunk: &[u8]) -> Limb {
    chunk.iter().fold(0, |value, &c| value * 10 + to_digit(c))
}

/// Parse a decimal string into a big integer.
///
/// Validation runs before any limb is allocated, so a failure never
/// produces a partial value.
pub(crate) fn parse_decimal(bytes: &[u8]) -> Result<BigInteger> {
    let (sign, digits, offset) = match bytes.split_first() {
        None => return Err(Error::syntax(ErrorCode::EmptyInput, 0)),
        Some((b'-', rest)) => (Sign::Minus, rest, 1),
        Some(_) => (Sign::Plus, bytes, 0),
    };

    if digits.is_empty() {
        return Err(Error::syntax(ErrorCode::MissingDigits, offset + 1));
    }
    if let Some(index) = digits.iter().position(|c| !c.is_ascii_digit()) {
        return Err(Error::syntax(ErrorCode::InvalidDigit, offset + index + 1));
    }

    // Each decimal digit carries a little under 3.33 bits.
    let mut data = LimbVecType::with_capacity(digits.len() * 10 / 3 / LIMB_BITS + 1);
    for chunk in digits.chunks(DIGITS_PER_CHUNK) {
        small::imul(&mut data, POW10[chunk.len()]);
        small::iadd(&mut data, parse_chunk(chunk));
    }

    Ok(BigInteger::from_parts(sign, data))
}

impl BigInteger {
    /// Parse a decimal string: an optional `-` followed by ASCII digits.
    ///
    /// # Errors
    ///
    /// Fails with a [`Category::Format`](crate::Category::Format) error for
    /// an empty string, a lone `-`, or any other byte that is not a digit.
    /// The error's [`column`](crate::Error::column) points at the offending
    /// byte.
    ///
    /// ```
    /// use big_integer::{BigInteger, ErrorCode};
    ///
    /// let n = BigInteger::from_decimal_str("-170141183460469231731687303715884105728").unwrap();
    /// assert_eq!(n, i128::min_value());
    ///
    /// let err = BigInteger::from_decimal_str("12a4").unwrap_err();
    /// assert_eq!(*err.code(), ErrorCode::InvalidDigit);
    /// assert_eq!(err.column(), 3);
    /// ```
    pub fn from_decimal_str(s: &str) -> Result<Self> {
        parse_decimal(s.as_bytes())
    }
}

impl FromStr for BigInteger {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<Self> {
        parse_decimal(s.as_bytes())
    }
}
