//! Integer to decimal string conversion.

use crate::integer::BigInteger;
use crate::math::{small, Limb, LimbVecType};
use crate::parse::DIGITS_PER_CHUNK;
use alloc::string::String;
use core::fmt::{self, Debug, Display};

/// Divisor for one group of decimal digits, `10^9`.
const CHUNK_DIVISOR: Limb = 1_000_000_000;

impl BigInteger {
    /// Decimal digits of the magnitude, without a sign.
    ///
    /// Repeatedly divides a copy of the magnitude by `10^9`, so the groups
    /// come out least significant first. Every group but the most
    /// significant one is zero-padded to nine digits.
    fn magnitude_digits(&self) -> String {
        if self.is_zero() {
            return String::from("0");
        }

        let mut data: LimbVecType = self.data.clone();
        let mut groups = LimbVecType::with_capacity(self.data.len() * 2 + 1);
        while !data.is_empty() {
            groups.push(small::idiv(&mut data, CHUNK_DIVISOR));
        }

        let mut buffer = itoa::Buffer::new();
        let mut out = String::with_capacity(groups.len() * DIGITS_PER_CHUNK);
        let mut groups = groups.iter().rev();
        if let Some(&first) = groups.next() {
            out.push_str(buffer.format(first));
        }
        for &group in groups {
            let digits = buffer.format(group);
            for _ in digits.len()..DIGITS_PER_CHUNK {
                out.push('0');
            }
            out.push_str(digits);
        }
        out
    }
}

impl Display for BigInteger {
    /// Formats the value in decimal.
    ///
    /// Width, fill, alignment, `+` and `0` flags behave as they do for the
    /// primitive integers.
    ///
    /// ```
    /// use big_integer::BigInteger;
    ///
    /// let n = BigInteger::from(-42);
    /// assert_eq!(n.to_string(), "-42");
    /// assert_eq!(format!("{:>6}", n), "   -42");
    /// assert_eq!(format!("{:+}", BigInteger::from(7)), "+7");
    /// ```
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.pad_integral(!self.is_negative(), "", &self.magnitude_digits())
    }
}

impl Debug for BigInteger {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "BigInteger({})", self)
    }
}
