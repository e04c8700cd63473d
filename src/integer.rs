//! The arbitrary-precision signed integer type.

use crate::error::{Error, Result};
use crate::math::{large, small, Limb, LimbVecType};
use core::cmp::Ordering;
use core::ops;

/// The sign of a [`BigInteger`].
///
/// Zero is always `Plus`; there is no negative zero.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
    /// Strictly below zero.
    Minus,
    /// Zero or above.
    Plus,
}

impl ops::Neg for Sign {
    type Output = Sign;

    #[inline]
    fn neg(self) -> Sign {
        match self {
            Sign::Minus => Sign::Plus,
            Sign::Plus => Sign::Minus,
        }
    }
}

impl ops::Mul for Sign {
    type Output = Sign;

    #[inline]
    fn mul(self, other: Sign) -> Sign {
        if self == other {
            Sign::Plus
        } else {
            Sign::Minus
        }
    }
}

/// An integer of arbitrary size.
///
/// Stored as a sign and a magnitude of machine-word limbs, least significant
/// first. Every operation leaves the value in canonical form: no most
/// significant zero limb, and zero is the empty magnitude with sign `Plus`.
/// Two canonical values are equal exactly when their signs and limbs are, so
/// `Eq` and `Hash` work on the representation directly.
///
/// ```
/// use big_integer::BigInteger;
///
/// let a: BigInteger = "123456789123456789".parse().unwrap();
/// let b: BigInteger = "876543210876543211".parse().unwrap();
/// assert_eq!((a + b).to_string(), "1000000000000000000");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInteger {
    pub(crate) sign: Sign,
    pub(crate) data: LimbVecType,
}

impl Default for BigInteger {
    #[inline]
    fn default() -> Self {
        BigInteger::zero()
    }
}

impl BigInteger {
    /// Build a value from a sign and a little-endian magnitude, in canonical
    /// form.
    #[inline]
    pub(crate) fn from_parts(sign: Sign, data: LimbVecType) -> Self {
        let mut value = BigInteger { sign, data };
        value.normalize();
        value
    }

    /// Trim most significant zero limbs, and clear the sign of zero.
    ///
    /// Idempotent. Every mutating operation ends here.
    #[inline]
    pub(crate) fn normalize(&mut self) {
        small::normalize(&mut self.data);
        if self.data.is_empty() {
            self.sign = Sign::Plus;
        }
    }

    /// The value zero.
    #[inline]
    pub const fn zero() -> Self {
        BigInteger {
            sign: Sign::Plus,
            data: LimbVecType::new(),
        }
    }

    /// The value one.
    #[inline]
    pub fn one() -> Self {
        BigInteger::from(1u8)
    }

    /// Returns true if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns true if the value is strictly greater than zero.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.sign == Sign::Plus && !self.is_zero()
    }

    /// Returns true if the value is strictly less than zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Minus
    }

    /// The sign of the value. Zero reports `Sign::Plus`.
    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Returns `-1`, `0` or `1` according to the sign of the value.
    pub fn signum(&self) -> BigInteger {
        let mut signum = BigInteger::zero();
        if !self.is_zero() {
            signum.data.push(1);
            signum.sign = self.sign;
        }
        signum
    }

    /// The absolute value.
    pub fn abs(&self) -> BigInteger {
        BigInteger {
            sign: Sign::Plus,
            data: self.data.clone(),
        }
    }

    /// Number of bits needed to hold the magnitude. Zero needs no bits.
    #[inline]
    pub fn bits(&self) -> usize {
        small::bit_length(&self.data)
    }

    /// Flip the sign in place. Zero stays zero.
    #[inline]
    pub(crate) fn negate(&mut self) {
        if !self.is_zero() {
            self.sign = -self.sign;
        }
    }

    // ADDITION / SUBTRACTION

    /// Add a value with the given sign and magnitude to `self`.
    ///
    /// Subtraction goes through here with the sign of the subtrahend flipped,
    /// so the result sign is decided by comparing magnitudes rather than
    /// signed values.
    fn iadd_signed(&mut self, sign: Sign, data: &[Limb]) {
        if self.sign == sign {
            large::iadd(&mut self.data, data);
        } else {
            match large::compare(&self.data, data) {
                Ordering::Greater => large::isub(&mut self.data, data),
                Ordering::Less => {
                    self.data = large::sub(data, &self.data);
                    self.sign = sign;
                }
                Ordering::Equal => self.data.clear(),
            }
        }
        self.normalize();
    }

    /// AddAssign bigint.
    #[inline]
    pub(crate) fn iadd(&mut self, y: &BigInteger) {
        self.iadd_signed(y.sign, &y.data);
    }

    /// SubAssign bigint.
    #[inline]
    pub(crate) fn isub(&mut self, y: &BigInteger) {
        self.iadd_signed(-y.sign, &y.data);
    }

    // MULTIPLICATION

    /// MulAssign bigint.
    pub(crate) fn imul(&mut self, y: &BigInteger) {
        if self.is_zero() || y.is_zero() {
            self.data.clear();
        } else {
            large::imul(&mut self.data, &y.data);
            self.sign = self.sign * y.sign;
        }
        self.normalize();
    }

    // DIVISION

    /// Truncating division, returning the (quotient, remainder) pair.
    ///
    /// The quotient is rounded toward zero and the remainder takes the sign
    /// of the dividend, the same contract as the primitive integers:
    /// `self == q * divisor + r` and `|r| < |divisor|`.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorCode::DivideByZero`](crate::ErrorCode::DivideByZero)
    /// if `divisor` is zero.
    ///
    /// ```
    /// use big_integer::BigInteger;
    ///
    /// let (q, r) = BigInteger::from(-7).div_rem(&BigInteger::from(2)).unwrap();
    /// assert_eq!(q, -3);
    /// assert_eq!(r, -1);
    /// ```
    pub fn div_rem(&self, divisor: &BigInteger) -> Result<(BigInteger, BigInteger)> {
        if divisor.is_zero() {
            return Err(Error::divide_by_zero());
        }
        let (q, r) = large::div_rem(&self.data, &divisor.data);
        let quotient = BigInteger::from_parts(self.sign * divisor.sign, q);
        let remainder = BigInteger::from_parts(self.sign, r);
        Ok((quotient, remainder))
    }

    /// Truncating division, or `None` if `divisor` is zero.
    pub fn checked_div(&self, divisor: &BigInteger) -> Option<BigInteger> {
        self.div_rem(divisor).ok().map(|(q, _)| q)
    }

    /// Truncating remainder, or `None` if `divisor` is zero.
    pub fn checked_rem(&self, divisor: &BigInteger) -> Option<BigInteger> {
        self.div_rem(divisor).ok().map(|(_, r)| r)
    }

    /// DivAssign bigint, panicking on a zero divisor like the primitives do.
    pub(crate) fn idiv(&mut self, y: &BigInteger) {
        match self.div_rem(y) {
            Ok((q, _)) => *self = q,
            Err(err) => panic!("{}", err),
        }
    }

    /// RemAssign bigint, panicking on a zero divisor like the primitives do.
    pub(crate) fn irem(&mut self, y: &BigInteger) {
        match self.div_rem(y) {
            Ok((_, r)) => *self = r,
            Err(err) => panic!("{}", err),
        }
    }

    // SHIFTS

    /// Shift-left by `n` bits, multiplying by `2^n`.
    #[inline]
    pub(crate) fn ishl(&mut self, n: usize) {
        small::ishl(&mut self.data, n);
        self.normalize();
    }

    /// Arithmetic shift-right by `n` bits.
    ///
    /// Rounds toward negative infinity, so for negative values this is not
    /// the same as truncating division by `2^n`.
    pub(crate) fn ishr(&mut self, n: usize) {
        let truncated = small::ishr(&mut self.data, n);
        if self.sign == Sign::Minus && truncated {
            small::iadd(&mut self.data, 1);
        }
        self.normalize();
    }

    // INCREMENT / DECREMENT

    /// Add one in place and return `self`, like prefix `++`.
    pub fn increment(&mut self) -> &mut Self {
        self.iadd_signed(Sign::Plus, &[1]);
        self
    }

    /// Subtract one in place and return `self`, like prefix `--`.
    pub fn decrement(&mut self) -> &mut Self {
        self.iadd_signed(Sign::Minus, &[1]);
        self
    }

    /// Add one in place and return the previous value, like postfix `++`.
    pub fn post_increment(&mut self) -> BigInteger {
        let previous = self.clone();
        self.increment();
        previous
    }

    /// Subtract one in place and return the previous value, like postfix `--`.
    pub fn post_decrement(&mut self) -> BigInteger {
        let previous = self.clone();
        self.decrement();
        previous
    }
}

impl Ord for BigInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Plus, Sign::Minus) => Ordering::Greater,
            (Sign::Minus, Sign::Plus) => Ordering::Less,
            (Sign::Plus, Sign::Plus) => large::compare(&self.data, &other.data),
            (Sign::Minus, Sign::Minus) => large::compare(&other.data, &self.data),
        }
    }
}

impl PartialOrd for BigInteger {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
