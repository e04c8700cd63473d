//! Bitwise operators with two's-complement semantics.
//!
//! Magnitudes are stored sign-magnitude, so negative operands are converted
//! to an infinitely sign-extended two's-complement view for the duration of
//! a single operation, combined limb-wise, and converted back. Only these
//! operators ever see the two's-complement form.

use crate::integer::{BigInteger, Sign};
use crate::math::{scalar, Limb, LimbVecType};
use core::cmp;

/// Negate a fixed-width buffer in place, modulo `base^x.len()`.
///
/// This is the `!x + 1` step in both directions: it turns a magnitude into
/// its two's-complement bit pattern, and a negative pattern back into its
/// magnitude.
fn negate_twos(x: &mut [Limb]) {
    let mut carry = true;
    for xi in x.iter_mut() {
        *xi = !*xi;
        if carry {
            carry = scalar::iadd(xi, 1);
        }
    }
}

/// Two's-complement view of `x`, sign-extended to `len` limbs.
///
/// `len` must exceed the magnitude length so the top limb carries the sign.
fn to_twos_complement(x: &BigInteger, len: usize) -> LimbVecType {
    debug_assert!(len > x.data.len());
    let mut out = LimbVecType::with_capacity(len);
    out.extend(x.data.iter().cloned());
    out.resize(len, 0);
    if x.sign == Sign::Minus {
        negate_twos(&mut out);
    }
    out
}

/// Recover sign-magnitude form from a two's-complement result.
fn from_twos_complement(mut data: LimbVecType, sign: Sign) -> BigInteger {
    if sign == Sign::Minus {
        negate_twos(&mut data);
    }
    BigInteger::from_parts(sign, data)
}

impl BigInteger {
    /// Combine `self` and `y` limb by limb with `op` in two's complement.
    ///
    /// `sign` is the sign of the result, decided by applying the operation
    /// to the operands' sign bits.
    fn ibitwise<F>(&mut self, y: &BigInteger, sign: Sign, op: F)
    where
        F: Fn(Limb, Limb) -> Limb,
    {
        let len = cmp::max(self.data.len(), y.data.len()) + 1;
        let mut data = to_twos_complement(self, len);
        let other = to_twos_complement(y, len);
        for (xi, &yi) in data.iter_mut().zip(other.iter()) {
            *xi = op(*xi, yi);
        }
        *self = from_twos_complement(data, sign);
    }

    /// BitAndAssign bigint. Negative only if both operands are negative.
    pub(crate) fn iand(&mut self, y: &BigInteger) {
        let sign = if self.is_negative() && y.is_negative() {
            Sign::Minus
        } else {
            Sign::Plus
        };
        self.ibitwise(y, sign, |a, b| a & b);
    }

    /// BitOrAssign bigint. Negative if either operand is negative.
    pub(crate) fn ior(&mut self, y: &BigInteger) {
        let sign = if self.is_negative() || y.is_negative() {
            Sign::Minus
        } else {
            Sign::Plus
        };
        self.ibitwise(y, sign, |a, b| a | b);
    }

    /// BitXorAssign bigint. Negative if exactly one operand is negative.
    pub(crate) fn ixor(&mut self, y: &BigInteger) {
        let sign = if self.is_negative() != y.is_negative() {
            Sign::Minus
        } else {
            Sign::Plus
        };
        self.ibitwise(y, sign, |a, b| a ^ b);
    }

    /// Bitwise complement in place, `-(self + 1)`.
    pub(crate) fn inot(&mut self) {
        self.increment();
        self.negate();
    }
}
