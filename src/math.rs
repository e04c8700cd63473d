//! Building-blocks for arbitrary-precision math.
//!
//! These algorithms assume little-endian order for the large integer
//! buffers, so for a `vec![0, 1, 2, 3]`, `3` is the most significant limb,
//! and `0` is the least significant limb. Every buffer handed out of this
//! module is normalized: the most significant limb is never zero, and the
//! value zero is the empty buffer.

use alloc::vec::Vec;
use core::{cmp, iter, mem};

// ALIASES
// -------

//  Type for a single limb of the big integer.
//
//  A limb is analogous to a digit in base10, except, it stores 32-bit
//  or 64-bit numbers instead. The wide type must hold the product of two
//  limbs plus a carry limb, so it is always twice the limb width.
//
//  Platforms where native 128-bit multiplication is explicitly supported:
//      - x86_64 (Supported via `MUL`).
//      - mips64 (Supported via `DMULTU`, which `HI` and `LO` can be read-from).
//
//  Platforms where native 64-bit multiplication is supported and
//  you can extract hi-lo for 64-bit multiplications.
//      aarch64 (Requires `UMULH` and `MUL` to capture high and low bits).
//      powerpc64 (Requires `MULHDU` and `MULLD` to capture high and low bits).

// 32-BIT LIMB
#[cfg(limb_width_32)]
pub(crate) type Limb = u32;

#[cfg(limb_width_32)]
type Wide = u64;

// 64-BIT LIMB
#[cfg(limb_width_64)]
pub(crate) type Limb = u64;

#[cfg(limb_width_64)]
type Wide = u128;

pub(crate) type LimbVecType = Vec<Limb>;

/// Number of bits in a single limb.
pub(crate) const LIMB_BITS: usize = mem::size_of::<Limb>() * 8;

/// Cast to limb type, keeping the low bits.
#[inline(always)]
fn as_limb(x: Wide) -> Limb {
    x as Limb
}

/// Cast to wide type.
#[inline(always)]
fn as_wide(x: Limb) -> Wide {
    x as Wide
}

// SPLIT
// -----

/// Split u128 into limbs, in little-endian order.
#[inline]
pub(crate) fn split_u128(mut x: u128) -> LimbVecType {
    let mut v = LimbVecType::with_capacity(128 / LIMB_BITS);
    while x != 0 {
        v.push(x as Limb);
        x >>= LIMB_BITS;
    }
    v
}

/// Join limbs into a u128, or `None` if the value needs more than 128 bits.
#[inline]
pub(crate) fn join_u128(x: &[Limb]) -> Option<u128> {
    if small::bit_length(x) > 128 {
        return None;
    }
    let mut v: u128 = 0;
    for &xi in x.iter().rev() {
        v = (v << LIMB_BITS) | xi as u128;
    }
    Some(v)
}

// NONZERO

/// Check if any of the limbs below `index` are non-zero.
#[inline]
fn nonzero(x: &[Limb], index: usize) -> bool {
    let index = index.min(x.len());
    x[..index].iter().any(|&xi| xi != 0)
}

// SCALAR
// ------

// Scalar-to-scalar operations, for building-blocks for arbitrary-precision
// operations.

pub(crate) mod scalar {
use super::*;

// ADDITION

/// Add two small integers and return the resulting value and if overflow happens.
#[inline]
pub fn add(x: Limb, y: Limb) -> (Limb, bool) {
    x.overflowing_add(y)
}

/// AddAssign two small integers and return if overflow happens.
#[inline]
pub fn iadd(x: &mut Limb, y: Limb) -> bool {
    let t = add(*x, y);
    *x = t.0;
    t.1
}

// SUBTRACTION

/// Subtract two small integers and return the resulting value and if overflow happens.
#[inline]
pub fn sub(x: Limb, y: Limb) -> (Limb, bool) {
    x.overflowing_sub(y)
}

/// SubAssign two small integers and return if overflow happens.
#[inline]
pub fn isub(x: &mut Limb, y: Limb) -> bool {
    let t = sub(*x, y);
    *x = t.0;
    t.1
}

// MULTIPLICATION

/// Multiply two small integers (with carry) (and return the overflow contribution).
///
/// Returns the (low, high) components.
#[inline]
pub fn mul(x: Limb, y: Limb, carry: Limb) -> (Limb, Limb) {
    // Cannot overflow, as long as wide is 2x as wide. This is because
    // the following is always true:
    // `Wide::max_value() - (Narrow::max_value() * Narrow::max_value()) >= Narrow::max_value()`
    let z: Wide = as_wide(x) * as_wide(y) + as_wide(carry);
    (as_limb(z), as_limb(z >> LIMB_BITS))
}

/// Multiply two small integers (with carry) (and return if overflow happens).
#[inline]
pub fn imul(x: &mut Limb, y: Limb, carry: Limb) -> Limb {
    let t = mul(*x, y, carry);
    *x = t.0;
    t.1
}

// DIVISION

/// Divide the two-limb value `(hi, lo)` by `y`.
///
/// Returns the (quotient, remainder) components. Requires `hi < y` so that
/// the quotient fits in a single limb.
#[inline]
pub fn div(hi: Limb, lo: Limb, y: Limb) -> (Limb, Limb) {
    debug_assert!(hi < y);
    let z = (as_wide(hi) << LIMB_BITS) | as_wide(lo);
    let y = as_wide(y);
    (as_limb(z / y), as_limb(z % y))
}

}   // scalar

// SMALL
// -----

// Large-to-small operations, to modify a big integer from a native scalar.

pub(crate) mod small {
use super::*;

// ADDITION

/// Implied AddAssign implementation for adding a small integer to bigint.
///
/// Allows us to choose a start-index in x to store, to allow incrementing
/// from a non-zero start.
#[inline]
pub fn iadd_impl(x: &mut LimbVecType, y: Limb, xstart: usize) {
    if x.len() <= xstart {
        x.push(y);
    } else {
        // Initial add
        let mut carry = scalar::iadd(&mut x[xstart], y);

        // Increment until overflow stops occurring.
        let mut size = xstart + 1;
        while carry && size < x.len() {
            carry = scalar::iadd(&mut x[size], 1);
            size += 1;
        }

        // If we overflowed the buffer entirely, need to add 1 to the end
        // of the buffer.
        if carry {
            x.push(1);
        }
    }
}

/// AddAssign small integer to bigint.
#[inline]
pub fn iadd(x: &mut LimbVecType, y: Limb) {
    iadd_impl(x, y, 0);
    normalize(x);
}

// SUBTRACTION

/// SubAssign small integer to bigint.
/// Does not do overflowing subtraction.
#[inline]
pub fn isub_impl(x: &mut LimbVecType, y: Limb, xstart: usize) {
    debug_assert!(x.len() > xstart && (x[xstart] >= y || x.len() > xstart + 1));

    // Initial subtraction
    let mut carry = scalar::isub(&mut x[xstart], y);

    // Decrement until overflow stops occurring.
    let mut size = xstart + 1;
    while carry && size < x.len() {
        carry = scalar::isub(&mut x[size], 1);
        size += 1;
    }
    normalize(x);
}

// MULTIPLICATION

/// MulAssign small integer to bigint.
#[inline]
pub fn imul(x: &mut LimbVecType, y: Limb) {
    // Multiply iteratively over all elements, adding the carry each time.
    let mut carry: Limb = 0;
    for xi in x.iter_mut() {
        carry = scalar::imul(xi, y, carry);
    }

    // Overflow of value, add to end.
    if carry != 0 {
        x.push(carry);
    }
    normalize(x);
}

/// Mul small integer to bigint.
#[inline]
pub fn mul(x: &[Limb], y: Limb) -> LimbVecType {
    let mut z = LimbVecType::with_capacity(x.len() + 1);
    z.extend(x.iter().cloned());
    imul(&mut z, y);
    z
}

// DIVISION

/// DivAssign small integer to bigint, returning the remainder.
///
/// Walks from the most significant limb down, carrying the running
/// remainder into the high half of each two-limb dividend.
#[inline]
pub fn idiv(x: &mut LimbVecType, y: Limb) -> Limb {
    debug_assert!(y != 0);
    let mut rem: Limb = 0;
    for xi in x.iter_mut().rev() {
        let (q, r) = scalar::div(rem, *xi, y);
        *xi = q;
        rem = r;
    }
    normalize(x);
    rem
}

// BIT LENGTH

/// Get number of leading zero bits in the storage.
#[inline]
pub fn leading_zeros(x: &[Limb]) -> usize {
    match x.last() {
        Some(&hi) => hi.leading_zeros() as usize,
        None => 0,
    }
}

/// Calculate the bit-length of the big-integer.
#[inline]
pub fn bit_length(x: &[Limb]) -> usize {
    // Avoid overflowing, calculate via total number of bits
    // minus leading zero bits.
    let nlz = leading_zeros(x);
    LIMB_BITS
        .checked_mul(x.len())
        .map(|v| v - nlz)
        .unwrap_or(usize::max_value())
}

// SHL

/// Shift-left bits inside a buffer.
///
/// Assumes `n < Limb::BITS`, IE, internally shifting bits.
#[inline]
pub fn ishl_bits(x: &mut LimbVecType, n: usize) {
    // Need to shift by the number of `bits % Limb::BITS)`.
    debug_assert!(n < LIMB_BITS);
    if n == 0 {
        return;
    }

    // Internally, for each item, we shift left by n, and add the previous
    // right shifted limb-bits.
    // For example, we transform (for u8) shifted left 2, to:
    //      b10100100 b01000010
    //      b10 b10010001 b00001000
    let rshift = LIMB_BITS - n;
    let lshift = n;
    let mut prev: Limb = 0;
    for xi in x.iter_mut() {
        let tmp = *xi;
        *xi <<= lshift;
        *xi |= prev >> rshift;
        prev = tmp;
    }

    let carry = prev >> rshift;
    if carry != 0 {
        x.push(carry);
    }
}

/// Shift-left `n` limbs inside a buffer.
///
/// Assumes `n` is not 0.
#[inline]
pub fn ishl_limbs(x: &mut LimbVecType, n: usize) {
    debug_assert!(n != 0);
    if !x.is_empty() {
        x.splice(0..0, iter::repeat(0).take(n));
    }
}

/// Shift-left buffer by n bits.
#[inline]
pub fn ishl(x: &mut LimbVecType, n: usize) {
    // Need to pad with zeros for the number of `bits / Limb::BITS`,
    // and shift-left with carry for `bits % Limb::BITS`.
    let rem = n % LIMB_BITS;
    let div = n / LIMB_BITS;
    ishl_bits(x, rem);
    if div != 0 {
        ishl_limbs(x, div);
    }
}

// SHR

/// Shift-right bits inside a buffer.
///
/// Assumes `n < Limb::BITS`. Returns if any non-zero bits were shifted out.
#[inline]
pub fn ishr_bits(x: &mut LimbVecType, n: usize) -> bool {
    debug_assert!(n < LIMB_BITS);
    if n == 0 || x.is_empty() {
        return false;
    }

    // Mirror image of `ishl_bits`: each limb takes the low bits of the
    // next more significant limb into its high bits.
    let lshift = LIMB_BITS - n;
    let rshift = n;
    let truncated = x[0] << lshift != 0;
    let mut prev: Limb = 0;
    for xi in x.iter_mut().rev() {
        let tmp = *xi;
        *xi >>= rshift;
        *xi |= prev << lshift;
        prev = tmp;
    }
    normalize(x);
    truncated
}

/// Shift-right `n` limbs inside a buffer, dropping the least significant.
///
/// Returns if any of the dropped limbs were non-zero.
#[inline]
pub fn ishr_limbs(x: &mut LimbVecType, n: usize) -> bool {
    let truncated = nonzero(x, n);
    if n >= x.len() {
        x.clear();
    } else {
        x.drain(..n);
    }
    truncated
}

/// Shift-right buffer by n bits.
///
/// Returns if any non-zero bits were shifted out.
#[inline]
pub fn ishr(x: &mut LimbVecType, n: usize) -> bool {
    let rem = n % LIMB_BITS;
    let div = n / LIMB_BITS;
    let mut truncated = false;
    if div != 0 {
        truncated |= ishr_limbs(x, div);
    }
    truncated |= ishr_bits(x, rem);
    truncated
}

// NORMALIZE

/// Normalize the container by popping any leading zeros.
#[inline]
pub fn normalize(x: &mut LimbVecType) {
    while let Some(&0) = x.last() {
        x.pop();
    }
}

}   // small

// LARGE
// -----

// Large-to-large operations, to modify a big integer from a big integer.

pub(crate) mod large {
use super::*;

// RELATIVE OPERATORS

/// Compare `x` to `y`, in little-endian order.
#[inline]
pub fn compare(x: &[Limb], y: &[Limb]) -> cmp::Ordering {
    if x.len() > y.len() {
        cmp::Ordering::Greater
    } else if x.len() < y.len() {
        cmp::Ordering::Less
    } else {
        let iter = x.iter().rev().zip(y.iter().rev());
        for (&xi, &yi) in iter {
            if xi > yi {
                return cmp::Ordering::Greater;
            } else if xi < yi {
                return cmp::Ordering::Less;
            }
        }
        // Equal case.
        cmp::Ordering::Equal
    }
}

/// Check if x is less than y.
#[inline]
pub fn less(x: &[Limb], y: &[Limb]) -> bool {
    compare(x, y) == cmp::Ordering::Less
}

/// Check if x is greater than or equal to y.
#[inline]
pub fn greater_equal(x: &[Limb], y: &[Limb]) -> bool {
    !less(x, y)
}

// ADDITION

/// Implied AddAssign implementation for bigints.
///
/// Allows us to choose a start-index in x to store, so we can avoid
/// padding the buffer with zeros when not needed, optimized for vectors.
pub fn iadd_impl(x: &mut LimbVecType, y: &[Limb], xstart: usize) {
    // The effective x buffer is from `xstart..x.len()`, so we need to treat
    // that as the current range. If the effective y buffer is longer, need
    // to resize to that, + the start index.
    if y.len() + xstart > x.len() {
        x.resize(y.len() + xstart, 0);
    }

    // Iteratively add elements from y to x.
    let mut carry = false;
    for (xi, yi) in x[xstart..].iter_mut().zip(y.iter()) {
        // Only one op of the two can overflow, since we added at max
        // Limb::max_value() + Limb::max_value(). Add the previous carry,
        // and store the current carry for the next.
        let mut tmp = scalar::iadd(xi, *yi);
        if carry {
            tmp |= scalar::iadd(xi, 1);
        }
        carry = tmp;
    }

    // Overflow from the previous bit.
    if carry {
        small::iadd_impl(x, 1, y.len() + xstart);
    }
}

/// AddAssign bigint to bigint.
#[inline]
pub fn iadd(x: &mut LimbVecType, y: &[Limb]) {
    iadd_impl(x, y, 0);
    small::normalize(x);
}

// SUBTRACTION

/// SubAssign bigint to bigint.
///
/// Requires `x >= y`; the borrow never leaves the buffer.
pub fn isub(x: &mut LimbVecType, y: &[Limb]) {
    // Basic underflow checks.
    debug_assert!(greater_equal(x, y));

    // Iteratively subtract elements from y to x.
    let mut carry = false;
    for (xi, yi) in x.iter_mut().zip(y.iter()) {
        // Only one op of the two can overflow, since a wrapped difference
        // is always at least 1. Subtract the previous borrow, and store the
        // current borrow for the next.
        let mut tmp = scalar::isub(xi, *yi);
        if carry {
            tmp |= scalar::isub(xi, 1);
        }
        carry = tmp;
    }

    if carry {
        small::isub_impl(x, 1, y.len());
    } else {
        small::normalize(x);
    }
}

/// Sub bigint from bigint.
///
/// Requires `x >= y`.
#[inline]
pub fn sub(x: &[Limb], y: &[Limb]) -> LimbVecType {
    let mut z = LimbVecType::with_capacity(x.len());
    z.extend(x.iter().cloned());
    isub(&mut z, y);
    z
}

// MULTIPLICATION

/// Grade-school multiplication algorithm.
///
/// Slow, naive algorithm, using limb-bit bases and just shifting left for
/// each iteration. Each iteration, of which there are `m` iterations,
/// requires `n` multiplications, and `n` additions, so it works in
/// O(n*m) time. The accumulator is sized to `x.len() + y.len()` up front,
/// which is always enough to hold the product.
pub fn long_mul(x: &[Limb], y: &[Limb]) -> LimbVecType {
    if x.is_empty() || y.is_empty() {
        return LimbVecType::new();
    }

    // Using the immutable value, multiply by all the scalars in y, using
    // the algorithm defined above. Use a single buffer to avoid
    // frequent reallocations. Handle the first case to avoid a redundant
    // addition, since we know y.len() >= 1.
    let mut z: LimbVecType = small::mul(x, y[0]);
    z.resize(x.len() + y.len(), 0);

    // Handle the iterative cases.
    for (i, &yi) in y[1..].iter().enumerate() {
        let zi: LimbVecType = small::mul(x, yi);
        iadd_impl(&mut z, &zi, i + 1);
    }

    small::normalize(&mut z);

    z
}

/// MulAssign bigint to bigint.
#[inline]
pub fn imul(x: &mut LimbVecType, y: &[Limb]) {
    if y.len() == 1 {
        small::imul(x, y[0]);
    } else {
        *x = long_mul(x, y);
    }
}

// DIVISION

/// Multiply `y` by the single limb `q` and subtract it from the `y.len() + 1`
/// limb window `x`.
///
/// Returns true if the window underflowed, in which case it holds the
/// difference modulo `base^(y.len() + 1)`.
fn isub_mul(x: &mut [Limb], y: &[Limb], q: Limb) -> bool {
    debug_assert!(x.len() == y.len() + 1);
    let mut carry: Limb = 0;
    let mut borrow = false;
    for (xi, &yi) in x.iter_mut().zip(y.iter()) {
        let (lo, hi) = scalar::mul(yi, q, carry);
        carry = hi;
        let mut tmp = scalar::isub(xi, lo);
        if borrow {
            tmp |= scalar::isub(xi, 1);
        }
        borrow = tmp;
    }

    let top = &mut x[y.len()];
    let mut tmp = scalar::isub(top, carry);
    if borrow {
        tmp |= scalar::isub(top, 1);
    }
    tmp
}

/// Add `y` back into the `y.len() + 1` limb window `x`.
///
/// Returns the carry out of the window, which cancels a previous underflow.
fn iadd_window(x: &mut [Limb], y: &[Limb]) -> bool {
    debug_assert!(x.len() == y.len() + 1);
    let mut carry = false;
    for (xi, &yi) in x.iter_mut().zip(y.iter()) {
        let mut tmp = scalar::iadd(xi, yi);
        if carry {
            tmp |= scalar::iadd(xi, 1);
        }
        carry = tmp;
    }
    carry && scalar::iadd(&mut x[y.len()], 1)
}

/// Knuth's Algorithm D, on normalized operands.
///
/// `v` must have at least two limbs with the high bit of its top limb set,
/// and `u` must be one limb longer than the shifted dividend. On return, the
/// low `v.len()` limbs of `u` hold the (still shifted) remainder.
fn knuth_divide(u: &mut [Limb], v: &[Limb]) -> LimbVecType {
    let n = v.len();
    debug_assert!(n >= 2 && u.len() > n);
    debug_assert!(v[n - 1] >> (LIMB_BITS - 1) == 1);

    let m = u.len() - n;
    let mut q = LimbVecType::with_capacity(m);
    q.resize(m, 0);
    let vtop = as_wide(v[n - 1]);

    for j in (0..m).rev() {
        // Estimate from the top two limbs of the current window. The
        // normalization of `v` bounds the overestimate to 2.
        let top = (as_wide(u[j + n]) << LIMB_BITS) | as_wide(u[j + n - 1]);
        let mut qhat = as_limb(cmp::min(top / vtop, as_wide(Limb::max_value())));

        let window = &mut u[j..=j + n];
        let mut negative = isub_mul(window, v, qhat);
        while negative {
            qhat -= 1;
            negative = !iadd_window(window, v);
        }
        q[j] = qhat;
    }

    small::normalize(&mut q);
    q
}

/// Divide bigint by bigint, returning the (quotient, remainder).
///
/// Requires a non-zero `y`.
pub fn div_rem(x: &[Limb], y: &[Limb]) -> (LimbVecType, LimbVecType) {
    debug_assert!(!y.is_empty());
    if less(x, y) {
        return (LimbVecType::new(), x.to_vec());
    }

    // Fast path: a single limb divisor only needs one scalar pass.
    if y.len() == 1 {
        let mut q = x.to_vec();
        let mut r = LimbVecType::new();
        small::iadd(&mut r, small::idiv(&mut q, y[0]));
        return (q, r);
    }

    // Normalize so the divisor's top limb has its high bit set, and give
    // the dividend one extra limb of headroom for the first window.
    let shift = small::leading_zeros(y);
    let mut v = y.to_vec();
    small::ishl_bits(&mut v, shift);
    debug_assert!(v.len() == y.len());

    let mut u = LimbVecType::with_capacity(x.len() + 1);
    u.extend(x.iter().cloned());
    small::ishl_bits(&mut u, shift);
    if u.len() == x.len() {
        u.push(0);
    }

    let q = knuth_divide(&mut u, &v);

    u.truncate(v.len());
    small::normalize(&mut u);
    small::ishr_bits(&mut u, shift);
    (q, u)
}

}   // large

// TESTS
// -----
