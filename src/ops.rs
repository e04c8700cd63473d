//! Operator overloads for `BigInteger`.
//!
//! Every algorithm lives in a single compound-assignment method on
//! `BigInteger`; the binary operators below copy the left operand (when it
//! is borrowed) and apply that method, so no operator ever mutates an input
//! it does not own.

use crate::integer::BigInteger;
use core::iter::{Product, Sum};
use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

macro_rules! forward_binop {
    ($($imp:ident $method:ident, $imp_assign:ident $method_assign:ident => $inner:ident;)*) => {
        $(
            impl<'a> $imp_assign<&'a BigInteger> for BigInteger {
                #[inline]
                fn $method_assign(&mut self, rhs: &BigInteger) {
                    self.$inner(rhs);
                }
            }

            impl $imp_assign<BigInteger> for BigInteger {
                #[inline]
                fn $method_assign(&mut self, rhs: BigInteger) {
                    self.$inner(&rhs);
                }
            }

            impl<'a> $imp<&'a BigInteger> for BigInteger {
                type Output = BigInteger;

                #[inline]
                fn $method(mut self, rhs: &BigInteger) -> BigInteger {
                    self.$inner(rhs);
                    self
                }
            }

            impl $imp<BigInteger> for BigInteger {
                type Output = BigInteger;

                #[inline]
                fn $method(mut self, rhs: BigInteger) -> BigInteger {
                    self.$inner(&rhs);
                    self
                }
            }

            impl<'a> $imp<BigInteger> for &'a BigInteger {
                type Output = BigInteger;

                #[inline]
                fn $method(self, rhs: BigInteger) -> BigInteger {
                    let mut out = self.clone();
                    out.$inner(&rhs);
                    out
                }
            }

            impl<'a, 'b> $imp<&'b BigInteger> for &'a BigInteger {
                type Output = BigInteger;

                #[inline]
                fn $method(self, rhs: &BigInteger) -> BigInteger {
                    let mut out = self.clone();
                    out.$inner(rhs);
                    out
                }
            }
        )*
    };
}

forward_binop! {
    Add add, AddAssign add_assign => iadd;
    Sub sub, SubAssign sub_assign => isub;
    Mul mul, MulAssign mul_assign => imul;
    BitAnd bitand, BitAndAssign bitand_assign => iand;
    BitOr bitor, BitOrAssign bitor_assign => ior;
    BitXor bitxor, BitXorAssign bitxor_assign => ixor;
}

// `Div` and `Rem` panic on a zero divisor, so their impls carry the docs.

/// Truncating division.
///
/// # Panics
///
/// Panics if the divisor is zero, like the primitive integers. Use
/// [`BigInteger::div_rem`] or [`BigInteger::checked_div`] to handle that case.
impl<'a> DivAssign<&'a BigInteger> for BigInteger {
    #[inline]
    fn div_assign(&mut self, rhs: &BigInteger) {
        self.idiv(rhs);
    }
}

impl DivAssign<BigInteger> for BigInteger {
    #[inline]
    fn div_assign(&mut self, rhs: BigInteger) {
        self.idiv(&rhs);
    }
}

/// Truncating remainder, with the sign of the dividend.
///
/// # Panics
///
/// Panics if the divisor is zero, like the primitive integers. Use
/// [`BigInteger::div_rem`] or [`BigInteger::checked_rem`] to handle that case.
impl<'a> RemAssign<&'a BigInteger> for BigInteger {
    #[inline]
    fn rem_assign(&mut self, rhs: &BigInteger) {
        self.irem(rhs);
    }
}

impl RemAssign<BigInteger> for BigInteger {
    #[inline]
    fn rem_assign(&mut self, rhs: BigInteger) {
        self.irem(&rhs);
    }
}

macro_rules! forward_fallible_binop {
    ($($imp:ident $method:ident => $inner:ident;)*) => {
        $(
            impl<'a> $imp<&'a BigInteger> for BigInteger {
                type Output = BigInteger;

                #[inline]
                fn $method(mut self, rhs: &BigInteger) -> BigInteger {
                    self.$inner(rhs);
                    self
                }
            }

            impl $imp<BigInteger> for BigInteger {
                type Output = BigInteger;

                #[inline]
                fn $method(mut self, rhs: BigInteger) -> BigInteger {
                    self.$inner(&rhs);
                    self
                }
            }

            impl<'a> $imp<BigInteger> for &'a BigInteger {
                type Output = BigInteger;

                #[inline]
                fn $method(self, rhs: BigInteger) -> BigInteger {
                    let mut out = self.clone();
                    out.$inner(&rhs);
                    out
                }
            }

            impl<'a, 'b> $imp<&'b BigInteger> for &'a BigInteger {
                type Output = BigInteger;

                #[inline]
                fn $method(self, rhs: &BigInteger) -> BigInteger {
                    let mut out = self.clone();
                    out.$inner(rhs);
                    out
                }
            }
        )*
    };
}

forward_fallible_binop! {
    Div div => idiv;
    Rem rem => irem;
}

impl ShlAssign<usize> for BigInteger {
    #[inline]
    fn shl_assign(&mut self, rhs: usize) {
        self.ishl(rhs);
    }
}

impl Shl<usize> for BigInteger {
    type Output = BigInteger;

    #[inline]
    fn shl(mut self, rhs: usize) -> BigInteger {
        self.ishl(rhs);
        self
    }
}

impl<'a> Shl<usize> for &'a BigInteger {
    type Output = BigInteger;

    #[inline]
    fn shl(self, rhs: usize) -> BigInteger {
        let mut out = self.clone();
        out.ishl(rhs);
        out
    }
}

/// Arithmetic shift right, rounding toward negative infinity.
impl ShrAssign<usize> for BigInteger {
    #[inline]
    fn shr_assign(&mut self, rhs: usize) {
        self.ishr(rhs);
    }
}

impl Shr<usize> for BigInteger {
    type Output = BigInteger;

    #[inline]
    fn shr(mut self, rhs: usize) -> BigInteger {
        self.ishr(rhs);
        self
    }
}

impl<'a> Shr<usize> for &'a BigInteger {
    type Output = BigInteger;

    #[inline]
    fn shr(self, rhs: usize) -> BigInteger {
        let mut out = self.clone();
        out.ishr(rhs);
        out
    }
}

impl Neg for BigInteger {
    type Output = BigInteger;

    #[inline]
    fn neg(mut self) -> BigInteger {
        self.negate();
        self
    }
}

impl<'a> Neg for &'a BigInteger {
    type Output = BigInteger;

    #[inline]
    fn neg(self) -> BigInteger {
        -self.clone()
    }
}

/// Bitwise complement in two's complement, `-(self + 1)`.
impl Not for BigInteger {
    type Output = BigInteger;

    #[inline]
    fn not(mut self) -> BigInteger {
        self.inot();
        self
    }
}

impl<'a> Not for &'a BigInteger {
    type Output = BigInteger;

    #[inline]
    fn not(self) -> BigInteger {
        !self.clone()
    }
}

impl Sum for BigInteger {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = BigInteger>,
    {
        iter.fold(BigInteger::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a BigInteger> for BigInteger {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = &'a BigInteger>,
    {
        iter.fold(BigInteger::zero(), |acc, x| acc + x)
    }
}

impl Product for BigInteger {
    fn product<I>(iter: I) -> Self
    where
        I: Iterator<Item = BigInteger>,
    {
        iter.fold(BigInteger::one(), |acc, x| acc * x)
    }
}

impl<'a> Product<&'a BigInteger> for BigInteger {
    fn product<I>(iter: I) -> Self
    where
        I: Iterator<Item = &'a BigInteger>,
    {
        iter.fold(BigInteger::one(), |acc, x| acc * x)
    }
}
