use crate::error::{Error, Result};
use crate::integer::{BigInteger, Sign};
use crate::math::{join_u128, split_u128};

macro_rules! from_unsigned {
    ($($ty:ident)*) => {
        $(
            impl From<$ty> for BigInteger {
                #[inline]
                fn from(n: $ty) -> Self {
                    BigInteger::from_parts(Sign::Plus, split_u128(n as u128))
                }
            }
        )*
    };
}

macro_rules! from_signed {
    ($($ty:ident)*) => {
        $(
            impl From<$ty> for BigInteger {
                #[inline]
                fn from(n: $ty) -> Self {
                    // `unsigned_abs` handles `MIN`, whose absolute value does
                    // not fit the signed type.
                    let sign = if n < 0 { Sign::Minus } else { Sign::Plus };
                    BigInteger::from_parts(sign, split_u128(n.unsigned_abs() as u128))
                }
            }
        )*
    };
}

from_unsigned!(u8 u16 u32 u64 u128 usize);
from_signed!(i8 i16 i32 i64 i128 isize);

impl BigInteger {
    /// Returns the value as i128 if it fits, or else None.
    pub fn as_i128(&self) -> Option<i128> {
        let magnitude = join_u128(&self.data)?;
        match self.sign {
            Sign::Plus => i128::try_from(magnitude).ok(),
            Sign::Minus if magnitude <= i128::min_value().unsigned_abs() => {
                Some(0i128.wrapping_sub(magnitude as i128))
            }
            Sign::Minus => None,
        }
    }

    /// Returns the value as u128 if it fits, or else None.
    pub fn as_u128(&self) -> Option<u128> {
        match self.sign {
            Sign::Plus => join_u128(&self.data),
            Sign::Minus => None,
        }
    }

    /// Returns the value as i64 if it fits, or else None.
    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        self.as_i128().and_then(|n| i64::try_from(n).ok())
    }

    /// Returns the value as u64 if it fits, or else None.
    #[inline]
    pub fn as_u64(&self) -> Option<u64> {
        self.as_u128().and_then(|n| u64::try_from(n).ok())
    }
}

macro_rules! try_from_integer {
    ($conversion:ident => $($ty:ident)*) => {
        $(
            impl TryFrom<&BigInteger> for $ty {
                type Error = Error;

                fn try_from(n: &BigInteger) -> Result<Self> {
                    n.$conversion()
                        .and_then(|n| $ty::try_from(n).ok())
                        .ok_or_else(Error::out_of_range)
                }
            }

            impl TryFrom<BigInteger> for $ty {
                type Error = Error;

                #[inline]
                fn try_from(n: BigInteger) -> Result<Self> {
                    $ty::try_from(&n)
                }
            }
        )*
    };
}

try_from_integer!(as_i128 => i8 i16 i32 i64 i128 isize);
try_from_integer!(as_u128 => u8 u16 u32 u64 u128 usize);

macro_rules! partialeq_numeric {
    ($([$($ty:ty)*], $conversion:ident, $base:ty)*) => {
        $($(
            impl PartialEq<$ty> for BigInteger {
                fn eq(&self, other: &$ty) -> bool {
                    self.$conversion().map_or(false, |i| i == (*other as $base))
                }
            }

            impl PartialEq<BigInteger> for $ty {
                fn eq(&self, other: &BigInteger) -> bool {
                    other.$conversion().map_or(false, |i| i == (*self as $base))
                }
            }

            impl<'a> PartialEq<$ty> for &'a BigInteger {
                fn eq(&self, other: &$ty) -> bool {
                    self.$conversion().map_or(false, |i| i == (*other as $base))
                }
            }
        )*)*
    }
}

partialeq_numeric! {
    [i8 i16 i32 i64 i128 isize], as_i128, i128
    [u8 u16 u32 u64 u128 usize], as_u128, u128
}
