//! Serialize a `BigInteger` as its decimal string.

use crate::integer::BigInteger;
use serde::ser::{Serialize, Serializer};

impl Serialize for BigInteger {
    /// Always written as a string, since most formats cap native integers
    /// at 64 or 128 bits.
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
