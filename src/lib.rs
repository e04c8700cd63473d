//! # BigInteger
//!
//! An arbitrary-precision signed integer type with exact arithmetic.
//!
//! [`BigInteger`] behaves like the primitive integer types without a fixed
//! width: addition, subtraction and multiplication never overflow, division
//! truncates toward zero, and the bitwise operators act on an infinitely
//! sign-extended two's-complement representation.
//!
//! ```
//! use big_integer::BigInteger;
//!
//! let a: BigInteger = "170141183460469231731687303715884105727".parse().unwrap();
//! let b = &a * &a;
//! assert_eq!(
//!     b.to_string(),
//!     "28948022309329048855892746252171976962977213799489202546401021394546514198529",
//! );
//! assert_eq!(&b / &a, a);
//! ```
//!
//! # Parsing and formatting
//!
//! Values are read from and written to base-10 strings. The accepted grammar
//! is an optional leading `-` followed by at least one ASCII digit; leading
//! zeros are allowed and `-0` parses as zero. Any other input produces an
//! [`Error`] whose [`column`](Error::column) points at the offending byte.
//!
//! ```
//! use big_integer::{BigInteger, Category};
//!
//! let err = "-".parse::<BigInteger>().unwrap_err();
//! assert_eq!(err.classify(), Category::Format);
//! assert_eq!(err.to_string(), "expected at least one digit after the sign at column 2");
//! ```
//!
//! # Division by zero
//!
//! The `/` and `%` operators panic on a zero divisor, exactly like `i64`.
//! [`BigInteger::div_rem`] reports the same condition as an error value, and
//! [`BigInteger::checked_div`] and [`BigInteger::checked_rem`] as `None`.
//!
//! ```
//! use big_integer::{BigInteger, ErrorCode};
//!
//! let zero = BigInteger::zero();
//! let err = BigInteger::from(7).div_rem(&zero).unwrap_err();
//! assert_eq!(*err.code(), ErrorCode::DivideByZero);
//! assert!(BigInteger::from(7).checked_rem(&zero).is_none());
//! ```
//!
//! # No-std support
//!
//! As long as there is a memory allocator, it is possible to use this crate
//! without the rest of the Rust standard library. Disable the default "std"
//! feature and enable the "alloc" feature:
//!
//! ```toml
//! [dependencies]
//! big_integer = { version = "0.1", default-features = false, features = ["alloc"] }
//! ```

#![doc(html_root_url = "https://docs.rs/big_integer/0.1.0")]
// Ignored clippy lints
#![allow(
    // limbs are narrowed from and widened to the double-width type
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    // the limb loops mirror the textbook algorithms
    clippy::needless_range_loop,
    clippy::many_single_char_names,
)]
// Ignored clippy_pedantic lints
#![allow(
    // buffer helpers are documented on the wrapping type
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::similar_names,
)]
#![deny(missing_docs)]
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "serde")]
extern crate serde_core as serde;

mod features_check;

mod bitwise;
#[cfg(feature = "serde")]
mod de;
mod display;
mod error;
mod from;
mod integer;
mod math;
mod ops;
mod parse;
#[cfg(feature = "serde")]
mod ser;

#[doc(inline)]
pub use crate::error::{Category, Error, ErrorCode, Result};
#[doc(inline)]
pub use crate::integer::{BigInteger, Sign};
