//! When parsing, dividing or narrowing an integer goes wrong.

use alloc::boxed::Box;
use alloc::string::ToString;
use core::fmt::{self, Debug, Display};
use core::result;
#[cfg(feature = "std")]
use std::{error, io};

/// This type represents all possible errors that can occur when constructing
/// or operating on a [`BigInteger`](crate::BigInteger).
pub struct Error {
    /// This `Box` allows us to keep the size of `Error` as small as possible. A
    /// larger `Error` type would make every `Result<BigInteger, Error>` wider
    /// than the integer it wraps.
    err: Box<ErrorImpl>,
}

/// Alias for a `Result` with the error type `big_integer::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// One-based byte column at which a parse error was detected.
    ///
    /// The first byte of the input, which may be the `-` sign, is in column 1.
    ///
    /// Errors without a position, such as division by zero or parsing an
    /// empty string, report column 0.
    pub fn column(&self) -> usize {
        self.err.column
    }

    /// Specifies the cause of this error.
    pub fn code(&self) -> &ErrorCode {
        &self.err.code
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::Format` - input that is not a decimal integer
    /// - `Category::Arithmetic` - an operation with no defined result
    /// - `Category::Range` - a value that does not fit the requested type
    pub fn classify(&self) -> Category {
        match self.err.code {
            ErrorCode::EmptyInput | ErrorCode::MissingDigits | ErrorCode::InvalidDigit => {
                Category::Format
            }
            ErrorCode::DivideByZero => Category::Arithmetic,
            ErrorCode::OutOfRange => Category::Range,
        }
    }

    /// Returns true if this error was caused by input that was not a
    /// syntactically valid decimal integer.
    pub fn is_format(&self) -> bool {
        self.classify() == Category::Format
    }

    /// Returns true if this error was caused by an arithmetic operation that
    /// has no result, such as division by zero.
    pub fn is_arithmetic(&self) -> bool {
        self.classify() == Category::Arithmetic
    }

    /// Returns true if this error was caused by converting a value into a
    /// primitive type too narrow to hold it.
    pub fn is_range(&self) -> bool {
        self.classify() == Category::Range
    }
}

/// Categorizes the cause of a `big_integer::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// The error was caused by input that was not a decimal integer.
    Format,

    /// The error was caused by an operation with no defined result.
    Arithmetic,

    /// The error was caused by a value outside the range of the target type.
    Range,
}

#[cfg(feature = "std")]
#[allow(clippy::fallible_impl_from)]
impl From<Error> for io::Error {
    /// Convert a `big_integer::Error` into an `io::Error`.
    ///
    /// Format and range errors are turned into `InvalidData` IO errors.
    /// Arithmetic errors are turned into `InvalidInput` IO errors.
    fn from(j: Error) -> Self {
        match j.classify() {
            Category::Format | Category::Range => io::Error::new(io::ErrorKind::InvalidData, j),
            Category::Arithmetic => io::Error::new(io::ErrorKind::InvalidInput, j),
        }
    }
}

struct ErrorImpl {
    code: ErrorCode,
    column: usize,
}

/// This type describes all possible errors that can occur when constructing
/// or operating on a `BigInteger`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    /// The decimal string was empty.
    EmptyInput,

    /// The decimal string consisted of a `-` sign and nothing else.
    MissingDigits,

    /// The decimal string contained a byte that is not an ASCII digit.
    InvalidDigit,

    /// Division or remainder with a zero divisor.
    DivideByZero,

    /// The value is outside the range of the requested primitive type.
    OutOfRange,
}

impl Error {
    #[cold]
    pub(crate) fn syntax(code: ErrorCode, column: usize) -> Self {
        Error {
            err: Box::new(ErrorImpl { code, column }),
        }
    }

    #[cold]
    pub(crate) fn divide_by_zero() -> Self {
        Error {
            err: Box::new(ErrorImpl {
                code: ErrorCode::DivideByZero,
                column: 0,
            }),
        }
    }

    #[cold]
    pub(crate) fn out_of_range() -> Self {
        Error {
            err: Box::new(ErrorImpl {
                code: ErrorCode::OutOfRange,
                column: 0,
            }),
        }
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::EmptyInput => f.write_str("cannot parse integer from empty string"),
            ErrorCode::MissingDigits => f.write_str("expected at least one digit after the sign"),
            ErrorCode::InvalidDigit => f.write_str("invalid digit found in string"),
            ErrorCode::DivideByZero => f.write_str("attempt to divide by zero"),
            ErrorCode::OutOfRange => f.write_str("integer out of range for the target type"),
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&*self.err, f)
    }
}

impl Display for ErrorImpl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.column == 0 {
            Display::fmt(&self.code, f)
        } else {
            write!(f, "{} at column {}", self.code, self.column)
        }
    }
}

// Remove two layers of verbosity from the debug representation. Humans often
// end up seeing this representation because it is what unwrap() shows.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Error({:?}, column: {})",
            self.err.code.to_string(),
            self.err.column
        )
    }
}
