//! When parsing, converting or dividing big integers goes wrong.

use alloc::boxed::Box;
use alloc::string::ToString;
use core::fmt::{self, Debug, Display};
use core::result;
#[cfg(feature = "std")]
use std::io;

/// This type represents all possible errors that can occur when parsing or
/// operating on a [`BigInt`](crate::BigInt).
pub struct Error {
    /// This `Box` allows us to keep the size of `Error` as small as possible. A
    /// larger `Error` type was substantially slower due to all the functions
    /// that pass around `Result<T, Error>`.
    err: Box<ErrorImpl>,
}

/// Alias for a `Result` with the error type `json_bigint::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// Zero-based byte offset into the parsed input at which the error was
    /// detected.
    ///
    /// Errors that do not come from parsing text, such as a division by zero,
    /// report `None`.
    pub fn index(&self) -> Option<usize> {
        self.err.index
    }

    /// Specifies the cause of this error.
    pub fn code(&self) -> &ErrorCode {
        &self.err.code
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::Syntax` - text that is not a valid integer in the radix
    /// - `Category::Range` - a value that does not fit the requested native type
    /// - `Category::Arithmetic` - an undefined arithmetic operation
    pub fn classify(&self) -> Category {
        match self.err.code {
            ErrorCode::EmptyNumber | ErrorCode::InvalidDigit { .. } => Category::Syntax,
            ErrorCode::NumberOutOfRange => Category::Range,
            ErrorCode::DivisionByZero => Category::Arithmetic,
        }
    }

    /// Returns true if this error was caused by input text that is not a
    /// valid integer.
    pub fn is_syntax(&self) -> bool {
        self.classify() == Category::Syntax
    }

    /// Returns true if this error was caused by a value that does not fit the
    /// requested native integer type.
    pub fn is_range(&self) -> bool {
        self.classify() == Category::Range
    }

    /// Returns true if this error was caused by dividing by zero.
    pub fn is_arithmetic(&self) -> bool {
        self.classify() == Category::Arithmetic
    }
}

/// Categorizes the cause of a `json_bigint::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// The error was caused by text that is not a valid integer.
    Syntax,

    /// The error was caused by a value outside the range of the target type.
    Range,

    /// The error was caused by an undefined operation, such as dividing by
    /// zero.
    Arithmetic,
}

#[cfg(feature = "std")]
impl From<Error> for io::Error {
    /// Convert a `json_bigint::Error` into an `io::Error`.
    ///
    /// Every big integer error is turned into an `InvalidData` IO error, the
    /// way a decoder reports a malformed big number payload.
    fn from(err: Error) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

struct ErrorImpl {
    code: ErrorCode,
    index: Option<usize>,
}

/// This type describes all possible errors that can occur when parsing or
/// operating on big integers.
#[derive(Clone, PartialEq, Eq)]
pub enum ErrorCode {
    /// The input has no digits, either empty or a lone `-`.
    EmptyNumber,

    /// A character is not a digit in the requested radix.
    InvalidDigit {
        /// The offending character.
        digit: char,
        /// The radix the input was parsed in.
        radix: u32,
    },

    /// Number is bigger than the maximum value of the requested type.
    NumberOutOfRange,

    /// The divisor of a division or remainder is zero.
    DivisionByZero,
}

impl Debug for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::EmptyNumber => f.write_str("EmptyNumber"),
            ErrorCode::InvalidDigit { digit, radix } => f
                .debug_struct("InvalidDigit")
                .field("digit", digit)
                .field("radix", radix)
                .finish(),
            ErrorCode::NumberOutOfRange => f.write_str("NumberOutOfRange"),
            ErrorCode::DivisionByZero => f.write_str("DivisionByZero"),
        }
    }
}

impl Error {
    #[cold]
    pub(crate) fn syntax(code: ErrorCode, index: usize) -> Self {
        Error {
            err: Box::new(ErrorImpl {
                code,
                index: Some(index),
            }),
        }
    }

    #[cold]
    pub(crate) fn out_of_range() -> Self {
        Error {
            err: Box::new(ErrorImpl {
                code: ErrorCode::NumberOutOfRange,
                index: None,
            }),
        }
    }

    #[cold]
    pub(crate) fn division_by_zero() -> Self {
        Error {
            err: Box::new(ErrorImpl {
                code: ErrorCode::DivisionByZero,
                index: None,
            }),
        }
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::EmptyNumber => f.write_str("cannot parse integer from empty string"),
            ErrorCode::InvalidDigit { digit, radix } => {
                write!(f, "invalid digit {:?} in radix {}", digit, radix)
            }
            ErrorCode::NumberOutOfRange => f.write_str("number out of range"),
            ErrorCode::DivisionByZero => f.write_str("division by zero"),
        }
    }
}

impl serde::de::StdError for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&*self.err, f)
    }
}

impl Display for ErrorImpl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.index {
            Some(index) => write!(f, "{} at index {}", self.code, index),
            None => Display::fmt(&self.code, f),
        }
    }
}

// Remove two layers of verbosity from the debug representation. Humans often
// end up seeing this representation because it is what unwrap() shows.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.err.index {
            Some(index) => write!(
                f,
                "Error({:?}, index: {})",
                self.err.code.to_string(),
                index
            ),
            None => write!(f, "Error({:?})", self.err.code.to_string()),
        }
    }
}
