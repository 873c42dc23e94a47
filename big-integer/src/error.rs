use thiserror::Error;

/// Result of a fallible integer operation.
pub type Result<T> =
    std::result::Result<T, Error>;

/// Error returned by fallible integer operations.
#[allow(missing_docs)]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum Error
{
    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("attempt to divide by zero")]
    DivisionByZero,

    #[error("Negative shift amount: {0}")]
    NegativeShift(i64),

    #[error("Integer does not fit in the target type")]
    OutOfRange,
}

/// Returned when a string is not a decimal integer.
///
/// Accepted strings match `-?[0-9]+`.
#[allow(missing_docs)]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ParseError
{
    #[error("Cannot parse integer from empty string")]
    Empty,

    #[error("Minus sign is not followed by digits")]
    MissingDigits,

    #[error("Invalid digit {found:?} at offset {offset}")]
    InvalidDigit{offset: usize, found: char},
}
