use std::error::Error;
use std::fmt::Display;

/// Error returned when text cannot be parsed into a number.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseNumberError {
    /// The input contains no digits.
    Empty,
    /// The input is not a number in the expected format.
    Malformed { input: String, ty: &'static str },
    /// The input is a number, but it cannot be represented by the target type.
    OutOfRange { input: String, ty: &'static str },
}

impl ParseNumberError {
    pub(crate) fn malformed(input: &str, ty: &'static str) -> Self {
        Self::Malformed {
            input: input.to_owned(),
            ty,
        }
    }

    pub(crate) fn out_of_range(input: &str, ty: &'static str) -> Self {
        Self::OutOfRange {
            input: input.to_owned(),
            ty,
        }
    }
}

impl Display for ParseNumberError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => f.write_str("cannot parse a number from empty input"),
            Self::Malformed { input, ty } => {
                write!(f, "{input:?} is not a valid {ty}")
            }
            Self::OutOfRange { input, ty } => {
                write!(f, "{input:?} is out of range for {ty}")
            }
        }
    }
}

impl Error for ParseNumberError {}
