//! Errors and error-related utilities.

use std::{error, fmt, result};

/// The result type used throughout this library.
pub type Result<T> = result::Result<T, Box<dyn error::Error>>;

/// Invalid input.
#[derive(Debug)]
pub struct InvalidInput(pub String);

/// Invalid command line argument.
#[derive(Debug)]
pub struct InvalidArgument(pub String);

/// A nominee whose ethnic background tag is not one of the recognized values.
#[derive(Debug, PartialEq, Eq)]
pub struct UnrecognizedCategory {
    pub tag: String,
    pub year: u16,
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid input: {}", self.0)
    }
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid argument: {}", self.0)
    }
}

impl fmt::Display for UnrecognizedCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "unrecognized ethnic background '{}' in year {}",
            self.tag, self.year
        )
    }
}

impl error::Error for InvalidInput {}

impl error::Error for InvalidArgument {}

impl error::Error for UnrecognizedCategory {}

/// A helper for constructing [InvalidInput].
pub fn invalid_input(s: String) -> Box<dyn error::Error> {
    InvalidInput(s).into()
}

/// A helper for constructing [InvalidInput].
pub fn invalid_input_ref(s: &str) -> Box<dyn error::Error> {
    InvalidInput(s.to_owned()).into()
}

/// A helper for constructing [InvalidArgument].
pub fn invalid_argument(s: String) -> Box<dyn error::Error> {
    InvalidArgument(s).into()
}

/// A helper for constructing [UnrecognizedCategory].
pub fn unrecognized_category(tag: &str, year: u16) -> Box<dyn error::Error> {
    UnrecognizedCategory {
        tag: tag.to_owned(),
        year,
    }
    .into()
}
