//! Defines the `Error` type for the pearl library

use std::error::Error;
use std::fmt;
use std::result;

pub type Result<T> = result::Result<T, PearlError>;

#[derive(Clone, Debug, PartialEq)]
pub enum PearlError {

    /// A variable shared by two operand factors has a different cardinality in
    /// each. Detected before any output is built; no partial factor is returned.
    DimensionalityMismatch,

    /// Marginalizing a `Factor` over its entire scope, which would leave a
    /// factor over no variables
    EmptyResultScope,

    /// An assignment whose length does not match the scope of the `Factor` it
    /// is applied to, or a value table whose length does not match the product
    /// of the scope cardinalities
    ShapeMismatch,

    /// An assignment holding a value outside the cardinality of its variable
    InvalidAssignment,

    /// Represents a variable that was present multiple times in a situation
    /// where it should only have been present once
    DuplicateVariable,

    /// Represents an error where a certain constraint on a scope was not satisfied
    InvalidScope,

    /// Exactly what it sounds like
    DivideByZero,

    /// A general error with the given description
    General(String),

    /// An unknown error condition
    Unknown

}

impl Error for PearlError {

    fn description(&self) -> &str {
        match self {
            &PearlError::DimensionalityMismatch => "A shared variable has mismatched cardinalities",
            &PearlError::EmptyResultScope => "The resultant factor would have an empty scope",
            &PearlError::ShapeMismatch => "Assignment or table length does not match the scope",
            &PearlError::InvalidAssignment => "Assignment value exceeds the variable cardinality",
            &PearlError::DuplicateVariable => "A variable was encountered twice",
            &PearlError::InvalidScope => "Provided scope did not satisfy constraints",
            &PearlError::DivideByZero => "Encountered division by zero",
            &PearlError::General(ref err) => err.as_str(),
            &PearlError::Unknown => "An unknown error occured"
        }
    }

    fn cause(&self) -> Option<&Error> {
        None
    }

}

impl fmt::Display for PearlError {

    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.description())
    }

}
