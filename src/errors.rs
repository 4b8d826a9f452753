//! Custom error types for geodetic object construction and serialization

use std::fmt;
use std::io;

/// Errors produced by factories, parsers and emitters
#[derive(Debug)]
pub enum GeodeticError {
    /// I/O error (CLI file handling)
    IoError(io::Error),
    /// A property was supplied with the wrong kind of value
    InvalidValueType(String),
    /// Unit missing or not recognized
    InvalidUnit(String),
    /// Unit of the wrong kind (e.g. an angle fed where a length is required)
    InvalidUnitKind(String),
    /// An object invariant would be violated
    InvariantViolation(String),
    /// Malformed WKT or PROJ string, with byte position
    ParsingError { position: usize, message: String },
    /// A WKT keyword outside the recognized set
    UnknownKeyword(String),
    /// The requested dialect cannot represent the object
    FormattingError(String),
    /// The operation is not supported for this object
    UnsupportedOperation(String),
    /// Authority lookup miss
    NotFound(String),
}

impl fmt::Display for GeodeticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeodeticError::IoError(e) => write!(f, "I/O error: {}", e),
            GeodeticError::InvalidValueType(msg) => write!(f, "Invalid value type: {}", msg),
            GeodeticError::InvalidUnit(msg) => write!(f, "Invalid unit: {}", msg),
            GeodeticError::InvalidUnitKind(msg) => write!(f, "Invalid unit kind: {}", msg),
            GeodeticError::InvariantViolation(msg) => write!(f, "Invariant violation: {}", msg),
            GeodeticError::ParsingError { position, message } => {
                write!(f, "Parsing error at position {}: {}", position, message)
            }
            GeodeticError::UnknownKeyword(kw) => write!(f, "Unknown keyword: {}", kw),
            GeodeticError::FormattingError(msg) => write!(f, "Formatting error: {}", msg),
            GeodeticError::UnsupportedOperation(msg) => write!(f, "Unsupported operation: {}", msg),
            GeodeticError::NotFound(what) => write!(f, "Not found: {}", what),
        }
    }
}

impl std::error::Error for GeodeticError {}

impl From<io::Error> for GeodeticError {
    fn from(error: io::Error) -> Self {
        GeodeticError::IoError(error)
    }
}

/// Result type for geodetic operations
pub type GeodeticResult<T> = Result<T, GeodeticError>;

impl GeodeticError {
    /// Build a parsing error with position context
    pub fn at(position: usize, message: impl Into<String>) -> Self {
        GeodeticError::ParsingError {
            position,
            message: message.into(),
        }
    }
}
