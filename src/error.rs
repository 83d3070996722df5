//! Error types for layoutrs
//!
//! Every operation reports failures through one closed set of kinds. The
//! Rust API returns them as [`LayoutError`]; the C surface in [`crate::ffi`]
//! maps the same kinds onto stable numeric codes.

use std::fmt;
use std::io;
use thiserror::Error;

/// Main error type for layoutrs operations
#[derive(Debug, Error)]
pub enum LayoutError {
    /// A required input pointer was absent
    #[error("Null pointer input")]
    NullPointerInput,

    /// A required output slot was absent
    #[error("Null pointer output")]
    NullPointerOutput,

    /// A handle argument does not reference a live object
    #[error("Invalid input handle: {0}")]
    InvalidInput(String),

    /// An output handle was expected to be pre-created but is not
    #[error("Invalid output handle: {0}")]
    InvalidOutput(String),

    /// An output handle already references a live object
    #[error("Output handle already references a live object")]
    OverwriteValid,

    /// Index or size argument outside valid bounds
    #[error("Out of range: {0}")]
    OutOfRange(String),

    /// A lookup found nothing
    #[error("No data: {0}")]
    NoData(String),

    /// An insert collided with an existing unique key
    #[error("Duplicate: {0}")]
    Duplicate(String),

    /// A value violates a domain constraint
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Underlying I/O or format decoding failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A structural validation failed
    #[error("{0}")]
    Generic(String),
}

/// Fieldless view of a [`LayoutError`], one per result code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NullPointerInput,
    NullPointerOutput,
    InvalidInput,
    InvalidOutput,
    OverwriteValid,
    OutOfRange,
    NoData,
    Duplicate,
    InvalidArgument,
    Serialization,
    Generic,
}

impl ErrorKind {
    /// Stable numeric code. `0` is reserved for success.
    pub const fn code(self) -> i32 {
        match self {
            ErrorKind::NullPointerInput => 1,
            ErrorKind::NullPointerOutput => 2,
            ErrorKind::InvalidInput => 3,
            ErrorKind::InvalidOutput => 4,
            ErrorKind::OverwriteValid => 5,
            ErrorKind::OutOfRange => 6,
            ErrorKind::NoData => 7,
            ErrorKind::Duplicate => 8,
            ErrorKind::InvalidArgument => 9,
            ErrorKind::Serialization => 10,
            ErrorKind::Generic => 11,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl LayoutError {
    /// The result-code class of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            LayoutError::NullPointerInput => ErrorKind::NullPointerInput,
            LayoutError::NullPointerOutput => ErrorKind::NullPointerOutput,
            LayoutError::InvalidInput(_) => ErrorKind::InvalidInput,
            LayoutError::InvalidOutput(_) => ErrorKind::InvalidOutput,
            LayoutError::OverwriteValid => ErrorKind::OverwriteValid,
            LayoutError::OutOfRange(_) => ErrorKind::OutOfRange,
            LayoutError::NoData(_) => ErrorKind::NoData,
            LayoutError::Duplicate(_) => ErrorKind::Duplicate,
            LayoutError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            LayoutError::Serialization(_) => ErrorKind::Serialization,
            LayoutError::Generic(_) => ErrorKind::Generic,
        }
    }

    /// `NoData` is an ordinary "absent" answer rather than a failure
    pub fn is_no_data(&self) -> bool {
        matches!(self, LayoutError::NoData(_))
    }
}

/// Result type alias for layoutrs operations
pub type Result<T> = std::result::Result<T, LayoutError>;

impl From<io::Error> for LayoutError {
    fn from(err: io::Error) -> Self {
        LayoutError::Serialization(err.to_string())
    }
}

impl From<String> for LayoutError {
    fn from(s: String) -> Self {
        LayoutError::Generic(s)
    }
}

impl From<&str> for LayoutError {
    fn from(s: &str) -> Self {
        LayoutError::Generic(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LayoutError::Duplicate("dictionary 'meta'".to_string());
        assert_eq!(err.to_string(), "Duplicate: dictionary 'meta'");
    }

    #[test]
    fn test_kind_codes_are_distinct() {
        let kinds = [
            ErrorKind::NullPointerInput,
            ErrorKind::NullPointerOutput,
            ErrorKind::InvalidInput,
            ErrorKind::InvalidOutput,
            ErrorKind::OverwriteValid,
            ErrorKind::OutOfRange,
            ErrorKind::NoData,
            ErrorKind::Duplicate,
            ErrorKind::InvalidArgument,
            ErrorKind::Serialization,
            ErrorKind::Generic,
        ];
        let mut codes: Vec<i32> = kinds.iter().map(|k| k.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), kinds.len());
        assert!(!codes.contains(&0));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: LayoutError = io_err.into();
        assert_eq!(err.kind(), ErrorKind::Serialization);
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_no_data_is_not_fatal() {
        assert!(LayoutError::NoData("key".into()).is_no_data());
        assert!(!LayoutError::Generic("x".into()).is_no_data());
    }
}
