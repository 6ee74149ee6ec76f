//! Error types for argument marshaling.
//!
//! Marshaling through the [`Record`](crate::Record) trait cannot fail: every
//! value a record can describe has an encoding. Errors only arise on the serde
//! path, where a `Serialize` implementation may hand the serializer a value
//! that has no command-line representation.
//!
//! ## Error Categories
//!
//! - **Unsupported Types**: floats, maps, nested structs without
//!   `#[serde(flatten)]`, nested sequences, byte strings
//! - **Custom Errors**: raised by user `Serialize` implementations
//!
//! ## Examples
//!
//! ```rust
//! use serde::Serialize;
//! use serde_args::{to_args, Error};
//!
//! #[derive(Serialize)]
//! struct Opts {
//!     ratio: f64,
//! }
//!
//! let err = to_args(&Opts { ratio: 0.5 }).unwrap_err();
//! assert!(matches!(err, Error::UnsupportedType(_)));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while marshaling arguments.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The value has no command-line encoding.
    #[error("Unsupported argument type: {0}")]
    UnsupportedType(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an unsupported type error for values that cannot become arguments.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_args::Error;
    ///
    /// let err = Error::unsupported_type("f64");
    /// assert_eq!(err.to_string(), "Unsupported argument type: f64");
    /// ```
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Attaches the tag of the field being marshaled to an unsupported type error.
    pub(crate) fn at_tag(self, tag: &str) -> Self {
        match self {
            Error::UnsupportedType(msg) => Error::UnsupportedType(format!("{msg} (tag `{tag}`)")),
            other => other,
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_tag_only_decorates_unsupported() {
        let err = Error::unsupported_type("map").at_tag("env");
        assert_eq!(err.to_string(), "Unsupported argument type: map (tag `env`)");

        let err = Error::custom("boom").at_tag("env");
        assert_eq!(err, Error::Custom("boom".to_string()));
    }
}
