//! Error types for tree access, schema authoring, and codec operations.
//!
//! This module contains the [`Error`] type which represents all possible
//! errors that can occur when accessing values, constructing schemas, or
//! reading and writing NBT data.
//!
//! Verification violations are deliberately not part of [`Error`]: a value
//! tree that fails its schema is ordinary data, reported through
//! [`Violation`](crate::Violation) so the caller can inspect the failing
//! paths and recover.
//!
//! # Example
//!
//! ```
//! use nbt_schema::{Error, Tag, Value};
//!
//! let value = Value::Int(7);
//! match value.as_str() {
//!     Ok(text) => println!("string: {text}"),
//!     Err(Error::TagMismatch { expected, actual }) => {
//!         assert_eq!(expected, Tag::String);
//!         assert_eq!(actual, Tag::Int);
//!     }
//!     Err(_) => unreachable!(),
//! }
//! ```

use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{de, ser};

use crate::Tag;

/// Alias for a `Result` with the error type [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// This type represents all possible errors that can occur when accessing
/// values, authoring schemas, or reading and writing NBT data.
#[derive(Debug)]
pub enum Error {
    Message(String),

    /// An I/O error occurred.
    ///
    /// This happens when writing to a [`std::io::Write`] implementation
    /// that encounters an error.
    IO(std::io::Error),

    /// The input ended unexpectedly.
    ///
    /// This error occurs when the NBT data is truncated or incomplete.
    /// For example, if a compound tag declares a string field but the data
    /// ends before the string content.
    EndOfFile,

    /// Extra bytes remain after parsing the NBT data.
    ///
    /// NBT documents should be consumed completely. If there are remaining
    /// bytes after the root tag ends, this error is returned with the count
    /// of remaining bytes.
    TrailingData(usize),

    /// An invalid NBT tag type was encountered.
    ///
    /// Tag types are 0-13. If a byte outside this range is found where a tag
    /// type is expected, this error is returned with the invalid byte value.
    /// It is also returned when an `End` value appears where a payload is
    /// required, such as inside a compound entry.
    InvalidTagType(u8),

    /// A string payload was not valid MUTF-8.
    InvalidString,

    /// A string or tag name exceeds the encodable length.
    StringTooLong(usize),

    /// A list or array exceeds the encodable length.
    ListTooLong(usize),

    /// A typed view of a value was requested whose actual kind differs,
    /// or a list operation would break the list's element homogeneity.
    TagMismatch { expected: Tag, actual: Tag },

    /// An array or list element access outside bounds.
    OutOfRange { index: usize, len: usize },

    /// Two fields of a compound schema share a name.
    DuplicateField(String),

    /// A compound schema field has an empty name without unnamed matching
    /// enabled.
    UnnamedField,

    /// A schema option does not apply to the node's kind.
    InvalidOptions(&'static str),
}

#[cfg(feature = "serde")]
impl ser::Error for Error {
    fn custom<T: Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

#[cfg(feature = "serde")]
impl de::Error for Error {
    fn custom<T: Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Message(message) => formatter.write_str(message),
            Error::IO(error) => formatter.write_str(&error.to_string()),
            Error::EndOfFile => formatter.write_str("unexpected end of input"),
            Error::TrailingData(remaining_bytes) => formatter.write_str(&format!(
                "trailing data after end of input: {remaining_bytes} bytes remaining"
            )),
            Error::InvalidTagType(tag) => {
                formatter.write_str(&format!("invalid NBT tag type: {tag:#04x}"))
            }
            Error::InvalidString => formatter.write_str("string payload is not valid MUTF-8"),
            Error::StringTooLong(len) => {
                formatter.write_str(&format!("string length too long: {len}"))
            }
            Error::ListTooLong(len) => formatter.write_str(&format!("list length too long: {len}")),
            Error::TagMismatch { expected, actual } => formatter.write_str(&format!(
                "tag mismatch: expected {expected:?}, got {actual:?}"
            )),
            Error::OutOfRange { index, len } => formatter.write_str(&format!(
                "index {index} out of range for length {len}"
            )),
            Error::DuplicateField(name) => {
                formatter.write_str(&format!("duplicate schema field name: {name:?}"))
            }
            Error::UnnamedField => {
                formatter.write_str("schema field has an empty name without unnamed matching")
            }
            Error::InvalidOptions(reason) => formatter.write_str(reason),
        }
    }
}

impl std::error::Error for Error {}
