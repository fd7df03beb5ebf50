//! Error types for reading project descriptors.
//!
//! Every failure aborts the whole read: the caller receives the first problem
//! encountered, never a partially built model.
//!
//! ## Error Categories
//!
//! - **Grammar errors**: duplicated tags, unrecognised elements or attributes,
//!   a wrong or missing root element, text where only tags may appear
//! - **Coercion errors**: malformed numeric or date literals
//! - **Tokenizer errors**: malformed XML reported by the underlying tokenizer
//! - **I/O and encoding errors**: failures while obtaining the document text
//!
//! Grammar, coercion and tokenizer errors carry the line and column of the
//! tokenizer at the moment the problem was detected.
//!
//! ## Examples
//!
//! ```rust
//! use pom_reader::{from_str, Error};
//!
//! let result = from_str("<project><groupId>a</groupId><groupId>b</groupId></project>");
//!
//! match result {
//!     Err(Error::DuplicatedTag { tag, .. }) => assert_eq!(tag, "groupId"),
//!     other => panic!("unexpected result: {:?}", other),
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while reading a descriptor.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// IO error while reading the input stream
    #[error("IO error: {0}")]
    Io(String),

    /// The input bytes could not be decoded as text
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// The tokenizer rejected the document
    #[error("Malformed XML at line {line}, column {col}: {msg}")]
    Xml { line: usize, col: usize, msg: String },

    /// A field element appeared twice under the same parent
    #[error("Duplicated tag: '{tag}' (position: line {line}, column {col})")]
    DuplicatedTag { line: usize, col: usize, tag: String },

    /// A child element that the grammar does not know
    #[error("Unrecognised tag: '{tag}' (position: line {line}, column {col})")]
    UnrecognisedTag { line: usize, col: usize, tag: String },

    /// An attribute that the grammar does not know
    #[error("Unknown attribute '{attribute}' for tag '{tag}' (position: line {line}, column {col})")]
    UnknownAttribute {
        line: usize,
        col: usize,
        attribute: String,
        tag: String,
    },

    /// The first element of the document is not the expected root
    #[error("Expected root element '{expected}' but found '{found}' (position: line {line}, column {col})")]
    WrongRootElement {
        line: usize,
        col: usize,
        expected: String,
        found: String,
    },

    /// The document contains no element at all
    #[error("Expected root element '{expected}' but found no element at all: invalid XML document (position: line {line}, column {col})")]
    MissingRootElement {
        line: usize,
        col: usize,
        expected: String,
    },

    /// The document ended while an element was still open
    #[error("Unexpected end of input at line {line}, column {col}\nExpected: {expected}")]
    UnexpectedEof {
        line: usize,
        col: usize,
        expected: String,
    },

    /// Content that does not fit the position it appears in
    #[error("Unexpected content at line {line}, column {col}: {msg}")]
    UnexpectedContent { line: usize, col: usize, msg: String },

    /// A scalar could not be coerced to the field's type
    #[error("Unable to parse element '{field}', must be {expected} (found '{value}' at line {line}, column {col})")]
    InvalidValue {
        line: usize,
        col: usize,
        field: String,
        expected: String,
        value: String,
    },

    /// A date literal did not match the field's date format
    #[error("Unable to parse date of element '{field}' at line {line}, column {col}: {msg}")]
    InvalidDate {
        line: usize,
        col: usize,
        field: String,
        msg: String,
    },
}

impl Error {
    /// Creates a tokenizer error with line and column information.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pom_reader::Error;
    ///
    /// let err = Error::xml(3, 7, "mismatched end tag");
    /// assert!(err.to_string().contains("line 3"));
    /// ```
    pub fn xml<T: fmt::Display>(line: usize, col: usize, msg: T) -> Self {
        Error::Xml {
            line,
            col,
            msg: msg.to_string(),
        }
    }

    pub fn duplicated_tag(line: usize, col: usize, tag: &str) -> Self {
        Error::DuplicatedTag {
            line,
            col,
            tag: tag.to_string(),
        }
    }

    pub fn unrecognised_tag(line: usize, col: usize, tag: &str) -> Self {
        Error::UnrecognisedTag {
            line,
            col,
            tag: tag.to_string(),
        }
    }

    pub fn unknown_attribute(line: usize, col: usize, attribute: &str, tag: &str) -> Self {
        Error::UnknownAttribute {
            line,
            col,
            attribute: attribute.to_string(),
            tag: tag.to_string(),
        }
    }

    pub fn wrong_root_element(line: usize, col: usize, expected: &str, found: &str) -> Self {
        Error::WrongRootElement {
            line,
            col,
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    pub fn missing_root_element(line: usize, col: usize, expected: &str) -> Self {
        Error::MissingRootElement {
            line,
            col,
            expected: expected.to_string(),
        }
    }

    /// Creates an unexpected end-of-input error.
    pub fn unexpected_eof(line: usize, col: usize, expected: &str) -> Self {
        Error::UnexpectedEof {
            line,
            col,
            expected: expected.to_string(),
        }
    }

    pub fn unexpected_content(line: usize, col: usize, msg: &str) -> Self {
        Error::UnexpectedContent {
            line,
            col,
            msg: msg.to_string(),
        }
    }

    /// Creates a coercion error naming the field, the expected kind and the raw text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pom_reader::Error;
    ///
    /// let err = Error::invalid_value(5, 10, "timeout", "an integer", "soon");
    /// assert!(err.to_string().contains("must be an integer"));
    /// ```
    pub fn invalid_value(line: usize, col: usize, field: &str, expected: &str, value: &str) -> Self {
        Error::InvalidValue {
            line,
            col,
            field: field.to_string(),
            expected: expected.to_string(),
            value: value.to_string(),
        }
    }

    pub fn invalid_date<T: fmt::Display>(line: usize, col: usize, field: &str, msg: T) -> Self {
        Error::InvalidDate {
            line,
            col,
            field: field.to_string(),
            msg: msg.to_string(),
        }
    }

    /// Creates an I/O error for stream reading failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    pub fn encoding<T: fmt::Display>(msg: T) -> Self {
        Error::Encoding(msg.to_string())
    }

    /// Returns the `(line, column)` at which the error was detected, if it
    /// came from the document rather than from the stream around it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pom_reader::Error;
    ///
    /// assert_eq!(Error::unrecognised_tag(2, 3, "foo").position(), Some((2, 3)));
    /// assert_eq!(Error::io("closed").position(), None);
    /// ```
    #[must_use]
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            Error::Xml { line, col, .. }
            | Error::DuplicatedTag { line, col, .. }
            | Error::UnrecognisedTag { line, col, .. }
            | Error::UnknownAttribute { line, col, .. }
            | Error::WrongRootElement { line, col, .. }
            | Error::MissingRootElement { line, col, .. }
            | Error::UnexpectedEof { line, col, .. }
            | Error::UnexpectedContent { line, col, .. }
            | Error::InvalidValue { line, col, .. }
            | Error::InvalidDate { line, col, .. } => Some((*line, *col)),
            Error::Io(_) | Error::Encoding(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::io(&err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
