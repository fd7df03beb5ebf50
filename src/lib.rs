//! # pom_reader
//!
//! A strict, schema-driven reader for Maven-style project descriptors
//! (`pom.xml`).
//!
//! The reader turns a `<project>` document into an immutable, structurally
//! validated [`Model`]. It checks grammar shape only: which elements may
//! appear where, that no field is repeated, and that scalars have the right
//! type. It does not resolve inheritance, interpolate properties or evaluate
//! profiles.
//!
//! ## Key Features
//!
//! - **Strict or lenient**: unknown elements, unknown attributes and repeated
//!   fields are errors in strict mode and skipped in lenient mode, chosen per
//!   call
//! - **Absent is not empty**: an element missing from the document reads as
//!   `None`, an empty list wrapper as an empty `Vec`
//! - **Immutable model**: entities are frozen by their builders, with a
//!   content-derived identity value computed once
//! - **Free-form configuration**: plugin configuration blocks are kept as
//!   order-preserving [`Dom`] trees
//! - **Located errors**: every document error carries a line and column
//!
//! ## Quick Start
//!
//! ```rust
//! use pom_reader::from_str;
//!
//! let xml = r#"
//!     <project>
//!       <groupId>g</groupId>
//!       <artifactId>a</artifactId>
//!       <version>1.0</version>
//!     </project>"#;
//!
//! let model = from_str(xml).unwrap();
//! assert_eq!(model.group_id().map(String::as_str), Some("g"));
//! assert_eq!(model.artifact_id().map(String::as_str), Some("a"));
//! assert_eq!(model.version().map(String::as_str), Some("1.0"));
//! assert_eq!(model.packaging(), None);
//! ```
//!
//! ### Lenient reading
//!
//! ```rust
//! use pom_reader::{from_str, from_str_with_options, ReaderOptions};
//!
//! let xml = "<project><groupId>g</groupId><foo><bar/></foo></project>";
//!
//! assert!(from_str(xml).is_err());
//! let model = from_str_with_options(xml, ReaderOptions::lenient()).unwrap();
//! assert_eq!(model.group_id().map(String::as_str), Some("g"));
//! ```
//!
//! ### Free-form configuration
//!
//! ```rust
//! use pom_reader::{dom, from_str};
//!
//! let xml = r#"
//!     <project><build><plugins><plugin>
//!       <artifactId>maven-compiler-plugin</artifactId>
//!       <configuration><release>17</release></configuration>
//!     </plugin></plugins></build></project>"#;
//!
//! let model = from_str(xml).unwrap();
//! let plugin = &model.build().unwrap().plugins().unwrap()[0];
//! assert_eq!(plugin.configuration(), Some(&dom!(configuration { release: "17" })));
//! ```
//!
//! ## Logging
//!
//! The reader emits [`tracing`] events: `debug` when a read starts and
//! finishes and when lenient mode skips something, `trace` for every
//! production. No subscriber is installed.
//!
//! ## Grammar
//!
//! The [`grammar`] module documents every production and the exact strict and
//! lenient behaviour.

pub mod coerce;
pub mod de;
pub mod dom;
pub mod error;
pub(crate) mod fields;
pub mod grammar;
pub mod identity;
pub mod macros;
pub mod map;
pub mod model;
pub mod options;
pub mod reader;

pub use de::{Deserializer, Production, StartTag};
pub use dom::Dom;
pub use error::{Error, Result};
pub use identity::{Identity, IdentityFold};
pub use map::Properties;
pub use model::*;
pub use options::ReaderOptions;
pub use reader::ModelReader;

use std::io;

/// Reads a descriptor from a string in strict mode.
///
/// # Examples
///
/// ```rust
/// use pom_reader::from_str;
///
/// let model = from_str("<project><modules><module>core</module></modules></project>").unwrap();
/// assert_eq!(model.modules(), Some(&vec!["core".to_string()]));
/// ```
///
/// # Errors
///
/// Returns an error if the document is malformed or breaks the grammar.
/// Error messages include line and column information.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(s: &str) -> Result<Model> {
    from_str_with_options(s, ReaderOptions::default())
}

/// Reads a descriptor from a string with custom options.
///
/// # Errors
///
/// As [`from_str`]; lenient options suppress the checks listed in
/// [`grammar`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options(s: &str, options: ReaderOptions) -> Result<Model> {
    ModelReader::with_options(options).read_str(s, options.strict)
}

/// Reads a descriptor from UTF-8 bytes in strict mode.
///
/// # Examples
///
/// ```rust
/// use pom_reader::from_slice;
///
/// let model = from_slice(b"<project><name>demo</name></project>").unwrap();
/// assert_eq!(model.name().map(String::as_str), Some("demo"));
/// ```
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8, or as [`from_str`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(v: &[u8]) -> Result<Model> {
    from_slice_with_options(v, ReaderOptions::default())
}

/// Reads a descriptor from UTF-8 bytes with custom options.
///
/// # Errors
///
/// As [`from_slice`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice_with_options(v: &[u8], options: ReaderOptions) -> Result<Model> {
    ModelReader::with_options(options).read_slice(v, options.strict)
}

/// Reads a descriptor from an I/O stream in strict mode.
///
/// # Examples
///
/// ```rust
/// use pom_reader::from_reader;
/// use std::io::Cursor;
///
/// let cursor = Cursor::new(b"<project><url>https://example.org</url></project>");
/// let model = from_reader(cursor).unwrap();
/// assert_eq!(model.url().map(String::as_str), Some("https://example.org"));
/// ```
///
/// # Errors
///
/// Returns an error if reading from the stream fails, or as [`from_slice`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R: io::Read>(reader: R) -> Result<Model> {
    from_reader_with_options(reader, ReaderOptions::default())
}

/// Reads a descriptor from an I/O stream with custom options.
///
/// # Errors
///
/// As [`from_reader`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader_with_options<R: io::Read>(reader: R, options: ReaderOptions) -> Result<Model> {
    ModelReader::with_options(options).read(reader, options.strict)
}
