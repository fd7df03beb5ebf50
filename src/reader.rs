//! The reusable descriptor reader.
//!
//! [`ModelReader`] holds the reader settings and hands each call its own
//! [`Deserializer`], so one reader can be shared between threads and its
//! settings changed between calls without affecting a read in flight.
//!
//! ## Examples
//!
//! ```rust
//! use pom_reader::ModelReader;
//!
//! let reader = ModelReader::new();
//! let xml = "<project><groupId>g</groupId><foo/></project>";
//!
//! assert!(reader.read_str(xml, true).is_err());
//! let model = reader.read_str(xml, false).unwrap();
//! assert_eq!(model.group_id().map(String::as_str), Some("g"));
//! ```

use crate::de::{Deserializer, Production};
use crate::{Error, Model, ReaderOptions, Result};
use std::io;
use tracing::debug;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Encoding reported for byte input without an XML declaration.
pub const DEFAULT_ENCODING: &str = "UTF-8";

/// Reads descriptors from text, bytes or streams.
///
/// # Examples
///
/// ```rust
/// use pom_reader::ModelReader;
/// use std::io::Cursor;
///
/// let mut reader = ModelReader::new();
/// reader.set_add_default_entities(false);
/// assert!(!reader.add_default_entities());
///
/// let xml = b"<project><version>1.0</version></project>";
/// let model = reader.read_default(Cursor::new(&xml[..])).unwrap();
/// assert_eq!(model.version().map(String::as_str), Some("1.0"));
/// assert_eq!(model.model_encoding().map(String::as_str), Some("UTF-8"));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModelReader {
    options: ReaderOptions,
}

impl ModelReader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_options(options: ReaderOptions) -> Self {
        ModelReader { options }
    }

    #[must_use]
    pub fn options(&self) -> ReaderOptions {
        self.options
    }

    /// Controls whether named HTML character entities are resolved.
    pub fn set_add_default_entities(&mut self, add_default_entities: bool) {
        self.options.add_default_entities = add_default_entities;
    }

    #[must_use]
    pub fn add_default_entities(&self) -> bool {
        self.options.add_default_entities
    }

    /// Sets the mode used by [`read_default`](Self::read_default).
    pub fn set_strict(&mut self, strict: bool) {
        self.options.strict = strict;
    }

    #[must_use]
    pub fn is_strict(&self) -> bool {
        self.options.strict
    }

    /// Reads a descriptor from text.
    ///
    /// # Errors
    ///
    /// Returns the first grammar, coercion or tokenizer error met.
    pub fn read_str(&self, input: &str, strict: bool) -> Result<Model> {
        self.read_entity(input, strict)
    }

    /// Reads a descriptor from UTF-8 bytes. A byte order mark is skipped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encoding`] if the bytes are not UTF-8, otherwise as
    /// [`read_str`](Self::read_str).
    pub fn read_slice(&self, input: &[u8], strict: bool) -> Result<Model> {
        let text = decode(input)?;
        debug!(bytes = input.len(), "Decoded descriptor bytes");
        Deserializer::from_str(text, self.options.with_strict(strict))
            .with_default_encoding(DEFAULT_ENCODING)
            .read_root()
    }

    /// Reads a descriptor from a byte stream, consuming it to the end.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the stream fails, otherwise as
    /// [`read_slice`](Self::read_slice).
    pub fn read<R: io::Read>(&self, mut reader: R, strict: bool) -> Result<Model> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        self.read_slice(&bytes, strict)
    }

    /// Reads a byte stream in the reader's own mode, strict unless changed
    /// with [`set_strict`](Self::set_strict).
    ///
    /// # Errors
    ///
    /// As [`read`](Self::read).
    pub fn read_default<R: io::Read>(&self, reader: R) -> Result<Model> {
        self.read(reader, self.options.strict)
    }

    /// Reads any production as the root of a document.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pom_reader::{ModelReader, Plugin};
    ///
    /// let xml = "<plugin><artifactId>maven-jar-plugin</artifactId></plugin>";
    /// let plugin: Plugin = ModelReader::new().read_entity(xml, true).unwrap();
    /// assert_eq!(plugin.artifact_id().map(String::as_str), Some("maven-jar-plugin"));
    /// ```
    ///
    /// # Errors
    ///
    /// As [`read_str`](Self::read_str), with the root checked against
    /// [`Production::TAG`].
    pub fn read_entity<E: Production>(&self, input: &str, strict: bool) -> Result<E> {
        Deserializer::from_str(input, self.options.with_strict(strict)).read_root()
    }
}

fn decode(bytes: &[u8]) -> Result<&str> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    std::str::from_utf8(bytes).map_err(Error::encoding)
}
