//! Configuration options for reading descriptors.
//!
//! [`ReaderOptions`] carries the two switches that change how a document is
//! read:
//!
//! - `strict`: unknown elements, unknown attributes, duplicated tags, stray
//!   text and malformed numbers are hard errors. When off, those constructs
//!   are skipped (or defaulted) and reading continues.
//! - `add_default_entities`: named HTML character entities such as `&nbsp;` or
//!   `&copy;` are resolved in addition to the five XML ones.
//!
//! ## Examples
//!
//! ```rust
//! use pom_reader::{from_str_with_options, ReaderOptions};
//!
//! let xml = "<project><groupId>g</groupId><foo/></project>";
//!
//! // The default options are strict and reject `<foo/>`
//! assert!(from_str_with_options(xml, ReaderOptions::default()).is_err());
//!
//! // Lenient reading skips it
//! let model = from_str_with_options(xml, ReaderOptions::lenient()).unwrap();
//! assert_eq!(model.group_id().map(String::as_str), Some("g"));
//! ```

/// Configuration options for reading a descriptor.
///
/// # Examples
///
/// ```rust
/// use pom_reader::ReaderOptions;
///
/// let options = ReaderOptions::new();
/// assert!(options.strict);
/// assert!(options.add_default_entities);
///
/// let options = ReaderOptions::new()
///     .with_strict(false)
///     .with_default_entities(false);
/// assert!(!options.strict);
/// assert!(!options.add_default_entities);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReaderOptions {
    pub strict: bool,
    pub add_default_entities: bool,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        ReaderOptions {
            strict: true,
            add_default_entities: true,
        }
    }
}

impl ReaderOptions {
    /// Creates default options (strict, default entities on).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for lenient reading.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pom_reader::ReaderOptions;
    ///
    /// assert!(!ReaderOptions::lenient().strict);
    /// ```
    #[must_use]
    pub fn lenient() -> Self {
        ReaderOptions {
            strict: false,
            ..Default::default()
        }
    }

    /// Sets the validation mode.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Controls whether named HTML character entities are resolved.
    ///
    /// When disabled, only `&lt;`, `&gt;`, `&amp;`, `&apos;`, `&quot;` and
    /// numeric character references are understood; any other entity is a
    /// tokenizer error.
    #[must_use]
    pub fn with_default_entities(mut self, add_default_entities: bool) -> Self {
        self.add_default_entities = add_default_entities;
        self
    }
}
