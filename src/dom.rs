//! Free-form configuration trees.
//!
//! Some elements (plugin `<configuration>`, plugin `<goals>`, the legacy
//! `<reports>` block) have no fixed shape. Their content is kept as a [`Dom`]:
//! an order-preserving labelled tree that mirrors the XML without
//! interpreting it.
//!
//! ## Shape
//!
//! - Every node has a name and an ordered set of attributes.
//! - A node with children has no value; mixed text is dropped.
//! - A leaf written as `<a></a>` has the value `""`, a leaf written as `<a/>`
//!   has no value at all.
//! - Text is trimmed unless the element carries `xml:space="preserve"`.
//! - A tree read from a document is at most [`MAX_DEPTH`] levels deep,
//!   counting the free-form element itself. Deeper nesting is an error in
//!   both reading modes.
//!
//! ## Examples
//!
//! ```rust
//! use pom_reader::{dom, Dom};
//!
//! let config = dom!(configuration {
//!     source: "17",
//!     target: "17",
//! });
//!
//! assert_eq!(config.child("source").and_then(Dom::value), Some("17"));
//! assert_eq!(config.child_count(), 2);
//! ```

use crate::identity::{Identity, IdentityFold};
use indexmap::IndexMap;
use quick_xml::escape::escape;
use serde::Serialize;
use std::fmt;

/// Deepest nesting accepted when reading a free-form element.
///
/// Comparing, hashing, printing and dropping a [`Dom`] walk it recursively,
/// so trees built by hand should stay within the same bound.
pub const MAX_DEPTH: usize = 256;

/// One node of a free-form tree.
///
/// # Examples
///
/// ```rust
/// use pom_reader::Dom;
///
/// let node = Dom::new("goal").with_value("compile");
/// assert_eq!(node.name(), "goal");
/// assert_eq!(node.value(), Some("compile"));
/// assert!(node.is_leaf());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize)]
pub struct Dom {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    attributes: IndexMap<String, String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<Dom>,
}

impl Dom {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Dom {
            name: name.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Appends a child. Children keep the order they were added in.
    #[must_use]
    pub fn with_child(mut self, child: Dom) -> Self {
        self.children.push(child);
        self
    }

    pub(crate) fn set_value(&mut self, value: Option<String>) {
        self.value = value;
    }

    pub(crate) fn push_child(&mut self, child: Dom) {
        self.children.push(child);
    }

    pub(crate) fn insert_attribute(&mut self, name: String, value: String) {
        self.attributes.insert(name, value);
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Returns the attributes in document order.
    pub fn attributes(&self) -> indexmap::map::Iter<'_, String, String> {
        self.attributes.iter()
    }

    #[inline]
    #[must_use]
    pub fn children(&self) -> &[Dom] {
        &self.children
    }

    /// Returns the first child with the given name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pom_reader::Dom;
    ///
    /// let node = Dom::new("goals")
    ///     .with_child(Dom::new("goal").with_value("a"))
    ///     .with_child(Dom::new("goal").with_value("b"));
    ///
    /// assert_eq!(node.child("goal").and_then(Dom::value), Some("a"));
    /// assert_eq!(node.children_named("goal").count(), 2);
    /// ```
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Dom> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Dom> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    #[inline]
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    #[inline]
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl Identity for Dom {
    fn identity(&self) -> u32 {
        let attributes = self.attributes.iter().fold(0u32, |acc, (k, v)| {
            acc.wrapping_add(k.identity() ^ v.identity())
        });
        IdentityFold::new()
            .field(&self.name)
            .field(&self.value)
            .combine(attributes)
            .field(&self.children)
            .finish()
    }
}

impl fmt::Display for Dom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.name)?;
        for (name, value) in &self.attributes {
            write!(f, " {}=\"{}\"", name, escape(value.as_str()))?;
        }
        if self.children.is_empty() {
            match &self.value {
                Some(value) => write!(f, ">{}</{}>", escape(value.as_str()), self.name),
                None => write!(f, "/>"),
            }
        } else {
            write!(f, ">")?;
            for child in &self.children {
                write!(f, "{}", child)?;
            }
            write!(f, "</{}>", self.name)
        }
    }
}
