//! Ordered key/value bag for `<properties>`-like elements.
//!
//! This module provides [`Properties`], a wrapper around [`IndexMap`] that
//! keeps keys in document order. Property bags have no declared key set: every
//! direct child element contributes one entry, its tag name being the key and
//! its trimmed text the value.
//!
//! Iteration follows document order, but equality does not: two bags holding
//! the same entries compare equal whatever order they were written in.
//!
//! ## Examples
//!
//! ```rust
//! use pom_reader::Properties;
//!
//! let mut props = Properties::new();
//! props.insert("java.version".to_string(), "17".to_string());
//! props.insert("encoding".to_string(), "UTF-8".to_string());
//!
//! assert_eq!(props.len(), 2);
//! assert_eq!(props.get("encoding"), Some("UTF-8"));
//! ```

use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashMap;

/// An ordered map of property names to values.
///
/// # Examples
///
/// ```rust
/// use pom_reader::Properties;
///
/// let mut props = Properties::new();
/// props.insert("first".to_string(), "1".to_string());
/// props.insert("second".to_string(), "2".to_string());
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = props.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Properties(IndexMap<String, String>);

impl Properties {
    #[must_use]
    pub fn new() -> Self {
        Properties(IndexMap::new())
    }

    /// Inserts a key-value pair into the bag.
    ///
    /// A repeated key replaces the earlier value but keeps its position; the
    /// old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pom_reader::Properties;
    ///
    /// let mut props = Properties::new();
    /// assert!(props.insert("key".to_string(), "a".to_string()).is_none());
    /// assert_eq!(props.insert("key".to_string(), "b".to_string()), Some("a".to_string()));
    /// assert_eq!(props.get("key"), Some("b"));
    /// ```
    pub fn insert(&mut self, key: String, value: String) -> Option<String> {
        self.0.insert(key, value)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys, in document order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, String> {
        self.0.keys()
    }

    /// Returns an iterator over the values, in document order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, String> {
        self.0.values()
    }

    /// Returns an iterator over the entries, in document order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, String> {
        self.0.iter()
    }
}

impl From<HashMap<String, String>> for Properties {
    fn from(map: HashMap<String, String>) -> Self {
        Properties(map.into_iter().collect())
    }
}

impl From<Properties> for HashMap<String, String> {
    fn from(props: Properties) -> Self {
        props.0.into_iter().collect()
    }
}

impl IntoIterator for Properties {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Properties {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, String)> for Properties {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Properties(IndexMap::from_iter(iter))
    }
}
