//! Content-derived identity values.
//!
//! Every entity computes its identity once, when its builder freezes it, by
//! folding the contributions of its fields in a fixed order:
//!
//! ```text
//! acc = 0
//! for each field: acc = acc * 31 + contribution(field)
//! ```
//!
//! An unset field contributes `0`. The arithmetic wraps, so the value is a
//! `u32` that depends only on field contents: two entities with equal fields
//! always carry equal identities. The converse does not hold, which is why
//! entity equality compares fields and never identities.

use crate::Properties;

const MULTIPLIER: u32 = 31;

/// A value that can contribute to an entity's identity.
///
/// # Examples
///
/// ```rust
/// use pom_reader::Identity;
///
/// assert_eq!("".identity(), 0);
/// assert_eq!(None::<String>.identity(), 0);
/// assert_eq!("ab".identity(), 'a' as u32 * 31 + 'b' as u32);
/// ```
pub trait Identity {
    fn identity(&self) -> u32;
}

/// Accumulates field contributions in declaration order.
///
/// # Examples
///
/// ```rust
/// use pom_reader::{Identity, IdentityFold};
///
/// let a = IdentityFold::new().field("g").field(&Some("a".to_string())).finish();
/// let b = IdentityFold::new().field("g").field(&Some("a".to_string())).finish();
/// assert_eq!(a, b);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityFold(u32);

impl IdentityFold {
    #[must_use]
    pub const fn new() -> Self {
        IdentityFold(0)
    }

    /// Folds in the next field's contribution.
    #[must_use]
    pub fn field<T: Identity + ?Sized>(self, value: &T) -> Self {
        self.combine(value.identity())
    }

    #[must_use]
    pub fn combine(self, contribution: u32) -> Self {
        IdentityFold(self.0.wrapping_mul(MULTIPLIER).wrapping_add(contribution))
    }

    #[must_use]
    pub const fn finish(self) -> u32 {
        self.0
    }
}

impl Identity for str {
    fn identity(&self) -> u32 {
        self.chars()
            .fold(0u32, |acc, c| acc.wrapping_mul(MULTIPLIER).wrapping_add(c as u32))
    }
}

impl Identity for String {
    fn identity(&self) -> u32 {
        self.as_str().identity()
    }
}

impl Identity for bool {
    fn identity(&self) -> u32 {
        if *self {
            1231
        } else {
            1237
        }
    }
}

impl<T: Identity> Identity for Option<T> {
    fn identity(&self) -> u32 {
        self.as_ref().map_or(0, Identity::identity)
    }
}

// Lists start from 1 so that an empty list differs from an unset one.
impl<T: Identity> Identity for [T] {
    fn identity(&self) -> u32 {
        self.iter()
            .fold(IdentityFold(1), |fold, item| fold.field(item))
            .finish()
    }
}

impl<T: Identity> Identity for Vec<T> {
    fn identity(&self) -> u32 {
        self.as_slice().identity()
    }
}

// Order-insensitive, matching `Properties` equality.
impl Identity for Properties {
    fn identity(&self) -> u32 {
        self.iter().fold(0u32, |acc, (k, v)| {
            acc.wrapping_add(k.identity() ^ v.identity())
        })
    }
}

impl<T: Identity + ?Sized> Identity for &T {
    fn identity(&self) -> u32 {
        (**self).identity()
    }
}
