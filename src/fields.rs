//! Field tables and the duplicate-tag guard.
//!
//! Each entity declares its child elements once, as a table of
//! [`FieldDef`]s generated by `field_table!`. The table maps a per-entity
//! field enum to the element's canonical name and an optional legacy alias;
//! parsers look a child's tag up in the table and match the resulting enum,
//! so a field missing from a parser's `match` is a compile error.

use crate::model::{InputLocation, Locations};

/// One child element of an entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDef<F> {
    pub field: F,
    pub name: &'static str,
    pub alias: Option<&'static str>,
}

impl<F: Copy> FieldDef<F> {
    #[inline]
    pub fn matches(&self, tag: &str) -> bool {
        self.name == tag || self.alias == Some(tag)
    }
}

/// Finds the field a tag belongs to, accepting either spelling.
pub fn lookup<F: Copy>(table: &'static [FieldDef<F>], tag: &str) -> Option<&'static FieldDef<F>> {
    table.iter().find(|entry| entry.matches(tag))
}

/// Declares a field enum together with its lookup table.
///
/// ```ignore
/// field_table! {
///     pub enum OrganizationField in ORGANIZATION {
///         Name = "name",
///         Url = "url",
///     }
/// }
/// ```
///
/// `Variant = "name" | "alias"` declares a legacy alias.
macro_rules! field_table {
    (@alias) => { None };
    (@alias $alias:literal) => { Some($alias) };

    (
        $(#[$meta:meta])*
        $vis:vis enum $field:ident in $table:ident {
            $($variant:ident = $name:literal $(| $alias:literal)?),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        $vis enum $field {
            $($variant),*
        }

        $vis const $table: &[$crate::fields::FieldDef<$field>] = &[
            $(
                $crate::fields::FieldDef {
                    field: $field::$variant,
                    name: $name,
                    alias: field_table!(@alias $($alias)?),
                },
            )*
        ];
    };
}

pub(crate) use field_table;

/// Tracks the fields already consumed under one parent.
///
/// Fields are keyed by canonical name, so an alias and its canonical spelling
/// count as the same field. The first accepted occurrence of each field also
/// records where it started.
#[derive(Debug, Default)]
pub(crate) struct FieldGuard {
    seen: Locations,
}

impl FieldGuard {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the field was already consumed.
    pub(crate) fn accept(&mut self, name: &'static str, location: InputLocation) -> bool {
        if self.seen.contains_key(name) {
            return false;
        }
        self.seen.insert(name, location);
        true
    }

    pub(crate) fn into_locations(self) -> Locations {
        self.seen
    }
}
