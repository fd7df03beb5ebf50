//! Scalar coercion of trimmed element text.
//!
//! A [`Coercion`] describes where a value was read (field name and position)
//! and which mode the read runs in. Its methods turn text into typed values:
//!
//! | Kind | Absent text | Malformed text, strict | Malformed text, lenient |
//! |------|-------------|------------------------|-------------------------|
//! | boolean | caller default | `false` | `false` |
//! | integers, floats | `0` | error | `0` |
//! | character | `'\0'` | n/a | n/a |
//! | date | unset | error | error |
//!
//! ## Examples
//!
//! ```rust
//! use pom_reader::coerce::Coercion;
//!
//! let strict = Coercion::new("timeout", 3, 14, true);
//! assert_eq!(strict.int(Some("30")).unwrap(), 30);
//! assert!(strict.int(Some("soon")).is_err());
//!
//! let lenient = Coercion::new("timeout", 3, 14, false);
//! assert_eq!(lenient.int(Some("soon")).unwrap(), 0);
//! ```

use crate::{Error, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use std::str::FromStr;

/// Date pattern used when a field does not name its own.
pub const DEFAULT_DATE_PATTERN: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// Format name selecting epoch milliseconds instead of a pattern.
pub const EPOCH_MILLIS_FORMAT: &str = "long";

/// How a date field is written in the document.
///
/// # Examples
///
/// ```rust
/// use pom_reader::coerce::{DateFormat, DEFAULT_DATE_PATTERN};
///
/// assert_eq!(DateFormat::from_name(Some("long")), DateFormat::EpochMillis);
/// assert_eq!(DateFormat::from_name(None), DateFormat::Pattern(DEFAULT_DATE_PATTERN));
/// assert_eq!(DateFormat::from_name(Some("%Y")), DateFormat::Pattern("%Y"));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateFormat<'a> {
    EpochMillis,
    /// A `strftime` pattern, interpreted in UTC.
    Pattern(&'a str),
}

impl<'a> DateFormat<'a> {
    #[must_use]
    pub fn from_name(name: Option<&'a str>) -> Self {
        match name {
            None => DateFormat::Pattern(DEFAULT_DATE_PATTERN),
            Some(EPOCH_MILLIS_FORMAT) => DateFormat::EpochMillis,
            Some(pattern) => DateFormat::Pattern(pattern),
        }
    }
}

impl Default for DateFormat<'_> {
    fn default() -> Self {
        DateFormat::Pattern(DEFAULT_DATE_PATTERN)
    }
}

/// Coerces the text of one field.
#[derive(Clone, Copy, Debug)]
pub struct Coercion<'a> {
    field: &'a str,
    line: usize,
    col: usize,
    strict: bool,
}

impl<'a> Coercion<'a> {
    #[must_use]
    pub fn new(field: &'a str, line: usize, col: usize, strict: bool) -> Self {
        Coercion {
            field,
            line,
            col,
            strict,
        }
    }

    /// Reads a boolean. Only `true` (in any case) is true; blank text yields
    /// `default`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pom_reader::coerce::Coercion;
    ///
    /// let c = Coercion::new("enabled", 1, 1, true);
    /// assert!(c.boolean("TRUE", false));
    /// assert!(!c.boolean("yes", true));
    /// assert!(c.boolean("", true));
    /// ```
    #[must_use]
    pub fn boolean(&self, text: &str, default: bool) -> bool {
        if text.is_empty() {
            default
        } else {
            text.eq_ignore_ascii_case("true")
        }
    }

    pub fn byte(&self, text: Option<&str>) -> Result<i8> {
        self.number(text, "a byte")
    }

    pub fn short(&self, text: Option<&str>) -> Result<i16> {
        self.number(text, "a short integer")
    }

    pub fn int(&self, text: Option<&str>) -> Result<i32> {
        self.number(text, "an integer")
    }

    pub fn long(&self, text: Option<&str>) -> Result<i64> {
        self.number(text, "a long integer")
    }

    pub fn float(&self, text: Option<&str>) -> Result<f32> {
        self.number(text, "a floating point number")
    }

    pub fn double(&self, text: Option<&str>) -> Result<f64> {
        self.number(text, "a floating point number")
    }

    fn number<T: FromStr + Default>(&self, text: Option<&str>, expected: &str) -> Result<T> {
        let Some(text) = text else {
            return Ok(T::default());
        };
        match text.parse::<T>() {
            Ok(value) => Ok(value),
            Err(_) if self.strict => Err(Error::invalid_value(
                self.line, self.col, self.field, expected, text,
            )),
            Err(_) => Ok(T::default()),
        }
    }

    /// Reads the first character, or `'\0'` when there is none.
    #[must_use]
    pub fn character(&self, text: Option<&str>) -> char {
        text.and_then(|s| s.chars().next()).unwrap_or('\0')
    }

    /// Reads a date. Malformed dates fail in both modes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pom_reader::coerce::{Coercion, DateFormat};
    ///
    /// let c = Coercion::new("released", 1, 1, false);
    /// let date = c.date(Some("2024-03-01T12:30:00.250"), DateFormat::default()).unwrap();
    /// assert_eq!(date.unwrap().timestamp_millis(), 1_709_296_200_250);
    ///
    /// let millis = c.date(Some("0"), DateFormat::EpochMillis).unwrap();
    /// assert_eq!(millis.unwrap().timestamp_millis(), 0);
    ///
    /// assert!(c.date(Some("yesterday"), DateFormat::default()).is_err());
    /// assert_eq!(c.date(None, DateFormat::default()).unwrap(), None);
    /// ```
    pub fn date(&self, text: Option<&str>, format: DateFormat<'_>) -> Result<Option<DateTime<Utc>>> {
        let Some(text) = text else {
            return Ok(None);
        };
        match format {
            DateFormat::EpochMillis => {
                let millis = text
                    .parse::<i64>()
                    .map_err(|e| Error::invalid_date(self.line, self.col, self.field, e))?;
                Utc.timestamp_millis_opt(millis)
                    .single()
                    .map(Some)
                    .ok_or_else(|| {
                        Error::invalid_date(self.line, self.col, self.field, "timestamp out of range")
                    })
            }
            DateFormat::Pattern(pattern) => {
                let naive = match NaiveDateTime::parse_from_str(text, pattern) {
                    Ok(naive) => naive,
                    // Patterns without a time part
                    Err(err) => NaiveDate::parse_from_str(text, pattern)
                        .ok()
                        .and_then(|date| date.and_hms_opt(0, 0, 0))
                        .ok_or_else(|| Error::invalid_date(self.line, self.col, self.field, err))?,
                };
                Ok(Some(Utc.from_utc_datetime(&naive)))
            }
        }
    }
}
