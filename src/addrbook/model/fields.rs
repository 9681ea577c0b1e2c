//! Validated scalar values stored on a [`Record`](super::Record).
//!
//! Every field is checked once, when it is built. After that the value can be
//! passed around freely: a `Phone` in hand is always ten digits.

use crate::error::{AddrError, FieldKind, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Textual format used for birthdays, both for input and for display.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

const PHONE_LEN: usize = 10;

/// Shared contract of the validated field types.
pub trait Field: Sized + fmt::Display {
    const KIND: FieldKind;

    /// Validates `raw` and builds the field.
    fn parse(raw: &str) -> Result<Self>;
}

fn invalid<F: Field>(reason: &'static str) -> AddrError {
    AddrError::InvalidFormat {
        field: F::KIND,
        reason,
    }
}

// Fields travel as plain strings (CLI arguments, JSON documents), so each one
// gets the same string conversions. Deserializing goes through `parse` and
// therefore revalidates whatever was on disk.
macro_rules! text_field {
    ($ty:ident) => {
        impl FromStr for $ty {
            type Err = AddrError;

            fn from_str(s: &str) -> Result<Self> {
                <$ty as Field>::parse(s)
            }
        }

        impl TryFrom<String> for $ty {
            type Error = AddrError;

            fn try_from(value: String) -> Result<Self> {
                <$ty as Field>::parse(&value)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.to_string()
            }
        }
    };
}

/// A contact's name. Never empty, never padded with whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Field for Name {
    const KIND: FieldKind = FieldKind::Name;

    fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(invalid::<Self>("Name must not be empty."));
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

text_field!(Name);

/// A phone number: exactly ten ASCII digits, stored as typed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Field for Phone {
    const KIND: FieldKind = FieldKind::Phone;

    fn parse(raw: &str) -> Result<Self> {
        if raw.len() != PHONE_LEN || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid::<Self>("Phone must be 10 digits."));
        }
        Ok(Self(raw.to_string()))
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

text_field!(Phone);

/// A naive calendar date written as `DD.MM.YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The date this birthday falls on in `year`.
    ///
    /// A Feb 29 birthday is observed on Feb 28 in non-leap years. Returns
    /// `None` only when `year` is outside the range chrono can represent.
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
    }
}

impl Field for Birthday {
    const KIND: FieldKind = FieldKind::Birthday;

    fn parse(raw: &str) -> Result<Self> {
        // chrono happily accepts "5.6.1990" or "+1990"; insist on the fixed shape first.
        let shaped = raw.len() == 10
            && raw.bytes().enumerate().all(|(i, b)| match i {
                2 | 5 => b == b'.',
                _ => b.is_ascii_digit(),
            });
        if !shaped {
            return Err(invalid::<Self>("Use DD.MM.YYYY"));
        }
        NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map(Self)
            .map_err(|_| invalid::<Self>("Use DD.MM.YYYY"))
    }
}

impl From<NaiveDate> for Birthday {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

text_field!(Birthday);
