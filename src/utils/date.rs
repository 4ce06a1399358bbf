//! Loose date parsing and formatting for frontmatter values.
//!
//! Authors write dates however they like: ISO timestamps, delimited strings
//! such as `2024/03/05 10:30`, epoch milliseconds or TOML datetimes.
//! [`DateInput`] captures those shapes and [`CanonicalDate`] is the validated
//! UTC instant they resolve to.
//!
//! # Resolution rules
//!
//! | Input                          | Interpretation                               |
//! |--------------------------------|----------------------------------------------|
//! | absent, or blank text          | no date (`Ok(None)`, not an error)           |
//! | text containing `T`            | ISO-8601 / RFC 3339, zone-less means UTC     |
//! | other text                     | positional `year month day hour min sec ms`  |
//! | integer                        | milliseconds since the Unix epoch            |
//! | [`CanonicalDate`]              | passed through                               |
//!
//! Positional text is split on `-`, `/`, `:`, `.` and whitespace. Year and
//! month are required, everything after them defaults to the start of the
//! period. Fields are always read year-first, so day-first strings such as
//! `05/03/2024` are rejected or misread rather than guessed at.
//!
//! # Examples
//!
//! ```ignore
//! let input = DateInput::from("2024/03/05");
//! assert_eq!(to_display_string(Some(&input))?.as_deref(), Some("March 5, 2024"));
//! assert_eq!(
//!     to_iso_string(Some(&input))?.as_deref(),
//!     Some("2024-03-05T00:00:00.000Z")
//! );
//! ```

use std::fmt;

use chrono::{
    DateTime, Datelike, NaiveDate, NaiveDateTime, SecondsFormat, SubsecRound, Timelike, Utc,
};
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Zone-less ISO layouts, tried after RFC 3339. Interpreted as UTC.
const NAIVE_ISO_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Positional fields of a delimited date string, in reading order.
const POSITIONAL_FIELDS: usize = 7;

// ============================================================================
// Errors
// ============================================================================

/// Calendar component named in range errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
}

impl fmt::Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
            Self::Millisecond => "millisecond",
        };
        f.write_str(name)
    }
}

/// A date input that cannot be resolved to a real calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidDateError {
    #[error("`{0}` is not a valid ISO-8601 datetime")]
    Iso(String),

    #[error("`{fragment}` in `{input}` is not a number")]
    Fragment { input: String, fragment: String },

    #[error("`{0}` needs at least a year and a month")]
    Incomplete(String),

    #[error("{field} is out of range: {value}")]
    OutOfRange { field: DateField, value: i64 },

    #[error("timestamp is out of range: {0}ms")]
    Timestamp(i64),
}

impl InvalidDateError {
    fn out_of_range(field: DateField, value: impl Into<i64>) -> Self {
        Self::OutOfRange {
            field,
            value: value.into(),
        }
    }
}

// ============================================================================
// CanonicalDate
// ============================================================================

/// A validated UTC instant with millisecond precision.
///
/// Every constructor checks the calendar, so a value of this type is always
/// a real date: month 13 or February 30 fail instead of rolling over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalDate(DateTime<Utc>);

impl CanonicalDate {
    /// Build from calendar components. `month` is 1-based.
    pub fn from_ymd_hms_milli(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
    ) -> Result<Self, InvalidDateError> {
        if !(NaiveDate::MIN.year()..=NaiveDate::MAX.year()).contains(&year) {
            return Err(InvalidDateError::out_of_range(DateField::Year, year));
        }
        if !(1..=12).contains(&month) {
            return Err(InvalidDateError::out_of_range(DateField::Month, month));
        }
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| InvalidDateError::out_of_range(DateField::Day, day))?;

        if hour > 23 {
            return Err(InvalidDateError::out_of_range(DateField::Hour, hour));
        }
        if minute > 59 {
            return Err(InvalidDateError::out_of_range(DateField::Minute, minute));
        }
        if second > 59 {
            return Err(InvalidDateError::out_of_range(DateField::Second, second));
        }
        if millisecond > 999 {
            return Err(InvalidDateError::out_of_range(
                DateField::Millisecond,
                millisecond,
            ));
        }

        date.and_hms_milli_opt(hour, minute, second, millisecond)
            .map(|naive| Self(naive.and_utc()))
            .ok_or_else(|| InvalidDateError::out_of_range(DateField::Second, second))
    }

    /// Build a midnight date. `month` is 1-based.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, InvalidDateError> {
        Self::from_ymd_hms_milli(year, month, day, 0, 0, 0, 0)
    }

    /// Build from milliseconds since the Unix epoch.
    pub fn from_timestamp_millis(millis: i64) -> Result<Self, InvalidDateError> {
        DateTime::from_timestamp_millis(millis)
            .map(Self)
            .ok_or(InvalidDateError::Timestamp(millis))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// 1-based month.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn second(&self) -> u32 {
        self.0.second()
    }

    pub fn millisecond(&self) -> u32 {
        self.0.timestamp_subsec_millis()
    }

    pub fn timestamp_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Format as ISO-8601 with millisecond precision and a `Z` designator.
    ///
    /// Returns: `YYYY-MM-DDTHH:MM:SS.sssZ`
    pub fn to_iso_string(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Format as a long-form en-US date, e.g. `January 5, 2024`.
    pub fn to_display_string(&self) -> String {
        format!(
            "{} {}, {}",
            MONTHS[self.0.month0() as usize],
            self.day(),
            self.year()
        )
    }
}

impl From<DateTime<Utc>> for CanonicalDate {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value.trunc_subsecs(3))
    }
}

impl fmt::Display for CanonicalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso_string())
    }
}

// ============================================================================
// DateInput
// ============================================================================

/// A date as it appears in authored content, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    /// ISO-8601 text or a delimited year-first string.
    Text(String),
    /// Milliseconds since the Unix epoch.
    Timestamp(i64),
    /// An already-resolved date.
    Date(CanonicalDate),
}

impl DateInput {
    /// Blank text carries no date.
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(text) if text.trim().is_empty())
    }

    /// Resolve to a canonical date. Blank text resolves to `None`.
    pub fn resolve(&self) -> Result<Option<CanonicalDate>, InvalidDateError> {
        match self {
            Self::Text(text) if text.trim().is_empty() => Ok(None),
            Self::Text(text) if text.contains('T') => parse_iso(text).map(Some),
            Self::Text(text) => parse_positional(text).map(Some),
            Self::Timestamp(millis) => CanonicalDate::from_timestamp_millis(*millis).map(Some),
            Self::Date(date) => Ok(Some(*date)),
        }
    }
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for DateInput {
    fn from(value: i64) -> Self {
        Self::Timestamp(value)
    }
}

impl From<CanonicalDate> for DateInput {
    fn from(value: CanonicalDate) -> Self {
        Self::Date(value)
    }
}

impl fmt::Display for DateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Timestamp(millis) => write!(f, "{millis}"),
            Self::Date(date) => write!(f, "{date}"),
        }
    }
}

impl Serialize for DateInput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(text) => serializer.serialize_str(text),
            Self::Timestamp(millis) => serializer.serialize_i64(*millis),
            Self::Date(date) => serializer.serialize_str(&date.to_iso_string()),
        }
    }
}

/// Accepts strings, integers, floats and TOML datetimes.
impl<'de> Deserialize<'de> for DateInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DateInputVisitor)
    }
}

struct DateInputVisitor;

impl<'de> Visitor<'de> for DateInputVisitor {
    type Value = DateInput;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a date string, a millisecond timestamp or a TOML datetime")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(DateInput::Text(value.to_owned()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
        Ok(DateInput::Text(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(DateInput::Timestamp(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        i64::try_from(value)
            .map(DateInput::Timestamp)
            .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(value), &self))
    }

    #[allow(clippy::cast_possible_truncation)] // Range checked before the cast
    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        if value.is_finite() && value.abs() < i64::MAX as f64 {
            Ok(DateInput::Timestamp(value.trunc() as i64))
        } else {
            Err(E::invalid_value(de::Unexpected::Float(value), &self))
        }
    }

    // TOML datetimes arrive as a single-entry map holding their text form.
    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        match map.next_entry::<String, String>()? {
            Some((_, text)) => Ok(DateInput::Text(text)),
            None => Err(de::Error::invalid_length(0, &self)),
        }
    }
}

// ============================================================================
// Parsing
// ============================================================================

fn parse_iso(text: &str) -> Result<CanonicalDate, InvalidDateError> {
    let trimmed = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(CanonicalDate::from(dt.with_timezone(&Utc)));
    }

    NAIVE_ISO_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(|naive| CanonicalDate::from(naive.and_utc()))
        .ok_or_else(|| InvalidDateError::Iso(text.to_owned()))
}

#[inline]
fn is_separator(c: char) -> bool {
    matches!(c, '-' | '/' | ':' | '.') || c.is_whitespace()
}

/// Parse `year month [day [hour [minute [second [ms]]]]]` separated by any
/// of `-`, `/`, `:`, `.` or whitespace. Fragments past the seventh are
/// ignored.
fn parse_positional(text: &str) -> Result<CanonicalDate, InvalidDateError> {
    // year, month, day, hour, minute, second, millisecond
    let mut fields: [u32; POSITIONAL_FIELDS] = [0, 0, 1, 0, 0, 0, 0];
    let mut count = 0;

    for fragment in text
        .split(is_separator)
        .filter(|f| !f.is_empty())
        .take(POSITIONAL_FIELDS)
    {
        fields[count] = fragment
            .parse()
            .map_err(|_| InvalidDateError::Fragment {
                input: text.to_owned(),
                fragment: fragment.to_owned(),
            })?;
        count += 1;
    }

    if count < 2 {
        return Err(InvalidDateError::Incomplete(text.to_owned()));
    }

    let [year, month, day, hour, minute, second, millisecond] = fields;
    let year =
        i32::try_from(year).map_err(|_| InvalidDateError::out_of_range(DateField::Year, year))?;

    // Written months are 1-based and so are chrono's: January stays 1.
    CanonicalDate::from_ymd_hms_milli(year, month, day, hour, minute, second, millisecond)
}

// ============================================================================
// Public API
// ============================================================================

/// Resolve an optional date input. Absence is `Ok(None)`.
pub fn parse(input: Option<&DateInput>) -> Result<Option<CanonicalDate>, InvalidDateError> {
    match input {
        Some(input) => input.resolve(),
        None => Ok(None),
    }
}

/// ISO-8601 form of an optional date input, `None` when absent.
pub fn to_iso_string(input: Option<&DateInput>) -> Result<Option<String>, InvalidDateError> {
    Ok(parse(input)?.map(|date| date.to_iso_string()))
}

/// Long-form en-US form (`March 5, 2024`) of an optional date input,
/// `None` when absent.
pub fn to_display_string(input: Option<&DateInput>) -> Result<Option<String>, InvalidDateError> {
    Ok(parse(input)?.map(|date| date.to_display_string()))
}
