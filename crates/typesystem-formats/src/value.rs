//! Native values produced by the converters.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Serialize, Serializer};

use crate::formats::{render_date, render_date_time, render_time};
use crate::registry::FormatKind;

/// A timestamp that is either timezone-naive or carries a fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateTimeValue {
    Naive(NaiveDateTime),
    Fixed(DateTime<FixedOffset>),
}

impl DateTimeValue {
    pub fn offset(&self) -> Option<FixedOffset> {
        match self {
            Self::Naive(_) => None,
            Self::Fixed(dt) => Some(*dt.offset()),
        }
    }

    pub fn naive_local(&self) -> NaiveDateTime {
        match self {
            Self::Naive(naive) => *naive,
            Self::Fixed(dt) => dt.naive_local(),
        }
    }

    pub fn is_utc(&self) -> bool {
        self.offset().is_some_and(|o| o.local_minus_utc() == 0)
    }
}

impl From<NaiveDateTime> for DateTimeValue {
    fn from(value: NaiveDateTime) -> Self {
        Self::Naive(value)
    }
}

impl From<DateTime<FixedOffset>> for DateTimeValue {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self::Fixed(value)
    }
}

/// Result of a successful parse, one variant per [`FormatKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NativeValue {
    Date(NaiveDate),
    Time(NaiveTime),
    DateTime(DateTimeValue),
    Uuid(::uuid::Uuid),
    Url(::url::Url),
    Email(String),
}

impl NativeValue {
    pub fn kind(&self) -> FormatKind {
        match self {
            Self::Date(_) => FormatKind::Date,
            Self::Time(_) => FormatKind::Time,
            Self::DateTime(_) => FormatKind::DateTime,
            Self::Uuid(_) => FormatKind::Uuid,
            Self::Url(_) => FormatKind::Url,
            Self::Email(_) => FormatKind::Email,
        }
    }

    /// Canonical text, identical to what the matching format serializes.
    pub fn canonical(&self) -> String {
        match self {
            Self::Date(date) => render_date(date),
            Self::Time(time) => render_time(time),
            Self::DateTime(value) => render_date_time(value),
            Self::Uuid(uuid) => uuid.hyphenated().to_string(),
            Self::Url(url) => url.as_str().to_string(),
            Self::Email(email) => email.clone(),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::String(self.canonical())
    }
}

impl fmt::Display for NativeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

impl Serialize for NativeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.canonical())
    }
}
