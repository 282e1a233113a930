//! Concrete converters.

mod date;
mod date_time;
mod email;
mod time;
mod url;
mod uuid;

pub use date::{render_date, DateFormat};
pub use date_time::{render_date_time, DateTimeFormat};
pub use email::EmailFormat;
pub use self::time::{render_time, TimeFormat};
pub use self::url::UrlFormat;
pub use self::uuid::UuidFormat;

use chrono::NaiveDate;
use regex::Captures;

/// Earliest representable year; `0000` is not a calendar year here.
const MIN_YEAR: u32 = 1;

/// Integer value of a named capture group that participated in the match.
fn group_u32(caps: &Captures<'_>, name: &str) -> Option<u32> {
    caps.name(name).and_then(|m| m.as_str().parse().ok())
}

/// Calendar date for four-digit `year`, `None` for impossible combinations.
fn calendar_date(year: u32, month: u32, day: u32) -> Option<NaiveDate> {
    if year < MIN_YEAR {
        return None;
    }
    // Four digits always fit in an i32.
    NaiveDate::from_ymd_opt(year as i32, month, day)
}

/// Microseconds from 1-6 fractional digits, right-padded with zeros:
/// `"5"` is 500000, not 5.
fn pad_micros(digits: &str) -> Option<u32> {
    format!("{digits:0<6}").parse().ok()
}
