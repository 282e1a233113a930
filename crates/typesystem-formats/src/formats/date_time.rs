use chrono::{FixedOffset, NaiveDateTime, NaiveTime};

use super::time::render_time;
use super::{calendar_date, date::render_date, group_u32, pad_micros};
use crate::constants::ErrorCode;
use crate::error::{ErrorTemplates, TemplateParams, ValidationError};
use crate::format::Format;
use crate::patterns::DATETIME_REGEX;
use crate::registry::FormatKind;
use crate::value::DateTimeValue;

const ERRORS: ErrorTemplates = &[
    (ErrorCode::Format, "Must be a valid {name} format."),
    (ErrorCode::Invalid, "Must be a real {name}."),
];

/// Date and time with an optional `Z` / `±HH[[:]MM]` designator.
///
/// Without a designator the value is timezone-naive. On output a zero
/// offset is always written as `Z`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateTimeFormat;

impl Format for DateTimeFormat {
    type Native = DateTimeValue;

    fn kind(&self) -> FormatKind {
        FormatKind::DateTime
    }

    fn errors(&self) -> ErrorTemplates {
        ERRORS
    }

    fn params(&self) -> TemplateParams {
        TemplateParams::new("datetime")
    }

    fn validate(&self, value: &str) -> Result<DateTimeValue, ValidationError> {
        let caps = DATETIME_REGEX
            .captures(value)
            .ok_or_else(|| self.validation_error(ErrorCode::Format))?;

        let fields = (
            group_u32(&caps, "year"),
            group_u32(&caps, "month"),
            group_u32(&caps, "day"),
            group_u32(&caps, "hour"),
            group_u32(&caps, "minute"),
            caps.name("second").map_or(Some(0), |_| group_u32(&caps, "second")),
            caps.name("microsecond").map_or(Some(0), |m| pad_micros(m.as_str())),
        );
        let (
            Some(year),
            Some(month),
            Some(day),
            Some(hour),
            Some(minute),
            Some(second),
            Some(micro),
        ) = fields
        else {
            return Err(self.validation_error(ErrorCode::Format));
        };

        let offset = match caps.name("tzinfo") {
            Some(tz) => Some(
                parse_offset(tz.as_str())
                    .ok_or_else(|| self.validation_error(ErrorCode::Invalid))?,
            ),
            None => None,
        };

        let date = calendar_date(year, month, day);
        let time = NaiveTime::from_hms_micro_opt(hour, minute, second, micro);
        let (Some(date), Some(time)) = (date, time) else {
            return Err(self.validation_error(ErrorCode::Invalid));
        };
        let naive = NaiveDateTime::new(date, time);

        match offset {
            None => Ok(DateTimeValue::Naive(naive)),
            Some(offset) => naive
                .and_local_timezone(offset)
                .single()
                .map(DateTimeValue::Fixed)
                .ok_or_else(|| self.validation_error(ErrorCode::Invalid)),
        }
    }

    fn serialize(&self, value: Option<&DateTimeValue>) -> Option<String> {
        value.map(render_date_time)
    }
}

/// `Z`, `±HH`, `±HHMM` or `±HH:MM`. `None` when the offset is a day or more.
fn parse_offset(designator: &str) -> Option<FixedOffset> {
    if designator == "Z" {
        return FixedOffset::east_opt(0);
    }
    let hours: i32 = designator.get(1..3)?.parse().ok()?;
    let minutes: i32 = if designator.len() > 3 {
        designator.get(designator.len() - 2..)?.parse().ok()?
    } else {
        0
    };
    let seconds = hours * 3600 + minutes * 60;
    if designator.starts_with('-') {
        FixedOffset::west_opt(seconds)
    } else {
        FixedOffset::east_opt(seconds)
    }
}

/// ISO 8601 `YYYY-MM-DDTHH:MM:SS[.ffffff][±HH:MM]`, with `+00:00` written as `Z`.
pub fn render_date_time(value: &DateTimeValue) -> String {
    let naive = value.naive_local();
    let mut out = format!("{}T{}", render_date(&naive.date()), render_time(&naive.time()));
    if let Some(offset) = value.offset() {
        out.push_str(&offset.to_string());
    }
    if let Some(head) = out.strip_suffix("+00:00") {
        out = format!("{head}Z");
    }
    out
}
