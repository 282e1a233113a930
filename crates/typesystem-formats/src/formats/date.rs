use chrono::NaiveDate;

use super::{calendar_date, group_u32};
use crate::constants::ErrorCode;
use crate::error::{ErrorTemplates, TemplateParams, ValidationError};
use crate::format::Format;
use crate::patterns::DATE_REGEX;
use crate::registry::FormatKind;

const ERRORS: ErrorTemplates = &[
    (ErrorCode::Format, "Must be a valid {name} format."),
    (ErrorCode::Invalid, "Must be a real {name}."),
];

/// Calendar date, `YYYY-M-D` in and `YYYY-MM-DD` out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateFormat;

impl Format for DateFormat {
    type Native = NaiveDate;

    fn kind(&self) -> FormatKind {
        FormatKind::Date
    }

    fn errors(&self) -> ErrorTemplates {
        ERRORS
    }

    fn params(&self) -> TemplateParams {
        TemplateParams::new("date")
    }

    fn validate(&self, value: &str) -> Result<NaiveDate, ValidationError> {
        let caps = DATE_REGEX
            .captures(value)
            .ok_or_else(|| self.validation_error(ErrorCode::Format))?;
        let (Some(year), Some(month), Some(day)) = (
            group_u32(&caps, "year"),
            group_u32(&caps, "month"),
            group_u32(&caps, "day"),
        ) else {
            return Err(self.validation_error(ErrorCode::Format));
        };
        calendar_date(year, month, day).ok_or_else(|| self.validation_error(ErrorCode::Invalid))
    }

    fn serialize(&self, value: Option<&NaiveDate>) -> Option<String> {
        value.map(render_date)
    }
}

/// ISO 8601 calendar date, zero padded.
pub fn render_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
