use chrono::{NaiveTime, Timelike};

use super::{group_u32, pad_micros};
use crate::constants::ErrorCode;
use crate::error::{ErrorTemplates, TemplateParams, ValidationError};
use crate::format::Format;
use crate::patterns::TIME_REGEX;
use crate::registry::FormatKind;

const ERRORS: ErrorTemplates = &[
    (ErrorCode::Format, "Must be a valid {name} format."),
    (ErrorCode::Invalid, "Must be a real {name}."),
];

/// Time of day without a timezone, `H:M[:S[.ffffff]]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeFormat;

impl Format for TimeFormat {
    type Native = NaiveTime;

    fn kind(&self) -> FormatKind {
        FormatKind::Time
    }

    fn errors(&self) -> ErrorTemplates {
        ERRORS
    }

    fn params(&self) -> TemplateParams {
        TemplateParams::new("time")
    }

    fn validate(&self, value: &str) -> Result<NaiveTime, ValidationError> {
        let caps = TIME_REGEX
            .captures(value)
            .ok_or_else(|| self.validation_error(ErrorCode::Format))?;
        let fields = (
            group_u32(&caps, "hour"),
            group_u32(&caps, "minute"),
            caps.name("second").map_or(Some(0), |_| group_u32(&caps, "second")),
            caps.name("microsecond").map_or(Some(0), |m| pad_micros(m.as_str())),
        );
        let (Some(hour), Some(minute), Some(second), Some(micro)) = fields else {
            return Err(self.validation_error(ErrorCode::Format));
        };
        NaiveTime::from_hms_micro_opt(hour, minute, second, micro)
            .ok_or_else(|| self.validation_error(ErrorCode::Invalid))
    }

    fn serialize(&self, value: Option<&NaiveTime>) -> Option<String> {
        value.map(render_time)
    }
}

/// `HH:MM:SS`, plus `.ffffff` only when the microsecond part is non-zero.
pub fn render_time(time: &NaiveTime) -> String {
    let hms = time.format("%H:%M:%S");
    let micros = (time.nanosecond() % 1_000_000_000) / 1_000;
    if micros == 0 {
        hms.to_string()
    } else {
        format!("{hms}.{micros:06}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_hour_minute_only() {
        let t = TimeFormat.validate("14:30").unwrap();
        assert_eq!((t.hour(), t.minute(), t.second()), (14, 30, 0));
        assert_eq!(t.nanosecond(), 0);
        assert_eq!(TimeFormat.validate("7:5").unwrap(), NaiveTime::from_hms_opt(7, 5, 0).unwrap());
    }

    #[test]
    fn validate_fraction_is_right_padded() {
        let t = TimeFormat.validate("14:30:00.5").unwrap();
        assert_eq!(t.nanosecond() / 1_000, 500_000);
        let t = TimeFormat.validate("14:30:00.000050").unwrap();
        assert_eq!(t.nanosecond() / 1_000, 50);
    }

    #[test]
    fn validate_truncates_beyond_six_digits() {
        let t = TimeFormat.validate("14:30:00.1234569").unwrap();
        assert_eq!(t.nanosecond() / 1_000, 123_456);
        let t = TimeFormat.validate("14:30:00.999999999999").unwrap();
        assert_eq!(t.nanosecond() / 1_000, 999_999);
    }

    #[test]
    fn validate_ignores_trailing_text() {
        let t = TimeFormat.validate("14:30abc").unwrap();
        assert_eq!(t, NaiveTime::from_hms_opt(14, 30, 0).unwrap());
        let t = TimeFormat.validate("14:30:15Z").unwrap();
        assert_eq!(t, NaiveTime::from_hms_opt(14, 30, 15).unwrap());
    }

    #[test]
    fn validate_out_of_range_is_invalid() {
        for input in ["24:00", "12:60", "12:00:60", "99:99"] {
            let err = TimeFormat.validate(input).unwrap_err();
            assert_eq!(err.code(), ErrorCode::Invalid, "{input}");
            assert_eq!(err.text(), "Must be a real time.");
        }
    }

    #[test]
    fn validate_grammar_mismatch_is_format() {
        for input in ["", "1430", "14-30", "T14:30", ":30", "abc"] {
            let err = TimeFormat.validate(input).unwrap_err();
            assert_eq!(err.code(), ErrorCode::Format, "{input:?}");
            assert_eq!(err.text(), "Must be a valid time format.");
        }
    }

    #[test]
    fn serialize_includes_micros_only_when_present() {
        let t = NaiveTime::from_hms_opt(9, 5, 0).unwrap();
        assert_eq!(TimeFormat.serialize(Some(&t)).unwrap(), "09:05:00");
        let t = NaiveTime::from_hms_micro_opt(9, 5, 1, 500_000).unwrap();
        assert_eq!(TimeFormat.serialize(Some(&t)).unwrap(), "09:05:01.500000");
        assert_eq!(TimeFormat.serialize(None), None);
    }
}
