//! Lexical grammars shared by the converters.
//!
//! Group names are load-bearing: the numeric parsing in each converter reads
//! optional groups by name and relies on which of them participated.

use once_cell::sync::Lazy;
use regex::Regex;

/// Top-level domains accepted by [`URL_REGEX`].
pub const TOP_DOMAINS: &[&str] = &[
    "com", "org", "net", "us", "co", "int", "mil", "edu", "gov", "biz", "info", "jobs", "mobi",
    "name", "ly", "tel", "kitchen", "email", "tech", "estate", "xyz", "codes", "bargains", "bid",
    "expert", "ca", "cn", "fr", "ch", "au", "in", "de", "jp", "nl", "uk", "mx", "no", "ru", "br",
    "se", "es",
];

const DATE_PART: &str = r"(?P<year>[0-9]{4})-(?P<month>[0-9]{1,2})-(?P<day>[0-9]{1,2})";

// Up to six fractional digits are kept, six more are consumed and dropped.
const TIME_PART: &str = concat!(
    r"(?P<hour>[0-9]{1,2}):(?P<minute>[0-9]{1,2})",
    r"(?::(?P<second>[0-9]{1,2})(?:\.(?P<microsecond>[0-9]{1,6})[0-9]{0,6})?)?"
);

const TZ_PART: &str = r"(?P<tzinfo>Z|[+-][0-9]{2}(?::?[0-9]{2})?)?";

pub static DATE_REGEX: Lazy<Regex> = Lazy::new(|| compile(&format!("^{DATE_PART}$")));

/// Anchored at the start only; trailing text after the time is ignored.
pub static TIME_REGEX: Lazy<Regex> = Lazy::new(|| compile(&format!("^{TIME_PART}")));

pub static DATETIME_REGEX: Lazy<Regex> =
    Lazy::new(|| compile(&format!("^{DATE_PART}[T ]{TIME_PART}{TZ_PART}$")));

pub static UUID_REGEX: Lazy<Regex> = Lazy::new(|| {
    compile(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[1-5][0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$")
});

/// Unanchored: a match anywhere in the input is enough.
pub static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    let tlds = TOP_DOMAINS.join("|");
    compile(&format!(r"\b(https?://)?([^:\s]+)(\.\w+)*\.({tlds})(/[\w\-.]+[^#?\s]+)*/?\b"))
});

pub static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| compile(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9.-]+$"));

fn compile(pattern: &str) -> Regex {
    // Patterns are built from the constants above and covered by tests.
    Regex::new(pattern).expect("format grammar must compile")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_grammars_compile() {
        for re in [
            &*DATE_REGEX,
            &*TIME_REGEX,
            &*DATETIME_REGEX,
            &*UUID_REGEX,
            &*URL_REGEX,
            &*EMAIL_REGEX,
        ] {
            assert!(!re.as_str().is_empty());
        }
    }

    #[test]
    fn time_grammar_captures_optional_groups() {
        let caps = TIME_REGEX.captures("7:05").unwrap();
        assert_eq!(&caps["hour"], "7");
        assert_eq!(&caps["minute"], "05");
        assert!(caps.name("second").is_none());
        assert!(caps.name("microsecond").is_none());

        let caps = TIME_REGEX.captures("07:05:09.123456789").unwrap();
        assert_eq!(&caps["second"], "09");
        assert_eq!(&caps["microsecond"], "123456");
    }

    #[test]
    fn datetime_grammar_timezone_designators() {
        for (input, tz) in [
            ("2021-06-01T12:00Z", Some("Z")),
            ("2021-06-01 12:00:00+05", Some("+05")),
            ("2021-06-01T12:00:00-0530", Some("-0530")),
            ("2021-06-01T12:00:00.5+05:30", Some("+05:30")),
            ("2021-06-01T12:00:00", None),
        ] {
            let caps = DATETIME_REGEX.captures(input).unwrap();
            assert_eq!(caps.name("tzinfo").map(|m| m.as_str()), tz, "{input}");
        }
        assert!(!DATETIME_REGEX.is_match("2021-06-01T12:00:00+5"));
        assert!(!DATETIME_REGEX.is_match("2021-06-01X12:00:00"));
        assert!(!DATETIME_REGEX.is_match("2021-06-01T12:00:00.1234567890123"));
    }

    #[test]
    fn digits_are_ascii_only() {
        assert!(!DATE_REGEX.is_match("２０２１-01-01"));
        assert!(!TIME_REGEX.is_match("١٢:30"));
    }

    #[test]
    fn url_grammar_finds_substrings() {
        assert!(URL_REGEX.is_match("example.com"));
        assert!(URL_REGEX.is_match("see https://www.example.co.uk/docs/index.html now"));
        assert!(!URL_REGEX.is_match("example.invalidtld"));
        assert!(!URL_REGEX.is_match("not a url!!"));
    }

    #[test]
    fn email_grammar_is_anchored() {
        assert!(EMAIL_REGEX.is_match("first.last+tag@mail-host.example.org"));
        assert!(!EMAIL_REGEX.is_match(" a@b.com"));
        assert!(!EMAIL_REGEX.is_match("a@b"));
    }
}
