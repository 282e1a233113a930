use ::url::Url;

use crate::constants::ErrorCode;
use crate::error::{ErrorTemplates, TemplateParams, ValidationError};
use crate::format::Format;
use crate::patterns::URL_REGEX;
use crate::registry::FormatKind;

const ERRORS: ErrorTemplates = &[(ErrorCode::Format, "Must be valid {name} format.")];

/// Web address with a known top-level domain; the scheme is optional on
/// input and defaults to `http`.
///
/// The grammar is a search, not a full match: text around a recognisable
/// address does not cause a rejection by itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UrlFormat;

impl Format for UrlFormat {
    type Native = Url;

    fn kind(&self) -> FormatKind {
        FormatKind::Url
    }

    fn errors(&self) -> ErrorTemplates {
        ERRORS
    }

    fn params(&self) -> TemplateParams {
        TemplateParams::new("URL")
    }

    fn validate(&self, value: &str) -> Result<Url, ValidationError> {
        let Some(found) = URL_REGEX.find(value) else {
            return Err(self.validation_error(ErrorCode::Format));
        };
        // Text around the match may not survive structural parsing; the
        // matched span alone is the fallback.
        parse_with_scheme(value)
            .or_else(|_| parse_with_scheme(found.as_str()))
            .map_err(|_| self.validation_error(ErrorCode::Format))
    }

    fn serialize(&self, value: Option<&Url>) -> Option<String> {
        value.map(|url| url.as_str().to_string())
    }
}

fn parse_with_scheme(value: &str) -> Result<Url, ::url::ParseError> {
    if has_http_scheme(value) {
        Url::parse(value)
    } else {
        Url::parse(&format!("http://{value}"))
    }
}

fn has_http_scheme(value: &str) -> bool {
    let head = value.get(..8).unwrap_or(value).to_ascii_lowercase();
    head.starts_with("http://") || head.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_bare_host_adds_scheme() {
        let url = UrlFormat.validate("example.com").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_str(), Some("example.com"));
        let out = UrlFormat.serialize(Some(&url)).unwrap();
        assert!(out.starts_with("http://"));
        assert_eq!(out, "http://example.com/");
    }

    #[test]
    fn validate_keeps_explicit_scheme_and_path() {
        let url = UrlFormat
            .validate("https://docs.example.org/guide/intro.html")
            .unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("docs.example.org"));
        assert_eq!(url.path(), "/guide/intro.html");
        assert_eq!(
            UrlFormat.serialize(Some(&url)).unwrap(),
            "https://docs.example.org/guide/intro.html"
        );
    }

    #[test]
    fn validate_subdomains_and_country_tlds() {
        let url = UrlFormat.validate("www.bbc.co.uk/news").unwrap();
        assert_eq!(url.host_str(), Some("www.bbc.co.uk"));
        assert_eq!(url.path(), "/news");
    }

    #[test]
    fn validate_scheme_check_is_case_insensitive() {
        let url = UrlFormat.validate("HTTP://Example.com").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_str(), Some("example.com"));
    }

    #[test]
    fn validate_rejects_without_known_tld() {
        for input in ["not a url!!", "localhost", "example.invalidtld", "", "http://"] {
            let err = UrlFormat.validate(input).unwrap_err();
            assert_eq!(err.code(), ErrorCode::Format, "{input:?}");
            assert_eq!(err.text(), "Must be valid URL format.");
        }
    }

    #[test]
    fn validate_tolerates_text_around_the_match() {
        for input in ["example.com today", "see example.com", "visit example.com today"] {
            let url = UrlFormat.validate(input).unwrap();
            assert_eq!(url.host_str(), Some("example.com"), "{input}");
            assert_eq!(UrlFormat.serialize(Some(&url)).unwrap(), "http://example.com/");
        }
        let url = UrlFormat.validate("see https://example.org/docs now").unwrap();
        assert_eq!(url.as_str(), "https://example.org/docs");
    }

    #[test]
    fn validate_rejects_when_matched_span_does_not_parse() {
        let err = UrlFormat.validate("ex<ample.com").unwrap_err();
        assert_eq!(err.code(), ErrorCode::Format);
    }

    #[test]
    fn has_http_scheme_matches_prefix_only() {
        assert!(has_http_scheme("http://a.com"));
        assert!(has_http_scheme("HTTPS://a.com"));
        assert!(!has_http_scheme("httpbin.org"));
        assert!(!has_http_scheme("ftp://a.com"));
        assert!(!has_http_scheme("é"));
    }

    #[test]
    fn serialize_none() {
        assert_eq!(UrlFormat.serialize(None), None);
    }
}
