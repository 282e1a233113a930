//! Validation errors and per-converter message templates.

use serde::Serialize;
use thiserror::Error;

use crate::constants::ErrorCode;
use crate::registry::FormatKind;

/// A single rejected value: human-readable text plus a machine-readable code.
///
/// The caller attaches any field path or document position.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
#[error("{text}")]
pub struct ValidationError {
    text: String,
    code: ErrorCode,
}

impl ValidationError {
    pub fn new(text: impl Into<String>, code: ErrorCode) -> Self {
        Self {
            text: text.into(),
            code,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }
}

/// Constant `code -> template` table declared by each converter.
pub type ErrorTemplates = &'static [(ErrorCode, &'static str)];

/// Values substituted into `{placeholder}` slots of an error template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateParams {
    /// Display name of the converter, e.g. `date` or `UUID`.
    pub name: &'static str,
}

impl TemplateParams {
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    fn get(&self, key: &str) -> Option<&'static str> {
        match key {
            "name" => Some(self.name),
            _ => None,
        }
    }
}

/// Fill `{key}` placeholders from `params`. Unknown keys are kept verbatim.
pub fn render_template(template: &str, params: &TemplateParams) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        let Some(close) = tail.find('}') else {
            break;
        };
        match params.get(&tail[1..close]) {
            Some(value) => out.push_str(value),
            None => out.push_str(&tail[..=close]),
        }
        rest = &tail[close + 1..];
    }
    if let Some(open) = rest.find('{') {
        out.push_str(&rest[open..]);
    } else {
        out.push_str(rest);
    }
    out
}

/// Look up `code` in `templates` and render it; falls back to the generic
/// text of the code.
pub fn build_error(
    templates: ErrorTemplates,
    params: &TemplateParams,
    code: ErrorCode,
) -> ValidationError {
    let text = templates
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, template)| render_template(template, params))
        .unwrap_or_else(|| code.message().to_string());
    ValidationError::new(text, code)
}

/// Errors at the dynamic dispatch boundary ([`crate::AnyFormat`]).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("expected a native {expected} value, got {found}")]
    NativeTypeMismatch {
        expected: FormatKind,
        found: FormatKind,
    },
    #[error("unknown format: {0}")]
    UnknownFormat(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
