use crate::constants::ErrorCode;
use crate::error::{ErrorTemplates, TemplateParams, ValidationError};
use crate::format::Format;
use crate::patterns::EMAIL_REGEX;
use crate::registry::FormatKind;

const ERRORS: ErrorTemplates = &[(ErrorCode::Format, "Must be valid {name} format.")];

/// `local@domain.tld`. The validated text is the native value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmailFormat;

impl Format for EmailFormat {
    type Native = String;

    fn kind(&self) -> FormatKind {
        FormatKind::Email
    }

    fn errors(&self) -> ErrorTemplates {
        ERRORS
    }

    fn params(&self) -> TemplateParams {
        TemplateParams::new("Email")
    }

    fn validate(&self, value: &str) -> Result<String, ValidationError> {
        if EMAIL_REGEX.is_match(value) {
            Ok(value.to_string())
        } else {
            Err(self.validation_error(ErrorCode::Format))
        }
    }

    fn serialize(&self, value: Option<&String>) -> Option<String> {
        value.cloned()
    }
}
