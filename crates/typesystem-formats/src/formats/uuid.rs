use ::uuid::Uuid;

use crate::constants::ErrorCode;
use crate::error::{ErrorTemplates, TemplateParams, ValidationError};
use crate::format::Format;
use crate::patterns::UUID_REGEX;
use crate::registry::FormatKind;

const ERRORS: ErrorTemplates = &[(ErrorCode::Format, "Must be valid {name} format.")];

/// Hyphenated 8-4-4-4-12 identifier with version 1-5 and an RFC variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UuidFormat;

impl Format for UuidFormat {
    type Native = Uuid;

    fn kind(&self) -> FormatKind {
        FormatKind::Uuid
    }

    fn errors(&self) -> ErrorTemplates {
        ERRORS
    }

    fn params(&self) -> TemplateParams {
        TemplateParams::new("UUID")
    }

    fn validate(&self, value: &str) -> Result<Uuid, ValidationError> {
        if !UUID_REGEX.is_match(value) {
            return Err(self.validation_error(ErrorCode::Format));
        }
        Uuid::parse_str(value).map_err(|_| self.validation_error(ErrorCode::Format))
    }

    fn serialize(&self, value: Option<&Uuid>) -> Option<String> {
        value.map(|uuid| uuid.hyphenated().to_string())
    }
}
