//! The converter capability shared by every format.

use crate::constants::ErrorCode;
use crate::error::{build_error, ErrorTemplates, TemplateParams, ValidationError};
use crate::registry::FormatKind;
use crate::value::NativeValue;

/// A stateless converter between a textual representation and one native
/// value type.
///
/// Implementations hold no state, so one instance can serve every value of
/// its kind from any number of threads.
pub trait Format: Send + Sync {
    /// Strongly-typed result of a successful [`Format::validate`].
    type Native;

    fn kind(&self) -> FormatKind;

    /// Constant `code -> template` table for the codes this format raises.
    fn errors(&self) -> ErrorTemplates;

    /// Parameters substituted into [`Format::errors`] templates.
    fn params(&self) -> TemplateParams;

    /// `true` when `value` already holds this format's native type.
    fn is_native_type(&self, value: &NativeValue) -> bool {
        value.kind() == self.kind()
    }

    /// Parse `value` into the native type.
    fn validate(&self, value: &str) -> Result<Self::Native, ValidationError>;

    /// Canonical text for `value`; `None` in, `None` out.
    fn serialize(&self, value: Option<&Self::Native>) -> Option<String>;

    fn validation_error(&self, code: ErrorCode) -> ValidationError {
        build_error(self.errors(), &self.params(), code)
    }
}
