//! Format lookup by declared name and dynamic dispatch over the closed set
//! of converters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::constants::ErrorCode;
use crate::error::{FormatError, ValidationError};
use crate::format::Format;
use crate::formats::{
    DateFormat, DateTimeFormat, EmailFormat, TimeFormat, UrlFormat, UuidFormat,
};
use crate::value::NativeValue;

/// Semantic type a schema field declares in its `format` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatKind {
    Date,
    Time,
    #[serde(alias = "date-time")]
    DateTime,
    Uuid,
    Url,
    Email,
}

impl FormatKind {
    pub const ALL: [FormatKind; 6] = [
        Self::Date,
        Self::Time,
        Self::DateTime,
        Self::Uuid,
        Self::Url,
        Self::Email,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Time => "time",
            Self::DateTime => "datetime",
            Self::Uuid => "uuid",
            Self::Url => "url",
            Self::Email => "email",
        }
    }

    pub fn from_name(name: &str) -> Result<Self, FormatError> {
        match name {
            "date" => Ok(Self::Date),
            "time" => Ok(Self::Time),
            "datetime" | "date-time" => Ok(Self::DateTime),
            "uuid" => Ok(Self::Uuid),
            "url" => Ok(Self::Url),
            "email" => Ok(Self::Email),
            other => Err(FormatError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormatKind {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// Any of the built-in converters, operating on [`NativeValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnyFormat {
    Date(DateFormat),
    Time(TimeFormat),
    DateTime(DateTimeFormat),
    Uuid(UuidFormat),
    Url(UrlFormat),
    Email(EmailFormat),
}

impl AnyFormat {
    pub const ALL: [AnyFormat; 6] = [
        Self::Date(DateFormat),
        Self::Time(TimeFormat),
        Self::DateTime(DateTimeFormat),
        Self::Uuid(UuidFormat),
        Self::Url(UrlFormat),
        Self::Email(EmailFormat),
    ];

    pub fn for_kind(kind: FormatKind) -> Self {
        match kind {
            FormatKind::Date => Self::Date(DateFormat),
            FormatKind::Time => Self::Time(TimeFormat),
            FormatKind::DateTime => Self::DateTime(DateTimeFormat),
            FormatKind::Uuid => Self::Uuid(UuidFormat),
            FormatKind::Url => Self::Url(UrlFormat),
            FormatKind::Email => Self::Email(EmailFormat),
        }
    }

    pub fn from_name(name: &str) -> Result<Self, FormatError> {
        FormatKind::from_name(name).map(Self::for_kind)
    }

    pub fn kind(&self) -> FormatKind {
        match self {
            Self::Date(_) => FormatKind::Date,
            Self::Time(_) => FormatKind::Time,
            Self::DateTime(_) => FormatKind::DateTime,
            Self::Uuid(_) => FormatKind::Uuid,
            Self::Url(_) => FormatKind::Url,
            Self::Email(_) => FormatKind::Email,
        }
    }

    pub fn is_native_type(&self, value: &NativeValue) -> bool {
        value.kind() == self.kind()
    }

    pub fn validate(&self, value: &str) -> Result<NativeValue, ValidationError> {
        let result = match self {
            Self::Date(f) => f.validate(value).map(NativeValue::Date),
            Self::Time(f) => f.validate(value).map(NativeValue::Time),
            Self::DateTime(f) => f.validate(value).map(NativeValue::DateTime),
            Self::Uuid(f) => f.validate(value).map(NativeValue::Uuid),
            Self::Url(f) => f.validate(value).map(NativeValue::Url),
            Self::Email(f) => f.validate(value).map(NativeValue::Email),
        };
        match &result {
            Ok(_) => trace!(format = self.kind().name(), "value accepted"),
            Err(err) => debug!(
                format = self.kind().name(),
                code = err.code().name(),
                len = value.len(),
                "value rejected"
            ),
        }
        result
    }

    /// Validate a decoded JSON scalar. `null` passes through as `None`;
    /// non-string values cannot match any grammar and fail with `format`.
    pub fn validate_json(
        &self,
        value: &serde_json::Value,
    ) -> Result<Option<NativeValue>, ValidationError> {
        match value {
            serde_json::Value::Null => Ok(None),
            serde_json::Value::String(s) => self.validate(s).map(Some),
            _ => {
                debug!(format = self.kind().name(), "non-string value rejected");
                Err(self.validation_error(ErrorCode::Format))
            }
        }
    }

    /// Canonical text for `value`; `None` in, `None` out. A value of another
    /// kind is a [`FormatError::NativeTypeMismatch`].
    pub fn serialize(&self, value: Option<&NativeValue>) -> Result<Option<String>, FormatError> {
        let Some(value) = value else {
            return Ok(None);
        };
        let out = match (self, value) {
            (Self::Date(f), NativeValue::Date(v)) => f.serialize(Some(v)),
            (Self::Time(f), NativeValue::Time(v)) => f.serialize(Some(v)),
            (Self::DateTime(f), NativeValue::DateTime(v)) => f.serialize(Some(v)),
            (Self::Uuid(f), NativeValue::Uuid(v)) => f.serialize(Some(v)),
            (Self::Url(f), NativeValue::Url(v)) => f.serialize(Some(v)),
            (Self::Email(f), NativeValue::Email(v)) => f.serialize(Some(v)),
            _ => {
                return Err(FormatError::NativeTypeMismatch {
                    expected: self.kind(),
                    found: value.kind(),
                })
            }
        };
        Ok(out)
    }

    /// Accept either a native value of this kind or text to be parsed.
    pub fn coerce(&self, value: FieldInput<'_>) -> Result<NativeValue, FormatError> {
        match value {
            FieldInput::Native(native) if self.is_native_type(native) => Ok(native.clone()),
            FieldInput::Native(native) => Err(FormatError::NativeTypeMismatch {
                expected: self.kind(),
                found: native.kind(),
            }),
            FieldInput::Text(text) => Ok(self.validate(text)?),
        }
    }

    pub fn validation_error(&self, code: ErrorCode) -> ValidationError {
        match self {
            Self::Date(f) => f.validation_error(code),
            Self::Time(f) => f.validation_error(code),
            Self::DateTime(f) => f.validation_error(code),
            Self::Uuid(f) => f.validation_error(code),
            Self::Url(f) => f.validation_error(code),
            Self::Email(f) => f.validation_error(code),
        }
    }
}

impl From<FormatKind> for AnyFormat {
    fn from(kind: FormatKind) -> Self {
        Self::for_kind(kind)
    }
}

/// What a field layer hands to [`AnyFormat::coerce`].
#[derive(Debug, Clone, Copy)]
pub enum FieldInput<'a> {
    Native(&'a NativeValue),
    Text(&'a str),
}
