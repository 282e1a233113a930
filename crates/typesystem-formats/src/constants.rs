use std::fmt;

use serde::{Serialize, Serializer};

/// Validation error codes raised by format converters.
///
/// ATTENTION: Only add new error codes at the end of the list !!!
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Input does not match the lexical grammar.
    Format = 0,
    /// Input matches the grammar but names a value that cannot exist.
    Invalid = 1,
}

impl ErrorCode {
    pub fn name(self) -> &'static str {
        match self {
            Self::Format => "format",
            Self::Invalid => "invalid",
        }
    }

    /// Generic text, used when a converter has no template for the code.
    pub fn message(self) -> &'static str {
        match self {
            Self::Format => "Invalid format.",
            Self::Invalid => "Invalid value.",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
