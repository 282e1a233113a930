//! Converters between wire strings and native values for schema field
//! formats: calendar date, time of day, timestamp, UUID, URL and email.
//!
//! Each converter is a stateless unit struct implementing [`Format`]:
//!
//! - `is_native_type` tells whether a value needs parsing at all,
//! - `validate` parses text or fails with a [`ValidationError`] whose code is
//!   `format` (grammar mismatch) or `invalid` (impossible value),
//! - `serialize` renders the canonical text.
//!
//! [`AnyFormat`] selects a converter by its declared name and works on the
//! closed [`NativeValue`] enum.
//!
//! ```
//! use typesystem_formats::{AnyFormat, ErrorCode};
//!
//! let format = AnyFormat::from_name("datetime").unwrap();
//! let value = format.validate("2021-06-01T12:00:00+00:00").unwrap();
//! assert_eq!(
//!     format.serialize(Some(&value)).unwrap().as_deref(),
//!     Some("2021-06-01T12:00:00Z")
//! );
//!
//! let err = AnyFormat::from_name("date").unwrap().validate("2021-02-30").unwrap_err();
//! assert_eq!(err.code(), ErrorCode::Invalid);
//! ```

pub mod constants;
pub mod error;
pub mod format;
pub mod formats;
pub mod patterns;
pub mod registry;
pub mod value;

pub use constants::ErrorCode;
pub use error::{FormatError, TemplateParams, ValidationError};
pub use format::Format;
pub use formats::{DateFormat, DateTimeFormat, EmailFormat, TimeFormat, UrlFormat, UuidFormat};
pub use registry::{AnyFormat, FieldInput, FormatKind};
pub use value::{DateTimeValue, NativeValue};
