//! Precondition checks with readable failure messages.
//!
//! Each check returns `Ok(())` when its condition holds and an
//! [`IntegrityError`] otherwise. The error's message is built from
//! whatever diagnostic values the caller passed, rendered by type:
//!
//! ```text
//! check!(x == y)?;                                   // "Integrity check failed"
//! check!(x == y, "Oopsies")?;                        // "Oopsies"
//! check!(x == y, "Expected {} to be same as {}", x, y)?; // "Expected 1 to be same as 2"
//! check_not_null!(ptr)?;                             // "Null pointer"
//! check_is_valid_number!(1.1_f32 / 0.0)?;            // "+Infinity"
//! check_string_not_null_or_empty!("")?;              // "Empty string"
//! check_with(x == y, |out| write!(out, "{x} != {y}"))?; // "1 != 2"
//! ```
//!
//! # Message Formatting
//!
//! Values are classified and assembled by `integrity_fmt`; its types are
//! re-exported here. Strings borrowed as `&str` (including literals) are
//! raw text: a leading one is the message itself, later ones appear in
//! back-ticks. Owned `String`s are shown in double quotes, characters in
//! single quotes, numbers and booleans bare.
//!
//! # Logging
//!
//! Every raised [`IntegrityError`] is reported as a `tracing` debug event,
//! as is a message callback that fails. Install a subscriber to see them.

mod checker;
mod checks;
mod error;
mod macros;

pub use checker::{
    Checker, DefaultMessages, DEFAULT_CHECK_FAILED, DEFAULT_EMPTY_STRING, DEFAULT_NULL_POINTER,
};
pub use checks::{
    check, check_is_valid_number, check_is_valid_number_with, check_not_null,
    check_not_null_with, check_string_not_null_or_empty, check_string_not_null_or_empty_with,
    check_with, fail, fail_with, FloatValue, NumberState, Nullable, TextPresence, TextState,
};
pub use error::{CheckKind, IntegrityError};

// Re-export the formatting engine so callers need one dependency.
pub use integrity_fmt::{
    build_from_callback, build_from_values, classify_all, ByteChar, Classify, MessageSink,
    NoValue, TaggedValue, TaggedValues, Utf16Unit, Utf32Str, Utf32Unit, ValueKind, WideStr,
    ERROR_SUFFIX,
};
