//! Message formatting engine for integrity checks.
//!
//! A failing check hands its diagnostic arguments to this crate and gets back
//! one flat string to carry in its error. Two pieces cooperate:
//!
//! - **Classifier** ([`Classify`]): turns a value of a supported type into a
//!   [`TaggedValue`], a kind plus canonical text. The implementation is chosen
//!   by the argument's static type, so unsupported types fail to compile.
//! - **Assembler** ([`build_from_values`], [`build_from_callback`]): joins the
//!   tagged values into the final message, filling `{}` placeholders left to
//!   right and comma-appending whatever is left over.
//!
//! ```text
//! let values = [
//!     "Expected {} to be same as {}".to_tagged_value(),
//!     1_i32.to_tagged_value(),
//!     2_i32.to_tagged_value(),
//! ];
//! assert_eq!(
//!     build_from_values("Integrity check failed", &values),
//!     "Expected 1 to be same as 2",
//! );
//! ```
//!
//! # Quoting
//!
//! Each kind implies its own markup so the reader can tell `"1"` (a string)
//! from `1` (a number) in the final message:
//!
//! | kind | example |
//! |------|---------|
//! | Boolean | `True` |
//! | Number | `1.1` |
//! | Character | `'c'` |
//! | Text | `"abc"` |
//! | `RawText` | `` `abc` `` (unquoted in first position) |

mod assemble;
mod value;

pub use assemble::{build_from_callback, build_from_values, MessageSink, ERROR_SUFFIX};
pub use value::{
    classify_all, ByteChar, Classify, NoValue, TaggedValue, TaggedValues, Utf16Unit, Utf32Str,
    Utf32Unit, ValueKind, WideStr,
};
