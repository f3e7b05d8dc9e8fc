//! Value classification: one [`TaggedValue`] per diagnostic argument.
//!
//! [`Classify`] is implemented once per supported type, so the rendering
//! rule is picked at compile time from the argument's static type. Types
//! without an implementation (raw pointers, arbitrary structs) are rejected
//! at the call site rather than rendered in some guessed form.

use std::borrow::Cow;
use std::ffi::{CStr, CString, OsStr, OsString};
use std::fmt;
use std::mem::size_of;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Arc;

use smallvec::SmallVec;

/// How a classified value is displayed in a message.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ValueKind {
    /// Rendered as `True` / `False`.
    Boolean,
    /// An owned or normalized string, rendered between double quotes.
    Text,
    /// A borrowed raw string, rendered between back-ticks.
    ///
    /// In first position it is rendered bare: it is almost always the
    /// message (or message template) itself.
    RawText,
    /// Any integer or float, rendered as its decimal form.
    Number,
    /// A single code unit, rendered between single quotes.
    Character,
    /// No argument at this position. Renders nothing.
    Absent,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Boolean => write!(f, "boolean"),
            ValueKind::Text => write!(f, "text"),
            ValueKind::RawText => write!(f, "raw text"),
            ValueKind::Number => write!(f, "number"),
            ValueKind::Character => write!(f, "character"),
            ValueKind::Absent => write!(f, "absent"),
        }
    }
}

/// A diagnostic value after classification.
///
/// `text` is already in canonical form (`True`, `1.1`, `0x0BCD`, ...); the
/// kind decides the quoting applied around it when it is displayed.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TaggedValue {
    pub kind: ValueKind,
    pub text: String,
}

/// Ordered diagnostic values for one failed check.
///
/// Checks rarely carry more than four arguments, which stay inline.
pub type TaggedValues = SmallVec<[TaggedValue; 4]>;

impl TaggedValue {
    /// Create a tagged value from an already-canonical text.
    pub fn new(kind: ValueKind, text: impl Into<String>) -> Self {
        TaggedValue {
            kind,
            text: text.into(),
        }
    }

    /// The "no argument supplied" placeholder.
    pub fn absent() -> Self {
        TaggedValue {
            kind: ValueKind::Absent,
            text: String::new(),
        }
    }

    /// Check if this value is the "no argument" placeholder.
    pub fn is_absent(&self) -> bool {
        self.kind == ValueKind::Absent
    }

    /// The text wrapped in the markup implied by its kind.
    pub fn display_form(&self) -> Cow<'_, str> {
        match self.kind {
            ValueKind::Boolean | ValueKind::Number => Cow::Borrowed(&self.text),
            ValueKind::Character => Cow::Owned(format!("'{}'", self.text)),
            ValueKind::Text => Cow::Owned(format!("\"{}\"", self.text)),
            ValueKind::RawText => Cow::Owned(format!("`{}`", self.text)),
            ValueKind::Absent => Cow::Borrowed(""),
        }
    }
}

impl fmt::Display for TaggedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_form())
    }
}

/// Conversion of a diagnostic argument into a [`TaggedValue`].
///
/// Classification never fails for an implementing type.
///
/// The method is not called `classify` so it cannot be shadowed by the
/// inherent `f32::classify` / `f64::classify`, which return `FpCategory`.
pub trait Classify {
    fn to_tagged_value(&self) -> TaggedValue;
}

/// Classify a run-time sequence of values, for when the argument count is
/// not known at the call site.
pub fn classify_all<I>(values: I) -> TaggedValues
where
    I: IntoIterator,
    I::Item: Classify,
{
    values.into_iter().map(|value| value.to_tagged_value()).collect()
}

/// The "no argument" sentinel; classifies as [`ValueKind::Absent`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct NoValue;

impl Classify for NoValue {
    fn to_tagged_value(&self) -> TaggedValue {
        TaggedValue::absent()
    }
}

impl Classify for TaggedValue {
    fn to_tagged_value(&self) -> TaggedValue {
        self.clone()
    }
}

impl Classify for bool {
    fn to_tagged_value(&self) -> TaggedValue {
        TaggedValue::new(ValueKind::Boolean, if *self { "True" } else { "False" })
    }
}

// -- Characters --

/// A single-byte character.
///
/// `u8` on its own classifies as a number; wrap it to display it as a
/// character instead.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ByteChar(pub u8);

/// A 2-byte (UTF-16) code unit.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Utf16Unit(pub u16);

/// A 4-byte code unit. Unlike `char`, any `u32` is accepted.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Utf32Unit(pub u32);

/// `0x` followed by `value` in uppercase hex, zero-padded to `width` digits.
fn hex_literal(value: u32, width: usize) -> String {
    format!("0x{value:0width$X}")
}

/// Render a code unit `unit_size` bytes wide.
///
/// Values that fit in one byte are shown as that character; wider values
/// as a hex literal with two digits per byte of the code unit.
fn code_unit_text(value: u32, unit_size: usize) -> String {
    match u8::try_from(value) {
        Ok(byte) => char::from(byte).to_string(),
        Err(_) => hex_literal(value, 2 * unit_size),
    }
}

impl Classify for ByteChar {
    fn to_tagged_value(&self) -> TaggedValue {
        let ByteChar(byte) = *self;
        let text = if byte.is_ascii_graphic() || byte == b' ' {
            char::from(byte).to_string()
        } else {
            hex_literal(u32::from(byte), 2 * size_of::<u8>())
        };
        TaggedValue::new(ValueKind::Character, text)
    }
}

impl Classify for Utf16Unit {
    fn to_tagged_value(&self) -> TaggedValue {
        TaggedValue::new(
            ValueKind::Character,
            code_unit_text(u32::from(self.0), size_of::<u16>()),
        )
    }
}

impl Classify for Utf32Unit {
    fn to_tagged_value(&self) -> TaggedValue {
        TaggedValue::new(ValueKind::Character, code_unit_text(self.0, size_of::<u32>()))
    }
}

impl Classify for char {
    fn to_tagged_value(&self) -> TaggedValue {
        TaggedValue::new(
            ValueKind::Character,
            code_unit_text(u32::from(*self), size_of::<char>()),
        )
    }
}

// -- Numbers --

macro_rules! classify_as_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Classify for $ty {
                fn to_tagged_value(&self) -> TaggedValue {
                    TaggedValue::new(ValueKind::Number, self.to_string())
                }
            }
        )*
    };
}

classify_as_number!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

// -- Strings --

/// A wide string of UTF-16 code units.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct WideStr<'a>(pub &'a [u16]);

/// A wide string of 4-byte code units.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Utf32Str<'a>(pub &'a [u32]);

impl Classify for str {
    fn to_tagged_value(&self) -> TaggedValue {
        TaggedValue::new(ValueKind::RawText, self)
    }
}

impl Classify for String {
    fn to_tagged_value(&self) -> TaggedValue {
        TaggedValue::new(ValueKind::Text, self.as_str())
    }
}

impl Classify for Cow<'_, str> {
    fn to_tagged_value(&self) -> TaggedValue {
        TaggedValue::new(ValueKind::Text, &**self)
    }
}

impl Classify for CStr {
    fn to_tagged_value(&self) -> TaggedValue {
        TaggedValue::new(ValueKind::RawText, self.to_string_lossy())
    }
}

impl Classify for CString {
    fn to_tagged_value(&self) -> TaggedValue {
        self.as_c_str().to_tagged_value()
    }
}

impl Classify for OsStr {
    fn to_tagged_value(&self) -> TaggedValue {
        TaggedValue::new(ValueKind::Text, self.to_string_lossy())
    }
}

impl Classify for OsString {
    fn to_tagged_value(&self) -> TaggedValue {
        self.as_os_str().to_tagged_value()
    }
}

impl Classify for Path {
    fn to_tagged_value(&self) -> TaggedValue {
        self.as_os_str().to_tagged_value()
    }
}

impl Classify for PathBuf {
    fn to_tagged_value(&self) -> TaggedValue {
        self.as_os_str().to_tagged_value()
    }
}

impl Classify for WideStr<'_> {
    fn to_tagged_value(&self) -> TaggedValue {
        TaggedValue::new(ValueKind::Text, String::from_utf16_lossy(self.0))
    }
}

impl Classify for Utf32Str<'_> {
    fn to_tagged_value(&self) -> TaggedValue {
        let text: String = self
            .0
            .iter()
            .map(|&unit| char::from_u32(unit).unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect();
        TaggedValue::new(ValueKind::Text, text)
    }
}

// -- Indirection --

impl<T: Classify + ?Sized> Classify for &T {
    fn to_tagged_value(&self) -> TaggedValue {
        (**self).to_tagged_value()
    }
}

impl<T: Classify + ?Sized> Classify for &mut T {
    fn to_tagged_value(&self) -> TaggedValue {
        (**self).to_tagged_value()
    }
}

impl<T: Classify + ?Sized> Classify for Box<T> {
    fn to_tagged_value(&self) -> TaggedValue {
        (**self).to_tagged_value()
    }
}

impl<T: Classify + ?Sized> Classify for Rc<T> {
    fn to_tagged_value(&self) -> TaggedValue {
        (**self).to_tagged_value()
    }
}

impl<T: Classify + ?Sized> Classify for Arc<T> {
    fn to_tagged_value(&self) -> TaggedValue {
        (**self).to_tagged_value()
    }
}
