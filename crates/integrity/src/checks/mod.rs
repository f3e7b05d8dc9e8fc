//! The check functions, using the standard default messages.
//!
//! Every family has a value-list form, taking diagnostic values already
//! classified, and a `_with` form taking a formatting callback that only
//! runs if the check fails. See [`Checker`] for the same operations with
//! custom default messages.
//!
//! The traits here describe what each family accepts: [`Nullable`] for
//! pointers, [`FloatValue`] for numbers that can be NaN or infinite, and
//! [`TextPresence`] for strings that can be missing or empty.

use std::borrow::Cow;
use std::ffi::{CStr, CString, OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};

use integrity_fmt::{MessageSink, TaggedValue, Utf32Str, WideStr};

use crate::{Checker, IntegrityError};

// -- Pointers --

/// Something that can be null.
pub trait Nullable {
    fn is_null_value(&self) -> bool;
}

impl<T: ?Sized> Nullable for *const T {
    fn is_null_value(&self) -> bool {
        self.is_null()
    }
}

impl<T: ?Sized> Nullable for *mut T {
    fn is_null_value(&self) -> bool {
        self.is_null()
    }
}

impl<T> Nullable for Option<T> {
    fn is_null_value(&self) -> bool {
        self.is_none()
    }
}

// -- Numbers --

/// Whether a float holds a usable number.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NumberState {
    Valid,
    NaN,
    PositiveInfinity,
    NegativeInfinity,
}

impl NumberState {
    /// The message a failed number check uses when given no values.
    pub fn default_message(self) -> &'static str {
        match self {
            NumberState::NaN => "NaN",
            NumberState::PositiveInfinity => "+Infinity",
            NumberState::NegativeInfinity => "-Infinity",
            NumberState::Valid => "Error: expected invalid float",
        }
    }
}

/// A floating-point type that can be checked for NaN and infinities.
pub trait FloatValue: Copy {
    fn number_state(self) -> NumberState;
}

macro_rules! impl_float_value {
    ($($ty:ty),*) => {
        $(
            impl FloatValue for $ty {
                fn number_state(self) -> NumberState {
                    if self.is_nan() {
                        NumberState::NaN
                    } else if self.is_infinite() {
                        if self.is_sign_positive() {
                            NumberState::PositiveInfinity
                        } else {
                            NumberState::NegativeInfinity
                        }
                    } else {
                        NumberState::Valid
                    }
                }
            }
        )*
    };
}

impl_float_value!(f32, f64);

// -- Strings --

/// Whether a string is missing, empty, or has content.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TextState {
    Null,
    Empty,
    Present,
}

impl TextState {
    fn from_len(len: usize) -> Self {
        if len == 0 {
            TextState::Empty
        } else {
            TextState::Present
        }
    }
}

/// A string that may be missing or empty.
///
/// Only an exact length of zero counts as empty; whitespace is content.
pub trait TextPresence {
    fn text_state(&self) -> TextState;
}

macro_rules! impl_text_presence_by_len {
    ($($ty:ty),*) => {
        $(
            impl TextPresence for $ty {
                fn text_state(&self) -> TextState {
                    TextState::from_len(self.len())
                }
            }
        )*
    };
}

impl_text_presence_by_len!(str, String, OsStr, OsString);

impl TextPresence for Cow<'_, str> {
    fn text_state(&self) -> TextState {
        TextState::from_len(self.len())
    }
}

impl TextPresence for CStr {
    fn text_state(&self) -> TextState {
        TextState::from_len(self.to_bytes().len())
    }
}

impl TextPresence for CString {
    fn text_state(&self) -> TextState {
        self.as_c_str().text_state()
    }
}

impl TextPresence for Path {
    fn text_state(&self) -> TextState {
        self.as_os_str().text_state()
    }
}

impl TextPresence for PathBuf {
    fn text_state(&self) -> TextState {
        self.as_os_str().text_state()
    }
}

impl TextPresence for WideStr<'_> {
    fn text_state(&self) -> TextState {
        TextState::from_len(self.0.len())
    }
}

impl TextPresence for Utf32Str<'_> {
    fn text_state(&self) -> TextState {
        TextState::from_len(self.0.len())
    }
}

impl<T: TextPresence> TextPresence for Option<T> {
    fn text_state(&self) -> TextState {
        self.as_ref().map_or(TextState::Null, TextPresence::text_state)
    }
}

impl<T: TextPresence + ?Sized> TextPresence for &T {
    fn text_state(&self) -> TextState {
        (**self).text_state()
    }
}

impl<T: TextPresence + ?Sized> TextPresence for Box<T> {
    fn text_state(&self) -> TextState {
        (**self).text_state()
    }
}

// -- Free functions --

/// Fail with the assembled message if `condition` is false.
pub fn check(condition: bool, values: &[TaggedValue]) -> Result<(), IntegrityError> {
    Checker::STANDARD.check(condition, values)
}

/// Fail with the callback's message if `condition` is false.
pub fn check_with<F>(condition: bool, message: F) -> Result<(), IntegrityError>
where
    F: FnOnce(&mut MessageSink) -> fmt::Result,
{
    Checker::STANDARD.check_with(condition, message)
}

/// Fail unconditionally with the assembled message.
pub fn fail<T>(values: &[TaggedValue]) -> Result<T, IntegrityError> {
    Checker::STANDARD.fail(values)
}

/// Fail unconditionally with the callback's message.
pub fn fail_with<T, F>(message: F) -> Result<T, IntegrityError>
where
    F: FnOnce(&mut MessageSink) -> fmt::Result,
{
    Checker::STANDARD.fail_with(message)
}

/// Fail if `pointer` is null (or `None`).
pub fn check_not_null<P: Nullable + ?Sized>(
    pointer: &P,
    values: &[TaggedValue],
) -> Result<(), IntegrityError> {
    Checker::STANDARD.check_not_null(pointer, values)
}

pub fn check_not_null_with<P, F>(pointer: &P, message: F) -> Result<(), IntegrityError>
where
    P: Nullable + ?Sized,
    F: FnOnce(&mut MessageSink) -> fmt::Result,
{
    Checker::STANDARD.check_not_null_with(pointer, message)
}

/// Fail if `value` is NaN or infinite.
///
/// With no values the message names the problem: `NaN`, `+Infinity` or
/// `-Infinity`.
pub fn check_is_valid_number<N: FloatValue>(
    value: N,
    values: &[TaggedValue],
) -> Result<(), IntegrityError> {
    Checker::STANDARD.check_is_valid_number(value, values)
}

pub fn check_is_valid_number_with<N, F>(value: N, message: F) -> Result<(), IntegrityError>
where
    N: FloatValue,
    F: FnOnce(&mut MessageSink) -> fmt::Result,
{
    Checker::STANDARD.check_is_valid_number_with(value, message)
}

/// Fail if `text` is missing or has zero length.
pub fn check_string_not_null_or_empty<S: TextPresence + ?Sized>(
    text: &S,
    values: &[TaggedValue],
) -> Result<(), IntegrityError> {
    Checker::STANDARD.check_string_not_null_or_empty(text, values)
}

pub fn check_string_not_null_or_empty_with<S, F>(
    text: &S,
    message: F,
) -> Result<(), IntegrityError>
where
    S: TextPresence + ?Sized,
    F: FnOnce(&mut MessageSink) -> fmt::Result,
{
    Checker::STANDARD.check_string_not_null_or_empty_with(text, message)
}
