//! Checks bound to a set of default messages.

use std::fmt;

use integrity_fmt::{build_from_callback, build_from_values, MessageSink, TaggedValue};

use crate::checks::{FloatValue, NumberState, Nullable, TextPresence, TextState};
use crate::{CheckKind, IntegrityError};

/// Message used by `check` and `fail` when no values are given.
pub const DEFAULT_CHECK_FAILED: &str = "Integrity check failed";
/// Message used by the null checks when no values are given.
pub const DEFAULT_NULL_POINTER: &str = "Null pointer";
/// Message used by the string check for an empty string.
pub const DEFAULT_EMPTY_STRING: &str = "Empty string";

/// Messages a failed check falls back to when given no diagnostic values.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DefaultMessages {
    /// For `check`, `fail`, and every callback form whose callback fails.
    pub check_failed: &'static str,
    /// For a null pointer or a missing string.
    pub null_pointer: &'static str,
    /// For a zero-length string.
    pub empty_string: &'static str,
}

impl DefaultMessages {
    pub const STANDARD: DefaultMessages = DefaultMessages {
        check_failed: DEFAULT_CHECK_FAILED,
        null_pointer: DEFAULT_NULL_POINTER,
        empty_string: DEFAULT_EMPTY_STRING,
    };
}

impl Default for DefaultMessages {
    fn default() -> Self {
        DefaultMessages::STANDARD
    }
}

/// Runs checks against one set of [`DefaultMessages`].
///
/// The free functions in this crate use [`Checker::STANDARD`]. Build your
/// own when a component wants its own wording:
///
/// ```text
/// const CHECKER: Checker = Checker::new(DefaultMessages {
///     check_failed: "config invariant violated",
///     ..DefaultMessages::STANDARD
/// });
/// CHECKER.check(port != 0, &[])?;
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Hash, Default)]
pub struct Checker {
    messages: DefaultMessages,
}

impl Checker {
    pub const STANDARD: Checker = Checker::new(DefaultMessages::STANDARD);

    pub const fn new(messages: DefaultMessages) -> Self {
        Checker { messages }
    }

    pub fn messages(&self) -> &DefaultMessages {
        &self.messages
    }

    fn raise(kind: CheckKind, default_message: &str, values: &[TaggedValue]) -> IntegrityError {
        IntegrityError::new(kind, build_from_values(default_message, values))
    }

    fn raise_with<F>(&self, kind: CheckKind, message: F) -> IntegrityError
    where
        F: FnOnce(&mut MessageSink) -> fmt::Result,
    {
        IntegrityError::new(
            kind,
            build_from_callback(Some(message), self.messages.check_failed),
        )
    }

    pub fn check(&self, condition: bool, values: &[TaggedValue]) -> Result<(), IntegrityError> {
        if condition {
            Ok(())
        } else {
            Err(Self::raise(
                CheckKind::Condition,
                self.messages.check_failed,
                values,
            ))
        }
    }

    pub fn check_with<F>(&self, condition: bool, message: F) -> Result<(), IntegrityError>
    where
        F: FnOnce(&mut MessageSink) -> fmt::Result,
    {
        if condition {
            Ok(())
        } else {
            Err(self.raise_with(CheckKind::Condition, message))
        }
    }

    pub fn fail<T>(&self, values: &[TaggedValue]) -> Result<T, IntegrityError> {
        Err(Self::raise(
            CheckKind::Failure,
            self.messages.check_failed,
            values,
        ))
    }

    pub fn fail_with<T, F>(&self, message: F) -> Result<T, IntegrityError>
    where
        F: FnOnce(&mut MessageSink) -> fmt::Result,
    {
        Err(self.raise_with(CheckKind::Failure, message))
    }

    pub fn check_not_null<P: Nullable + ?Sized>(
        &self,
        pointer: &P,
        values: &[TaggedValue],
    ) -> Result<(), IntegrityError> {
        if pointer.is_null_value() {
            Err(Self::raise(
                CheckKind::NotNull,
                self.messages.null_pointer,
                values,
            ))
        } else {
            Ok(())
        }
    }

    pub fn check_not_null_with<P, F>(&self, pointer: &P, message: F) -> Result<(), IntegrityError>
    where
        P: Nullable + ?Sized,
        F: FnOnce(&mut MessageSink) -> fmt::Result,
    {
        if pointer.is_null_value() {
            Err(self.raise_with(CheckKind::NotNull, message))
        } else {
            Ok(())
        }
    }

    /// Fail if `value` is NaN or infinite.
    ///
    /// The fallback message describes the value itself rather than using
    /// one of the configured defaults.
    pub fn check_is_valid_number<N: FloatValue>(
        &self,
        value: N,
        values: &[TaggedValue],
    ) -> Result<(), IntegrityError> {
        match value.number_state() {
            NumberState::Valid => Ok(()),
            state => Err(Self::raise(
                CheckKind::ValidNumber,
                state.default_message(),
                values,
            )),
        }
    }

    pub fn check_is_valid_number_with<N, F>(
        &self,
        value: N,
        message: F,
    ) -> Result<(), IntegrityError>
    where
        N: FloatValue,
        F: FnOnce(&mut MessageSink) -> fmt::Result,
    {
        match value.number_state() {
            NumberState::Valid => Ok(()),
            _ => Err(self.raise_with(CheckKind::ValidNumber, message)),
        }
    }

    pub fn check_string_not_null_or_empty<S: TextPresence + ?Sized>(
        &self,
        text: &S,
        values: &[TaggedValue],
    ) -> Result<(), IntegrityError> {
        let default_message = match text.text_state() {
            TextState::Present => return Ok(()),
            TextState::Null => self.messages.null_pointer,
            TextState::Empty => self.messages.empty_string,
        };
        Err(Self::raise(
            CheckKind::NonEmptyString,
            default_message,
            values,
        ))
    }

    pub fn check_string_not_null_or_empty_with<S, F>(
        &self,
        text: &S,
        message: F,
    ) -> Result<(), IntegrityError>
    where
        S: TextPresence + ?Sized,
        F: FnOnce(&mut MessageSink) -> fmt::Result,
    {
        match text.text_state() {
            TextState::Present => Ok(()),
            TextState::Null | TextState::Empty => {
                Err(self.raise_with(CheckKind::NonEmptyString, message))
            }
        }
    }
}
