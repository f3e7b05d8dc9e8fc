//! The error returned by every failed check.

use std::fmt;

/// Which family of check raised an [`IntegrityError`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CheckKind {
    /// `check` / `check_with`: a boolean condition was false.
    Condition,
    /// `fail` / `fail_with`: unconditional failure.
    Failure,
    /// `check_not_null`: a null pointer or `None`.
    NotNull,
    /// `check_is_valid_number`: NaN or an infinity.
    ValidNumber,
    /// `check_string_not_null_or_empty`: a missing or zero-length string.
    NonEmptyString,
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckKind::Condition => write!(f, "condition"),
            CheckKind::Failure => write!(f, "failure"),
            CheckKind::NotNull => write!(f, "not null"),
            CheckKind::ValidNumber => write!(f, "valid number"),
            CheckKind::NonEmptyString => write!(f, "non-empty string"),
        }
    }
}

/// A failed integrity check.
///
/// Displays as the assembled message and nothing else, so it can be shown
/// to a user or compared in a test verbatim.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
#[error("{message}")]
pub struct IntegrityError {
    kind: CheckKind,
    message: String,
}

impl IntegrityError {
    pub(crate) fn new(kind: CheckKind, message: String) -> Self {
        tracing::debug!(%kind, %message, "integrity check failed");
        IntegrityError { kind, message }
    }

    pub fn kind(&self) -> CheckKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_message(self) -> String {
        self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_message_only() {
        let err = IntegrityError::new(CheckKind::NotNull, "Null pointer".to_owned());
        assert_eq!(err.to_string(), "Null pointer");
    }

    #[test]
    fn test_accessors() {
        let err = IntegrityError::new(CheckKind::ValidNumber, "NaN".to_owned());
        assert_eq!(err.kind(), CheckKind::ValidNumber);
        assert_eq!(err.message(), "NaN");
        assert_eq!(err.into_message(), "NaN");
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&IntegrityError::new(CheckKind::Failure, String::new()));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(CheckKind::NonEmptyString.to_string(), "non-empty string");
        assert_eq!(CheckKind::Condition.to_string(), "condition");
    }
}
