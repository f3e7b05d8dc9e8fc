//! Message assembly from tagged values or a formatting callback.
//!
//! Assembly never fails: whatever the input, the caller gets a message back.
//! A check that has already failed must not fail a second time while
//! describing itself.

use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::value::{TaggedValue, ValueKind};

/// Appended to the default message when a message callback fails.
pub const ERROR_SUFFIX: &str = ": [error]";

/// Positional placeholder filled by the next value.
const PLACEHOLDER: &str = "{}";

/// Separator between appended values.
const SEPARATOR: &str = ", ";

/// Build a message from classified values.
///
/// Each non-absent value either fills the first `{}` left in the message
/// or, when none is left, is appended after a comma in its display form.
/// A [`ValueKind::RawText`] value opening an empty message is used as-is:
/// it is the message (or template) itself, not a value to quote.
///
/// Returns `default_message` when no value other than
/// [`ValueKind::Absent`] was supplied.
pub fn build_from_values(default_message: &str, values: &[TaggedValue]) -> String {
    let mut message = String::new();
    let mut any_value = false;

    for value in values.iter().filter(|value| !value.is_absent()) {
        any_value = true;

        if let Some(at) = message.find(PLACEHOLDER) {
            // Text only; quoting was for values shown on their own.
            message.replace_range(at..at + PLACEHOLDER.len(), &value.text);
            continue;
        }

        if message.is_empty() {
            if value.kind == ValueKind::RawText {
                message.push_str(&value.text);
            } else {
                message.push_str(&value.display_form());
            }
        } else {
            message.push_str(SEPARATOR);
            message.push_str(&value.display_form());
        }
    }

    if any_value {
        message
    } else {
        default_message.to_owned()
    }
}

/// Text buffer handed to a message callback.
///
/// Write to it with [`write!`]; the callback's `fmt::Result` is what tells
/// the assembler whether formatting succeeded.
#[derive(Default, Debug)]
pub struct MessageSink {
    buf: String,
}

impl MessageSink {
    pub fn new() -> Self {
        MessageSink::default()
    }

    /// Text written so far.
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

impl fmt::Write for MessageSink {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buf.push_str(s);
        Ok(())
    }
}

/// Build a message by running a formatting callback.
///
/// - No callback: `default_message`.
/// - The callback returns `Ok`: whatever it wrote.
/// - The callback returns `Err` or panics: `default_message` followed by
///   [`ERROR_SUFFIX`]. The panic does not propagate.
pub fn build_from_callback<F>(callback: Option<F>, default_message: &str) -> String
where
    F: FnOnce(&mut MessageSink) -> fmt::Result,
{
    let Some(callback) = callback else {
        return default_message.to_owned();
    };

    let outcome = catch_unwind(AssertUnwindSafe(|| {
        let mut sink = MessageSink::new();
        callback(&mut sink).map(|()| sink.into_string())
    }));

    match outcome {
        Ok(Ok(message)) => message,
        Ok(Err(fmt::Error)) => {
            tracing::debug!("message callback returned an error");
            format!("{default_message}{ERROR_SUFFIX}")
        }
        Err(payload) => {
            let reason = payload
                .downcast_ref::<&str>()
                .copied()
                .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
                .unwrap_or("<non-string panic payload>");
            tracing::debug!(reason, "message callback panicked");
            format!("{default_message}{ERROR_SUFFIX}")
        }
    }
}

#[cfg(test)]
mod tests;
