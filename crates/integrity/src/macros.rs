//! Variadic front-ends for the check functions.
//!
//! Each macro takes any number of trailing diagnostic values. The values
//! are classified only when the check fails, so passing them costs nothing
//! on the success path.
//!
//! ```text
//! check!(x == y, "Expected {} to be same as {}", x, y)?;
//! check_is_valid_number!(ratio, "ratio for {}", name)?;
//! ```

/// Classify each argument in order into a `[TaggedValue; N]`.
#[macro_export]
macro_rules! tagged_values {
    ($($value:expr),* $(,)?) => {
        [$($crate::Classify::to_tagged_value(&$value)),*]
    };
}

/// `Err` with the assembled message if the condition is false.
#[macro_export]
macro_rules! check {
    ($condition:expr $(, $value:expr)* $(,)?) => {
        if $condition {
            ::core::result::Result::Ok(())
        } else {
            $crate::check(false, &$crate::tagged_values![$($value),*])
        }
    };
}

/// Always `Err` with the assembled message.
#[macro_export]
macro_rules! fail {
    ($($value:expr),* $(,)?) => {
        $crate::fail(&$crate::tagged_values![$($value),*])
    };
}

/// `Err` if the pointer is null or `None`.
#[macro_export]
macro_rules! check_not_null {
    ($pointer:expr $(, $value:expr)* $(,)?) => {{
        let pointer = &$pointer;
        if $crate::Nullable::is_null_value(pointer) {
            $crate::check_not_null(pointer, &$crate::tagged_values![$($value),*])
        } else {
            ::core::result::Result::Ok(())
        }
    }};
}

/// `Err` if the float is NaN or infinite.
#[macro_export]
macro_rules! check_is_valid_number {
    ($number:expr $(, $value:expr)* $(,)?) => {{
        let number = $number;
        match $crate::FloatValue::number_state(number) {
            $crate::NumberState::Valid => ::core::result::Result::Ok(()),
            _ => $crate::check_is_valid_number(number, &$crate::tagged_values![$($value),*]),
        }
    }};
}

/// `Err` if the string is missing or has zero length.
#[macro_export]
macro_rules! check_string_not_null_or_empty {
    ($text:expr $(, $value:expr)* $(,)?) => {{
        let text = &$text;
        match $crate::TextPresence::text_state(text) {
            $crate::TextState::Present => ::core::result::Result::Ok(()),
            _ => $crate::check_string_not_null_or_empty(
                text,
                &$crate::tagged_values![$($value),*],
            ),
        }
    }};
}
