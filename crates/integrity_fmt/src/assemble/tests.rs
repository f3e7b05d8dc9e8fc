use std::fmt::Write;

use super::*;
use crate::value::Classify;
use pretty_assertions::assert_eq;

const DEFAULT: &str = "Integrity check failed";

fn number(text: &str) -> TaggedValue {
    TaggedValue::new(ValueKind::Number, text)
}

fn raw(text: &str) -> TaggedValue {
    TaggedValue::new(ValueKind::RawText, text)
}

// -- build_from_values --

#[test]
fn test_empty_sequence_returns_default() {
    assert_eq!(build_from_values(DEFAULT, &[]), DEFAULT);
}

#[test]
fn test_all_absent_returns_default() {
    let values = [TaggedValue::absent(), TaggedValue::absent()];
    assert_eq!(build_from_values(DEFAULT, &values), DEFAULT);
}

#[test]
fn test_single_value_replaces_default() {
    assert_eq!(build_from_values(DEFAULT, &[true.to_tagged_value()]), "True");
    assert_eq!(build_from_values(DEFAULT, &[1_i32.to_tagged_value()]), "1");
}

#[test]
fn test_placeholders_filled_in_order() {
    let values = [raw("Expected {} to be same as {}"), number("1"), number("2")];
    assert_eq!(
        build_from_values(DEFAULT, &values),
        "Expected 1 to be same as 2"
    );
}

#[test]
fn test_substitution_uses_unquoted_text() {
    let values = [
        raw("{} and {}"),
        String::from("text").to_tagged_value(),
        'c'.to_tagged_value(),
    ];
    assert_eq!(build_from_values(DEFAULT, &values), "text and c");
}

#[test]
fn test_extra_values_are_comma_appended() {
    let values = [
        raw("d2 is {}"),
        number("1.2"),
        number("3"),
        String::from("more").to_tagged_value(),
    ];
    assert_eq!(build_from_values(DEFAULT, &values), "d2 is 1.2, 3, \"more\"");
}

#[test]
fn test_raw_text_unquoted_only_in_first_position() {
    let values = [raw("m1"), raw("m2")];
    assert_eq!(build_from_values(DEFAULT, &values), "m1, `m2`");
}

#[test]
fn test_raw_text_after_a_number_is_quoted() {
    let values = [number("1"), raw("hihi")];
    assert_eq!(build_from_values(DEFAULT, &values), "1, `hihi`");
}

#[test]
fn test_first_text_value_keeps_quotes() {
    let values = [String::from("a w string").to_tagged_value()];
    assert_eq!(build_from_values(DEFAULT, &values), "\"a w string\"");
}

#[test]
fn test_first_character_keeps_quotes() {
    assert_eq!(build_from_values(DEFAULT, &['c'.to_tagged_value()]), "'c'");
}

#[test]
fn test_absent_values_are_skipped_anywhere() {
    let values = [
        TaggedValue::absent(),
        raw("x is {}"),
        TaggedValue::absent(),
        number("5"),
        TaggedValue::absent(),
    ];
    assert_eq!(build_from_values(DEFAULT, &values), "x is 5");
}

#[test]
fn test_raw_text_after_empty_raw_text_is_still_first() {
    let values = [raw(""), raw("hihi")];
    assert_eq!(build_from_values(DEFAULT, &values), "hihi");

    let values = [raw(""), raw("m1"), raw("m2")];
    assert_eq!(build_from_values(DEFAULT, &values), "m1, `m2`");
}

#[test]
fn test_raw_text_after_absent_is_still_first() {
    let values = [TaggedValue::absent(), raw("Oopsies")];
    assert_eq!(build_from_values(DEFAULT, &values), "Oopsies");
}

#[test]
fn test_placeholder_in_later_value_is_filled() {
    // The second value is appended with its placeholder intact, which the
    // third value then fills.
    let values = [number("1"), raw("{}"), number("2")];
    assert_eq!(build_from_values(DEFAULT, &values), "1, `2`");
}

#[test]
fn test_build_is_idempotent() {
    let values = [raw("a {} b"), number("1"), number("2")];
    let first = build_from_values(DEFAULT, &values);
    let second = build_from_values(DEFAULT, &values);
    assert_eq!(first, second);
}

// -- build_from_callback --

#[test]
fn test_no_callback_returns_default() {
    let callback: Option<fn(&mut MessageSink) -> fmt::Result> = None;
    assert_eq!(build_from_callback(callback, DEFAULT), DEFAULT);
}

#[test]
fn test_callback_output_is_the_message() {
    let (x, y) = (1, 2);
    let message = build_from_callback(
        Some(|out: &mut MessageSink| write!(out, "{x} != {y}")),
        DEFAULT,
    );
    assert_eq!(message, "1 != 2");
}

#[test]
fn test_callback_writing_nothing_gives_empty_message() {
    let message = build_from_callback(Some(|_: &mut MessageSink| Ok(())), DEFAULT);
    assert_eq!(message, "");
}

#[test]
fn test_callback_error_falls_back_with_suffix() {
    let message = build_from_callback(
        Some(|out: &mut MessageSink| {
            write!(out, "partial")?;
            Err(fmt::Error)
        }),
        DEFAULT,
    );
    assert_eq!(message, "Integrity check failed: [error]");
}

#[test]
fn test_callback_panic_is_contained() {
    let message = build_from_callback(
        Some(|_: &mut MessageSink| -> fmt::Result { panic!("formatting blew up") }),
        "Null pointer",
    );
    assert_eq!(message, "Null pointer: [error]");
}

#[test]
fn test_callback_panic_with_owned_payload_is_contained() {
    let message = build_from_callback(
        Some(|_: &mut MessageSink| -> fmt::Result {
            std::panic::panic_any(String::from("owned"))
        }),
        DEFAULT,
    );
    assert_eq!(message, format!("{DEFAULT}{ERROR_SUFFIX}"));
}

#[test]
fn test_sink_accumulates_writes() {
    let mut sink = MessageSink::new();
    assert_eq!(sink.as_str(), "");
    sink.write_str("message").ok();
    write!(sink, "{}{}", 1.1, 1.2).ok();
    assert_eq!(sink.as_str(), "message1.11.2");
    assert_eq!(sink.into_string(), "message1.11.2");
}
