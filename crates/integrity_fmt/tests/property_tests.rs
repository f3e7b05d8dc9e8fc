//! Property-based tests for message assembly.
//!
//! These check the assembler against randomly generated value sequences:
//! 1. The default message is used exactly when no real value is present
//! 2. Placeholders are consumed one per value, in order
//! 3. Only a leading raw text is left unquoted
//! 4. Assembly has no hidden state

#![allow(
    clippy::doc_markdown,
    clippy::uninlined_format_args,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use integrity_fmt::{build_from_values, TaggedValue, ValueKind};
use proptest::prelude::*;

const DEFAULT: &str = "Integrity check failed";

// -- Value Generation Strategies --

/// Text without spaces or braces, so it can neither equal the default
/// message nor introduce a placeholder.
fn plain_text_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_.]{0,8}"
}

/// As [`plain_text_strategy`], but never empty, so a value built from it
/// always leaves something in the message.
fn non_empty_text_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_.]{1,8}"
}

fn present_kind_strategy() -> impl Strategy<Value = ValueKind> {
    prop_oneof![
        Just(ValueKind::Boolean),
        Just(ValueKind::Text),
        Just(ValueKind::RawText),
        Just(ValueKind::Number),
        Just(ValueKind::Character),
    ]
}

fn present_value_strategy() -> impl Strategy<Value = TaggedValue> {
    (present_kind_strategy(), plain_text_strategy())
        .prop_map(|(kind, text)| TaggedValue::new(kind, text))
}

fn non_empty_value_strategy() -> impl Strategy<Value = TaggedValue> {
    (present_kind_strategy(), non_empty_text_strategy())
        .prop_map(|(kind, text)| TaggedValue::new(kind, text))
}

fn any_value_strategy() -> impl Strategy<Value = TaggedValue> {
    prop_oneof![
        3 => present_value_strategy(),
        1 => Just(TaggedValue::absent()),
    ]
}

fn number_strategy() -> impl Strategy<Value = TaggedValue> {
    any::<i64>().prop_map(|n| TaggedValue::new(ValueKind::Number, n.to_string()))
}

proptest! {
    #[test]
    fn all_absent_gives_default(count in 0usize..8) {
        let values = vec![TaggedValue::absent(); count];
        prop_assert_eq!(build_from_values(DEFAULT, &values), DEFAULT);
    }

    #[test]
    fn any_present_value_replaces_default(
        values in prop::collection::vec(any_value_strategy(), 0..8),
        extra in present_value_strategy(),
        at in any::<prop::sample::Index>(),
    ) {
        let mut values = values;
        let position = at.index(values.len() + 1);
        values.insert(position, extra);
        prop_assert_ne!(build_from_values(DEFAULT, &values), DEFAULT);
    }

    #[test]
    fn placeholders_consumed_in_order(
        segments in prop::collection::vec("[a-z ]{0,6}", 1..5),
        numbers in prop::collection::vec(number_strategy(), 0..4),
    ) {
        let placeholders = segments.len() - 1;
        let template = segments.join("{}");

        let mut values = vec![TaggedValue::new(ValueKind::RawText, template)];
        let mut fills = Vec::new();
        for i in 0..placeholders {
            let n = TaggedValue::new(ValueKind::Number, (i * 10).to_string());
            fills.push(n.text.clone());
            values.push(n);
        }
        values.extend(numbers.iter().cloned());

        let mut expected = segments[0].clone();
        for (fill, segment) in fills.iter().zip(&segments[1..]) {
            expected.push_str(fill);
            expected.push_str(segment);
        }
        if expected.is_empty() {
            // An empty message takes the next value without a separator.
            if let Some((first, rest)) = numbers.split_first() {
                expected.push_str(&first.text);
                for n in rest {
                    expected.push_str(", ");
                    expected.push_str(&n.text);
                }
            }
        } else {
            for n in &numbers {
                expected.push_str(", ");
                expected.push_str(&n.text);
            }
        }

        prop_assert_eq!(build_from_values(DEFAULT, &values), expected);
    }

    #[test]
    fn later_raw_text_is_back_ticked(
        prefix in prop::collection::vec(non_empty_value_strategy(), 1..4),
        text in plain_text_strategy(),
    ) {
        let mut values = prefix;
        values.push(TaggedValue::new(ValueKind::RawText, text.clone()));
        let message = build_from_values(DEFAULT, &values);
        let expected_suffix = format!(", `{}`", text);
        prop_assert!(message.ends_with(&expected_suffix));
    }

    #[test]
    fn raw_text_after_empty_values_is_still_leading(
        empties in prop::collection::vec(present_kind_strategy(), 1..4),
        text in non_empty_text_strategy(),
    ) {
        // Only kinds without markup render as nothing when their text is empty.
        let mut values: Vec<_> = empties
            .into_iter()
            .filter(|kind| matches!(kind, ValueKind::RawText | ValueKind::Number))
            .map(|kind| TaggedValue::new(kind, ""))
            .collect();
        values.push(TaggedValue::new(ValueKind::RawText, text.clone()));
        prop_assert_eq!(build_from_values(DEFAULT, &values), text);
    }

    #[test]
    fn leading_raw_text_is_bare(text in plain_text_strategy()) {
        let values = [TaggedValue::new(ValueKind::RawText, text.clone())];
        prop_assert_eq!(build_from_values(DEFAULT, &values), text);
    }

    #[test]
    fn assembly_is_idempotent(values in prop::collection::vec(any_value_strategy(), 0..8)) {
        let first = build_from_values(DEFAULT, &values);
        let second = build_from_values(DEFAULT, &values);
        prop_assert_eq!(first, second);
    }
}
