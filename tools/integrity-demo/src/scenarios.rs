//! The self-check table: each scenario runs one check and states whether
//! it must pass or which exact message it must fail with.

use std::fmt::Write;
use std::panic;
use std::ptr;

use integrity::{
    check, check_is_valid_number, check_is_valid_number_with, check_not_null,
    check_not_null_with, check_string_not_null_or_empty, check_with, classify_all, fail,
    ByteChar, IntegrityError, Utf16Unit, Utf32Str, Utf32Unit, WideStr,
};

/// What a scenario's check must produce.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Expect {
    Pass,
    FailWith(&'static str),
}

pub struct Scenario {
    pub name: &'static str,
    pub run: fn() -> Result<(), IntegrityError>,
    pub expect: Expect,
}

/// Why a scenario did not meet its expectation.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Mismatch {
    UnexpectedFailure(String),
    UnexpectedPass,
    WrongMessage { expected: &'static str, got: String },
}

impl Scenario {
    pub fn evaluate(&self) -> Result<(), Mismatch> {
        match ((self.run)(), self.expect) {
            (Ok(()), Expect::Pass) => Ok(()),
            (Err(err), Expect::Pass) => Err(Mismatch::UnexpectedFailure(err.into_message())),
            (Ok(()), Expect::FailWith(_)) => Err(Mismatch::UnexpectedPass),
            (Err(err), Expect::FailWith(expected)) => {
                if err.message() == expected {
                    Ok(())
                } else {
                    Err(Mismatch::WrongMessage {
                        expected,
                        got: err.into_message(),
                    })
                }
            }
        }
    }
}

// -- Checks that must pass --

fn passing_conditions() -> Result<(), IntegrityError> {
    let (x, y) = (1, 1);
    check!(x == y, 1)?;
    check!(x == y, 1.1)?;
    check!(x == y, "hihi")?;
    check!(x == y, 1, "hihi")?;
    check!(x == y)?;
    check_with(x == y, |out| out.write_str("hi"))
}

fn passing_numbers() -> Result<(), IntegrityError> {
    let f1 = 1.1_f32;
    let d1 = 1.1_f64;
    check_is_valid_number!(f1)?;
    check_is_valid_number!(d1)?;
    check_is_valid_number!(d1, d1)?;
    check_is_valid_number!(d1, "d1 is {}", d1)?;
    check_is_valid_number_with(d1, |out| write!(out, "d1 is {d1}"))
}

fn passing_pointers() -> Result<(), IntegrityError> {
    let f1 = 1.1_f32;
    let d1 = 1.1_f64;
    let pointer: *const f32 = &f1;
    check_not_null!(pointer)?;
    check_not_null!(pointer, "message")?;
    check_not_null!(pointer, "message", d1)?;
    check_not_null!(Some("abc"), "m1", "m2")?;
    check_not_null_with(&pointer, |out| write!(out, "message{d1}"))
}

fn passing_strings() -> Result<(), IntegrityError> {
    check_string_not_null_or_empty!("abc")?;
    check_string_not_null_or_empty!(" ")?;
    check_string_not_null_or_empty!(String::from("owned"), "unused")
}

// -- Checks that must fail --

fn bool_value() -> Result<(), IntegrityError> {
    let x = 1;
    let b = x == 1;
    check!(x != 1, b)
}

fn dereferenced_int() -> Result<(), IntegrityError> {
    let x = 1;
    let int_ref = &x;
    check!(x != 1, *int_ref)
}

fn callback_message() -> Result<(), IntegrityError> {
    let (x, y) = (1, 2);
    check_with(x == y, |out| write!(out, "{x} != {y}"))
}

fn default_message() -> Result<(), IntegrityError> {
    let (x, y) = (1, 2);
    check!(x == y)
}

fn literal_message() -> Result<(), IntegrityError> {
    let (x, y) = (1, 2);
    check!(x == y, "Oopsies")
}

fn template_message() -> Result<(), IntegrityError> {
    let (x, y) = (1, 2);
    check!(x == y, "Expected {} to be same as {}", x, y)
}

fn infinity() -> Result<(), IntegrityError> {
    let zero = 0.0_f32;
    check_is_valid_number!(1.1_f32 / zero)
}

fn null_pointer() -> Result<(), IntegrityError> {
    let null_fp: *const f32 = ptr::null();
    check_not_null(&null_fp, &[])
}

fn bare_fail() -> Result<(), IntegrityError> {
    fail!()
}

fn byte_char() -> Result<(), IntegrityError> {
    fail!(ByteChar(b'c'))
}

fn utf16_unit() -> Result<(), IntegrityError> {
    fail!(Utf16Unit(0x0BCD))
}

fn utf32_unit() -> Result<(), IntegrityError> {
    fail!(Utf32Unit(0x00FE_DCBA))
}

fn wide_unit() -> Result<(), IntegrityError> {
    fail!(Utf16Unit(0x0FCD))
}

fn owned_string() -> Result<(), IntegrityError> {
    fail!(String::from("a w string"))
}

fn utf16_string() -> Result<(), IntegrityError> {
    let units: Vec<u16> = "a u16 string".encode_utf16().collect();
    fail!(WideStr(&units))
}

fn utf32_string() -> Result<(), IntegrityError> {
    let units: Vec<u32> = "a u32 string".chars().map(u32::from).collect();
    fail!(Utf32Str(&units))
}

fn empty_owned_string() -> Result<(), IntegrityError> {
    check_string_not_null_or_empty!(String::new())
}

fn empty_literal() -> Result<(), IntegrityError> {
    check_string_not_null_or_empty("", &[])
}

fn missing_string() -> Result<(), IntegrityError> {
    let missing: Option<&str> = None;
    check_string_not_null_or_empty!(missing)
}

fn run_time_values() -> Result<(), IntegrityError> {
    let readings = [3_i32, -1, 4];
    let mut values = classify_all(["negative readings: {}"]);
    values.extend(classify_all(readings.iter().filter(|r| **r < 0)));
    check(readings.iter().all(|r| *r >= 0), &values)
}

/// The callback panics on purpose, so the panic hook is swapped for a
/// quiet one around this check only and restored afterwards.
fn panicking_callback() -> Result<(), IntegrityError> {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(|info| {
        tracing::debug!(%info, "message callback panic contained");
    }));
    let result = check_with(false, |_| -> std::fmt::Result {
        panic!("callback failed while formatting")
    });
    panic::set_hook(previous);
    result
}

pub const SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "conditions that hold",
        run: passing_conditions,
        expect: Expect::Pass,
    },
    Scenario {
        name: "valid numbers",
        run: passing_numbers,
        expect: Expect::Pass,
    },
    Scenario {
        name: "non-null pointers",
        run: passing_pointers,
        expect: Expect::Pass,
    },
    Scenario {
        name: "non-empty strings",
        run: passing_strings,
        expect: Expect::Pass,
    },
    Scenario {
        name: "bool value",
        run: bool_value,
        expect: Expect::FailWith("True"),
    },
    Scenario {
        name: "dereferenced int",
        run: dereferenced_int,
        expect: Expect::FailWith("1"),
    },
    Scenario {
        name: "callback message",
        run: callback_message,
        expect: Expect::FailWith("1 != 2"),
    },
    Scenario {
        name: "default message",
        run: default_message,
        expect: Expect::FailWith("Integrity check failed"),
    },
    Scenario {
        name: "literal message",
        run: literal_message,
        expect: Expect::FailWith("Oopsies"),
    },
    Scenario {
        name: "template message",
        run: template_message,
        expect: Expect::FailWith("Expected 1 to be same as 2"),
    },
    Scenario {
        name: "infinity",
        run: infinity,
        expect: Expect::FailWith("+Infinity"),
    },
    Scenario {
        name: "null pointer",
        run: null_pointer,
        expect: Expect::FailWith("Null pointer"),
    },
    Scenario {
        name: "bare fail",
        run: bare_fail,
        expect: Expect::FailWith("Integrity check failed"),
    },
    Scenario {
        name: "byte char",
        run: byte_char,
        expect: Expect::FailWith("'c'"),
    },
    Scenario {
        name: "utf-16 unit",
        run: utf16_unit,
        expect: Expect::FailWith("'0x0BCD'"),
    },
    Scenario {
        name: "utf-32 unit",
        run: utf32_unit,
        expect: Expect::FailWith("'0x00FEDCBA'"),
    },
    Scenario {
        name: "wide unit",
        run: wide_unit,
        expect: Expect::FailWith("'0x0FCD'"),
    },
    Scenario {
        name: "owned string",
        run: owned_string,
        expect: Expect::FailWith("\"a w string\""),
    },
    Scenario {
        name: "utf-16 string",
        run: utf16_string,
        expect: Expect::FailWith("\"a u16 string\""),
    },
    Scenario {
        name: "utf-32 string",
        run: utf32_string,
        expect: Expect::FailWith("\"a u32 string\""),
    },
    Scenario {
        name: "empty owned string",
        run: empty_owned_string,
        expect: Expect::FailWith("Empty string"),
    },
    Scenario {
        name: "empty literal",
        run: empty_literal,
        expect: Expect::FailWith("Empty string"),
    },
    Scenario {
        name: "missing string",
        run: missing_string,
        expect: Expect::FailWith("Null pointer"),
    },
    Scenario {
        name: "run-time values",
        run: run_time_values,
        expect: Expect::FailWith("negative readings: -1"),
    },
    Scenario {
        name: "panicking callback",
        run: panicking_callback,
        expect: Expect::FailWith("Integrity check failed: [error]"),
    },
];
