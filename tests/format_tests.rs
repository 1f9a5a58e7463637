//! Table tests for the value formatter.

use std::io;
use std::net::Ipv4Addr;

use chrono::{FixedOffset, TimeZone, Utc};
use femtologfmt::{FemtoValue, format};
use rstest::rstest;

#[rstest]
#[case(FemtoValue::from(126u8), "126")]
#[case(FemtoValue::from(65535u16), "65535")]
#[case(FemtoValue::from(4294967295u32), "4294967295")]
#[case(FemtoValue::from(18446744073709551615u64), "18446744073709551615")]
#[case(FemtoValue::from(i8::MIN), "-128")]
#[case(FemtoValue::from(127i8), "127")]
#[case(FemtoValue::from(i16::MIN), "-32768")]
#[case(FemtoValue::from(32767i16), "32767")]
#[case(FemtoValue::from(i32::MIN), "-2147483648")]
#[case(FemtoValue::from(2147483647i32), "2147483647")]
#[case(FemtoValue::from(i64::MIN), "-9223372036854775808")]
#[case(FemtoValue::from(9223372036854775807i64), "9223372036854775807")]
fn integers_render_exactly(#[case] value: FemtoValue, #[case] expected: &str) {
    assert_eq!(format(&value), expected);
}

#[rstest]
#[case(FemtoValue::from(3.14159265359f32), "3.14159")]
#[case(FemtoValue::from(-3.14159265359f32), "-3.14159")]
#[case(FemtoValue::from(2.71828182845904523536f64), "2.71828")]
#[case(FemtoValue::from(-2.71828182845904523536f64), "-2.71828")]
fn floats_render_at_six_significant_digits(#[case] value: FemtoValue, #[case] expected: &str) {
    assert_eq!(format(&value), expected);
}

#[rstest]
#[case(FemtoValue::from("ipsum"), r#""ipsum""#)]
#[case(FemtoValue::from(String::from("two words")), r#""two words""#)]
#[case(FemtoValue::from("with \"quotes\" and \\"), r#""with \"quotes\" and \\""#)]
#[case(FemtoValue::from("multi\nline"), r#""multi\nline""#)]
fn strings_are_always_quoted(#[case] value: FemtoValue, #[case] expected: &str) {
    assert_eq!(format(&value), expected);
}

#[rstest]
fn timestamps_normalize_to_utc() {
    let minus_three = FixedOffset::west_opt(3 * 3600).expect("valid offset");
    let ts = minus_three
        .with_ymd_and_hms(1978, 7, 16, 2, 55, 0)
        .single()
        .expect("valid local time");
    assert_eq!(format(&FemtoValue::from(ts)), "1978-07-16T05:55:00Z");
}

#[rstest]
fn utc_timestamps_render_unchanged() {
    let ts = Utc
        .with_ymd_and_hms(1978, 7, 16, 5, 55, 0)
        .single()
        .expect("valid time");
    assert_eq!(format(&FemtoValue::from(ts)), "1978-07-16T05:55:00Z");
}

#[rstest]
fn present_errors_render_quoted() {
    let value = FemtoValue::error(io::Error::other("something failed"));
    assert_eq!(format(&value), r#""something failed""#);
}

#[rstest]
fn absent_errors_render_as_nil() {
    assert_eq!(format(&FemtoValue::opt_error::<io::Error>(None)), "<nil>");
    assert_eq!(format(&FemtoValue::Nil), "<nil>");
    assert_eq!(format(&FemtoValue::from(None::<u64>)), "<nil>");
}

#[rstest]
fn stringable_values_render_quoted() {
    let value = FemtoValue::stringable(Ipv4Addr::new(192, 168, 0, 1));
    assert_eq!(format(&value), r#""192.168.0.1""#);
}

#[rstest]
#[case(FemtoValue::from(true), "true")]
#[case(FemtoValue::from(false), "false")]
#[case(FemtoValue::from('x'), "x")]
#[case(FemtoValue::other(7u8..9), "7..9")]
fn fallback_without_whitespace_stays_bare(#[case] value: FemtoValue, #[case] expected: &str) {
    assert_eq!(format(&value), expected);
}

#[rstest]
#[case(FemtoValue::from(' '), r#"" ""#)]
#[case(FemtoValue::other(vec![1, 2, 3]), r#""[1, 2, 3]""#)]
fn fallback_with_whitespace_gets_quoted(#[case] value: FemtoValue, #[case] expected: &str) {
    assert_eq!(format(&value), expected);
}

/// Quoting a message containing `"`, `\` and a newline must produce a token
/// a standard string-literal unquoter maps back to the original text.
#[rstest]
fn quoting_round_trips_through_a_literal_unquoter() {
    let original = "a \"b\" c\\d\ne";
    let quoted = femtologfmt::quote(original);
    assert_eq!(quoted, "\"a \\\"b\\\" c\\\\d\\ne\"");

    let inner = &quoted[1..quoted.len() - 1];
    let mut unquoted = String::new();
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            unquoted.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => unquoted.push('\n'),
            Some(esc) => unquoted.push(esc),
            None => panic!("dangling escape"),
        }
    }
    assert_eq!(unquoted, original);
}
