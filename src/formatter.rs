//! Canonical token rendering for label values.
//!
//! [`format`] is a total function: every [`FemtoValue`] resolves to some
//! token and there is no "unformattable value" error class. Numeric output
//! is locale-independent (`.` decimal separator, no grouping).

use std::fmt::Write as _;

use chrono::{SecondsFormat, Utc};

use crate::value::FemtoValue;

/// Significant digits used for float rendering, at the value's native width.
const FLOAT_SIG_DIGITS: usize = 6;

/// Render a single value into its canonical logfmt token.
///
/// Dispatch follows a fixed priority: absence wins over everything (an
/// absent error renders as `<nil>`, not as an error), explicit numeric and
/// timestamp shapes come next, then the quoted error/stringable shapes, and
/// finally the bare-unless-whitespace fallback.
pub fn format(value: &FemtoValue) -> String {
    match value {
        FemtoValue::Nil => String::from("<nil>"),
        FemtoValue::Str(s) => quote(s),
        FemtoValue::Uint(v) => v.to_string(),
        FemtoValue::Int(v) => v.to_string(),
        FemtoValue::Float32(v) => general32(*v),
        FemtoValue::Float64(v) => general64(*v),
        FemtoValue::Time(t) => t
            .with_timezone(&Utc)
            .to_rfc3339_opts(SecondsFormat::Secs, true),
        FemtoValue::Error(e) => quote(&e.to_string()),
        FemtoValue::Stringable(s) => quote(&s.to_string()),
        FemtoValue::Other(s) => {
            if s.chars().any(char::is_whitespace) {
                quote(s)
            } else {
                s.clone()
            }
        }
    }
}

/// Quote `s` as a double-quoted string literal.
///
/// Interior quotes and backslashes are escaped, `\n`/`\r`/`\t` keep their
/// named escapes, other ASCII control bytes (and DEL) become `\xNN`, and
/// non-ASCII control and format codepoints become `\uNNNN` (`\UNNNNNNNN`
/// above the basic multilingual plane). Unquoting the result with a
/// standard string literal parser yields the original text.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 || c as u32 == 0x7f => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c if c.is_control() || is_format(c) => {
                if (c as u32) <= 0xffff {
                    let _ = write!(out, "\\u{:04x}", c as u32);
                } else {
                    let _ = write!(out, "\\U{:08x}", c as u32);
                }
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Format (Cf) codepoints: invisible characters like the zero-width space
/// or soft hyphen that must not pass through into a record unescaped.
/// `char::is_control` only covers Cc, so these are enumerated here.
fn is_format(c: char) -> bool {
    matches!(
        u32::from(c),
        0xad
            | 0x600..=0x605
            | 0x61c
            | 0x6dd
            | 0x70f
            | 0x890..=0x891
            | 0x8e2
            | 0x180e
            | 0x200b..=0x200f
            | 0x202a..=0x202e
            | 0x2060..=0x2064
            | 0x2066..=0x206f
            | 0xfeff
            | 0xfff9..=0xfffb
            | 0x110bd
            | 0x110cd
            | 0x13430..=0x1343f
            | 0x1bca0..=0x1bca3
            | 0x1d173..=0x1d17a
            | 0xe0001
            | 0xe0020..=0xe007f
    )
}

fn general32(v: f32) -> String {
    if v.is_nan() {
        String::from("NaN")
    } else if v == f32::INFINITY {
        String::from("+Inf")
    } else if v == f32::NEG_INFINITY {
        String::from("-Inf")
    } else {
        general(&format!("{:.*e}", FLOAT_SIG_DIGITS - 1, v))
    }
}

fn general64(v: f64) -> String {
    if v.is_nan() {
        String::from("NaN")
    } else if v == f64::INFINITY {
        String::from("+Inf")
    } else if v == f64::NEG_INFINITY {
        String::from("-Inf")
    } else {
        general(&format!("{:.*e}", FLOAT_SIG_DIGITS - 1, v))
    }
}

/// Turn a correctly-rounded `d.dddddeE` scientific rendering into general
/// notation: fixed form while the decimal exponent stays in
/// `[-4, FLOAT_SIG_DIGITS)`, scientific form with a signed two-digit
/// exponent otherwise, trailing fractional zeros trimmed either way.
fn general(sci: &str) -> String {
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci.to_owned();
    };
    let exp: i32 = exp.parse().unwrap_or(0);
    let negative = mantissa.starts_with('-');
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();

    let body = if exp < -4 || exp >= FLOAT_SIG_DIGITS as i32 {
        let m = trim_fraction(&format!("{}.{}", &digits[..1], &digits[1..]));
        let (sign, abs) = if exp < 0 { ('-', -exp) } else { ('+', exp) };
        format!("{m}e{sign}{abs:02}")
    } else if exp < 0 {
        let mut s = String::from("0.");
        for _ in 0..(-exp - 1) {
            s.push('0');
        }
        s.push_str(&digits);
        trim_fraction(&s)
    } else {
        let point = exp as usize + 1;
        if point >= digits.len() {
            let mut s = digits;
            while s.len() < point {
                s.push('0');
            }
            s
        } else {
            trim_fraction(&format!("{}.{}", &digits[..point], &digits[point..]))
        }
    };

    if negative {
        format!("-{body}")
    } else {
        body
    }
}

fn trim_fraction(s: &str) -> String {
    s.trim_end_matches('0').trim_end_matches('.').to_owned()
}
