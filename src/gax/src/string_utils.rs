// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The services exchange scalars as strings in headers, query parameters and
//! form bodies. These functions define the canonical string forms.

use base64::Engine;

/// The separator for list-valued headers and parameters.
pub const COMMA_SEPARATOR: &str = ",";

/// The name of the only character encoding used on the wire.
pub const UTF8: &str = "UTF-8";

/// Errors parsing a scalar from a string.
#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("cannot parse {0:?} as an integer")]
    Integer(String),
    #[error("cannot parse {0:?} as a decimal number")]
    Decimal(String),
}

/// Parses a 32-bit integer.
///
/// # Example
/// ```
/// # use cloud_sdk_gax::string_utils::to_integer;
/// assert_eq!(to_integer("-42"), Ok(-42));
/// assert!(to_integer("4.2").is_err());
/// ```
pub fn to_integer(value: &str) -> Result<i32, Error> {
    value
        .parse::<i32>()
        .map_err(|_| Error::Integer(value.to_string()))
}

/// Parses a boolean. Only `true` (in any case) is true.
pub fn to_boolean(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

pub fn from_integer(value: i32) -> String {
    value.to_string()
}

pub fn from_long(value: i64) -> String {
    value.to_string()
}

pub fn from_boolean(value: bool) -> String {
    value.to_string()
}

/// Formats a float. Whole numbers keep a trailing `.0`.
pub fn from_float(value: f32) -> String {
    format!("{value:?}")
}

/// Formats a double. Whole numbers keep a trailing `.0`.
pub fn from_double(value: f64) -> String {
    format!("{value:?}")
}

pub fn from_byte(value: i8) -> String {
    value.to_string()
}

/// Encodes a binary value using standard base64 with padding.
pub fn from_bytes(value: &[u8]) -> String {
    base64::prelude::BASE64_STANDARD.encode(value)
}

/// Formats a timestamp as ISO-8601 with millisecond precision.
pub fn from_timestamp(value: &wkt::Timestamp) -> String {
    value.to_iso8601()
}

/// Validates an arbitrary precision integer, e.g. `-12345678901234567890`.
///
/// A leading `+` is removed.
pub fn to_big_integer(value: &str) -> Result<String, Error> {
    let unsigned = value.strip_prefix(['+', '-']).unwrap_or(value);
    if unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::Integer(value.to_string()));
    }
    Ok(value.strip_prefix('+').unwrap_or(value).to_string())
}

/// Validates an arbitrary precision decimal, e.g. `-1.25E+10`.
///
/// A leading `+` is removed.
pub fn to_big_decimal(value: &str) -> Result<String, Error> {
    let err = || Error::Decimal(value.to_string());
    let unsigned = value.strip_prefix(['+', '-']).unwrap_or(value);
    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(i) => (&unsigned[..i], Some(&unsigned[i + 1..])),
        None => (unsigned, None),
    };
    let (int, frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (int.is_empty() && frac.is_empty()) || !all_digits(int) || !all_digits(frac) {
        return Err(err());
    }
    if let Some(exponent) = exponent {
        let e = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
        if e.is_empty() || !all_digits(e) {
            return Err(err());
        }
    }
    Ok(value.strip_prefix('+').unwrap_or(value).to_string())
}

/// Replaces all the occurrences of `part` with `replacement`.
///
/// The search resumes after each replacement, so the replacement text is
/// never matched. An empty `part` leaves the input unchanged.
///
/// # Example
/// ```
/// # use cloud_sdk_gax::string_utils::replace;
/// assert_eq!(replace("aaa", "a", "aa"), "aaaaaa");
/// assert_eq!(replace("a+b+c", "+", "%20"), "a%20b%20c");
/// ```
pub fn replace(original: &str, part: &str, replacement: &str) -> String {
    if part.is_empty() {
        return original.to_string();
    }
    original.replace(part, replacement)
}

/// Joins `parts` using `joiner`.
pub fn join<T: AsRef<str>>(joiner: &str, parts: &[T]) -> String {
    let mut joined = String::new();
    for (i, p) in parts.iter().enumerate() {
        if i != 0 {
            joined.push_str(joiner);
        }
        joined.push_str(p.as_ref());
    }
    joined
}

/// Removes leading and trailing whitespace and control characters.
pub fn trim(value: Option<&str>) -> Option<&str> {
    value.map(|v| v.trim_matches(|c: char| c <= ' '))
}

pub fn is_null_or_empty(value: Option<&str>) -> bool {
    value.is_none_or(str::is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("0", 0)]
    #[test_case("42", 42)]
    #[test_case("-42", -42)]
    #[test_case("2147483647", i32::MAX)]
    fn integer(input: &str, want: i32) {
        assert_eq!(to_integer(input), Ok(want));
    }

    #[test_case("")]
    #[test_case("abc")]
    #[test_case("2147483648")]
    #[test_case("1.5")]
    fn bad_integer(input: &str) {
        assert_eq!(to_integer(input), Err(Error::Integer(input.to_string())));
    }

    #[test_case("true", true)]
    #[test_case("TRUE", true)]
    #[test_case("True", true)]
    #[test_case("false", false)]
    #[test_case("yes", false)]
    #[test_case("", false)]
    fn boolean(input: &str, want: bool) {
        assert_eq!(to_boolean(input), want);
    }

    #[test]
    fn scalars() {
        assert_eq!(from_integer(-7), "-7");
        assert_eq!(from_long(1234567890123), "1234567890123");
        assert_eq!(from_boolean(true), "true");
        assert_eq!(from_boolean(false), "false");
        assert_eq!(from_float(1.0), "1.0");
        assert_eq!(from_float(1.5), "1.5");
        assert_eq!(from_double(-0.25), "-0.25");
        assert_eq!(from_byte(-128), "-128");
        assert_eq!(from_bytes(b""), "");
        assert_eq!(from_bytes(b"abcd"), "YWJjZA==");
    }

    #[test]
    fn timestamp() -> anyhow::Result<()> {
        let ts = wkt::Timestamp::new(1447361295, 250_000_000)?;
        assert_eq!(from_timestamp(&ts), "2015-11-12T20:48:15.250Z");
        Ok(())
    }

    #[test_case("0", "0")]
    #[test_case("+12", "12")]
    #[test_case("-123456789012345678901234567890", "-123456789012345678901234567890")]
    fn big_integer(input: &str, want: &str) {
        assert_eq!(to_big_integer(input).as_deref(), Ok(want));
    }

    #[test_case("")]
    #[test_case("-")]
    #[test_case("1.0")]
    #[test_case("12a")]
    #[test_case("+-1")]
    fn bad_big_integer(input: &str) {
        assert!(to_big_integer(input).is_err(), "{input}");
    }

    #[test_case("0", "0")]
    #[test_case("1.25", "1.25")]
    #[test_case("+.5", ".5")]
    #[test_case("5.", "5.")]
    #[test_case("-1.25E+10", "-1.25E+10")]
    #[test_case("3e-2", "3e-2")]
    fn big_decimal(input: &str, want: &str) {
        assert_eq!(to_big_decimal(input).as_deref(), Ok(want));
    }

    #[test_case("")]
    #[test_case(".")]
    #[test_case("1.2.3")]
    #[test_case("1e")]
    #[test_case("e5")]
    #[test_case("1x")]
    fn bad_big_decimal(input: &str) {
        assert_eq!(to_big_decimal(input), Err(Error::Decimal(input.to_string())));
    }

    #[test_case("abcabc", "b", "x", "axcaxc"; "simple")]
    #[test_case("aaa", "a", "aa", "aaaaaa"; "replacement contains pattern")]
    #[test_case("aaaa", "aa", "b", "bb"; "non overlapping")]
    #[test_case("abc", "z", "y", "abc"; "no match")]
    #[test_case("abc", "", "y", "abc"; "empty pattern")]
    #[test_case("", "a", "b", ""; "empty input")]
    fn replace_all(original: &str, part: &str, replacement: &str, want: &str) {
        assert_eq!(replace(original, part, replacement), want);
    }

    #[test]
    fn join_parts() {
        let empty: [&str; 0] = [];
        assert_eq!(join(COMMA_SEPARATOR, &empty), "");
        assert_eq!(join(COMMA_SEPARATOR, &["a"]), "a");
        assert_eq!(join(COMMA_SEPARATOR, &["a", "b", "c"]), "a,b,c");
        assert_eq!(join("--", &["a".to_string(), String::new()]), "a--");
    }

    #[test]
    fn trim_and_empty() {
        assert_eq!(trim(None), None);
        assert_eq!(trim(Some("  abc\t\n")), Some("abc"));
        assert_eq!(trim(Some("   ")), Some(""));
        assert!(is_null_or_empty(None));
        assert!(is_null_or_empty(Some("")));
        assert!(!is_null_or_empty(Some(" ")));
    }

    #[test]
    fn constants() {
        assert_eq!(COMMA_SEPARATOR, ",");
        assert_eq!(UTF8, "UTF-8");
    }
}
