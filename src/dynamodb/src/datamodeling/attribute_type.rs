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

use crate::model::AttributeValue;

/// The value in an item could not be converted to the property type.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("expected {expected}, got {got:?}")]
pub struct ConversionError {
    expected: &'static str,
    got: AttributeValue,
}

impl ConversionError {
    pub fn new(expected: &'static str, got: &AttributeValue) -> Self {
        Self {
            expected,
            got: got.clone(),
        }
    }

    /// The expected attribute type, e.g. `a number (N)`.
    pub fn expected(&self) -> &'static str {
        self.expected
    }
}

type Result<T> = std::result::Result<T, ConversionError>;

/// Property types the mapper converts to and from [AttributeValue].
///
/// Numbers use `N`, strings and timestamps use `S`, booleans are stored as
/// the numbers `1` and `0`, string lists use `SS`, and binary values use `B`.
pub trait AttributeType: Sized {
    fn to_attribute(&self) -> AttributeValue;
    fn from_attribute(value: &AttributeValue) -> Result<Self>;
}

/// Converts an optional property value, `None` stays `None`.
pub fn to_attribute<T: AttributeType>(value: &Option<T>) -> Option<AttributeValue> {
    value.as_ref().map(AttributeType::to_attribute)
}

impl AttributeType for String {
    fn to_attribute(&self) -> AttributeValue {
        AttributeValue::new().set_s(self.clone())
    }

    fn from_attribute(value: &AttributeValue) -> Result<Self> {
        value
            .s
            .clone()
            .ok_or_else(|| ConversionError::new("a string (S)", value))
    }
}

fn number<T: std::str::FromStr>(value: &AttributeValue) -> Result<T> {
    value
        .n
        .as_deref()
        .and_then(|n| n.parse().ok())
        .ok_or_else(|| ConversionError::new("a number (N)", value))
}

impl AttributeType for i32 {
    fn to_attribute(&self) -> AttributeValue {
        AttributeValue::new().set_n(self.to_string())
    }

    fn from_attribute(value: &AttributeValue) -> Result<Self> {
        number(value)
    }
}

impl AttributeType for i64 {
    fn to_attribute(&self) -> AttributeValue {
        AttributeValue::new().set_n(self.to_string())
    }

    fn from_attribute(value: &AttributeValue) -> Result<Self> {
        number(value)
    }
}

impl AttributeType for f64 {
    fn to_attribute(&self) -> AttributeValue {
        AttributeValue::new().set_n(gax::string_utils::from_double(*self))
    }

    fn from_attribute(value: &AttributeValue) -> Result<Self> {
        number(value)
    }
}

impl AttributeType for bool {
    fn to_attribute(&self) -> AttributeValue {
        AttributeValue::new().set_n(if *self { "1" } else { "0" })
    }

    fn from_attribute(value: &AttributeValue) -> Result<Self> {
        if let Some(b) = value.bool {
            return Ok(b);
        }
        match value.n.as_deref() {
            Some("1") => Ok(true),
            Some("0") => Ok(false),
            _ => Err(ConversionError::new("a boolean (N or BOOL)", value)),
        }
    }
}

impl AttributeType for Vec<String> {
    fn to_attribute(&self) -> AttributeValue {
        AttributeValue::new().set_ss(self.iter().cloned())
    }

    fn from_attribute(value: &AttributeValue) -> Result<Self> {
        value
            .ss
            .clone()
            .ok_or_else(|| ConversionError::new("a string set (SS)", value))
    }
}

impl AttributeType for bytes::Bytes {
    fn to_attribute(&self) -> AttributeValue {
        AttributeValue::new().set_b(self.clone())
    }

    fn from_attribute(value: &AttributeValue) -> Result<Self> {
        value
            .b
            .clone()
            .ok_or_else(|| ConversionError::new("a binary value (B)", value))
    }
}

impl AttributeType for wkt::Timestamp {
    fn to_attribute(&self) -> AttributeValue {
        AttributeValue::new().set_s(self.to_iso8601())
    }

    fn from_attribute(value: &AttributeValue) -> Result<Self> {
        value
            .s
            .as_deref()
            .and_then(|s| wkt::Timestamp::try_from(s).ok())
            .ok_or_else(|| ConversionError::new("an ISO-8601 timestamp (S)", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;
    type TestResult = anyhow::Result<()>;

    #[test]
    fn strings() -> TestResult {
        let value = "alice".to_string().to_attribute();
        assert_eq!(value.s.as_deref(), Some("alice"));
        assert_eq!(String::from_attribute(&value)?, "alice");
        let got = String::from_attribute(&AttributeValue::new().set_n("1"));
        assert!(matches!(&got, Err(e) if e.expected() == "a string (S)"), "{got:?}");
        Ok(())
    }

    #[test_case("42", Some(42))]
    #[test_case("-7", Some(-7))]
    #[test_case("4.2", None)]
    #[test_case("abc", None)]
    fn numbers(input: &str, want: Option<i64>) {
        let got = i64::from_attribute(&AttributeValue::new().set_n(input)).ok();
        assert_eq!(got, want);
    }

    #[test]
    fn doubles() -> TestResult {
        let value = 2.5_f64.to_attribute();
        assert_eq!(value.n.as_deref(), Some("2.5"));
        assert_eq!(f64::from_attribute(&value)?, 2.5);
        Ok(())
    }

    #[test_case(AttributeValue::new().set_n("1"), Some(true))]
    #[test_case(AttributeValue::new().set_n("0"), Some(false))]
    #[test_case(AttributeValue::new().set_bool(true), Some(true))]
    #[test_case(AttributeValue::new().set_n("2"), None)]
    #[test_case(AttributeValue::new().set_s("true"), None)]
    fn booleans(input: AttributeValue, want: Option<bool>) {
        assert_eq!(bool::from_attribute(&input).ok(), want);
    }

    #[test]
    fn boolean_as_number() {
        assert_eq!(true.to_attribute().n.as_deref(), Some("1"));
        assert_eq!(false.to_attribute().n.as_deref(), Some("0"));
    }

    #[test]
    fn timestamps() -> TestResult {
        let ts = wkt::Timestamp::new(1747388772, 500_000_000)?;
        let value = ts.to_attribute();
        assert_eq!(value.s.as_deref(), Some("2025-05-16T09:46:12.500Z"));
        assert_eq!(wkt::Timestamp::from_attribute(&value)?, ts);
        Ok(())
    }

    #[test]
    fn optional() {
        assert_eq!(to_attribute::<i32>(&None), None);
        assert_eq!(
            to_attribute(&Some(vec!["a".to_string()])),
            Some(AttributeValue::new().set_ss(["a"]))
        );
    }
}
