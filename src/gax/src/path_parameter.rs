// Copyright 2024 Google LLC
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

use crate::request_parameter::{RequestParameter, UNRESERVED};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("missing required parameter {0}")]
    MissingRequiredParameter(String),
}

pub fn missing(name: &str) -> crate::error::Error {
    crate::error::Error::binding(Error::MissingRequiredParameter(name.to_string()))
}

/// Returns the value of a required path parameter.
pub fn required<'a, T>(value: &'a Option<T>, name: &str) -> crate::Result<&'a T> {
    value.as_ref().ok_or_else(|| missing(name))
}

/// Formats and percent-encodes a single path segment. `/` is encoded.
pub fn segment<T: RequestParameter>(value: &T) -> crate::Result<String> {
    let s = value.format().map_err(crate::error::Error::binding)?;
    Ok(percent_encoding::utf8_percent_encode(&s, UNRESERVED).to_string())
}

/// Percent-encodes a multi-segment path, e.g. an object key. `/` is kept.
pub fn greedy(value: &str) -> String {
    value
        .split('/')
        .map(|s| percent_encoding::utf8_percent_encode(s, UNRESERVED).to_string())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn missing() {
        let e = super::missing("abc123");
        assert!(e.is_binding(), "{e:?}");
        let fmt = format!("{e}");
        assert!(fmt.contains("abc123"), "{e:?}");
        let inner = e.as_inner::<super::Error>();
        assert!(
            matches!(inner, Some(Error::MissingRequiredParameter(s)) if s == "abc123"),
            "{e:?}"
        );
    }

    #[test]
    fn required_values() -> anyhow::Result<()> {
        let value = Some("my-bucket".to_string());
        assert_eq!(required(&value, "bucket_name")?, "my-bucket");
        let value: Option<String> = None;
        let got = required(&value, "bucket_name");
        assert!(matches!(&got, Err(e) if e.is_binding()), "{got:?}");
        Ok(())
    }

    #[test_case("my-bucket", "my-bucket")]
    #[test_case("a b", "a%20b")]
    #[test_case("a/b", "a%2Fb")]
    fn segments(input: &str, want: &str) -> anyhow::Result<()> {
        assert_eq!(segment(&input)?, want);
        Ok(())
    }

    #[test_case("photos/2025/cat.jpg", "photos/2025/cat.jpg")]
    #[test_case("a b/c+d", "a%20b/c%2Bd")]
    #[test_case("/leading", "/leading")]
    #[test_case("ünï", "%C3%BCn%C3%AF")]
    fn greedy_paths(input: &str, want: &str) {
        assert_eq!(greedy(input), want);
    }
}
