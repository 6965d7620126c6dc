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

use crate::string_utils;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

/// Characters left as-is in query strings, form bodies and path segments.
///
/// Everything but `A-Z a-z 0-9 - . _ ~` is percent-encoded.
pub(crate) const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

type Result = std::result::Result<String, Error>;

/// Scalars that can appear in query parameters, path segments, form bodies,
/// and header values.
pub trait RequestParameter {
    fn format(&self) -> Result;
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("cannot format as request parameter {0:?}")]
    Format(Box<dyn std::error::Error + Send + Sync>),
}

impl RequestParameter for i32 {
    fn format(&self) -> Result {
        Ok(string_utils::from_integer(*self))
    }
}
impl RequestParameter for i64 {
    fn format(&self) -> Result {
        Ok(string_utils::from_long(*self))
    }
}
impl RequestParameter for f32 {
    fn format(&self) -> Result {
        Ok(string_utils::from_float(*self))
    }
}
impl RequestParameter for f64 {
    fn format(&self) -> Result {
        Ok(string_utils::from_double(*self))
    }
}
impl RequestParameter for String {
    fn format(&self) -> Result {
        Ok(self.clone())
    }
}
impl RequestParameter for &str {
    fn format(&self) -> Result {
        Ok(self.to_string())
    }
}
impl RequestParameter for bool {
    fn format(&self) -> Result {
        Ok(string_utils::from_boolean(*self))
    }
}

impl RequestParameter for bytes::Bytes {
    fn format(&self) -> Result {
        Ok(string_utils::from_bytes(self))
    }
}

impl RequestParameter for wkt::Timestamp {
    fn format(&self) -> Result {
        Ok(string_utils::from_timestamp(self))
    }
}

impl RequestParameter for serde_json::Value {
    fn format(&self) -> Result {
        match self {
            Self::String(s) => Ok(s.clone()),
            Self::Number(n) => Ok(n.to_string()),
            Self::Bool(b) => Ok(b.to_string()),
            v => Err(Error::Format(
                format!("only scalars can be request parameters, got {v}").into(),
            )),
        }
    }
}
