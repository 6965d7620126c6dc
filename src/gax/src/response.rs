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

use bytes::Bytes;
use http::{HeaderMap, StatusCode};

/// An HTTP response, as received by the application's HTTP client.
///
/// # Example
/// ```
/// # use cloud_sdk_gax::response::HttpResponse;
/// let response = HttpResponse::new(http::StatusCode::OK)
///     .set_body(r#"{"DeliveryStreamNames": []}"#);
/// assert!(response.is_success());
/// ```
#[derive(Clone, Debug)]
pub struct HttpResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl HttpResponse {
    /// Creates a response with no headers and an empty body.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: Bytes::new(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns the value of header `name`, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// True for 2xx status codes.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn set_headers<T: Into<HeaderMap>>(mut self, v: T) -> Self {
        self.headers = v.into();
        self
    }

    pub fn set_body<T: Into<Bytes>>(mut self, v: T) -> Self {
        self.body = v.into();
        self
    }
}

impl From<http::Response<Bytes>> for HttpResponse {
    fn from(value: http::Response<Bytes>) -> Self {
        let (parts, body) = value.into_parts();
        Self {
            status: parts.status,
            headers: parts.headers,
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn builder() {
        let mut headers = HeaderMap::new();
        headers.insert("x-amzn-requestid", HeaderValue::from_static("abc-123"));
        let response = HttpResponse::new(StatusCode::BAD_REQUEST)
            .set_headers(headers.clone())
            .set_body("{}");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(!response.is_success());
        assert_eq!(response.headers(), &headers);
        assert_eq!(response.header("X-Amzn-RequestId"), Some("abc-123"));
        assert_eq!(response.header("missing"), None);
        assert_eq!(response.body(), &Bytes::from_static(b"{}"));
    }

    #[test]
    fn from_http() -> anyhow::Result<()> {
        let http = http::Response::builder()
            .status(204)
            .header("etag", "\"abc\"")
            .body(Bytes::new())?;
        let response = HttpResponse::from(http);
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(response.is_success());
        assert_eq!(response.header("etag"), Some("\"abc\""));
        assert!(response.body().is_empty());
        Ok(())
    }
}
