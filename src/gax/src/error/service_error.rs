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

use http::HeaderMap;

/// Which party is responsible for a [ServiceError].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorType {
    /// The request was invalid, e.g. a missing parameter or a resource that
    /// does not exist. Typically reported with a 4xx status code.
    Client,
    /// The service could not process a valid request. Typically reported
    /// with a 5xx status code.
    Service,
    /// The error type could not be determined.
    #[default]
    Unknown,
}

impl ErrorType {
    /// Classifies an HTTP status code.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            400..=499 => Self::Client,
            500..=599 => Self::Service,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Client => "Client",
            Self::Service => "Service",
            Self::Unknown => "Unknown",
        };
        f.write_str(s)
    }
}

/// An error returned by a cloud service.
///
/// The services report an error code (e.g. `ResourceNotFoundException`) and a
/// human-readable message. The error may also have an HTTP status code, a
/// request id, and the response headers associated with it.
///
/// # Example
/// ```
/// use cloud_sdk_gax::error::{ErrorType, ServiceError, ServiceErrorBuilder};
/// let error = ServiceErrorBuilder::new("Stream abc not found")
///     .with_error_code("ResourceNotFoundException")
///     .with_http_status_code(400_u16)
///     .with_service_name("Firehose")
///     .build();
/// assert_eq!(error.error_code(), Some("ResourceNotFoundException"));
/// assert_eq!(error.error_type(), ErrorType::Client);
/// assert!(error.to_string().contains("Stream abc not found"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ServiceError {
    message: String,
    error_code: Option<String>,
    error_type: ErrorType,
    http_status_code: Option<u16>,
    request_id: Option<String>,
    service_name: Option<String>,
    headers: Option<HeaderMap>,
}

impl ServiceError {
    /// The human-readable message, possibly empty.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The error code reported by the service, e.g. `LimitExceededException`.
    pub fn error_code(&self) -> Option<&str> {
        self.error_code.as_deref()
    }

    /// Whether the client or the service is responsible for the error.
    pub fn error_type(&self) -> ErrorType {
        self.error_type
    }

    /// The HTTP status code, if any, associated with this error.
    pub fn http_status_code(&self) -> Option<u16> {
        self.http_status_code
    }

    /// The request id assigned by the service.
    ///
    /// Include this value when contacting support about a failed request.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// The name of the service that returned this error.
    pub fn service_name(&self) -> Option<&str> {
        self.service_name.as_deref()
    }

    /// The response headers, if any.
    pub fn headers(&self) -> Option<&HeaderMap> {
        self.headers.as_ref()
    }
}

/// A builder for [ServiceError].
pub struct ServiceErrorBuilder {
    inner: ServiceError,
}

impl ServiceErrorBuilder {
    /// Creates a new builder to construct complex [ServiceError] instances.
    pub fn new<T>(v: T) -> Self
    where
        T: Into<ServiceError>,
    {
        Self { inner: v.into() }
    }

    /// Consumes the builder and returns the resulting error.
    pub fn build(self) -> ServiceError {
        self.inner
    }

    /// Sets the error code.
    pub fn with_error_code<T: Into<String>>(mut self, v: T) -> Self {
        self.inner.error_code = Some(v.into());
        self
    }

    /// Sets the error type.
    ///
    /// The error type is also set by [with_http_status_code][Self::with_http_status_code],
    /// call this function afterwards to override it.
    pub fn with_error_type(mut self, v: ErrorType) -> Self {
        self.inner.error_type = v;
        self
    }

    /// Sets the HTTP status code and classifies the error type from it.
    pub fn with_http_status_code<T: Into<u16>>(mut self, v: T) -> Self {
        let code = v.into();
        self.inner.http_status_code = Some(code);
        self.inner.error_type = ErrorType::from_http_status(code);
        self
    }

    /// Sets the request id.
    pub fn with_request_id<T: Into<String>>(mut self, v: T) -> Self {
        self.inner.request_id = Some(v.into());
        self
    }

    /// Sets the service name.
    pub fn with_service_name<T: Into<String>>(mut self, v: T) -> Self {
        self.inner.service_name = Some(v.into());
        self
    }

    /// Sets the headers for this error.
    pub fn with_headers<T>(mut self, v: T) -> Self
    where
        T: Into<HeaderMap>,
    {
        self.inner.headers = Some(v.into());
        self
    }
}

impl From<String> for ServiceError {
    fn from(message: String) -> Self {
        Self {
            message,
            ..Default::default()
        }
    }
}

impl From<&str> for ServiceError {
    fn from(message: &str) -> Self {
        Self::from(message.to_string())
    }
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (", self.message)?;
        if let Some(s) = &self.service_name {
            write!(f, "Service: {s}; ")?;
        }
        if let Some(c) = &self.http_status_code {
            write!(f, "Status Code: {c}; ")?;
        }
        if let Some(c) = &self.error_code {
            write!(f, "Error Code: {c}; ")?;
        }
        write!(f, "Error Type: {}", self.error_type)?;
        if let Some(r) = &self.request_id {
            write!(f, "; Request ID: {r}")?;
        }
        write!(f, ")")
    }
}

impl std::error::Error for ServiceError {}

#[cfg(test)]
mod tests {
    use super::*;
    use http::{HeaderName, HeaderValue};
    use test_case::test_case;

    #[test]
    fn from_message() {
        let error = ServiceErrorBuilder::new("NOT FOUND").build();
        assert_eq!(error.message(), "NOT FOUND");
        assert_eq!(error.error_code(), None);
        assert_eq!(error.error_type(), ErrorType::Unknown);
        assert_eq!(error.http_status_code(), None);
        assert_eq!(error.request_id(), None);
        assert_eq!(error.service_name(), None);
        assert_eq!(error.headers(), None);

        let got = format!("{error}");
        assert_eq!(got, "NOT FOUND (Error Type: Unknown)");
    }

    #[test]
    fn full() {
        let headers = HeaderMap::from_iter([(
            HeaderName::from_static("x-amzn-requestid"),
            HeaderValue::from_static("req-123"),
        )]);
        let error = ServiceErrorBuilder::new("Stream abc not found".to_string())
            .with_error_code("ResourceNotFoundException")
            .with_http_status_code(400_u16)
            .with_request_id("req-123")
            .with_service_name("Firehose")
            .with_headers(headers.clone())
            .build();
        assert_eq!(error.error_code(), Some("ResourceNotFoundException"));
        assert_eq!(error.error_type(), ErrorType::Client);
        assert_eq!(error.http_status_code(), Some(400));
        assert_eq!(error.request_id(), Some("req-123"));
        assert_eq!(error.service_name(), Some("Firehose"));
        assert_eq!(error.headers(), Some(&headers));

        let got = format!("{error}");
        assert_eq!(
            got,
            "Stream abc not found (Service: Firehose; Status Code: 400; Error Code: ResourceNotFoundException; Error Type: Client; Request ID: req-123)"
        );
    }

    #[test]
    fn override_error_type() {
        let error = ServiceErrorBuilder::new("throttled")
            .with_http_status_code(400_u16)
            .with_error_type(ErrorType::Service)
            .build();
        assert_eq!(error.error_type(), ErrorType::Service);
    }

    #[test_case(200, ErrorType::Unknown)]
    #[test_case(301, ErrorType::Unknown)]
    #[test_case(400, ErrorType::Client)]
    #[test_case(404, ErrorType::Client)]
    #[test_case(499, ErrorType::Client)]
    #[test_case(500, ErrorType::Service)]
    #[test_case(503, ErrorType::Service)]
    fn error_type(status: u16, want: ErrorType) {
        assert_eq!(ErrorType::from_http_status(status), want);
    }
}
