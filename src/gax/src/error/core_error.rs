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

use super::ServiceError;
use http::HeaderMap;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The core error returned by all client libraries.
///
/// The client libraries report errors from multiple sources. For example, the
/// service may return an error, the library may be unable to format the
/// request due to invalid or missing application inputs, or the response may
/// not be a valid document.
///
/// Most applications will just return the error or log it, without any further
/// action. However, some applications may need to interrogate the error
/// details. This type offers a series of predicates to determine the error
/// kind. The type also offers accessors to query the most common error details.
/// Applications can query the error [source][std::error::Error::source] for
/// deeper information.
///
/// # Example
/// ```
/// use cloud_sdk_gax::error::Error;
/// match example_function() {
///     Err(e) if e.service_error().is_some() => {
///         println!("service error {e}");
///     },
///     Err(e) if e.is_serialization() => { println!("bad request {e}"); },
///     Err(e) => { println!("some other error {e}"); },
///     Ok(_) => { println!("success, how boring"); },
/// }
///
/// fn example_function() -> Result<String, Error> {
///     // ... details omitted ...
///     # use cloud_sdk_gax::error::ServiceErrorBuilder;
///     # Err(Error::service(ServiceErrorBuilder::new("NOT FOUND").with_http_status_code(404_u16).build()))
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    /// Creates an error with the information returned by a service.
    ///
    /// # Example
    /// ```
    /// use cloud_sdk_gax::error::{Error, ServiceErrorBuilder};
    /// let service_error = ServiceErrorBuilder::new("NOT FOUND").with_http_status_code(404_u16).build();
    /// let error = Error::service(service_error.clone());
    /// assert_eq!(error.service_error(), Some(&service_error));
    /// assert_eq!(error.http_status_code(), Some(404));
    /// ```
    pub fn service(error: ServiceError) -> Self {
        Self {
            kind: ErrorKind::Service(Box::new(error)),
            source: None,
        }
    }

    /// The [ServiceError] payload associated with this error.
    ///
    /// # Troubleshooting
    ///
    /// As this error type is created by the service, troubleshooting this
    /// problem involves reading the service documentation for the
    /// [error code][ServiceError::error_code]. The service crates convert the
    /// known error codes into typed errors via
    /// [ServiceException][crate::error::ServiceException].
    pub fn service_error(&self) -> Option<&ServiceError> {
        match &self.kind {
            ErrorKind::Service(e) => Some(e.as_ref()),
            _ => None,
        }
    }

    /// Creates an error representing an invalid argument.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use cloud_sdk_gax::error::Error;
    /// let error = Error::invalid_argument("Invalid argument passed to marshall(...)");
    /// assert!(error.is_invalid_argument());
    /// assert_eq!(error.to_string(), "Invalid argument passed to marshall(...)");
    /// ```
    pub fn invalid_argument<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::InvalidArgument,
            source: Some(source.into()),
        }
    }

    /// The application passed an invalid argument to a client library function.
    ///
    /// This is always a client-side generated error, generated before the
    /// request is made. Retrying with the same inputs fails again.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidArgument)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a deserialization problem.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use cloud_sdk_gax::error::Error;
    /// let error = Error::deser("simulated problem");
    /// assert!(error.is_deserialization());
    /// assert!(error.source().is_some());
    /// ```
    #[doc(hidden)]
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Deserialization,
            source: Some(source.into()),
        }
    }

    /// The response could not be deserialized.
    ///
    /// This is always a client-side generated error. Note that the request
    /// completed in the service.
    ///
    /// # Troubleshooting
    ///
    /// The unmarshallers skip unknown fields and tolerate `null` values, so
    /// this error indicates a response that is not a JSON document, or a field
    /// with an unexpected type. The most common cause is a proxy or load
    /// balancer returning an HTML page with a 2xx status code.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a serialization problem.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use cloud_sdk_gax::error::Error;
    /// let error = Error::ser("simulated problem");
    /// assert!(error.is_serialization());
    /// assert!(error.source().is_some());
    /// ```
    #[doc(hidden)]
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Serialization,
            source: Some(source.into()),
        }
    }

    /// The request could not be serialized.
    ///
    /// This is always a client-side generated error, generated before the
    /// request is made. This error is never transient: the serialization is
    /// deterministic, and will fail on future attempts with the same input
    /// data.
    ///
    /// # Troubleshooting
    ///
    /// The most common causes are header values that contain characters not
    /// allowed in HTTP headers, and map keys that cannot be represented in
    /// JSON. Use `format!("{:?}", ...)` to examine the error as it should
    /// include the original problem.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Cannot create the request URI.
    ///
    /// This indicates the request is missing required path parameters, or the
    /// endpoint does not form a valid URI.
    #[doc(hidden)]
    pub fn binding<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Binding,
            source: Some(source.into()),
        }
    }

    /// If true, the request was missing required path parameters.
    ///
    /// # Troubleshooting
    ///
    /// Typically this indicates a problem in the application. A required field
    /// in the request record was not initialized.
    pub fn is_binding(&self) -> bool {
        matches!(&self.kind, ErrorKind::Binding)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// A non-successful response without a recognizable error payload.
    #[doc(hidden)]
    pub fn http(status_code: u16, headers: HeaderMap, payload: bytes::Bytes) -> Self {
        let details = TransportDetails {
            status_code,
            headers,
            payload,
        };
        Self {
            kind: ErrorKind::Transport(Box::new(details)),
            source: None,
        }
    }

    /// A problem reported by the transport layer.
    ///
    /// # Troubleshooting
    ///
    /// This indicates that the request did not reach the service, or the
    /// service response was replaced by some network element, e.g. a proxy
    /// or load balancer. The [payload][Error::http_payload] may include more
    /// details.
    pub fn is_transport(&self) -> bool {
        matches!(&self.kind, ErrorKind::Transport(_))
    }

    /// The HTTP status code, if any, associated with this error.
    ///
    /// # Example
    /// ```
    /// use cloud_sdk_gax::error::Error;
    /// let e = search_for_thing("the thing");
    /// if let Some(code) = e.http_status_code() {
    ///     if code == 404 {
    ///         println!("cannot find the thing, more details in {e}");
    ///     }
    /// }
    ///
    /// fn search_for_thing(name: &str) -> Error {
    ///     # Error::http(404, http::HeaderMap::new(), bytes::Bytes::from_static(b"NOT FOUND"))
    /// }
    /// ```
    pub fn http_status_code(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Transport(d) => Some(d.status_code),
            ErrorKind::Service(e) => e.http_status_code(),
            _ => None,
        }
    }

    /// The headers, if any, associated with this error.
    pub fn http_headers(&self) -> Option<&HeaderMap> {
        match &self.kind {
            ErrorKind::Transport(d) => Some(&d.headers),
            ErrorKind::Service(e) => e.headers(),
            _ => None,
        }
    }

    /// The payload, if any, associated with this error.
    pub fn http_payload(&self) -> Option<&bytes::Bytes> {
        match &self.kind {
            ErrorKind::Transport(d) => Some(&d.payload),
            _ => None,
        }
    }

    /// Returns the source of this error if it has type `T`.
    ///
    /// # Example
    /// ```
    /// use cloud_sdk_gax::error::Error;
    /// let error = Error::deser(wkt::TimestampError::OutOfRange);
    /// assert!(error.as_inner::<wkt::TimestampError>().is_some());
    /// ```
    pub fn as_inner<T: StdError + Send + Sync + 'static>(&self) -> Option<&T> {
        self.source.as_ref().and_then(|e| e.downcast_ref::<T>())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::Binding, Some(e)) => {
                write!(f, "cannot create the request URI {e}")
            }
            // The sources carry the marshalling context.
            (ErrorKind::Serialization, Some(e)) => write!(f, "{e}"),
            (ErrorKind::InvalidArgument, Some(e)) => write!(f, "{e}"),
            (ErrorKind::Deserialization, Some(e)) => {
                write!(f, "cannot deserialize the response {e}")
            }
            (ErrorKind::Transport(details), _) => details.fmt(f),
            (ErrorKind::Service(e), _) => {
                write!(f, "the service reports an error: {e}")
            }
            (_, None) => unreachable!("no constructor allows this"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Service(e) => Some(e.as_ref() as &dyn std::error::Error),
            _ => self
                .source
                .as_ref()
                .map(|e| e.as_ref() as &dyn std::error::Error),
        }
    }
}

/// The type of error held by an [Error] instance.
#[derive(Debug)]
enum ErrorKind {
    Binding,
    InvalidArgument,
    Serialization,
    Deserialization,
    Transport(Box<TransportDetails>),
    Service(Box<ServiceError>),
}

#[derive(Debug)]
struct TransportDetails {
    status_code: u16,
    headers: HeaderMap,
    payload: bytes::Bytes,
}

impl std::fmt::Display for TransportDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = self.status_code;
        match std::str::from_utf8(self.payload.as_ref()) {
            Ok(message) => write!(f, "the HTTP transport reports a [{code}] error: {message}"),
            Err(_) => write!(
                f,
                "the HTTP transport reports a [{code}] error: {:?}",
                self.payload
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceErrorBuilder;
    use http::HeaderValue;
    use std::error::Error as StdError;

    #[test]
    fn service() {
        let mut headers = HeaderMap::new();
        headers.insert("x-amzn-requestid", HeaderValue::from_static("abc"));
        let service_error = ServiceErrorBuilder::new("NOT FOUND")
            .with_error_code("ResourceNotFoundException")
            .with_http_status_code(400_u16)
            .with_headers(headers.clone())
            .build();
        let error = Error::service(service_error.clone());
        assert_eq!(error.service_error(), Some(&service_error));
        assert_eq!(error.http_status_code(), Some(400));
        assert_eq!(error.http_headers(), Some(&headers));
        assert!(error.http_payload().is_none(), "{error:?}");
        assert!(error.to_string().contains("NOT FOUND"), "{error}");
        assert!(
            error.to_string().contains("ResourceNotFoundException"),
            "{error}"
        );
        let source = error
            .source()
            .and_then(|e| e.downcast_ref::<ServiceError>());
        assert_eq!(source, Some(&service_error));
    }

    #[test]
    fn invalid_argument() {
        let error = Error::invalid_argument("Invalid argument passed to marshall(...)");
        assert!(error.is_invalid_argument(), "{error:?}");
        assert!(!error.is_serialization(), "{error:?}");
        assert_eq!(error.to_string(), "Invalid argument passed to marshall(...)");
        assert!(error.service_error().is_none(), "{error:?}");
        assert!(error.http_status_code().is_none(), "{error:?}");
    }

    #[test]
    fn serialization() {
        let source = wkt::TimestampError::OutOfRange;
        let error = Error::ser(source);
        assert!(error.is_serialization(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");
        let got = error.as_inner::<wkt::TimestampError>();
        assert!(
            matches!(got, Some(wkt::TimestampError::OutOfRange)),
            "{error:?}"
        );
        let source = wkt::TimestampError::OutOfRange;
        assert_eq!(error.to_string(), source.to_string());
    }

    #[test]
    fn deserialization() {
        let source = wkt::TimestampError::OutOfRange;
        let error = Error::deser(source);
        assert!(error.is_deserialization(), "{error:?}");
        let source = wkt::TimestampError::OutOfRange;
        assert!(error.to_string().contains(&source.to_string()), "{error}");
        assert!(error.http_headers().is_none(), "{error:?}");
        assert!(error.http_status_code().is_none(), "{error:?}");
        assert!(error.http_payload().is_none(), "{error:?}");
        assert!(error.service_error().is_none(), "{error:?}");
    }

    #[test]
    fn binding() {
        let source = crate::path_parameter::Error::MissingRequiredParameter("bucket".into());
        let error = Error::binding(source);
        assert!(error.is_binding(), "{error:?}");
        assert!(error.to_string().contains("bucket"), "{error}");
        let got = error.as_inner::<crate::path_parameter::Error>();
        assert!(got.is_some(), "{error:?}");
    }

    #[test]
    fn transport() {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("text/html"));
        let error = Error::http(502, headers.clone(), bytes::Bytes::from_static(b"BAD GATEWAY"));
        assert!(error.is_transport(), "{error:?}");
        assert!(error.source().is_none(), "{error:?}");
        assert_eq!(error.http_status_code(), Some(502));
        assert_eq!(error.http_headers(), Some(&headers));
        assert_eq!(
            error.http_payload(),
            Some(&bytes::Bytes::from_static(b"BAD GATEWAY"))
        );
        assert!(error.to_string().contains("[502]"), "{error}");
        assert!(error.to_string().contains("BAD GATEWAY"), "{error}");
    }

    #[test]
    fn transport_binary_payload() {
        let error = Error::http(
            500,
            HeaderMap::new(),
            bytes::Bytes::from_static(&[0xff, 0xfe]),
        );
        assert!(error.to_string().contains("[500]"), "{error}");
    }
}
