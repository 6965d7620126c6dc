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

//! The JSON protocol: `POST /` with an `X-Amz-Target` header naming the
//! operation and a JSON object body.
//!
//! Request records are plain `serde` types. Unset (`None`) fields are skipped,
//! so the keys in the body are exactly the fields set by the application.
//! Responses are parsed with a streaming deserializer: unknown keys are
//! ignored, and `null` values leave the field unset.

use crate::Result;
use crate::error::{Error, ServiceError, ServiceErrorBuilder};
use crate::marshaller::{Marshaller, Unmarshaller};
use crate::request::Request;
use crate::response::HttpResponse;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

/// The header naming the operation.
pub const TARGET_HEADER: &str = "X-Amz-Target";

const ERROR_TYPE_HEADER: &str = "x-amzn-ErrorType";
const REQUEST_ID_HEADER: &str = "x-amzn-RequestId";

/// The per-service constants of the JSON protocol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceMetadata {
    /// The service name used in errors and logs, e.g. `AmazonKinesisFirehose`.
    pub service_name: &'static str,
    /// The prefix of the `X-Amz-Target` header, e.g. `Firehose_20150804`.
    pub target_prefix: &'static str,
    /// The protocol version in the content type, `1.0` or `1.1`.
    pub json_version: &'static str,
    /// The prefix of the default endpoint, e.g. `firehose`.
    pub endpoint_prefix: &'static str,
}

impl ServiceMetadata {
    /// The `Content-Type` for requests, e.g. `application/x-amz-json-1.1`.
    pub fn content_type(&self) -> String {
        format!("application/x-amz-json-{}", self.json_version)
    }
}

/// An operation using the JSON protocol.
///
/// Implemented by the request record of each operation.
pub trait JsonOperation: serde::Serialize {
    /// The response record.
    type Output: DeserializeOwned + Default;

    /// The operation name, e.g. `DescribeDeliveryStream`.
    const NAME: &'static str;

    fn metadata() -> &'static ServiceMetadata;
}

#[derive(thiserror::Error, Debug)]
enum MarshallError {
    #[error("Unable to marshall request to JSON: {0}")]
    Json(#[source] serde_json::Error),
}

/// Marshalls any [JsonOperation].
///
/// # Example
/// ```
/// # use cloud_sdk_gax::json_protocol::{JsonMarshaller, JsonOperation, ServiceMetadata};
/// # use cloud_sdk_gax::marshaller::Marshaller;
/// #[derive(serde::Serialize)]
/// #[serde(rename_all = "PascalCase")]
/// struct ListThingsRequest { limit: Option<i32> }
///
/// const METADATA: ServiceMetadata = ServiceMetadata {
///     service_name: "Things",
///     target_prefix: "Things_20250101",
///     json_version: "1.1",
///     endpoint_prefix: "things",
/// };
///
/// impl JsonOperation for ListThingsRequest {
///     type Output = serde_json::Value;
///     const NAME: &'static str = "ListThings";
///     fn metadata() -> &'static ServiceMetadata { &METADATA }
/// }
///
/// let request = JsonMarshaller.marshall(&ListThingsRequest { limit: Some(10) })?;
/// assert_eq!(request.header("X-Amz-Target"), Some("Things_20250101.ListThings"));
/// assert_eq!(request.content().as_ref(), br#"{"Limit":10}"#);
/// # Ok::<(), cloud_sdk_gax::error::Error>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonMarshaller;

impl<T: JsonOperation> Marshaller<T> for JsonMarshaller {
    fn marshall(&self, input: &T) -> Result<Request> {
        marshall(T::metadata(), T::NAME, input)
    }
}

/// Creates the request for `operation` with `input` as the body.
pub fn marshall<T>(metadata: &ServiceMetadata, operation: &str, input: &T) -> Result<Request>
where
    T: serde::Serialize + ?Sized,
{
    let _span = tracing::debug_span!(
        "marshall",
        service = metadata.service_name,
        operation = operation
    )
    .entered();
    let content = serde_json::to_vec(input).map_err(|e| Error::ser(MarshallError::Json(e)))?;
    let length = content.len();
    let request = Request::new(metadata.service_name, metadata.endpoint_prefix)
        .set_method(http::Method::POST)
        .set_resource_path("/")
        .add_header(
            TARGET_HEADER,
            &format!("{}.{operation}", metadata.target_prefix),
        )?
        .add_header("Content-Type", &metadata.content_type())?
        .add_header("Content-Length", &length.to_string())?
        .set_content(content);
    tracing::debug!(content_length = length, "marshalled JSON request");
    Ok(request)
}

/// Parses a JSON body into `T`.
///
/// The body is read with a streaming deserializer. An empty body, or a body
/// that is just `null`, yields `T::default()`. Trailing content other than
/// whitespace is an error.
pub fn from_slice<T>(body: &[u8]) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    let mut de = serde_json::Deserializer::from_slice(body);
    let value = Option::<T>::deserialize(&mut de).map_err(Error::deser)?;
    de.end().map_err(Error::deser)?;
    Ok(value.unwrap_or_default())
}

/// Parses successful responses into `T`.
#[derive(Debug)]
pub struct JsonUnmarshaller<T> {
    _phantom: PhantomData<fn() -> T>,
}

impl<T> JsonUnmarshaller<T> {
    pub const fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for JsonUnmarshaller<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for JsonUnmarshaller<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for JsonUnmarshaller<T> {}

impl<T> Unmarshaller<T> for JsonUnmarshaller<T>
where
    T: DeserializeOwned + Default,
{
    fn unmarshall(&self, response: &HttpResponse) -> Result<T> {
        from_slice(response.body())
    }
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(rename = "__type")]
    error_type: Option<String>,
    message: Option<String>,
    #[serde(rename = "Message")]
    message_pascal: Option<String>,
}

/// Parses error responses into a [ServiceError].
///
/// The error code is taken from the `x-amzn-ErrorType` header (the text
/// before any `:`), or from the `__type` field (the text after the last `#`).
/// The message is taken from `message` or `Message`.
///
/// Fails with a transport error if the response has neither an error code
/// nor a JSON body.
#[derive(Clone, Copy, Debug)]
pub struct JsonErrorUnmarshaller {
    service_name: &'static str,
}

impl JsonErrorUnmarshaller {
    pub const fn new(service_name: &'static str) -> Self {
        Self { service_name }
    }
}

impl Unmarshaller<ServiceError> for JsonErrorUnmarshaller {
    fn unmarshall(&self, response: &HttpResponse) -> Result<ServiceError> {
        let body = serde_json::from_slice::<ErrorBody>(response.body()).ok();
        let header_code = response
            .header(ERROR_TYPE_HEADER)
            .map(|v| v.split(':').next().unwrap_or(v))
            .filter(|v| !v.is_empty());
        let body_code = body
            .as_ref()
            .and_then(|b| b.error_type.as_deref())
            .map(|v| v.rsplit('#').next().unwrap_or(v))
            .filter(|v| !v.is_empty());
        let code = header_code.or(body_code).map(str::to_string);
        let Some(body) = body.or_else(|| code.as_ref().map(|_| ErrorBody::default())) else {
            return Err(Error::http(
                response.status().as_u16(),
                response.headers().clone(),
                response.body().clone(),
            ));
        };
        let message = body.message.or(body.message_pascal).unwrap_or_default();
        let mut builder = ServiceErrorBuilder::new(message)
            .with_http_status_code(response.status().as_u16())
            .with_service_name(self.service_name)
            .with_headers(response.headers().clone());
        if let Some(code) = code {
            builder = builder.with_error_code(code);
        }
        if let Some(id) = response.header(REQUEST_ID_HEADER) {
            builder = builder.with_request_id(id);
        }
        let error = builder.build();
        tracing::debug!(
            service = self.service_name,
            error_code = error.error_code(),
            status = response.status().as_u16(),
            "parsed service error"
        );
        Ok(error)
    }
}

/// Parses the response for operation `O`.
///
/// Successful responses are parsed into `O::Output`, other responses into an
/// [Error] holding the [ServiceError].
pub fn unmarshall_response<O: JsonOperation>(response: &HttpResponse) -> Result<O::Output> {
    if response.is_success() {
        return JsonUnmarshaller::<O::Output>::new().unmarshall(response);
    }
    let error = JsonErrorUnmarshaller::new(O::metadata().service_name).unmarshall(response)?;
    Err(Error::service(error))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorType;
    use cloud_sdk_test_utils::test_layer::TestLayer;
    use http::StatusCode;
    use serde_json::json;
    use test_case::test_case;
    type TestResult = anyhow::Result<()>;

    const METADATA: ServiceMetadata = ServiceMetadata {
        service_name: "TestService",
        target_prefix: "TestService_20250101",
        json_version: "1.1",
        endpoint_prefix: "test",
    };

    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "PascalCase")]
    struct DescribeThingRequest {
        name: Option<String>,
        limit: Option<i32>,
        tags: Option<Vec<String>>,
    }

    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "PascalCase")]
    struct DescribeThingResponse {
        name: Option<String>,
        enabled: Option<bool>,
        created: Option<wkt::Timestamp>,
    }

    impl JsonOperation for DescribeThingRequest {
        type Output = DescribeThingResponse;
        const NAME: &'static str = "DescribeThing";
        fn metadata() -> &'static ServiceMetadata {
            &METADATA
        }
    }

    #[test]
    fn marshall_request() -> TestResult {
        let input = DescribeThingRequest {
            name: Some("thing".into()),
            limit: Some(5),
            tags: None,
        };
        let request = JsonMarshaller.marshall(&input)?;
        assert_eq!(request.method(), http::Method::POST);
        assert_eq!(request.resource_path(), "/");
        assert_eq!(request.service_name(), "TestService");
        assert_eq!(request.endpoint_prefix(), "test");
        assert_eq!(
            request.header("X-Amz-Target"),
            Some("TestService_20250101.DescribeThing")
        );
        assert_eq!(
            request.header("Content-Type"),
            Some("application/x-amz-json-1.1")
        );
        let length = request.content().len().to_string();
        assert_eq!(request.header("Content-Length"), Some(length.as_str()));
        let body = serde_json::from_slice::<serde_json::Value>(request.content())?;
        assert_eq!(body, json!({"Name": "thing", "Limit": 5}));
        Ok(())
    }

    #[test]
    fn marshall_empty() -> TestResult {
        let request = JsonMarshaller.marshall(&DescribeThingRequest::default())?;
        assert_eq!(request.content().as_ref(), b"{}");
        assert_eq!(request.header("Content-Length"), Some("2"));
        Ok(())
    }

    #[test]
    fn marshall_empty_list() -> TestResult {
        let input = DescribeThingRequest {
            tags: Some(Vec::new()),
            ..Default::default()
        };
        let request = JsonMarshaller.marshall(&input)?;
        assert_eq!(request.content().as_ref(), br#"{"Tags":[]}"#);
        Ok(())
    }

    #[test]
    fn marshall_optional_missing() {
        let got = JsonMarshaller.marshall_optional(None::<&DescribeThingRequest>);
        assert!(matches!(&got, Err(e) if e.is_invalid_argument()), "{got:?}");
    }

    struct Unserializable;
    impl serde::Serialize for Unserializable {
        fn serialize<S>(&self, _serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            Err(serde::ser::Error::custom("simulated failure"))
        }
    }

    #[test]
    fn marshall_error() {
        let got = marshall(&METADATA, "Unserializable", &Unserializable);
        let err = match got {
            Ok(r) => panic!("expected an error, got {r:?}"),
            Err(e) => e,
        };
        assert!(err.is_serialization(), "{err:?}");
        let msg = err.to_string();
        assert!(
            msg.starts_with("Unable to marshall request to JSON:"),
            "{msg}"
        );
        assert!(msg.contains("simulated failure"), "{msg}");
        assert!(err.as_inner::<MarshallError>().is_some(), "{err:?}");
    }

    #[test]
    fn marshall_traces() -> TestResult {
        const TEST_ID: &str = "json_protocol_marshall_traces";
        let guard = TestLayer::initialize(TEST_ID);
        let _ = JsonMarshaller.marshall(&DescribeThingRequest::default())?;
        drop(guard);
        let captured = TestLayer::capture(TEST_ID);
        let span = captured.iter().find(|c| !c.is_event && c.name == "marshall");
        let operation = span.and_then(|s| s.attributes.get("operation"));
        assert_eq!(
            operation.map(String::as_str),
            Some("DescribeThing"),
            "{captured:?}"
        );
        let event = captured.iter().find(|c| c.is_event && c.name == "marshall");
        let length = event.and_then(|e| e.attributes.get("content_length"));
        assert_eq!(length.map(String::as_str), Some("2"), "{captured:?}");
        Ok(())
    }

    #[test]
    fn unmarshall_response() -> TestResult {
        let body = json!({
            "Name": "thing",
            "Enabled": true,
            "Created": 1447361295.25,
            "Unknown": {"Nested": [1, 2, {"Deep": null}]},
        });
        let response = HttpResponse::new(StatusCode::OK).set_body(body.to_string());
        let got = super::unmarshall_response::<DescribeThingRequest>(&response)?;
        let want = DescribeThingResponse {
            name: Some("thing".into()),
            enabled: Some(true),
            created: Some(wkt::Timestamp::new(1447361295, 250_000_000)?),
        };
        assert_eq!(got, want);
        Ok(())
    }

    #[test_case(""; "empty")]
    #[test_case("  \n"; "whitespace")]
    #[test_case("null"; "null document")]
    #[test_case("{}"; "empty object")]
    #[test_case(r#"{"Name": null, "Enabled": null}"#; "null fields")]
    fn unmarshall_default(body: &'static str) -> TestResult {
        let response = HttpResponse::new(StatusCode::OK).set_body(body);
        let got = JsonUnmarshaller::<DescribeThingResponse>::new().unmarshall(&response)?;
        assert_eq!(got, DescribeThingResponse::default());
        Ok(())
    }

    #[test_case("{"; "truncated")]
    #[test_case("[1, 2]"; "array")]
    #[test_case(r#"{"Enabled": "yes"}"#; "bad type")]
    #[test_case("{} {}"; "trailing")]
    fn unmarshall_bad(body: &'static str) {
        let response = HttpResponse::new(StatusCode::OK).set_body(body);
        let got = JsonUnmarshaller::<DescribeThingResponse>::new().unmarshall(&response);
        assert!(matches!(&got, Err(e) if e.is_deserialization()), "{got:?}");
    }

    #[test]
    fn error_from_body() -> TestResult {
        let body = json!({
            "__type": "com.amazon.test#ResourceNotFoundException",
            "message": "Thing abc not found",
        });
        let mut headers = http::HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, http::HeaderValue::from_static("req-1"));
        let response = HttpResponse::new(StatusCode::BAD_REQUEST)
            .set_headers(headers)
            .set_body(body.to_string());
        let got = JsonErrorUnmarshaller::new("TestService").unmarshall(&response)?;
        assert_eq!(got.error_code(), Some("ResourceNotFoundException"));
        assert_eq!(got.message(), "Thing abc not found");
        assert_eq!(got.error_type(), ErrorType::Client);
        assert_eq!(got.http_status_code(), Some(400));
        assert_eq!(got.request_id(), Some("req-1"));
        assert_eq!(got.service_name(), Some("TestService"));
        Ok(())
    }

    #[test]
    fn error_from_header() -> TestResult {
        let mut headers = http::HeaderMap::new();
        headers.insert(
            ERROR_TYPE_HEADER,
            http::HeaderValue::from_static("InternalFailure:http://internal.example.com/"),
        );
        let response = HttpResponse::new(StatusCode::INTERNAL_SERVER_ERROR)
            .set_headers(headers)
            .set_body(r#"{"Message": "try again"}"#);
        let got = JsonErrorUnmarshaller::new("TestService").unmarshall(&response)?;
        assert_eq!(got.error_code(), Some("InternalFailure"));
        assert_eq!(got.message(), "try again");
        assert_eq!(got.error_type(), ErrorType::Service);
        Ok(())
    }

    #[test]
    fn error_header_before_body() -> TestResult {
        let mut headers = http::HeaderMap::new();
        headers.insert(
            ERROR_TYPE_HEADER,
            http::HeaderValue::from_static("ThrottlingException:http://internal.example.com/"),
        );
        let body = json!({
            "__type": "com.amazon.test#ResourceNotFoundException",
            "message": "slow down",
        });
        let response = HttpResponse::new(StatusCode::BAD_REQUEST)
            .set_headers(headers)
            .set_body(body.to_string());
        let got = JsonErrorUnmarshaller::new("TestService").unmarshall(&response)?;
        assert_eq!(got.error_code(), Some("ThrottlingException"));
        assert_eq!(got.message(), "slow down");
        Ok(())
    }

    #[test]
    fn error_header_without_body() -> TestResult {
        let mut headers = http::HeaderMap::new();
        headers.insert(
            ERROR_TYPE_HEADER,
            http::HeaderValue::from_static("ThrottlingException"),
        );
        let response = HttpResponse::new(StatusCode::BAD_REQUEST).set_headers(headers);
        let got = JsonErrorUnmarshaller::new("TestService").unmarshall(&response)?;
        assert_eq!(got.error_code(), Some("ThrottlingException"));
        assert_eq!(got.message(), "");
        Ok(())
    }

    #[test]
    fn error_without_payload() {
        let response = HttpResponse::new(StatusCode::BAD_GATEWAY).set_body("<html>oops</html>");
        let got = JsonErrorUnmarshaller::new("TestService").unmarshall(&response);
        let err = match got {
            Ok(e) => panic!("expected an error, got {e:?}"),
            Err(e) => e,
        };
        assert!(err.is_transport(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(502));
    }

    #[test]
    fn unmarshall_response_error() {
        let body = json!({"__type": "LimitExceededException", "message": "slow down"});
        let response = HttpResponse::new(StatusCode::BAD_REQUEST).set_body(body.to_string());
        let got = super::unmarshall_response::<DescribeThingRequest>(&response);
        let err = match got {
            Ok(r) => panic!("expected an error, got {r:?}"),
            Err(e) => e,
        };
        let service = err.service_error();
        assert_eq!(
            service.and_then(|s| s.error_code()),
            Some("LimitExceededException")
        );
        assert_eq!(service.map(|s| s.message()), Some("slow down"));
    }
}
