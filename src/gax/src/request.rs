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

use crate::Result;
use crate::client_config::ClientConfig;
use crate::error::Error;
use crate::request_parameter::UNRESERVED;
use bytes::Bytes;
use http::{HeaderMap, HeaderName, HeaderValue, Method};

/// The service constants used by the query and REST protocols.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceInfo {
    /// The service name used in errors and logs, e.g. `AmazonRDS`.
    pub service_name: &'static str,
    /// The prefix of the default endpoint, e.g. `rds`.
    pub endpoint_prefix: &'static str,
}

impl ServiceInfo {
    /// An empty request for this service.
    pub fn request(&self) -> Request {
        Request::new(self.service_name, self.endpoint_prefix)
    }
}

/// An HTTP request created by a marshaller.
///
/// The request is independent of any HTTP client. It holds the method, the
/// resource path, the headers, the query parameters and the body. Use
/// [to_http][Request::to_http] to resolve the endpoint and create an
/// [http::Request].
///
/// # Example
/// ```
/// # use cloud_sdk_gax::request::Request;
/// # use cloud_sdk_gax::client_config::ClientConfig;
/// let request = Request::new("MyService", "myservice")
///     .set_method(http::Method::GET)
///     .set_resource_path("/2013-01-01/search")
///     .add_parameter("q", "star wars")
///     .add_header("accept", "application/json")?;
/// let http = request.to_http(&ClientConfig::new())?;
/// assert_eq!(
///     http.uri().to_string(),
///     "https://myservice.us-east-1.amazonaws.com/2013-01-01/search?q=star%20wars"
/// );
/// # Ok::<(), cloud_sdk_gax::error::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Request {
    service_name: String,
    endpoint_prefix: String,
    method: Method,
    resource_path: String,
    headers: HeaderMap,
    parameters: Vec<(String, String)>,
    content: Bytes,
}

impl Request {
    /// Creates an empty `POST /` request for a service.
    pub fn new<S, P>(service_name: S, endpoint_prefix: P) -> Self
    where
        S: Into<String>,
        P: Into<String>,
    {
        Self {
            service_name: service_name.into(),
            endpoint_prefix: endpoint_prefix.into(),
            method: Method::POST,
            resource_path: "/".to_string(),
            headers: HeaderMap::new(),
            parameters: Vec::new(),
            content: Bytes::new(),
        }
    }

    /// The name of the service, used in error messages and logs.
    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// The prefix of the default endpoint, e.g. `firehose`.
    pub fn endpoint_prefix(&self) -> &str {
        &self.endpoint_prefix
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The path, always starting with `/`. Path parameters are already
    /// percent-encoded.
    pub fn resource_path(&self) -> &str {
        &self.resource_path
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns the value of header `name`, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// The query parameters, in insertion order. The values are not encoded.
    pub fn parameters(&self) -> &[(String, String)] {
        &self.parameters
    }

    pub fn content(&self) -> &Bytes {
        &self.content
    }

    pub fn set_method(mut self, v: Method) -> Self {
        self.method = v;
        self
    }

    /// Sets the resource path. A leading `/` is added if missing.
    pub fn set_resource_path<T: Into<String>>(mut self, v: T) -> Self {
        let path = v.into();
        self.resource_path = if path.starts_with('/') {
            path
        } else {
            format!("/{path}")
        };
        self
    }

    /// Adds a header, replacing any previous value.
    ///
    /// Fails if the name or value contain characters not allowed in HTTP
    /// headers.
    pub fn add_header(mut self, name: &str, value: &str) -> Result<Self> {
        let name = HeaderName::from_bytes(name.as_bytes()).map_err(Error::ser)?;
        let value = HeaderValue::from_str(value).map_err(Error::ser)?;
        self.headers.insert(name, value);
        Ok(self)
    }

    /// Appends a query parameter.
    pub fn add_parameter<K, V>(mut self, name: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.parameters.push((name.into(), value.into()));
        self
    }

    /// Removes and returns the query parameters.
    pub fn take_parameters(&mut self) -> Vec<(String, String)> {
        std::mem::take(&mut self.parameters)
    }

    pub fn set_content<T: Into<Bytes>>(mut self, v: T) -> Self {
        self.content = v.into();
        self
    }

    /// The query string, without the leading `?`.
    pub fn query_string(&self) -> String {
        encode_parameters(&self.parameters)
    }

    /// Creates the [http::Request] for this request.
    ///
    /// The endpoint is the configured override, or the default endpoint for
    /// the region. Adds the `User-Agent` header unless already present.
    pub fn to_http(&self, config: &ClientConfig) -> Result<http::Request<Bytes>> {
        let endpoint = config.resolve_endpoint(&self.endpoint_prefix);
        let mut uri = format!("{endpoint}{}", self.resource_path);
        if !self.parameters.is_empty() {
            uri.push('?');
            uri.push_str(&self.query_string());
        }
        let mut builder = http::Request::builder()
            .method(self.method.clone())
            .uri(uri.as_str());
        if let Some(headers) = builder.headers_mut() {
            headers.extend(self.headers.clone());
            if !headers.contains_key(http::header::USER_AGENT) {
                let value = HeaderValue::from_str(config.user_agent()).map_err(Error::ser)?;
                headers.insert(http::header::USER_AGENT, value);
            }
        }
        let request = builder.body(self.content.clone()).map_err(Error::binding)?;
        if config.tracing_enabled() {
            tracing::debug!(
                service = self.service_name.as_str(),
                method = %self.method,
                uri = uri.as_str(),
                content_length = self.content.len(),
                "created HTTP request"
            );
        }
        Ok(request)
    }
}

/// Percent-encodes `name=value` pairs joined by `&`.
pub(crate) fn encode_parameters(parameters: &[(String, String)]) -> String {
    parameters
        .iter()
        .map(|(k, v)| {
            format!(
                "{}={}",
                percent_encoding::utf8_percent_encode(k, UNRESERVED),
                percent_encoding::utf8_percent_encode(v, UNRESERVED)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;
    type TestResult = anyhow::Result<()>;

    #[test]
    fn service_info() {
        const INFO: ServiceInfo = ServiceInfo {
            service_name: "AmazonRDS",
            endpoint_prefix: "rds",
        };
        let request = INFO.request();
        assert_eq!(request.service_name(), "AmazonRDS");
        assert_eq!(request.endpoint_prefix(), "rds");
        assert_eq!(request.method(), Method::POST);
    }

    #[test]
    fn defaults() {
        let request = Request::new("AmazonKinesisFirehose", "firehose");
        assert_eq!(request.service_name(), "AmazonKinesisFirehose");
        assert_eq!(request.endpoint_prefix(), "firehose");
        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.resource_path(), "/");
        assert!(request.headers().is_empty());
        assert!(request.parameters().is_empty());
        assert!(request.content().is_empty());
    }

    #[test_case("", "/")]
    #[test_case("/", "/")]
    #[test_case("a/b", "/a/b")]
    #[test_case("/a/b", "/a/b")]
    fn resource_path(input: &str, want: &str) {
        let request = Request::new("s", "p").set_resource_path(input);
        assert_eq!(request.resource_path(), want);
    }

    #[test]
    fn headers() -> TestResult {
        let request = Request::new("s", "p")
            .add_header("X-Amz-Target", "Firehose_20150804.ListDeliveryStreams")?
            .add_header("x-amz-target", "Firehose_20150804.DescribeDeliveryStream")?;
        assert_eq!(
            request.header("X-Amz-Target"),
            Some("Firehose_20150804.DescribeDeliveryStream")
        );
        assert_eq!(request.headers().len(), 1);
        Ok(())
    }

    #[test]
    fn bad_header() {
        let got = Request::new("s", "p").add_header("x-test", "line\nbreak");
        assert!(matches!(&got, Err(e) if e.is_serialization()), "{got:?}");
        let got = Request::new("s", "p").add_header("bad name", "value");
        assert!(matches!(&got, Err(e) if e.is_serialization()), "{got:?}");
    }

    #[test]
    fn query_string() {
        let request = Request::new("s", "p")
            .add_parameter("q", "a b&c")
            .add_parameter("size", "10")
            .add_parameter("fq", "title:'star~wars'");
        assert_eq!(
            request.query_string(),
            "q=a%20b%26c&size=10&fq=title%3A%27star~wars%27"
        );
    }

    #[test]
    fn to_http() -> TestResult {
        let request = Request::new("s", "search")
            .set_method(Method::GET)
            .set_resource_path("/2013-01-01/search")
            .add_parameter("format", "sdk")
            .add_header("x-test", "abc")?
            .set_content("payload");
        let http = request.to_http(&ClientConfig::new().set_region("eu-west-1"))?;
        assert_eq!(http.method(), Method::GET);
        assert_eq!(
            http.uri().to_string(),
            "https://search.eu-west-1.amazonaws.com/2013-01-01/search?format=sdk"
        );
        assert_eq!(
            http.headers().get("x-test").map(|v| v.as_bytes()),
            Some(b"abc".as_slice())
        );
        let agent = http
            .headers()
            .get(http::header::USER_AGENT)
            .and_then(|v| v.to_str().ok());
        assert_eq!(agent, Some(crate::client_config::DEFAULT_USER_AGENT));
        assert_eq!(http.body(), &Bytes::from_static(b"payload"));
        Ok(())
    }

    #[test]
    fn to_http_endpoint_override() -> TestResult {
        let request = Request::new("s", "firehose").add_header("user-agent", "custom")?;
        let config = ClientConfig::new().set_endpoint("http://localhost:4566/");
        let http = request.to_http(&config)?;
        assert_eq!(http.uri().to_string(), "http://localhost:4566/");
        let agent = http
            .headers()
            .get(http::header::USER_AGENT)
            .and_then(|v| v.to_str().ok());
        assert_eq!(agent, Some("custom"));
        Ok(())
    }

    #[test]
    fn to_http_bad_endpoint() {
        let request = Request::new("s", "firehose");
        let config = ClientConfig::new().set_endpoint("not a valid uri");
        let got = request.to_http(&config);
        assert!(matches!(&got, Err(e) if e.is_binding()), "{got:?}");
    }

    #[test]
    fn to_http_logs() -> TestResult {
        use cloud_sdk_test_utils::test_layer::TestLayer;
        const TEST_ID: &str = "request_to_http_logs";
        let guard = TestLayer::initialize(TEST_ID);
        let request = Request::new("MyService", "p");
        let _ = request.to_http(&ClientConfig::new().enable_tracing())?;
        drop(guard);
        let captured = TestLayer::capture(TEST_ID);
        let event = captured.iter().find(|c| c.is_event);
        let service = event.and_then(|e| e.attributes.get("service"));
        assert_eq!(service.map(String::as_str), Some("MyService"), "{captured:?}");
        Ok(())
    }
}
