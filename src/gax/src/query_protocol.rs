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

//! The query protocol: `POST /` with the `Action`, the `Version`, and the
//! request fields as a form-encoded body.

use crate::Result;
use crate::marshaller::Marshaller;
use crate::query_parameter::QueryParameter;
use crate::request::{Request, ServiceInfo, encode_parameters};

/// The `Content-Type` of query protocol requests.
pub const CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=utf-8";

/// An operation using the query protocol.
///
/// Implemented by the request record of each operation.
pub trait QueryOperation {
    /// The value of the `Action` parameter, e.g. `DeleteDBSnapshot`.
    const ACTION: &'static str;

    /// The value of the `Version` parameter, e.g. `2014-10-31`.
    const VERSION: &'static str;

    fn metadata() -> &'static ServiceInfo;

    /// Adds the fields of the request as parameters.
    fn add_parameters(&self, request: Request) -> Result<Request>;
}

/// Marshalls any [QueryOperation].
#[derive(Clone, Copy, Debug, Default)]
pub struct QueryMarshaller;

impl<T: QueryOperation> Marshaller<T> for QueryMarshaller {
    fn marshall(&self, input: &T) -> Result<Request> {
        let metadata = T::metadata();
        let _span = tracing::debug_span!(
            "marshall",
            service = metadata.service_name,
            operation = T::ACTION
        )
        .entered();
        let request = metadata
            .request()
            .add_parameter("Action", T::ACTION)
            .add_parameter("Version", T::VERSION);
        let mut request = input.add_parameters(request)?;
        let content = encode_parameters(&request.take_parameters());
        let length = content.len();
        let request = request
            .set_method(http::Method::POST)
            .set_resource_path("/")
            .add_header("Content-Type", CONTENT_TYPE)?
            .add_header("Content-Length", &length.to_string())?
            .set_content(content);
        tracing::debug!(content_length = length, "marshalled query request");
        Ok(request)
    }
}

/// Adds a list as `{name}.member.1`, `{name}.member.2`, ...
///
/// Nothing is added for `None`. An empty list adds `{name}` with an empty
/// value, so the service can tell it apart from a missing list.
pub fn add_list<T>(request: Request, name: &str, values: &Option<Vec<T>>) -> Result<Request>
where
    T: QueryParameter,
{
    let Some(values) = values else {
        return Ok(request);
    };
    if values.is_empty() {
        return Ok(request.add_parameter(name, ""));
    }
    values
        .iter()
        .enumerate()
        .try_fold(request, |request, (i, v)| {
            v.add(request, &format!("{name}.member.{}", i + 1))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query_parameter;
    type TestResult = anyhow::Result<()>;

    const METADATA: ServiceInfo = ServiceInfo {
        service_name: "TestService",
        endpoint_prefix: "test",
    };

    #[derive(Default)]
    struct DeleteThingRequest {
        thing_id: Option<String>,
        force: Option<bool>,
        tags: Option<Vec<String>>,
    }

    impl QueryOperation for DeleteThingRequest {
        const ACTION: &'static str = "DeleteThing";
        const VERSION: &'static str = "2025-01-01";
        fn metadata() -> &'static ServiceInfo {
            &METADATA
        }
        fn add_parameters(&self, request: Request) -> Result<Request> {
            let request = query_parameter::add(request, "ThingId", &self.thing_id)?;
            let request = query_parameter::add(request, "Force", &self.force)?;
            add_list(request, "Tags", &self.tags)
        }
    }

    #[test]
    fn marshall() -> TestResult {
        let input = DeleteThingRequest {
            thing_id: Some("my thing".into()),
            force: Some(true),
            tags: Some(vec!["a".into(), "b&c".into()]),
        };
        let request = QueryMarshaller.marshall(&input)?;
        assert_eq!(request.method(), http::Method::POST);
        assert_eq!(request.resource_path(), "/");
        assert!(request.parameters().is_empty(), "{request:?}");
        assert_eq!(request.header("Content-Type"), Some(CONTENT_TYPE));
        let body = std::str::from_utf8(request.content())?;
        assert_eq!(
            body,
            "Action=DeleteThing&Version=2025-01-01&ThingId=my%20thing&Force=true&Tags.member.1=a&Tags.member.2=b%26c"
        );
        let length = body.len().to_string();
        assert_eq!(request.header("Content-Length"), Some(length.as_str()));
        Ok(())
    }

    #[test]
    fn marshall_empty() -> TestResult {
        let request = QueryMarshaller.marshall(&DeleteThingRequest::default())?;
        assert_eq!(
            request.content().as_ref(),
            b"Action=DeleteThing&Version=2025-01-01"
        );
        Ok(())
    }

    #[test]
    fn empty_list() -> TestResult {
        let request = Request::new("TestService", "test");
        let request = add_list(request, "Tags", &Some(Vec::<String>::new()))?;
        assert_eq!(request.query_string(), "Tags=");
        Ok(())
    }
}
