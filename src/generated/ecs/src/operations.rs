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


use crate::METADATA;
use crate::model::{ListTaskDefinitionFamiliesRequest, ListTaskDefinitionFamiliesResult};
use gax::json_protocol::{JsonOperation, ServiceMetadata};

impl JsonOperation for ListTaskDefinitionFamiliesRequest {
    type Output = ListTaskDefinitionFamiliesResult;
    const NAME: &'static str = "ListTaskDefinitionFamilies";
    fn metadata() -> &'static ServiceMetadata {
        &METADATA
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::EcsError;
    use gax::error::ServiceException;
    use gax::json_protocol::{JsonMarshaller, unmarshall_response};
    use gax::marshaller::Marshaller;
    use gax::response::HttpResponse;
    use http::StatusCode;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;
    type Result = anyhow::Result<()>;

    #[test_case(ListTaskDefinitionFamiliesRequest::new(), json!({}); "empty")]
    #[test_case(ListTaskDefinitionFamiliesRequest::new().set_family_prefix("hpcc"), json!({"familyPrefix": "hpcc"}); "prefix")]
    #[test_case(
        ListTaskDefinitionFamiliesRequest::new().set_next_token("t").set_max_results(25),
        json!({"nextToken": "t", "maxResults": 25}); "paged")]
    fn marshall(input: ListTaskDefinitionFamiliesRequest, want: serde_json::Value) -> Result {
        let request = JsonMarshaller.marshall(&input)?;
        assert_eq!(request.service_name(), "AmazonECS");
        assert_eq!(
            request.header("X-Amz-Target"),
            Some("AmazonEC2ContainerServiceV20141113.ListTaskDefinitionFamilies")
        );
        let got = serde_json::from_slice::<serde_json::Value>(request.content())?;
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn unmarshall() -> Result {
        let body = json!({"families": ["hpcc", "hpcc-c4-8xlarge", null], "nextToken": null});
        let response = HttpResponse::new(StatusCode::OK).set_body(body.to_string());
        let got = unmarshall_response::<ListTaskDefinitionFamiliesRequest>(&response)?;
        assert_eq!(got.families(), ["hpcc", "hpcc-c4-8xlarge"]);
        assert_eq!(got.next_token, None);
        Ok(())
    }

    #[test]
    fn unmarshall_null() -> Result {
        let response = HttpResponse::new(StatusCode::OK).set_body("null");
        let got = unmarshall_response::<ListTaskDefinitionFamiliesRequest>(&response)?;
        assert_eq!(got, ListTaskDefinitionFamiliesResult::default());
        Ok(())
    }

    #[test_case("ServerException", StatusCode::INTERNAL_SERVER_ERROR)]
    #[test_case("ClientException", StatusCode::BAD_REQUEST)]
    #[test_case("InvalidParameterException", StatusCode::BAD_REQUEST)]
    #[test_case("AccessDeniedException", StatusCode::FORBIDDEN)]
    fn errors(code: &str, status: StatusCode) -> Result {
        let body = json!({"__type": code, "message": "test-only"});
        let response = HttpResponse::new(status).set_body(body.to_string());
        let err = match unmarshall_response::<ListTaskDefinitionFamiliesRequest>(&response) {
            Ok(r) => panic!("expected an error, got {r:?}"),
            Err(e) => e,
        };
        let typed = EcsError::from_error(&err);
        let matched = match (code, &typed) {
            ("ServerException", Some(EcsError::Server(_))) => true,
            ("ClientException", Some(EcsError::Client(_))) => true,
            ("InvalidParameterException", Some(EcsError::InvalidParameter(_))) => true,
            ("AccessDeniedException", Some(EcsError::Unhandled(_))) => true,
            _ => false,
        };
        assert!(matched, "{typed:?}");
        Ok(())
    }
}
