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


use crate::model::DeleteDBSnapshotRequest;
use crate::{API_VERSION, METADATA};
use gax::Result;
use gax::query_parameter;
use gax::query_protocol::QueryOperation;
use gax::request::{Request, ServiceInfo};

impl QueryOperation for DeleteDBSnapshotRequest {
    const ACTION: &'static str = "DeleteDBSnapshot";
    const VERSION: &'static str = API_VERSION;
    fn metadata() -> &'static ServiceInfo {
        &METADATA
    }
    fn add_parameters(&self, request: Request) -> Result<Request> {
        query_parameter::add(request, "DBSnapshotIdentifier", &self.db_snapshot_identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloud_sdk_test_utils::tracing::enable_tracing;
    use gax::marshaller::Marshaller;
    use gax::query_protocol::{CONTENT_TYPE, QueryMarshaller};
    use pretty_assertions::assert_eq;
    type TestResult = anyhow::Result<()>;

    #[test]
    fn marshall() -> TestResult {
        let _guard = enable_tracing();
        let input =
            DeleteDBSnapshotRequest::new().set_db_snapshot_identifier("rds:mydb-2015-11-12");
        let request = QueryMarshaller.marshall(&input)?;
        assert_eq!(request.service_name(), "AmazonRDS");
        assert_eq!(request.endpoint_prefix(), "rds");
        assert_eq!(request.method(), http::Method::POST);
        assert_eq!(request.resource_path(), "/");
        assert_eq!(request.header("Content-Type"), Some(CONTENT_TYPE));
        assert!(request.parameters().is_empty(), "{request:?}");
        let body = std::str::from_utf8(request.content())?;
        assert_eq!(
            body,
            "Action=DeleteDBSnapshot&Version=2014-10-31&DBSnapshotIdentifier=rds%3Amydb-2015-11-12"
        );
        let length = body.len().to_string();
        assert_eq!(request.header("Content-Length"), Some(length.as_str()));
        Ok(())
    }

    #[test]
    fn marshall_unset() -> TestResult {
        let request = QueryMarshaller.marshall(&DeleteDBSnapshotRequest::new())?;
        assert_eq!(
            request.content().as_ref(),
            b"Action=DeleteDBSnapshot&Version=2014-10-31"
        );
        Ok(())
    }

    #[test]
    fn marshall_optional() {
        let got = QueryMarshaller.marshall_optional(None::<&DeleteDBSnapshotRequest>);
        assert!(matches!(&got, Err(e) if e.is_invalid_argument()), "{got:?}");
    }
}
