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

use gax::error::{ServiceError, ServiceException};

/// The errors returned by the DynamoDB item operations.
#[derive(Clone, Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DynamoDbError {
    /// The expected attribute values did not match.
    #[error("the conditional request failed: {0}")]
    ConditionalCheckFailed(ServiceError),

    /// The table does not exist, or is not active.
    #[error("the table was not found: {0}")]
    ResourceNotFound(ServiceError),

    /// The request rate is above the provisioned throughput.
    #[error("the provisioned throughput was exceeded: {0}")]
    ProvisionedThroughputExceeded(ServiceError),

    /// An error code not listed above.
    #[error("{0}")]
    Unhandled(ServiceError),
}

impl ServiceException for DynamoDbError {
    fn from_service_error(error: ServiceError) -> Self {
        match error.error_code() {
            Some("ConditionalCheckFailedException") => Self::ConditionalCheckFailed(error),
            Some("ResourceNotFoundException") => Self::ResourceNotFound(error),
            Some("ProvisionedThroughputExceededException") => {
                Self::ProvisionedThroughputExceeded(error)
            }
            _ => Self::Unhandled(error),
        }
    }

    fn service_error(&self) -> &ServiceError {
        match self {
            Self::ConditionalCheckFailed(e)
            | Self::ResourceNotFound(e)
            | Self::ProvisionedThroughputExceeded(e)
            | Self::Unhandled(e) => e,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::error::ServiceErrorBuilder;
    use test_case::test_case;

    #[test_case("ConditionalCheckFailedException"; "conditional")]
    #[test_case("ResourceNotFoundException"; "not found")]
    #[test_case("ProvisionedThroughputExceededException"; "throughput")]
    #[test_case("ValidationException"; "unhandled")]
    fn classify(code: &str) {
        let error = ServiceErrorBuilder::new("details")
            .with_error_code(code)
            .build();
        let got = DynamoDbError::from_service_error(error);
        let matched = match code {
            "ConditionalCheckFailedException" => {
                matches!(got, DynamoDbError::ConditionalCheckFailed(_))
            }
            "ResourceNotFoundException" => matches!(got, DynamoDbError::ResourceNotFound(_)),
            "ProvisionedThroughputExceededException" => {
                matches!(got, DynamoDbError::ProvisionedThroughputExceeded(_))
            }
            _ => matches!(got, DynamoDbError::Unhandled(_)),
        };
        assert!(matched, "{got:?}");
        assert_eq!(got.message(), "details");
        assert_eq!(got.error_code(), Some(code));
    }
}
