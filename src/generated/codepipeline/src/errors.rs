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

/// The errors returned by AWS CodePipeline.
#[derive(Clone, Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CodePipelineError {
    /// The number of pipelines associated with the account exceeds the limit.
    #[error("{0}")]
    LimitExceeded(ServiceError),

    /// The pagination token was not returned by a previous call.
    #[error("{0}")]
    InvalidNextToken(ServiceError),

    /// The request failed validation.
    #[error("{0}")]
    Validation(ServiceError),

    #[error("{0}")]
    Unhandled(ServiceError),
}

impl ServiceException for CodePipelineError {
    fn from_service_error(error: ServiceError) -> Self {
        match error.error_code() {
            Some("LimitExceededException") => Self::LimitExceeded(error),
            Some("InvalidNextTokenException") => Self::InvalidNextToken(error),
            Some("ValidationException") => Self::Validation(error),
            _ => Self::Unhandled(error),
        }
    }

    fn service_error(&self) -> &ServiceError {
        match self {
            Self::LimitExceeded(e)
            | Self::InvalidNextToken(e)
            | Self::Validation(e)
            | Self::Unhandled(e) => e,
        }
    }
}
