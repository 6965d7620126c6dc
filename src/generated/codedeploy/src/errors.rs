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

/// The errors returned by AWS CodeDeploy.
#[derive(Clone, Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CodeDeployError {
    /// The deployment does not exist for this account and region.
    #[error("{0}")]
    DeploymentDoesNotExist(ServiceError),

    /// The request did not include a deployment id.
    #[error("{0}")]
    DeploymentIdRequired(ServiceError),

    #[error("{0}")]
    InvalidDeploymentId(ServiceError),

    #[error("{0}")]
    Unhandled(ServiceError),
}

impl ServiceException for CodeDeployError {
    fn from_service_error(error: ServiceError) -> Self {
        match error.error_code() {
            Some("DeploymentDoesNotExistException") => Self::DeploymentDoesNotExist(error),
            Some("DeploymentIdRequiredException") => Self::DeploymentIdRequired(error),
            Some("InvalidDeploymentIdException") => Self::InvalidDeploymentId(error),
            _ => Self::Unhandled(error),
        }
    }

    fn service_error(&self) -> &ServiceError {
        match self {
            Self::DeploymentDoesNotExist(e)
            | Self::DeploymentIdRequired(e)
            | Self::InvalidDeploymentId(e)
            | Self::Unhandled(e) => e,
        }
    }
}
