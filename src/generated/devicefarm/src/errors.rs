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

/// The errors returned by AWS Device Farm.
#[derive(Clone, Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DeviceFarmError {
    /// An invalid argument was specified.
    #[error("{0}")]
    Argument(ServiceError),

    /// The requested entity was not found.
    #[error("{0}")]
    NotFound(ServiceError),

    /// A limit was exceeded.
    #[error("{0}")]
    LimitExceeded(ServiceError),

    /// There was a problem with the service account.
    #[error("{0}")]
    ServiceAccount(ServiceError),

    #[error("{0}")]
    Unhandled(ServiceError),
}

impl ServiceException for DeviceFarmError {
    fn from_service_error(error: ServiceError) -> Self {
        match error.error_code() {
            Some("ArgumentException") => Self::Argument(error),
            Some("NotFoundException") => Self::NotFound(error),
            Some("LimitExceededException") => Self::LimitExceeded(error),
            Some("ServiceAccountException") => Self::ServiceAccount(error),
            _ => Self::Unhandled(error),
        }
    }

    fn service_error(&self) -> &ServiceError {
        match self {
            Self::Argument(e)
            | Self::NotFound(e)
            | Self::LimitExceeded(e)
            | Self::ServiceAccount(e)
            | Self::Unhandled(e) => e,
        }
    }
}
