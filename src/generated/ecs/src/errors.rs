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

/// The errors returned by Amazon EC2 Container Service.
#[derive(Clone, Debug, thiserror::Error)]
#[non_exhaustive]
pub enum EcsError {
    /// A server-side failure.
    #[error("{0}")]
    Server(ServiceError),

    /// A client-side failure, e.g. missing permissions or an unknown
    /// identifier.
    #[error("{0}")]
    Client(ServiceError),

    #[error("{0}")]
    InvalidParameter(ServiceError),

    #[error("{0}")]
    Unhandled(ServiceError),
}

impl ServiceException for EcsError {
    fn from_service_error(error: ServiceError) -> Self {
        match error.error_code() {
            Some("ServerException") => Self::Server(error),
            Some("ClientException") => Self::Client(error),
            Some("InvalidParameterException") => Self::InvalidParameter(error),
            _ => Self::Unhandled(error),
        }
    }

    fn service_error(&self) -> &ServiceError {
        match self {
            Self::Server(e) | Self::Client(e) | Self::InvalidParameter(e) | Self::Unhandled(e) => e,
        }
    }
}
