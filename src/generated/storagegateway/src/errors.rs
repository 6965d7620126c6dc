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

/// The errors returned by AWS Storage Gateway.
#[derive(Clone, Debug, thiserror::Error)]
#[non_exhaustive]
pub enum StorageGatewayError {
    /// The request is not valid, e.g. the gateway does not exist.
    #[error("{0}")]
    InvalidGatewayRequest(ServiceError),

    /// The service failed to process the request.
    #[error("{0}")]
    InternalServerError(ServiceError),

    /// An error code not listed above.
    #[error("{0}")]
    Unhandled(ServiceError),
}

impl ServiceException for StorageGatewayError {
    fn from_service_error(error: ServiceError) -> Self {
        match error.error_code() {
            Some("InvalidGatewayRequestException") => Self::InvalidGatewayRequest(error),
            Some("InternalServerError") => Self::InternalServerError(error),
            _ => Self::Unhandled(error),
        }
    }

    fn service_error(&self) -> &ServiceError {
        match self {
            Self::InvalidGatewayRequest(e) | Self::InternalServerError(e) | Self::Unhandled(e) => e,
        }
    }
}
