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

/// The errors returned by Amazon Kinesis Firehose.
#[derive(Clone, Debug, thiserror::Error)]
#[non_exhaustive]
pub enum FirehoseError {
    /// The delivery stream was not found.
    #[error("{0}")]
    ResourceNotFound(ServiceError),

    /// Too many delivery streams, or too many requests.
    #[error("{0}")]
    LimitExceeded(ServiceError),

    /// The delivery stream is being created or deleted.
    #[error("{0}")]
    ResourceInUse(ServiceError),

    /// A parameter in the request is not valid.
    #[error("{0}")]
    InvalidArgument(ServiceError),

    /// An error code not listed above.
    #[error("{0}")]
    Unhandled(ServiceError),
}

impl ServiceException for FirehoseError {
    fn from_service_error(error: ServiceError) -> Self {
        match error.error_code() {
            Some("ResourceNotFoundException") => Self::ResourceNotFound(error),
            Some("LimitExceededException") => Self::LimitExceeded(error),
            Some("ResourceInUseException") => Self::ResourceInUse(error),
            Some("InvalidArgumentException") => Self::InvalidArgument(error),
            _ => Self::Unhandled(error),
        }
    }

    fn service_error(&self) -> &ServiceError {
        match self {
            Self::ResourceNotFound(e)
            | Self::LimitExceeded(e)
            | Self::ResourceInUse(e)
            | Self::InvalidArgument(e)
            | Self::Unhandled(e) => e,
        }
    }
}
