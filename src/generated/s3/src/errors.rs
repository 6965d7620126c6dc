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

/// The errors returned by Amazon S3 for object metadata requests.
#[derive(Clone, Debug, thiserror::Error)]
#[non_exhaustive]
pub enum S3Error {
    /// The object, or the requested version, does not exist.
    #[error("{0}")]
    NoSuchKey(ServiceError),

    /// The bucket does not exist.
    #[error("{0}")]
    NoSuchBucket(ServiceError),

    #[error("{0}")]
    AccessDenied(ServiceError),

    #[error("{0}")]
    Unhandled(ServiceError),
}

impl ServiceException for S3Error {
    fn from_service_error(error: ServiceError) -> Self {
        match error.error_code() {
            Some("NoSuchKey") => Self::NoSuchKey(error),
            Some("NoSuchBucket") => Self::NoSuchBucket(error),
            Some("AccessDenied") => Self::AccessDenied(error),
            _ => Self::Unhandled(error),
        }
    }

    fn service_error(&self) -> &ServiceError {
        match self {
            Self::NoSuchKey(e)
            | Self::NoSuchBucket(e)
            | Self::AccessDenied(e)
            | Self::Unhandled(e) => e,
        }
    }
}
