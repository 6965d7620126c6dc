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

/// The errors returned by Amazon CloudSearch Domain.
#[derive(Clone, Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CloudSearchDomainError {
    /// The search request could not be processed, e.g. the query syntax is
    /// not valid.
    #[error("{0}")]
    Search(ServiceError),

    #[error("{0}")]
    Unhandled(ServiceError),
}

impl ServiceException for CloudSearchDomainError {
    fn from_service_error(error: ServiceError) -> Self {
        match error.error_code() {
            Some("SearchException") => Self::Search(error),
            _ => Self::Unhandled(error),
        }
    }

    fn service_error(&self) -> &ServiceError {
        match self {
            Self::Search(e) | Self::Unhandled(e) => e,
        }
    }
}
