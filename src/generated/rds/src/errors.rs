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

/// The errors returned by Amazon RDS.
///
/// The query protocol reports error codes without the `Exception` suffix.
#[derive(Clone, Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RdsError {
    /// The snapshot does not exist.
    #[error("{0}")]
    DBSnapshotNotFound(ServiceError),

    /// The snapshot is not in the `available` state.
    #[error("{0}")]
    InvalidDBSnapshotState(ServiceError),

    #[error("{0}")]
    Unhandled(ServiceError),
}

impl ServiceException for RdsError {
    fn from_service_error(error: ServiceError) -> Self {
        match error.error_code() {
            Some("DBSnapshotNotFound") => Self::DBSnapshotNotFound(error),
            Some("InvalidDBSnapshotState") => Self::InvalidDBSnapshotState(error),
            _ => Self::Unhandled(error),
        }
    }

    fn service_error(&self) -> &ServiceError {
        match self {
            Self::DBSnapshotNotFound(e) | Self::InvalidDBSnapshotState(e) | Self::Unhandled(e) => e,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::error::{Error, ServiceErrorBuilder};
    use test_case::test_case;

    #[test_case("DBSnapshotNotFound")]
    #[test_case("InvalidDBSnapshotState")]
    #[test_case("SnapshotQuotaExceeded")]
    fn from_error(code: &str) {
        let error = Error::service(
            ServiceErrorBuilder::new("DBSnapshot mydbsnapshot not found.")
                .with_error_code(code)
                .with_http_status_code(404_u16)
                .with_service_name("AmazonRDS")
                .build(),
        );
        let typed = RdsError::from_error(&error);
        let matched = match (code, &typed) {
            ("DBSnapshotNotFound", Some(RdsError::DBSnapshotNotFound(_))) => true,
            ("InvalidDBSnapshotState", Some(RdsError::InvalidDBSnapshotState(_))) => true,
            ("SnapshotQuotaExceeded", Some(RdsError::Unhandled(_))) => true,
            _ => false,
        };
        assert!(matched, "{typed:?}");
        assert_eq!(
            typed.as_ref().map(|t| t.message()),
            Some("DBSnapshot mydbsnapshot not found.")
        );
    }

    #[test]
    fn not_a_service_error() {
        let error = Error::invalid_argument("bad input");
        assert!(RdsError::from_error(&error).is_none());
    }
}
