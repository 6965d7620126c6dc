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

use super::{Error, ServiceError};

/// Typed errors for one service.
///
/// Each service crate defines an enum with one variant per documented error
/// condition, plus an `Unhandled` variant for error codes it does not know.
/// The variants carry the full [ServiceError], so the message, request id and
/// status code are always available.
///
/// # Example
/// ```
/// use cloud_sdk_gax::error::{Error, ServiceError, ServiceErrorBuilder, ServiceException};
///
/// #[derive(Debug, thiserror::Error)]
/// enum MyServiceError {
///     #[error("{0}")]
///     NotFound(ServiceError),
///     #[error("{0}")]
///     Unhandled(ServiceError),
/// }
///
/// impl ServiceException for MyServiceError {
///     fn from_service_error(error: ServiceError) -> Self {
///         match error.error_code() {
///             Some("NotFoundException") => Self::NotFound(error),
///             _ => Self::Unhandled(error),
///         }
///     }
///     fn service_error(&self) -> &ServiceError {
///         match self {
///             Self::NotFound(e) | Self::Unhandled(e) => e,
///         }
///     }
/// }
///
/// let error = Error::service(
///     ServiceErrorBuilder::new("no such thing").with_error_code("NotFoundException").build());
/// let typed = MyServiceError::from_error(&error);
/// assert!(matches!(typed, Some(MyServiceError::NotFound(_))));
/// assert_eq!(typed.map(|e| e.message().to_string()), Some("no such thing".to_string()));
/// ```
pub trait ServiceException: std::error::Error + Sized {
    /// Classifies a service error by its error code.
    fn from_service_error(error: ServiceError) -> Self;

    /// The underlying service error.
    fn service_error(&self) -> &ServiceError;

    /// The human-readable message reported by the service.
    fn message(&self) -> &str {
        self.service_error().message()
    }

    /// The error code reported by the service.
    fn error_code(&self) -> Option<&str> {
        self.service_error().error_code()
    }

    /// Classifies the service error in `error`, if there is one.
    ///
    /// Returns `None` for client-side errors such as serialization failures.
    fn from_error(error: &Error) -> Option<Self> {
        error
            .service_error()
            .cloned()
            .map(Self::from_service_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceErrorBuilder;

    #[derive(Debug, thiserror::Error)]
    enum TestError {
        #[error("limit exceeded: {0}")]
        LimitExceeded(ServiceError),
        #[error("{0}")]
        Unhandled(ServiceError),
    }

    impl ServiceException for TestError {
        fn from_service_error(error: ServiceError) -> Self {
            match error.error_code() {
                Some("LimitExceededException") => Self::LimitExceeded(error),
                _ => Self::Unhandled(error),
            }
        }

        fn service_error(&self) -> &ServiceError {
            match self {
                Self::LimitExceeded(e) => e,
                Self::Unhandled(e) => e,
            }
        }
    }

    #[test]
    fn known_code() {
        let error = ServiceErrorBuilder::new("too many")
            .with_error_code("LimitExceededException")
            .build();
        let got = TestError::from_service_error(error);
        assert!(matches!(got, TestError::LimitExceeded(_)), "{got:?}");
        assert_eq!(got.message(), "too many");
        assert_eq!(got.error_code(), Some("LimitExceededException"));
        assert!(got.to_string().contains("too many"), "{got}");
    }

    #[test]
    fn unknown_code() {
        let error = ServiceErrorBuilder::new("oops")
            .with_error_code("SomethingNewException")
            .build();
        let got = TestError::from_service_error(error);
        assert!(matches!(got, TestError::Unhandled(_)), "{got:?}");
    }

    #[test]
    fn from_client_error() {
        let error = Error::ser("bad input");
        assert!(TestError::from_error(&error).is_none());
    }
}
