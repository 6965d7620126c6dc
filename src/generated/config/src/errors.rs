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

/// The errors returned by AWS Config.
#[derive(Clone, Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// One of the parameters is not valid.
    #[error("{0}")]
    InvalidParameterValue(ServiceError),

    /// The result token is not valid or has expired.
    #[error("{0}")]
    InvalidResultToken(ServiceError),

    /// The rule does not exist.
    #[error("{0}")]
    NoSuchConfigRule(ServiceError),

    #[error("{0}")]
    Unhandled(ServiceError),
}

impl ServiceException for ConfigError {
    fn from_service_error(error: ServiceError) -> Self {
        match error.error_code() {
            Some("InvalidParameterValueException") => Self::InvalidParameterValue(error),
            Some("InvalidResultTokenException") => Self::InvalidResultToken(error),
            Some("NoSuchConfigRuleException") => Self::NoSuchConfigRule(error),
            _ => Self::Unhandled(error),
        }
    }

    fn service_error(&self) -> &ServiceError {
        match self {
            Self::InvalidParameterValue(e)
            | Self::InvalidResultToken(e)
            | Self::NoSuchConfigRule(e)
            | Self::Unhandled(e) => e,
        }
    }
}
