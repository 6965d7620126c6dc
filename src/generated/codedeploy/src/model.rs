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


/// The request for `GetDeployment`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetDeploymentRequest {
    pub deployment_id: Option<String>,
}

impl GetDeploymentRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [deployment_id][Self::deployment_id] field.
    ///
    /// # Example
    /// ```
    /// # use cloud_sdk_codedeploy::model::GetDeploymentRequest;
    /// let x = GetDeploymentRequest::new().set_deployment_id("d-A1B2C3123");
    /// assert_eq!(x.deployment_id.as_deref(), Some("d-A1B2C3123"));
    /// ```
    pub fn set_deployment_id<T: Into<String>>(mut self, v: T) -> Self {
        self.deployment_id = Some(v.into());
        self
    }

    /// Sets or clears the [deployment_id][Self::deployment_id] field.
    pub fn set_or_clear_deployment_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.deployment_id = v.map(|x| x.into());
        self
    }
}

/// The response for `GetDeployment`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetDeploymentResult {
    pub deployment_info: Option<DeploymentInfo>,
}

impl GetDeploymentResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [deployment_info][Self::deployment_info] field.
    pub fn set_deployment_info<T: Into<DeploymentInfo>>(mut self, v: T) -> Self {
        self.deployment_info = Some(v.into());
        self
    }

    /// Sets or clears the [deployment_info][Self::deployment_info] field.
    pub fn set_or_clear_deployment_info<T: Into<DeploymentInfo>>(mut self, v: Option<T>) -> Self {
        self.deployment_info = v.map(|x| x.into());
        self
    }
}

/// Information about a deployment.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeploymentInfo {
    pub application_name: Option<String>,

    pub deployment_group_name: Option<String>,

    pub deployment_config_name: Option<String>,

    pub deployment_id: Option<String>,

    /// One of `Created`, `Queued`, `InProgress`, `Succeeded`, `Failed` or
    /// `Stopped`.
    pub status: Option<String>,

    /// Set if the deployment failed.
    pub error_information: Option<ErrorInformation>,

    pub create_time: Option<wkt::Timestamp>,

    pub start_time: Option<wkt::Timestamp>,

    pub complete_time: Option<wkt::Timestamp>,

    pub deployment_overview: Option<DeploymentOverview>,

    pub description: Option<String>,

    /// Either `user` or `autoscaling`.
    pub creator: Option<String>,

    pub ignore_application_stop_failures: Option<bool>,
}

impl DeploymentInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [application_name][Self::application_name] field.
    pub fn set_application_name<T: Into<String>>(mut self, v: T) -> Self {
        self.application_name = Some(v.into());
        self
    }

    /// Sets or clears the [application_name][Self::application_name] field.
    pub fn set_or_clear_application_name<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.application_name = v.map(|x| x.into());
        self
    }

    /// Sets the [deployment_group_name][Self::deployment_group_name] field.
    pub fn set_deployment_group_name<T: Into<String>>(mut self, v: T) -> Self {
        self.deployment_group_name = Some(v.into());
        self
    }

    /// Sets or clears the [deployment_group_name][Self::deployment_group_name] field.
    pub fn set_or_clear_deployment_group_name<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.deployment_group_name = v.map(|x| x.into());
        self
    }

    /// Sets the [deployment_config_name][Self::deployment_config_name] field.
    pub fn set_deployment_config_name<T: Into<String>>(mut self, v: T) -> Self {
        self.deployment_config_name = Some(v.into());
        self
    }

    /// Sets or clears the [deployment_config_name][Self::deployment_config_name] field.
    pub fn set_or_clear_deployment_config_name<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.deployment_config_name = v.map(|x| x.into());
        self
    }

    /// Sets the [deployment_id][Self::deployment_id] field.
    pub fn set_deployment_id<T: Into<String>>(mut self, v: T) -> Self {
        self.deployment_id = Some(v.into());
        self
    }

    /// Sets or clears the [deployment_id][Self::deployment_id] field.
    pub fn set_or_clear_deployment_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.deployment_id = v.map(|x| x.into());
        self
    }

    /// Sets the [status][Self::status] field.
    pub fn set_status<T: Into<String>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }

    /// Sets or clears the [status][Self::status] field.
    pub fn set_or_clear_status<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.status = v.map(|x| x.into());
        self
    }

    /// Sets the [error_information][Self::error_information] field.
    pub fn set_error_information<T: Into<ErrorInformation>>(mut self, v: T) -> Self {
        self.error_information = Some(v.into());
        self
    }

    /// Sets or clears the [error_information][Self::error_information] field.
    pub fn set_or_clear_error_information<T: Into<ErrorInformation>>(
        mut self,
        v: Option<T>,
    ) -> Self {
        self.error_information = v.map(|x| x.into());
        self
    }

    /// Sets the [create_time][Self::create_time] field.
    pub fn set_create_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.create_time = Some(v.into());
        self
    }

    /// Sets or clears the [create_time][Self::create_time] field.
    pub fn set_or_clear_create_time<T: Into<wkt::Timestamp>>(mut self, v: Option<T>) -> Self {
        self.create_time = v.map(|x| x.into());
        self
    }

    /// Sets the [start_time][Self::start_time] field.
    pub fn set_start_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.start_time = Some(v.into());
        self
    }

    /// Sets or clears the [start_time][Self::start_time] field.
    pub fn set_or_clear_start_time<T: Into<wkt::Timestamp>>(mut self, v: Option<T>) -> Self {
        self.start_time = v.map(|x| x.into());
        self
    }

    /// Sets the [complete_time][Self::complete_time] field.
    pub fn set_complete_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.complete_time = Some(v.into());
        self
    }

    /// Sets or clears the [complete_time][Self::complete_time] field.
    pub fn set_or_clear_complete_time<T: Into<wkt::Timestamp>>(mut self, v: Option<T>) -> Self {
        self.complete_time = v.map(|x| x.into());
        self
    }

    /// Sets the [deployment_overview][Self::deployment_overview] field.
    pub fn set_deployment_overview<T: Into<DeploymentOverview>>(mut self, v: T) -> Self {
        self.deployment_overview = Some(v.into());
        self
    }

    /// Sets or clears the [deployment_overview][Self::deployment_overview] field.
    pub fn set_or_clear_deployment_overview<T: Into<DeploymentOverview>>(
        mut self,
        v: Option<T>,
    ) -> Self {
        self.deployment_overview = v.map(|x| x.into());
        self
    }

    /// Sets the [description][Self::description] field.
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets or clears the [description][Self::description] field.
    pub fn set_or_clear_description<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.description = v.map(|x| x.into());
        self
    }

    /// Sets the [creator][Self::creator] field.
    pub fn set_creator<T: Into<String>>(mut self, v: T) -> Self {
        self.creator = Some(v.into());
        self
    }

    /// Sets or clears the [creator][Self::creator] field.
    pub fn set_or_clear_creator<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.creator = v.map(|x| x.into());
        self
    }

    /// Sets the [ignore_application_stop_failures][Self::ignore_application_stop_failures] field.
    pub fn set_ignore_application_stop_failures(mut self, v: bool) -> Self {
        self.ignore_application_stop_failures = Some(v);
        self
    }

    /// Sets or clears the [ignore_application_stop_failures][Self::ignore_application_stop_failures] field.
    pub fn set_or_clear_ignore_application_stop_failures(mut self, v: Option<bool>) -> Self {
        self.ignore_application_stop_failures = v;
        self
    }
}

/// The number of instances in each deployment state.
///
/// Unlike the other records in this service, the fields use PascalCase.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DeploymentOverview {
    pub pending: Option<i64>,
    pub in_progress: Option<i64>,
    pub succeeded: Option<i64>,
    pub failed: Option<i64>,
    pub skipped: Option<i64>,
}

impl DeploymentOverview {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [pending][Self::pending] field.
    pub fn set_pending(mut self, v: i64) -> Self {
        self.pending = Some(v);
        self
    }

    /// Sets or clears the [pending][Self::pending] field.
    pub fn set_or_clear_pending(mut self, v: Option<i64>) -> Self {
        self.pending = v;
        self
    }

    /// Sets the [in_progress][Self::in_progress] field.
    pub fn set_in_progress(mut self, v: i64) -> Self {
        self.in_progress = Some(v);
        self
    }

    /// Sets or clears the [in_progress][Self::in_progress] field.
    pub fn set_or_clear_in_progress(mut self, v: Option<i64>) -> Self {
        self.in_progress = v;
        self
    }

    /// Sets the [succeeded][Self::succeeded] field.
    pub fn set_succeeded(mut self, v: i64) -> Self {
        self.succeeded = Some(v);
        self
    }

    /// Sets or clears the [succeeded][Self::succeeded] field.
    pub fn set_or_clear_succeeded(mut self, v: Option<i64>) -> Self {
        self.succeeded = v;
        self
    }

    /// Sets the [failed][Self::failed] field.
    pub fn set_failed(mut self, v: i64) -> Self {
        self.failed = Some(v);
        self
    }

    /// Sets or clears the [failed][Self::failed] field.
    pub fn set_or_clear_failed(mut self, v: Option<i64>) -> Self {
        self.failed = v;
        self
    }

    /// Sets the [skipped][Self::skipped] field.
    pub fn set_skipped(mut self, v: i64) -> Self {
        self.skipped = Some(v);
        self
    }

    /// Sets or clears the [skipped][Self::skipped] field.
    pub fn set_or_clear_skipped(mut self, v: Option<i64>) -> Self {
        self.skipped = v;
        self
    }
}

/// Why a deployment failed.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ErrorInformation {
    /// The error code, e.g. `HEALTH_CONSTRAINTS`.
    pub code: Option<String>,
    pub message: Option<String>,
}

impl ErrorInformation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [code][Self::code] field.
    pub fn set_code<T: Into<String>>(mut self, v: T) -> Self {
        self.code = Some(v.into());
        self
    }

    /// Sets or clears the [code][Self::code] field.
    pub fn set_or_clear_code<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.code = v.map(|x| x.into());
        self
    }

    /// Sets the [message][Self::message] field.
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = Some(v.into());
        self
    }

    /// Sets or clears the [message][Self::message] field.
    pub fn set_or_clear_message<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.message = v.map(|x| x.into());
        self
    }
}
