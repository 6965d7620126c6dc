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


/// The request for `PutEvaluations`.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct PutEvaluationsRequest {
    /// The evaluation results, at most 100 per request.
    #[serde_as(as = "Option<wkt::internal::SkipNulls>")]
    pub evaluations: Option<Vec<Evaluation>>,

    /// The token from the event that triggered the rule.
    pub result_token: Option<String>,
}

impl PutEvaluationsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [evaluations][Self::evaluations] field.
    pub fn set_evaluations<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Evaluation>,
    {
        self.evaluations = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Clears the [evaluations][Self::evaluations] field.
    pub fn clear_evaluations(mut self) -> Self {
        self.evaluations = None;
        self
    }

    /// The evaluations, empty when unset.
    pub fn evaluations(&self) -> &[Evaluation] {
        self.evaluations.as_deref().unwrap_or_default()
    }

    /// Sets the [result_token][Self::result_token] field.
    pub fn set_result_token<T: Into<String>>(mut self, v: T) -> Self {
        self.result_token = Some(v.into());
        self
    }

    /// Sets or clears the [result_token][Self::result_token] field.
    pub fn set_or_clear_result_token<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.result_token = v.map(|x| x.into());
        self
    }
}

/// The response for `PutEvaluations`.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct PutEvaluationsResult {
    /// The evaluations the service rejected.
    #[serde_as(as = "Option<wkt::internal::SkipNulls>")]
    pub failed_evaluations: Option<Vec<Evaluation>>,
}

impl PutEvaluationsResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [failed_evaluations][Self::failed_evaluations] field.
    pub fn set_failed_evaluations<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Evaluation>,
    {
        self.failed_evaluations = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    pub fn failed_evaluations(&self) -> &[Evaluation] {
        self.failed_evaluations.as_deref().unwrap_or_default()
    }
}

/// The compliance of one resource with a rule.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct Evaluation {
    /// The resource type, e.g. `AWS::EC2::Instance`.
    pub compliance_resource_type: Option<String>,

    pub compliance_resource_id: Option<String>,

    /// One of `COMPLIANT`, `NON_COMPLIANT`, `NOT_APPLICABLE` or
    /// `INSUFFICIENT_DATA`.
    pub compliance_type: Option<String>,

    pub annotation: Option<String>,

    /// The time of the event that triggered the evaluation.
    pub ordering_timestamp: Option<wkt::Timestamp>,
}

impl Evaluation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [compliance_resource_type][Self::compliance_resource_type] field.
    pub fn set_compliance_resource_type<T: Into<String>>(mut self, v: T) -> Self {
        self.compliance_resource_type = Some(v.into());
        self
    }

    /// Sets or clears the [compliance_resource_type][Self::compliance_resource_type] field.
    pub fn set_or_clear_compliance_resource_type<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.compliance_resource_type = v.map(|x| x.into());
        self
    }

    /// Sets the [compliance_resource_id][Self::compliance_resource_id] field.
    pub fn set_compliance_resource_id<T: Into<String>>(mut self, v: T) -> Self {
        self.compliance_resource_id = Some(v.into());
        self
    }

    /// Sets or clears the [compliance_resource_id][Self::compliance_resource_id] field.
    pub fn set_or_clear_compliance_resource_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.compliance_resource_id = v.map(|x| x.into());
        self
    }

    /// Sets the [compliance_type][Self::compliance_type] field.
    pub fn set_compliance_type<T: Into<String>>(mut self, v: T) -> Self {
        self.compliance_type = Some(v.into());
        self
    }

    /// Sets or clears the [compliance_type][Self::compliance_type] field.
    pub fn set_or_clear_compliance_type<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.compliance_type = v.map(|x| x.into());
        self
    }

    /// Sets the [annotation][Self::annotation] field.
    pub fn set_annotation<T: Into<String>>(mut self, v: T) -> Self {
        self.annotation = Some(v.into());
        self
    }

    /// Sets or clears the [annotation][Self::annotation] field.
    pub fn set_or_clear_annotation<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.annotation = v.map(|x| x.into());
        self
    }

    /// Sets the [ordering_timestamp][Self::ordering_timestamp] field.
    pub fn set_ordering_timestamp<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.ordering_timestamp = Some(v.into());
        self
    }

    /// Sets or clears the [ordering_timestamp][Self::ordering_timestamp] field.
    pub fn set_or_clear_ordering_timestamp<T: Into<wkt::Timestamp>>(
        mut self,
        v: Option<T>,
    ) -> Self {
        self.ordering_timestamp = v.map(|x| x.into());
        self
    }
}
