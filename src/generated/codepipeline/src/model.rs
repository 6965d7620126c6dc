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


/// The request for `ListPipelines`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListPipelinesRequest {
    /// The token returned by a previous call.
    pub next_token: Option<String>,
}

impl ListPipelinesRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [next_token][Self::next_token] field.
    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }

    /// Sets or clears the [next_token][Self::next_token] field.
    pub fn set_or_clear_next_token<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.next_token = v.map(|x| x.into());
        self
    }
}

/// The response for `ListPipelines`.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListPipelinesResult {
    #[serde_as(as = "Option<wkt::internal::SkipNulls>")]
    pub pipelines: Option<Vec<PipelineSummary>>,

    /// Set if there are more pipelines to list.
    pub next_token: Option<String>,
}

impl ListPipelinesResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [pipelines][Self::pipelines] field.
    pub fn set_pipelines<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<PipelineSummary>,
    {
        self.pipelines = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// The pipelines, empty when unset.
    pub fn pipelines(&self) -> &[PipelineSummary] {
        self.pipelines.as_deref().unwrap_or_default()
    }

    /// Sets the [next_token][Self::next_token] field.
    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }

    /// Sets or clears the [next_token][Self::next_token] field.
    pub fn set_or_clear_next_token<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.next_token = v.map(|x| x.into());
        self
    }
}

/// A pipeline in the output of `ListPipelines`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct PipelineSummary {
    pub name: Option<String>,

    /// Starts at 1 and increases on each update.
    pub version: Option<i32>,

    pub created: Option<wkt::Timestamp>,

    pub updated: Option<wkt::Timestamp>,
}

impl PipelineSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [name][Self::name] field.
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets or clears the [name][Self::name] field.
    pub fn set_or_clear_name<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the [version][Self::version] field.
    pub fn set_version(mut self, v: i32) -> Self {
        self.version = Some(v);
        self
    }

    /// Sets or clears the [version][Self::version] field.
    pub fn set_or_clear_version(mut self, v: Option<i32>) -> Self {
        self.version = v;
        self
    }

    /// Sets the [created][Self::created] field.
    pub fn set_created<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.created = Some(v.into());
        self
    }

    /// Sets or clears the [created][Self::created] field.
    pub fn set_or_clear_created<T: Into<wkt::Timestamp>>(mut self, v: Option<T>) -> Self {
        self.created = v.map(|x| x.into());
        self
    }

    /// Sets the [updated][Self::updated] field.
    pub fn set_updated<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.updated = Some(v.into());
        self
    }

    /// Sets or clears the [updated][Self::updated] field.
    pub fn set_or_clear_updated<T: Into<wkt::Timestamp>>(mut self, v: Option<T>) -> Self {
        self.updated = v.map(|x| x.into());
        self
    }
}
