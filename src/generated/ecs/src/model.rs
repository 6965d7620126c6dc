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


/// The request for `ListTaskDefinitionFamilies`.
///
/// # Example
/// ```
/// # use cloud_sdk_ecs::model::ListTaskDefinitionFamiliesRequest;
/// let x = ListTaskDefinitionFamiliesRequest::new()
///     .set_family_prefix("hpcc")
///     .set_max_results(25);
/// ```
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListTaskDefinitionFamiliesRequest {
    /// Only families starting with this prefix are listed.
    pub family_prefix: Option<String>,

    /// The token returned by a previous call.
    pub next_token: Option<String>,

    /// Between 1 and 100, the service uses 100 when unset.
    pub max_results: Option<i32>,
}

impl ListTaskDefinitionFamiliesRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [family_prefix][Self::family_prefix] field.
    pub fn set_family_prefix<T: Into<String>>(mut self, v: T) -> Self {
        self.family_prefix = Some(v.into());
        self
    }

    /// Sets or clears the [family_prefix][Self::family_prefix] field.
    pub fn set_or_clear_family_prefix<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.family_prefix = v.map(|x| x.into());
        self
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

    /// Sets the [max_results][Self::max_results] field.
    pub fn set_max_results(mut self, v: i32) -> Self {
        self.max_results = Some(v);
        self
    }

    /// Sets or clears the [max_results][Self::max_results] field.
    pub fn set_or_clear_max_results(mut self, v: Option<i32>) -> Self {
        self.max_results = v;
        self
    }
}

/// The response for `ListTaskDefinitionFamilies`.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListTaskDefinitionFamiliesResult {
    #[serde_as(as = "Option<wkt::internal::SkipNulls>")]
    pub families: Option<Vec<String>>,

    pub next_token: Option<String>,
}

impl ListTaskDefinitionFamiliesResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [families][Self::families] field.
    pub fn set_families<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.families = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    pub fn families(&self) -> &[String] {
        self.families.as_deref().unwrap_or_default()
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
