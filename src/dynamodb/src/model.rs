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

use std::collections::HashMap;

/// The attributes of an item, keyed by attribute name.
pub type Item = HashMap<String, AttributeValue>;

/// The value of an attribute.
///
/// Exactly one of the fields is set in values sent by the service.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "UPPERCASE")]
#[non_exhaustive]
pub struct AttributeValue {
    /// A string.
    pub s: Option<String>,

    /// A number, sent as a string to preserve its precision.
    pub n: Option<String>,

    /// A binary value.
    #[serde_as(as = "Option<serde_with::base64::Base64>")]
    pub b: Option<bytes::Bytes>,

    /// A set of strings.
    #[serde_as(as = "Option<wkt::internal::SkipNulls>")]
    pub ss: Option<Vec<String>>,

    /// A set of numbers.
    #[serde_as(as = "Option<wkt::internal::SkipNulls>")]
    pub ns: Option<Vec<String>>,

    /// A set of binary values.
    #[serde_as(as = "Option<wkt::internal::SkipNulls<serde_with::base64::Base64>>")]
    pub bs: Option<Vec<bytes::Bytes>>,

    /// A map of attributes.
    #[serde_as(as = "Option<wkt::internal::SkipNulls>")]
    pub m: Option<HashMap<String, AttributeValue>>,

    /// A list of attributes.
    #[serde_as(as = "Option<wkt::internal::SkipNulls>")]
    pub l: Option<Vec<AttributeValue>>,

    /// A null value.
    pub null: Option<bool>,

    /// A boolean.
    pub bool: Option<bool>,
}

impl AttributeValue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [s][Self::s] field.
    ///
    /// # Example
    /// ```
    /// # use cloud_sdk_dynamodb::model::AttributeValue;
    /// let value = AttributeValue::new().set_s("alice");
    /// assert_eq!(value.s.as_deref(), Some("alice"));
    /// ```
    pub fn set_s<T: Into<String>>(mut self, v: T) -> Self {
        self.s = Some(v.into());
        self
    }

    /// Sets or clears the [s][Self::s] field.
    pub fn set_or_clear_s<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.s = v.map(|x| x.into());
        self
    }

    /// Sets the [n][Self::n] field.
    pub fn set_n<T: Into<String>>(mut self, v: T) -> Self {
        self.n = Some(v.into());
        self
    }

    /// Sets or clears the [n][Self::n] field.
    pub fn set_or_clear_n<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.n = v.map(|x| x.into());
        self
    }

    /// Sets the [b][Self::b] field.
    pub fn set_b<T: Into<bytes::Bytes>>(mut self, v: T) -> Self {
        self.b = Some(v.into());
        self
    }

    /// Sets or clears the [b][Self::b] field.
    pub fn set_or_clear_b<T: Into<bytes::Bytes>>(mut self, v: Option<T>) -> Self {
        self.b = v.map(|x| x.into());
        self
    }

    /// Sets the [ss][Self::ss] field.
    pub fn set_ss<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.ss = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the [ns][Self::ns] field.
    pub fn set_ns<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.ns = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the [bs][Self::bs] field.
    pub fn set_bs<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<bytes::Bytes>,
    {
        self.bs = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the [m][Self::m] field.
    pub fn set_m<T, K>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, AttributeValue)>,
        K: Into<String>,
    {
        self.m = Some(v.into_iter().map(|(k, v)| (k.into(), v)).collect());
        self
    }

    /// Sets the [l][Self::l] field.
    pub fn set_l<T: IntoIterator<Item = AttributeValue>>(mut self, v: T) -> Self {
        self.l = Some(v.into_iter().collect());
        self
    }

    /// Sets the [null][Self::null] field.
    pub fn set_null(mut self, v: bool) -> Self {
        self.null = Some(v);
        self
    }

    /// Sets or clears the [null][Self::null] field.
    pub fn set_or_clear_null(mut self, v: Option<bool>) -> Self {
        self.null = v;
        self
    }

    /// Sets the [bool][Self::bool] field.
    pub fn set_bool(mut self, v: bool) -> Self {
        self.bool = Some(v);
        self
    }

    /// Sets or clears the [bool][Self::bool] field.
    pub fn set_or_clear_bool(mut self, v: Option<bool>) -> Self {
        self.bool = v;
        self
    }

    /// The string set, empty when unset.
    pub fn ss(&self) -> &[String] {
        self.ss.as_deref().unwrap_or_default()
    }

    /// The number set, empty when unset.
    pub fn ns(&self) -> &[String] {
        self.ns.as_deref().unwrap_or_default()
    }

    /// The binary set, empty when unset.
    pub fn bs(&self) -> &[bytes::Bytes] {
        self.bs.as_deref().unwrap_or_default()
    }

    /// The list, empty when unset.
    pub fn l(&self) -> &[AttributeValue] {
        self.l.as_deref().unwrap_or_default()
    }
}

/// A condition on the current value of an attribute.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ExpectedAttributeValue {
    /// The value the attribute must have.
    pub value: Option<AttributeValue>,

    /// Whether the attribute must exist.
    pub exists: Option<bool>,
}

impl ExpectedAttributeValue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [value][Self::value] field.
    pub fn set_value<T: Into<AttributeValue>>(mut self, v: T) -> Self {
        self.value = Some(v.into());
        self
    }

    /// Sets or clears the [value][Self::value] field.
    pub fn set_or_clear_value<T: Into<AttributeValue>>(mut self, v: Option<T>) -> Self {
        self.value = v.map(|x| x.into());
        self
    }

    /// Sets the [exists][Self::exists] field.
    pub fn set_exists(mut self, v: bool) -> Self {
        self.exists = Some(v);
        self
    }

    /// Sets or clears the [exists][Self::exists] field.
    pub fn set_or_clear_exists(mut self, v: Option<bool>) -> Self {
        self.exists = v;
        self
    }
}

/// The request for `PutItem`.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct PutItemRequest {
    pub table_name: Option<String>,

    #[serde_as(as = "Option<wkt::internal::SkipNulls>")]
    pub item: Option<Item>,

    #[serde_as(as = "Option<wkt::internal::SkipNulls>")]
    pub expected: Option<HashMap<String, ExpectedAttributeValue>>,

    /// One of `NONE` or `ALL_OLD`.
    pub return_values: Option<String>,
}

impl PutItemRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [table_name][Self::table_name] field.
    pub fn set_table_name<T: Into<String>>(mut self, v: T) -> Self {
        self.table_name = Some(v.into());
        self
    }

    /// Sets or clears the [table_name][Self::table_name] field.
    pub fn set_or_clear_table_name<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.table_name = v.map(|x| x.into());
        self
    }

    /// Sets the [item][Self::item] field.
    pub fn set_item<T, K>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, AttributeValue)>,
        K: Into<String>,
    {
        self.item = Some(v.into_iter().map(|(k, v)| (k.into(), v)).collect());
        self
    }

    /// Sets the [expected][Self::expected] field.
    pub fn set_expected<T, K>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, ExpectedAttributeValue)>,
        K: Into<String>,
    {
        self.expected = Some(v.into_iter().map(|(k, v)| (k.into(), v)).collect());
        self
    }

    /// Sets the [return_values][Self::return_values] field.
    pub fn set_return_values<T: Into<String>>(mut self, v: T) -> Self {
        self.return_values = Some(v.into());
        self
    }

    /// Sets or clears the [return_values][Self::return_values] field.
    pub fn set_or_clear_return_values<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.return_values = v.map(|x| x.into());
        self
    }
}

/// The response for `PutItem`.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct PutItemResult {
    /// The previous attributes, when `ReturnValues` is `ALL_OLD`.
    #[serde_as(as = "Option<wkt::internal::SkipNulls>")]
    pub attributes: Option<Item>,
}

impl PutItemResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [attributes][Self::attributes] field.
    pub fn set_attributes<T, K>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, AttributeValue)>,
        K: Into<String>,
    {
        self.attributes = Some(v.into_iter().map(|(k, v)| (k.into(), v)).collect());
        self
    }
}

/// The request for `GetItem`.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetItemRequest {
    pub table_name: Option<String>,

    #[serde_as(as = "Option<wkt::internal::SkipNulls>")]
    pub key: Option<Item>,

    #[serde_as(as = "Option<wkt::internal::SkipNulls>")]
    pub attributes_to_get: Option<Vec<String>>,

    pub consistent_read: Option<bool>,
}

impl GetItemRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [table_name][Self::table_name] field.
    pub fn set_table_name<T: Into<String>>(mut self, v: T) -> Self {
        self.table_name = Some(v.into());
        self
    }

    /// Sets or clears the [table_name][Self::table_name] field.
    pub fn set_or_clear_table_name<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.table_name = v.map(|x| x.into());
        self
    }

    /// Sets the [key][Self::key] field.
    pub fn set_key<T, K>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, AttributeValue)>,
        K: Into<String>,
    {
        self.key = Some(v.into_iter().map(|(k, v)| (k.into(), v)).collect());
        self
    }

    /// Sets the [attributes_to_get][Self::attributes_to_get] field.
    pub fn set_attributes_to_get<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.attributes_to_get = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the [consistent_read][Self::consistent_read] field.
    pub fn set_consistent_read(mut self, v: bool) -> Self {
        self.consistent_read = Some(v);
        self
    }

    /// Sets or clears the [consistent_read][Self::consistent_read] field.
    pub fn set_or_clear_consistent_read(mut self, v: Option<bool>) -> Self {
        self.consistent_read = v;
        self
    }

    /// The attributes to get, empty when unset.
    pub fn attributes_to_get(&self) -> &[String] {
        self.attributes_to_get.as_deref().unwrap_or_default()
    }
}

/// The response for `GetItem`.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetItemResult {
    /// The item, unset if there is no item with the requested key.
    #[serde_as(as = "Option<wkt::internal::SkipNulls>")]
    pub item: Option<Item>,
}

impl GetItemResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [item][Self::item] field.
    pub fn set_item<T, K>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, AttributeValue)>,
        K: Into<String>,
    {
        self.item = Some(v.into_iter().map(|(k, v)| (k.into(), v)).collect());
        self
    }
}

/// The request for `DeleteItem`.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DeleteItemRequest {
    pub table_name: Option<String>,

    #[serde_as(as = "Option<wkt::internal::SkipNulls>")]
    pub key: Option<Item>,

    #[serde_as(as = "Option<wkt::internal::SkipNulls>")]
    pub expected: Option<HashMap<String, ExpectedAttributeValue>>,
}

impl DeleteItemRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [table_name][Self::table_name] field.
    pub fn set_table_name<T: Into<String>>(mut self, v: T) -> Self {
        self.table_name = Some(v.into());
        self
    }

    /// Sets or clears the [table_name][Self::table_name] field.
    pub fn set_or_clear_table_name<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.table_name = v.map(|x| x.into());
        self
    }

    /// Sets the [key][Self::key] field.
    pub fn set_key<T, K>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, AttributeValue)>,
        K: Into<String>,
    {
        self.key = Some(v.into_iter().map(|(k, v)| (k.into(), v)).collect());
        self
    }

    /// Sets the [expected][Self::expected] field.
    pub fn set_expected<T, K>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, ExpectedAttributeValue)>,
        K: Into<String>,
    {
        self.expected = Some(v.into_iter().map(|(k, v)| (k.into(), v)).collect());
        self
    }
}

/// The response for `DeleteItem`.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DeleteItemResult {
    #[serde_as(as = "Option<wkt::internal::SkipNulls>")]
    pub attributes: Option<Item>,
}

impl DeleteItemResult {
    pub fn new() -> Self {
        Self::default()
    }
}
