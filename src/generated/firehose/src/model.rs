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

/// The request for `DescribeDeliveryStream`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DescribeDeliveryStreamInput {
    /// The name of the delivery stream.
    pub delivery_stream_name: Option<String>,

    /// The maximum number of destinations to return.
    pub limit: Option<i32>,

    /// The destination to start after, for pagination.
    pub exclusive_start_destination_id: Option<String>,
}

impl DescribeDeliveryStreamInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [delivery_stream_name][Self::delivery_stream_name] field.
    ///
    /// # Example
    /// ```
    /// # use cloud_sdk_firehose::model::DescribeDeliveryStreamInput;
    /// let x = DescribeDeliveryStreamInput::new().set_delivery_stream_name("clicks");
    /// assert_eq!(x.delivery_stream_name.as_deref(), Some("clicks"));
    /// ```
    pub fn set_delivery_stream_name<T: Into<String>>(mut self, v: T) -> Self {
        self.delivery_stream_name = Some(v.into());
        self
    }

    /// Sets or clears the [delivery_stream_name][Self::delivery_stream_name] field.
    pub fn set_or_clear_delivery_stream_name<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.delivery_stream_name = v.map(|x| x.into());
        self
    }

    /// Sets the [limit][Self::limit] field.
    pub fn set_limit(mut self, v: i32) -> Self {
        self.limit = Some(v);
        self
    }

    /// Sets or clears the [limit][Self::limit] field.
    pub fn set_or_clear_limit(mut self, v: Option<i32>) -> Self {
        self.limit = v;
        self
    }

    /// Sets the [exclusive_start_destination_id][Self::exclusive_start_destination_id] field.
    pub fn set_exclusive_start_destination_id<T: Into<String>>(mut self, v: T) -> Self {
        self.exclusive_start_destination_id = Some(v.into());
        self
    }

    /// Sets or clears the [exclusive_start_destination_id][Self::exclusive_start_destination_id] field.
    pub fn set_or_clear_exclusive_start_destination_id<T: Into<String>>(
        mut self,
        v: Option<T>,
    ) -> Self {
        self.exclusive_start_destination_id = v.map(|x| x.into());
        self
    }
}

/// The response for `DescribeDeliveryStream`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DescribeDeliveryStreamOutput {
    pub delivery_stream_description: Option<DeliveryStreamDescription>,
}

impl DescribeDeliveryStreamOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [delivery_stream_description][Self::delivery_stream_description] field.
    pub fn set_delivery_stream_description<T: Into<DeliveryStreamDescription>>(
        mut self,
        v: T,
    ) -> Self {
        self.delivery_stream_description = Some(v.into());
        self
    }

    /// Sets or clears the [delivery_stream_description][Self::delivery_stream_description] field.
    pub fn set_or_clear_delivery_stream_description<T: Into<DeliveryStreamDescription>>(
        mut self,
        v: Option<T>,
    ) -> Self {
        self.delivery_stream_description = v.map(|x| x.into());
        self
    }
}

/// Describes a delivery stream and its destinations.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DeliveryStreamDescription {
    pub delivery_stream_name: Option<String>,

    #[serde(rename = "DeliveryStreamARN")]
    pub delivery_stream_arn: Option<String>,

    /// One of `CREATING`, `DELETING`, or `ACTIVE`.
    pub delivery_stream_status: Option<String>,

    /// Changes each time the destinations are updated.
    pub version_id: Option<String>,

    pub create_timestamp: Option<wkt::Timestamp>,

    pub last_update_timestamp: Option<wkt::Timestamp>,

    #[serde_as(as = "Option<wkt::internal::SkipNulls>")]
    pub destinations: Option<Vec<DestinationDescription>>,

    /// True if there are more destinations than those returned.
    pub has_more_destinations: Option<bool>,
}

impl DeliveryStreamDescription {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [delivery_stream_name][Self::delivery_stream_name] field.
    pub fn set_delivery_stream_name<T: Into<String>>(mut self, v: T) -> Self {
        self.delivery_stream_name = Some(v.into());
        self
    }

    /// Sets or clears the [delivery_stream_name][Self::delivery_stream_name] field.
    pub fn set_or_clear_delivery_stream_name<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.delivery_stream_name = v.map(|x| x.into());
        self
    }

    /// Sets the [delivery_stream_arn][Self::delivery_stream_arn] field.
    pub fn set_delivery_stream_arn<T: Into<String>>(mut self, v: T) -> Self {
        self.delivery_stream_arn = Some(v.into());
        self
    }

    /// Sets or clears the [delivery_stream_arn][Self::delivery_stream_arn] field.
    pub fn set_or_clear_delivery_stream_arn<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.delivery_stream_arn = v.map(|x| x.into());
        self
    }

    /// Sets the [delivery_stream_status][Self::delivery_stream_status] field.
    pub fn set_delivery_stream_status<T: Into<String>>(mut self, v: T) -> Self {
        self.delivery_stream_status = Some(v.into());
        self
    }

    /// Sets or clears the [delivery_stream_status][Self::delivery_stream_status] field.
    pub fn set_or_clear_delivery_stream_status<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.delivery_stream_status = v.map(|x| x.into());
        self
    }

    /// Sets the [version_id][Self::version_id] field.
    pub fn set_version_id<T: Into<String>>(mut self, v: T) -> Self {
        self.version_id = Some(v.into());
        self
    }

    /// Sets or clears the [version_id][Self::version_id] field.
    pub fn set_or_clear_version_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.version_id = v.map(|x| x.into());
        self
    }

    /// Sets the [create_timestamp][Self::create_timestamp] field.
    pub fn set_create_timestamp<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.create_timestamp = Some(v.into());
        self
    }

    /// Sets or clears the [create_timestamp][Self::create_timestamp] field.
    pub fn set_or_clear_create_timestamp<T: Into<wkt::Timestamp>>(mut self, v: Option<T>) -> Self {
        self.create_timestamp = v.map(|x| x.into());
        self
    }

    /// Sets the [last_update_timestamp][Self::last_update_timestamp] field.
    pub fn set_last_update_timestamp<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.last_update_timestamp = Some(v.into());
        self
    }

    /// Sets or clears the [last_update_timestamp][Self::last_update_timestamp] field.
    pub fn set_or_clear_last_update_timestamp<T: Into<wkt::Timestamp>>(
        mut self,
        v: Option<T>,
    ) -> Self {
        self.last_update_timestamp = v.map(|x| x.into());
        self
    }

    /// Sets the [destinations][Self::destinations] field.
    ///
    /// # Example
    /// ```
    /// # use cloud_sdk_firehose::model::{DeliveryStreamDescription, DestinationDescription};
    /// let x = DeliveryStreamDescription::new().set_destinations([
    ///     DestinationDescription::new().set_destination_id("destinationId-000000000001"),
    /// ]);
    /// assert_eq!(x.destinations().len(), 1);
    /// ```
    pub fn set_destinations<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<DestinationDescription>,
    {
        self.destinations = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// The destinations, empty when unset.
    pub fn destinations(&self) -> &[DestinationDescription] {
        self.destinations.as_deref().unwrap_or_default()
    }

    /// Sets the [has_more_destinations][Self::has_more_destinations] field.
    pub fn set_has_more_destinations(mut self, v: bool) -> Self {
        self.has_more_destinations = Some(v);
        self
    }

    /// Sets or clears the [has_more_destinations][Self::has_more_destinations] field.
    pub fn set_or_clear_has_more_destinations(mut self, v: Option<bool>) -> Self {
        self.has_more_destinations = v;
        self
    }
}

/// Describes one destination of a delivery stream.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DestinationDescription {
    pub destination_id: Option<String>,

    pub s3_destination_description: Option<S3DestinationDescription>,
}

impl DestinationDescription {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [destination_id][Self::destination_id] field.
    pub fn set_destination_id<T: Into<String>>(mut self, v: T) -> Self {
        self.destination_id = Some(v.into());
        self
    }

    /// Sets or clears the [destination_id][Self::destination_id] field.
    pub fn set_or_clear_destination_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.destination_id = v.map(|x| x.into());
        self
    }

    /// Sets the [s3_destination_description][Self::s3_destination_description] field.
    pub fn set_s3_destination_description<T: Into<S3DestinationDescription>>(
        mut self,
        v: T,
    ) -> Self {
        self.s3_destination_description = Some(v.into());
        self
    }

    /// Sets or clears the [s3_destination_description][Self::s3_destination_description] field.
    pub fn set_or_clear_s3_destination_description<T: Into<S3DestinationDescription>>(
        mut self,
        v: Option<T>,
    ) -> Self {
        self.s3_destination_description = v.map(|x| x.into());
        self
    }
}

/// An Amazon S3 destination.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct S3DestinationDescription {
    #[serde(rename = "RoleARN")]
    pub role_arn: Option<String>,

    #[serde(rename = "BucketARN")]
    pub bucket_arn: Option<String>,

    /// A prefix for the delivered object names.
    pub prefix: Option<String>,

    pub buffering_hints: Option<BufferingHints>,

    /// One of `UNCOMPRESSED`, `GZIP`, `ZIP`, or `Snappy`.
    pub compression_format: Option<String>,
}

impl S3DestinationDescription {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [role_arn][Self::role_arn] field.
    pub fn set_role_arn<T: Into<String>>(mut self, v: T) -> Self {
        self.role_arn = Some(v.into());
        self
    }

    /// Sets or clears the [role_arn][Self::role_arn] field.
    pub fn set_or_clear_role_arn<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.role_arn = v.map(|x| x.into());
        self
    }

    /// Sets the [bucket_arn][Self::bucket_arn] field.
    pub fn set_bucket_arn<T: Into<String>>(mut self, v: T) -> Self {
        self.bucket_arn = Some(v.into());
        self
    }

    /// Sets or clears the [bucket_arn][Self::bucket_arn] field.
    pub fn set_or_clear_bucket_arn<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.bucket_arn = v.map(|x| x.into());
        self
    }

    /// Sets the [prefix][Self::prefix] field.
    pub fn set_prefix<T: Into<String>>(mut self, v: T) -> Self {
        self.prefix = Some(v.into());
        self
    }

    /// Sets or clears the [prefix][Self::prefix] field.
    pub fn set_or_clear_prefix<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.prefix = v.map(|x| x.into());
        self
    }

    /// Sets the [buffering_hints][Self::buffering_hints] field.
    pub fn set_buffering_hints<T: Into<BufferingHints>>(mut self, v: T) -> Self {
        self.buffering_hints = Some(v.into());
        self
    }

    /// Sets or clears the [buffering_hints][Self::buffering_hints] field.
    pub fn set_or_clear_buffering_hints<T: Into<BufferingHints>>(mut self, v: Option<T>) -> Self {
        self.buffering_hints = v.map(|x| x.into());
        self
    }

    /// Sets the [compression_format][Self::compression_format] field.
    pub fn set_compression_format<T: Into<String>>(mut self, v: T) -> Self {
        self.compression_format = Some(v.into());
        self
    }

    /// Sets or clears the [compression_format][Self::compression_format] field.
    pub fn set_or_clear_compression_format<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.compression_format = v.map(|x| x.into());
        self
    }
}

/// When to deliver the buffered records.
///
/// The records are delivered when either limit is reached.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct BufferingHints {
    #[serde(rename = "SizeInMBs")]
    pub size_in_mbs: Option<i32>,

    pub interval_in_seconds: Option<i32>,
}

impl BufferingHints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [size_in_mbs][Self::size_in_mbs] field.
    pub fn set_size_in_mbs(mut self, v: i32) -> Self {
        self.size_in_mbs = Some(v);
        self
    }

    /// Sets or clears the [size_in_mbs][Self::size_in_mbs] field.
    pub fn set_or_clear_size_in_mbs(mut self, v: Option<i32>) -> Self {
        self.size_in_mbs = v;
        self
    }

    /// Sets the [interval_in_seconds][Self::interval_in_seconds] field.
    pub fn set_interval_in_seconds(mut self, v: i32) -> Self {
        self.interval_in_seconds = Some(v);
        self
    }

    /// Sets or clears the [interval_in_seconds][Self::interval_in_seconds] field.
    pub fn set_or_clear_interval_in_seconds(mut self, v: Option<i32>) -> Self {
        self.interval_in_seconds = v;
        self
    }
}

/// The request for `ListDeliveryStreams`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ListDeliveryStreamsInput {
    pub limit: Option<i32>,

    /// The delivery stream to start after, for pagination.
    pub exclusive_start_delivery_stream_name: Option<String>,
}

impl ListDeliveryStreamsInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [limit][Self::limit] field.
    pub fn set_limit(mut self, v: i32) -> Self {
        self.limit = Some(v);
        self
    }

    /// Sets or clears the [limit][Self::limit] field.
    pub fn set_or_clear_limit(mut self, v: Option<i32>) -> Self {
        self.limit = v;
        self
    }

    /// Sets the [exclusive_start_delivery_stream_name][Self::exclusive_start_delivery_stream_name] field.
    pub fn set_exclusive_start_delivery_stream_name<T: Into<String>>(mut self, v: T) -> Self {
        self.exclusive_start_delivery_stream_name = Some(v.into());
        self
    }

    /// Sets or clears the [exclusive_start_delivery_stream_name][Self::exclusive_start_delivery_stream_name] field.
    pub fn set_or_clear_exclusive_start_delivery_stream_name<T: Into<String>>(
        mut self,
        v: Option<T>,
    ) -> Self {
        self.exclusive_start_delivery_stream_name = v.map(|x| x.into());
        self
    }
}

/// The response for `ListDeliveryStreams`.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ListDeliveryStreamsOutput {
    #[serde_as(as = "Option<wkt::internal::SkipNulls>")]
    pub delivery_stream_names: Option<Vec<String>>,

    pub has_more_delivery_streams: Option<bool>,
}

impl ListDeliveryStreamsOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [delivery_stream_names][Self::delivery_stream_names] field.
    pub fn set_delivery_stream_names<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.delivery_stream_names = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// The delivery stream names, empty when unset.
    pub fn delivery_stream_names(&self) -> &[String] {
        self.delivery_stream_names.as_deref().unwrap_or_default()
    }

    /// Sets the [has_more_delivery_streams][Self::has_more_delivery_streams] field.
    pub fn set_has_more_delivery_streams(mut self, v: bool) -> Self {
        self.has_more_delivery_streams = Some(v);
        self
    }

    /// Sets or clears the [has_more_delivery_streams][Self::has_more_delivery_streams] field.
    pub fn set_or_clear_has_more_delivery_streams(mut self, v: Option<bool>) -> Self {
        self.has_more_delivery_streams = v;
        self
    }
}
