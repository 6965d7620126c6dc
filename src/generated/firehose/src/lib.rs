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

//! Models for Amazon Kinesis Firehose.
//!
//! The request records implement
//! [JsonOperation][gax::json_protocol::JsonOperation]. Use
//! [JsonMarshaller][gax::json_protocol::JsonMarshaller] to create the
//! requests and [unmarshall_response][gax::json_protocol::unmarshall_response]
//! to parse the responses.
//!
//! # Example
//! ```
//! use cloud_sdk_firehose::model::DescribeDeliveryStreamInput;
//! use gax::json_protocol::JsonMarshaller;
//! use gax::marshaller::Marshaller;
//!
//! let input = DescribeDeliveryStreamInput::new().set_delivery_stream_name("clicks");
//! let request = JsonMarshaller.marshall(&input)?;
//! assert_eq!(
//!     request.header("X-Amz-Target"),
//!     Some("Firehose_20150804.DescribeDeliveryStream")
//! );
//! # Ok::<(), gax::error::Error>(())
//! ```

/// The request and response records.
pub mod model;

/// The typed service errors.
pub mod errors;

mod operations;

use gax::json_protocol::ServiceMetadata;

/// The JSON protocol constants for Amazon Kinesis Firehose.
pub const METADATA: ServiceMetadata = ServiceMetadata {
    service_name: "AmazonKinesisFirehose",
    target_prefix: "Firehose_20150804",
    json_version: "1.1",
    endpoint_prefix: "firehose",
};
