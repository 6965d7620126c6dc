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

//! Models and object mapper for Amazon DynamoDB.
//!
//! The [model] module contains the request and response records for the item
//! operations. They use the JSON 1.0 protocol, see
//! [JsonMarshaller][gax::json_protocol::JsonMarshaller].
//!
//! The [datamodeling] module maps application types to items.

/// The request and response records.
pub mod model;

/// The typed service errors.
pub mod errors;

/// Maps application types to DynamoDB items.
pub mod datamodeling;

mod operations;

use gax::json_protocol::ServiceMetadata;

/// The JSON protocol constants for DynamoDB.
pub const METADATA: ServiceMetadata = ServiceMetadata {
    service_name: "AmazonDynamoDBv2",
    target_prefix: "DynamoDB_20120810",
    json_version: "1.0",
    endpoint_prefix: "dynamodb",
};
