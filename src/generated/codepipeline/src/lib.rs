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


//! Models for AWS CodePipeline.
//!
//! # Example
//! ```
//! use cloud_sdk_codepipeline::model::ListPipelinesRequest;
//! use gax::json_protocol::JsonMarshaller;
//! use gax::marshaller::Marshaller;
//!
//! let request = JsonMarshaller.marshall(&ListPipelinesRequest::new())?;
//! assert_eq!(request.content().as_ref(), b"{}");
//! # Ok::<(), gax::error::Error>(())
//! ```

/// The request and response records.
pub mod model;

/// The typed service errors.
pub mod errors;

mod operations;

use gax::json_protocol::ServiceMetadata;

/// The JSON protocol constants for AWS CodePipeline.
pub const METADATA: ServiceMetadata = ServiceMetadata {
    service_name: "AWSCodePipeline",
    target_prefix: "CodePipeline_20150709",
    json_version: "1.1",
    endpoint_prefix: "codepipeline",
};
