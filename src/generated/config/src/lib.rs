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


//! Models for AWS Config.
//!
//! Custom rules report their results with `PutEvaluations`.
//!
//! # Example
//! ```
//! use cloud_sdk_config::model::{Evaluation, PutEvaluationsRequest};
//! use gax::json_protocol::JsonMarshaller;
//! use gax::marshaller::Marshaller;
//!
//! let input = PutEvaluationsRequest::new()
//!     .set_evaluations([Evaluation::new()
//!         .set_compliance_resource_type("AWS::EC2::Instance")
//!         .set_compliance_resource_id("i-0123456789abcdef0")
//!         .set_compliance_type("COMPLIANT")])
//!     .set_result_token("token");
//! let request = JsonMarshaller.marshall(&input)?;
//! assert_eq!(
//!     request.header("X-Amz-Target"),
//!     Some("StarlingDoveService.PutEvaluations")
//! );
//! # Ok::<(), gax::error::Error>(())
//! ```

/// The request and response records.
pub mod model;

/// The typed service errors.
pub mod errors;

mod operations;

use gax::json_protocol::ServiceMetadata;

/// The JSON protocol constants for AWS Config.
pub const METADATA: ServiceMetadata = ServiceMetadata {
    service_name: "AmazonConfig",
    target_prefix: "StarlingDoveService",
    json_version: "1.1",
    endpoint_prefix: "config",
};
