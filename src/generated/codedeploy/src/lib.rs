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


//! Models for AWS CodeDeploy.

/// The request and response records.
pub mod model;

/// The typed service errors.
pub mod errors;

mod operations;

use gax::json_protocol::ServiceMetadata;

/// The JSON protocol constants for AWS CodeDeploy.
pub const METADATA: ServiceMetadata = ServiceMetadata {
    service_name: "AmazonCodeDeploy",
    target_prefix: "CodeDeploy_20141006",
    json_version: "1.1",
    endpoint_prefix: "codedeploy",
};
