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


//! Object metadata requests for Amazon S3.
//!
//! `GetObjectMetadata` is a `HEAD /{bucket}/{key}` request. The metadata is
//! returned in the response headers, there is no response body.
//!
//! # Example
//! ```
//! use cloud_sdk_s3::model::GetObjectMetadataRequest;
//! use cloud_sdk_s3::protocol::GetObjectMetadataMarshaller;
//! use gax::marshaller::Marshaller;
//!
//! let input = GetObjectMetadataRequest::new("my-bucket", "photos/2015/cat.jpg");
//! let request = GetObjectMetadataMarshaller.marshall(&input)?;
//! assert_eq!(request.method(), http::Method::HEAD);
//! assert_eq!(request.resource_path(), "/my-bucket/photos/2015/cat.jpg");
//! # Ok::<(), gax::error::Error>(())
//! ```

/// The request and response records.
pub mod model;

/// The typed service errors.
pub mod errors;

/// The REST marshaller and unmarshallers for `GetObjectMetadata`.
pub mod protocol;

use gax::request::ServiceInfo;

/// The protocol constants for Amazon S3.
pub const METADATA: ServiceInfo = ServiceInfo {
    service_name: "Amazon S3",
    endpoint_prefix: "s3",
};
