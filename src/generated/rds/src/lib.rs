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


//! Models for Amazon Relational Database Service.
//!
//! The service uses the query protocol: the request records implement
//! [QueryOperation][gax::query_protocol::QueryOperation] and are sent with
//! [QueryMarshaller][gax::query_protocol::QueryMarshaller].
//!
//! # Example
//! ```
//! use cloud_sdk_rds::model::DeleteDBSnapshotRequest;
//! use gax::marshaller::Marshaller;
//! use gax::query_protocol::QueryMarshaller;
//!
//! let input = DeleteDBSnapshotRequest::new().set_db_snapshot_identifier("mydbsnapshot");
//! let request = QueryMarshaller.marshall(&input)?;
//! assert_eq!(
//!     request.content().as_ref(),
//!     b"Action=DeleteDBSnapshot&Version=2014-10-31&DBSnapshotIdentifier=mydbsnapshot"
//! );
//! # Ok::<(), gax::error::Error>(())
//! ```

/// The request and response records.
pub mod model;

/// The typed service errors.
pub mod errors;

mod operations;

use gax::request::ServiceInfo;

/// The API version sent with each request.
pub const API_VERSION: &str = "2014-10-31";

/// The protocol constants for Amazon RDS.
pub const METADATA: ServiceInfo = ServiceInfo {
    service_name: "AmazonRDS",
    endpoint_prefix: "rds",
};
