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


//! Models for Amazon CloudSearch Domain.
//!
//! Searches use a REST binding: `GET /2013-01-01/search` with the request
//! fields as query parameters. Use [SearchMarshaller][protocol::SearchMarshaller]
//! to create the request and
//! [unmarshall_search_response][protocol::unmarshall_search_response] to parse
//! the response.
//!
//! # Example
//! ```
//! use cloud_sdk_cloudsearchdomain::model::SearchRequest;
//! use cloud_sdk_cloudsearchdomain::protocol::SearchMarshaller;
//! use gax::marshaller::Marshaller;
//!
//! let input = SearchRequest::new().set_query("star wars").set_size(10);
//! let request = SearchMarshaller.marshall(&input)?;
//! assert_eq!(request.resource_path(), "/2013-01-01/search");
//! assert_eq!(
//!     request.query_string(),
//!     "format=sdk&pretty=true&q=star%20wars&size=10"
//! );
//! # Ok::<(), gax::error::Error>(())
//! ```

/// The request and response records.
pub mod model;

/// The typed service errors.
pub mod errors;

/// The REST marshaller and unmarshaller for `Search`.
pub mod protocol;

use gax::request::ServiceInfo;

/// The protocol constants for Amazon CloudSearch Domain.
pub const METADATA: ServiceInfo = ServiceInfo {
    service_name: "AmazonCloudSearchDomain",
    endpoint_prefix: "cloudsearchdomain",
};
