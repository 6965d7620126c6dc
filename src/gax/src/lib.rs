// Copyright 2024 Google LLC
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

//! Shared runtime for the cloud service client libraries.
//!
//! This crate contains the types and functions used by every service crate:
//! the [Request][request::Request] produced by marshallers, the
//! [Marshaller][marshaller::Marshaller] and
//! [Unmarshaller][marshaller::Unmarshaller] traits, the JSON and query
//! protocols, and the error types.
//!
//! <div class="warning">
//! Sending the requests is not part of this crate. Applications convert a
//! <code>Request</code> into an <code>http::Request</code> and use the HTTP
//! client of their choice.
//! </div>

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all marshallers and unmarshallers.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by the service crates.
pub mod error;

/// The client configuration: region, endpoint, user agent, and tracing.
pub mod client_config;

/// The HTTP request created by marshallers.
pub mod request;

/// The HTTP response consumed by unmarshallers.
pub mod response;

/// The marshalling and unmarshalling traits.
pub mod marshaller;

/// Marshalling and unmarshalling for services using the JSON protocol.
pub mod json_protocol;

/// Marshalling for services using the query protocol.
pub mod query_protocol;

/// Helpers to add query parameters to a [Request][request::Request].
#[doc(hidden)]
pub mod query_parameter;

/// Helpers for required and percent-encoded path parameters.
///
/// Parameters used in the request path are required, but the request records
/// hold them as `Option<T>`. The service crates always write:
///
/// ```ignore
/// let bucket = gax::path_parameter::required(&req.bucket_name, "bucket_name")?;
/// ```
#[doc(hidden)]
pub mod path_parameter;

/// Implementation details for [query_parameter](crate::query_parameter),
/// [path_parameter](crate::path_parameter) and header values.
#[doc(hidden)]
pub mod request_parameter;

/// Conversions between strings and scalar values.
pub mod string_utils;
