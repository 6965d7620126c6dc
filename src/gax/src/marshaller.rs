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

use crate::Result;
use crate::error::Error;
use crate::request::Request;
use crate::response::HttpResponse;

/// The message for [Error::invalid_argument] when there is no input.
pub const INVALID_ARGUMENT: &str = "Invalid argument passed to marshall(...)";

/// Converts a request record into a [Request].
///
/// Marshallers are stateless unit structs. Each service crate implements this
/// trait for the records it sends.
pub trait Marshaller<T: ?Sized> {
    fn marshall(&self, input: &T) -> Result<Request>;

    /// Marshalls `input`, failing with an invalid argument error if there is
    /// no input.
    fn marshall_optional(&self, input: Option<&T>) -> Result<Request> {
        match input {
            Some(i) => self.marshall(i),
            None => Err(Error::invalid_argument(INVALID_ARGUMENT)),
        }
    }
}

/// Converts an [HttpResponse] into a response record.
pub trait Unmarshaller<T> {
    fn unmarshall(&self, response: &HttpResponse) -> Result<T>;
}
