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

use crate::Result;
use crate::error::Error;
use crate::request::Request;

/// Adds a query parameter to a request.
///
/// Some request fields are sent as query parameters and may need special
/// formatting:
/// - Simple scalars are formatted as usual.
/// - Timestamps use ISO-8601, binary values use base64.
/// - [Option] fields that do not contain a value are not included in the HTTP
///   query.
/// - Repeated fields are formatted as repeated query parameters.
///
/// This function is called from the service crates. It is not intended for
/// general use.
pub fn add<T>(request: Request, name: &str, parameter: &T) -> Result<Request>
where
    T: QueryParameter + ?Sized,
{
    QueryParameter::add(parameter, request, name)
}

/// [QueryParameter] is a trait representing types that can be used as a query
/// parameter.
pub trait QueryParameter {
    fn add(&self, request: Request, name: &str) -> Result<Request>;
}

impl<T: QueryParameter> QueryParameter for Option<T> {
    fn add(&self, request: Request, name: &str) -> Result<Request> {
        match &self {
            None => Ok(request),
            Some(t) => t.add(request, name),
        }
    }
}

impl<T: QueryParameter> QueryParameter for Vec<T> {
    fn add(&self, request: Request, name: &str) -> Result<Request> {
        let mut request = request;
        for e in self.iter() {
            request = e.add(request, name)?;
        }
        Ok(request)
    }
}

impl<T: crate::request_parameter::RequestParameter> QueryParameter for T {
    fn add(&self, request: Request, name: &str) -> Result<Request> {
        let s = self.format().map_err(Error::ser)?;
        Ok(request.add_parameter(name, s))
    }
}
