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


use crate::METADATA;
use crate::model::{SearchRequest, SearchResponse};
use gax::Result;
use gax::error::Error;
use gax::json_protocol::{JsonErrorUnmarshaller, JsonUnmarshaller};
use gax::marshaller::{Marshaller, Unmarshaller};
use gax::query_parameter;
use gax::request::Request;
use gax::response::HttpResponse;

/// The resource path of `Search`.
pub const SEARCH_PATH: &str = "/2013-01-01/search";

/// Marshalls [SearchRequest] as `GET /2013-01-01/search?format=sdk&pretty=true`
/// followed by the request fields.
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchMarshaller;

impl Marshaller<SearchRequest> for SearchMarshaller {
    fn marshall(&self, input: &SearchRequest) -> Result<Request> {
        let _span = tracing::debug_span!(
            "marshall",
            service = METADATA.service_name,
            operation = "Search"
        )
        .entered();
        let request = METADATA
            .request()
            .set_method(http::Method::GET)
            .set_resource_path(SEARCH_PATH)
            .add_parameter("format", "sdk")
            .add_parameter("pretty", "true");
        let request = query_parameter::add(request, "cursor", &input.cursor)?;
        let request = query_parameter::add(request, "expr", &input.expr)?;
        let request = query_parameter::add(request, "facet", &input.facet)?;
        let request = query_parameter::add(request, "fq", &input.filter_query)?;
        let request = query_parameter::add(request, "highlight", &input.highlight)?;
        let request = query_parameter::add(request, "partial", &input.partial)?;
        let request = query_parameter::add(request, "q", &input.query)?;
        let request = query_parameter::add(request, "q.options", &input.query_options)?;
        let request = query_parameter::add(request, "q.parser", &input.query_parser)?;
        let request = query_parameter::add(request, "return", &input.return_fields)?;
        let request = query_parameter::add(request, "size", &input.size)?;
        let request = query_parameter::add(request, "sort", &input.sort)?;
        let request = query_parameter::add(request, "start", &input.start)?;
        let request = query_parameter::add(request, "stats", &input.stats)?;
        tracing::debug!(
            parameters = request.parameters().len(),
            "marshalled search request"
        );
        Ok(request)
    }
}

/// Parses the response of `Search`.
///
/// Successful responses are parsed into a [SearchResponse]. Other responses
/// become an [Error] holding the [ServiceError][gax::error::ServiceError].
pub fn unmarshall_search_response(response: &HttpResponse) -> Result<SearchResponse> {
    if response.is_success() {
        return JsonUnmarshaller::<SearchResponse>::new().unmarshall(response);
    }
    let error = JsonErrorUnmarshaller::new(METADATA.service_name).unmarshall(response)?;
    Err(Error::service(error))
}
