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
use crate::model::{GetObjectMetadataRequest, ObjectMetadata, SseCustomerKey};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use gax::Result;
use gax::error::{Error, ServiceError, ServiceErrorBuilder};
use gax::marshaller::{Marshaller, Unmarshaller};
use gax::path_parameter;
use gax::query_parameter;
use gax::request::Request;
use gax::response::HttpResponse;
use gax::string_utils;

pub const SSE_CUSTOMER_ALGORITHM_HEADER: &str = "x-amz-server-side-encryption-customer-algorithm";
pub const SSE_CUSTOMER_KEY_HEADER: &str = "x-amz-server-side-encryption-customer-key";
pub const SSE_CUSTOMER_KEY_MD5_HEADER: &str = "x-amz-server-side-encryption-customer-key-MD5";
const USER_METADATA_PREFIX: &str = "x-amz-meta-";
const REQUEST_ID_HEADER: &str = "x-amz-request-id";

/// Marshalls [GetObjectMetadataRequest] as `HEAD /{bucket}/{key}`.
///
/// Fails with a binding error if the bucket or the key are unset.
#[derive(Clone, Copy, Debug, Default)]
pub struct GetObjectMetadataMarshaller;

impl Marshaller<GetObjectMetadataRequest> for GetObjectMetadataMarshaller {
    fn marshall(&self, input: &GetObjectMetadataRequest) -> Result<Request> {
        let _span = tracing::debug_span!(
            "marshall",
            service = METADATA.service_name,
            operation = "GetObjectMetadata"
        )
        .entered();
        let bucket = path_parameter::required(&input.bucket_name, "bucket_name")?;
        let key = path_parameter::required(&input.key, "key")?;
        let path = format!(
            "/{}/{}",
            path_parameter::segment(bucket)?,
            path_parameter::greedy(key)
        );
        let request = METADATA
            .request()
            .set_method(http::Method::HEAD)
            .set_resource_path(path);
        let request = query_parameter::add(request, "versionId", &input.version_id)?;
        let request = match &input.sse_customer_key {
            None => request,
            Some(k) => add_sse_customer_key(request, k)?,
        };
        tracing::debug!(
            versioned = input.version_id.is_some(),
            "marshalled object metadata request"
        );
        Ok(request)
    }
}

fn add_sse_customer_key(request: Request, key: &SseCustomerKey) -> Result<Request> {
    let md5 = match key.md5() {
        Some(m) => m.to_string(),
        None => {
            let raw = STANDARD.decode(key.key()).map_err(Error::ser)?;
            STANDARD.encode(md5::compute(&raw).0)
        }
    };
    request
        .add_header(SSE_CUSTOMER_ALGORITHM_HEADER, key.algorithm())?
        .add_header(SSE_CUSTOMER_KEY_HEADER, key.key())?
        .add_header(SSE_CUSTOMER_KEY_MD5_HEADER, &md5)
}

/// Parses the headers of a successful `GetObjectMetadata` response.
#[derive(Clone, Copy, Debug, Default)]
pub struct ObjectMetadataUnmarshaller;

impl Unmarshaller<ObjectMetadata> for ObjectMetadataUnmarshaller {
    fn unmarshall(&self, response: &HttpResponse) -> Result<ObjectMetadata> {
        let header = |name: &str| response.header(name).map(str::to_string);
        let content_length = response
            .header("Content-Length")
            .map(|v| v.parse::<i64>())
            .transpose()
            .map_err(Error::deser)?;
        let last_modified = response
            .header("Last-Modified")
            .map(parse_http_date)
            .transpose()?;
        let user_metadata = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                name.as_str()
                    .strip_prefix(USER_METADATA_PREFIX)
                    .map(|k| (k, value))
            })
            .map(|(k, value)| {
                value
                    .to_str()
                    .map(|v| (k.to_string(), v.to_string()))
                    .map_err(Error::deser)
            })
            .collect::<Result<_>>()?;
        Ok(ObjectMetadata {
            content_length,
            content_type: header("Content-Type"),
            content_encoding: header("Content-Encoding"),
            content_disposition: header("Content-Disposition"),
            cache_control: header("Cache-Control"),
            etag: response
                .header("ETag")
                .map(|v| v.trim_matches('"').to_string()),
            last_modified,
            version_id: header("x-amz-version-id"),
            server_side_encryption: header("x-amz-server-side-encryption"),
            sse_customer_algorithm: header(SSE_CUSTOMER_ALGORITHM_HEADER),
            sse_customer_key_md5: header(SSE_CUSTOMER_KEY_MD5_HEADER),
            storage_class: header("x-amz-storage-class"),
            delete_marker: response
                .header("x-amz-delete-marker")
                .map(string_utils::to_boolean),
            user_metadata,
        })
    }
}

fn parse_http_date(value: &str) -> Result<wkt::Timestamp> {
    use time::format_description::well_known::Rfc2822;
    let odt = time::OffsetDateTime::parse(value, &Rfc2822).map_err(Error::deser)?;
    wkt::Timestamp::try_from(odt).map_err(Error::deser)
}

/// Parses the error responses of `GetObjectMetadata`.
///
/// `HEAD` responses have no body, so the error code is derived from the
/// status code: 403 is `AccessDenied`, 404 is `NoSuchKey`. Responses with a
/// body are returned as transport errors, with the payload, for the HTTP
/// client to parse.
#[derive(Clone, Copy, Debug, Default)]
pub struct S3ErrorUnmarshaller;

impl Unmarshaller<ServiceError> for S3ErrorUnmarshaller {
    fn unmarshall(&self, response: &HttpResponse) -> Result<ServiceError> {
        let status = response.status();
        if !response.body().is_empty() {
            return Err(Error::http(
                status.as_u16(),
                response.headers().clone(),
                response.body().clone(),
            ));
        }
        let code = match status {
            http::StatusCode::FORBIDDEN => Some("AccessDenied"),
            http::StatusCode::NOT_FOUND => Some("NoSuchKey"),
            _ => None,
        };
        let message = status.canonical_reason().unwrap_or_default();
        let mut builder = ServiceErrorBuilder::new(message)
            .with_http_status_code(status.as_u16())
            .with_service_name(METADATA.service_name)
            .with_headers(response.headers().clone());
        if let Some(code) = code {
            builder = builder.with_error_code(code);
        }
        if let Some(id) = response.header(REQUEST_ID_HEADER) {
            builder = builder.with_request_id(id);
        }
        Ok(builder.build())
    }
}

/// Parses the response of `GetObjectMetadata`.
pub fn unmarshall_object_metadata(response: &HttpResponse) -> Result<ObjectMetadata> {
    if response.is_success() {
        return ObjectMetadataUnmarshaller.unmarshall(response);
    }
    let error = S3ErrorUnmarshaller.unmarshall(response)?;
    Err(Error::service(error))
}
