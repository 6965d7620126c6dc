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


use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::collections::HashMap;

/// The only algorithm supported for customer-provided encryption keys.
pub const AES256: &str = "AES256";

/// The request for `GetObjectMetadata`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct GetObjectMetadataRequest {
    /// The bucket containing the object. Required.
    pub bucket_name: Option<String>,

    /// The object key. Required.
    pub key: Option<String>,

    /// A specific version of the object. The latest version is used when
    /// unset.
    pub version_id: Option<String>,

    /// The key used to encrypt the object, if it was stored with a
    /// customer-provided encryption key.
    pub sse_customer_key: Option<SseCustomerKey>,
}

impl GetObjectMetadataRequest {
    /// Creates a request for the latest version of `key` in `bucket_name`.
    pub fn new<B, K>(bucket_name: B, key: K) -> Self
    where
        B: Into<String>,
        K: Into<String>,
    {
        Self {
            bucket_name: Some(bucket_name.into()),
            key: Some(key.into()),
            ..Default::default()
        }
    }

    /// Sets the [bucket_name][Self::bucket_name] field.
    pub fn set_bucket_name<T: Into<String>>(mut self, v: T) -> Self {
        self.bucket_name = Some(v.into());
        self
    }

    /// Sets or clears the [bucket_name][Self::bucket_name] field.
    pub fn set_or_clear_bucket_name<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.bucket_name = v.map(|x| x.into());
        self
    }

    /// Sets the [key][Self::key] field.
    pub fn set_key<T: Into<String>>(mut self, v: T) -> Self {
        self.key = Some(v.into());
        self
    }

    /// Sets or clears the [key][Self::key] field.
    pub fn set_or_clear_key<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.key = v.map(|x| x.into());
        self
    }

    /// Sets the [version_id][Self::version_id] field.
    pub fn set_version_id<T: Into<String>>(mut self, v: T) -> Self {
        self.version_id = Some(v.into());
        self
    }

    /// Sets or clears the [version_id][Self::version_id] field.
    pub fn set_or_clear_version_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.version_id = v.map(|x| x.into());
        self
    }

    /// Sets the [sse_customer_key][Self::sse_customer_key] field.
    pub fn set_sse_customer_key<T: Into<SseCustomerKey>>(mut self, v: T) -> Self {
        self.sse_customer_key = Some(v.into());
        self
    }

    /// Sets or clears the [sse_customer_key][Self::sse_customer_key] field.
    pub fn set_or_clear_sse_customer_key<T: Into<SseCustomerKey>>(mut self, v: Option<T>) -> Self {
        self.sse_customer_key = v.map(|x| x.into());
        self
    }
}

/// A customer-provided encryption key (SSE-C).
///
/// The key is held base64-encoded, as it is sent on the wire. The MD5 digest
/// is computed from the decoded key unless set explicitly.
///
/// # Example
/// ```
/// # use cloud_sdk_s3::model::SseCustomerKey;
/// let key = SseCustomerKey::from_bytes(&[0_u8; 32]);
/// assert_eq!(key.algorithm(), "AES256");
/// assert_eq!(key.key(), "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct SseCustomerKey {
    key: String,
    algorithm: String,
    md5: Option<String>,
}

impl SseCustomerKey {
    /// Creates a key from its base64 encoding.
    pub fn new<T: Into<String>>(base64_key: T) -> Self {
        Self {
            key: base64_key.into(),
            algorithm: AES256.to_string(),
            md5: None,
        }
    }

    /// Creates a key from the raw key bytes.
    pub fn from_bytes(key: &[u8]) -> Self {
        Self::new(STANDARD.encode(key))
    }

    /// Sets the algorithm, [AES256] by default.
    pub fn set_algorithm<T: Into<String>>(mut self, v: T) -> Self {
        self.algorithm = v.into();
        self
    }

    /// Sets the base64 encoded MD5 digest of the key.
    pub fn set_md5<T: Into<String>>(mut self, v: T) -> Self {
        self.md5 = Some(v.into());
        self
    }

    /// Sets or clears the [md5][Self::md5] field.
    pub fn set_or_clear_md5<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.md5 = v.map(|x| x.into());
        self
    }

    /// The base64 encoded key.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// The MD5 digest set with [set_md5][Self::set_md5], if any.
    pub fn md5(&self) -> Option<&str> {
        self.md5.as_deref()
    }
}

impl std::fmt::Debug for SseCustomerKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SseCustomerKey")
            .field("key", &"[censored]")
            .field("algorithm", &self.algorithm)
            .field("md5", &self.md5)
            .finish()
    }
}

/// The metadata of an object, parsed from the response headers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct ObjectMetadata {
    /// The object size, in bytes.
    pub content_length: Option<i64>,

    pub content_type: Option<String>,

    pub content_encoding: Option<String>,

    pub content_disposition: Option<String>,

    pub cache_control: Option<String>,

    /// The entity tag, without the surrounding quotes.
    pub etag: Option<String>,

    pub last_modified: Option<wkt::Timestamp>,

    /// Set if versioning is enabled on the bucket.
    pub version_id: Option<String>,

    /// `AES256` or `aws:kms` for objects encrypted with a service-managed
    /// key.
    pub server_side_encryption: Option<String>,

    pub sse_customer_algorithm: Option<String>,

    pub sse_customer_key_md5: Option<String>,

    /// Unset for `STANDARD` objects.
    pub storage_class: Option<String>,

    /// True if the version is a delete marker.
    pub delete_marker: Option<bool>,

    /// The `x-amz-meta-*` headers, keyed by the name after the prefix.
    pub user_metadata: HashMap<String, String>,
}

impl ObjectMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [content_length][Self::content_length] field.
    pub fn set_content_length(mut self, v: i64) -> Self {
        self.content_length = Some(v);
        self
    }

    /// Sets or clears the [content_length][Self::content_length] field.
    pub fn set_or_clear_content_length(mut self, v: Option<i64>) -> Self {
        self.content_length = v;
        self
    }

    /// Sets the [content_type][Self::content_type] field.
    pub fn set_content_type<T: Into<String>>(mut self, v: T) -> Self {
        self.content_type = Some(v.into());
        self
    }

    /// Sets or clears the [content_type][Self::content_type] field.
    pub fn set_or_clear_content_type<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.content_type = v.map(|x| x.into());
        self
    }

    /// Sets the [content_encoding][Self::content_encoding] field.
    pub fn set_content_encoding<T: Into<String>>(mut self, v: T) -> Self {
        self.content_encoding = Some(v.into());
        self
    }

    /// Sets or clears the [content_encoding][Self::content_encoding] field.
    pub fn set_or_clear_content_encoding<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.content_encoding = v.map(|x| x.into());
        self
    }

    /// Sets the [content_disposition][Self::content_disposition] field.
    pub fn set_content_disposition<T: Into<String>>(mut self, v: T) -> Self {
        self.content_disposition = Some(v.into());
        self
    }

    /// Sets or clears the [content_disposition][Self::content_disposition] field.
    pub fn set_or_clear_content_disposition<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.content_disposition = v.map(|x| x.into());
        self
    }

    /// Sets the [cache_control][Self::cache_control] field.
    pub fn set_cache_control<T: Into<String>>(mut self, v: T) -> Self {
        self.cache_control = Some(v.into());
        self
    }

    /// Sets or clears the [cache_control][Self::cache_control] field.
    pub fn set_or_clear_cache_control<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.cache_control = v.map(|x| x.into());
        self
    }

    /// Sets the [etag][Self::etag] field.
    pub fn set_etag<T: Into<String>>(mut self, v: T) -> Self {
        self.etag = Some(v.into());
        self
    }

    /// Sets or clears the [etag][Self::etag] field.
    pub fn set_or_clear_etag<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.etag = v.map(|x| x.into());
        self
    }

    /// Sets the [last_modified][Self::last_modified] field.
    pub fn set_last_modified<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.last_modified = Some(v.into());
        self
    }

    /// Sets or clears the [last_modified][Self::last_modified] field.
    pub fn set_or_clear_last_modified<T: Into<wkt::Timestamp>>(mut self, v: Option<T>) -> Self {
        self.last_modified = v.map(|x| x.into());
        self
    }

    /// Sets the [version_id][Self::version_id] field.
    pub fn set_version_id<T: Into<String>>(mut self, v: T) -> Self {
        self.version_id = Some(v.into());
        self
    }

    /// Sets or clears the [version_id][Self::version_id] field.
    pub fn set_or_clear_version_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.version_id = v.map(|x| x.into());
        self
    }

    /// Sets the [server_side_encryption][Self::server_side_encryption] field.
    pub fn set_server_side_encryption<T: Into<String>>(mut self, v: T) -> Self {
        self.server_side_encryption = Some(v.into());
        self
    }

    /// Sets or clears the [server_side_encryption][Self::server_side_encryption] field.
    pub fn set_or_clear_server_side_encryption<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.server_side_encryption = v.map(|x| x.into());
        self
    }

    /// Sets the [sse_customer_algorithm][Self::sse_customer_algorithm] field.
    pub fn set_sse_customer_algorithm<T: Into<String>>(mut self, v: T) -> Self {
        self.sse_customer_algorithm = Some(v.into());
        self
    }

    /// Sets or clears the [sse_customer_algorithm][Self::sse_customer_algorithm] field.
    pub fn set_or_clear_sse_customer_algorithm<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.sse_customer_algorithm = v.map(|x| x.into());
        self
    }

    /// Sets the [sse_customer_key_md5][Self::sse_customer_key_md5] field.
    pub fn set_sse_customer_key_md5<T: Into<String>>(mut self, v: T) -> Self {
        self.sse_customer_key_md5 = Some(v.into());
        self
    }

    /// Sets or clears the [sse_customer_key_md5][Self::sse_customer_key_md5] field.
    pub fn set_or_clear_sse_customer_key_md5<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.sse_customer_key_md5 = v.map(|x| x.into());
        self
    }

    /// Sets the [storage_class][Self::storage_class] field.
    pub fn set_storage_class<T: Into<String>>(mut self, v: T) -> Self {
        self.storage_class = Some(v.into());
        self
    }

    /// Sets or clears the [storage_class][Self::storage_class] field.
    pub fn set_or_clear_storage_class<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.storage_class = v.map(|x| x.into());
        self
    }

    /// Sets the [delete_marker][Self::delete_marker] field.
    pub fn set_delete_marker(mut self, v: bool) -> Self {
        self.delete_marker = Some(v);
        self
    }

    /// Sets or clears the [delete_marker][Self::delete_marker] field.
    pub fn set_or_clear_delete_marker(mut self, v: Option<bool>) -> Self {
        self.delete_marker = v;
        self
    }

    /// Sets the [user_metadata][Self::user_metadata] field.
    pub fn set_user_metadata<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.user_metadata = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}
