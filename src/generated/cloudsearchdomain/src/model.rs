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


use std::collections::HashMap;

/// The request for `Search`.
///
/// Each field maps to one query parameter, e.g. [query][Self::query] is sent
/// as `q` and [filter_query][Self::filter_query] as `fq`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct SearchRequest {
    /// Retrieves a cursor for deep paging. Use `initial` on the first request.
    pub cursor: Option<String>,

    /// Expressions to compute for each hit, as a JSON object.
    pub expr: Option<String>,

    /// Facet options, as a JSON object.
    pub facet: Option<String>,

    /// A structured query that filters the results without affecting the
    /// scores.
    pub filter_query: Option<String>,

    /// Highlight options, as a JSON object.
    pub highlight: Option<String>,

    /// Returns partial results if some shards are unavailable.
    pub partial: Option<bool>,

    /// The search criteria.
    pub query: Option<String>,

    /// Options for the query parser, as a JSON object.
    pub query_options: Option<String>,

    /// One of `simple`, `structured`, `lucene` or `dismax`.
    pub query_parser: Option<String>,

    /// A comma-separated list of the fields to return.
    pub return_fields: Option<String>,

    pub size: Option<i64>,

    pub sort: Option<String>,

    /// The offset of the first hit, used for shallow paging.
    pub start: Option<i64>,

    /// Statistics options, as a JSON object.
    pub stats: Option<String>,
}

impl SearchRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [cursor][Self::cursor] field.
    pub fn set_cursor<T: Into<String>>(mut self, v: T) -> Self {
        self.cursor = Some(v.into());
        self
    }

    /// Sets or clears the [cursor][Self::cursor] field.
    pub fn set_or_clear_cursor<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.cursor = v.map(|x| x.into());
        self
    }

    /// Sets the [expr][Self::expr] field.
    pub fn set_expr<T: Into<String>>(mut self, v: T) -> Self {
        self.expr = Some(v.into());
        self
    }

    /// Sets or clears the [expr][Self::expr] field.
    pub fn set_or_clear_expr<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.expr = v.map(|x| x.into());
        self
    }

    /// Sets the [facet][Self::facet] field.
    ///
    /// # Example
    /// ```
    /// # use cloud_sdk_cloudsearchdomain::model::SearchRequest;
    /// let x = SearchRequest::new()
    ///     .set_query("star")
    ///     .set_facet(r#"{"genres":{"sort":"count","size":5}}"#);
    /// ```
    pub fn set_facet<T: Into<String>>(mut self, v: T) -> Self {
        self.facet = Some(v.into());
        self
    }

    /// Sets or clears the [facet][Self::facet] field.
    pub fn set_or_clear_facet<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.facet = v.map(|x| x.into());
        self
    }

    /// Sets the [filter_query][Self::filter_query] field.
    pub fn set_filter_query<T: Into<String>>(mut self, v: T) -> Self {
        self.filter_query = Some(v.into());
        self
    }

    /// Sets or clears the [filter_query][Self::filter_query] field.
    pub fn set_or_clear_filter_query<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.filter_query = v.map(|x| x.into());
        self
    }

    /// Sets the [highlight][Self::highlight] field.
    pub fn set_highlight<T: Into<String>>(mut self, v: T) -> Self {
        self.highlight = Some(v.into());
        self
    }

    /// Sets or clears the [highlight][Self::highlight] field.
    pub fn set_or_clear_highlight<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.highlight = v.map(|x| x.into());
        self
    }

    /// Sets the [partial][Self::partial] field.
    pub fn set_partial(mut self, v: bool) -> Self {
        self.partial = Some(v);
        self
    }

    /// Sets or clears the [partial][Self::partial] field.
    pub fn set_or_clear_partial(mut self, v: Option<bool>) -> Self {
        self.partial = v;
        self
    }

    /// Sets the [query][Self::query] field.
    pub fn set_query<T: Into<String>>(mut self, v: T) -> Self {
        self.query = Some(v.into());
        self
    }

    /// Sets or clears the [query][Self::query] field.
    pub fn set_or_clear_query<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.query = v.map(|x| x.into());
        self
    }

    /// Sets the [query_options][Self::query_options] field.
    pub fn set_query_options<T: Into<String>>(mut self, v: T) -> Self {
        self.query_options = Some(v.into());
        self
    }

    /// Sets or clears the [query_options][Self::query_options] field.
    pub fn set_or_clear_query_options<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.query_options = v.map(|x| x.into());
        self
    }

    /// Sets the [query_parser][Self::query_parser] field.
    pub fn set_query_parser<T: Into<String>>(mut self, v: T) -> Self {
        self.query_parser = Some(v.into());
        self
    }

    /// Sets or clears the [query_parser][Self::query_parser] field.
    pub fn set_or_clear_query_parser<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.query_parser = v.map(|x| x.into());
        self
    }

    /// Sets the [return_fields][Self::return_fields] field.
    pub fn set_return_fields<T: Into<String>>(mut self, v: T) -> Self {
        self.return_fields = Some(v.into());
        self
    }

    /// Sets or clears the [return_fields][Self::return_fields] field.
    pub fn set_or_clear_return_fields<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.return_fields = v.map(|x| x.into());
        self
    }

    /// Sets the [size][Self::size] field.
    pub fn set_size(mut self, v: i64) -> Self {
        self.size = Some(v);
        self
    }

    /// Sets or clears the [size][Self::size] field.
    pub fn set_or_clear_size(mut self, v: Option<i64>) -> Self {
        self.size = v;
        self
    }

    /// Sets the [sort][Self::sort] field.
    pub fn set_sort<T: Into<String>>(mut self, v: T) -> Self {
        self.sort = Some(v.into());
        self
    }

    /// Sets or clears the [sort][Self::sort] field.
    pub fn set_or_clear_sort<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.sort = v.map(|x| x.into());
        self
    }

    /// Sets the [start][Self::start] field.
    pub fn set_start(mut self, v: i64) -> Self {
        self.start = Some(v);
        self
    }

    /// Sets or clears the [start][Self::start] field.
    pub fn set_or_clear_start(mut self, v: Option<i64>) -> Self {
        self.start = v;
        self
    }

    /// Sets the [stats][Self::stats] field.
    pub fn set_stats<T: Into<String>>(mut self, v: T) -> Self {
        self.stats = Some(v.into());
        self
    }

    /// Sets or clears the [stats][Self::stats] field.
    pub fn set_or_clear_stats<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.stats = v.map(|x| x.into());
        self
    }
}

/// The response for `Search`.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct SearchResponse {
    pub status: Option<SearchStatus>,

    pub hits: Option<Hits>,

    /// The facet buckets, keyed by facet field.
    #[serde_as(as = "Option<wkt::internal::SkipNulls>")]
    pub facets: Option<HashMap<String, BucketInfo>>,
}

impl SearchResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [status][Self::status] field.
    pub fn set_status<T: Into<SearchStatus>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }

    /// Sets or clears the [status][Self::status] field.
    pub fn set_or_clear_status<T: Into<SearchStatus>>(mut self, v: Option<T>) -> Self {
        self.status = v.map(|x| x.into());
        self
    }

    /// Sets the [hits][Self::hits] field.
    pub fn set_hits<T: Into<Hits>>(mut self, v: T) -> Self {
        self.hits = Some(v.into());
        self
    }

    /// Sets or clears the [hits][Self::hits] field.
    pub fn set_or_clear_hits<T: Into<Hits>>(mut self, v: Option<T>) -> Self {
        self.hits = v.map(|x| x.into());
        self
    }

    /// Sets the [facets][Self::facets] field.
    pub fn set_facets<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<BucketInfo>,
    {
        self.facets = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }
}

/// The resource id and processing time of a search.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct SearchStatus {
    /// How long it took to process the request, in milliseconds.
    pub timems: Option<i64>,

    /// The encrypted resource id of the request.
    pub rid: Option<String>,
}

impl SearchStatus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [timems][Self::timems] field.
    pub fn set_timems(mut self, v: i64) -> Self {
        self.timems = Some(v);
        self
    }

    /// Sets or clears the [timems][Self::timems] field.
    pub fn set_or_clear_timems(mut self, v: Option<i64>) -> Self {
        self.timems = v;
        self
    }

    /// Sets the [rid][Self::rid] field.
    pub fn set_rid<T: Into<String>>(mut self, v: T) -> Self {
        self.rid = Some(v.into());
        self
    }

    /// Sets or clears the [rid][Self::rid] field.
    pub fn set_or_clear_rid<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.rid = v.map(|x| x.into());
        self
    }
}

/// The documents that match a search.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Hits {
    /// The total number of matches.
    pub found: Option<i64>,

    pub start: Option<i64>,

    /// Set when the request used a cursor.
    pub cursor: Option<String>,

    #[serde_as(as = "Option<wkt::internal::SkipNulls>")]
    pub hit: Option<Vec<Hit>>,
}

impl Hits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [found][Self::found] field.
    pub fn set_found(mut self, v: i64) -> Self {
        self.found = Some(v);
        self
    }

    /// Sets or clears the [found][Self::found] field.
    pub fn set_or_clear_found(mut self, v: Option<i64>) -> Self {
        self.found = v;
        self
    }

    /// Sets the [start][Self::start] field.
    pub fn set_start(mut self, v: i64) -> Self {
        self.start = Some(v);
        self
    }

    /// Sets or clears the [start][Self::start] field.
    pub fn set_or_clear_start(mut self, v: Option<i64>) -> Self {
        self.start = v;
        self
    }

    /// Sets the [cursor][Self::cursor] field.
    pub fn set_cursor<T: Into<String>>(mut self, v: T) -> Self {
        self.cursor = Some(v.into());
        self
    }

    /// Sets or clears the [cursor][Self::cursor] field.
    pub fn set_or_clear_cursor<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.cursor = v.map(|x| x.into());
        self
    }

    /// Sets the [hit][Self::hit] field.
    pub fn set_hit<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Hit>,
    {
        self.hit = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// The matching documents, empty when unset.
    pub fn hit(&self) -> &[Hit] {
        self.hit.as_deref().unwrap_or_default()
    }
}

/// A document that matches a search.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Hit {
    /// The document id.
    pub id: Option<String>,

    /// The returned fields. Every field can hold multiple values.
    #[serde_as(as = "Option<wkt::internal::SkipNulls<wkt::internal::SkipNulls>>")]
    pub fields: Option<HashMap<String, Vec<String>>>,

    /// The computed expressions.
    #[serde_as(as = "Option<wkt::internal::SkipNulls>")]
    pub exprs: Option<HashMap<String, String>>,

    /// The highlighted excerpts, keyed by field.
    #[serde_as(as = "Option<wkt::internal::SkipNulls>")]
    pub highlights: Option<HashMap<String, String>>,
}

impl Hit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [id][Self::id] field.
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets or clears the [id][Self::id] field.
    pub fn set_or_clear_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the [fields][Self::fields] field.
    ///
    /// # Example
    /// ```
    /// # use cloud_sdk_cloudsearchdomain::model::Hit;
    /// let x = Hit::new().set_fields([("title", vec!["Star Wars"]), ("year", vec!["1977"])]);
    /// assert_eq!(x.field("title"), ["Star Wars"]);
    /// ```
    pub fn set_fields<T, K, L, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, L)>,
        K: Into<String>,
        L: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.fields = Some(
            v.into_iter()
                .map(|(k, l)| (k.into(), l.into_iter().map(|i| i.into()).collect()))
                .collect(),
        );
        self
    }

    /// The values of the field `name`, empty if the field was not returned.
    pub fn field(&self, name: &str) -> &[String] {
        self.fields
            .as_ref()
            .and_then(|m| m.get(name))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Sets the [exprs][Self::exprs] field.
    pub fn set_exprs<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.exprs = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Sets the [highlights][Self::highlights] field.
    pub fn set_highlights<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.highlights = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }
}

/// The buckets of a facet.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct BucketInfo {
    #[serde_as(as = "Option<wkt::internal::SkipNulls>")]
    pub buckets: Option<Vec<Bucket>>,
}

impl BucketInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [buckets][Self::buckets] field.
    pub fn set_buckets<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Bucket>,
    {
        self.buckets = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// The buckets, empty when unset.
    pub fn buckets(&self) -> &[Bucket] {
        self.buckets.as_deref().unwrap_or_default()
    }
}

/// A facet value and its number of matches.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Bucket {
    pub value: Option<String>,
    pub count: Option<i64>,
}

impl Bucket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [value][Self::value] field.
    pub fn set_value<T: Into<String>>(mut self, v: T) -> Self {
        self.value = Some(v.into());
        self
    }

    /// Sets or clears the [value][Self::value] field.
    pub fn set_or_clear_value<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.value = v.map(|x| x.into());
        self
    }

    /// Sets the [count][Self::count] field.
    pub fn set_count(mut self, v: i64) -> Self {
        self.count = Some(v);
        self
    }

    /// Sets or clears the [count][Self::count] field.
    pub fn set_or_clear_count(mut self, v: Option<i64>) -> Self {
        self.count = v;
        self
    }
}
