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

//! Implementation details provided by the `cloud-sdk-wkt` crate.
//!
//! These types are intended for developers of the cloud service client
//! libraries for Rust. They are undocumented and may change at any time.

use serde_with::{DeserializeAs, SerializeAs};
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Drops `null` elements from lists and `null` values from maps.
///
/// The services occasionally send `[ "a", null, "b" ]`. The models hold
/// `Vec<T>` and `HashMap<K, V>`, so those elements are skipped when parsing,
/// and there is nothing to skip when serializing.
pub struct SkipNulls<U = serde_with::Same>(std::marker::PhantomData<U>);

impl<'de, T, U> DeserializeAs<'de, Vec<T>> for SkipNulls<U>
where
    U: DeserializeAs<'de, T>,
{
    fn deserialize_as<D>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        let items: Vec<Option<T>> =
            <Vec<Option<U>> as DeserializeAs<'de, Vec<Option<T>>>>::deserialize_as(deserializer)?;
        Ok(items.into_iter().flatten().collect())
    }
}

impl<T, U> SerializeAs<Vec<T>> for SkipNulls<U>
where
    U: SerializeAs<T>,
{
    fn serialize_as<S>(source: &Vec<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        <Vec<U> as SerializeAs<Vec<T>>>::serialize_as(source, serializer)
    }
}

impl<'de, K, V, U, H> DeserializeAs<'de, HashMap<K, V, H>> for SkipNulls<U>
where
    K: serde::de::Deserialize<'de> + Eq + Hash,
    U: DeserializeAs<'de, V>,
    H: BuildHasher + Default,
{
    fn deserialize_as<D>(deserializer: D) -> Result<HashMap<K, V, H>, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        let entries: HashMap<K, Option<V>, H> = <HashMap<
            serde_with::Same,
            Option<U>,
            H,
        > as DeserializeAs<'de, HashMap<K, Option<V>, H>>>::deserialize_as(
            deserializer
        )?;
        Ok(entries
            .into_iter()
            .filter_map(|(k, v)| v.map(|v| (k, v)))
            .collect())
    }
}

impl<K, V, U, H> SerializeAs<HashMap<K, V, H>> for SkipNulls<U>
where
    K: serde::ser::Serialize,
    U: SerializeAs<V>,
{
    fn serialize_as<S>(source: &HashMap<K, V, H>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(source.len()))?;
        for (k, v) in source {
            map.serialize_entry(k, &serde_with::ser::SerializeAsWrap::<V, U>::new(v))?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use serde_with::serde_as;
    type Result = anyhow::Result<()>;

    #[serde_as]
    #[serde_with::skip_serializing_none]
    #[derive(Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default)]
    struct Helper {
        #[serde_as(as = "Option<SkipNulls>")]
        list: Option<Vec<String>>,
        #[serde_as(as = "Option<SkipNulls>")]
        map: Option<HashMap<String, String>>,
        #[serde_as(as = "Option<SkipNulls<SkipNulls>>")]
        nested: Option<HashMap<String, Vec<String>>>,
    }

    #[test]
    fn drops_null_elements() -> Result {
        let input = json!({
            "list": ["a", null, "b"],
            "map": {"k1": "v1", "k2": null},
            "nested": {"f": ["x", null], "g": null},
        });
        let got = serde_json::from_value::<Helper>(input)?;
        let want = Helper {
            list: Some(vec!["a".into(), "b".into()]),
            map: Some(HashMap::from([("k1".into(), "v1".into())])),
            nested: Some(HashMap::from([("f".into(), vec!["x".into()])])),
        };
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn null_collection_is_unset() -> Result {
        let got = serde_json::from_value::<Helper>(json!({"list": null, "map": null}))?;
        assert_eq!(got, Helper::default());
        Ok(())
    }

    #[test]
    fn empty_collection_is_sent() -> Result {
        let input = Helper {
            list: Some(Vec::new()),
            ..Default::default()
        };
        let got = serde_json::to_value(&input)?;
        assert_eq!(got, json!({"list": []}));
        assert_eq!(serde_json::to_value(Helper::default())?, json!({}));
        Ok(())
    }

    #[test]
    fn serialize() -> Result {
        let input = Helper {
            list: Some(vec!["a".into()]),
            map: Some(HashMap::from([("k".into(), "v".into())])),
            nested: Some(HashMap::from([("f".into(), vec!["x".into(), "y".into()])])),
        };
        let got = serde_json::to_value(&input)?;
        assert_eq!(
            got,
            json!({"list": ["a"], "map": {"k": "v"}, "nested": {"f": ["x", "y"]}})
        );
        Ok(())
    }
}
