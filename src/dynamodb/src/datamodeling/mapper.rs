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

use super::{AttributeType, Document, MappingError, Property, Reflector, Result};
use crate::model::{
    AttributeValue, DeleteItemRequest, ExpectedAttributeValue, GetItemRequest, Item,
    PutItemRequest,
};
use std::collections::HashMap;

/// Converts mapped types to items, and builds the item requests.
///
/// # Example
/// ```
/// # use cloud_sdk_dynamodb::datamodeling::*;
/// # #[derive(Default)]
/// # struct Customer { id: Option<String> }
/// # impl Document for Customer {
/// #     fn table() -> Option<Table> { Some(Table::new("customers")) }
/// #     fn properties() -> &'static [Property<Self>] {
/// #         static P: [Property<Customer>; 1] = [Property::new(
/// #             "getId", &[Annotation::HashKey { attribute_name: "" }],
/// #             |c: &Customer| to_attribute(&c.id))];
/// #         &P
/// #     }
/// # }
/// let mapper = DynamoDbMapper::new();
/// let customer = Customer { id: Some("c-1".into()) };
/// let request = mapper.get_request(&customer)?;
/// assert_eq!(request.table_name.as_deref(), Some("customers"));
/// # Ok::<(), MappingError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DynamoDbMapper<'a> {
    reflector: &'a Reflector,
}

impl DynamoDbMapper<'static> {
    /// Creates a mapper using [Reflector::global].
    pub fn new() -> Self {
        Self {
            reflector: Reflector::global(),
        }
    }
}

impl Default for DynamoDbMapper<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> DynamoDbMapper<'a> {
    /// Creates a mapper using `reflector`.
    pub fn with_reflector(reflector: &'a Reflector) -> Self {
        Self { reflector }
    }

    pub fn reflector(&self) -> &'a Reflector {
        self.reflector
    }

    /// Converts `value` to an item. Unset properties are not included.
    pub fn to_item<T: Document>(&self, value: &T) -> Item {
        self.reflector
            .relevant_getters::<T>()
            .into_iter()
            .filter_map(|getter| {
                getter
                    .get(value)
                    .map(|v| (self.reflector.attribute_name(getter), v))
            })
            .collect()
    }

    /// The primary key of `value`.
    ///
    /// Fails if `T` has no hash key, or if a key property is unset.
    pub fn key<T: Document>(&self, value: &T) -> Result<Item> {
        self.reflector.primary_hash_key_getter::<T>()?;
        self.reflector
            .primary_key_getters::<T>()
            .into_iter()
            .map(|getter| -> Result<(String, AttributeValue)> {
                let v = getter.get(value).ok_or(MappingError::MissingKey {
                    getter: getter.getter_name(),
                    type_name: T::type_name(),
                })?;
                Ok((self.reflector.attribute_name(getter), v))
            })
            .collect()
    }

    /// Creates a new `T` from the attributes in `item`.
    ///
    /// Attributes without a matching property are ignored, as are attributes
    /// set to `NULL`.
    pub fn from_item<T: Document>(&self, item: &Item) -> Result<T> {
        let mut value = T::default();
        for getter in self.reflector.relevant_getters::<T>() {
            let name = self.reflector.attribute_name(getter);
            let Some(attribute) = item.get(&name) else {
                continue;
            };
            if attribute.null == Some(true) {
                continue;
            }
            self.set(getter, &mut value, name, attribute)?;
        }
        Ok(value)
    }

    fn set<T: Document>(
        &self,
        getter: &Property<T>,
        value: &mut T,
        name: String,
        attribute: &AttributeValue,
    ) -> Result<()> {
        let setter = self.reflector.setter(getter)?;
        setter(value, attribute).map_err(|source| MappingError::Conversion {
            attribute: name,
            source,
        })
    }

    /// Builds the request to save `value`.
    ///
    /// Unset auto-generated keys receive a random UUID. The version attribute,
    /// if any, is incremented (starting at 1), and the request expects the
    /// stored item to have the previous version. Both changes are applied to
    /// `value`, and only if the request is built.
    pub fn put_request<T: Document>(&self, value: &mut T) -> Result<PutItemRequest> {
        let _span = tracing::debug_span!("put_request", type_name = T::type_name()).entered();
        let table = self.reflector.table::<T>()?;
        let mut expected = HashMap::new();
        let mut updates = Vec::new();
        for getter in self.reflector.relevant_getters::<T>() {
            let current = getter.get(value);
            if current.is_none() && self.reflector.is_assignable_key(getter) {
                let name = self.reflector.attribute_name(getter);
                let generated = AttributeValue::new().set_s(uuid::Uuid::new_v4().to_string());
                tracing::debug!(attribute = name.as_str(), "generated key");
                updates.push((getter, name, generated));
                continue;
            }
            if !self.reflector.is_version_attribute_getter(getter) {
                continue;
            }
            let name = self.reflector.attribute_name(getter);
            let next = match current {
                None => {
                    expected.insert(name.clone(), ExpectedAttributeValue::new().set_exists(false));
                    1
                }
                Some(current) => {
                    let version = i64::from_attribute(&current).map_err(|source| {
                        MappingError::Conversion {
                            attribute: name.clone(),
                            source,
                        }
                    })?;
                    let next = version
                        .checked_add(1)
                        .ok_or_else(|| MappingError::VersionOverflow {
                            attribute: name.clone(),
                        })?;
                    expected.insert(
                        name.clone(),
                        ExpectedAttributeValue::new()
                            .set_exists(true)
                            .set_value(current),
                    );
                    next
                }
            };
            updates.push((getter, name, next.to_attribute()));
        }
        self.reflector.primary_hash_key_getter::<T>()?;
        for getter in self.reflector.primary_key_getters::<T>() {
            let assigned = updates
                .iter()
                .any(|(g, _, _)| g.getter_name() == getter.getter_name());
            if !assigned && getter.get(value).is_none() {
                return Err(MappingError::MissingKey {
                    getter: getter.getter_name(),
                    type_name: T::type_name(),
                });
            }
        }
        // `value` is not modified unless every update converts.
        for (getter, name, attribute) in &updates {
            self.set(getter, &mut T::default(), name.clone(), attribute)?;
        }
        for (getter, name, attribute) in updates {
            self.set(getter, value, name, &attribute)?;
        }
        let mut request = PutItemRequest::new()
            .set_table_name(table.table_name)
            .set_item(self.to_item(value));
        if !expected.is_empty() {
            request = request.set_expected(expected);
        }
        Ok(request)
    }

    /// Builds the request to load the item with the key of `key`.
    pub fn get_request<T: Document>(&self, key: &T) -> Result<GetItemRequest> {
        let table = self.reflector.table::<T>()?;
        Ok(GetItemRequest::new()
            .set_table_name(table.table_name)
            .set_key(self.key(key)?))
    }

    /// Builds the request to delete `value`.
    ///
    /// If `T` has a version attribute, the request expects the stored item
    /// to have the version in `value`.
    pub fn delete_request<T: Document>(&self, value: &T) -> Result<DeleteItemRequest> {
        let table = self.reflector.table::<T>()?;
        let expected = self
            .reflector
            .relevant_getters::<T>()
            .into_iter()
            .filter(|getter| self.reflector.is_version_attribute_getter(*getter))
            .map(|getter| {
                let condition = match getter.get(value) {
                    None => ExpectedAttributeValue::new().set_exists(false),
                    Some(v) => ExpectedAttributeValue::new().set_exists(true).set_value(v),
                };
                (self.reflector.attribute_name(getter), condition)
            })
            .collect::<HashMap<_, _>>();
        let mut request = DeleteItemRequest::new()
            .set_table_name(table.table_name)
            .set_key(self.key(value)?);
        if !expected.is_empty() {
            request = request.set_expected(expected);
        }
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::{Customer, Event, Nested};
    use super::*;
    use cloud_sdk_test_utils::tracing::enable_tracing;
    use gax::json_protocol::JsonMarshaller;
    use gax::marshaller::Marshaller;
    use pretty_assertions::assert_eq;
    type TestResult = anyhow::Result<()>;

    fn customer() -> anyhow::Result<Customer> {
        Ok(Customer {
            id: Some("c-1".into()),
            created_at: Some(wkt::Timestamp::new(1747388772, 0)?),
            full_name: Some("Alice".into()),
            active: Some(true),
            version: None,
            region: Some("eu".into()),
            tags: Some(vec!["vip".into()]),
            notes: Some("not mapped".into()),
        })
    }

    #[test]
    fn to_item() -> TestResult {
        let reflector = Reflector::new();
        let mapper = DynamoDbMapper::with_reflector(&reflector);
        let got = mapper.to_item(&customer()?);
        let want = Item::from([
            ("id".to_string(), AttributeValue::new().set_s("c-1")),
            (
                "created".to_string(),
                AttributeValue::new().set_s("2025-05-16T09:46:12.000Z"),
            ),
            ("full_name".to_string(), AttributeValue::new().set_s("Alice")),
            ("active".to_string(), AttributeValue::new().set_n("1")),
            ("region_index".to_string(), AttributeValue::new().set_s("eu")),
            ("tags".to_string(), AttributeValue::new().set_ss(["vip"])),
        ]);
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn from_item() -> TestResult {
        let mapper = DynamoDbMapper::new();
        let item = Item::from([
            ("id".to_string(), AttributeValue::new().set_s("c-1")),
            ("full_name".to_string(), AttributeValue::new().set_s("Alice")),
            ("active".to_string(), AttributeValue::new().set_bool(false)),
            ("ver".to_string(), AttributeValue::new().set_n("7")),
            ("region_index".to_string(), AttributeValue::new().set_null(true)),
            ("unknown".to_string(), AttributeValue::new().set_s("ignored")),
        ]);
        let got = mapper.from_item::<Customer>(&item)?;
        let want = Customer {
            id: Some("c-1".into()),
            full_name: Some("Alice".into()),
            active: Some(false),
            version: Some(7),
            ..Default::default()
        };
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn from_item_read_only() {
        let mapper = DynamoDbMapper::new();
        let item = Item::from([("tags".to_string(), AttributeValue::new().set_ss(["a"]))]);
        let got = mapper.from_item::<Customer>(&item);
        assert!(
            matches!(&got, Err(MappingError::MissingSetter { setter, .. }) if setter == "setTags"),
            "{got:?}"
        );
    }

    #[test]
    fn from_item_bad_type() {
        let mapper = DynamoDbMapper::new();
        let item = Item::from([("id".to_string(), AttributeValue::new().set_n("42"))]);
        let got = mapper.from_item::<Customer>(&item);
        let err = match got {
            Ok(c) => panic!("expected an error, got {c:?}"),
            Err(e) => e,
        };
        assert!(
            matches!(&err, MappingError::Conversion { attribute, .. } if attribute == "id"),
            "{err:?}"
        );
        assert!(err.to_string().contains("a string (S)"), "{err}");
    }

    #[test]
    fn key() -> TestResult {
        let mapper = DynamoDbMapper::new();
        let got = mapper.key(&customer()?)?;
        let want = Item::from([
            ("id".to_string(), AttributeValue::new().set_s("c-1")),
            (
                "created".to_string(),
                AttributeValue::new().set_s("2025-05-16T09:46:12.000Z"),
            ),
        ]);
        assert_eq!(got, want);

        let missing = Customer {
            created_at: None,
            ..customer()?
        };
        let got = mapper.key(&missing);
        let getter = match &got {
            Err(MappingError::MissingKey { getter, .. }) => *getter,
            _ => panic!("expected a missing key error, got {got:?}"),
        };
        assert_eq!(getter, "getCreatedAt");
        Ok(())
    }

    #[test]
    fn key_without_hash_key() {
        let mapper = DynamoDbMapper::new();
        let got = mapper.key(&Nested::default());
        assert!(matches!(got, Err(MappingError::MissingHashKey)), "{got:?}");
    }

    #[test]
    fn put_request_versions() -> TestResult {
        let _guard = enable_tracing();
        let mapper = DynamoDbMapper::new();
        let mut value = customer()?;
        let request = mapper.put_request(&mut value)?;
        assert_eq!(value.version, Some(1));
        assert_eq!(request.table_name.as_deref(), Some("customers"));
        let item = request.item.clone().unwrap_or_default();
        assert_eq!(item.get("ver"), Some(&AttributeValue::new().set_n("1")));
        assert_eq!(
            request.expected,
            Some(HashMap::from([(
                "ver".to_string(),
                ExpectedAttributeValue::new().set_exists(false)
            )]))
        );

        let request = mapper.put_request(&mut value)?;
        assert_eq!(value.version, Some(2));
        let item = request.item.clone().unwrap_or_default();
        assert_eq!(item.get("ver"), Some(&AttributeValue::new().set_n("2")));
        assert_eq!(
            request.expected,
            Some(HashMap::from([(
                "ver".to_string(),
                ExpectedAttributeValue::new()
                    .set_exists(true)
                    .set_value(AttributeValue::new().set_n("1"))
            )]))
        );
        Ok(())
    }

    #[test]
    fn put_request_generated_keys() -> TestResult {
        let mapper = DynamoDbMapper::new();
        let mut value = Event {
            payload: Some("hello".into()),
            ..Default::default()
        };
        let request = mapper.put_request(&mut value)?;
        let id = value.event_id.clone().unwrap_or_default();
        assert!(uuid::Uuid::parse_str(&id).is_ok(), "{id}");
        // Not a key, so it is not generated.
        assert_eq!(value.trace, None);
        assert_eq!(request.expected, None);
        let item = request.item.unwrap_or_default();
        assert_eq!(item.get("eventId"), Some(&AttributeValue::new().set_s(id)));

        let mut value = Event {
            event_id: Some("e-1".into()),
            ..Default::default()
        };
        let _ = mapper.put_request(&mut value)?;
        assert_eq!(value.event_id.as_deref(), Some("e-1"));
        Ok(())
    }

    #[test]
    fn put_request_errors() -> TestResult {
        let mapper = DynamoDbMapper::new();
        let got = mapper.put_request(&mut Nested::default());
        assert!(
            matches!(got, Err(MappingError::MissingTable { .. })),
            "{got:?}"
        );
        let mut value = Customer {
            id: None,
            ..customer()?
        };
        let got = mapper.put_request(&mut value);
        assert!(
            matches!(got, Err(MappingError::MissingKey { .. })),
            "{got:?}"
        );
        Ok(())
    }

    #[test]
    fn put_request_error_keeps_value() -> TestResult {
        let mapper = DynamoDbMapper::new();
        let original = Customer {
            id: None,
            ..customer()?
        };
        let mut value = original.clone();
        let got = mapper.put_request(&mut value);
        assert!(
            matches!(got, Err(MappingError::MissingKey { getter, .. }) if getter == "getId"),
            "{got:?}"
        );
        assert_eq!(value, original);
        Ok(())
    }

    #[test]
    fn put_request_version_overflow() -> TestResult {
        let mapper = DynamoDbMapper::new();
        let original = Customer {
            version: Some(i64::MAX),
            ..customer()?
        };
        let mut value = original.clone();
        let got = mapper.put_request(&mut value);
        let err = match got {
            Ok(r) => panic!("expected an error, got {r:?}"),
            Err(e) => e,
        };
        assert!(
            matches!(&err, MappingError::VersionOverflow { attribute } if attribute == "ver"),
            "{err:?}"
        );
        assert_eq!(value, original);
        Ok(())
    }

    #[test]
    fn get_and_delete_requests() -> TestResult {
        let mapper = DynamoDbMapper::new();
        let value = Customer {
            version: Some(3),
            ..customer()?
        };
        let get = mapper.get_request(&value)?;
        assert_eq!(get.table_name.as_deref(), Some("customers"));
        assert_eq!(get.key.as_ref().map(|k| k.len()), Some(2));

        let delete = mapper.delete_request(&value)?;
        assert_eq!(delete.key, get.key);
        assert_eq!(
            delete.expected,
            Some(HashMap::from([(
                "ver".to_string(),
                ExpectedAttributeValue::new()
                    .set_exists(true)
                    .set_value(AttributeValue::new().set_n("3"))
            )]))
        );

        let event = Event {
            event_id: Some("e-1".into()),
            ..Default::default()
        };
        // `isRevision` is not a `get*` getter, so there is no condition.
        let delete = mapper.delete_request(&event)?;
        assert_eq!(delete.expected, None);
        Ok(())
    }

    #[test]
    fn marshall_put_request() -> TestResult {
        let _guard = enable_tracing();
        let mapper = DynamoDbMapper::new();
        let mut value = Event {
            event_id: Some("e-1".into()),
            ..Default::default()
        };
        let request = JsonMarshaller.marshall(&mapper.put_request(&mut value)?)?;
        assert_eq!(
            request.header("X-Amz-Target"),
            Some("DynamoDB_20120810.PutItem")
        );
        let body = serde_json::from_slice::<serde_json::Value>(request.content())?;
        assert_eq!(
            body,
            serde_json::json!({
                "TableName": "events",
                "Item": {"eventId": {"S": "e-1"}},
            })
        );
        Ok(())
    }
}
