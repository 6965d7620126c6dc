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

use super::{Annotation, Document, MappingError, Property, Result, Setter, Table};
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError, RwLock};

lazy_static::lazy_static! {
    static ref GLOBAL: Reflector = Reflector::new();
}

/// Identifies a property of a mapped type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct GetterKey {
    type_id: TypeId,
    getter_name: &'static str,
}

impl GetterKey {
    fn of<T: Document>(getter: &Property<T>) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            getter_name: getter.getter_name(),
        }
    }
}

/// Answers questions about mapped types and memoizes the answers.
///
/// The type descriptors never change, so each answer is computed at most once
/// per type (or per property) and then served from a cache. Each cache has
/// its own lock. The attribute names, which are requested for every value
/// mapped, use a read/write lock.
///
/// Most applications use [Reflector::global].
#[derive(Debug, Default)]
pub struct Reflector {
    getters: Mutex<HashMap<TypeId, Vec<usize>>>,
    primary_hash_key_getters: Mutex<HashMap<TypeId, Option<usize>>>,
    primary_range_key_getters: Mutex<HashMap<TypeId, Option<usize>>>,
    setters: Mutex<HashMap<GetterKey, Box<dyn Any + Send + Sync>>>,
    attribute_names: RwLock<HashMap<GetterKey, String>>,
    version_attribute_getters: Mutex<HashMap<GetterKey, bool>>,
    auto_generated_key_getters: Mutex<HashMap<GetterKey, bool>>,
}

fn lock<V>(mutex: &Mutex<V>) -> MutexGuard<'_, V> {
    // The caches are consistent even if a thread panicked while holding a lock.
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn is_relevant<T: Document>(getter: &Property<T>) -> bool {
    let name = getter.getter_name();
    (name.starts_with("get") || name.starts_with("is"))
        && !getter.is_synthetic()
        && (T::table().is_some() || T::is_document())
        && !getter.has_annotation(|a| matches!(a, Annotation::Ignore))
}

fn find_relevant_getters<T: Document>() -> Vec<usize> {
    let found = T::properties()
        .iter()
        .enumerate()
        .filter(|(_, p)| is_relevant(*p))
        .map(|(i, _)| i)
        .collect::<Vec<_>>();
    tracing::debug!(
        type_name = T::type_name(),
        count = found.len(),
        "found relevant getters"
    );
    found
}

impl Reflector {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide reflector.
    pub fn global() -> &'static Reflector {
        &GLOBAL
    }

    /// The getters mapped to attributes, in declaration order.
    ///
    /// A getter is relevant if it is named `get*` or `is*`, it is not
    /// synthetic, it is not annotated with [Annotation::Ignore], and `T` has
    /// a table or is a document. Other types have no relevant getters.
    pub fn relevant_getters<T: Document>(&self) -> Vec<&'static Property<T>> {
        let properties = T::properties();
        self.relevant_indices::<T>()
            .into_iter()
            .filter_map(|i| properties.get(i))
            .collect()
    }

    fn relevant_indices<T: Document>(&self) -> Vec<usize> {
        let mut cache = lock(&self.getters);
        cache
            .entry(TypeId::of::<T>())
            .or_insert_with(find_relevant_getters::<T>)
            .clone()
    }

    /// The first relevant getter annotated with [Annotation::HashKey].
    pub fn primary_hash_key_getter<T: Document>(&self) -> Result<&'static Property<T>> {
        let index = {
            let mut cache = lock(&self.primary_hash_key_getters);
            *cache
                .entry(TypeId::of::<T>())
                .or_insert_with(|| self.find_annotated::<T>(Annotation::is_hash_key))
        };
        index
            .and_then(|i| T::properties().get(i))
            .ok_or(MappingError::MissingHashKey)
    }

    /// The first relevant getter annotated with [Annotation::RangeKey], if
    /// any.
    pub fn primary_range_key_getter<T: Document>(&self) -> Option<&'static Property<T>> {
        let index = {
            let mut cache = lock(&self.primary_range_key_getters);
            *cache
                .entry(TypeId::of::<T>())
                .or_insert_with(|| self.find_annotated::<T>(Annotation::is_range_key))
        };
        index.and_then(|i| T::properties().get(i))
    }

    fn find_annotated<T: Document>(&self, predicate: fn(&Annotation) -> bool) -> Option<usize> {
        let properties = T::properties();
        self.relevant_indices::<T>()
            .into_iter()
            .find(|i| properties.get(*i).is_some_and(|p| p.has_annotation(predicate)))
    }

    /// All relevant getters annotated as hash or range keys.
    pub fn primary_key_getters<T: Document>(&self) -> Vec<&'static Property<T>> {
        self.relevant_getters::<T>()
            .into_iter()
            .filter(|p| p.has_annotation(|a| a.is_hash_key() || a.is_range_key()))
            .collect()
    }

    /// The table of `T`.
    pub fn table<T: Document>(&self) -> Result<Table> {
        T::table().ok_or(MappingError::MissingTable {
            type_name: T::type_name(),
        })
    }

    /// The attribute name for `getter`.
    ///
    /// Uses the first non-empty `attribute_name` in the [Annotation::HashKey],
    /// [Annotation::IndexHashKey], [Annotation::RangeKey],
    /// [Annotation::IndexRangeKey], [Annotation::Attribute], and
    /// [Annotation::VersionAttribute] annotations, in that order. Otherwise
    /// the name is derived from the getter: `getFullName` maps to `fullName`.
    pub fn attribute_name<T: Document>(&self, getter: &Property<T>) -> String {
        let key = GetterKey::of(getter);
        if let Some(name) = self
            .attribute_names
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return name.clone();
        }
        const PRECEDENCE: [fn(&Annotation) -> bool; 6] = [
            Annotation::is_hash_key,
            Annotation::is_index_hash_key,
            Annotation::is_range_key,
            Annotation::is_index_range_key,
            Annotation::is_attribute,
            Annotation::is_version_attribute,
        ];
        let name = PRECEDENCE
            .iter()
            .find_map(|predicate| getter.annotated_name(*predicate))
            .map(str::to_string)
            .unwrap_or_else(|| getter.field_name(true));
        self.attribute_names
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, name.clone());
        name
    }

    /// The setter for `getter`.
    ///
    /// Fails if the property is read-only.
    pub fn setter<T: Document>(&self, getter: &Property<T>) -> Result<Setter<T>> {
        let key = GetterKey::of(getter);
        let mut cache = lock(&self.setters);
        if let Some(setter) = cache.get(&key).and_then(|s| s.downcast_ref::<Setter<T>>()) {
            return Ok(*setter);
        }
        let setter = getter
            .setter_fn()
            .ok_or_else(|| MappingError::MissingSetter {
                setter: format!("set{}", getter.field_name(false)),
                type_name: T::type_name(),
            })?;
        cache.insert(key, Box::new(setter));
        Ok(setter)
    }

    /// True if `getter` is named `get*` and is annotated with
    /// [Annotation::VersionAttribute].
    pub fn is_version_attribute_getter<T: Document>(&self, getter: &Property<T>) -> bool {
        let mut cache = lock(&self.version_attribute_getters);
        *cache.entry(GetterKey::of(getter)).or_insert_with(|| {
            getter.getter_name().starts_with("get")
                && getter.has_annotation(Annotation::is_version_attribute)
        })
    }

    /// True if `getter` is a key, of the table or of an index, annotated with
    /// [Annotation::AutoGeneratedKey].
    pub fn is_assignable_key<T: Document>(&self, getter: &Property<T>) -> bool {
        let mut cache = lock(&self.auto_generated_key_getters);
        *cache.entry(GetterKey::of(getter)).or_insert_with(|| {
            getter.has_annotation(|a| matches!(a, Annotation::AutoGeneratedKey))
                && getter.has_annotation(Annotation::is_key)
        })
    }

    /// The attribute name of the hash key.
    pub fn primary_hash_key_name<T: Document>(&self) -> Result<String> {
        let getter = self.primary_hash_key_getter::<T>()?;
        Ok(self.attribute_name(getter))
    }

    /// The attribute name of the range key, `None` if `T` has no range key.
    pub fn primary_range_key_name<T: Document>(&self) -> Option<String> {
        self.primary_range_key_getter::<T>()
            .map(|getter| self.attribute_name(getter))
    }

    pub fn has_primary_range_key<T: Document>(&self) -> bool {
        self.primary_range_key_getter::<T>().is_some()
    }
}
