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

use super::{Annotation, ConversionError, Table};
use crate::model::AttributeValue;

/// Reads a property, `None` if the property is unset.
pub type Getter<T> = fn(&T) -> Option<AttributeValue>;

/// Writes a property from an attribute value.
pub type Setter<T> = fn(&mut T, &AttributeValue) -> Result<(), ConversionError>;

/// Describes one property of a mapped type.
///
/// The descriptors are declared once per type, usually in a `static`, see
/// [Document::properties].
pub struct Property<T> {
    getter_name: &'static str,
    annotations: &'static [Annotation],
    getter: Getter<T>,
    setter: Option<Setter<T>>,
    synthetic: bool,
}

impl<T> Property<T> {
    /// Creates a read-only property.
    ///
    /// `getter_name` follows the `getFoo` or `isFoo` convention. Properties
    /// named otherwise are not mapped.
    pub const fn new(
        getter_name: &'static str,
        annotations: &'static [Annotation],
        getter: Getter<T>,
    ) -> Self {
        Self {
            getter_name,
            annotations,
            getter,
            setter: None,
            synthetic: false,
        }
    }

    /// Adds the `setFoo` function for this property.
    pub const fn with_setter(self, setter: Setter<T>) -> Self {
        Self {
            setter: Some(setter),
            ..self
        }
    }

    /// Marks the property as computed by the type. Synthetic properties are
    /// not mapped.
    pub const fn synthetic(self) -> Self {
        Self {
            synthetic: true,
            ..self
        }
    }

    pub fn getter_name(&self) -> &'static str {
        self.getter_name
    }

    pub fn annotations(&self) -> &'static [Annotation] {
        self.annotations
    }

    pub fn is_synthetic(&self) -> bool {
        self.synthetic
    }

    /// Reads the property from `value`.
    pub fn get(&self, value: &T) -> Option<AttributeValue> {
        (self.getter)(value)
    }

    pub(crate) fn setter_fn(&self) -> Option<Setter<T>> {
        self.setter
    }

    /// True if any annotation matches `predicate`.
    pub(crate) fn has_annotation(&self, predicate: fn(&Annotation) -> bool) -> bool {
        self.annotations.iter().any(predicate)
    }

    /// The custom name of the first annotation matching `predicate`.
    pub(crate) fn annotated_name(
        &self,
        predicate: fn(&Annotation) -> bool,
    ) -> Option<&'static str> {
        self.annotations
            .iter()
            .filter(|a| predicate(a))
            .find_map(Annotation::attribute_name)
    }

    /// The field name implied by the getter name.
    ///
    /// Strips the `get` or `is` prefix. With `camel_case`, the first letter
    /// is also lower-cased, `getFullName` becomes `fullName`.
    pub(crate) fn field_name(&self, camel_case: bool) -> String {
        let name = self
            .getter_name
            .strip_prefix("get")
            .or_else(|| self.getter_name.strip_prefix("is"))
            .unwrap_or(self.getter_name);
        if !camel_case {
            return name.to_string();
        }
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_lowercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl<T> std::fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Property")
            .field("getter_name", &self.getter_name)
            .field("annotations", &self.annotations)
            .field("has_setter", &self.setter.is_some())
            .field("synthetic", &self.synthetic)
            .finish()
    }
}

/// A type mapped to items.
///
/// Types stored in a table return their [Table] from [Document::table].
/// Types stored as nested attributes return `true` from
/// [Document::is_document]. The properties of other types are ignored.
pub trait Document: Default + 'static {
    /// The table annotation, if any.
    fn table() -> Option<Table> {
        None
    }

    /// True for types annotated as nested documents.
    fn is_document() -> bool {
        false
    }

    /// The property descriptors, in declaration order.
    fn properties() -> &'static [Property<Self>];

    /// The name used in error messages.
    fn type_name() -> &'static str {
        std::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[derive(Default)]
    struct Empty;

    fn property(name: &'static str) -> Property<Empty> {
        Property::new(name, &[], |_| None)
    }

    #[test_case("getFullName", true, "fullName")]
    #[test_case("getFullName", false, "FullName")]
    #[test_case("isActive", true, "active")]
    #[test_case("getURL", true, "uRL")]
    #[test_case("get", true, "")]
    fn field_name(getter: &'static str, camel_case: bool, want: &str) {
        assert_eq!(property(getter).field_name(camel_case), want);
    }

    #[test]
    fn builders() {
        let p = property("getId");
        assert!(!p.is_synthetic());
        assert!(p.setter_fn().is_none());
        let p = p.with_setter(|_, _| Ok(())).synthetic();
        assert!(p.is_synthetic());
        assert!(p.setter_fn().is_some());
        assert_eq!(p.getter_name(), "getId");
    }

    #[test]
    fn annotated_name() {
        static ANNOTATIONS: [Annotation; 3] = [
            Annotation::HashKey { attribute_name: "" },
            Annotation::AutoGeneratedKey,
            Annotation::Attribute { attribute_name: "custom" },
        ];
        let p = Property::<Empty>::new("getId", &ANNOTATIONS, |_| None);
        assert_eq!(p.annotated_name(Annotation::is_hash_key), None);
        assert_eq!(p.annotated_name(Annotation::is_attribute), Some("custom"));
        assert!(p.has_annotation(|a| matches!(a, Annotation::AutoGeneratedKey)));
        assert!(!p.has_annotation(Annotation::is_range_key));
    }
}
