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

/// The table of a mapped type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Table {
    pub table_name: &'static str,
}

impl Table {
    pub const fn new(table_name: &'static str) -> Self {
        Self { table_name }
    }
}

/// The annotations of a mapped property.
///
/// An empty `attribute_name` means the attribute name is derived from the
/// getter name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Annotation {
    /// The hash key of the table.
    HashKey { attribute_name: &'static str },
    /// The range key of the table.
    RangeKey { attribute_name: &'static str },
    /// The hash key of a global secondary index.
    IndexHashKey { attribute_name: &'static str },
    /// The range key of a local or global secondary index.
    IndexRangeKey { attribute_name: &'static str },
    /// A plain attribute with a custom name.
    Attribute { attribute_name: &'static str },
    /// An optimistic locking version number.
    VersionAttribute { attribute_name: &'static str },
    /// A key assigned by the mapper when saving, if unset.
    AutoGeneratedKey,
    /// A property that is not mapped.
    Ignore,
}

impl Annotation {
    /// The custom attribute name, if any.
    pub fn attribute_name(&self) -> Option<&'static str> {
        match self {
            Self::HashKey { attribute_name }
            | Self::RangeKey { attribute_name }
            | Self::IndexHashKey { attribute_name }
            | Self::IndexRangeKey { attribute_name }
            | Self::Attribute { attribute_name }
            | Self::VersionAttribute { attribute_name } => {
                Some(*attribute_name).filter(|n| !n.is_empty())
            }
            Self::AutoGeneratedKey | Self::Ignore => None,
        }
    }

    pub(crate) fn is_hash_key(&self) -> bool {
        matches!(self, Self::HashKey { .. })
    }

    pub(crate) fn is_range_key(&self) -> bool {
        matches!(self, Self::RangeKey { .. })
    }

    pub(crate) fn is_index_hash_key(&self) -> bool {
        matches!(self, Self::IndexHashKey { .. })
    }

    pub(crate) fn is_index_range_key(&self) -> bool {
        matches!(self, Self::IndexRangeKey { .. })
    }

    pub(crate) fn is_attribute(&self) -> bool {
        matches!(self, Self::Attribute { .. })
    }

    pub(crate) fn is_version_attribute(&self) -> bool {
        matches!(self, Self::VersionAttribute { .. })
    }

    pub(crate) fn is_key(&self) -> bool {
        self.is_hash_key()
            || self.is_range_key()
            || self.is_index_hash_key()
            || self.is_index_range_key()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Annotation::HashKey { attribute_name: "id" }, Some("id"))]
    #[test_case(Annotation::RangeKey { attribute_name: "" }, None)]
    #[test_case(Annotation::VersionAttribute { attribute_name: "v" }, Some("v"))]
    #[test_case(Annotation::AutoGeneratedKey, None)]
    #[test_case(Annotation::Ignore, None)]
    fn attribute_name(input: Annotation, want: Option<&str>) {
        assert_eq!(input.attribute_name(), want);
    }

    #[test]
    fn keys() {
        assert!(Annotation::HashKey { attribute_name: "" }.is_key());
        assert!(Annotation::IndexRangeKey { attribute_name: "" }.is_key());
        assert!(!Annotation::Attribute { attribute_name: "" }.is_key());
        assert!(!Annotation::VersionAttribute { attribute_name: "" }.is_key());
        assert!(!Annotation::AutoGeneratedKey.is_key());
    }
}
