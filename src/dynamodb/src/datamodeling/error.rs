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

use super::ConversionError;

/// A mapped type, or a value of a mapped type, cannot be mapped to an item.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum MappingError {
    #[error("Public, zero-parameter hash key property must be annotated with HashKey")]
    MissingHashKey,

    #[error("Class {type_name} must be annotated with Table")]
    MissingTable { type_name: &'static str },

    #[error("Expected a public, one-argument method called {setter} on class {type_name}")]
    MissingSetter {
        setter: String,
        type_name: &'static str,
    },

    #[error("Null key found for {getter} on class {type_name}")]
    MissingKey {
        getter: &'static str,
        type_name: &'static str,
    },

    #[error("Version attribute {attribute} cannot be incremented")]
    VersionOverflow { attribute: String },

    #[error("Couldn't convert attribute {attribute}: {source}")]
    Conversion {
        attribute: String,
        #[source]
        source: ConversionError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            MappingError::MissingTable {
                type_name: "my::Customer"
            }
            .to_string(),
            "Class my::Customer must be annotated with Table"
        );
        assert_eq!(
            MappingError::MissingSetter {
                setter: "setName".into(),
                type_name: "my::Customer"
            }
            .to_string(),
            "Expected a public, one-argument method called setName on class my::Customer"
        );
    }
}
