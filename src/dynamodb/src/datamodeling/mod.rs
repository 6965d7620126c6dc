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

//! Maps application types to DynamoDB items.
//!
//! A mapped type implements [Document]. It declares its table (or that it is
//! a nested document) and a static list of [Property] descriptors. Each
//! property names its getter (`getName`, `isActive`), lists its
//! [Annotation]s, and provides the functions to read and write the value.
//!
//! The [Reflector] answers questions about the mapped types, such as the
//! attribute name of a property or the getter of the hash key, and memoizes
//! the answers. The [DynamoDbMapper] uses the reflector to convert values to
//! items and to build the item requests.
//!
//! # Example
//! ```
//! use cloud_sdk_dynamodb::datamodeling::*;
//!
//! #[derive(Default)]
//! struct Customer {
//!     id: Option<String>,
//!     name: Option<String>,
//! }
//!
//! impl Document for Customer {
//!     fn table() -> Option<Table> {
//!         Some(Table::new("customers"))
//!     }
//!     fn properties() -> &'static [Property<Self>] {
//!         static PROPERTIES: [Property<Customer>; 2] = [
//!             Property::new(
//!                 "getId",
//!                 &[Annotation::HashKey { attribute_name: "" }],
//!                 |c: &Customer| to_attribute(&c.id),
//!             )
//!             .with_setter(|c: &mut Customer, v| {
//!                 c.id = Some(AttributeType::from_attribute(v)?);
//!                 Ok(())
//!             }),
//!             Property::new(
//!                 "getName",
//!                 &[Annotation::Attribute { attribute_name: "full_name" }],
//!                 |c: &Customer| to_attribute(&c.name),
//!             )
//!             .with_setter(|c: &mut Customer, v| {
//!                 c.name = Some(AttributeType::from_attribute(v)?);
//!                 Ok(())
//!             }),
//!         ];
//!         &PROPERTIES
//!     }
//! }
//!
//! let reflector = Reflector::global();
//! assert_eq!(reflector.primary_hash_key_name::<Customer>()?, "id");
//! let name = &Customer::properties()[1];
//! assert_eq!(reflector.attribute_name(name), "full_name");
//! # Ok::<(), MappingError>(())
//! ```

mod annotations;
mod attribute_type;
mod error;
mod mapper;
mod property;
mod reflector;
#[cfg(test)]
mod testing;

pub use annotations::{Annotation, Table};
pub use attribute_type::{AttributeType, ConversionError, to_attribute};
pub use error::MappingError;
pub use mapper::DynamoDbMapper;
pub use property::{Document, Getter, Property, Setter};
pub use reflector::Reflector;

/// The result type for the mapper operations.
pub type Result<T> = std::result::Result<T, MappingError>;
