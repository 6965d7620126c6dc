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

//! Mapped types shared by the unit tests.

use super::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Customer {
    pub id: Option<String>,
    pub created_at: Option<wkt::Timestamp>,
    pub full_name: Option<String>,
    pub active: Option<bool>,
    pub version: Option<i64>,
    pub region: Option<String>,
    pub tags: Option<Vec<String>>,
    pub notes: Option<String>,
}

impl Customer {
    fn display_name(&self) -> Option<String> {
        self.full_name
            .as_ref()
            .map(|n| format!("{n} ({})", self.id.as_deref().unwrap_or("?")))
    }
}

impl Document for Customer {
    fn table() -> Option<Table> {
        Some(Table::new("customers"))
    }

    fn properties() -> &'static [Property<Self>] {
        static PROPERTIES: [Property<Customer>; 10] = [
            Property::new(
                "getId",
                &[Annotation::HashKey { attribute_name: "" }],
                |c: &Customer| to_attribute(&c.id),
            )
            .with_setter(|c: &mut Customer, v| {
                c.id = Some(AttributeType::from_attribute(v)?);
                Ok(())
            }),
            Property::new(
                "getCreatedAt",
                &[Annotation::RangeKey {
                    attribute_name: "created",
                }],
                |c: &Customer| to_attribute(&c.created_at),
            )
            .with_setter(|c: &mut Customer, v| {
                c.created_at = Some(AttributeType::from_attribute(v)?);
                Ok(())
            }),
            Property::new(
                "getFullName",
                &[Annotation::Attribute {
                    attribute_name: "full_name",
                }],
                |c: &Customer| to_attribute(&c.full_name),
            )
            .with_setter(|c: &mut Customer, v| {
                c.full_name = Some(AttributeType::from_attribute(v)?);
                Ok(())
            }),
            Property::new("isActive", &[], |c: &Customer| to_attribute(&c.active)).with_setter(
                |c: &mut Customer, v| {
                    c.active = Some(AttributeType::from_attribute(v)?);
                    Ok(())
                },
            ),
            Property::new(
                "getVersion",
                &[Annotation::VersionAttribute {
                    attribute_name: "ver",
                }],
                |c: &Customer| to_attribute(&c.version),
            )
            .with_setter(|c: &mut Customer, v| {
                c.version = Some(AttributeType::from_attribute(v)?);
                Ok(())
            }),
            Property::new(
                "getRegion",
                &[
                    Annotation::Attribute {
                        attribute_name: "region_attr",
                    },
                    Annotation::IndexHashKey {
                        attribute_name: "region_index",
                    },
                ],
                |c: &Customer| to_attribute(&c.region),
            )
            .with_setter(|c: &mut Customer, v| {
                c.region = Some(AttributeType::from_attribute(v)?);
                Ok(())
            }),
            Property::new("getTags", &[], |c: &Customer| to_attribute(&c.tags)),
            Property::new("getNotes", &[Annotation::Ignore], |c: &Customer| {
                to_attribute(&c.notes)
            }),
            Property::new("getDisplayName", &[], |c: &Customer| {
                to_attribute(&c.display_name())
            })
            .synthetic(),
            Property::new("loyaltyPoints", &[], |_: &Customer| None),
        ];
        &PROPERTIES
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Event {
    pub event_id: Option<String>,
    pub trace: Option<String>,
    pub revision: Option<bool>,
    pub payload: Option<String>,
}

impl Document for Event {
    fn table() -> Option<Table> {
        Some(Table::new("events"))
    }

    fn properties() -> &'static [Property<Self>] {
        static PROPERTIES: [Property<Event>; 4] = [
            Property::new(
                "getEventId",
                &[
                    Annotation::HashKey { attribute_name: "" },
                    Annotation::AutoGeneratedKey,
                ],
                |e: &Event| to_attribute(&e.event_id),
            )
            .with_setter(|e: &mut Event, v| {
                e.event_id = Some(AttributeType::from_attribute(v)?);
                Ok(())
            }),
            Property::new("getTrace", &[Annotation::AutoGeneratedKey], |e: &Event| {
                to_attribute(&e.trace)
            })
            .with_setter(|e: &mut Event, v| {
                e.trace = Some(AttributeType::from_attribute(v)?);
                Ok(())
            }),
            Property::new(
                "isRevision",
                &[Annotation::VersionAttribute { attribute_name: "" }],
                |e: &Event| to_attribute(&e.revision),
            )
            .with_setter(|e: &mut Event, v| {
                e.revision = Some(AttributeType::from_attribute(v)?);
                Ok(())
            }),
            Property::new("getPayload", &[], |e: &Event| to_attribute(&e.payload)).with_setter(
                |e: &mut Event, v| {
                    e.payload = Some(AttributeType::from_attribute(v)?);
                    Ok(())
                },
            ),
        ];
        &PROPERTIES
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Nested {
    pub street: Option<String>,
    pub city: Option<String>,
}

impl Document for Nested {
    fn is_document() -> bool {
        true
    }

    fn properties() -> &'static [Property<Self>] {
        static PROPERTIES: [Property<Nested>; 2] = [
            Property::new("getStreet", &[], |n: &Nested| to_attribute(&n.street)).with_setter(
                |n: &mut Nested, v| {
                    n.street = Some(AttributeType::from_attribute(v)?);
                    Ok(())
                },
            ),
            Property::new("getCity", &[], |n: &Nested| to_attribute(&n.city)).with_setter(
                |n: &mut Nested, v| {
                    n.city = Some(AttributeType::from_attribute(v)?);
                    Ok(())
                },
            ),
        ];
        &PROPERTIES
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Plain {
    pub value: Option<String>,
}

impl Document for Plain {
    fn properties() -> &'static [Property<Self>] {
        static PROPERTIES: [Property<Plain>; 1] =
            [Property::new("getValue", &[], |p: &Plain| to_attribute(&p.value))];
        &PROPERTIES
    }
}
