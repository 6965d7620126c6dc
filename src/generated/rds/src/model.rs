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


/// The request for `DeleteDBSnapshot`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DeleteDBSnapshotRequest {
    /// The snapshot to delete. It must be in the `available` state.
    #[serde(rename = "DBSnapshotIdentifier")]
    pub db_snapshot_identifier: Option<String>,
}

impl DeleteDBSnapshotRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [db_snapshot_identifier][Self::db_snapshot_identifier] field.
    pub fn set_db_snapshot_identifier<T: Into<String>>(mut self, v: T) -> Self {
        self.db_snapshot_identifier = Some(v.into());
        self
    }

    /// Sets or clears the [db_snapshot_identifier][Self::db_snapshot_identifier] field.
    pub fn set_or_clear_db_snapshot_identifier<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.db_snapshot_identifier = v.map(|x| x.into());
        self
    }
}

/// The response for `DeleteDBSnapshot`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DeleteDBSnapshotResult {
    /// The deleted snapshot.
    #[serde(rename = "DBSnapshot")]
    pub db_snapshot: Option<DBSnapshot>,
}

impl DeleteDBSnapshotResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [db_snapshot][Self::db_snapshot] field.
    pub fn set_db_snapshot<T: Into<DBSnapshot>>(mut self, v: T) -> Self {
        self.db_snapshot = Some(v.into());
        self
    }

    /// Sets or clears the [db_snapshot][Self::db_snapshot] field.
    pub fn set_or_clear_db_snapshot<T: Into<DBSnapshot>>(mut self, v: Option<T>) -> Self {
        self.db_snapshot = v.map(|x| x.into());
        self
    }
}

/// A database snapshot.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DBSnapshot {
    #[serde(rename = "DBSnapshotIdentifier")]
    pub db_snapshot_identifier: Option<String>,

    /// The instance the snapshot was taken from.
    #[serde(rename = "DBInstanceIdentifier")]
    pub db_instance_identifier: Option<String>,

    pub snapshot_create_time: Option<wkt::Timestamp>,

    pub engine: Option<String>,

    pub engine_version: Option<String>,

    /// The allocated storage, in gibibytes.
    pub allocated_storage: Option<i32>,

    pub status: Option<String>,

    pub port: Option<i32>,

    pub availability_zone: Option<String>,

    /// Either `manual` or `automated`.
    pub snapshot_type: Option<String>,

    pub encrypted: Option<bool>,

    #[serde(rename = "DBSnapshotArn")]
    pub db_snapshot_arn: Option<String>,
}

impl DBSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [db_snapshot_identifier][Self::db_snapshot_identifier] field.
    pub fn set_db_snapshot_identifier<T: Into<String>>(mut self, v: T) -> Self {
        self.db_snapshot_identifier = Some(v.into());
        self
    }

    /// Sets or clears the [db_snapshot_identifier][Self::db_snapshot_identifier] field.
    pub fn set_or_clear_db_snapshot_identifier<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.db_snapshot_identifier = v.map(|x| x.into());
        self
    }

    /// Sets the [db_instance_identifier][Self::db_instance_identifier] field.
    pub fn set_db_instance_identifier<T: Into<String>>(mut self, v: T) -> Self {
        self.db_instance_identifier = Some(v.into());
        self
    }

    /// Sets or clears the [db_instance_identifier][Self::db_instance_identifier] field.
    pub fn set_or_clear_db_instance_identifier<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.db_instance_identifier = v.map(|x| x.into());
        self
    }

    /// Sets the [snapshot_create_time][Self::snapshot_create_time] field.
    pub fn set_snapshot_create_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.snapshot_create_time = Some(v.into());
        self
    }

    /// Sets or clears the [snapshot_create_time][Self::snapshot_create_time] field.
    pub fn set_or_clear_snapshot_create_time<T: Into<wkt::Timestamp>>(
        mut self,
        v: Option<T>,
    ) -> Self {
        self.snapshot_create_time = v.map(|x| x.into());
        self
    }

    /// Sets the [engine][Self::engine] field.
    pub fn set_engine<T: Into<String>>(mut self, v: T) -> Self {
        self.engine = Some(v.into());
        self
    }

    /// Sets or clears the [engine][Self::engine] field.
    pub fn set_or_clear_engine<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.engine = v.map(|x| x.into());
        self
    }

    /// Sets the [engine_version][Self::engine_version] field.
    pub fn set_engine_version<T: Into<String>>(mut self, v: T) -> Self {
        self.engine_version = Some(v.into());
        self
    }

    /// Sets or clears the [engine_version][Self::engine_version] field.
    pub fn set_or_clear_engine_version<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.engine_version = v.map(|x| x.into());
        self
    }

    /// Sets the [allocated_storage][Self::allocated_storage] field.
    pub fn set_allocated_storage(mut self, v: i32) -> Self {
        self.allocated_storage = Some(v);
        self
    }

    /// Sets or clears the [allocated_storage][Self::allocated_storage] field.
    pub fn set_or_clear_allocated_storage(mut self, v: Option<i32>) -> Self {
        self.allocated_storage = v;
        self
    }

    /// Sets the [status][Self::status] field.
    pub fn set_status<T: Into<String>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }

    /// Sets or clears the [status][Self::status] field.
    pub fn set_or_clear_status<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.status = v.map(|x| x.into());
        self
    }

    /// Sets the [port][Self::port] field.
    pub fn set_port(mut self, v: i32) -> Self {
        self.port = Some(v);
        self
    }

    /// Sets or clears the [port][Self::port] field.
    pub fn set_or_clear_port(mut self, v: Option<i32>) -> Self {
        self.port = v;
        self
    }

    /// Sets the [availability_zone][Self::availability_zone] field.
    pub fn set_availability_zone<T: Into<String>>(mut self, v: T) -> Self {
        self.availability_zone = Some(v.into());
        self
    }

    /// Sets or clears the [availability_zone][Self::availability_zone] field.
    pub fn set_or_clear_availability_zone<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.availability_zone = v.map(|x| x.into());
        self
    }

    /// Sets the [snapshot_type][Self::snapshot_type] field.
    pub fn set_snapshot_type<T: Into<String>>(mut self, v: T) -> Self {
        self.snapshot_type = Some(v.into());
        self
    }

    /// Sets or clears the [snapshot_type][Self::snapshot_type] field.
    pub fn set_or_clear_snapshot_type<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.snapshot_type = v.map(|x| x.into());
        self
    }

    /// Sets the [encrypted][Self::encrypted] field.
    pub fn set_encrypted(mut self, v: bool) -> Self {
        self.encrypted = Some(v);
        self
    }

    /// Sets or clears the [encrypted][Self::encrypted] field.
    pub fn set_or_clear_encrypted(mut self, v: Option<bool>) -> Self {
        self.encrypted = v;
        self
    }

    /// Sets the [db_snapshot_arn][Self::db_snapshot_arn] field.
    pub fn set_db_snapshot_arn<T: Into<String>>(mut self, v: T) -> Self {
        self.db_snapshot_arn = Some(v.into());
        self
    }

    /// Sets or clears the [db_snapshot_arn][Self::db_snapshot_arn] field.
    pub fn set_or_clear_db_snapshot_arn<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.db_snapshot_arn = v.map(|x| x.into());
        self
    }
}
