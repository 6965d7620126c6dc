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

/// The request for `DescribeVTLDevices`.
///
/// Lists the virtual tape library devices of a gateway. An unset
/// [vtl_device_arns][Self::vtl_device_arns] lists all the devices.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DescribeVTLDevicesInput {
    #[serde(rename = "GatewayARN")]
    pub gateway_arn: Option<String>,

    #[serde(rename = "VTLDeviceARNs")]
    #[serde_as(as = "Option<wkt::internal::SkipNulls>")]
    pub vtl_device_arns: Option<Vec<String>>,

    /// The pagination token returned by a previous call.
    #[serde(rename = "Marker")]
    pub marker: Option<String>,

    #[serde(rename = "Limit")]
    pub limit: Option<i32>,
}

impl DescribeVTLDevicesInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [gateway_arn][Self::gateway_arn] field.
    ///
    /// # Example
    /// ```
    /// # use cloud_sdk_storagegateway::model::DescribeVTLDevicesInput;
    /// let x = DescribeVTLDevicesInput::new()
    ///     .set_gateway_arn("arn:aws:storagegateway:us-east-1:111122223333:gateway/sgw-12A3456B");
    /// ```
    pub fn set_gateway_arn<T: Into<String>>(mut self, v: T) -> Self {
        self.gateway_arn = Some(v.into());
        self
    }

    /// Sets or clears the [gateway_arn][Self::gateway_arn] field.
    pub fn set_or_clear_gateway_arn<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.gateway_arn = v.map(|x| x.into());
        self
    }

    /// Sets the [vtl_device_arns][Self::vtl_device_arns] field.
    ///
    /// An empty list is sent as `[]`.
    pub fn set_vtl_device_arns<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.vtl_device_arns = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// The device ARNs, empty when unset.
    pub fn vtl_device_arns(&self) -> &[String] {
        self.vtl_device_arns.as_deref().unwrap_or_default()
    }

    /// Sets the [marker][Self::marker] field.
    pub fn set_marker<T: Into<String>>(mut self, v: T) -> Self {
        self.marker = Some(v.into());
        self
    }

    /// Sets or clears the [marker][Self::marker] field.
    pub fn set_or_clear_marker<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.marker = v.map(|x| x.into());
        self
    }

    /// Sets the [limit][Self::limit] field.
    pub fn set_limit(mut self, v: i32) -> Self {
        self.limit = Some(v);
        self
    }

    /// Sets or clears the [limit][Self::limit] field.
    pub fn set_or_clear_limit(mut self, v: Option<i32>) -> Self {
        self.limit = v;
        self
    }
}

/// The response for `DescribeVTLDevices`.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DescribeVTLDevicesOutput {
    #[serde(rename = "GatewayARN")]
    pub gateway_arn: Option<String>,

    #[serde(rename = "VTLDevices")]
    #[serde_as(as = "Option<wkt::internal::SkipNulls>")]
    pub vtl_devices: Option<Vec<VTLDevice>>,

    /// Set if there are more devices to list.
    #[serde(rename = "Marker")]
    pub marker: Option<String>,
}

impl DescribeVTLDevicesOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [gateway_arn][Self::gateway_arn] field.
    pub fn set_gateway_arn<T: Into<String>>(mut self, v: T) -> Self {
        self.gateway_arn = Some(v.into());
        self
    }

    /// Sets or clears the [gateway_arn][Self::gateway_arn] field.
    pub fn set_or_clear_gateway_arn<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.gateway_arn = v.map(|x| x.into());
        self
    }

    /// Sets the [vtl_devices][Self::vtl_devices] field.
    pub fn set_vtl_devices<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<VTLDevice>,
    {
        self.vtl_devices = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// The devices, empty when unset.
    pub fn vtl_devices(&self) -> &[VTLDevice] {
        self.vtl_devices.as_deref().unwrap_or_default()
    }

    /// Sets the [marker][Self::marker] field.
    pub fn set_marker<T: Into<String>>(mut self, v: T) -> Self {
        self.marker = Some(v.into());
        self
    }

    /// Sets or clears the [marker][Self::marker] field.
    pub fn set_or_clear_marker<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.marker = v.map(|x| x.into());
        self
    }
}

/// A virtual tape library device: a media changer or a tape drive.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct VTLDevice {
    #[serde(rename = "VTLDeviceARN")]
    pub vtl_device_arn: Option<String>,

    #[serde(rename = "VTLDeviceType")]
    pub vtl_device_type: Option<String>,

    #[serde(rename = "VTLDeviceVendor")]
    pub vtl_device_vendor: Option<String>,

    #[serde(rename = "VTLDeviceProductIdentifier")]
    pub vtl_device_product_identifier: Option<String>,

    #[serde(rename = "DeviceiSCSIAttributes")]
    pub device_iscsi_attributes: Option<DeviceiSCSIAttributes>,
}

impl VTLDevice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [vtl_device_arn][Self::vtl_device_arn] field.
    pub fn set_vtl_device_arn<T: Into<String>>(mut self, v: T) -> Self {
        self.vtl_device_arn = Some(v.into());
        self
    }

    /// Sets or clears the [vtl_device_arn][Self::vtl_device_arn] field.
    pub fn set_or_clear_vtl_device_arn<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.vtl_device_arn = v.map(|x| x.into());
        self
    }

    /// Sets the [vtl_device_type][Self::vtl_device_type] field.
    pub fn set_vtl_device_type<T: Into<String>>(mut self, v: T) -> Self {
        self.vtl_device_type = Some(v.into());
        self
    }

    /// Sets or clears the [vtl_device_type][Self::vtl_device_type] field.
    pub fn set_or_clear_vtl_device_type<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.vtl_device_type = v.map(|x| x.into());
        self
    }

    /// Sets the [vtl_device_vendor][Self::vtl_device_vendor] field.
    pub fn set_vtl_device_vendor<T: Into<String>>(mut self, v: T) -> Self {
        self.vtl_device_vendor = Some(v.into());
        self
    }

    /// Sets or clears the [vtl_device_vendor][Self::vtl_device_vendor] field.
    pub fn set_or_clear_vtl_device_vendor<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.vtl_device_vendor = v.map(|x| x.into());
        self
    }

    /// Sets the [vtl_device_product_identifier][Self::vtl_device_product_identifier] field.
    pub fn set_vtl_device_product_identifier<T: Into<String>>(mut self, v: T) -> Self {
        self.vtl_device_product_identifier = Some(v.into());
        self
    }

    /// Sets or clears the [vtl_device_product_identifier][Self::vtl_device_product_identifier] field.
    pub fn set_or_clear_vtl_device_product_identifier<T: Into<String>>(
        mut self,
        v: Option<T>,
    ) -> Self {
        self.vtl_device_product_identifier = v.map(|x| x.into());
        self
    }

    /// Sets the [device_iscsi_attributes][Self::device_iscsi_attributes] field.
    pub fn set_device_iscsi_attributes<T: Into<DeviceiSCSIAttributes>>(mut self, v: T) -> Self {
        self.device_iscsi_attributes = Some(v.into());
        self
    }

    /// Sets or clears the [device_iscsi_attributes][Self::device_iscsi_attributes] field.
    pub fn set_or_clear_device_iscsi_attributes<T: Into<DeviceiSCSIAttributes>>(
        mut self,
        v: Option<T>,
    ) -> Self {
        self.device_iscsi_attributes = v.map(|x| x.into());
        self
    }
}

/// The iSCSI target of a device.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DeviceiSCSIAttributes {
    #[serde(rename = "TargetARN")]
    pub target_arn: Option<String>,

    pub network_interface_id: Option<String>,

    pub network_interface_port: Option<i32>,

    /// True if the target uses CHAP authentication.
    pub chap_enabled: Option<bool>,
}

impl DeviceiSCSIAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [target_arn][Self::target_arn] field.
    pub fn set_target_arn<T: Into<String>>(mut self, v: T) -> Self {
        self.target_arn = Some(v.into());
        self
    }

    /// Sets or clears the [target_arn][Self::target_arn] field.
    pub fn set_or_clear_target_arn<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.target_arn = v.map(|x| x.into());
        self
    }

    /// Sets the [network_interface_id][Self::network_interface_id] field.
    pub fn set_network_interface_id<T: Into<String>>(mut self, v: T) -> Self {
        self.network_interface_id = Some(v.into());
        self
    }

    /// Sets or clears the [network_interface_id][Self::network_interface_id] field.
    pub fn set_or_clear_network_interface_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.network_interface_id = v.map(|x| x.into());
        self
    }

    /// Sets the [network_interface_port][Self::network_interface_port] field.
    pub fn set_network_interface_port(mut self, v: i32) -> Self {
        self.network_interface_port = Some(v);
        self
    }

    /// Sets or clears the [network_interface_port][Self::network_interface_port] field.
    pub fn set_or_clear_network_interface_port(mut self, v: Option<i32>) -> Self {
        self.network_interface_port = v;
        self
    }

    /// Sets the [chap_enabled][Self::chap_enabled] field.
    pub fn set_chap_enabled(mut self, v: bool) -> Self {
        self.chap_enabled = Some(v);
        self
    }

    /// Sets or clears the [chap_enabled][Self::chap_enabled] field.
    pub fn set_or_clear_chap_enabled(mut self, v: Option<bool>) -> Self {
        self.chap_enabled = v;
        self
    }
}
