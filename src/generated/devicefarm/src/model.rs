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


/// The request for `GetDevice`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetDeviceRequest {
    /// The device ARN.
    pub arn: Option<String>,
}

impl GetDeviceRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [arn][Self::arn] field.
    pub fn set_arn<T: Into<String>>(mut self, v: T) -> Self {
        self.arn = Some(v.into());
        self
    }

    /// Sets or clears the [arn][Self::arn] field.
    pub fn set_or_clear_arn<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.arn = v.map(|x| x.into());
        self
    }
}

/// The response for `GetDevice`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetDeviceResult {
    pub device: Option<Device>,
}

impl GetDeviceResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [device][Self::device] field.
    pub fn set_device<T: Into<Device>>(mut self, v: T) -> Self {
        self.device = Some(v.into());
        self
    }

    /// Sets or clears the [device][Self::device] field.
    pub fn set_or_clear_device<T: Into<Device>>(mut self, v: Option<T>) -> Self {
        self.device = v.map(|x| x.into());
        self
    }
}

/// A device type that an app is tested against.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Device {
    pub arn: Option<String>,

    /// The display name, e.g. `Apple iPhone 6`.
    pub name: Option<String>,

    pub manufacturer: Option<String>,

    pub model: Option<String>,

    /// Either `PHONE` or `TABLET`.
    pub form_factor: Option<String>,

    /// Either `ANDROID` or `IOS`.
    pub platform: Option<String>,

    /// The operating system version.
    pub os: Option<String>,

    pub cpu: Option<CPU>,

    pub resolution: Option<Resolution>,

    /// The heap size, in bytes.
    pub heap_size: Option<i64>,

    /// The memory size, in bytes.
    pub memory: Option<i64>,

    pub image: Option<String>,

    pub carrier: Option<String>,

    pub radio: Option<String>,

    pub remote_access_enabled: Option<bool>,
}

impl Device {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [arn][Self::arn] field.
    pub fn set_arn<T: Into<String>>(mut self, v: T) -> Self {
        self.arn = Some(v.into());
        self
    }

    /// Sets or clears the [arn][Self::arn] field.
    pub fn set_or_clear_arn<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.arn = v.map(|x| x.into());
        self
    }

    /// Sets the [name][Self::name] field.
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets or clears the [name][Self::name] field.
    pub fn set_or_clear_name<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the [manufacturer][Self::manufacturer] field.
    pub fn set_manufacturer<T: Into<String>>(mut self, v: T) -> Self {
        self.manufacturer = Some(v.into());
        self
    }

    /// Sets or clears the [manufacturer][Self::manufacturer] field.
    pub fn set_or_clear_manufacturer<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.manufacturer = v.map(|x| x.into());
        self
    }

    /// Sets the [model][Self::model] field.
    pub fn set_model<T: Into<String>>(mut self, v: T) -> Self {
        self.model = Some(v.into());
        self
    }

    /// Sets or clears the [model][Self::model] field.
    pub fn set_or_clear_model<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.model = v.map(|x| x.into());
        self
    }

    /// Sets the [form_factor][Self::form_factor] field.
    pub fn set_form_factor<T: Into<String>>(mut self, v: T) -> Self {
        self.form_factor = Some(v.into());
        self
    }

    /// Sets or clears the [form_factor][Self::form_factor] field.
    pub fn set_or_clear_form_factor<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.form_factor = v.map(|x| x.into());
        self
    }

    /// Sets the [platform][Self::platform] field.
    pub fn set_platform<T: Into<String>>(mut self, v: T) -> Self {
        self.platform = Some(v.into());
        self
    }

    /// Sets or clears the [platform][Self::platform] field.
    pub fn set_or_clear_platform<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.platform = v.map(|x| x.into());
        self
    }

    /// Sets the [os][Self::os] field.
    pub fn set_os<T: Into<String>>(mut self, v: T) -> Self {
        self.os = Some(v.into());
        self
    }

    /// Sets or clears the [os][Self::os] field.
    pub fn set_or_clear_os<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.os = v.map(|x| x.into());
        self
    }

    /// Sets the [cpu][Self::cpu] field.
    pub fn set_cpu<T: Into<CPU>>(mut self, v: T) -> Self {
        self.cpu = Some(v.into());
        self
    }

    /// Sets or clears the [cpu][Self::cpu] field.
    pub fn set_or_clear_cpu<T: Into<CPU>>(mut self, v: Option<T>) -> Self {
        self.cpu = v.map(|x| x.into());
        self
    }

    /// Sets the [resolution][Self::resolution] field.
    pub fn set_resolution<T: Into<Resolution>>(mut self, v: T) -> Self {
        self.resolution = Some(v.into());
        self
    }

    /// Sets or clears the [resolution][Self::resolution] field.
    pub fn set_or_clear_resolution<T: Into<Resolution>>(mut self, v: Option<T>) -> Self {
        self.resolution = v.map(|x| x.into());
        self
    }

    /// Sets the [heap_size][Self::heap_size] field.
    pub fn set_heap_size(mut self, v: i64) -> Self {
        self.heap_size = Some(v);
        self
    }

    /// Sets or clears the [heap_size][Self::heap_size] field.
    pub fn set_or_clear_heap_size(mut self, v: Option<i64>) -> Self {
        self.heap_size = v;
        self
    }

    /// Sets the [memory][Self::memory] field.
    pub fn set_memory(mut self, v: i64) -> Self {
        self.memory = Some(v);
        self
    }

    /// Sets or clears the [memory][Self::memory] field.
    pub fn set_or_clear_memory(mut self, v: Option<i64>) -> Self {
        self.memory = v;
        self
    }

    /// Sets the [image][Self::image] field.
    pub fn set_image<T: Into<String>>(mut self, v: T) -> Self {
        self.image = Some(v.into());
        self
    }

    /// Sets or clears the [image][Self::image] field.
    pub fn set_or_clear_image<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.image = v.map(|x| x.into());
        self
    }

    /// Sets the [carrier][Self::carrier] field.
    pub fn set_carrier<T: Into<String>>(mut self, v: T) -> Self {
        self.carrier = Some(v.into());
        self
    }

    /// Sets or clears the [carrier][Self::carrier] field.
    pub fn set_or_clear_carrier<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.carrier = v.map(|x| x.into());
        self
    }

    /// Sets the [radio][Self::radio] field.
    pub fn set_radio<T: Into<String>>(mut self, v: T) -> Self {
        self.radio = Some(v.into());
        self
    }

    /// Sets or clears the [radio][Self::radio] field.
    pub fn set_or_clear_radio<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.radio = v.map(|x| x.into());
        self
    }

    /// Sets the [remote_access_enabled][Self::remote_access_enabled] field.
    pub fn set_remote_access_enabled(mut self, v: bool) -> Self {
        self.remote_access_enabled = Some(v);
        self
    }

    /// Sets or clears the [remote_access_enabled][Self::remote_access_enabled] field.
    pub fn set_or_clear_remote_access_enabled(mut self, v: Option<bool>) -> Self {
        self.remote_access_enabled = v;
        self
    }
}

/// The processor of a [Device].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
#[allow(clippy::upper_case_acronyms)]
pub struct CPU {
    /// The frequency unit, e.g. `MHz`.
    pub frequency: Option<String>,

    /// The instruction set, e.g. `arm64-v8a`.
    pub architecture: Option<String>,

    /// The clock speed, in `frequency` units.
    pub clock: Option<f64>,
}

impl CPU {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [frequency][Self::frequency] field.
    pub fn set_frequency<T: Into<String>>(mut self, v: T) -> Self {
        self.frequency = Some(v.into());
        self
    }

    /// Sets or clears the [frequency][Self::frequency] field.
    pub fn set_or_clear_frequency<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.frequency = v.map(|x| x.into());
        self
    }

    /// Sets the [architecture][Self::architecture] field.
    pub fn set_architecture<T: Into<String>>(mut self, v: T) -> Self {
        self.architecture = Some(v.into());
        self
    }

    /// Sets or clears the [architecture][Self::architecture] field.
    pub fn set_or_clear_architecture<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.architecture = v.map(|x| x.into());
        self
    }

    /// Sets the [clock][Self::clock] field.
    pub fn set_clock(mut self, v: f64) -> Self {
        self.clock = Some(v);
        self
    }

    /// Sets or clears the [clock][Self::clock] field.
    pub fn set_or_clear_clock(mut self, v: Option<f64>) -> Self {
        self.clock = v;
        self
    }
}

/// The screen resolution of a [Device], in pixels.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Resolution {
    pub width: Option<i32>,
    pub height: Option<i32>,
}

impl Resolution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [width][Self::width] field.
    pub fn set_width(mut self, v: i32) -> Self {
        self.width = Some(v);
        self
    }

    /// Sets or clears the [width][Self::width] field.
    pub fn set_or_clear_width(mut self, v: Option<i32>) -> Self {
        self.width = v;
        self
    }

    /// Sets the [height][Self::height] field.
    pub fn set_height(mut self, v: i32) -> Self {
        self.height = Some(v);
        self
    }

    /// Sets or clears the [height][Self::height] field.
    pub fn set_or_clear_height(mut self, v: Option<i32>) -> Self {
        self.height = v;
        self
    }
}

/// The radios enabled on a device during a run.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Radios {
    pub wifi: Option<bool>,
    pub bluetooth: Option<bool>,
    pub nfc: Option<bool>,
    pub gps: Option<bool>,
}

impl Radios {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [wifi][Self::wifi] field.
    pub fn set_wifi(mut self, v: bool) -> Self {
        self.wifi = Some(v);
        self
    }

    /// Sets or clears the [wifi][Self::wifi] field.
    pub fn set_or_clear_wifi(mut self, v: Option<bool>) -> Self {
        self.wifi = v;
        self
    }

    /// Sets the [bluetooth][Self::bluetooth] field.
    pub fn set_bluetooth(mut self, v: bool) -> Self {
        self.bluetooth = Some(v);
        self
    }

    /// Sets or clears the [bluetooth][Self::bluetooth] field.
    pub fn set_or_clear_bluetooth(mut self, v: Option<bool>) -> Self {
        self.bluetooth = v;
        self
    }

    /// Sets the [nfc][Self::nfc] field.
    pub fn set_nfc(mut self, v: bool) -> Self {
        self.nfc = Some(v);
        self
    }

    /// Sets or clears the [nfc][Self::nfc] field.
    pub fn set_or_clear_nfc(mut self, v: Option<bool>) -> Self {
        self.nfc = v;
        self
    }

    /// Sets the [gps][Self::gps] field.
    pub fn set_gps(mut self, v: bool) -> Self {
        self.gps = Some(v);
        self
    }

    /// Sets or clears the [gps][Self::gps] field.
    pub fn set_or_clear_gps(mut self, v: Option<bool>) -> Self {
        self.gps = v;
        self
    }
}

/// The simulated location of a device during a run.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Location {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Location {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [latitude][Self::latitude] field.
    pub fn set_latitude(mut self, v: f64) -> Self {
        self.latitude = Some(v);
        self
    }

    /// Sets or clears the [latitude][Self::latitude] field.
    pub fn set_or_clear_latitude(mut self, v: Option<f64>) -> Self {
        self.latitude = v;
        self
    }

    /// Sets the [longitude][Self::longitude] field.
    pub fn set_longitude(mut self, v: f64) -> Self {
        self.longitude = Some(v);
        self
    }

    /// Sets or clears the [longitude][Self::longitude] field.
    pub fn set_or_clear_longitude(mut self, v: Option<f64>) -> Self {
        self.longitude = v;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    type Result = anyhow::Result<()>;

    #[test]
    fn radios() -> Result {
        let radios = Radios::new().set_wifi(true).set_bluetooth(false).set_gps(true);
        let got = serde_json::to_value(&radios)?;
        assert_eq!(got, json!({"wifi": true, "bluetooth": false, "gps": true}));

        let got =
            serde_json::from_value::<Radios>(json!({"nfc": true, "unknown": 1, "gps": null}))?;
        assert_eq!(got, Radios::new().set_nfc(true));
        Ok(())
    }

    #[test]
    fn location() -> Result {
        let got = serde_json::from_value::<Location>(
            json!({"latitude": 47.6204, "longitude": -122.3491}),
        )?;
        assert_eq!(got, Location::new().set_latitude(47.6204).set_longitude(-122.3491));
        let got = serde_json::to_value(Location::new())?;
        assert_eq!(got, json!({}));
        Ok(())
    }

    #[test]
    fn cpu_field_names() -> Result {
        let cpu = CPU::new().set_frequency("MHz").set_architecture("arm64-v8a").set_clock(2150.0);
        let got = serde_json::to_value(Device::new().set_cpu(cpu).set_heap_size(0))?;
        assert_eq!(
            got,
            json!({
                "cpu": {"frequency": "MHz", "architecture": "arm64-v8a", "clock": 2150.0},
                "heapSize": 0
            })
        );
        Ok(())
    }

    #[test]
    fn set_or_clear() -> Result {
        let resolution = Resolution::new().set_width(1080).set_height(1920);
        let got = resolution.clone().set_or_clear_height(None::<i32>);
        assert_eq!(got, Resolution::new().set_width(1080));
        let got = got.set_or_clear_height(Some(1920));
        assert_eq!(got, resolution);

        let device = Device::new()
            .set_name("Pixel 9")
            .set_resolution(resolution)
            .set_or_clear_resolution(None::<Resolution>)
            .set_or_clear_manufacturer(Some("Google"));
        assert_eq!(device.resolution, None);
        let got = serde_json::to_value(&device)?;
        assert_eq!(got, json!({"name": "Pixel 9", "manufacturer": "Google"}));
        Ok(())
    }
}
