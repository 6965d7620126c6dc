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

use crate::METADATA;
use crate::model::{DescribeVTLDevicesInput, DescribeVTLDevicesOutput};
use gax::json_protocol::{JsonOperation, ServiceMetadata};

impl JsonOperation for DescribeVTLDevicesInput {
    type Output = DescribeVTLDevicesOutput;
    const NAME: &'static str = "DescribeVTLDevices";
    fn metadata() -> &'static ServiceMetadata {
        &METADATA
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::StorageGatewayError;
    use crate::model::*;
    use gax::error::{ErrorType, ServiceException};
    use gax::json_protocol::{JsonMarshaller, unmarshall_response};
    use gax::marshaller::Marshaller;
    use gax::response::HttpResponse;
    use http::StatusCode;
    use serde_json::json;
    type Result = anyhow::Result<()>;

    const GATEWAY: &str = "arn:aws:storagegateway:us-east-1:111122223333:gateway/sgw-12A3456B";

    #[test]
    fn marshall() -> Result {
        let input = DescribeVTLDevicesInput::new()
            .set_gateway_arn(GATEWAY)
            .set_vtl_device_arns([format!("{GATEWAY}/device/AMZN_SGW-1FAD4876_TAPEDRIVE_00001")])
            .set_limit(10);
        let request = JsonMarshaller.marshall(&input)?;
        assert_eq!(request.service_name(), "AWSStorageGateway");
        assert_eq!(
            request.header("X-Amz-Target"),
            Some("StorageGateway_20130630.DescribeVTLDevices")
        );
        let length = request.content().len().to_string();
        assert_eq!(request.header("Content-Length"), Some(length.as_str()));
        let body = serde_json::from_slice::<serde_json::Value>(request.content())?;
        assert_eq!(
            body,
            json!({
                "GatewayARN": GATEWAY,
                "VTLDeviceARNs": [format!("{GATEWAY}/device/AMZN_SGW-1FAD4876_TAPEDRIVE_00001")],
                "Limit": 10,
            })
        );
        Ok(())
    }

    #[test]
    fn marshall_lists() -> Result {
        // Unset lists are omitted.
        let input = DescribeVTLDevicesInput::new().set_gateway_arn(GATEWAY);
        let request = JsonMarshaller.marshall(&input)?;
        let body = serde_json::from_slice::<serde_json::Value>(request.content())?;
        assert_eq!(body, json!({"GatewayARN": GATEWAY}));

        // Empty lists are sent.
        let input = DescribeVTLDevicesInput::new().set_vtl_device_arns(Vec::<String>::new());
        let request = JsonMarshaller.marshall(&input)?;
        assert_eq!(request.content().as_ref(), br#"{"VTLDeviceARNs":[]}"#);
        Ok(())
    }

    #[test]
    fn unmarshall() -> Result {
        let body = json!({
            "GatewayARN": GATEWAY,
            "VTLDevices": [{
                "VTLDeviceARN": format!("{GATEWAY}/device/AMZN_SGW-1FAD4876_MEDIACHANGER"),
                "VTLDeviceType": "Medium Changer",
                "VTLDeviceVendor": "AWS",
                "VTLDeviceProductIdentifier": "Gateway-VTL",
                "DeviceiSCSIAttributes": {
                    "TargetARN": "arn:aws:storagegateway:us-east-1:111122223333:gateway/sgw-1FAD4876/target/iqn.1997-05.com.amazon:sgw-1fad4876-mediachanger",
                    "NetworkInterfaceId": "10.0.0.7",
                    "NetworkInterfacePort": 3260,
                    "ChapEnabled": false
                }
            }],
            "Marker": null
        });
        let response = HttpResponse::new(StatusCode::OK).set_body(body.to_string());
        let got = unmarshall_response::<DescribeVTLDevicesInput>(&response)?;
        assert_eq!(got.gateway_arn.as_deref(), Some(GATEWAY));
        assert_eq!(got.marker, None);
        assert_eq!(got.vtl_devices().len(), 1);
        let device = &got.vtl_devices()[0];
        assert_eq!(device.vtl_device_type.as_deref(), Some("Medium Changer"));
        let attributes = device.device_iscsi_attributes.clone().unwrap_or_default();
        assert_eq!(attributes.network_interface_port, Some(3260));
        assert_eq!(attributes.chap_enabled, Some(false));
        Ok(())
    }

    #[test]
    fn error() {
        let body = json!({
            "__type": "com.amazonaws.storagegateway.v20130630#InvalidGatewayRequestException",
            "message": "The specified gateway was not found.",
        });
        let response = HttpResponse::new(StatusCode::BAD_REQUEST).set_body(body.to_string());
        let got = unmarshall_response::<DescribeVTLDevicesInput>(&response);
        let err = match got {
            Ok(r) => panic!("expected an error, got {r:?}"),
            Err(e) => e,
        };
        assert_eq!(
            err.service_error().map(|e| e.error_type()),
            Some(ErrorType::Client)
        );
        let typed = StorageGatewayError::from_error(&err);
        assert!(
            matches!(typed, Some(StorageGatewayError::InvalidGatewayRequest(_))),
            "{typed:?}"
        );
    }
}
