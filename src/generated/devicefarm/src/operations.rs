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
use crate::model::{GetDeviceRequest, GetDeviceResult};
use gax::json_protocol::{JsonOperation, ServiceMetadata};

impl JsonOperation for GetDeviceRequest {
    type Output = GetDeviceResult;
    const NAME: &'static str = "GetDevice";
    fn metadata() -> &'static ServiceMetadata {
        &METADATA
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DeviceFarmError;
    use crate::model::*;
    use gax::error::ServiceException;
    use gax::json_protocol::{JsonMarshaller, unmarshall_response};
    use gax::marshaller::Marshaller;
    use gax::response::HttpResponse;
    use http::StatusCode;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;
    type Result = anyhow::Result<()>;

    const ARN: &str = "arn:aws:devicefarm:us-west-2::device:123EXAMPLE";

    #[test]
    fn marshall() -> Result {
        let request = JsonMarshaller.marshall(&GetDeviceRequest::new().set_arn(ARN))?;
        assert_eq!(request.service_name(), "AWSDeviceFarm");
        assert_eq!(request.endpoint_prefix(), "devicefarm");
        assert_eq!(request.header("X-Amz-Target"), Some("DeviceFarm_20150623.GetDevice"));
        let body = serde_json::from_slice::<serde_json::Value>(request.content())?;
        assert_eq!(body, json!({"arn": ARN}));
        Ok(())
    }

    #[test]
    fn marshall_optional() {
        let got = JsonMarshaller.marshall_optional(None::<&GetDeviceRequest>);
        assert!(matches!(&got, Err(e) if e.is_invalid_argument()), "{got:?}");
    }

    #[test]
    fn unmarshall() -> Result {
        let body = json!({
            "device": {
                "arn": ARN,
                "name": "LG G2 (Sprint)",
                "manufacturer": "LG",
                "model": "G2",
                "formFactor": "PHONE",
                "platform": "ANDROID",
                "os": "4.2.2",
                "cpu": {"frequency": "MHz", "architecture": "armeabi-v7a", "clock": 2265.6},
                "resolution": {"width": 1080, "height": 1920},
                "heapSize": 268435456,
                "memory": 16000000000_i64,
                "image": "75B2B7EF6C12345EXAMPLE",
                "carrier": "Sprint",
                "radio": "CDMA",
                "remoteAccessEnabled": false
            }
        });
        let response = HttpResponse::new(StatusCode::OK).set_body(body.to_string());
        let got = unmarshall_response::<GetDeviceRequest>(&response)?;
        let want = GetDeviceResult::new().set_device(
            Device::new()
                .set_arn(ARN)
                .set_name("LG G2 (Sprint)")
                .set_manufacturer("LG")
                .set_model("G2")
                .set_form_factor("PHONE")
                .set_platform("ANDROID")
                .set_os("4.2.2")
                .set_cpu(
                    CPU::new()
                        .set_frequency("MHz")
                        .set_architecture("armeabi-v7a")
                        .set_clock(2265.6),
                )
                .set_resolution(Resolution::new().set_width(1080).set_height(1920))
                .set_heap_size(268435456)
                .set_memory(16000000000)
                .set_image("75B2B7EF6C12345EXAMPLE")
                .set_carrier("Sprint")
                .set_radio("CDMA")
                .set_remote_access_enabled(false),
        );
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn unmarshall_empty() -> Result {
        let response = HttpResponse::new(StatusCode::OK);
        let got = unmarshall_response::<GetDeviceRequest>(&response)?;
        assert_eq!(got, GetDeviceResult::default());
        Ok(())
    }

    #[test_case("ArgumentException", StatusCode::BAD_REQUEST)]
    #[test_case("NotFoundException", StatusCode::BAD_REQUEST)]
    #[test_case("LimitExceededException", StatusCode::BAD_REQUEST)]
    #[test_case("ServiceAccountException", StatusCode::BAD_REQUEST)]
    #[test_case("IdempotencyException", StatusCode::BAD_REQUEST)]
    #[test_case("InternalFailure", StatusCode::INTERNAL_SERVER_ERROR)]
    fn errors(code: &str, status: StatusCode) -> Result {
        let body = json!({"__type": code, "message": "test-only"});
        let response = HttpResponse::new(status).set_body(body.to_string());
        let err = match unmarshall_response::<GetDeviceRequest>(&response) {
            Ok(r) => panic!("expected an error, got {r:?}"),
            Err(e) => e,
        };
        let typed = DeviceFarmError::from_error(&err);
        let matched = match (code, &typed) {
            ("ArgumentException", Some(DeviceFarmError::Argument(_))) => true,
            ("NotFoundException", Some(DeviceFarmError::NotFound(_))) => true,
            ("LimitExceededException", Some(DeviceFarmError::LimitExceeded(_))) => true,
            ("ServiceAccountException", Some(DeviceFarmError::ServiceAccount(_))) => true,
            (_, Some(DeviceFarmError::Unhandled(_))) => true,
            _ => false,
        };
        assert!(matched, "{typed:?}");
        assert_eq!(typed.as_ref().and_then(|t| t.error_code()), Some(code));
        assert_eq!(
            typed.map(|t| t.service_error().http_status_code()),
            Some(Some(status.as_u16()))
        );
        Ok(())
    }
}
