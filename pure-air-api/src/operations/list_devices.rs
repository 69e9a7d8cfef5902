//! ListDevices operation

use serde::Serialize;
use serde_json::Value;
use signed_client::SignedResponse;

use crate::error::Result;
use crate::operation::take_field;
use crate::types::Device;
use crate::{Endpoint, PureAirOperation};

/// ListDevices operation
pub struct ListDevicesOperation;

/// Request for the devices bound to the account
#[derive(Serialize)]
pub struct ListDevicesRequest {
    pub status: bool,
}

impl Default for ListDevicesRequest {
    fn default() -> Self {
        Self { status: true }
    }
}

impl PureAirOperation for ListDevicesOperation {
    type Request = ListDevicesRequest;
    type Response = Vec<Device>;

    const ENDPOINT: Endpoint = Endpoint::ListDevices;

    fn parse_response(response: SignedResponse) -> Result<Self::Response> {
        let mut body: Value = response.json()?;
        let devices = take_field(&mut body, "devices")?;
        Ok(serde_json::from_value(devices)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ApiError;

    fn response(body: &str) -> SignedResponse {
        SignedResponse {
            status: 200,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_parse_devices() {
        let devices = ListDevicesOperation::parse_response(response(
            r#"{"devices":[
                {"deviceId":7,"name":"Bedroom"},
                {"deviceId":8,"name":"Office","owner":1}
            ]}"#,
        ))
        .unwrap();

        assert_eq!(devices.len(), 2);
        assert_eq!(devices[0].device_id, 7);
        assert_eq!(devices[1].name, "Office");
        assert!(devices[1].attributes.contains_key("owner"));
    }

    #[test]
    fn test_missing_devices_key() {
        let result = ListDevicesOperation::parse_response(response(r#"{"total":0}"#));
        assert!(matches!(result, Err(ApiError::MissingField(_))));
    }

    #[test]
    fn test_device_without_id_is_a_parse_error() {
        let result =
            ListDevicesOperation::parse_response(response(r#"{"devices":[{"name":"x"}]}"#));
        assert!(matches!(result, Err(ApiError::ParseError(_))));
    }
}
