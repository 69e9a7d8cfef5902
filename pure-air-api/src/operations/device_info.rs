//! QueryDeviceInfo operation

use serde::Serialize;
use serde_json::Value;
use signed_client::SignedResponse;

use crate::error::Result;
use crate::{Endpoint, PureAirOperation};

/// QueryDeviceInfo operation
pub struct QueryDeviceInfoOperation;

/// Request for device info
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryDeviceInfoRequest {
    pub device_id: i64,
}

impl PureAirOperation for QueryDeviceInfoOperation {
    type Request = QueryDeviceInfoRequest;
    /// The whole response body; its shape varies by firmware
    type Response = Value;

    const ENDPOINT: Endpoint = Endpoint::QueryDeviceInfo;

    fn parse_response(response: SignedResponse) -> Result<Self::Response> {
        Ok(response.json()?)
    }
}
