//! ControlDevice operation: power, mode and light commands

use serde::Serialize;
use signed_client::SignedResponse;

use crate::error::Result;
use crate::types::{Light, Mode};
use crate::{Endpoint, PureAirOperation};

/// Sub domain the control endpoint expects, distinct from the header value
pub const CONTROL_SUB_DOMAIN: &str = "rowentaxs";

/// ControlDevice operation
pub struct ControlDeviceOperation;

/// Which setting a control request changes, sent as `commend`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Command {
    #[serde(rename = "on_off")]
    Power,
    #[serde(rename = "model")]
    Mode,
    #[serde(rename = "light")]
    Light,
}

/// Request for a control command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlDeviceRequest {
    pub device_id: i64,
    pub value: u8,
    pub sub_domain_name: String,
    pub sn: u32,
    pub commend: Command,
}

impl ControlDeviceRequest {
    pub fn new(device_id: i64, commend: Command, value: u8) -> Self {
        Self {
            device_id,
            value,
            sub_domain_name: CONTROL_SUB_DOMAIN.to_string(),
            sn: 1,
            commend,
        }
    }

    pub fn power(device_id: i64, on: bool) -> Self {
        Self::new(device_id, Command::Power, u8::from(on))
    }

    pub fn mode(device_id: i64, mode: Mode) -> Self {
        Self::new(device_id, Command::Mode, mode.value())
    }

    pub fn light(device_id: i64, light: Light) -> Self {
        Self::new(device_id, Command::Light, light.value())
    }
}

impl PureAirOperation for ControlDeviceOperation {
    type Request = ControlDeviceRequest;
    type Response = SignedResponse;

    const ENDPOINT: Endpoint = Endpoint::ControlDevice;

    fn parse_response(response: SignedResponse) -> Result<Self::Response> {
        Ok(response)
    }
}
