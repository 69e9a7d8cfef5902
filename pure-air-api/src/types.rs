//! Device and command value types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ApiError;

/// Fan mode, sent as its numeric value with the `model` command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Mode {
    Quiet = 1,
    Night = 2,
    Day = 3,
    Boost = 4,
}

/// Indicator light level, sent with the `light` command
///
/// The vendor numbers these from brightest to dimmest, so `High` is 0 and
/// `Off` is 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Light {
    High = 0,
    Low = 1,
    Off = 2,
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::Quiet, Mode::Night, Mode::Day, Mode::Boost];

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Mode::Quiet => "quiet",
            Mode::Night => "night",
            Mode::Day => "day",
            Mode::Boost => "boost",
        }
    }
}

impl Light {
    pub const ALL: [Light; 3] = [Light::High, Light::Low, Light::Off];

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Light::High => "high",
            Light::Low => "low",
            Light::Off => "off",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Light {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts the lowercase name or the numeric wire value
impl FromStr for Mode {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        Mode::ALL
            .into_iter()
            .find(|mode| mode.name() == s || mode.value().to_string() == s)
            .ok_or_else(|| {
                ApiError::InvalidPayload(format!(
                    "invalid mode `{}`; expected one of: quiet|night|day|boost",
                    s
                ))
            })
    }
}

impl FromStr for Light {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        Light::ALL
            .into_iter()
            .find(|light| light.name() == s || light.value().to_string() == s)
            .ok_or_else(|| {
                ApiError::InvalidPayload(format!(
                    "invalid light `{}`; expected one of: high|low|off",
                    s
                ))
            })
    }
}

/// A purifier bound to the account, as returned by `listDevicesExt`
///
/// Only the id and name are modeled; everything else the cloud sends is
/// kept untouched in `attributes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub device_id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(Mode::Quiet, 1)]
    #[case(Mode::Night, 2)]
    #[case(Mode::Day, 3)]
    #[case(Mode::Boost, 4)]
    fn test_mode_values(#[case] mode: Mode, #[case] expected: u8) {
        assert_eq!(mode.value(), expected);
    }

    #[rstest]
    #[case(Light::High, 0)]
    #[case(Light::Low, 1)]
    #[case(Light::Off, 2)]
    fn test_light_values_are_inverted(#[case] light: Light, #[case] expected: u8) {
        assert_eq!(light.value(), expected);
    }

    #[rstest]
    #[case("boost", Mode::Boost)]
    #[case("QUIET", Mode::Quiet)]
    #[case("2", Mode::Night)]
    fn test_mode_from_str(#[case] input: &str, #[case] expected: Mode) {
        assert_eq!(input.parse::<Mode>().unwrap(), expected);
    }

    #[rstest]
    #[case("off", Light::Off)]
    #[case(" Low ", Light::Low)]
    #[case("0", Light::High)]
    fn test_light_from_str(#[case] input: &str, #[case] expected: Light) {
        assert_eq!(input.parse::<Light>().unwrap(), expected);
    }

    #[test]
    fn test_invalid_names_are_rejected() {
        assert!(matches!("turbo".parse::<Mode>(), Err(ApiError::InvalidPayload(_))));
        assert!(matches!("5".parse::<Mode>(), Err(ApiError::InvalidPayload(_))));
        assert!(matches!("dim".parse::<Light>(), Err(ApiError::InvalidPayload(_))));
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for mode in Mode::ALL {
            assert_eq!(mode.to_string().parse::<Mode>().unwrap(), mode);
        }
        for light in Light::ALL {
            assert_eq!(light.to_string().parse::<Light>().unwrap(), light);
        }
    }

    #[test]
    fn test_device_keeps_unknown_attributes() {
        let device: Device = serde_json::from_value(json!({
            "deviceId": 7,
            "name": "Bedroom",
            "physicalDeviceId": "ABC123",
            "status": 1,
        }))
        .unwrap();

        assert_eq!(device.device_id, 7);
        assert_eq!(device.name, "Bedroom");
        assert_eq!(device.attributes.get("physicalDeviceId"), Some(&json!("ABC123")));
        assert_eq!(device.attributes.get("status"), Some(&json!(1)));
        assert!(!device.attributes.contains_key("deviceId"));
    }

    #[test]
    fn test_device_without_name() {
        let device: Device = serde_json::from_value(json!({ "deviceId": 9 })).unwrap();
        assert_eq!(device.name, "");
        assert!(device.attributes.is_empty());
    }
}
