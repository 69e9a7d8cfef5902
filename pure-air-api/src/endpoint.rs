/// The vendor API paths this client talks to
///
/// All of them are `POST` with a JSON body and the signed `X-Zc-*` envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Exchange a login name and password for session credentials
    Login,

    /// Appliance catalog for the account's market
    SyncContent,

    /// Devices bound to the account
    ListDevices,

    /// Full status of one device
    QueryDeviceInfo,

    /// Power, fan mode and light commands
    ControlDevice,
}

impl Endpoint {
    /// Get the API-relative path for this endpoint
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Login => "/SEBService/v1/dcp-login",
            Endpoint::SyncContent => "/SEBService/v1/dcp-syncContent",
            Endpoint::ListDevices => "/zc-bind/v1/listDevicesExt",
            Endpoint::QueryDeviceInfo => "/SEBService/v1/queryDeviceInfo",
            Endpoint::ControlDevice => "/SEBService/v1/controlDeviceInfo",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::Login => "Login",
            Endpoint::SyncContent => "SyncContent",
            Endpoint::ListDevices => "ListDevices",
            Endpoint::QueryDeviceInfo => "QueryDeviceInfo",
            Endpoint::ControlDevice => "ControlDevice",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(Endpoint::Login.path(), "/SEBService/v1/dcp-login");
        assert_eq!(Endpoint::SyncContent.path(), "/SEBService/v1/dcp-syncContent");
        assert_eq!(Endpoint::ListDevices.path(), "/zc-bind/v1/listDevicesExt");
        assert_eq!(Endpoint::QueryDeviceInfo.path(), "/SEBService/v1/queryDeviceInfo");
        assert_eq!(Endpoint::ControlDevice.path(), "/SEBService/v1/controlDeviceInfo");
    }

    #[test]
    fn test_endpoint_names() {
        assert_eq!(Endpoint::ControlDevice.name(), "ControlDevice");
    }
}
