use serde_json::Value;
use signed_client::{ClientConfig, Credentials, SignedClient, SignedResponse};

use crate::operation::payload_of;
use crate::operations::{
    ControlDeviceOperation, ControlDeviceRequest, ListDevicesOperation, ListDevicesRequest,
    LoginOperation, LoginRequest, QueryDeviceInfoOperation, QueryDeviceInfoRequest,
    SyncContentOperation, SyncContentRequest,
};
use crate::types::{Device, Light, Mode};
use crate::{ApiError, PureAirOperation, Result};

/// A client holding one cloud session for a Pure Air account
///
/// Operations are blocking and issue exactly one HTTP request each. The
/// session is plain owned state with no locking: `connect` takes `&mut self`,
/// everything else reads it. Share a client across threads only behind your
/// own synchronization.
///
/// # Example
/// ```rust,no_run
/// use pure_air_api::{Light, Mode, PureAirClient};
///
/// let mut client = PureAirClient::new();
/// client.connect("user@example.com", "secret")?;
///
/// for device in client.list_devices()? {
///     client.set_power(device.device_id, true)?;
///     client.set_light(device.device_id, Light::Low)?;
///     client.set_mode(device.device_id, Mode::Boost)?;
/// }
/// # Ok::<(), pure_air_api::ApiError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PureAirClient {
    signed_client: SignedClient,
    session: Credentials,
}

impl PureAirClient {
    /// Create an unauthenticated client for the production endpoint
    pub fn new() -> Self {
        Self::with_signed_client(SignedClient::new())
    }

    /// Create an unauthenticated client from a custom configuration
    pub fn with_config(config: ClientConfig) -> Self {
        Self::with_signed_client(SignedClient::with_config(config))
    }

    /// Create an unauthenticated client around an existing signed client
    pub fn with_signed_client(signed_client: SignedClient) -> Self {
        Self {
            signed_client,
            session: Credentials::default(),
        }
    }

    /// The current session credentials
    pub fn session(&self) -> &Credentials {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Execute an operation with the current session
    ///
    /// Operations that require a session fail with
    /// [`ApiError::NotAuthenticated`] before any request is built.
    pub fn execute<Op: PureAirOperation>(&self, request: &Op::Request) -> Result<Op::Response> {
        if Op::REQUIRES_SESSION && !self.session.is_authenticated() {
            return Err(ApiError::NotAuthenticated);
        }

        tracing::debug!(operation = Op::ENDPOINT.name(), "executing operation");

        let payload = payload_of(request)?;
        let response = self.signed_client.post(
            Op::ENDPOINT.path(),
            payload,
            &self.session,
            Op::extra_headers(),
        )?;

        Op::parse_response(response)
    }

    /// Log in and replace the session credentials
    ///
    /// On failure the client is left unauthenticated, even if an earlier
    /// login had succeeded.
    pub fn connect(&mut self, username: &str, password: &str) -> Result<()> {
        let request = LoginRequest {
            login_name: username.to_string(),
            password: password.to_string(),
        };

        match self.execute::<LoginOperation>(&request) {
            Ok(login) => {
                self.session = login.credentials;
                tracing::info!(
                    nickname = login.nick_name.as_deref().unwrap_or("<unknown>"),
                    user_id = %self.session.user_id,
                    "connected to Pure Air cloud"
                );
                Ok(())
            }
            Err(e) => {
                self.session = Credentials::default();
                tracing::warn!(error = %e, "login failed");
                Err(e)
            }
        }
    }

    /// Fetch the appliance catalog (`content.objects`)
    pub fn sync_content(&self) -> Result<Value> {
        self.execute::<SyncContentOperation>(&SyncContentRequest::default())
    }

    /// List the devices bound to the account
    pub fn list_devices(&self) -> Result<Vec<Device>> {
        self.execute::<ListDevicesOperation>(&ListDevicesRequest::default())
    }

    /// Fetch the full status object of one device
    pub fn device_info(&self, device_id: i64) -> Result<Value> {
        self.execute::<QueryDeviceInfoOperation>(&QueryDeviceInfoRequest { device_id })
    }

    pub fn set_power(&self, device_id: i64, on: bool) -> Result<SignedResponse> {
        self.execute::<ControlDeviceOperation>(&ControlDeviceRequest::power(device_id, on))
    }

    pub fn set_mode(&self, device_id: i64, mode: Mode) -> Result<SignedResponse> {
        self.execute::<ControlDeviceOperation>(&ControlDeviceRequest::mode(device_id, mode))
    }

    pub fn set_light(&self, device_id: i64, light: Light) -> Result<SignedResponse> {
        self.execute::<ControlDeviceOperation>(&ControlDeviceRequest::light(device_id, light))
    }
}

impl Default for PureAirClient {
    fn default() -> Self {
        Self::new()
    }
}
