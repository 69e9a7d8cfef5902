//! SyncContent operation

use serde::Serialize;
use serde_json::Value;
use signed_client::SignedResponse;

use crate::error::Result;
use crate::operation::take_field;
use crate::{Endpoint, PureAirOperation};

/// SyncContent operation
pub struct SyncContentOperation;

/// Request for the appliance catalog
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncContentRequest {
    pub content_type: String,
    pub lang: String,
}

impl Default for SyncContentRequest {
    fn default() -> Self {
        Self {
            content_type: "syncAppliances".to_string(),
            lang: "en".to_string(),
        }
    }
}

impl PureAirOperation for SyncContentOperation {
    type Request = SyncContentRequest;
    /// The `content.objects` array, passed through as-is
    type Response = Value;

    const ENDPOINT: Endpoint = Endpoint::SyncContent;

    fn parse_response(response: SignedResponse) -> Result<Self::Response> {
        let mut body: Value = response.json()?;
        take_field(&mut body, "content.objects")
    }
}
