//! Operation trait shared by every endpoint wrapper

use serde::Serialize;
use serde_json::{Map, Value};
use signed_client::SignedResponse;

use crate::endpoint::Endpoint;
use crate::error::{ApiError, Result};

/// Base trait for all purifier API operations
///
/// An operation pairs a fixed endpoint with a request payload shape and
/// knows how to pull its result out of the response body. The client adds
/// the session fields and signature.
pub trait PureAirOperation {
    /// The request type for this operation; must serialize to a JSON object
    type Request: Serialize;

    /// What the caller gets back
    type Response;

    /// The endpoint this operation posts to
    const ENDPOINT: Endpoint;

    /// Whether a session token must exist before the call is attempted
    const REQUIRES_SESSION: bool = true;

    /// Headers applied on top of the signed envelope
    fn extra_headers() -> &'static [(&'static str, &'static str)] {
        &[]
    }

    /// Turn the raw response into the typed result
    fn parse_response(response: SignedResponse) -> Result<Self::Response>;
}

/// Serialize a request into the payload map the signer expects
pub(crate) fn payload_of<T: Serialize>(request: &T) -> Result<Map<String, Value>> {
    match serde_json::to_value(request)? {
        Value::Object(map) => Ok(map),
        other => Err(ApiError::InvalidPayload(format!(
            "expected a JSON object, got {}",
            other
        ))),
    }
}

/// Remove the value at a dotted path from a response body
pub(crate) fn take_field(body: &mut Value, path: &str) -> Result<Value> {
    let mut current = body;
    for key in path.split('.') {
        current = current
            .get_mut(key)
            .ok_or_else(|| ApiError::missing_field(path))?;
    }
    Ok(current.take())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Wrapped(u32);

    #[test]
    fn test_payload_of_struct() {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Request {
            device_id: i64,
        }

        let payload = payload_of(&Request { device_id: 7 }).unwrap();
        assert_eq!(payload.get("deviceId"), Some(&json!(7)));
    }

    #[test]
    fn test_payload_of_non_object_is_rejected() {
        let result = payload_of(&Wrapped(3));
        assert!(matches!(result, Err(ApiError::InvalidPayload(_))));
    }

    #[test]
    fn test_take_nested_field() {
        let mut body = json!({ "content": { "objects": [1, 2] } });
        let objects = take_field(&mut body, "content.objects").unwrap();
        assert_eq!(objects, json!([1, 2]));
    }

    #[test]
    fn test_take_missing_field_names_full_path() {
        let mut body = json!({ "content": {} });
        match take_field(&mut body, "content.objects") {
            Err(ApiError::MissingField(path)) => assert_eq!(path, "content.objects"),
            other => panic!("Expected ApiError::MissingField, got {:?}", other),
        }
    }
}
