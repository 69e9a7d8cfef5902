//! Login operation

use serde::Serialize;
use serde_json::Value;
use signed_client::{headers, Credentials, SignedResponse};

use crate::error::{ApiError, Result};
use crate::{Endpoint, PureAirOperation};

/// Login operation
pub struct LoginOperation;

/// Request for login
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub login_name: String,
    pub password: String,
}

/// Session material returned by a successful login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginResponse {
    pub credentials: Credentials,
    pub nick_name: Option<String>,
}

impl PureAirOperation for LoginOperation {
    type Request = LoginRequest;
    type Response = LoginResponse;

    const ENDPOINT: Endpoint = Endpoint::Login;
    const REQUIRES_SESSION: bool = false;

    // No token exists yet, so the call is made in access mode
    fn extra_headers() -> &'static [(&'static str, &'static str)] {
        &[(headers::ACCESS_MODE, "1")]
    }

    fn parse_response(response: SignedResponse) -> Result<Self::Response> {
        let body: Value = response.json()?;

        let credentials = Credentials {
            token: string_field(&body, "token")?,
            dcp_token: string_field(&body, "dcpToken")?,
            dcp_uid: string_field(&body, "dcpUid")?,
            user_id: string_field(&body, "userId")?,
        };
        let nick_name = body
            .get("nickName")
            .and_then(Value::as_str)
            .map(str::to_string);

        Ok(LoginResponse {
            credentials,
            nick_name,
        })
    }
}

/// Read a field as a string; numbers (the cloud sends `userId` as one) are
/// converted to their decimal form
fn string_field(body: &Value, key: &str) -> Result<String> {
    match body.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(other) => Err(ApiError::ParseError(format!(
            "field `{}` has unexpected type: {}",
            key, other
        ))),
        None => Err(ApiError::missing_field(key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn response(body: &str) -> SignedResponse {
        SignedResponse {
            status: 200,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_login_payload_field_names() {
        let request = LoginRequest {
            login_name: "a".to_string(),
            password: "b".to_string(),
        };
        let payload = crate::operation::payload_of(&request).unwrap();
        assert_eq!(payload.get("loginName"), Some(&Value::from("a")));
        assert_eq!(payload.get("password"), Some(&Value::from("b")));
    }

    #[test]
    fn test_login_uses_access_mode() {
        assert_eq!(LoginOperation::extra_headers(), &[("X-Zc-Access-Mode", "1")]);
        assert!(!LoginOperation::REQUIRES_SESSION);
    }

    #[test]
    fn test_parse_login_response() {
        let parsed = LoginOperation::parse_response(response(
            r#"{"token":"t1","dcpToken":"dt1","dcpUid":"u1","userId":42,"nickName":"N"}"#,
        ))
        .unwrap();

        assert_eq!(parsed.credentials.token, "t1");
        assert_eq!(parsed.credentials.dcp_token, "dt1");
        assert_eq!(parsed.credentials.dcp_uid, "u1");
        assert_eq!(parsed.credentials.user_id, "42");
        assert_eq!(parsed.nick_name.as_deref(), Some("N"));
    }

    #[test]
    fn test_string_user_id_is_accepted() {
        let parsed = LoginOperation::parse_response(response(
            r#"{"token":"t1","dcpToken":"dt1","dcpUid":"u1","userId":"42"}"#,
        ))
        .unwrap();
        assert_eq!(parsed.credentials.user_id, "42");
        assert!(parsed.nick_name.is_none());
    }

    #[test]
    fn test_missing_token_is_reported() {
        let result = LoginOperation::parse_response(response(
            r#"{"errorCode":3501,"error":"login failed"}"#,
        ));
        match result {
            Err(ApiError::MissingField(field)) => assert_eq!(field, "token"),
            other => panic!("Expected ApiError::MissingField, got {:?}", other),
        }
    }

    #[rstest]
    #[case(r#"{"dcpToken":"dt1","dcpUid":"u1","userId":42}"#, "token")]
    #[case(r#"{"token":"t1","dcpUid":"u1","userId":42}"#, "dcpToken")]
    #[case(r#"{"token":"t1","dcpToken":"dt1","userId":42}"#, "dcpUid")]
    #[case(r#"{"token":"t1","dcpToken":"dt1","dcpUid":"u1"}"#, "userId")]
    fn test_each_credential_field_is_required(#[case] body: &str, #[case] missing: &str) {
        match LoginOperation::parse_response(response(body)) {
            Err(ApiError::MissingField(field)) => assert_eq!(field, missing),
            other => panic!("Expected ApiError::MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_null_field_is_a_parse_error() {
        let result = LoginOperation::parse_response(response(
            r#"{"token":null,"dcpToken":"dt1","dcpUid":"u1","userId":1}"#,
        ));
        assert!(matches!(result, Err(ApiError::ParseError(_))));
    }
}
