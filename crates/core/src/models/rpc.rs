//! JSON-RPC envelopes and the profile response

use serde::{Deserialize, Serialize};

/// Method name for the pre-computed profile endpoint
pub const METHOD_GET_PROFILE: &str = "bridge.get_profile";
/// Method name for network-wide totals
pub const METHOD_GET_DYNAMIC_GLOBAL_PROPERTIES: &str =
    "condenser_api.get_dynamic_global_properties";

/// A JSON-RPC 2.0 request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
    pub id: u64,
}

impl JsonRpcRequest {
    pub fn new(method: &str, params: serde_json::Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
            id: 1,
        }
    }

    /// `bridge.get_profile` for a single account
    pub fn get_profile(account: &str) -> Self {
        Self::new(METHOD_GET_PROFILE, serde_json::json!({ "account": account }))
    }

    pub fn get_dynamic_global_properties() -> Self {
        Self::new(METHOD_GET_DYNAMIC_GLOBAL_PROPERTIES, serde_json::json!([]))
    }
}

/// A JSON-RPC 2.0 response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct JsonRpcResponse<T> {
    #[serde(default)]
    pub result: Option<T>,
    #[serde(default)]
    pub error: Option<JsonRpcError>,
}

/// Error member of a JSON-RPC response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

/// Response from `bridge.get_profile`, reduced to the one field we read
///
/// Deserializing fails unless `result.reputation` is present and numeric.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub result: ProfileResult,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResult {
    /// Already human-scaled, e.g. `72.41`
    pub reputation: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_request_body() {
        let body = serde_json::to_value(JsonRpcRequest::get_profile("alice")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "jsonrpc": "2.0",
                "method": "bridge.get_profile",
                "params": {"account": "alice"},
                "id": 1
            })
        );
    }

    #[test]
    fn test_profile_response_shape_is_strict() {
        let ok: ProfileResponse = serde_json::from_str(
            r#"{"jsonrpc":"2.0","result":{"name":"alice","reputation":72.41},"id":1}"#,
        )
        .unwrap();
        assert_eq!(ok.result.reputation, 72.41);

        for body in [
            r#"{"result":null}"#,
            r#"{"result":{"reputation":"72"}}"#,
            r#"{"error":{"code":-32602,"message":"x"}}"#,
        ] {
            assert!(serde_json::from_str::<ProfileResponse>(body).is_err(), "{}", body);
        }
    }

    #[test]
    fn test_error_envelope() {
        let resp: JsonRpcResponse<serde_json::Value> = serde_json::from_str(
            r#"{"jsonrpc":"2.0","error":{"code":-32603,"message":"Internal Error"},"id":1}"#,
        )
        .unwrap();
        assert!(resp.result.is_none());
        assert_eq!(resp.error.map(|e| e.code), Some(-32603));
    }
}
