//! JSON-RPC client for a Hive API node

use hivekit_core::{
    DynamicGlobalProperties, Error, JsonRpcRequest, JsonRpcResponse, ProfileResponse, Result,
    DEFAULT_REPUTATION,
};
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE},
    Client, Response,
};
use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument, warn};

/// Public API node used when the caller has no preference
pub const DEFAULT_ENDPOINT: &str = "https://api.hive.blog";

const USER_AGENT_VALUE: &str = concat!("hivekit/", env!("CARGO_PKG_VERSION"));

/// Client for a single JSON-RPC endpoint
///
/// Makes exactly one request per call. Retries, timeouts, and
/// cancellation belong to the `reqwest::Client` the caller hands in
/// (see [`HiveClient::with_http`]) or to the caller itself.
#[derive(Debug, Clone)]
pub struct HiveClient {
    http: Client,
    endpoint: String,
}

impl HiveClient {
    /// Create a client for the given endpoint URL
    pub fn new(endpoint: &str) -> Result<Self> {
        let http = Client::builder().user_agent(USER_AGENT_VALUE).build()?;
        Ok(Self::with_http(http, endpoint))
    }

    /// Create a client on top of an existing transport stack
    pub fn with_http(http: Client, endpoint: &str) -> Self {
        Self {
            http,
            endpoint: endpoint.to_string(),
        }
    }

    /// Create a client for [`DEFAULT_ENDPOINT`]
    pub fn default_node() -> Result<Self> {
        Self::new(DEFAULT_ENDPOINT)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    /// POST a JSON-RPC request. Only transport failures are errors here.
    async fn post(&self, request: &JsonRpcRequest) -> Result<Response> {
        debug!("POST {} {}", self.endpoint, request.method);

        let response = self
            .http
            .post(&self.endpoint)
            .headers(Self::default_headers())
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!("{} request failed: {}", request.method, e);
                Error::NetworkError(e.to_string())
            })?;

        debug!("Response status: {}", response.status());
        Ok(response)
    }

    /// Fetch the pre-computed display reputation for `username`
    ///
    /// Blank usernames return 25 without touching the network. Non-success
    /// statuses and bodies lacking a numeric `result.reputation` also return
    /// 25. Transport failures are returned as `Error::NetworkError`.
    #[instrument(skip(self))]
    pub async fn fetch_reputation(&self, username: &str) -> Result<i64> {
        let account = username.trim();
        if account.is_empty() {
            debug!("Blank username, skipping profile lookup");
            return Ok(DEFAULT_REPUTATION);
        }

        let response = self.post(&JsonRpcRequest::get_profile(account)).await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Profile lookup for {} returned HTTP {}, using default", account, status);
            return Ok(DEFAULT_REPUTATION);
        }

        let body = response.bytes().await.map_err(|e| {
            error!("Failed to read profile response body: {}", e);
            Error::NetworkError(e.to_string())
        })?;

        match serde_json::from_slice::<ProfileResponse>(&body) {
            Ok(profile) => {
                let reputation = profile.result.reputation.floor() as i64;
                debug!("Reputation for {}: {}", account, reputation);
                Ok(reputation)
            }
            Err(e) => {
                warn!("Unexpected profile response for {}: {}, using default", account, e);
                Ok(DEFAULT_REPUTATION)
            }
        }
    }

    /// Call a JSON-RPC method and decode its `result`
    ///
    /// Unlike [`HiveClient::fetch_reputation`] this is strict: HTTP errors and
    /// JSON-RPC `error` members become `Error::ApiError`, bad bodies
    /// `Error::InvalidData`.
    #[instrument(skip(self, params))]
    pub async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<T> {
        self.send(&JsonRpcRequest::new(method, params)).await
    }

    /// Network-wide vesting totals, for `shares_to_value`
    #[instrument(skip(self))]
    pub async fn get_dynamic_global_properties(&self) -> Result<DynamicGlobalProperties> {
        let props: DynamicGlobalProperties = self
            .send(&JsonRpcRequest::get_dynamic_global_properties())
            .await?;
        debug!("Global properties at block {}", props.head_block_number);
        Ok(props)
    }

    async fn send<T: DeserializeOwned>(&self, request: &JsonRpcRequest) -> Result<T> {
        let response = self.post(request).await?.error_for_status().map_err(|e| {
            error!("{} request failed: {}", request.method, e);
            Error::ApiError(e.to_string())
        })?;

        let body = response.bytes().await.map_err(|e| {
            error!("Failed to read {} response body: {}", request.method, e);
            Error::NetworkError(e.to_string())
        })?;

        let envelope: JsonRpcResponse<T> = serde_json::from_slice(&body).map_err(|e| {
            error!("Failed to parse {} response: {}", request.method, e);
            Error::InvalidData(e.to_string())
        })?;

        if let Some(rpc_error) = envelope.error {
            error!("{} returned error {}: {}", request.method, rpc_error.code, rpc_error.message);
            return Err(Error::ApiError(format!(
                "{} ({})",
                rpc_error.message, rpc_error.code
            )));
        }

        envelope
            .result
            .ok_or_else(|| Error::InvalidData(format!("{} response has no result", request.method)))
    }
}
