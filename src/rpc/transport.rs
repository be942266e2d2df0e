use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{ExplorerError, Result};

/// Carries one serialized JSON-RPC request to the node and hands back the decoded body
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, body: Value) -> Result<Value>;
}

/// JSON-RPC 2.0 request envelope
#[derive(Debug, Serialize)]
pub struct JsonRpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub method: &'a str,
    pub params: &'a [Value],
    pub id: u64,
}

impl<'a> JsonRpcRequest<'a> {
    pub fn new(id: u64, method: &'a str, params: &'a [Value]) -> Self {
        Self {
            jsonrpc: "2.0",
            method,
            params,
            id,
        }
    }
}

/// JSON-RPC 2.0 response envelope
#[derive(Debug, Deserialize)]
pub struct JsonRpcResponse {
    /// `Some(Value::Null)` for `"result": null`, `None` when the key is absent
    #[serde(default, deserialize_with = "present")]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<JsonRpcError>,
}

fn present<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

#[derive(Debug, Deserialize)]
pub struct JsonRpcError {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

/// HTTP POST transport against a single endpoint
pub struct HttpTransport {
    http: reqwest::Client,
    url: reqwest::Url,
}

impl HttpTransport {
    pub fn new(rpc_url: &str) -> Result<Self> {
        let url = rpc_url
            .parse()
            .map_err(|e| ExplorerError::Transport(format!("Invalid RPC URL {rpc_url:?}: {e}")))?;

        Ok(Self {
            http: reqwest::Client::new(),
            url,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, body: Value) -> Result<Value> {
        let response = self.http.post(self.url.clone()).json(&body).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        let body: Value = serde_json::from_slice(&bytes).map_err(|e| {
            ExplorerError::Transport(format!("HTTP {status}: response is not JSON ({e})"))
        })?;

        // Nodes often pair 4xx/5xx with a JSON-RPC error object; pass that on
        // so the caller sees the node's message
        if !status.is_success() && !body.get("error").is_some_and(Value::is_object) {
            return Err(ExplorerError::Transport(format!("HTTP {status}")));
        }

        Ok(body)
    }
}
