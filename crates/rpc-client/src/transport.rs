//! JSON-RPC 2.0 over HTTP.
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Deserialize;
use serde_json::{json, Value};
use url::Url;

use crate::config::Config;
use crate::error::{ConfigError, RpcError, TransportError};
use crate::metrics::with_metrics;

/// Issues a single JSON-RPC call and returns its `result` member.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn call(&self, method: &'static str, params: Value) -> Result<Value, TransportError>;
}

#[derive(Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    url: Url,
    /// Masked address, safe to log.
    address: String,
    next_id: AtomicU64,
}

impl HttpTransport {
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent())
            .build()
            .map_err(ConfigError::HttpClient)?;

        Ok(Self {
            client,
            url: config.url().clone(),
            address: config.address().to_owned(),
            next_id: AtomicU64::new(1),
        })
    }

    async fn post(&self, method: &'static str, params: Value) -> Result<Value, TransportError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = json!({
            "jsonrpc": "2.0",
            "method": method,
            "params": params,
            "id": id,
        });
        tracing::trace!(address=%self.address, %request, "Sending JSON-RPC request");

        let response = self.client.post(self.url.clone()).json(&request).send().await?;
        let status = response.status();
        let status_error = response.error_for_status_ref().err();
        let body = response.bytes().await?;
        tracing::trace!(
            address=%self.address,
            %status,
            body=%String::from_utf8_lossy(&body),
            "Received JSON-RPC response"
        );

        let (reply, status_error) = match (serde_json::from_slice::<Value>(&body), status_error) {
            (Ok(reply), status_error) => (reply, status_error),
            // An HTTP error without a JSON body.
            (Err(_), Some(e)) => return Err(e.into()),
            (Err(e), None) => return Err(TransportError::Decode(e)),
        };

        if let Some(error) = reply.get("error").filter(|error| !error.is_null()) {
            let error = RpcError::deserialize(error).map_err(TransportError::Decode)?;
            return Err(error.into());
        }
        if let Some(e) = status_error {
            return Err(e.into());
        }

        match reply {
            Value::Object(mut object) => object
                .remove("result")
                .ok_or_else(|| TransportError::InvalidResponse("missing result".to_owned())),
            other => Err(TransportError::InvalidResponse(format!(
                "expected an object, got {other}"
            ))),
        }
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn call(&self, method: &'static str, params: Value) -> Result<Value, TransportError> {
        with_metrics(method, self.post(method, params)).await
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use httpmock::prelude::*;
    use pretty_assertions_sorted::assert_eq;

    use super::*;

    fn transport(server: &MockServer) -> HttpTransport {
        let config = Config::builder()
            .address(server.base_url())
            .build()
            .unwrap();
        HttpTransport::new(&config).unwrap()
    }

    #[test_log::test(tokio::test)]
    async fn envelope_and_result() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/").json_body(json!({
                    "jsonrpc": "2.0",
                    "method": "starknet_chainId",
                    "params": [],
                    "id": 1
                }));
                then.status(200)
                    .json_body(json!({ "jsonrpc": "2.0", "id": 1, "result": "0x534e5f4d41494e" }));
            })
            .await;

        let result = transport(&server)
            .call("starknet_chainId", json!([]))
            .await
            .unwrap();
        assert_eq!(result, json!("0x534e5f4d41494e"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn ids_increase() {
        let server = MockServer::start_async().await;
        let first = server
            .mock_async(|when, then| {
                when.method(POST).json_body_partial(r#"{"id": 1}"#);
                then.status(200).json_body(json!({ "jsonrpc": "2.0", "id": 1, "result": 1 }));
            })
            .await;
        let second = server
            .mock_async(|when, then| {
                when.method(POST).json_body_partial(r#"{"id": 2}"#);
                then.status(200).json_body(json!({ "jsonrpc": "2.0", "id": 2, "result": 2 }));
            })
            .await;

        let transport = transport(&server);
        assert_eq!(transport.call("starknet_blockNumber", json!([])).await.unwrap(), json!(1));
        assert_eq!(transport.call("starknet_blockNumber", json!([])).await.unwrap(), json!(2));
        first.assert_async().await;
        second.assert_async().await;
    }

    #[tokio::test]
    async fn rpc_error_carries_data() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(200).json_body(json!({
                    "jsonrpc": "2.0",
                    "id": 1,
                    "error": { "code": 24, "message": "Block not found", "data": "no such block" }
                }));
            })
            .await;

        let error = transport(&server)
            .call("starknet_getBlockWithReceipts", json!({ "block_id": "latest" }))
            .await
            .unwrap_err();
        let error = assert_matches!(error, TransportError::Rpc(e) => e);
        assert_eq!(error.code, 24);
        assert_eq!(error.data, Some(json!("no such block")));
    }

    #[tokio::test]
    async fn rpc_error_on_http_error_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(500).json_body(json!({
                    "jsonrpc": "2.0",
                    "id": 1,
                    "error": { "code": -32603, "message": "Internal error" }
                }));
            })
            .await;

        assert_matches!(
            transport(&server).call("starknet_syncing", json!([])).await,
            Err(TransportError::Rpc(RpcError { code: -32603, .. }))
        );
    }

    #[tokio::test]
    async fn http_error_without_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(503).body("unavailable");
            })
            .await;

        let error = transport(&server)
            .call("starknet_syncing", json!([]))
            .await
            .unwrap_err();
        let error = assert_matches!(error, TransportError::Reqwest(e) => e);
        assert_eq!(error.status(), Some(reqwest::StatusCode::SERVICE_UNAVAILABLE));
    }

    #[tokio::test]
    async fn malformed_replies() {
        let server = MockServer::start_async().await;
        let mut garbage = server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(200).body("not json");
            })
            .await;
        let transport = transport(&server);
        assert_matches!(
            transport.call("starknet_syncing", json!([])).await,
            Err(TransportError::Decode(_))
        );
        garbage.delete_async().await;

        server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(200).json_body(json!({ "jsonrpc": "2.0", "id": 2 }));
            })
            .await;
        assert_matches!(
            transport.call("starknet_syncing", json!([])).await,
            Err(TransportError::InvalidResponse(_))
        );
    }
}
