//! Metrics related utilities
use std::future::Future;

use crate::error::TransportError;

const METRIC_REQUESTS: &str = "rpc_client_requests_total";
const METRIC_FAILED_REQUESTS: &str = "rpc_client_requests_failed_total";
const METRIC_REQUESTS_LATENCY: &str = "rpc_client_request_duration_seconds";
const METRIC_CONNECTION_STATE: &str = "rpc_client_connection_state";
const METRICS: [&str; 2] = [METRIC_REQUESTS, METRIC_FAILED_REQUESTS];
const REASON_DECODE: &str = "decode";
const REASON_RPC: &str = "rpc";
const REASON_TIMEOUT: &str = "timeout";
const REASON_TRANSPORT: &str = "transport";
const REASONS: [&str; 4] = [REASON_DECODE, REASON_RPC, REASON_TIMEOUT, REASON_TRANSPORT];

/// Connection states reported by the state gauge.
pub(crate) const STATES: [&str; 3] = ["inactive", "active", "synced"];

/// Every JSON-RPC method the client calls.
pub const METHODS: [&str; 12] = [
    "starknet_addInvokeTransaction",
    "starknet_blockHashAndNumber",
    "starknet_blockNumber",
    "starknet_call",
    "starknet_chainId",
    "starknet_estimateFee",
    "starknet_getBlockWithReceipts",
    "starknet_getEvents",
    "starknet_getNonce",
    "starknet_protocolVersion",
    "starknet_specVersion",
    "starknet_syncing",
];

/// Register all client related metrics
pub fn register() {
    METRICS.iter().for_each(|&name| {
        METHODS.iter().for_each(|&method| {
            let _ = metrics::counter!(name, "method" => method);
        });
    });

    METHODS.iter().for_each(|&method| {
        let _ = metrics::histogram!(METRIC_REQUESTS_LATENCY, "method" => method);
    });

    REASONS.iter().for_each(|&reason| {
        METHODS.iter().for_each(|&method| {
            let _ = metrics::counter!(
                METRIC_FAILED_REQUESTS,
                "method" => method,
                "reason" => reason
            );
        });
    });

    STATES.iter().for_each(|&state| {
        let _ = metrics::gauge!(METRIC_CONNECTION_STATE, "state" => state);
    });
}

/// Sets the gauge of `current` to 1 and every other state to 0.
pub(crate) fn set_connection_state(current: &'static str) {
    STATES.iter().for_each(|&state| {
        let value = if state == current { 1.0 } else { 0.0 };
        metrics::gauge!(METRIC_CONNECTION_STATE, "state" => state).set(value);
    });
}

/// # Usage
///
/// Awaits future `f` and increments the following counters for `method`:
/// - `rpc_client_requests_total`,
/// - `rpc_client_requests_failed_total` if the future returns the `Err()`
///   variant.
///
/// `rpc_client_requests_failed_total` is also duplicated for the specific
/// failure reasons:
/// - `rpc`, if the node replied with a JSON-RPC error object
/// - `decode`, if the reply could not be decoded
/// - `timeout`, if the request timed out
/// - `transport`, for any other transport failure
pub async fn with_metrics<T>(
    method: &'static str,
    f: impl Future<Output = Result<T, TransportError>>,
) -> Result<T, TransportError> {
    metrics::counter!(METRIC_REQUESTS, "method" => method).increment(1);

    let started = std::time::Instant::now();
    let result = f.await;
    let elapsed = started.elapsed();

    metrics::histogram!(METRIC_REQUESTS_LATENCY, "method" => method).record(elapsed.as_secs_f64());

    result.inspect_err(|e| {
        metrics::counter!(METRIC_FAILED_REQUESTS, "method" => method).increment(1);

        let reason = match e {
            TransportError::Rpc(_) => REASON_RPC,
            TransportError::Decode(_) | TransportError::InvalidResponse(_) => REASON_DECODE,
            TransportError::Reqwest(e) if e.is_decode() => REASON_DECODE,
            TransportError::Reqwest(e) if e.is_timeout() => REASON_TIMEOUT,
            TransportError::Reqwest(_) => REASON_TRANSPORT,
        };
        metrics::counter!(METRIC_FAILED_REQUESTS, "method" => method, "reason" => reason)
            .increment(1);
    })
}
