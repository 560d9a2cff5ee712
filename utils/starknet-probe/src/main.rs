use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;
use axum::{routing, Router};
use clap::{ArgAction, Parser};
use futures::{future, Stream, StreamExt};
use metrics_exporter_prometheus::PrometheusBuilder;
use starknet_rpc_client::{Config, Service, StarknetApi};
use tokio_util::sync::CancellationToken;

// RUST_LOG=starknet_rpc_probe=debug ./target/release/starknet-rpc-probe --address http://127.0.0.1:9545/rpc/v0_7 --listen-at 0.0.0.0:19999
#[derive(Debug, Parser)]
#[command(name = "starknet-rpc-probe")]
#[command(about = "Polls a Starknet JSON-RPC node and reports how far it lags behind the chain")]
struct Cli {
    #[arg(
        long,
        value_name = "URL",
        long_help = "JSON-RPC endpoint of the node, `http://` is assumed when no scheme is given",
        env = "STARKNET_RPC_ADDRESS"
    )]
    address: String,

    #[arg(
        long = "timeout-secs",
        value_name = "SECONDS",
        long_help = "Timeout of a single request",
        env = "STARKNET_RPC_TIMEOUT_SECS",
        default_value = "2",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout_secs: u64,

    #[arg(
        long = "allow-delayed-start",
        long_help = "Keep running when the node is unreachable at start",
        env = "STARKNET_RPC_ALLOW_DELAYED_START",
        default_value = "false",
        action = ArgAction::Set
    )]
    allow_delayed_start: bool,

    #[arg(
        long = "poll-secs",
        value_name = "SECONDS",
        long_help = "Delay between two polls of the node",
        env = "STARKNET_PROBE_POLL_SECS",
        default_value = "10",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    poll_secs: u64,

    #[arg(
        long = "listen-at",
        value_name = "IP:PORT",
        long_help = "Serve Prometheus metrics on `/metrics` at this address",
        env = "STARKNET_PROBE_LISTEN_AT"
    )]
    listen_at: Option<SocketAddr>,
}

#[derive(Clone, Debug, Default)]
struct Head {
    synced: bool,
    block_number: u64,
    highest_block_number: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();
    let cli = Cli::parse();

    let token = CancellationToken::new();
    tokio::spawn({
        let token = token.clone();
        async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for ctrl-c: {e}");
            }
            token.cancel();
        }
    });

    if let Some(listen_at) = cli.listen_at {
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .context("Creating Prometheus recorder")?;
        starknet_rpc_client::metrics::register();

        let listener = tokio::net::TcpListener::bind(listen_at)
            .await
            .with_context(|| format!("Binding metrics server to {listen_at}"))?;
        let app = Router::new().route("/metrics", routing::get(|| async move { handle.render() }));
        let shutdown = token.clone().cancelled_owned();
        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app)
                .with_graceful_shutdown(shutdown)
                .await
            {
                tracing::error!("Metrics server failed: {e}");
            }
        });
        tracing::info!(server=%listen_at, "Serving metrics");
    }

    let config = Config::builder()
        .address(cli.address)
        .timeout(Duration::from_secs(cli.timeout_secs))
        .allow_delayed_start(cli.allow_delayed_start)
        .build()
        .context("Parsing client configuration")?;
    let service = Service::new(config, token.clone())
        .await
        .context("Connecting to node")?;
    tracing::info!(address=%service.address(), "starknet-rpc-probe running");

    describe(&service).await;

    heads(&service, Duration::from_secs(cli.poll_secs))
        .take_until(token.cancelled())
        .for_each(|head| {
            tracing::info!(
                synced = head.synced,
                block = head.block_number,
                highest = head.highest_block_number,
                "node"
            );

            let blocks_missing = head.highest_block_number.saturating_sub(head.block_number);
            metrics::gauge!("blocks_missing").set(blocks_missing as f64);

            future::ready(())
        })
        .await;

    tracing::info!("starknet-rpc-probe stopped");

    Ok(())
}

fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}

/// Logs what the node says about itself. Failures are not fatal.
async fn describe(service: &Service) {
    match service.chain_id().await {
        Ok(chain_id) => {
            let name = String::from_utf8_lossy(chain_id.data.as_bytes()).into_owned();
            tracing::info!(chain=%name, "Chain");
        }
        Err(e) => tracing::warn!("Failed to fetch chain id: {e}"),
    }
    match service.spec_version().await {
        Ok(version) => tracing::info!(version=%version.data, "JSON-RPC specification"),
        Err(e) => tracing::warn!("Failed to fetch specification version: {e}"),
    }
    match service.protocol_version().await {
        Ok(version) => tracing::info!(version=%version.data, "Starknet protocol"),
        Err(e) => tracing::debug!("Failed to fetch protocol version: {e}"),
    }
}

/// Polls the node every `delay`, repeating the last head when a poll fails.
fn heads(service: &Service, delay: Duration) -> impl Stream<Item = Head> + '_ {
    futures::stream::unfold(Head::default(), move |old| async move {
        let new = match head(service).await {
            Ok(new) => new,
            Err(e) => {
                tracing::error!("Failed to poll node: {e:#}");
                old
            }
        };
        tracing::debug!(?new, "Polled");
        tokio::time::sleep(delay).await;
        Some((new.clone(), new))
    })
}

async fn head(service: &Service) -> anyhow::Result<Head> {
    let sync_state = service
        .syncing()
        .await
        .context("Fetching sync state")?
        .data;

    if sync_state.syncing {
        return Ok(Head {
            synced: false,
            block_number: sync_state.current_block_num,
            highest_block_number: sync_state.highest_block_num,
        });
    }

    let latest = service
        .block_hash_and_number()
        .await
        .context("Fetching latest block")?
        .data;

    Ok(Head {
        synced: true,
        block_number: latest.block_number.get(),
        highest_block_number: latest.block_number.get(),
    })
}
