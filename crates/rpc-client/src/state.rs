//! Cached view of whether the node is reachable and whether it has caught up
//! with the chain.
use std::future::Future;
use std::sync::{PoisonError, RwLock};

use starknet_rpc_types::reply::SyncState;

use crate::error::ClientError;
use crate::metrics;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
struct State {
    active: bool,
    /// Implies `active`.
    synced: bool,
}

impl State {
    fn label(&self) -> &'static str {
        match (self.active, self.synced) {
            (_, true) => "synced",
            (true, false) => "active",
            (false, false) => "inactive",
        }
    }
}

/// Tracks the connection state of a node.
///
/// The state only changes through [ConnectionState::refresh]. Concurrent
/// refreshes collapse into a single probe, the callers that lose the race
/// keep the cached state instead of waiting.
#[derive(Debug, Default)]
pub struct ConnectionState {
    state: RwLock<State>,
    probe: tokio::sync::Mutex<()>,
}

impl ConnectionState {
    pub fn is_active(&self) -> bool {
        self.read().active
    }

    pub fn is_synced(&self) -> bool {
        self.read().synced
    }

    fn read(&self) -> State {
        *self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self, state: State) {
        *self.state.write().unwrap_or_else(PoisonError::into_inner) = state;
    }

    /// Probes the node's sync state and updates the cached state from it. A
    /// failed probe marks the node inactive.
    pub async fn refresh<F, Fut>(&self, probe: F)
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<SyncState, ClientError>>,
    {
        let was = self.read();

        let Ok(_guard) = self.probe.try_lock() else {
            // Another probe is in flight.
            return;
        };

        let state = match probe().await {
            Ok(sync_state) => State {
                active: true,
                synced: !sync_state.syncing,
            },
            Err(error) => {
                tracing::debug!(%error, "Failed to obtain sync state from node");
                State::default()
            }
        };

        tracing::trace!(
            was_active = was.active,
            active = state.active,
            was_synced = was.synced,
            synced = state.synced,
            "Updated connection state"
        );

        self.write(state);
        metrics::set_connection_state(state.label());
    }

    /// Fails with [ClientError::NotActive] unless the node is reachable,
    /// refreshing once if the cached state says otherwise.
    pub async fn assert_active<F, Fut>(&self, probe: F) -> Result<(), ClientError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<SyncState, ClientError>>,
    {
        if self.is_active() {
            return Ok(());
        }

        self.refresh(probe).await;
        if !self.is_active() {
            return Err(ClientError::NotActive);
        }

        Ok(())
    }

    /// Fails unless the node is synced, refreshing once if the cached state
    /// says otherwise. An unreachable node is reported as
    /// [ClientError::NotActive].
    pub async fn assert_synced<F, Fut>(&self, probe: F) -> Result<(), ClientError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<SyncState, ClientError>>,
    {
        if self.is_synced() {
            return Ok(());
        }

        self.refresh(probe).await;
        let state = self.read();
        if !state.active {
            return Err(ClientError::NotActive);
        }
        if !state.synced {
            return Err(ClientError::NotSynced);
        }

        Ok(())
    }
}
