//! Network catalog and selection state.
//!
//! The registry is loaded at startup and immutable afterwards. The
//! selection state validates switches and broadcasts the current network
//! id so dependents rebuild their own connections against the new
//! endpoint instead of mutating a shared one in place.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::error::ConfigError;

/// Static description of one network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkInfo {
    /// Display name ("Mainnet Beta").
    pub name: String,
    /// Native currency ticker ("SOL").
    pub native_symbol: String,
    /// Decimal places of the native currency's base unit.
    pub native_decimals: u8,
    /// RPC endpoint URL.
    pub rpc_url: String,
    /// Block explorer base URL.
    pub block_explorer: String,
}

/// Immutable set of networks known at startup.
#[derive(Debug, Clone)]
pub struct NetworkRegistry {
    networks: BTreeMap<String, NetworkInfo>,
}

impl NetworkRegistry {
    /// Build a registry from explicit entries.
    pub fn new(networks: BTreeMap<String, NetworkInfo>) -> Self {
        Self { networks }
    }

    /// The built-in Solana clusters.
    pub fn solana_clusters() -> Self {
        let mut networks = BTreeMap::new();
        networks.insert(
            "mainnet-beta".to_string(),
            NetworkInfo {
                name: "Mainnet Beta".to_string(),
                native_symbol: "SOL".to_string(),
                native_decimals: 9,
                rpc_url: "https://api.mainnet-beta.solana.com".to_string(),
                block_explorer: "https://explorer.solana.com".to_string(),
            },
        );
        networks.insert(
            "devnet".to_string(),
            NetworkInfo {
                name: "Devnet".to_string(),
                native_symbol: "SOL".to_string(),
                native_decimals: 9,
                rpc_url: "https://api.devnet.solana.com".to_string(),
                block_explorer: "https://explorer.solana.com/?cluster=devnet".to_string(),
            },
        );
        networks.insert(
            "testnet".to_string(),
            NetworkInfo {
                name: "Testnet".to_string(),
                native_symbol: "SOL".to_string(),
                native_decimals: 9,
                rpc_url: "https://api.testnet.solana.com".to_string(),
                block_explorer: "https://explorer.solana.com/?cluster=testnet".to_string(),
            },
        );
        Self::new(networks)
    }

    /// Look up a network by id.
    pub fn get(&self, id: &str) -> Option<&NetworkInfo> {
        self.networks.get(id)
    }

    /// Whether the registry knows this id.
    pub fn contains(&self, id: &str) -> bool {
        self.networks.contains_key(id)
    }

    /// Every known network id.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.networks.keys().map(String::as_str)
    }
}

/// Current network selection.
///
/// Written only through [`switch_network`](Self::switch_network); readers
/// subscribe for change notifications and re-derive their own connection
/// objects from the registry entry.
#[derive(Debug)]
pub struct NetworkState {
    registry: NetworkRegistry,
    current_tx: watch::Sender<String>,
}

impl NetworkState {
    /// Create a selection state starting on `initial`.
    pub fn new(registry: NetworkRegistry, initial: &str) -> Result<Self, ConfigError> {
        if !registry.contains(initial) {
            return Err(ConfigError::UnknownNetwork(initial.to_string()));
        }
        let (current_tx, _) = watch::channel(initial.to_string());
        Ok(Self {
            registry,
            current_tx,
        })
    }

    /// The registry this state validates against.
    pub fn registry(&self) -> &NetworkRegistry {
        &self.registry
    }

    /// Currently selected network id.
    pub fn current(&self) -> String {
        self.current_tx.borrow().clone()
    }

    /// Info for the currently selected network.
    ///
    /// The current id is validated on every write, so it is always present
    /// in the immutable registry.
    pub fn current_info(&self) -> Option<NetworkInfo> {
        self.registry.get(&self.current()).cloned()
    }

    /// Select a different network.
    ///
    /// Fails without side effects when the id is unknown; otherwise
    /// updates the selection and notifies every subscriber.
    pub fn switch_network(&self, id: &str) -> Result<(), ConfigError> {
        if !self.registry.contains(id) {
            return Err(ConfigError::UnknownNetwork(id.to_string()));
        }
        self.current_tx.send_replace(id.to_string());
        tracing::info!(network = id, "switched network");
        Ok(())
    }

    /// Watch the selection; receivers observe every switch.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.current_tx.subscribe()
    }
}
