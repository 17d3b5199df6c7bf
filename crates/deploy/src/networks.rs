//! Named network registry for the deploy tool

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A deploy target network
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvmNetwork {
    /// Human-readable name
    pub name: String,
    /// EVM chain id
    pub chain_id: u64,
    /// Public RPC endpoints, first is the default
    pub rpc_endpoints: Vec<String>,
    /// Block explorer base URL
    pub explorer: Option<String>,
    /// Whether this is a test network
    pub testnet: bool,
}

impl EvmNetwork {
    /// Look a network up by its registry key
    pub fn get_network(name: &str) -> Option<&'static EvmNetwork> {
        NETWORKS.get(name)
    }

    /// Registry keys of all known networks
    pub fn list_networks() -> Vec<&'static str> {
        NETWORKS.keys().map(|s| s.as_str()).collect()
    }

    /// Default RPC endpoint for this network
    pub fn default_rpc(&self) -> &str {
        &self.rpc_endpoints[0]
    }
}

static NETWORKS: Lazy<HashMap<String, EvmNetwork>> = Lazy::new(|| {
    let mut networks = HashMap::new();

    // Base
    networks.insert(
        "base".to_string(),
        EvmNetwork {
            name: "Base".to_string(),
            chain_id: 8453,
            rpc_endpoints: vec![
                "https://mainnet.base.org".to_string(),
                "https://base.llamarpc.com".to_string(),
            ],
            explorer: Some("https://basescan.org".to_string()),
            testnet: false,
        },
    );

    // Base Sepolia
    networks.insert(
        "base-sepolia".to_string(),
        EvmNetwork {
            name: "Base Sepolia".to_string(),
            chain_id: 84532,
            rpc_endpoints: vec![
                "https://sepolia.base.org".to_string(),
                "https://base-sepolia-rpc.publicnode.com".to_string(),
            ],
            explorer: Some("https://sepolia.basescan.org".to_string()),
            testnet: true,
        },
    );

    // Local development
    networks.insert(
        "localhost".to_string(),
        EvmNetwork {
            name: "Localhost".to_string(),
            chain_id: 31337,
            rpc_endpoints: vec![
                "http://127.0.0.1:8545".to_string(),
                "http://localhost:8545".to_string(),
            ],
            explorer: None,
            testnet: true,
        },
    );

    networks
});
