//! Deployment manifest
//!
//! One JSON file per deployment under the output directory, named
//! `<network>-<millis>.json`, recording where everything landed.

use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The four deployed contract addresses as recorded in the manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestContracts {
    /// Profiles contract address
    #[serde(rename = "Profiles")]
    pub profiles: String,
    /// Posts contract address
    #[serde(rename = "Posts")]
    pub posts: String,
    /// Comments contract address
    #[serde(rename = "Comments")]
    pub comments: String,
    /// Follow contract address
    #[serde(rename = "Follow")]
    pub follow: String,
}

/// Deployment record written after a successful run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentManifest {
    /// Network registry key ("base", "base-sepolia", "localhost")
    pub network: String,
    /// Chain id reported by the node at deploy time
    #[serde(rename = "chainId")]
    pub chain_id: String,
    /// Deployer account address
    pub deployer: String,
    /// Deployed contract addresses
    pub contracts: ManifestContracts,
    /// ISO-8601 deployment time
    pub timestamp: String,
}

impl DeploymentManifest {
    /// Build a manifest stamped with the current time
    pub fn new(
        network: &str,
        chain_id: u64,
        deployer: &str,
        contracts: ManifestContracts,
    ) -> Self {
        Self {
            network: network.to_string(),
            chain_id: chain_id.to_string(),
            deployer: deployer.to_string(),
            contracts,
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    /// Write the manifest to `<dir>/<network>-<millis>.json`
    pub fn write(&self, dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;

        let path = dir.join(format!(
            "{}-{}.json",
            self.network,
            Utc::now().timestamp_millis()
        ));
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, json)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        Ok(path)
    }
}
