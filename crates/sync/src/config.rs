//! Sync adapter configuration
//!
//! An explicit configuration structure passed into the adapter's
//! constructor. A missing contract address degrades that service to demo
//! mode; it is never a startup error.

use crate::error::{Result, SyncError};
use baseline_social_ethereum::EthereumSocialConfig;
use baseline_social_trait::SocialService;
use serde::{Deserialize, Serialize};
use std::env;

/// Client-side content length limit (characters), matching the UI rule
pub const MAX_POST_LENGTH: usize = 280;

/// One optional deployed address per contract service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContractAddresses {
    /// Profiles contract address
    pub profiles: Option<String>,
    /// Posts contract address
    pub posts: Option<String>,
    /// Comments contract address
    pub comments: Option<String>,
    /// Follow contract address
    pub follow: Option<String>,
}

impl ContractAddresses {
    /// Address for one service, if configured
    pub fn for_service(&self, service: SocialService) -> Option<&str> {
        match service {
            SocialService::Profiles => self.profiles.as_deref(),
            SocialService::Posts => self.posts.as_deref(),
            SocialService::Comments => self.comments.as_deref(),
            SocialService::Follow => self.follow.as_deref(),
        }
    }

    /// Whether any service has a deployed address
    pub fn any_configured(&self) -> bool {
        SocialService::ALL
            .iter()
            .any(|s| self.for_service(*s).is_some())
    }
}

/// Configuration for the sync adapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// RPC URL of the EVM node
    pub rpc_url: String,

    /// Chain ID the contracts are deployed on
    pub chain_id: u64,

    /// Per-service deployed contract addresses
    pub contracts: ContractAddresses,

    /// Private key for signing transactions (optional for read-only use)
    pub private_key: Option<String>,

    /// Confirmations to wait for before a write is durable
    pub confirmation_blocks: u64,

    /// Content length limit enforced before submission
    pub max_post_length: usize,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            rpc_url: "https://mainnet.base.org".to_string(),
            chain_id: 8453,
            contracts: ContractAddresses::default(),
            private_key: None,
            confirmation_blocks: 1,
            max_post_length: MAX_POST_LENGTH,
        }
    }
}

fn optional_env(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

impl SyncConfig {
    /// Load configuration from the environment.
    ///
    /// Reads `BASELINE_RPC_URL`, `BASELINE_CHAIN_ID`, `BASELINE_PROFILES`,
    /// `BASELINE_POSTS`, `BASELINE_COMMENTS`, `BASELINE_FOLLOW`,
    /// `BASELINE_PRIVATE_KEY` and `BASELINE_CONFIRMATIONS`. Every variable
    /// is optional; absent contract addresses leave their services in demo
    /// mode.
    pub fn from_env() -> Result<Self> {
        // Try to load .env file, but don't fail if it doesn't exist
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let rpc_url = optional_env("BASELINE_RPC_URL").unwrap_or(defaults.rpc_url);

        let chain_id = match optional_env("BASELINE_CHAIN_ID") {
            Some(raw) => raw.parse::<u64>().map_err(|e| {
                SyncError::Config(format!("Invalid BASELINE_CHAIN_ID '{}': {}", raw, e))
            })?,
            None => defaults.chain_id,
        };

        let confirmation_blocks = match optional_env("BASELINE_CONFIRMATIONS") {
            Some(raw) => raw.parse::<u64>().map_err(|e| {
                SyncError::Config(format!("Invalid BASELINE_CONFIRMATIONS '{}': {}", raw, e))
            })?,
            None => defaults.confirmation_blocks,
        };

        Ok(Self {
            rpc_url,
            chain_id,
            contracts: ContractAddresses {
                profiles: optional_env("BASELINE_PROFILES"),
                posts: optional_env("BASELINE_POSTS"),
                comments: optional_env("BASELINE_COMMENTS"),
                follow: optional_env("BASELINE_FOLLOW"),
            },
            private_key: optional_env("BASELINE_PRIVATE_KEY"),
            confirmation_blocks,
            max_post_length: MAX_POST_LENGTH,
        })
    }

    /// Build the live backend configuration from this one
    pub fn ethereum_config(&self) -> EthereumSocialConfig {
        EthereumSocialConfig {
            rpc_url: self.rpc_url.clone(),
            chain_id: self.chain_id,
            profiles_address: self.contracts.profiles.clone(),
            posts_address: self.contracts.posts.clone(),
            comments_address: self.contracts.comments.clone(),
            follow_address: self.contracts.follow.clone(),
            private_key: self.private_key.clone(),
            confirmation_blocks: self.confirmation_blocks,
        }
    }

    /// Whether `service` has a deployed contract address
    pub fn is_service_configured(&self, service: SocialService) -> bool {
        self.contracts.for_service(service).is_some()
    }
}
