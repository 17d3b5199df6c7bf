//! Social layer and service identification

use serde::{Deserialize, Serialize};
use std::fmt;

/// Enum representing the backend a `Social` implementation talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SocialLayer {
    /// Base mainnet
    Base,
    /// Base Sepolia testnet
    BaseSepolia,
    /// Local development node (anvil/hardhat)
    Local,
    /// In-memory demo record set, no chain
    Demo,
}

impl fmt::Display for SocialLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base => write!(f, "Base"),
            Self::BaseSepolia => write!(f, "Base Sepolia"),
            Self::Local => write!(f, "Local"),
            Self::Demo => write!(f, "Demo"),
        }
    }
}

impl SocialLayer {
    /// Map an EVM chain id onto a layer
    pub fn from_chain_id(chain_id: u64) -> Self {
        match chain_id {
            8453 => Self::Base,
            84532 => Self::BaseSepolia,
            _ => Self::Local,
        }
    }

    /// Check if this layer is backed by an EVM chain
    pub fn is_chain(&self) -> bool {
        !matches!(self, Self::Demo)
    }
}

/// The four logical contract services the adapter mediates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SocialService {
    /// Profiles contract (one profile per address)
    Profiles,
    /// Posts contract (posts, likes)
    Posts,
    /// Comments contract (comments per post)
    Comments,
    /// Follow contract (follow graph)
    Follow,
}

impl SocialService {
    /// All services, in contract deployment dependency order
    pub const ALL: [SocialService; 4] = [
        Self::Profiles,
        Self::Posts,
        Self::Comments,
        Self::Follow,
    ];
}

impl fmt::Display for SocialService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Profiles => write!(f, "Profiles"),
            Self::Posts => write!(f, "Posts"),
            Self::Comments => write!(f, "Comments"),
            Self::Follow => write!(f, "Follow"),
        }
    }
}
