//! Profile-related types

use serde::{Deserialize, Serialize};

/// Reference to an NFT used as an avatar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftReference {
    /// NFT contract address
    pub contract: String,

    /// Token id within the contract
    pub token_id: u64,
}

/// A user profile, one per address (contract-enforced uniqueness).
///
/// Created and updated through a single idempotent upsert; no delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Owner address, the primary key
    pub owner: String,

    /// Display username
    pub username: String,

    /// Free-text bio
    pub bio: String,

    /// Optional avatar NFT; a zero avatar contract address on-chain maps
    /// to `None`
    pub avatar: Option<NftReference>,

    /// Whether the profile exists on the backend
    pub exists: bool,
}
