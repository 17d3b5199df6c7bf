//! Follow-graph types

use serde::{Deserialize, Serialize};

/// Follower/following count aggregates for one address
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowStats {
    /// Number of addresses following this one
    pub followers: u64,

    /// Number of addresses this one follows
    pub following: u64,
}
