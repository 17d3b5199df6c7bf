//! Comment-related types

use serde::{Deserialize, Serialize};

use super::Chronological;

/// A comment on a post.
///
/// Created against a post id that must already exist; never updated or
/// deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Chain-assigned identifier
    pub id: u64,

    /// Parent post id
    pub post_id: u64,

    /// Author account address
    pub author: String,

    /// Free-text content
    pub content: String,

    /// Chain block time in seconds
    pub timestamp: u64,

    /// Like count; 0 when the contract does not track comment likes
    pub like_count: u64,
}

impl Chronological for Comment {
    fn timestamp(&self) -> u64 {
        self.timestamp
    }
    fn id(&self) -> u64 {
        self.id
    }
}
