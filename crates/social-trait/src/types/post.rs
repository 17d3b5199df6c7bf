//! Post-related types

use serde::{Deserialize, Serialize};

use super::Chronological;

/// A post mirrored from contract storage.
///
/// The backend is authoritative for every field; the application holds posts
/// only as a cache of the last successful read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Chain-assigned identifier, immutable once created
    pub id: u64,

    /// Author account address (0x-prefixed hex)
    pub author: String,

    /// Free-text content (280-character limit enforced on writes)
    pub content: String,

    /// Chain block time in seconds
    pub timestamp: u64,

    /// Number of likes
    pub like_count: u64,

    /// Number of comments
    pub comment_count: u64,

    /// Whether the current viewer has liked this post.
    ///
    /// `Some` only when sourced from the authoritative `liked(id, viewer)`
    /// read; `None` when no viewer address was known at fetch time. An
    /// optimistic overlay may flip it as a presentation hint until the next
    /// refresh.
    pub liked_by_viewer: Option<bool>,

    /// Hash of the creating transaction, when known
    pub tx_hash: Option<String>,
}

impl Chronological for Post {
    fn timestamp(&self) -> u64 {
        self.timestamp
    }
    fn id(&self) -> u64 {
        self.id
    }
}
