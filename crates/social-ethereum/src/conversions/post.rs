//! Conversions from Posts contract tuples to the canonical Post type

use crate::abi::posts::IPosts;
use crate::conversions::helpers::{address_to_string, u256_to_u64};
use baseline_social_trait::Post;

/// Build a canonical Post from the positional `getPost` return tuple.
///
/// `liked_by_viewer` comes from the separate authoritative `liked` read and
/// is `None` when no viewer address was known.
pub fn post_from_chain(raw: IPosts::getPostReturn, liked_by_viewer: Option<bool>) -> Post {
    Post {
        id: u256_to_u64(raw.id),
        author: address_to_string(raw.author),
        content: raw.content,
        timestamp: u256_to_u64(raw.timestamp),
        like_count: u256_to_u64(raw.likeCount),
        comment_count: u256_to_u64(raw.commentCount),
        liked_by_viewer,
        tx_hash: None,
    }
}

/// Whether the tuple describes an existing post
pub fn post_exists(raw: &IPosts::getPostReturn) -> bool {
    raw.exists
}
