//! Conversions from Comments contract tuples to the canonical Comment type

use crate::abi::comments::IComments;
use crate::conversions::helpers::{address_to_string, u256_to_u64};
use baseline_social_trait::Comment;

/// Build a canonical Comment from the positional `comments` return tuple.
/// The contract does not track comment likes; the count is fixed at 0.
pub fn comment_from_chain(raw: IComments::commentsReturn) -> Comment {
    Comment {
        id: u256_to_u64(raw.id),
        post_id: u256_to_u64(raw.postId),
        author: address_to_string(raw.author),
        content: raw.content,
        timestamp: u256_to_u64(raw.timestamp),
        like_count: 0,
    }
}
