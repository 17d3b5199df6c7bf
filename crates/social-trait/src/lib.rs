//! Social Trait - Core abstraction over BaseLine social backends
//!
//! This crate defines the `Social` trait, a uniform read/write interface over
//! the four BaseLine contract services (Profiles, Posts, Comments, Follow).
//! Two implementations exist: the live EVM backend
//! (`baseline-social-ethereum`) and the in-memory demo backend
//! (`baseline-social-demo`) that keeps the application interactive when no
//! chain is available.

use async_trait::async_trait;
use std::fmt::{Debug, Display};

pub mod error;
pub mod layer;
pub mod types;

pub use error::{SocialError, SocialResult};
pub use layer::{SocialLayer, SocialService};
pub use types::*;

/// Uniform operation surface every social backend must implement.
///
/// Read operations return canonical entities already sorted newest-first
/// (see [`types::sort_newest_first`]). Write operations resolve once the
/// mutation is durable on the backend — a mined transaction receipt on
/// chain, an applied in-memory mutation in demo mode — and return a
/// transaction-hash-like identifier.
#[async_trait]
pub trait Social: Send + Sync {
    /// Type for transaction hashes (synthetic in demo mode)
    type TransactionHash: Display + Clone + Send + Sync + Debug;

    /// Error type for this backend
    type Error: std::error::Error + Send + Sync + 'static;

    // ===== Backend identification =====

    /// Get the layer this backend talks to
    fn social_layer(&self) -> SocialLayer;

    /// Get the chain/network id as a string ("demo" for the demo backend)
    fn chain_id(&self) -> String;

    // ===== Posts =====

    /// Fetch all posts, hydrated and sorted newest-first.
    ///
    /// When `viewer` is provided, each post's `liked_by_viewer` flag is
    /// sourced from the authoritative per-viewer read. A single post's
    /// failed detail read skips that post, never the whole list.
    async fn fetch_posts(&self, viewer: Option<&str>) -> Result<Vec<Post>, Self::Error>;

    /// Fetch one post by id; `None` if it does not exist
    async fn fetch_post(&self, id: u64, viewer: Option<&str>)
        -> Result<Option<Post>, Self::Error>;

    /// Get the like count for a post
    async fn like_count(&self, id: u64) -> Result<u64, Self::Error>;

    /// Authoritative check whether `viewer` has liked the post
    async fn has_liked(&self, id: u64, viewer: &str) -> Result<bool, Self::Error>;

    /// Create a post with the given content
    async fn create_post(&self, content: &str) -> Result<Self::TransactionHash, Self::Error>;

    /// Like a post
    async fn like_post(&self, id: u64) -> Result<Self::TransactionHash, Self::Error>;

    /// Remove a like from a post
    async fn unlike_post(&self, id: u64) -> Result<Self::TransactionHash, Self::Error>;

    // ===== Comments =====

    /// Fetch all comments for a post, sorted newest-first
    async fn fetch_comments(&self, post_id: u64) -> Result<Vec<Comment>, Self::Error>;

    /// Add a comment to an existing post
    async fn add_comment(
        &self,
        post_id: u64,
        content: &str,
    ) -> Result<Self::TransactionHash, Self::Error>;

    // ===== Profiles =====

    /// Fetch the profile for an address; `None` if none was ever created
    async fn fetch_profile(&self, address: &str) -> Result<Option<Profile>, Self::Error>;

    /// Create or update the caller's profile (idempotent upsert)
    async fn update_profile(
        &self,
        username: &str,
        bio: &str,
        avatar: Option<&NftReference>,
    ) -> Result<Self::TransactionHash, Self::Error>;

    // ===== Follow graph =====

    /// Check whether `follower` follows `target`
    async fn is_following(&self, follower: &str, target: &str) -> Result<bool, Self::Error>;

    /// Number of addresses following `address`
    async fn follower_count(&self, address: &str) -> Result<u64, Self::Error>;

    /// Number of addresses `address` follows
    async fn following_count(&self, address: &str) -> Result<u64, Self::Error>;

    /// Follow `target`
    async fn follow(&self, target: &str) -> Result<Self::TransactionHash, Self::Error>;

    /// Unfollow `target`
    async fn unfollow(&self, target: &str) -> Result<Self::TransactionHash, Self::Error>;
}
