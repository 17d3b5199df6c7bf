//! Demo implementation of the `Social` trait

use async_trait::async_trait;
use baseline_social_trait::{
    sort_newest_first, Comment, FollowStats, NftReference, Post, Profile, Social, SocialError,
    SocialLayer,
};
use std::sync::Mutex;
use tracing::debug;

use crate::store::{DemoStore, DEMO_IDENTITY};

/// In-memory demo backend.
///
/// Serves the fixed built-in record set and applies writes to it so the
/// application stays interactive without a live chain. All operations
/// complete without error apart from references to entities that do not
/// exist.
pub struct DemoSocial {
    store: Mutex<DemoStore>,
    identity: String,
}

impl Default for DemoSocial {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoSocial {
    /// Create a demo backend seeded with the built-in record set
    pub fn new() -> Self {
        Self {
            store: Mutex::new(DemoStore::seeded()),
            identity: DEMO_IDENTITY.to_string(),
        }
    }

    /// Use `address` as the identity demo writes are attributed to
    pub fn with_identity(address: &str) -> Self {
        Self {
            store: Mutex::new(DemoStore::seeded()),
            identity: address.to_string(),
        }
    }

    /// Address demo writes are attributed to
    pub fn identity(&self) -> &str {
        &self.identity
    }

    fn store(&self) -> std::sync::MutexGuard<'_, DemoStore> {
        // Lock is only held across synchronous store access, never an await.
        self.store.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Follower and following counts in one call
    pub fn stats(&self, address: &str) -> FollowStats {
        let store = self.store();
        FollowStats {
            followers: store.follower_count(address),
            following: store.following_count(address),
        }
    }
}

#[async_trait]
impl Social for DemoSocial {
    type TransactionHash = String;
    type Error = SocialError;

    fn social_layer(&self) -> SocialLayer {
        SocialLayer::Demo
    }

    fn chain_id(&self) -> String {
        "demo".to_string()
    }

    async fn fetch_posts(&self, viewer: Option<&str>) -> Result<Vec<Post>, SocialError> {
        let mut posts = self.store().posts(viewer);
        sort_newest_first(&mut posts);
        debug!("Serving {} demo posts", posts.len());
        Ok(posts)
    }

    async fn fetch_post(&self, id: u64, viewer: Option<&str>) -> Result<Option<Post>, SocialError> {
        Ok(self.store().post(id, viewer))
    }

    async fn like_count(&self, id: u64) -> Result<u64, SocialError> {
        Ok(self.store().like_count(id))
    }

    async fn has_liked(&self, id: u64, viewer: &str) -> Result<bool, SocialError> {
        Ok(self.store().has_liked(id, viewer))
    }

    async fn create_post(&self, content: &str) -> Result<String, SocialError> {
        let mut store = self.store();
        let id = store.create_post(&self.identity, content);
        debug!("Created demo post {}", id);
        Ok(store.next_tx_hash())
    }

    async fn like_post(&self, id: u64) -> Result<String, SocialError> {
        let mut store = self.store();
        if !store.like(id, &self.identity) {
            return Err(SocialError::NotFound {
                resource: "post",
                id: id.to_string(),
            });
        }
        Ok(store.next_tx_hash())
    }

    async fn unlike_post(&self, id: u64) -> Result<String, SocialError> {
        let mut store = self.store();
        if !store.unlike(id, &self.identity) {
            return Err(SocialError::NotFound {
                resource: "post",
                id: id.to_string(),
            });
        }
        Ok(store.next_tx_hash())
    }

    async fn fetch_comments(&self, post_id: u64) -> Result<Vec<Comment>, SocialError> {
        let mut comments = self.store().comments_for(post_id);
        sort_newest_first(&mut comments);
        Ok(comments)
    }

    async fn add_comment(&self, post_id: u64, content: &str) -> Result<String, SocialError> {
        let mut store = self.store();
        match store.add_comment(post_id, &self.identity, content) {
            Some(id) => {
                debug!("Added demo comment {} to post {}", id, post_id);
                Ok(store.next_tx_hash())
            }
            None => Err(SocialError::NotFound {
                resource: "post",
                id: post_id.to_string(),
            }),
        }
    }

    async fn fetch_profile(&self, address: &str) -> Result<Option<Profile>, SocialError> {
        Ok(self.store().profile(address))
    }

    async fn update_profile(
        &self,
        username: &str,
        bio: &str,
        avatar: Option<&NftReference>,
    ) -> Result<String, SocialError> {
        let mut store = self.store();
        let identity = self.identity.clone();
        store.upsert_profile(&identity, username, bio, avatar);
        Ok(store.next_tx_hash())
    }

    async fn is_following(&self, follower: &str, target: &str) -> Result<bool, SocialError> {
        Ok(self.store().is_following(follower, target))
    }

    async fn follower_count(&self, address: &str) -> Result<u64, SocialError> {
        Ok(self.store().follower_count(address))
    }

    async fn following_count(&self, address: &str) -> Result<u64, SocialError> {
        Ok(self.store().following_count(address))
    }

    async fn follow(&self, target: &str) -> Result<String, SocialError> {
        let mut store = self.store();
        let identity = self.identity.clone();
        store.follow(&identity, target);
        Ok(store.next_tx_hash())
    }

    async fn unfollow(&self, target: &str) -> Result<String, SocialError> {
        let mut store = self.store();
        let identity = self.identity.clone();
        store.unfollow(&identity, target);
        Ok(store.next_tx_hash())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{DEMO_MODE_CONTENT, DEMO_WELCOME_CONTENT};

    #[tokio::test]
    async fn test_feed_is_the_builtin_demo_set_newest_first() {
        let demo = DemoSocial::new();
        let posts = demo.fetch_posts(None).await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].content, DEMO_WELCOME_CONTENT);
        assert_eq!(posts[1].content, DEMO_MODE_CONTENT);
    }

    #[tokio::test]
    async fn test_created_post_appears_at_head() {
        let demo = DemoSocial::new();
        demo.create_post("gm base").await.unwrap();
        let posts = demo.fetch_posts(None).await.unwrap();
        assert_eq!(posts[0].content, "gm base");
        assert_eq!(posts.len(), 3);
    }

    #[tokio::test]
    async fn test_like_then_unlike_is_idempotent_pair() {
        let demo = DemoSocial::new();
        let before = demo.like_count(2).await.unwrap();
        demo.like_post(2).await.unwrap();
        assert_eq!(demo.like_count(2).await.unwrap(), before + 1);
        demo.unlike_post(2).await.unwrap();
        assert_eq!(demo.like_count(2).await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_viewer_flag_is_authoritative() {
        let demo = DemoSocial::new();
        demo.like_post(2).await.unwrap();
        let posts = demo.fetch_posts(Some(DEMO_IDENTITY)).await.unwrap();
        let welcome = posts.iter().find(|p| p.id == 2).unwrap();
        assert_eq!(welcome.liked_by_viewer, Some(true));

        let posts = demo.fetch_posts(None).await.unwrap();
        let welcome = posts.iter().find(|p| p.id == 2).unwrap();
        assert_eq!(welcome.liked_by_viewer, None);
    }

    #[tokio::test]
    async fn test_comment_increments_post_count() {
        let demo = DemoSocial::new();
        demo.add_comment(2, "nice").await.unwrap();
        let post = demo.fetch_post(2, None).await.unwrap().unwrap();
        assert_eq!(post.comment_count, 1);
        let comments = demo.fetch_comments(2).await.unwrap();
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].content, "nice");
    }

    #[tokio::test]
    async fn test_profile_upsert_is_idempotent() {
        let demo = DemoSocial::new();
        demo.update_profile("alice", "hi", None).await.unwrap();
        demo.update_profile("alice", "hello again", None).await.unwrap();
        let profile = demo
            .fetch_profile(demo.identity())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(profile.bio, "hello again");
        assert!(profile.exists);
    }

    #[tokio::test]
    async fn test_follow_unfollow_roundtrip() {
        let demo = DemoSocial::with_identity("0x000000000000000000000000000000000000cafe");
        let target = "0x000000000000000000000000000000000000beef";
        demo.follow(target).await.unwrap();
        assert!(demo.is_following(demo.identity(), target).await.unwrap());
        assert_eq!(demo.follower_count(target).await.unwrap(), 1);
        demo.unfollow(target).await.unwrap();
        assert!(!demo.is_following(demo.identity(), target).await.unwrap());
        assert_eq!(demo.follower_count(target).await.unwrap(), 0);
    }
}
