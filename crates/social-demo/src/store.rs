//! In-memory record set backing the demo mode

use baseline_social_trait::{Comment, NftReference, Post, Profile};
use std::collections::{HashMap, HashSet};
use std::time::{SystemTime, UNIX_EPOCH};

/// Address the demo identity posts from
pub const DEMO_IDENTITY: &str = "0x00000000000000000000000000000000000ba5e1";

/// Address of the second built-in demo author
pub const DEMO_FRIEND: &str = "0x00000000000000000000000000000000000ba5e2";

/// Content of the newer built-in demo post
pub const DEMO_WELCOME_CONTENT: &str = "Welcome to BaseLine! This is a demo post.";

/// Content of the older built-in demo post
pub const DEMO_MODE_CONTENT: &str =
    "BaseLine is running in demo mode. Configure contract addresses to go on-chain.";

// Seed timestamps sit far enough in the past that anything created at
// runtime sorts ahead of them.
const SEED_TIME_OLD: u64 = 1_700_000_000;
const SEED_TIME_NEW: u64 = 1_700_000_600;

/// Mutable in-memory state for all four demo services.
///
/// Mirrors what the contracts would hold: posts and comments keyed by
/// chain-assigned ids, one profile per address, a directed follow-edge set,
/// and the per-viewer like set.
#[derive(Debug)]
pub struct DemoStore {
    posts: HashMap<u64, Post>,
    comments: HashMap<u64, Comment>,
    profiles: HashMap<String, Profile>,
    follows: HashSet<(String, String)>,
    likes: HashSet<(u64, String)>,
    next_post_id: u64,
    next_comment_id: u64,
    tx_counter: u64,
}

impl DemoStore {
    /// Build the store seeded with the fixed built-in record set
    pub fn seeded() -> Self {
        let mut store = Self {
            posts: HashMap::new(),
            comments: HashMap::new(),
            profiles: HashMap::new(),
            follows: HashSet::new(),
            likes: HashSet::new(),
            next_post_id: 3,
            next_comment_id: 2,
            tx_counter: 0,
        };

        store.posts.insert(
            1,
            Post {
                id: 1,
                author: DEMO_FRIEND.to_string(),
                content: DEMO_MODE_CONTENT.to_string(),
                timestamp: SEED_TIME_OLD,
                like_count: 0,
                comment_count: 1,
                liked_by_viewer: None,
                tx_hash: None,
            },
        );
        store.posts.insert(
            2,
            Post {
                id: 2,
                author: DEMO_IDENTITY.to_string(),
                content: DEMO_WELCOME_CONTENT.to_string(),
                timestamp: SEED_TIME_NEW,
                like_count: 0,
                comment_count: 0,
                liked_by_viewer: None,
                tx_hash: None,
            },
        );
        store.comments.insert(
            1,
            Comment {
                id: 1,
                post_id: 1,
                author: DEMO_IDENTITY.to_string(),
                content: "Looks great without a single contract deployed.".to_string(),
                timestamp: SEED_TIME_OLD + 60,
                like_count: 0,
            },
        );
        store.profiles.insert(
            DEMO_IDENTITY.to_string(),
            Profile {
                owner: DEMO_IDENTITY.to_string(),
                username: "baseline_demo".to_string(),
                bio: "Built-in demo identity".to_string(),
                avatar: None,
                exists: true,
            },
        );
        store.profiles.insert(
            DEMO_FRIEND.to_string(),
            Profile {
                owner: DEMO_FRIEND.to_string(),
                username: "demo_friend".to_string(),
                bio: "Second built-in demo account".to_string(),
                avatar: None,
                exists: true,
            },
        );
        store
            .follows
            .insert((DEMO_IDENTITY.to_string(), DEMO_FRIEND.to_string()));

        store
    }

    fn now() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }

    /// Next synthetic transaction hash
    pub fn next_tx_hash(&mut self) -> String {
        self.tx_counter += 1;
        format!("0x{:064x}", self.tx_counter)
    }

    /// All posts, unsorted; `viewer` resolves the per-post like flag
    pub fn posts(&self, viewer: Option<&str>) -> Vec<Post> {
        self.posts
            .values()
            .map(|p| self.with_viewer_flag(p.clone(), viewer))
            .collect()
    }

    /// One post by id
    pub fn post(&self, id: u64, viewer: Option<&str>) -> Option<Post> {
        self.posts
            .get(&id)
            .map(|p| self.with_viewer_flag(p.clone(), viewer))
    }

    fn with_viewer_flag(&self, mut post: Post, viewer: Option<&str>) -> Post {
        post.liked_by_viewer =
            viewer.map(|v| self.likes.contains(&(post.id, v.to_string())));
        post
    }

    /// Create a post authored by `author`; returns the new id
    pub fn create_post(&mut self, author: &str, content: &str) -> u64 {
        let id = self.next_post_id;
        self.next_post_id += 1;
        self.posts.insert(
            id,
            Post {
                id,
                author: author.to_string(),
                content: content.to_string(),
                timestamp: Self::now(),
                like_count: 0,
                comment_count: 0,
                liked_by_viewer: None,
                tx_hash: None,
            },
        );
        id
    }

    /// Record a like; no-op if `viewer` already liked the post
    pub fn like(&mut self, id: u64, viewer: &str) -> bool {
        let Some(post) = self.posts.get_mut(&id) else {
            return false;
        };
        if self.likes.insert((id, viewer.to_string())) {
            post.like_count += 1;
        }
        true
    }

    /// Remove a like; no-op if `viewer` had not liked the post
    pub fn unlike(&mut self, id: u64, viewer: &str) -> bool {
        let Some(post) = self.posts.get_mut(&id) else {
            return false;
        };
        if self.likes.remove(&(id, viewer.to_string())) {
            post.like_count = post.like_count.saturating_sub(1);
        }
        true
    }

    /// Whether `viewer` has liked the post
    pub fn has_liked(&self, id: u64, viewer: &str) -> bool {
        self.likes.contains(&(id, viewer.to_string()))
    }

    /// Like count for a post, 0 if it does not exist
    pub fn like_count(&self, id: u64) -> u64 {
        self.posts.get(&id).map(|p| p.like_count).unwrap_or(0)
    }

    /// Comments belonging to one post, unsorted
    pub fn comments_for(&self, post_id: u64) -> Vec<Comment> {
        self.comments
            .values()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect()
    }

    /// Add a comment; `None` when the parent post does not exist
    pub fn add_comment(&mut self, post_id: u64, author: &str, content: &str) -> Option<u64> {
        let post = self.posts.get_mut(&post_id)?;
        post.comment_count += 1;
        let id = self.next_comment_id;
        self.next_comment_id += 1;
        self.comments.insert(
            id,
            Comment {
                id,
                post_id,
                author: author.to_string(),
                content: content.to_string(),
                timestamp: Self::now(),
                like_count: 0,
            },
        );
        Some(id)
    }

    /// Profile for an address
    pub fn profile(&self, address: &str) -> Option<Profile> {
        self.profiles.get(address).cloned()
    }

    /// Upsert the profile owned by `owner`
    pub fn upsert_profile(
        &mut self,
        owner: &str,
        username: &str,
        bio: &str,
        avatar: Option<&NftReference>,
    ) {
        self.profiles.insert(
            owner.to_string(),
            Profile {
                owner: owner.to_string(),
                username: username.to_string(),
                bio: bio.to_string(),
                avatar: avatar.cloned(),
                exists: true,
            },
        );
    }

    /// Add a follow edge
    pub fn follow(&mut self, follower: &str, target: &str) {
        self.follows
            .insert((follower.to_string(), target.to_string()));
    }

    /// Remove a follow edge
    pub fn unfollow(&mut self, follower: &str, target: &str) {
        self.follows
            .remove(&(follower.to_string(), target.to_string()));
    }

    /// Membership check on the follow graph
    pub fn is_following(&self, follower: &str, target: &str) -> bool {
        self.follows
            .contains(&(follower.to_string(), target.to_string()))
    }

    /// Number of followers of `address`
    pub fn follower_count(&self, address: &str) -> u64 {
        self.follows.iter().filter(|(_, t)| t == address).count() as u64
    }

    /// Number of addresses `address` follows
    pub fn following_count(&self, address: &str) -> u64 {
        self.follows.iter().filter(|(f, _)| f == address).count() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_record_set() {
        let store = DemoStore::seeded();
        assert_eq!(store.posts(None).len(), 2);
        assert_eq!(store.comments_for(1).len(), 1);
        assert!(store.profile(DEMO_IDENTITY).is_some());
        assert!(store.is_following(DEMO_IDENTITY, DEMO_FRIEND));
    }

    #[test]
    fn test_like_unlike_restores_count() {
        let mut store = DemoStore::seeded();
        let before = store.like_count(2);
        assert!(store.like(2, DEMO_FRIEND));
        assert_eq!(store.like_count(2), before + 1);
        assert!(store.unlike(2, DEMO_FRIEND));
        assert_eq!(store.like_count(2), before);
    }

    #[test]
    fn test_double_like_counts_once() {
        let mut store = DemoStore::seeded();
        store.like(2, DEMO_FRIEND);
        store.like(2, DEMO_FRIEND);
        assert_eq!(store.like_count(2), 1);
    }

    #[test]
    fn test_comment_on_missing_post() {
        let mut store = DemoStore::seeded();
        assert!(store.add_comment(99, DEMO_IDENTITY, "hello").is_none());
    }

    #[test]
    fn test_tx_hashes_are_unique() {
        let mut store = DemoStore::seeded();
        let a = store.next_tx_hash();
        let b = store.next_tx_hash();
        assert_ne!(a, b);
        assert!(a.starts_with("0x") && a.len() == 66);
    }
}
