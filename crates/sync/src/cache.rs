//! Last-confirmed feed snapshot
//!
//! The cache holds the most recent successful read. A refresh fully
//! replaces it — never merges — so the backend stays the single source of
//! truth.

use baseline_social_trait::Post;

/// Snapshot of the last successful feed read
#[derive(Debug, Default)]
pub struct FeedCache {
    snapshot: Vec<Post>,
    generation: u64,
}

impl FeedCache {
    /// Empty cache, generation 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the snapshot with a fresh read
    pub fn replace(&mut self, posts: Vec<Post>) {
        self.snapshot = posts;
        self.generation += 1;
    }

    /// The cached posts, in their fetched (newest-first) order
    pub fn snapshot(&self) -> &[Post] {
        &self.snapshot
    }

    /// Number of successful refreshes so far
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: u64) -> Post {
        Post {
            id,
            author: "0x0000000000000000000000000000000000000001".to_string(),
            content: format!("post {}", id),
            timestamp: id,
            like_count: 0,
            comment_count: 0,
            liked_by_viewer: None,
            tx_hash: None,
        }
    }

    #[test]
    fn test_replace_never_merges() {
        let mut cache = FeedCache::new();
        cache.replace(vec![post(1), post(2)]);
        assert_eq!(cache.snapshot().len(), 2);
        assert_eq!(cache.generation(), 1);

        cache.replace(vec![post(3)]);
        assert_eq!(cache.snapshot().len(), 1);
        assert_eq!(cache.snapshot()[0].id, 3);
        assert_eq!(cache.generation(), 2);
    }
}
