//! Pending mutation intents
//!
//! Each write is modeled as a pending intent overlaid on the last-confirmed
//! snapshot: the overlay gives immediate UI feedback, the intent is cleared
//! when the next successful refresh reconciles it, and it is rolled back if
//! the write fails. An intent is never left dangling.

use baseline_social_trait::Post;
use std::collections::BTreeMap;

/// Handle to one recorded intent, used to roll it back on failure
pub type IntentId = u64;

/// One optimistic mutation awaiting confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// A like submitted for a post
    Like {
        /// Target post
        post_id: u64,
    },
    /// A like removal submitted for a post
    Unlike {
        /// Target post
        post_id: u64,
    },
    /// A comment submitted for a post
    Comment {
        /// Parent post
        post_id: u64,
    },
}

/// The set of intents currently in flight
#[derive(Debug, Default)]
pub struct IntentSet {
    next_id: IntentId,
    pending: BTreeMap<IntentId, Intent>,
}

impl IntentSet {
    /// Empty intent set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an intent; returns the handle for rollback
    pub fn record(&mut self, intent: Intent) -> IntentId {
        let id = self.next_id;
        self.next_id += 1;
        self.pending.insert(id, intent);
        id
    }

    /// Roll back one intent (the write failed or was cancelled)
    pub fn rollback(&mut self, id: IntentId) {
        self.pending.remove(&id);
    }

    /// Reconcile: a fresh confirmed snapshot supersedes every overlay
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Whether any intent is in flight
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Apply the overlay to a confirmed snapshot, producing the view the
    /// UI renders. Recorded order is preserved so a like/unlike pair nets
    /// out.
    pub fn overlay(&self, snapshot: &[Post]) -> Vec<Post> {
        let mut view: Vec<Post> = snapshot.to_vec();
        for intent in self.pending.values() {
            match intent {
                Intent::Like { post_id } => {
                    if let Some(post) = view.iter_mut().find(|p| p.id == *post_id) {
                        post.like_count += 1;
                        post.liked_by_viewer = Some(true);
                    }
                }
                Intent::Unlike { post_id } => {
                    if let Some(post) = view.iter_mut().find(|p| p.id == *post_id) {
                        post.like_count = post.like_count.saturating_sub(1);
                        post.liked_by_viewer = Some(false);
                    }
                }
                Intent::Comment { post_id } => {
                    if let Some(post) = view.iter_mut().find(|p| p.id == *post_id) {
                        post.comment_count += 1;
                    }
                }
            }
        }
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: u64, likes: u64) -> Post {
        Post {
            id,
            author: "0x0000000000000000000000000000000000000001".to_string(),
            content: String::new(),
            timestamp: id,
            like_count: likes,
            comment_count: 0,
            liked_by_viewer: Some(false),
            tx_hash: None,
        }
    }

    #[test]
    fn test_like_overlay() {
        let mut intents = IntentSet::new();
        intents.record(Intent::Like { post_id: 1 });

        let view = intents.overlay(&[post(1, 5), post(2, 0)]);
        assert_eq!(view[0].like_count, 6);
        assert_eq!(view[0].liked_by_viewer, Some(true));
        assert_eq!(view[1].like_count, 0);
    }

    #[test]
    fn test_rollback_removes_overlay() {
        let mut intents = IntentSet::new();
        let id = intents.record(Intent::Like { post_id: 1 });
        intents.rollback(id);

        let view = intents.overlay(&[post(1, 5)]);
        assert_eq!(view[0].like_count, 5);
        assert_eq!(view[0].liked_by_viewer, Some(false));
        assert!(intents.is_empty());
    }

    #[test]
    fn test_like_unlike_pair_nets_out() {
        let mut intents = IntentSet::new();
        intents.record(Intent::Like { post_id: 1 });
        intents.record(Intent::Unlike { post_id: 1 });

        let view = intents.overlay(&[post(1, 5)]);
        assert_eq!(view[0].like_count, 5);
        assert_eq!(view[0].liked_by_viewer, Some(false));
    }

    #[test]
    fn test_comment_overlay_bumps_count() {
        let mut intents = IntentSet::new();
        intents.record(Intent::Comment { post_id: 2 });

        let view = intents.overlay(&[post(2, 0)]);
        assert_eq!(view[0].comment_count, 1);
    }

    #[test]
    fn test_clear_reconciles_everything() {
        let mut intents = IntentSet::new();
        intents.record(Intent::Like { post_id: 1 });
        intents.record(Intent::Comment { post_id: 1 });
        intents.clear();
        assert!(intents.is_empty());

        let view = intents.overlay(&[post(1, 5)]);
        assert_eq!(view[0].like_count, 5);
        assert_eq!(view[0].comment_count, 0);
    }

    #[test]
    fn test_overlay_ignores_unknown_post() {
        let mut intents = IntentSet::new();
        intents.record(Intent::Like { post_id: 42 });
        let view = intents.overlay(&[post(1, 0)]);
        assert_eq!(view[0].like_count, 0);
    }
}
