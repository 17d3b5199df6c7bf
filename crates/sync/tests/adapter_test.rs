//! Behavioral tests for the sync adapter
//!
//! These run entirely against the demo backend and stub wallet/notifier
//! implementations; no node or network is required.

use async_trait::async_trait;
use baseline_social_demo::{DEMO_MODE_CONTENT, DEMO_WELCOME_CONTENT};
use baseline_sync::{
    CancelToken, ContractAddresses, KeyWallet, NoticeLevel, Notifier, SyncAdapter, SyncConfig,
    SyncError, WalletError, WalletGateway,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Notifier that records every notice for assertions
#[derive(Default)]
struct RecordingNotifier {
    notices: Mutex<Vec<(NoticeLevel, String)>>,
}

impl RecordingNotifier {
    fn messages(&self) -> Vec<(NoticeLevel, String)> {
        self.notices.lock().unwrap().clone()
    }

    fn has_level(&self, level: NoticeLevel) -> bool {
        self.messages().iter().any(|(l, _)| *l == level)
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        self.notices
            .lock()
            .unwrap()
            .push((level, message.to_string()));
    }
}

/// Disconnected wallet whose connection prompt is declined
#[derive(Default)]
struct DecliningWallet {
    prompts: AtomicUsize,
}

#[async_trait]
impl WalletGateway for DecliningWallet {
    fn address(&self) -> Option<String> {
        None
    }

    async fn request_connection(&self) -> Result<String, WalletError> {
        self.prompts.fetch_add(1, Ordering::SeqCst);
        Err(WalletError::Declined)
    }

    fn active_chain_id(&self) -> Option<u64> {
        None
    }

    async fn switch_chain(&self, _chain_id: u64) -> Result<(), WalletError> {
        Err(WalletError::SwitchUnsupported)
    }
}

/// Connected wallet stuck on the wrong chain, unable to switch
struct WrongChainWallet {
    address: String,
    chain_id: u64,
}

#[async_trait]
impl WalletGateway for WrongChainWallet {
    fn address(&self) -> Option<String> {
        Some(self.address.clone())
    }

    async fn request_connection(&self) -> Result<String, WalletError> {
        Ok(self.address.clone())
    }

    fn active_chain_id(&self) -> Option<u64> {
        Some(self.chain_id)
    }

    async fn switch_chain(&self, _chain_id: u64) -> Result<(), WalletError> {
        Err(WalletError::SwitchUnsupported)
    }
}

const VIEWER: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

fn demo_adapter() -> (SyncAdapter, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::default());
    let wallet = Arc::new(KeyWallet::new(VIEWER, 8453));
    let adapter = SyncAdapter::new(SyncConfig::default(), wallet, notifier.clone()).unwrap();
    (adapter, notifier)
}

#[tokio::test]
async fn zero_addresses_serves_the_builtin_demo_feed() {
    let (adapter, _) = demo_adapter();
    let cancel = CancelToken::new();

    let feed = adapter.refresh_feed(&cancel).await.unwrap();

    assert_eq!(feed.len(), 2);
    assert_eq!(feed[0].content, DEMO_WELCOME_CONTENT);
    assert_eq!(feed[1].content, DEMO_MODE_CONTENT);
    // Newest first
    assert!(feed[0].timestamp >= feed[1].timestamp);
}

#[tokio::test]
async fn feed_is_sorted_newest_first_after_writes() {
    let (adapter, _) = demo_adapter();
    let cancel = CancelToken::new();

    adapter.create_post("first", &cancel).await.unwrap();
    adapter.create_post("second", &cancel).await.unwrap();

    let feed = adapter.refresh_feed(&cancel).await.unwrap();
    for pair in feed.windows(2) {
        assert!(
            pair[0].timestamp > pair[1].timestamp
                || (pair[0].timestamp == pair[1].timestamp && pair[0].id > pair[1].id)
        );
    }
}

#[tokio::test]
async fn confirmed_create_post_appears_at_feed_head() {
    let (adapter, notifier) = demo_adapter();
    let cancel = CancelToken::new();

    adapter.create_post("hello base", &cancel).await.unwrap();

    let feed = adapter.feed();
    assert_eq!(feed[0].content, "hello base");
    assert!(notifier.has_level(NoticeLevel::Success));
}

#[tokio::test]
async fn disconnected_wallet_triggers_prompt_and_no_write() {
    let notifier = Arc::new(RecordingNotifier::default());
    let wallet = Arc::new(DecliningWallet::default());
    let adapter =
        SyncAdapter::new(SyncConfig::default(), wallet.clone(), notifier.clone()).unwrap();
    let cancel = CancelToken::new();

    let err = adapter.create_post("hello", &cancel).await.unwrap_err();
    assert!(matches!(err, SyncError::WalletNotConnected));

    // The prompt fired exactly once and nothing was written.
    assert_eq!(wallet.prompts.load(Ordering::SeqCst), 1);
    let feed = adapter.refresh_feed(&cancel).await.unwrap();
    assert_eq!(feed.len(), 2);
}

#[tokio::test]
async fn wrong_network_aborts_live_write_before_submission() {
    let notifier = Arc::new(RecordingNotifier::default());
    let wallet = Arc::new(WrongChainWallet {
        address: VIEWER.to_string(),
        chain_id: 1,
    });
    let config = SyncConfig {
        chain_id: 8453,
        contracts: ContractAddresses {
            posts: Some("0x5FbDB2315678afecb367f032d93F642f64180aa3".to_string()),
            ..Default::default()
        },
        ..Default::default()
    };
    let adapter = SyncAdapter::new(config, wallet, notifier.clone()).unwrap();
    let cancel = CancelToken::new();

    let err = adapter.like_post(1, &cancel).await.unwrap_err();
    assert!(matches!(
        err,
        SyncError::WrongNetwork {
            expected: 8453,
            actual: 1
        }
    ));
    assert!(notifier.has_level(NoticeLevel::Error));
    // The declined write left no overlay behind.
    assert!(adapter.feed().is_empty());
}

#[tokio::test]
async fn like_then_unlike_restores_the_count() {
    let (adapter, _) = demo_adapter();
    let cancel = CancelToken::new();

    let feed = adapter.refresh_feed(&cancel).await.unwrap();
    let target = feed[0].id;
    let before = feed[0].like_count;

    adapter.like_post(target, &cancel).await.unwrap();
    let liked = adapter
        .feed()
        .into_iter()
        .find(|p| p.id == target)
        .unwrap();
    assert_eq!(liked.like_count, before + 1);
    assert_eq!(liked.liked_by_viewer, Some(true));

    adapter.unlike_post(target, &cancel).await.unwrap();
    let restored = adapter
        .feed()
        .into_iter()
        .find(|p| p.id == target)
        .unwrap();
    assert_eq!(restored.like_count, before);
    assert_eq!(restored.liked_by_viewer, Some(false));
}

#[tokio::test]
async fn failed_like_rolls_back_and_notifies() {
    let (adapter, notifier) = demo_adapter();
    let cancel = CancelToken::new();
    adapter.refresh_feed(&cancel).await.unwrap();

    // Post 999 does not exist; the demo backend rejects the write.
    let err = adapter.like_post(999, &cancel).await.unwrap_err();
    assert!(matches!(err, SyncError::NotFound { .. }));
    assert!(notifier.has_level(NoticeLevel::Error));

    // No dangling overlay, no count drift.
    let feed = adapter.feed();
    assert!(feed.iter().all(|p| p.like_count == 0));
}

#[tokio::test]
async fn empty_and_oversized_content_are_rejected_locally() {
    let (adapter, notifier) = demo_adapter();
    let cancel = CancelToken::new();

    let err = adapter.create_post("   ", &cancel).await.unwrap_err();
    assert!(matches!(err, SyncError::EmptyContent));

    let long = "x".repeat(281);
    let err = adapter.create_post(&long, &cancel).await.unwrap_err();
    assert!(matches!(
        err,
        SyncError::ContentTooLong { len: 281, max: 280 }
    ));
    assert!(notifier.has_level(NoticeLevel::Error));
}

#[tokio::test]
async fn comment_flow_updates_counts_and_lists() {
    let (adapter, _) = demo_adapter();
    let cancel = CancelToken::new();

    let feed = adapter.refresh_feed(&cancel).await.unwrap();
    let target = feed[0].id;
    let before = feed[0].comment_count;

    adapter.add_comment(target, "nice post", &cancel).await.unwrap();

    let comments = adapter.comments_for(target, &cancel).await.unwrap();
    assert_eq!(comments[0].content, "nice post");

    let post = adapter
        .feed()
        .into_iter()
        .find(|p| p.id == target)
        .unwrap();
    assert_eq!(post.comment_count, before + 1);
}

#[tokio::test]
async fn cancelled_token_aborts_without_publishing() {
    let (adapter, notifier) = demo_adapter();
    let cancel = CancelToken::new();
    cancel.cancel();

    let err = adapter.refresh_feed(&cancel).await.unwrap_err();
    assert!(matches!(err, SyncError::Cancelled));

    // Nothing was cached and the user heard nothing about it.
    assert!(adapter.feed().is_empty());
    assert!(notifier.messages().is_empty());
}

#[tokio::test]
async fn profile_upsert_and_fetch_roundtrip() {
    let (adapter, _) = demo_adapter();
    let cancel = CancelToken::new();

    adapter
        .update_profile("builder", "shipping on base", None, &cancel)
        .await
        .unwrap();

    let profile = adapter.profile(VIEWER, &cancel).await.unwrap().unwrap();
    assert_eq!(profile.username, "builder");
    assert!(profile.exists);
}

#[tokio::test]
async fn follow_unfollow_roundtrip_with_stats() {
    let (adapter, _) = demo_adapter();
    let cancel = CancelToken::new();
    let target = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8";

    adapter.follow(target, &cancel).await.unwrap();
    assert!(adapter.is_following(VIEWER, target, &cancel).await.unwrap());
    let stats = adapter.follow_stats(target, &cancel).await.unwrap();
    assert_eq!(stats.followers, 1);

    adapter.unfollow(target, &cancel).await.unwrap();
    assert!(!adapter.is_following(VIEWER, target, &cancel).await.unwrap());
    let stats = adapter.follow_stats(target, &cancel).await.unwrap();
    assert_eq!(stats.followers, 0);
}

#[tokio::test]
async fn every_service_works_with_zero_configuration() {
    let (adapter, _) = demo_adapter();
    let cancel = CancelToken::new();

    assert!(!adapter.refresh_feed(&cancel).await.unwrap().is_empty());
    assert!(!adapter.comments_for(1, &cancel).await.unwrap().is_empty());
    assert!(adapter
        .profile(baseline_social_demo::DEMO_IDENTITY, &cancel)
        .await
        .unwrap()
        .is_some());
    assert!(adapter
        .is_following(
            baseline_social_demo::DEMO_IDENTITY,
            baseline_social_demo::DEMO_FRIEND,
            &cancel
        )
        .await
        .unwrap());
}
