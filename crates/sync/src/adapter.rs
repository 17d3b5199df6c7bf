//! The chain data sync adapter
//!
//! Translates application intents into contract calls and contract state
//! into renderable records. Each of the four services routes to the live
//! EVM backend when its contract address is configured and to the demo
//! backend otherwise; a live list-level read failure also falls back to
//! demo data so the application never goes dark.

use baseline_social_demo::{DemoSocial, DEMO_IDENTITY};
use baseline_social_ethereum::EthereumSocial;
use baseline_social_trait::{
    Comment, FollowStats, NftReference, Post, Profile, Social, SocialLayer, SocialService,
};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, warn};

use crate::cache::FeedCache;
use crate::cancel::CancelToken;
use crate::config::SyncConfig;
use crate::error::{Result, SyncError};
use crate::intent::{Intent, IntentSet};
use crate::notify::{NoticeLevel, Notifier};
use crate::wallet::WalletGateway;

/// Chain data sync adapter over the four BaseLine services.
///
/// Holds the last-confirmed feed snapshot plus the pending-intent overlay;
/// all other state lives on the backends. Mutexes guard the cache and
/// intents only across synchronous access, never an await point.
pub struct SyncAdapter {
    config: SyncConfig,
    live: Option<EthereumSocial>,
    demo: DemoSocial,
    cache: Mutex<FeedCache>,
    intents: Mutex<IntentSet>,
    wallet: Arc<dyn WalletGateway>,
    notifier: Arc<dyn Notifier>,
}

impl SyncAdapter {
    /// Create an adapter from explicit configuration.
    ///
    /// The live backend is constructed only when at least one contract
    /// address is configured; otherwise every service serves demo data.
    ///
    /// # Errors
    ///
    /// Returns an error only for malformed configuration (bad address or
    /// key). Missing addresses are not errors.
    pub fn new(
        config: SyncConfig,
        wallet: Arc<dyn WalletGateway>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self> {
        let live = if config.contracts.any_configured() {
            let backend = EthereumSocial::new(config.ethereum_config())
                .map_err(|e| SyncError::Config(e.to_string()))?;
            info!(
                "Sync adapter on {} (chain {})",
                backend.social_layer(),
                config.chain_id
            );
            Some(backend)
        } else {
            info!("No contract addresses configured - running fully in demo mode");
            None
        };

        let identity = wallet.address().unwrap_or_else(|| DEMO_IDENTITY.to_string());
        let demo = DemoSocial::with_identity(&identity);

        Ok(Self {
            config,
            live,
            demo,
            cache: Mutex::new(FeedCache::new()),
            intents: Mutex::new(IntentSet::new()),
            wallet,
            notifier,
        })
    }

    /// The layer the feed is currently served from
    pub fn layer(&self) -> SocialLayer {
        match &self.live {
            Some(backend) => backend.social_layer(),
            None => SocialLayer::Demo,
        }
    }

    /// Whether `service` is served by the live chain backend
    pub fn is_live(&self, service: SocialService) -> bool {
        self.live.is_some() && self.config.is_service_configured(service)
    }

    /// The adapter's configuration
    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    fn live_for(&self, service: SocialService) -> Option<&EthereumSocial> {
        if self.config.is_service_configured(service) {
            self.live.as_ref()
        } else {
            None
        }
    }

    fn cache(&self) -> MutexGuard<'_, FeedCache> {
        self.cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn intents(&self) -> MutexGuard<'_, IntentSet> {
        self.intents.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn viewer(&self) -> Option<String> {
        self.wallet.address()
    }

    // ===== Preflight checks =====

    fn validate_content(&self, content: &str) -> Result<()> {
        if content.trim().is_empty() {
            self.notifier
                .notify(NoticeLevel::Error, "Content cannot be empty");
            return Err(SyncError::EmptyContent);
        }
        let len = content.chars().count();
        let max = self.config.max_post_length;
        if len > max {
            self.notifier.notify(
                NoticeLevel::Error,
                &format!("Content is {} characters; the limit is {}", len, max),
            );
            return Err(SyncError::ContentTooLong { len, max });
        }
        Ok(())
    }

    /// Require a connected wallet session, prompting for connection when
    /// there is none. A declined prompt aborts with no backend call.
    async fn ensure_wallet(&self, cancel: &CancelToken) -> Result<String> {
        if let Some(address) = self.wallet.address() {
            return Ok(address);
        }

        self.notifier
            .notify(NoticeLevel::Info, "Connect your wallet to continue");
        match self.wallet.request_connection().await {
            Ok(address) => {
                cancel.ensure_active()?;
                info!("Wallet connected: {}", address);
                Ok(address)
            }
            Err(e) => {
                warn!("Wallet connection request failed: {}", e);
                self.notifier.notify(
                    NoticeLevel::Error,
                    "A connected wallet is required for this action",
                );
                Err(SyncError::WalletNotConnected)
            }
        }
    }

    /// For live services, make sure the wallet session is on the configured
    /// chain: attempt an automatic switch, fall back to a manual
    /// notification.
    async fn ensure_network(&self, service: SocialService) -> Result<()> {
        if self.live_for(service).is_none() {
            return Ok(());
        }
        let expected = self.config.chain_id;
        let Some(actual) = self.wallet.active_chain_id() else {
            return Ok(());
        };
        if actual == expected {
            return Ok(());
        }

        match self.wallet.switch_chain(expected).await {
            Ok(()) => {
                info!("Wallet switched from chain {} to {}", actual, expected);
                Ok(())
            }
            Err(e) => {
                warn!("Automatic network switch failed: {}", e);
                self.notifier.notify(
                    NoticeLevel::Error,
                    &format!(
                        "Please switch your wallet to chain {} (currently on {})",
                        expected, actual
                    ),
                );
                Err(SyncError::WrongNetwork { expected, actual })
            }
        }
    }

    // ===== Feed (read path) =====

    /// Run the full read path and replace the cached snapshot.
    ///
    /// A live list-level failure degrades to the demo record set with a
    /// notification. A successful refresh reconciles (clears) every pending
    /// intent: the fetched state supersedes the overlay.
    pub async fn refresh_feed(&self, cancel: &CancelToken) -> Result<Vec<Post>> {
        cancel.ensure_active()?;
        let viewer = self.viewer();

        let posts = match self.live_for(SocialService::Posts) {
            Some(live) => match live.fetch_posts(viewer.as_deref()).await {
                Ok(posts) => posts,
                Err(e) => {
                    warn!("Live feed read failed, serving demo data: {}", e);
                    self.notifier.notify(
                        NoticeLevel::Error,
                        "Could not reach the Posts contract - showing demo data",
                    );
                    self.demo.fetch_posts(viewer.as_deref()).await?
                }
            },
            None => self.demo.fetch_posts(viewer.as_deref()).await?,
        };

        cancel.ensure_active()?;

        let mut cache = self.cache();
        cache.replace(posts.clone());
        self.intents().clear();
        debug!("Feed refreshed: {} posts (generation {})", posts.len(), cache.generation());

        Ok(posts)
    }

    /// Current feed view: the last-confirmed snapshot with the pending
    /// intent overlay applied
    pub fn feed(&self) -> Vec<Post> {
        let cache = self.cache();
        self.intents().overlay(cache.snapshot())
    }

    // ===== Posts (write path) =====

    /// Create a post. Content is validated, the wallet session is required,
    /// and the feed is re-fetched once the write settles.
    pub async fn create_post(&self, content: &str, cancel: &CancelToken) -> Result<String> {
        cancel.ensure_active()?;
        self.validate_content(content)?;
        self.ensure_wallet(cancel).await?;
        self.ensure_network(SocialService::Posts).await?;
        cancel.ensure_active()?;

        let result = match self.live_for(SocialService::Posts) {
            Some(live) => live
                .create_post(content)
                .await
                .map_err(|e| SyncError::Write(e.to_string())),
            None => self.demo.create_post(content).await.map_err(SyncError::from),
        };

        match result {
            Ok(tx_hash) => {
                self.notifier.notify(NoticeLevel::Success, "Post confirmed");
                self.refresh_feed(cancel).await?;
                Ok(tx_hash)
            }
            Err(e) => {
                warn!("create_post failed: {}", e);
                self.notifier
                    .notify(NoticeLevel::Error, "Failed to create post");
                Err(e)
            }
        }
    }

    /// Like a post, optimistically bumping the overlay until the write
    /// settles and the refresh reconciles it
    pub async fn like_post(&self, post_id: u64, cancel: &CancelToken) -> Result<String> {
        cancel.ensure_active()?;
        self.ensure_wallet(cancel).await?;
        self.ensure_network(SocialService::Posts).await?;
        cancel.ensure_active()?;

        let intent_id = self.intents().record(Intent::Like { post_id });

        let result = match self.live_for(SocialService::Posts) {
            Some(live) => live
                .like_post(post_id)
                .await
                .map_err(|e| SyncError::Write(e.to_string())),
            None => self.demo.like_post(post_id).await.map_err(SyncError::from),
        };

        match result {
            Ok(tx_hash) => {
                // Confirmed: the overlay's job is done before the re-fetch.
                self.intents().rollback(intent_id);
                self.notifier.notify(NoticeLevel::Success, "Like confirmed");
                self.refresh_feed(cancel).await?;
                Ok(tx_hash)
            }
            Err(e) => {
                self.intents().rollback(intent_id);
                warn!("like_post({}) failed: {}", post_id, e);
                self.notifier.notify(NoticeLevel::Error, "Failed to like post");
                Err(e)
            }
        }
    }

    /// Remove a like, mirror image of [`Self::like_post`]
    pub async fn unlike_post(&self, post_id: u64, cancel: &CancelToken) -> Result<String> {
        cancel.ensure_active()?;
        self.ensure_wallet(cancel).await?;
        self.ensure_network(SocialService::Posts).await?;
        cancel.ensure_active()?;

        let intent_id = self.intents().record(Intent::Unlike { post_id });

        let result = match self.live_for(SocialService::Posts) {
            Some(live) => live
                .unlike_post(post_id)
                .await
                .map_err(|e| SyncError::Write(e.to_string())),
            None => self.demo.unlike_post(post_id).await.map_err(SyncError::from),
        };

        match result {
            Ok(tx_hash) => {
                self.intents().rollback(intent_id);
                self.notifier
                    .notify(NoticeLevel::Success, "Unlike confirmed");
                self.refresh_feed(cancel).await?;
                Ok(tx_hash)
            }
            Err(e) => {
                self.intents().rollback(intent_id);
                warn!("unlike_post({}) failed: {}", post_id, e);
                self.notifier
                    .notify(NoticeLevel::Error, "Failed to unlike post");
                Err(e)
            }
        }
    }

    // ===== Comments =====

    /// Comments for one post, newest first, with demo fallback
    pub async fn comments_for(&self, post_id: u64, cancel: &CancelToken) -> Result<Vec<Comment>> {
        cancel.ensure_active()?;

        let comments = match self.live_for(SocialService::Comments) {
            Some(live) => match live.fetch_comments(post_id).await {
                Ok(comments) => comments,
                Err(e) => {
                    warn!("Live comments read failed, serving demo data: {}", e);
                    self.notifier.notify(
                        NoticeLevel::Error,
                        "Could not reach the Comments contract - showing demo data",
                    );
                    self.demo.fetch_comments(post_id).await?
                }
            },
            None => self.demo.fetch_comments(post_id).await?,
        };

        cancel.ensure_active()?;
        Ok(comments)
    }

    /// Comment on a post; the parent post must already exist
    pub async fn add_comment(
        &self,
        post_id: u64,
        content: &str,
        cancel: &CancelToken,
    ) -> Result<String> {
        cancel.ensure_active()?;
        self.validate_content(content)?;
        self.ensure_wallet(cancel).await?;
        self.ensure_network(SocialService::Comments).await?;
        cancel.ensure_active()?;

        let intent_id = self.intents().record(Intent::Comment { post_id });

        let result = match self.live_for(SocialService::Comments) {
            Some(live) => live
                .add_comment(post_id, content)
                .await
                .map_err(|e| SyncError::Write(e.to_string())),
            None => self
                .demo
                .add_comment(post_id, content)
                .await
                .map_err(SyncError::from),
        };

        match result {
            Ok(tx_hash) => {
                self.intents().rollback(intent_id);
                self.notifier
                    .notify(NoticeLevel::Success, "Comment confirmed");
                self.refresh_feed(cancel).await?;
                Ok(tx_hash)
            }
            Err(e) => {
                self.intents().rollback(intent_id);
                warn!("add_comment({}) failed: {}", post_id, e);
                self.notifier
                    .notify(NoticeLevel::Error, "Failed to add comment");
                Err(e)
            }
        }
    }

    // ===== Profiles =====

    /// Profile for an address, with demo fallback
    pub async fn profile(&self, address: &str, cancel: &CancelToken) -> Result<Option<Profile>> {
        cancel.ensure_active()?;

        let profile = match self.live_for(SocialService::Profiles) {
            Some(live) => match live.fetch_profile(address).await {
                Ok(profile) => profile,
                Err(e) => {
                    warn!("Live profile read failed, serving demo data: {}", e);
                    self.notifier.notify(
                        NoticeLevel::Error,
                        "Could not reach the Profiles contract - showing demo data",
                    );
                    self.demo.fetch_profile(address).await?
                }
            },
            None => self.demo.fetch_profile(address).await?,
        };

        cancel.ensure_active()?;
        Ok(profile)
    }

    /// Create or update the caller's profile (idempotent upsert)
    pub async fn update_profile(
        &self,
        username: &str,
        bio: &str,
        avatar: Option<&NftReference>,
        cancel: &CancelToken,
    ) -> Result<String> {
        cancel.ensure_active()?;
        if username.trim().is_empty() {
            self.notifier
                .notify(NoticeLevel::Error, "Username cannot be empty");
            return Err(SyncError::EmptyContent);
        }
        self.ensure_wallet(cancel).await?;
        self.ensure_network(SocialService::Profiles).await?;
        cancel.ensure_active()?;

        let result = match self.live_for(SocialService::Profiles) {
            Some(live) => live
                .update_profile(username, bio, avatar)
                .await
                .map_err(|e| SyncError::Write(e.to_string())),
            None => self
                .demo
                .update_profile(username, bio, avatar)
                .await
                .map_err(SyncError::from),
        };

        match result {
            Ok(tx_hash) => {
                self.notifier
                    .notify(NoticeLevel::Success, "Profile update confirmed");
                Ok(tx_hash)
            }
            Err(e) => {
                warn!("update_profile failed: {}", e);
                self.notifier
                    .notify(NoticeLevel::Error, "Failed to update profile");
                Err(e)
            }
        }
    }

    // ===== Follow graph =====

    /// Whether `follower` follows `target`, with demo fallback
    pub async fn is_following(
        &self,
        follower: &str,
        target: &str,
        cancel: &CancelToken,
    ) -> Result<bool> {
        cancel.ensure_active()?;

        let following = match self.live_for(SocialService::Follow) {
            Some(live) => match live.is_following(follower, target).await {
                Ok(flag) => flag,
                Err(e) => {
                    warn!("Live follow read failed, serving demo data: {}", e);
                    self.demo.is_following(follower, target).await?
                }
            },
            None => self.demo.is_following(follower, target).await?,
        };

        cancel.ensure_active()?;
        Ok(following)
    }

    /// Follower/following counts for an address, with demo fallback
    pub async fn follow_stats(&self, address: &str, cancel: &CancelToken) -> Result<FollowStats> {
        cancel.ensure_active()?;

        let stats = match self.live_for(SocialService::Follow) {
            Some(live) => {
                match futures::try_join!(
                    live.follower_count(address),
                    live.following_count(address)
                ) {
                    Ok((followers, following)) => FollowStats {
                        followers,
                        following,
                    },
                    Err(e) => {
                        warn!("Live follow counts failed, serving demo data: {}", e);
                        self.demo.stats(address)
                    }
                }
            }
            None => self.demo.stats(address),
        };

        cancel.ensure_active()?;
        Ok(stats)
    }

    /// Follow `target`
    pub async fn follow(&self, target: &str, cancel: &CancelToken) -> Result<String> {
        cancel.ensure_active()?;
        self.ensure_wallet(cancel).await?;
        self.ensure_network(SocialService::Follow).await?;
        cancel.ensure_active()?;

        let result = match self.live_for(SocialService::Follow) {
            Some(live) => live
                .follow(target)
                .await
                .map_err(|e| SyncError::Write(e.to_string())),
            None => self.demo.follow(target).await.map_err(SyncError::from),
        };

        match result {
            Ok(tx_hash) => {
                self.notifier.notify(NoticeLevel::Success, "Follow confirmed");
                Ok(tx_hash)
            }
            Err(e) => {
                warn!("follow({}) failed: {}", target, e);
                self.notifier.notify(NoticeLevel::Error, "Failed to follow");
                Err(e)
            }
        }
    }

    /// Unfollow `target`
    pub async fn unfollow(&self, target: &str, cancel: &CancelToken) -> Result<String> {
        cancel.ensure_active()?;
        self.ensure_wallet(cancel).await?;
        self.ensure_network(SocialService::Follow).await?;
        cancel.ensure_active()?;

        let result = match self.live_for(SocialService::Follow) {
            Some(live) => live
                .unfollow(target)
                .await
                .map_err(|e| SyncError::Write(e.to_string())),
            None => self.demo.unfollow(target).await.map_err(SyncError::from),
        };

        match result {
            Ok(tx_hash) => {
                self.notifier
                    .notify(NoticeLevel::Success, "Unfollow confirmed");
                Ok(tx_hash)
            }
            Err(e) => {
                warn!("unfollow({}) failed: {}", target, e);
                self.notifier.notify(NoticeLevel::Error, "Failed to unfollow");
                Err(e)
            }
        }
    }
}
