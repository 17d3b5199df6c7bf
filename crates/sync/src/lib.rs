//! BaseLine Chain Data Sync Adapter
//!
//! Mediates between application state and the four BaseLine contracts
//! (Profiles, Posts, Comments, Follow): read-aggregation (list of ids →
//! per-item fetch → newest-first sort), write-submission (submit → wait for
//! receipt → re-fetch), pending-intent optimistic overlays, and a built-in
//! demo fallback when a contract address is unset or a live read fails.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use baseline_sync::{CancelToken, KeyWallet, SyncAdapter, SyncConfig, TracingNotifier};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SyncConfig::from_env()?;
//! let wallet = Arc::new(KeyWallet::new(
//!     "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266",
//!     config.chain_id,
//! ));
//! let adapter = SyncAdapter::new(config, wallet, Arc::new(TracingNotifier))?;
//!
//! let cancel = CancelToken::new();
//! let feed = adapter.refresh_feed(&cancel).await?;
//! println!("{} posts", feed.len());
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod cache;
pub mod cancel;
pub mod config;
pub mod error;
pub mod intent;
pub mod notify;
pub mod wallet;

pub use adapter::SyncAdapter;
pub use cache::FeedCache;
pub use cancel::CancelToken;
pub use config::{ContractAddresses, SyncConfig, MAX_POST_LENGTH};
pub use error::{Result, SyncError};
pub use intent::{Intent, IntentId, IntentSet};
pub use notify::{NoticeLevel, Notifier, TracingNotifier};
pub use wallet::{KeyWallet, WalletError, WalletGateway};

/// Re-export the canonical entity types for convenience
pub use baseline_social_trait::{Comment, FollowStats, NftReference, Post, Profile, SocialService};
