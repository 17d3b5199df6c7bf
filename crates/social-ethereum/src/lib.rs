//! EVM Social Backend
//!
//! This crate provides the live, EVM-backed implementation of the `Social`
//! trait from `baseline-social-trait` for Base and other EVM-compatible
//! chains.
//!
//! # Features
//!
//! - Type-safe contract bindings via Alloy for the four BaseLine contracts
//!   (Profiles, Posts, Comments, Follow)
//! - Concurrent per-item hydration with best-effort skip of failed items
//! - Writes settle on real transaction receipts, with a configurable
//!   confirmation depth
//!
//! # Example
//!
//! ```ignore
//! use baseline_social_ethereum::{EthereumSocial, EthereumSocialConfig};
//! use baseline_social_trait::Social;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = EthereumSocialConfig {
//!     rpc_url: "https://sepolia.base.org".to_string(),
//!     chain_id: 84532,
//!     posts_address: Some("0x5FbDB2315678afecb367f032d93F642f64180aa3".to_string()),
//!     ..Default::default()
//! };
//!
//! let social = EthereumSocial::new(config)?;
//! let posts = social.fetch_posts(None).await?;
//! # Ok(())
//! # }
//! ```

pub mod abi;
pub mod config;
pub mod contract;
pub mod conversions;
pub mod error;
pub mod social;

pub use config::EthereumSocialConfig;
pub use contract::ChainClient;
pub use error::{EthereumSocialError, Result};
pub use social::EthereumSocial;

/// Re-export the Social trait for convenience
pub use baseline_social_trait::Social;
