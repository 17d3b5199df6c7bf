//! EVM implementation of the `Social` trait
//!
//! Each operation is a single request-response round trip: reads create a
//! fresh provider and issue `eth_call`s, writes submit one transaction and
//! wait for its receipt. No batching, queuing or background tasks.

use async_trait::async_trait;
use baseline_social_trait::{
    sort_newest_first, Comment, NftReference, Post, Profile, Social, SocialLayer, SocialService,
};
use futures::future::join_all;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::{
    abi::{IComments, IFollow, IPosts, IProfiles},
    config::EthereumSocialConfig,
    contract::ChainClient,
    conversions::{comment_from_chain, post_exists, post_from_chain, profile_from_chain},
    error::{EthereumSocialError, Result},
};

use alloy::primitives::{Address, TxHash, U256};

/// Live EVM social backend.
///
/// Wraps the four BaseLine contracts behind the uniform `Social` surface.
/// Per-item detail reads fan out concurrently and a failed item is skipped
/// with a warning; only a failure of the bulk id listing fails the whole
/// read.
pub struct EthereumSocial {
    /// Chain client with addresses and connection details
    client: Arc<ChainClient>,

    /// Chain ID as string (for trait implementation)
    chain_id: String,
}

impl EthereumSocial {
    /// Create a new EVM social backend
    ///
    /// # Errors
    ///
    /// Returns an error if configuration validation fails or any configured
    /// address/key does not parse. A missing contract address is NOT an
    /// error here; the affected operations fail with `NotConfigured` when
    /// called.
    pub fn new(config: EthereumSocialConfig) -> Result<Self> {
        info!(
            "Initializing EVM social backend for chain {}",
            config.chain_id
        );

        config.validate().map_err(EthereumSocialError::Configuration)?;

        let chain_id = config.chain_id.to_string();
        let client = Arc::new(ChainClient::new(config)?);

        Ok(Self { client, chain_id })
    }

    /// Access the underlying chain client
    pub fn client(&self) -> &ChainClient {
        &self.client
    }

    /// Format transaction hash for return as String
    fn format_tx_hash(&self, hash: TxHash) -> String {
        format!("0x{:x}", hash)
    }

    fn parse_account(&self, value: &str) -> Result<Address> {
        Address::from_str(value)
            .map_err(|e| EthereumSocialError::InvalidAddress(format!("'{}': {}", value, e)))
    }

    fn confirmations(&self) -> u64 {
        self.client.config.confirmation_blocks
    }
}

#[async_trait]
impl Social for EthereumSocial {
    type TransactionHash = String;
    type Error = EthereumSocialError;

    fn social_layer(&self) -> SocialLayer {
        SocialLayer::from_chain_id(self.client.chain_id())
    }

    fn chain_id(&self) -> String {
        self.chain_id.clone()
    }

    // ===== Posts - Read Operations =====

    async fn fetch_posts(&self, viewer: Option<&str>) -> Result<Vec<Post>> {
        debug!("Fetching all posts (viewer: {:?})", viewer);

        let address = self.client.service_address(SocialService::Posts)?;
        let viewer_addr = viewer.map(|v| self.parse_account(v)).transpose()?;

        let provider = self.client.create_provider()?;
        let contract = IPosts::new(address, &provider);

        let ids = contract
            .getAllPosts()
            .call()
            .await
            .map_err(|e| EthereumSocialError::ContractCall(e.to_string()))?;

        // Fan out one detail read per id; a failed item is skipped, never
        // fatal to the whole list.
        let fetches = ids.iter().map(|id| {
            let contract = &contract;
            let id = *id;
            async move {
                let raw = match contract.getPost(id).call().await {
                    Ok(raw) => raw,
                    Err(e) => {
                        warn!("Skipping post {}: detail read failed: {}", id, e);
                        return None;
                    }
                };
                if !post_exists(&raw) {
                    return None;
                }
                let liked = match viewer_addr {
                    Some(v) => match contract.liked(id, v).call().await {
                        Ok(flag) => Some(flag),
                        Err(e) => {
                            // Degrades only the flag, not the item.
                            warn!("liked({}, {}) failed: {}", id, v, e);
                            None
                        }
                    },
                    None => None,
                };
                Some(post_from_chain(raw, liked))
            }
        });

        let mut posts: Vec<Post> = join_all(fetches).await.into_iter().flatten().collect();
        sort_newest_first(&mut posts);

        debug!("Hydrated {} of {} posts", posts.len(), ids.len());
        Ok(posts)
    }

    async fn fetch_post(&self, id: u64, viewer: Option<&str>) -> Result<Option<Post>> {
        debug!("Fetching post {}", id);

        let address = self.client.service_address(SocialService::Posts)?;
        let viewer_addr = viewer.map(|v| self.parse_account(v)).transpose()?;

        let provider = self.client.create_provider()?;
        let contract = IPosts::new(address, &provider);

        let raw = contract
            .getPost(U256::from(id))
            .call()
            .await
            .map_err(|e| EthereumSocialError::ContractCall(e.to_string()))?;

        if !post_exists(&raw) {
            return Ok(None);
        }

        let liked = match viewer_addr {
            Some(v) => Some(
                contract
                    .liked(U256::from(id), v)
                    .call()
                    .await
                    .map_err(|e| EthereumSocialError::ContractCall(e.to_string()))?,
            ),
            None => None,
        };

        Ok(Some(post_from_chain(raw, liked)))
    }

    async fn like_count(&self, id: u64) -> Result<u64> {
        let address = self.client.service_address(SocialService::Posts)?;
        let provider = self.client.create_provider()?;
        let contract = IPosts::new(address, &provider);

        let count = contract
            .likeCounts(U256::from(id))
            .call()
            .await
            .map_err(|e| EthereumSocialError::ContractCall(e.to_string()))?;

        Ok(crate::conversions::u256_to_u64(count))
    }

    async fn has_liked(&self, id: u64, viewer: &str) -> Result<bool> {
        let address = self.client.service_address(SocialService::Posts)?;
        let viewer = self.parse_account(viewer)?;
        let provider = self.client.create_provider()?;
        let contract = IPosts::new(address, &provider);

        contract
            .liked(U256::from(id), viewer)
            .call()
            .await
            .map_err(|e| EthereumSocialError::ContractCall(e.to_string()))
    }

    // ===== Posts - Write Operations =====

    async fn create_post(&self, content: &str) -> Result<String> {
        debug!("Creating post ({} chars)", content.len());

        let address = self.client.service_address(SocialService::Posts)?;
        let provider = self.client.create_provider_with_signer()?;
        let contract = IPosts::new(address, &provider);

        let pending = contract
            .createPost(content.to_string())
            .send()
            .await
            .map_err(|e| EthereumSocialError::Transaction(e.to_string()))?;

        let receipt = pending
            .with_required_confirmations(self.confirmations())
            .get_receipt()
            .await
            .map_err(|e| EthereumSocialError::Transaction(e.to_string()))?;

        if !receipt.status() {
            return Err(EthereumSocialError::Reverted(format!(
                "createPost tx 0x{:x}",
                receipt.transaction_hash
            )));
        }

        let tx_hash = self.format_tx_hash(receipt.transaction_hash);
        debug!("Post created with tx hash: {}", tx_hash);
        Ok(tx_hash)
    }

    async fn like_post(&self, id: u64) -> Result<String> {
        debug!("Liking post {}", id);

        let address = self.client.service_address(SocialService::Posts)?;
        let provider = self.client.create_provider_with_signer()?;
        let contract = IPosts::new(address, &provider);

        let pending = contract
            .likePost(U256::from(id))
            .send()
            .await
            .map_err(|e| EthereumSocialError::Transaction(e.to_string()))?;

        let receipt = pending
            .with_required_confirmations(self.confirmations())
            .get_receipt()
            .await
            .map_err(|e| EthereumSocialError::Transaction(e.to_string()))?;

        if !receipt.status() {
            return Err(EthereumSocialError::Reverted(format!(
                "likePost({}) tx 0x{:x}",
                id, receipt.transaction_hash
            )));
        }

        Ok(self.format_tx_hash(receipt.transaction_hash))
    }

    async fn unlike_post(&self, id: u64) -> Result<String> {
        debug!("Unliking post {}", id);

        let address = self.client.service_address(SocialService::Posts)?;
        let provider = self.client.create_provider_with_signer()?;
        let contract = IPosts::new(address, &provider);

        let pending = contract
            .unlikePost(U256::from(id))
            .send()
            .await
            .map_err(|e| EthereumSocialError::Transaction(e.to_string()))?;

        let receipt = pending
            .with_required_confirmations(self.confirmations())
            .get_receipt()
            .await
            .map_err(|e| EthereumSocialError::Transaction(e.to_string()))?;

        if !receipt.status() {
            return Err(EthereumSocialError::Reverted(format!(
                "unlikePost({}) tx 0x{:x}",
                id, receipt.transaction_hash
            )));
        }

        Ok(self.format_tx_hash(receipt.transaction_hash))
    }

    // ===== Comments =====

    async fn fetch_comments(&self, post_id: u64) -> Result<Vec<Comment>> {
        debug!("Fetching comments for post {}", post_id);

        let address = self.client.service_address(SocialService::Comments)?;
        let provider = self.client.create_provider()?;
        let contract = IComments::new(address, &provider);

        let ids = contract
            .getCommentsForPost(U256::from(post_id))
            .call()
            .await
            .map_err(|e| EthereumSocialError::ContractCall(e.to_string()))?;

        let fetches = ids.iter().map(|id| {
            let contract = &contract;
            let id = *id;
            async move {
                match contract.comments(id).call().await {
                    Ok(raw) => Some(comment_from_chain(raw)),
                    Err(e) => {
                        warn!("Skipping comment {}: detail read failed: {}", id, e);
                        None
                    }
                }
            }
        });

        let mut comments: Vec<Comment> =
            join_all(fetches).await.into_iter().flatten().collect();
        sort_newest_first(&mut comments);

        debug!("Hydrated {} of {} comments", comments.len(), ids.len());
        Ok(comments)
    }

    async fn add_comment(&self, post_id: u64, content: &str) -> Result<String> {
        debug!("Adding comment to post {}", post_id);

        let address = self.client.service_address(SocialService::Comments)?;
        let provider = self.client.create_provider_with_signer()?;
        let contract = IComments::new(address, &provider);

        let pending = contract
            .addComment(U256::from(post_id), content.to_string())
            .send()
            .await
            .map_err(|e| EthereumSocialError::Transaction(e.to_string()))?;

        let receipt = pending
            .with_required_confirmations(self.confirmations())
            .get_receipt()
            .await
            .map_err(|e| EthereumSocialError::Transaction(e.to_string()))?;

        if !receipt.status() {
            return Err(EthereumSocialError::Reverted(format!(
                "addComment({}) tx 0x{:x}",
                post_id, receipt.transaction_hash
            )));
        }

        Ok(self.format_tx_hash(receipt.transaction_hash))
    }

    // ===== Profiles =====

    async fn fetch_profile(&self, address_str: &str) -> Result<Option<Profile>> {
        debug!("Fetching profile for {}", address_str);

        let address = self.client.service_address(SocialService::Profiles)?;
        let user = self.parse_account(address_str)?;
        let provider = self.client.create_provider()?;
        let contract = IProfiles::new(address, &provider);

        let raw = contract
            .getProfile(user)
            .call()
            .await
            .map_err(|e| EthereumSocialError::ContractCall(e.to_string()))?;

        if !raw.exists {
            return Ok(None);
        }

        Ok(Some(profile_from_chain(raw)))
    }

    async fn update_profile(
        &self,
        username: &str,
        bio: &str,
        avatar: Option<&NftReference>,
    ) -> Result<String> {
        debug!("Upserting profile for {}", username);

        let address = self.client.service_address(SocialService::Profiles)?;
        let provider = self.client.create_provider_with_signer()?;
        let contract = IProfiles::new(address, &provider);

        let (avatar_contract, avatar_token_id) = match avatar {
            Some(reference) => (
                self.parse_account(&reference.contract)?,
                U256::from(reference.token_id),
            ),
            None => (Address::ZERO, U256::ZERO),
        };

        let pending = contract
            .updateProfile(
                username.to_string(),
                bio.to_string(),
                avatar_contract,
                avatar_token_id,
            )
            .send()
            .await
            .map_err(|e| EthereumSocialError::Transaction(e.to_string()))?;

        let receipt = pending
            .with_required_confirmations(self.confirmations())
            .get_receipt()
            .await
            .map_err(|e| EthereumSocialError::Transaction(e.to_string()))?;

        if !receipt.status() {
            return Err(EthereumSocialError::Reverted(format!(
                "updateProfile tx 0x{:x}",
                receipt.transaction_hash
            )));
        }

        Ok(self.format_tx_hash(receipt.transaction_hash))
    }

    // ===== Follow graph =====

    async fn is_following(&self, follower: &str, target: &str) -> Result<bool> {
        let address = self.client.service_address(SocialService::Follow)?;
        let follower = self.parse_account(follower)?;
        let target = self.parse_account(target)?;
        let provider = self.client.create_provider()?;
        let contract = IFollow::new(address, &provider);

        contract
            .isFollowing(follower, target)
            .call()
            .await
            .map_err(|e| EthereumSocialError::ContractCall(e.to_string()))
    }

    async fn follower_count(&self, address_str: &str) -> Result<u64> {
        let address = self.client.service_address(SocialService::Follow)?;
        let user = self.parse_account(address_str)?;
        let provider = self.client.create_provider()?;
        let contract = IFollow::new(address, &provider);

        let count = contract
            .followerCount(user)
            .call()
            .await
            .map_err(|e| EthereumSocialError::ContractCall(e.to_string()))?;

        Ok(crate::conversions::u256_to_u64(count))
    }

    async fn following_count(&self, address_str: &str) -> Result<u64> {
        let address = self.client.service_address(SocialService::Follow)?;
        let user = self.parse_account(address_str)?;
        let provider = self.client.create_provider()?;
        let contract = IFollow::new(address, &provider);

        let count = contract
            .followingCount(user)
            .call()
            .await
            .map_err(|e| EthereumSocialError::ContractCall(e.to_string()))?;

        Ok(crate::conversions::u256_to_u64(count))
    }

    async fn follow(&self, target: &str) -> Result<String> {
        debug!("Following {}", target);

        let address = self.client.service_address(SocialService::Follow)?;
        let target = self.parse_account(target)?;
        let provider = self.client.create_provider_with_signer()?;
        let contract = IFollow::new(address, &provider);

        let pending = contract
            .followUser(target)
            .send()
            .await
            .map_err(|e| EthereumSocialError::Transaction(e.to_string()))?;

        let receipt = pending
            .with_required_confirmations(self.confirmations())
            .get_receipt()
            .await
            .map_err(|e| EthereumSocialError::Transaction(e.to_string()))?;

        if !receipt.status() {
            return Err(EthereumSocialError::Reverted(format!(
                "followUser tx 0x{:x}",
                receipt.transaction_hash
            )));
        }

        Ok(self.format_tx_hash(receipt.transaction_hash))
    }

    async fn unfollow(&self, target: &str) -> Result<String> {
        debug!("Unfollowing {}", target);

        let address = self.client.service_address(SocialService::Follow)?;
        let target = self.parse_account(target)?;
        let provider = self.client.create_provider_with_signer()?;
        let contract = IFollow::new(address, &provider);

        let pending = contract
            .unfollowUser(target)
            .send()
            .await
            .map_err(|e| EthereumSocialError::Transaction(e.to_string()))?;

        let receipt = pending
            .with_required_confirmations(self.confirmations())
            .get_receipt()
            .await
            .map_err(|e| EthereumSocialError::Transaction(e.to_string()))?;

        if !receipt.status() {
            return Err(EthereumSocialError::Reverted(format!(
                "unfollowUser tx 0x{:x}",
                receipt.transaction_hash
            )));
        }

        Ok(self.format_tx_hash(receipt.transaction_hash))
    }
}
