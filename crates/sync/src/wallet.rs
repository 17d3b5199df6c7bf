//! Wallet session gateway
//!
//! The adapter does not implement a wallet; it talks to whatever session the
//! embedding application holds through this trait. Writes require a
//! connected session, and the adapter proactively requests connection (the
//! prompt) instead of failing silently.

use async_trait::async_trait;
use thiserror::Error;

/// Errors a wallet session can report
#[derive(Debug, Error)]
pub enum WalletError {
    /// The user declined the connection prompt
    #[error("connection request declined")]
    Declined,

    /// The wallet cannot switch networks programmatically
    #[error("wallet cannot switch networks")]
    SwitchUnsupported,

    /// Any other wallet failure
    #[error("wallet error: {0}")]
    Other(String),
}

/// A wallet session as seen by the adapter
#[async_trait]
pub trait WalletGateway: Send + Sync {
    /// Connected account address, `None` while disconnected
    fn address(&self) -> Option<String>;

    /// Prompt the user to connect; resolves to the connected address
    async fn request_connection(&self) -> Result<String, WalletError>;

    /// Chain id the session is currently on, `None` while disconnected
    fn active_chain_id(&self) -> Option<u64>;

    /// Ask the wallet to switch to `chain_id`
    async fn switch_chain(&self, chain_id: u64) -> Result<(), WalletError>;
}

/// Always-connected session backed by a local signing key.
///
/// Signing itself happens in the chain backend; this type only represents
/// the session state (address + chain) for a key the application holds, so
/// connection prompts and network switches trivially succeed.
#[derive(Debug, Clone)]
pub struct KeyWallet {
    address: String,
    chain_id: u64,
}

impl KeyWallet {
    /// Create a session for a locally held key
    pub fn new(address: impl Into<String>, chain_id: u64) -> Self {
        Self {
            address: address.into(),
            chain_id,
        }
    }
}

#[async_trait]
impl WalletGateway for KeyWallet {
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
        // A local key is not pinned to a wallet UI's network selection.
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_key_wallet_is_always_connected() {
        let wallet = KeyWallet::new("0x00000000000000000000000000000000000ba5e1", 8453);
        assert_eq!(
            wallet.address().as_deref(),
            Some("0x00000000000000000000000000000000000ba5e1")
        );
        assert_eq!(wallet.active_chain_id(), Some(8453));
        assert!(wallet.request_connection().await.is_ok());
        assert!(wallet.switch_chain(84532).await.is_ok());
    }
}
