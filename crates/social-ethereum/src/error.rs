//! Error types for the EVM social backend

use baseline_social_trait::{SocialError, SocialService};
use thiserror::Error;

/// Result type alias for EVM social operations
pub type Result<T> = std::result::Result<T, EthereumSocialError>;

/// Errors that can occur in the EVM social backend
#[derive(Debug, Error)]
pub enum EthereumSocialError {
    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The service has no deployed contract address configured
    #[error("{0} contract address not configured")]
    NotConfigured(SocialService),

    /// Contract call (read operation) failed
    #[error("Contract call failed: {0}")]
    ContractCall(String),

    /// Transaction (write operation) failed to submit or settle
    #[error("Transaction failed: {0}")]
    Transaction(String),

    /// Transaction was mined but reverted
    #[error("Transaction reverted: {0}")]
    Reverted(String),

    /// RPC connection or network error
    #[error("RPC error: {0}")]
    Rpc(String),

    /// Invalid Ethereum address format
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// No private key configured for write operations
    #[error("No private key configured - write operations require private_key in config")]
    NoPrivateKey,

    /// Wallet/signer error
    #[error("Wallet error: {0}")]
    WalletError(String),

    /// Provider creation or connection error
    #[error("Provider error: {0}")]
    ProviderError(String),

    /// Type conversion error
    #[error("Conversion error: {0}")]
    Conversion(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Generic error from anyhow
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EthereumSocialError {
    /// Check if this error indicates a configuration problem.
    ///
    /// Configuration problems degrade the affected service to demo mode
    /// instead of surfacing a failure.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::Configuration(_)
                | Self::NotConfigured(_)
                | Self::NoPrivateKey
                | Self::InvalidAddress(_)
        )
    }

    /// Check if this error indicates a network problem
    pub fn is_network_error(&self) -> bool {
        matches!(self, Self::Rpc(_) | Self::ProviderError(_) | Self::Io(_))
    }
}

impl From<EthereumSocialError> for SocialError {
    fn from(err: EthereumSocialError) -> Self {
        match err {
            EthereumSocialError::NotConfigured(service) => SocialError::NotConfigured(service),
            EthereumSocialError::ContractCall(msg) | EthereumSocialError::Rpc(msg) => {
                SocialError::Read(msg)
            }
            EthereumSocialError::Transaction(msg) | EthereumSocialError::Reverted(msg) => {
                SocialError::Write(msg)
            }
            other => SocialError::Write(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_configuration_error() {
        assert!(EthereumSocialError::NotConfigured(SocialService::Posts)
            .is_configuration_error());
        assert!(EthereumSocialError::NoPrivateKey.is_configuration_error());
        assert!(!EthereumSocialError::Rpc("down".to_string()).is_configuration_error());
    }

    #[test]
    fn test_is_network_error() {
        assert!(EthereumSocialError::Rpc("down".to_string()).is_network_error());
        assert!(!EthereumSocialError::NoPrivateKey.is_network_error());
    }

    #[test]
    fn test_into_social_error() {
        let err: SocialError =
            EthereumSocialError::NotConfigured(SocialService::Comments).into();
        assert!(err.is_not_configured());

        let err: SocialError = EthereumSocialError::ContractCall("eth_call".to_string()).into();
        assert!(matches!(err, SocialError::Read(_)));
    }
}
