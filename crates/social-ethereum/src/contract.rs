//! Chain client managing providers, signers and contract addresses

use crate::config::EthereumSocialConfig;
use crate::error::{EthereumSocialError, Result};
use alloy::network::EthereumWallet;
use alloy::primitives::Address;
use alloy::providers::{Provider, ProviderBuilder};
use alloy::signers::local::PrivateKeySigner;
use baseline_social_trait::SocialService;
use std::str::FromStr;

/// Chain client holding the parsed per-service contract addresses and the
/// connection details all operations share.
///
/// Providers are not cached; a new one is created for each operation.
pub struct ChainClient {
    profiles: Option<Address>,
    posts: Option<Address>,
    comments: Option<Address>,
    follow: Option<Address>,
    signer_address: Option<Address>,
    /// Configuration
    pub config: EthereumSocialConfig,
}

fn parse_address(field: &str, value: &str) -> Result<Address> {
    Address::from_str(value).map_err(|e| {
        EthereumSocialError::Configuration(format!("Invalid {} '{}': {}", field, value, e))
    })
}

impl ChainClient {
    /// Creates a new chain client from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configured contract address or the private
    /// key fails to parse.
    pub fn new(config: EthereumSocialConfig) -> Result<Self> {
        let profiles = config
            .profiles_address
            .as_deref()
            .map(|a| parse_address("profiles_address", a))
            .transpose()?;
        let posts = config
            .posts_address
            .as_deref()
            .map(|a| parse_address("posts_address", a))
            .transpose()?;
        let comments = config
            .comments_address
            .as_deref()
            .map(|a| parse_address("comments_address", a))
            .transpose()?;
        let follow = config
            .follow_address
            .as_deref()
            .map(|a| parse_address("follow_address", a))
            .transpose()?;

        let signer_address = match config.private_key.as_deref() {
            Some(pk) if !pk.is_empty() => {
                let signer = pk.parse::<PrivateKeySigner>().map_err(|e| {
                    EthereumSocialError::Configuration(format!("Invalid private key: {}", e))
                })?;
                Some(signer.address())
            }
            _ => None,
        };

        Ok(Self {
            profiles,
            posts,
            comments,
            follow,
            signer_address,
            config,
        })
    }

    /// Resolve the deployed address for a service.
    ///
    /// # Errors
    ///
    /// Returns [`EthereumSocialError::NotConfigured`] when the service has
    /// no address — the signal the adapter maps to demo mode.
    pub fn service_address(&self, service: SocialService) -> Result<Address> {
        let address = match service {
            SocialService::Profiles => self.profiles,
            SocialService::Posts => self.posts,
            SocialService::Comments => self.comments,
            SocialService::Follow => self.follow,
        };
        address.ok_or(EthereumSocialError::NotConfigured(service))
    }

    /// Check whether a service has a deployed address
    pub fn has_service(&self, service: SocialService) -> bool {
        self.service_address(service).is_ok()
    }

    /// Returns the chain ID from configuration
    pub fn chain_id(&self) -> u64 {
        self.config.chain_id
    }

    /// Checks if the client has a wallet for signing transactions
    pub fn has_wallet(&self) -> bool {
        self.signer_address.is_some()
    }

    /// Address of the configured signer, if any
    pub fn signer_address(&self) -> Option<Address> {
        self.signer_address
    }

    /// Create a read-only provider for contract calls
    pub fn create_provider(&self) -> Result<impl Provider> {
        let rpc_url = self.config.rpc_url.parse().map_err(|e| {
            EthereumSocialError::ProviderError(format!("Invalid RPC URL: {}", e))
        })?;

        Ok(ProviderBuilder::new().connect_http(rpc_url))
    }

    /// Create a provider with wallet for sending transactions
    ///
    /// # Errors
    ///
    /// Returns an error if no private key is configured or the RPC URL is
    /// invalid.
    pub fn create_provider_with_signer(&self) -> Result<impl Provider> {
        let private_key = self
            .config
            .private_key
            .as_deref()
            .filter(|pk| !pk.is_empty())
            .ok_or(EthereumSocialError::NoPrivateKey)?;

        let signer = private_key.parse::<PrivateKeySigner>().map_err(|e| {
            EthereumSocialError::WalletError(format!("Invalid private key: {}", e))
        })?;

        let wallet = EthereumWallet::from(signer);

        let rpc_url = self.config.rpc_url.parse().map_err(|e| {
            EthereumSocialError::ProviderError(format!("Invalid RPC URL: {}", e))
        })?;

        Ok(ProviderBuilder::new().wallet(wallet).connect_http(rpc_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> EthereumSocialConfig {
        EthereumSocialConfig {
            rpc_url: "http://localhost:8545".to_string(),
            chain_id: 31337,
            profiles_address: Some("0x5FbDB2315678afecb367f032d93F642f64180aa3".to_string()),
            posts_address: Some("0xe7f1725E7734CE288F8367e1Bb143E90bb3F0512".to_string()),
            comments_address: None,
            follow_address: None,
            private_key: None,
            confirmation_blocks: 1,
        }
    }

    #[test]
    fn test_chain_client_creation() {
        assert!(ChainClient::new(test_config()).is_ok());
    }

    #[test]
    fn test_invalid_contract_address() {
        let mut config = test_config();
        config.posts_address = Some("invalid".to_string());
        assert!(ChainClient::new(config).is_err());
    }

    #[test]
    fn test_service_address_routing() {
        let client = ChainClient::new(test_config()).unwrap();
        assert!(client.service_address(SocialService::Posts).is_ok());
        assert!(client.has_service(SocialService::Profiles));
        assert!(!client.has_service(SocialService::Comments));

        let err = client.service_address(SocialService::Follow).unwrap_err();
        assert!(matches!(
            err,
            EthereumSocialError::NotConfigured(SocialService::Follow)
        ));
    }

    #[test]
    fn test_client_methods() {
        let client = ChainClient::new(test_config()).unwrap();
        assert_eq!(client.chain_id(), 31337);
        assert!(!client.has_wallet());
        assert_eq!(client.signer_address(), None);
    }

    #[test]
    fn test_signer_address_derived_from_key() {
        let mut config = test_config();
        // Anvil's first dev account
        config.private_key = Some(
            "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80".to_string(),
        );
        let client = ChainClient::new(config).unwrap();
        assert!(client.has_wallet());
        assert_eq!(
            format!("0x{:x}", client.signer_address().unwrap()),
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
        );
    }
}
