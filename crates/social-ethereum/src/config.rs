//! Configuration types for the EVM social backend

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the EVM social backend.
///
/// Each contract address is optional: a missing address means that service
/// is not deployed, and the sync adapter degrades it to demo mode rather
/// than treating it as a startup error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EthereumSocialConfig {
    /// RPC URL for the EVM node
    /// Example: "https://mainnet.base.org"
    pub rpc_url: String,

    /// Chain ID (8453=Base, 84532=Base Sepolia, 31337=local anvil/hardhat)
    pub chain_id: u64,

    /// Deployed Profiles contract address (0x-prefixed, 42 characters)
    pub profiles_address: Option<String>,

    /// Deployed Posts contract address (0x-prefixed, 42 characters)
    pub posts_address: Option<String>,

    /// Deployed Comments contract address (0x-prefixed, 42 characters)
    pub comments_address: Option<String>,

    /// Deployed Follow contract address (0x-prefixed, 42 characters)
    pub follow_address: Option<String>,

    /// Private key for signing transactions (optional for read-only use)
    /// Format: 0x-prefixed hex string (0x + 64 hex chars = 66 chars)
    pub private_key: Option<String>,

    /// Number of confirmations to wait for before a write is durable
    /// (default 1)
    pub confirmation_blocks: u64,
}

impl Default for EthereumSocialConfig {
    fn default() -> Self {
        Self {
            rpc_url: "http://localhost:8545".to_string(),
            chain_id: 31337, // Local anvil/hardhat
            profiles_address: None,
            posts_address: None,
            comments_address: None,
            follow_address: None,
            private_key: None,
            confirmation_blocks: 1,
        }
    }
}

fn validate_hex_address(field: &str, value: &str) -> Result<(), String> {
    if !value.starts_with("0x") {
        return Err(format!("{} must start with 0x", field));
    }
    if value.len() != 42 {
        return Err(format!(
            "{} must be 42 characters (0x + 40 hex), got {}",
            field,
            value.len()
        ));
    }
    if !value[2..].chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!(
            "{} must contain only hex characters after 0x",
            field
        ));
    }
    Ok(())
}

impl EthereumSocialConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, anyhow::Error> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_toml_str(toml: &str) -> Result<Self, anyhow::Error> {
        let config: Self = toml::from_str(toml)?;
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Configuration validation failed: {}", e))?;
        Ok(config)
    }

    /// Validate configuration
    ///
    /// Returns `Ok(())` if valid, otherwise returns error message
    pub fn validate(&self) -> Result<(), String> {
        if self.rpc_url.is_empty() {
            return Err("rpc_url cannot be empty".to_string());
        }

        if !self.rpc_url.starts_with("http://") && !self.rpc_url.starts_with("https://") {
            return Err("rpc_url must start with http:// or https://".to_string());
        }

        for (field, value) in [
            ("profiles_address", &self.profiles_address),
            ("posts_address", &self.posts_address),
            ("comments_address", &self.comments_address),
            ("follow_address", &self.follow_address),
        ] {
            if let Some(addr) = value {
                validate_hex_address(field, addr)?;
            }
        }

        if let Some(ref pk) = self.private_key {
            if !pk.is_empty() {
                if !pk.starts_with("0x") {
                    return Err("private_key must start with 0x".to_string());
                }
                if pk.len() != 66 {
                    return Err(format!(
                        "private_key must be 66 characters (0x + 64 hex), got {}",
                        pk.len()
                    ));
                }
                if !pk[2..].chars().all(|c| c.is_ascii_hexdigit()) {
                    return Err(
                        "private_key must contain only hex characters after 0x".to_string()
                    );
                }
            }
        }

        if self.confirmation_blocks == 0 {
            return Err("confirmation_blocks must be > 0".to_string());
        }

        if self.confirmation_blocks > 100 {
            return Err("confirmation_blocks too large (max 100)".to_string());
        }

        Ok(())
    }

    /// Check if configuration supports write operations (has private key)
    pub fn can_write(&self) -> bool {
        self.private_key
            .as_ref()
            .map(|pk| !pk.is_empty())
            .unwrap_or(false)
    }

    /// Check if at least one contract address is configured
    pub fn has_any_contract(&self) -> bool {
        self.profiles_address.is_some()
            || self.posts_address.is_some()
            || self.comments_address.is_some()
            || self.follow_address.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "0x1234567890123456789012345678901234567890";

    #[test]
    fn test_default_config_validation() {
        // All addresses optional; the bare default is valid.
        assert!(EthereumSocialConfig::default().validate().is_ok());
        assert!(!EthereumSocialConfig::default().has_any_contract());
    }

    #[test]
    fn test_empty_rpc_url() {
        let mut config = EthereumSocialConfig::default();
        config.rpc_url = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_rpc_url_scheme() {
        let mut config = EthereumSocialConfig::default();
        config.rpc_url = "ws://localhost:8545".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_contract_address_no_prefix() {
        let mut config = EthereumSocialConfig::default();
        config.posts_address = Some("1234567890123456789012345678901234567890".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_contract_address_length() {
        let mut config = EthereumSocialConfig::default();
        config.comments_address = Some("0x12345".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_contract_address_non_hex() {
        let mut config = EthereumSocialConfig::default();
        config.follow_address = Some("0x12345678901234567890123456789012345678XY".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_valid_addresses() {
        let mut config = EthereumSocialConfig::default();
        config.profiles_address = Some(ADDR.to_string());
        config.posts_address = Some(ADDR.to_string());
        assert!(config.validate().is_ok());
        assert!(config.has_any_contract());
    }

    #[test]
    fn test_valid_private_key() {
        let mut config = EthereumSocialConfig::default();
        config.private_key = Some(
            "0x1234567890123456789012345678901234567890123456789012345678901234".to_string(),
        );
        assert!(config.validate().is_ok());
        assert!(config.can_write());
    }

    #[test]
    fn test_invalid_private_key_length() {
        let mut config = EthereumSocialConfig::default();
        config.private_key = Some("0x1234".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_confirmation_blocks_bounds() {
        let mut config = EthereumSocialConfig::default();
        config.confirmation_blocks = 0;
        assert!(config.validate().is_err());
        config.confirmation_blocks = 101;
        assert!(config.validate().is_err());
        config.confirmation_blocks = 2;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_can_write() {
        let mut config = EthereumSocialConfig::default();
        assert!(!config.can_write());
        config.private_key = Some(String::new());
        assert!(!config.can_write());
        config.private_key = Some(
            "0x1234567890123456789012345678901234567890123456789012345678901234".to_string(),
        );
        assert!(config.can_write());
    }

    #[test]
    fn test_from_toml_str() {
        let toml = r#"
rpc_url = "https://sepolia.base.org"
chain_id = 84532
posts_address = "0x1234567890123456789012345678901234567890"
confirmation_blocks = 1
"#;
        let config = EthereumSocialConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.rpc_url, "https://sepolia.base.org");
        assert_eq!(config.chain_id, 84532);
        assert_eq!(config.posts_address.as_deref(), Some(ADDR));
        assert_eq!(config.profiles_address, None);
        assert_eq!(config.confirmation_blocks, 1);
    }
}
