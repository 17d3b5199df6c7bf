//! Helper functions for type conversions between Solidity and Rust types

use alloy::primitives::{Address, U256};
use baseline_social_trait::NftReference;

/// Convert Alloy Address to hex string with 0x prefix
pub fn address_to_string(addr: Address) -> String {
    format!("0x{:x}", addr)
}

/// Convert a Solidity uint256 counter/timestamp to u64.
/// Safely handles overflow by capping at u64::MAX.
pub fn u256_to_u64(value: U256) -> u64 {
    if value > U256::from(u64::MAX) {
        u64::MAX
    } else {
        value.to::<u64>()
    }
}

/// Convert the avatar (contract, tokenId) pair to an optional reference.
/// The zero address means "no avatar set".
pub fn optional_avatar(contract: Address, token_id: U256) -> Option<NftReference> {
    if contract == Address::ZERO {
        None
    } else {
        Some(NftReference {
            contract: address_to_string(contract),
            token_id: u256_to_u64(token_id),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_to_string() {
        assert_eq!(
            address_to_string(Address::ZERO),
            "0x0000000000000000000000000000000000000000"
        );
    }

    #[test]
    fn test_u256_to_u64() {
        assert_eq!(u256_to_u64(U256::from(1000)), 1000);
        assert_eq!(u256_to_u64(U256::from(u64::MAX)), u64::MAX);
        assert_eq!(u256_to_u64(U256::from(u128::MAX)), u64::MAX);
    }

    #[test]
    fn test_optional_avatar() {
        assert_eq!(optional_avatar(Address::ZERO, U256::from(7)), None);

        let contract = Address::repeat_byte(0x11);
        let avatar = optional_avatar(contract, U256::from(7)).unwrap();
        assert_eq!(avatar.token_id, 7);
        assert_eq!(avatar.contract, address_to_string(contract));
    }
}
