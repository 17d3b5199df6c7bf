//! Conversions from the Profiles contract struct to the canonical Profile

use crate::abi::profiles::IProfiles;
use crate::conversions::helpers::{address_to_string, optional_avatar};
use baseline_social_trait::Profile;

/// Build a canonical Profile from the contract's ProfileData struct
pub fn profile_from_chain(raw: IProfiles::ProfileData) -> Profile {
    Profile {
        owner: address_to_string(raw.user),
        username: raw.username,
        bio: raw.bio,
        avatar: optional_avatar(raw.avatarContract, raw.avatarTokenId),
        exists: raw.exists,
    }
}
