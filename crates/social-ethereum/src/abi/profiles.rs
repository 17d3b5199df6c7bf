//! Profiles contract bindings

use alloy::sol;

sol! {
    #[allow(missing_docs)]
    #[sol(rpc)]
    #[derive(Debug)]
    interface IProfiles {
        struct ProfileData {
            address user;
            string username;
            string bio;
            address avatarContract;
            uint256 avatarTokenId;
            bool exists;
        }

        event ProfileUpdated(address indexed user, string username, string bio, address avatarContract, uint256 avatarTokenId);

        function updateProfile(string username, string bio, address avatarContract, uint256 avatarTokenId) external;

        function getProfile(address user) external view returns (ProfileData memory);
    }
}
