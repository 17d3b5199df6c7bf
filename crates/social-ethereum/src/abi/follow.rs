//! Follow contract bindings

use alloy::sol;

sol! {
    #[allow(missing_docs)]
    #[sol(rpc)]
    #[derive(Debug)]
    interface IFollow {
        event Followed(address indexed follower, address indexed following);
        event Unfollowed(address indexed follower, address indexed following);

        function followUser(address user) external;
        function unfollowUser(address user) external;

        function isFollowing(address follower, address user) external view returns (bool);
        function followerCount(address user) external view returns (uint256);
        function followingCount(address user) external view returns (uint256);
    }
}
