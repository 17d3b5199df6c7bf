//! Posts contract bindings

use alloy::sol;

sol! {
    #[allow(missing_docs)]
    #[sol(rpc)]
    #[derive(Debug)]
    interface IPosts {
        event PostCreated(uint256 indexed id, address indexed author, string content, uint256 timestamp);
        event PostLiked(uint256 indexed id, address indexed liker);
        event PostUnliked(uint256 indexed id, address indexed liker);

        function createPost(string content) external returns (uint256);
        function likePost(uint256 id) external;
        function unlikePost(uint256 id) external;

        function getAllPosts() external view returns (uint256[] memory);
        function getPost(uint256 postId) external view returns (
            uint256 id,
            address author,
            string memory content,
            uint256 timestamp,
            uint256 likeCount,
            uint256 commentCount,
            bool exists
        );
        function likeCounts(uint256 id) external view returns (uint256);
        function liked(uint256 id, address viewer) external view returns (bool);
    }
}
