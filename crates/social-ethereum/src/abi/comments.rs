//! Comments contract bindings

use alloy::sol;

sol! {
    #[allow(missing_docs)]
    #[sol(rpc)]
    #[derive(Debug)]
    interface IComments {
        event CommentAdded(uint256 indexed postId, uint256 commentId, address indexed author, string content, uint256 timestamp);

        function addComment(uint256 postId, string content) external returns (uint256);

        function getCommentsForPost(uint256 postId) external view returns (uint256[] memory);
        function comments(uint256 commentId) external view returns (
            uint256 id,
            uint256 postId,
            address author,
            string memory content,
            uint256 timestamp
        );
    }
}
