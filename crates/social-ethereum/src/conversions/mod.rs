//! Type conversions between Solidity tuples and canonical entities

pub mod comment;
pub mod helpers;
pub mod post;
pub mod profile;

pub use comment::comment_from_chain;
pub use helpers::*;
pub use post::{post_exists, post_from_chain};
pub use profile::profile_from_chain;
