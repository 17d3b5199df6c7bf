//! Contract ABI bindings module
//!
//! Alloy `sol!` bindings for the four BaseLine contracts. The interfaces are
//! declared inline (the Solidity build is an external service); tuple field
//! order is positional and must match the deployed ABI exactly.

pub mod comments;
pub mod follow;
pub mod posts;
pub mod profiles;

pub use comments::IComments;
pub use follow::IFollow;
pub use posts::IPosts;
pub use profiles::IProfiles;
