//! Demo Social Backend
//!
//! In-memory implementation of the `Social` trait from
//! `baseline-social-trait`, seeded with a fixed sample record set. The sync
//! adapter serves this backend whenever a service has no configured contract
//! address or a live list read fails, so the application is always
//! interactive.

pub mod social;
pub mod store;

pub use social::DemoSocial;
pub use store::{
    DemoStore, DEMO_FRIEND, DEMO_IDENTITY, DEMO_MODE_CONTENT, DEMO_WELCOME_CONTENT,
};

/// Re-export the Social trait for convenience
pub use baseline_social_trait::Social;
