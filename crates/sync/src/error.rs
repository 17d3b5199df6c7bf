//! Error types for the sync adapter

use baseline_social_trait::SocialError;
use thiserror::Error;

/// Result type alias for sync adapter operations
pub type Result<T> = std::result::Result<T, SyncError>;

/// Errors the sync adapter surfaces to its caller.
///
/// None of these are fatal to the process; the adapter has already degraded
/// to demo data or rolled back the optimistic patch by the time one is
/// returned.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Configuration error (bad env var, malformed address)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Wallet is not connected and the connection prompt was declined
    #[error("Wallet not connected")]
    WalletNotConnected,

    /// Wallet is on the wrong chain and could not be switched
    #[error("Wrong network: wallet on chain {actual}, expected {expected}")]
    WrongNetwork {
        /// Chain id the adapter is configured for
        expected: u64,
        /// Chain id the wallet session reports
        actual: u64,
    },

    /// Submitted content is empty or whitespace-only
    #[error("Content cannot be empty")]
    EmptyContent,

    /// Submitted content exceeds the length limit
    #[error("Content too long: {len} characters (max {max})")]
    ContentTooLong {
        /// Submitted length in characters
        len: usize,
        /// Maximum allowed length
        max: usize,
    },

    /// A referenced entity does not exist
    #[error("{resource} not found: {id}")]
    NotFound {
        /// Entity kind
        resource: &'static str,
        /// Identifier that failed to resolve
        id: String,
    },

    /// A read against the backend failed (and no demo fallback applied)
    #[error("Read failed: {0}")]
    Read(String),

    /// A write against the backend failed; the mutation was not applied
    #[error("Write failed: {0}")]
    Write(String),

    /// The operation was cancelled by its caller; no notification is raised
    #[error("Operation cancelled")]
    Cancelled,
}

impl From<SocialError> for SyncError {
    fn from(err: SocialError) -> Self {
        match err {
            SocialError::NotFound { resource, id } => SyncError::NotFound { resource, id },
            SocialError::NotConfigured(service) => {
                SyncError::Config(format!("{} contract not configured", service))
            }
            SocialError::InvalidContent(msg) => SyncError::Write(msg),
            SocialError::Read(msg) => SyncError::Read(msg),
            SocialError::Write(msg) => SyncError::Write(msg),
        }
    }
}
