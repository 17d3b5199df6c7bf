//! Backend-agnostic error taxonomy for social operations

use crate::layer::SocialService;
use thiserror::Error;

/// Result type for backend-agnostic social operations
pub type SocialResult<T> = Result<T, SocialError>;

/// Errors a social backend can surface without being tied to a transport.
///
/// Chain-backed implementations define richer error types and convert into
/// this taxonomy at the adapter boundary; the demo backend uses it directly.
#[derive(Debug, Error)]
pub enum SocialError {
    /// The service has no deployed contract address configured
    #[error("{0} contract not configured")]
    NotConfigured(SocialService),

    /// A referenced entity does not exist
    #[error("{resource} not found: {id}")]
    NotFound {
        /// Entity kind ("post", "comment", "profile")
        resource: &'static str,
        /// Identifier that failed to resolve
        id: String,
    },

    /// Submitted content failed client-side validation
    #[error("Invalid content: {0}")]
    InvalidContent(String),

    /// A read call against the backend failed
    #[error("Read failed: {0}")]
    Read(String),

    /// A write against the backend failed; the mutation was not applied
    #[error("Write failed: {0}")]
    Write(String),
}

impl SocialError {
    /// Whether the adapter should degrade this service to demo mode
    pub fn is_not_configured(&self) -> bool {
        matches!(self, Self::NotConfigured(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = SocialError::NotConfigured(SocialService::Posts);
        assert_eq!(err.to_string(), "Posts contract not configured");

        let err = SocialError::NotFound {
            resource: "post",
            id: "7".to_string(),
        };
        assert_eq!(err.to_string(), "post not found: 7");
    }

    #[test]
    fn test_is_not_configured() {
        assert!(SocialError::NotConfigured(SocialService::Follow).is_not_configured());
        assert!(!SocialError::Read("boom".to_string()).is_not_configured());
    }
}
