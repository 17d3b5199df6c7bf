//! Cancellation tokens for in-flight operations
//!
//! Every adapter operation takes a token. A caller that no longer wants the
//! result (a discarded view) cancels it; the operation observes the flag at
//! its next suspension point and returns `SyncError::Cancelled` instead of
//! publishing a stale result.

use crate::error::{Result, SyncError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared cancellation flag, cheap to clone and hand to the in-flight task
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a live (non-cancelled) token
    pub fn new() -> Self {
        Self::default()
    }

    /// Signal that the result is no longer wanted
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Check whether the token has been cancelled
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Error out if the token has been cancelled
    pub fn ensure_active(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(SyncError::Cancelled)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_lifecycle() {
        let token = CancelToken::new();
        assert!(!token.is_cancelled());
        assert!(token.ensure_active().is_ok());

        let clone = token.clone();
        clone.cancel();
        assert!(token.is_cancelled());
        assert!(matches!(
            token.ensure_active().unwrap_err(),
            SyncError::Cancelled
        ));
    }
}
