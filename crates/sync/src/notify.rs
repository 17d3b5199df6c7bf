//! User-visible notifications
//!
//! The adapter never fails silently: every degraded read, rejected write or
//! required wallet action is surfaced through the `Notifier` the embedding
//! UI supplies. Cancellations are the one exception — the caller asked for
//! silence.

use std::fmt;

/// Severity of a user-visible notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Neutral information ("connect your wallet")
    Info,
    /// A mutation settled successfully
    Success,
    /// Something failed; the operation was not applied
    Error,
}

impl fmt::Display for NoticeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Success => write!(f, "success"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Sink for transient user-visible notifications
pub trait Notifier: Send + Sync {
    /// Surface one notice to the user
    fn notify(&self, level: NoticeLevel, message: &str);
}

/// Default notifier that routes notices into the tracing log
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        match level {
            NoticeLevel::Info => tracing::info!("{}", message),
            NoticeLevel::Success => tracing::info!("✅ {}", message),
            NoticeLevel::Error => tracing::error!("{}", message),
        }
    }
}
