//! Freshness nonces.

use chrono::Utc;
use std::sync::Arc;

/// Source of the nonce mixed into each outbound MAC.
///
/// Nonces are freshness markers only. They are not unique across clock
/// adjustments and must not be used to deduplicate requests.
pub trait NonceSource: Send + Sync {
    /// Produce the nonce for the next request.
    fn next_nonce(&self) -> String;
}

impl<T: NonceSource + ?Sized> NonceSource for Arc<T> {
    fn next_nonce(&self) -> String {
        (**self).next_nonce()
    }
}

/// Unix time in whole milliseconds, rendered as a base-10 integer.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl NonceSource for SystemClock {
    fn next_nonce(&self) -> String {
        Utc::now().timestamp_millis().to_string()
    }
}

/// Always returns the same nonce.
///
/// Useful for reproducing a MAC computed elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedNonce(pub String);

impl FixedNonce {
    /// Create a fixed nonce source.
    pub fn new(nonce: impl Into<String>) -> Self {
        Self(nonce.into())
    }
}

impl NonceSource for FixedNonce {
    fn next_nonce(&self) -> String {
        self.0.clone()
    }
}
