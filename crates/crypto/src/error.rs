//! Error types for callback verification.

use thiserror::Error;

/// Result type alias for verification steps.
pub type Result<T> = std::result::Result<T, VerifyError>;

/// Every reason a callback can fail authentication.
///
/// [`CallbackVerifier::verify`](crate::CallbackVerifier::verify) collapses all of
/// these to `false`; [`CallbackVerifier::check`](crate::CallbackVerifier::check)
/// hands them back for logging and tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    /// A required authentication header was not sent
    #[error("Missing header: {0}")]
    MissingHeader(&'static str),

    /// The same authentication header was sent more than once
    #[error("Duplicate header: {0}")]
    DuplicateHeader(&'static str),

    /// The header value is not valid UTF-8
    #[error("Header is not valid UTF-8: {0}")]
    InvalidEncoding(&'static str),

    /// The received MAC does not match the recomputed one
    #[error("MAC mismatch")]
    MacMismatch,
}
