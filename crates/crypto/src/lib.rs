//! Request authentication for the Paycek processing API.
//!
//! This crate provides:
//! - The canonical SHA3-512 MAC digest over the authentication fields
//! - Nonce generation from the wall clock
//! - Outbound request signing
//! - Inbound callback verification with a constant-time MAC comparison
//!
//! # Example
//!
//! ```rust
//! use paycek_crypto::{
//!     CallbackHeaders, CallbackRequest, CallbackVerifier, Credentials, OutboundRequest, Signer,
//! };
//!
//! let credentials = Credentials::new("key", "secret");
//! let body = r#"{"payment_code":"abc"}"#;
//!
//! let envelope = Signer::new(credentials.clone())
//!     .sign(&OutboundRequest::new("/processing/api/payment/get", body));
//!
//! let headers: CallbackHeaders = envelope.headers().into_iter().collect();
//! let request = CallbackRequest::new("/processing/api/payment/get", body)
//!     .with_method("POST")
//!     .with_content_type("application/json");
//!
//! assert!(CallbackVerifier::new(credentials).verify(&headers, &request));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod credentials;
mod digest;
mod error;
mod headers;
mod nonce;
mod signer;
mod timing;
mod verify;

pub use credentials::Credentials;
pub use digest::{canonical_digest, AuthFields, FIELD_SEPARATOR, MAC_HEX_LEN};
pub use error::{Result, VerifyError};
pub use headers::{CallbackHeaders, HEADER_KEY, HEADER_MAC, HEADER_NONCE};
pub use nonce::{FixedNonce, NonceSource, SystemClock};
pub use signer::{OutboundRequest, SignedEnvelope, Signer, DEFAULT_SIGN_CONTENT_TYPE, DEFAULT_SIGN_METHOD};
pub use timing::constant_time_compare;
pub use verify::{
    CallbackRequest, CallbackVerifier, DEFAULT_VERIFY_CONTENT_TYPE, DEFAULT_VERIFY_METHOD,
};
