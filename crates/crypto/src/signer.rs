//! Outbound request signing.

use crate::credentials::Credentials;
use crate::digest::AuthFields;
use crate::headers::{HEADER_KEY, HEADER_MAC, HEADER_NONCE};
use crate::nonce::{NonceSource, SystemClock};

/// Method used for signing when the call site does not override it
pub const DEFAULT_SIGN_METHOD: &str = "POST";

/// Content type used for signing when the call site does not override it
pub const DEFAULT_SIGN_CONTENT_TYPE: &str = "application/json";

/// The parts of an outbound request that go into its MAC.
///
/// Defaults to `POST` and `application/json`. Note that
/// [`CallbackRequest`](crate::CallbackRequest) defaults to `GET` and an empty
/// content type instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundRequest<'a> {
    endpoint: &'a str,
    body: &'a str,
    method: &'a str,
    content_type: &'a str,
}

impl<'a> OutboundRequest<'a> {
    /// Describe a request to `endpoint` (full path including the API prefix)
    /// carrying exactly `body`.
    #[must_use]
    pub fn new(endpoint: &'a str, body: &'a str) -> Self {
        Self {
            endpoint,
            body,
            method: DEFAULT_SIGN_METHOD,
            content_type: DEFAULT_SIGN_CONTENT_TYPE,
        }
    }

    /// Override the HTTP method.
    #[must_use]
    pub fn with_method(mut self, method: &'a str) -> Self {
        self.method = method;
        self
    }

    /// Override the content type.
    #[must_use]
    pub fn with_content_type(mut self, content_type: &'a str) -> Self {
        self.content_type = content_type;
        self
    }

    /// Request path
    #[must_use]
    pub fn endpoint(&self) -> &'a str {
        self.endpoint
    }

    /// HTTP method
    #[must_use]
    pub fn method(&self) -> &'a str {
        self.method
    }

    /// Content type
    #[must_use]
    pub fn content_type(&self) -> &'a str {
        self.content_type
    }
}

/// Authentication values to attach to an outbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedEnvelope {
    /// API key identifier
    pub api_key: String,
    /// Nonce mixed into the MAC
    pub nonce: String,
    /// Lowercase hex MAC
    pub mac: String,
}

impl SignedEnvelope {
    /// The three authentication headers as `(name, value)` pairs.
    #[must_use]
    pub fn headers(&self) -> [(&'static str, &str); 3] {
        [
            (HEADER_KEY, self.api_key.as_str()),
            (HEADER_NONCE, self.nonce.as_str()),
            (HEADER_MAC, self.mac.as_str()),
        ]
    }
}

/// Signs outbound requests with a fixed set of credentials.
///
/// The MAC covers the exact body string; the body must be sent verbatim.
#[derive(Debug, Clone)]
pub struct Signer<N: NonceSource = SystemClock> {
    credentials: Credentials,
    nonces: N,
}

impl Signer<SystemClock> {
    /// Create a signer that takes nonces from the system clock.
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self::with_nonce_source(credentials, SystemClock)
    }
}

impl<N: NonceSource> Signer<N> {
    /// Create a signer with a custom nonce source.
    pub fn with_nonce_source(credentials: Credentials, nonces: N) -> Self {
        Self {
            credentials,
            nonces,
        }
    }

    /// The credentials this signer uses
    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Take a fresh nonce and compute the MAC for `request`.
    #[must_use]
    pub fn sign(&self, request: &OutboundRequest<'_>) -> SignedEnvelope {
        let nonce = self.nonces.next_nonce();
        let mac = AuthFields {
            api_key: self.credentials.api_key(),
            api_secret: self.credentials.api_secret(),
            nonce: &nonce,
            http_method: request.method,
            endpoint: request.endpoint,
            content_type: request.content_type,
            body: request.body,
        }
        .digest();

        SignedEnvelope {
            api_key: self.credentials.api_key().to_string(),
            nonce,
            mac,
        }
    }
}
