//! Canonical MAC digest.
//!
//! The digest is SHA3-512 over the authentication fields in a fixed order. Every
//! field is preceded by a single [`FIELD_SEPARATOR`] byte and one more separator
//! closes the stream:
//!
//! ```text
//! 00 api_key 00 api_secret 00 nonce 00 method 00 endpoint 00 content_type 00 body 00
//! ```
//!
//! Fields are not length-prefixed. Two different tuples can only hash the same
//! stream if some field contains a literal NUL byte, so callers must not put NUL
//! bytes in any field.

use sha3::{Digest, Sha3_512};

/// Byte written before each field and once after the last one.
pub const FIELD_SEPARATOR: u8 = 0x00;

/// Length of a rendered MAC: 64 digest bytes as lowercase hex.
pub const MAC_HEX_LEN: usize = 128;

/// Hash an ordered list of fields into a lowercase hex MAC.
///
/// Zero-length fields are valid and contribute only their separator.
pub fn canonical_digest(fields: &[&[u8]]) -> String {
    let mut hasher = Sha3_512::new();
    for field in fields {
        hasher.update([FIELD_SEPARATOR]);
        hasher.update(field);
    }
    hasher.update([FIELD_SEPARATOR]);
    hex::encode(hasher.finalize())
}

/// The authentication field tuple, in the order it is hashed.
///
/// Reordering these fields changes the MAC and breaks interoperability with the
/// processing backend.
#[derive(Debug, Clone, Copy)]
pub struct AuthFields<'a> {
    /// API key identifier
    pub api_key: &'a str,
    /// Shared API secret
    pub api_secret: &'a str,
    /// Freshness nonce (decimal milliseconds)
    pub nonce: &'a str,
    /// HTTP method, e.g. `POST`
    pub http_method: &'a str,
    /// Request path including the API prefix
    pub endpoint: &'a str,
    /// Content type of the body
    pub content_type: &'a str,
    /// Exact body string as sent on the wire
    pub body: &'a str,
}

impl<'a> AuthFields<'a> {
    /// Fields as raw UTF-8 bytes in hashing order.
    #[must_use]
    pub fn ordered(&self) -> [&'a [u8]; 7] {
        [
            self.api_key.as_bytes(),
            self.api_secret.as_bytes(),
            self.nonce.as_bytes(),
            self.http_method.as_bytes(),
            self.endpoint.as_bytes(),
            self.content_type.as_bytes(),
            self.body.as_bytes(),
        ]
    }

    /// Compute the MAC for this tuple.
    #[must_use]
    pub fn digest(&self) -> String {
        canonical_digest(&self.ordered())
    }
}
