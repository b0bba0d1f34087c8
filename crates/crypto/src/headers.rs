//! Authentication header names and case-insensitive callback header lookup.

use crate::error::{Result, VerifyError};
use std::collections::HashMap;

/// Header carrying the API key identifier
pub const HEADER_KEY: &str = "ApiKeyAuth-Key";

/// Header carrying the nonce
pub const HEADER_NONCE: &str = "ApiKeyAuth-Nonce";

/// Header carrying the MAC
pub const HEADER_MAC: &str = "ApiKeyAuth-MAC";

/// Headers received with a callback, keyed case-insensitively.
///
/// Values are kept as raw bytes; UTF-8 is only checked when a value is read. A
/// name that appears more than once (in any casing) is remembered as ambiguous
/// and reading it fails.
#[derive(Debug, Clone, Default)]
pub struct CallbackHeaders {
    values: HashMap<String, Vec<Vec<u8>>>,
}

impl CallbackHeaders {
    /// Create an empty header collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(name, value)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<[u8]>,
    {
        pairs.into_iter().collect()
    }

    /// Add a header. Names are folded to ASCII lowercase.
    pub fn insert(&mut self, name: impl AsRef<str>, value: impl AsRef<[u8]>) {
        self.values
            .entry(name.as_ref().to_ascii_lowercase())
            .or_default()
            .push(value.as_ref().to_vec());
    }

    /// Number of distinct header names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no headers were supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Read a single header value as UTF-8.
    ///
    /// `name` is one of the `HEADER_*` constants and is matched ignoring case.
    pub fn get(&self, name: &'static str) -> Result<&str> {
        match self.values.get(&name.to_ascii_lowercase()).map(Vec::as_slice) {
            None | Some([]) => Err(VerifyError::MissingHeader(name)),
            Some([value]) => {
                std::str::from_utf8(value).map_err(|_| VerifyError::InvalidEncoding(name))
            }
            Some(_) => Err(VerifyError::DuplicateHeader(name)),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for CallbackHeaders
where
    K: AsRef<str>,
    V: AsRef<[u8]>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = Self::new();
        for (name, value) in iter {
            headers.insert(name, value);
        }
        headers
    }
}
