//! Adapting HTTP header maps for callback verification

use paycek_crypto::CallbackHeaders;
use reqwest::header::HeaderMap;

/// Collect an HTTP header map into a case-insensitive [`CallbackHeaders`].
///
/// Repeated headers are kept, so a doubled `ApiKeyAuth-MAC` is rejected rather
/// than silently picking one of the values.
#[must_use]
pub fn to_callback_headers(headers: &HeaderMap) -> CallbackHeaders {
    headers
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_bytes()))
        .collect()
}
