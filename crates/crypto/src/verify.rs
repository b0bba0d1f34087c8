//! Inbound callback verification.

use crate::credentials::Credentials;
use crate::digest::AuthFields;
use crate::error::{Result, VerifyError};
use crate::headers::{CallbackHeaders, HEADER_MAC, HEADER_NONCE};
use crate::timing::constant_time_compare;

/// Method assumed for verification when the caller does not pass one
pub const DEFAULT_VERIFY_METHOD: &str = "GET";

/// Content type assumed for verification when the caller does not pass one
pub const DEFAULT_VERIFY_CONTENT_TYPE: &str = "";

/// The parts of a received callback that go into its MAC.
///
/// Defaults to `GET` with an empty content type, which is NOT what
/// [`OutboundRequest`](crate::OutboundRequest) defaults to. Callbacks are usually
/// `POST` with `application/json`; pass the method and content type the request
/// actually arrived with or verification fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackRequest<'a> {
    endpoint: &'a str,
    body: &'a str,
    method: &'a str,
    content_type: &'a str,
}

impl<'a> CallbackRequest<'a> {
    /// Describe a callback received on `endpoint` with exactly `body`.
    #[must_use]
    pub fn new(endpoint: &'a str, body: &'a str) -> Self {
        Self {
            endpoint,
            body,
            method: DEFAULT_VERIFY_METHOD,
            content_type: DEFAULT_VERIFY_CONTENT_TYPE,
        }
    }

    /// Set the HTTP method the callback arrived with.
    #[must_use]
    pub fn with_method(mut self, method: &'a str) -> Self {
        self.method = method;
        self
    }

    /// Set the content type the callback arrived with.
    #[must_use]
    pub fn with_content_type(mut self, content_type: &'a str) -> Self {
        self.content_type = content_type;
        self
    }

    /// Callback path
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

/// Verifies that callbacks were signed with the shared secret.
///
/// This is MAC verification only. Nonces are not remembered, so a captured
/// callback replays successfully; any freshness window has to be enforced by the
/// caller.
#[derive(Debug, Clone)]
pub struct CallbackVerifier {
    credentials: Credentials,
}

impl CallbackVerifier {
    /// Create a verifier for the given credentials.
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    /// Whether the callback is authentic.
    ///
    /// Every fault collapses to `false`; treat `false` as "do not trust".
    #[must_use]
    pub fn verify(&self, headers: &CallbackHeaders, request: &CallbackRequest<'_>) -> bool {
        self.check(headers, request).is_ok()
    }

    /// Verify and report why a callback was rejected.
    pub fn check(&self, headers: &CallbackHeaders, request: &CallbackRequest<'_>) -> Result<()> {
        let nonce = headers.get(HEADER_NONCE)?;
        let received_mac = headers.get(HEADER_MAC)?;

        let expected_mac = AuthFields {
            api_key: self.credentials.api_key(),
            api_secret: self.credentials.api_secret(),
            nonce,
            http_method: request.method,
            endpoint: request.endpoint,
            content_type: request.content_type,
            body: request.body,
        }
        .digest();

        if constant_time_compare(expected_mac.as_bytes(), received_mac.as_bytes()) {
            Ok(())
        } else {
            Err(VerifyError::MacMismatch)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nonce::FixedNonce;
    use crate::signer::{OutboundRequest, Signer};
    use proptest::prelude::*;

    const ENDPOINT: &str = "/processing/api/payment/get";
    const BODY: &str = r#"{"payment_code":"abc"}"#;
    const NONCE: &str = "1700000000000";
    const MAC: &str = "a92383ca2f28f9383aab965a73a8c5e379eab2a549f412b1f5e32a7c7e2a5653\
                       2799d7eeb3cf1650225756816ebe2b26990c81cd069ca4416c1ef6e9cac24e46";

    fn verifier() -> CallbackVerifier {
        CallbackVerifier::new(Credentials::new("k1", "s1"))
    }

    fn json_post(body: &str) -> CallbackRequest<'_> {
        CallbackRequest::new(ENDPOINT, body)
            .with_method("POST")
            .with_content_type("application/json")
    }

    fn headers(nonce: &str, mac: &str) -> CallbackHeaders {
        CallbackHeaders::from_pairs([("ApiKeyAuth-Nonce", nonce), ("ApiKeyAuth-MAC", mac)])
    }

    #[test]
    fn test_defaults() {
        let request = CallbackRequest::new(ENDPOINT, BODY);
        assert_eq!(request.method(), "GET");
        assert_eq!(request.content_type(), "");
        assert_eq!(request.endpoint(), ENDPOINT);
    }

    #[test]
    fn test_accepts_conformance_vector() {
        assert_eq!(verifier().check(&headers(NONCE, MAC), &json_post(BODY)), Ok(()));
    }

    #[test]
    fn test_round_trip_with_signer() {
        let credentials = Credentials::new("key-id", "shared-secret");
        let envelope = Signer::new(credentials.clone()).sign(&OutboundRequest::new(ENDPOINT, BODY));
        let received: CallbackHeaders = envelope.headers().into_iter().collect();

        assert!(CallbackVerifier::new(credentials).verify(&received, &json_post(BODY)));
    }

    #[test]
    fn test_verifier_default_method_rejects_post_signature() {
        let received = headers(NONCE, MAC);

        assert!(verifier().verify(&received, &json_post(BODY)));
        assert!(!verifier().verify(&received, &CallbackRequest::new(ENDPOINT, BODY)));
        assert!(!verifier().verify(
            &received,
            &CallbackRequest::new(ENDPOINT, BODY).with_content_type("application/json")
        ));
    }

    #[test]
    fn test_header_names_are_case_insensitive() {
        let received =
            CallbackHeaders::from_pairs([("APIKEYAUTH-NONCE", NONCE), ("apikeyauth-mac", MAC)]);
        assert!(verifier().verify(&received, &json_post(BODY)));
    }

    #[test]
    fn test_missing_nonce() {
        let received = CallbackHeaders::from_pairs([("ApiKeyAuth-MAC", MAC)]);
        assert_eq!(
            verifier().check(&received, &json_post(BODY)),
            Err(VerifyError::MissingHeader(HEADER_NONCE))
        );
        assert!(!verifier().verify(&received, &json_post(BODY)));
    }

    #[test]
    fn test_missing_mac() {
        let received = CallbackHeaders::from_pairs([("ApiKeyAuth-Nonce", NONCE)]);
        assert_eq!(
            verifier().check(&received, &json_post(BODY)),
            Err(VerifyError::MissingHeader(HEADER_MAC))
        );
    }

    #[test]
    fn test_flipped_mac_character() {
        let mut tampered = MAC.to_string();
        tampered.replace_range(0..1, "b");
        assert_eq!(
            verifier().check(&headers(NONCE, &tampered), &json_post(BODY)),
            Err(VerifyError::MacMismatch)
        );
    }

    #[test]
    fn test_altered_body() {
        let altered = r#"{"payment_code":"abd"}"#;
        assert!(!verifier().verify(&headers(NONCE, MAC), &json_post(altered)));
    }

    #[test]
    fn test_uppercase_mac_is_rejected() {
        let upper = MAC.to_ascii_uppercase();
        assert!(!verifier().verify(&headers(NONCE, &upper), &json_post(BODY)));
    }

    #[test]
    fn test_truncated_and_extended_mac() {
        assert!(!verifier().verify(&headers(NONCE, &MAC[..64]), &json_post(BODY)));
        let extended = format!("{MAC}00");
        assert!(!verifier().verify(&headers(NONCE, &extended), &json_post(BODY)));
    }

    #[test]
    fn test_wrong_secret() {
        let other = CallbackVerifier::new(Credentials::new("k1", "s2"));
        assert!(!other.verify(&headers(NONCE, MAC), &json_post(BODY)));
    }

    #[test]
    fn test_signer_with_fixed_nonce_round_trip() {
        let signer = Signer::with_nonce_source(Credentials::new("k1", "s1"), FixedNonce::new(NONCE));
        let envelope = signer.sign(&OutboundRequest::new(ENDPOINT, BODY));
        assert_eq!(envelope.mac, MAC);
    }

    proptest! {
        #[test]
        fn prop_round_trip(
            endpoint in "/[a-z_/]{0,40}",
            body in "[ -~čćžđš]{0,200}",
            method in "(GET|POST|PUT)",
            content_type in "[a-z/+-]{0,30}",
        ) {
            let credentials = Credentials::new("key", "secret");
            let envelope = Signer::new(credentials.clone()).sign(
                &OutboundRequest::new(&endpoint, &body)
                    .with_method(&method)
                    .with_content_type(&content_type),
            );
            let received: CallbackHeaders = envelope.headers().into_iter().collect();
            let request = CallbackRequest::new(&endpoint, &body)
                .with_method(&method)
                .with_content_type(&content_type);

            prop_assert!(CallbackVerifier::new(credentials).verify(&received, &request));
        }

        #[test]
        fn prop_body_tamper_detected(body in "[a-z0-9]{1,100}", index in any::<prop::sample::Index>()) {
            let credentials = Credentials::new("key", "secret");
            let envelope = Signer::new(credentials.clone()).sign(&OutboundRequest::new(ENDPOINT, &body));
            let received: CallbackHeaders = envelope.headers().into_iter().collect();

            let mut bytes = body.into_bytes();
            let i = index.index(bytes.len());
            bytes[i] = if bytes[i] == b'x' { b'y' } else { b'x' };
            let tampered = String::from_utf8(bytes).unwrap();

            prop_assert!(!CallbackVerifier::new(credentials).verify(&received, &json_post(&tampered)));
        }
    }
}
