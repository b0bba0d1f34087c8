//! Offline signing and verification

use crate::{BodyArgs, CredentialArgs, OutputFormat};
use anyhow::Result;
use owo_colors::OwoColorize;
use paycek_crypto::{
    CallbackHeaders, CallbackRequest, CallbackVerifier, FixedNonce, HEADER_MAC, HEADER_NONCE,
    OutboundRequest, SignedEnvelope, Signer,
};
use serde_json::json;
use tracing::debug;

/// Print the authentication headers for a request
pub fn sign(
    creds: &CredentialArgs,
    endpoint: &str,
    body: &BodyArgs,
    method: &str,
    content_type: &str,
    nonce: Option<String>,
    format: OutputFormat,
) -> Result<bool> {
    let credentials = creds.credentials()?;
    let body = body.read()?;
    let request = OutboundRequest::new(endpoint, &body)
        .with_method(method)
        .with_content_type(content_type);

    let envelope = match nonce {
        Some(nonce) => Signer::with_nonce_source(credentials, FixedNonce::new(nonce)).sign(&request),
        None => Signer::new(credentials).sign(&request),
    };
    debug!(endpoint, method, content_type, nonce = %envelope.nonce, "Signed request");

    print_envelope(&envelope, format);
    Ok(true)
}

fn print_envelope(envelope: &SignedEnvelope, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let headers: serde_json::Map<String, serde_json::Value> = envelope
                .headers()
                .into_iter()
                .map(|(name, value)| (name.to_string(), json!(value)))
                .collect();
            println!("{}", serde_json::Value::Object(headers));
        }
        OutputFormat::Text => {
            for (name, value) in envelope.headers() {
                println!("{}: {}", name.cyan(), value);
            }
        }
    }
}

/// Check a received nonce and MAC against the local credentials
#[allow(clippy::too_many_arguments)]
pub fn verify(
    creds: &CredentialArgs,
    endpoint: &str,
    body: &BodyArgs,
    nonce: &str,
    mac: &str,
    method: &str,
    content_type: &str,
    format: OutputFormat,
) -> Result<bool> {
    let verifier = CallbackVerifier::new(creds.credentials()?);
    let body = body.read()?;

    let headers = CallbackHeaders::from_pairs([(HEADER_NONCE, nonce), (HEADER_MAC, mac)]);
    let request = CallbackRequest::new(endpoint, &body)
        .with_method(method)
        .with_content_type(content_type);

    let outcome = verifier.check(&headers, &request);
    debug!(endpoint, method, content_type, ?outcome, "Verified callback");

    match format {
        OutputFormat::Json => {
            let reason = outcome.as_ref().err().map(ToString::to_string);
            println!("{}", json!({ "valid": outcome.is_ok(), "reason": reason }));
        }
        OutputFormat::Text => match &outcome {
            Ok(()) => println!("{} MAC is valid", "✓".green()),
            Err(e) => println!("{} {}", "✗".red(), e),
        },
    }

    Ok(outcome.is_ok())
}
