//! CLI command implementations
//!
//! Every command returns `Ok(true)` on success and `Ok(false)` for a
//! negative answer that is not an error, such as a MAC that does not verify.

pub mod api;
pub mod auth;

use crate::{BodyArgs, CredentialArgs};
use anyhow::{Context, Result};
use paycek_crypto::Credentials;
use std::fs;

impl CredentialArgs {
    /// Key and secret, or an error naming the missing one
    pub fn credentials(&self) -> Result<Credentials> {
        let (key, secret) = self.pair()?;
        Ok(Credentials::new(key, secret))
    }

    fn pair(&self) -> Result<(&str, &str)> {
        let key = self
            .api_key
            .as_deref()
            .context("API key not set (use --api-key or PAYCEK_API_KEY)")?;
        let secret = self
            .api_secret
            .as_deref()
            .context("API secret not set (use --api-secret or PAYCEK_API_SECRET)")?;
        Ok((key, secret))
    }

    /// Client configuration from the flags
    pub fn client_config(&self) -> Result<paycek_api_client::ClientConfig> {
        let (key, secret) = self.pair()?;
        let config = paycek_api_client::ClientConfig::new(key, secret);
        Ok(match &self.host {
            Some(host) => config.with_host(host),
            None => config,
        })
    }
}

impl BodyArgs {
    /// The body exactly as given
    pub fn read(&self) -> Result<String> {
        match (&self.body, &self.body_file) {
            (Some(body), _) => Ok(body.clone()),
            (None, Some(path)) => fs::read_to_string(path)
                .with_context(|| format!("Failed to read body from {}", path.display())),
            (None, None) => Ok(String::new()),
        }
    }
}
