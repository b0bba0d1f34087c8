//! Remote calls to the processing API

use crate::{CredentialArgs, OutputFormat};
use anyhow::{Context, Result};
use clap::Args;
use owo_colors::OwoColorize;
use paycek_api_client::endpoints::{OpenPaymentOptions, ReportOptions};
use paycek_api_client::{ApiResponse, PaycekClient};
use serde::Serialize;

/// Arguments for opening a payment
#[derive(Args)]
pub struct OpenArgs {
    /// Profile code
    pub profile_code: String,

    /// Amount in the profile currency, e.g. 10.00
    pub amount: String,

    /// Customer email
    #[arg(long)]
    pub email: Option<String>,

    /// Payment description
    #[arg(long)]
    pub description: Option<String>,

    /// Payment page language
    #[arg(long)]
    pub language: Option<String>,

    /// URL notified when the payment status changes
    #[arg(long)]
    pub status_callback: Option<String>,
}

impl OpenArgs {
    fn options(&self) -> OpenPaymentOptions {
        let mut options = OpenPaymentOptions::new();
        if let Some(email) = &self.email {
            options = options.with_email(email);
        }
        if let Some(description) = &self.description {
            options = options.with_description(description);
        }
        if let Some(language) = &self.language {
            options = options.with_language(language);
        }
        if let Some(url) = &self.status_callback {
            options = options.with_status_callback(url);
        }
        options
    }
}

fn client(creds: &CredentialArgs) -> Result<PaycekClient> {
    PaycekClient::with_config(creds.client_config()?).context("Failed to create API client")
}

/// Print a decoded response; a failure response yields `Ok(false)`
fn print_response<T: Serialize>(response: &ApiResponse<T>, format: OutputFormat) -> Result<bool> {
    let body = serde_json::to_string_pretty(response)?;
    match (format, response) {
        (OutputFormat::Json, _) => println!("{body}"),
        (OutputFormat::Text, ApiResponse::Success { .. }) => {
            println!("{}", "✓ OK".green());
            println!("{body}");
        }
        (OutputFormat::Text, ApiResponse::Failure(error)) => {
            println!("{} {}", "✗ API error:".red(), error.message());
        }
    }
    Ok(response.is_success())
}

pub async fn payment_get(creds: &CredentialArgs, payment_code: &str, format: OutputFormat) -> Result<bool> {
    let response = client(creds)?.payments().get(payment_code).await?;
    print_response(&response, format)
}

pub async fn payment_open(creds: &CredentialArgs, args: &OpenArgs, format: OutputFormat) -> Result<bool> {
    let options = args.options();
    let response = client(creds)?
        .payments()
        .open(&args.profile_code, &args.amount, Some(&options))
        .await?;
    print_response(&response, format)
}

pub async fn payment_cancel(
    creds: &CredentialArgs,
    payment_code: &str,
    format: OutputFormat,
) -> Result<bool> {
    let response = client(creds)?.payments().cancel(payment_code).await?;
    print_response(&response, format)
}

pub async fn payment_url(creds: &CredentialArgs, args: &OpenArgs, format: OutputFormat) -> Result<bool> {
    let options = args.options();
    let url = client(creds)?
        .payments()
        .generate_url(&args.profile_code, &args.amount, Some(&options))
        .await?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::json!({ "payment_url": url })),
        OutputFormat::Text => println!("{url}"),
    }
    Ok(true)
}

pub async fn profile_info(
    creds: &CredentialArgs,
    profile_code: &str,
    format: OutputFormat,
) -> Result<bool> {
    let response = client(creds)?.profiles().info(profile_code).await?;
    print_response(&response, format)
}

pub async fn reports(
    creds: &CredentialArgs,
    profile_code: &str,
    from: &str,
    to: &str,
    location: Option<&str>,
    format: OutputFormat,
) -> Result<bool> {
    let options = location.map(ReportOptions::for_location);
    let response = client(creds)?
        .reports()
        .get(profile_code, from, to, options.as_ref())
        .await?;
    print_response(&response, format)
}
