//! Signed client for the Paycek processing API
//!
//! This crate sends authenticated requests to the processing API and verifies
//! the callbacks it sends back.
//!
//! # Features
//!
//! - **Request signing**: every call carries `ApiKeyAuth-Key`, `ApiKeyAuth-Nonce`
//!   and `ApiKeyAuth-MAC` headers computed over the exact body sent
//! - **Typed endpoints**: payments, profiles, accounts and reports
//! - **Checked payloads**: optional fields can never overwrite required ones
//! - **Callback verification**: constant-time MAC check over received headers
//! - **Request correlation**: every call gets an `X-Request-ID` for tracing
//!
//! # Example
//!
//! ```rust,no_run
//! use paycek_api_client::{ClientConfig, PaycekClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PaycekClient::with_config(ClientConfig::new("api-key", "api-secret"))?;
//!
//!     let url = client.payments().generate_url("profile-code", "10.00", None).await?;
//!     println!("Pay at {url}");
//!
//!     let payment = client.payments().get("payment-code").await?.into_result()?;
//!     println!("Status: {:?}", payment.status);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Callbacks
//!
//! ```rust
//! use paycek_api_client::{CallbackRequest, ClientConfig, PaycekClient};
//! use reqwest::header::HeaderMap;
//!
//! let client = PaycekClient::with_config(ClientConfig::new("api-key", "api-secret")).unwrap();
//! let headers = HeaderMap::new();
//!
//! // Pass the method and content type the callback arrived with.
//! let request = CallbackRequest::new("/payment/callback", "{}")
//!     .with_method("POST")
//!     .with_content_type("application/json");
//!
//! // No auth headers: reject with 401.
//! assert!(!client.check_callback(&headers, &request));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod callback;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod payload;
pub mod response;

pub use client::PaycekClient;
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
pub use payload::Payload;
pub use response::{ApiResponse, ErrorPayload};

pub use paycek_crypto::{CallbackHeaders, CallbackRequest, Credentials, FixedNonce, NonceSource};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::client::PaycekClient;
    pub use crate::config::ClientConfig;
    pub use crate::endpoints::{
        AccountOptions, AccountsApi, NewAccount, OpenPaymentOptions, PaymentsApi, ProfilesApi,
        ReportOptions, ReportsApi, UpdatePaymentOptions, WithdrawDetails, WithdrawOptions,
    };
    pub use crate::error::{ApiError, ApiResult};
    pub use crate::response::ApiResponse;
    pub use paycek_crypto::CallbackRequest;
}
