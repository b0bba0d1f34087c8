//! Payment endpoints
//!
//! - `payment/open`: create a payment for a profile
//! - `payment/get`: fetch a payment by code
//! - `payment/update`: choose the source currency
//! - `payment/cancel`: cancel an open payment

use crate::client::PaycekClient;
use crate::error::{ApiError, ApiResult};
use crate::payload::Payload;
use crate::response::ApiResponse;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Payments API interface
#[derive(Clone)]
pub struct PaymentsApi {
    client: PaycekClient,
}

#[derive(Serialize)]
struct PaymentRef<'a> {
    payment_code: &'a str,
}

#[derive(Serialize)]
struct OpenPayment<'a> {
    profile_code: &'a str,
    dst_amount: &'a str,
}

#[derive(Serialize)]
struct UpdatePayment<'a> {
    payment_code: &'a str,
    src_currency: &'a str,
}

impl PaymentsApi {
    /// Create a new payments API interface
    pub(crate) fn new(client: PaycekClient) -> Self {
        Self { client }
    }

    /// Fetch a payment
    ///
    /// POST payment/get
    pub async fn get(&self, payment_code: &str) -> ApiResult<ApiResponse<PaymentData>> {
        let payload = Payload::from_required(&PaymentRef { payment_code })?;
        self.client.call("payment/get", &payload).await
    }

    /// Open a payment of `dst_amount` for a profile
    ///
    /// POST payment/open
    pub async fn open(
        &self,
        profile_code: &str,
        dst_amount: &str,
        options: Option<&OpenPaymentOptions>,
    ) -> ApiResult<ApiResponse<PaymentData>> {
        let payload = Payload::from_required(&OpenPayment {
            profile_code,
            dst_amount,
        })?
        .with_optional_opt(options)?;
        self.client.call("payment/open", &payload).await
    }

    /// Set the currency the customer pays in
    ///
    /// POST payment/update
    pub async fn update(
        &self,
        payment_code: &str,
        src_currency: &str,
        options: Option<&UpdatePaymentOptions>,
    ) -> ApiResult<ApiResponse<PaymentData>> {
        let payload = Payload::from_required(&UpdatePayment {
            payment_code,
            src_currency,
        })?
        .with_optional_opt(options)?;
        self.client.call("payment/update", &payload).await
    }

    /// Cancel a payment
    ///
    /// POST payment/cancel
    pub async fn cancel(&self, payment_code: &str) -> ApiResult<ApiResponse<PaymentData>> {
        let payload = Payload::from_required(&PaymentRef { payment_code })?;
        self.client.call("payment/cancel", &payload).await
    }

    /// Open a payment and return the URL to send the customer to
    pub async fn generate_url(
        &self,
        profile_code: &str,
        dst_amount: &str,
        options: Option<&OpenPaymentOptions>,
    ) -> ApiResult<String> {
        self.open(profile_code, dst_amount, options)
            .await?
            .into_result()?
            .payment_url
            .ok_or(ApiError::MissingField("payment_url"))
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Optional fields for `payment/open`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OpenPaymentOptions {
    /// Merchant-side payment identifier
    pub payment_id: Option<String>,
    /// Location the payment belongs to
    pub location_id: Option<String>,
    /// Line items shown on the payment page
    pub items: Option<Vec<Value>>,
    /// Customer email
    pub email: Option<String>,
    /// Redirect after a successful payment
    pub success_url: Option<String>,
    /// Redirect after a failed payment
    pub fail_url: Option<String>,
    /// Redirect when the customer goes back
    pub back_url: Option<String>,
    /// Callback after a successful payment
    pub success_url_callback: Option<String>,
    /// Callback after a failed payment
    pub fail_url_callback: Option<String>,
    /// Callback on every status change
    pub status_url_callback: Option<String>,
    /// Description shown to the customer
    pub description: Option<String>,
    /// Payment page language
    pub language: Option<String>,
    /// Generate a PDF receipt
    pub generate_pdf: Option<bool>,
    /// Free-form merchant fields
    pub client_fields: Option<Map<String, Value>>,
    /// Fields not covered above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl OpenPaymentOptions {
    /// Create empty options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the customer email
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the payment page language
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Set the status callback URL
    #[must_use]
    pub fn with_status_callback(mut self, url: impl Into<String>) -> Self {
        self.status_url_callback = Some(url.into());
        self
    }

    /// Add a field not covered by the typed options
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Optional fields for `payment/update`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePaymentOptions {
    /// Network/protocol of the source currency
    pub src_protocol: Option<String>,
    /// Fields not covered above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Payment as returned by the payment endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentData {
    /// Payment code
    pub payment_code: Option<String>,
    /// Hosted payment page
    pub payment_url: Option<String>,
    /// Payment status
    pub status: Option<String>,
    /// All remaining fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
