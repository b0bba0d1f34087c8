//! Profile endpoints

use crate::client::PaycekClient;
use crate::error::ApiResult;
use crate::payload::Payload;
use crate::response::ApiResponse;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Profiles API interface
#[derive(Clone)]
pub struct ProfilesApi {
    client: PaycekClient,
}

#[derive(Serialize)]
struct ProfileRef<'a> {
    profile_code: &'a str,
}

#[derive(Serialize)]
struct Withdraw<'a> {
    profile_code: &'a str,
    method: &'a str,
    amount: &'a str,
    details: &'a WithdrawDetails,
}

impl ProfilesApi {
    /// Create a new profiles API interface
    pub(crate) fn new(client: PaycekClient) -> Self {
        Self { client }
    }

    /// Fetch profile information
    ///
    /// POST profile_info/get
    pub async fn info(&self, profile_code: &str) -> ApiResult<ApiResponse<ProfileData>> {
        let payload = Payload::from_required(&ProfileRef { profile_code })?;
        self.client.call("profile_info/get", &payload).await
    }

    /// Withdraw funds from a profile
    ///
    /// POST profile/withdraw
    pub async fn withdraw(
        &self,
        profile_code: &str,
        method: &str,
        amount: &str,
        details: &WithdrawDetails,
        options: Option<&WithdrawOptions>,
    ) -> ApiResult<ApiResponse<WithdrawData>> {
        let payload = Payload::from_required(&Withdraw {
            profile_code,
            method,
            amount,
            details,
        })?
        .with_optional_opt(options)?;
        self.client.call("profile/withdraw", &payload).await
    }
}

/// Bank details for a withdrawal
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawDetails {
    /// Destination IBAN
    pub iban: String,
    /// Payment purpose
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    /// Reference model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Reference number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pnb: Option<String>,
}

impl WithdrawDetails {
    /// Details with only the IBAN set
    pub fn new(iban: impl Into<String>) -> Self {
        Self {
            iban: iban.into(),
            ..Self::default()
        }
    }
}

/// Optional fields for `profile/withdraw`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WithdrawOptions {
    /// Merchant-side withdrawal identifier
    pub id: Option<String>,
    /// Fields not covered above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Profile information
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileData {
    /// Profile code
    pub profile_code: Option<String>,
    /// Display name
    pub name: Option<String>,
    /// All remaining fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Withdrawal result
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WithdrawData {
    /// Withdrawal identifier
    pub id: Option<String>,
    /// Withdrawal status
    pub status: Option<String>,
    /// All remaining fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
