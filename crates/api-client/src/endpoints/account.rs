//! Account endpoints

use crate::client::PaycekClient;
use crate::endpoints::profile::WithdrawDetails;
use crate::error::ApiResult;
use crate::payload::Payload;
use crate::response::ApiResponse;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Accounts API interface
#[derive(Clone)]
pub struct AccountsApi {
    client: PaycekClient,
}

#[derive(Serialize)]
struct AccountWithPassword<'a> {
    password: &'a str,
    #[serde(flatten)]
    account: &'a NewAccount,
}

impl AccountsApi {
    /// Create a new accounts API interface
    pub(crate) fn new(client: PaycekClient) -> Self {
        Self { client }
    }

    /// Create an account with a profile
    ///
    /// POST account/create
    pub async fn create(
        &self,
        account: &NewAccount,
        options: Option<&AccountOptions>,
    ) -> ApiResult<ApiResponse<AccountData>> {
        let payload = Payload::from_required(account)?.with_optional_opt(options)?;
        self.client.call("account/create", &payload).await
    }

    /// Create an account that can log in with `password`
    ///
    /// POST account/create_with_password
    pub async fn create_with_password(
        &self,
        account: &NewAccount,
        password: &str,
        options: Option<&AccountOptions>,
    ) -> ApiResult<ApiResponse<AccountData>> {
        let payload = Payload::from_required(&AccountWithPassword { password, account })?
            .with_optional_opt(options)?;
        self.client.call("account/create_with_password", &payload).await
    }
}

/// Required fields for account creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAccount {
    /// Account email
    pub email: String,
    /// Legal name
    pub name: String,
    /// Street address
    pub street: String,
    /// City
    pub city: String,
    /// Country code
    pub country: String,
    /// Currency of the created profile
    pub profile_currency: String,
    /// Payout method for automatic withdrawals
    pub profile_automatic_withdraw_method: String,
    /// Payout details for automatic withdrawals
    pub profile_automatic_withdraw_details: WithdrawDetails,
}

/// Optional fields for account creation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountOptions {
    /// Account type
    #[serde(rename = "type")]
    pub account_type: Option<String>,
    /// Personal identification number (OIB)
    pub oib: Option<String>,
    /// VAT number
    pub vat: Option<String>,
    /// Profile display name
    pub profile_name: Option<String>,
    /// Profile contact email
    pub profile_email: Option<String>,
    /// Profile type
    pub profile_type: Option<String>,
    /// Fields not covered above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Created account
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountData {
    /// Code of the profile created with the account
    pub profile_code: Option<String>,
    /// All remaining fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
