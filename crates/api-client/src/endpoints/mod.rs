//! Endpoint-specific API implementations
//!
//! Each module provides a typed interface for a set of processing API endpoints.
//! Every method builds the required fields, overlays the optional ones and hands
//! the payload to [`PaycekClient::call`](crate::PaycekClient::call).
//!
//! | Module | Endpoints |
//! |--------|-----------|
//! | `payment` | `payment/open`, `payment/get`, `payment/update`, `payment/cancel` |
//! | `profile` | `profile_info/get`, `profile/withdraw` |
//! | `account` | `account/create`, `account/create_with_password` |
//! | `reports` | `reports/get` |

pub mod account;
pub mod payment;
pub mod profile;
pub mod reports;

pub use account::{AccountData, AccountOptions, AccountsApi, NewAccount};
pub use payment::{OpenPaymentOptions, PaymentData, PaymentsApi, UpdatePaymentOptions};
pub use profile::{ProfileData, ProfilesApi, WithdrawData, WithdrawDetails, WithdrawOptions};
pub use reports::{ReportOptions, ReportsApi};
