//! Reporting endpoints

use crate::client::PaycekClient;
use crate::error::ApiResult;
use crate::payload::Payload;
use crate::response::ApiResponse;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Reports API interface
#[derive(Clone)]
pub struct ReportsApi {
    client: PaycekClient,
}

#[derive(Serialize)]
struct ReportRange<'a> {
    profile_code: &'a str,
    datetime_from: &'a str,
    datetime_to: &'a str,
}

impl ReportsApi {
    /// Create a new reports API interface
    pub(crate) fn new(client: PaycekClient) -> Self {
        Self { client }
    }

    /// Fetch the report for a profile between two timestamps
    ///
    /// POST reports/get
    pub async fn get(
        &self,
        profile_code: &str,
        datetime_from: &str,
        datetime_to: &str,
        options: Option<&ReportOptions>,
    ) -> ApiResult<ApiResponse<Value>> {
        let payload = Payload::from_required(&ReportRange {
            profile_code,
            datetime_from,
            datetime_to,
        })?
        .with_optional_opt(options)?;
        self.client.call("reports/get", &payload).await
    }
}

/// Optional fields for `reports/get`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportOptions {
    /// Restrict the report to one location
    pub location_id: Option<String>,
    /// Fields not covered above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ReportOptions {
    /// Options restricted to one location
    pub fn for_location(location_id: impl Into<String>) -> Self {
        Self {
            location_id: Some(location_id.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_range_with_location() {
        let payload = Payload::from_required(&ReportRange {
            profile_code: "profile-1",
            datetime_from: "2024-01-01T00:00:00",
            datetime_to: "2024-02-01T00:00:00",
        })
        .unwrap()
        .with_optional(&ReportOptions::for_location("loc-7"))
        .unwrap();

        assert_eq!(payload.len(), 4);
        assert_eq!(payload.get("location_id"), Some(&json!("loc-7")));
    }

    #[test]
    fn test_default_options_add_nothing() {
        let payload = Payload::from_required(&ReportRange {
            profile_code: "profile-1",
            datetime_from: "a",
            datetime_to: "b",
        })
        .unwrap()
        .with_optional(&ReportOptions::default())
        .unwrap();

        assert_eq!(payload.len(), 3);
    }
}
