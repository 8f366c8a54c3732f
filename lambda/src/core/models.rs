use serde::Deserialize;
use serde_json::{json, Value};

/// Fallback used whenever the finding omits a field.
pub const MISSING_FIELD: &str = "N/A";

/// A GuardDuty finding as delivered by EventBridge. Fields the relay
/// does not read are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FindingEvent {
    pub detail: FindingDetail,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FindingDetail {
    #[serde(rename = "accountId")]
    pub account_id: Option<String>,
    pub region: Option<String>,
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub finding_type: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<String>,
}

impl FindingDetail {
    #[must_use]
    pub fn account_id(&self) -> &str {
        self.account_id.as_deref().unwrap_or(MISSING_FIELD)
    }

    #[must_use]
    pub fn region(&self) -> &str {
        self.region.as_deref().unwrap_or(MISSING_FIELD)
    }

    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(MISSING_FIELD)
    }

    #[must_use]
    pub fn finding_type(&self) -> &str {
        self.finding_type.as_deref().unwrap_or(MISSING_FIELD)
    }

    #[must_use]
    pub fn updated_at(&self) -> &str {
        self.updated_at.as_deref().unwrap_or(MISSING_FIELD)
    }
}

/// The fixed success payload returned once the call has been placed.
#[must_use]
pub fn call_placed_response() -> Value {
    json!({ "statusCode": 200, "body": "Called" })
}
