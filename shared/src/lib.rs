use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod modal;
pub mod view;

pub use modal::{plan_account_open, plan_ledger_open, ModalEvent, ModalState, OpenPlan};
pub use view::{
    format_number, purchase_rows, AccountBlock, AccountView, DetailRow, ModalContent, PLACEHOLDER,
};

/// Loyalty account as returned by `GET /api/accounts/{id}`.
///
/// Every field is optional; the server omits or nulls whatever it does not
/// know, and fields this page never shows (customer id, timestamps, ledger
/// entries) are ignored on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountSummary {
    pub id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub account_number: Option<String>,
    pub current_points: Option<i64>,
    /// Account status such as `ACTIVE`, `BLOCKED` or `CLOSED`
    pub status: Option<String>,
    pub tier: Option<String>,
}

/// Purchase behind a ledger entry, from `GET /api/ledger/{id}/purchase`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PurchaseDetails {
    pub account_id: Option<i64>,
    pub restaurant_id: Option<i64>,
    pub purchase_number: Option<String>,
    /// Decimal amount; kept as a JSON number so it prints as the server sent it
    pub total_amount: Option<serde_json::Number>,
    pub currency: Option<String>,
    pub notes: Option<String>,
    pub description: Option<String>,
}

/// Failure of a single API call. Terminal for that call; nothing retries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with status {status}")]
    Status { status: u16 },
    #[error("failed to parse response: {0}")]
    Parse(String),
}

/// Path of the account lookup. `encoded_id` must already be a valid path segment.
pub fn account_path(encoded_id: &str) -> String {
    format!("/api/accounts/{}?includeLedger=false", encoded_id)
}

/// Path of the purchase lookup for a ledger entry.
pub fn purchase_path(encoded_ledger_id: &str) -> String {
    format!("/api/ledger/{}/purchase", encoded_ledger_id)
}

/// Pick the account to show: the input field wins, the body attribute is the fallback.
/// Only empty values count as missing; anything else is passed through untouched.
pub fn resolve_account_id(from_input: Option<&str>, from_body: Option<&str>) -> Option<String> {
    from_input
        .filter(|v| !v.is_empty())
        .or_else(|| from_body.filter(|v| !v.is_empty()))
        .map(str::to_string)
}

/// Delay before the reveal item at `index` becomes visible.
pub fn reveal_delay_ms(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(step_ms)
}
