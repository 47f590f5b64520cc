use crate::{AccountSummary, ApiError, PurchaseDetails};

/// Shown for ledger values that are null, absent or empty.
pub const PLACEHOLDER: &str = "-";

pub const ACCOUNT_MISSING_MESSAGE: &str = "Please load an account first in the Dashboard";
pub const ACCOUNT_LOADING_MESSAGE: &str = "Loading account information...";
pub const ACCOUNT_ERROR_MESSAGE: &str = "Error loading account information";
pub const PURCHASE_LOADING_MESSAGE: &str = "Loading purchase details...";
pub const PURCHASE_UNAVAILABLE_MESSAGE: &str =
    "No purchase details available for this ledger entry.";

/// One block of the account profile.
#[derive(Debug, Clone, PartialEq)]
pub enum AccountBlock {
    /// Labeled single value (name, profile id, account number)
    Field { label: &'static str, value: String },
    /// The highlighted points balance
    Points { label: &'static str, value: i64 },
    /// Status and tier pills; at least one pill is present
    Badges { label: &'static str, pills: Vec<String> },
}

/// Account profile as an ordered list of blocks. Missing data means a missing block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountView {
    pub blocks: Vec<AccountBlock>,
}

impl AccountView {
    pub fn from_account(account: &AccountSummary) -> Self {
        let mut blocks = Vec::new();

        if let (Some(first), Some(last)) = (
            non_empty(account.first_name.as_deref()),
            non_empty(account.last_name.as_deref()),
        ) {
            blocks.push(AccountBlock::Field {
                label: "Customer Name",
                value: format!("{} {}", first, last),
            });
        }

        if let Some(id) = account.id.filter(|id| *id != 0) {
            blocks.push(AccountBlock::Field {
                label: "Profile ID",
                value: id.to_string(),
            });
        }

        if let Some(number) = non_empty(account.account_number.as_deref()) {
            blocks.push(AccountBlock::Field {
                label: "Account Number",
                value: number.to_string(),
            });
        }

        if let Some(points) = account.current_points {
            blocks.push(AccountBlock::Points {
                label: "Current Points",
                value: points,
            });
        }

        let pills: Vec<String> = [account.status.as_deref(), account.tier.as_deref()]
            .into_iter()
            .filter_map(non_empty)
            .map(str::to_string)
            .collect();
        if !pills.is_empty() {
            blocks.push(AccountBlock::Badges {
                label: "Status & Tier",
                pills,
            });
        }

        Self { blocks }
    }

    pub fn has_badges(&self) -> bool {
        self.blocks
            .iter()
            .any(|block| matches!(block, AccountBlock::Badges { .. }))
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.blocks
            .iter()
            .map(|block| match block {
                AccountBlock::Field { label, .. }
                | AccountBlock::Points { label, .. }
                | AccountBlock::Badges { label, .. } => *label,
            })
            .collect()
    }
}

/// One labeled row of the purchase detail list.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
}

impl DetailRow {
    fn new(label: &'static str, value: Option<String>) -> Self {
        let value = value
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| PLACEHOLDER.to_string());
        Self { label, value }
    }
}

/// The fixed seven rows, in display order.
pub fn purchase_rows(details: &PurchaseDetails) -> Vec<DetailRow> {
    vec![
        DetailRow::new("Account Id", details.account_id.map(|v| v.to_string())),
        DetailRow::new("Restaurant Id", details.restaurant_id.map(|v| v.to_string())),
        DetailRow::new("Purchase Number", details.purchase_number.clone()),
        DetailRow::new("Total Amount", details.total_amount.as_ref().map(format_number)),
        DetailRow::new("Currency", details.currency.clone()),
        DetailRow::new("Notes", details.notes.clone()),
        DetailRow::new("Description", details.description.clone()),
    ]
}

/// Format a JSON number the way a browser prints it: integral floats lose the `.0`,
/// magnitudes from 1e21 up or below 1e-6 switch to exponent form (`1e+21`, `1e-7`).
pub fn format_number(number: &serde_json::Number) -> String {
    if number.is_i64() || number.is_u64() {
        return number.to_string();
    }
    match number.as_f64() {
        Some(value) if value.is_finite() => {
            let magnitude = value.abs();
            if magnitude != 0.0 && !(1e-6..1e21).contains(&magnitude) {
                exponent_form(value)
            } else {
                format!("{}", value)
            }
        }
        _ => number.to_string(),
    }
}

fn exponent_form(value: f64) -> String {
    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// What a modal's content region currently shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ModalContent {
    #[default]
    Empty,
    Loading(String),
    /// Neutral message (nothing to show, details unavailable)
    Notice(String),
    Error(String),
    Account(AccountView),
    Purchase(Vec<DetailRow>),
}

impl ModalContent {
    pub fn account_missing() -> Self {
        Self::Notice(ACCOUNT_MISSING_MESSAGE.to_string())
    }

    pub fn account_loading() -> Self {
        Self::Loading(ACCOUNT_LOADING_MESSAGE.to_string())
    }

    pub fn purchase_loading() -> Self {
        Self::Loading(PURCHASE_LOADING_MESSAGE.to_string())
    }

    /// Content for a finished account fetch. Any failure collapses to one message.
    pub fn from_account_result(result: &Result<AccountSummary, ApiError>) -> Self {
        match result {
            Ok(account) => Self::Account(AccountView::from_account(account)),
            Err(_) => Self::Error(ACCOUNT_ERROR_MESSAGE.to_string()),
        }
    }

    /// Content for a finished purchase fetch. Any failure collapses to one message.
    pub fn from_purchase_result(result: &Result<PurchaseDetails, ApiError>) -> Self {
        match result {
            Ok(details) => Self::Purchase(purchase_rows(details)),
            Err(_) => Self::Notice(PURCHASE_UNAVAILABLE_MESSAGE.to_string()),
        }
    }
}
